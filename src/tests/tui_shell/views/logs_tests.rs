    use super::*;
    use crate::engine::Timers;
    use crate::fixtures::LOG_FEED;

    fn run_for(player: &mut StreamPlayer, timers: &mut Timers, ms: u64) {
        let until = timers.now() + ms;
        while let Some(f) = timers.next_due(until) {
            player.tick(timers, f.handle);
        }
        timers.settle(until);
    }

    #[test]
    fn cursor_marker_appears_only_once_the_feed_is_complete() {
        let mut timers = Timers::new();
        let mut player = StreamPlayer::new(&LOG_FEED, 800);
        assert!(!shows_cursor(&player));

        player.start(&mut timers);
        run_for(&mut player, &mut timers, 11 * 800);
        assert!(player.newest_visible());
        assert!(!shows_cursor(&player));

        run_for(&mut player, &mut timers, 800);
        assert!(shows_cursor(&player));

        player.resize_viewport(4);
        player.scroll_up();
        assert!(!shows_cursor(&player));
    }
