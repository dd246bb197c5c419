    use super::*;
    use crate::fixtures::LOG_FEED;

    fn run_for(player: &mut StreamPlayer, timers: &mut Timers, ms: Millis) {
        let until = timers.now() + ms;
        while let Some(f) = timers.next_due(until) {
            player.tick(timers, f.handle);
        }
        timers.settle(until);
    }

    #[test]
    fn partial_run_shows_a_prefix() {
        let mut timers = Timers::new();
        let mut player = StreamPlayer::new(&LOG_FEED, 800);
        player.start(&mut timers);
        assert_eq!(player.phase(), StreamPhase::Streaming);
        assert_eq!(player.cursor(), 0);

        run_for(&mut player, &mut timers, 5 * 800);
        assert_eq!(player.cursor(), 5);
        assert_eq!(player.displayed(), &LOG_FEED[..5]);
        assert!(!player.is_finished());

        run_for(&mut player, &mut timers, 799);
        assert_eq!(player.cursor(), 5);
    }

    #[test]
    fn full_run_finishes_and_stops_ticking() {
        let mut timers = Timers::new();
        let mut player = StreamPlayer::new(&LOG_FEED, 800);
        player.start(&mut timers);

        run_for(&mut player, &mut timers, 12 * 800);
        assert!(player.is_finished());
        assert_eq!(player.cursor(), LOG_FEED.len());
        assert_eq!(player.timer(), None);
        assert_eq!(timers.pending(), 0);

        run_for(&mut player, &mut timers, 10 * 800);
        assert_eq!(player.cursor(), LOG_FEED.len());
    }

    #[test]
    fn stop_cancels_mid_stream() {
        let mut timers = Timers::new();
        let mut player = StreamPlayer::new(&LOG_FEED, 800);
        player.start(&mut timers);
        run_for(&mut player, &mut timers, 3 * 800);

        player.stop(&mut timers);
        assert_eq!(timers.pending(), 0);
        assert_eq!(player.phase(), StreamPhase::Idle);
        run_for(&mut player, &mut timers, 5 * 800);
        assert_eq!(player.cursor(), 3);
    }

    #[test]
    fn stop_after_the_last_entry_stays_finished() {
        let mut timers = Timers::new();
        let mut player = StreamPlayer::new(&LOG_FEED, 800);
        player.start(&mut timers);
        run_for(&mut player, &mut timers, 12 * 800);

        player.stop(&mut timers);
        assert_eq!(player.phase(), StreamPhase::Finished);
        assert_eq!(player.cursor(), LOG_FEED.len());
    }

    #[test]
    fn replay_restarts_from_empty() {
        let mut timers = Timers::new();
        let mut player = StreamPlayer::new(&LOG_FEED, 800);
        player.start(&mut timers);
        run_for(&mut player, &mut timers, 12 * 800);

        player.replay(&mut timers);
        assert_eq!(player.cursor(), 0);
        assert_eq!(player.phase(), StreamPhase::Streaming);
        assert_eq!(timers.pending(), 1);
        run_for(&mut player, &mut timers, 800);
        assert_eq!(player.cursor(), 1);
    }

    #[test]
    fn foreign_handles_are_ignored() {
        let mut timers = Timers::new();
        let other = timers.schedule_once(1, TimerPurpose::NoticeExpiry);
        let mut player = StreamPlayer::new(&LOG_FEED, 800);
        player.start(&mut timers);

        assert!(!player.tick(&mut timers, other));
        assert_eq!(player.cursor(), 0);
    }

    #[test]
    fn empty_fixture_finishes_immediately() {
        static EMPTY: [LogEntry; 0] = [];
        let mut timers = Timers::new();
        let mut player = StreamPlayer::new(&EMPTY, 800);
        player.start(&mut timers);
        assert!(player.is_finished());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn viewport_keeps_the_newest_entry_visible() {
        let mut timers = Timers::new();
        let mut player = StreamPlayer::new(&LOG_FEED, 800);
        player.resize_viewport(4);
        player.start(&mut timers);

        for n in 1..=LOG_FEED.len() {
            run_for(&mut player, &mut timers, 800);
            assert_eq!(player.cursor(), n);
            assert!(player.newest_visible(), "entry {} scrolled out", n);
        }
        assert_eq!(player.viewport().visible(LOG_FEED.len()), 8..12);
    }

    #[test]
    fn manual_scroll_survives_same_size_resize() {
        let mut timers = Timers::new();
        let mut player = StreamPlayer::new(&LOG_FEED, 800);
        player.resize_viewport(4);
        player.start(&mut timers);
        run_for(&mut player, &mut timers, 12 * 800);

        player.scroll_up();
        player.scroll_up();
        player.resize_viewport(4);
        assert_eq!(player.viewport().offset(), 6);
        assert!(!player.newest_visible());

        for _ in 0..10 {
            player.scroll_down();
        }
        assert_eq!(player.viewport().offset(), 8);
    }

    #[test]
    fn exported_lines_use_the_plain_format() {
        let mut timers = Timers::new();
        let mut player = StreamPlayer::new(&LOG_FEED, 800);
        player.start(&mut timers);
        run_for(&mut player, &mut timers, 2 * 800);

        assert_eq!(
            player.export_lines(),
            vec![
                "14:05:22 [INFO] Starting deployment process for commit #a1b2c3".to_string(),
                "14:05:23 [INFO] Docker container 'frontend-v2' stopped".to_string(),
            ]
        );
    }
