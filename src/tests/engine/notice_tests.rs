    use super::*;

    fn run_until(notice: &mut Notice, timers: &mut Timers, until: Millis) {
        while let Some(f) = timers.next_due(until) {
            notice.expire(f.handle);
        }
        timers.settle(until);
    }

    #[test]
    fn hides_after_its_duration() {
        let mut timers = Timers::new();
        let mut notice = Notice::new(4_000);
        notice.show(&mut timers, "Success! Cloud pipeline triggered.");
        assert_eq!(notice.message(), Some("Success! Cloud pipeline triggered."));

        run_until(&mut notice, &mut timers, 3_999);
        assert!(notice.is_visible());
        run_until(&mut notice, &mut timers, 4_000);
        assert!(!notice.is_visible());
        assert_eq!(notice.message(), None);
    }

    #[test]
    fn showing_again_extends_from_the_second_call() {
        let mut timers = Timers::new();
        let mut notice = Notice::new(4_000);
        notice.show(&mut timers, "first");

        run_until(&mut notice, &mut timers, 3_000);
        notice.show(&mut timers, "second");
        assert_eq!(notice.expires_at(&timers), Some(7_000));

        run_until(&mut notice, &mut timers, 6_999);
        assert_eq!(notice.message(), Some("second"));
        run_until(&mut notice, &mut timers, 7_000);
        assert!(!notice.is_visible());
    }

    #[test]
    fn dismiss_cancels_the_deadline() {
        let mut timers = Timers::new();
        let mut notice = Notice::new(4_000);
        notice.show(&mut timers, "hi");
        notice.dismiss(&mut timers);

        assert!(!notice.is_visible());
        assert_eq!(timers.pending(), 0);
        assert_eq!(notice.expires_at(&timers), None);
    }
