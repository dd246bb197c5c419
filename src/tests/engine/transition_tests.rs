    use super::*;

    #[test]
    fn loading_ends_only_on_its_own_deadline() {
        let mut timers = Timers::new();
        let mut gate = TransitionGate::new(300);
        gate.begin(&mut timers);
        let stale = timers.schedule_once(300, TimerPurpose::TransitionEnd);
        assert!(gate.is_loading());

        // A second route change restarts the window.
        let first = timers.next_due(100);
        assert!(first.is_none());
        timers.settle(100);
        gate.begin(&mut timers);

        let mut finished_at = None;
        while let Some(f) = timers.next_due(1_000) {
            if gate.finish(f.handle) {
                finished_at = Some(f.at);
            }
        }
        assert_eq!(finished_at, Some(400));
        assert!(!gate.is_loading());
        assert!(!gate.finish(stale));
    }

    #[test]
    fn zero_duration_never_loads() {
        let mut timers = Timers::new();
        let mut gate = TransitionGate::new(0);
        gate.begin(&mut timers);
        assert!(!gate.is_loading());
        assert_eq!(timers.pending(), 0);
    }
