    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Tag {
        A,
        B,
    }

    fn drain(q: &mut TimerQueue<Tag>, until: Millis) -> Vec<(Millis, Tag)> {
        let mut out = Vec::new();
        while let Some(f) = q.next_due(until) {
            out.push((f.at, f.payload));
        }
        q.settle(until);
        out
    }

    #[test]
    fn one_shot_fires_once_at_its_deadline() {
        let mut q = TimerQueue::new();
        let h = q.schedule_once(100, Tag::A);
        assert_eq!(q.deadline(h), Some(100));

        assert!(drain(&mut q, 99).is_empty());
        assert_eq!(q.now(), 99);
        assert_eq!(drain(&mut q, 100), vec![(100, Tag::A)]);
        assert!(!q.is_pending(h));
        assert!(drain(&mut q, 1_000).is_empty());
    }

    #[test]
    fn repeating_timer_rearms_until_cancelled() {
        let mut q = TimerQueue::new();
        let h = q.schedule_repeating(800, Tag::A);

        let fired = drain(&mut q, 2_400);
        assert_eq!(fired, vec![(800, Tag::A), (1_600, Tag::A), (2_400, Tag::A)]);
        assert!(q.is_pending(h));

        assert!(q.cancel(h));
        assert!(!q.cancel(h));
        assert!(drain(&mut q, 10_000).is_empty());
    }

    #[test]
    fn due_timers_fire_in_deadline_then_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule_once(50, Tag::B);
        q.schedule_once(10, Tag::A);
        q.schedule_once(50, Tag::A);

        assert_eq!(
            drain(&mut q, 100),
            vec![(10, Tag::A), (50, Tag::B), (50, Tag::A)]
        );
    }

    #[test]
    fn clock_moves_to_each_deadline_as_it_fires() {
        let mut q = TimerQueue::new();
        q.schedule_once(30, Tag::A);

        let f = q.next_due(1_000).unwrap();
        assert_eq!(f.at, 30);
        assert_eq!(q.now(), 30);

        // Scheduled from inside the handler: measured from 30, not from 0.
        let h = q.schedule_once(30, Tag::B);
        assert_eq!(q.deadline(h), Some(60));
        assert_eq!(drain(&mut q, 1_000), vec![(60, Tag::B)]);
        assert_eq!(q.now(), 1_000);
    }

    #[test]
    fn zero_interval_repeat_is_clamped() {
        let mut q = TimerQueue::new();
        q.schedule_repeating(0, Tag::A);
        assert_eq!(drain(&mut q, 3).len(), 3);
    }

    #[test]
    fn one_shot_slot_ignores_stale_handles() {
        let mut timers = Timers::new();
        let mut slot = OneShot::default();

        slot.restart(&mut timers, 100, TimerPurpose::NoticeExpiry);
        let first = slot.handle().unwrap();
        slot.restart(&mut timers, 100, TimerPurpose::NoticeExpiry);
        let second = slot.handle().unwrap();

        assert_ne!(first, second);
        assert!(!timers.is_pending(first));
        assert_eq!(timers.pending(), 1);
        assert!(!slot.take_if(first));
        assert!(slot.take_if(second));
        assert_eq!(slot.handle(), None);
    }
