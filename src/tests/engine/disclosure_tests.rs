    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn starts_collapsed() {
        let d = HoverDisclosure::new();
        assert!(!d.is_expanded());
        assert_eq!(d.rail_width(), RAIL_COLLAPSED_WIDTH);
        assert_eq!(d.content_shift(), ContentShift::default());
    }

    #[test]
    fn follows_the_last_pointer_event() {
        let mut d = HoverDisclosure::new();
        d.pointer_enter();
        assert!(d.is_expanded());
        d.pointer_leave();
        assert!(!d.is_expanded());
        d.pointer_leave();
        assert!(!d.is_expanded());
        d.pointer_enter();
        d.pointer_enter();
        assert!(d.is_expanded());
    }

    #[test]
    fn expanded_rail_shifts_and_dims_content() {
        let mut d = HoverDisclosure::new();
        d.pointer_enter();
        assert_eq!(d.rail_width(), RAIL_EXPANDED_WIDTH);
        let shift = d.content_shift();
        assert_eq!(shift.offset, RAIL_EXPANDED_WIDTH - RAIL_COLLAPSED_WIDTH);
        assert!(shift.dimmed);
    }

    #[test]
    fn observers_only_hear_real_changes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut d = HoverDisclosure::new();
        let sink = seen.clone();
        let sub = d.subscribe(move |e| sink.borrow_mut().push(*e));

        d.pointer_leave();
        d.pointer_enter();
        d.pointer_enter();
        d.pointer_leave();
        assert_eq!(*seen.borrow(), vec![true, false]);

        assert!(d.unsubscribe(sub));
        d.pointer_enter();
        assert_eq!(seen.borrow().len(), 2);
    }
