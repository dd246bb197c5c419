    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn empty_fragment_is_the_dashboard() {
        assert_eq!(Route::from_fragment(""), Route::View(ViewId::Dashboard));
        assert_eq!(Route::from_fragment("#"), Route::View(ViewId::Dashboard));
        assert_eq!(Route::from_fragment("  "), Route::View(ViewId::Dashboard));
    }

    #[test]
    fn every_view_round_trips_through_its_fragment() {
        for v in ViewId::ALL {
            assert_eq!(Route::from_fragment(v.fragment()), Route::View(v));
            assert_eq!(Route::from_fragment(&format!("#{}", v.fragment())), Route::View(v));
        }
    }

    #[test]
    fn unknown_fragments_are_kept_verbatim() {
        let r = Route::from_fragment("#billing");
        assert_eq!(r, Route::Unknown("billing".to_string()));
        assert_eq!(r.view(), None);
        assert_eq!(r.fragment(), "billing");
        // Mapping is case sensitive.
        assert!(matches!(Route::from_fragment("Logs"), Route::Unknown(_)));
    }

    #[test]
    fn mapping_is_idempotent() {
        for raw in ["", "logs", "#kanban", "nope"] {
            let once = Route::from_fragment(raw);
            let twice = Route::from_fragment(once.fragment());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn navigate_then_current_view_matches_for_all_views() {
        let mut router = FragmentRouter::new(MemoryLocation::default());
        for v in ViewId::ALL.into_iter().rev() {
            router.navigate_to(v);
            assert_eq!(router.current_view(), v);
        }
    }

    #[test]
    fn listeners_hear_every_change_and_nothing_after_unsubscribe() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut router = FragmentRouter::new(MemoryLocation::new("dashboard"));
        let sink = seen.clone();
        let sub = router.subscribe(move |r| sink.borrow_mut().push(r.clone()));

        assert!(router.navigate_to("#logs").is_some());
        // Same fragment: no change, no event.
        assert!(router.navigate_to("logs").is_none());
        assert!(router.navigate_to("mystery").is_some());
        assert_eq!(
            *seen.borrow(),
            vec![
                Route::View(ViewId::Logs),
                Route::Unknown("mystery".to_string())
            ]
        );

        assert!(router.unsubscribe(sub));
        router.navigate_to(ViewId::Settings);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn back_and_forward_walk_session_history() {
        let mut router = FragmentRouter::new(MemoryLocation::new(""));
        router.navigate_to(ViewId::Logs);
        router.navigate_to(ViewId::Kanban);

        assert_eq!(router.back(), Some(Route::View(ViewId::Logs)));
        assert_eq!(router.back(), Some(Route::View(ViewId::Dashboard)));
        assert_eq!(router.back(), None);
        assert_eq!(router.forward(), Some(Route::View(ViewId::Logs)));

        // A new navigation drops the forward entries.
        router.navigate_to(ViewId::Settings);
        assert_eq!(router.forward(), None);
        assert_eq!(router.back(), Some(Route::View(ViewId::Logs)));
        assert_eq!(router.back(), Some(Route::View(ViewId::Dashboard)));
        assert_eq!(router.back(), None);
    }
