    use super::*;

    #[test]
    fn dispatch_returns_every_binding_for_the_chord() {
        let mut s = Shortcuts::default();
        let a = s.register(Chord::ctrl('k'), ShortcutAction::TogglePalette);
        s.register(Chord::ctrl('k'), ShortcutAction::TogglePalette);

        assert_eq!(s.dispatch(Chord::ctrl('k')).len(), 2);
        assert!(s.dispatch(Chord::plain('k')).is_empty());

        assert!(s.release(a));
        assert!(!s.release(a));
        assert_eq!(s.bound(Chord::ctrl('k')), 1);
        assert_eq!(s.len(), 1);
    }
