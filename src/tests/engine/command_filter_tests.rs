    use super::*;

    fn labels(entries: &[&CommandEntry]) -> Vec<&'static str> {
        entries.iter().map(|e| e.label).collect()
    }

    #[test]
    fn empty_query_returns_the_whole_catalog_in_order() {
        let all = filter_commands(&COMMAND_CATALOG, "");
        assert_eq!(all.len(), COMMAND_CATALOG.len());
        assert_eq!(
            labels(&all),
            vec![
                "Dashboard",
                "New Deployment",
                "System Health",
                "Server Logs",
                "Task Board",
                "Settings"
            ]
        );
    }

    #[test]
    fn matches_case_insensitive_substrings() {
        assert_eq!(labels(&filter_commands(&COMMAND_CATALOG, "log")), vec!["Server Logs"]);
        assert_eq!(labels(&filter_commands(&COMMAND_CATALOG, "LOG")), vec!["Server Logs"]);
        assert_eq!(
            labels(&filter_commands(&COMMAND_CATALOG, "s")),
            vec!["Dashboard", "System Health", "Server Logs", "Task Board", "Settings"]
        );
        assert!(filter_commands(&COMMAND_CATALOG, "zzz").is_empty());
    }

    #[test]
    fn entries_link_to_their_views() {
        let health = COMMAND_CATALOG.iter().find(|e| e.id == "health").unwrap();
        assert_eq!(health.target, ViewId::Infrastructure);
        assert_eq!(health.href(), "#infrastructure");
        assert_eq!(health.icon, Icon::for_view(ViewId::Infrastructure));
    }

    #[test]
    fn remount_keeps_a_single_binding() {
        let mut shortcuts = Shortcuts::default();
        let mut palette = CommandFilter::default();

        palette.mount(&mut shortcuts);
        palette.mount(&mut shortcuts);
        assert_eq!(shortcuts.bound(PALETTE_CHORD), 1);

        palette.unmount(&mut shortcuts);
        assert_eq!(shortcuts.bound(PALETTE_CHORD), 0);
        assert!(!palette.is_mounted());

        for _ in 0..3 {
            let mut fresh = CommandFilter::default();
            fresh.mount(&mut shortcuts);
            fresh.unmount(&mut shortcuts);
        }
        assert!(shortcuts.is_empty());
    }

    #[test]
    fn selection_wraps_within_results() {
        let mut palette = CommandFilter::default();
        palette.open();
        palette.move_up();
        assert_eq!(palette.selected_entry().unwrap().label, "Settings");
        palette.move_down();
        assert_eq!(palette.selected_entry().unwrap().label, "Dashboard");

        palette.set_query("deploy");
        assert_eq!(palette.selected(), 0);
        palette.move_down();
        assert_eq!(palette.selected_entry().unwrap().label, "New Deployment");
    }

    #[test]
    fn selecting_clears_the_query_and_closes() {
        let mut palette = CommandFilter::default();
        palette.toggle();
        assert!(palette.is_open());
        palette.set_query("task");

        let entry = palette.selected_entry().unwrap();
        let target = palette.select(entry);
        assert_eq!(target, ViewId::Kanban);
        assert_eq!(palette.query(), "");
        assert!(!palette.is_open());
    }

    #[test]
    fn no_match_has_no_selection() {
        let mut palette = CommandFilter::default();
        palette.set_query("kubernetes");
        assert!(palette.results().is_empty());
        assert!(palette.selected_entry().is_none());
        palette.move_down();
        assert_eq!(palette.selected(), 0);
    }
