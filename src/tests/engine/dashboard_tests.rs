    use super::*;
    use crate::deploy::SimulatedBackend;
    use crate::engine::command_filter::PALETTE_CHORD;

    fn mount_at(fragment: &str) -> Dashboard {
        mount_with(fragment, DashboardSettings::default())
    }

    fn mount_with(fragment: &str, settings: DashboardSettings) -> Dashboard {
        Dashboard::mount(
            settings,
            MemoryLocation::new(fragment),
            DeployTrigger::new(Box::new(SimulatedBackend::new(1_500))),
            Identity::guest(),
        )
    }

    fn cursor(dash: &Dashboard) -> usize {
        dash.stream().map(|p| p.cursor()).unwrap_or_default()
    }

    #[test]
    fn empty_fragment_lands_on_overview_and_logs_stream_to_the_end() {
        let mut dash = mount_at("");
        assert_eq!(dash.current_view(), ViewId::Dashboard);
        assert!(matches!(dash.panel(), Panel::Overview));

        assert!(dash.navigate(ViewId::Logs));
        assert_eq!(dash.current_view(), ViewId::Logs);
        assert_eq!(cursor(&dash), 0);

        dash.advance(12 * 800);
        let player = dash.stream().unwrap();
        assert_eq!(player.cursor(), LOG_FEED.len());
        assert!(player.is_finished());

        let events = dash.drain_events();
        assert!(events.contains(&DashboardEvent::StreamFinished { entries: 12 }));
        assert_eq!(
            events[0],
            DashboardEvent::RouteChanged {
                fragment: "dashboard".to_string(),
                known: true
            }
        );
    }

    #[test]
    fn leaving_and_returning_to_logs_starts_over() {
        let mut dash = mount_at("logs");
        dash.advance(3 * 800);
        assert_eq!(cursor(&dash), 3);

        dash.navigate(ViewId::Dashboard);
        assert!(dash.stream().is_none());
        dash.advance(5 * 800);

        dash.navigate(ViewId::Logs);
        assert_eq!(cursor(&dash), 0);
        dash.advance(800);
        assert_eq!(cursor(&dash), 1);
    }

    #[test]
    fn back_re_enters_the_previous_panel() {
        let mut dash = mount_at("");
        dash.navigate(ViewId::Logs);
        dash.advance(2 * 800);
        dash.navigate(ViewId::Kanban);

        assert!(dash.back());
        assert_eq!(dash.current_view(), ViewId::Logs);
        assert_eq!(cursor(&dash), 0);
        assert!(dash.forward());
        assert!(matches!(dash.panel(), Panel::Kanban));
        assert!(!dash.forward());
    }

    #[test]
    fn unknown_fragment_shows_not_found() {
        let mut dash = mount_at("#billing");
        assert_eq!(dash.current_view(), Route::Unknown("billing".to_string()));
        assert!(matches!(dash.panel(), Panel::NotFound(raw) if raw == "billing"));
        assert_eq!(dash.panel().view(), None);
        assert_eq!(
            dash.drain_events(),
            vec![DashboardEvent::RouteChanged {
                fragment: "billing".to_string(),
                known: false
            }]
        );
    }

    #[test]
    fn unmount_mid_stream_cancels_every_timer() {
        let mut dash = mount_at("logs");
        dash.advance(2 * 800);
        dash.show_notice("hello");

        dash.unmount();
        assert!(!dash.is_mounted());
        assert_eq!(dash.timers().pending(), 0);
        assert!(dash.shortcuts().is_empty());

        dash.advance(20 * 800);
        assert_eq!(cursor(&dash), 2);
        // Second unmount is a no-op.
        dash.unmount();
    }

    #[test]
    fn palette_binding_does_not_accumulate_across_navigation() {
        let mut dash = mount_at("");
        for v in ViewId::ALL {
            dash.navigate(v);
        }
        assert_eq!(dash.shortcuts().bound(PALETTE_CHORD), 1);

        assert!(dash.handle_chord(Chord::ctrl('k')));
        assert!(dash.palette().is_open());
        assert!(dash.handle_chord(Chord::ctrl('k')));
        assert!(!dash.palette().is_open());
        assert!(!dash.handle_chord(Chord::ctrl('j')));
    }

    #[test]
    fn selecting_a_palette_entry_navigates() {
        let mut dash = mount_at("");
        dash.open_palette();
        dash.palette_mut().set_query("log");

        assert!(dash.select_palette_entry());
        assert_eq!(dash.current_view(), ViewId::Logs);
        assert!(!dash.palette().is_open());
        assert_eq!(dash.palette().query(), "");

        dash.open_palette();
        dash.palette_mut().set_query("nothing matches this");
        assert!(!dash.select_palette_entry());
        assert_eq!(dash.current_view(), ViewId::Logs);
    }

    #[test]
    fn navigation_raises_a_loading_window() {
        let mut dash = mount_at("");
        dash.advance(800);
        assert!(!dash.is_loading());

        dash.navigate(ViewId::Settings);
        assert!(dash.is_loading());
        dash.advance(799);
        assert!(dash.is_loading());
        dash.advance(1);
        assert!(!dash.is_loading());

        let mut instant = mount_with(
            "",
            DashboardSettings {
                transition: 0,
                ..DashboardSettings::default()
            },
        );
        instant.navigate(ViewId::Kanban);
        assert!(!instant.is_loading());
    }

    #[test]
    fn simulated_deploy_raises_a_notice_that_expires() {
        let mut dash = mount_at("deployments");
        assert!(dash.submit_deploy(DeployRequest::for_repo("web")));
        assert_eq!(dash.deploy_in_flight().map(|r| r.repo_name.as_str()), Some("web"));

        dash.advance(1_499);
        assert!(!dash.notice().is_visible());
        dash.advance(1);
        assert_eq!(dash.notice().message(), Some(DEPLOY_SUCCESS_NOTICE));
        assert!(dash.deploy_in_flight().is_none());
        assert!(dash.status().unwrap().contains("https://web.srm-tech.com"));
        assert_eq!(dash.notice().expires_at(dash.timers()), Some(5_500));

        dash.advance(3_999);
        assert!(dash.notice().is_visible());
        dash.advance(1);
        assert!(!dash.notice().is_visible());

        let events = dash.drain_events();
        assert!(events.contains(&DashboardEvent::DeployQueued {
            repo: "web".to_string(),
            url: "https://web.srm-tech.com".to_string()
        }));
        assert_eq!(events.last(), Some(&DashboardEvent::NoticeHidden));
    }

    #[test]
    fn deploy_rejects_blank_repo_and_overlapping_requests() {
        let mut dash = mount_at("deployments");
        assert!(!dash.submit_deploy(DeployRequest::for_repo("   ")));
        assert_eq!(dash.error(), Some("Please enter a Git Repository name"));

        assert!(dash.submit_deploy(DeployRequest::for_repo("api")));
        assert_eq!(dash.error(), None);
        assert!(!dash.submit_deploy(DeployRequest::for_repo("web")));
        assert_eq!(dash.error(), Some("a deployment is already in progress"));
    }

    #[test]
    fn export_writes_the_lines_shown_so_far() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exports/logs.txt");

        let mut dash = mount_at("");
        assert!(!dash.export_logs(&path));

        dash.navigate(ViewId::Logs);
        dash.advance(2 * 800);
        assert!(dash.export_logs(&path));

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("14:05:22 [INFO] Starting deployment"));
        assert!(dash.status().unwrap().starts_with("exported 2 lines"));
    }

    #[test]
    fn unmounted_dashboard_ignores_navigation_and_deploys() {
        let mut dash = mount_at("logs");
        dash.advance(3 * 800);
        dash.unmount();

        assert!(!dash.navigate(ViewId::Kanban));
        assert!(!dash.back());
        assert!(!dash.forward());
        assert!(!dash.replay_logs());
        assert_eq!(dash.current_view(), ViewId::Logs);

        dash.advance(3 * 800);
        assert_eq!(cursor(&dash), 3);
        assert_eq!(dash.timers().pending(), 0);

        assert!(!dash.submit_deploy(DeployRequest::for_repo("web")));
        dash.show_notice("late");
        dash.advance(1_500);
        assert!(!dash.notice().is_visible());
        assert_eq!(dash.timers().pending(), 0);
    }

    #[test]
    fn deploy_in_flight_at_unmount_never_raises_a_notice() {
        let mut dash = mount_at("deployments");
        assert!(dash.submit_deploy(DeployRequest::for_repo("web")));
        dash.unmount();

        dash.advance(2_000);
        assert!(!dash.notice().is_visible());
        assert_eq!(dash.timers().pending(), 0);
    }
