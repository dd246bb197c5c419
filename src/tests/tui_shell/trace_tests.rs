    use super::*;
    use crate::deploy::{DeployTrigger, SimulatedBackend};
    use crate::engine::{DashboardSettings, MemoryLocation, ViewId};
    use crate::session::Identity;

    fn read_events(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn records_a_session_as_numbered_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces/session.jsonl");

        let mut dash = Dashboard::mount(
            DashboardSettings::default(),
            MemoryLocation::new("logs"),
            DeployTrigger::new(Box::new(SimulatedBackend::new(10))),
            Identity::guest(),
        );
        let mut trace = SessionTrace::open(&path).unwrap();
        trace.session_start(&dash);

        dash.navigate(ViewId::Kanban);
        for ev in dash.drain_events() {
            trace.engine_event(&ev);
        }
        trace.user_action("goto:kanban");
        trace.engine_event(&DashboardEvent::DeployFailed {
            repo: "web".to_string(),
            error: "boom".to_string(),
        });
        trace.session_end("quit");

        let events = read_events(&path);
        let names: Vec<&str> = events.iter().map(|e| e["event"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            vec![
                "session_start",
                "route_changed",
                "route_changed",
                "user_action",
                "deploy_failed",
                "session_end"
            ]
        );
        for (i, e) in events.iter().enumerate() {
            assert_eq!(e["seq"], (i + 1) as u64);
        }
        assert_eq!(events[0]["payload"]["view"], "logs");
        assert_eq!(events[0]["payload"]["org"], "guest");

        let stats = &events[5]["payload"]["stats"];
        assert_eq!(stats["route_changes"], 2);
        assert_eq!(stats["user_actions"], 1);
        assert_eq!(stats["errors"], 1);
    }

    #[test]
    fn reopening_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.jsonl");
        SessionTrace::open(&path).unwrap().user_action("a");
        SessionTrace::open(&path).unwrap().user_action("b");
        assert_eq!(read_events(&path).len(), 2);
    }
