    use std::net::TcpListener;

    use super::*;

    #[test]
    fn skips_ports_with_a_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let taken = listener.local_addr().unwrap().port();
        assert!(in_use(taken));

        let found = find_free_port(taken).unwrap();
        assert!(found > taken);
        assert!(!in_use(found));
    }
