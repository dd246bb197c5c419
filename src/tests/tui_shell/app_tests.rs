    use super::*;

    #[test]
    fn header_clock_is_utc_and_zero_padded() {
        let now = clock_now();
        assert!(now.offset().is_utc());

        // 1970-01-01 07:08:09 UTC
        let at = OffsetDateTime::from_unix_timestamp(25_689).unwrap();
        assert_eq!(fmt_clock(at), "07:08:09");
        assert_eq!(fmt_clock(now).len(), 8);
    }
