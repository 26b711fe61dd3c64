mod tests {
    use myrtio_pixel_animations::{Duration, Timeout};

    #[test]
    fn test_disarmed_never_times_out() {
        let mut timeout = Timeout::new();
        assert!(!timeout.is_timed_out());
        timeout.tick(Duration::from_secs(60));
        assert!(!timeout.is_timed_out());
        assert_eq!(timeout.remaining(), None);
    }

    #[test]
    fn test_counts_down_to_zero() {
        let mut timeout = Timeout::new();
        timeout.arm(Duration::from_millis(100));

        timeout.tick(Duration::from_millis(60));
        assert!(!timeout.is_timed_out());
        assert_eq!(timeout.remaining(), Some(Duration::from_millis(40)));

        timeout.tick(Duration::from_millis(60));
        assert!(timeout.is_timed_out());
        assert_eq!(timeout.remaining(), Some(Duration::from_ticks(0)));
    }

    #[test]
    fn test_stays_timed_out_until_rearmed() {
        let mut timeout = Timeout::new();
        timeout.arm(Duration::from_millis(10));
        timeout.tick(Duration::from_millis(10));
        assert!(timeout.is_timed_out());

        timeout.tick(Duration::from_millis(10));
        assert!(timeout.is_timed_out());

        timeout.arm(Duration::from_millis(10));
        assert!(!timeout.is_timed_out());

        timeout.disarm();
        assert!(!timeout.is_timed_out());
    }

    #[test]
    fn test_zero_duration_times_out_immediately() {
        let mut timeout = Timeout::new();
        timeout.arm(Duration::from_ticks(0));
        assert!(timeout.is_timed_out());
    }
}
