mod tests {
    use myrtio_pixel_animations::{
        Animation, BLACK, Duration, OutputDriver, PixelFrame, Rgbw, SpinningAnimation, Surface,
        rgbw,
    };

    const RED: Rgbw = rgbw(128, 0, 0, 0);

    struct NullDriver;

    impl OutputDriver for NullDriver {
        fn write(&mut self, _colors: &[Rgbw]) {}
    }

    fn lit_pixels(frame: &PixelFrame<8, NullDriver>) -> usize {
        frame.pixels().iter().filter(|&&p| p != BLACK).count()
    }

    #[test]
    fn test_wait_is_cycle_divided_by_pixels() {
        let mut frame = PixelFrame::<8, _>::new(NullDriver);
        let mut spinner =
            SpinningAnimation::new(RED).with_cycle_duration(Duration::from_secs(8));

        spinner.reset(&mut frame);

        assert_eq!(spinner.wait(), Duration::from_secs(1));
        assert_eq!(spinner.current_pixel(), 0);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut frame = PixelFrame::<8, _>::new(NullDriver);
        let mut spinner =
            SpinningAnimation::new(RED).with_cycle_duration(Duration::from_secs(8));
        spinner.reset(&mut frame);

        for step in 1..=8 {
            spinner.tick(&mut frame, Duration::from_secs(1));
            assert_eq!(spinner.current_pixel(), step % 8);
            assert_eq!(lit_pixels(&frame), 1);
            assert_eq!(frame.get(step % 8), Some(RED));
        }

        assert_eq!(spinner.current_pixel(), 0);
    }

    #[test]
    fn test_draw_waits_for_timeout() {
        let mut frame = PixelFrame::<8, _>::new(NullDriver);
        let mut spinner =
            SpinningAnimation::new(RED).with_cycle_duration(Duration::from_secs(8));
        spinner.reset(&mut frame);

        spinner.tick(&mut frame, Duration::from_millis(600));
        assert_eq!(spinner.current_pixel(), 0);
        assert_eq!(lit_pixels(&frame), 0);

        spinner.tick(&mut frame, Duration::from_millis(400));
        assert_eq!(spinner.current_pixel(), 1);
        assert_eq!(lit_pixels(&frame), 1);
    }

    #[test]
    fn test_coarse_tick_steps_once() {
        let mut frame = PixelFrame::<8, _>::new(NullDriver);
        let mut spinner =
            SpinningAnimation::new(RED).with_cycle_duration(Duration::from_secs(8));
        spinner.reset(&mut frame);

        spinner.tick(&mut frame, Duration::from_secs(5));
        assert_eq!(spinner.current_pixel(), 1);

        // The countdown was re-armed, a zero-length frame does nothing
        spinner.tick(&mut frame, Duration::from_ticks(0));
        assert_eq!(spinner.current_pixel(), 1);
    }

    #[test]
    fn test_draw_ignores_delta() {
        let mut frame = PixelFrame::<8, _>::new(NullDriver);
        let mut spinner =
            SpinningAnimation::new(RED).with_cycle_duration(Duration::from_secs(8));
        spinner.reset(&mut frame);

        spinner.draw(&mut frame, Duration::from_secs(100));
        assert_eq!(spinner.current_pixel(), 0);
    }

    #[test]
    fn test_reset_restarts_from_first_pixel() {
        let mut frame = PixelFrame::<8, _>::new(NullDriver);
        let mut spinner = SpinningAnimation::new(RED);
        spinner.reset(&mut frame);

        for _ in 0..3 {
            spinner.tick(&mut frame, Duration::from_millis(125));
        }
        assert_eq!(spinner.current_pixel(), 3);

        spinner.reset(&mut frame);
        assert_eq!(spinner.current_pixel(), 0);
    }

    #[test]
    fn test_reset_drops_previous_frame() {
        let mut frame = PixelFrame::<8, _>::new(NullDriver);
        frame.pixels_mut().fill(rgbw(50, 20, 0, 0));

        let mut spinner = SpinningAnimation::new(RED);
        spinner.reset(&mut frame);
        assert_eq!(lit_pixels(&frame), 0);

        spinner.tick(&mut frame, Duration::from_millis(125));
        assert_eq!(lit_pixels(&frame), 1);
        assert_eq!(frame.get(1), Some(RED));
    }
}
