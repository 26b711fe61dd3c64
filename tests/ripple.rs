mod tests {
    use myrtio_pixel_animations::{
        Animation, BLACK, Duration, Instant, OutputDriver, PixelStrip, RippleAnimation,
        RippleCurve, Rgbw, Strip, Surface, rgbw,
    };

    const LEDS: usize = 144;

    #[derive(Default)]
    struct CountingDriver {
        writes: usize,
    }

    impl OutputDriver for CountingDriver {
        fn write(&mut self, _colors: &[Rgbw]) {
            self.writes += 1;
        }
    }

    #[test]
    fn test_default_gradient() {
        let ripple = RippleAnimation::default();
        assert_eq!(ripple.colors().len(), 4);
        assert_eq!(ripple.curves().len(), 3);
        assert_eq!(ripple.curves()[1], RippleCurve::new(0.156, 0.8, 0.9));
    }

    #[test]
    fn test_shift_color_ends() {
        let ripple = RippleAnimation::default();
        assert_eq!(ripple.shift_color(0.0), ripple.colors()[0]);
        assert_eq!(ripple.shift_color(1.0), ripple.colors()[3]);
    }

    #[test]
    fn test_position_is_clamped() {
        let ripple = RippleAnimation::default();
        for m in [0.0, 17.5, 1_234.0, 98_765.4] {
            for p in 0..LEDS {
                let c = ripple.position(p, m);
                assert!((0.0..=1.0).contains(&c));
            }
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let ripple = RippleAnimation::default();
        let mut first = [BLACK; LEDS];
        let mut second = [BLACK; LEDS];

        ripple.render(12_345.0, &mut first);
        ripple.render(12_345.0, &mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn test_single_curve_peak() {
        // At m = s the time warp is zero, leaving sin(2π·p/(w·2·x_span))
        let colors = [rgbw(0, 0, 0, 0), rgbw(0, 0, 0, 200)];
        let ripple = RippleAnimation::new(&colors, &[RippleCurve::new(1.0, 1.0, 1.0)])
            .with_cycle_time(10.0)
            .with_x_span(2.0);

        // p = 0: sin(0) = 0
        assert_eq!(ripple.position(0, 10.0), 0.0);
        assert_eq!(ripple.color_at(0, 10.0), colors[0]);
        // p = 1: sin(π/2) = 1
        assert_eq!(ripple.position(1, 10.0), 1.0);
        assert_eq!(ripple.color_at(1, 10.0), colors[1]);
        // p = 3: sin(3π/2) = -1, clamped to 0
        assert_eq!(ripple.position(3, 10.0), 0.0);
    }

    #[test]
    fn test_position_averages_curves() {
        // s = 10 for both curves, so m = 5 gives t0 = -0.5 and a warp of
        // 2π·sin(-π), which is zero up to rounding
        let colors = [BLACK, rgbw(255, 255, 255, 255)];
        let curves = [RippleCurve::new(1.0, 1.0, 1.0), RippleCurve::new(2.0, 0.5, 1.0)];
        let ripple = RippleAnimation::new(&colors, &curves)
            .with_cycle_time(10.0)
            .with_x_span(2.0);

        // p = 1: (sin(π/2)·1 + sin(π/4)·0.5) / 2
        let expected = (1.0 + 0.5 * std::f64::consts::FRAC_1_SQRT_2) / 2.0;
        assert!((ripple.position(1, 5.0) - expected).abs() < 1e-9);

        // p = 2: (sin(π)·1 + sin(π/2)·0.5) / 2
        assert!((ripple.position(2, 5.0) - 0.25).abs() < 1e-9);
        assert_eq!(ripple.color_at(2, 5.0), rgbw(191, 191, 191, 191));
    }

    #[test]
    fn test_draw_uses_surface_clock() {
        let mut strip: PixelStrip<LEDS, CountingDriver> =
            PixelStrip::new(CountingDriver::default());
        let start = Instant::from_millis(0);
        strip.set_animation(RippleAnimation::default().into(), start);
        assert_eq!(strip.frame().driver().writes, 1);

        strip.draw(Instant::from_millis(12_345));

        let mut expected = [BLACK; LEDS];
        RippleAnimation::default().render(12_345.0, &mut expected);
        assert_eq!(strip.frame().pixels(), &expected[..]);
        assert_eq!(strip.frame().driver().writes, 2);
    }

    #[test]
    fn test_reset_clears_surface() {
        let mut strip: PixelStrip<LEDS, CountingDriver> =
            PixelStrip::new(CountingDriver::default());
        strip.frame_mut().pixels_mut().fill(rgbw(9, 9, 9, 9));

        let mut ripple = RippleAnimation::default();
        ripple.reset(strip.frame_mut());

        assert!(strip.frame().pixels().iter().all(|&p| p == BLACK));
        ripple.draw(strip.frame_mut(), Duration::from_millis(20));
    }

    #[test]
    #[should_panic(expected = "gradient colors")]
    fn test_single_color_is_rejected() {
        let _ = RippleAnimation::new(&[BLACK], &[RippleCurve::new(0.1, 1.0, 1.0)]);
    }

    #[test]
    #[should_panic(expected = "curves")]
    fn test_missing_curves_are_rejected() {
        let _ = RippleAnimation::new(&[BLACK, BLACK], &[]);
    }
}
