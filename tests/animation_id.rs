mod tests {
    use myrtio_pixel_animations::{
        AnimationId, AnimationSlot, FireAnimation, RippleAnimation, SpinningAnimation, rgbw,
    };
    use rand::{SeedableRng, rngs::SmallRng};

    #[test]
    fn test_animation_id_from_raw() {
        assert_eq!(AnimationId::from_raw(0), Some(AnimationId::Fire));
        assert_eq!(AnimationId::from_raw(1), Some(AnimationId::Spinning));
        assert_eq!(AnimationId::from_raw(2), Some(AnimationId::Ripple));
        assert_eq!(AnimationId::from_raw(3), None);
    }

    #[test]
    fn test_animation_id_names() {
        for id in [AnimationId::Fire, AnimationId::Spinning, AnimationId::Ripple] {
            assert_eq!(AnimationId::parse_from_str(id.as_str()), Some(id));
        }
        assert_eq!(AnimationId::Ripple.as_str(), "ripple");
        assert_eq!(AnimationId::parse_from_str("aurora"), None);
    }

    #[test]
    fn test_slot_id() {
        let fire: AnimationSlot<8> = FireAnimation::new(SmallRng::seed_from_u64(3)).into();
        let spinning: AnimationSlot<8> = SpinningAnimation::new(rgbw(0, 0, 128, 0)).into();
        let ripple: AnimationSlot<8> = RippleAnimation::default().into();

        assert_eq!(fire.id(), AnimationId::Fire);
        assert_eq!(spinning.id(), AnimationId::Spinning);
        assert_eq!(ripple.id(), AnimationId::Ripple);
    }
}
