use chart_gesture::core::{AffineTransform, Point};
use proptest::prelude::*;

fn transform_strategy() -> impl Strategy<Value = AffineTransform> {
    (0.01f64..100.0, -10_000.0f64..10_000.0, -10_000.0f64..10_000.0)
        .prop_map(|(s, x, y)| AffineTransform::new(s, x, y).expect("valid generated transform"))
}

fn extreme_transform_strategy() -> impl Strategy<Value = AffineTransform> {
    let scale = prop_oneof![
        0.01f64..100.0,
        AffineTransform::MIN_SCALE..1e-200,
        1e200f64..AffineTransform::MAX_SCALE,
    ];
    (scale, -10_000.0f64..10_000.0, -10_000.0f64..10_000.0)
        .prop_map(|(s, x, y)| AffineTransform::new(s, x, y).expect("valid generated transform"))
}

fn scale_in_range(t: AffineTransform) -> bool {
    (AffineTransform::MIN_SCALE..=AffineTransform::MAX_SCALE).contains(&t.scale())
}

proptest! {
    #[test]
    fn composition_keeps_scale_in_range_property(
        a in extreme_transform_strategy(),
        b in extreme_transform_strategy()
    ) {
        prop_assert!(scale_in_range(a.compose(b)));
        prop_assert!(scale_in_range(a.inverse()));
        prop_assert!(scale_in_range(a.compose(b).inverse()));
    }

    #[test]
    fn extreme_scale_inverse_property(t in extreme_transform_strategy()) {
        let product = t.compose(t.inverse());
        prop_assert!((product.scale() - 1.0).abs() <= 1e-9);
    }

    #[test]
    fn identity_is_neutral_property(t in extreme_transform_strategy()) {
        prop_assert_eq!(AffineTransform::IDENTITY.compose(t), t);
        prop_assert_eq!(t.compose(AffineTransform::IDENTITY), t);
    }

    #[test]
    fn compose_with_inverse_property(t in transform_strategy()) {
        let product = t.compose(t.inverse());
        prop_assert!((product.scale() - 1.0).abs() <= 1e-9);
        prop_assert!(product.translate().x.abs() <= 1e-6);
        prop_assert!(product.translate().y.abs() <= 1e-6);
    }

    #[test]
    fn composition_is_associative_property(
        a in transform_strategy(),
        b in transform_strategy(),
        c in transform_strategy()
    ) {
        let left = a.compose(b).compose(c);
        let right = a.compose(b.compose(c));
        let magnitude = |t: AffineTransform| t.translate().x.abs() + t.translate().y.abs();
        let spread = magnitude(a) + a.scale() * magnitude(b) + a.scale() * b.scale() * magnitude(c);
        let tolerance = 1e-9 * (1.0 + spread);
        prop_assert!((left.scale() - right.scale()).abs() <= 1e-9 * left.scale());
        prop_assert!((left.translate().x - right.translate().x).abs() <= tolerance);
        prop_assert!((left.translate().y - right.translate().y).abs() <= tolerance);
    }

    #[test]
    fn screen_data_round_trip_property(
        t in transform_strategy(),
        x in -1_000.0f64..1_000.0,
        y in -1_000.0f64..1_000.0
    ) {
        let data = Point::new(x, y);
        let recovered = t.apply_inverse(t.apply(data));
        prop_assert!((recovered.x - x).abs() <= 1e-6);
        prop_assert!((recovered.y - y).abs() <= 1e-6);
    }
}
