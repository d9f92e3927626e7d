use approx::assert_relative_eq;
use proptest::prelude::*;

use tincan_shapes::{
    BoxKind, CylinderKind, CylinderOptimizer, RectangularBoxOptimizer, compare_shapes,
};

fn volume() -> impl Strategy<Value = f64> {
    prop_oneof![1e-3..1.0, 1.0..1e3, 1e3..1e7]
}

proptest! {
    #[test]
    fn closed_cylinder_height_is_its_diameter(v in volume()) {
        let opt = CylinderOptimizer::new(v, CylinderKind::Closed).unwrap();
        let s = opt.analytical_solution();

        prop_assert!((s.height - 2.0 * s.radius).abs() <= 1e-6 * s.radius.max(1.0));
        prop_assert!(opt.verify_volume(s.radius, s.height));
    }

    #[test]
    fn open_cylinder_height_is_its_radius(v in volume()) {
        let opt = CylinderOptimizer::new(v, CylinderKind::Open).unwrap();
        let s = opt.analytical_solution();

        prop_assert!((s.height - s.radius).abs() <= 1e-6 * s.radius.max(1.0));
        prop_assert!(opt.verify_volume(s.radius, s.height));
    }

    #[test]
    fn open_box_base_is_twice_its_height(v in volume()) {
        let opt = RectangularBoxOptimizer::new(v, BoxKind::OpenTop).unwrap();
        let s = opt.analytical_solution();

        prop_assert_eq!(s.length, s.width);
        prop_assert!((s.length - 2.0 * s.height).abs() <= 1e-6 * s.height.max(1.0));
        prop_assert!(opt.verify_volume(s.length, s.width, s.height));
    }

    #[test]
    fn closed_box_is_a_cube(v in volume()) {
        let opt = RectangularBoxOptimizer::new(v, BoxKind::Closed).unwrap();
        let s = opt.analytical_solution();

        prop_assert_eq!(s.length, s.width);
        prop_assert_eq!(s.length, s.height);
        prop_assert!(opt.verify_volume(s.length, s.width, s.height));
    }

    #[test]
    fn comparison_ratios_are_fixed(v in volume()) {
        let comparison = compare_shapes(v).unwrap();
        let ratios: Vec<f64> = comparison.iter().map(|(_, r)| r.dimensions_ratio).collect();

        for (ratio, expected) in ratios.into_iter().zip([2.0, 1.0, 2.0, 1.0]) {
            prop_assert!((ratio - expected).abs() <= 1e-6);
        }
    }

    #[test]
    fn analytical_optimum_is_never_beaten_on_the_constraint(v in volume(), scale in 0.2..5.0_f64) {
        let opt = CylinderOptimizer::new(v, CylinderKind::Closed).unwrap();
        let best = opt.analytical_solution();

        let r = best.radius * scale;
        let h = v / (std::f64::consts::PI * r * r);

        prop_assert!(opt.surface_area_for_dimensions(r, h) >= best.surface_area * (1.0 - 1e-12));
    }
}

#[test]
fn non_positive_volumes_are_rejected() {
    for v in [0.0, -100.0] {
        assert!(CylinderOptimizer::new(v, CylinderKind::Closed).is_err());
        assert!(CylinderOptimizer::new(v, CylinderKind::Open).is_err());
        assert!(RectangularBoxOptimizer::new(v, BoxKind::OpenTop).is_err());
        assert!(RectangularBoxOptimizer::new(v, BoxKind::Closed).is_err());
        assert!(compare_shapes(v).is_err());
    }
}

#[test]
fn solutions_convert_to_ordered_tuples() {
    let cylinder = CylinderOptimizer::new(1000.0, CylinderKind::Closed).unwrap();
    let (r, h, s) = cylinder.analytical_solution().into();
    assert_relative_eq!(h, 2.0 * r);
    assert_relative_eq!(s, 553.58, epsilon = 1e-2);

    let rect_box = RectangularBoxOptimizer::new(1000.0, BoxKind::Closed).unwrap();
    let (l, w, h, s) = rect_box.analytical_solution().into();
    assert_relative_eq!(l, 10.0, max_relative = 1e-12);
    assert_relative_eq!(w, 10.0, max_relative = 1e-12);
    assert_relative_eq!(h, 10.0, max_relative = 1e-12);
    assert_relative_eq!(s, 600.0, max_relative = 1e-12);
}
