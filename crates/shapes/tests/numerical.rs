use approx::assert_relative_eq;

use tincan_shapes::{BoxKind, CylinderKind, CylinderOptimizer, RectangularBoxOptimizer};

const VOLUMES: [f64; 4] = [0.5, 10.0, 1000.0, 50_000.0];

#[test]
fn cylinders_match_analytical_optimum() {
    for v in VOLUMES {
        for kind in [CylinderKind::Closed, CylinderKind::Open] {
            let opt = CylinderOptimizer::new(v, kind).unwrap();
            let exact = opt.analytical_solution();
            let found = opt.numerical_solution().unwrap();

            assert_relative_eq!(found.radius, exact.radius, max_relative = 1e-3);
            assert_relative_eq!(found.height, exact.height, max_relative = 1e-2);
            assert_relative_eq!(found.surface_area, exact.surface_area, max_relative = 1e-3);
        }
    }
}

#[test]
fn boxes_match_analytical_optimum() {
    for v in VOLUMES {
        for kind in [BoxKind::OpenTop, BoxKind::Closed] {
            let opt = RectangularBoxOptimizer::new(v, kind).unwrap();
            let exact = opt.analytical_solution();
            let found = opt.numerical_solution().unwrap();

            assert_relative_eq!(found.length, exact.length, max_relative = 1e-2);
            assert_relative_eq!(found.width, exact.width, max_relative = 1e-2);
            assert_relative_eq!(found.height, exact.height, max_relative = 1e-2);
            assert_relative_eq!(found.surface_area, exact.surface_area, max_relative = 1e-3);
        }
    }
}

#[test]
fn numerical_solution_is_deterministic() {
    let opt = RectangularBoxOptimizer::new(1000.0, BoxKind::OpenTop).unwrap();

    assert_eq!(opt.numerical_solution().unwrap(), opt.numerical_solution().unwrap());
}
