use approx::assert_abs_diff_eq;
use cubic_segments::{CubicSegment, Curve};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

#[test]
fn test_hermite_reproduces_endpoints() {
    let mut rng = rng();
    for _ in 0..100 {
        let x0 = rng.gen_range(-1.0..1.0);
        let x1 = x0 + rng.gen_range(0.01..2.0);
        let y0 = rng.gen_range(-10.0..10.0);
        let y1 = rng.gen_range(-10.0..10.0);
        let g0 = rng.gen_range(-5.0..5.0);
        let g1 = rng.gen_range(-5.0..5.0);

        let s = CubicSegment::from_hermite(x0, x1, y0, y1, g0, g1);
        let grad = s.derivative();
        assert_abs_diff_eq!(s.evaluate(x0), y0, epsilon = 1e-6);
        assert_abs_diff_eq!(s.evaluate(x1), y1, epsilon = 1e-6);
        assert_abs_diff_eq!(grad.evaluate(x0), g0, epsilon = 1e-6);
        assert_abs_diff_eq!(grad.evaluate(x1), g1, epsilon = 1e-6);
    }
}

#[test]
fn test_derivative_matches_finite_difference() {
    let mut rng = rng();
    let x0 = rng.gen_range(-1.0..1.0);
    let coefficients = [
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
    ];
    let s = CubicSegment::new(x0, x0 + 2.0, coefficients);
    let grad = s.derivative();

    for _ in 0..100 {
        let x = rng.gen_range(x0..x0 + 2.0);
        let dx = 1e-10;
        let approx_grad = (s.evaluate(x + dx) - s.evaluate(x)) / dx;

        // Just ballpark correct
        assert_abs_diff_eq!(grad.evaluate(x), approx_grad, epsilon = 1e-4);
        assert_abs_diff_eq!(s.gradient(x), grad.evaluate(x), epsilon = 1e-9);
    }
}

#[test]
fn test_adjacent_windows_join_smoothly() {
    let mut rng = rng();
    for r in 0..1000 {
        let monotonic = r % 2 == 1;

        let mut x = [0.0; 5];
        x[0] = rng.gen_range(-1.0..1.0);
        for i in 1..5 {
            x[i] = x[i - 1] + rng.gen_range(1e-10..2.0);
        }
        let y: [f64; 5] = std::array::from_fn(|_| rng.gen_range(-10.0..10.0) - 7.5);

        let (ax, ay) = ([x[0], x[1], x[2], x[3]], [y[0], y[1], y[2], y[3]]);
        let (bx, by) = ([x[1], x[2], x[3], x[4]], [y[1], y[2], y[3], y[4]]);
        let a = CubicSegment::from_smooth_window(ax, ay, monotonic);
        let b = CubicSegment::from_smooth_window(bx, by, monotonic);

        // The points agree
        assert_abs_diff_eq!(a.evaluate(x[1]), y[1], epsilon = 1e-6);
        assert_abs_diff_eq!(a.evaluate(x[2]), y[2], epsilon = 1e-6);
        assert_abs_diff_eq!(b.evaluate(x[2]), y[2], epsilon = 1e-6);
        assert_abs_diff_eq!(b.evaluate(x[3]), y[3], epsilon = 1e-6);

        // Gradients agree at the shared point
        let (left, right) = (a.derivative(), b.derivative());
        assert_abs_diff_eq!(left.evaluate(x[2]), right.evaluate(x[2]), epsilon = 1e-6);
    }
}

#[test]
fn test_monotonic_segments_never_overshoot() {
    let mut rng = rng();
    let dt = 1e-3;
    for _ in 0..500 {
        let mut x = [0.0; 4];
        x[0] = rng.gen_range(-1.0..1.0);
        for i in 1..4 {
            x[i] = x[i - 1] + rng.gen_range(1e-10..2.0);
        }
        let y: [f64; 4] = std::array::from_fn(|_| rng.gen_range(-10.0..10.0));
        let s = CubicSegment::from_smooth_window(x, y, true);

        if y[1] >= y[2] {
            let mut min = s.evaluate(x[1]);
            let mut t = x[1];
            while t <= x[2] {
                let v = s.evaluate(t);
                assert!(v <= min + 1e-6, "rose from {} to {} at {}", min, v, t);
                min = min.min(v);
                t += dt;
            }
        }
        if y[1] <= y[2] {
            let mut max = s.evaluate(x[1]);
            let mut t = x[1];
            while t <= x[2] {
                let v = s.evaluate(t);
                assert!(v >= max - 1e-6, "fell from {} to {} at {}", max, v, t);
                max = max.max(v);
                t += dt;
            }
        }
    }
}

#[test]
fn test_smooth_segments_can_overshoot() {
    let xs = [0.0, 1.0, 2.0, 3.0];
    let smooth = CubicSegment::from_smooth_window(xs, [-3.0, 0.0, 1.0, -2.0], false);
    let peak = (0..=100)
        .map(|i| smooth.evaluate(1.0 + i as f64 / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);

    // A step between two plateaus stays inside the step
    let monotonic = CubicSegment::from_smooth_window(xs, [0.0, 0.0, 1.0, 1.0], true);
    for i in 0..=100 {
        let v = monotonic.evaluate(1.0 + i as f64 / 100.0);
        assert!((-1e-12..=1.0 + 1e-12).contains(&v));
    }
}
