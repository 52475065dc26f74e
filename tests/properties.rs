use approx::assert_abs_diff_eq;
use hamilton::{Quaternion, Vector3};

const TOL: f64 = 1e-9;

fn q(w: f64, x: f64, y: f64, z: f64) -> Quaternion<f64> {
    Quaternion::new(w, x, y, z)
}

fn samples() -> Vec<Quaternion<f64>> {
    vec![
        q(1.0, 2.0, 3.0, 4.0),
        q(4.0, 3.0, 2.0, 1.0),
        q(-0.25, 0.0, 7.5, -1.0),
        q(1e-3, -2e-3, 5e-4, 1e-3),
        q(0.0, 0.0, 0.0, 12.0),
    ]
}

// ── Normalization ────────────────────────────────────────────────────

#[test]
fn normalize_yields_unit_norm() {
    for mut p in samples() {
        p.normalize();
        assert!((p.norm() - 1.0).abs() < TOL, "norm of {} is {}", p, p.norm());
    }
}

#[test]
fn normalize_is_idempotent() {
    for p in samples() {
        let once = p.normalized();
        let twice = once.normalized();
        assert_abs_diff_eq!(once, twice, epsilon = TOL);
    }
}

// ── Multiplication ───────────────────────────────────────────────────

#[test]
fn product_with_inverse_is_identity() {
    for p in samples() {
        assert_abs_diff_eq!(p * p.inverse(), Quaternion::identity(), epsilon = TOL);
    }
}

#[test]
fn multiplication_does_not_commute() {
    let q1 = q(1.0, 0.0, 1.0, 0.0);
    let q2 = q(1.0, 1.0, 0.0, 0.0);
    assert_eq!(q1 * q2, q(1.0, 1.0, 1.0, -1.0));
    assert_ne!(q2 * q1, q(1.0, 1.0, 1.0, -1.0));
}

#[test]
fn multiply_then_undo_with_inverse() {
    let q1 = q(1.0, 2.0, 3.0, 4.0);
    let q2 = q(4.0, 3.0, 2.0, 1.0);
    let q3 = q1 * q2;
    assert_eq!(q3, q(-12.0, 6.0, 24.0, 12.0));
    assert_abs_diff_eq!(q3 * q2.inverse(), q1, epsilon = TOL);
}

// ── Rotation ─────────────────────────────────────────────────────────

#[test]
fn rotate_quarter_turn_about_y() {
    let h = core::f64::consts::FRAC_1_SQRT_2;
    let r = q(h, 0.0, h, 0.0).rotate(&q(0.0, 1.0, 0.0, 0.0));
    assert_abs_diff_eq!(r, q(0.0, 0.0, 0.0, -1.0), epsilon = 1e-12);
}

#[test]
fn rotation_preserves_length() {
    let v = q(0.0, 1.0, -2.0, 0.5);
    for p in samples() {
        let r = p.rotate(&v);
        assert!(r.w.abs() < TOL);
        assert!((r.norm() - v.norm()).abs() < TOL);
    }
}

// ── Euler angles ─────────────────────────────────────────────────────

#[test]
fn euler_roundtrip() {
    for (yaw, pitch, roll) in [(-90.0_f64, 0.0, 90.0), (36.0, 22.5, 36.0), (17.0, 87.0, 63.0)] {
        let (a, b, c) = Quaternion::from_euler(yaw, pitch, roll).to_euler();
        assert!((a - yaw).abs() < 0.001, "{} vs {}", a, yaw);
        assert!((b - pitch).abs() < 0.001, "{} vs {}", b, pitch);
        assert!((c - roll).abs() < 0.001, "{} vs {}", c, roll);
    }
}

#[test]
fn euler_pole_pins_roll_to_zero() {
    for pitch in [90.0, -90.0] {
        let (roll, p, _) = Quaternion::from_euler(25.0, pitch, 0.0).to_euler();
        assert_eq!(roll, 0.0);
        assert_eq!(p, pitch);
    }
}

// ── Between ──────────────────────────────────────────────────────────

fn assert_between_reaches(from: Vector3<f64>, target: Vector3<f64>) {
    let turn = Quaternion::between(&from, &target);
    let mut rotated = turn.rotate(&Quaternion::pure(from));
    rotated.normalize();
    let expected = Quaternion::pure(target).normalized();
    assert_abs_diff_eq!(rotated, expected, epsilon = 1e-4);
}

#[test]
fn between_rotates_source_onto_target() {
    let up = Vector3::new(0.0, 1.0, 0.0);
    for target in [
        Vector3::new(-1.0, 1.0, 1.0),
        Vector3::new(0.707, -4.707, 0.707),
        Vector3::new(0.56, -0.01, -1.5),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(1.0, 1e-6, 0.0),
        Vector3::new(0.0, 5.0, 0.0),
    ] {
        assert_between_reaches(up, target);
    }
}

#[test]
fn between_near_antiparallel() {
    let up = Vector3::new(0.0, 1.0, 0.0);
    assert_between_reaches(up, Vector3::new(0.0, -1.0, 0.0));
    assert_between_reaches(up, Vector3::new(1e-5, -1.0, 0.0));
    assert_between_reaches(up, Vector3::new(0.0, -3.0, -2e-5));

    let tilted = Vector3::new(0.3, -0.4, 2.0);
    assert_between_reaches(tilted, -tilted);
}

#[test]
fn between_unit_after_normalize() {
    let mut turn = Quaternion::between(&Vector3::new(2.0_f64, 0.0, 0.0), &Vector3::new(0.0, 0.0, 3.0));
    assert!((turn.norm() - 1.0).abs() > 0.1);
    turn.normalize();
    assert!((turn.norm() - 1.0).abs() < TOL);
    assert_abs_diff_eq!(turn.inverse(), turn.conjugate(), epsilon = TOL);
}
