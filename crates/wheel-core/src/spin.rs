//! Spin planning: winner selection and the rotation that lands on it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::WheelConfig;
use crate::error::WheelError;
use crate::geometry::{FULL_TURN, normalize_angle, slice_angle};

/// Everything the renderer needs to animate one spin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinPlan {
    /// Index of the winning item.
    pub winner: usize,
    /// Clockwise rotation in `[0, 360)` that puts the winner under the pointer.
    pub stop_angle: f64,
    /// Absolute wheel rotation to animate to.
    pub rotation: f64,
    /// Transition length; the result is shown once it elapses.
    pub duration_ms: u32,
}

/// Picks a winner uniformly at random and computes where the wheel stops.
///
/// The returned rotation always moves forward from `current_rotation`: it
/// starts at the next full turn, adds `extra_rotations` turns, then the stop
/// angle.
#[allow(clippy::cast_precision_loss)]
pub fn plan_spin<R: Rng>(
    rng: &mut R,
    item_count: usize,
    current_rotation: f64,
    config: &WheelConfig,
) -> Result<SpinPlan, WheelError> {
    let span = slice_angle(item_count).ok_or(WheelError::NoItems)?;
    let winner = rng.random_range(0..item_count);

    let jitter = config.stop_jitter.clamp(0.0, WheelConfig::MAX_STOP_JITTER);
    let offset = if jitter > 0.0 {
        rng.random_range(-1.0_f64..=1.0) * jitter * span / 2.0
    } else {
        0.0
    };
    let target = (winner as f64 + 0.5) * span + offset;
    let stop_angle = normalize_angle(-target);

    let base = (current_rotation / FULL_TURN).ceil() * FULL_TURN;
    let rotation = base + f64::from(config.extra_rotations) * FULL_TURN + stop_angle;

    tracing::debug!(winner, stop_angle, rotation, "spin planned");

    Ok(SpinPlan {
        winner,
        stop_angle,
        rotation,
        duration_ms: config.spin_duration_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;
    use crate::geometry::index_at_pointer;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_plan_lands_on_winner() {
        let config = WheelConfig::for_variant(Variant::Polar);
        assert!(config.stop_jitter > 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for n in 1..=12 {
            let mut rotation = 0.0;
            for _ in 0..50 {
                let plan = plan_spin(&mut rng, n, rotation, &config).unwrap();

                assert!(plan.winner < n);
                assert!((0.0..360.0).contains(&plan.stop_angle));
                assert_eq!(index_at_pointer(plan.rotation, n), Some(plan.winner));
                assert!(plan.rotation >= rotation + 360.0 * f64::from(config.extra_rotations));
                rotation = plan.rotation;
            }
        }
    }

    #[test]
    fn test_plan_without_jitter_centers_slice() {
        let config = WheelConfig {
            stop_jitter: 0.0,
            extra_rotations: 3,
            ..WheelConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let plan = plan_spin(&mut rng, 4, 0.0, &config).unwrap();

        let expected_stop = normalize_angle(-((plan.winner as f64 + 0.5) * 90.0));
        assert!((plan.stop_angle - expected_stop).abs() < 1e-9);
        assert!((plan.rotation - (3.0 * 360.0 + expected_stop)).abs() < 1e-9);
        assert_eq!(plan.duration_ms, config.spin_duration_ms);
    }

    #[test]
    fn test_default_stop_counts_slices_from_the_end() {
        let config = WheelConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        for n in [2_usize, 3, 7] {
            let a = 360.0 / n as f64;
            for _ in 0..20 {
                let plan = plan_spin(&mut rng, n, 0.0, &config).unwrap();
                let i = plan.winner as f64;
                let stop = a * (n as f64 - 1.0 - i) + a / 2.0;

                assert!((plan.stop_angle - stop).abs() < 1e-9);
                assert!((plan.rotation - (5.0 * 360.0 + stop)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_plan_is_deterministic_per_seed() {
        let config = WheelConfig::default();
        let a = plan_spin(&mut ChaCha8Rng::seed_from_u64(9), 6, 0.0, &config).unwrap();
        let b = plan_spin(&mut ChaCha8Rng::seed_from_u64(9), 6, 0.0, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_index_reachable() {
        let config = WheelConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1234);
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[plan_spin(&mut rng, 5, 0.0, &config).unwrap().winner] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn test_empty_wheel_cannot_spin() {
        let config = WheelConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(plan_spin(&mut rng, 0, 0.0, &config), Err(WheelError::NoItems));
    }
}
