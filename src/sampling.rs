use tracing::{debug, warn};

use pathlimits_kinematics::{Pose, TrajectoryConstraints};

use crate::config::SampleSettings;

/// Bounds reported by a constraint policy at one path sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundSample {
    pub pose_deriv: Pose,
    pub max_velocity: f64,
    pub max_acceleration: f64,
}

/// Queries `constraints` at every sample.
///
/// Samples with NaN or infinite derivatives are logged and skipped here rather
/// than passed to the policy.
pub fn evaluate<C>(constraints: &C, samples: &[SampleSettings]) -> Vec<BoundSample>
where
    C: TrajectoryConstraints + ?Sized,
{
    // No path evaluator upstream, so pose and curvature rate are held at zero.
    let pose = Pose::default();
    let pose_second_deriv = Pose::default();

    samples
        .iter()
        .enumerate()
        .filter_map(|(index, sample)| {
            let pose_deriv = sample.pose_deriv();
            if !pose_deriv.is_finite() {
                warn!(index, %pose_deriv, "Skipping sample with non-finite pose derivative");
                return None;
            }

            let max_velocity = constraints.maximum_velocity(&pose, &pose_deriv, &pose_second_deriv);
            let max_acceleration =
                constraints.maximum_acceleration(&pose, &pose_deriv, &pose_second_deriv);
            debug!(
                index,
                heading_deriv = pose_deriv.heading,
                max_velocity,
                max_acceleration,
                "Evaluated sample"
            );

            Some(BoundSample {
                pose_deriv,
                max_velocity,
                max_acceleration,
            })
        })
        .collect()
}
