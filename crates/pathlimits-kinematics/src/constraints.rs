//! The constraint contract queried by trajectory profilers.

use crate::Pose;

/// Per-point kinematic bounds along a path.
///
/// A profiler calls these while integrating a velocity schedule, often at dense
/// sample counts inside a control budget. Implementations must be pure,
/// deterministic, constant time and allocation free.
///
/// Every query receives the pose at the sample point together with its first and
/// second derivatives with respect to the path parameter. Policies are free to
/// ignore any of the three.
pub trait TrajectoryConstraints {
    /// Returns the maximum translational velocity allowed at this point.
    ///
    /// # Arguments
    ///
    /// * `pose`: The path pose at the query point.
    /// * `pose_deriv`: First derivative of the pose with respect to the path parameter.
    /// * `pose_second_deriv`: Second derivative of the pose with respect to the path parameter.
    fn maximum_velocity(&self, pose: &Pose, pose_deriv: &Pose, pose_second_deriv: &Pose) -> f64;

    /// Returns the maximum translational acceleration allowed at this point.
    ///
    /// # Arguments
    ///
    /// * `pose`: The path pose at the query point.
    /// * `pose_deriv`: First derivative of the pose with respect to the path parameter.
    /// * `pose_second_deriv`: Second derivative of the pose with respect to the path parameter.
    fn maximum_acceleration(&self, pose: &Pose, pose_deriv: &Pose, pose_second_deriv: &Pose)
    -> f64;
}

impl<T: TrajectoryConstraints + ?Sized> TrajectoryConstraints for &T {
    fn maximum_velocity(&self, pose: &Pose, pose_deriv: &Pose, pose_second_deriv: &Pose) -> f64 {
        (**self).maximum_velocity(pose, pose_deriv, pose_second_deriv)
    }

    fn maximum_acceleration(
        &self,
        pose: &Pose,
        pose_deriv: &Pose,
        pose_second_deriv: &Pose,
    ) -> f64 {
        (**self).maximum_acceleration(pose, pose_deriv, pose_second_deriv)
    }
}
