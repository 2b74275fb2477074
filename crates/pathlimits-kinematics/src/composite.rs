//! Policies composed from other policies.
//!
//! A composite answers each query with the pointwise minimum of its members, so
//! a path point is only as fast as its most restrictive constraint allows.

use crate::{ConstraintsError, Pose, TrajectoryConstraints};

/// The pointwise minimum of two constraint policies.
///
/// Nest `MinimumOf` values to combine more than two policies without
/// allocating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimumOf<A, B> {
    first: A,
    second: B,
}

impl<A, B> MinimumOf<A, B>
where
    A: TrajectoryConstraints,
    B: TrajectoryConstraints,
{
    /// Combine two policies.
    pub const fn new(first: A, second: B) -> Self {
        MinimumOf { first, second }
    }

    /// Returns the first member policy.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Returns the second member policy.
    pub fn second(&self) -> &B {
        &self.second
    }
}

impl<A, B> TrajectoryConstraints for MinimumOf<A, B>
where
    A: TrajectoryConstraints,
    B: TrajectoryConstraints,
{
    fn maximum_velocity(&self, pose: &Pose, pose_deriv: &Pose, pose_second_deriv: &Pose) -> f64 {
        self.first
            .maximum_velocity(pose, pose_deriv, pose_second_deriv)
            .min(self.second.maximum_velocity(pose, pose_deriv, pose_second_deriv))
    }

    fn maximum_acceleration(
        &self,
        pose: &Pose,
        pose_deriv: &Pose,
        pose_second_deriv: &Pose,
    ) -> f64 {
        self.first
            .maximum_acceleration(pose, pose_deriv, pose_second_deriv)
            .min(self.second.maximum_acceleration(pose, pose_deriv, pose_second_deriv))
    }
}

/// The pointwise minimum of a borrowed, non-empty slice of policies.
#[derive(Clone, Copy)]
pub struct ConstraintSet<'a> {
    first: &'a dyn TrajectoryConstraints,
    rest: &'a [&'a dyn TrajectoryConstraints],
}

impl<'a> ConstraintSet<'a> {
    /// Borrow a slice of policies as a single policy.
    ///
    /// # Errors
    ///
    /// Returns `Err(ConstraintsError::EmptyConstraintSet)` if `members` is empty.
    pub const fn new(
        members: &'a [&'a dyn TrajectoryConstraints],
    ) -> Result<Self, ConstraintsError> {
        match members.split_first() {
            Some((first, rest)) => Ok(ConstraintSet {
                first: *first,
                rest,
            }),
            None => Err(ConstraintsError::EmptyConstraintSet(
                "at least one policy is required",
            )),
        }
    }

    /// Returns the number of member policies.
    pub fn len(&self) -> usize {
        self.rest.len() + 1
    }

    /// Always `false`; construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        false
    }

    // Seeded with the first member, so there is no fallback value.
    fn fold_min(&self, query: impl Fn(&dyn TrajectoryConstraints) -> f64) -> f64 {
        self.rest
            .iter()
            .fold(query(self.first), |bound, member| bound.min(query(*member)))
    }
}

impl TrajectoryConstraints for ConstraintSet<'_> {
    fn maximum_velocity(&self, pose: &Pose, pose_deriv: &Pose, pose_second_deriv: &Pose) -> f64 {
        self.fold_min(|member| member.maximum_velocity(pose, pose_deriv, pose_second_deriv))
    }

    fn maximum_acceleration(
        &self,
        pose: &Pose,
        pose_deriv: &Pose,
        pose_second_deriv: &Pose,
    ) -> f64 {
        self.fold_min(|member| member.maximum_acceleration(pose, pose_deriv, pose_second_deriv))
    }
}

impl core::fmt::Debug for ConstraintSet<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConstraintSet")
            .field("members", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DriveConstraints;
    const EPSILON: f64 = 1e-9;

    /// Fixed speed and acceleration caps, e.g. a mechanism limit.
    struct Cap {
        velocity: f64,
        acceleration: f64,
    }

    impl TrajectoryConstraints for Cap {
        fn maximum_velocity(&self, _: &Pose, _: &Pose, _: &Pose) -> f64 {
            self.velocity
        }

        fn maximum_acceleration(&self, _: &Pose, _: &Pose, _: &Pose) -> f64 {
            self.acceleration
        }
    }

    fn drive() -> DriveConstraints {
        DriveConstraints::new(30.0, 30.0, 2.0, 2.0).unwrap()
    }

    fn bounds(constraints: &dyn TrajectoryConstraints, heading_deriv: f64) -> (f64, f64) {
        let pose = Pose::default();
        let deriv = Pose::new(1.0, 0.0, heading_deriv);
        (
            constraints.maximum_velocity(&pose, &deriv, &pose),
            constraints.maximum_acceleration(&pose, &deriv, &pose),
        )
    }

    #[test]
    fn test_minimum_of_takes_smaller_bounds() {
        let cap = Cap { velocity: 10.0, acceleration: 50.0 };
        let combined = MinimumOf::new(drive(), cap);

        // Straight: drive allows 30, cap allows 10.
        assert_eq!(bounds(&combined, 0.0), (10.0, 30.0));
        // Tight turn: drive derates to 2 / 0.5 = 4.
        let (velocity, acceleration) = bounds(&combined, 0.5);
        assert!((velocity - 4.0).abs() < EPSILON);
        assert_eq!(acceleration, 30.0);
        assert_eq!(combined.first().max_velocity(), 30.0);
        assert_eq!(combined.second().velocity, 10.0);
    }

    #[test]
    fn test_minimum_of_nests_and_borrows() {
        let drive = drive();
        let slow = Cap { velocity: 5.0, acceleration: 40.0 };
        let gentle = Cap { velocity: 50.0, acceleration: 1.5 };
        let combined = MinimumOf::new(&drive, MinimumOf::new(&slow, &gentle));
        assert_eq!(bounds(&combined, 0.0), (5.0, 1.5));
    }

    #[test]
    fn test_constraint_set_rejects_empty() {
        let result = ConstraintSet::new(&[]);
        assert!(matches!(result, Err(ConstraintsError::EmptyConstraintSet(_))));
    }

    #[test]
    fn test_single_member_set_matches_member() {
        let drive = drive();
        let members: [&dyn TrajectoryConstraints; 1] = [&drive];
        let set = ConstraintSet::new(&members).unwrap();
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
        for &h in &[0.0, 1e-7, -0.1, 0.5] {
            assert_eq!(bounds(&set, h), bounds(&drive, h));
        }
    }

    #[test]
    fn test_constraint_set_takes_pointwise_minimum() {
        let drive = drive();
        let cap = Cap { velocity: 12.0, acceleration: 8.0 };
        let members: [&dyn TrajectoryConstraints; 2] = [&drive, &cap];
        let set = ConstraintSet::new(&members).unwrap();

        assert_eq!(bounds(&set, 0.0), (12.0, 8.0));
        // 2 / 0.1 = 20, cap still wins.
        assert_eq!(bounds(&set, -0.1), (12.0, 8.0));
        // 2 / 0.25 = 8, drive wins.
        let (velocity, _) = bounds(&set, 0.25);
        assert!((velocity - 8.0).abs() < EPSILON);
    }
}
