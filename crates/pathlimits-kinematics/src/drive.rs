//! Drive-limit constraints.
//!
//! Angular speed along a path is translational speed times the local turning
//! rate, `ω = v · dθ/ds`. Bounding `ω` by the drive's angular limit therefore
//! derates `v` inversely with `|dθ/ds|`.

use core::fmt;
use libm::fabs;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ConstraintsError, Pose, TrajectoryConstraints};

/// Constant kinematic capability limits of a robot drive.
///
/// For paths, translational velocity, translational acceleration and angular
/// velocity are limited. The angular acceleration limit only applies to point
/// turns (see [`DriveConstraints::point_turn`]) and is ignored by the path
/// bounds.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveConstraints {
    max_velocity: f64,
    max_acceleration: f64,
    max_angular_velocity: f64,
    max_angular_acceleration: f64,
}

impl DriveConstraints {
    /// Heading-rate magnitude at or below which the angular bound is skipped.
    pub const EPSILON: f64 = 1e-6;

    /// Construct drive constraints from four finite, strictly positive limits.
    ///
    /// # Arguments
    ///
    /// * `max_velocity`: Maximum translational velocity.
    /// * `max_acceleration`: Maximum translational acceleration.
    /// * `max_angular_velocity`: Maximum angular velocity (rad per time unit).
    /// * `max_angular_acceleration`: Maximum angular acceleration, used for point turns only.
    ///
    /// # Errors
    ///
    /// Returns the `ConstraintsError` variant naming the first limit that is NaN,
    /// infinite, zero or negative.
    pub const fn new(
        max_velocity: f64,
        max_acceleration: f64,
        max_angular_velocity: f64,
        max_angular_acceleration: f64,
    ) -> Result<Self, ConstraintsError> {
        if !is_valid_limit(max_velocity) {
            return Err(ConstraintsError::InvalidMaxVelocity(
                "must be finite and positive",
            ));
        }
        if !is_valid_limit(max_acceleration) {
            return Err(ConstraintsError::InvalidMaxAcceleration(
                "must be finite and positive",
            ));
        }
        if !is_valid_limit(max_angular_velocity) {
            return Err(ConstraintsError::InvalidMaxAngularVelocity(
                "must be finite and positive",
            ));
        }
        if !is_valid_limit(max_angular_acceleration) {
            return Err(ConstraintsError::InvalidMaxAngularAcceleration(
                "must be finite and positive",
            ));
        }
        Ok(Self::new_unchecked(
            max_velocity,
            max_acceleration,
            max_angular_velocity,
            max_angular_acceleration,
        ))
    }

    /// Construct drive constraints without validating the limits.
    ///
    /// Zero or negative limits yield degenerate bounds (zero or negative speeds),
    /// which profilers treat as a valid "do not move" answer.
    pub const fn new_unchecked(
        max_velocity: f64,
        max_acceleration: f64,
        max_angular_velocity: f64,
        max_angular_acceleration: f64,
    ) -> Self {
        DriveConstraints {
            max_velocity,
            max_acceleration,
            max_angular_velocity,
            max_angular_acceleration,
        }
    }

    /// Returns the maximum translational velocity.
    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    /// Returns the maximum translational acceleration.
    pub fn max_acceleration(&self) -> f64 {
        self.max_acceleration
    }

    /// Returns the maximum angular velocity.
    pub fn max_angular_velocity(&self) -> f64 {
        self.max_angular_velocity
    }

    /// Returns the maximum angular acceleration.
    ///
    /// Path bounds never apply this limit. Whether a future policy should couple
    /// it into the acceleration bound is left open.
    pub fn max_angular_acceleration(&self) -> f64 {
        self.max_angular_acceleration
    }

    /// Returns the limits that govern a turn in place.
    pub fn point_turn(&self) -> PointTurnLimits {
        PointTurnLimits {
            max_angular_velocity: self.max_angular_velocity,
            max_angular_acceleration: self.max_angular_acceleration,
        }
    }
}

const fn is_valid_limit(limit: f64) -> bool {
    limit.is_finite() && limit > 0.0
}

impl TrajectoryConstraints for DriveConstraints {
    fn maximum_velocity(&self, _pose: &Pose, pose_deriv: &Pose, _pose_second_deriv: &Pose) -> f64 {
        let mut bound = self.max_velocity;

        let turn_rate = fabs(pose_deriv.heading);
        if turn_rate > Self::EPSILON {
            bound = bound.min(self.max_angular_velocity / turn_rate);
        }

        bound
    }

    fn maximum_acceleration(
        &self,
        _pose: &Pose,
        _pose_deriv: &Pose,
        _pose_second_deriv: &Pose,
    ) -> f64 {
        self.max_acceleration
    }
}

impl fmt::Display for DriveConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DriveConstraints (v: {:.2}, a: {:.2}, ω: {:.2}, α: {:.2})",
            self.max_velocity,
            self.max_acceleration,
            self.max_angular_velocity,
            self.max_angular_acceleration
        )
    }
}

/// Angular limits for a turn in place, where translational speed is zero.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointTurnLimits {
    /// Maximum angular velocity.
    pub max_angular_velocity: f64,
    /// Maximum angular acceleration.
    pub max_angular_acceleration: f64,
}
