#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library for kinematic trajectory constraints."]
#![doc = ""]
#![doc = "This crate provides the constraint contract a trajectory profiler queries at each"]
#![doc = "point of a path, a drive-limit policy that derates translational speed by the"]
#![doc = "local heading rate, and combinators that take the pointwise minimum of policies."]

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod composite;
pub mod constraints;
pub mod drive;
pub mod error;

pub use composite::{ConstraintSet, MinimumOf};
pub use constraints::TrajectoryConstraints;
pub use drive::{DriveConstraints, PointTurnLimits};
pub use error::ConstraintsError;

/// A 2‑D pose `(x, y, heading)`.
///
/// The same type carries a pose and its first and second derivatives with
/// respect to the path parameter `s`. For a derivative, `heading` is the local
/// turning rate `dθ/ds` and is never normalized.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    /// World‑frame x component.
    pub x: f64,
    /// World‑frame y component.
    pub y: f64,
    /// Heading component (rad, or rad per path-parameter unit for derivatives).
    pub heading: f64,
}

impl Pose {
    /// Construct a new pose.
    ///
    /// # Arguments
    ///
    /// * `x`: World-frame x component.
    /// * `y`: World-frame y component.
    /// * `heading`: Heading component in radians.
    pub const fn new(x: f64, y: f64, heading: f64) -> Self {
        Pose { x, y, heading }
    }

    /// Returns `true` if every component is neither NaN nor infinite.
    ///
    /// The constraint policies in this crate do not call this; it is offered to
    /// callers that want to reject malformed path samples before querying.
    pub const fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.heading.is_finite()
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x: {:.2}, y: {:.2}, θ: {:.2} rad)", self.x, self.y, self.heading)
    }
}
