//! Error types for the constraints library.
//!
//! This module defines the errors returned when a constraint policy is
//! built from invalid limits.

use core::fmt;

/// Errors that can occur when constructing trajectory constraints.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintsError {
    /// Error for an invalid maximum velocity.
    /// This variant is returned when the limit is not finite or not positive.
    InvalidMaxVelocity(&'static str),
    /// Error for an invalid maximum acceleration.
    /// This variant is returned when the limit is not finite or not positive.
    InvalidMaxAcceleration(&'static str),
    /// Error for an invalid maximum angular velocity.
    /// This variant is returned when the limit is not finite or not positive.
    InvalidMaxAngularVelocity(&'static str),
    /// Error for an invalid maximum angular acceleration.
    /// This variant is returned when the limit is not finite or not positive.
    InvalidMaxAngularAcceleration(&'static str),
    /// Error for a constraint set built without any member policies.
    EmptyConstraintSet(&'static str),
}

impl fmt::Display for ConstraintsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintsError::InvalidMaxVelocity(msg) => {
                write!(f, "Invalid maximum velocity: {}", msg)
            }
            ConstraintsError::InvalidMaxAcceleration(msg) => {
                write!(f, "Invalid maximum acceleration: {}", msg)
            }
            ConstraintsError::InvalidMaxAngularVelocity(msg) => {
                write!(f, "Invalid maximum angular velocity: {}", msg)
            }
            ConstraintsError::InvalidMaxAngularAcceleration(msg) => {
                write!(f, "Invalid maximum angular acceleration: {}", msg)
            }
            ConstraintsError::EmptyConstraintSet(msg) => {
                write!(f, "Empty constraint set: {}", msg)
            }
        }
    }
}

impl core::error::Error for ConstraintsError {}
