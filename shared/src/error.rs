//! # Error Types
//!
//! The interaction model has exactly one failure path: redeeming an item
//! without enough quiz points. Everything else is total over its inputs.

use thiserror::Error;

/// Commerce failures surfaced by [`crate::session::Session::redeem_with_points`].
///
/// # Example
///
/// ```rust
/// use shared::error::CommerceError;
///
/// let err = CommerceError::InsufficientPoints {
///     item: "Asteroid Mug",
///     needed: 30,
///     available: 1,
/// };
/// assert_eq!(err.to_string(), "Insufficient points for Asteroid Mug: need 30, have 1");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    #[error("Insufficient points for {item}: need {needed}, have {available}")]
    InsufficientPoints {
        item: &'static str,
        needed: u32,
        available: u32,
    },
}
