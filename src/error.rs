//! Failure surface for address construction and access.
//!
//! Every variant reflects invalid caller input, never a transient fault, and
//! carries enough context (offending index, value, bound) that a caller can
//! diagnose without re-deriving it. No operation ever returns a partially
//! constructed or silently clamped [`Addr`](crate::Addr).

use core::fmt;

use crate::addr::{MAX_COORD, MAX_DIMS};

/// Errors returned when constructing or inspecting an address.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddrError {
    /// More coordinates were supplied than [`MAX_DIMS`] allows.
    DimensionLimitExceeded { requested: usize },
    /// A coordinate was negative or above [`MAX_COORD`].
    CoordinateOutOfRange { index: usize, value: i64 },
    /// A dimension index was at or beyond the address's dimension count.
    IndexOutOfRange { index: usize, dims: usize },
    /// A caller-supplied decode buffer cannot hold every coordinate.
    BufferTooSmall { needed: usize, given: usize },
    /// Slice bounds were not ordered within `0..=dims`.
    RangeInvalid { from: usize, to: usize, dims: usize },
    /// Raw words carried set bits outside the encoded payload.
    ReservedBitsSet { bits: u64 },
}

impl fmt::Display for AddrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddrError::DimensionLimitExceeded { requested } => {
                write!(f, "{requested} dimensions requested, max {MAX_DIMS} supported")
            }
            AddrError::CoordinateOutOfRange { index, value } => {
                write!(f, "coord[{index}]={value} out of range [0,{MAX_COORD}]")
            }
            AddrError::IndexOutOfRange { index, dims } => {
                write!(f, "dimension index {index} out of range [0:{dims}]")
            }
            AddrError::BufferTooSmall { needed, given } => {
                write!(f, "decode buffer too small: need {needed}, got {given}")
            }
            AddrError::RangeInvalid { from, to, dims } => {
                write!(f, "slice [{from}:{to}] out of range [0:{dims}]")
            }
            AddrError::ReservedBitsSet { bits } => {
                write!(f, "raw address contains bits outside the payload: {bits:#x}")
            }
        }
    }
}

impl std::error::Error for AddrError {}
