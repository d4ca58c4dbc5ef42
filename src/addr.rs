//! Compact Z-order encoded multidimensional address.
//!
//! `Addr` packs up to [`MAX_DIMS`] coordinates of [`BITS_PER_COORD`] bits
//! each into four 64-bit words:
//!
//! ```text
//! bits 0-3:    dimension count d (0..=12)
//! bits 4-243:  interleaved coordinate streams, stride = d
//! ```
//!
//! Bit `p` of coordinate `i` lives at absolute bit `4 + p*d + i`. The
//! interleaving stride is the address's *own* dimension count, not a fixed
//! maximum, so the 12-dimension worst case (4 + 12*20 = 244 bits) fits in
//! 256 bits and addresses of different dimensionality never share a bit
//! pattern, even when their decoded coordinates coincide.

use core::fmt;

use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::AddrError;
use crate::range::DimRange;

/// Bits stored per coordinate.
pub const BITS_PER_COORD: usize = 20;

/// Maximum number of dimensions an address can hold.
pub const MAX_DIMS: usize = 12;

/// Maximum value a single coordinate can hold (2^20 - 1).
pub const MAX_COORD: u32 = (1 << BITS_PER_COORD) - 1;

const HEADER_BITS: usize = 4;
const DIMS_MASK: u64 = 0xF;

/// Z-order encoded multidimensional address.
///
/// Immutable value type: every transformer returns a new `Addr` and leaves
/// the receiver untouched. Equality, hashing and ordering all operate on the
/// raw bit pattern, which is canonical for a given coordinate sequence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Addr([u64; 4]);

impl Addr {
    /// The zero-dimension address.
    pub const EMPTY: Self = Self([0; 4]);

    /// Encode a coordinate sequence into an address.
    ///
    /// Fails with [`AddrError::DimensionLimitExceeded`] if more than
    /// [`MAX_DIMS`] coordinates are supplied, or
    /// [`AddrError::CoordinateOutOfRange`] if any coordinate exceeds
    /// [`MAX_COORD`]. Performs no heap allocation.
    pub fn new(coords: &[u32]) -> Result<Self, AddrError> {
        if coords.len() > MAX_DIMS {
            return Err(AddrError::DimensionLimitExceeded { requested: coords.len() });
        }
        for (index, &value) in coords.iter().enumerate() {
            if value > MAX_COORD {
                return Err(AddrError::CoordinateOutOfRange { index, value: value as i64 });
            }
        }

        let dims = coords.len();
        let mut words = [0u64; 4];
        words[0] = dims as u64;
        for bit in 0..BITS_PER_COORD {
            for (dim, &value) in coords.iter().enumerate() {
                if (value >> bit) & 1 == 1 {
                    let pos = HEADER_BITS + bit * dims + dim;
                    words[pos / 64] |= 1 << (pos % 64);
                }
            }
        }
        Ok(Self(words))
    }

    /// Encode from signed integers, reporting negatives rather than wrapping.
    pub fn try_from_signed(coords: &[i64]) -> Result<Self, AddrError> {
        if coords.len() > MAX_DIMS {
            return Err(AddrError::DimensionLimitExceeded { requested: coords.len() });
        }
        let mut buf = [0u32; MAX_DIMS];
        for (index, &value) in coords.iter().enumerate() {
            if value < 0 || value > MAX_COORD as i64 {
                return Err(AddrError::CoordinateOutOfRange { index, value });
            }
            buf[index] = value as u32;
        }
        Self::new(&buf[..coords.len()])
    }

    /// Number of dimensions in this address.
    #[inline]
    pub fn dims(self) -> usize {
        (self.0[0] & DIMS_MASK) as usize
    }

    /// Decode into a stack-allocated array; slots at or beyond the returned
    /// dimension count are zero. Performs no heap allocation.
    pub fn coords(self) -> ([u32; MAX_DIMS], usize) {
        let mut coords = [0u32; MAX_DIMS];
        let dims = self.dims();
        for bit in 0..BITS_PER_COORD {
            for (dim, coord) in coords.iter_mut().enumerate().take(dims) {
                let pos = HEADER_BITS + bit * dims + dim;
                if (self.0[pos / 64] >> (pos % 64)) & 1 == 1 {
                    *coord |= 1 << bit;
                }
            }
        }
        (coords, dims)
    }

    /// Decode into a caller-supplied buffer, returning the filled prefix.
    ///
    /// Fails with [`AddrError::BufferTooSmall`] if `buf` cannot hold every
    /// coordinate. Performs no heap allocation.
    pub fn coords_into(self, buf: &mut [u32]) -> Result<&mut [u32], AddrError> {
        let (coords, dims) = self.coords();
        if buf.len() < dims {
            return Err(AddrError::BufferTooSmall { needed: dims, given: buf.len() });
        }
        let out = &mut buf[..dims];
        out.copy_from_slice(&coords[..dims]);
        Ok(out)
    }

    /// Coordinate at dimension `index`.
    ///
    /// Fails with [`AddrError::IndexOutOfRange`] if `index` is at or beyond
    /// [`dims`](Self::dims).
    pub fn at(self, index: usize) -> Result<u32, AddrError> {
        let (coords, dims) = self.coords();
        if index >= dims {
            return Err(AddrError::IndexOutOfRange { index, dims });
        }
        Ok(coords[index])
    }

    /// True iff every coordinate is zero; vacuously true for zero dimensions.
    pub fn is_zero(self) -> bool {
        let (coords, dims) = self.coords();
        coords[..dims].iter().all(|&value| value == 0)
    }

    /// New address with `extra` coordinates appended.
    ///
    /// Subject to the same validation as [`new`](Self::new), so a result
    /// beyond [`MAX_DIMS`] dimensions fails with
    /// [`AddrError::DimensionLimitExceeded`].
    pub fn append(self, extra: &[u32]) -> Result<Self, AddrError> {
        let (coords, dims) = self.coords();
        let mut next: SmallVec<[u32; MAX_DIMS]> = SmallVec::new();
        next.extend_from_slice(&coords[..dims]);
        next.extend_from_slice(extra);
        Self::new(&next)
    }

    /// New address holding the coordinate sub-sequence `[from, to)`.
    ///
    /// Fails with [`AddrError::RangeInvalid`] unless `from <= to <= dims`.
    pub fn slice(self, from: usize, to: usize) -> Result<Self, AddrError> {
        let (coords, dims) = self.coords();
        if from > to || to > dims {
            return Err(AddrError::RangeInvalid { from, to, dims });
        }
        Self::new(&coords[from..to])
    }

    /// New address with the coordinate at `index` replaced by `value`.
    ///
    /// Fails with [`AddrError::IndexOutOfRange`] for a bad index; `value`
    /// goes through the encoder's own range check.
    pub fn with(self, index: usize, value: u32) -> Result<Self, AddrError> {
        let (mut coords, dims) = self.coords();
        if index >= dims {
            return Err(AddrError::IndexOutOfRange { index, dims });
        }
        coords[index] = value;
        Self::new(&coords[..dims])
    }

    /// True iff this address's coordinate sequence is a leading prefix of
    /// `other`'s. A zero-dimension address contains every address.
    pub fn contains(self, other: Addr) -> bool {
        let dims = self.dims();
        if dims > other.dims() {
            return false;
        }
        let (ours, _) = self.coords();
        let (theirs, _) = other.coords();
        ours[..dims] == theirs[..dims]
    }

    /// True iff every coordinate satisfies its positional bound.
    ///
    /// Bounds are matched left to right: dimensions beyond the last range
    /// pass unchecked, and ranges beyond the last dimension are ignored.
    pub fn in_range(self, ranges: &[DimRange]) -> bool {
        let (coords, dims) = self.coords();
        ranges
            .iter()
            .zip(&coords[..dims])
            .all(|(range, &value)| range.matches(value))
    }

    /// Raw storage words. Stable layout: this is the wire format if an
    /// address is ever persisted.
    #[inline]
    pub fn as_words(self) -> [u64; 4] {
        self.0
    }

    /// Reconstruct from raw words, validating the header and payload bounds.
    ///
    /// Fails with [`AddrError::DimensionLimitExceeded`] for a header count
    /// above [`MAX_DIMS`], or [`AddrError::ReservedBitsSet`] if any bit above
    /// the `4 + 20*d` payload boundary is set.
    pub fn from_words(words: [u64; 4]) -> Result<Self, AddrError> {
        let dims = (words[0] & DIMS_MASK) as usize;
        if dims > MAX_DIMS {
            return Err(AddrError::DimensionLimitExceeded { requested: dims });
        }
        let payload_end = HEADER_BITS + BITS_PER_COORD * dims;
        let mut stray = 0u64;
        for (word_idx, &word) in words.iter().enumerate() {
            let lo = word_idx * 64;
            let reserved = if payload_end <= lo {
                u64::MAX
            } else if payload_end >= lo + 64 {
                0
            } else {
                u64::MAX << (payload_end - lo)
            };
            stray |= word & reserved;
        }
        if stray != 0 {
            return Err(AddrError::ReservedBitsSet { bits: stray });
        }
        Ok(Self(words))
    }
}

impl TryFrom<&[u32]> for Addr {
    type Error = AddrError;

    fn try_from(coords: &[u32]) -> Result<Self, Self::Error> {
        Self::new(coords)
    }
}

impl TryFrom<&[i64]> for Addr {
    type Error = AddrError;

    fn try_from(coords: &[i64]) -> Result<Self, Self::Error> {
        Self::try_from_signed(coords)
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (coords, dims) = self.coords();
        f.write_str("Addr[")?;
        for (i, value) in coords[..dims].iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
