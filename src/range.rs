//! Per-dimension bounds for [`Addr::in_range`](crate::Addr::in_range).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inclusive bound pair for one dimension. `None` on either side means that
/// side is unbounded.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DimRange {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl DimRange {
    /// Matches every coordinate value.
    pub const ANY: Self = Self { min: None, max: None };

    pub const fn new(min: Option<u32>, max: Option<u32>) -> Self {
        Self { min, max }
    }

    pub const fn at_least(min: u32) -> Self {
        Self { min: Some(min), max: None }
    }

    pub const fn at_most(max: u32) -> Self {
        Self { min: None, max: Some(max) }
    }

    pub const fn between(min: u32, max: u32) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    /// True iff `value` satisfies both active bounds.
    #[inline]
    pub fn matches(self, value: u32) -> bool {
        if let Some(min) = self.min {
            if value < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return false;
            }
        }
        true
    }
}

/// Conversion honouring the legacy `-1` sentinel: a negative value on either
/// side means "no bound on that side".
impl From<(i64, i64)> for DimRange {
    fn from((min, max): (i64, i64)) -> Self {
        let bound = |v: i64| if v < 0 { None } else { Some(v as u32) };
        Self { min: bound(min), max: bound(max) }
    }
}
