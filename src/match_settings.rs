//! Match-settings value types produced by floating-region resolvers

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::Region;

/// Per-edge tolerances for a floating region: how far the content inside the
/// region may drift in each direction between a baseline and a checked
/// capture and still count as a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatingBounds {
    pub max_up_offset: u32,
    pub max_down_offset: u32,
    pub max_left_offset: u32,
    pub max_right_offset: u32,
}

impl FloatingBounds {
    pub const fn new(
        max_up_offset: u32,
        max_down_offset: u32,
        max_left_offset: u32,
        max_right_offset: u32,
    ) -> Self {
        Self {
            max_up_offset,
            max_down_offset,
            max_left_offset,
            max_right_offset,
        }
    }

    /// The same tolerance in all four directions
    pub const fn uniform(offset: u32) -> Self {
        Self::new(offset, offset, offset, offset)
    }

    /// Builds bounds from signed offsets, rejecting negatives.
    pub fn try_new(up: i64, down: i64, left: i64, right: i64) -> Result<Self> {
        if up < 0 || down < 0 || left < 0 || right < 0 {
            return Err(Error::InvalidRegion(format!(
                "negative floating bounds ({}, {}, {}, {})",
                up, down, left, right
            )));
        }
        Ok(Self::new(up as u32, down as u32, left as u32, right as u32))
    }
}

/// A region paired with its floating tolerances. Constructed once by a
/// floating-region resolver and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatingMatchSettings {
    pub region: Region,
    pub bounds: FloatingBounds,
}

impl FloatingMatchSettings {
    pub fn new(region: Region, bounds: FloatingBounds) -> Self {
        Self { region, bounds }
    }
}
