//! Region resolvers: fixed rectangles and floating rectangles

use serde::{Deserialize, Serialize};

use crate::capture::Screenshot;
use crate::context::DrivingContext;
use crate::geometry::Region;
use crate::match_settings::{FloatingBounds, FloatingMatchSettings};

/// Resolves a region specification into zero or more concrete regions.
///
/// A resolver that matches nothing returns an empty vector, never an error.
/// When a resolver returns several regions their order is preserved; callers
/// may rely on first-match semantics.
pub trait GetRegion: Send + Sync {
    fn get_regions(
        &self,
        context: &dyn DrivingContext,
        screenshot: &dyn Screenshot,
    ) -> Vec<Region>;
}

/// Resolves a floating-region specification into concrete regions paired
/// with their per-edge tolerances.
pub trait GetFloatingRegion: Send + Sync {
    fn get_regions(
        &self,
        context: &dyn DrivingContext,
        screenshot: &dyn Screenshot,
    ) -> Vec<FloatingMatchSettings>;
}

/// A fixed-rectangle specification: resolves to exactly the rectangle it was
/// built with, in whatever space the caller constructed it in. No coordinate
/// conversion is performed and both arguments are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreRegionByRectangle {
    region: Region,
}

impl IgnoreRegionByRectangle {
    pub fn new(region: Region) -> Self {
        Self { region }
    }
}

impl GetRegion for IgnoreRegionByRectangle {
    fn get_regions(
        &self,
        _context: &dyn DrivingContext,
        _screenshot: &dyn Screenshot,
    ) -> Vec<Region> {
        vec![self.region]
    }
}

/// A floating-rectangle specification: resolves to exactly one
/// [`FloatingMatchSettings`] pairing its stored rectangle with its stored
/// tolerance bounds, ignoring both arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatingRegionByRectangle {
    rect: Region,
    bounds: FloatingBounds,
}

impl FloatingRegionByRectangle {
    pub fn new(rect: Region, bounds: FloatingBounds) -> Self {
        Self { rect, bounds }
    }
}

impl GetFloatingRegion for FloatingRegionByRectangle {
    fn get_regions(
        &self,
        _context: &dyn DrivingContext,
        _screenshot: &dyn Screenshot,
    ) -> Vec<FloatingMatchSettings> {
        vec![FloatingMatchSettings::new(self.rect, self.bounds)]
    }
}
