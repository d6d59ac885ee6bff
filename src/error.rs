//! Error types for screenshot geometry operations

use thiserror::Error;

use crate::geometry::{Point, Region};

/// Result type alias for screenshot operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while working with screenshots and regions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A location, once converted to screenshot pixel space, falls outside
    /// the captured image. Raised only by `location_in_screenshot`.
    #[error("location {location} is outside the screenshot bounds {bounds}")]
    OutOfBounds { location: Point, bounds: Region },

    /// A requested sub-screenshot extends past the source image and strict
    /// mode was requested. Raised only by `sub_screenshot`.
    #[error("requested region {requested} is not fully contained in {available}")]
    ClippedRegion { requested: Region, available: Region },

    /// A region specification was malformed (e.g. negative width/height)
    #[error("invalid region: {0}")]
    InvalidRegion(String),

    /// The image buffer could not be encoded
    #[error("image encoding failed: {0}")]
    Encoding(String),
}
