//! Eyeshot
//!
//! The coordinate/geometry core of a visual UI checkpoint system. It wraps
//! captured screenshots — possibly larger than the viewport, nested inside
//! iframes, or stitched from several scrolled tiles — and keeps a consistent
//! mapping between the coordinate spaces involved, so that declarative region
//! specifications can be resolved into concrete regions for a downstream
//! comparison backend.
//!
//! # Features
//!
//! - **Coordinate conversion**: screenshot pixels, frame-content and
//!   viewport-relative spaces, convertible in any direction
//! - **Sub-screenshots**: pixel crops with a rebased coordinate context,
//!   clamping or strict
//! - **Region resolvers**: fixed and floating-tolerance rectangles behind a
//!   protocol open to element-backed or search-backed kinds
//!
//! The capture step itself (browser/driver automation) is external and only
//! seen through the [`DrivingContext`] trait.
//!
//! # Example
//!
//! ```
//! use eyeshot::{
//!     CaptureContext, CoordinatesType, Point, Region, Screenshot, ViewportScreenshot,
//! };
//!
//! # fn main() -> eyeshot::Result<()> {
//! // a 200x150 capture taken with the page scrolled down by 50
//! let context = CaptureContext::new(Point::ZERO, Point::new(0, 50), Point::ZERO);
//! let shot = ViewportScreenshot::new(image::RgbaImage::new(200, 150), context);
//!
//! let as_is = shot.convert_location(
//!     Point::new(10, 10),
//!     CoordinatesType::ContextRelative,
//!     CoordinatesType::ScreenshotAsIs,
//! );
//! assert_eq!(as_is, Point::new(10, 60));
//!
//! let sub = shot.sub_screenshot(Region::new(0, 0, 100, 100), false)?;
//! assert_eq!(sub.width(), 100);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod geometry;
pub use geometry::{CoordinatesType, Point, RectangleSize, Region};

pub mod frames;
pub use frames::{Frame, FrameChain, StitchTile};

pub mod context;
pub use context::{DrivingContext, StaticContext};

pub mod capture;
pub use capture::{CaptureContext, Screenshot, StitchedScreenshot, ViewportScreenshot};

pub mod match_settings;
pub use match_settings::{FloatingBounds, FloatingMatchSettings};

pub mod fluent;
pub use fluent::{
    FloatingRegionByRectangle, GetFloatingRegion, GetRegion, IgnoreRegionByRectangle,
};
