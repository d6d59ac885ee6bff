//! Screenshot abstraction
//!
//! A screenshot owns exactly one decoded pixel buffer plus the offsets that
//! tie the image to the capture's coordinate spaces. Two variants exist:
//! [`ViewportScreenshot`] for a single unstitched capture and
//! [`StitchedScreenshot`] for a composite assembled from scrolled tiles.
//! Callers depend only on the [`Screenshot`] trait.

pub mod stitched;
pub mod viewport;

use std::io::Cursor;

use base64::Engine as Base64Engine;
use image::RgbaImage;

use crate::error::{Error, Result};
use crate::geometry::{CoordinatesType, Point, Region};

pub use stitched::StitchedScreenshot;
pub use viewport::ViewportScreenshot;

/// The offsets recorded at capture time that map the capture's coordinate
/// spaces onto the image buffer.
///
/// Every space has a constant offset to screenshot pixels, so any conversion
/// is `p + offset(from) - offset(to)`; identity, round-trip and chain
/// composability follow from that shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureContext {
    /// Offset of the current frame's content origin inside the image
    /// (accumulated over the frame chain)
    pub frame_offset: Point,
    /// Scroll offset applied while the capture was taken
    pub scroll_position: Point,
    /// The frame's own scroll state before capturing began; context-as-is
    /// coordinates are expressed relative to it
    pub original_scroll: Point,
}

impl CaptureContext {
    pub fn new(frame_offset: Point, scroll_position: Point, original_scroll: Point) -> Self {
        Self {
            frame_offset,
            scroll_position,
            original_scroll,
        }
    }

    /// Snapshots the offsets out of a driving context at capture time.
    pub fn from_driving_context(ctx: &dyn crate::context::DrivingContext) -> Self {
        Self {
            frame_offset: ctx.frame_chain().current_frame_offset(),
            scroll_position: ctx.scroll_position(),
            original_scroll: Point::ZERO,
        }
    }

    /// Constant offset from `space` to screenshot pixels
    pub fn offset_of(&self, space: CoordinatesType) -> Point {
        match space {
            CoordinatesType::ScreenshotAsIs => Point::ZERO,
            CoordinatesType::ContextRelative => self.frame_offset + self.scroll_position,
            CoordinatesType::ContextAsIs => {
                self.frame_offset + self.scroll_position - self.original_scroll
            }
        }
    }

    pub fn convert(&self, location: Point, from: CoordinatesType, to: CoordinatesType) -> Point {
        if from == to {
            return location;
        }
        location + self.offset_of(from) - self.offset_of(to)
    }

    /// The context of a crop whose origin (in screenshot pixels) becomes the
    /// new image origin.
    pub fn rebased(&self, origin: Point) -> Self {
        Self {
            frame_offset: self.frame_offset - origin,
            ..*self
        }
    }
}

/// Capability set shared by all screenshot variants.
///
/// Instances are immutable after construction, so resolving independent
/// regions against the same screenshot from several threads is safe.
pub trait Screenshot: Send + Sync {
    /// The backing pixel buffer
    fn image(&self) -> &RgbaImage;

    /// Converts a location between coordinate spaces. This is a linear
    /// mapping, not a membership test; it never fails, in-bounds or not.
    fn convert_location(
        &self,
        location: Point,
        from: CoordinatesType,
        to: CoordinatesType,
    ) -> Point;

    /// Converts `location` to screenshot pixels and validates that it lies
    /// within the captured image.
    ///
    /// This is the one lookup that can fail: it answers "is this point
    /// visible in the actual captured pixels".
    fn location_in_screenshot(
        &self,
        location: Point,
        coordinates_type: CoordinatesType,
    ) -> Result<Point>;

    /// Intersects `region` with the image bounds and returns the result
    /// expressed back in `coordinates_type`. No overlap yields the empty
    /// region, never an error.
    fn intersected_region(&self, region: Region, coordinates_type: CoordinatesType) -> Region;

    /// Crops the screenshot to `region` (interpreted per its coordinate tag)
    /// and rebases the coordinate context so the crop origin becomes the new
    /// origin.
    ///
    /// With `throw_if_clipped` set, a region not fully contained in the
    /// source fails with [`Error::ClippedRegion`]; otherwise it is clamped
    /// to the available pixels.
    fn sub_screenshot(&self, region: Region, throw_if_clipped: bool)
        -> Result<Box<dyn Screenshot>>;

    /// Converts a region's location between spaces, carrying width/height
    /// unchanged. Size-empty input short-circuits to the canonical empty
    /// region without any space lookup.
    fn convert_region_location(
        &self,
        region: Region,
        from: CoordinatesType,
        to: CoordinatesType,
    ) -> Region {
        if region.is_size_empty() {
            return Region::EMPTY;
        }
        let location = self.convert_location(region.location(), from, to);
        region.with_location(location).with_coordinates_type(to)
    }

    /// Full bounds of the backing image, in screenshot-as-is coordinates
    fn image_region(&self) -> Region {
        Region::new(0, 0, self.image().width(), self.image().height())
    }

    fn width(&self) -> u32 {
        self.image().width()
    }

    fn height(&self) -> u32 {
        self.image().height()
    }

    /// PNG-encodes the backing image buffer.
    fn bytes(&self) -> Result<Vec<u8>> {
        encode_png(self.image())
    }

    /// PNG bytes as base64, the form captures are shipped in
    fn to_base64(&self) -> Result<String> {
        Ok(base64::engine::general_purpose::STANDARD.encode(self.bytes()?))
    }
}

fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, image::ImageFormat::Png)
        .map_err(|e| Error::Encoding(e.to_string()))?;
    Ok(buffer.into_inner())
}

/// Clamps `region` (already in screenshot pixels) against `bounds`, or fails
/// when strict mode asks for full containment.
pub(crate) fn clip_to_bounds(
    region: Region,
    bounds: Region,
    throw_if_clipped: bool,
) -> Result<Region> {
    if throw_if_clipped && !bounds.contains_region(&region) {
        return Err(Error::ClippedRegion {
            requested: region,
            available: bounds,
        });
    }
    Ok(bounds.intersect(&region))
}

/// Crops the pixel buffer to `region`, which must already be clamped to the
/// image bounds.
pub(crate) fn crop_image(image: &RgbaImage, region: Region) -> RgbaImage {
    log::debug!(
        "cropping {}x{} buffer to {}",
        image.width(),
        image.height(),
        region
    );
    image::imageops::crop_imm(
        image,
        region.x.max(0) as u32,
        region.y.max(0) as u32,
        region.width,
        region.height,
    )
    .to_image()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_context_identity() {
        let ctx = CaptureContext::new(Point::new(3, 4), Point::new(0, 50), Point::ZERO);
        let p = Point::new(7, 9);
        for space in [
            CoordinatesType::ScreenshotAsIs,
            CoordinatesType::ContextAsIs,
            CoordinatesType::ContextRelative,
        ] {
            assert_eq!(ctx.convert(p, space, space), p);
        }
    }

    #[test]
    fn rebase_shifts_frame_offset_only() {
        let ctx = CaptureContext::new(Point::new(10, 10), Point::new(0, 5), Point::ZERO);
        let rebased = ctx.rebased(Point::new(4, 4));
        assert_eq!(rebased.frame_offset, Point::new(6, 6));
        assert_eq!(rebased.scroll_position, ctx.scroll_position);
    }

    #[test]
    fn clip_strict_rejects_overflowing_region() {
        let bounds = Region::new(0, 0, 100, 100);
        let req = Region::new(90, 90, 50, 50);
        assert!(matches!(
            clip_to_bounds(req, bounds, true),
            Err(Error::ClippedRegion { .. })
        ));
        assert_eq!(
            clip_to_bounds(req, bounds, false).unwrap(),
            Region::new(90, 90, 10, 10)
        );
    }
}
