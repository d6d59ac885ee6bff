//! Single-capture screenshot

use image::RgbaImage;

use crate::capture::{clip_to_bounds, crop_image, CaptureContext, Screenshot};
use crate::context::DrivingContext;
use crate::error::{Error, Result};
use crate::geometry::{CoordinatesType, Point, Region};

/// A screenshot produced by one unstitched capture.
///
/// The mapping between spaces is fully described by the [`CaptureContext`]
/// recorded when the capture was taken.
#[derive(Debug, Clone)]
pub struct ViewportScreenshot {
    image: RgbaImage,
    context: CaptureContext,
}

impl ViewportScreenshot {
    pub fn new(image: RgbaImage, context: CaptureContext) -> Self {
        Self { image, context }
    }

    /// Wraps a freshly captured buffer, snapshotting the offsets out of the
    /// driving context that produced it.
    pub fn from_driving_context(ctx: &dyn DrivingContext, image: RgbaImage) -> Self {
        Self::new(image, CaptureContext::from_driving_context(ctx))
    }

    /// A blank capture sized to `region`. Utility seam for tests and for
    /// callers that need a placeholder buffer of known geometry.
    pub fn blank(region: Region) -> Self {
        Self::new(
            RgbaImage::new(region.width, region.height),
            CaptureContext::default(),
        )
    }

    pub fn context(&self) -> CaptureContext {
        self.context
    }
}

impl Screenshot for ViewportScreenshot {
    fn image(&self) -> &RgbaImage {
        &self.image
    }

    fn convert_location(
        &self,
        location: Point,
        from: CoordinatesType,
        to: CoordinatesType,
    ) -> Point {
        self.context.convert(location, from, to)
    }

    fn location_in_screenshot(
        &self,
        location: Point,
        coordinates_type: CoordinatesType,
    ) -> Result<Point> {
        let as_is =
            self.convert_location(location, coordinates_type, CoordinatesType::ScreenshotAsIs);
        if !self.image_region().contains(as_is) {
            return Err(Error::OutOfBounds {
                location: as_is,
                bounds: self.image_region(),
            });
        }
        Ok(as_is)
    }

    fn intersected_region(&self, region: Region, coordinates_type: CoordinatesType) -> Region {
        if region.is_size_empty() {
            return Region::EMPTY;
        }
        let as_is = self.convert_region_location(
            region,
            coordinates_type,
            CoordinatesType::ScreenshotAsIs,
        );
        let clipped = as_is.intersect(&self.image_region());
        if clipped.is_size_empty() {
            return Region::EMPTY;
        }
        self.convert_region_location(clipped, CoordinatesType::ScreenshotAsIs, coordinates_type)
    }

    fn sub_screenshot(
        &self,
        region: Region,
        throw_if_clipped: bool,
    ) -> Result<Box<dyn Screenshot>> {
        let as_is = self.convert_region_location(
            region,
            region.coordinates_type,
            CoordinatesType::ScreenshotAsIs,
        );
        let clipped = clip_to_bounds(as_is, self.image_region(), throw_if_clipped)?;
        let image = crop_image(&self.image, clipped);
        Ok(Box::new(Self {
            image,
            context: self.context.rebased(clipped.location()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrolled_capture() -> ViewportScreenshot {
        // 200x150 capture taken with the page scrolled down by 50
        ViewportScreenshot::new(
            RgbaImage::new(200, 150),
            CaptureContext::new(Point::ZERO, Point::new(0, 50), Point::ZERO),
        )
    }

    #[test]
    fn scroll_offset_applies_toward_pixels() {
        let shot = scrolled_capture();
        let as_is = shot.convert_location(
            Point::new(10, 10),
            CoordinatesType::ContextRelative,
            CoordinatesType::ScreenshotAsIs,
        );
        assert_eq!(as_is, Point::new(10, 60));
        // zero pre-capture scroll: context-as-is lands back on (10, 10)
        let ctx_as_is = shot.convert_location(
            as_is,
            CoordinatesType::ScreenshotAsIs,
            CoordinatesType::ContextAsIs,
        );
        assert_eq!(ctx_as_is, Point::new(10, 10));
    }

    #[test]
    fn pre_capture_scroll_shifts_context_as_is() {
        let shot = ViewportScreenshot::new(
            RgbaImage::new(200, 150),
            CaptureContext::new(Point::ZERO, Point::new(0, 50), Point::new(0, 30)),
        );
        let ctx_as_is = shot.convert_location(
            Point::new(10, 60),
            CoordinatesType::ScreenshotAsIs,
            CoordinatesType::ContextAsIs,
        );
        assert_eq!(ctx_as_is, Point::new(10, 40));
    }

    #[test]
    fn intersected_region_round_trips_coordinates_type() {
        let shot = scrolled_capture();
        // rows 120..220 context-relative land at pixel rows 170..270, fully
        // below the 150-high image
        let region = Region::new(0, 120, 20, 100)
            .with_coordinates_type(CoordinatesType::ContextRelative);
        let clipped = shot.intersected_region(region, CoordinatesType::ContextRelative);
        assert_eq!(clipped, Region::EMPTY);

        let visible = Region::new(0, 50, 20, 100)
            .with_coordinates_type(CoordinatesType::ContextRelative);
        let clipped = shot.intersected_region(visible, CoordinatesType::ContextRelative);
        assert_eq!(clipped.coordinates_type, CoordinatesType::ContextRelative);
        assert_eq!(clipped.location(), Point::new(0, 50));
        assert_eq!(clipped.height, 50);
    }

    #[test]
    fn blank_capture_has_requested_size() {
        let shot = ViewportScreenshot::blank(Region::new(0, 0, 32, 16));
        assert_eq!(shot.width(), 32);
        assert_eq!(shot.height(), 16);
    }
}
