//! Stitched/composite screenshot
//!
//! A stitched capture is assembled by an external stitching collaborator
//! from several scrolled tile captures. Each tile records where it landed in
//! the composite image and the accumulated scroll that was applied to
//! capture it; the two coincide when the stitcher achieved every scroll it
//! asked for, and differ when the driving context clamped a scroll.

use image::RgbaImage;

use crate::capture::{clip_to_bounds, crop_image, CaptureContext, Screenshot};
use crate::error::{Error, Result};
use crate::frames::StitchTile;
use crate::geometry::{CoordinatesType, Point, Region};

/// A composite screenshot built from scrolled tiles.
///
/// Context-space conversions resolve the accumulated scroll of the tile a
/// location falls into. A location outside every tile's captured content is
/// not visible in the composite and fails `location_in_screenshot`.
#[derive(Debug, Clone)]
pub struct StitchedScreenshot {
    image: RgbaImage,
    context: CaptureContext,
    tiles: Vec<StitchTile>,
}

impl StitchedScreenshot {
    pub fn new(image: RgbaImage, context: CaptureContext, tiles: Vec<StitchTile>) -> Self {
        let tiles = if tiles.is_empty() {
            // degenerate single tile: keeps the mapping identical to the
            // unstitched case
            let area = Region::new(0, 0, image.width(), image.height());
            vec![StitchTile::new(
                area,
                area.location() - context.frame_offset,
            )]
        } else {
            tiles
        };
        log::debug!("stitched screenshot with {} tiles", tiles.len());
        Self {
            image,
            context,
            tiles,
        }
    }

    pub fn tiles(&self) -> &[StitchTile] {
        &self.tiles
    }

    pub fn context(&self) -> CaptureContext {
        self.context
    }

    /// The content origin a tile shows, in pre-stitch pixel terms
    fn tile_content_origin(&self, tile: &StitchTile) -> Point {
        tile.scroll + self.context.frame_offset
    }

    /// Maps a content-space point onto the composite image via the first
    /// tile whose captured range contains it.
    fn map_content_to_pixel(&self, content: Point) -> Option<Point> {
        self.tiles.iter().find_map(|tile| {
            let captured = tile.area.with_location(self.tile_content_origin(tile));
            if captured.contains(content) {
                Some(tile.area.location() + (content - captured.location()))
            } else {
                None
            }
        })
    }

    /// Maps a composite-image point back to content space via the tile that
    /// occupies that part of the image.
    fn map_pixel_to_content(&self, pixel: Point) -> Option<Point> {
        self.tiles.iter().find_map(|tile| {
            if tile.area.contains(pixel) {
                Some(self.tile_content_origin(tile) + (pixel - tile.area.location()))
            } else {
                None
            }
        })
    }

    fn to_screenshot(&self, location: Point, from: CoordinatesType) -> Point {
        if from == CoordinatesType::ScreenshotAsIs {
            return location;
        }
        let content = location + self.context.offset_of(from);
        // conversion stays total: content outside every tile passes through
        // unmapped and is rejected later by location_in_screenshot
        self.map_content_to_pixel(content).unwrap_or(content)
    }

    fn from_screenshot(&self, pixel: Point, to: CoordinatesType) -> Point {
        if to == CoordinatesType::ScreenshotAsIs {
            return pixel;
        }
        let content = self.map_pixel_to_content(pixel).unwrap_or(pixel);
        content - self.context.offset_of(to)
    }
}

impl Screenshot for StitchedScreenshot {
    fn image(&self) -> &RgbaImage {
        &self.image
    }

    fn convert_location(
        &self,
        location: Point,
        from: CoordinatesType,
        to: CoordinatesType,
    ) -> Point {
        if from == to {
            return location;
        }
        let as_is = self.to_screenshot(location, from);
        self.from_screenshot(as_is, to)
    }

    fn location_in_screenshot(
        &self,
        location: Point,
        coordinates_type: CoordinatesType,
    ) -> Result<Point> {
        let as_is = if coordinates_type == CoordinatesType::ScreenshotAsIs {
            if self.map_pixel_to_content(location).is_none() {
                return Err(Error::OutOfBounds {
                    location,
                    bounds: self.image_region(),
                });
            }
            location
        } else {
            let content = location + self.context.offset_of(coordinates_type);
            self.map_content_to_pixel(content).ok_or(Error::OutOfBounds {
                location: content,
                bounds: self.image_region(),
            })?
        };
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
        let origin = clipped.location();
        let bounds = Region::new(0, 0, image.width(), image.height());

        // carry over the tiles that survive the crop, trimming both their
        // image area and the content origin they show
        let tiles = self
            .tiles
            .iter()
            .filter_map(|tile| {
                let shifted = tile.area.with_location(tile.area.location() - origin);
                let trimmed = bounds.intersect(&shifted);
                if trimmed.is_size_empty() {
                    return None;
                }
                let scroll = tile.scroll + (trimmed.location() - shifted.location());
                Some(StitchTile::new(trimmed, scroll))
            })
            .collect();

        Ok(Box::new(Self {
            image,
            context: self.context.rebased(origin),
            tiles,
        }))
    }
}
