//! Geometry primitives: points, sizes, regions and coordinate-space tags
//!
//! Everything in this module is a plain immutable value type with structural
//! equality. Region intersection treats "no overlap" as a normal outcome and
//! returns the canonical empty region rather than an error.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The coordinate spaces a point or region can be expressed in.
///
/// Conversion between spaces is always performed by a screenshot (which owns
/// the offsets for a specific capture); the tag only records which space a
/// value's numbers are meaningful in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoordinatesType {
    /// Pixel coordinates of the raw captured image buffer
    ScreenshotAsIs,
    /// Coordinates relative to the current frame's content box, ignoring any
    /// scroll applied while capturing
    ContextAsIs,
    /// Coordinates relative to the visible viewport, accounting for the
    /// scroll offset at capture time
    ContextRelative,
}

/// A 2D location. The coordinate space it lives in is tracked by the calling
/// context, not by the value itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns a new point translated by `(dx, dy)`.
    pub fn offset(&self, dx: i32, dy: i32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of a viewport, frame or image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RectangleSize {
    pub width: u32,
    pub height: u32,
}

impl RectangleSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for RectangleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An axis-aligned rectangle plus the coordinate space it is expressed in.
///
/// Width and height are unsigned, so negative sizes are unrepresentable; data
/// arriving from deserialized or otherwise unchecked sources goes through
/// [`Region::try_new`]. A region with zero width or height is "size-empty"
/// and is a terminal value for conversion and intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub coordinates_type: CoordinatesType,
}

impl Region {
    /// The canonical empty region
    pub const EMPTY: Region = Region {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
        coordinates_type: CoordinatesType::ScreenshotAsIs,
    };

    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            coordinates_type: CoordinatesType::ScreenshotAsIs,
        }
    }

    /// Builds a region from signed dimensions, rejecting negative sizes.
    pub fn try_new(x: i32, y: i32, width: i64, height: i64) -> Result<Self> {
        if width < 0 || height < 0 {
            return Err(Error::InvalidRegion(format!(
                "negative size {}x{}",
                width, height
            )));
        }
        Ok(Self::new(x, y, width as u32, height as u32))
    }

    pub fn with_coordinates_type(mut self, coordinates_type: CoordinatesType) -> Self {
        self.coordinates_type = coordinates_type;
        self
    }

    pub fn with_location(mut self, location: Point) -> Self {
        self.x = location.x;
        self.y = location.y;
        self
    }

    pub fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> RectangleSize {
        RectangleSize::new(self.width, self.height)
    }

    /// One past the rightmost column, in i64 to sidestep overflow at the
    /// extremes of the i32 range.
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// One past the bottom row
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub fn is_size_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && (point.x as i64) < self.right()
            && point.y >= self.y
            && (point.y as i64) < self.bottom()
    }

    /// True when `other` lies entirely within this region. Size-empty
    /// regions are trivially contained.
    pub fn contains_region(&self, other: &Region) -> bool {
        if other.is_size_empty() {
            return true;
        }
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Intersects two regions. No overlap yields the canonical empty region;
    /// an overlap keeps this region's coordinate-space tag.
    pub fn intersect(&self, other: &Region) -> Region {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left as i64 || bottom <= top as i64 {
            return Region::EMPTY;
        }
        Region {
            x: left,
            y: top,
            width: (right - left as i64) as u32,
            height: (bottom - top as i64) as u32,
            coordinates_type: self.coordinates_type,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {}x{} [{:?}]",
            self.x, self.y, self.width, self.height, self.coordinates_type
        )
    }
}
