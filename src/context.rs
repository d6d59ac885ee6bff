//! The driving-context seam
//!
//! The automation layer that performs captures (a browser driver, a native
//! window hook, ...) is external to this crate. Screenshots and region
//! resolvers only see it through the [`DrivingContext`] trait.

use crate::frames::FrameChain;
use crate::geometry::{Point, RectangleSize};

/// Read-only queries the capture/automation layer must answer.
///
/// Implementations that can also locate elements may layer richer resolvers
/// on top; the resolvers shipped in this crate do not require that.
pub trait DrivingContext {
    /// Size of the visible viewport
    fn viewport_size(&self) -> RectangleSize;

    /// Current scroll position of the active frame
    fn scroll_position(&self) -> Point;

    /// The chain of frames entered to reach the active frame
    fn frame_chain(&self) -> &FrameChain;
}

/// A driving context with fixed answers.
///
/// Serves as a safe default for callers that operate on already-captured
/// screenshots, and as the stand-in context in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticContext {
    viewport: RectangleSize,
    scroll: Point,
    frames: FrameChain,
}

impl StaticContext {
    pub fn new(viewport: RectangleSize) -> Self {
        Self {
            viewport,
            scroll: Point::ZERO,
            frames: FrameChain::new(),
        }
    }

    pub fn with_scroll(mut self, scroll: Point) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn with_frame_chain(mut self, frames: FrameChain) -> Self {
        self.frames = frames;
        self
    }
}

impl DrivingContext for StaticContext {
    fn viewport_size(&self) -> RectangleSize {
        self.viewport
    }

    fn scroll_position(&self) -> Point {
        self.scroll
    }

    fn frame_chain(&self) -> &FrameChain {
        &self.frames
    }
}
