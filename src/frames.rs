//! Frame-chain and stitching metadata
//!
//! A capture taken inside nested iframes carries a [`FrameChain`] describing
//! where each frame sits in its parent and what the parent's scroll position
//! was when the frame was entered. A stitched capture additionally carries
//! one [`StitchTile`] per physical tile, recording where the tile landed in
//! the composite image and the scroll offset that was applied to capture it.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, RectangleSize, Region};

/// One nested frame along the path from the top-level context to the frame
/// the capture was taken in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// The frame element's location inside its parent's content box
    pub location: Point,
    /// Outer size of the frame element (border box)
    pub outer_size: RectangleSize,
    /// Inner size of the frame's content viewport
    pub inner_size: RectangleSize,
    /// The parent's scroll position at the moment the frame was entered
    pub parent_scroll_position: Point,
}

impl Frame {
    pub fn new(
        location: Point,
        outer_size: RectangleSize,
        inner_size: RectangleSize,
        parent_scroll_position: Point,
    ) -> Self {
        Self {
            location,
            outer_size,
            inner_size,
            parent_scroll_position,
        }
    }
}

/// An ordered stack of [`Frame`]s, outermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameChain {
    frames: Vec<Frame>,
}

impl FrameChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// The innermost frame's content size, if any frame has been entered.
    pub fn current_frame_size(&self) -> Option<RectangleSize> {
        self.frames.last().map(|f| f.inner_size)
    }

    /// Accumulated offset of the current frame's content origin relative to
    /// the top-level context: each hop contributes the frame's location minus
    /// the scroll its parent had when the frame was entered.
    pub fn current_frame_offset(&self) -> Point {
        self.frames
            .iter()
            .fold(Point::ZERO, |acc, f| acc + f.location - f.parent_scroll_position)
    }
}

impl<'a> IntoIterator for &'a FrameChain {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// One physical tile of a stitched capture, as reported by the external
/// stitching collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StitchTile {
    /// The area the tile occupies in the stitched image (screenshot-as-is)
    pub area: Region,
    /// The accumulated scroll offset that was applied to capture this tile
    pub scroll: Point,
}

impl StitchTile {
    pub fn new(area: Region, scroll: Point) -> Self {
        Self { area, scroll }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(x: i32, y: i32, scroll_x: i32, scroll_y: i32) -> Frame {
        Frame::new(
            Point::new(x, y),
            RectangleSize::new(100, 100),
            RectangleSize::new(90, 90),
            Point::new(scroll_x, scroll_y),
        )
    }

    #[test]
    fn empty_chain_has_zero_offset() {
        let chain = FrameChain::new();
        assert_eq!(chain.current_frame_offset(), Point::ZERO);
        assert!(chain.current_frame().is_none());
    }

    #[test]
    fn offsets_accumulate_minus_parent_scroll() {
        let mut chain = FrameChain::new();
        chain.push(frame(10, 20, 0, 5));
        chain.push(frame(3, 4, 1, 0));
        // (10-0 + 3-1, 20-5 + 4-0)
        assert_eq!(chain.current_frame_offset(), Point::new(12, 19));
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn pop_restores_parent_offset() {
        let mut chain = FrameChain::new();
        chain.push(frame(10, 10, 0, 0));
        chain.push(frame(5, 5, 0, 0));
        chain.pop();
        assert_eq!(chain.current_frame_offset(), Point::new(10, 10));
    }
}
