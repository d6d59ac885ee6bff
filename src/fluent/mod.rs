//! Declarative region specifications and their resolution protocol
//!
//! A specification says *what* to treat specially (ignore this rectangle,
//! let that one float within tolerances); resolving it against a screenshot
//! and driving context produces the concrete regions the comparison backend
//! consumes. New resolver kinds (element-backed, text-search, ...) plug in
//! by implementing one of the two traits; callers never change.

pub mod region;

pub use region::{
    FloatingRegionByRectangle, GetFloatingRegion, GetRegion, IgnoreRegionByRectangle,
};
