//! Timeline mapping and subtitle lookup.
//!
//! The two language tracks tell the same story at different speeds, segment
//! by segment. These pure functions translate positions between the two
//! timelines and find the segment a position falls in.

pub mod index;
pub mod map;

pub use index::active_index;
pub use map::map_position;
