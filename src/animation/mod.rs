//! Precomputed spinner animation
//!
//! The animation is a fixed-length sequence of composited raster frames
//! (brand icon base layer, track icon rotated in equal angular steps) built
//! once at startup, plus a cursor that loops over them on the event-loop
//! timer. Frames are immutable after construction; playback is a bitmap
//! blit, never a recomputation.

pub mod cache;
pub mod playback;

pub use cache::AnimationCache;
pub use playback::Playback;
