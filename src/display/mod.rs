//! Input-driven status display
//!
//! One line in, one display update out: each line pulled from the
//! [`LineSource`] is classified as a progress percentage (all decimal
//! digits) or a status message (anything else non-empty) and the matching
//! widget is shown. Empty lines leave the display untouched. The renderer
//! draws the current animation frame and whichever widget is visible into a
//! single buffered write.

pub mod line_source;
pub mod render;
pub mod state;

pub use line_source::{ChannelLineSource, LineSource, StdinLineSource};
pub use render::SplashScreen;
pub use state::{Classification, DisplayMode, StatusDisplay, classify};
