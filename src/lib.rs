//! Full-Screen Terminal Boot/Update Status Display Library
//!
//! This library provides the animated spinner cache and the stdin-driven
//! status display used by the `bootsplash` binary during a device's boot
//! or update sequence.
//!
//! # Examples
//!
//! ```rust,no_run
//! use bootsplash::animation::AnimationCache;
//! use bootsplash::display::SplashScreen;
//! use bootsplash::error::AppError;
//!
//! fn main() -> Result<(), AppError> {
//!     // Precompute one full rotation of composited frames
//!     let cache = AnimationCache::load("assets/icon.png", "assets/track.png", 30)?;
//!
//!     // Drive the display with status lines
//!     let mut splash = SplashScreen::new(cache);
//!     splash.apply_line("Installing packages");
//!     splash.apply_line("42");
//!
//!     // Render the current state to the terminal
//!     let mut stdout = std::io::stdout();
//!     splash.render_buffered(&mut stdout)?;
//!
//!     Ok(())
//! }
//! ```

pub mod animation;
pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod logging;

// Re-export commonly used types for convenience
pub use animation::{AnimationCache, Playback};
pub use config::Config;
pub use display::{
    ChannelLineSource, Classification, DisplayMode, LineSource, SplashScreen, StatusDisplay,
    StdinLineSource, classify,
};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
