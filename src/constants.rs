//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Wall-clock duration of one full animation loop in milliseconds
pub const CYCLE_DURATION_MS: u64 = 1000;

/// Default number of animation frames per cycle. The track icon advances by
/// 360 / frame count degrees per frame; at a 1000ms cycle this is also the
/// effective frame rate.
pub const DEFAULT_FRAME_RATE: u32 = 30;

/// Upper bound for the configurable frame rate
pub const MAX_FRAME_RATE: u32 = 120;

/// Animation canvas geometry in pixels. One pixel maps to one terminal
/// column; two vertically stacked pixels map to one terminal row.
pub mod canvas {
    /// Side length of the square spinner canvas
    pub const CANVAS_PX: u32 = 40;

    /// Target side length of the rotating track icon before compositing
    pub const TRACK_PX: u32 = 30;
}

/// Progress indicator range and layout
pub mod progress {
    /// Lowest displayable progress value
    pub const MIN_VALUE: u32 = 1;

    /// Highest displayable progress value
    pub const MAX_VALUE: u32 = 100;

    /// Width of the rendered progress bar in terminal columns,
    /// excluding the trailing percentage label
    pub const BAR_WIDTH: usize = 32;
}

/// UI layout constants
pub mod ui {
    /// Vertical gap between the spinner block and the status row
    pub const STATUS_GAP_ROWS: usize = 1;

    /// Maximum number of wrapped lines shown for a text status
    pub const MAX_STATUS_LINES: usize = 2;

    /// Fallback terminal width when size detection fails
    pub const FALLBACK_WIDTH: u16 = 80;

    /// Fallback terminal height when size detection fails
    pub const FALLBACK_HEIGHT: u16 = 24;
}

/// Default asset locations, relative to the working directory of the
/// running process (resolution of that directory is the launcher's job)
pub mod assets {
    /// Background / brand icon shown as the base layer
    pub const DEFAULT_ICON_PATH: &str = "assets/icon.png";

    /// Track icon rotated on top of the base layer
    pub const DEFAULT_TRACK_PATH: &str = "assets/track.png";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for the brand icon path override
    pub const ICON_PATH: &str = "BOOTSPLASH_ICON";

    /// Environment variable for the track icon path override
    pub const TRACK_PATH: &str = "BOOTSPLASH_TRACK";

    /// Environment variable for the log file path override
    pub const LOG_FILE: &str = "BOOTSPLASH_LOG_FILE";

    /// Environment variable for the frame rate override
    pub const FRAME_RATE: &str = "BOOTSPLASH_FPS";
}
