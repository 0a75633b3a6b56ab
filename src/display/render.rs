use crate::animation::{AnimationCache, Playback};
use crate::constants::progress::{BAR_WIDTH, MAX_VALUE};
use crate::constants::ui::{
    FALLBACK_HEIGHT, FALLBACK_WIDTH, MAX_STATUS_LINES, STATUS_GAP_ROWS,
};
use crate::display::state::{DisplayMode, StatusDisplay};
use crate::error::AppError;
use crossterm::{execute, style::Print};
use image::RgbaImage;
use std::io::{Stdout, Write};
use unicode_width::UnicodeWidthStr;

/// Full-screen splash surface: the animation block on top, the status cell
/// (text label or progress bar, never both) below it.
///
/// Rendering is double buffered: the whole screen is built as one string
/// of ANSI escape sequences and written with a single `Print`, which keeps
/// redraws at the animation frame rate free of flicker.
#[derive(Debug)]
pub struct SplashScreen {
    cache: AnimationCache,
    playback: Playback,
    status: StatusDisplay,
}

impl SplashScreen {
    /// Creates a splash over a precomputed frame cache, idle and at frame
    /// zero.
    pub fn new(cache: AnimationCache) -> Self {
        let playback = Playback::new(cache.frame_count());
        Self {
            cache,
            playback,
            status: StatusDisplay::new(),
        }
    }

    /// Number of frames in one full animation cycle.
    pub fn frame_count(&self) -> usize {
        self.cache.frame_count()
    }

    /// Read access to the display state machine.
    #[allow(dead_code)] // Used in tests
    pub fn status(&self) -> &StatusDisplay {
        &self.status
    }

    /// Current playback cursor.
    #[allow(dead_code)] // Used in tests
    pub fn cursor(&self) -> usize {
        self.playback.cursor()
    }

    /// Advances the animation by one frame; the caller redraws afterwards.
    pub fn advance_frame(&mut self) {
        self.playback.tick();
    }

    /// Feeds one input line through the display state machine.
    /// Returns `true` when the visible state changed and a redraw is needed.
    pub fn apply_line(&mut self, line: &str) -> bool {
        self.status.apply_line(line)
    }

    /// Builds the complete screen content for the given terminal size.
    ///
    /// The widget block is fixed-size and centered; the terminal size only
    /// moves its origin. Rendering the animation is a bitmap blit of the
    /// precomputed frame at the current cursor with two vertically stacked
    /// pixels per character cell.
    pub fn build_buffer(&self, width: u16, height: u16) -> String {
        let width = width as usize;
        let height = height as usize;

        let (canvas_w, canvas_h) = self.cache.canvas_size();
        let frame_cols = canvas_w as usize;
        let frame_rows = (canvas_h as usize).div_ceil(2);

        let block_rows = frame_rows + STATUS_GAP_ROWS + MAX_STATUS_LINES;
        let top_row = height.saturating_sub(block_rows) / 2 + 1;
        let origin_col = width.saturating_sub(frame_cols) / 2 + 1;
        let status_row = top_row + frame_rows + STATUS_GAP_ROWS;
        let status_width = width.saturating_sub(4);

        // Rough per-cell cost of two truecolor escapes plus the glyph
        let mut buffer = String::with_capacity(frame_cols * frame_rows * 44 + 256);

        // Home the cursor and clear the previous frame
        buffer.push_str("\x1b[H\x1b[0J");

        push_frame_cells(
            &mut buffer,
            self.cache.frame(self.playback.cursor()),
            top_row,
            origin_col,
        );

        match self.status.mode() {
            DisplayMode::Idle => {}
            DisplayMode::ShowingText => {
                let lines =
                    wrap_status_text(self.status.text().content(), status_width, MAX_STATUS_LINES);
                for (i, line) in lines.iter().enumerate() {
                    let col = width.saturating_sub(line.width()) / 2 + 1;
                    buffer.push_str(&format!(
                        "\x1b[{};{}H\x1b[38;5;231m{}\x1b[0m",
                        status_row + i,
                        col,
                        line
                    ));
                }
            }
            DisplayMode::ShowingProgress => {
                let bar = format_progress_bar(self.status.progress().value());
                let col = width.saturating_sub(bar.width()) / 2 + 1;
                buffer.push_str(&format!(
                    "\x1b[{status_row};{col}H\x1b[38;5;231m{bar}\x1b[0m"
                ));
            }
        }

        buffer
    }

    /// Renders the current state to the terminal in one buffered write.
    ///
    /// Terminal size is probed per render with an 80x24 fallback; the
    /// widget itself never resizes.
    pub fn render_buffered(&self, stdout: &mut Stdout) -> Result<(), AppError> {
        let (width, height) =
            crossterm::terminal::size().unwrap_or((FALLBACK_WIDTH, FALLBACK_HEIGHT));
        let buffer = self.build_buffer(width, height);
        execute!(stdout, Print(buffer))?;
        stdout.flush()?;
        Ok(())
    }
}

/// Blits one frame into the buffer as half-block cells: the upper pixel of
/// each pair becomes the foreground of `▀`, the lower pixel the background.
/// Alpha is pre-blended against the black screen background.
fn push_frame_cells(buffer: &mut String, frame: &RgbaImage, top_row: usize, origin_col: usize) {
    let (width, height) = frame.dimensions();
    for cell_row in 0..(height as usize).div_ceil(2) {
        buffer.push_str(&format!("\x1b[{};{}H", top_row + cell_row, origin_col));
        for x in 0..width {
            let upper = blend_on_black(frame, x, (cell_row * 2) as u32);
            let lower_y = (cell_row * 2 + 1) as u32;
            let lower = if lower_y < height {
                blend_on_black(frame, x, lower_y)
            } else {
                [0, 0, 0]
            };
            buffer.push_str(&format!(
                "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m▀",
                upper[0], upper[1], upper[2], lower[0], lower[1], lower[2]
            ));
        }
        buffer.push_str("\x1b[0m");
    }
}

/// Resolves one pixel against the black background using its alpha.
fn blend_on_black(frame: &RgbaImage, x: u32, y: u32) -> [u8; 3] {
    let p = frame.get_pixel(x, y).0;
    let alpha = u16::from(p[3]);
    [
        (u16::from(p[0]) * alpha / 255) as u8,
        (u16::from(p[1]) * alpha / 255) as u8,
        (u16::from(p[2]) * alpha / 255) as u8,
    ]
}

/// Formats the progress bar with its percentage label, e.g.
/// `██████░░...░  42%`. The value is already clamped by the indicator.
pub(crate) fn format_progress_bar(value: u32) -> String {
    let filled = BAR_WIDTH * value as usize / MAX_VALUE as usize;
    let mut bar = String::with_capacity(BAR_WIDTH * 3 + 8);
    for _ in 0..filled {
        bar.push('█');
    }
    for _ in filled..BAR_WIDTH {
        bar.push('░');
    }
    bar.push_str(&format!(" {value:>3}%"));
    bar
}

/// Greedy word wrap bounded to `max_lines`. Words wider than the line are
/// hard-split; later lines beyond the limit are dropped (the widget cell
/// is fixed-size).
pub(crate) fn wrap_status_text(text: &str, max_width: usize, max_lines: usize) -> Vec<String> {
    if max_width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    let flush = |lines: &mut Vec<String>, current: &mut String, current_width: &mut usize| {
        if !current.is_empty() {
            lines.push(std::mem::take(current));
            *current_width = 0;
        }
    };

    for word in text.split_whitespace() {
        if lines.len() >= max_lines {
            break;
        }

        let word_width = word.width();
        if word_width > max_width {
            // Hard-split a word that cannot fit any line
            flush(&mut lines, &mut current, &mut current_width);
            let mut piece = String::new();
            let mut piece_width = 0usize;
            for ch in word.chars() {
                let ch_width = ch.to_string().width();
                if piece_width + ch_width > max_width {
                    lines.push(std::mem::take(&mut piece));
                    piece_width = 0;
                    if lines.len() >= max_lines {
                        break;
                    }
                }
                piece.push(ch);
                piece_width += ch_width;
            }
            current = piece;
            current_width = piece_width;
            continue;
        }

        let separator = usize::from(!current.is_empty());
        if current_width + separator + word_width <= max_width {
            if separator == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += separator + word_width;
        } else {
            flush(&mut lines, &mut current, &mut current_width);
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() && lines.len() < max_lines {
        lines.push(current);
    }
    lines.truncate(max_lines);
    lines
}
