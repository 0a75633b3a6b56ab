use crate::constants::progress::{MAX_VALUE, MIN_VALUE};

/// Outcome of classifying one input line.
///
/// The two non-empty interpretations are mutually exclusive: a line is a
/// progress value exactly when every character is a decimal digit and the
/// digits fit the value type; everything else non-empty is status text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification<'a> {
    /// Zero-length line; leaves the previous display state unchanged
    Empty,
    /// All-digit line parsed to its integer value
    Progress(u32),
    /// Any other non-empty line, kept verbatim
    Text(&'a str),
}

/// Classifies one input line.
///
/// Digit-only lines whose value exceeds `u32` capacity fall back to text
/// display instead of failing; the line is still shown, just not as a
/// percentage.
pub fn classify(line: &str) -> Classification<'_> {
    if line.is_empty() {
        return Classification::Empty;
    }

    if line.bytes().all(|b| b.is_ascii_digit()) {
        match line.parse::<u32>() {
            Ok(value) => Classification::Progress(value),
            Err(_) => Classification::Text(line),
        }
    } else {
        Classification::Text(line)
    }
}

/// Which of the two status widgets is currently visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// No non-empty line received yet; both widgets hidden
    #[default]
    Idle,
    /// Text label visible, progress indicator hidden
    ShowingText,
    /// Progress indicator visible, text label hidden
    ShowingProgress,
}

/// Word-wrappable status text widget.
#[derive(Debug, Clone, Default)]
pub struct TextLabel {
    content: String,
    visible: bool,
}

impl TextLabel {
    /// Current text content, verbatim as received.
    pub fn content(&self) -> &str {
        &self.content
    }

    #[allow(dead_code)] // Used in tests
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_text(&mut self, content: &str) {
        self.content.clear();
        self.content.push_str(content);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Bounded progress indicator with a fixed `[MIN_VALUE, MAX_VALUE]` range.
#[derive(Debug, Clone)]
pub struct ProgressIndicator {
    value: u32,
    visible: bool,
}

impl Default for ProgressIndicator {
    fn default() -> Self {
        Self {
            value: MIN_VALUE,
            visible: false,
        }
    }
}

impl ProgressIndicator {
    /// Current value, always within the indicator range.
    pub fn value(&self) -> u32 {
        self.value
    }

    #[allow(dead_code)] // Used in tests
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Sets the value, clamping into the indicator range. Out-of-range
    /// input is not rejected; the boundary is absorbed here.
    fn set_value(&mut self, value: u32) {
        self.value = value.clamp(MIN_VALUE, MAX_VALUE);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Input-driven display state machine.
///
/// Owns the text and progress widgets that share one layout cell. Each
/// non-empty line flips the display to exactly one of them; after the first
/// valid status the invariant holds that precisely one widget is visible.
#[derive(Debug, Clone, Default)]
pub struct StatusDisplay {
    mode: DisplayMode,
    text: TextLabel,
    progress: ProgressIndicator,
}

impl StatusDisplay {
    /// Creates a display in the idle state with both widgets hidden.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn text(&self) -> &TextLabel {
        &self.text
    }

    pub fn progress(&self) -> &ProgressIndicator {
        &self.progress
    }

    /// Classifies one line and updates widget content and visibility.
    ///
    /// Returns `true` when the displayed state changed and a redraw is
    /// needed; an empty line is a deliberate no-op and returns `false`.
    pub fn apply_line(&mut self, line: &str) -> bool {
        match classify(line) {
            Classification::Empty => false,
            Classification::Progress(value) => {
                self.mode = DisplayMode::ShowingProgress;
                self.progress.set_value(value);
                self.progress.set_visible(true);
                self.text.set_visible(false);
                true
            }
            Classification::Text(content) => {
                self.mode = DisplayMode::ShowingText;
                self.text.set_text(content);
                self.text.set_visible(true);
                self.progress.set_visible(false);
                true
            }
        }
    }
}
