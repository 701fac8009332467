//! Visual theme and styling.

use console::Style;

/// Terminal styles for prereqs output.
#[derive(Debug, Clone)]
pub struct PrereqsTheme {
    /// Success messages (green).
    pub success: Style,
    /// Warning messages (orange).
    pub warning: Style,
    /// Error messages (red bold).
    pub error: Style,
    /// Secondary text (dim).
    pub dim: Style,
    /// Important text (bold).
    pub highlight: Style,
    /// Headers (blue bold).
    pub header: Style,
    /// Level headings inside result lists (cyan bold).
    pub level: Style,
    /// Course codes (bold).
    pub code: Style,
    /// Hints (blue dim).
    pub hint: Style,
}

impl Default for PrereqsTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PrereqsTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().blue(),
            level: Style::new().bold().cyan(),
            code: Style::new().bold(),
            hint: Style::new().blue().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            level: Style::new(),
            code: Style::new(),
            hint: Style::new(),
        }
    }

    /// Pick colored or plain based on the environment and `--no-color`.
    pub fn detect(no_color: bool) -> Self {
        if !no_color && should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format a hint line.
    pub fn format_hint(&self, hint: &str) -> String {
        format!("{}", self.hint.apply_to(hint))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
