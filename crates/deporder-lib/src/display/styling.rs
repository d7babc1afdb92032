//! Semantic styling backed by `console`

use console::Style;

const CHECKMARK: &str = "✓";
const CROSS: &str = "✗";
const WARNING: &str = "!";
const INFO: &str = "·";
const BULLET: &str = "•";
const ARROW: &str = "→";

/// Colour palette for status lines
///
/// When colours are disabled every style is a no-op, so the rendered text is
/// plain and stable enough to assert on.
#[derive(Debug, Clone)]
pub struct Styling {
    success: Style,
    error: Style,
    warning: Style,
    info: Style,
    emphasis: Style,
    subtle: Style,
}

impl Styling {
    pub fn new(colors: bool) -> Self {
        let base = Style::new().force_styling(colors);
        Self {
            success: base.clone().green(),
            error: base.clone().red(),
            warning: base.clone().yellow(),
            info: base.clone().cyan(),
            emphasis: base.clone().bold(),
            subtle: base.dim(),
        }
    }

    /// Styling without escape codes
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn format_success(&self, message: &str) -> String {
        format!("{} {}", self.success.apply_to(CHECKMARK), message)
    }

    pub fn format_error(&self, message: &str) -> String {
        format!("{} {}", self.error.apply_to(CROSS), self.error.apply_to(message))
    }

    pub fn format_warning(&self, message: &str) -> String {
        format!("{} {}", self.warning.apply_to(WARNING), message)
    }

    pub fn format_info(&self, message: &str) -> String {
        format!("{} {}", self.info.apply_to(INFO), message)
    }

    pub fn format_working(&self, message: &str) -> String {
        format!("{} {}", self.info.apply_to(ARROW), message)
    }

    pub fn style_emphasis(&self, text: &str) -> String {
        self.emphasis.apply_to(text).to_string()
    }

    pub fn style_subtle(&self, text: &str) -> String {
        self.subtle.apply_to(text).to_string()
    }

    pub fn bullet(&self) -> &'static str {
        BULLET
    }
}
