use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// How the swatch column draws an entry color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwatchMode {
    /// Truecolor background block
    Block,
    /// `#rrggbb` text, for pipes and colorless terminals
    Hex,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub success: Style,
    pub error: Style,
    pub warn: Style,
    pub info: Style,
    pub dim: Style,
    pub swatch: SwatchMode,
    /// Drawn in place of a color whose channels do not parse
    pub unknown_swatch: &'static str,
}

impl Theme {
    pub fn detect() -> Self {
        if !console::Term::stdout().is_term() || !console::colors_enabled() {
            return Self::plain();
        }
        Self::colored()
    }

    pub fn colored() -> Self {
        Self {
            header: Style::new().bright_magenta().bold(),
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
            warn: Style::new().yellow(),
            info: Style::new().cyan(),
            dim: Style::new().bright_black(),
            swatch: SwatchMode::Block,
            unknown_swatch: "░░░░░░",
        }
    }

    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            success: Style::new(),
            error: Style::new(),
            warn: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            swatch: SwatchMode::Hex,
            unknown_swatch: "?",
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
