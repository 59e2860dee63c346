//! Design tokens for the wizard's terminal output.
//!
//! Design constraints:
//! - Only 5 semantic colors (`colors::*`)
//! - All icons must be sourced from this module

use std::fmt;

use crossterm::style::{Color, Stylize};
use dialoguer::theme::Theme;
use is_terminal::IsTerminal;

pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";

    // Selection states (for MultiSelect).
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";

    // Selection states (for MultiSelect).
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
}

/// What the attached terminal can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermCaps {
    pub color: bool,
    pub unicode: bool,
}

/// Detect terminal capabilities from the environment.
///
/// Color needs a tty on stdout, a non-dumb `TERM`, and no `NO_COLOR`;
/// unicode is inferred from the locale variables.
pub fn detect() -> TermCaps {
    let tty = std::io::stdout().is_terminal();
    let term_ok = std::env::var("TERM").map(|t| t != "dumb").unwrap_or(true);
    let no_color = std::env::var_os("NO_COLOR").is_some();

    let unicode = ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|key| std::env::var(key).ok().filter(|v| !v.is_empty()))
        .map(|v| v.to_uppercase().contains("UTF"))
        .unwrap_or(false);

    TermCaps {
        color: tty && term_ok && !no_color,
        unicode,
    }
}

/// Paint `text` when color is enabled, pass it through untouched otherwise.
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}

/// Semantic icons with ASCII fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
}

impl Icon {
    pub fn glyph(self, unicode: bool) -> &'static str {
        if unicode {
            match self {
                Self::Success => icons::SUCCESS,
                Self::Error => icons::ERROR,
                Self::Warning => icons::WARNING,
                Self::Arrow => icons::ARROW,
            }
        } else {
            match self {
                Self::Success => icons_ascii::SUCCESS,
                Self::Error => icons_ascii::ERROR,
                Self::Warning => icons_ascii::WARNING,
                Self::Arrow => icons_ascii::ARROW,
            }
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Success => colors::SUCCESS,
            Self::Error => colors::ERROR,
            Self::Warning => colors::WARNING,
            Self::Arrow => colors::DIM,
        }
    }

    pub fn colored(self, caps: TermCaps) -> String {
        paint(self.glyph(caps.unicode), self.color(), caps.color)
    }
}

// ----------------------------------------------------------------------------
// WizardTheme - dialoguer theme with ●/○ selection icons
// ----------------------------------------------------------------------------

/// Custom theme for dialoguer prompts.
///
/// Wraps `ColorfulTheme` and only overrides the multi-select item
/// formatting to use `●`/`○` (or `[x]`/`[ ]` in ASCII fallback mode) while
/// preserving all other behaviors.
pub struct WizardTheme {
    unicode: bool,
    inner: dialoguer::theme::ColorfulTheme,
}

impl WizardTheme {
    pub fn new(unicode: bool) -> Self {
        Self {
            unicode,
            inner: dialoguer::theme::ColorfulTheme::default(),
        }
    }

    pub fn selected_icon(&self) -> &'static str {
        if self.unicode {
            icons::SELECTED
        } else {
            icons_ascii::SELECTED
        }
    }

    pub fn unselected_icon(&self) -> &'static str {
        if self.unicode {
            icons::UNSELECTED
        } else {
            icons_ascii::UNSELECTED
        }
    }
}

impl Theme for WizardTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<bool>,
    ) -> fmt::Result {
        self.inner.format_confirm_prompt(f, prompt, default)
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selection: Option<bool>,
    ) -> fmt::Result {
        self.inner
            .format_confirm_prompt_selection(f, prompt, selection)
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        self.inner.format_input_prompt(f, prompt, default)
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner.format_input_prompt_selection(f, prompt, sel)
    }

    fn format_multi_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        checked: bool,
        active: bool,
    ) -> fmt::Result {
        let icon = if checked {
            self.selected_icon()
        } else {
            self.unselected_icon()
        };
        let cursor = if active { ">" } else { " " };
        write!(f, "{cursor} {icon} {text}")
    }
}
