//! Colour theme for the baekilha TUI.
//!
//! Themes are defined as TOML files. The default theme is embedded in the
//! binary via [`include_str!`] so the application works without any files on
//! disk. Call [`Theme::load_default`] at startup and pass the result through
//! the application as a shared reference.
//!
//! # Colour assignment for parties
//!
//! Known parties get their official colours from the theme's `[parties.known]`
//! table; any party not listed there is hashed to a stable index into the
//! fallback palette so the same name always gets the same colour.

use baekilha_data::BillStatus;
use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use std::collections::HashMap;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types — mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(ref s) = self.fg {
            if let Some(c) = parse_color(s) {
                style = style.fg(c);
            }
        }
        if let Some(ref s) = self.bg {
            if let Some(c) = parse_color(s) {
                style = style.bg(c);
            }
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underlined {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawStatuses {
    passed: RawStyle,
    rejected: RawStyle,
    pending: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBadges {
    new: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawParties {
    #[serde(default)]
    known: HashMap<String, String>,
    palette: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    statuses: RawStatuses,
    borders: RawBorders,
    badges: RawBadges,
    parties: RawParties,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme.
///
/// Load once at startup with [`Theme::load_default`] and pass as a shared
/// reference throughout the TUI. All styles are pre-resolved ratatui [`Style`]
/// values — no allocation at render time.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Styles for each bill deliberation status.
    pub status_passed: Style,
    pub status_rejected: Style,
    pub status_pending: Style,

    /// Border style for the currently focused pane.
    pub border_focused: Style,
    /// Border style for unfocused panes.
    pub border_unfocused: Style,

    /// Style of the NEW badge on fresh announcements.
    pub badge_new: Style,

    /// Official colours for known parties.
    party_colors: HashMap<String, Color>,
    /// Ordered fallback palette for parties not in `party_colors`.
    party_palette: Vec<Color>,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed. The default theme ships
    /// inside the binary, so this should never happen in practice.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Load and parse the embedded Gruvbox Dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str(GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Parse a theme from a TOML string.
    ///
    /// Returns an error if the string cannot be deserialised into a valid
    /// theme. Unknown keys are ignored so user themes can be forward-compatible
    /// with future theme additions.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            status_passed: raw.statuses.passed.into_style(),
            status_rejected: raw.statuses.rejected.into_style(),
            status_pending: raw.statuses.pending.into_style(),
            border_focused: raw.borders.focused.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            badge_new: raw.badges.new.into_style(),
            party_colors: raw
                .parties
                .known
                .into_iter()
                .filter_map(|(name, c)| parse_color(&c).map(|c| (name, c)))
                .collect(),
            party_palette: raw
                .parties
                .palette
                .iter()
                .filter_map(|s| parse_color(s))
                .collect(),
        })
    }

    /// Return the [`Style`] for a bill status.
    pub fn status_style(&self, status: BillStatus) -> Style {
        match status {
            BillStatus::Passed => self.status_passed,
            BillStatus::Rejected => self.status_rejected,
            BillStatus::Pending => self.status_pending,
        }
    }

    /// Return a stable [`Style`] for a party name.
    ///
    /// Known parties use their official colour; anything else is hashed into
    /// the fallback palette, so the same name always maps to the same colour
    /// within a session.
    pub fn party_style(&self, party: &str) -> Style {
        if let Some(c) = self.party_colors.get(party) {
            return Style::default().fg(*c);
        }
        if self.party_palette.is_empty() {
            return Style::default();
        }
        let idx = stable_hash(party) % self.party_palette.len();
        Style::default().fg(self.party_palette[idx])
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Simple djb2-style hash that is stable across Rust versions and process
/// restarts, making fallback party colour assignment deterministic.
fn stable_hash(s: &str) -> usize {
    s.bytes().fold(5381usize, |acc, b| {
        acc.wrapping_mul(31).wrapping_add(b as usize)
    })
}

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `red`, `dark_gray`, etc.
/// - Hex RGB: `#rrggbb`
/// - 256-colour indexed: `indexed:N`
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        // is_ascii keeps the byte slicing below safe for multibyte input
        s if s.starts_with('#') && s.len() == 7 && s.is_ascii() => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_loads() {
        let theme = Theme::load_default();
        assert_ne!(theme.status_passed, Style::default());
        assert_ne!(theme.border_focused, Style::default());
        assert_ne!(theme.badge_new, Style::default());
        assert!(!theme.party_palette.is_empty());
    }

    #[test]
    fn gruvbox_dark_theme_loads() {
        let theme = Theme::load_gruvbox_dark();
        assert_ne!(theme.status_rejected, Style::default());
        assert_ne!(theme.border_focused, Style::default());
    }

    #[test]
    fn known_party_uses_official_color() {
        let theme = Theme::load_default();
        let style = theme.party_style("더불어민주당");
        assert_eq!(style, Style::default().fg(Color::Rgb(0x15, 0x24, 0x84)));
    }

    #[test]
    fn unknown_party_style_is_stable() {
        let theme = Theme::load_default();
        let a = theme.party_style("미래당");
        let b = theme.party_style("미래당");
        assert_eq!(a, b);
    }

    #[test]
    fn parse_hex_color() {
        assert_eq!(parse_color("#ff0080"), Some(Color::Rgb(255, 0, 128)));
    }

    #[test]
    fn parse_indexed_color() {
        assert_eq!(parse_color("indexed:42"), Some(Color::Indexed(42)));
    }

    #[test]
    fn parse_unknown_color_returns_none() {
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn parse_multibyte_hex_returns_none() {
        // 7 bytes but only 6 chars; must reject instead of slicing mid-char.
        assert_eq!(parse_color("#0é000"), None);
        assert_eq!(parse_color("#ééé"), None);
    }
}
