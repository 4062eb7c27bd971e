//! Theme data model: built-in palettes and resolution from config.
//!
//! The theme system provides two built-in palettes (dark and light) and
//! supports custom color overrides from the config file.

use ratatui::style::Color;

use crate::config::{ThemeColorsConfig, ThemeConfig};

// ── Runtime theme colors ─────────────────────────────────────────────────────

/// All runtime colors used in the UI.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Entry list
    pub list_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub hidden_fg: Color,

    // Preview panel
    pub preview_fg: Color,
    pub preview_label_fg: Color,

    // Status bar
    pub status_bg: Color,
    pub status_fg: Color,

    // Borders & chrome
    pub border_fg: Color,
    pub search_fg: Color,

    // Semantic colors (not configurable, consistent across themes)
    pub error_fg: Color,
    pub dim_fg: Color,
}

// ── Built-in palettes ────────────────────────────────────────────────────────

/// Dark theme using Catppuccin Mocha palette.
pub fn dark_theme() -> ThemeColors {
    ThemeColors {
        list_fg: Color::Rgb(205, 214, 244),     // #cdd6f4 (text)
        selected_bg: Color::Rgb(205, 214, 244), // inverted: text as background
        selected_fg: Color::Rgb(30, 30, 46),    // #1e1e2e (base)
        hidden_fg: Color::Rgb(108, 112, 134),   // #6c7086 (overlay0)

        preview_fg: Color::Rgb(205, 214, 244),
        preview_label_fg: Color::Rgb(137, 180, 250), // #89b4fa (blue)

        status_bg: Color::Rgb(30, 30, 46),
        status_fg: Color::Rgb(205, 214, 244),

        border_fg: Color::Rgb(88, 91, 112),     // #585b70 (surface2)
        search_fg: Color::Rgb(249, 226, 175),   // #f9e2af (yellow)

        error_fg: Color::Rgb(243, 139, 168),    // #f38ba8 (red)
        dim_fg: Color::Rgb(108, 112, 134),
    }
}

/// Light theme using Catppuccin Latte palette.
pub fn light_theme() -> ThemeColors {
    ThemeColors {
        list_fg: Color::Rgb(76, 79, 105),       // #4c4f69 (text)
        selected_bg: Color::Rgb(76, 79, 105),
        selected_fg: Color::Rgb(239, 241, 245), // #eff1f5 (base)
        hidden_fg: Color::Rgb(156, 160, 176),   // #9ca0b0 (overlay0)

        preview_fg: Color::Rgb(76, 79, 105),
        preview_label_fg: Color::Rgb(30, 102, 245), // #1e66f5 (blue)

        status_bg: Color::Rgb(239, 241, 245),
        status_fg: Color::Rgb(76, 79, 105),

        border_fg: Color::Rgb(172, 176, 190),   // #acb0be (surface2)
        search_fg: Color::Rgb(223, 142, 29),    // #df8e1d (yellow)

        error_fg: Color::Rgb(210, 15, 57),      // #d20f39 (red)
        dim_fg: Color::Rgb(156, 160, 176),
    }
}

// ── Color parsing ────────────────────────────────────────────────────────────

/// Parse a hex color string like `"#aabbcc"` into a `ratatui::style::Color`.
/// Returns `None` for malformed input.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

// ── Theme resolution ─────────────────────────────────────────────────────────

/// Resolve the final `ThemeColors` from config.
///
/// - `"dark"` (default): dark Catppuccin palette
/// - `"light"`: light Catppuccin palette
/// - `"custom"`: start from dark palette, then override with custom hex values
pub fn resolve_theme(config: &ThemeConfig) -> ThemeColors {
    match config.scheme.as_deref().unwrap_or("dark") {
        "light" => light_theme(),
        "custom" => {
            let mut theme = dark_theme();
            if let Some(custom) = &config.custom {
                apply_custom_colors(&mut theme, custom);
            }
            theme
        }
        _ => dark_theme(),
    }
}

/// Apply custom hex color overrides on top of an existing theme.
/// Malformed values leave the existing color in place.
fn apply_custom_colors(theme: &mut ThemeColors, custom: &ThemeColorsConfig) {
    let overrides = [
        (&custom.list_fg, &mut theme.list_fg),
        (&custom.selected_bg, &mut theme.selected_bg),
        (&custom.selected_fg, &mut theme.selected_fg),
        (&custom.hidden_fg, &mut theme.hidden_fg),
        (&custom.preview_fg, &mut theme.preview_fg),
        (&custom.preview_label_fg, &mut theme.preview_label_fg),
        (&custom.status_bg, &mut theme.status_bg),
        (&custom.status_fg, &mut theme.status_fg),
        (&custom.border_fg, &mut theme.border_fg),
        (&custom.search_fg, &mut theme.search_fg),
    ];
    for (hex, slot) in overrides {
        if let Some(color) = hex.as_deref().and_then(parse_hex_color) {
            *slot = color;
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_valid() {
        assert_eq!(parse_hex_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("#1a1b26"), Some(Color::Rgb(26, 27, 38)));
        assert_eq!(parse_hex_color("00ff00"), Some(Color::Rgb(0, 255, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color(""), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }

    #[test]
    fn test_resolve_default_is_dark() {
        let theme = resolve_theme(&ThemeConfig::default());
        assert_eq!(theme.preview_label_fg, Color::Rgb(137, 180, 250));
    }

    #[test]
    fn test_resolve_light_theme() {
        let config = ThemeConfig {
            scheme: Some("light".to_string()),
            custom: None,
        };
        let theme = resolve_theme(&config);
        assert_eq!(theme.preview_label_fg, Color::Rgb(30, 102, 245));
    }

    #[test]
    fn test_resolve_custom_overrides() {
        let config = ThemeConfig {
            scheme: Some("custom".to_string()),
            custom: Some(ThemeColorsConfig {
                selected_bg: Some("#1a1b26".to_string()),
                search_fg: Some("#c0caf5".to_string()),
                border_fg: Some("#nothex".to_string()),
                ..Default::default()
            }),
        };
        let theme = resolve_theme(&config);
        assert_eq!(theme.selected_bg, Color::Rgb(26, 27, 38));
        assert_eq!(theme.search_fg, Color::Rgb(192, 202, 245));
        // Invalid hex keeps the dark default.
        assert_eq!(theme.border_fg, Color::Rgb(88, 91, 112));
        assert_eq!(theme.list_fg, Color::Rgb(205, 214, 244));
    }

    #[test]
    fn test_unknown_scheme_falls_back_to_dark() {
        let config = ThemeConfig {
            scheme: Some("neon".to_string()),
            custom: None,
        };
        let theme = resolve_theme(&config);
        assert_eq!(theme.preview_label_fg, Color::Rgb(137, 180, 250));
    }

    #[test]
    fn test_selection_is_inverted_in_both_palettes() {
        for theme in [dark_theme(), light_theme()] {
            assert_eq!(theme.selected_bg, theme.list_fg);
            assert_ne!(theme.selected_fg, theme.selected_bg);
        }
    }
}
