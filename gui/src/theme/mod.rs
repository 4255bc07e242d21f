//! Employee Hub theme
//!
//! Deep navy surfaces with a coral accent.

use gpui::{rgb, Hsla};

/// Employee Hub color palette
pub mod colors {
    use gpui::rgb;

    // Background colors
    pub fn bg_dark() -> gpui::Hsla { rgb(0x0f0f1a).into() }      // #0f0f1a - Page background
    pub fn bg_base() -> gpui::Hsla { rgb(0x16213e).into() }      // #16213e - Cards
    pub fn bg_light() -> gpui::Hsla { rgb(0x1f2b4d).into() }     // #1f2b4d - Inputs, table header
    pub fn bg_highlight() -> gpui::Hsla { rgb(0x2a3a63).into() } // #2a3a63 - Hovered rows

    // Foreground colors
    pub fn fg_base() -> gpui::Hsla { rgb(0xf5f5f5).into() }      // #f5f5f5 - Main text
    pub fn fg_dim() -> gpui::Hsla { rgb(0xa0a0b8).into() }       // #a0a0b8 - Secondary text
    pub fn fg_muted() -> gpui::Hsla { rgb(0x6c6c85).into() }     // #6c6c85 - Hints

    // Accent colors
    pub fn coral() -> gpui::Hsla { rgb(0xe94560).into() }        // #e94560 - Primary accent
    pub fn coral_hover() -> gpui::Hsla { rgb(0xff6b81).into() }  // #ff6b81 - Accent hover
    pub fn mint() -> gpui::Hsla { rgb(0x00d9a5).into() }         // #00d9a5 - Success
    pub fn amber() -> gpui::Hsla { rgb(0xffc93c).into() }        // #ffc93c - Warning

    // Border colors
    pub fn border() -> gpui::Hsla { rgb(0x2a3a63).into() }
}

/// Theme configuration
#[derive(Clone)]
pub struct HubTheme {
    // Backgrounds
    pub background: Hsla,
    pub surface: Hsla,
    pub surface_elevated: Hsla,
    pub surface_highlight: Hsla,

    // Foregrounds
    pub foreground: Hsla,
    pub foreground_dim: Hsla,
    pub foreground_muted: Hsla,

    // Accents
    pub accent: Hsla,
    pub accent_hover: Hsla,

    // Semantic
    pub success: Hsla,
    pub warning: Hsla,
    pub error: Hsla,

    // UI
    pub border: Hsla,
}

impl Default for HubTheme {
    fn default() -> Self {
        Self {
            background: colors::bg_dark(),
            surface: colors::bg_base(),
            surface_elevated: colors::bg_light(),
            surface_highlight: colors::bg_highlight(),

            foreground: colors::fg_base(),
            foreground_dim: colors::fg_dim(),
            foreground_muted: colors::fg_muted(),

            accent: colors::coral(),
            accent_hover: colors::coral_hover(),

            success: colors::mint(),
            warning: colors::amber(),
            error: colors::coral(),

            border: colors::border(),
        }
    }
}

impl HubTheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Badge color for a department name
    pub fn department(&self, department: &str) -> Hsla {
        rgb(employee_hub_core::display::department_color(department)).into()
    }
}
