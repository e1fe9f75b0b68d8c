//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Studio - warm coral accents on a charcoal canvas

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(240, 236, 230);
    pub const TEXT_DIM: Color = Color::Rgb(110, 106, 102);
    pub const TEXT_MUTED: Color = Color::Rgb(160, 154, 148);

    pub const BG_DARK: Color = Color::Rgb(28, 27, 26);
    pub const BG_SURFACE: Color = Color::Rgb(40, 38, 36);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(62, 58, 54);

    pub const CORAL: Color = Color::Rgb(255, 127, 102);
    pub const SAND: Color = Color::Rgb(236, 204, 150);
    pub const SAGE: Color = Color::Rgb(148, 190, 150);
    pub const RED: Color = Color::Rgb(220, 80, 80);
}

/// Toast styles
pub mod notification {
    use super::*;

    /// Colors for a single toast
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ToastStyle {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const DEFAULT: ToastStyle = ToastStyle {
        fg: palette::TEXT,
        bg: palette::BG_SURFACE,
        border: palette::TEXT_MUTED,
    };

    pub const DESTRUCTIVE: ToastStyle = ToastStyle {
        fg: Color::Rgb(255, 255, 255),
        bg: Color::Rgb(150, 40, 40),
        border: palette::RED,
    };
}

/// Dropdown select styles
pub mod select {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CORAL;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const VALUE: Color = palette::TEXT;
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;
    pub const INDICATOR: Color = palette::CORAL;

    pub const PANEL_BORDER: Color = palette::CORAL;
    pub const PANEL_BG: Color = palette::BG_SURFACE;
    pub const OPTION: Color = palette::TEXT_MUTED;
    pub const OPTION_SELECTED: Color = palette::SAND;
    pub const HIGHLIGHT: Style = Style::new()
        .fg(palette::BG_DARK)
        .bg(palette::CORAL)
        .add_modifier(Modifier::BOLD);
}

/// Page section styles
pub mod page {
    use super::*;

    pub const BORDER: Color = palette::TEXT_DIM;
    pub const BORDER_FOCUSED: Color = palette::CORAL;
    pub const STUDIO: Color = palette::CORAL;
    pub const HEADLINE: Style = Style::new().fg(palette::TEXT).add_modifier(Modifier::BOLD);
    pub const TAGLINE: Color = palette::TEXT_MUTED;
    pub const CALL_TO_ACTION: Style = Style::new()
        .fg(palette::BG_DARK)
        .bg(palette::CORAL)
        .add_modifier(Modifier::BOLD);
    pub const SECTION_HEADING: Style = Style::new()
        .fg(palette::SAND)
        .add_modifier(Modifier::BOLD)
        .add_modifier(Modifier::UNDERLINED);
    pub const BODY: Color = palette::TEXT;
    pub const ITEM_NAME: Style = Style::new().fg(palette::SAGE).add_modifier(Modifier::BOLD);
    pub const PRICE: Color = palette::SAND;
    pub const PLAN_HIGHLIGHT: Style = Style::new().fg(palette::CORAL).add_modifier(Modifier::BOLD);
    pub const LINK: Style = Style::new()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::UNDERLINED);
}

/// Contact form styles
pub mod form {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CORAL;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const LABEL: Color = palette::TEXT_MUTED;
    pub const BUTTON: Style = Style::new().fg(palette::TEXT).bg(palette::BG_HIGHLIGHT);
    pub const BUTTON_FOCUSED: Style = Style::new()
        .fg(palette::BG_DARK)
        .bg(palette::CORAL)
        .add_modifier(Modifier::BOLD);
    pub const PENDING: Color = palette::SAND;
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Help line at the bottom
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::CORAL;
    pub const DESCRIPTION: Color = palette::TEXT_MUTED;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}
