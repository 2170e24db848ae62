use crate::domain::ThemeMode;
use ratatui::style::{Color, Modifier, Style};

/// Every colour the renderer uses, picked once per frame from the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub title: Color,
    pub text: Color,
    pub border: Color,
    pub input_bg: Color,
    pub input_text: Color,
    pub placeholder: Color,
    pub row_bg: Color,
    pub row_text: Color,
    pub row_glyph: Color,
    pub row_marker: Color,
    pub selected_bg: Color,
    pub close: Color,
    pub hint: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(0xFB, 0xFA, 0xDA),
    title: Color::Rgb(0x12, 0x37, 0x2A),
    text: Color::Rgb(0x12, 0x37, 0x2A),
    border: Color::Rgb(0x43, 0x68, 0x50),
    input_bg: Color::Rgb(0xFF, 0xFF, 0xFF),
    input_text: Color::Rgb(0x43, 0x68, 0x50),
    placeholder: Color::Rgb(0x88, 0x88, 0x88),
    row_bg: Color::Rgb(0x12, 0x37, 0x2A),
    row_text: Color::White,
    row_glyph: Color::Rgb(0xFB, 0xFA, 0xDA),
    row_marker: Color::Rgb(0xAD, 0xBC, 0x9F),
    selected_bg: Color::Rgb(0x43, 0x68, 0x50),
    close: Color::Red,
    hint: Color::Rgb(0x43, 0x68, 0x50),
};

const DARK: Palette = Palette {
    background: Color::Rgb(0x12, 0x12, 0x12),
    title: Color::White,
    text: Color::White,
    border: Color::Rgb(0x88, 0x88, 0x88),
    input_bg: Color::Rgb(0x33, 0x33, 0x33),
    input_text: Color::White,
    placeholder: Color::Rgb(0xAA, 0xAA, 0xAA),
    row_bg: Color::Rgb(0x12, 0x37, 0x2A),
    row_text: Color::White,
    row_glyph: Color::Rgb(0xFB, 0xFA, 0xDA),
    row_marker: Color::Rgb(0xAD, 0xBC, 0x9F),
    selected_bg: Color::Rgb(0x43, 0x68, 0x50),
    close: Color::LightRed,
    hint: Color::Rgb(0x88, 0x88, 0x88),
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => DARK,
        }
    }

    /// Screen background
    pub fn base_style(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    /// Screen title ("Daily Doer!", "Task History")
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }

    /// Plain text on the background
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border of the input bar; brighter while focused
    pub fn input_border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.border)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.placeholder)
        }
    }

    pub fn input_style(&self) -> Style {
        Style::default().bg(self.input_bg).fg(self.input_text)
    }

    pub fn placeholder_style(&self) -> Style {
        Style::default().bg(self.input_bg).fg(self.placeholder)
    }

    /// Task row body
    pub fn row_style(&self) -> Style {
        Style::default().bg(self.row_bg).fg(self.row_text)
    }

    /// Task row under the selection cursor
    pub fn selected_row_style(&self) -> Style {
        Style::default()
            .bg(self.selected_bg)
            .fg(self.row_text)
            .add_modifier(Modifier::BOLD)
    }

    /// Edit and complete glyphs on a task row
    pub fn glyph_style(&self) -> Style {
        Style::default().fg(self.row_glyph)
    }

    /// Square marker at the start of a task row
    pub fn marker_style(&self) -> Style {
        Style::default().fg(self.row_marker)
    }

    pub fn close_style(&self) -> Style {
        Style::default().fg(self.close)
    }

    /// Keybinding hint bar
    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.hint)
    }

    /// Header button labels ("History")
    pub fn button_style(&self) -> Style {
        Style::default()
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_for_mode() {
        assert_eq!(Palette::for_mode(ThemeMode::Light), LIGHT);
        assert_eq!(Palette::for_mode(ThemeMode::Dark), DARK);
        assert_ne!(LIGHT.background, DARK.background);
    }

    #[test]
    fn test_rows_share_colours_across_themes() {
        let light = Palette::for_mode(ThemeMode::Light);
        let dark = Palette::for_mode(ThemeMode::Dark);
        assert_eq!(light.row_bg, dark.row_bg);
        assert_eq!(light.row_glyph, dark.row_glyph);
    }

    #[test]
    fn test_close_is_red_family() {
        assert_eq!(Palette::for_mode(ThemeMode::Light).close, Color::Red);
        assert_eq!(Palette::for_mode(ThemeMode::Dark).close, Color::LightRed);
    }
}
