use ratatui::style::{Color, Modifier, Style};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`. Background values
/// 0–6 are considered dark; 7–15 are considered light. If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned.
pub fn detect_background() -> BackgroundType {
    background_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
}

fn background_from_colorfgbg(value: Option<&str>) -> BackgroundType {
    let bg = value
        .and_then(|val| val.split(';').next_back())
        .and_then(|bg| bg.parse::<u8>().ok());
    match bg {
        Some(n) if n > 6 => BackgroundType::Light,
        _ => BackgroundType::Dark,
    }
}

/// Styles used by the chart views.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header ───────────────────────────────────────────────────────────────
    pub header: Style,
    pub separator: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,
    pub label: Style,
    pub warning: Style,

    // ── Charts ───────────────────────────────────────────────────────────────
    pub chart_border: Style,
    pub chart_title: Style,
    pub axis: Style,
    pub axis_label: Style,
    /// Line colours, cycled per series.
    pub series_palette: Vec<Color>,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            label: Style::default().fg(Color::Gray),
            warning: Style::default().fg(Color::Yellow),

            chart_border: Style::default().fg(Color::DarkGray),
            chart_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            axis: Style::default().fg(Color::Gray),
            axis_label: Style::default().fg(Color::DarkGray),
            series_palette: vec![Color::Cyan, Color::Yellow, Color::Green, Color::Magenta],
        }
    }

    /// Light-background terminal theme.
    ///
    /// Uses dark colours for text so that content remains legible against a
    /// white/light-grey terminal canvas.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            separator: Style::default().fg(Color::Gray),

            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            label: Style::default().fg(Color::DarkGray),
            warning: Style::default().fg(Color::Red),

            chart_border: Style::default().fg(Color::Gray),
            chart_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            axis: Style::default().fg(Color::DarkGray),
            axis_label: Style::default().fg(Color::Gray),
            series_palette: vec![Color::Blue, Color::Red, Color::Green, Color::Magenta],
        }
    }

    /// Classic theme using only the basic 8-colour ANSI palette, no bold.
    pub fn classic() -> Self {
        Self {
            header: Style::default().fg(Color::Cyan),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            label: Style::default().fg(Color::Gray),
            warning: Style::default().fg(Color::Yellow),

            chart_border: Style::default().fg(Color::DarkGray),
            chart_title: Style::default().fg(Color::Cyan),
            axis: Style::default().fg(Color::White),
            axis_label: Style::default().fg(Color::Gray),
            series_palette: vec![Color::Green, Color::Yellow, Color::Red, Color::Cyan],
        }
    }

    /// Choose a theme automatically based on the detected terminal background.
    pub fn auto_detect() -> Self {
        match detect_background() {
            BackgroundType::Light => Self::light(),
            BackgroundType::Dark => Self::dark(),
        }
    }

    /// Construct a theme by name. Falls back to `auto_detect` for unknown
    /// names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            _ => Self::auto_detect(),
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    /// Line style for the `index`-th series, cycling through the palette.
    pub fn series_style(&self, index: usize) -> Style {
        match self.series_palette.len() {
            0 => self.text,
            n => Style::default().fg(self.series_palette[index % n]),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_known_themes() {
        assert_eq!(Theme::from_name("dark").header.fg, Some(Color::Cyan));
        assert_eq!(Theme::from_name("light").header.fg, Some(Color::Blue));
        assert_eq!(
            Theme::from_name("classic").series_palette[0],
            Color::Green
        );
    }

    #[test]
    fn test_classic_has_no_bold() {
        let theme = Theme::classic();
        for style in [theme.header, theme.chart_title] {
            assert!(!style.add_modifier.contains(Modifier::BOLD));
        }
    }

    #[test]
    fn test_series_style_cycles_palette() {
        let theme = Theme::dark();
        let n = theme.series_palette.len();
        assert_eq!(theme.series_style(0).fg, Some(theme.series_palette[0]));
        assert_eq!(theme.series_style(n).fg, Some(theme.series_palette[0]));
        assert_eq!(theme.series_style(n + 1).fg, Some(theme.series_palette[1]));
    }

    #[test]
    fn test_series_style_empty_palette_falls_back_to_text() {
        let theme = Theme {
            series_palette: Vec::new(),
            ..Theme::dark()
        };
        assert_eq!(theme.series_style(3), theme.text);
    }

    #[test]
    fn test_background_from_colorfgbg() {
        assert_eq!(background_from_colorfgbg(None), BackgroundType::Dark);
        assert_eq!(background_from_colorfgbg(Some("15;0")), BackgroundType::Dark);
        assert_eq!(background_from_colorfgbg(Some("0;15")), BackgroundType::Light);
        assert_eq!(background_from_colorfgbg(Some("garbage")), BackgroundType::Dark);
    }
}
