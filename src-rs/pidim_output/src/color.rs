use owo_colors::Style;

/// Whether console output is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Apply styles.
    #[default]
    EnableColors,
    /// Print plain text.
    DisableColors,
}

impl ColorChoice {
    /// Applies `style` to `text` if colors are enabled.
    #[must_use]
    pub fn paint(self, style: Style, text: &str) -> String {
        match self {
            Self::EnableColors => style.style(text).to_string(),
            Self::DisableColors => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_colors_leave_text_alone() {
        let style = Style::new().red().bold();

        let painted = ColorChoice::DisableColors.paint(style, "warning");

        assert_eq!(painted, "warning");
    }

    #[test]
    fn enabled_colors_wrap_text_in_escapes() {
        let painted = ColorChoice::EnableColors.paint(Style::new().red(), "error");

        assert_ne!(painted, "error");
        assert!(painted.contains("error"));
        assert!(painted.starts_with('\u{1b}'));
    }
}
