//! Styles for the wallflower CLI.
//!
//! Templates refer to semantic style names only (`name`, `price`, `hint`).
//! [`WALLFLOWER_THEME`] maps those names to concrete `console::Style` values,
//! so the look can change without touching a template.
//!
//! A name missing from the theme renders with a `(!?)` prefix, which makes
//! template typos visible instead of silently unstyled.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub mod names {
    pub const SUMMARY: &str = "summary";
    pub const BADGE: &str = "badge";
    pub const NAME: &str = "name";
    pub const CITY: &str = "city";
    pub const STARS: &str = "stars";
    pub const PRICE: &str = "price";
    pub const RATING: &str = "rating";
    pub const AMENITY: &str = "amenity";
    pub const EMPTY: &str = "empty";
    pub const HINT: &str = "hint";
    pub const LABEL: &str = "label";
    pub const MUTED: &str = "muted";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Styles `text`, or returns it untouched when `use_color` is off.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static WALLFLOWER_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(245);
    Theme::new()
        .add(names::SUMMARY, Style::new().bold())
        .add(names::BADGE, Style::new().black().on_cyan())
        .add(names::NAME, Style::new().bold())
        .add(names::CITY, muted.clone())
        .add(names::STARS, Style::new().yellow())
        .add(names::PRICE, Style::new().green())
        .add(names::RATING, Style::new().cyan())
        .add(names::AMENITY, muted.clone().italic())
        .add(names::EMPTY, Style::new().yellow().bold())
        .add(names::HINT, muted.clone().italic())
        .add(names::LABEL, Style::new().bold())
        .add(names::MUTED, muted)
        .add(names::INFO, Style::new())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red().bold())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_is_themed() {
        let all = [
            names::SUMMARY,
            names::BADGE,
            names::NAME,
            names::CITY,
            names::STARS,
            names::PRICE,
            names::RATING,
            names::AMENITY,
            names::EMPTY,
            names::HINT,
            names::LABEL,
            names::MUTED,
            names::INFO,
            names::SUCCESS,
            names::WARNING,
            names::ERROR,
        ];
        for name in all {
            assert!(WALLFLOWER_THEME.has(name), "missing style {}", name);
        }
    }

    #[test]
    fn test_apply_without_color_is_plain() {
        assert_eq!(WALLFLOWER_THEME.apply(names::PRICE, "$95/night", false), "$95/night");
    }

    #[test]
    fn test_apply_with_color_emits_ansi() {
        let theme = Theme::new().add("bold", Style::new().bold().force_styling(true));
        let styled = theme.apply("bold", "hi", true);
        assert!(styled.contains("\x1b["));
        assert!(styled.contains("hi"));
    }

    #[test]
    fn test_unknown_style_shows_indicator() {
        assert_eq!(WALLFLOWER_THEME.apply("typo", "x", false), "(!?) x");
    }
}
