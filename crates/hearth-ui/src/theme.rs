//! Theme system for Hearth chat apps.
//!
//! Provides a light and a dark theme. Colors live in static palettes and the
//! derived inline styles are computed once per variant, not per render.

use std::sync::{LazyLock, OnceLock};

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Available themes for the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors used by the action sheet and its reaction chips.
#[derive(Debug, PartialEq, Eq)]
pub struct SheetPalette {
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub destructive: &'static str,
    pub reaction_background: &'static str,
    pub reaction_border: &'static str,
    pub reaction_text: &'static str,
}

const LIGHT_PALETTE: SheetPalette = SheetPalette {
    background: "rgb(242, 242, 242)",
    border: "rgb(216, 216, 216)",
    text: "rgb(28, 28, 30)",
    destructive: "#E01E5A",
    reaction_background: "#F8F8F8",
    reaction_border: "transparent",
    reaction_text: "#0064c2",
};

const DARK_PALETTE: SheetPalette = SheetPalette {
    background: "rgb(1, 1, 1)",
    border: "rgb(39, 39, 41)",
    text: "rgb(229, 229, 231)",
    destructive: "#E01E5A",
    reaction_background: "#313538",
    reaction_border: "#1E1D21",
    reaction_text: "#CFD4D2",
};

/// CSS custom properties for each variant, indexed by [`Theme::index`].
static SHEET_STYLES: LazyLock<[String; 2]> =
    LazyLock::new(|| Theme::all().map(|theme| css_variables(theme.palette())));

fn css_variables(palette: &SheetPalette) -> String {
    format!(
        "--sheet-bg: {}; --sheet-border: {}; --sheet-text: {}; --sheet-destructive: {}; \
         --reaction-bg: {}; --reaction-border: {}; --reaction-text: {};",
        palette.background,
        palette.border,
        palette.text,
        palette.destructive,
        palette.reaction_background,
        palette.reaction_border,
        palette.reaction_text,
    )
}

impl Theme {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the display name for the theme.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Returns all available themes.
    pub fn all() -> [Theme; 2] {
        [Theme::Light, Theme::Dark]
    }

    fn index(&self) -> usize {
        match self {
            Theme::Light => 0,
            Theme::Dark => 1,
        }
    }

    pub fn palette(&self) -> &'static SheetPalette {
        match self {
            Theme::Light => &LIGHT_PALETTE,
            Theme::Dark => &DARK_PALETTE,
        }
    }

    /// Inline style declaring the sheet's CSS variables for this theme.
    pub fn sheet_style(&self) -> &'static str {
        SHEET_STYLES[self.index()].as_str()
    }

    pub fn from_css_value(value: &str) -> Option<Theme> {
        Theme::all().into_iter().find(|t| t.css_value() == value)
    }
}

static STARTUP_THEME: OnceLock<Theme> = OnceLock::new();

/// Global signal for current theme, starting from [`set_startup_theme`].
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(startup_theme);

/// Choose the theme `CURRENT_THEME` starts with. Call before launch.
///
/// Only the first call takes effect; returns whether this one did.
pub fn set_startup_theme(theme: Theme) -> bool {
    STARTUP_THEME.set(theme).is_ok()
}

fn startup_theme() -> Theme {
    STARTUP_THEME.get().copied().unwrap_or_default()
}

/// Themed root wrapper component.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            style: "{theme.sheet_style()}",
            {children}
        }
    }
}

/// Theme switcher dropdown component.
#[component]
pub fn ThemeSwitcher() -> Element {
    let current_theme = *CURRENT_THEME.read();

    rsx! {
        div { class: "theme-switcher",
            select {
                value: "{current_theme.css_value()}",
                onchange: move |evt| {
                    let new_theme = Theme::from_css_value(&evt.value()).unwrap_or_default();
                    *CURRENT_THEME.write() = new_theme;
                },
                for t in Theme::all() {
                    option {
                        value: "{t.css_value()}",
                        selected: t == current_theme,
                        "{t.display_name()}"
                    }
                }
            }
        }
    }
}
