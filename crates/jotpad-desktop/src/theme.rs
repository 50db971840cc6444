//! Theme configuration for the desktop app

use std::sync::OnceLock;

/// Environment variable selecting `light`, `dark` or `system`
pub const THEME_ENV: &str = "JOTPAD_THEME";

/// Cached system dark mode preference (detected once at startup)
static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

/// Requested theme before system detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Parse a `JOTPAD_THEME` value. Unknown values fall back to `System`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::System,
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        std::env::var(THEME_ENV).map_or(Self::System, |value| Self::parse(&value))
    }
}

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

/// Resolve theme mode to actual light/dark theme
#[must_use]
pub fn resolve_theme(mode: ThemeMode) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::System => {
            if is_system_dark_mode() {
                ResolvedTheme::Dark
            } else {
                ResolvedTheme::Light
            }
        }
    }
}

/// Detect system dark mode preference (cached after first call)
#[must_use]
pub fn is_system_dark_mode() -> bool {
    *SYSTEM_DARK_MODE.get_or_init(detect_system_dark_mode)
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode() -> bool {
    use std::process::Command;

    match Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
    {
        Ok(output) => String::from_utf8_lossy(&output.stdout)
            .trim()
            .eq_ignore_ascii_case("dark"),
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {}. Using light mode.", e);
            false
        }
    }
}

#[cfg(not(target_os = "macos"))]
fn detect_system_dark_mode() -> bool {
    std::env::var("GTK_THEME").is_ok_and(|theme| gtk_theme_is_dark(&theme))
}

#[cfg_attr(target_os = "macos", allow(dead_code))]
fn gtk_theme_is_dark(theme: &str) -> bool {
    theme.to_lowercase().contains("dark")
}

/// Color palette for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_card: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_gradient: &'static str,
    pub accent_text: &'static str,
    pub overlay: &'static str,
    pub error: &'static str,
    pub error_bg: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#f8fafc",
    bg_card: "#ffffff",
    text_primary: "#1a1a1a",
    text_secondary: "#5f6368",
    border: "#e0e0e0",
    accent: "#2196F3",
    accent_gradient: "linear-gradient(45deg, #2196F3 30%, #21CBF3 90%)",
    accent_text: "#ffffff",
    overlay: "rgba(0, 0, 0, 0.45)",
    error: "#d32f2f",
    error_bg: "#fdecea",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#121212",
    bg_secondary: "#1e1e1e",
    bg_card: "#242424",
    text_primary: "#e8eaed",
    text_secondary: "#9aa0a6",
    border: "#3c4043",
    accent: "#64b5f6",
    accent_gradient: "linear-gradient(45deg, #1e88e5 30%, #26c6da 90%)",
    accent_text: "#ffffff",
    overlay: "rgba(0, 0, 0, 0.65)",
    error: "#f28b82",
    error_bg: "#3b1f1f",
};

impl ResolvedTheme {
    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }

    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}
