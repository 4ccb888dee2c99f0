//! Theme system for the picker dialog
//!
//! Provides YAML-based theming support with compile-time embedded
//! themes and user-defined themes from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/goto-marker/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

// Embed theme YAML files at compile time
pub const DARK_YAML: &str = include_str!("../themes/dark.yaml");
pub const LIGHT_YAML: &str = include_str!("../themes/light.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "dark", "light")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "dark",
        yaml: DARK_YAML,
    },
    BuiltinTheme {
        id: "light",
        yaml: LIGHT_YAML,
    },
];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user -> builtin
///
/// Searches in order:
/// 1. `~/.config/goto-marker/themes/{id}.yaml`
/// 2. Embedded builtin themes
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Return a new color with the specified alpha value
    pub const fn with_alpha(&self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        match s.len() {
            6 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: 255,
            }),
            8 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: u8::from_str_radix(&s[6..8], 16).map_err(|e| e.to_string())?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    pub ui: UiThemeData,
}

/// UI theme colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct UiThemeData {
    pub window: WindowThemeData,
    pub input: InputThemeData,
    pub list: ListThemeData,
    pub button: ButtonThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowThemeData {
    pub background: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputThemeData {
    pub background: String,
    pub foreground: String,
    pub cursor: String,
    pub border: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListThemeData {
    pub foreground: String,
    pub line_number: String,
    pub selection_background: String,
    pub selection_foreground: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ButtonThemeData {
    pub background: String,
    pub background_hover: String,
    pub background_pressed: String,
    pub background_disabled: String,
    pub foreground: String,
    pub foreground_disabled: String,
    pub border: String,
    pub focus_ring: String,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub window: WindowTheme,
    pub input: InputTheme,
    pub list: ListTheme,
    pub button: ButtonTheme,
}

#[derive(Debug, Clone)]
pub struct WindowTheme {
    pub background: Color,
}

#[derive(Debug, Clone)]
pub struct InputTheme {
    pub background: Color,
    pub foreground: Color,
    pub cursor: Color,
    pub border: Color,
}

#[derive(Debug, Clone)]
pub struct ListTheme {
    pub foreground: Color,
    pub line_number: Color,
    pub selection_background: Color,
    pub selection_foreground: Color,
}

#[derive(Debug, Clone)]
pub struct ButtonTheme {
    pub background: Color,
    pub background_hover: Color,
    pub background_pressed: Color,
    pub background_disabled: Color,
    pub foreground: Color,
    pub foreground_disabled: Color,
    pub border: Color,
    pub focus_ring: Color,
}

impl Theme {
    /// Parse and resolve a theme from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse theme: {}", e))?;
        if data.version != 1 {
            return Err(format!("Unsupported theme version: {}", data.version));
        }
        Self::resolve(data)
    }

    /// Load a builtin theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let builtin = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown builtin theme: {}", id))?;
        Self::from_yaml(builtin.yaml)
    }

    fn resolve(data: ThemeData) -> Result<Self, String> {
        let c = Color::from_hex;
        Ok(Self {
            name: data.name,
            window: WindowTheme {
                background: c(&data.ui.window.background)?,
            },
            input: InputTheme {
                background: c(&data.ui.input.background)?,
                foreground: c(&data.ui.input.foreground)?,
                cursor: c(&data.ui.input.cursor)?,
                border: c(&data.ui.input.border)?,
            },
            list: ListTheme {
                foreground: c(&data.ui.list.foreground)?,
                line_number: c(&data.ui.list.line_number)?,
                selection_background: c(&data.ui.list.selection_background)?,
                selection_foreground: c(&data.ui.list.selection_foreground)?,
            },
            button: ButtonTheme {
                background: c(&data.ui.button.background)?,
                background_hover: c(&data.ui.button.background_hover)?,
                background_pressed: c(&data.ui.button.background_pressed)?,
                background_disabled: c(&data.ui.button.background_disabled)?,
                foreground: c(&data.ui.button.foreground)?,
                foreground_disabled: c(&data.ui.button.foreground_disabled)?,
                border: c(&data.ui.button.border)?,
                focus_ring: c(&data.ui.button.focus_ring)?,
            },
        })
    }
}

impl Default for Theme {
    /// Hardcoded dark fallback used when no theme can be loaded
    fn default() -> Self {
        Self {
            name: "Dark".to_string(),
            window: WindowTheme {
                background: Color::rgb(0x1E, 0x1F, 0x22),
            },
            input: InputTheme {
                background: Color::rgb(0x2B, 0x2D, 0x30),
                foreground: Color::rgb(0xDF, 0xE1, 0xE5),
                cursor: Color::rgb(0x53, 0xA7, 0xF0),
                border: Color::rgb(0x43, 0x45, 0x4A),
            },
            list: ListTheme {
                foreground: Color::rgb(0xDF, 0xE1, 0xE5),
                line_number: Color::rgb(0x76, 0x7A, 0x82),
                selection_background: Color::rgb(0x2E, 0x43, 0x6E),
                selection_foreground: Color::rgb(0xFF, 0xFF, 0xFF),
            },
            button: ButtonTheme {
                background: Color::rgb(0x2B, 0x2D, 0x30),
                background_hover: Color::rgb(0x35, 0x38, 0x3C),
                background_pressed: Color::rgb(0x24, 0x26, 0x29),
                background_disabled: Color::rgb(0x26, 0x27, 0x2A),
                foreground: Color::rgb(0xDF, 0xE1, 0xE5),
                foreground_disabled: Color::rgb(0x6A, 0x6D, 0x75),
                border: Color::rgb(0x43, 0x45, 0x4A),
                focus_ring: Color::rgb(0x53, 0xA7, 0xF0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#1E2F3D").unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (0x1E, 0x2F, 0x3D, 0xFF));

        let c = Color::from_hex("10203040").unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (0x10, 0x20, 0x30, 0x40));

        assert!(Color::from_hex("#123").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
    }

    #[test]
    fn test_color_to_argb() {
        let c = Color::rgb(0x11, 0x22, 0x33);
        assert_eq!(c.to_argb_u32(), 0xFF112233);
        assert_eq!(c.with_alpha(0x80).to_argb_u32(), 0x80112233);
    }

    #[test]
    fn test_builtin_themes_parse() {
        for builtin in BUILTIN_THEMES {
            let theme = Theme::from_yaml(builtin.yaml)
                .unwrap_or_else(|e| panic!("builtin '{}' failed: {}", builtin.id, e));
            assert!(!theme.name.is_empty());
        }
    }

    #[test]
    fn test_unknown_builtin_is_error() {
        assert!(Theme::from_builtin("solarized-sepia").is_err());
    }
}
