use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: HashMap<String, ColorConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    pub foreground: Option<String>,
    pub style: Vec<String>,
}

impl ColorConfig {
    fn new(foreground: &str, style: &[&str]) -> Self {
        Self {
            foreground: Some(foreground.to_string()),
            style: style.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme: String,
}

impl ThemeManager {
    pub fn new() -> Self {
        let mut manager = Self {
            themes: HashMap::new(),
            current_theme: "default".to_string(),
        };

        manager.load_default_themes();
        manager
    }

    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        if self.themes.contains_key(theme_name) {
            self.current_theme = theme_name.to_string();
            true
        } else {
            false
        }
    }

    pub fn current_theme(&self) -> Option<&Theme> {
        self.themes
            .get(&self.current_theme)
            .or_else(|| self.themes.get("default"))
    }

    pub fn apply_style(&self, text: &str, style_name: &str) -> String {
        let Some(color_config) = self
            .current_theme()
            .and_then(|theme| theme.colors.get(style_name))
        else {
            return text.to_string();
        };

        let mut styled_text = text.to_string();

        if let Some(color) = color_config.foreground.as_deref().and_then(parse_color) {
            styled_text = styled_text.color(color).to_string();
        }

        for style in &color_config.style {
            styled_text = match style.as_str() {
                "bold" => styled_text.bold().to_string(),
                "italic" => styled_text.italic().to_string(),
                "underline" => styled_text.underline().to_string(),
                "dimmed" => styled_text.dimmed().to_string(),
                "strikethrough" => styled_text.strikethrough().to_string(),
                _ => styled_text,
            };
        }

        styled_text
    }

    pub fn list_themes(&self) -> Vec<String> {
        let mut names: Vec<String> = self.themes.keys().cloned().collect();
        names.sort();
        names
    }

    fn load_default_themes(&mut self) {
        let default_colors = HashMap::from([
            ("title".to_string(), ColorConfig::new("red", &["bold"])),
            ("ring".to_string(), ColorConfig::new("green", &[])),
            ("graveyard".to_string(), ColorConfig::new("bright_black", &["strikethrough"])),
            ("winner".to_string(), ColorConfig::new("yellow", &["bold"])),
            ("error".to_string(), ColorConfig::new("red", &["bold"])),
            ("success".to_string(), ColorConfig::new("green", &["bold"])),
            ("warning".to_string(), ColorConfig::new("yellow", &["bold"])),
            ("info".to_string(), ColorConfig::new("blue", &[])),
            ("separator".to_string(), ColorConfig::new("bright_black", &["dimmed"])),
        ]);
        self.insert_theme("default", default_colors);

        let dark_colors = HashMap::from([
            ("title".to_string(), ColorConfig::new("bright_red", &["bold"])),
            ("ring".to_string(), ColorConfig::new("bright_green", &[])),
            ("graveyard".to_string(), ColorConfig::new("white", &["dimmed"])),
            ("winner".to_string(), ColorConfig::new("bright_yellow", &["bold", "underline"])),
            ("error".to_string(), ColorConfig::new("bright_red", &["bold"])),
            ("success".to_string(), ColorConfig::new("bright_green", &["bold"])),
            ("warning".to_string(), ColorConfig::new("bright_yellow", &["bold"])),
            ("info".to_string(), ColorConfig::new("bright_cyan", &[])),
            ("separator".to_string(), ColorConfig::new("white", &["dimmed"])),
        ]);
        self.insert_theme("dark", dark_colors);

        // No colors at all, for pipes and dumb terminals
        self.insert_theme("plain", HashMap::new());
    }

    fn insert_theme(&mut self, name: &str, colors: HashMap<String, ColorConfig>) {
        self.themes.insert(name.to_string(), Theme {
            name: name.to_string(),
            colors,
        });
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_color(color_name: &str) -> Option<Color> {
    match color_name.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "bright_black" => Some(Color::BrightBlack),
        "bright_red" => Some(Color::BrightRed),
        "bright_green" => Some(Color::BrightGreen),
        "bright_yellow" => Some(Color::BrightYellow),
        "bright_blue" => Some(Color::BrightBlue),
        "bright_magenta" => Some(Color::BrightMagenta),
        "bright_cyan" => Some(Color::BrightCyan),
        "bright_white" => Some(Color::BrightWhite),
        _ => None,
    }
}
