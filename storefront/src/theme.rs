use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Light => "light",
            Self::Dark => "dark",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub primary_contrast: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub divider: &'static str,
}

// one step of the type scale
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeStyle {
    pub size: &'static str,
    pub weight: u16,
    pub line_height: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Typography {
    pub font_family: &'static str,
    pub heading_family: &'static str,
    pub h1: TypeStyle,
    pub h2: TypeStyle,
    pub h3: TypeStyle,
    pub h4: TypeStyle,
    pub body: TypeStyle,
    pub caption: TypeStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComponentOverrides {
    pub button_radius: &'static str,
    pub button_text_transform: &'static str,
    pub app_bar_shadow: &'static str,
    pub card_radius: &'static str,
    pub card_shadow: &'static str,
    pub input_radius: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub palette: Palette,
    pub typography: Typography,
    pub components: ComponentOverrides,
}

// both themes share the type scale, only the colors and shadows differ
const TYPOGRAPHY: Typography = Typography {
    font_family: "'Inter', system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif",
    heading_family: "'Oswald', 'Inter', system-ui, sans-serif",
    h1: TypeStyle {
        size: "3rem",
        weight: 700,
        line_height: "1.15",
    },
    h2: TypeStyle {
        size: "2.25rem",
        weight: 700,
        line_height: "1.2",
    },
    h3: TypeStyle {
        size: "1.5rem",
        weight: 600,
        line_height: "1.3",
    },
    h4: TypeStyle {
        size: "1.25rem",
        weight: 600,
        line_height: "1.35",
    },
    body: TypeStyle {
        size: "1rem",
        weight: 400,
        line_height: "1.6",
    },
    caption: TypeStyle {
        size: "0.8rem",
        weight: 400,
        line_height: "1.4",
    },
};

pub const LIGHT_THEME: Theme = Theme {
    mode: ThemeMode::Light,
    palette: Palette {
        primary: "#C2410C",
        primary_contrast: "#FFFFFF",
        secondary: "#1E3A5F",
        background: "#F7F5F2",
        paper: "#FFFFFF",
        text_primary: "#1F1B16",
        text_secondary: "#5C554C",
        divider: "#E4DED6",
    },
    typography: TYPOGRAPHY,
    components: ComponentOverrides {
        button_radius: "6px",
        button_text_transform: "none",
        app_bar_shadow: "0 1px 3px rgba(31, 27, 22, 0.12)",
        card_radius: "10px",
        card_shadow: "0 2px 8px rgba(31, 27, 22, 0.08)",
        input_radius: "6px",
    },
};

pub const DARK_THEME: Theme = Theme {
    mode: ThemeMode::Dark,
    palette: Palette {
        primary: "#FB923C",
        primary_contrast: "#1A1410",
        secondary: "#93B4DA",
        background: "#141210",
        paper: "#1F1C19",
        text_primary: "#F3EEE8",
        text_secondary: "#B5ACA1",
        divider: "#36312B",
    },
    typography: TYPOGRAPHY,
    components: ComponentOverrides {
        button_radius: "6px",
        button_text_transform: "none",
        app_bar_shadow: "0 1px 3px rgba(0, 0, 0, 0.6)",
        card_radius: "10px",
        card_shadow: "0 2px 10px rgba(0, 0, 0, 0.45)",
        input_radius: "6px",
    },
};

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> &'static Theme {
        match mode {
            ThemeMode::Light => &LIGHT_THEME,
            ThemeMode::Dark => &DARK_THEME,
        }
    }

    // the theme as a block of css custom properties; the stylesheet only ever refers to
    // these variables, so swapping this block is all it takes to change themes
    pub fn css_variables(&self) -> String {
        let p = &self.palette;
        let t = &self.typography;
        let c = &self.components;

        let mut vars: Vec<(String, String)> = [
            ("color-scheme", self.mode.to_string()),
            ("--primary", p.primary.to_owned()),
            ("--primary-contrast", p.primary_contrast.to_owned()),
            ("--secondary", p.secondary.to_owned()),
            ("--background", p.background.to_owned()),
            ("--surface", p.paper.to_owned()),
            ("--text-primary", p.text_primary.to_owned()),
            ("--text-secondary", p.text_secondary.to_owned()),
            ("--border", p.divider.to_owned()),
            ("--font-body", t.font_family.to_owned()),
            ("--font-heading", t.heading_family.to_owned()),
            ("--button-radius", c.button_radius.to_owned()),
            ("--button-text-transform", c.button_text_transform.to_owned()),
            ("--app-bar-shadow", c.app_bar_shadow.to_owned()),
            ("--card-radius", c.card_radius.to_owned()),
            ("--card-shadow", c.card_shadow.to_owned()),
            ("--input-radius", c.input_radius.to_owned()),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value))
        .collect();

        for (step, style) in [
            ("h1", t.h1),
            ("h2", t.h2),
            ("h3", t.h3),
            ("h4", t.h4),
            ("body", t.body),
            ("caption", t.caption),
        ] {
            vars.push((format!("--{step}-size"), style.size.to_owned()));
            vars.push((format!("--{step}-weight"), style.weight.to_string()));
            vars.push((format!("--{step}-line-height"), style.line_height.to_owned()));
        }

        let mut css = String::from(":root {\n");
        for (name, value) in vars {
            // writing into a String cannot fail
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");

        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_match_their_mode() {
        assert_eq!(Theme::for_mode(ThemeMode::Light).mode, ThemeMode::Light);
        assert_eq!(Theme::for_mode(ThemeMode::Dark).mode, ThemeMode::Dark);
        assert_ne!(LIGHT_THEME.palette, DARK_THEME.palette);
        assert_eq!(LIGHT_THEME.typography, DARK_THEME.typography);
    }

    #[test]
    fn type_scale_shrinks_with_heading_level() {
        let weights = [
            TYPOGRAPHY.h1.weight,
            TYPOGRAPHY.h2.weight,
            TYPOGRAPHY.h3.weight,
            TYPOGRAPHY.h4.weight,
            TYPOGRAPHY.body.weight,
        ];
        assert!(weights.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn mode_toggle_and_display() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }

    #[test]
    fn css_variables_cover_palette_and_scale() {
        let css = DARK_THEME.css_variables();

        assert!(css.starts_with(":root {\n"));
        assert!(css.ends_with("}\n"));
        assert!(css.contains("  color-scheme: dark;\n"));
        assert!(css.contains("  --primary: #FB923C;\n"));
        assert!(css.contains("  --surface: #1F1C19;\n"));
        assert!(css.contains("  --h1-size: 3rem;\n"));
        assert!(css.contains("  --caption-line-height: 1.4;\n"));
        assert!(css.contains("  --body-weight: 400;\n"));
    }
}
