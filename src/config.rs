use crate::theme::Theme;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub corner_radius: f32,
    pub stroke_width: f32,
    pub draw_background: bool,
    /// Shift the drawing up by `min_y` as well as left by `min_x`.
    pub align_top: bool,
    /// Raster size used when the SVG carries no usable size of its own.
    pub width: f32,
    pub height: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            corner_radius: 1.0,
            stroke_width: 1.0,
            draw_background: true,
            align_top: false,
            width: 1200.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub render: RenderConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    node_fill: Option<String>,
    node_stroke: Option<String>,
    node_fill_opacity: Option<f32>,
    background: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    corner_radius: Option<f32>,
    stroke_width: Option<f32>,
    background: Option<bool>,
    align_top: Option<bool>,
    width: Option<f32>,
    height: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    render: Option<RenderConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = serde_json::from_str(contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        config.theme = Theme::by_name(theme_name)
            .ok_or_else(|| anyhow::anyhow!("Unknown theme: {theme_name}"))?;
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.node_fill {
            config.theme.node_fill = v;
        }
        if let Some(v) = vars.node_stroke {
            config.theme.node_stroke = v;
        }
        if let Some(v) = vars.node_fill_opacity {
            config.theme.node_fill_opacity = v.clamp(0.0, 1.0);
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
    }

    if let Some(render) = parsed.render {
        if let Some(v) = render.corner_radius {
            config.render.corner_radius = v.max(0.0);
        }
        if let Some(v) = render.stroke_width {
            config.render.stroke_width = v.max(0.0);
        }
        if let Some(v) = render.background {
            config.render.draw_background = v;
        }
        if let Some(v) = render.align_top {
            config.render.align_top = v;
        }
        if let Some(v) = render.width {
            config.render.width = v;
        }
        if let Some(v) = render.height {
            config.render.height = v;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let config = load_config(None).unwrap();
        assert_eq!(config.render.corner_radius, 1.0);
        assert!(!config.render.align_top);
        assert_eq!(config.theme.node_stroke, Theme::classic().node_stroke);
    }

    #[test]
    fn applies_overrides() {
        let config = parse_config(
            r##"{
                "theme": "modern",
                "themeVariables": { "nodeFill": "#123456", "nodeFillOpacity": 3.0 },
                "render": { "cornerRadius": 4, "alignTop": true, "background": false }
            }"##,
        )
        .unwrap();
        assert_eq!(config.theme.node_fill, "#123456");
        assert_eq!(config.theme.node_stroke, Theme::modern().node_stroke);
        assert_eq!(config.theme.node_fill_opacity, 1.0);
        assert_eq!(config.render.corner_radius, 4.0);
        assert!(config.render.align_top);
        assert!(!config.render.draw_background);
    }

    #[test]
    fn rejects_unknown_theme() {
        assert!(parse_config(r#"{"theme":"neon"}"#).is_err());
    }
}
