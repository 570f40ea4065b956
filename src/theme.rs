#[derive(Debug, Clone)]
pub struct Theme {
    pub node_fill: String,
    pub node_stroke: String,
    pub node_fill_opacity: f32,
    pub background: String,
}

impl Theme {
    /// Plain outlined boxes, close to an unstyled SVG rect.
    pub fn classic() -> Self {
        Self {
            node_fill: "#FFFFFF".to_string(),
            node_stroke: "#000000".to_string(),
            node_fill_opacity: 1.0,
            background: "#FFFFFF".to_string(),
        }
    }

    pub fn modern() -> Self {
        Self {
            node_fill: "#F8FAFF".to_string(),
            node_stroke: "#7A8AA6".to_string(),
            node_fill_opacity: 0.85,
            background: "#FFFFFF".to_string(),
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "modern" => Some(Self::modern()),
            "classic" | "default" | "base" => Some(Self::classic()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
