//! Static color-scheme and design-style choices offered by the form.
//!
//! Presets are one-click values for the `color_scheme` and `design_style`
//! fields. The order of each table is the order the buttons are drawn in, and
//! the first entry of each table is the session default.

use egui::Color32;

/// A named color scheme with the text substituted into the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSchemePreset {
    /// Label shown on the preset button
    pub name: &'static str,
    /// Text used in the prompt template; empty for [`CUSTOM_COLOR_SCHEME`]
    pub value: &'static str,
    /// Hex swatches drawn under the label (zero or two)
    pub swatches: &'static [&'static str],
}

impl ColorSchemePreset {
    /// True for the preset that switches the form into free-text color entry.
    pub fn is_custom(&self) -> bool {
        self.value.is_empty()
    }

    /// Swatch colors parsed for painting. Unparseable entries are skipped.
    pub fn swatch_colors(&self) -> Vec<Color32> {
        self.swatches
            .iter()
            .filter_map(|hex| Color32::from_hex(hex).ok())
            .collect()
    }
}

pub const CUSTOM_COLOR_SCHEME: ColorSchemePreset = ColorSchemePreset {
    name: "Custom",
    value: "",
    swatches: &[],
};

pub static COLOR_SCHEME_PRESETS: [ColorSchemePreset; 5] = [
    ColorSchemePreset {
        name: "Navy & Orange",
        value: "navy blue and orange",
        swatches: &["#1e3a8a", "#f97316"],
    },
    ColorSchemePreset {
        name: "Blue & White",
        value: "blue and white",
        swatches: &["#3b82f6", "#ffffff"],
    },
    ColorSchemePreset {
        name: "Green & Gray",
        value: "green and gray",
        swatches: &["#10b981", "#6b7280"],
    },
    ColorSchemePreset {
        name: "Purple & Pink",
        value: "purple and pink",
        swatches: &["#8b5cf6", "#ec4899"],
    },
    CUSTOM_COLOR_SCHEME,
];

/// A design style label. The label is the prompt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignStylePreset(pub &'static str);

impl DesignStylePreset {
    pub fn label(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for DesignStylePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub static DESIGN_STYLE_PRESETS: [DesignStylePreset; 6] = [
    DesignStylePreset("Minimalist"),
    DesignStylePreset("Maximalist"),
    DesignStylePreset("Bento"),
    DesignStylePreset("Modern"),
    DesignStylePreset("Classic"),
    DesignStylePreset("Creative"),
];

/// Color scheme value a new session starts with.
pub fn default_color_scheme() -> &'static str {
    COLOR_SCHEME_PRESETS[0].value
}

/// Design style a new session starts with.
pub fn default_design_style() -> &'static str {
    DESIGN_STYLE_PRESETS[0].label()
}

/// Look up a color preset by its display name.
pub fn color_scheme_by_name(name: &str) -> Option<&'static ColorSchemePreset> {
    COLOR_SCHEME_PRESETS.iter().find(|preset| preset.name == name)
}
