//! Configuration types for venndraw rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file; every section and field is optional.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`LabelConfig`] - Which [`FillMode`](crate::labels::FillMode)s region labels show.
//! - [`StyleConfig`] - Set colors, fonts and background.
//! - [`FigureConfig`] - Figure size, resolution and legend.
//!
//! # Example
//!
//! ```
//! # use venndraw::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.draw_options().is_ok());
//! ```

use serde::Deserialize;

use venndraw_core::color::Color;

use crate::{error::VennError, labels::Fill, options::DrawOptions};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Label configuration section.
    #[serde(default)]
    labels: LabelConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Figure configuration section.
    #[serde(default)]
    figure: FigureConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(labels: LabelConfig, style: StyleConfig, figure: FigureConfig) -> Self {
        Self {
            labels,
            style,
            figure,
        }
    }

    /// Returns the label configuration.
    pub fn labels(&self) -> &LabelConfig {
        &self.labels
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the figure configuration.
    pub fn figure(&self) -> &FigureConfig {
        &self.figure
    }

    /// Replaces the configured fill.
    pub fn set_fill(&mut self, fill: Fill) {
        self.labels.fill = fill;
    }

    /// Builds the [`DrawOptions`] described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`VennError::Style`] if a configured color cannot be parsed.
    pub fn draw_options(&self) -> Result<DrawOptions, VennError> {
        let mut options = DrawOptions::new()
            .with_dpi(self.figure.dpi)
            .with_legend(self.figure.legend)
            .with_background_color(self.style.background_color()?);

        if let Some(colors) = &self.style.colors {
            options = options.with_color_strings(colors)?;
        }
        if let Some(family) = &self.style.font_family {
            options = options.with_font_family(family.as_str());
        }
        if let Some(size) = self.style.font_size {
            options = options.with_font_size(size);
        }
        if let Some([width, height]) = self.figure.size {
            options = options.with_figure_size(width, height);
        }

        Ok(options)
    }
}

/// Region label configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelConfig {
    /// Fill modes, e.g. `["number", "percent"]`.
    #[serde(default)]
    fill: Fill,
}

impl LabelConfig {
    pub fn new(fill: Fill) -> Self {
        Self { fill }
    }

    /// Returns the configured [`Fill`].
    pub fn fill(&self) -> &Fill {
        &self.fill
    }
}

/// Visual styling configuration. Unset fields fall back to
/// [`DrawOptions`] defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleConfig {
    /// Set colors as color strings, one per set.
    #[serde(default)]
    colors: Option<Vec<String>>,

    #[serde(default)]
    font_family: Option<String>,

    #[serde(default)]
    font_size: Option<u16>,

    /// Figure background [`Color`], as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns [`VennError::Style`] if the configured color string cannot be
    /// parsed into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, VennError> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| VennError::Style(format!("Invalid background color in config: {err}")))
    }
}

/// Figure size and output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FigureConfig {
    #[serde(default = "default_dpi")]
    dpi: f32,

    /// `[width, height]` in inches; the layout's default when unset.
    #[serde(default)]
    size: Option<[f32; 2]>,

    #[serde(default = "default_legend")]
    legend: bool,
}

impl FigureConfig {
    pub fn dpi(&self) -> f32 {
        self.dpi
    }

    pub fn size(&self) -> Option<[f32; 2]> {
        self.size
    }

    pub fn legend(&self) -> bool {
        self.legend
    }
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            dpi: default_dpi(),
            size: None,
            legend: default_legend(),
        }
    }
}

fn default_dpi() -> f32 {
    96.0
}

fn default_legend() -> bool {
    true
}
