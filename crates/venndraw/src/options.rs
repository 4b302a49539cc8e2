//! Per-render styling options.

use venndraw_core::color::Color;

use crate::error::VennError;

/// Fill colors used when none are configured, one per set.
pub const DEFAULT_COLORS: [&str; 6] = [
    "rgba(92, 192, 98, 0.5)",
    "rgba(90, 155, 212, 0.5)",
    "rgba(246, 236, 86, 0.6)",
    "rgba(241, 90, 96, 0.4)",
    "rgba(255, 117, 0, 0.3)",
    "rgba(82, 82, 190, 0.2)",
];

/// Styling for one rendered figure.
///
/// # Examples
///
/// ```
/// use venndraw::DrawOptions;
///
/// let options = DrawOptions::default()
///     .with_font_size(18)
///     .with_figure_size(6.0, 6.0)
///     .with_legend(false);
/// assert_eq!(options.font_size(), 18);
/// assert_eq!(options.colors().len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct DrawOptions {
    colors: Vec<Color>,
    figure_size: Option<(f32, f32)>,
    dpi: f32,
    font_size: u16,
    font_family: String,
    background_color: Option<Color>,
    legend: bool,
}

impl DrawOptions {
    /// Creates options with the default palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the set colors with parsed color strings.
    ///
    /// # Errors
    ///
    /// Returns [`VennError::Style`] with the color backend's message for the
    /// first string it rejects.
    pub fn with_color_strings<S: AsRef<str>>(
        self,
        colors: impl IntoIterator<Item = S>,
    ) -> Result<Self, VennError> {
        let colors = colors
            .into_iter()
            .map(|color| Color::new(color.as_ref()).map_err(VennError::Style))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.with_colors(colors))
    }

    /// Replaces the set colors. Set i uses the i-th color.
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    /// Overrides the layout's default figure size, in inches.
    pub fn with_figure_size(mut self, width: f32, height: f32) -> Self {
        self.figure_size = Some((width, height));
        self
    }

    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Sets the font size in points. Rendered text scales with the dpi.
    pub fn with_font_size(mut self, font_size: u16) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    pub fn with_background_color(mut self, color: Option<Color>) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns the figure size override in inches, if any.
    pub fn figure_size(&self) -> Option<(f32, f32)> {
        self.figure_size
    }

    pub fn dpi(&self) -> f32 {
        self.dpi
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn legend(&self) -> bool {
        self.legend
    }
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS
                .iter()
                .filter_map(|color| Color::new(color).ok())
                .collect(),
            figure_size: None,
            dpi: 96.0,
            font_size: 14,
            font_family: "sans-serif".to_string(),
            background_color: None,
            legend: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_parses() {
        let options = DrawOptions::default();
        assert_eq!(options.colors().len(), DEFAULT_COLORS.len());
        assert!((options.colors()[2].alpha() - 0.6).abs() < 0.001);
        assert_eq!(options.dpi(), 96.0);
        assert!(options.legend());
        assert!(options.figure_size().is_none());
    }

    #[test]
    fn test_with_color_strings() {
        let options = DrawOptions::new()
            .with_color_strings(["red", "#00ff0080"])
            .unwrap();
        assert_eq!(options.colors().len(), 2);
    }

    #[test]
    fn test_invalid_color_is_style_error() {
        let err = DrawOptions::new()
            .with_color_strings(["red", "not-a-color"])
            .unwrap_err();
        assert!(matches!(err, VennError::Style(_)), "{err}");
    }

    #[test]
    fn test_builders() {
        let options = DrawOptions::new()
            .with_dpi(72.0)
            .with_font_family("monospace")
            .with_background_color(Some(Color::new("white").unwrap()));
        assert_eq!(options.dpi(), 72.0);
        assert_eq!(options.font_family(), "monospace");
        assert!(options.background_color().is_some());
    }
}
