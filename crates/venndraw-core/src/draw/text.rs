//! Text rendering definitions for region labels, set names and legend entries.
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - A renderable text element combining content with a [`TextDefinition`]
//!
//! # Quick Start
//!
//! ```
//! # use venndraw_core::draw::{HorizontalAlign, Text, TextDefinition, VerticalAlign};
//! let mut style = TextDefinition::new();
//! style.set_font_family("Helvetica");
//! style.set_font_size(14.0);
//!
//! let text = Text::new(&style, "Set A").with_align(HorizontalAlign::Right, VerticalAlign::Bottom);
//! let size = text.calculate_size();
//! assert!(size.width() > 0.0);
//! ```
//!
//! # Rendering
//!
//! [`Text`] renders to a single SVG `<text>` element on the
//! [`Text`](crate::draw::RenderLayer::Text) layer. Each line of the content
//! becomes a `<tspan>`; the block as a whole is aligned against the anchor
//! position given to [`Drawable::render_to_layers`].

use std::sync::{Arc, Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;
use svg::{self, node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

/// Distance between consecutive baselines, as a multiple of the font size.
const LINE_SPACING: f32 = 1.2;

/// Horizontal alignment of a text block relative to its anchor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    /// The anchor is the left edge of the text
    Left,
    /// The anchor is the horizontal center of the text
    #[default]
    Center,
    /// The anchor is the right edge of the text
    Right,
}

impl HorizontalAlign {
    /// Returns the SVG `text-anchor` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Left => "start",
            Self::Center => "middle",
            Self::Right => "end",
        }
    }
}

/// Vertical alignment of a text block relative to its anchor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    /// The anchor is the top edge of the block
    Top,
    /// The anchor is the vertical center of the block
    #[default]
    Center,
    /// The anchor is the bottom edge of the block
    Bottom,
}

/// Defines the visual style for text elements in diagrams.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `14.0` px |
/// | Text color | `None` (SVG default, typically black) |
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: f32,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    /// Sets the font family for the text.
    ///
    /// # Arguments
    ///
    /// * `family` - The font family name (e.g., "Arial", "Times New Roman", "monospace")
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the text color.
    ///
    /// When set to `None`, the SVG default text color (usually black) is used.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Returns the font size in pixels.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Returns the font family.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    pub(crate) fn line_height(&self) -> f32 {
        self.font_size * LINE_SPACING
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 14.0,
            color: None,
        }
    }
}

/// A renderable text element combining content with styling.
///
/// # Examples
///
/// ```
/// # use venndraw_core::draw::{TextDefinition, Text};
/// let style = TextDefinition::new();
/// let text = Text::new(&style, "011: 4");
///
/// assert_eq!(text.content(), "011: 4");
/// assert_eq!(text.line_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
    horizontal: HorizontalAlign,
    vertical: VerticalAlign,
}

impl<'a> Text<'a> {
    /// Creates a new centred text element with the given definition and content.
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
            horizontal: HorizontalAlign::default(),
            vertical: VerticalAlign::default(),
        }
    }

    /// Sets the alignment of the text block against its anchor.
    pub fn with_align(mut self, horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        self.horizontal = horizontal;
        self.vertical = vertical;
        self
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        self.content
    }

    /// Returns the number of rendered lines.
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }

    /// Calculate the size required to display this text.
    pub fn calculate_size(&self) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(self.content, self.definition)
    }

    /// Returns the y coordinate of the first line's vertical center.
    fn first_line_center(&self, anchor_y: f32) -> f32 {
        let line_height = self.definition.line_height();
        let block_height = self.line_count() as f32 * line_height;
        match self.vertical {
            VerticalAlign::Top => anchor_y + line_height / 2.0,
            VerticalAlign::Center => anchor_y - (block_height - line_height) / 2.0,
            VerticalAlign::Bottom => anchor_y - block_height + line_height / 2.0,
        }
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        if self.content.is_empty() {
            return output;
        }

        let line_height = self.definition.line_height();

        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", self.first_line_center(position.y()))
            .set("text-anchor", self.horizontal.to_svg_value())
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_paint_string())
                .set("fill-opacity", color.alpha());
        }

        for (index, line) in self.content.lines().enumerate() {
            let dy = if index == 0 { 0.0 } else { line_height };
            let tspan = svg_element::TSpan::new("")
                .set("x", position.x())
                .set("dy", dy)
                .add(SvgText::new(line));
            rendered_text = rendered_text.add(tspan);
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }

    fn size(&self) -> Size {
        self.calculate_size()
    }
}

/// TextManager handles text measurement and font operations
/// It maintains a reusable FontSystem instance to avoid expensive recreation
struct TextManager {
    font_system: Arc<Mutex<FontSystem>>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Arc::new(Mutex::new(FontSystem::new())),
        }
    }

    /// Calculate the size of text in pixels using cosmic-text shaping.
    ///
    /// Falls back to a per-character estimate when no font produced layout
    /// runs (for example on hosts without any installed fonts).
    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        let font_size_px = text_def.font_size();

        let line_height = font_size_px * LINE_SPACING;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(text_def.font_family()));

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if !layout_runs.is_empty() {
            for last in layout_runs.iter().map(|run| run.glyphs.last()) {
                if let Some(last) = last {
                    max_width = max_width.max(last.x + last.w);
                }
                total_height += metrics.line_height;
            }
        } else {
            let widest = text.lines().map(str::len).max().unwrap_or_default();
            max_width = widest as f32 * (font_size_px * 0.55);
            total_height = text.lines().count() as f32 * metrics.line_height;
        }

        Size::new(max_width, total_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn render(text: &Text<'_>, position: Point) -> String {
        text.render_to_layers(position)
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect()
    }

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::new();
        assert_eq!(def.font_size(), 14.0);
        assert_eq!(def.font_family(), "sans-serif");
        assert!(def.color().is_none());
    }

    #[test]
    fn test_text_definition_setters() {
        let mut def = TextDefinition::new();
        def.set_font_size(24.0);
        def.set_font_family("monospace");
        def.set_color(Some(Color::new("navy").unwrap()));

        assert_eq!(def.font_size(), 24.0);
        assert_eq!(def.font_family(), "monospace");
        assert!(def.color().is_some());
    }

    #[test]
    fn test_text_calculate_size_empty() {
        let def = TextDefinition::new();
        let size = Text::new(&def, "").calculate_size();
        assert_approx_eq!(f32, size.width(), 0.0);
        assert_approx_eq!(f32, size.height(), 0.0);
    }

    #[test]
    fn test_text_calculate_size_multiline() {
        let def = TextDefinition::new();
        let single = Text::new(&def, "Line 1").calculate_size();
        let multi = Text::new(&def, "Line 1\nLine 2\nLine 3").calculate_size();
        assert!(single.width() > 0.0);
        assert!(
            multi.height() > single.height(),
            "Multi-line text ({}) should be taller than single line ({})",
            multi.height(),
            single.height()
        );
    }

    #[test]
    fn test_text_calculate_size_larger_font() {
        let mut small_def = TextDefinition::new();
        small_def.set_font_size(12.0);
        let mut large_def = TextDefinition::new();
        large_def.set_font_size(24.0);

        let small = Text::new(&small_def, "Test").calculate_size();
        let large = Text::new(&large_def, "Test").calculate_size();

        assert!(large.width() > small.width());
        assert!(large.height() > small.height());
    }

    #[test]
    fn test_empty_text_renders_nothing() {
        let def = TextDefinition::new();
        let output = Text::new(&def, "").render_to_layers(Point::new(10.0, 10.0));
        assert!(output.is_empty());
    }

    #[test]
    fn test_text_render_single_line() {
        let def = TextDefinition::new();
        let svg = render(&Text::new(&def, "42"), Point::new(100.0, 50.0));
        assert!(svg.contains("text-anchor=\"middle\""), "{svg}");
        assert!(svg.contains("y=\"50\""), "{svg}");
        assert!(svg.contains(">42<"), "{svg}");
    }

    #[test]
    fn test_text_render_multiline_is_centred() {
        let mut def = TextDefinition::new();
        def.set_font_size(10.0);
        let text = Text::new(&def, "a\nb\nc");
        assert_eq!(text.line_count(), 3);

        // Three 12px lines centred on y=100 put the first line at y=88
        assert_approx_eq!(f32, text.first_line_center(100.0), 88.0);

        let svg = render(&text, Point::new(0.0, 100.0));
        assert_eq!(svg.matches("<tspan").count(), 3);
    }

    #[test]
    fn test_text_alignment() {
        let mut def = TextDefinition::new();
        def.set_font_size(10.0);

        let top = Text::new(&def, "x").with_align(HorizontalAlign::Left, VerticalAlign::Top);
        assert_approx_eq!(f32, top.first_line_center(0.0), 6.0);

        let bottom = Text::new(&def, "x").with_align(HorizontalAlign::Right, VerticalAlign::Bottom);
        assert_approx_eq!(f32, bottom.first_line_center(0.0), -6.0);

        let svg = render(&bottom, Point::new(0.0, 0.0));
        assert!(svg.contains("text-anchor=\"end\""), "{svg}");
    }

    #[test]
    fn test_text_render_color() {
        let mut def = TextDefinition::new();
        def.set_color(Some(Color::new("rgba(255, 0, 0, 0.5)").unwrap()));
        let svg = render(&Text::new(&def, "A"), Point::new(0.0, 0.0));
        assert!(svg.contains("fill-opacity=\"0.5\""), "{svg}");
    }
}
