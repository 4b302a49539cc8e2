//! Legend box listing each set's color next to its name.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, HorizontalAlign, LayeredOutput, RenderLayer, Text, TextDefinition, VerticalAlign},
    geometry::{Point, Size},
};

// Spacing, as multiples of the font size.
const PADDING: f32 = 0.6;
const SWATCH_GAP: f32 = 0.6;
const ROW_GAP: f32 = 0.3;

/// One legend row.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    color: Color,
    label: String,
}

impl LegendEntry {
    pub fn new(color: Color, label: impl Into<String>) -> Self {
        Self {
            color,
            label: label.into(),
        }
    }

}

/// A framed, semi-transparent legend. Positions passed to
/// [`Drawable::render_to_layers`] are the legend's center.
#[derive(Debug, Clone)]
pub struct Legend<'a> {
    text: &'a TextDefinition,
    entries: Vec<LegendEntry>,
}

impl<'a> Legend<'a> {
    pub fn new(text: &'a TextDefinition, entries: Vec<LegendEntry>) -> Self {
        Self { text, entries }
    }

    fn padding(&self) -> f32 {
        self.text.font_size() * PADDING
    }

    fn swatch_gap(&self) -> f32 {
        self.text.font_size() * SWATCH_GAP
    }

    fn swatch_size(&self) -> Size {
        let font_size = self.text.font_size();
        Size::new(font_size * 1.6, font_size * 0.8)
    }

    fn row_height(&self) -> f32 {
        self.text.line_height().max(self.swatch_size().height()) + self.text.font_size() * ROW_GAP
    }

    fn widest_label(&self) -> f32 {
        self.entries
            .iter()
            .map(|entry| Text::new(self.text, &entry.label).calculate_size().width())
            .fold(0.0, f32::max)
    }
}

impl Drawable for Legend<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        if self.entries.is_empty() {
            return output;
        }

        let size = self.size();
        let padding = self.padding();
        let left = position.x() - size.width() / 2.0;
        let top = position.y() - size.height() / 2.0;

        let frame = svg_element::Rectangle::new()
            .set("x", left)
            .set("y", top)
            .set("width", size.width())
            .set("height", size.height())
            .set("rx", padding / 2.0)
            .set("fill", "white")
            .set("fill-opacity", 0.5)
            .set("stroke", "lightgray");
        output.add_to_layer(RenderLayer::Legend, Box::new(frame));

        let swatch = self.swatch_size();
        let row_height = self.row_height();

        for (index, entry) in self.entries.iter().enumerate() {
            let row_center = top + padding + row_height * (index as f32 + 0.5);

            let rect = svg_element::Rectangle::new()
                .set("x", left + padding)
                .set("y", row_center - swatch.height() / 2.0)
                .set("width", swatch.width())
                .set("height", swatch.height())
                .set("fill", entry.color.to_paint_string())
                .set("fill-opacity", entry.color.alpha());
            output.add_to_layer(RenderLayer::Legend, Box::new(rect));

            let label_anchor =
                Point::new(left + padding + swatch.width() + self.swatch_gap(), row_center);
            let label = Text::new(self.text, &entry.label)
                .with_align(HorizontalAlign::Left, VerticalAlign::Center)
                .render_to_layers(label_anchor);

            // Legend text sits above the frame, not with the diagram labels
            output.merge(label.move_to_layer(RenderLayer::Legend));
        }

        output
    }

    fn size(&self) -> Size {
        if self.entries.is_empty() {
            return Size::default();
        }
        let padding = self.padding();
        let width = padding * 2.0 + self.swatch_size().width() + self.swatch_gap() + self.widest_label();
        let height = padding * 2.0 + self.row_height() * self.entries.len() as f32;
        Size::new(width, height)
    }
}
