//! Ellipse outlines for set shapes.
//!
//! Circles are ellipses with equal axes. Rotation is expressed in SVG
//! degrees, positive values turning clockwise on screen.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
};

/// Visual style of an ellipse: optional fill plus outline stroke.
#[derive(Debug, Clone, Default)]
pub struct EllipseDefinition {
    fill_color: Option<Color>,
    stroke: StrokeDefinition,
}

impl EllipseDefinition {
    /// Create a new ellipse definition with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a definition filled and outlined in the same color.
    ///
    /// This is how Venn sets are drawn: a translucent body whose outline
    /// shares the body's color and alpha.
    pub fn filled(color: Color, stroke_width: f32) -> Self {
        Self {
            fill_color: Some(color),
            stroke: StrokeDefinition::new(color, stroke_width),
        }
    }

    /// Returns the fill color, if any.
    pub fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    /// Returns the outline stroke.
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }
}

/// A sized, optionally rotated ellipse ready to be drawn at a center point.
#[derive(Debug, Clone)]
pub struct Ellipse<'a> {
    definition: &'a EllipseDefinition,
    size: Size,
    rotation: f32,
}

impl<'a> Ellipse<'a> {
    /// Creates an axis-aligned ellipse with the given full width and height.
    pub fn new(definition: &'a EllipseDefinition, size: Size) -> Self {
        Self {
            definition,
            size,
            rotation: 0.0,
        }
    }

    /// Sets the rotation in degrees, clockwise on screen.
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }
}

impl Drawable for Ellipse<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let mut ellipse = svg_element::Ellipse::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("rx", self.size.width() / 2.0)
            .set("ry", self.size.height() / 2.0);

        ellipse = match self.definition.fill_color() {
            Some(fill) => ellipse
                .set("fill", fill.to_paint_string())
                .set("fill-opacity", fill.alpha()),
            None => ellipse.set("fill", "none"),
        };

        ellipse = apply_stroke!(ellipse, self.definition.stroke());

        if self.rotation != 0.0 {
            ellipse = ellipse.set(
                "transform",
                format!(
                    "rotate({} {} {})",
                    self.rotation,
                    position.x(),
                    position.y()
                ),
            );
        }

        output.add_to_layer(RenderLayer::Shape, Box::new(ellipse));
        output
    }

    fn size(&self) -> Size {
        self.size
    }
}
