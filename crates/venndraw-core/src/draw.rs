//! Drawable Components for Diagram Rendering
//!
//! This module provides the drawing primitives the Venn renderer is built
//! from. All drawable components implement the [`Drawable`] trait, which
//! provides a consistent interface for rendering to layered SVG output and
//! calculating size.
//!
//! # Layer-Based Rendering
//!
//! Drawables render to one or more [`RenderLayer`]s, which are automatically ordered
//! during final SVG generation. Set fills go below every label, so overlapping
//! translucent ellipses never hide region text.
mod ellipse;
mod layer;
mod legend;
mod stroke;
mod text;

pub use ellipse::{Ellipse, EllipseDefinition};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use legend::{Legend, LegendEntry};
pub use stroke::StrokeDefinition;
pub use text::{HorizontalAlign, Text, TextDefinition, VerticalAlign};

use crate::geometry::{Point, Size};

/// Trait for diagram elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to one or more layers.
    ///
    /// Implementations create SVG nodes and add them to the appropriate
    /// layers of the returned [`LayeredOutput`].
    ///
    /// # Arguments
    ///
    /// * `position` - The anchor position of the drawable in SVG space
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// Returns the size of this drawable.
    fn size(&self) -> Size;
}
