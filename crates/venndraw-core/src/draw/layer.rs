//! Layer-based rendering system for SVG output.
//!
//! Drawables state which z-order layer each SVG element belongs to; the
//! renderer collects them in a [`LayeredOutput`] and emits one `<g>` group
//! per layer, bottom to top.
//!
//! # Example
//!
//! ```
//! # use venndraw_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Ellipse, Text};
//! let mut output = LayeredOutput::new();
//!
//! output.add_to_layer(RenderLayer::Text, Box::new(Text::new("3")));
//! output.add_to_layer(RenderLayer::Shape, Box::new(Ellipse::new()));
//!
//! // Shape renders before Text regardless of insertion order
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// The `Ord` derive uses declaration order, so the first variant renders
/// first (bottom) and the last variant renders last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Figure background
    Background,
    /// Translucent set ellipses
    Shape,
    /// Region labels and set names
    Text,
    /// Legend frame, swatches and entries
    Legend,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Shape => "shape",
            Self::Text => "text",
            Self::Legend => "legend",
        }
    }
}

/// Represents SVG nodes grouped by rendering layer.
///
/// When rendered, nodes are emitted in layer order (bottom to top); within a
/// layer, insertion order is kept.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Merges all layers from another `LayeredOutput` into this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Moves every node to `layer`, keeping their relative order.
    pub fn move_to_layer(mut self, layer: RenderLayer) -> Self {
        for (item_layer, _) in &mut self.items {
            *item_layer = layer;
        }
        self
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a `data-layer`
    /// attribute identifying the layer. Empty layers are skipped.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order inside a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::{Ellipse, Rectangle, Text};

    use super::*;

    #[test]
    fn test_layered_output_new() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_merge() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Shape, Box::new(Ellipse::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Legend, Box::new(Rectangle::new()));

        output1.merge(output2);
        assert!(!output1.is_empty());

        let nodes = output1.render();
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn test_layered_output_merge_same_layer() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Shape, Box::new(Ellipse::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Shape, Box::new(Ellipse::new()));

        output1.merge(output2);

        let nodes = output1.render();
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn test_move_to_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Text::new("a")));
        output.add_to_layer(RenderLayer::Shape, Box::new(Ellipse::new()));

        let nodes = output.move_to_layer(RenderLayer::Legend).render();
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].to_string().contains("data-layer=\"legend\""));
    }

    #[test]
    fn test_render_orders_layers_bottom_to_top() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Legend, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Text, Box::new(Text::new("1")));
        output.add_to_layer(RenderLayer::Shape, Box::new(Ellipse::new()));
        output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));

        let rendered: Vec<String> = output.render().iter().map(|n| n.to_string()).collect();
        let names = ["background", "shape", "text", "legend"];
        assert_eq!(rendered.len(), names.len());
        for (group, name) in rendered.iter().zip(names) {
            assert!(
                group.contains(&format!("data-layer=\"{name}\"")),
                "expected layer {name} in {group}"
            );
        }
    }
}
