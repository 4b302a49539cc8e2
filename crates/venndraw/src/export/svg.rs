//! SVG rendering of Venn diagrams.
//!
//! [`draw`] places the fixed [`Layout`] for a set count onto an SVG page:
//! one translucent ellipse per set, each region's label at its anchor, each
//! set's name near its shape, and an optional legend to the right of the
//! diagram. The result is a [`Figure`] that can be serialized or saved.

use std::{fmt, fs::File, io::Write, path::Path};

use log::{debug, error, info};
use svg::{Document, node::element::Rectangle};

use venndraw_core::{
    color::Color,
    draw::{
        Drawable, Ellipse, EllipseDefinition, LayeredOutput, Legend, LegendEntry, RenderLayer,
        Text, TextDefinition,
    },
    geometry::{Insets, Point, Size},
    region::SetCount,
};

use crate::{
    error::VennError,
    export,
    labels::RegionLabels,
    layout::{self, Layout},
    options::DrawOptions,
};

/// Ellipse outline width in points.
const STROKE_WIDTH: f32 = 1.0;

const POINTS_PER_INCH: f32 = 72.0;

/// A rendered diagram: an SVG document and its size in pixels.
#[derive(Debug, Clone)]
pub struct Figure {
    document: Document,
    size: Size,
}

impl Figure {
    /// Returns the page size in pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the underlying SVG document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Serializes the figure as SVG markup.
    pub fn to_svg_string(&self) -> String {
        self.document.to_string()
    }

    /// Writes the figure as an SVG file, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`VennError::Io`] if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), VennError> {
        let path = path.as_ref();
        let file_name = path.display().to_string();
        info!(file_name; "Creating SVG file");

        let mut file = match File::create(path) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name, err:err; "Failed to create SVG file");
                return Err(VennError::Io(err));
            }
        };

        if let Err(err) = write!(file, "{}", self.document) {
            error!(file_name, err:err; "Failed to write SVG content");
            return Err(VennError::Io(err));
        }

        Ok(())
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.document)
    }
}

/// Maps layout data space (y up) onto SVG pixels (y down).
#[derive(Debug, Clone, Copy)]
struct Projection {
    left: f32,
    top: f32,
    scale: f32,
    y_limit: f32,
}

impl Projection {
    /// Fits the layout's extent into `page` minus `padding`, keeping an
    /// equal aspect ratio and centring the result.
    fn fit(layout: &Layout, page: Size, padding: Insets) -> Result<Self, export::Error> {
        let plot_width = page.width() - padding.horizontal_sum();
        let plot_height = page.height() - padding.vertical_sum();
        let scale = (plot_width / layout.x_limit()).min(plot_height / layout.y_limit());

        if !scale.is_finite() || scale <= 0.0 {
            return Err(export::Error::Render(format!(
                "a {}x{} px page leaves no room for the diagram",
                page.width(),
                page.height()
            )));
        }

        Ok(Self {
            left: padding.left() + (plot_width - layout.x_limit() * scale) / 2.0,
            top: padding.top() + (plot_height - layout.y_limit() * scale) / 2.0,
            scale,
            y_limit: layout.y_limit(),
        })
    }

    fn point(&self, point: Point) -> Point {
        Point::new(
            self.left + point.x() * self.scale,
            self.top + (self.y_limit - point.y()) * self.scale,
        )
    }

    fn length(&self, length: f32) -> f32 {
        length * self.scale
    }

    /// Right edge of the data area in pixels.
    fn right(&self, x_limit: f32) -> f32 {
        self.left + x_limit * self.scale
    }

    /// Vertical middle of the data area in pixels.
    fn middle(&self) -> f32 {
        self.top + self.y_limit * self.scale / 2.0
    }
}

/// Renders a diagram for `set_count` sets.
///
/// Regions missing from `labels` are left blank.
///
/// # Errors
///
/// Returns [`VennError::InvalidArgument`] when `labels` were computed for a
/// different set count, when `names` does not hold exactly one name per set,
/// or when `options` carries fewer colors than sets.
pub fn draw<S: AsRef<str>>(
    set_count: SetCount,
    labels: &RegionLabels,
    names: &[S],
    options: &DrawOptions,
) -> Result<Figure, VennError> {
    let n = set_count.get();

    if labels.set_count() != set_count {
        return Err(VennError::InvalidArgument(format!(
            "labels were computed for {} sets but a {n}-set diagram was requested",
            labels.set_count()
        )));
    }
    if names.len() != n {
        return Err(VennError::InvalidArgument(format!(
            "expected {n} set names, got {}",
            names.len()
        )));
    }
    if options.colors().len() < n {
        return Err(VennError::InvalidArgument(format!(
            "expected at least {n} colors, got {}",
            options.colors().len()
        )));
    }

    info!(set_count = n; "Rendering diagram");

    let layout = layout::layout(set_count);
    let (width_in, height_in) = options.figure_size().unwrap_or(layout.figure_size());
    let page = Size::new(width_in, height_in).scale(options.dpi());
    let pixels_per_point = options.dpi() / POINTS_PER_INCH;
    let font_size = options.font_size() as f32 * pixels_per_point;
    let padding = Insets::uniform(font_size * 2.0);
    let projection = Projection::fit(layout, page, padding)?;
    debug!(
        width = page.width(),
        height = page.height(),
        scale = projection.scale,
        font_size;
        "Page size calculated"
    );

    let mut text = TextDefinition::new();
    text.set_font_size(font_size);
    text.set_font_family(options.font_family());
    text.set_color(Some(Color::default()));

    let mut output = LayeredOutput::new();

    let definitions: Vec<EllipseDefinition> = options.colors()[..n]
        .iter()
        .map(|color| EllipseDefinition::filled(*color, STROKE_WIDTH * pixels_per_point))
        .collect();
    for (shape, definition) in layout.shapes().iter().zip(&definitions) {
        let size = Size::new(
            projection.length(shape.width()),
            projection.length(shape.height()),
        );
        let ellipse = Ellipse::new(definition, size).with_rotation(-shape.angle());
        output.merge(ellipse.render_to_layers(projection.point(shape.center())));
    }

    for (key, anchor) in layout.region_keys() {
        if let Some(label) = labels.get(key) {
            let label = Text::new(&text, label);
            output.merge(label.render_to_layers(projection.point(anchor)));
        }
    }

    for (anchor, name) in layout.names().iter().zip(names) {
        let name = Text::new(&text, name.as_ref()).with_align(anchor.horizontal(), anchor.vertical());
        output.merge(name.render_to_layers(projection.point(anchor.position())));
    }

    let mut page_width = page.width();
    if options.legend() {
        let entries = options.colors()[..n]
            .iter()
            .zip(names)
            .map(|(color, name)| LegendEntry::new(*color, name.as_ref()))
            .collect();
        let legend = Legend::new(&text, entries);
        let legend_size = legend.size();

        let left = projection.right(layout.x_limit()) + font_size;
        let center = Point::new(left + legend_size.width() / 2.0, projection.middle());
        output.merge(legend.render_to_layers(center));

        page_width = page_width.max(left + legend_size.width() + padding.right());
        debug!(legend_width = legend_size.width(), page_width; "Legend placed");
    }

    let size = Size::new(page_width, page.height());

    if let Some(background) = options.background_color() {
        let rect = Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", background.to_paint_string())
            .set("fill-opacity", background.alpha());
        output.add_to_layer(RenderLayer::Background, Box::new(rect));
    }

    let mut document = Document::new()
        .set(
            "viewBox",
            format!("0 0 {} {}", size.width(), size.height()),
        )
        .set("width", size.width())
        .set("height", size.height());

    for node in output.render() {
        document = document.add(node);
    }

    info!("SVG rendered successfully");
    Ok(Figure { document, size })
}

/// Renders a two-set diagram. See [`draw`].
pub fn venn2<S: AsRef<str>>(
    labels: &RegionLabels,
    names: &[S],
    options: &DrawOptions,
) -> Result<Figure, VennError> {
    draw(SetCount::Two, labels, names, options)
}

/// Renders a three-set diagram. See [`draw`].
pub fn venn3<S: AsRef<str>>(
    labels: &RegionLabels,
    names: &[S],
    options: &DrawOptions,
) -> Result<Figure, VennError> {
    draw(SetCount::Three, labels, names, options)
}

/// Renders a four-set diagram. See [`draw`].
pub fn venn4<S: AsRef<str>>(
    labels: &RegionLabels,
    names: &[S],
    options: &DrawOptions,
) -> Result<Figure, VennError> {
    draw(SetCount::Four, labels, names, options)
}
