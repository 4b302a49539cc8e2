//! venndraw - Venn diagrams for 2, 3 and 4 sets.
//!
//! Region label computation and SVG rendering. Labels are computed from the
//! input collections with [`get_labels`], then drawn onto a fixed per-N
//! layout with [`venn2`], [`venn3`], [`venn4`] or the generic [`draw`].
//!
//! ```
//! use venndraw::{DrawOptions, Fill, get_labels, venn2};
//!
//! let labels = get_labels([vec!["a", "b", "c"], vec!["b", "c", "d"]], &Fill::default()).unwrap();
//! let figure = venn2(&labels, &["left", "right"], &DrawOptions::default()).unwrap();
//! assert!(figure.to_svg_string().contains("<svg"));
//! ```

pub mod config;
pub mod labels;
pub mod layout;

mod error;
mod export;
mod options;

pub use venndraw_core::{color, draw, geometry, region};

pub use error::VennError;
pub use export::svg::{Figure, draw, venn2, venn3, venn4};
pub use labels::{
    Fill, FillMode, RegionLabels, Regions, UnknownFillMode, compute_regions, get_labels,
    get_labels_for,
};
pub use options::{DEFAULT_COLORS, DrawOptions};

use std::{fmt::Display, hash::Hash};

use log::{debug, info, trace};

use config::AppConfig;

/// Builder for computing and rendering Venn diagrams from one configuration.
///
/// # Examples
///
/// ```rust
/// use venndraw::{VennBuilder, config::AppConfig};
///
/// let builder = VennBuilder::new(AppConfig::default());
///
/// // Compute region labels with the configured fill
/// let labels = builder
///     .labels([vec![1, 2, 3], vec![2, 3, 4], vec![3, 5]])
///     .expect("Failed to compute labels");
///
/// // Render them to SVG
/// let svg = builder
///     .render_svg(&labels, &["A", "B", "C"])
///     .expect("Failed to render");
/// assert!(svg.contains("<ellipse"));
///
/// // Or use default config
/// let builder = VennBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct VennBuilder {
    config: AppConfig,
}

impl VennBuilder {
    /// Create a new builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including label, style and figure settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Compute region labels for 2 to 4 collections.
    ///
    /// Labels are formatted with the configured [`Fill`].
    ///
    /// # Arguments
    ///
    /// * `data` - One collection per set
    ///
    /// # Errors
    ///
    /// Returns [`VennError::InvalidArgument`] unless 2, 3 or 4 collections
    /// are supplied.
    pub fn labels<I, C, T>(&self, data: I) -> Result<RegionLabels, VennError>
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = T>,
        T: Eq + Hash + Clone + Display,
    {
        let fill = self.config.labels().fill();
        info!(fill:? = fill; "Computing region labels");

        let labels = get_labels(data, fill)?;

        debug!(set_count = labels.set_count().get(), regions = labels.len(); "Labels computed");
        trace!(labels:?; "Computed labels");

        Ok(labels)
    }

    /// Render region labels into a [`Figure`].
    ///
    /// The set count is taken from `labels`; styling comes from the
    /// configuration.
    ///
    /// # Arguments
    ///
    /// * `labels` - Region labels, e.g. from [`VennBuilder::labels`]
    /// * `names` - One display name per set
    ///
    /// # Errors
    ///
    /// Returns [`VennError::Style`] for invalid configured colors and
    /// [`VennError::InvalidArgument`] for a wrong number of names or colors.
    pub fn render<S: AsRef<str>>(
        &self,
        labels: &RegionLabels,
        names: &[S],
    ) -> Result<Figure, VennError> {
        let options = self.config.draw_options()?;
        draw(labels.set_count(), labels, names, &options)
    }

    /// Render region labels to an SVG string.
    ///
    /// # Errors
    ///
    /// Same as [`VennBuilder::render`].
    pub fn render_svg<S: AsRef<str>>(
        &self,
        labels: &RegionLabels,
        names: &[S],
    ) -> Result<String, VennError> {
        let figure = self.render(labels, names)?;
        Ok(figure.to_svg_string())
    }
}
