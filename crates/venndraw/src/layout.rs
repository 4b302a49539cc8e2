//! Fixed diagram layouts for 2, 3 and 4 sets.
//!
//! Every coordinate here lives in data space: x grows to the right from 0 to
//! [`Layout::x_limit`], y grows upwards from 0 to [`Layout::y_limit`].
//! Mapping into SVG pixels is done by the renderer.

use venndraw_core::{
    draw::{HorizontalAlign, VerticalAlign},
    geometry::Point,
    region::{CombinationKey, SetCount},
};

/// One set's ellipse in data space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeOutline {
    center: Point,
    width: f32,
    height: f32,
    angle: f32,
}

impl ShapeOutline {
    const fn new(x: f32, y: f32, width: f32, height: f32, angle: f32) -> Self {
        Self {
            center: Point::new(x, y),
            width,
            height,
            angle,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Full width along the ellipse's own axis.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Full height along the ellipse's own axis.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Counter-clockwise rotation in degrees.
    pub fn angle(&self) -> f32 {
        self.angle
    }
}

/// Where a region's label is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionAnchor {
    mask: u8,
    position: Point,
}

impl RegionAnchor {
    const fn new(mask: u8, x: f32, y: f32) -> Self {
        Self {
            mask,
            position: Point::new(x, y),
        }
    }

    /// Bit mask of the region, set 0 in the most significant of N bits.
    pub fn mask(&self) -> u8 {
        self.mask
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

/// Where a set's name is drawn and how it is aligned to that point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NameAnchor {
    position: Point,
    horizontal: HorizontalAlign,
    vertical: VerticalAlign,
}

impl NameAnchor {
    const fn new(x: f32, y: f32, horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        Self {
            position: Point::new(x, y),
            horizontal,
            vertical,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn horizontal(&self) -> HorizontalAlign {
        self.horizontal
    }

    /// Alignment in data space: `Bottom` means the text sits above the anchor.
    pub fn vertical(&self) -> VerticalAlign {
        self.vertical
    }
}

/// Static geometry of an N-set diagram.
#[derive(Debug)]
pub struct Layout {
    set_count: SetCount,
    x_limit: f32,
    y_limit: f32,
    figure_size: (f32, f32),
    shapes: &'static [ShapeOutline],
    regions: &'static [RegionAnchor],
    names: &'static [NameAnchor],
}

impl Layout {
    pub fn x_limit(&self) -> f32 {
        self.x_limit
    }

    pub fn y_limit(&self) -> f32 {
        self.y_limit
    }

    /// Default figure size in inches, `(width, height)`.
    pub fn figure_size(&self) -> (f32, f32) {
        self.figure_size
    }

    /// Set outlines, indexed by set.
    pub fn shapes(&self) -> &[ShapeOutline] {
        self.shapes
    }

    /// Label anchors in ascending key order.
    pub fn regions(&self) -> &[RegionAnchor] {
        self.regions
    }

    /// Name anchors, indexed by set.
    pub fn names(&self) -> &[NameAnchor] {
        self.names
    }

    /// Iterates label anchors paired with their combination keys.
    pub fn region_keys(&self) -> impl Iterator<Item = (CombinationKey, Point)> + '_ {
        self.regions.iter().filter_map(move |anchor| {
            CombinationKey::new(self.set_count, anchor.mask)
                .ok()
                .map(|key| (key, anchor.position))
        })
    }
}

static TWO: Layout = Layout {
    set_count: SetCount::Two,
    x_limit: 1.0,
    y_limit: 0.7,
    figure_size: (9.0, 7.0),
    shapes: &[
        ShapeOutline::new(0.375, 0.3, 0.5, 0.5, 0.0),
        ShapeOutline::new(0.625, 0.3, 0.5, 0.5, 0.0),
    ],
    regions: &[
        RegionAnchor::new(0b01, 0.74, 0.30),
        RegionAnchor::new(0b10, 0.26, 0.30),
        RegionAnchor::new(0b11, 0.50, 0.30),
    ],
    names: &[
        NameAnchor::new(0.20, 0.56, HorizontalAlign::Right, VerticalAlign::Bottom),
        NameAnchor::new(0.80, 0.56, HorizontalAlign::Left, VerticalAlign::Bottom),
    ],
};

static THREE: Layout = Layout {
    set_count: SetCount::Three,
    x_limit: 1.0,
    y_limit: 1.0,
    figure_size: (9.0, 9.0),
    shapes: &[
        ShapeOutline::new(0.333, 0.633, 0.5, 0.5, 0.0),
        ShapeOutline::new(0.666, 0.633, 0.5, 0.5, 0.0),
        ShapeOutline::new(0.500, 0.310, 0.5, 0.5, 0.0),
    ],
    regions: &[
        RegionAnchor::new(0b001, 0.50, 0.27),
        RegionAnchor::new(0b010, 0.73, 0.65),
        RegionAnchor::new(0b011, 0.61, 0.46),
        RegionAnchor::new(0b100, 0.27, 0.65),
        RegionAnchor::new(0b101, 0.39, 0.46),
        RegionAnchor::new(0b110, 0.50, 0.65),
        RegionAnchor::new(0b111, 0.50, 0.51),
    ],
    names: &[
        NameAnchor::new(0.15, 0.87, HorizontalAlign::Right, VerticalAlign::Bottom),
        NameAnchor::new(0.85, 0.87, HorizontalAlign::Left, VerticalAlign::Bottom),
        NameAnchor::new(0.50, 0.02, HorizontalAlign::Center, VerticalAlign::Top),
    ],
};

static FOUR: Layout = Layout {
    set_count: SetCount::Four,
    x_limit: 1.0,
    y_limit: 1.0,
    figure_size: (12.0, 12.0),
    shapes: &[
        ShapeOutline::new(0.350, 0.400, 0.72, 0.45, 140.0),
        ShapeOutline::new(0.450, 0.500, 0.72, 0.45, 140.0),
        ShapeOutline::new(0.544, 0.500, 0.72, 0.45, 40.0),
        ShapeOutline::new(0.644, 0.400, 0.72, 0.45, 40.0),
    ],
    regions: &[
        RegionAnchor::new(0b0001, 0.85, 0.42),
        RegionAnchor::new(0b0010, 0.68, 0.72),
        RegionAnchor::new(0b0011, 0.77, 0.59),
        RegionAnchor::new(0b0100, 0.32, 0.72),
        RegionAnchor::new(0b0101, 0.71, 0.30),
        RegionAnchor::new(0b0110, 0.50, 0.66),
        RegionAnchor::new(0b0111, 0.65, 0.50),
        RegionAnchor::new(0b1000, 0.14, 0.42),
        RegionAnchor::new(0b1001, 0.50, 0.17),
        RegionAnchor::new(0b1010, 0.29, 0.30),
        RegionAnchor::new(0b1011, 0.39, 0.24),
        RegionAnchor::new(0b1100, 0.23, 0.59),
        RegionAnchor::new(0b1101, 0.61, 0.24),
        RegionAnchor::new(0b1110, 0.35, 0.50),
        RegionAnchor::new(0b1111, 0.50, 0.38),
    ],
    names: &[
        NameAnchor::new(0.13, 0.18, HorizontalAlign::Right, VerticalAlign::Center),
        NameAnchor::new(0.18, 0.83, HorizontalAlign::Right, VerticalAlign::Bottom),
        NameAnchor::new(0.82, 0.83, HorizontalAlign::Left, VerticalAlign::Bottom),
        NameAnchor::new(0.87, 0.18, HorizontalAlign::Left, VerticalAlign::Top),
    ],
};

/// Returns the fixed layout for `set_count` sets.
pub fn layout(set_count: SetCount) -> &'static Layout {
    match set_count {
        SetCount::Two => &TWO,
        SetCount::Three => &THREE,
        SetCount::Four => &FOUR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_complete() {
        for set_count in SetCount::ALL {
            let layout = layout(set_count);
            assert_eq!(layout.set_count, set_count);
            assert_eq!(layout.shapes().len(), set_count.get());
            assert_eq!(layout.names().len(), set_count.get());
            assert_eq!(layout.regions().len(), set_count.region_count());

            let keys: Vec<CombinationKey> = layout.region_keys().map(|(key, _)| key).collect();
            let expected: Vec<CombinationKey> = set_count.keys().collect();
            assert_eq!(keys, expected, "{set_count}-set anchors out of key order");
        }
    }

    #[test]
    fn test_anchors_inside_limits() {
        for set_count in SetCount::ALL {
            let layout = layout(set_count);
            let points = layout
                .regions()
                .iter()
                .map(RegionAnchor::position)
                .chain(layout.names().iter().map(NameAnchor::position))
                .chain(layout.shapes().iter().map(ShapeOutline::center));

            for point in points {
                assert!(
                    (0.0..=layout.x_limit()).contains(&point.x()),
                    "{set_count}: x {} out of range",
                    point.x()
                );
                assert!(
                    (0.0..=layout.y_limit()).contains(&point.y()),
                    "{set_count}: y {} out of range",
                    point.y()
                );
            }
        }
    }

    #[test]
    fn test_four_set_ellipses_are_mirrored() {
        let shapes = layout(SetCount::Four).shapes();
        assert_eq!(shapes[0].angle() + shapes[3].angle(), 180.0);
        assert_eq!(shapes[1].angle() + shapes[2].angle(), 180.0);
        assert!(shapes.iter().all(|shape| shape.width() > shape.height()));
    }

    #[test]
    fn test_default_figure_sizes() {
        assert_eq!(layout(SetCount::Two).figure_size(), (9.0, 7.0));
        assert_eq!(layout(SetCount::Three).figure_size(), (9.0, 9.0));
        assert_eq!(layout(SetCount::Four).figure_size(), (12.0, 12.0));
    }
}
