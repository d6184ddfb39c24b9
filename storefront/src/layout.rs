use std::fmt;

// breakpoint bands
//
// the viewport is classified into one of these ordered bands, and the layout components
// pick their padding/columns/spacing from the tables below.  the derived Ord follows the
// declaration order, so Xs < Sm < ... < Xl
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

// band used whenever a classification does not match any of the known bands
pub const DEFAULT_BAND: Breakpoint = Breakpoint::Md;

impl Breakpoint {
    pub fn all() -> Vec<Self> {
        vec![Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl]
    }

    // smallest viewport width (in css pixels) that falls into this band
    pub fn min_width(self) -> f64 {
        match self {
            Self::Xs => 0.0,
            Self::Sm => 600.0,
            Self::Md => 900.0,
            Self::Lg => 1200.0,
            Self::Xl => 1536.0,
        }
    }

    pub fn from_width(width: f64) -> Self {
        // NaN compares false against everything, so it lands in Xs with the negatives
        Self::all()
            .into_iter()
            .rev()
            .find(|band| width >= band.min_width())
            .unwrap_or(Self::Xs)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "xs" => Some(Self::Xs),
            "sm" => Some(Self::Sm),
            "md" => Some(Self::Md),
            "lg" => Some(Self::Lg),
            "xl" => Some(Self::Xl),
            _ => None,
        }
    }

    pub fn is_mobile(self) -> bool {
        self <= Self::Sm
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        };
        write!(f, "{}", name)
    }
}

// IndustryStandardGrid parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridParams {
    // outer padding, px
    pub padding: u32,
    pub columns: u32,
    // gap between cells, px
    pub spacing: u32,
}

impl GridParams {
    pub fn for_band(band: Option<Breakpoint>) -> Self {
        match band.unwrap_or(DEFAULT_BAND) {
            Breakpoint::Xs => GridParams {
                padding: 16,
                columns: 4,
                spacing: 16,
            },
            Breakpoint::Sm => GridParams {
                padding: 24,
                columns: 8,
                spacing: 16,
            },
            Breakpoint::Md => GridParams {
                padding: 24,
                columns: 12,
                spacing: 24,
            },
            Breakpoint::Lg => GridParams {
                padding: 32,
                columns: 12,
                spacing: 24,
            },
            Breakpoint::Xl => GridParams {
                padding: 40,
                columns: 12,
                spacing: 32,
            },
        }
    }

    // columns a single item should span so that `per_row` items fill one row.  the result
    // is at least 1 and never wider than the grid
    pub fn item_span(&self, per_row: u32) -> u32 {
        (self.columns / per_row.max(1)).clamp(1, self.columns)
    }

    pub fn to_css(&self) -> String {
        format!(
            "display: grid; grid-template-columns: repeat({}, minmax(0, 1fr)); gap: {}px; padding: {}px;",
            self.columns, self.spacing, self.padding
        )
    }
}

// MobileContainer parameters
//
// narrow bands run edge to edge with a small gutter, wider bands center the content under
// a max width
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContainerParams {
    pub padding_x: u32,
    pub max_width: Option<u32>,
    pub full_bleed: bool,
}

impl ContainerParams {
    pub fn for_band(band: Option<Breakpoint>) -> Self {
        match band.unwrap_or(DEFAULT_BAND) {
            Breakpoint::Xs => ContainerParams {
                padding_x: 12,
                max_width: None,
                full_bleed: true,
            },
            Breakpoint::Sm => ContainerParams {
                padding_x: 16,
                max_width: None,
                full_bleed: true,
            },
            Breakpoint::Md => ContainerParams {
                padding_x: 24,
                max_width: Some(900),
                full_bleed: false,
            },
            Breakpoint::Lg => ContainerParams {
                padding_x: 32,
                max_width: Some(1200),
                full_bleed: false,
            },
            Breakpoint::Xl => ContainerParams {
                padding_x: 32,
                max_width: Some(1440),
                full_bleed: false,
            },
        }
    }

    pub fn to_css(&self) -> String {
        let width = match (self.full_bleed, self.max_width) {
            (false, Some(max)) => format!("max-width: {}px; margin: 0 auto;", max),
            _ => String::from("width: 100%;"),
        };

        format!("{} padding: 0 {}px;", width, self.padding_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_classification_uses_band_minimums() {
        assert_eq!(Breakpoint::from_width(0.0), Breakpoint::Xs);
        assert_eq!(Breakpoint::from_width(599.9), Breakpoint::Xs);
        assert_eq!(Breakpoint::from_width(600.0), Breakpoint::Sm);
        assert_eq!(Breakpoint::from_width(899.0), Breakpoint::Sm);
        assert_eq!(Breakpoint::from_width(900.0), Breakpoint::Md);
        assert_eq!(Breakpoint::from_width(1200.0), Breakpoint::Lg);
        assert_eq!(Breakpoint::from_width(1535.0), Breakpoint::Lg);
        assert_eq!(Breakpoint::from_width(4000.0), Breakpoint::Xl);
    }

    #[test]
    fn degenerate_widths_are_narrowest_band() {
        assert_eq!(Breakpoint::from_width(-20.0), Breakpoint::Xs);
        assert_eq!(Breakpoint::from_width(f64::NAN), Breakpoint::Xs);
    }

    #[test]
    fn bands_are_ordered() {
        let bands = Breakpoint::all();
        assert!(bands.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(
            bands
                .windows(2)
                .all(|pair| pair[0].min_width() < pair[1].min_width())
        );
    }

    #[test]
    fn names_parse_and_display() {
        for band in Breakpoint::all() {
            assert_eq!(Breakpoint::from_name(&band.to_string()), Some(band));
        }
        assert_eq!(Breakpoint::from_name(" LG "), Some(Breakpoint::Lg));
        assert_eq!(Breakpoint::from_name("xxl"), None);
    }

    #[test]
    fn grid_table_per_band() {
        let expected = [
            (Breakpoint::Xs, 16, 4, 16),
            (Breakpoint::Sm, 24, 8, 16),
            (Breakpoint::Md, 24, 12, 24),
            (Breakpoint::Lg, 32, 12, 24),
            (Breakpoint::Xl, 40, 12, 32),
        ];

        for (band, padding, columns, spacing) in expected {
            assert_eq!(
                GridParams::for_band(Some(band)),
                GridParams {
                    padding,
                    columns,
                    spacing
                }
            );
        }
    }

    #[test]
    fn unmatched_band_falls_back_to_default() {
        let unmatched = Breakpoint::from_name("huge");
        assert_eq!(
            GridParams::for_band(unmatched),
            GridParams::for_band(Some(DEFAULT_BAND))
        );
        assert_eq!(
            ContainerParams::for_band(unmatched),
            ContainerParams::for_band(Some(DEFAULT_BAND))
        );
    }

    #[test]
    fn mobile_bands_are_full_bleed() {
        for band in Breakpoint::all() {
            let params = ContainerParams::for_band(Some(band));
            assert_eq!(params.full_bleed, band.is_mobile());
            assert_eq!(params.max_width.is_none(), band.is_mobile());
        }
    }

    #[test]
    fn item_span_stays_inside_grid() {
        let xs = GridParams::for_band(Some(Breakpoint::Xs));
        assert_eq!(xs.item_span(1), 4);
        assert_eq!(xs.item_span(2), 2);
        assert_eq!(xs.item_span(8), 1);
        assert_eq!(xs.item_span(0), 4);

        let lg = GridParams::for_band(Some(Breakpoint::Lg));
        assert_eq!(lg.item_span(4), 3);
    }

    #[test]
    fn css_rendering() {
        let grid = GridParams::for_band(Some(Breakpoint::Sm));
        assert_eq!(
            grid.to_css(),
            "display: grid; grid-template-columns: repeat(8, minmax(0, 1fr)); gap: 16px; padding: 24px;"
        );

        let container = ContainerParams::for_band(Some(Breakpoint::Lg));
        assert_eq!(
            container.to_css(),
            "max-width: 1200px; margin: 0 auto; padding: 0 32px;"
        );

        let mobile = ContainerParams::for_band(Some(Breakpoint::Xs));
        assert_eq!(mobile.to_css(), "width: 100%; padding: 0 12px;");
    }

    #[test]
    fn full_bleed_ignores_max_width() {
        let edge_to_edge = ContainerParams {
            padding_x: 8,
            max_width: Some(900),
            full_bleed: true,
        };
        assert_eq!(edge_to_edge.to_css(), "width: 100%; padding: 0 8px;");
    }
}
