//! Deterministic node styling.
//!
//! # Responsibility
//! - Map generation band, search-match state and life status to one visual
//!   style through an ordered, exhaustive rule table.
//!
//! # Invariants
//! - Resolution is a pure total function: every input combination yields
//!   exactly one style, and repeated calls yield identical styles.
//! - Precedence is fixed: search highlight, then missing-generation default,
//!   then first matching band, then the mandatory fallback. Later rules never
//!   override earlier matches.

use serde::{Deserialize, Serialize};

/// Visual style applied to one chart node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    /// Node fill color, `#rrggbb`.
    pub fill: String,
    /// Label text color.
    pub font_color: String,
    /// Node border color.
    pub border_color: String,
}

impl Style {
    /// Creates a style from the three color channels.
    pub fn new(
        fill: impl Into<String>,
        font_color: impl Into<String>,
        border_color: impl Into<String>,
    ) -> Self {
        Self {
            fill: fill.into(),
            font_color: font_color.into(),
            border_color: border_color.into(),
        }
    }
}

/// One banded range of generation values mapped to a style.
///
/// Bounds are inclusive at `min` and exclusive at `max`; `max: None` means
/// open-ended. Bands are evaluated in table order and the first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleBand {
    /// Inclusive lower generation bound.
    pub min: i32,
    /// Exclusive upper generation bound; `None` = unbounded.
    pub max: Option<i32>,
    /// Style applied when the band matches.
    pub style: Style,
}

impl StyleBand {
    fn contains(&self, generation: i32) -> bool {
        generation >= self.min && self.max.map_or(true, |max| generation < max)
    }
}

/// Ordered style rule table.
///
/// The fallback entry makes the table exhaustive; resolution can never
/// produce zero or multiple styles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylePalette {
    /// Style for search matches; overrides everything else.
    pub highlight: Style,
    /// Style for members without an author-asserted generation.
    pub missing_generation: Style,
    /// Banded ranges evaluated in order, first match wins.
    pub bands: Vec<StyleBand>,
    /// Mandatory catch-all applied when no band matches.
    pub fallback: Style,
    /// Optional border accent for deceased members. Applied after band or
    /// fallback resolution; never applied over the search highlight.
    pub deceased_border: Option<String>,
}

impl Default for StylePalette {
    /// Traditional palette: gold for the founder generation, pale orange for
    /// the second, pale blue for every other generation below 15 (including
    /// zero and negative values), white with a green border for the
    /// present-day ones, crimson search highlight.
    fn default() -> Self {
        Self {
            highlight: Style::new("#DC143C", "white", "#8B0000"),
            missing_generation: Style::new("#FFFFFF", "black", "black"),
            bands: vec![
                StyleBand {
                    min: 1,
                    max: Some(2),
                    style: Style::new("#FFD700", "black", "#B8860B"),
                },
                StyleBand {
                    min: 2,
                    max: Some(3),
                    style: Style::new("#FFDEAD", "black", "black"),
                },
                // Bottom-open on purpose: the first two bands already caught
                // 1 and 2, so this band takes everything else under 15.
                StyleBand {
                    min: i32::MIN,
                    max: Some(15),
                    style: Style::new("#F0F8FF", "black", "black"),
                },
            ],
            fallback: Style::new("#FFFFFF", "black", "#2E8B57"),
            deceased_border: None,
        }
    }
}

impl StylePalette {
    /// Resolves one node style from generation band, search-match state and
    /// life status.
    ///
    /// # Contract
    /// - Pure and deterministic: identical inputs yield identical styles.
    /// - Total: exactly one style for every input combination.
    /// - Search match wins over every band, including the deceased accent.
    pub fn resolve(
        &self,
        generation: Option<i32>,
        is_search_match: bool,
        is_deceased: bool,
    ) -> Style {
        if is_search_match {
            return self.highlight.clone();
        }

        let mut style = match generation {
            None => self.missing_generation.clone(),
            Some(value) => self
                .bands
                .iter()
                .find(|band| band.contains(value))
                .map(|band| band.style.clone())
                .unwrap_or_else(|| self.fallback.clone()),
        };

        if is_deceased {
            if let Some(border) = &self.deceased_border {
                style.border_color = border.clone();
            }
        }

        style
    }
}

#[cfg(test)]
mod tests {
    use super::{Style, StyleBand, StylePalette};

    #[test]
    fn band_bounds_are_inclusive_min_exclusive_max() {
        let band = StyleBand {
            min: 3,
            max: Some(15),
            style: Style::new("#F0F8FF", "black", "black"),
        };
        assert!(band.contains(3));
        assert!(band.contains(14));
        assert!(!band.contains(15));
        assert!(!band.contains(2));
    }

    #[test]
    fn open_ended_band_matches_everything_above_min() {
        let band = StyleBand {
            min: 20,
            max: None,
            style: Style::new("#FFFFFF", "black", "black"),
        };
        assert!(band.contains(20));
        assert!(band.contains(99));
        assert!(!band.contains(19));
    }

    #[test]
    fn default_palette_paints_sub_founder_generations_pale_blue() {
        let palette = StylePalette::default();
        for generation in [0, -1, i32::MIN] {
            let style = palette.resolve(Some(generation), false, false);
            assert_eq!(style.fill, "#F0F8FF", "generation {generation}");
        }
        // The named bands still win for 1 and 2.
        assert_eq!(palette.resolve(Some(1), false, false).fill, "#FFD700");
        assert_eq!(palette.resolve(Some(2), false, false).fill, "#FFDEAD");
    }

    #[test]
    fn deceased_accent_never_overrides_highlight() {
        let palette = StylePalette {
            deceased_border: Some("#808080".to_string()),
            ..StylePalette::default()
        };

        let highlighted = palette.resolve(Some(1), true, true);
        assert_eq!(highlighted, palette.highlight);

        let accented = palette.resolve(Some(1), false, true);
        assert_eq!(accented.border_color, "#808080");
        assert_eq!(accented.fill, "#FFD700");
    }
}
