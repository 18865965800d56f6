use giapha_core::{Style, StyleBand, StylePalette};

#[test]
fn default_palette_bands_reproduce_traditional_colors() {
    let palette = StylePalette::default();

    assert_eq!(palette.resolve(Some(1), false, false).fill, "#FFD700");
    assert_eq!(palette.resolve(Some(2), false, false).fill, "#FFDEAD");
    assert_eq!(palette.resolve(Some(3), false, false).fill, "#F0F8FF");
    assert_eq!(palette.resolve(Some(14), false, false).fill, "#F0F8FF");
    // The pale-blue band is bottom-open; unusual sub-founder values stay in
    // the elder look instead of the catch-all.
    assert_eq!(palette.resolve(Some(0), false, false).fill, "#F0F8FF");
    assert_eq!(palette.resolve(Some(-3), false, false).fill, "#F0F8FF");

    // 15 and above fall through to the catch-all.
    let modern = palette.resolve(Some(15), false, false);
    assert_eq!(modern.fill, "#FFFFFF");
    assert_eq!(modern.border_color, "#2E8B57");
}

#[test]
fn missing_generation_gets_neutral_default_not_a_band() {
    let palette = StylePalette::default();
    let style = palette.resolve(None, false, false);
    assert_eq!(style, palette.missing_generation);
}

#[test]
fn search_match_overrides_every_band() {
    let palette = StylePalette::default();

    // A generation-18 member matching the query gets the highlight style,
    // not the generation-18 band style.
    let style = palette.resolve(Some(18), true, false);
    assert_eq!(style, palette.highlight);
    assert_eq!(style.fill, "#DC143C");
    assert_eq!(style.font_color, "white");

    let founder = palette.resolve(Some(1), true, true);
    assert_eq!(founder, palette.highlight);
}

#[test]
fn resolution_is_deterministic_for_fixed_inputs() {
    let palette = StylePalette::default();
    for generation in [None, Some(1), Some(7), Some(20)] {
        for is_match in [false, true] {
            for is_deceased in [false, true] {
                let first = palette.resolve(generation, is_match, is_deceased);
                let second = palette.resolve(generation, is_match, is_deceased);
                assert_eq!(first, second);
            }
        }
    }
}

#[test]
fn first_matching_band_wins_over_later_overlap() {
    let palette = StylePalette {
        bands: vec![
            StyleBand {
                min: 1,
                max: Some(10),
                style: Style::new("#111111", "white", "black"),
            },
            StyleBand {
                min: 5,
                max: None,
                style: Style::new("#222222", "white", "black"),
            },
        ],
        ..StylePalette::default()
    };

    assert_eq!(palette.resolve(Some(7), false, false).fill, "#111111");
    assert_eq!(palette.resolve(Some(12), false, false).fill, "#222222");
}

#[test]
fn empty_band_table_always_resolves_through_fallback() {
    let palette = StylePalette {
        bands: Vec::new(),
        ..StylePalette::default()
    };

    let style = palette.resolve(Some(42), false, false);
    assert_eq!(style, palette.fallback);
}
