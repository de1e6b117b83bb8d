use super::*;

fn palette() -> Vec<String> {
    ["#000000", "#ff0000", "#00ff00", "blue"].iter().map(|s| (*s).to_owned()).collect()
}

fn selector() -> ToolSelector {
    ToolSelector::new(palette(), vec![2, 5, 10, 20], ToolState::new("#000000", 2).unwrap()).unwrap()
}

// =============================================================
// ToolState
// =============================================================

#[test]
fn tool_state_keeps_color_string_as_given() {
    let state = ToolState::new("White", 3).unwrap();
    assert_eq!(state.color(), "White");
    assert_eq!(state.rgb(), crate::color::WHITE);
    assert_eq!(state.width(), 3);
}

#[test]
fn tool_state_rejects_zero_width() {
    assert!(matches!(ToolState::new("#000000", 0), Err(SketchError::InvalidWidth(_))));
}

#[test]
fn tool_state_rejects_bad_color() {
    assert!(matches!(ToolState::new("nope", 2), Err(SketchError::InvalidColor(_))));
}

// =============================================================
// parse_width
// =============================================================

#[test]
fn parse_width_accepts_positive_integers() {
    assert_eq!(parse_width("5").unwrap(), 5);
    assert_eq!(parse_width(" 20 ").unwrap(), 20);
}

#[test]
fn parse_width_rejects_garbage() {
    for raw in ["", "abc", "-2", "2.5", "0"] {
        assert!(matches!(parse_width(raw), Err(SketchError::InvalidWidth(_))), "{raw:?}");
    }
}

// =============================================================
// Initial highlight
// =============================================================

#[test]
fn initial_highlight_matches_defaults() {
    let sel = selector();
    assert!(sel.is_color_active(0));
    assert!(sel.is_width_active(0));
    assert_eq!(sel.color_source, ColorSource::Palette(0));
}

#[test]
fn initial_highlight_absent_when_default_not_offered() {
    let sel = ToolSelector::new(palette(), vec![5, 10], ToolState::new("#123456", 3).unwrap()).unwrap();
    assert_eq!(sel.color_source, ColorSource::Default);
    assert!((0..4).all(|i| !sel.is_color_active(i)));
    assert!((0..2).all(|i| !sel.is_width_active(i)));
}

#[test]
fn initial_highlight_compares_parsed_colors() {
    let sel = ToolSelector::new(palette(), vec![2], ToolState::new("#0000FF", 2).unwrap()).unwrap();
    assert!(sel.is_color_active(3));
}

#[test]
fn new_rejects_bad_palette_entry() {
    let result = ToolSelector::new(vec!["#zzz".into()], vec![2], ToolState::new("#000", 2).unwrap());
    assert!(matches!(result, Err(SketchError::InvalidColor(_))));
}

#[test]
fn new_rejects_zero_width_option() {
    let result = ToolSelector::new(palette(), vec![2, 0], ToolState::new("#000", 2).unwrap());
    assert!(matches!(result, Err(SketchError::InvalidWidth(_))));
}

// =============================================================
// Option filtering
// =============================================================

fn raw(values: &[Option<&str>]) -> Vec<(usize, Option<String>)> {
    values.iter().map(|v| v.map(str::to_owned)).enumerate().collect()
}

#[test]
fn usable_swatches_accept_any_css_color() {
    let (kept, colors) = usable_swatches(raw(&[
        Some("#000000"),
        Some("darkgreen"),
        Some("rgb(255, 0, 0)"),
        Some("#ff000080"),
    ]));
    assert_eq!(kept, vec![0, 1, 2, 3]);
    assert_eq!(colors, vec!["#000000", "darkgreen", "rgb(255, 0, 0)", "#ff000080"]);
}

#[test]
fn usable_swatches_skip_bad_and_missing_values() {
    let (kept, colors) = usable_swatches(raw(&[Some("#000000"), Some("sparkly"), None, Some("blue")]));
    assert_eq!(kept, vec![0, 3]);
    assert_eq!(colors, vec!["#000000", "blue"]);
}

#[test]
fn usable_widths_skip_non_positive_sizes() {
    let (kept, widths) = usable_widths(raw(&[Some("2"), Some("0"), Some("big"), Some("10")]));
    assert_eq!(kept, vec![0, 3]);
    assert_eq!(widths, vec![2, 10]);
}

#[test]
fn selector_built_from_mixed_swatches_starts() {
    let (kept, palette) = usable_swatches(raw(&[Some("#000000"), Some("darkgreen"), Some("bogus")]));
    let mut sel = ToolSelector::new(palette, vec![2], ToolState::new("#000000", 2).unwrap()).unwrap();
    assert_eq!(kept.len(), 2);
    let state = sel.select_palette(1).unwrap();
    assert_eq!(state.color(), "darkgreen");
    assert_eq!(state.rgb(), Color::rgb(0x00, 0x64, 0x00));
}

// =============================================================
// Palette selection
// =============================================================

#[test]
fn select_palette_updates_color() {
    let mut sel = selector();
    let state = sel.select_palette(1).unwrap();
    assert_eq!(state.color(), "#ff0000");
    assert_eq!(state.rgb(), Color::rgb(0xFF, 0, 0));
}

#[test]
fn select_palette_a_then_b_leaves_only_b_active() {
    let mut sel = selector();
    sel.select_palette(1).unwrap();
    sel.select_palette(2).unwrap();
    assert!(!sel.is_color_active(1));
    assert!(sel.is_color_active(2));
    assert_eq!((0..4).filter(|&i| sel.is_color_active(i)).count(), 1);
}

#[test]
fn select_palette_out_of_range_is_error_and_no_change() {
    let mut sel = selector();
    assert!(matches!(sel.select_palette(9), Err(SketchError::PaletteIndex(9))));
    assert_eq!(sel.state().color(), "#000000");
    assert!(sel.is_color_active(0));
}

#[test]
fn select_palette_does_not_touch_width() {
    let mut sel = selector();
    sel.select_width(2).unwrap();
    sel.select_palette(3).unwrap();
    assert_eq!(sel.state().width(), 10);
    assert!(sel.is_width_active(2));
}

// =============================================================
// Custom color
// =============================================================

#[test]
fn select_custom_clears_palette_highlight() {
    let mut sel = selector();
    sel.select_palette(1).unwrap();
    sel.select_custom("#abcdef").unwrap();
    assert!((0..4).all(|i| !sel.is_color_active(i)));
    assert_eq!(sel.color_source, ColorSource::Custom);
    assert_eq!(sel.state().color(), "#abcdef");
}

#[test]
fn select_custom_matching_a_swatch_still_clears_highlight() {
    let mut sel = selector();
    sel.select_custom("#ff0000").unwrap();
    assert!(!sel.is_color_active(1));
}

#[test]
fn select_palette_after_custom_restores_single_highlight() {
    let mut sel = selector();
    sel.select_custom("#abcdef").unwrap();
    sel.select_palette(2).unwrap();
    assert_eq!(sel.color_source, ColorSource::Palette(2));
    assert_eq!(sel.state().color(), "#00ff00");
}

#[test]
fn select_custom_invalid_leaves_state_untouched() {
    let mut sel = selector();
    sel.select_palette(1).unwrap();
    assert!(sel.select_custom("not-a-color").is_err());
    assert_eq!(sel.state().color(), "#ff0000");
    assert!(sel.is_color_active(1));
}

// =============================================================
// Width selection
// =============================================================

#[test]
fn select_width_moves_highlight() {
    let mut sel = selector();
    sel.select_width(1).unwrap();
    sel.select_width(3).unwrap();
    assert!(!sel.is_width_active(0));
    assert!(!sel.is_width_active(1));
    assert!(sel.is_width_active(3));
    assert_eq!(sel.state().width(), 20);
}

#[test]
fn select_width_out_of_range() {
    let mut sel = selector();
    assert!(matches!(sel.select_width(4), Err(SketchError::WidthIndex(4))));
    assert_eq!(sel.state().width(), 2);
}

#[test]
fn select_width_value_parses_and_highlights() {
    let mut sel = selector();
    sel.select_width_value("10").unwrap();
    assert!(sel.is_width_active(2));
    assert_eq!(sel.state().width(), 10);
}

#[test]
fn select_width_value_rejects_unoffered_width() {
    let mut sel = selector();
    assert!(matches!(sel.select_width_value("7"), Err(SketchError::UnknownWidth(7))));
    assert!(matches!(sel.select_width_value("x"), Err(SketchError::InvalidWidth(_))));
    assert!(sel.is_width_active(0));
}

#[test]
fn select_width_does_not_touch_color_highlight() {
    let mut sel = selector();
    sel.select_custom("#101010").unwrap();
    sel.select_width(1).unwrap();
    assert_eq!(sel.color_source, ColorSource::Custom);
}
