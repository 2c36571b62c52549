use super::*;

#[test]
fn high_sample_spawns_one() {
    let g = Glyph::spawn(0.0, 0.0, [0.9, 0.0, 0.0]);
    assert_eq!(g.digit, '1');
}

#[test]
fn low_sample_spawns_zero() {
    let g = Glyph::spawn(0.0, 0.0, [0.5, 0.0, 0.0]);
    assert_eq!(g.digit, '0');
}

#[test]
fn jitter_stays_within_ten_pixels() {
    let g = Glyph::spawn(100.0, 200.0, [0.0, 0.5, 0.999]);
    assert!((g.x - 105.0).abs() < 1e-9);
    assert!(g.y >= 200.0 && g.y < 200.0 + GLYPH_JITTER_PX);
}

#[test]
fn initial_style_is_opaque_and_fixed() {
    let style = Glyph { digit: '0', x: 4.0, y: 8.0 }.initial_style();
    assert!(style.starts_with("position: fixed; left: 4px; top: 8px;"));
    assert!(style.contains("opacity: 1;"));
    assert!(style.contains("translateY(0px)"));
    assert!(style.contains("pointer-events: none"));
}

#[test]
fn faded_style_rises_and_clears() {
    let style = Glyph { digit: '1', x: 0.0, y: 0.0 }.faded_style();
    assert!(style.contains("opacity: 0;"));
    assert!(style.contains("translateY(-10px)"));
}
