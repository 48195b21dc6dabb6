use super::*;
use crate::{
    curve::{
        shape::RectCurve,
        spline::{CurveType, SplineCurve},
    },
    layout::words::split_words,
    render::{
        metrics::GlyphMetrics,
        surface::{DrawCmd, RecordingSurface},
    },
};

fn zero_metrics(_: char) -> GlyphMetrics {
    GlyphMetrics::default()
}

fn bare() -> RibbonStyle {
    RibbonStyle {
        padding: 0.0,
        stroke_width: 3.0,
    }
}

/// 32 filler chars, a space, then "xyz" at indices 33..=35, on a 360-long path.
fn seam_text() -> String {
    format!("{} xyz", ".".repeat(32))
}

fn perimeter_360() -> RectCurve {
    RectCurve::sharp(100.0, 80.0)
}

#[test]
fn split_keeps_non_straddling_interval_whole() {
    let pieces = split_interval(370.0, 400.0, 360.0);
    assert_eq!(pieces, [PathInterval { start: 10.0, end: 40.0 }]);
}

#[test]
fn split_divides_straddling_interval_at_the_seam() {
    let pieces = split_interval(350.0, 370.0, 360.0);
    assert_eq!(
        pieces,
        [
            PathInterval { start: 350.0, end: 360.0 },
            PathInterval { start: 0.0, end: 10.0 },
        ]
    );
    let covered: f64 = pieces.iter().map(PathInterval::len).sum();
    assert_eq!(covered, 20.0);
    for p in &pieces {
        assert!(p.start >= 0.0 && p.end <= 360.0);
    }
}

#[test]
fn split_handles_negative_starts() {
    let pieces = split_interval(-15.0, 5.0, 360.0);
    assert_eq!(
        pieces,
        [
            PathInterval { start: 345.0, end: 360.0 },
            PathInterval { start: 0.0, end: 5.0 },
        ]
    );
}

#[test]
fn split_drops_empty_tail_and_degenerate_input() {
    assert_eq!(
        split_interval(350.0, 360.0, 360.0),
        [PathInterval { start: 350.0, end: 360.0 }]
    );
    assert!(split_interval(10.0, 10.0, 360.0).is_empty());
    assert!(split_interval(0.0, 10.0, 0.0).is_empty());
}

#[test]
fn split_collapses_over_long_intervals_to_the_whole_path() {
    assert_eq!(
        split_interval(100.0, 500.0, 360.0),
        [PathInterval { start: 0.0, end: 360.0 }]
    );
}

#[test]
fn sample_count_has_a_floor_of_ten() {
    assert_eq!(sample_count(0.0), 10);
    assert_eq!(sample_count(49.0), 10);
    assert_eq!(sample_count(51.0), 11);
    assert_eq!(sample_count(360.0), 72);
}

#[test]
fn word_straddling_the_seam_becomes_two_strokes() {
    let curve = perimeter_360();
    let text = seam_text();
    let layout = TextLayout::compute(&text, &curve, 20.0, Direction::Clockwise);
    assert_eq!(layout.raw_distance(33), 350.0);
    assert_eq!(layout.raw_distance(35), 370.0);

    let composer = RibbonComposer::new(RibbonMode::Word, bare());
    let strokes = composer.compose(&curve, &layout, &split_words(&text), &zero_metrics);
    let intervals: Vec<_> = strokes.iter().map(|s| s.interval).collect();
    assert_eq!(
        intervals,
        [
            PathInterval { start: 20.0, end: 330.0 },
            PathInterval { start: 350.0, end: 360.0 },
            PathInterval { start: 0.0, end: 10.0 },
        ]
    );
    // No stroke may jump across the path: consecutive samples stay close.
    for s in &strokes[1..] {
        for pair in s.points.windows(2) {
            assert!(pair[0].distance(pair[1]) <= 5.0 + 1e-9);
        }
    }
}

#[test]
fn counter_clockwise_words_are_mirrored() {
    let curve = perimeter_360();
    let text = seam_text();
    let layout = TextLayout::compute(&text, &curve, 20.0, Direction::CounterClockwise);
    let composer = RibbonComposer::new(RibbonMode::Word, bare());
    let strokes = composer.compose(&curve, &layout, &split_words(&text), &zero_metrics);
    let intervals: Vec<_> = strokes.iter().map(|s| s.interval).collect();
    assert_eq!(
        intervals,
        [
            PathInterval { start: 30.0, end: 340.0 },
            PathInterval { start: 0.0, end: 10.0 },
            PathInterval { start: 350.0, end: 360.0 },
        ]
    );
}

#[test]
fn character_bands_span_glyph_width_plus_padding() {
    let curve = perimeter_360();
    let layout = TextLayout::compute("abcd", &curve, 0.0, Direction::Clockwise);
    let metrics = |_: char| GlyphMetrics {
        width: 10.0,
        ascent: 0.0,
        descent: 0.0,
    };
    let composer = RibbonComposer::new(
        RibbonMode::Character,
        RibbonStyle {
            padding: 2.0,
            stroke_width: 1.0,
        },
    );
    let strokes = composer.compose(&curve, &layout, &[], &metrics);
    let intervals: Vec<_> = strokes.iter().map(|s| s.interval).collect();
    // The first character sits on the seam and is split.
    assert_eq!(
        intervals,
        [
            PathInterval { start: 353.0, end: 360.0 },
            PathInterval { start: 0.0, end: 7.0 },
            PathInterval { start: 83.0, end: 97.0 },
            PathInterval { start: 173.0, end: 187.0 },
            PathInterval { start: 263.0, end: 277.0 },
        ]
    );
}

#[test]
fn path_band_closes_on_closed_curves() {
    let curve = perimeter_360();
    let layout = TextLayout::compute("abc", &curve, 0.0, Direction::Clockwise);
    let composer = RibbonComposer::new(RibbonMode::Path, bare());
    let strokes = composer.compose(&curve, &layout, &[], &zero_metrics);
    assert_eq!(strokes.len(), 1);
    let pts = &strokes[0].points;
    assert_eq!(pts.len(), 72);
    assert!(pts[0].distance(pts[71]) < 1e-9);
}

#[test]
fn open_spline_words_stay_within_the_ends() {
    let curve = SplineCurve::new(
        vec![Point::new(0.0, 0.0), Point::new(120.0, 0.0)],
        CurveType::Linear,
    );
    let text = "ab cd";
    let layout = TextLayout::compute(text, &curve, 0.0, Direction::Clockwise);
    let composer = RibbonComposer::new(RibbonMode::Word, bare());
    let strokes = composer.compose(&curve, &layout, &split_words(text), &zero_metrics);
    for s in &strokes {
        assert!(s.interval.start >= 0.0 && s.interval.end <= 120.0);
    }
    assert_eq!(strokes.len(), 2);
}

#[test]
fn empty_layout_or_none_mode_draws_nothing() {
    let curve = perimeter_360();
    let layout = TextLayout::compute("", &curve, 0.0, Direction::Clockwise);
    for mode in [RibbonMode::Character, RibbonMode::Word] {
        let composer = RibbonComposer::new(mode, bare());
        assert!(composer.compose(&curve, &layout, &[], &zero_metrics).is_empty());
    }
    let full = TextLayout::compute("abc", &curve, 0.0, Direction::Clockwise);
    let none = RibbonComposer::default();
    assert!(none.compose(&curve, &full, &split_words("abc"), &zero_metrics).is_empty());
}

#[test]
fn draw_strokes_each_band_separately() {
    let curve = perimeter_360();
    let layout = TextLayout::compute("ab", &curve, 0.0, Direction::Clockwise);
    let composer = RibbonComposer::new(RibbonMode::Character, RibbonStyle::default());
    let strokes = composer.compose(&curve, &layout, &[], &zero_metrics);
    let mut surface = RecordingSurface::default();
    composer.draw(&strokes, &mut surface);
    assert_eq!(surface.stroke_count(), strokes.len());
    assert!(matches!(surface.commands()[0], DrawCmd::MoveTo { .. }));
    assert_eq!(strokes[0].to_bez_path().elements().len(), strokes[0].points.len());
}
