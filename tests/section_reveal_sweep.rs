//! Drives a section element through scripted viewport positions and
//! checks the combined style at each stop, end to end through the public
//! API.

use std::collections::BTreeMap;

use ondule::{
    ElementBounds, Notification, ScrollState, SectionReveal, Stage, StyleSink, SurfaceId,
    SurfaceStyle, ViewportProbe,
};

const WRAPPER: SurfaceId = SurfaceId(1);
const CONTENT: SurfaceId = SurfaceId(2);
const VIEWPORT_HEIGHT: f64 = 1000.0;
const SECTION_HEIGHT: f64 = 400.0;

struct SweepProbe {
    top: f64,
}

impl ViewportProbe for SweepProbe {
    fn scroll_state(&self) -> ScrollState {
        ScrollState::new(0.0, 1280.0, VIEWPORT_HEIGHT, 5000.0)
    }

    fn bounds_of(&self, surface: SurfaceId) -> Option<ElementBounds> {
        match surface {
            WRAPPER | CONTENT => Some(ElementBounds::new(self.top, self.top + SECTION_HEIGHT)),
            _ => None,
        }
    }
}

#[derive(Default)]
struct SweepSink {
    styles: BTreeMap<SurfaceId, SurfaceStyle>,
    heights: BTreeMap<SurfaceId, f64>,
}

impl StyleSink for SweepSink {
    fn apply(&mut self, surface: SurfaceId, style: &SurfaceStyle) {
        self.styles.insert(surface, *style);
    }

    fn set_height(&mut self, surface: SurfaceId, height: f64) {
        self.heights.insert(surface, height);
    }
}

/// Element top position giving the requested top-edge progress.
fn top_for_progress(progress: f64) -> f64 {
    VIEWPORT_HEIGHT * (1.0 - progress)
}

fn style_at(progress: f64, left_to_right: bool) -> (SurfaceStyle, f64) {
    let probe = SweepProbe {
        top: top_for_progress(progress),
    };
    let mut sink = SweepSink::default();
    let mut stage = Stage::new();
    stage.mount(
        Box::new(SectionReveal::new(WRAPPER, CONTENT, left_to_right)),
        &probe,
        &mut sink,
    );
    stage.handle(Notification::Scroll, &probe, &mut sink);
    (sink.styles[&CONTENT], sink.heights[&WRAPPER])
}

#[test]
fn section_slides_in_through_the_entry_window() {
    // Not yet entering.
    let (style, height) = style_at(0.1, false);
    assert_eq!(style.translate.x, 100.0);
    assert_eq!(style.rotate_deg, 10.0);
    assert_eq!(style.opacity, 0.3);
    assert_eq!(height, SECTION_HEIGHT);

    // Halfway through the entry ramp.
    let (style, _) = style_at(0.3, false);
    assert_eq!(style.translate.x, 50.0);
    assert_eq!(style.rotate_deg, 5.0);
    assert!((style.opacity - 0.65).abs() < 1e-12);

    // Fully in frame.
    let (style, _) = style_at(0.5, false);
    assert_eq!(style.translate.x, 0.0);
    assert_eq!(style.rotate_deg, 0.0);
    assert_eq!(style.opacity, 1.0);
}

#[test]
fn left_to_right_mirrors_the_motion() {
    let (style, _) = style_at(0.1, true);
    assert_eq!(style.translate.x, -100.0);
    assert_eq!(style.rotate_deg, -10.0);
    assert_eq!(style.opacity, 0.3);
}

#[test]
fn exit_window_is_driven_by_the_bottom_edge() {
    // Bottom edge progress 0.7: rotation window (0.6..0.8) is halfway,
    // translation window (0.6..1.0) is a quarter in.
    let bottom_progress = 0.7;
    let top = -(VIEWPORT_HEIGHT * bottom_progress - VIEWPORT_HEIGHT + SECTION_HEIGHT);
    let probe = SweepProbe { top };
    let mut sink = SweepSink::default();
    let mut stage = Stage::new();
    stage.mount(
        Box::new(SectionReveal::new(WRAPPER, CONTENT, false)),
        &probe,
        &mut sink,
    );

    let style = sink.styles[&CONTENT];
    assert_eq!(style.translate.x, 0.0);
    assert!((style.rotate_deg - (-0.6)).abs() < 1e-12);
    assert_eq!(style.opacity, 1.0);
}
