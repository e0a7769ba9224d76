use kurbo::{BezPath, Point, Vec2};

use crate::{
    effects::Effect,
    math::{random_range, stable_hash64},
    view::{StyleSink, SurfaceId, SurfaceStyle, ViewportProbe},
};

pub const WAVE_COUNT: usize = 8;
pub const CANVAS_WIDTH: f64 = 1440.0;
pub const CANVAS_HEIGHT: f64 = 1024.0;

/// Alternating wave fills; even-indexed waves blend into the backdrop
/// (which shares `COLOR_1`), odd ones stand out.
pub const COLOR_1: &str = "#CD8285";
pub const COLOR_2: &str = "#C14912";

/// Fill for the wave at `index`, alternating by parity.
pub fn wave_fill(index: usize) -> &'static str {
    if index % 2 == 0 { COLOR_1 } else { COLOR_2 }
}

/// Vertical spacing between wave baselines, first baseline at `WAVE_Y0`.
const WAVE_Y0: f64 = 100.0;
const WAVE_SPACING: f64 = 120.0;
/// Horizontal overshoot so edges stay covered while waves translate.
const WAVE_OVERSHOOT: f64 = 200.0;

/// Fraction of the viewport height the container drifts over a full page
/// scroll.
const SCROLL_V_AMPLITUDE: f64 = 0.2;
/// Fraction of the viewport width a wave slides sideways.
const SCROLL_H_AMPLITUDE: f64 = 0.14;
/// Peak wave rotation in degrees, reached at the top of the page.
const ROTATION_AMPLITUDE: f64 = 3.0;

/// Per-wave jitter state. Sampled once at construction and fixed for the
/// component's lifetime; resize and scroll never resample it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaveGeometry {
    /// First cubic control point, offset from the wave baseline.
    pub ctrl1: Vec2,
    /// Second cubic control point.
    pub ctrl2: Vec2,
    /// Explicit control point of the smooth second cubic.
    pub smooth: Vec2,
    /// Crest midpoint offset.
    pub mid: Vec2,
    /// Signed rotation jitter, magnitude in [0.5, 1).
    pub rotation_bias: f64,
    /// Signed horizontal-translation jitter, magnitude in [0.5, 1).
    pub translate_bias: f64,
}

impl WaveGeometry {
    pub fn sample(rng: &mut fastrand::Rng) -> Self {
        Self {
            ctrl1: Vec2::new(random_range(rng, 100.0, 200.0), random_range(rng, -50.0, 50.0)),
            ctrl2: Vec2::new(random_range(rng, 400.0, 500.0), random_range(rng, -60.0, 60.0)),
            smooth: Vec2::new(
                random_range(rng, 1200.0, 1350.0),
                random_range(rng, -50.0, 50.0),
            ),
            mid: Vec2::new(720.0, random_range(rng, -20.0, 20.0)),
            rotation_bias: signed_bias(rng),
            translate_bias: signed_bias(rng),
        }
    }

    /// Closed outline of the wave at `index`: a cubic pair across the
    /// canvas (second segment reflects the first, SVG smooth-curve style),
    /// squared off to the bottom edge.
    pub fn outline(&self, index: usize) -> BezPath {
        let y0 = WAVE_Y0 + index as f64 * WAVE_SPACING;
        let start = Point::new(-WAVE_OVERSHOOT, y0);
        let mid = Point::new(self.mid.x, y0 + self.mid.y);
        let end = Point::new(CANVAS_WIDTH + WAVE_OVERSHOOT, y0);

        let c1 = Point::new(self.ctrl1.x, y0 + self.ctrl1.y);
        let c2 = Point::new(self.ctrl2.x, y0 + self.ctrl2.y);
        // Reflection of c2 about the midpoint keeps the join smooth.
        let c3 = Point::new(2.0 * mid.x - c2.x, 2.0 * mid.y - c2.y);
        let c4 = Point::new(self.smooth.x, y0 + self.smooth.y);

        let mut path = BezPath::new();
        path.move_to(start);
        path.curve_to(c1, c2, mid);
        path.curve_to(c3, c4, end);
        path.line_to(Point::new(CANVAS_WIDTH + WAVE_OVERSHOOT, CANVAS_HEIGHT));
        path.line_to(Point::new(-WAVE_OVERSHOOT, CANVAS_HEIGHT));
        path.close_path();
        path
    }
}

fn signed_bias(rng: &mut fastrand::Rng) -> f64 {
    let magnitude = random_range(rng, 0.5, 1.0);
    if rng.bool() { magnitude } else { -magnitude }
}

#[derive(Clone, Debug)]
struct Wave {
    surface: SurfaceId,
    geometry: WaveGeometry,
}

/// Wavy background: an outer container with vertical parallax plus one
/// jittered wave path per surface, each sliding and tilting with page
/// progress.
#[derive(Clone, Debug)]
pub struct WavyBackground {
    container: SurfaceId,
    waves: Vec<Wave>,
}

impl WavyBackground {
    /// Geometry for each wave surface is derived from `seed` and the wave
    /// index, so a mount is fully reproducible.
    pub fn new(container: SurfaceId, wave_surfaces: Vec<SurfaceId>, seed: u64) -> Self {
        let waves = wave_surfaces
            .into_iter()
            .enumerate()
            .map(|(index, surface)| {
                let wave_seed = stable_hash64(seed, &format!("wave-{index}"));
                let mut rng = fastrand::Rng::with_seed(wave_seed);
                Wave {
                    surface,
                    geometry: WaveGeometry::sample(&mut rng),
                }
            })
            .collect();
        Self { container, waves }
    }

    pub fn geometry(&self, index: usize) -> Option<&WaveGeometry> {
        self.waves.get(index).map(|w| &w.geometry)
    }

    /// Outlines for the host to install on the wave surfaces at mount.
    pub fn outlines(&self) -> Vec<BezPath> {
        self.waves
            .iter()
            .enumerate()
            .map(|(index, wave)| wave.geometry.outline(index))
            .collect()
    }

    /// Fill colors matching `outlines`, installed at mount as well.
    pub fn fills(&self) -> Vec<&'static str> {
        (0..self.waves.len()).map(wave_fill).collect()
    }

    pub fn wave_count(&self) -> usize {
        self.waves.len()
    }
}

impl Effect for WavyBackground {
    fn refresh(&mut self, probe: &dyn ViewportProbe, sink: &mut dyn StyleSink) {
        let view = probe.scroll_state();
        let ratio = view.page_ratio();

        let vertical = ratio * SCROLL_V_AMPLITUDE * view.viewport_height;
        sink.apply(
            self.container,
            &SurfaceStyle {
                translate: Vec2::new(0.0, vertical),
                ..SurfaceStyle::default()
            },
        );

        for (index, wave) in self.waves.iter().enumerate() {
            let rotation_sign = if index % 4 < 2 { 1.0 } else { -1.0 };
            let translate_sign = if index % 2 == 0 { -1.0 } else { 1.0 };

            let rotate_deg = rotation_sign
                * wave.geometry.rotation_bias
                * (1.0 - ratio)
                * ROTATION_AMPLITUDE
                / 2.0;
            let translate_x = translate_sign
                * wave.geometry.translate_bias
                * SCROLL_H_AMPLITUDE
                * view.viewport_width
                / 2.0;

            sink.apply(
                wave.surface,
                &SurfaceStyle {
                    translate: Vec2::new(translate_x, 0.0),
                    rotate_deg,
                    ..SurfaceStyle::default()
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::testkit::{FixedProbe, RecordingSink, state};
    use kurbo::PathEl;

    fn surfaces(n: usize) -> Vec<SurfaceId> {
        (1..=n as u64).map(SurfaceId).collect()
    }

    #[test]
    fn geometry_is_deterministic_per_seed() {
        let a = WavyBackground::new(SurfaceId(0), surfaces(WAVE_COUNT), 9);
        let b = WavyBackground::new(SurfaceId(0), surfaces(WAVE_COUNT), 9);
        let c = WavyBackground::new(SurfaceId(0), surfaces(WAVE_COUNT), 10);
        for i in 0..WAVE_COUNT {
            assert_eq!(a.geometry(i), b.geometry(i));
        }
        assert_ne!(a.geometry(0), c.geometry(0));
        assert_ne!(a.geometry(0), a.geometry(1));
    }

    #[test]
    fn geometry_survives_refresh() {
        let mut bg = WavyBackground::new(SurfaceId(0), surfaces(2), 1);
        let before = *bg.geometry(0).unwrap();

        let probe = FixedProbe::new(state(300.0, 1440.0, 800.0, 3000.0));
        let mut sink = RecordingSink::default();
        bg.refresh(&probe, &mut sink);
        bg.refresh(&probe, &mut sink);

        assert_eq!(*bg.geometry(0).unwrap(), before);
    }

    #[test]
    fn bias_magnitude_stays_in_range() {
        let bg = WavyBackground::new(SurfaceId(0), surfaces(WAVE_COUNT), 77);
        for i in 0..WAVE_COUNT {
            let g = bg.geometry(i).unwrap();
            assert!((0.5..1.0).contains(&g.rotation_bias.abs()));
            assert!((0.5..1.0).contains(&g.translate_bias.abs()));
        }
    }

    #[test]
    fn container_gets_vertical_parallax_only() {
        let mut bg = WavyBackground::new(SurfaceId(0), surfaces(1), 3);
        let probe = FixedProbe::new(state(1100.0, 1440.0, 800.0, 3000.0));
        let mut sink = RecordingSink::default();
        bg.refresh(&probe, &mut sink);

        // ratio = 1100 / (3000 - 800) = 0.5
        let style = sink.styles[&SurfaceId(0)];
        assert_eq!(style.translate.x, 0.0);
        assert_eq!(style.translate.y, 0.5 * SCROLL_V_AMPLITUDE * 800.0);
        assert_eq!(style.rotate_deg, 0.0);
    }

    #[test]
    fn wave_transforms_follow_jitter_and_index_parity() {
        let mut bg = WavyBackground::new(SurfaceId(0), surfaces(4), 5);
        let probe = FixedProbe::new(state(0.0, 1000.0, 800.0, 3000.0));
        let mut sink = RecordingSink::default();
        bg.refresh(&probe, &mut sink);

        for index in 0..4 {
            let g = *bg.geometry(index).unwrap();
            let style = sink.styles[&surfaces(4)[index]];

            let rotation_sign = if index % 4 < 2 { 1.0 } else { -1.0 };
            let translate_sign = if index % 2 == 0 { -1.0 } else { 1.0 };
            // ratio = 0 at the top of the page: full rotation amplitude.
            let expected_rotate = rotation_sign * g.rotation_bias * ROTATION_AMPLITUDE / 2.0;
            let expected_translate = translate_sign * g.translate_bias * SCROLL_H_AMPLITUDE * 1000.0 / 2.0;

            assert!((style.rotate_deg - expected_rotate).abs() < 1e-12);
            assert!((style.translate.x - expected_translate).abs() < 1e-12);
            assert_eq!(style.translate.y, 0.0);
        }
    }

    #[test]
    fn fills_alternate_by_parity() {
        let bg = WavyBackground::new(SurfaceId(0), surfaces(4), 2);
        assert_eq!(bg.fills(), vec![COLOR_1, COLOR_2, COLOR_1, COLOR_2]);
        assert_eq!(wave_fill(6), COLOR_1);
        assert_eq!(wave_fill(7), COLOR_2);
    }

    #[test]
    fn outline_is_closed_and_anchored_to_baseline() {
        let bg = WavyBackground::new(SurfaceId(0), surfaces(3), 2);
        let outlines = bg.outlines();
        assert_eq!(outlines.len(), 3);

        for (index, outline) in outlines.iter().enumerate() {
            let els: Vec<PathEl> = outline.elements().to_vec();
            assert_eq!(els.len(), 6);
            let y0 = WAVE_Y0 + index as f64 * WAVE_SPACING;
            match els[0] {
                PathEl::MoveTo(p) => {
                    assert_eq!(p.x, -WAVE_OVERSHOOT);
                    assert_eq!(p.y, y0);
                }
                _ => panic!("outline must start with MoveTo"),
            }
            assert!(matches!(els[5], PathEl::ClosePath));
        }
    }
}
