use crate::{
    channel::Ramp,
    effects::Effect,
    view::{StyleSink, SurfaceId, SurfaceStyle, ViewportProbe},
};

/// Default pop-in ramp: scale 0.3 -> 1.0 as the portrait's top edge
/// climbs the first fifth of the viewport.
pub const DEFAULT_RAMP: Ramp = Ramp {
    from: 0.3,
    to: 1.0,
    start_threshold: 0.0,
    stop_threshold: 0.2,
};

/// Threshold shift per portrait index, so stacked portraits pop in one
/// after the other.
pub const STAGGER_DELTA: f64 = 0.1;

/// A portrait image that pops from small to full size as it enters the
/// viewport. `offset` is the portrait's position in its row.
#[derive(Clone, Debug)]
pub struct PopInPortrait {
    surface: SurfaceId,
    offset: u32,
    ramp: Ramp,
}

impl PopInPortrait {
    pub fn new(surface: SurfaceId, offset: u32) -> Self {
        Self {
            surface,
            offset,
            ramp: DEFAULT_RAMP,
        }
    }

    pub fn with_ramp(surface: SurfaceId, offset: u32, ramp: Ramp) -> Self {
        Self {
            surface,
            offset,
            ramp,
        }
    }
}

impl Effect for PopInPortrait {
    fn refresh(&mut self, probe: &dyn ViewportProbe, sink: &mut dyn StyleSink) {
        let Some(bounds) = probe.bounds_of(self.surface) else {
            return;
        };
        let viewport_height = probe.scroll_state().viewport_height;
        let progress = bounds.top_progress(viewport_height);

        let staggered = self.ramp.offset(f64::from(self.offset) * STAGGER_DELTA);
        sink.apply(
            self.surface,
            &SurfaceStyle {
                scale: staggered.evaluate(progress),
                ..SurfaceStyle::default()
            },
        );
    }
}
