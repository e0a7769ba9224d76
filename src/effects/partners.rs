use crate::{
    channel::Ramp,
    effects::Effect,
    view::{StyleSink, SurfaceId, SurfaceStyle, ViewportProbe},
};

/// Default partner-logo ramp: scale 0.5 -> 1.0 over the first 30% of the
/// viewport.
pub const DEFAULT_RAMP: Ramp = Ramp {
    from: 0.5,
    to: 1.0,
    start_threshold: 0.0,
    stop_threshold: 0.3,
};

/// Threshold shift per grid item.
pub const STAGGER_DELTA: f64 = 0.05;

/// A grid of partner logos scaling in one after the other. Opacity
/// mirrors the ramp progress itself rather than a separate channel, so a
/// logo is fully opaque exactly when it reaches full size.
#[derive(Clone, Debug)]
pub struct PartnerGrid {
    items: Vec<SurfaceId>,
    ramp: Ramp,
}

impl PartnerGrid {
    pub fn new(items: Vec<SurfaceId>) -> Self {
        Self {
            items,
            ramp: DEFAULT_RAMP,
        }
    }

    pub fn with_ramp(items: Vec<SurfaceId>, ramp: Ramp) -> Self {
        Self { items, ramp }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Effect for PartnerGrid {
    fn refresh(&mut self, probe: &dyn ViewportProbe, sink: &mut dyn StyleSink) {
        let viewport_height = probe.scroll_state().viewport_height;

        for (index, &item) in self.items.iter().enumerate() {
            let Some(bounds) = probe.bounds_of(item) else {
                continue;
            };
            let progress = bounds.top_progress(viewport_height);
            let staggered = self.ramp.offset(index as f64 * STAGGER_DELTA);
            let t = staggered.progress(progress);

            sink.apply(
                item,
                &SurfaceStyle {
                    scale: staggered.evaluate(progress),
                    opacity: t,
                    ..SurfaceStyle::default()
                },
            );
        }
    }
}
