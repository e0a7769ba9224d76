use crate::{
    channel::Ramp,
    effects::Effect,
    error::OnduleResult,
    view::{StyleSink, SurfaceId, SurfaceStyle, ViewportProbe},
};

/// Ramp table for the hero banner. Progress is the container's vertical
/// center converted to screen progress, so both windows sit near 1.0
/// (center approaching the top edge).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BannerRamps {
    pub scale: Ramp,
    pub opacity: Ramp,
}

impl Default for BannerRamps {
    fn default() -> Self {
        Self {
            scale: Ramp {
                from: 1.0,
                to: 0.65,
                start_threshold: 0.85,
                stop_threshold: 1.15,
            },
            opacity: Ramp {
                from: 1.0,
                to: 0.0,
                start_threshold: 0.75,
                stop_threshold: 0.95,
            },
        }
    }
}

impl BannerRamps {
    pub fn validate(&self) -> OnduleResult<()> {
        self.scale.validate()?;
        self.opacity.validate()
    }
}

/// Shrinks and fades the hero content as it scrolls off the top. The
/// container only measures (it keeps reserving layout space); the style
/// is written to a separate content surface.
#[derive(Clone, Debug)]
pub struct HeroBanner {
    container: SurfaceId,
    content: SurfaceId,
    ramps: BannerRamps,
}

impl HeroBanner {
    pub fn new(container: SurfaceId, content: SurfaceId) -> Self {
        Self::with_ramps(container, content, BannerRamps::default())
    }

    pub fn with_ramps(container: SurfaceId, content: SurfaceId, ramps: BannerRamps) -> Self {
        Self {
            container,
            content,
            ramps,
        }
    }
}

impl Effect for HeroBanner {
    fn refresh(&mut self, probe: &dyn ViewportProbe, sink: &mut dyn StyleSink) {
        let Some(bounds) = probe.bounds_of(self.container) else {
            return;
        };
        let viewport_height = probe.scroll_state().viewport_height;
        let progress = crate::math::inverse_lerp(viewport_height, 0.0, bounds.center_y());

        sink.apply(
            self.content,
            &SurfaceStyle {
                scale: self.ramps.scale.evaluate(progress),
                opacity: self.ramps.opacity.evaluate(progress),
                ..SurfaceStyle::default()
            },
        );
    }
}
