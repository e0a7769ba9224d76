use kurbo::Vec2;

use crate::{
    channel::{EasingChannel, Zone},
    effects::Effect,
    error::OnduleResult,
    view::{StyleSink, SurfaceId, SurfaceStyle, ViewportProbe},
};

/// Channel table for a section reveal. Translation is in percent of the
/// viewport width, rotation in degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionChannels {
    pub translate: EasingChannel,
    pub rotation: EasingChannel,
    pub opacity: EasingChannel,
}

impl Default for SectionChannels {
    fn default() -> Self {
        Self {
            translate: EasingChannel {
                before: Zone::new(100.0, 0.2, 0.4),
                at_intersect: 0.0,
                after: Zone::new(0.0, 0.6, 1.0),
            },
            rotation: EasingChannel {
                before: Zone::new(-10.0, 0.2, 0.4),
                at_intersect: 0.0,
                after: Zone::new(1.2, 0.6, 0.8),
            },
            opacity: EasingChannel {
                before: Zone::new(0.3, 0.2, 0.4),
                at_intersect: 1.0,
                after: Zone::new(0.3, 0.7, 0.9),
            },
        }
    }
}

impl SectionChannels {
    pub fn validate(&self) -> OnduleResult<()> {
        self.translate.validate()?;
        self.rotation.validate()?;
        self.opacity.validate()
    }
}

/// Slides a section's content sideways into frame as its wrapper crosses
/// the viewport, with a slight tilt and fade. The wrapper keeps the
/// layout height while the content is translated, so its height is synced
/// to the content's measured height on every write.
#[derive(Clone, Debug)]
pub struct SectionReveal {
    wrapper: SurfaceId,
    content: SurfaceId,
    left_to_right: bool,
    channels: SectionChannels,
}

impl SectionReveal {
    pub fn new(wrapper: SurfaceId, content: SurfaceId, left_to_right: bool) -> Self {
        Self::with_channels(wrapper, content, left_to_right, SectionChannels::default())
    }

    pub fn with_channels(
        wrapper: SurfaceId,
        content: SurfaceId,
        left_to_right: bool,
        channels: SectionChannels,
    ) -> Self {
        Self {
            wrapper,
            content,
            left_to_right,
            channels,
        }
    }

    pub fn channels(&self) -> &SectionChannels {
        &self.channels
    }
}

impl Effect for SectionReveal {
    fn refresh(&mut self, probe: &dyn ViewportProbe, sink: &mut dyn StyleSink) {
        let Some(bounds) = probe.bounds_of(self.wrapper) else {
            return;
        };
        let viewport_height = probe.scroll_state().viewport_height;
        let top = bounds.top_progress(viewport_height);
        let bottom = bounds.bottom_progress(viewport_height);

        let translate_sign = if self.left_to_right { -1.0 } else { 1.0 };
        let rotation_sign = if self.left_to_right { 1.0 } else { -1.0 };

        let translate = self.channels.translate.evaluate(top, bottom) * translate_sign;
        let rotate_deg = self.channels.rotation.evaluate(top, bottom) * rotation_sign;
        let opacity = self.channels.opacity.evaluate(top, bottom);

        sink.apply(
            self.content,
            &SurfaceStyle {
                translate: Vec2::new(translate, 0.0),
                rotate_deg,
                opacity,
                ..SurfaceStyle::default()
            },
        );

        if let Some(content_bounds) = probe.bounds_of(self.content) {
            sink.set_height(self.wrapper, content_bounds.height());
        }
    }
}
