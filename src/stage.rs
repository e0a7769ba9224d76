use crate::{
    effects::Effect,
    view::{StyleSink, ViewportProbe},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Notification {
    Scroll,
    Resize,
}

/// Owns the mounted effects and fans each notification out to them.
///
/// Every effect recomputes from the current probe readings on both scroll
/// and resize; handlers are independent, so dispatch order carries no
/// meaning. Unmounting drops the effects, after which nothing writes.
#[derive(Default)]
pub struct Stage {
    effects: Vec<Box<dyn Effect>>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounting performs the effect's initial refresh, mirroring the
    /// first paint before any scroll happens.
    pub fn mount(
        &mut self,
        mut effect: Box<dyn Effect>,
        probe: &dyn ViewportProbe,
        sink: &mut dyn StyleSink,
    ) {
        effect.refresh(probe, sink);
        self.effects.push(effect);
    }

    #[tracing::instrument(level = "debug", skip(self, probe, sink))]
    pub fn handle(
        &mut self,
        notification: Notification,
        probe: &dyn ViewportProbe,
        sink: &mut dyn StyleSink,
    ) {
        tracing::debug!(effects = self.effects.len(), "refreshing mounted effects");
        for effect in &mut self.effects {
            effect.refresh(probe, sink);
        }
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn unmount_all(&mut self) {
        self.effects.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::testkit::{FixedProbe, RecordingSink, state};
    use crate::view::{SurfaceId, SurfaceStyle};

    struct CountingEffect {
        surface: SurfaceId,
    }

    impl Effect for CountingEffect {
        fn refresh(&mut self, _probe: &dyn ViewportProbe, sink: &mut dyn StyleSink) {
            sink.apply(self.surface, &SurfaceStyle::default());
        }
    }

    #[test]
    fn mount_refreshes_immediately() {
        let mut stage = Stage::new();
        let probe = FixedProbe::new(state(0.0, 1280.0, 800.0, 2000.0));
        let mut sink = RecordingSink::default();

        stage.mount(
            Box::new(CountingEffect {
                surface: SurfaceId(1),
            }),
            &probe,
            &mut sink,
        );
        assert_eq!(stage.len(), 1);
        assert_eq!(sink.writes, 1);
    }

    #[test]
    fn both_notification_kinds_refresh_every_effect() {
        let mut stage = Stage::new();
        let probe = FixedProbe::new(state(0.0, 1280.0, 800.0, 2000.0));
        let mut sink = RecordingSink::default();

        for id in 1..=3 {
            stage.mount(
                Box::new(CountingEffect {
                    surface: SurfaceId(id),
                }),
                &probe,
                &mut sink,
            );
        }
        sink.writes = 0;

        stage.handle(Notification::Scroll, &probe, &mut sink);
        assert_eq!(sink.writes, 3);

        stage.handle(Notification::Resize, &probe, &mut sink);
        assert_eq!(sink.writes, 6);
    }

    #[test]
    fn unmounted_stage_writes_nothing() {
        let mut stage = Stage::new();
        let probe = FixedProbe::new(state(0.0, 1280.0, 800.0, 2000.0));
        let mut sink = RecordingSink::default();

        stage.mount(
            Box::new(CountingEffect {
                surface: SurfaceId(1),
            }),
            &probe,
            &mut sink,
        );
        stage.unmount_all();
        sink.writes = 0;

        stage.handle(Notification::Scroll, &probe, &mut sink);
        assert!(stage.is_empty());
        assert_eq!(sink.writes, 0);
    }
}
