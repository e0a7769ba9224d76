use crate::view::{StyleSink, ViewportProbe};

pub mod banner;
pub mod partners;
pub mod portrait;
pub mod section;
pub mod waves;

pub use banner::HeroBanner;
pub use partners::PartnerGrid;
pub use portrait::PopInPortrait;
pub use section::SectionReveal;
pub use waves::WavyBackground;

/// A mounted visual effect. `refresh` re-samples the probe, evaluates its
/// channels and writes the resulting style to the surfaces it owns.
///
/// Refresh is idempotent: the same probe readings produce the same writes.
/// When the probe has no bounds for a required surface, the write is
/// skipped for that notification.
pub trait Effect {
    fn refresh(&mut self, probe: &dyn ViewportProbe, sink: &mut dyn StyleSink);
}
