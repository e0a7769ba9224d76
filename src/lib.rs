#![forbid(unsafe_code)]

pub mod carousel;
pub mod channel;
pub mod effects;
pub mod error;
pub mod math;
pub mod nav;
pub mod stage;
pub mod view;

pub use carousel::{Carousel, CarouselOptions};
pub use channel::{EasingChannel, Ramp, Zone};
pub use effects::{Effect, HeroBanner, PartnerGrid, PopInPortrait, SectionReveal, WavyBackground};
pub use error::{OnduleError, OnduleResult};
pub use nav::{Navigation, Section};
pub use stage::{Notification, Stage};
pub use view::{ElementBounds, ScrollState, StyleSink, SurfaceId, SurfaceStyle, ViewportProbe};
