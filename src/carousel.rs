use std::time::{Duration, Instant};

use crate::error::{OnduleError, OnduleResult};

/// Cooldown after a slide change during which no new transition starts.
pub const TRANSITION_LOCK: Duration = Duration::from_millis(300);

pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

/// Minimum horizontal drag, in the host's distance units, for a swipe to
/// count.
pub const DEFAULT_MIN_SWIPE_DISTANCE: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CarouselOptions {
    pub autoplay: bool,
    pub autoplay_interval: Duration,
    pub min_swipe_distance: f64,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            autoplay: false,
            autoplay_interval: DEFAULT_AUTOPLAY_INTERVAL,
            min_swipe_distance: DEFAULT_MIN_SWIPE_DISTANCE,
        }
    }
}

impl CarouselOptions {
    pub fn validate(&self) -> OnduleResult<()> {
        if self.autoplay_interval.is_zero() {
            return Err(OnduleError::validation("autoplay interval must be > 0"));
        }
        if !self.min_swipe_distance.is_finite() || self.min_swipe_distance < 0.0 {
            return Err(OnduleError::validation(
                "min swipe distance must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Slide-index state machine for the image carousel. Not scroll-driven:
/// transitions come from navigation buttons, indicator jumps, swipe
/// gestures and the optional auto-advance deadline.
///
/// Time is always an explicit argument, so hosts poll with their frame
/// clock and tests run on a scripted one.
#[derive(Clone, Debug)]
pub struct Carousel {
    slides: usize,
    index: usize,
    options: CarouselOptions,
    locked_until: Option<Instant>,
    autoplay_deadline: Option<Instant>,
    touch_origin: Option<f64>,
    touch_last: Option<f64>,
}

impl Carousel {
    pub fn new(slides: usize, options: CarouselOptions, now: Instant) -> OnduleResult<Self> {
        if slides == 0 {
            return Err(OnduleError::validation("carousel needs at least one slide"));
        }
        options.validate()?;
        let autoplay_deadline = options.autoplay.then(|| now + options.autoplay_interval);
        Ok(Self {
            slides,
            index: 0,
            options,
            locked_until: None,
            autoplay_deadline,
            touch_origin: None,
            touch_last: None,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.slides
    }

    pub fn is_empty(&self) -> bool {
        self.slides == 0
    }

    /// Horizontal offset of the slide strip, in percent of one slide.
    /// Negative: the strip slides left as the index grows.
    pub fn offset_percent(&self) -> f64 {
        -(self.index as f64) * 100.0
    }

    pub fn is_locked(&self, now: Instant) -> bool {
        self.locked_until.is_some_and(|until| now < until)
    }

    fn commit(&mut self, index: usize, now: Instant) -> bool {
        if index == self.index || self.is_locked(now) {
            return false;
        }
        tracing::debug!(from = self.index, to = index, "slide transition");
        self.index = index;
        self.locked_until = Some(now + TRANSITION_LOCK);
        if self.options.autoplay {
            self.autoplay_deadline = Some(now + self.options.autoplay_interval);
        }
        true
    }

    /// Advance one slide, wrapping past the last. Returns whether a
    /// transition happened.
    pub fn next(&mut self, now: Instant) -> bool {
        self.commit((self.index + 1) % self.slides, now)
    }

    /// Go back one slide, wrapping before the first.
    pub fn previous(&mut self, now: Instant) -> bool {
        self.commit((self.index + self.slides - 1) % self.slides, now)
    }

    /// Jump straight to `index`. Out-of-range and same-index jumps are
    /// no-ops.
    pub fn go_to(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.slides {
            return false;
        }
        self.commit(index, now)
    }

    /// Advance when the autoplay deadline has passed. The deadline re-arms
    /// either way, so a blocked tick does not fire again immediately.
    pub fn poll_autoplay(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.autoplay_deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }
        self.autoplay_deadline = Some(now + self.options.autoplay_interval);
        self.next(now)
    }

    /// Cancels the autoplay timer. Called on teardown.
    pub fn stop(&mut self) {
        self.autoplay_deadline = None;
    }

    pub fn touch_start(&mut self, x: f64) {
        self.touch_origin = Some(x);
        self.touch_last = None;
    }

    pub fn touch_move(&mut self, x: f64) {
        self.touch_last = Some(x);
    }

    /// Resolve the gesture: a drag beyond the swipe distance moves one
    /// slide (left drag -> next, right drag -> previous). A touch without
    /// movement does nothing.
    pub fn touch_end(&mut self, now: Instant) -> bool {
        let origin = self.touch_origin.take();
        let last = self.touch_last.take();
        let (Some(origin), Some(last)) = (origin, last) else {
            return false;
        };

        let distance = origin - last;
        if distance > self.options.min_swipe_distance {
            return self.next(now);
        }
        if distance < -self.options.min_swipe_distance {
            return self.previous(now);
        }
        false
    }
}
