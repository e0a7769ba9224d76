use kurbo::Vec2;

use crate::math::inverse_lerp;

/// Snapshot of the host's scroll and viewport readings. Rebuilt by the
/// host on every scroll/resize notification; never stored.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Total scrollable content height, including the part below the fold.
    pub content_height: f64,
}

impl ScrollState {
    pub fn new(
        scroll_y: f64,
        viewport_width: f64,
        viewport_height: f64,
        content_height: f64,
    ) -> Self {
        Self {
            scroll_y,
            viewport_width,
            viewport_height,
            content_height,
        }
    }

    /// Vertical page progress in [0,1]. Defined as 0 when the content fits
    /// inside the viewport (nothing to scroll).
    pub fn page_ratio(&self) -> f64 {
        let scrollable = self.content_height - self.viewport_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        self.scroll_y / scrollable
    }
}

/// An element's top/bottom edges in viewport coordinates (y grows down,
/// 0 at the top edge of the viewport).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementBounds {
    pub top: f64,
    pub bottom: f64,
}

impl ElementBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height() / 2.0
    }

    /// 0 when the top edge sits at the bottom of the viewport, 1 when it
    /// reaches the top. Unclamped: elements past either edge land outside
    /// [0,1].
    pub fn top_progress(&self, viewport_height: f64) -> f64 {
        inverse_lerp(viewport_height, 0.0, self.top)
    }

    /// Same progress measure for the bottom edge.
    pub fn bottom_progress(&self, viewport_height: f64) -> f64 {
        inverse_lerp(viewport_height, 0.0, self.bottom)
    }
}

/// Opaque handle naming one drawable surface owned by exactly one effect.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SurfaceId(pub u64);

/// The combined transform/opacity value an effect writes in one go.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceStyle {
    /// Translation; units are the host's (px for waves, percent of
    /// viewport width for section reveals).
    pub translate: Vec2,
    pub rotate_deg: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            rotate_deg: 0.0,
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

/// Read side of the host boundary: current scroll state and element
/// bounds. `bounds_of` returns `None` for surfaces not currently attached;
/// effects skip their write in that case.
pub trait ViewportProbe {
    fn scroll_state(&self) -> ScrollState;
    fn bounds_of(&self, surface: SurfaceId) -> Option<ElementBounds>;
}

/// Write side of the host boundary. Implementations push the style onto
/// the real drawable surface (or drop it if the surface is gone).
pub trait StyleSink {
    fn apply(&mut self, surface: SurfaceId, style: &SurfaceStyle);
    /// Height sync for wrappers whose content is visually translated.
    fn set_height(&mut self, surface: SurfaceId, height: f64);
}
