//! Scroll and pointer binding: named region progress, the camera rig, and
//! the pure progress math the DOM layer feeds from live section rects.

use crate::constants::*;
use fnv::FnvHashMap;
use glam::Vec2;

pub const HERO_REGION: &str = "hero";
pub const PORTFOLIO_REGION: &str = "portfolio";
pub const TUBE_REGION: &str = "tube";
pub const BASALT_REGION: &str = "basalt";
pub const PUMICE_REGION: &str = "pumice";

/// Progress through a region that enters at the viewport bottom and exits at
/// the viewport top, as a plain \[0, 1\] scalar.
///
/// `top` is the region's top edge relative to the viewport (positive below
/// the viewport top), `height` the region height, `viewport_h` the viewport
/// height, all in CSS pixels.
#[inline]
pub fn region_progress(top: f32, height: f32, viewport_h: f32) -> f32 {
    let total = height + viewport_h;
    if total <= 0.0 {
        return 0.0;
    }
    ((viewport_h - top) / total).clamp(0.0, 1.0)
}

/// Progress for a band pinned from "top at top" to "bottom at top", which
/// is how the hero section scrolls. Reaches 1 exactly when the band has
/// scrolled past.
#[inline]
pub fn hero_progress(top: f32, height: f32) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    (-top / height).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionEvent {
    /// The hero band was scrolled past its end going down.
    HeroLeft,
}

/// Latest progress per named scroll region. Values are recomputed every
/// frame from live layout; nothing here retains history beyond the previous
/// hero sample used for leave edge detection.
#[derive(Default)]
pub struct ScrollBindings {
    regions: FnvHashMap<String, f32>,
    hero_prev: f32,
}

impl ScrollBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a region's progress; returns an event on the hero-leave edge.
    pub fn set_progress(&mut self, region: &str, progress: f32) -> Option<RegionEvent> {
        let p = progress.clamp(0.0, 1.0);
        let mut event = None;
        if region == HERO_REGION {
            if self.hero_prev < 1.0 && p >= 1.0 {
                event = Some(RegionEvent::HeroLeft);
            }
            self.hero_prev = p;
        }
        match self.regions.get_mut(region) {
            Some(slot) => *slot = p,
            None => {
                self.regions.insert(region.to_owned(), p);
            }
        }
        event
    }

    #[inline]
    pub fn progress(&self, region: &str) -> f32 {
        self.regions.get(region).copied().unwrap_or(0.0)
    }

    /// Tunnel-traversal scalar for the lava-tube section.
    #[inline]
    pub fn tunnel(&self) -> f32 {
        self.progress(TUBE_REGION)
    }

    /// Basalt column rise scalar.
    #[inline]
    pub fn basalt_rise(&self) -> f32 {
        self.progress(BASALT_REGION)
    }

    /// Pumice lateral-offset scalar.
    #[inline]
    pub fn pumice_offset(&self) -> f32 {
        self.progress(PUMICE_REGION)
    }

    /// Camera rotation offset contributed by the portfolio section.
    #[inline]
    pub fn rotation_offset(&self) -> Vec2 {
        let p = self.progress(PORTFOLIO_REGION);
        Vec2::new(PORTFOLIO_ROT_X_GAIN * p, PORTFOLIO_ROT_Y_GAIN * p)
    }
}

/// Camera orientation eased toward the pointer/scroll target each frame,
/// with a slow constant drift underneath.
#[derive(Clone, Copy, Debug, Default)]
pub struct CameraRig {
    rotation: Vec2,
}

impl CameraRig {
    /// `target` is the combined pointer + scroll rotation target (pitch, yaw).
    pub fn update(&mut self, dt: f32, target: Vec2) {
        self.rotation += Vec2::new(AUTO_SPIN_PITCH, AUTO_SPIN_YAW) * dt;
        let alpha = 1.0 - (-dt * CAMERA_DAMPING_PER_SEC).exp();
        self.rotation += (target - self.rotation) * alpha;
    }

    /// Current (pitch, yaw) in radians.
    #[inline]
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }
}

/// Map a pointer position in \[-1, 1\] screen space to its rotation target.
#[inline]
pub fn pointer_rotation_target(nx: f32, ny: f32) -> Vec2 {
    Vec2::new(ny * POINTER_ROT_GAIN, nx * POINTER_ROT_GAIN)
}
