use alloc::sync::Arc;

use crate::AnchorLocation;
use crate::panel::AnchorOverlayPanel;

/// Default height of a shrunk panel.
pub const DEFAULT_MIN_HEIGHT: f32 = 25.0;
/// Default height of an expanded panel.
pub const DEFAULT_MAX_HEIGHT: f32 = 150.0;
/// Default distance between the anchored parent edge and the panel.
pub const DEFAULT_Y_MARGIN: f32 = 35.0;

/// A lifecycle notification handler. Receives the panel that is transitioning.
pub type PanelCallback = Arc<dyn Fn(&AnchorOverlayPanel) + Send + Sync>;

/// Tuning for one settle animation.
///
/// Read once when an animation starts; changing it mid-animation affects the next one.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationOptions {
    pub duration_ms: u64,
    pub delay_ms: u64,
    /// Spring damping ratio. Values at or above `1.0` settle without oscillation.
    pub spring_damping_ratio: f32,
    /// Initial spring velocity, in total animation distances per second.
    pub initial_spring_velocity: f32,
    /// Relative bounce of the panel center, `0.05..=1.0` of 100 units.
    pub clearance: f32,
}

impl AnimationOptions {
    /// Animation used when the finger lifts after a drag.
    pub fn release() -> Self {
        Self {
            duration_ms: 400,
            delay_ms: 0,
            spring_damping_ratio: 8.0,
            initial_spring_velocity: 30.0,
            clearance: 2.1,
        }
    }

    /// Animation used by [`AnchorOverlayPanel::request_close`].
    pub fn close() -> Self {
        Self {
            duration_ms: 500,
            clearance: 0.7,
            ..Self::release()
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_spring(mut self, damping_ratio: f32, initial_velocity: f32) -> Self {
        self.spring_damping_ratio = damping_ratio;
        self.initial_spring_velocity = initial_velocity;
        self
    }

    pub fn with_clearance(mut self, clearance: f32) -> Self {
        self.clearance = clearance;
        self
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self::release()
    }
}

/// Optional open/close observers.
///
/// Each handler is independent; unset handlers are skipped.
#[derive(Clone, Default)]
pub struct PanelCallbacks {
    pub on_will_expand: Option<PanelCallback>,
    pub on_did_expand: Option<PanelCallback>,
    pub on_will_shrink: Option<PanelCallback>,
    pub on_did_shrink: Option<PanelCallback>,
}

impl PanelCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_on_will_expand(
        mut self,
        f: Option<impl Fn(&AnchorOverlayPanel) + Send + Sync + 'static>,
    ) -> Self {
        self.on_will_expand = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_did_expand(
        mut self,
        f: Option<impl Fn(&AnchorOverlayPanel) + Send + Sync + 'static>,
    ) -> Self {
        self.on_did_expand = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_will_shrink(
        mut self,
        f: Option<impl Fn(&AnchorOverlayPanel) + Send + Sync + 'static>,
    ) -> Self {
        self.on_will_shrink = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_did_shrink(
        mut self,
        f: Option<impl Fn(&AnchorOverlayPanel) + Send + Sync + 'static>,
    ) -> Self {
        self.on_did_shrink = f.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for PanelCallbacks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PanelCallbacks")
            .field("on_will_expand", &self.on_will_expand.is_some())
            .field("on_did_expand", &self.on_did_expand.is_some())
            .field("on_will_shrink", &self.on_will_shrink.is_some())
            .field("on_did_shrink", &self.on_did_shrink.is_some())
            .finish()
    }
}

/// Configuration for [`AnchorOverlayPanel::new`].
#[derive(Clone, Debug)]
pub struct PanelOptions {
    pub anchor: AnchorLocation,
    /// Distance from the anchored edge. Stored as an absolute value.
    pub y_margin: f32,
    pub min_height: f32,
    pub max_height: f32,
    pub release_animation: AnimationOptions,
    pub close_animation: AnimationOptions,
    pub callbacks: PanelCallbacks,
}

impl PanelOptions {
    pub fn new(anchor: AnchorLocation) -> Self {
        Self {
            anchor,
            ..Self::default()
        }
    }

    pub fn with_anchor(mut self, anchor: AnchorLocation) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_y_margin(mut self, y_margin: f32) -> Self {
        self.y_margin = y_margin;
        self
    }

    pub fn with_height_bounds(mut self, min_height: f32, max_height: f32) -> Self {
        self.min_height = min_height;
        self.max_height = max_height;
        self
    }

    pub fn with_release_animation(mut self, animation: AnimationOptions) -> Self {
        self.release_animation = animation;
        self
    }

    pub fn with_close_animation(mut self, animation: AnimationOptions) -> Self {
        self.close_animation = animation;
        self
    }

    pub fn with_callbacks(mut self, callbacks: PanelCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            anchor: AnchorLocation::Top,
            y_margin: DEFAULT_Y_MARGIN,
            min_height: DEFAULT_MIN_HEIGHT,
            max_height: DEFAULT_MAX_HEIGHT,
            release_animation: AnimationOptions::release(),
            close_animation: AnimationOptions::close(),
            callbacks: PanelCallbacks::default(),
        }
    }
}
