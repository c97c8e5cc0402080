/// The parent edge a panel is pinned to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnchorLocation {
    #[default]
    Top,
    Bottom,
}

impl AnchorLocation {
    /// The slide direction that shrinks a panel pinned to this edge.
    ///
    /// The free edge of a top-anchored panel is its bottom edge, so pulling it up closes the
    /// panel; a bottom-anchored panel closes when pulled down.
    pub fn closing_direction(self) -> SlideDirection {
        match self {
            Self::Top => SlideDirection::Up,
            Self::Bottom => SlideDirection::Down,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideDirection {
    #[default]
    None,
    Up,
    Down,
}

impl SlideDirection {
    /// Direction of a vertical finger movement (`diff = current.y - start.y`).
    pub fn from_diff(diff: f32) -> Self {
        if diff == 0.0 {
            Self::None
        } else if diff > 0.0 {
            Self::Down
        } else {
            Self::Up
        }
    }
}

/// Which height bound the panel last settled on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewState {
    #[default]
    Shrunk,
    Expanded,
}

/// Interaction phase of a panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanelPhase {
    #[default]
    Shrunk,
    Expanded,
    Dragging,
    Settling,
}

impl PanelPhase {
    pub fn at_rest(view_state: ViewState) -> Self {
        match view_state {
            ViewState::Shrunk => Self::Shrunk,
            ViewState::Expanded => Self::Expanded,
        }
    }

    pub fn is_at_rest(self) -> bool {
        matches!(self, Self::Shrunk | Self::Expanded)
    }
}

/// How a panel was built. Fixed for the lifetime of the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstructionMode {
    /// Built from code; the panel installs its own constraints when attached.
    Programmatic,
    /// Built from a layout declaration; the owner binds externally created constraints.
    Declarative,
}

/// The open/close transition a settle animation performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    Expand,
    Shrink,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

/// Straight RGBA color, each channel in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub fn white(white: f32, alpha: f32) -> Self {
        Self {
            r: white,
            g: white,
            b: white,
            a: alpha,
        }
    }
}

/// Default styling applied to panels built from code.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelAppearance {
    pub corner_radius: f32,
    pub clips_to_bounds: bool,
    pub background: Rgba,
}

impl Default for PanelAppearance {
    fn default() -> Self {
        Self {
            corner_radius: 10.0,
            clips_to_bounds: true,
            background: Rgba::white(0.8, 0.5),
        }
    }
}

/// One sample of an in-flight settle animation, as returned by
/// [`crate::AnchorOverlayPanel::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettleFrame {
    /// Height to present this frame. May overshoot the target while the spring rings.
    pub height: f32,
    /// Vertical displacement of the panel center (positive is down). `0.0` once done.
    pub center_offset: f32,
    pub done: bool,
}
