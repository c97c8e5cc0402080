//! A headless, edge-anchored overlay panel.
//!
//! The panel is pinned to the top or bottom edge of a parent container. The user drags its
//! free edge to grow or shrink it between a minimum ("shrunk") and a maximum ("expanded")
//! height; on release it snaps to one of the two and plays a spring settle animation that
//! briefly bounces the panel center.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a parent container implementing [`LayoutHost`] (or use [`ParentContainer`])
//! - touch begin/move/end events in panel coordinates
//! - a frame clock that calls [`AnchorOverlayPanel::tick`] while a settle is in flight
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod layout;
mod options;
mod panel;
mod spring;
mod types;


pub use error::PanelError;
pub use layout::{
    ConstraintId, LayoutAttribute, LayoutConstraint, LayoutHost, PanelConstraints,
    ParentContainer,
};
pub use options::{
    AnimationOptions, DEFAULT_MAX_HEIGHT, DEFAULT_MIN_HEIGHT, DEFAULT_Y_MARGIN, PanelCallback,
    PanelCallbacks, PanelOptions,
};
pub use panel::AnchorOverlayPanel;
pub use spring::{SpringCurve, SpringTween, bounce_distance};
pub use types::{
    AnchorLocation, ConstructionMode, PanelAppearance, PanelPhase, Point, Rect, Rgba,
    SettleFrame, Size, SlideDirection, Transition, ViewState,
};
