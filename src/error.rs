use thiserror::Error;

/// Precondition failures of the panel's construction and binding entry points.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum PanelError {
    /// The height constraint handle does not refer to a live constraint of the parent.
    #[error("panel height constraint is not set")]
    ViewHeightConstraintNotSet,

    /// Neither a top nor a bottom margin constraint was supplied.
    #[error("parent top or bottom margin constraint is not set")]
    SuperViewTopOrBottomMarginNotSet,

    /// External constraints can only be bound to a declaratively built panel.
    #[error("panel was not built from a layout declaration")]
    InitWithStoryBoard,

    /// Self-installed constraints are only available to a panel built from code.
    #[error("panel was not built from code")]
    InitWithFrame,

    #[error("invalid height bounds: min {min} must be less than max {max}")]
    InvalidHeightBounds { min: f32, max: f32 },
}
