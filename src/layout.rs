use alloc::vec::Vec;

use crate::{Rect, Size};

/// The panel edge or dimension a constraint pins.
///
/// Edge constraints relate the panel edge to the same edge of the parent
/// (`panel.edge = parent.edge + constant`); `Height` is a fixed size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutAttribute {
    Top,
    Bottom,
    Leading,
    Trailing,
    Height,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConstraint {
    pub attribute: LayoutAttribute,
    pub constant: f32,
}

impl LayoutConstraint {
    pub fn new(attribute: LayoutAttribute, constant: f32) -> Self {
        Self {
            attribute,
            constant,
        }
    }
}

/// A non-owning handle to a constraint stored by a [`LayoutHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintId(pub usize);

/// The constraint handles a panel positions itself with.
///
/// Exactly one of `top`/`bottom` is set once the panel is attached or bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelConstraints {
    pub leading: ConstraintId,
    pub trailing: ConstraintId,
    pub height: ConstraintId,
    pub top: Option<ConstraintId>,
    pub bottom: Option<ConstraintId>,
}

/// The parent container's constraint system.
///
/// The host owns every constraint; panels only hold [`ConstraintId`]s and must tolerate a
/// handle that no longer resolves.
pub trait LayoutHost {
    fn width(&self) -> f32;

    fn height(&self) -> f32;

    fn add_constraint(&mut self, constraint: LayoutConstraint) -> ConstraintId;

    fn constraint(&self, id: ConstraintId) -> Option<LayoutConstraint>;

    /// Updates a constraint's constant. Returns `false` if `id` is unknown.
    fn set_constant(&mut self, id: ConstraintId, constant: f32) -> bool;

    /// Runs a layout pass immediately instead of waiting for the next frame.
    fn layout_if_needed(&mut self);

    fn constant(&self, id: ConstraintId) -> Option<f32> {
        self.constraint(id).map(|c| c.constant)
    }
}

/// A minimal parent container: a sized rectangle with a constraint store.
#[derive(Clone, Debug, Default)]
pub struct ParentContainer {
    size: Size,
    constraints: Vec<Option<LayoutConstraint>>,
    layout_passes: u64,
}

impl ParentContainer {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            constraints: Vec::new(),
            layout_passes: 0,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Number of live constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.iter().filter(|c| c.is_some()).count()
    }

    /// Removes a constraint. Handles to it stop resolving; other handles stay valid.
    pub fn remove_constraint(&mut self, id: ConstraintId) -> Option<LayoutConstraint> {
        self.constraints.get_mut(id.0).and_then(Option::take)
    }

    pub fn layout_passes(&self) -> u64 {
        self.layout_passes
    }

    /// Resolves a panel's constraints into its frame in parent coordinates.
    ///
    /// Returns `None` if any required handle no longer resolves.
    pub fn resolve_frame(&self, constraints: &PanelConstraints) -> Option<Rect> {
        let leading = self.constant(constraints.leading)?;
        let trailing = self.constant(constraints.trailing)?;
        let height = self.constant(constraints.height)?;
        let y = match (constraints.top, constraints.bottom) {
            (Some(top), _) => self.constant(top)?,
            (None, Some(bottom)) => self.size.height + self.constant(bottom)? - height,
            (None, None) => return None,
        };
        Some(Rect {
            x: leading,
            y,
            width: self.size.width - leading + trailing,
            height,
        })
    }
}

impl LayoutHost for ParentContainer {
    fn width(&self) -> f32 {
        self.size.width
    }

    fn height(&self) -> f32 {
        self.size.height
    }

    fn add_constraint(&mut self, constraint: LayoutConstraint) -> ConstraintId {
        self.constraints.push(Some(constraint));
        ConstraintId(self.constraints.len() - 1)
    }

    fn constraint(&self, id: ConstraintId) -> Option<LayoutConstraint> {
        self.constraints.get(id.0).copied().flatten()
    }

    fn set_constant(&mut self, id: ConstraintId, constant: f32) -> bool {
        match self.constraints.get_mut(id.0) {
            Some(Some(c)) => {
                c.constant = constant;
                true
            }
            _ => false,
        }
    }

    fn layout_if_needed(&mut self) {
        self.layout_passes = self.layout_passes.saturating_add(1);
    }
}
