use crate::layout::{
    ConstraintId, LayoutAttribute, LayoutConstraint, LayoutHost, PanelConstraints,
};
use crate::options::{DEFAULT_MAX_HEIGHT, DEFAULT_MIN_HEIGHT, DEFAULT_Y_MARGIN};
use crate::spring::{SpringCurve, SpringTween, bounce_distance};
use crate::{
    AnchorLocation, AnimationOptions, ConstructionMode, PanelAppearance, PanelCallback,
    PanelCallbacks, PanelError, PanelOptions, PanelPhase, Point, SettleFrame, Size,
    SlideDirection, Transition, ViewState,
};

#[derive(Clone, Copy, Debug)]
struct SettleAnimation {
    tween: SpringTween,
    transition: Option<Transition>,
}

/// A headless overlay panel pinned to the top or bottom edge of its parent.
///
/// The panel is dragged vertically between `min_height` (shrunk) and `max_height`
/// (expanded) and, when released, snaps to one of the two and plays a spring settle
/// animation. It holds no UI objects:
/// - layout lives in a [`LayoutHost`] owned by the parent; the panel keeps handles only,
/// - touch input arrives through `drag_begin` / `drag_update` / `drag_end`,
/// - the adapter calls `tick(now_ms)` each frame while `is_animating()` and presents the
///   returned [`SettleFrame`].
#[derive(Clone, Debug)]
pub struct AnchorOverlayPanel {
    mode: ConstructionMode,
    size: Size,
    anchor: AnchorLocation,
    y_margin: f32,
    min_height: f32,
    max_height: f32,

    view_state: ViewState,
    slide_direction: SlideDirection,
    phase: PanelPhase,

    constraints: Option<PanelConstraints>,
    start_height: f32,
    start_point: Point,

    release_animation: AnimationOptions,
    close_animation: AnimationOptions,
    appearance: Option<PanelAppearance>,
    callbacks: PanelCallbacks,

    settle: Option<SettleAnimation>,
}

impl AnchorOverlayPanel {
    /// Creates a panel built from code.
    ///
    /// Its constraints are installed by [`Self::attach_to`]. Default styling is applied
    /// immediately.
    pub fn new(size: Size, options: PanelOptions) -> Self {
        odebug!(
            anchor = ?options.anchor,
            y_margin = options.y_margin,
            min_height = options.min_height,
            max_height = options.max_height,
            "AnchorOverlayPanel::new"
        );
        Self {
            mode: ConstructionMode::Programmatic,
            size,
            anchor: options.anchor,
            y_margin: options.y_margin.abs(),
            min_height: options.min_height,
            max_height: options.max_height,
            view_state: ViewState::Shrunk,
            slide_direction: SlideDirection::None,
            phase: PanelPhase::Shrunk,
            constraints: None,
            start_height: options.min_height,
            start_point: Point::ZERO,
            release_animation: options.release_animation,
            close_animation: options.close_animation,
            appearance: Some(PanelAppearance::default()),
            callbacks: options.callbacks,
            settle: None,
        }
    }

    /// Creates a panel instantiated from a layout declaration.
    ///
    /// The owner must hand over the declared constraints with
    /// [`Self::bind_external_constraints`] before the panel can be dragged.
    pub fn from_declaration() -> Self {
        odebug!("AnchorOverlayPanel::from_declaration");
        Self {
            mode: ConstructionMode::Declarative,
            size: Size::default(),
            anchor: AnchorLocation::Top,
            y_margin: DEFAULT_Y_MARGIN,
            min_height: DEFAULT_MIN_HEIGHT,
            max_height: DEFAULT_MAX_HEIGHT,
            view_state: ViewState::Shrunk,
            slide_direction: SlideDirection::None,
            phase: PanelPhase::Shrunk,
            constraints: None,
            start_height: DEFAULT_MIN_HEIGHT,
            start_point: Point::ZERO,
            release_animation: AnimationOptions::release(),
            close_animation: AnimationOptions::close(),
            appearance: None,
            callbacks: PanelCallbacks::default(),
            settle: None,
        }
    }

    pub fn mode(&self) -> ConstructionMode {
        self.mode
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn anchor(&self) -> AnchorLocation {
        self.anchor
    }

    pub fn y_margin(&self) -> f32 {
        self.y_margin
    }

    pub fn min_height(&self) -> f32 {
        self.min_height
    }

    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    /// Replaces both height bounds. The live height is left alone.
    pub fn set_height_bounds(&mut self, min_height: f32, max_height: f32) -> Result<(), PanelError> {
        check_bounds(min_height, max_height)?;
        self.min_height = min_height;
        self.max_height = max_height;
        Ok(())
    }

    pub fn set_min_height(&mut self, min_height: f32) -> Result<(), PanelError> {
        self.set_height_bounds(min_height, self.max_height)
    }

    pub fn set_max_height(&mut self, max_height: f32) -> Result<(), PanelError> {
        self.set_height_bounds(self.min_height, max_height)
    }

    pub fn view_state(&self) -> ViewState {
        self.view_state
    }

    pub fn slide_direction(&self) -> SlideDirection {
        self.slide_direction
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// The constraint handles, once attached (code) or bound (declaration).
    pub fn constraints(&self) -> Option<&PanelConstraints> {
        self.constraints.as_ref()
    }

    pub fn start_height(&self) -> f32 {
        self.start_height
    }

    pub fn start_point(&self) -> Point {
        self.start_point
    }

    /// Default styling; `None` for panels built from a declaration.
    pub fn appearance(&self) -> Option<&PanelAppearance> {
        self.appearance.as_ref()
    }

    pub fn set_appearance(&mut self, appearance: Option<PanelAppearance>) {
        self.appearance = appearance;
    }

    pub fn release_animation(&self) -> &AnimationOptions {
        &self.release_animation
    }

    pub fn set_release_animation(&mut self, animation: AnimationOptions) {
        self.release_animation = animation;
    }

    pub fn close_animation(&self) -> &AnimationOptions {
        &self.close_animation
    }

    pub fn set_close_animation(&mut self, animation: AnimationOptions) {
        self.close_animation = animation;
    }

    pub fn callbacks(&self) -> &PanelCallbacks {
        &self.callbacks
    }

    pub fn set_callbacks(&mut self, callbacks: PanelCallbacks) {
        self.callbacks = callbacks;
    }

    /// The current value of the height constraint, if one is installed and still live.
    pub fn live_height<H: LayoutHost + ?Sized>(&self, host: &H) -> Option<f32> {
        let id = self.height_id()?;
        host.constant(id)
    }

    pub fn is_animating(&self) -> bool {
        self.settle.is_some()
    }

    /// Drops the in-flight settle animation without its completion notification.
    ///
    /// The height constraint already holds the settled value, so only the presented
    /// animation is lost.
    pub fn cancel_animation(&mut self) {
        if self.settle.take().is_some() {
            odebug!("AnchorOverlayPanel: settle animation cancelled");
            self.slide_direction = SlideDirection::None;
            self.phase = PanelPhase::at_rest(self.view_state);
        }
    }

    /// Installs the panel's own constraints on its parent.
    ///
    /// Only the first call installs anything; later calls return `Ok(false)`.
    ///
    /// Installs a margin constraint to the anchored edge, leading/trailing constraints that
    /// center the panel horizontally, and a height constraint starting at `min_height`.
    pub fn attach_to<H: LayoutHost + ?Sized>(&mut self, host: &mut H) -> Result<bool, PanelError> {
        if self.mode != ConstructionMode::Programmatic {
            return Err(PanelError::InitWithFrame);
        }
        if self.constraints.is_some() {
            odebug!("AnchorOverlayPanel::attach_to: already attached");
            return Ok(false);
        }
        check_bounds(self.min_height, self.max_height)?;

        let (top, bottom) = match self.anchor {
            AnchorLocation::Top => {
                let id = host.add_constraint(LayoutConstraint::new(
                    LayoutAttribute::Top,
                    self.y_margin,
                ));
                (Some(id), None)
            }
            AnchorLocation::Bottom => {
                let id = host.add_constraint(LayoutConstraint::new(
                    LayoutAttribute::Bottom,
                    -self.y_margin,
                ));
                (None, Some(id))
            }
        };

        let h_space = (host.width() - self.size.width).abs();
        let leading =
            host.add_constraint(LayoutConstraint::new(LayoutAttribute::Leading, h_space / 2.0));
        let trailing = host.add_constraint(LayoutConstraint::new(
            LayoutAttribute::Trailing,
            -h_space / 2.0,
        ));
        let height =
            host.add_constraint(LayoutConstraint::new(LayoutAttribute::Height, self.min_height));

        self.constraints = Some(PanelConstraints {
            leading,
            trailing,
            height,
            top,
            bottom,
        });
        self.start_height = self.min_height;
        odebug!(
            anchor = ?self.anchor,
            h_space,
            "AnchorOverlayPanel::attach_to: constraints installed"
        );
        Ok(true)
    }

    /// Adopts constraints created by a layout declaration.
    ///
    /// `top` wins when both margins are given. The declared height becomes `max_height`
    /// and the live height is reset to `min_height`. Nothing is modified on error.
    pub fn bind_external_constraints<H: LayoutHost + ?Sized>(
        &mut self,
        host: &mut H,
        leading: ConstraintId,
        trailing: ConstraintId,
        height: ConstraintId,
        top: Option<ConstraintId>,
        bottom: Option<ConstraintId>,
    ) -> Result<(), PanelError> {
        if self.mode != ConstructionMode::Declarative {
            return Err(PanelError::InitWithStoryBoard);
        }

        let (anchor, top, bottom) = match (top, bottom) {
            (Some(top), _) => (AnchorLocation::Top, Some(top), None),
            (None, Some(bottom)) => (AnchorLocation::Bottom, None, Some(bottom)),
            (None, None) => return Err(PanelError::SuperViewTopOrBottomMarginNotSet),
        };

        let Some(declared_height) = host.constant(height) else {
            return Err(PanelError::ViewHeightConstraintNotSet);
        };
        check_bounds(self.min_height, declared_height)?;

        self.max_height = declared_height;
        host.set_constant(height, self.min_height);
        self.anchor = anchor;
        self.constraints = Some(PanelConstraints {
            leading,
            trailing,
            height,
            top,
            bottom,
        });
        self.start_height = self.min_height;
        self.view_state = ViewState::Shrunk;
        self.phase = PanelPhase::Shrunk;
        odebug!(
            anchor = ?anchor,
            max_height = declared_height,
            "AnchorOverlayPanel::bind_external_constraints"
        );
        Ok(())
    }

    /// Finger down inside the panel. Only the first touch is used.
    ///
    /// A settle animation still in flight is cancelled.
    pub fn drag_begin<H: LayoutHost + ?Sized>(&mut self, host: &H, touches: &[Point]) {
        let Some(&touch) = touches.first() else {
            owarn!("AnchorOverlayPanel::drag_begin: no touches");
            return;
        };
        let Some(height) = self.live_height(host) else {
            owarn!("AnchorOverlayPanel::drag_begin: height constraint not set");
            return;
        };

        self.cancel_animation();
        self.start_point = touch;
        self.start_height = height;
        self.slide_direction = SlideDirection::None;
        self.phase = PanelPhase::Dragging;
        otrace!(
            x = touch.x,
            y = touch.y,
            start_height = height,
            "AnchorOverlayPanel::drag_begin"
        );
    }

    /// Finger moved. The height tracks the finger exactly, without clamping to the
    /// bounds, and a layout pass runs immediately.
    pub fn drag_update<H: LayoutHost + ?Sized>(&mut self, host: &mut H, touches: &[Point]) {
        let Some(&touch) = touches.first() else {
            owarn!("AnchorOverlayPanel::drag_update: no touches");
            return;
        };
        if self.phase != PanelPhase::Dragging {
            owarn!(phase = ?self.phase, "AnchorOverlayPanel::drag_update: not dragging");
            return;
        }
        let Some(id) = self.height_id() else {
            return;
        };

        let diff = touch.y - self.start_point.y;
        let height = match self.anchor {
            AnchorLocation::Top => self.start_height + diff,
            AnchorLocation::Bottom => self.start_height - diff,
        };
        if !host.set_constant(id, height) {
            owarn!("AnchorOverlayPanel::drag_update: height constraint is gone");
            return;
        }
        host.layout_if_needed();

        self.slide_direction = SlideDirection::from_diff(diff);
        otrace!(diff, height, direction = ?self.slide_direction, "AnchorOverlayPanel::drag_update");
    }

    /// Finger lifted. Snaps to a height bound and starts the release animation.
    pub fn drag_end<H: LayoutHost + ?Sized>(&mut self, host: &mut H, now_ms: u64) {
        if self.phase != PanelPhase::Dragging {
            owarn!(phase = ?self.phase, "AnchorOverlayPanel::drag_end: not dragging");
            return;
        }
        let animation = self.release_animation;
        self.settle(host, now_ms, animation);
    }

    /// Shrinks an expanded panel, e.g. when the owner wants its screen space back.
    ///
    /// Honoured only when the live height equals `max_height` and the user is not dragging.
    /// A settle still in flight is completed first, so its `did_*` fires before the close
    /// starts. Returns whether the panel started closing.
    pub fn request_close<H: LayoutHost + ?Sized>(&mut self, host: &mut H, now_ms: u64) -> bool {
        if !matches!(self.phase, PanelPhase::Expanded | PanelPhase::Settling) {
            otrace!(phase = ?self.phase, "AnchorOverlayPanel::request_close: not expanded");
            return false;
        }
        if self.live_height(&*host) != Some(self.max_height) {
            otrace!("AnchorOverlayPanel::request_close: not expanded");
            return false;
        }
        if let Some(previous) = self.settle.take() {
            odebug!("AnchorOverlayPanel::request_close: completing in-flight settle");
            self.slide_direction = SlideDirection::None;
            self.phase = PanelPhase::at_rest(self.view_state);
            self.notify_settled(previous.transition);
        }
        self.slide_direction = self.anchor.closing_direction();
        let animation = self.close_animation;
        self.settle(host, now_ms, animation);
        true
    }

    /// Advances the settle animation.
    ///
    /// Returns `None` when nothing is animating. The frame with `done == true` is the last
    /// one: the panel is back at rest, the slide direction is cleared, and the `did_*`
    /// notification has fired.
    pub fn tick<H: LayoutHost + ?Sized>(&mut self, host: &mut H, now_ms: u64) -> Option<SettleFrame> {
        let settle = self.settle?;
        let tween = settle.tween;

        if !tween.is_done(now_ms) {
            let frame = SettleFrame {
                height: tween.height(now_ms),
                center_offset: tween.center_offset(now_ms),
                done: false,
            };
            otrace!(
                now_ms,
                height = frame.height,
                center_offset = frame.center_offset,
                "AnchorOverlayPanel::tick"
            );
            return Some(frame);
        }

        self.settle = None;
        self.slide_direction = SlideDirection::None;
        self.phase = PanelPhase::at_rest(self.view_state);
        host.layout_if_needed();
        odebug!(view_state = ?self.view_state, "AnchorOverlayPanel: settled");

        self.notify_settled(settle.transition);

        Some(SettleFrame {
            height: tween.to,
            center_offset: 0.0,
            done: true,
        })
    }

    /// The bound the current slide direction settles on, per anchor.
    ///
    /// `None` means the height and view state stay as they are.
    pub fn settle_target(&self) -> Option<(f32, ViewState)> {
        match self.transition()? {
            Transition::Shrink => Some((self.min_height, ViewState::Shrunk)),
            Transition::Expand => Some((self.max_height, ViewState::Expanded)),
        }
    }

    fn transition(&self) -> Option<Transition> {
        if self.slide_direction == SlideDirection::None {
            None
        } else if self.slide_direction == self.anchor.closing_direction() {
            Some(Transition::Shrink)
        } else {
            Some(Transition::Expand)
        }
    }

    fn settle<H: LayoutHost + ?Sized>(
        &mut self,
        host: &mut H,
        now_ms: u64,
        animation: AnimationOptions,
    ) {
        let Some(id) = self.height_id() else {
            owarn!("AnchorOverlayPanel::settle: height constraint not set");
            return;
        };
        let Some(from) = host.constant(id) else {
            owarn!("AnchorOverlayPanel::settle: height constraint is gone");
            return;
        };

        let mut to = from;
        if let Some((target, view_state)) = self.settle_target() {
            host.set_constant(id, target);
            self.view_state = view_state;
            to = target;
        }

        let transition = self.transition();
        let bounce = match transition {
            Some(Transition::Shrink) => bounce_distance(animation.clearance),
            Some(Transition::Expand) => -bounce_distance(animation.clearance),
            None => 0.0,
        };
        let curve = SpringCurve::new(
            animation.spring_damping_ratio,
            animation.initial_spring_velocity,
            animation.duration_ms,
        );
        self.settle = Some(SettleAnimation {
            tween: SpringTween::new(
                from,
                to,
                bounce,
                now_ms,
                animation.delay_ms,
                animation.duration_ms,
                curve,
            ),
            transition,
        });
        self.phase = PanelPhase::Settling;
        odebug!(
            from,
            to,
            bounce,
            direction = ?self.slide_direction,
            "AnchorOverlayPanel::settle"
        );

        match transition {
            Some(Transition::Expand) => self.notify(&self.callbacks.on_will_expand),
            Some(Transition::Shrink) => self.notify(&self.callbacks.on_will_shrink),
            None => {}
        }
    }

    fn notify(&self, callback: &Option<PanelCallback>) {
        if let Some(cb) = callback {
            cb(self);
        }
    }

    fn notify_settled(&self, transition: Option<Transition>) {
        match transition {
            Some(Transition::Expand) => self.notify(&self.callbacks.on_did_expand),
            Some(Transition::Shrink) => self.notify(&self.callbacks.on_did_shrink),
            None => {}
        }
    }

    fn height_id(&self) -> Option<ConstraintId> {
        self.constraints.as_ref().map(|c| c.height)
    }
}

fn check_bounds(min_height: f32, max_height: f32) -> Result<(), PanelError> {
    if min_height < max_height {
        Ok(())
    } else {
        Err(PanelError::InvalidHeightBounds {
            min: min_height,
            max: max_height,
        })
    }
}
