//! Auto-scrolling looping view
//!
//! Shows one item of a list at a time and periodically slides the following
//! item up into view, wrapping from the last item back to the first.
//!
//! Two slots do all the rendering. MAIN is the visible one, NEXT is staged
//! below the viewport. A cycle looks like this:
//!
//! ```text
//!  WAITING (delay_ms)        ANIMATING (animation_duration_ms)       completion
//!  |       |                 |   a   |  MAIN sliding out             |       |
//!  |   a   |  MAIN           |   b   |  NEXT sliding in              |   b   |  MAIN <- NEXT
//!  |   b   |  NEXT (hidden)  |       |                               |   c   |  NEXT rebound
//! ```
//!
//! At completion NEXT's rendered content is carried over into MAIN, the
//! offset snaps back to zero and NEXT is rebound to the following position,
//! so the snap is invisible.
//!
//! Nothing runs in the background. The host calls [`LoopingView::tick`] once
//! per frame; the view reads its [`Clock`], fires due timers and samples the
//! slide animation.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use vloop_core::clock::ManualClock;
//! use vloop_widgets::comment::CommentBinder;
//! use vloop_widgets::config::LoopConfig;
//! use vloop_widgets::looping::LoopingView;
//!
//! let clock = ManualClock::new();
//! let mut view = LoopingView::with_clock(CommentBinder::new(), LoopConfig::default(), clock.clone());
//!
//! let comments: Arc<[String]> = vec!["first".to_string(), "second".to_string()].into();
//! view.set_data(Some(comments), 0);
//! view.measure(240);
//!
//! clock.advance(1000 + 500);
//! view.tick();
//! view.tick();
//! assert_eq!(view.current_position(), 1);
//! ```

use std::sync::Arc;

use vloop_animation::{DelayScheduler, TimerId, ValueAnimator};
use vloop_core::clock::{Clock, Millis, SystemClock};
use vloop_core::fsm::{EventId, StateId, StateMachine};
use vloop_core::geometry::{MeasureSpec, Size};

use crate::binder::{SlotBinder, SlotRole};
use crate::config::LoopConfig;
use crate::layout::{FadingEdges, SlotLayout, SlotRects};

/// Loop phase states
pub mod phases {
    use vloop_core::fsm::StateId;

    pub const IDLE: StateId = 0;
    pub const WAITING: StateId = 1;
    pub const ANIMATING: StateId = 2;
}

/// Loop phase events
pub mod loop_events {
    use vloop_core::fsm::EventId;

    /// A delay timer was armed from IDLE
    pub const ARM: EventId = 1;
    /// The delay timer fired and the slide began
    pub const DELAY_ELAPSED: EventId = 2;
    /// The slide reached its end and the next delay was armed
    pub const ANIMATION_END: EventId = 3;
    /// Pending work was dropped
    pub const CANCEL: EventId = 4;
}

/// Where the loop currently is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopPhase {
    /// Nothing scheduled: stopped, or fewer than two items
    Idle,
    /// Waiting for the delay before the next slide
    Waiting,
    /// Sliding the next item into view
    Animating,
}

impl LoopPhase {
    fn from_state(state: StateId) -> Self {
        match state {
            phases::WAITING => LoopPhase::Waiting,
            phases::ANIMATING => LoopPhase::Animating,
            _ => LoopPhase::Idle,
        }
    }
}

/// Position bookkeeping of a looping view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopState {
    /// Logical position shown in MAIN. Always `< data_size` when data is non-empty.
    pub position: usize,
    pub data_size: usize,
    /// Upward displacement of both slots, `0..=stride`
    pub vertical_offset: i32,
}

/// What a [`LoopingView::tick`] changed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Something visible changed; the host should measure and lay out again
    pub layout_requested: bool,
    /// A slide finished and MAIN now shows the next position
    pub cycle_completed: bool,
}

fn phase_machine() -> StateMachine {
    use loop_events::*;
    use phases::*;

    StateMachine::builder(IDLE)
        .on(IDLE, ARM, WAITING)
        .on(WAITING, DELAY_ELAPSED, ANIMATING)
        .on(ANIMATING, ANIMATION_END, WAITING)
        .on(WAITING, CANCEL, IDLE)
        .on(ANIMATING, CANCEL, IDLE)
        .build()
}

/// A fixed-height view that loops vertically through a list
pub struct LoopingView<B: SlotBinder, C: Clock = SystemClock> {
    binder: B,
    clock: C,
    config: LoopConfig,
    /// Indexed by [`SlotRole::index`]
    slots: [B::Slot; 2],
    data: Option<Arc<[B::Item]>>,
    state: LoopState,
    phase: StateMachine,
    scheduler: DelayScheduler,
    cycle_timer: Option<TimerId>,
    animator: Option<ValueAnimator>,
    layout: SlotLayout,
    rects: SlotRects,
    detached: bool,
}

impl<B: SlotBinder> LoopingView<B, SystemClock> {
    /// Create a view driven by the wall clock
    pub fn new(binder: B, config: LoopConfig) -> Self {
        Self::with_clock(binder, config, SystemClock::new())
    }
}

impl<B: SlotBinder, C: Clock> LoopingView<B, C> {
    /// Create a view driven by `clock`
    ///
    /// `config` is used as given; run [`LoopConfig::validate`] first if it
    /// comes from user input.
    pub fn with_clock(mut binder: B, config: LoopConfig, clock: C) -> Self {
        let slots = [
            binder.create_slot(SlotRole::Main),
            binder.create_slot(SlotRole::Next),
        ];
        Self {
            binder,
            clock,
            config,
            slots,
            data: None,
            state: LoopState::default(),
            phase: phase_machine(),
            scheduler: DelayScheduler::new(),
            cycle_timer: None,
            animator: None,
            layout: SlotLayout::default(),
            rects: SlotRects::default(),
            detached: false,
        }
    }

    /// Supply a new list and (re)start looping at `start_position`
    ///
    /// `None` leaves everything untouched. Otherwise any running cycle is
    /// stopped and a start position outside `0..items.len()` falls back to 0.
    pub fn set_data(&mut self, items: Option<Arc<[B::Item]>>, start_position: i64) {
        let Some(items) = items else {
            return;
        };

        self.on_received_data(items.len());
        self.data = Some(items);
        self.start(start_position);
    }

    fn on_received_data(&mut self, size: usize) {
        self.stop();
        self.detached = false;
        self.state = LoopState {
            position: 0,
            data_size: size,
            vertical_offset: 0,
        };
        tracing::debug!(data_size = size, "looping view received data");
    }

    fn start(&mut self, start_position: i64) {
        let size = self.state.data_size;
        self.state.position = match usize::try_from(start_position) {
            Ok(position) if position < size => position,
            _ => 0,
        };
        self.state.vertical_offset = 0;

        if size == 0 {
            return;
        }

        self.bind(SlotRole::Main, self.state.position);
        if size > 1 {
            self.bind(SlotRole::Next, self.next_position());
            let now = self.clock.now_ms();
            self.arm(now);
            self.fire(loop_events::ARM);
        }
    }

    /// Stop looping
    ///
    /// An in-flight slide is jumped to its end and completed inline, exactly
    /// as if it had finished on its own; then every pending timer is dropped.
    /// Calling this when nothing runs does nothing.
    pub fn stop(&mut self) {
        if let Some(frame) = self.animator.as_mut().and_then(ValueAnimator::end) {
            self.state.vertical_offset = frame.value;
            let now = self.clock.now_ms();
            self.complete_cycle(now);
        }

        self.scheduler.cancel_all();
        self.cycle_timer = None;
        if self.is_running() {
            self.fire(loop_events::CANCEL);
        }
    }

    /// Tear down: stop, and ignore ticks until new data arrives
    pub fn detach(&mut self) {
        self.stop();
        self.detached = true;
        tracing::debug!(position = self.state.position, "looping view detached");
    }

    /// Advance timers and the slide animation to the clock's current time
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.detached {
            return outcome;
        }

        let now = self.clock.now_ms();
        for (id, deadline) in self.scheduler.take_due(now) {
            if self.cycle_timer == Some(id) {
                self.cycle_timer = None;
                // Deadline, not `now`, so a late tick doesn't stretch the cadence
                self.begin_slide(deadline);
            }
        }

        let Some(frame) = self.animator.as_mut().and_then(|a| a.sample(now)) else {
            return outcome;
        };

        tracing::trace!(offset = frame.value, "looping view frame");
        self.state.vertical_offset = frame.value;
        outcome.layout_requested = true;

        if frame.finished {
            let ended_at = self
                .animator
                .as_ref()
                .and_then(ValueAnimator::end_time)
                .unwrap_or(now);
            self.complete_cycle(ended_at);
            outcome.cycle_completed = true;
        }

        outcome
    }

    fn begin_slide(&mut self, at: Millis) {
        let mut animator = ValueAnimator::new(
            0,
            self.layout.stride(),
            self.config.animation_duration_ms,
        )
        .with_easing(self.config.easing);
        animator.start(at);

        self.animator = Some(animator);
        self.fire(loop_events::DELAY_ELAPSED);
        tracing::trace!(position = self.state.position, at, "slide started");
    }

    fn complete_cycle(&mut self, at: Millis) {
        self.animator = None;
        self.fire(loop_events::ANIMATION_END);

        // NEXT is already where MAIN rests; make MAIN look identical before
        // the offset snaps back.
        let [main, next] = &mut self.slots;
        self.binder.carry_over(next, main);

        self.state.position = self.next_position();
        self.bind(SlotRole::Next, self.next_position());
        self.state.vertical_offset = 0;
        tracing::debug!(position = self.state.position, "loop cycle completed");

        self.arm(at);
    }

    /// Post the delay before the next slide. Phase events are the caller's.
    fn arm(&mut self, at: Millis) {
        let id = self.scheduler.post_delayed(at, self.config.delay_ms);
        self.cycle_timer = Some(id);
    }

    fn fire(&mut self, event: EventId) {
        debug_assert!(
            self.phase.can_send(event),
            "event {event} has no transition from state {}",
            self.phase.current_state()
        );
        self.phase.send(event);
    }

    fn bind(&mut self, role: SlotRole, position: usize) {
        let Some(item) = self.data.as_ref().and_then(|data| data.get(position)) else {
            return;
        };
        self.binder
            .bind(role, &mut self.slots[role.index()], position, item);
    }

    fn next_position(&self) -> usize {
        match self.state.data_size {
            0 => 0,
            size => (self.state.position + 1) % size,
        }
    }

    /// Measure pass: width is given, height is reported
    ///
    /// MAIN is measured freely within the available width; NEXT is forced to
    /// MAIN's height so the two are interchangeable at the end of a slide.
    pub fn measure(&mut self, width: i32) -> Size {
        let inset = self.config.horizontal_spacing;
        let available = SlotLayout::available_width(width, inset);

        let (main, next) = if self.state.data_size == 0 {
            (Size::ZERO, Size::ZERO)
        } else {
            let main = self.binder.measure(
                &self.slots[SlotRole::Main.index()],
                MeasureSpec::AtMost(available),
                MeasureSpec::Unspecified,
            );
            let next = self.binder.measure(
                &self.slots[SlotRole::Next.index()],
                MeasureSpec::AtMost(available),
                MeasureSpec::Exactly(main.height),
            );
            (main, next)
        };

        self.layout = SlotLayout::new(width, main, next, self.config.spacing, inset);
        self.layout.viewport()
    }

    /// Layout pass: place both slots for the current offset
    pub fn layout(&mut self) -> SlotRects {
        self.rects = self.layout.place(self.state.vertical_offset);
        self.rects
    }

    /// Rectangles from the last layout pass
    pub fn slot_rects(&self) -> SlotRects {
        self.rects
    }

    /// Fading edges are always drawn at full strength
    pub fn fading_edges(&self) -> FadingEdges {
        FadingEdges::full(self.config.fade_length)
    }

    /// Logical position currently shown in MAIN
    pub fn current_position(&self) -> usize {
        self.state.position
    }

    pub fn vertical_offset(&self) -> i32 {
        self.state.vertical_offset
    }

    pub fn data_size(&self) -> usize {
        self.state.data_size
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn phase(&self) -> LoopPhase {
        LoopPhase::from_state(self.phase.current_state())
    }

    /// Whether a cycle is waiting or animating
    pub fn is_running(&self) -> bool {
        self.phase() != LoopPhase::Idle
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Recent phase transitions as `(from, event, to)`, for debugging
    pub fn phase_history(&self) -> &[(StateId, EventId, StateId)] {
        self.phase.history()
    }

    /// Earliest time the next tick can change anything
    ///
    /// `now` while animating, the pending delay's deadline while waiting,
    /// `None` when idle.
    pub fn next_wakeup(&self) -> Option<Millis> {
        if self.animator.is_some() {
            return Some(self.clock.now_ms());
        }
        self.scheduler.next_deadline()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    pub fn slot(&self, role: SlotRole) -> &B::Slot {
        &self.slots[role.index()]
    }

    pub fn main_slot(&self) -> &B::Slot {
        self.slot(SlotRole::Main)
    }

    pub fn next_slot(&self) -> &B::Slot {
        self.slot(SlotRole::Next)
    }

    pub fn binder(&self) -> &B {
        &self.binder
    }
}
