//! State Machine Runtime
//!
//! Flat state machines for widget phases. Transitions are looked up by
//! `(state, event)`; an event with no matching transition leaves the
//! machine where it is.

use rustc_hash::FxHashMap;

/// Identifier for a state within a state machine
pub type StateId = u32;

/// Identifier for an event type
pub type EventId = u32;

const DEFAULT_HISTORY_LIMIT: usize = 64;

/// A transition in the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from_state: StateId,
    pub event: EventId,
    pub to_state: StateId,
}

impl Transition {
    pub fn new(from: StateId, event: EventId, to: StateId) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
        }
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder {
    initial_state: StateId,
    transitions: FxHashMap<(StateId, EventId), StateId>,
    history_limit: usize,
}

impl StateMachineBuilder {
    pub fn new(initial_state: StateId) -> Self {
        Self {
            initial_state,
            transitions: FxHashMap::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Add a transition
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transitions.insert(
            (transition.from_state, transition.event),
            transition.to_state,
        );
        self
    }

    /// Add a simple transition (from, event, to)
    pub fn on(self, from: StateId, event: EventId, to: StateId) -> Self {
        self.transition(Transition::new(from, event, to))
    }

    /// Cap the number of recorded transitions (oldest are dropped first)
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine {
        StateMachine {
            current_state: self.initial_state,
            transitions: self.transitions,
            history: Vec::new(),
            history_limit: self.history_limit,
        }
    }
}

/// A state machine instance
#[derive(Debug)]
pub struct StateMachine {
    current_state: StateId,
    transitions: FxHashMap<(StateId, EventId), StateId>,
    /// History of state transitions (for debugging)
    history: Vec<(StateId, EventId, StateId)>,
    history_limit: usize,
}

impl StateMachine {
    /// Create a new state machine with an initial state and transitions
    pub fn new(initial_state: StateId, transitions: Vec<Transition>) -> Self {
        transitions
            .into_iter()
            .fold(StateMachineBuilder::new(initial_state), |b, t| b.transition(t))
            .build()
    }

    /// Create a builder for a state machine
    pub fn builder(initial_state: StateId) -> StateMachineBuilder {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: StateId) -> bool {
        self.current_state == state
    }

    /// Get transition history, oldest first
    pub fn history(&self) -> &[(StateId, EventId, StateId)] {
        &self.history
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Check if an event can trigger a transition from current state
    pub fn can_send(&self, event: EventId) -> bool {
        self.transitions
            .contains_key(&(self.current_state, event))
    }

    /// Send an event, returning the (possibly unchanged) current state
    pub fn send(&mut self, event: EventId) -> StateId {
        let current = self.current_state;
        let Some(&to_state) = self.transitions.get(&(current, event)) else {
            tracing::trace!(state = current, event, "fsm: no transition");
            return current;
        };

        self.current_state = to_state;

        if self.history_limit > 0 {
            if self.history.len() == self.history_limit {
                self.history.remove(0);
            }
            self.history.push((current, event, to_state));
        }

        to_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE: StateId = 0;
    const WAITING: StateId = 1;
    const RUNNING: StateId = 2;

    const ARM: EventId = 1;
    const FIRE: EventId = 2;
    const FINISH: EventId = 3;
    const CANCEL: EventId = 4;

    fn cycle_machine() -> StateMachine {
        StateMachine::builder(IDLE)
            .on(IDLE, ARM, WAITING)
            .on(WAITING, FIRE, RUNNING)
            .on(RUNNING, FINISH, WAITING)
            .on(WAITING, CANCEL, IDLE)
            .build()
    }

    #[test]
    fn test_simple_transitions() {
        let mut fsm = cycle_machine();
        assert_eq!(fsm.current_state(), IDLE);

        assert_eq!(fsm.send(ARM), WAITING);
        assert_eq!(fsm.send(FIRE), RUNNING);
        assert_eq!(fsm.send(FINISH), WAITING);
        assert_eq!(fsm.send(CANCEL), IDLE);
        assert!(fsm.is_in(IDLE));
    }

    #[test]
    fn test_invalid_event_no_transition() {
        let mut fsm = cycle_machine();

        // FIRE is not valid in IDLE
        assert_eq!(fsm.send(FIRE), IDLE);
        assert!(fsm.history().is_empty());
    }

    #[test]
    fn test_can_send() {
        let fsm = cycle_machine();

        assert!(fsm.can_send(ARM));
        assert!(!fsm.can_send(CANCEL));
    }

    #[test]
    fn test_history() {
        let mut fsm = StateMachine::new(
            IDLE,
            vec![Transition::new(IDLE, ARM, WAITING), Transition::new(WAITING, FIRE, RUNNING)],
        );

        fsm.send(ARM);
        fsm.send(FIRE);

        let history = fsm.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], (IDLE, ARM, WAITING));
        assert_eq!(history[1], (WAITING, FIRE, RUNNING));

        fsm.clear_history();
        assert!(fsm.history().is_empty());
    }

    #[test]
    fn test_history_limit_drops_oldest() {
        let mut fsm = StateMachine::builder(IDLE)
            .on(IDLE, ARM, WAITING)
            .on(WAITING, CANCEL, IDLE)
            .history_limit(2)
            .build();

        fsm.send(ARM);
        fsm.send(CANCEL);
        fsm.send(ARM);

        assert_eq!(fsm.history(), &[(WAITING, CANCEL, IDLE), (IDLE, ARM, WAITING)]);
    }
}
