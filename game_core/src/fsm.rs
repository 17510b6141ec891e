//! Session State Machine
//!
//! Tracks whether the simulation is waiting, running, frozen on a quiz, or
//! finished. Only the transitions listed in [`SessionFsm::next_state`] are
//! legal; anything else is rejected and leaves the state untouched.

use log::info;

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the first jump
    Idle,
    /// Physics advances every tick
    Running,
    /// Physics frozen until the quiz resolves
    AwaitingAnswer,
    /// Terminal until a full reset
    Over,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Jump,
    Crash,
    AnswerCorrect,
    AnswerIncorrect,
    Reset,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: SessionState,
    pub to_state: SessionState,
    pub action: SessionAction,
}

/// Session finite state machine
#[derive(Debug, Clone)]
pub struct SessionFsm {
    state: SessionState,
}

impl SessionFsm {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: SessionAction) -> bool {
        Self::next_state(self.state, action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: SessionAction) -> TransitionResult {
        let from_state = self.state;

        match Self::next_state(from_state, action) {
            Some(to_state) => {
                self.state = to_state;
                if to_state != from_state {
                    info!("session {from_state:?} -> {to_state:?} ({action:?})");
                }
                TransitionResult {
                    success: true,
                    from_state,
                    to_state,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    fn next_state(state: SessionState, action: SessionAction) -> Option<SessionState> {
        use SessionAction::*;
        use SessionState::*;

        match (state, action) {
            (Idle, Jump) => Some(Running),

            (Running, Jump) => Some(Running),
            (Running, Crash) => Some(AwaitingAnswer),

            (AwaitingAnswer, AnswerCorrect) => Some(Running),
            (AwaitingAnswer, AnswerIncorrect) => Some(Over),

            (Over, Reset) => Some(Idle),

            _ => None,
        }
    }

    /// Physics should advance
    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }
}

impl Default for SessionFsm {
    fn default() -> Self {
        Self::new()
    }
}
