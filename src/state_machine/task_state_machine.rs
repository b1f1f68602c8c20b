use super::{events::TaskEvent, states::TaskState};
use crate::error::{BiosTaskError, Result};
use tracing::debug;

/// One applied transition, kept for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRecord {
    pub from: TaskState,
    pub to: TaskState,
    pub event: &'static str,
}

/// In-memory lifecycle tracker for a single task instance
#[derive(Debug, Default)]
pub struct TaskStateMachine {
    state: TaskState,
    history: Vec<TransitionRecord>,
}

impl TaskStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_state(&self) -> TaskState {
        self.state
    }

    pub fn history(&self) -> &[TransitionRecord] {
        &self.history
    }

    /// Attempt to transition the task state
    pub fn transition(&mut self, event: TaskEvent) -> Result<TaskState> {
        let from = self.state;
        let to = Self::determine_target_state(from, &event)?;

        debug!(from = %from, to = %to, event = event.event_type(), "Task state transition");

        self.history.push(TransitionRecord {
            from,
            to,
            event: event.event_type(),
        });
        self.state = to;
        Ok(to)
    }

    /// Determine the target state based on current state and event
    fn determine_target_state(current_state: TaskState, event: &TaskEvent) -> Result<TaskState> {
        let target = match (current_state, event) {
            (TaskState::Started, TaskEvent::Begin) => TaskState::CheckingEligibility,
            (TaskState::CheckingEligibility, TaskEvent::Eligible) => TaskState::Invoking,
            (TaskState::CheckingEligibility, TaskEvent::Skip { .. }) => TaskState::Cancelled,
            (TaskState::Invoking, TaskEvent::Invoked) => TaskState::CleaningUp,
            (TaskState::CleaningUp, TaskEvent::Finish) => TaskState::Complete,

            // Cleanup never fails the task, so CleaningUp has no failure edge
            (
                TaskState::Started | TaskState::CheckingEligibility | TaskState::Invoking,
                TaskEvent::Fail(_),
            ) => TaskState::Error,

            (from_state, _) => {
                return Err(BiosTaskError::StateTransition(format!(
                    "invalid transition from {from_state} on {}",
                    event.event_type()
                )))
            }
        };

        Ok(target)
    }
}
