// State machine for the configure-BIOS task lifecycle
//
// Started -> CheckingEligibility -> Invoking -> CleaningUp -> Complete, with
// Cancelled (ineligible node) and Error as the other terminal states.

pub mod events;
pub mod states;
pub mod task_state_machine;

pub use events::TaskEvent;
pub use states::TaskState;
pub use task_state_machine::{TaskStateMachine, TransitionRecord};
