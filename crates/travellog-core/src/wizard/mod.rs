//! Multi-step wizard controller.
//!
//! A [`Wizard`] owns a non-empty, fixed-length [`StepSequence`] and a
//! [`WizardState`] index into it. Navigation is a bounded counter: [`next`]
//! stops at the last step and [`prev`] stops at the first, neither wraps and
//! neither fails.
//!
//! The controller knows nothing about what a step collects. Deciding whether
//! the user may *submit* belongs to the caller (see
//! [`crate::composer::LogComposer::submit`]); moving between steps is always
//! allowed, even with empty fields.
//!
//! ```rust
//! use travellog_core::wizard::{LogStep, StepAction, Wizard};
//!
//! let mut wizard = Wizard::initialize(LogStep::sequence()).unwrap();
//! assert_eq!(*wizard.current_step(), LogStep::Settings);
//!
//! wizard.next();
//! wizard.next();
//! wizard.next(); // clamped
//! assert_eq!(*wizard.current_step(), LogStep::Preview);
//! assert_eq!(wizard.action(), StepAction::Submit);
//! ```
//!
//! [`next`]: Wizard::next
//! [`prev`]: Wizard::prev

mod steps;


pub use steps::LogStep;

use crate::error::{LogbookError, Result};

/// Ordered, non-empty sequence of step descriptors.
#[derive(Debug, Clone, PartialEq)]
pub struct StepSequence<T> {
    steps: Vec<T>,
}

impl<T> StepSequence<T> {
    /// Builds a sequence, rejecting an empty list.
    pub fn new(steps: Vec<T>) -> Result<Self> {
        if steps.is_empty() {
            return Err(LogbookError::invalid_input("steps")
                .with_reason("A wizard needs at least one step"));
        }
        Ok(Self { steps })
    }

    /// Number of steps. Always at least one.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Step at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.steps.get(index)
    }

    /// Iterate over the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.steps
    }
}

impl<T> TryFrom<Vec<T>> for StepSequence<T> {
    type Error = LogbookError;

    fn try_from(steps: Vec<T>) -> Result<Self> {
        Self::new(steps)
    }
}

/// Position of a wizard session within its step sequence.
///
/// Transitions are pure: `next` and `prev` return a new state and never
/// leave `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WizardState {
    current_index: usize,
}

impl WizardState {
    /// Index of the current step.
    pub fn current_index(self) -> usize {
        self.current_index
    }

    /// Advance by one, clamped to `len - 1`.
    pub fn next(self, len: usize) -> Self {
        Self {
            current_index: (self.current_index + 1).min(len.saturating_sub(1)),
        }
    }

    /// Retreat by one, clamped to 0.
    pub fn prev(self) -> Self {
        Self {
            current_index: self.current_index.saturating_sub(1),
        }
    }

    pub fn is_first_step(self) -> bool {
        self.current_index == 0
    }

    pub fn is_last_step(self, len: usize) -> bool {
        self.current_index + 1 == len
    }
}

/// What the primary button of the current step does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// Move to the following step
    Next,
    /// Last step reached: publish or save
    Submit,
}

/// Wizard session over a fixed step sequence.
#[derive(Debug, Clone)]
pub struct Wizard<T> {
    steps: StepSequence<T>,
    state: WizardState,
}

impl<T> Wizard<T> {
    /// Starts a session at the first step.
    ///
    /// # Errors
    ///
    /// Returns `LogbookError::InvalidInput` if `steps` is empty.
    pub fn initialize(steps: Vec<T>) -> Result<Self> {
        Ok(Self::from_sequence(StepSequence::new(steps)?))
    }

    /// Starts a session over an already validated sequence.
    pub fn from_sequence(steps: StepSequence<T>) -> Self {
        Self {
            steps,
            state: WizardState::default(),
        }
    }

    /// Moves forward one step. No-op on the last step.
    pub fn next(&mut self) -> WizardState {
        self.state = self.state.next(self.steps.len());
        self.state
    }

    /// Moves back one step. No-op on the first step.
    pub fn prev(&mut self) -> WizardState {
        self.state = self.state.prev();
        self.state
    }

    pub fn current_step(&self) -> &T {
        // The state is only ever produced by clamped transitions over this
        // sequence, so the index is always in bounds.
        &self.steps.as_slice()[self.state.current_index()]
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn is_first_step(&self) -> bool {
        self.state.is_first_step()
    }

    pub fn is_last_step(&self) -> bool {
        self.state.is_last_step(self.steps.len())
    }

    /// `Submit` on the last step, `Next` everywhere else.
    pub fn action(&self) -> StepAction {
        if self.is_last_step() {
            StepAction::Submit
        } else {
            StepAction::Next
        }
    }

    pub fn steps(&self) -> &StepSequence<T> {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
