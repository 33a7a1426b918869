//! Booking session state machine
//!
//! `BookingSession` is the single source of truth for where the user is in
//! the booking flow and which skip they picked. All mutation goes through
//! three operations:
//!
//! - [`BookingSession::attempt_navigate`] - jump to a completed or the current step
//! - [`BookingSession::toggle_skip_selection`] - select, replace or clear a skip
//! - [`BookingSession::advance_to_next_step`] - complete the current step and move on
//!
//! None of them can fail in the conventional sense. A request the session
//! cannot honour comes back as a [`TransitionRejected`] and the session is
//! left exactly as it was.
//!
//! # Clickability
//!
//! A step is navigable when it is completed or current. The header renders
//! steps as clickable using the same predicate ([`BookingSession::can_navigate_to`]),
//! so what looks clickable is exactly what navigation accepts.

use crate::catalog::SkipId;
use crate::step::Step;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Reasons a booking intent was ignored.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionRejected {
    /// Target step is neither completed nor current
    #[error("Cannot open {}: complete earlier steps first", .target.name())]
    NavigationLocked { target: Step },

    /// Continue was requested before a skip was picked
    #[error("Select a skip before continuing")]
    NoSkipSelected,

    /// Continue was requested on the last step
    #[error("{} is the final step", .step.name())]
    AtFinalStep { step: Step },
}

/// Outcome of a selection toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// Nothing was selected; now `id` is
    Selected(SkipId),
    /// `previous` was replaced by `current`
    Replaced { previous: SkipId, current: SkipId },
    /// The selected skip was toggled off
    Cleared(SkipId),
}

/// Display status of a step in the progress header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Current step (may also be completed if the user navigated back)
    Active,
    /// Finished and not current
    Completed,
    /// Not reachable yet
    Locked,
}

/// Transient state of one booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSession {
    current_step: Step,
    /// Completed steps in completion order, without duplicates
    completed_steps: Vec<Step>,
    selected_skip: Option<SkipId>,
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingSession {
    /// Session as it starts: postcode and waste type are already done and the
    /// user is on the skip selection step with nothing selected.
    pub fn new() -> Self {
        Self {
            current_step: Step::SelectSkip,
            completed_steps: vec![Step::Postcode, Step::WasteType],
            selected_skip: None,
        }
    }

    /// Build a session from raw parts. Duplicate completed steps are dropped.
    pub fn from_parts(
        current_step: Step,
        completed_steps: impl IntoIterator<Item = Step>,
        selected_skip: Option<SkipId>,
    ) -> Self {
        let mut session = Self {
            current_step,
            completed_steps: Vec::new(),
            selected_skip,
        };
        for step in completed_steps {
            session.mark_completed(step);
        }
        session
    }

    #[inline]
    pub fn current_step(&self) -> Step {
        self.current_step
    }

    #[inline]
    pub fn completed_steps(&self) -> &[Step] {
        &self.completed_steps
    }

    #[inline]
    pub fn selected_skip(&self) -> Option<SkipId> {
        self.selected_skip
    }

    pub fn is_completed(&self, step: Step) -> bool {
        self.completed_steps.contains(&step)
    }

    pub fn is_selected(&self, id: SkipId) -> bool {
        self.selected_skip == Some(id)
    }

    /// Navigation guard shared by input handling and rendering.
    pub fn can_navigate_to(&self, target: Step) -> bool {
        target == self.current_step || self.is_completed(target)
    }

    /// Whether the continue action is currently offered.
    pub fn can_advance(&self) -> bool {
        self.selected_skip.is_some() && !self.current_step.is_last()
    }

    pub fn step_status(&self, step: Step) -> StepStatus {
        if step == self.current_step {
            StepStatus::Active
        } else if self.is_completed(step) {
            StepStatus::Completed
        } else {
            StepStatus::Locked
        }
    }

    /// Whether the connector drawn after `step` is lit: either side completed.
    pub fn connector_lit(&self, step: Step) -> bool {
        self.is_completed(step) || step.next().is_some_and(|next| self.is_completed(next))
    }

    /// Move to `target` if it is completed or already current.
    ///
    /// Returns the step that is current afterwards.
    pub fn attempt_navigate(&mut self, target: Step) -> Result<Step, TransitionRejected> {
        if !self.can_navigate_to(target) {
            debug!(%target, current = %self.current_step, "navigation rejected");
            return Err(TransitionRejected::NavigationLocked { target });
        }

        if target != self.current_step {
            debug!(from = %self.current_step, to = %target, "navigating");
        }
        self.current_step = target;
        Ok(target)
    }

    /// Select `id`, or clear the selection if `id` is already selected.
    ///
    /// The id is not checked against the catalog.
    pub fn toggle_skip_selection(&mut self, id: SkipId) -> SelectionChange {
        let change = match self.selected_skip {
            Some(previous) if previous == id => {
                self.selected_skip = None;
                SelectionChange::Cleared(id)
            }
            Some(previous) => {
                self.selected_skip = Some(id);
                SelectionChange::Replaced {
                    previous,
                    current: id,
                }
            }
            None => {
                self.selected_skip = Some(id);
                SelectionChange::Selected(id)
            }
        };
        debug!(?change, "skip selection toggled");
        change
    }

    /// Mark the current step completed and move to the next one.
    ///
    /// Requires a selected skip. Returns the new current step.
    pub fn advance_to_next_step(&mut self) -> Result<Step, TransitionRejected> {
        if self.selected_skip.is_none() {
            debug!(current = %self.current_step, "advance rejected: no skip selected");
            return Err(TransitionRejected::NoSkipSelected);
        }

        let Some(next) = self.current_step.next() else {
            debug!(current = %self.current_step, "advance rejected: final step");
            return Err(TransitionRejected::AtFinalStep {
                step: self.current_step,
            });
        };

        let finished = self.current_step;
        self.mark_completed(finished);
        self.current_step = next;
        debug!(%finished, %next, "advanced to next step");
        Ok(next)
    }

    fn mark_completed(&mut self, step: Step) {
        if !self.completed_steps.contains(&step) {
            self.completed_steps.push(step);
        }
    }
}
