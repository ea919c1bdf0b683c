/*!
 * # Request State
 *
 * The lifecycle shared by every orchestrator: idle until the first
 * submission, pending while a request is in flight, then resolved or failed.
 * Each orchestrator owns exactly one [`RequestSlot`]; a new submission
 * overwrites the previous terminal state unconditionally, and a sequence
 * number guards the slot against a stale response settling after a newer
 * submission has already been issued.
 */

use crate::errors::ClientError;

/// The four lifecycle states of a logical request. Exactly one is active per
/// orchestrator at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Pending,
    Resolved(T),
    Failed(ClientError),
}

impl<T> RequestState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The resolved value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Resolved(value) => Some(value),
            _ => None,
        }
    }

    /// The classified error, if any.
    pub fn error(&self) -> Option<&ClientError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Proof of a specific submission. Settling requires the ticket handed out
/// by the matching `begin`; an older ticket is rejected as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Single owned state slot with stale-response guarding.
///
/// `begin` marks the slot pending without discarding the previous terminal
/// payload, so a display layer can keep rendering the last result while a
/// reload is in flight; the loading flag and the readable result are
/// independent. `settle` accepts only the newest submission's ticket.
#[derive(Debug)]
pub struct RequestSlot<T> {
    result: RequestState<T>,
    submissions: u64,
    in_flight: Option<u64>,
}

impl<T> Default for RequestSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RequestSlot<T> {
    pub fn new() -> Self {
        Self {
            result: RequestState::Idle,
            submissions: 0,
            in_flight: None,
        }
    }

    /// Start a new submission, superseding any still in flight.
    pub fn begin(&mut self) -> Ticket {
        self.submissions += 1;
        self.in_flight = Some(self.submissions);
        Ticket(self.submissions)
    }

    /// Record the outcome of a submission. Returns `false` (and leaves the
    /// slot untouched) when the ticket is not the newest one, so a slow
    /// earlier response can never overwrite the state of a later submission.
    pub fn settle(&mut self, ticket: Ticket, outcome: Result<T, ClientError>) -> bool {
        if ticket.0 != self.submissions {
            return false;
        }
        self.in_flight = None;
        self.result = match outcome {
            Ok(value) => RequestState::Resolved(value),
            Err(error) => RequestState::Failed(error),
        };
        true
    }

    /// Current lifecycle phase: pending while the newest submission is
    /// unsettled, otherwise the last terminal state (borrowed).
    pub fn phase(&self) -> RequestState<&T> {
        if self.in_flight.is_some() {
            return RequestState::Pending;
        }
        match &self.result {
            RequestState::Idle => RequestState::Idle,
            RequestState::Pending => RequestState::Pending,
            RequestState::Resolved(value) => RequestState::Resolved(value),
            RequestState::Failed(error) => RequestState::Failed(error.clone()),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The last settled state, still readable while a newer submission is
    /// pending.
    pub fn last_settled(&self) -> &RequestState<T> {
        &self.result
    }
}
