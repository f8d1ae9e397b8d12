//! Planner Session
//!
//! State owned by the agent panel: the last result and the request
//! generation counter. Every submission takes a ticket; only the holder of
//! the newest ticket may write its response back, so a slow early request
//! can never overwrite a later one.

use serde::Serialize;

use crate::plan::{AgentRequest, PlanResult};

/// Proof of which submission a response belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequestTicket {
    generation: u64,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Issues tickets and decides which response is current
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestTracker {
    latest: u64,
    pending: bool,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding any outstanding one
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.pending = true;
        RequestTicket {
            generation: self.latest,
        }
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.generation == self.latest
    }

    /// Mark a response as arrived; `false` means it is stale and must be dropped
    pub fn settle(&mut self, ticket: RequestTicket) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                generation = ticket.generation,
                latest = self.latest,
                "Discarding stale plan response"
            );
            return false;
        }
        self.pending = false;
        true
    }

    /// Whether the newest request is still outstanding
    pub fn in_flight(&self) -> bool {
        self.pending
    }
}

/// A submission ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub ticket: RequestTicket,
    pub body: AgentRequest,
}

/// Result plus request bookkeeping for one page session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlannerSession {
    result: Option<PlanResult>,
    tracker: RequestTracker,
}

impl PlannerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a ticket for the given prompt
    pub fn begin(&mut self, prompt: &str) -> PlanRequest {
        PlanRequest {
            ticket: self.tracker.begin(),
            body: AgentRequest::new(prompt),
        }
    }

    /// Store a response if it is still current; returns whether it was applied
    pub fn complete(&mut self, ticket: RequestTicket, result: PlanResult) -> bool {
        if !self.tracker.settle(ticket) {
            return false;
        }
        self.result = Some(result);
        true
    }

    pub fn result(&self) -> Option<&PlanResult> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.tracker.in_flight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::TripPlan;

    fn summary(text: &str) -> PlanResult {
        PlanResult::Success(TripPlan {
            summary: Some(text.to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_starts_absent() {
        let session = PlannerSession::new();
        assert!(session.result().is_none());
        assert!(!session.is_loading());
    }

    #[test]
    fn test_single_request() {
        let mut session = PlannerSession::new();
        let request = session.begin("Chicago on May 7");
        assert_eq!(request.body.prompt, "Chicago on May 7");
        assert!(session.is_loading());

        assert!(session.complete(request.ticket, summary("Enjoy Chicago!")));
        assert!(!session.is_loading());
        assert_eq!(session.result(), Some(&summary("Enjoy Chicago!")));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut session = PlannerSession::new();
        let first = session.begin("Chicago");
        let second = session.begin("Boston");

        // Newer request resolves first
        assert!(session.complete(second.ticket, summary("Boston plan")));
        // Older one arrives late and must not overwrite it
        assert!(!session.complete(first.ticket, summary("Chicago plan")));

        assert_eq!(session.result(), Some(&summary("Boston plan")));
    }

    #[test]
    fn test_stale_response_while_newer_pending() {
        let mut session = PlannerSession::new();
        let first = session.begin("Chicago");
        let _second = session.begin("Boston");

        assert!(!session.complete(first.ticket, PlanResult::failed()));
        assert!(session.result().is_none());
        assert!(session.is_loading());
    }

    #[test]
    fn test_error_replaces_previous_success() {
        let mut session = PlannerSession::new();
        let first = session.begin("Chicago");
        session.complete(first.ticket, summary("Enjoy Chicago!"));

        let second = session.begin("Chicago again");
        session.complete(second.ticket, PlanResult::failed());

        assert_eq!(session.result(), Some(&PlanResult::failed()));
    }

    #[test]
    fn test_tickets_increase() {
        let mut tracker = RequestTracker::new();
        let a = tracker.begin();
        let b = tracker.begin();
        assert!(b.generation() > a.generation());
        assert!(!tracker.is_current(a));
        assert!(tracker.is_current(b));
    }
}
