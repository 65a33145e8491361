//! The request lifecycle owned by the UI half of the submission flow.

use shared::protocol::Prediction;

/// Single source of truth for the submission cycle. Exactly one variant is
/// active at a time, so the renderer can never observe a half-updated
/// loading/error/result combination.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestLifecycle {
    Idle,
    Loading,
    Succeeded(Prediction),
    Failed(String),
}

impl RequestLifecycle {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestLifecycle::Loading)
    }

    /// Enters `Loading`, discarding any previous outcome. Refused while a
    /// request is already in flight, which keeps at most one outstanding
    /// submission.
    pub fn begin_submission(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = RequestLifecycle::Loading;
        true
    }

    /// Resolves the in-flight request. Terminal events arriving with no
    /// request in flight are dropped.
    pub fn complete(&mut self, outcome: Result<Prediction, String>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match outcome {
            Ok(prediction) => RequestLifecycle::Succeeded(prediction),
            Err(message) => RequestLifecycle::Failed(message),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::Verdict;
    use shared::protocol::RubricScores;

    fn prediction(verdict: Verdict) -> Prediction {
        Prediction {
            verdict,
            feedback: Vec::new(),
            scores: RubricScores::default(),
        }
    }

    #[test]
    fn submission_starts_from_any_settled_state() {
        let mut lifecycle = RequestLifecycle::Idle;
        assert!(lifecycle.begin_submission());
        assert!(lifecycle.is_loading());

        let mut lifecycle = RequestLifecycle::Succeeded(prediction(Verdict::Accepted));
        assert!(lifecycle.begin_submission());
        assert!(lifecycle.is_loading());

        let mut lifecycle = RequestLifecycle::Failed("network down".to_string());
        assert!(lifecycle.begin_submission());
        assert!(lifecycle.is_loading());
    }

    #[test]
    fn submission_is_refused_while_one_is_in_flight() {
        let mut lifecycle = RequestLifecycle::Loading;
        assert!(!lifecycle.begin_submission());
        assert!(lifecycle.is_loading());
    }

    #[test]
    fn terminal_events_settle_loading_exactly_once() {
        let mut lifecycle = RequestLifecycle::Loading;
        assert!(lifecycle.complete(Ok(prediction(Verdict::Rejected))));
        assert_eq!(
            lifecycle,
            RequestLifecycle::Succeeded(prediction(Verdict::Rejected))
        );

        let mut lifecycle = RequestLifecycle::Loading;
        assert!(lifecycle.complete(Err("network down".to_string())));
        assert_eq!(lifecycle, RequestLifecycle::Failed("network down".to_string()));
        assert!(!lifecycle.is_loading());
    }

    #[test]
    fn stale_terminal_events_are_dropped() {
        let mut lifecycle = RequestLifecycle::Idle;
        assert!(!lifecycle.complete(Err("late arrival".to_string())));
        assert_eq!(lifecycle, RequestLifecycle::Idle);

        let mut lifecycle = RequestLifecycle::Failed("first".to_string());
        assert!(!lifecycle.complete(Ok(prediction(Verdict::Accepted))));
        assert_eq!(lifecycle, RequestLifecycle::Failed("first".to_string()));
    }
}
