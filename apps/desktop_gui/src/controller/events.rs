//! Events delivered from the prediction worker back to the UI thread.

use shared::protocol::Prediction;

pub enum UiEvent {
    /// The service answered with a decoded prediction.
    PredictionReady(Prediction),
    /// The attempt failed; carries the single human-readable line to show.
    PredictionFailed(String),
    /// The worker itself could not start. Independent of any submission.
    WorkerUnavailable(String),
}
