//! Worker thread that drives prediction requests against the remote service.

use std::path::Path;
use std::thread;

use crossbeam_channel::{Receiver, Sender};
use predict_client::{PaperUpload, PredictClient};
use shared::protocol::Prediction;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Shown when a failure carries no message of its own.
const FALLBACK_FAILURE_MESSAGE: &str = "Something went wrong.";

/// Spawns the worker thread: a tokio runtime draining the command queue and
/// answering each submission with exactly one terminal event.
pub fn launch(server_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::WorkerUnavailable(format!(
                    "Prediction worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build prediction worker runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = PredictClient::new(server_url);
            tracing::info!(server_url = client.base_url(), "prediction worker ready");

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Predict { path } => {
                        tracing::info!(path = %path.display(), "worker: predict");
                        let event = match run_prediction(&client, &path).await {
                            Ok(prediction) => UiEvent::PredictionReady(prediction),
                            Err(message) => {
                                tracing::error!("worker: predict failed: {message}");
                                UiEvent::PredictionFailed(message)
                            }
                        };
                        let _ = ui_tx.try_send(event);
                    }
                }
            }
        });
    });
}

async fn run_prediction(client: &PredictClient, path: &Path) -> Result<Prediction, String> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("paper.pdf")
        .to_string();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| failure_message(&err))?;
    client
        .predict(PaperUpload { filename, bytes })
        .await
        .map_err(|err| failure_message(&err))
}

fn failure_message(err: &dyn std::error::Error) -> String {
    let message = err.to_string();
    if message.is_empty() {
        FALLBACK_FAILURE_MESSAGE.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct BlankError;

    impl std::fmt::Display for BlankError {
        fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            Ok(())
        }
    }

    impl std::error::Error for BlankError {}

    #[test]
    fn messageless_failures_fall_back_to_generic_line() {
        assert_eq!(failure_message(&BlankError), "Something went wrong.");
    }

    #[test]
    fn failures_keep_their_own_message() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "network down");
        assert_eq!(failure_message(&err), "network down");
    }
}
