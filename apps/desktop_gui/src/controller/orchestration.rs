//! Command orchestration from UI actions to the worker queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues a command without blocking the UI thread. Returns whether the
/// command was accepted; on failure the status line explains why.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = match &cmd {
        BackendCommand::Predict { .. } => "predict",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->worker command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "Prediction queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "Prediction worker disconnected (possible startup/runtime failure); restart the app"
                    .to_string();
            false
        }
    }
}
