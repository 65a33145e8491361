//! Commands queued from UI to the prediction worker.

use std::path::PathBuf;

pub enum BackendCommand {
    Predict { path: PathBuf },
}
