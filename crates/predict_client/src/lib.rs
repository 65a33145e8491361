use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use shared::{domain::PDF_MEDIA_TYPE, protocol::Prediction};
use thiserror::Error;
use tracing::{debug, info};

/// A paper staged for submission: display name plus raw bytes.
#[derive(Debug, Clone)]
pub struct PaperUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum PredictError {
    /// The service answered with a non-success status. The body is not read
    /// for detail, so the message stays generic.
    #[error("Server error while predicting.")]
    Status(StatusCode),
    /// No response was received (connectivity failure, refused connection,
    /// or the request could not be built).
    #[error("{0}")]
    Transport(reqwest::Error),
    /// The response arrived but its body was not a valid prediction document.
    #[error("{0}")]
    Decode(reqwest::Error),
}

/// Async client for the acceptance prediction service.
///
/// One `predict` call issues exactly one request; there is no retry and no
/// timeout beyond what the transport itself imposes.
pub struct PredictClient {
    http: Client,
    base_url: String,
}

impl PredictClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submits the paper as a single multipart field named `pdf` and decodes
    /// the verdict document from a success response.
    pub async fn predict(&self, upload: PaperUpload) -> Result<Prediction, PredictError> {
        let filename = upload.filename.clone();
        debug!(filename = %filename, size_bytes = upload.bytes.len(), "submitting paper");

        let part = Part::bytes(upload.bytes)
            .file_name(upload.filename)
            .mime_str(PDF_MEDIA_TYPE)
            .map_err(PredictError::Transport)?;
        let form = Form::new().part("pdf", part);

        let response = self
            .http
            .post(format!("{}/predict", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(PredictError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::Status(status));
        }

        let prediction = response
            .json::<Prediction>()
            .await
            .map_err(PredictError::Decode)?;
        info!(
            filename = %filename,
            verdict = %prediction.verdict,
            feedback_lines = prediction.feedback.len(),
            "prediction received"
        );
        Ok(prediction)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
