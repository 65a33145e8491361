//! The current upload selection and the media-type gate in front of it.

use std::path::{Path, PathBuf};

use shared::domain::PDF_MEDIA_TYPE;

/// The candidate file currently awaiting submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperSelection {
    path: PathBuf,
    display_name: String,
}

impl PaperSelection {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// Accepts `candidate` only when its declared media type is PDF, replacing
/// any prior selection wholesale. Anything else leaves the current selection
/// untouched, with no error surfaced.
pub fn select_candidate(current: &mut Option<PaperSelection>, candidate: &Path) {
    if mime_guess::from_path(candidate).first_raw() != Some(PDF_MEDIA_TYPE) {
        tracing::debug!(candidate = %candidate.display(), "ignoring non-PDF candidate");
        return;
    }
    let display_name = candidate
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("paper.pdf")
        .to_string();
    *current = Some(PaperSelection {
        path: candidate.to_path_buf(),
        display_name,
    });
}
