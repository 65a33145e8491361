use serde::{Deserialize, Serialize};

/// Media type accepted at the upload boundary; everything else is ignored.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Binary outcome classification returned by the prediction service.
///
/// The wire value `"ACCEPTED"` means accepted; any other string counts as
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl Verdict {
    pub fn is_accepted(self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl From<String> for Verdict {
    fn from(value: String) -> Self {
        if value == "ACCEPTED" {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }
}

impl From<Verdict> for String {
    fn from(value: Verdict) -> Self {
        match value {
            Verdict::Accepted => "ACCEPTED".to_string(),
            Verdict::Rejected => "REJECTED".to_string(),
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "Accepted"),
            Verdict::Rejected => write!(f, "Rejected"),
        }
    }
}
