//! Text shown in the shared-content container for a fetch outcome.

use crate::error::ContentError;
use crate::settings::SHARED_CONTENT_ERROR_PREFIX;

/// Map an HTTP status to the loader's outcome: only 2xx counts as success.
pub fn check_status(status: u16) -> Result<(), ContentError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ContentError::Status(status))
    }
}

/// Inline message for a failed load.
pub fn error_text(err: &ContentError) -> String {
    format!("{SHARED_CONTENT_ERROR_PREFIX}{err}")
}

/// Container text for a finished load: the raw body, or the error message.
pub fn container_text(outcome: &Result<String, ContentError>) -> String {
    match outcome {
        Ok(text) => text.clone(),
        Err(err) => error_text(err),
    }
}
