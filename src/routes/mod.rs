use axum::http::StatusCode;

pub mod analytics;
pub mod feedback;
pub mod health;

// Common error mappers
pub fn internal_error<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    tracing::error!(error = %e, "request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, format!("internal error: {e}"))
}

pub fn bad_request(msg: impl Into<String>) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, msg.into())
}

/// Rejects blank ids before they reach the store.
pub fn interview_id(raw: String) -> Result<String, (StatusCode, String)> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(bad_request("interview id must not be blank"));
    }
    Ok(id.to_string())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_ids_are_rejected() {
        let (status, _) = interview_id("   ".into()).unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(interview_id(" mock-7 ".into()).unwrap(), "mock-7");
    }

    #[test]
    fn internal_error_keeps_message() {
        let (status, body) = internal_error("boom");
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "internal error: boom");
    }
}
