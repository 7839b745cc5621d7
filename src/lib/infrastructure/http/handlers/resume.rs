//! Resume download handler

use std::path::{Path, PathBuf};

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::infrastructure::http::errors::{ApiError, ErrorResponse};

/// Filename offered to the browser for the download
const DOWNLOAD_FILENAME: &str = "resume.pdf";

/// Candidate locations for the resume, tried in order
fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = vec![
        PathBuf::from("public/resume.pdf"),
        PathBuf::from("server/public/resume.pdf"),
    ];

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|path| path.parent().map(Path::to_path_buf))
    {
        candidates.push(exe_dir.join("public/resume.pdf"));
    }

    candidates
}

/// The first candidate that exists on disk
fn find_resume(candidates: &[PathBuf]) -> Option<&PathBuf> {
    candidates.iter().find(|path| path.exists())
}

/// Download the resume as a PDF attachment
#[utoipa::path(
    get,
    operation_id = "resume",
    tag = "System",
    path = "/api/resume",
    responses(
        (status = StatusCode::OK, description = "The resume PDF"),
        (status = StatusCode::NOT_FOUND, description = "Resume file not found", body = ErrorResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Failed to read the resume", body = ErrorResponse),
    )
)]
pub async fn handler() -> Result<Response, ApiError> {
    let candidates = candidate_paths();

    let Some(path) = find_resume(&candidates) else {
        error!("resume file not found in any candidate path: {candidates:?}");
        return Err(ApiError::new_404("Resume file not found"));
    };

    let contents = tokio::fs::read(path).await.map_err(|err| {
        error!("failed to read resume at {}: {err}", path.display());
        ApiError::new_500("Failed to download resume")
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DOWNLOAD_FILENAME}\""),
            ),
        ],
        contents,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use testresult::TestResult;

    use crate::infrastructure::http::{errors::ErrorResponse, router, state::test_state};

    use super::*;

    #[test]
    fn test_find_resume_returns_none_when_nothing_exists() {
        let candidates = vec![PathBuf::from("does/not/exist/resume.pdf")];

        assert!(find_resume(&candidates).is_none());
    }

    #[test]
    fn test_find_resume_picks_the_first_existing_candidate() -> TestResult {
        let existing = std::env::temp_dir().join(format!("resume-{}.pdf", std::process::id()));
        std::fs::write(&existing, b"%PDF-1.4")?;

        let candidates = vec![PathBuf::from("does/not/exist/resume.pdf"), existing.clone()];

        assert_eq!(find_resume(&candidates), Some(&existing));

        std::fs::remove_file(&existing)?;

        Ok(())
    }

    #[tokio::test]
    async fn test_resume_not_found() -> TestResult {
        let response = TestServer::new(router(test_state(None)))?
            .get("/api/resume")
            .await;

        let json = response.json::<ErrorResponse>();

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(json.message, "Resume file not found");

        Ok(())
    }
}
