//! POST /analyze — multipart upload in, ATS report text out.

use anyhow::Context;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

use crate::analysis::{analyze, is_present};
use crate::errors::AppError;
use crate::extract::extract_text;
use crate::state::AppState;

const FILE_FIELD: &str = "file";
const JOB_DESCRIPTION_FIELD: &str = "job_description";

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub result: String,
}

/// The fields of interest from one upload.
#[derive(Debug, Default)]
struct AnalyzeUpload {
    file: Option<Bytes>,
    job_description: Option<String>,
}

/// POST /analyze
///
/// Fields: `file` (PDF bytes, required), `job_description` (text, optional).
/// A request that is not multipart at all is answered like a missing file.
pub async fn analyze_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let multipart = multipart.map_err(|e| {
        debug!("Rejected non-multipart upload: {e}");
        AppError::NoFile
    })?;

    let upload = read_upload(multipart).await?;
    let file = upload.file.ok_or(AppError::NoFile)?;

    let span = info_span!(
        "analyze",
        request_id = %Uuid::new_v4(),
        upload_bytes = file.len(),
        with_job_description = is_present(upload.job_description.as_deref()),
    );

    async move {
        let resume_text = tokio::task::spawn_blocking(move || extract_text(&file))
            .await
            .context("text extraction task failed")??;
        info!("Extracted {} chars of resume text", resume_text.len());

        let result = analyze(
            state.model.as_ref(),
            &resume_text,
            upload.job_description.as_deref(),
        )
        .await?;

        Ok::<_, AppError>(Json(AnalyzeResponse { result }))
    }
    .instrument(span)
    .await
}

async fn read_upload(mut multipart: Multipart) -> Result<AnalyzeUpload, AppError> {
    let mut upload = AnalyzeUpload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(e.to_string()))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            // Only parts carrying a filename are uploads; first file wins.
            Some(FILE_FIELD) if upload.file.is_none() && field.file_name().is_some() => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Upload(e.to_string()))?;
                upload.file = Some(data);
            }
            Some(JOB_DESCRIPTION_FIELD) if upload.job_description.is_none() => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Upload(e.to_string()))?;
                upload.job_description = Some(text);
            }
            _ => {}
        }
    }

    Ok(upload)
}
