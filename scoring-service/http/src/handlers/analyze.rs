use axum::{
    extract::{multipart::{MultipartError, MultipartRejection}, Multipart, State},
    http::StatusCode,
    response::Json,
};
use scoring_application::{AnalyzeVoiceCommand, AnalyzeVoiceRequest, AnalyzeVoiceResponse};

use crate::error::{error_mapper, HttpError};
use crate::AppState;

pub const AUDIO_FIELD: &str = "audio_file";

pub async fn analyze_voice(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<AnalyzeVoiceResponse>), HttpError> {
    let mut multipart = multipart.map_err(|rejection| HttpError::Validation {
        message: format!("expected a multipart upload: {}", rejection.body_text()),
    })?;
    let request = read_audio_upload(&mut multipart).await?;
    tracing::info!(
        upload_bytes = request.audio.len(),
        file_name = request.file_name.as_deref().unwrap_or("unnamed"),
        "received analyze-voice request"
    );

    let command = AnalyzeVoiceCommand::new(request);
    match state.command_service.analyze_voice(command).await {
        Ok(result) => {
            tracing::info!(
                score = result.score,
                transcript_chars = result.transcript.chars().count(),
                "analyze-voice request completed"
            );
            Ok((StatusCode::OK, Json(result)))
        }
        Err(error) => {
            tracing::error!(error = %error, code = error.code(), "analyze-voice request failed");
            Err(error_mapper(error))
        }
    }
}

async fn read_audio_upload(multipart: &mut Multipart) -> Result<AnalyzeVoiceRequest, HttpError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let audio = field.bytes().await.map_err(multipart_error)?.to_vec();
        return Ok(AnalyzeVoiceRequest { file_name, audio });
    }

    Err(HttpError::Validation {
        message: format!("missing multipart field `{AUDIO_FIELD}`"),
    })
}

fn multipart_error(error: MultipartError) -> HttpError {
    let message = format!("invalid multipart upload: {}", error.body_text());
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        HttpError::PayloadTooLarge { message }
    } else {
        HttpError::Validation { message }
    }
}
