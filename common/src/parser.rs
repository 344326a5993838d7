//! APIレスポンスパーサー
//!
//! HTTPステータスと本文から予測結果またはエラーを決める。
//!
//! 判定順:
//! 1. 2xx以外 → 本文の `error`（なければ既定メッセージ）
//! 2. 2xxで `status == "Gagal"` → 判定失敗（本文の `message`）
//! 3. それ以外 → `PredictionResult` としてデコード

use serde::Deserialize;

use crate::error::{
    PredictError, CLASSIFICATION_FALLBACK_MESSAGE, SERVER_FALLBACK_MESSAGE,
};
use crate::types::PredictionResult;

/// APIが判定失敗を示すときの `status` 値
pub const FAILURE_STATUS: &str = "Gagal";

/// 成功/失敗を判定するための最小限のエンベロープ
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Envelope {
    status: Option<String>,
    message: Option<String>,
    error: Option<String>,
    confidence: Option<String>,
}

/// レスポンスを解釈
///
/// # Arguments
/// * `http_status` - HTTPステータスコード
/// * `body` - レスポンス本文（JSON想定）
///
/// # Examples
/// ```
/// use chili_ai_common::{interpret_response, PredictError};
///
/// let body = r#"{"status": "Gagal", "message": "Bukan gambar cabai"}"#;
/// let err = interpret_response(200, body).unwrap_err();
/// assert_eq!(err.user_message(), "Bukan gambar cabai");
/// ```
pub fn interpret_response(
    http_status: u16,
    body: &str,
) -> std::result::Result<PredictionResult, PredictError> {
    let envelope: Option<Envelope> = serde_json::from_str(body).ok();

    if !(200..300).contains(&http_status) {
        let message = envelope
            .and_then(|e| e.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| SERVER_FALLBACK_MESSAGE.to_string());
        return Err(PredictError::Server {
            status: http_status,
            message,
        });
    }

    if let Some(envelope) = envelope {
        if envelope.status.as_deref() == Some(FAILURE_STATUS) {
            let message = envelope
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| CLASSIFICATION_FALLBACK_MESSAGE.to_string());
            return Err(PredictError::Classification {
                message,
                confidence: envelope.confidence,
            });
        }
    }

    serde_json::from_str::<PredictionResult>(body)
        .map_err(|e| PredictError::Transport(format!("Respons API tidak valid: {}", e)))
}
