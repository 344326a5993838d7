//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// サーバーが何も返さなかった場合の既定メッセージ
pub const SERVER_FALLBACK_MESSAGE: &str = "Terjadi kesalahan pada server.";
/// 判定失敗（"Gagal"）でメッセージが無い場合の既定メッセージ
pub const CLASSIFICATION_FALLBACK_MESSAGE: &str = "Gambar tidak teridentifikasi sebagai cabai.";
/// 接続失敗時の既定メッセージ
pub const TRANSPORT_FALLBACK_MESSAGE: &str = "Gagal terhubung ke API.";

/// 予測リクエストの失敗
///
/// - Classification: APIが画像を唐辛子と認識できなかった（障害ではない）
/// - Server: 2xx以外のHTTPステータス
/// - Transport: 接続不可・JSON不正など
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    #[error("{message}")]
    Classification {
        message: String,
        /// サーバーが付けてくる最上位クラスの確信度（任意）
        confidence: Option<String>,
    },

    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("{0}")]
    Transport(String),
}

impl PredictError {
    /// 画面に表示するメッセージ
    pub fn user_message(&self) -> &str {
        match self {
            PredictError::Classification { message, .. } => message,
            PredictError::Server { message, .. } => message,
            PredictError::Transport(message) if message.trim().is_empty() => {
                TRANSPORT_FALLBACK_MESSAGE
            }
            PredictError::Transport(message) => message,
        }
    }

    pub fn is_classification(&self) -> bool {
        matches!(self, PredictError::Classification { .. })
    }
}
