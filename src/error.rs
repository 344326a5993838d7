use chili_ai_common::PredictError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChiliAiError {
    #[error("Kesalahan konfigurasi: {0}")]
    Config(String),

    #[error("File tidak ditemukan: {0}")]
    FileNotFound(String),

    #[error("Bukan file gambar: {0}")]
    NotAnImage(String),

    #[error("Gagal Menganalisis: {}", .0.user_message())]
    Predict(#[from] PredictError),

    #[error("Kesalahan HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Kesalahan JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Kesalahan IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Kesalahan input: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Common(#[from] chili_ai_common::Error),
}

pub type Result<T> = std::result::Result<T, ChiliAiError>;
