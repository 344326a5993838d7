//! 予測APIクライアント
//!
//! 画像を multipart の `image` フィールドで POST し、
//! 応答の解釈は共通ライブラリの `interpret_response` に任せる。

use crate::error::{ChiliAiError, Result};
use chili_ai_common::{interpret_response, PredictError, PredictionResult, IMAGE_FIELD};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::Duration;

/// アップロードする画像
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// ファイルを読み込み、MIMEタイプを判定
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ChiliAiError::FileNotFound(path.display().to_string()));
        }

        let bytes = std::fs::read(path)?;
        let mime_type = detect_mime_type(path, &bytes)
            .ok_or_else(|| ChiliAiError::NotAnImage(path.display().to_string()))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());

        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }
}

/// 画像のMIMEタイプを判定（中身を優先し、だめなら拡張子）
pub fn detect_mime_type(path: &Path, bytes: &[u8]) -> Option<String> {
    if let Ok(format) = image::guess_format(bytes) {
        return Some(format.to_mime_type().to_string());
    }

    let ext = path.extension()?.to_string_lossy().to_lowercase();
    let mime = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        _ => return None,
    };
    Some(mime.to_string())
}

pub struct PredictClient {
    http: reqwest::Client,
    url: String,
}

impl PredictClient {
    pub fn new(url: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds.max(1)))
            .build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// 1回だけ送信する（リトライなし）
    pub async fn predict(
        &self,
        upload: &ImageUpload,
    ) -> std::result::Result<PredictionResult, PredictError> {
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.mime_type)
            .map_err(|e| PredictError::Transport(e.to_string()))?;
        let form = Form::new().part(IMAGE_FIELD, part);

        log::debug!("POST {} ({}, {} bytes)", self.url, upload.file_name, upload.bytes.len());

        let response = self
            .http
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| PredictError::Transport(format!("Gagal terhubung ke API: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| PredictError::Transport(e.to_string()))?;

        log::debug!("HTTP {} ({} bytes)", status, body.len());
        interpret_response(status, &body)
    }
}
