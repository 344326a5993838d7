//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use chili_ai_common::PredictError;
use chili_ai_rust::client::ImageUpload;
use chili_ai_rust::error::ChiliAiError;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルを指定した場合
#[test]
fn test_upload_nonexistent_file() {
    let result = ImageUpload::from_path(Path::new("/nonexistent/path/cabai.jpg"));
    assert!(matches!(result, Err(ChiliAiError::FileNotFound(_))));
}

/// ディレクトリを指定した場合
#[test]
fn test_upload_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = ImageUpload::from_path(dir.path());
    assert!(matches!(result, Err(ChiliAiError::FileNotFound(_))));
}

/// 画像でないファイルを指定した場合
#[test]
fn test_upload_text_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catatan.txt");
    std::fs::write(&path, "hello").unwrap();

    let result = ImageUpload::from_path(&path);
    assert!(matches!(result, Err(ChiliAiError::NotAnImage(_))));
}

/// ChiliAiErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        ChiliAiError::Config("テスト設定エラー".to_string()),
        ChiliAiError::FileNotFound("cabai.jpg".to_string()),
        ChiliAiError::NotAnImage("catatan.txt".to_string()),
        ChiliAiError::Predict(PredictError::Transport(String::new())),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 予測エラーは画面と同じメッセージを出す
#[test]
fn test_predict_error_message() {
    let err: ChiliAiError = PredictError::Classification {
        message: "Bukan gambar cabai".to_string(),
        confidence: None,
    }
    .into();
    assert_eq!(format!("{}", err), "Gagal Menganalisis: Bukan gambar cabai");

    let err: ChiliAiError = PredictError::Transport(String::new()).into();
    assert_eq!(format!("{}", err), "Gagal Menganalisis: Gagal terhubung ke API.");
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: ChiliAiError = io_err.into();

    assert!(matches!(err, ChiliAiError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: ChiliAiError = json_err.into();

    assert!(matches!(err, ChiliAiError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = chili_ai_common::Error::Storage("disk penuh".to_string());
    let err: ChiliAiError = common_err.into();

    assert!(matches!(err, ChiliAiError::Common(_)));
    assert_eq!(format!("{}", err), "Storage error: disk penuh");
}
