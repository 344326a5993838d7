//! APIエンドポイントの設定

/// 既定の予測エンドポイント
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/predict";

/// エンドポイントを上書きする環境変数
pub const API_URL_ENV: &str = "CHILI_API_URL";

/// multipartのフィールド名
pub const IMAGE_FIELD: &str = "image";

/// 上書き値（空白のみは無視）があればそれを、なければ既定値を返す
pub fn resolve_api_url(override_url: Option<&str>) -> String {
    override_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}
