//! 予測API連携
//!
//! 画像を FormData の `image` フィールドで POST し、
//! 応答の解釈は共通ライブラリに任せる。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};
use chili_ai_common::{
    interpret_response, resolve_api_url, PredictError, PredictionResult, IMAGE_FIELD,
};

/// ビルド時の `CHILI_API_URL` があればそれを、なければ既定のエンドポイント
pub fn api_url() -> String {
    resolve_api_url(option_env!("CHILI_API_URL"))
}

/// JS例外からメッセージを取り出す
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_default()
}

/// `image` フィールドにファイル名付きで画像を入れたフォーム
pub fn image_form(file: &File) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(IMAGE_FIELD, file, &file.name())?;
    Ok(form)
}

/// POSTして (ステータス, 本文) を返す
async fn post_image(url: &str, file: &File) -> Result<(u16, String), JsValue> {
    let form = image_form(file)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window tidak tersedia"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

/// 画像1枚を予測（リトライなし）
pub async fn predict(url: &str, file: &File) -> Result<PredictionResult, PredictError> {
    match post_image(url, file).await {
        Ok((status, body)) => {
            log::debug!("HTTP {} ({} bytes)", status, body.len());
            interpret_response(status, &body)
        }
        Err(err) => {
            let message = js_error_message(&err);
            log::warn!("Permintaan ke {} gagal: {}", url, message);
            Err(PredictError::Transport(format!("Gagal terhubung ke API: {}", message)))
        }
    }
}
