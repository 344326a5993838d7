//! Klasifikasi Cabai Web App (Leptos + WASM)

mod app;
pub mod components;
pub mod api;
pub mod storage;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // 二重初期化のエラーは無視
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
