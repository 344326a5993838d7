//! アップロードエリアコンポーネント
//!
//! ファイル入力は常にDOMに置き、自分のNodeRefでリセットする。

use leptos::html::Input;
use leptos::prelude::*;
use web_sys::{File, HtmlInputElement, MouseEvent};

const INPUT_ID: &str = "file-upload";

#[component]
pub fn UploadArea<FS, FR>(
    preview: Memo<Option<String>>,
    on_file_selected: FS,
    on_reset: FR,
) -> impl IntoView
where
    FS: Fn(File) + 'static + Clone + Send + Sync,
    FR: Fn(()) + 'static + Clone + Send + Sync,
{
    let input_ref = NodeRef::<Input>::new();

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file_selected(file);
        }
    };

    // 同じファイルを選び直せるよう input の値も消す
    let reset = move |_: MouseEvent| {
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
        on_reset(());
    };

    view! {
        <section class="panel upload-panel">
            <h2>"1. Unggah Gambar"</h2>
            <input
                type="file"
                id=INPUT_ID
                class="hidden"
                accept="image/*"
                node_ref=input_ref
                on:change=on_change
            />
            <Show
                when=move || preview.with(|p| p.is_some())
                fallback=|| view! {
                    <label for=INPUT_ID class="upload-area">
                        <div class="upload-icon">"📷"</div>
                        <span>"Klik untuk memilih file"</span>
                    </label>
                }
            >
                <div class="preview">
                    <img src=move || preview.get().unwrap_or_default() alt="Preview" />
                    <button class="btn btn-secondary" on:click=reset.clone()>
                        "Pilih Gambar Lain"
                    </button>
                </div>
            </Show>
        </section>
    }
}
