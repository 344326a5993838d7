//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;
use chili_ai_common::ClassifierSession;
use crate::api;
use crate::components::{
    care_tips::CareTipsPanel,
    header::Header,
    history_panel::HistoryPanel,
    modal::Modal,
    result_panel::ResultPanel,
    upload_area::UploadArea,
};
use crate::storage::BrowserStore;

/// アプリケーションの状態
pub type Session = ClassifierSession<BrowserStore>;

/// 選択されたファイルのプレビューと予測を並行して始める
fn start_prediction(session: RwSignal<Session>, file: File) {
    let Some(ticket) = session.try_update(|s| s.begin_request(file.name())) else {
        return;
    };

    let preview_file = gloo::file::File::from(file.clone());
    spawn_local(async move {
        match gloo::file::futures::read_as_data_url(&preview_file).await {
            Ok(data_url) => session.update(|s| {
                s.set_preview(ticket, data_url);
            }),
            Err(e) => log::warn!("Gagal membaca pratinjau: {}", e),
        }
    });

    spawn_local(async move {
        let url = api::api_url();
        let outcome = api::predict(&url, &file).await;
        session.update(|s| {
            s.complete(ticket, outcome);
        });
    });
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(Session::new(BrowserStore));
    log::info!("Endpoint prediksi: {}", api::api_url());

    let state = Memo::new(move |_| session.with(|s| s.state().clone()));
    let preview = Memo::new(move |_| session.with(|s| s.preview().map(str::to_string)));
    let care_tips = Memo::new(move |_| session.with(|s| s.care_tips()));
    let history = Memo::new(move |_| session.with(|s| s.history().clone()));

    let (how_to_open, set_how_to_open) = signal(false);
    let (about_open, set_about_open) = signal(false);

    let on_file_selected = move |file: File| start_prediction(session, file);
    let on_reset = move |_: ()| session.update(|s| s.reset());

    view! {
        <div class="app">
            <Header
                on_how_to=move |_: ()| set_how_to_open.set(true)
                on_about=move |_: ()| set_about_open.set(true)
            />

            <main class="container">
                <div class="grid">
                    <UploadArea
                        preview=preview
                        on_file_selected=on_file_selected
                        on_reset=on_reset
                    />
                    <ResultPanel state=state />
                </div>

                <CareTipsPanel tips=care_tips />
                <HistoryPanel history=history />
            </main>

            <footer class="footer">"Dibuat dengan Sepenuh Hati :p"</footer>

            <Modal
                open=how_to_open
                title="Cara Penggunaan"
                on_close=move |_: ()| set_how_to_open.set(false)
            >
                <ol class="steps">
                    <li>"Klik tombol \"Pilih File\" atau area unggah untuk memilih gambar cabai dari perangkat Anda."</li>
                    <li>"Aplikasi akan secara otomatis memulai proses analisis setelah gambar dipilih."</li>
                    <li>"Hasil analisis, tingkat keyakinan, dan detail probabilitas akan muncul di panel kanan."</li>
                    <li>"Di bawah hasil, Anda akan mendapatkan saran perawatan yang sesuai dengan kondisi cabai."</li>
                    <li>"Untuk menganalisis gambar lain, klik tombol \"Pilih Gambar Lain\"."</li>
                </ol>
            </Modal>

            <Modal
                open=about_open
                title="Tentang Aplikasi"
                on_close=move |_: ()| set_about_open.set(false)
            >
                <p>
                    "Aplikasi ini adalah sebuah sistem cerdas yang memanfaatkan teknologi Machine Learning "
                    "untuk mengklasifikasikan tingkat kekeringan cabai berdasarkan citra digital. "
                    "Tujuannya adalah untuk membantu petani dan pedagang dalam mengidentifikasi "
                    "kualitas cabai secara cepat dan akurat."
                </p>
            </Modal>
        </div>
    }
}
