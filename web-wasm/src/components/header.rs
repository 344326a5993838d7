//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header<FH, FA>(on_how_to: FH, on_about: FA) -> impl IntoView
where
    FH: Fn(()) + 'static + Clone + Send + Sync,
    FA: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <header class="header">
            <div class="header-inner">
                <div class="brand">
                    <img src="/logo-cabai.png" alt="Logo Cabai" class="logo" />
                    <h1>"Klasifikasi Cabai"</h1>
                </div>
                <nav class="header-nav">
                    <button class="nav-link" on:click=move |_| on_how_to(())>
                        "Cara Penggunaan"
                    </button>
                    <button class="nav-link" on:click=move |_| on_about(())>
                        "Tentang"
                    </button>
                </nav>
            </div>
        </header>
    }
}
