//! モーダル（閉じるのは×ボタンのみ）

use leptos::prelude::*;

#[component]
pub fn Modal<F>(
    open: ReadSignal<bool>,
    #[prop(into)] title: String,
    on_close: F,
    children: ChildrenFn,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <h2>{title.clone()}</h2>
                        <button
                            class="modal-close"
                            aria-label="Tutup"
                            on:click={
                                let on_close = on_close.clone();
                                move |_| on_close(())
                            }
                        >
                            "×"
                        </button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
