//! 履歴パネル

use leptos::prelude::*;
use chili_ai_common::HistoryList;

#[component]
pub fn HistoryPanel(history: Memo<HistoryList>) -> impl IntoView {
    view! {
        <Show when=move || !history.with(|h| h.is_empty())>
            <section class="panel history">
                <h2>"Riwayat Analisis Terakhir"</h2>
                <div class="history-grid">
                    {move || {
                        history
                            .get()
                            .iter()
                            .map(|item| {
                                let color = item.freshness().color();
                                view! {
                                    <div class=format!("history-card border-{}", color)>
                                        <h3 class=format!("text-{}", color)>
                                            {item.prediction.clone()}
                                        </h3>
                                        <p>
                                            "Keyakinan: "
                                            <span class="value">{item.confidence.clone()}</span>
                                        </p>
                                        <p>
                                            "Kadar Air: "
                                            <span class="value">{item.moisture().to_string()}</span>
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        </Show>
    }
}
