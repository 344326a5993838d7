//! 解析結果パネル
//!
//! 読み込み中・エラー・結果・待機のいずれか1つだけを表示する。

use leptos::prelude::*;
use chili_ai_common::{PredictError, PredictionResult, PredictionState};
use crate::components::probability_bars::ProbabilityBars;

#[component]
pub fn ResultPanel(state: Memo<PredictionState>) -> impl IntoView {
    view! {
        <section class="panel result-panel">
            <h2>"2. Hasil Analisis"</h2>
            <div class="result-body">
                {move || match state.get() {
                    PredictionState::Loading => view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            <p>"Menganalisis citra cabai..."</p>
                        </div>
                    }
                    .into_any(),
                    PredictionState::Failed(err) => view! { <ErrorBox error=err /> }.into_any(),
                    PredictionState::Success(result) => {
                        view! { <ResultView result=result /> }.into_any()
                    }
                    PredictionState::Idle => view! {
                        <div class="placeholder">
                            <div class="placeholder-icon">"🌶️"</div>
                            <p>"Hasil prediksi akan muncul di sini."</p>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </section>
    }
}

#[component]
fn ErrorBox(error: PredictError) -> impl IntoView {
    let confidence = match &error {
        PredictError::Classification { confidence, .. } => confidence.clone(),
        _ => None,
    };

    view! {
        <div class="error-box">
            <h3>"❌ Gagal Menganalisis"</h3>
            <p>{error.user_message().to_string()}</p>
            {confidence.map(|c| view! { <p class="text-muted">"Keyakinan tertinggi: "{c}</p> })}
        </div>
    }
}

#[component]
fn ResultView(result: PredictionResult) -> impl IntoView {
    let color = result.freshness().color();
    let moisture = result.moisture().to_string();

    view! {
        <div class="result fade-in">
            <div class=format!("prediction-label text-{}", color)>
                {result.prediction.clone()}
            </div>

            <div class="badges">
                <span class=format!("badge bg-{}", color)>
                    "Keyakinan: "{result.confidence.clone()}
                </span>
                <span class="badge bg-sky-500">"Kadar Air: "{moisture}</span>
            </div>

            <ProbabilityBars probabilities=result.probabilities.clone() />
        </div>
    }
}
