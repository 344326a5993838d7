//! 確率バーコンポーネント

use leptos::prelude::*;
use chili_ai_common::{bar_width, color_for, sorted_probabilities, ClassProbability};

#[component]
pub fn ProbabilityBars(probabilities: Vec<ClassProbability>) -> impl IntoView {
    // 比較は数値、表示は元の文字列
    let rows: Vec<ClassProbability> = sorted_probabilities(&probabilities)
        .into_iter()
        .cloned()
        .collect();

    view! {
        <div class="probabilities">
            <h4>"Detail Probabilitas:"</h4>
            {rows
                .into_iter()
                .map(|prob| {
                    let color = color_for(&prob.kelas);
                    view! {
                        <div class="probability-row">
                            <div class="probability-label">
                                <span>{prob.kelas.clone()}</span>
                                <span class=format!("probability-value text-{}", color)>
                                    {format!("{}%", prob.persentase)}
                                </span>
                            </div>
                            <div class="progress-bar">
                                <div
                                    class=format!("progress-fill bg-{}", color)
                                    style=format!("width: {}%", bar_width(&prob.persentase))
                                />
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
