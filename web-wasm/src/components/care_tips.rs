//! ケアのヒント

use leptos::prelude::*;
use chili_ai_common::CareTips;

#[component]
pub fn CareTipsPanel(tips: Memo<Option<CareTips>>) -> impl IntoView {
    move || {
        tips.get().map(|tips| {
            view! {
                <section class="panel care-tips">
                    <h2>{tips.title}</h2>
                    <ul>
                        {tips.tips.iter().map(|tip| view! { <li>{*tip}</li> }).collect_view()}
                    </ul>
                </section>
            }
        })
    }
}
