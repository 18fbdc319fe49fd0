use leptos::prelude::*;

#[component]
pub fn DailyUpdate() -> impl IntoView {
    view! {
        <div class="panel">
            <div class="panel-inner">
                <h2 class="section-title">"Daily Update"</h2>
                <p class="all-clear">"No world-ending meteors today! 🎉"</p>
                <h3 class="subsection-title">"Fun Fact"</h3>
                <p class="fine-print">
                    "The asteroid belt between Mars and Jupiter contains millions of asteroids, but they're so spread out that spacecraft can usually pass through safely!"
                </p>
            </div>
        </div>
    }
}
