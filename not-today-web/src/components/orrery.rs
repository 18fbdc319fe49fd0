//! Embedded solar system orrery (external page)

use leptos::prelude::*;

use crate::utils::constants::ORRERY_URL;

#[component]
pub fn Orrery() -> impl IntoView {
    view! {
        <div class="panel orrery">
            <h2 class="section-title">"Solar System Orrery"</h2>
            <div class="orrery-frame">
                <iframe src=ORRERY_URL class="frame" aria-label="Detailed solar system orrery"></iframe>
            </div>
            <p class="fine-print muted">
                "Note: In the future, you'll be able to select asteroids here to view details in the Nearby Objects section."
            </p>
        </div>
    }
}
