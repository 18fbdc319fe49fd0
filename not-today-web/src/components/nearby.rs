//! Nearby Space Objects accordion

use leptos::prelude::*;
use shared::catalog::NEARBY_OBJECTS;

use crate::components::AccordionItem;

#[component]
pub fn NearbyObjects() -> impl IntoView {
    let open = RwSignal::new(None::<&'static str>);

    view! {
        <div class="panel">
            <h2 class="section-title">"Nearby Space Objects"</h2>
            <div class="accordion">
                {NEARBY_OBJECTS.iter().map(|object| view! {
                    <AccordionItem
                        open=open
                        value=object.name
                        title=object.name
                        badge=object.distance
                    >
                        <p class="accordion-text">{object.description}</p>
                    </AccordionItem>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
