//! Single-open collapsible accordion item
//!
//! Items in one group share an `open` signal holding the value of the open
//! item. Clicking the open item's trigger collapses it.

use leptos::prelude::*;

#[component]
pub fn AccordionItem(
    open: RwSignal<Option<&'static str>>,
    value: &'static str,
    title: &'static str,
    #[prop(into)] badge: String,
    children: ChildrenFn,
) -> impl IntoView {
    let is_open = move || open.get() == Some(value);
    let toggle = move |_| {
        open.update(|current| {
            *current = if *current == Some(value) { None } else { Some(value) };
        });
    };

    view! {
        <div class="accordion-item">
            <button
                class="accordion-trigger"
                aria-expanded=move || is_open().to_string()
                on:click=toggle
            >
                <span>{title}</span>
                <span class="badge">{badge}</span>
                <span class="accordion-chevron" class:rotated=is_open>"▾"</span>
            </button>
            {move || is_open().then(|| view! {
                <div class="accordion-content">{children()}</div>
            })}
        </div>
    }
}
