//! Site header with logo and live clock

use leptos::prelude::*;

use crate::state::session::use_session_context;
use crate::utils::constants::{APP_TITLE, LOGO_URL};

#[component]
pub fn SiteHeader(#[prop(default = "site-header")] class: &'static str) -> impl IntoView {
    let ctx = use_session_context();

    view! {
        <header class=class>
            <div class="site-header-inner">
                <div class="brand">
                    <img src=LOGO_URL alt="NOT TODAY logo" class="brand-logo"/>
                    <h1 class="brand-title">{APP_TITLE}</h1>
                </div>
                <span class="clock" aria-live="polite">
                    {move || ctx.clock_label()}
                </span>
            </div>
        </header>
    }
}
