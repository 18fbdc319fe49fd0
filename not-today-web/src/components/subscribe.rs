//! Stay Updated newsletter form and social links

use leptos::prelude::*;
use shared::forms::validate_email;

use crate::state::session::use_session_context;
use crate::utils::constants::{INSTAGRAM_URL, TWITTER_URL, YOUTUBE_URL};

#[component]
pub fn StayUpdated(#[prop(default = "panel-inner")] class: &'static str) -> impl IntoView {
    let ctx = use_session_context();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // Same gate as the input's type="email" required
        let check = validate_email(&ctx.email());
        if !check.is_valid {
            log::warn!("[SUBSCRIBE] rejected: {}", check.error.unwrap_or_default());
            return;
        }
        ctx.submit_email();
    };

    view! {
        <div class=class>
            <h3 class="section-title">"Stay Updated"</h3>
            <form class="subscribe-form" on:submit=on_submit>
                <input
                    type="email"
                    class="text-input"
                    placeholder="Enter your email"
                    required=true
                    prop:value=move || ctx.email()
                    on:input=move |ev| ctx.set_email(event_target_value(&ev))
                />
                <button type="submit" class="btn">"Subscribe"</button>
            </form>
            <SocialLinks/>
        </div>
    }
}

#[component]
fn SocialLinks() -> impl IntoView {
    view! {
        <div class="social-links">
            <a href=INSTAGRAM_URL class="social-link" aria-label="Instagram">"Instagram"</a>
            <a href=TWITTER_URL class="social-link" aria-label="Twitter">"Twitter"</a>
            <a href=YOUTUBE_URL class="social-link" aria-label="YouTube">"YouTube"</a>
        </div>
    }
}
