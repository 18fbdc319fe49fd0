//! Asteroid Approach live feed and comment form

use leptos::prelude::*;

use crate::state::session::use_session_context;
use crate::utils::constants::{LIVE_FEED_ALLOW, LIVE_FEED_URL};

#[component]
pub fn LiveFeed(
    /// Overlay the simulated viewer count (responsive layout)
    #[prop(optional)]
    show_viewers: bool,
) -> impl IntoView {
    let ctx = use_session_context();

    view! {
        <div class="live-feed">
            <h2 class="section-title live-title">
                <span>"Asteroid Approach"</span>
                <span class="live-badge">"LIVE"</span>
            </h2>
            <div class="video-frame">
                <iframe
                    class="frame"
                    src=LIVE_FEED_URL
                    allow=LIVE_FEED_ALLOW
                    allowfullscreen=true
                    title="Embedded youtube"
                ></iframe>
                {show_viewers.then(|| view! {
                    <div class="viewer-count">{move || ctx.viewer_label()}</div>
                })}
            </div>
            <p class="fine-print muted">"Live view of Earth from the International Space Station"</p>
        </div>
    }
}

#[component]
pub fn CommentForm() -> impl IntoView {
    let ctx = use_session_context();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_comment();
    };

    view! {
        <form class="comment-form" on:submit=on_submit>
            <textarea
                class="text-input"
                placeholder="Leave a comment..."
                rows="2"
                prop:value=move || ctx.comment()
                on:input=move |ev| ctx.set_comment(event_target_value(&ev))
            ></textarea>
            <button type="submit" class="btn btn-wide">
                <span class="btn-icon">"➤"</span>
                "Send Comment"
            </button>
        </form>
    }
}
