//! Router and top-level shell

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::pages::{FixedLayoutPage, ResponsiveLayoutPage};

#[component]
pub fn App() -> impl IntoView {
    // Backup in case main() didn't catch the loading screen
    Effect::new(move || crate::hide_loading_screen());

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=FixedLayoutPage/>
                <Route path=path!("/responsive") view=ResponsiveLayoutPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="panel not-found-card">
                <h1>"404 - Lost in Space"</h1>
                <p class="muted">"The page you're looking for drifted out of orbit."</p>
                <A href="/">
                    <span class="btn">"Back to Earth"</span>
                </A>
            </div>
        </div>
    }
}
