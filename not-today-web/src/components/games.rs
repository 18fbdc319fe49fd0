//! Space Games selector and preview

use leptos::prelude::*;
use shared::catalog::SPACE_GAMES;

use crate::state::session::use_session_context;

#[component]
pub fn SpaceGames() -> impl IntoView {
    let ctx = use_session_context();

    view! {
        <div class="panel">
            <h3 class="section-title">"Space Games"</h3>
            <div class="game-list">
                {SPACE_GAMES.iter().map(|game| view! {
                    <div
                        class="game-card"
                        class:selected=move || ctx.selected_game().id == game.id
                        on:click=move |_| ctx.select_game(game.id)
                    >
                        <img src=game.image alt=game.name class="thumb"/>
                        <div>
                            <h4 class="item-name">{game.name}</h4>
                            <p class="fine-print muted">{game.description}</p>
                        </div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
pub fn GamePreview() -> impl IntoView {
    let ctx = use_session_context();

    view! {
        <div class="panel">
            <h3 class="section-title">"Game Preview"</h3>
            {move || {
                let game = ctx.selected_game();
                view! {
                    <div>
                        <img src=game.preview alt=format!("{} preview", game.name) class="game-preview"/>
                        <h4 class="item-name">{game.name}</h4>
                        <p class="muted">{game.description}</p>
                        <button class="btn">"Play Now"</button>
                    </div>
                }
            }}
        </div>
    }
}
