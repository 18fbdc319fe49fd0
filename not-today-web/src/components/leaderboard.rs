//! Top Defenders Ranking

use leptos::prelude::*;
use shared::catalog::LEADERBOARD;

use crate::components::AccordionItem;

#[component]
pub fn TopDefenders() -> impl IntoView {
    let open = RwSignal::new(None::<&'static str>);

    view! {
        <div class="accordion ranking">
            <AccordionItem
                open=open
                value="top-defenders"
                title="Top Defenders Ranking"
                badge=LEADERBOARD.len().to_string()
            >
                {LEADERBOARD.iter().map(|entry| view! {
                    <div class="ranking-row">
                        <div class="ranking-user">
                            <img src=entry.avatar alt=entry.name class="avatar"/>
                            <span class="ranking-name">{entry.name}</span>
                        </div>
                        <span class="ranking-points" style=format!("color: {}", entry.points_color())>
                            {format!("{} pts", entry.points)}
                        </span>
                    </div>
                }).collect::<Vec<_>>()}
            </AccordionItem>
        </div>
    }
}
