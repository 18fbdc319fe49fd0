//! Daily Quiz with score and ranking
//!
//! Options are disabled once answered. The correct option is then marked
//! green and a wrong choice red.

use leptos::prelude::*;
use shared::catalog::{QUIZ_OPTIONS, QUIZ_QUESTION};

use crate::components::TopDefenders;
use crate::state::session::use_session_context;

#[component]
pub fn DailyQuiz() -> impl IntoView {
    let ctx = use_session_context();

    view! {
        <div class="panel-inner quiz">
            <h3 class="section-title">"Daily Quiz"</h3>
            <p class="quiz-question">{QUIZ_QUESTION}</p>
            <div class="quiz-options">
                {QUIZ_OPTIONS.into_iter().map(|option| view! {
                    <button
                        class=move || ctx.option_mark(option).css_class()
                        disabled=move || ctx.is_answered()
                        on:click=move |_| ctx.submit_answer(option)
                    >
                        {option}
                    </button>
                }).collect::<Vec<_>>()}
            </div>
            {move || ctx.feedback().map(|text| view! { <p class="quiz-feedback">{text}</p> })}
            <p class="quiz-score">{move || format!("Your score: {}", ctx.score())}</p>
            <TopDefenders/>
        </div>
    }
}
