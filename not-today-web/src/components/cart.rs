//! Cart summary bar

use leptos::prelude::*;

use crate::state::session::use_session_context;

#[component]
pub fn CartSummary(
    /// Pin to the viewport corner instead of the bottom of the card
    #[prop(optional)]
    floating: bool,
) -> impl IntoView {
    let ctx = use_session_context();
    let class = if floating { "cart-summary floating" } else { "cart-summary sticky" };

    view! {
        <div class=class>
            <span class="cart-count">{move || format!("Cart: {} items", ctx.cart_len())}</span>
            <button class="btn btn-sm">
                <span class="btn-icon">"🛒"</span>
                "View Cart"
            </button>
        </div>
    }
}
