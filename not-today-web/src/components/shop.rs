//! Space Merch Shop
//!
//! Each item can be bought with (pretend) money or redeemed with quiz points.

use leptos::prelude::*;
use shared::catalog::{CatalogItem, CATALOG};

use crate::state::session::use_session_context;

#[component]
pub fn MerchShop(
    /// Stack the two buttons vertically (fixed layout)
    #[prop(optional)]
    stacked: bool,
) -> impl IntoView {
    view! {
        <div class="panel-inner shop">
            <h3 class="section-title">"Space Merch Shop"</h3>
            <div class="shop-items">
                {CATALOG.iter().map(|item| view! { <ShopItem item=item stacked=stacked/> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn ShopItem(item: &'static CatalogItem, stacked: bool) -> impl IntoView {
    let ctx = use_session_context();
    let actions_class = if stacked { "shop-actions stacked" } else { "shop-actions" };

    view! {
        <div class="shop-item">
            <img src=item.image alt=item.name class="thumb"/>
            <div class="shop-item-info">
                <h4 class="item-name">{item.name}</h4>
                <p class="fine-print muted">{format!("${} or {} points", item.price, item.points)}</p>
            </div>
            <div class=actions_class>
                <button class="btn btn-sm" on:click=move |_| ctx.purchase_with_currency(item)>
                    "Buy"
                </button>
                <button class="btn btn-sm btn-outline" on:click=move |_| {
                    ctx.redeem_with_points(item);
                }>
                    "Use Points"
                </button>
            </div>
        </div>
    }
}
