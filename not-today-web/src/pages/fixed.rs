//! Fixed-layout screen
//!
//! Everything sits inside one card: the orrery takes two of three columns and
//! the remaining sections stack in the right column, ending in a sticky cart
//! bar.

use leptos::prelude::*;

use crate::components::{
    CartSummary, DailyQuiz, DailyUpdate, Footer, LiveFeed, MerchShop, NearbyObjects, Orrery,
    SiteHeader, StayUpdated,
};
use crate::state::session::provide_session_context;

#[component]
pub fn FixedLayoutPage() -> impl IntoView {
    let ctx = provide_session_context();
    ctx.start_clock();

    view! {
        <div class="fixed-shell">
            <div class="card fixed-card">
                <SiteHeader class="site-header fixed-header"/>

                <section class="fixed-update">
                    <DailyUpdate/>
                </section>

                <div class="fixed-grid">
                    <div class="fixed-main">
                        <Orrery/>
                    </div>

                    <div class="fixed-side">
                        <NearbyObjects/>
                        <LiveFeed/>

                        <div class="panel">
                            <DailyQuiz/>
                            <MerchShop stacked=true/>
                            <StayUpdated/>
                        </div>

                        <Footer/>
                        <CartSummary/>
                    </div>
                </div>
            </div>
        </div>
    }
}
