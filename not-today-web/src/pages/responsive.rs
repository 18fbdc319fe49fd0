//! Responsive screen
//!
//! Sections stack on narrow viewports and fan out into grids at the large
//! breakpoint. Adds the live viewer counter, the comment form and the Space
//! Games panels on top of the fixed layout's content.

use leptos::prelude::*;

use crate::components::{
    CartSummary, CommentForm, DailyQuiz, DailyUpdate, Footer, GamePreview, LiveFeed, MerchShop,
    NearbyObjects, Orrery, SiteHeader, SpaceGames, StayUpdated,
};
use crate::state::session::provide_session_context;

#[component]
pub fn ResponsiveLayoutPage() -> impl IntoView {
    let ctx = provide_session_context();
    ctx.start_clock();
    ctx.start_viewer_simulation();

    view! {
        <div class="responsive-shell">
            <SiteHeader class="site-header sticky-header"/>

            <main class="responsive-main">
                <DailyUpdate/>

                <div class="grid grid-3">
                    <div class="span-2">
                        <Orrery/>
                    </div>
                    <div class="side-column">
                        <NearbyObjects/>
                        <div class="panel">
                            <DailyQuiz/>
                        </div>
                    </div>
                </div>

                <div class="grid grid-2">
                    <div>
                        <LiveFeed show_viewers=true/>
                        <CommentForm/>
                    </div>
                    <div class="panel">
                        <MerchShop/>
                    </div>
                </div>

                <div class="grid grid-2">
                    <SpaceGames/>
                    <GamePreview/>
                </div>
            </main>

            <div class="responsive-bottom">
                <StayUpdated class="panel"/>
                <Footer class="site-footer plain"/>
            </div>

            <CartSummary floating=true/>
        </div>
    }
}
