use leptos::prelude::*;

#[component]
pub fn Footer(#[prop(default = "site-footer")] class: &'static str) -> impl IntoView {
    view! {
        <footer class=class>
            <div class="footer-legal">
                <p>"© 2024 NOT TODAY App. All rights reserved."</p>
                <p>"A project sponsored by NASA"</p>
            </div>
            <nav class="footer-links">
                <a href="#">"Terms of Service"</a>
                <a href="#">"Privacy Policy"</a>
                <a href="#">"Contact Us"</a>
            </nav>
        </footer>
    }
}
