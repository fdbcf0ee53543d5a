use yew::prelude::*;

use crate::{components::newsletter_form::NewsletterForm, hooks::use_scroll_to_top};

const PERKS: [&str; 4] = [
    "Ad-free, seamless reading",
    "Members-only stories & reports",
    "Early access to trend forecasts",
    "Curated style guides & insights",
];

#[function_component(NewsletterPage)]
pub fn newsletter_page() -> Html {
    use_scroll_to_top();

    html! {
        <main class="newsletter-page">
            <section class="container newsletter-feature">
                <div class="newsletter-copy">
                    <span class="badge badge-vip">
                        <i class="fas fa-crown" aria-hidden="true"></i>
                        { "VIP Access" }
                    </span>
                    <h1>{ "Stay In " }<span class="text-accent">{ "Style" }</span></h1>
                    <p>
                        { "Step into the world of fashion without distractions. Stay in Style \
                           gives you insider access, curated only for those who never settle for \
                           ordinary." }
                    </p>
                    <ul class="perk-list">
                        { for PERKS.iter().map(|perk| html! {
                            <li>
                                <i class="fas fa-check" aria-hidden="true"></i>
                                { *perk }
                            </li>
                        }) }
                    </ul>
                    <NewsletterForm />
                </div>
                <div class="newsletter-visual">
                    <img src="/assets/hero4.jpg" alt="Editorial fashion portrait" loading="lazy" />
                </div>
            </section>
        </main>
    }
}
