use times_of_fashion_shared::Category;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    config::{CONTACT_EMAIL, SITE_NAME},
    router::Route,
};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <h3 class="footer-logo">{ SITE_NAME }</h3>
                    <p>
                        { "Times of Fashion stands as your ultimate destination for fashion \
                           intelligence, beauty innovation, and lifestyle elevation. We decode \
                           the trends before they hit the mainstream." }
                    </p>
                    <a class="footer-email" href={format!("mailto:{CONTACT_EMAIL}")}>
                        <i class="fas fa-envelope" aria-hidden="true"></i>
                        { CONTACT_EMAIL }
                    </a>
                </div>

                <div class="footer-column">
                    <h4>{ "Categories" }</h4>
                    <ul>
                        { for Category::ALL.into_iter().map(|category| html! {
                            <li>
                                <Link<Route> to={Route::BlogCategory { category: category.slug().to_string() }}>
                                    { category.label() }
                                </Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>{ "Company" }</h4>
                    <ul>
                        <li><Link<Route> to={Route::About}>{ "About Us" }</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{ "Contact" }</Link<Route>></li>
                        <li><Link<Route> to={Route::Collaboration}>{ "Collaborations" }</Link<Route>></li>
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>{ "Stay Connected" }</h4>
                    <div class="footer-social">
                        <a href="https://instagram.com" aria-label="Instagram" target="_blank" rel="noopener noreferrer">
                            <i class="fab fa-instagram"></i>
                        </a>
                        <a href="https://twitter.com" aria-label="Twitter" target="_blank" rel="noopener noreferrer">
                            <i class="fab fa-twitter"></i>
                        </a>
                        <a href="https://pinterest.com" aria-label="Pinterest" target="_blank" rel="noopener noreferrer">
                            <i class="fab fa-pinterest"></i>
                        </a>
                    </div>
                    <p class="footer-quote">{ "\"Style is a shared language.\"" }</p>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{ "© 2024 Times of Fashion. All rights reserved." }</p>
            </div>
        </footer>
    }
}
