use times_of_fashion_shared::Category;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{config::SITE_NAME, router::Route};

#[function_component(Header)]
pub fn header() -> Html {
    let mobile_menu_open = use_state(|| false);
    let route = use_route::<Route>();

    // Close the mobile menu after navigating.
    {
        let mobile_menu_open = mobile_menu_open.clone();
        use_effect_with(route.clone(), move |_| {
            mobile_menu_open.set(false);
            || ()
        });
    }

    let toggle_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(!*mobile_menu_open))
    };

    let nav_links = Category::ALL.into_iter().map(|category| {
        let target = Route::for_category(category);
        let active = route.as_ref().and_then(Route::category) == Some(category);
        html! {
            <Link<Route>
                to={target}
                classes={classes!("nav-link", active.then_some("nav-link-active"))}
            >
                { category.label() }
            </Link<Route>>
        }
    }).collect::<Html>();

    html! {
        <header class="site-header">
            <div class="container header-inner">
                <Link<Route> to={Route::Home} classes={classes!("site-logo")}>
                    <span class="logo-the">{ "The" }</span>
                    <span class="logo-name">{ SITE_NAME }</span>
                </Link<Route>>

                <nav class="main-nav" aria-label="Categories">
                    { nav_links.clone() }
                </nav>

                <div class="header-actions">
                    <Link<Route> to={Route::Newsletter} classes={classes!("btn", "btn-outline")}>
                        { "Newsletter" }
                    </Link<Route>>
                    <Link<Route> to={Route::Contact} classes={classes!("btn", "btn-primary")}>
                        { "Contact Us" }
                    </Link<Route>>
                </div>

                <button
                    type="button"
                    class="mobile-menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded={(*mobile_menu_open).to_string()}
                    onclick={toggle_mobile_menu}
                >
                    <i class={if *mobile_menu_open { "fas fa-times" } else { "fas fa-bars" }}></i>
                </button>
            </div>

            if *mobile_menu_open {
                <nav class="mobile-nav" aria-label="Mobile">
                    { nav_links }
                    <Link<Route> to={Route::Newsletter} classes={classes!("nav-link")}>
                        { "Newsletter" }
                    </Link<Route>>
                    <Link<Route> to={Route::Contact} classes={classes!("nav-link")}>
                        { "Contact Us" }
                    </Link<Route>>
                </nav>
            }
        </header>
    }
}
