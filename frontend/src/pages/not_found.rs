use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let location = use_location();

    use_effect_with(location.map(|location| location.path().to_string()), |path| {
        if let Some(path) = path {
            web_sys::console::error_1(
                &format!("404 Error: User attempted to access non-existent route: {path}").into(),
            );
        }
        || ()
    });

    html! {
        <main class="not-found-page">
            <div class="not-found-card">
                <h1>{ "404" }</h1>
                <p>{ "Oops! Page not found" }</p>
                <Link<Route> to={Route::Home} classes={classes!("btn", "btn-primary")}>
                    { "Return to Home" }
                </Link<Route>>
            </div>
        </main>
    }
}
