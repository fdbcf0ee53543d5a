//! Times of Fashion single-page app: article and category pages rendered
//! from the bundled store, newsletter and contact forms, and the admin panel.

mod api;
mod components;
mod config;
mod hooks;
mod pages;
mod router;
mod session;
mod share;
mod storage;

use yew::prelude::*;

use crate::components::toast::ToastProvider;

#[function_component(App)]
fn app() -> Html {
    html! {
        <ToastProvider>
            <router::AppRouter />
        </ToastProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
