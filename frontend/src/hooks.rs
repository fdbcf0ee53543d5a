use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::use_location;

use crate::components::toast::{ToastContext, ToastMessage};

/// Scroll the viewport to the top whenever the current route changes.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location.map(|location| location.path().to_string()), move |path| {
        if path.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

/// Callback that shows a toast through the nearest [`ToastProvider`].
///
/// Outside a provider the callback is a no-op.
///
/// [`ToastProvider`]: crate::components::toast::ToastProvider
#[hook]
pub fn use_toast() -> Callback<ToastMessage> {
    let context = use_context::<ToastContext>();
    match context {
        Some(context) => context.show,
        None => Callback::noop(),
    }
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smoothly scroll to the element with `id`, if present.
pub fn scroll_to_element(id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));
    if let Some(element) = element {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
