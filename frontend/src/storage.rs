//! Best-effort local copy of newsletter signups.

use times_of_fashion_shared::newsletter::{
    append_subscription_log, NewsletterSignup, StoredSubscription, LOCAL_SUBSCRIPTIONS_KEY,
};

/// Appends `signup` to the local subscription log. Storage problems are
/// logged to the console and otherwise ignored.
pub fn record_subscription_attempt(signup: &NewsletterSignup) {
    let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    else {
        web_sys::console::warn_1(&"local storage unavailable; signup not recorded".into());
        return;
    };

    let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
    let entry = StoredSubscription::new(signup, timestamp, js_sys::Date::now() as u64);
    let existing = storage.get_item(LOCAL_SUBSCRIPTIONS_KEY).ok().flatten();

    match append_subscription_log(existing.as_deref(), &entry) {
        Ok(log) => {
            if storage.set_item(LOCAL_SUBSCRIPTIONS_KEY, &log).is_err() {
                web_sys::console::warn_1(&"failed to store subscription locally".into());
            }
        },
        Err(err) => {
            web_sys::console::warn_1(&format!("subscription log encode error: {err}").into());
        },
    }
}
