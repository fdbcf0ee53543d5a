use gloo_timers::callback::Timeout;
use times_of_fashion_shared::newsletter::{NewsletterSignup, SubscribeOutcome, NEWSLETTER_FORM_SOURCE};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{api, components::toast::ToastMessage, hooks::use_toast, storage};

const STATUS_RESET_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SubmitStatus {
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Properties, PartialEq)]
pub struct NewsletterFormProps {
    /// Recorded as the signup source.
    #[prop_or_else(|| AttrValue::from(NEWSLETTER_FORM_SOURCE))]
    pub source: AttrValue,
    #[prop_or(true)]
    pub show_name: bool,
}

#[function_component(NewsletterForm)]
pub fn newsletter_form(props: &NewsletterFormProps) -> Html {
    let email = use_state(String::new);
    let first_name = use_state(String::new);
    let status = use_state(|| SubmitStatus::Idle);
    let reset_timer = use_mut_ref(|| None::<Timeout>);
    let toast = use_toast();

    let on_email = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_first_name = {
        let first_name = first_name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                first_name.set(input.value());
            }
        })
    };

    let on_submit = {
        let email = email.clone();
        let first_name = first_name.clone();
        let status = status.clone();
        let reset_timer = reset_timer.clone();
        let source = props.source.to_string();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *status == SubmitStatus::Loading {
                return;
            }

            let signup = build_signup(&email, &first_name, &source);
            let email = email.clone();
            let first_name = first_name.clone();
            let status = status.clone();
            let reset_timer = reset_timer.clone();
            let toast = toast.clone();
            status.set(SubmitStatus::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = api::subscribe_newsletter(&signup).await;
                storage::record_subscription_attempt(&signup);

                if !outcome.success {
                    web_sys::console::warn_1(&outcome.message.clone().into());
                }
                let result = after_submit(&outcome);
                status.set(result.status);
                if result.clear_inputs {
                    email.set(String::new());
                    first_name.set(String::new());
                }
                toast.emit(result.toast);

                *reset_timer.borrow_mut() = Some(Timeout::new(STATUS_RESET_MS, move || {
                    status.set(SubmitStatus::Idle);
                }));
            });
        })
    };

    let loading = *status == SubmitStatus::Loading;

    html! {
        <form class="newsletter-form" onsubmit={on_submit}>
            if props.show_name {
                <input
                    type="text"
                    class="form-input"
                    placeholder="First Name (optional)"
                    value={(*first_name).clone()}
                    oninput={on_first_name}
                    disabled={loading}
                />
            }
            <input
                type="email"
                class="form-input"
                placeholder="Enter your email address"
                required=true
                value={(*email).clone()}
                oninput={on_email}
                disabled={loading}
            />
            <button
                type="submit"
                class="btn btn-primary"
                disabled={loading || *status == SubmitStatus::Success}
            >
                { submit_label(*status) }
            </button>
            <p class="form-note">
                { "By subscribing, you agree to our privacy policy and will receive weekly fashion \
                   newsletters. Unsubscribe at any time." }
            </p>
        </form>
    }
}

fn submit_label(status: SubmitStatus) -> &'static str {
    match status {
        SubmitStatus::Idle => "Subscribe",
        SubmitStatus::Loading => "Subscribing...",
        SubmitStatus::Success => "Subscribed!",
        SubmitStatus::Error => "Try Again",
    }
}

/// What the form does once the subscribe call has resolved.
#[derive(Debug, PartialEq)]
struct SubmitResult {
    status: SubmitStatus,
    clear_inputs: bool,
    toast: ToastMessage,
}

/// Success clears the inputs; failure keeps them and shows one generic toast,
/// whatever the provider reported.
fn after_submit(outcome: &SubscribeOutcome) -> SubmitResult {
    if outcome.success {
        SubmitResult {
            status: SubmitStatus::Success,
            clear_inputs: true,
            toast: ToastMessage::info(
                "Welcome to Times of Fashion!",
                "You've successfully subscribed to our weekly newsletter!",
            ),
        }
    } else {
        SubmitResult {
            status: SubmitStatus::Error,
            clear_inputs: false,
            toast: ToastMessage::error(
                "Subscription Failed",
                "Please try again later or contact support.",
            ),
        }
    }
}

fn build_signup(email: &str, first_name: &str, source: &str) -> NewsletterSignup {
    let first_name = first_name.trim();
    NewsletterSignup {
        email: email.trim().to_string(),
        first_name: (!first_name.is_empty()).then(|| first_name.to_string()),
        source: Some(source.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use times_of_fashion_shared::newsletter::SubscribeOutcome;

    use super::{after_submit, build_signup, submit_label, SubmitStatus};
    use crate::components::toast::ToastVariant;

    #[test]
    fn signup_trims_and_drops_blank_name() {
        let signup = build_signup(" reader@example.com ", "   ", "website-newsletter");
        assert_eq!(signup.email, "reader@example.com");
        assert_eq!(signup.first_name, None);
        assert_eq!(signup.source.as_deref(), Some("website-newsletter"));

        let named = build_signup("a@b.co", " Asha ", "footer");
        assert_eq!(named.first_name.as_deref(), Some("Asha"));
    }

    #[test]
    fn button_label_follows_status() {
        assert_eq!(submit_label(SubmitStatus::Loading), "Subscribing...");
        assert_eq!(submit_label(SubmitStatus::Error), "Try Again");
    }

    #[test]
    fn success_clears_inputs_and_welcomes() {
        let result = after_submit(&SubscribeOutcome::success("Successfully subscribed!"));
        assert_eq!(result.status, SubmitStatus::Success);
        assert!(result.clear_inputs);
        assert_eq!(result.toast.title, "Welcome to Times of Fashion!");
        assert_eq!(result.toast.variant, ToastVariant::Default);
    }

    #[test]
    fn failure_keeps_inputs_and_shows_a_generic_toast() {
        let network = after_submit(&SubscribeOutcome::failure("Network error. Please try again later."));
        let rejected = after_submit(&SubscribeOutcome::failure("Subscription failed. Please try again."));
        assert_eq!(network, rejected);
        assert_eq!(network.status, SubmitStatus::Error);
        assert!(!network.clear_inputs);
        assert_eq!(network.toast.title, "Subscription Failed");
        assert_eq!(network.toast.variant, ToastVariant::Destructive);
    }
}
