use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    components::toast::ToastMessage,
    config::{CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE},
    hooks::{use_scroll_to_top, use_toast},
};

#[derive(Clone, Default, PartialEq)]
struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
}

#[derive(Clone, Copy)]
enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactForm {
    fn with(&self, field: Field, value: String) -> Self {
        let mut next = self.clone();
        match field {
            Field::Name => next.name = value,
            Field::Email => next.email = value,
            Field::Subject => next.subject = value,
            Field::Message => next.message = value,
        }
        next
    }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    use_scroll_to_top();
    let form = use_state(ContactForm::default);
    let toast = use_toast();

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let value = event
                .target_dyn_into::<HtmlInputElement>()
                .map(|input| input.value())
                .or_else(|| {
                    event
                        .target_dyn_into::<HtmlTextAreaElement>()
                        .map(|area| area.value())
                });
            if let Some(value) = value {
                form.set(form.with(field, value));
            }
        })
    };

    // No outbound call: the message is acknowledged and the form reset.
    let on_submit = {
        let form = form.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            toast.emit(ToastMessage::info(
                "Message Sent!",
                "Thank you for reaching out. We'll get back to you soon.",
            ));
            form.set(ContactForm::default());
        })
    };

    html! {
        <main class="contact-page">
            <section class="page-hero" style="background-image: url('/assets/contact.png')">
                <div class="page-hero-overlay"></div>
                <div class="container page-hero-content">
                    <h1>{ "Let's " }<span class="text-accent">{ "Connect" }</span></h1>
                    <p>
                        { "Whether you have a story idea, collaboration proposal, or just want to \
                           say hello, we'd love to hear from you." }
                    </p>
                </div>
            </section>

            <section class="contact-body">
                <div class="container contact-grid">
                    <div class="card contact-form-card">
                        <h2>{ "Send Us a Message" }</h2>
                        <p class="text-muted">
                            { "Fill out the form below and we'll get back to you within 24 hours." }
                        </p>
                        <form class="contact-form" onsubmit={on_submit}>
                            <div class="form-row">
                                <label class="form-field">
                                    <span>{ "Full Name *" }</span>
                                    <input
                                        type="text"
                                        class="form-input"
                                        placeholder="Your full name"
                                        required=true
                                        value={form.name.clone()}
                                        oninput={on_input(Field::Name)}
                                    />
                                </label>
                                <label class="form-field">
                                    <span>{ "Email Address *" }</span>
                                    <input
                                        type="email"
                                        class="form-input"
                                        placeholder="your.email@example.com"
                                        required=true
                                        value={form.email.clone()}
                                        oninput={on_input(Field::Email)}
                                    />
                                </label>
                            </div>
                            <label class="form-field">
                                <span>{ "Subject *" }</span>
                                <input
                                    type="text"
                                    class="form-input"
                                    placeholder="What's this about?"
                                    required=true
                                    value={form.subject.clone()}
                                    oninput={on_input(Field::Subject)}
                                />
                            </label>
                            <label class="form-field">
                                <span>{ "Message *" }</span>
                                <textarea
                                    class="form-input form-textarea"
                                    placeholder="Tell us more about your inquiry..."
                                    required=true
                                    value={form.message.clone()}
                                    oninput={on_input(Field::Message)}
                                />
                            </label>
                            <button type="submit" class="btn btn-primary btn-lg">{ "Send Message" }</button>
                        </form>
                    </div>

                    <aside class="contact-aside">
                        <div class="card">
                            <h3>{ "Contact Information" }</h3>
                            <div class="contact-line">
                                <i class="fas fa-envelope" aria-hidden="true"></i>
                                <div>
                                    <p class="contact-label">{ "Email" }</p>
                                    <p class="text-muted">{ CONTACT_EMAIL }</p>
                                </div>
                            </div>
                            <div class="contact-line">
                                <i class="fas fa-phone" aria-hidden="true"></i>
                                <div>
                                    <p class="contact-label">{ "Phone" }</p>
                                    <p class="text-muted">{ CONTACT_PHONE }</p>
                                </div>
                            </div>
                            <div class="contact-line">
                                <i class="fas fa-map-marker-alt" aria-hidden="true"></i>
                                <div>
                                    <p class="contact-label">{ "Address" }</p>
                                    { for CONTACT_ADDRESS.iter().map(|line| html! {
                                        <p class="text-muted">{ *line }</p>
                                    }) }
                                </div>
                            </div>
                        </div>
                        <div class="card">
                            <h3>{ "Follow Us" }</h3>
                            <div class="footer-social">
                                <i class="fab fa-instagram"></i>
                                <i class="fab fa-twitter"></i>
                                <i class="fas fa-envelope"></i>
                            </div>
                        </div>
                    </aside>
                </div>
            </section>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactForm, Field};

    #[test]
    fn field_updates_leave_other_fields_alone() {
        let form = ContactForm::default()
            .with(Field::Name, "Asha".to_string())
            .with(Field::Message, "Hello".to_string());
        assert_eq!(form.name, "Asha");
        assert_eq!(form.message, "Hello");
        assert!(form.email.is_empty());
        assert!(form.subject.is_empty());
    }
}
