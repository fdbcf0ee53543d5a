use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api::{self, AdminApiError},
    components::toast::ToastMessage,
    hooks::use_toast,
    router::Route,
    session,
};

#[function_component(AdminLoginPage)]
pub fn admin_login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let toast = use_toast();

    // Already signed in: go straight to the panel.
    {
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            if session::load_session().is_some() {
                if let Some(navigator) = navigator {
                    navigator.replace(&Route::Admin);
                }
            }
            || ()
        });
    }

    let on_email = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *loading {
                return;
            }
            loading.set(true);

            let email = (*email).trim().to_string();
            let password = (*password).clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::admin_login(&email, &password).await {
                    Ok(admin) => {
                        session::save_session(&admin);
                        toast.emit(ToastMessage::info(
                            "Welcome Admin!",
                            "Successfully logged into Times of Fashion admin panel.",
                        ));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Admin);
                        }
                    },
                    Err(AdminApiError::Unauthorized) => {
                        toast.emit(ToastMessage::error(
                            "Invalid Credentials",
                            "Please check your email and password.",
                        ));
                    },
                    Err(AdminApiError::Other(message)) => {
                        web_sys::console::error_1(&message.clone().into());
                        toast.emit(ToastMessage::error("Login Failed", message));
                    },
                }
                loading.set(false);
            });
        })
    };

    html! {
        <main class="admin-login-page">
            <div class="card admin-login-card">
                <div class="admin-login-header">
                    <i class="fas fa-lock admin-login-icon" aria-hidden="true"></i>
                    <h1>{ "Times of Fashion" }</h1>
                    <p class="text-muted">{ "Admin Panel Access" }</p>
                </div>
                <form class="admin-login-form" onsubmit={on_submit}>
                    <label class="form-field" for="admin-email">
                        <span>{ "Email Address" }</span>
                        <input
                            id="admin-email"
                            type="email"
                            class="form-input"
                            placeholder="admin@timesoffashion.com"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email}
                            disabled={*loading}
                        />
                    </label>
                    <label class="form-field" for="admin-password">
                        <span>{ "Password" }</span>
                        <div class="password-field">
                            <input
                                id="admin-password"
                                type={if *show_password { "text" } else { "password" }}
                                class="form-input"
                                placeholder="Enter admin password"
                                required=true
                                value={(*password).clone()}
                                oninput={on_password}
                                disabled={*loading}
                            />
                            <button
                                type="button"
                                class="password-toggle"
                                aria-label={if *show_password { "Hide password" } else { "Show password" }}
                                onclick={toggle_password}
                                disabled={*loading}
                            >
                                <i class={if *show_password { "fas fa-eye-slash" } else { "fas fa-eye" }}></i>
                            </button>
                        </div>
                    </label>
                    <button type="submit" class="btn btn-primary btn-block" disabled={*loading}>
                        { if *loading { "Signing In..." } else { "Sign In to Admin Panel" } }
                    </button>
                </form>
                <p class="form-note">{ "Secure admin access for Times of Fashion content management" }</p>
            </div>
        </main>
    }
}
