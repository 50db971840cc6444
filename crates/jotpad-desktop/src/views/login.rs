//! Login view - email/password sign-in

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::state::AppState;

#[component]
pub fn LoginPage() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut working = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let mut sign_in = move || {
        if working() {
            return;
        }
        let Some(service) = state.service() else {
            error.set(Some("Notes service is not configured".to_string()));
            return;
        };
        let email_value = email();
        let password_value = password();

        working.set(true);
        error.set(None);
        spawn(async move {
            match service.sign_in(&email_value, &password_value).await {
                Ok(()) => {
                    password.set(String::new());
                    state.navigate_to_notes();
                }
                Err(sign_in_error) => {
                    tracing::error!("Sign in failed: {}", sign_in_error);
                    error.set(Some(sign_in_error.to_string()));
                }
            }
            working.set(false);
        });
    };

    let input_style = format!(
        "width: 100%; box-sizing: border-box; padding: 12px; margin-bottom: 12px; \
         border: 1px solid {}; border-radius: 8px; font-size: 16px; background: {}; color: {};",
        colors.border, colors.bg_card, colors.text_primary
    );

    rsx! {
        div {
            class: "login-page",
            style: "max-width: 400px; margin: 96px auto; padding: 32px 24px;",

            h1 {
                style: "
                    margin: 0 0 24px 0;
                    font-size: 34px;
                    font-weight: bold;
                    background: {colors.accent_gradient};
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                ",
                "Sign in"
            }

            input {
                style: "{input_style}",
                r#type: "email",
                placeholder: "Email",
                value: "{email}",
                disabled: working(),
                autofocus: true,
                oninput: move |evt| email.set(evt.value()),
            }
            input {
                style: "{input_style}",
                r#type: "password",
                placeholder: "Password",
                value: "{password}",
                disabled: working(),
                oninput: move |evt| password.set(evt.value()),
                onkeydown: move |evt: Event<KeyboardData>| {
                    if evt.key() == Key::Enter {
                        sign_in();
                    }
                },
            }

            if let Some(message) = error() {
                div {
                    class: "auth-error",
                    style: "margin-bottom: 12px; color: {colors.error};",
                    "{message}"
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                disabled: working(),
                onclick: move |_| sign_in(),
                if working() { "Signing in..." } else { "Sign In" }
            }
        }
    }
}
