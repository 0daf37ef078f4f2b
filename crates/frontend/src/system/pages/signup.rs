use contracts::shared::validation::ValidationErrors;
use contracts::system::auth::{password_hint, SignupRequest, SignupResponse, MIN_PASSWORD_LEN};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::{Button, Input};
use crate::system::auth::context::do_signup;

const REDIRECT_DELAY_MS: u32 = 2000;
const SIGNUP_SUCCESS: &str = "Account created successfully! Redirecting to login...";

/// Message shown after the server answered a signup.
pub fn signup_outcome(response: &SignupResponse) -> Result<String, String> {
    if response.success {
        Ok(SIGNUP_SUCCESS.to_string())
    } else {
        Err(response
            .message
            .clone()
            .unwrap_or_else(|| "Signup failed".to_string()))
    }
}

#[component]
pub fn SignupPage(on_switch: Callback<()>) -> impl IntoView {
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(ValidationErrors::new());
    let error_message = RwSignal::new(None::<String>);
    let success_message = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    let field_error = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = SignupRequest::new(
            &full_name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        );
        if let Err(e) = request.validate(&confirm_password.get_untracked()) {
            errors.set(e);
            return;
        }
        errors.set(ValidationErrors::new());
        error_message.set(None);
        is_loading.set(true);

        spawn_local(async move {
            let result = do_signup(request).await;
            is_loading.set(false);
            match result.map_err(|e| e.user_message()).and_then(|r| signup_outcome(&r)) {
                Ok(msg) => {
                    success_message.set(Some(msg));
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    on_switch.run(());
                }
                Err(msg) => {
                    log::warn!("signup rejected: {}", msg);
                    error_message.set(Some(msg));
                }
            }
        });
    };

    let hint = move || {
        let value = password.get();
        password_hint(&value).map(|text| {
            let strong = value.chars().count() >= MIN_PASSWORD_LEN;
            view! {
                <div class="password-hint" class:password-hint--ok=strong>{text}</div>
            }
        })
    };
    let busy = Signal::derive(move || is_loading.get() || success_message.with(Option::is_some));

    view! {
        <div class="auth-container">
            <div class="auth-box">
                <h1>"GearGuard"</h1>
                <h2>"Create account"</h2>

                {move || error_message.get().map(|msg| view! { <div class="error-message">{msg}</div> })}
                {move || success_message.get().map(|msg| view! { <div class="success-message">{msg}</div> })}

                <form on:submit=on_submit>
                    <Input
                        label="Full Name"
                        id="signup-name"
                        value=full_name
                        on_input=Callback::new(move |v: String| full_name.set(v))
                        disabled=busy
                        error=field_error("full_name")
                    />
                    <Input
                        label="Email"
                        id="signup-email"
                        input_type="email"
                        placeholder="you@gmail.com"
                        value=email
                        on_input=Callback::new(move |v: String| email.set(v))
                        disabled=busy
                        error=field_error("email")
                    />
                    <Input
                        label="Password"
                        id="signup-password"
                        input_type="password"
                        value=password
                        on_input=Callback::new(move |v: String| password.set(v))
                        disabled=busy
                        error=field_error("password")
                    />
                    {hint}
                    <Input
                        label="Confirm Password"
                        id="signup-confirm"
                        input_type="password"
                        value=confirm_password
                        on_input=Callback::new(move |v: String| confirm_password.set(v))
                        disabled=busy
                        error=field_error("confirm_password")
                    />
                    <Button button_type="submit" class="auth-submit" disabled=busy>
                        {move || if is_loading.get() { "Creating account..." } else { "Sign Up" }}
                    </Button>
                </form>

                <p class="auth-switch">
                    "Already have an account? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        on_switch.run(());
                    }>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_outcome() {
        let ok = SignupResponse {
            success: true,
            message: None,
            user: None,
        };
        assert_eq!(signup_outcome(&ok).unwrap(), SIGNUP_SUCCESS);

        let taken = SignupResponse {
            success: false,
            message: Some("Email already registered".into()),
            user: None,
        };
        assert_eq!(signup_outcome(&taken).unwrap_err(), "Email already registered");
    }
}
