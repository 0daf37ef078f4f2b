use contracts::system::auth::LoginRequest;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::{Button, Input};
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage(on_switch: Callback<()>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(ValidationErrors::new());
    let error_message = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    let (_, set_auth_state) = use_auth();

    let field_error = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest::new(&email.get_untracked(), &password.get_untracked());
        if let Err(e) = request.validate() {
            errors.set(e);
            return;
        }
        errors.set(ValidationErrors::new());
        error_message.set(None);
        is_loading.set(true);

        spawn_local(async move {
            match do_login(request, set_auth_state).await {
                Ok(user) => log::info!("signed in as {}", user.email),
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    error_message.set(Some(e.user_message()));
                }
            }
            is_loading.set(false);
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-box">
                <h1>"GearGuard"</h1>
                <h2>"Sign in"</h2>

                {move || error_message.get().map(|msg| view! { <div class="error-message">{msg}</div> })}

                <form on:submit=on_submit>
                    <Input
                        label="Email"
                        id="login-email"
                        input_type="email"
                        placeholder="you@gmail.com"
                        value=email
                        on_input=Callback::new(move |v: String| email.set(v))
                        disabled=Signal::derive(move || is_loading.get())
                        error=field_error("email")
                    />
                    <Input
                        label="Password"
                        id="login-password"
                        input_type="password"
                        value=password
                        on_input=Callback::new(move |v: String| password.set(v))
                        disabled=Signal::derive(move || is_loading.get())
                        error=field_error("password")
                    />
                    <Button button_type="submit" class="auth-submit" disabled=Signal::derive(move || is_loading.get())>
                        {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                    </Button>
                </form>

                <p class="auth-switch">
                    "Don't have an account? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        on_switch.run(());
                    }>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
