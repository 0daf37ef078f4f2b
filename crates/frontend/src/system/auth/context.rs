use contracts::system::auth::{LoginRequest, SignupRequest, SignupResponse, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::guard::{SessionGuard, SessionState};
use crate::shared::api::ApiError;

/// Provides the session state and starts verification of a stored token.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let guard = SessionGuard::browser();
    let (auth_state, set_auth_state) = signal(guard.initial_state());

    if auth_state.get_untracked().is_pending() {
        spawn_local(async move {
            let restored = guard.restore().await;
            set_auth_state.set(restored);
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access the session state
pub fn use_auth() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let auth_state =
        use_context::<ReadSignal<SessionState>>().expect("AuthProvider not found in component tree");
    let set_auth_state = use_context::<WriteSignal<SessionState>>()
        .expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

pub fn current_user(auth_state: ReadSignal<SessionState>) -> Option<UserInfo> {
    auth_state.with(|s| s.user().cloned())
}

/// Name of the signed-in user, used as the acting technician
pub fn current_user_name(auth_state: ReadSignal<SessionState>) -> Option<String> {
    auth_state.with(|s| s.user().map(|u| u.display_name().to_string()))
}

pub async fn do_login(
    request: LoginRequest,
    set_auth_state: WriteSignal<SessionState>,
) -> Result<UserInfo, ApiError> {
    let user = SessionGuard::browser().login(&request).await?;
    set_auth_state.set(SessionState::Authenticated(user.clone()));
    Ok(user)
}

pub async fn do_signup(request: SignupRequest) -> Result<SignupResponse, ApiError> {
    SessionGuard::browser().signup(&request).await
}

pub async fn do_logout(set_auth_state: WriteSignal<SessionState>) {
    SessionGuard::browser().logout().await;
    set_auth_state.set(SessionState::Unauthenticated);
}
