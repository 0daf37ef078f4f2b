use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::{tab_label_for_key, TabPage};
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::auth::SessionState;
use crate::system::pages::{LoginPage, SignupPage};
use leptos::prelude::*;
use thaw::Spinner;

/// Signed-out screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthScreen {
    Login,
    Signup,
}

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    tabs_store.init_router_integration(tab_label_for_key);
    if tabs_store.opened.with_untracked(Vec::is_empty) {
        tabs_store.open_tab("d400_overview", tab_label_for_key("d400_overview"));
    }

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    />
                }.into_any()
            }
        />
    }
}

#[component]
fn AuthScreens() -> impl IntoView {
    let screen = RwSignal::new(AuthScreen::Login);
    let to_login = Callback::new(move |_| screen.set(AuthScreen::Login));
    let to_signup = Callback::new(move |_| screen.set(AuthScreen::Signup));

    move || match screen.get() {
        AuthScreen::Login => view! { <LoginPage on_switch=to_signup /> }.into_any(),
        AuthScreen::Signup => view! { <SignupPage on_switch=to_login /> }.into_any(),
    }
}

/// Auth gate: spinner while a stored session is verified, the sign-in
/// screens when signed out, the application otherwise.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let gate = Memo::new(move |_| match auth_state.get() {
        SessionState::Pending => 0u8,
        SessionState::Unauthenticated => 1,
        SessionState::Authenticated(_) => 2,
    });

    move || match gate.get() {
        0 => view! { <div class="app-loading"><Spinner /></div> }.into_any(),
        1 => view! { <AuthScreens /> }.into_any(),
        _ => view! { <MainLayout /> }.into_any(),
    }
}
