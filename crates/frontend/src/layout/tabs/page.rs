use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// One open tab. Content is built once and hidden while inactive, so a
/// screen keeps its filters when the user switches away.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = tab.key.clone();
    let is_active = move || tabs_store.active.get().as_deref() == Some(key.as_str());

    log::debug!("tab page created: {}", tab.key);
    let key_for_cleanup = tab.key.clone();
    on_cleanup(move || log::debug!("tab page dropped: {}", key_for_cleanup));

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab.key.clone()
        >
            {render_tab_content(&tab.key)}
        </div>
    }
}

/// Strip of open tabs above the content.
#[component]
pub fn TabBar() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="tabs-bar">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab: TabData| {
                    let key = tab.key.clone();
                    let key_for_click = tab.key.clone();
                    let key_for_close = tab.key.clone();
                    let is_active = move || tabs_store.active.get().as_deref() == Some(key.as_str());
                    view! {
                        <div
                            class="tab"
                            class:tab--active=is_active
                            on:click=move |_| tabs_store.activate_tab(&key_for_click)
                        >
                            <span>{tab.title}</span>
                            <button
                                class="tab__close"
                                title="Close"
                                on:click=move |ev: leptos::ev::MouseEvent| {
                                    ev.stop_propagation();
                                    tabs_store.close_tab(&key_for_close);
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
