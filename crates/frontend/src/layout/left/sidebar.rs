//! Sidebar with collapsible menu groups.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    /// (tab key, icon)
    items: Vec<(&'static str, &'static str)>,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "overview",
            label: "Overview",
            icon: "bar-chart",
            items: vec![("d400_overview", "layout-dashboard")],
        },
        MenuGroup {
            id: "assets",
            label: "Assets",
            icon: "database",
            items: vec![
                ("a001_equipment", "server"),
                ("a002_team", "users"),
                ("a003_technician", "user"),
            ],
        },
        MenuGroup {
            id: "maintenance",
            label: "Maintenance",
            icon: "tool",
            items: vec![
                ("a004_maintenance_request", "clipboard"),
                ("a005_preventive_schedule", "calendar"),
            ],
        },
        MenuGroup {
            id: "employee",
            label: "Employee",
            icon: "user",
            items: vec![
                ("a004_employee_dashboard", "home"),
                ("a004_submit_request", "plus"),
                ("a004_my_requests", "list"),
            ],
        },
        MenuGroup {
            id: "technician",
            label: "Technician",
            icon: "tool",
            items: vec![("a004_job_board", "briefcase")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let expanded_groups = RwSignal::new(vec!["overview", "assets", "maintenance"]);

    view! {
        <div class="app-sidebar__content">
            {menu_groups().into_iter().map(|group| {
                let group_id = group.id;
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| *x == group_id) {
                                        items.remove(pos);
                                    } else {
                                        items.push(group_id);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.with(|g| g.contains(&group_id))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|g| g.contains(&group_id))>
                            <div class="app-sidebar__children">
                                {group.items.clone().into_iter().map(|(key, icon_name)| {
                                    let label = tab_label_for_key(key);
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|a| a.as_deref() == Some(key))
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(key, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tabs::registry::TAB_KEYS;

    #[test]
    fn test_menu_covers_every_screen_once() {
        let mut keys: Vec<&str> = menu_groups()
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|(k, _)| k))
            .collect();
        keys.sort_unstable();
        let mut expected = TAB_KEYS.to_vec();
        expected.sort_unstable();
        assert_eq!(keys, expected);
    }
}
