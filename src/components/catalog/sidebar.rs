//! Category sidebar with an expandable subcategory tree.
//!
//! Selection lives with the parent; this component only owns which
//! categories are expanded. Expansion is a view concern and toggles
//! independently of selection.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config;
use crate::core::selection::{self, Selection};
use crate::models::{Category, Subcategory};

stylance::import_crate_style!(css, "src/components/catalog/sidebar.module.css");

#[component]
pub fn CategorySidebar(
    #[prop(into)] selected_category: Signal<Option<String>>,
    #[prop(into)] selected_subcategory: Signal<Option<String>>,
    on_select_category: Callback<Option<String>>,
    on_select_subcategory: Callback<Option<String>>,
) -> impl IntoView {
    // Expanded iff it is the externally-selected category at mount.
    let expanded = RwSignal::new(match selected_category.get_untracked() {
        Some(id) => vec![id],
        None => Vec::new(),
    });

    let all_active =
        move || selected_category.get().is_none() && selected_subcategory.get().is_none();
    let all_class = move || {
        if all_active() {
            format!("{} {}", css::allButton, css::allButtonActive)
        } else {
            css::allButton.to_string()
        }
    };
    // Clears both selections; the expansion set is left alone.
    let handle_all = move |_: leptos::ev::MouseEvent| {
        on_select_category.run(None);
        on_select_subcategory.run(None);
    };

    view! {
        <div class=css::sidebar>
            <h3 class=css::heading>"Categories"</h3>

            <button class=all_class on:click=handle_all>"All Products"</button>

            <div class=css::list>
                <For
                    each=config::catalog
                    key=|category| category.id.clone()
                    children=move |category| {
                        view! {
                            <SidebarCategory
                                category=category
                                selected_category=selected_category
                                selected_subcategory=selected_subcategory
                                expanded=expanded
                                on_select_category=on_select_category
                                on_select_subcategory=on_select_subcategory
                            />
                        }
                    }
                />
            </div>
        </div>
    }
}

/// One category row plus its (conditionally rendered) subcategory list.
#[component]
fn SidebarCategory(
    category: Category,
    selected_category: Signal<Option<String>>,
    selected_subcategory: Signal<Option<String>>,
    expanded: RwSignal<Vec<String>>,
    on_select_category: Callback<Option<String>>,
    on_select_subcategory: Callback<Option<String>>,
) -> impl IntoView {
    let icon = ic::category_icon(category.icon);
    let name = category.name.clone();

    let is_expanded = {
        let id = category.id.clone();
        Signal::derive(move || expanded.with(|ids| ids.iter().any(|member| member == &id)))
    };
    // Row highlight only while no subcategory narrows the selection.
    let is_active = {
        let id = category.id.clone();
        Signal::derive(move || {
            selected_subcategory.get().is_none()
                && selected_category.get().as_deref() == Some(id.as_str())
        })
    };
    // Icon badge stays lit whenever the category is selected, even via a
    // subcategory.
    let is_current = {
        let id = category.id.clone();
        Signal::derive(move || selected_category.get().as_deref() == Some(id.as_str()))
    };

    let row_class = move || {
        if is_active.get() {
            format!("{} {}", css::row, css::rowActive)
        } else {
            css::row.to_string()
        }
    };
    let badge_class = move || {
        if is_current.get() {
            format!("{} {}", css::rowBadge, css::rowBadgeActive)
        } else {
            css::rowBadge.to_string()
        }
    };

    let handle_click = {
        let id = category.id.clone();
        move |_: leptos::ev::MouseEvent| {
            let current = Selection {
                category: selected_category.get(),
                subcategory: selected_subcategory.get(),
            };
            let next = selection::category_click(&current, &id);
            on_select_category.run(next.category.clone());
            on_select_subcategory.run(next.subcategory);
            // Independent effect: the clicked category always flips
            // between expanded and collapsed.
            expanded.update(|ids| selection::toggle_membership(ids, &id));
        }
    };

    let subcategories = category.subcategories.clone();
    let sub_list = move || {
        is_expanded.get().then(|| {
            let subs = subcategories.clone();
            view! {
                <div class=css::subList>
                    <For
                        each=move || subs.clone()
                        key=|sub| sub.id.clone()
                        children=move |sub| {
                            view! {
                                <SidebarSubcategory
                                    sub=sub
                                    selected_category=selected_category
                                    selected_subcategory=selected_subcategory
                                    on_select_category=on_select_category
                                    on_select_subcategory=on_select_subcategory
                                />
                            }
                        }
                    />
                </div>
            }
        })
    };

    view! {
        <div>
            <button class=row_class on:click=handle_click aria-expanded=move || is_expanded.get()>
                <div class=badge_class aria-hidden="true">
                    <Icon icon=icon />
                </div>
                <span class=css::rowLabel>{name}</span>
                <span class=css::chevron aria-hidden="true">
                    {move || {
                        if is_expanded.get() {
                            view! { <Icon icon=ic::CHEVRON_DOWN /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::CHEVRON_RIGHT /> }.into_any()
                        }
                    }}
                </span>
            </button>
            {sub_list}
        </div>
    }
}

#[component]
fn SidebarSubcategory(
    sub: Subcategory,
    selected_category: Signal<Option<String>>,
    selected_subcategory: Signal<Option<String>>,
    on_select_category: Callback<Option<String>>,
    on_select_subcategory: Callback<Option<String>>,
) -> impl IntoView {
    let name = sub.name.clone();

    let is_active = {
        let id = sub.id.clone();
        Signal::derive(move || selected_subcategory.get().as_deref() == Some(id.as_str()))
    };
    let row_class = move || {
        if is_active.get() {
            format!("{} {}", css::subRow, css::subRowActive)
        } else {
            css::subRow.to_string()
        }
    };

    let handle_click = {
        let id = sub.id.clone();
        let parent = sub.category_id.clone();
        move |_: leptos::ev::MouseEvent| {
            let current = Selection {
                category: selected_category.get(),
                subcategory: selected_subcategory.get(),
            };
            let next = selection::subcategory_click(&current, &id, &parent);
            on_select_category.run(next.category.clone());
            on_select_subcategory.run(next.subcategory);
        }
    };

    view! {
        <button class=row_class on:click=handle_click>{name}</button>
    }
}
