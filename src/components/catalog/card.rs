//! Category tile used by the card grid and the mobile strip.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons;
use crate::models::Category;

stylance::import_crate_style!(css, "src/components/catalog/card.module.css");

/// Selectable category tile showing icon, name, and subcategory count.
///
/// Pure render of `(category, is_selected)`; activation is reported
/// through `on_click` with no arguments.
#[component]
pub fn CategoryCard(
    category: Category,
    #[prop(into)] is_selected: Signal<bool>,
    on_click: Callback<()>,
) -> impl IntoView {
    let icon = icons::category_icon(category.icon);
    let count = category.subcategories.len();
    let name = category.name.clone();

    let card_class = move || {
        if is_selected.get() {
            format!("{} {}", css::card, css::cardSelected)
        } else {
            css::card.to_string()
        }
    };
    let badge_class = move || {
        if is_selected.get() {
            format!("{} {}", css::iconBadge, css::iconBadgeSelected)
        } else {
            css::iconBadge.to_string()
        }
    };

    view! {
        <button
            class=card_class
            on:click=move |_| on_click.run(())
            aria-pressed=move || is_selected.get()
        >
            <div class=badge_class aria-hidden="true">
                <Icon icon=icon />
            </div>
            <span class=css::name>{name}</span>
            <span class=css::count>{format!("{count} types")}</span>
            <Show when=move || is_selected.get()>
                <div class=css::selectedBar></div>
            </Show>
        </button>
    }
}
