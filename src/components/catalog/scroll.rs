//! Horizontally scrollable category strip for narrow viewports.

use leptos::prelude::*;
use leptos_icons::Icon;
use web_sys::{ScrollBehavior, ScrollToOptions};

use super::card::CategoryCard;
use crate::components::icons as ic;
use crate::config::{self, SCROLL_STEP_PX};
use crate::core::selection::{self, Selection};

stylance::import_crate_style!(css, "src/components/catalog/scroll.module.css");

/// "All" pseudo-tile plus one [`CategoryCard`] per category, with arrow
/// buttons that nudge the strip sideways by a fixed step.
#[component]
pub fn MobileCategoryScroll(
    #[prop(into)] selected_category: Signal<Option<String>>,
    on_select_category: Callback<Option<String>>,
) -> impl IntoView {
    let strip_ref = NodeRef::<leptos::html::Div>::new();

    // Relative smooth scroll; fire-and-forget, no effect on selection.
    let scroll_by = move |step: f64| {
        if let Some(strip) = strip_ref.get() {
            let opts = ScrollToOptions::new();
            opts.set_left(step);
            opts.set_behavior(ScrollBehavior::Smooth);
            strip.scroll_by_with_scroll_to_options(&opts);
        }
    };

    let all_class = move || {
        if selected_category.get().is_none() {
            format!("{} {}", css::allTile, css::allTileSelected)
        } else {
            css::allTile.to_string()
        }
    };

    view! {
        <div class=css::wrapper>
            <button
                class=format!("{} {}", css::arrowButton, css::arrowLeft)
                on:click=move |_| scroll_by(-SCROLL_STEP_PX)
                aria-label="Scroll categories left"
            >
                <Icon icon=ic::CHEVRON_LEFT />
            </button>
            <button
                class=format!("{} {}", css::arrowButton, css::arrowRight)
                on:click=move |_| scroll_by(SCROLL_STEP_PX)
                aria-label="Scroll categories right"
            >
                <Icon icon=ic::CHEVRON_RIGHT />
            </button>

            <div class=css::strip node_ref=strip_ref>
                <button class=all_class on:click=move |_| on_select_category.run(None)>
                    <div class=css::allBadge aria-hidden="true">
                        <Icon icon=ic::SPARKLES />
                    </div>
                    <span class=css::allLabel>"All"</span>
                </button>

                <For
                    each=config::catalog
                    key=|category| category.id.clone()
                    children=move |category| {
                        let is_selected = {
                            let id = category.id.clone();
                            Signal::derive(move || {
                                selected_category.get().as_deref() == Some(id.as_str())
                            })
                        };
                        let on_click = {
                            let id = category.id.clone();
                            Callback::new(move |_: ()| {
                                let current = Selection {
                                    category: selected_category.get(),
                                    subcategory: None,
                                };
                                on_select_category.run(selection::category_click(&current, &id).category);
                            })
                        };
                        view! {
                            <div class=css::stripItem>
                                <CategoryCard
                                    category=category
                                    is_selected=is_selected
                                    on_click=on_click
                                />
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
