//! Product search box with live suggestions.
//!
//! Owns the query string and the suggestion panel's visibility; the
//! product list arrives fresh from the parent on every render and the
//! suggestion list is derived from it, never cached. Query changes and
//! explicit suggestion picks are reported upward through callbacks.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use leptos_use::on_click_outside;
use wasm_bindgen::JsCast;

use crate::components::icons as ic;
use crate::config::MIN_QUERY_LEN;
use crate::core::search::{self, Segment};
use crate::models::Product;
use crate::utils::format_price;

stylance::import_crate_style!(css, "src/components/search.module.css");

#[component]
pub fn ProductSearch(
    #[prop(into)] products: Signal<Vec<Product>>,
    on_search: Callback<String>,
    #[prop(optional, into)] on_select_product: Option<Callback<Product>>,
) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (query, set_query) = signal(String::new());
    let (panel_open, set_panel_open) = signal(false);

    // Candidates in list order, truncated; empty below the length threshold.
    let suggestions = Memo::new(move |_| {
        query.with(|q| products.with(|list| search::suggestions(list, q)))
    });

    let above_threshold = move || query.with(|q| q.chars().count() >= MIN_QUERY_LEN);
    let show_list = move || {
        panel_open.get() && above_threshold() && suggestions.with(|list| !list.is_empty())
    };
    let show_no_results = move || {
        panel_open.get() && above_threshold() && suggestions.with(|list| list.is_empty())
    };

    // Pointer interactions outside the component close the panel; the
    // query text is preserved and refocusing reopens it.
    let _ = on_click_outside(container_ref, move |_| set_panel_open.set(false));

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let value = target.unchecked_into::<web_sys::HtmlInputElement>().value();
        set_panel_open.set(value.chars().count() >= MIN_QUERY_LEN);
        set_query.set(value.clone());
        on_search.run(value);
    };

    let handle_focus = move |_: ev::FocusEvent| {
        if above_threshold() {
            set_panel_open.set(true);
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            set_panel_open.set(false);
        }
    };

    let choose = Callback::new(move |product: Product| {
        set_query.set(product.name.clone());
        set_panel_open.set(false);
        on_search.run(product.name.clone());
        if let Some(callback) = on_select_product {
            callback.run(product);
        }
    });

    let handle_clear = move |_: ev::MouseEvent| {
        set_query.set(String::new());
        set_panel_open.set(false);
        on_search.run(String::new());
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    };

    view! {
        <div class=css::search node_ref=container_ref>
            <div class=css::field>
                <span class=css::searchIcon aria-hidden="true">
                    <Icon icon=ic::SEARCH />
                </span>
                <input
                    node_ref=input_ref
                    type="text"
                    class=css::input
                    placeholder="Search for spinach, tomatoes, herbs..."
                    autocomplete="off"
                    spellcheck="false"
                    prop:value=query
                    on:input=handle_input
                    on:focus=handle_focus
                    on:keydown=handle_keydown
                />
                <Show when=move || query.with(|q| !q.is_empty())>
                    <button
                        class=css::clearButton
                        on:click=handle_clear
                        aria-label="Clear search"
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </Show>
            </div>

            <Show when=show_list>
                <div class=css::panel>
                    <For
                        each=move || suggestions.get()
                        key=|product| product.id.clone()
                        children=move |product| {
                            view! {
                                <SuggestionRow product=product query=query on_choose=choose />
                            }
                        }
                    />
                </div>
            </Show>

            <Show when=show_no_results>
                <div class=css::noResults>
                    <p class=css::noResultsText>
                        {move || query.with(|q| format!("No products found for \"{q}\""))}
                    </p>
                </div>
            </Show>
        </div>
    }
}

/// One suggestion: thumbnail (or placeholder), name with the query
/// occurrences emphasized, price per unit, and a stock badge.
#[component]
fn SuggestionRow(
    product: Product,
    #[prop(into)] query: Signal<String>,
    on_choose: Callback<Product>,
) -> impl IntoView {
    let price_label = format_price(product.price, &product.unit);
    let image = product.image_url.clone();
    let alt = product.name.clone();
    let available = product.is_available;
    let picked = product.clone();

    let name = product.name.clone();
    let highlighted_name = move || {
        query.with(|q| {
            search::highlight(&name, q)
                .into_iter()
                .map(|segment| match segment {
                    Segment::Plain(text) => view! { <span>{text}</span> }.into_any(),
                    Segment::Match(text) => {
                        view! { <span class=css::highlight>{text}</span> }.into_any()
                    }
                })
                .collect_view()
        })
    };

    view! {
        <button class=css::row on:click=move |_| on_choose.run(picked.clone())>
            {match image {
                Some(url) => view! { <img class=css::thumb src=url alt=alt /> }.into_any(),
                None => view! {
                    <div class=css::thumbFallback aria-hidden="true">
                        <Icon icon=ic::BASKET />
                    </div>
                }
                .into_any(),
            }}
            <div class=css::rowBody>
                <p class=css::rowName>{highlighted_name}</p>
                <p class=css::rowPrice>{price_label}</p>
            </div>
            <Show when=move || available>
                <span class=css::stockBadge>"In Stock"</span>
            </Show>
        </button>
    }
}
