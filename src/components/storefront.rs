//! Storefront container.
//!
//! Owns nothing itself: it wires the browsing components to the
//! [`AppContext`] signals (the single source of truth for selection and
//! query), switches between the sidebar and the mobile strip by viewport
//! width, and renders the filtered product grid.

use leptos::prelude::*;
use leptos_use::use_media_query;

use super::catalog::{CategorySidebar, MobileCategoryScroll};
use super::search::ProductSearch;
use crate::app::AppContext;
use crate::config::{self, APP_NAME, APP_TAGLINE};
use crate::core::search::filter_products;
use crate::models::{self, Product};
use crate::utils::format_price;

stylance::import_crate_style!(css, "src/components/storefront.module.css");

#[component]
pub fn Storefront() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_mobile = use_media_query("(max-width: 768px)");

    let selected_category = Signal::derive(move || ctx.selection.with(|sel| sel.category.clone()));
    let selected_subcategory =
        Signal::derive(move || ctx.selection.with(|sel| sel.subcategory.clone()));

    let on_select_category = Callback::new(move |id: Option<String>| ctx.select_category(id));
    let on_select_subcategory = Callback::new(move |id: Option<String>| ctx.select_subcategory(id));
    let on_search = Callback::new(move |query: String| ctx.query.set(query));

    // Picking a suggestion jumps the grid to the product's own category
    // (or to "All Products" when the product carries no label).
    let on_select_product = Callback::new(move |product: Product| {
        let catalog = config::catalog();
        let category = product.category.as_deref().and_then(|label| {
            catalog
                .iter()
                .find(|category| category.name.eq_ignore_ascii_case(label))
        });
        ctx.select_category(category.map(|category| category.id.clone()));
    });

    let section_title = move || {
        ctx.selection.with(|sel| {
            if sel.is_all() {
                return "All Products".to_string();
            }
            let catalog = config::catalog();
            sel.subcategory
                .as_deref()
                .and_then(|id| models::find_subcategory(&catalog, id))
                .map(|sub| sub.name.clone())
                .or_else(|| {
                    sel.category
                        .as_deref()
                        .and_then(|id| models::find_category(&catalog, id))
                        .map(|category| category.name.clone())
                })
                .unwrap_or_else(|| "All Products".to_string())
        })
    };

    let visible_products = Memo::new(move |_| {
        let catalog = config::catalog();
        ctx.selection.with(|sel| {
            let category_name = sel
                .category
                .as_deref()
                .and_then(|id| models::find_category(&catalog, id))
                .map(|category| category.name.clone());
            let subcategory_name = sel
                .subcategory
                .as_deref()
                .and_then(|id| models::find_subcategory(&catalog, id))
                .map(|sub| sub.name.clone());
            ctx.products.with(|products| {
                ctx.query.with(|query| {
                    filter_products(
                        products,
                        category_name.as_deref(),
                        subcategory_name.as_deref(),
                        query,
                    )
                })
            })
        })
    });

    view! {
        <div class=css::page>
            <header class=css::header>
                <div class=css::brand>
                    <h1 class=css::title>{APP_NAME}</h1>
                    <p class=css::tagline>{APP_TAGLINE}</p>
                </div>
                <ProductSearch
                    products=ctx.products
                    on_search=on_search
                    on_select_product=on_select_product
                />
            </header>

            <div class=css::layout>
                <Show when=move || !is_mobile.get()>
                    <aside class=css::sidebarPane>
                        <CategorySidebar
                            selected_category=selected_category
                            selected_subcategory=selected_subcategory
                            on_select_category=on_select_category
                            on_select_subcategory=on_select_subcategory
                        />
                    </aside>
                </Show>

                <main class=css::content>
                    <Show when=move || is_mobile.get()>
                        <MobileCategoryScroll
                            selected_category=selected_category
                            on_select_category=on_select_category
                        />
                    </Show>

                    <h2 class=css::sectionTitle>{section_title}</h2>

                    <section class=css::grid>
                        <For
                            each=move || visible_products.get()
                            key=|product| product.id.clone()
                            children=|product| view! { <ProductTile product=product /> }
                        />
                    </section>

                    <Show when=move || visible_products.with(|list| list.is_empty())>
                        <p class=css::emptyNote>"Nothing here matches the current filters."</p>
                    </Show>
                </main>
            </div>
        </div>
    }
}

#[component]
fn ProductTile(product: Product) -> impl IntoView {
    let price_label = format_price(product.price, &product.unit);
    let stock_class = if product.is_available {
        css::inStock
    } else {
        css::outOfStock
    };
    let stock_label = if product.is_available {
        "In Stock"
    } else {
        "Out of Stock"
    };

    view! {
        <article class=css::tile>
            <h4 class=css::tileName>{product.name.clone()}</h4>
            {product
                .description
                .clone()
                .map(|text| view! { <p class=css::tileDesc>{text}</p> })}
            <div class=css::tileFooter>
                <span class=css::tilePrice>{price_label}</span>
                <span class=stock_class>{stock_label}</span>
            </div>
        </article>
    }
}
