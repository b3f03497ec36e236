//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::Storefront;
use crate::config::PRODUCTS_URL;
use crate::core::Selection;
use crate::models::Product;
use crate::utils::fetch_json;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This is the single source of truth for cross-component state. The
/// browsing components read it through props and request changes through
/// callbacks; they never mutate it directly.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active category/subcategory selection.
    pub selection: RwSignal<Selection>,
    /// Current search query, verbatim (no debouncing at this layer).
    pub query: RwSignal<String>,
    /// Product list from the data source, replaced wholesale on load.
    pub products: RwSignal<Vec<Product>>,
}

impl AppContext {
    /// Creates a new application context with default state: nothing
    /// selected, empty query, empty product list.
    pub fn new() -> Self {
        Self {
            selection: RwSignal::new(Selection::default()),
            query: RwSignal::new(String::new()),
            products: RwSignal::new(Vec::new()),
        }
    }

    /// Select a category, or clear it with `None`.
    ///
    /// Clearing the category always clears the subcategory with it.
    pub fn select_category(&self, id: Option<String>) {
        self.selection.update(|sel| {
            if id.is_none() {
                sel.subcategory = None;
            }
            sel.category = id;
        });
    }

    /// Select a subcategory, or clear it with `None`.
    pub fn select_subcategory(&self, id: Option<String>) {
        self.selection.update(|sel| sel.subcategory = id);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Startup
// ============================================================================

/// Load the product list from the static data source.
///
/// Failures are logged and leave the list empty: the storefront renders
/// without products rather than failing.
fn load_products(ctx: AppContext) {
    spawn_local(async move {
        match fetch_json::<Vec<Product>>(PRODUCTS_URL).await {
            Ok(products) => ctx.products.set(products),
            Err(err) => leptos::logging::error!("failed to load products: {err}"),
        }
    });
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Kicks off the product list load
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    load_products(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    color: #1f2937;
                ">
                    <h1 style="color: #b91c1c; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <p style="color: #6b7280; margin-bottom: 1rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="color: #b91c1c; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <Storefront />
        </ErrorBoundary>
    }
}
