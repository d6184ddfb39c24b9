use dioxus::prelude::*;
use dioxus_router::prelude::*;

use storefront::catalog::{CATALOG, PRODUCTS_PER_PAGE, paginate};

use crate::{
    Route,
    components::{
        layout::{GridItem, IndustryStandardGrid, MobileContainer},
        product_card::ProductCard,
    },
};

// Products
//
// the catalog, a page at a time.  the page number comes from ?page=N, which also makes each
// page its own route key for scroll restoration
#[component]
pub fn Products(page: usize) -> Element {
    let current = paginate(CATALOG, page, PRODUCTS_PER_PAGE);

    rsx! {
        MobileContainer {
            div { class: "page-header",
                h1 { class: "page-title", "Catalog" }
                p { class: "page-lead",
                    "A selection of what is on our shelves. Prices are confirmed at the counter, and "
                    "if you do not see it here, ask: we can usually order it in."
                }
            }

            IndustryStandardGrid { per_row: 3,
                for product in current.items.iter() {
                    GridItem { key: "{product.id}", ProductCard { product } }
                }
            }

            nav { class: "pager",
                if current.has_prev() {
                    Link {
                        to: Route::Products { page: current.page - 1 },
                        class: "btn btn-secondary",
                        "Previous"
                    }
                } else {
                    button { class: "btn btn-secondary", disabled: true, "Previous" }
                }
                span { class: "pager-status", "Page {current.page} of {current.page_count}" }
                if current.has_next() {
                    Link {
                        to: Route::Products { page: current.page + 1 },
                        class: "btn btn-secondary",
                        "Next"
                    }
                } else {
                    button { class: "btn btn-secondary", disabled: true, "Next" }
                }
            }
        }
    }
}
