use dioxus::prelude::*;

use storefront::catalog::{Product, format_price};

#[derive(Clone, PartialEq, Props)]
pub struct ProductCardProps {
    product: &'static Product,
}

#[component]
pub fn ProductCard(props: ProductCardProps) -> Element {
    let product = props.product;
    let price = format_price(product.price_cents);

    rsx! {
        div { class: "card product-card",
            div { class: "card-body",
                div { class: "product-category", "{product.category}" }
                h3 { class: "product-name", "{product.name}" }
                p { class: "product-desc", "{product.description}" }
                div { class: "product-price", "{price}" }
            }
        }
    }
}
