use dioxus::prelude::*;
use dioxus_router::prelude::*;

use storefront::{catalog::featured, config::SiteConfig};

use crate::{
    Route,
    components::{
        layout::{GridItem, IndustryStandardGrid, MobileContainer},
        product_card::ProductCard,
    },
};

struct Feature {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "\u{1F9F0}",
        title: "Everything for the job",
        desc: "Hand and power tools, fasteners, paint, plumbing and garden supplies under one roof.",
    },
    Feature {
        icon: "\u{1F4AC}",
        title: "Advice from people who build",
        desc: "Our staff have framed houses, plumbed kitchens and fixed more fences than they can count.",
    },
    Feature {
        icon: "\u{1F511}",
        title: "Services at the counter",
        desc: "Key cutting, paint tinting, screen repair and glass cut to size while you wait.",
    },
];

#[component]
pub fn Home() -> Element {
    let config = use_context::<SiteConfig>();
    let business = config.business;
    let featured = featured();

    rsx! {
        div { class: "home-container",
            // Hero section
            section { class: "hero",
                MobileContainer {
                    div { class: "hero-content",
                        h1 { class: "hero-title", "{business.name}" }
                        p { class: "hero-subtitle", "{business.tagline}" }
                        div { class: "hero-actions",
                            Link {
                                to: Route::Products { page: 1 },
                                class: "btn btn-primary btn-lg",
                                "Browse the Catalog"
                            }
                            Link {
                                to: Route::Contact {},
                                class: "btn btn-secondary btn-lg",
                                "Visit the Store"
                            }
                        }
                    }
                }
            }

            // Features section
            section { class: "features-section",
                MobileContainer {
                    h2 { class: "section-title", "Why shop local" }
                    IndustryStandardGrid { per_row: 3,
                        for feature in FEATURES.iter() {
                            GridItem {
                                div { class: "card feature-card",
                                    div { class: "card-body",
                                        div { class: "feature-icon", "{feature.icon}" }
                                        h3 { class: "feature-title", "{feature.title}" }
                                        p { class: "feature-desc", "{feature.desc}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Featured products
            section { class: "featured-section",
                MobileContainer {
                    h2 { class: "section-title", "Featured this month" }
                    IndustryStandardGrid { per_row: 4,
                        for product in featured {
                            GridItem { key: "{product.id}", ProductCard { product } }
                        }
                    }
                }
            }

            // Call to action
            section { class: "cta-section",
                MobileContainer {
                    h2 { class: "cta-title", "Not sure what you need?" }
                    p { class: "cta-text",
                        "Bring a photo or the broken part and we will find the fix."
                    }
                    Link { to: Route::About {}, class: "btn btn-primary", "About Us" }
                }
            }
        }
    }
}
