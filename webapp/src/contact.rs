use dioxus::prelude::*;

use storefront::config::SiteConfig;

use crate::components::layout::{GridItem, IndustryStandardGrid, MobileContainer};

// Contact
//
// the form collects nothing: there is no backend to send it to, so submitting only keeps
// the browser from navigating away.  the details column is the real way to reach the store
#[component]
pub fn Contact() -> Element {
    let config = use_context::<SiteConfig>();
    let business = config.business;

    rsx! {
        MobileContainer {
            div { class: "page-header",
                h1 { class: "page-title", "Contact Us" }
                p { class: "page-lead",
                    "Questions about a project, a special order or whether we have it in stock? Reach out."
                }
            }

            IndustryStandardGrid { per_row: 2,
                GridItem {
                    div { class: "card",
                        div { class: "card-body",
                            h2 { class: "section-title", "Visit or call" }
                            dl { class: "contact-details",
                                dt { "Address" }
                                dd { "{business.address}" }
                                dt { "Phone" }
                                dd {
                                    a { href: "tel:{business.phone}", "{business.phone}" }
                                }
                                dt { "Email" }
                                dd {
                                    a { href: "mailto:{business.email}", "{business.email}" }
                                }
                                dt { "Hours" }
                                for line in business.hours.iter() {
                                    dd { "{line}" }
                                }
                            }
                        }
                    }
                }

                GridItem {
                    div { class: "card",
                        div { class: "card-body",
                            h2 { class: "section-title", "Send a message" }
                            form {
                                class: "contact-form",
                                onsubmit: move |event| event.prevent_default(),
                                div { class: "form-group",
                                    label { class: "form-label", r#for: "contact-name", "Name" }
                                    input {
                                        class: "form-input",
                                        id: "contact-name",
                                        name: "name",
                                        r#type: "text",
                                        autocomplete: "name",
                                    }
                                }
                                div { class: "form-group",
                                    label { class: "form-label", r#for: "contact-email", "Email" }
                                    input {
                                        class: "form-input",
                                        id: "contact-email",
                                        name: "email",
                                        r#type: "email",
                                        autocomplete: "email",
                                    }
                                }
                                div { class: "form-group",
                                    label { class: "form-label", r#for: "contact-phone", "Phone" }
                                    input {
                                        class: "form-input",
                                        id: "contact-phone",
                                        name: "phone",
                                        r#type: "tel",
                                        autocomplete: "tel",
                                    }
                                }
                                div { class: "form-group",
                                    label { class: "form-label", r#for: "contact-message", "Message" }
                                    textarea {
                                        class: "form-textarea",
                                        id: "contact-message",
                                        name: "message",
                                    }
                                }
                                button { class: "btn btn-primary", r#type: "submit", "Send" }
                                p { class: "form-note",
                                    "For the quickest answer, give us a call during store hours."
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
