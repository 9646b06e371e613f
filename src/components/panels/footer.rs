//! Site footer. Links, newsletter field and socials are inert.

use dioxus::prelude::*;
use suture_ui::{Button, ButtonVariant};

const CLIENT_SERVICES: [&str; 5] = [
    "Shipping & Returns",
    "Size Guide",
    "Garment Care",
    "Track Order",
    "FAQ",
];

const LEGAL: [&str; 5] = [
    "Privacy Policy",
    "Terms of Service",
    "Cookie Settings",
    "Careers",
    "Press Inquiries",
];

const SOCIALS: [&str; 3] = ["INSTAGRAM", "TWITTER", "ARE.NA"];

/// Newsletter submit, a bare label on the dark footer.
const JOIN_VARIANT: ButtonVariant = ButtonVariant::Ghost;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__columns",
                    div { class: "footer__column",
                        h3 { class: "footer__brand", "NEON-SUTURE" }
                        p { class: "footer__blurb",
                            "Redefining the boundaries between organic form and technical function. "
                            "A study in post-modern armor."
                        }
                        div {
                            h4 { class: "footer__label", "Global Headquarters" }
                            p { class: "footer__address",
                                "800 Traction Ave"
                                br {}
                                "Arts District"
                                br {}
                                "Los Angeles, CA 90013"
                            }
                        }
                        div { class: "footer__label", "EST. 2024 / SYSTEM 01" }
                    }

                    div { class: "footer__column",
                        h4 { class: "footer__heading", "Client Services" }
                        for link in CLIENT_SERVICES {
                            a { key: "{link}", class: "footer__link", "{link}" }
                        }
                        div {
                            p { class: "footer__label", "Concierge" }
                            p { class: "footer__link", "+1 (213) 555-0199" }
                        }
                    }

                    div { class: "footer__column",
                        h4 { class: "footer__heading", "Legal & Corporate" }
                        for link in LEGAL {
                            a { key: "{link}", class: "footer__link", "{link}" }
                        }
                    }

                    div { class: "footer__column",
                        h4 { class: "footer__heading", "System Updates" }
                        p { class: "footer__blurb",
                            "Subscribe to receive notifications about new protocols and archive releases."
                        }
                        div { class: "footer__newsletter",
                            input { r#type: "email", placeholder: "ENTER EMAIL" }
                            Button { variant: JOIN_VARIANT, class: "footer__join".to_string(), "Join" }
                        }
                        div { class: "footer__socials",
                            for social in SOCIALS {
                                a { key: "{social}", class: "footer__social", "{social}" }
                            }
                        }
                    }
                }

                div { class: "footer__base",
                    h2 { class: "footer__watermark", "FUTURE" }
                    div { class: "footer__legal",
                        "\u{00A9} 2024 NEON-SUTURE INC."
                        br {}
                        "ALL RIGHTS RESERVED."
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_button_is_ghost() {
        assert_eq!(JOIN_VARIANT.class(), "btn-ghost");
    }
}
