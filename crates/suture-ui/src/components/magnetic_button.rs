//! Magnetic Button Component
//!
//! A button that leans towards the pointer while hovered and springs back
//! when the pointer leaves. A soft glow fades in behind it on hover.

use std::rc::Rc;

use dioxus::html::point_interaction::InteractionLocation;
use dioxus::prelude::*;
use suture_core::motion::Spring;

use super::button::with_extra_class;
use crate::hooks::use_spring;

/// Share of the pointer's distance from centre the button follows.
pub const MAGNETIC_PULL: f64 = 0.3;

/// Offset of the button for a pointer at `pointer` over a button centred at `center`.
pub fn magnetic_offset(pointer: (f64, f64), center: (f64, f64)) -> (f64, f64) {
    (
        (pointer.0 - center.0) * MAGNETIC_PULL,
        (pointer.1 - center.1) * MAGNETIC_PULL,
    )
}

/// Properties for the MagneticButton component
#[derive(Clone, PartialEq, Props)]
pub struct MagneticButtonProps {
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub aria_label: Option<String>,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     MagneticButton { onclick: move |_| open_cart(), "Cart" }
/// }
/// ```
#[component]
pub fn MagneticButton(props: MagneticButtonProps) -> Element {
    let mut element: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut center: Signal<Option<(f64, f64)>> = use_signal(|| None);
    let mut hovered = use_signal(|| false);
    let mut x = use_spring(Spring::MAGNETIC, 0.0);
    let mut y = use_spring(Spring::MAGNETIC, 0.0);

    let full_class = with_extra_class("magnetic-btn", props.class.as_deref());
    let glow_class = if hovered() { "magnetic-btn__glow visible" } else { "magnetic-btn__glow" };
    let label = props.aria_label.clone().unwrap_or_default();
    let (tx, ty) = (x.get(), y.get());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{label}",
            style: "transform: translate({tx}px, {ty}px);",
            onmounted: move |evt| element.set(Some(evt.data())),
            onmouseenter: move |_| async move {
                hovered.set(true);
                // the button may have moved since the last hover
                let Some(mounted) = element() else { return };
                match mounted.get_client_rect().await {
                    Ok(rect) => {
                        let c = rect.center();
                        center.set(Some((c.x, c.y)));
                    }
                    Err(e) => tracing::debug!("Magnetic button rect unavailable: {:?}", e),
                }
            },
            onmousemove: move |evt| {
                if let Some(c) = center() {
                    let p = evt.client_coordinates();
                    let (dx, dy) = magnetic_offset((p.x, p.y), c);
                    x.set(dx);
                    y.set(dy);
                }
            },
            onmouseleave: move |_| {
                hovered.set(false);
                x.set(0.0);
                y.set(0.0);
            },
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            span { class: "magnetic-btn__label", {props.children} }
            div { class: "{glow_class}" }
        }
    }
}
