//! Property-based tests for transforms, scroll progress and the cart
//!
//! Uses proptest to check the clamping and accounting invariants.

use std::collections::HashMap;
use std::sync::Arc;

use proptest::prelude::*;
use suture_core::motion::{ElementBox, ScrollMetrics, ScrollOffset, StyleValue, Transform};
use suture_core::{Cart, Product, ProductId};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Strictly increasing breakpoints paired with arbitrary outputs
fn table_strategy() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (2usize..8)
        .prop_flat_map(|len| {
            (
                -1000.0f64..1000.0,
                prop::collection::vec(0.001f64..500.0, len - 1),
                prop::collection::vec(-1e4f64..1e4, len),
            )
        })
        .prop_map(|(start, steps, outputs)| {
            let mut inputs = vec![start];
            for step in steps {
                let last = *inputs.last().unwrap();
                inputs.push(last + step);
            }
            (inputs, outputs)
        })
}

/// The same tables rendered as two-slot CSS strings, `blur(Apx) opacity(B)`
fn css_table_strategy() -> impl Strategy<Value = (Vec<f64>, Vec<(f64, f64)>)> {
    table_strategy().prop_flat_map(|(inputs, blur)| {
        let len = blur.len();
        (
            Just(inputs),
            Just(blur),
            prop::collection::vec(0.0f64..1.0, len),
        )
            .prop_map(|(inputs, blur, opacity)| {
                (inputs, blur.into_iter().zip(opacity).collect())
            })
    })
}

fn css_value((blur, opacity): (f64, f64)) -> StyleValue {
    format!("blur({blur}px) opacity({opacity})").parse().unwrap()
}

fn product_strategy() -> impl Strategy<Value = Arc<Product>> {
    ("[0-9]{1,3}", 0u64..100_000).prop_map(|(id, price)| {
        Arc::new(Product {
            id: ProductId::new(id),
            name: "ITEM".to_string(),
            collection: "TEST".to_string(),
            price: suture_core::format_price(price),
            image: String::new(),
            description: String::new(),
            details: vec![],
        })
    })
}

fn bracket(inputs: &[f64], outputs: &[f64], p: f64) -> (f64, f64) {
    let i = inputs
        .windows(2)
        .position(|w| w[0] <= p && p <= w[1])
        .unwrap();
    let (a, b) = (outputs[i], outputs[i + 1]);
    (a.min(b), a.max(b))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Inside the domain the output lies between the bracketing outputs
    #[test]
    fn map_stays_between_brackets((inputs, outputs) in table_strategy(), f in 0.0f64..=1.0) {
        let lo = inputs[0];
        let hi = *inputs.last().unwrap();
        let p = (lo + (hi - lo) * f).clamp(lo, hi);
        let t = Transform::new(inputs.clone(), outputs.clone());
        let value = t.map(p);
        let (min, max) = bracket(&inputs, &outputs, p);
        prop_assert!(value >= min - 1e-6 && value <= max + 1e-6);
    }

    /// The domain endpoints map exactly to the first and last outputs
    #[test]
    fn map_hits_endpoints((inputs, outputs) in table_strategy()) {
        let t = Transform::new(inputs.clone(), outputs.clone());
        prop_assert_eq!(t.map(inputs[0]), outputs[0]);
        prop_assert_eq!(t.map(*inputs.last().unwrap()), *outputs.last().unwrap());
    }

    /// Outside the domain the nearest endpoint is returned
    #[test]
    fn map_clamps_outside((inputs, outputs) in table_strategy(), overshoot in 0.001f64..1e6) {
        let t = Transform::new(inputs.clone(), outputs.clone());
        prop_assert_eq!(t.map(inputs[0] - overshoot), outputs[0]);
        prop_assert_eq!(
            t.map(*inputs.last().unwrap() + overshoot),
            *outputs.last().unwrap()
        );
    }

    /// CSS strings interpolate slot by slot within the bracketing outputs
    #[test]
    fn css_map_stays_between_brackets((inputs, slots) in css_table_strategy(), f in 0.0f64..=1.0) {
        let lo = inputs[0];
        let hi = *inputs.last().unwrap();
        let p = (lo + (hi - lo) * f).clamp(lo, hi);
        let outputs: Vec<StyleValue> = slots.iter().copied().map(css_value).collect();
        let value = Transform::new(inputs.clone(), outputs).map(p);

        let blur: Vec<f64> = slots.iter().map(|s| s.0).collect();
        let opacity: Vec<f64> = slots.iter().map(|s| s.1).collect();
        for (slot, column) in [blur, opacity].iter().enumerate() {
            let (min, max) = bracket(&inputs, column, p);
            let n = value.numbers()[slot];
            prop_assert!(n >= min - 1e-6 && n <= max + 1e-6);
        }
    }

    /// CSS endpoints come back exactly, text and numbers alike
    #[test]
    fn css_map_hits_endpoints((inputs, slots) in css_table_strategy(), overshoot in 0.0f64..1e3) {
        let outputs: Vec<StyleValue> = slots.iter().copied().map(css_value).collect();
        let t = Transform::new(inputs.clone(), outputs.clone());
        let first = t.map(inputs[0] - overshoot);
        let last = t.map(*inputs.last().unwrap() + overshoot);
        prop_assert_eq!(first.to_string(), outputs[0].to_string());
        prop_assert_eq!(&first, &outputs[0]);
        prop_assert_eq!(&last, outputs.last().unwrap());
    }

    /// Hex colours survive a transform at both ends
    #[test]
    fn hex_color_endpoints(from in 0u32..0x100_0000, to in 0u32..0x100_0000, f in 0.0f64..=1.0) {
        let (a, b) = (format!("#{from:06x}"), format!("#{to:06x}"));
        let t = Transform::css(vec![0.0, 1.0], &[a.as_str(), b.as_str()]);
        prop_assert_eq!(t.map(0.0), a.parse::<StyleValue>().unwrap());
        prop_assert_eq!(t.map(1.0), b.parse::<StyleValue>().unwrap());
        let mid = t.map(f);
        for channel in &mid.numbers()[..3] {
            prop_assert!((0.0..=255.0).contains(channel));
        }
    }

    /// Any decreasing pair of breakpoints is rejected
    #[test]
    fn decreasing_breakpoints_rejected(a in -100.0f64..100.0, drop in 0.001f64..100.0) {
        prop_assert!(Transform::try_new(vec![a, a - drop], vec![0.0, 1.0]).is_err());
    }

    /// Element progress is always within [0, 1]
    #[test]
    fn element_progress_is_clamped(
        top in 0.0f64..10_000.0,
        height in 1.0f64..5_000.0,
        viewport in 100.0f64..2_000.0,
        scroll_y in -1_000.0f64..20_000.0,
    ) {
        let mut elements = HashMap::new();
        elements.insert("target".to_string(), ElementBox { top, height });
        let metrics = ScrollMetrics {
            scroll_y,
            viewport_height: viewport,
            document_height: 20_000.0,
            elements,
        };
        for offset in [ScrollOffset::element("target"), ScrollOffset::passing("target")] {
            let p = offset.progress(&metrics);
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }

    /// The total is the sum of all added prices, duplicates included
    #[test]
    fn total_sums_every_entry(products in prop::collection::vec(product_strategy(), 0..20)) {
        let mut cart = Cart::new();
        let mut expected = 0u64;
        for p in &products {
            expected += p.numeric_price().unwrap();
            cart.add(p.clone());
        }
        prop_assert_eq!(cart.len(), products.len());
        prop_assert_eq!(cart.total(), expected);
    }

    /// Adding then removing a fresh id restores the previous entries
    #[test]
    fn add_remove_roundtrip(
        products in prop::collection::vec(product_strategy(), 0..10),
        price in 0u64..100_000,
    ) {
        let mut cart = Cart::new();
        for p in products {
            cart.add(p);
        }
        let before = cart.entries().to_vec();
        let fresh = Arc::new(Product {
            id: ProductId::new("fresh"),
            name: "FRESH".to_string(),
            collection: "TEST".to_string(),
            price: suture_core::format_price(price),
            image: String::new(),
            description: String::new(),
            details: vec![],
        });
        cart.add(fresh.clone());
        cart.remove(&fresh.id);
        prop_assert_eq!(cart.entries(), before.as_slice());
    }
}
