//! Color constants for the editorial-glass palette.
//!
//! The stylesheet refers to these through CSS custom properties, so the
//! palette has one source of truth.

// === ONYX (Backgrounds) ===
pub const ONYX: &str = "#0a0a0a";
pub const ONYX_RAISED: &str = "#111111";
pub const BLACK: &str = "#000000";

// === GAINSBORO (Text) ===
pub const GAINSBORO: &str = "#dcdcdc";
pub const WHITE: &str = "#ffffff";

// === GLASS (Borders, overlays) ===
pub const GLASS_BORDER: &str = "rgba(255, 255, 255, 0.1)";
pub const GLASS_FILL: &str = "rgba(255, 255, 255, 0.05)";
pub const GLASS_STRONG: &str = "rgba(255, 255, 255, 0.2)";

// === TEXT ===
pub const TEXT_SECONDARY: &str = "rgba(255, 255, 255, 0.7)";
pub const TEXT_MUTED: &str = "rgba(255, 255, 255, 0.5)";
pub const TEXT_FAINT: &str = "rgba(255, 255, 255, 0.3)";

// === ALERT (Clearance, destructive) ===
pub const ALERT: &str = "#dc2626";
pub const ALERT_GLOW: &str = "rgba(255, 0, 0, 0.5)";

/// Custom property name and value for every palette entry.
pub const PALETTE: [(&str, &str); 13] = [
    ("onyx", ONYX),
    ("onyx-raised", ONYX_RAISED),
    ("black", BLACK),
    ("gainsboro", GAINSBORO),
    ("white", WHITE),
    ("glass-border", GLASS_BORDER),
    ("glass-fill", GLASS_FILL),
    ("glass-strong", GLASS_STRONG),
    ("text-secondary", TEXT_SECONDARY),
    ("text-muted", TEXT_MUTED),
    ("text-faint", TEXT_FAINT),
    ("alert", ALERT),
    ("alert-glow", ALERT_GLOW),
];

/// `:root` block declaring the palette as `--name: value;` pairs.
pub fn palette_css() -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in PALETTE {
        css.push_str(&format!("  --{name}: {value};\n"));
    }
    css.push('}');
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_declares_every_color() {
        let css = palette_css();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("  --onyx: #0a0a0a;\n"));
        assert!(css.contains("  --alert-glow: rgba(255, 0, 0, 0.5);\n"));
        assert_eq!(css.matches("--").count(), PALETTE.len());
    }
}
