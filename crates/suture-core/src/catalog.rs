//! The storefront catalog.
//!
//! Four read-only collections: the core product grid, the lookbook, the
//! archive rail and the material panel. The built-in catalog can be swapped
//! for a JSON file of the same shape at startup.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{SutureError, SutureResult};
use crate::types::{ArchiveItem, ArchiveSpecs, LookbookItem, MaterialSpec, Product, ProductId};

/// Every record the storefront can display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Core collection grid
    pub products: Vec<Arc<Product>>,
    #[serde(default)]
    pub lookbook: Vec<LookbookItem>,
    #[serde(default)]
    pub archive: Vec<ArchiveItem>,
    #[serde(default)]
    pub materials: Vec<MaterialSpec>,
}

impl Catalog {
    /// Parse and validate a catalog from JSON text.
    pub fn from_json(json: &str) -> SutureResult<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read, parse and validate a catalog file.
    pub fn load(path: impl AsRef<Path>) -> SutureResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            products = catalog.products.len(),
            lookbook = catalog.lookbook.len(),
            archive = catalog.archive.len(),
            materials = catalog.materials.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Check the catalog's uniqueness invariants.
    ///
    /// Ids must be unique within each collection and archive codes unique
    /// across the archive. Prices without digits are reported but accepted;
    /// they count as zero in the cart.
    pub fn validate(&self) -> SutureResult<()> {
        unique_ids("products", self.products.iter().map(|p| p.id.as_str()))?;
        unique_ids(
            "lookbook",
            self.lookbook.iter().map(|l| l.product.id.as_str()),
        )?;
        unique_ids("archive", self.archive.iter().map(|a| a.id.as_str()))?;
        unique_ids("materials", self.materials.iter().map(|m| m.id.as_str()))?;

        let mut codes = HashSet::new();
        for item in &self.archive {
            if !codes.insert(item.code.as_str()) {
                return Err(SutureError::DuplicateCode(item.code.clone()));
            }
        }

        for product in self.shoppable() {
            if product.numeric_price().is_none() {
                tracing::warn!(
                    product_id = %product.id,
                    price = %product.price,
                    "Price has no digits, it will count as zero"
                );
            }
        }
        Ok(())
    }

    /// Every product that can be opened and added to the cart.
    pub fn shoppable(&self) -> impl Iterator<Item = &Arc<Product>> {
        self.products
            .iter()
            .chain(self.lookbook.iter().map(|l| &l.product))
    }

    /// Find a shoppable product by id. Core grid ids win over lookbook ids.
    pub fn product(&self, id: &ProductId) -> Option<&Arc<Product>> {
        self.shoppable().find(|p| &p.id == id)
    }

    /// The catalog the storefront ships with.
    pub fn builtin() -> Self {
        Self {
            products: core_products(),
            lookbook: lookbook_items(),
            archive: archive_items(),
            materials: materials(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn unique_ids<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> SutureResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SutureError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}?q=80&w=1000&auto=format&fit=crop")
}

fn product(
    id: &str,
    name: &str,
    collection: &str,
    price: &str,
    photo: &str,
    description: &str,
    details: &[&str],
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        collection: collection.to_string(),
        price: price.to_string(),
        image: unsplash(photo),
        description: description.to_string(),
        details: details.iter().map(|d| d.to_string()).collect(),
    }
}

const CORE_COLLECTION: &str = "FW24 // SUTURE";
const CAMPAIGN: &str = "CAMPAIGN // 01";

fn core_products() -> Vec<Arc<Product>> {
    vec![
        product(
            "01",
            "VOID TRENCH",
            CORE_COLLECTION,
            "Rs. 8,499",
            "1539008835657-9e8e9680c956",
            "Constructed from Japanese technical nylon with memory-wire shaping. Features a detachable spinal guard and magnetic closure system.",
            &["Water-resistant Technical Nylon", "Memory Wire Collar", "Hidden Magnetic Clasps", "Made in Italy"],
        ),
        product(
            "02",
            "ONYX SHELL",
            CORE_COLLECTION,
            "Rs. 6,999",
            "1512353087810-25dfcd100962",
            "Semi-translucent bomber silhouette. Bonded seams and liquid-latex finish for extreme weather resistance and editorial sheen.",
            &["Translucent Bonded Polymer", "Liquid Latex Finish", "Oversized Fit", "Cold-dyed Onyx"],
        ),
        product(
            "03",
            "KINETIC KNIT",
            CORE_COLLECTION,
            "Rs. 3,299",
            "1483985988355-763728e1935b",
            "Heavyweight gauge wool blend with articulated elbows. Designed to stretch and recover based on wearer velocity.",
            &["Heavy Gauge Wool", "Articulated Sleeves", "Drop Shoulder", "Elongated Cuffs"],
        ),
        product(
            "04",
            "CARBON CARGO",
            CORE_COLLECTION,
            "Rs. 5,499",
            "1605518216938-7c31b7b14ad0",
            "Modular trousers with magnetic pockets and reinforced knee panels. Fabricated from abrasion-resistant carbon weave.",
            &["Carbon Weave", "Magnetic Pockets", "Reinforced Knees", "Tapered Fit"],
        ),
    ]
    .into_iter()
    .map(Arc::new)
    .collect()
}

fn look(offset: u16, product: Product) -> LookbookItem {
    LookbookItem {
        product: Arc::new(product),
        offset,
    }
}

fn lookbook_items() -> Vec<LookbookItem> {
    vec![
        look(0, product("L01", "ASYMMETRIC COAT", CAMPAIGN, "Rs. 9,499", "1539109136881-3be0616acf4b",
            "Oversized structured coat with asymmetric lapels.", &["Wool Blend", "Oversized", "Raw Hems"])),
        look(12, product("L02", "SILK TUNIC", CAMPAIGN, "Rs. 4,200", "1494790108377-be9c29b29330",
            "Sheer silk tunic with elongated cuffs.", &["100% Silk", "Sheer", "Elongated Cuffs"])),
        look(0, product("L03", "TECH BLAZER", CAMPAIGN, "Rs. 7,800", "1483985988355-763728e1935b",
            "Technical blazer with modular pocket system.", &["Nylon", "Water Resistant", "Modular"])),
        look(24, product("L04", "MESH LAYER", CAMPAIGN, "Rs. 3,100", "1500917293891-ef795e70e1f6",
            "Breathable mesh layer for thermal regulation.", &["Polyester Mesh", "Breathable", "Base Layer"])),
        look(0, product("L05", "WRAP DRESS", CAMPAIGN, "Rs. 6,500", "1495385794356-15371f348c31",
            "Architectural wrap dress with metallic accents.", &["Cotton", "Metallic Thread", "Wrap Closure"])),
        look(12, product("L06", "BONDED PARKA", CAMPAIGN, "Rs. 12,000", "1559582930-bb01987cf4dd",
            "Heavy duty parka with bonded seams.", &["Gore-tex", "Waterproof", "Insulated"])),
        look(0, product("L07", "PLEATED SKIRT", CAMPAIGN, "Rs. 5,200", "1500336624523-d727130c3328",
            "Asymmetric pleated skirt in technical fabric.", &["Polyester", "Pleated", "Asymmetric"])),
        look(6, product("L08", "UTILITY VEST", CAMPAIGN, "Rs. 4,900", "1496747611176-843222e1e57c",
            "Utility vest with multiple cargo pockets.", &["Canvas", "Cargo Pockets", "Utility"])),
    ]
}

fn archive(
    id: &str,
    year: &str,
    code: &str,
    name: &str,
    photo: &str,
    specs: [&str; 3],
) -> ArchiveItem {
    let [weight, origin, composition] = specs;
    ArchiveItem {
        id: id.to_string(),
        year: year.to_string(),
        code: code.to_string(),
        name: name.to_string(),
        image: unsplash(photo),
        specs: ArchiveSpecs {
            weight: weight.to_string(),
            origin: origin.to_string(),
            composition: composition.to_string(),
        },
    }
}

fn archive_items() -> Vec<ArchiveItem> {
    vec![
        archive("a1", "2023", "SYS-01", "ISOLATION SUIT", "1543087903-1ac2ec7aa8c5",
            ["1200gsm", "KYOTO, JP", "Nylon/Ceramic"]),
        archive("a2", "2023", "SYS-02", "NEBULA PARKA", "1550928431-ee0ec6db30d3",
            ["800gsm", "COMO, IT", "Polyethylene"]),
        archive("a3", "2024", "SYS-03", "VOID WALKER", "1532453288672-3a27e9be9efd",
            ["450gsm", "SEOUL, KR", "Gore-Tex Pro"]),
        archive("a4", "2024", "SYS-04", "AERO SHELL", "1506152983158-b4a74a01c721",
            ["200gsm", "PORTLAND, US", "Dyneema"]),
        archive("a5", "2024", "SYS-05", "KINETIC VEST", "1515886657613-9f3515b0c78f",
            ["600gsm", "BERLIN, DE", "Kevlar/Wool"]),
    ]
}

fn material(
    id: &str,
    title: &str,
    formula: &str,
    photo: &str,
    description: &str,
    properties: &[&str],
) -> MaterialSpec {
    MaterialSpec {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        chemical_formula: Some(formula.to_string()),
        properties: properties.iter().map(|p| p.to_string()).collect(),
        image: unsplash(photo),
    }
}

fn materials() -> Vec<MaterialSpec> {
    vec![
        material(
            "m1",
            "GRAPHENE WEAVE",
            "C₆₆₀-HEX",
            "1614916852946-df06e94881a5",
            "A proprietary interlocking weave reinforced with atomic-layer graphene. Provides 200x strength of steel at 15% weight. The fabric regulates thermal conductivity based on ambient exposure.",
            &["Ballistic Resistance", "Thermal Regulation", "Conductive Mesh"],
        ),
        material(
            "m2",
            "MEMORY RESIN",
            "(C₅H₈)n-O",
            "1516083693247-f089753e804f",
            "Non-Newtonian fluid polymer cured into a flexible solid. The material hardens instantly upon impact or high-velocity stress, returning to a liquid-like drape in static states.",
            &["Impact Hardening", "Fluid Drape", "Self-Healing"],
        ),
        material(
            "m3",
            "AERO-GEL INSULATION",
            "SiO₂-GEL",
            "1487222477894-8943e31ef7b2",
            "Silica-based ultralight insulation capturing 99.8% air volume. Originally developed for orbital re-entry suits, now adapted for urban winter survival without bulk.",
            &["Zero Thermal Loss", "Hydrophobic", "Ultralight"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.products.len(), 4);
        assert_eq!(catalog.lookbook.len(), 8);
        assert_eq!(catalog.archive.len(), 5);
        assert_eq!(catalog.materials.len(), 3);
    }

    #[test]
    fn test_builtin_prices_parse() {
        let catalog = Catalog::builtin();
        for product in catalog.shoppable() {
            assert!(product.numeric_price().is_some(), "{}", product.id);
        }
    }

    #[test]
    fn test_product_lookup_spans_collections() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.product(&ProductId::new("02")).map(|p| p.name.as_str()),
            Some("ONYX SHELL")
        );
        assert_eq!(
            catalog.product(&ProductId::new("L06")).map(|p| p.price.as_str()),
            Some("Rs. 12,000")
        );
        assert!(catalog.product(&ProductId::new("zz")).is_none());
    }

    #[test]
    fn test_duplicate_product_id_rejected() {
        let mut catalog = Catalog::builtin();
        let copy = catalog.products[0].clone();
        catalog.products.push(copy);
        let err = catalog.validate().unwrap_err();
        assert!(matches!(
            err,
            SutureError::DuplicateId { collection: "products", ref id } if id == "01"
        ));
    }

    #[test]
    fn test_duplicate_archive_code_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.archive[1].code = catalog.archive[0].code.clone();
        assert!(matches!(
            catalog.validate(),
            Err(SutureError::DuplicateCode(code)) if code == "SYS-01"
        ));
    }

    #[test]
    fn test_json_swap_in() {
        let json = r#"{
            "products": [{
                "id": "99", "name": "TEST COAT", "collection": "SS25",
                "price": "Rs. 1,500", "image": "coat.jpg", "description": "A coat."
            }]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.products.len(), 1);
        assert!(catalog.products[0].details.is_empty());
        assert!(catalog.lookbook.is_empty());
    }

    #[test]
    fn test_json_roundtrip_of_builtin() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(Catalog::from_json(&json).unwrap(), catalog);
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(SutureError::CatalogParse(_))
        ));
    }
}
