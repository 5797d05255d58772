//! # Mock Product Lookup
//!
//! Deterministic stand-in for the warehouse barcode service.
//!
//! ## Barcode Resolution
//! ```text
//! by_barcode("111222333")
//!      │
//!      ├── known barcode table? → draft from the table, sku = barcode
//!      ├── catalog sku match?   → name/sku/category/price, stock = 1
//!      └── otherwise            → None (caller adds a blank draft)
//! ```

use async_trait::async_trait;
use tracing::{debug, warn};

use stockroom_core::{Money, Product, ProductDraft, DEFAULT_DRAFT_STOCK};

use crate::contracts::{is_lookup_query, ProductLookup, MAX_SUGGESTIONS};
use crate::error::StoreResult;
use crate::seed;

/// A row of the barcode table.
#[derive(Debug, Clone, Copy)]
struct BarcodeRecord {
    code: &'static str,
    name: &'static str,
    category: Option<&'static str>,
    price: i64,
    stock: u32,
}

const BARCODES: &[BarcodeRecord] = &[
    BarcodeRecord {
        code: "2000000012345",
        name: "Цвяхи будівельні 100мм (кг)",
        category: None,
        price: 80,
        stock: 50,
    },
    BarcodeRecord {
        code: "2000000054321",
        name: "Шпаклівка фінішна Acryl-Putz 5кг",
        category: None,
        price: 450,
        stock: 15,
    },
    BarcodeRecord {
        code: "4820012345678",
        name: "Лампа LED 10W E27",
        category: None,
        price: 65,
        stock: 150,
    },
    BarcodeRecord {
        code: "111222333",
        name: "Молоток слюсарний 500г",
        category: Some("Ручний інструмент"),
        price: 250,
        stock: 1,
    },
];

/// Names offered by the product-name autocomplete.
const SUGGESTION_CORPUS: &[&str] = &[
    "Шуруповерт акумуляторний 18V",
    "Шуруповерт мережевий 600Вт",
    "Фарба інтерʼєрна біла 10л",
    "Фарба фасадна 5л",
    "Змішувач для раковини хром",
    "Розетка подвійна із заземленням",
    "Кутник сталевий 50x50",
    "Грунтовка універсальна 1л",
];

impl BarcodeRecord {
    fn to_draft(self) -> ProductDraft {
        ProductDraft {
            name: Some(self.name.to_string()),
            sku: Some(self.code.to_string()),
            category: self.category.map(str::to_string),
            price: Some(Money::from_major_minor(self.price, 0)),
            stock: Some(self.stock),
        }
    }
}

fn catalog_draft(product: &Product) -> ProductDraft {
    ProductDraft {
        name: Some(product.name.clone()),
        sku: Some(product.sku.clone()),
        category: Some(product.category.clone()),
        price: Some(product.price),
        stock: Some(DEFAULT_DRAFT_STOCK),
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Lookup over the fixed barcode table plus a product catalog.
#[derive(Debug, Clone)]
pub struct MockLookup {
    catalog: Vec<Product>,
}

impl MockLookup {
    pub fn new(catalog: Vec<Product>) -> Self {
        MockLookup { catalog }
    }

    /// Lookup backed by the demo catalog.
    pub fn seeded() -> Self {
        MockLookup::new(seed::initial_products())
    }
}

impl Default for MockLookup {
    fn default() -> Self {
        MockLookup::seeded()
    }
}

#[async_trait]
impl ProductLookup for MockLookup {
    async fn by_barcode(&self, code: &str) -> StoreResult<Option<ProductDraft>> {
        let code = code.trim();
        debug!(code = %code, "Looking up barcode");

        if let Some(record) = BARCODES.iter().find(|r| r.code == code) {
            return Ok(Some(record.to_draft()));
        }

        let draft = self.catalog.iter().find(|p| p.sku == code).map(catalog_draft);
        if draft.is_none() {
            warn!(code = %code, "Barcode not found");
        }
        Ok(draft)
    }

    async fn by_name(&self, query: &str) -> StoreResult<Vec<ProductDraft>> {
        if !is_lookup_query(query) {
            return Ok(Vec::new());
        }
        let needle = query.trim().to_lowercase();

        let drafts: Vec<ProductDraft> = BARCODES
            .iter()
            .filter(|r| contains_ci(r.name, &needle))
            .map(|r| r.to_draft())
            .chain(
                self.catalog
                    .iter()
                    .filter(|p| contains_ci(&p.name, &needle))
                    .map(catalog_draft),
            )
            .collect();

        debug!(query = %needle, count = drafts.len(), "Name lookup");
        Ok(drafts)
    }

    async fn suggest_names(&self, query: &str) -> StoreResult<Vec<String>> {
        if !is_lookup_query(query) {
            return Ok(Vec::new());
        }
        let needle = query.trim().to_lowercase();

        Ok(SUGGESTION_CORPUS
            .iter()
            .filter(|name| contains_ci(name, &needle))
            .take(MAX_SUGGESTIONS)
            .map(|name| name.to_string())
            .collect())
    }
}
