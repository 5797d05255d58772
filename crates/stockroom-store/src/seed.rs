//! # Seed Data
//!
//! Demo catalog the dashboard starts with.
//!
//! ## Contents
//! - Four products, one per status other than `Draft`, priced in whole
//!   hryvnias
//! - One top-level category per default category name (`C-1` … `C-6`)

use chrono::NaiveDate;

use stockroom_core::{Attributes, Category, Money, Product, ProductStatus, DEFAULT_CATEGORIES};

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400.png";

fn day(year: i32, month: u32, date: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, date).unwrap_or_default()
}

fn attributes(pairs: &[(&str, &str)]) -> Attributes {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    sku: &str,
    category: &str,
    (price, old_price): (i64, i64),
    stock: u32,
    status: ProductStatus,
    description: &str,
    attrs: &[(&str, &str)],
    created_at: NaiveDate,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        sku: sku.to_string(),
        category: category.to_string(),
        price: Money::from_major_minor(price, 0),
        old_price: Money::from_major_minor(old_price, 0),
        stock,
        status,
        images: vec![PLACEHOLDER_IMAGE.to_string()],
        description: description.to_string(),
        attributes: attributes(attrs),
        created_at,
    }
}

/// The demo product catalog.
pub fn initial_products() -> Vec<Product> {
    vec![
        product(
            "P-1001",
            "Шуруповерт акумуляторний 18V",
            "SRV-18-2A",
            "Електроінструмент",
            (2899, 3299),
            24,
            ProductStatus::Active,
            "Компактний шуруповерт з 2 акумуляторами та швидким зарядом.",
            &[("потужність", "320 Вт"), ("акум", "2Ah x2"), ("патрон", "10 мм")],
            day(2025, 6, 30),
        ),
        product(
            "P-1002",
            "Фарба інтерʼєрна біла 10л",
            "PNT-WHT-10",
            "Фарби та лаки",
            (1199, 0),
            120,
            ProductStatus::Active,
            "Матова, висока криючість, без різкого запаху.",
            &[("обʼєм", "10 л"), ("основа", "акрил")],
            day(2025, 7, 11),
        ),
        product(
            "P-1003",
            "Змішувач для раковини хром",
            "MIX-CH-01",
            "Сантехніка",
            (799, 899),
            8,
            ProductStatus::Hidden,
            "Класичний дизайн, керамічний картридж 35 мм.",
            &[("матеріал", "латунь"), ("покриття", "хром")],
            day(2025, 5, 22),
        ),
        product(
            "P-1004",
            "Розетка подвійна із заземленням",
            "EL-DS-45",
            "Електрика",
            (169, 0),
            0,
            ProductStatus::OutOfStock,
            "Монтаж у стандартну підрозетник 68 мм.",
            &[("струм", "16А"), ("напруга", "230В")],
            day(2025, 4, 2),
        ),
    ]
}

/// One top-level category per default name, ids `C-1` onwards.
pub fn initial_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, name)| Category::top_level(format!("C-{}", i + 1), *name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::validation::validate_product;

    #[test]
    fn test_seed_products_are_valid() {
        let products = initial_products();
        assert_eq!(products.len(), 4);
        for p in &products {
            validate_product(p).unwrap();
        }
        assert_eq!(products[0].price.minor(), 289_900);
        assert!(products[0].has_discount());
    }

    #[test]
    fn test_seed_products_reference_seed_categories() {
        let categories = initial_categories();
        for p in initial_products() {
            assert!(categories.iter().any(|c| c.name == p.category), "{}", p.category);
        }
    }

    #[test]
    fn test_seed_categories_are_top_level() {
        let categories = initial_categories();
        assert_eq!(categories.len(), DEFAULT_CATEGORIES.len());
        assert_eq!(categories[0].id, "C-1");
        assert!(categories.iter().all(Category::is_top_level));
    }
}
