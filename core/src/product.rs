//! Stage 2: product catalog generation.

use crate::{config::PipelineConfig, rng::StageRng, types::ProductId};
use serde::{Deserialize, Serialize};

/// The fixed catalog taxonomy. Serialized by display name in CSV output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Electronics,
    Clothing,
    Home,
    Books,
    Sports,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Clothing,
        Category::Home,
        Category::Books,
        Category::Sports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Clothing => "Clothing",
            Self::Home => "Home",
            Self::Books => "Books",
            Self::Sports => "Sports",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub product_id: ProductId,
    pub category: Category,
    /// Unit price, rounded to 2 decimal places at generation time.
    pub price: f64,
}

pub struct ProductGenerator;

impl ProductGenerator {
    pub fn generate(config: &PipelineConfig, rng: &mut StageRng) -> Vec<ProductRecord> {
        let mut products = Vec::with_capacity(config.num_products as usize);
        for i in 1..=config.num_products {
            let raw = rng.uniform_f64(config.price_min, config.price_max);
            products.push(ProductRecord {
                product_id: i,
                category: Category::ALL
                    [rng.next_u64_below(Category::ALL.len() as u64) as usize],
                price: round2(raw),
            });
        }
        products
    }
}

/// Round to 2 decimal places, half away from zero (prices are positive).
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{RngBank, StageSlot};

    #[test]
    fn prices_are_in_range_and_2dp() {
        let cfg = PipelineConfig::default();
        let mut rng = RngBank::new(5).for_stage(StageSlot::Product);
        for p in ProductGenerator::generate(&cfg, &mut rng) {
            assert!(p.price >= cfg.price_min && p.price <= cfg.price_max,
                "price out of range: {}", p.price);
            let cents = p.price * 100.0;
            assert!((cents - cents.round()).abs() < 1e-9,
                "price not 2dp: {}", p.price);
        }
    }

    #[test]
    fn ids_are_dense() {
        let cfg = PipelineConfig::small();
        let mut rng = RngBank::new(6).for_stage(StageSlot::Product);
        let products = ProductGenerator::generate(&cfg, &mut rng);
        assert_eq!(products.len(), cfg.num_products as usize);
        for (i, p) in products.iter().enumerate() {
            assert_eq!(p.product_id, (i + 1) as u32);
        }
    }

    #[test]
    fn round2_snaps_to_cents() {
        assert_eq!(round2(10.014), 10.01);
        assert_eq!(round2(10.016), 10.02);
        assert_eq!(round2(499.994), 499.99);
        assert_eq!(round2(250.0), 250.0);
    }
}
