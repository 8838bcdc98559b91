//! Stage 3: order generation.
//!
//! Orders reference customers and products by id through explicit lookup
//! maps, never by position in the generated vectors. The unit price is
//! copied from the product at generation time so each order is a
//! self-consistent snapshot even if the catalog were regenerated.

use crate::{
    clock::PipelineClock,
    config::PipelineConfig,
    customer::CustomerRecord,
    error::{PipelineError, PipelineResult},
    product::ProductRecord,
    rng::StageRng,
    types::{CustomerId, Date, OrderId, ProductId},
};
use chrono::Days;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRecord {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub order_date: Date,
    pub quantity: u32,
    /// Unit price snapshot from the referenced product.
    pub price: f64,
}

pub struct OrderGenerator;

impl OrderGenerator {
    /// Generate `num_orders` records. Each order picks a uniform customer
    /// and product id, then a uniform date in [signup_date, today].
    ///
    /// The UnknownId arms are unreachable for ids drawn from the generated
    /// tables; they guard the map-lookup seam if callers ever pass tables
    /// with holes.
    pub fn generate(
        config: &PipelineConfig,
        clock: &PipelineClock,
        customers: &[CustomerRecord],
        products: &[ProductRecord],
        rng: &mut StageRng,
    ) -> PipelineResult<Vec<OrderRecord>> {
        let by_customer: HashMap<CustomerId, &CustomerRecord> =
            customers.iter().map(|c| (c.customer_id, c)).collect();
        let by_product: HashMap<ProductId, &ProductRecord> =
            products.iter().map(|p| (p.product_id, p)).collect();

        let today = clock.today();
        let mut orders = Vec::with_capacity(config.num_orders as usize);
        for i in 1..=config.num_orders {
            let customer_id = rng.next_u64_in(1, config.num_customers as u64) as CustomerId;
            let product_id = rng.next_u64_in(1, config.num_products as u64) as ProductId;

            let customer = by_customer
                .get(&customer_id)
                .ok_or(PipelineError::UnknownId { kind: "customer", id: customer_id })?;
            let product = by_product
                .get(&product_id)
                .ok_or(PipelineError::UnknownId { kind: "product", id: product_id })?;

            // Uniform over [signup_date, today], inclusive. signup_date is
            // never after today by construction, so the span is >= 0.
            let span = (today - customer.signup_date).num_days() as u64;
            let order_date = customer.signup_date + Days::new(rng.next_u64_in(0, span));

            orders.push(OrderRecord {
                order_id: i,
                customer_id,
                product_id,
                order_date,
                quantity: rng.next_u64_in(config.quantity_min as u64, config.quantity_max as u64)
                    as u32,
                price: product.price,
            });
        }
        Ok(orders)
    }
}
