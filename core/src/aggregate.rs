//! Stage 4: per-customer CLV aggregation.
//!
//! Rolls orders up by customer and derives the closed-form CLV:
//!   monetary        = mean unit price × total quantity
//!   avg_order_value = monetary / frequency
//!   clv             = avg_order_value × frequency × lifespan_years
//!
//! Lifespan uses fixed 365-day years, (today − signup).days / 365.0,
//! deliberately not calendar-aware. Customers with zero orders produce
//! no row at all; frequency >= 1 for every emitted row, so the division
//! cannot hit zero.

use crate::{
    clock::PipelineClock,
    customer::CustomerRecord,
    error::{PipelineError, PipelineResult},
    order::OrderRecord,
    types::CustomerId,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerAggregate {
    pub customer_id: CustomerId,
    pub total_quantity: u32,
    pub avg_price: f64,
    /// Order count.
    pub frequency: u32,
    pub lifespan_years: f64,
    pub monetary: f64,
    pub avg_order_value: f64,
    pub clv: f64,
    /// Populated by the predictor stage; NaN until then.
    pub predicted_clv: f64,
}

pub struct ClvAggregator;

struct Rollup {
    quantity_sum: u32,
    price_sum: f64,
    order_count: u32,
}

impl ClvAggregator {
    /// Aggregate orders per customer, ascending customer_id order.
    pub fn aggregate(
        clock: &PipelineClock,
        customers: &[CustomerRecord],
        orders: &[OrderRecord],
    ) -> PipelineResult<Vec<CustomerAggregate>> {
        let by_customer: HashMap<CustomerId, &CustomerRecord> =
            customers.iter().map(|c| (c.customer_id, c)).collect();

        // BTreeMap keeps output order deterministic by customer id.
        let mut rollups: BTreeMap<CustomerId, Rollup> = BTreeMap::new();
        for o in orders {
            let r = rollups.entry(o.customer_id).or_insert(Rollup {
                quantity_sum: 0,
                price_sum: 0.0,
                order_count: 0,
            });
            r.quantity_sum += o.quantity;
            r.price_sum += o.price;
            r.order_count += 1;
        }

        let today = clock.today();
        let mut aggregates = Vec::with_capacity(rollups.len());
        for (customer_id, r) in rollups {
            let customer = by_customer
                .get(&customer_id)
                .ok_or(PipelineError::UnknownId { kind: "customer", id: customer_id })?;

            let frequency = r.order_count;
            let avg_price = r.price_sum / frequency as f64;
            let monetary = avg_price * r.quantity_sum as f64;
            let lifespan_years = (today - customer.signup_date).num_days() as f64 / 365.0;
            let avg_order_value = monetary / frequency as f64;

            aggregates.push(CustomerAggregate {
                customer_id,
                total_quantity: r.quantity_sum,
                avg_price,
                frequency,
                lifespan_years,
                monetary,
                avg_order_value,
                clv: avg_order_value * frequency as f64 * lifespan_years,
                predicted_clv: f64::NAN,
            });
        }
        Ok(aggregates)
    }
}
