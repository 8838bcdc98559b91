//! Generation invariants over a full-size run.

use chrono::{Days, NaiveDate};
use clv_core::{ClvPipeline, PipelineClock, PipelineConfig, PipelineOutput, RngBank};

fn run_default(seed: u64) -> (PipelineConfig, PipelineClock, PipelineOutput) {
    let config = PipelineConfig::default();
    let clock = PipelineClock::fixed(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
    let pipeline = ClvPipeline::new(config.clone(), clock, RngBank::new(seed));
    let output = pipeline.run().expect("pipeline run");
    (config, clock, output)
}

#[test]
fn generated_counts_match_config() {
    let (config, _, output) = run_default(42);
    assert_eq!(output.customers.len(), config.num_customers as usize,
        "expected {} customers", config.num_customers);
    assert_eq!(output.products.len(), config.num_products as usize,
        "expected {} products", config.num_products);
    assert_eq!(output.orders.len(), config.num_orders as usize,
        "expected {} orders", config.num_orders);
}

#[test]
fn every_order_resolves_to_valid_ids() {
    let (config, _, output) = run_default(7);
    for o in &output.orders {
        assert!(o.customer_id >= 1 && o.customer_id <= config.num_customers,
            "order {} has customer_id {} outside 1..={}",
            o.order_id, o.customer_id, config.num_customers);
        assert!(o.product_id >= 1 && o.product_id <= config.num_products,
            "order {} has product_id {} outside 1..={}",
            o.order_id, o.product_id, config.num_products);
    }
}

#[test]
fn order_dates_respect_signup_and_today() {
    let (_, clock, output) = run_default(99);
    for o in &output.orders {
        let customer = output
            .customers
            .iter()
            .find(|c| c.customer_id == o.customer_id)
            .expect("referenced customer exists");
        assert!(o.order_date >= customer.signup_date,
            "order {} dated {} before customer {} signup {}",
            o.order_id, o.order_date, customer.customer_id, customer.signup_date);
        assert!(o.order_date <= clock.today(),
            "order {} dated {} after today {}", o.order_id, o.order_date, clock.today());
    }
}

#[test]
fn signup_dates_fall_in_trailing_three_years() {
    let (config, clock, output) = run_default(3);
    let earliest = clock.today() - Days::new(config.signup_window_days as u64);
    for c in &output.customers {
        assert!(c.signup_date >= earliest && c.signup_date <= clock.today(),
            "customer {} signup {} outside [{earliest}, {}]",
            c.customer_id, c.signup_date, clock.today());
    }
}

#[test]
fn quantities_and_prices_stay_in_bounds() {
    let (config, _, output) = run_default(17);
    for p in &output.products {
        assert!(p.price >= config.price_min && p.price <= config.price_max,
            "product {} price {} outside [{}, {}]",
            p.product_id, p.price, config.price_min, config.price_max);
    }
    for o in &output.orders {
        assert!(o.quantity >= config.quantity_min && o.quantity <= config.quantity_max,
            "order {} quantity {} outside [{}, {}]",
            o.order_id, o.quantity, config.quantity_min, config.quantity_max);
    }
}

#[test]
fn order_prices_are_product_snapshots() {
    let (_, _, output) = run_default(23);
    for o in &output.orders {
        let product = output
            .products
            .iter()
            .find(|p| p.product_id == o.product_id)
            .expect("referenced product exists");
        assert_eq!(o.price, product.price,
            "order {} price diverged from product {}", o.order_id, product.product_id);
    }
}
