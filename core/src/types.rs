//! Shared primitive types used across the entire pipeline.

/// Dense sequential customer identifier, 1..=num_customers.
pub type CustomerId = u32;

/// Dense sequential product identifier, 1..=num_products.
pub type ProductId = u32;

/// Dense sequential order identifier, 1..=num_orders.
pub type OrderId = u32;

/// Calendar dates everywhere are day-granular and timezone-free.
pub type Date = chrono::NaiveDate;
