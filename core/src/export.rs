//! Stage 6: CSV export.
//!
//! Four flat files with fixed column sets, overwriting on rerun. Headers
//! come straight from the serde field names, so the structs below ARE the
//! file schemas. Dates serialize as ISO 8601 `YYYY-MM-DD` via chrono's
//! NaiveDate serde impl.

use crate::{
    aggregate::CustomerAggregate,
    customer::CustomerRecord,
    error::PipelineResult,
    order::OrderRecord,
    product::ProductRecord,
    types::CustomerId,
};
use serde::Serialize;
use std::path::Path;

pub const CUSTOMERS_FILE: &str = "customers.csv";
pub const PRODUCTS_FILE: &str = "products.csv";
pub const ORDERS_FILE: &str = "orders.csv";
pub const CLV_FILE: &str = "customer_clv.csv";

/// customer_clv.csv column selection. The aggregate carries intermediate
/// columns (total_quantity, avg_price, monetary) that stay internal.
#[derive(Debug, Serialize)]
struct ClvRow {
    customer_id: CustomerId,
    avg_order_value: f64,
    frequency: u32,
    lifespan_years: f64,
    clv: f64,
    predicted_clv: f64,
}

pub struct CsvExporter;

impl CsvExporter {
    /// Write all four tables into `dir`. Files are created or truncated;
    /// a failure mid-way leaves earlier files written (one-shot batch
    /// semantics, no cleanup).
    pub fn export_all(
        dir: &Path,
        customers: &[CustomerRecord],
        products: &[ProductRecord],
        orders: &[OrderRecord],
        aggregates: &[CustomerAggregate],
    ) -> PipelineResult<()> {
        Self::write_table(&dir.join(CUSTOMERS_FILE), customers)?;
        Self::write_table(&dir.join(PRODUCTS_FILE), products)?;
        Self::write_table(&dir.join(ORDERS_FILE), orders)?;

        let rows: Vec<ClvRow> = aggregates
            .iter()
            .map(|a| ClvRow {
                customer_id: a.customer_id,
                avg_order_value: a.avg_order_value,
                frequency: a.frequency,
                lifespan_years: a.lifespan_years,
                clv: a.clv,
                predicted_clv: a.predicted_clv,
            })
            .collect();
        Self::write_table(&dir.join(CLV_FILE), &rows)?;

        log::info!(
            "exported {} customers, {} products, {} orders, {} clv rows to {}",
            customers.len(),
            products.len(),
            orders.len(),
            rows.len(),
            dir.display()
        );
        Ok(())
    }

    fn write_table<T: Serialize>(path: &Path, rows: &[T]) -> PipelineResult<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
