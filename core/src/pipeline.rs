//! The pipeline driver.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Customer generation
//!   2. Product generation
//!   3. Order generation        (needs 1 and 2)
//!   4. CLV aggregation         (needs 1 and 3)
//!   5. CLV regression          (needs 4)
//!   6. CSV export              (needs everything)
//!
//! RULES:
//!   - All generation randomness flows through the RngBank.
//!   - "Today" is read once from the clock and shared by every stage.
//!   - Stages communicate only through the tables they return.

use crate::{
    aggregate::{ClvAggregator, CustomerAggregate},
    clock::PipelineClock,
    config::PipelineConfig,
    customer::{CustomerGenerator, CustomerRecord},
    error::PipelineResult,
    export::CsvExporter,
    model::{ClvPredictor, FitReport},
    order::{OrderGenerator, OrderRecord},
    product::{ProductGenerator, ProductRecord},
    rng::{RngBank, StageSlot},
};
use std::path::Path;

/// Everything one run produces, held in memory until export.
#[derive(Debug)]
pub struct PipelineOutput {
    pub customers: Vec<CustomerRecord>,
    pub products: Vec<ProductRecord>,
    pub orders: Vec<OrderRecord>,
    pub aggregates: Vec<CustomerAggregate>,
    pub fit: FitReport,
}

pub struct ClvPipeline {
    config: PipelineConfig,
    clock: PipelineClock,
    rng_bank: RngBank,
}

impl ClvPipeline {
    pub fn new(config: PipelineConfig, clock: PipelineClock, rng_bank: RngBank) -> Self {
        Self { config, clock, rng_bank }
    }

    /// A pipeline with the default constants, system clock, and an
    /// entropy-seeded bank (a plain run differs every time).
    pub fn from_entropy() -> Self {
        Self::new(PipelineConfig::default(), PipelineClock::system(), RngBank::from_entropy())
    }

    pub fn master_seed(&self) -> u64 {
        self.rng_bank.master_seed()
    }

    /// Run stages 1 through 5 and return all tables.
    pub fn run(&self) -> PipelineResult<PipelineOutput> {
        self.config.validate()?;

        log::info!("generating {} customers", self.config.num_customers);
        let customers = CustomerGenerator::generate(
            &self.config,
            &self.clock,
            &mut self.rng_bank.for_stage(StageSlot::Customer),
        );

        log::info!("generating {} products", self.config.num_products);
        let products =
            ProductGenerator::generate(&self.config, &mut self.rng_bank.for_stage(StageSlot::Product));

        log::info!("generating {} orders", self.config.num_orders);
        let orders = OrderGenerator::generate(
            &self.config,
            &self.clock,
            &customers,
            &products,
            &mut self.rng_bank.for_stage(StageSlot::Order),
        )?;

        let mut aggregates = ClvAggregator::aggregate(&self.clock, &customers, &orders)?;
        log::info!("aggregated {} customers with at least one order", aggregates.len());

        let fit = ClvPredictor::fit_and_predict(self.config.validation, &mut aggregates)?;

        Ok(PipelineOutput { customers, products, orders, aggregates, fit })
    }

    /// Stage 6: serialize a finished run into `dir`.
    pub fn export(output: &PipelineOutput, dir: &Path) -> PipelineResult<()> {
        CsvExporter::export_all(
            dir,
            &output.customers,
            &output.products,
            &output.orders,
            &output.aggregates,
        )
    }
}
