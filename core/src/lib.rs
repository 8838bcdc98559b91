//! clv-core: synthetic e-commerce dataset generation with a heuristic
//! Customer Lifetime Value metric and an OLS regression predicting it.
//!
//! One linear pipeline, run once: generate customers, products, and
//! orders; roll orders up into per-customer CLV features; fit ordinary
//! least squares; export four CSV tables.

pub mod aggregate;
pub mod clock;
pub mod config;
pub mod customer;
pub mod error;
pub mod export;
pub mod model;
pub mod naming;
pub mod order;
pub mod pipeline;
pub mod product;
pub mod rng;
pub mod types;

pub use aggregate::{ClvAggregator, CustomerAggregate};
pub use clock::PipelineClock;
pub use config::{PipelineConfig, ValidationMode};
pub use customer::{CustomerGenerator, CustomerRecord};
pub use error::{PipelineError, PipelineResult};
pub use export::CsvExporter;
pub use model::{ClvPredictor, FitReport};
pub use order::{OrderGenerator, OrderRecord};
pub use pipeline::{ClvPipeline, PipelineOutput};
pub use product::{Category, ProductGenerator, ProductRecord};
pub use rng::{RngBank, StageRng, StageSlot};
