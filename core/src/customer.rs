//! Stage 1: customer generation.

use crate::{
    clock::PipelineClock,
    config::PipelineConfig,
    naming::NameGenerator,
    rng::StageRng,
    types::{CustomerId, Date},
};
use chrono::Days;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerRecord {
    pub customer_id: CustomerId,
    pub name: String,
    pub region: String,
    pub signup_date: Date,
}

pub struct CustomerGenerator;

impl CustomerGenerator {
    /// Generate `num_customers` records with dense ids 1..=N and signup
    /// dates uniform over the trailing signup window ending today.
    pub fn generate(
        config: &PipelineConfig,
        clock: &PipelineClock,
        rng: &mut StageRng,
    ) -> Vec<CustomerRecord> {
        let today = clock.today();
        let mut customers = Vec::with_capacity(config.num_customers as usize);
        for i in 1..=config.num_customers {
            // Uniform over [today - window, today], inclusive on both ends.
            let back = rng.next_u64_in(0, config.signup_window_days as u64);
            let signup_date = today - Days::new(back);
            customers.push(CustomerRecord {
                customer_id: i,
                name: NameGenerator::full_name(rng),
                region: NameGenerator::region(rng),
                signup_date,
            });
        }
        customers
    }
}
