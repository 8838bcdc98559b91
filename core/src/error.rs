use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Unknown {kind} id {id}")]
    UnknownId { kind: &'static str, id: u32 },

    #[error("Too few rows to fit regression: {rows} rows for {features} features")]
    TooFewRows { rows: usize, features: usize },

    #[error("Regression fit failed: {0}")]
    Fit(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
