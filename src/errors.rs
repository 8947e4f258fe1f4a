use thiserror::Error;

/// All failures are fatal to the invocation; there is no retry or
/// partial-result recovery anywhere in the pipeline.
#[derive(Debug, Error)]
pub enum QuerygenError {
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid graph: {0}")]
    InvalidGraph(String),
    #[error("run allocation failed: {0}")]
    RunAllocation(String),
    #[error("external io error: {0}")]
    ExternalIo(String),
}

impl QuerygenError {
    pub fn missing_input<T: Into<String>>(msg: T) -> Self {
        QuerygenError::MissingInput(msg.into())
    }

    pub fn invalid_graph<T: Into<String>>(msg: T) -> Self {
        QuerygenError::InvalidGraph(msg.into())
    }

    pub fn run_allocation<T: Into<String>>(msg: T) -> Self {
        QuerygenError::RunAllocation(msg.into())
    }

    pub fn external_io<T: Into<String>>(msg: T) -> Self {
        QuerygenError::ExternalIo(msg.into())
    }
}
