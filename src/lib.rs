//! Reproducible graph-neighborhood sampling workloads for benchmarking
//! feature-store query performance: an adjacency index, a seeded batch
//! planner, a fan-out-limited hop sampler, and versioned run output.

pub mod config;
pub mod dataset;
pub mod edgelist;
pub mod errors;
pub mod graph_gen;
pub mod index;
pub mod pipeline;
pub mod planner;
pub mod run;
pub mod sampler;
pub mod writer;

pub use crate::config::GenerateConfig;
pub use crate::dataset::{Dataset, DatasetFiles};
pub use crate::errors::QuerygenError;
pub use crate::index::{GraphIndex, NodeId};
pub use crate::planner::BatchPlan;
pub use crate::run::{Run, RunMetadata, allocate_run};
pub use crate::sampler::{SampleRequest, sample};
