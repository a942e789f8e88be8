//! Application services - orchestrate use cases.
//!
//! `evaluator` holds the side-effect-free evaluate/rank/best functions;
//! `OptimizerService` binds them to injected ports and adds tracing.

pub mod evaluator;
pub mod optimizer_service;

pub use evaluator::{best, evaluate, rank};
pub use optimizer_service::OptimizerService;
