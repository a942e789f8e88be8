//! Generation adapters.
//!
//! Neither adapter calls a real model. They exist so the evaluator can be
//! exercised end to end without network access.

mod echo;
mod simulated;

pub use echo::EchoModel;
pub use simulated::SimulatedModel;
