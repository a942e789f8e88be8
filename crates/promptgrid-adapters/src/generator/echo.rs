use promptgrid_core::{
    application::{Generator, PortError},
    domain::CandidateParams,
};

/// Returns the rendered prompt unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoModel;

impl EchoModel {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for EchoModel {
    fn generate(&self, prompt: &str, _params: &CandidateParams) -> Result<String, PortError> {
        Ok(prompt.to_string())
    }
}
