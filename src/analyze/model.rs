//! Optional learned quality model.
//!
//! The scoring pipeline is fully heuristic; a model is an add-on
//! capability that deployments may wire in. Its presence is surfaced
//! through the health endpoint and nothing in the score path depends
//! on it.

pub trait QualityModel: Send + Sync {
    fn name(&self) -> &'static str;
    fn available(&self) -> bool;
}

/// Default stand-in when no model is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledModel;

impl QualityModel for DisabledModel {
    fn name(&self) -> &'static str {
        "disabled"
    }

    fn available(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_model_reports_unavailable() {
        let model = DisabledModel;
        assert!(!model.available());
        assert_eq!(model.name(), "disabled");
    }
}
