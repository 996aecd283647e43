use thiserror::Error;

/// Design families accepted by the dispatcher, as reported in [`DesignError::UnknownDesign`].
pub const SUPPORTED_DESIGNS: &str = "csm, csm_par, ATOR, ATOR_Par, ATOR_P";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DesignError {
    #[error("associativity must be positive, got {assoc}")]
    InvalidAssociativity { assoc: usize },

    #[error("fast_ways must be in [0,{assoc}], got {fast_ways}")]
    InvalidFastWays { fast_ways: usize, assoc: usize },

    #[error(
        "Design '{design}': priorities ({priority}) exceed allowed fast ways ({capacity}) for assoc={assoc}"
    )]
    PriorityExceedsCapacity {
        design: String,
        priority: usize,
        capacity: usize,
        assoc: usize,
    },

    #[error("Unknown design '{design}'. Supported: {supported}")]
    UnknownDesign {
        design: String,
        supported: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, DesignError>;
