use thiserror::Error;

/// Errors raised while compiling the property table
#[derive(Debug, Error)]
pub enum CompileError {
    #[error(
        "Collision detected - {first} and {second} have the same name and priority, \
         a potentially non-deterministic ordering can occur"
    )]
    OrderCollision { first: String, second: String },

    #[error("{name} must be either a property, a descriptor or both")]
    MissingClassification { name: String },

    #[error(
        "Property aliasing expects there are under {capacity} properties: \
         {count} properties starting at {first_enum_value} do not fit"
    )]
    CapacityExceeded {
        count: usize,
        first_enum_value: u16,
        capacity: u16,
    },

    #[error("Unknown priority tier '{priority}' on {name} (expected Animation, High or Low)")]
    UnknownPriorityTier { name: String, priority: String },

    #[error("Alias {alias} refers to unknown property '{target}'")]
    DanglingAlias { alias: String, target: String },

    #[error("Only one alias per property is supported: {first} and {second} both alias {target}")]
    DuplicateAliasTarget {
        target: String,
        first: String,
        second: String,
    },

    #[error("Identifier {id} is produced by both {first} and {second}")]
    IdentifierCollision {
        id: String,
        first: String,
        second: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CompileError {
    /// True when the error points at a defect in the authored property list
    /// rather than at the environment (unreadable input, bad config file).
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, CompileError::InvalidInput(_) | CompileError::Config(_))
    }
}

/// Result type for compilation steps
pub type CompileResult<T> = Result<T, CompileError>;
