//! Error types for the BVH builder.

use thiserror::Error;

/// Failure family an [`Error`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input value (missing hierarchy, bad frame, bad period).
    Validation,
    /// Skeleton tree violates a structural invariant.
    Structural,
    /// Operation attempted out of the builder's allowed order.
    Sequencing,
    /// Build requested before the data it needs exists.
    State,
}

/// Main error type for BVH builder operations.
#[derive(Error, Debug)]
pub enum Error {
    /// No hierarchy was supplied
    #[error("Hierarchy is null")]
    NullHierarchy,

    /// Frame length differs from the skeleton's channel count
    #[error("Frame arity mismatch: expected {expected} values, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    /// Frame value is NaN or infinite
    #[error("Non-numeric frame value {value} at index {index}")]
    NonNumericValue { index: usize, value: f64 },

    /// Frame period is not a positive real number
    #[error("Invalid frame period: {0}")]
    InvalidPeriod(f64),

    /// Channel name outside the six position/rotation channels
    #[error("Unknown channel: {0}")]
    UnknownChannel(String),

    /// Entry node of the tree is not tagged Root
    #[error("Top node should be a root")]
    NotARoot,

    /// Root or joint with an empty name
    #[error("Empty name is not allowed for joints")]
    EmptyName,

    /// Root or joint without children
    #[error("Joint '{0}' has no children")]
    NoChildren(String),

    /// End site sharing its parent with other nodes
    #[error("End site under '{0}' must be the only child")]
    SiblingConflict(String),

    /// End site supplied without a parent
    #[error("End site is missing a parent")]
    MissingParent,

    /// Node that cannot occupy its position in the tree
    #[error("Unacceptable node: {0}")]
    UnacceptableNode(String),

    /// Hierarchy change after motion was initialized
    #[error("Changing the hierarchy is not allowed after motion creating")]
    HierarchyFrozen,

    /// Second motion initialization
    #[error("Motion context has been already initialized")]
    MotionAlreadyInitialized,

    /// Motion requested before any hierarchy was accepted
    #[error("To make motion part you have to define a hierarchy in the header")]
    NoHierarchyForMotion,

    /// Header build without a hierarchy
    #[error("No hierarchy has been set")]
    NoHierarchy,

    /// Motion use before `init`
    #[error("Motion is not initialized. Please, call the 'init' method to initialize it.")]
    MotionNotInitialized,

    /// Motion build without frames
    #[error("Motion has no frames")]
    NoFrames,

    /// Malformed JSON document
    #[error("Invalid document: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Failure family of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NullHierarchy
            | Self::ArityMismatch { .. }
            | Self::NonNumericValue { .. }
            | Self::InvalidPeriod(_)
            | Self::UnknownChannel(_)
            | Self::Json(_) => ErrorKind::Validation,

            Self::NotARoot
            | Self::EmptyName
            | Self::NoChildren(_)
            | Self::SiblingConflict(_)
            | Self::MissingParent
            | Self::UnacceptableNode(_) => ErrorKind::Structural,

            Self::HierarchyFrozen
            | Self::MotionAlreadyInitialized
            | Self::NoHierarchyForMotion => ErrorKind::Sequencing,

            Self::NoHierarchy | Self::MotionNotInitialized | Self::NoFrames => ErrorKind::State,
        }
    }
}

/// Result type alias for BVH builder operations.
pub type Result<T> = std::result::Result<T, Error>;
