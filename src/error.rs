//! Error types for scene assembly, configuration and path-data parsing.

use thiserror::Error;

/// Errors reported while configuring or assembling a scene.
///
/// Degenerate geometry (zero-length springs, coincident collision pairs) is
/// never reported here; it is recovered where it occurs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// A drawing command has no vertex mapping.
    #[error("unsupported path command '{command}' at index {index} of chain {chain}")]
    UnsupportedCommand { chain: usize, index: usize, command: char },
    /// Mass must be positive and finite.
    #[error("mass must be positive and finite")]
    InvalidMass,
    /// Radius must be non-negative and finite.
    #[error("radius must be non-negative and finite")]
    InvalidRadius,
    /// Time step must be positive and finite.
    #[error("time step must be positive and finite")]
    InvalidTimeStep,
    /// Restitution must be in [0, 1].
    #[error("restitution must be in [0, 1]")]
    InvalidRestitution,
    /// A command carries a NaN or infinite coordinate.
    #[error("non-finite coordinate in path command {index} of chain {chain}")]
    NonFiniteCoordinate { chain: usize, index: usize },
    /// Spring coefficients must be non-negative and finite.
    #[error("spring stiffness and damping must be non-negative and finite")]
    InvalidSpring,
    /// A spring or vertex refers to a point outside the arena.
    #[error("point index {index} out of bounds (count: {count})")]
    DanglingPoint { index: usize, count: usize },
    /// No chain with this id exists in the scene.
    #[error("no chain with id {0}")]
    UnknownChain(usize),
    /// Path data could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A drawing command kind the vertex mapper has no mapping for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no vertex mapping for path command '{0}'")]
pub struct UnsupportedCommand(pub char);

/// Failure to parse SVG path data, with the byte offset where it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at byte {offset}")]
pub struct ParseError {
    pub offset: usize,
    pub kind: ParseErrorKind,
}

/// What went wrong while parsing path data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("unknown command '{0}'")]
    UnknownCommand(char),
    #[error("expected a number")]
    ExpectedNumber,
    #[error("number out of range")]
    NumberOutOfRange,
    #[error("expected an arc flag (0 or 1)")]
    ExpectedFlag,
    #[error("path data must start with a move command")]
    MissingMoveTo,
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
}

impl ParseError {
    pub(crate) fn new(offset: usize, kind: ParseErrorKind) -> Self {
        ParseError { offset, kind }
    }
}
