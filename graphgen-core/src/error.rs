//! Error types for the graphgen core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias for generators.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced when mutating a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// Both endpoints of the requested edge were the same vertex.
    #[error("self-loop on vertex {vertex} is not allowed in a simple graph")]
    SelfLoop {
        /// Vertex used as both endpoints.
        vertex: usize,
    },
    /// An endpoint did not name an existing vertex.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph at the time of the call.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// Both endpoints of the requested edge were the same vertex.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// An endpoint did not name an existing vertex.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
    }
}

/// Identifies which end of a circular arc failed validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArcEndpoint {
    /// The arc's starting point.
    Start,
    /// The arc's finishing point.
    End,
}

impl fmt::Display for ArcEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Error type produced when generator preconditions are violated.
///
/// Every variant is raised before any vertex is added, so a failed call never
/// exposes a partially built graph.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeneratorError {
    /// The leg-count sampling range had its bounds reversed.
    #[error("min_legs ({min_legs}) must not exceed max_legs ({max_legs})")]
    LegRangeInverted {
        /// Requested lower bound.
        min_legs: usize,
        /// Requested upper bound.
        max_legs: usize,
    },
    /// The Kneser subset size exceeded the ground set size.
    #[error("subset size {subset_size} exceeds ground set size {ground_set_size}")]
    SubsetLargerThanGroundSet {
        /// Requested subset size `r`.
        subset_size: usize,
        /// Requested ground set size `n`.
        ground_set_size: usize,
    },
    /// The binomial coefficient `C(n, r)` does not fit in `usize`.
    #[error("C({ground_set_size}, {subset_size}) overflows usize")]
    SubsetCountOverflow {
        /// Requested ground set size `n`.
        ground_set_size: usize,
        /// Requested subset size `r`.
        subset_size: usize,
    },
    /// An arc endpoint was non-finite or outside `[0, CIRCUMFERENCE)`.
    #[error("arc {endpoint} {value} must be finite and lie in [0, {circumference})")]
    InvalidArcEndpoint {
        /// Endpoint that failed validation.
        endpoint: ArcEndpoint,
        /// The rejected value.
        value: f64,
        /// Circumference the value was checked against.
        circumference: f64,
    },
    /// An arc started and finished at the same point.
    #[error("arc starting and ending at {position} has zero length")]
    DegenerateArc {
        /// Shared start and end position.
        position: f64,
    },
    /// The arc-length sampling range was empty, reversed or out of bounds.
    #[error(
        "arc length range must satisfy 1e-9 <= min_length < max_length <= {circumference} - 1e-9 (got min={min_length}, max={max_length})"
    )]
    InvalidArcLengthRange {
        /// Requested minimum length.
        min_length: f64,
        /// Requested maximum length.
        max_length: f64,
        /// Circumference the range was checked against.
        circumference: f64,
    },
    /// A graph mutation failed while assembling the output.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// The leg-count sampling range had its bounds reversed.
        LegRangeInverted => LegRangeInverted { .. } => "GENERATOR_LEG_RANGE_INVERTED",
        /// The Kneser subset size exceeded the ground set size.
        SubsetLargerThanGroundSet => SubsetLargerThanGroundSet { .. } => "GENERATOR_SUBSET_LARGER_THAN_GROUND_SET",
        /// The binomial coefficient `C(n, r)` does not fit in `usize`.
        SubsetCountOverflow => SubsetCountOverflow { .. } => "GENERATOR_SUBSET_COUNT_OVERFLOW",
        /// An arc endpoint was non-finite or out of range.
        InvalidArcEndpoint => InvalidArcEndpoint { .. } => "GENERATOR_INVALID_ARC_ENDPOINT",
        /// An arc started and finished at the same point.
        DegenerateArc => DegenerateArc { .. } => "GENERATOR_DEGENERATE_ARC",
        /// The arc-length sampling range was invalid.
        InvalidArcLengthRange => InvalidArcLengthRange { .. } => "GENERATOR_INVALID_ARC_LENGTH_RANGE",
        /// A graph mutation failed while assembling the output.
        Graph => Graph(..) => "GENERATOR_GRAPH",
    }
}

impl GeneratorError {
    /// Retrieve the inner [`GraphErrorCode`] when the error originated in a graph mutation.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Failures raised while encoding or decoding graph6 text.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Graph6Error {
    /// The input held no graph after stripping the header and whitespace.
    #[error("graph6 input is empty")]
    Empty,
    /// A byte fell outside the printable range `63..=126`.
    #[error("byte {byte:#04x} at offset {offset} is not a graph6 character")]
    InvalidByte {
        /// Offset of the byte within the encoded graph.
        offset: usize,
        /// The offending byte.
        byte: u8,
    },
    /// The `graph6` parser rejected the body, for example because its
    /// length does not match the vertex count.
    #[error("malformed graph6 data: {message}")]
    Malformed {
        /// Diagnostic reported by the parser.
        message: String,
    },
    /// The vertex count exceeds what graph6 can represent.
    #[error("{vertex_count} vertices exceed the graph6 limit of {limit}")]
    TooManyVertices {
        /// Vertices requested.
        vertex_count: usize,
        /// Largest encodable vertex count.
        limit: usize,
    },
    /// The decoded adjacency could not be stored in a [`crate::Graph`].
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Failures raised while parsing or rendering a textual literal.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LiteralError {
    /// The text is not a valid literal.
    #[error("invalid literal syntax: {message}")]
    Syntax {
        /// Parser diagnostic, including line and column.
        message: String,
    },
    /// An integer literal does not fit in `i64`.
    #[error("integer literal `{text}` does not fit in i64")]
    IntegerOverflow {
        /// The literal text.
        text: String,
    },
    /// A float is infinite or NaN, which has no literal form.
    #[error("float `{text}` is not finite")]
    NonFiniteFloat {
        /// The offending text or rendered value.
        text: String,
    },
}

/// Error type produced by instance persistence.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum InstanceError {
    /// Reading or writing an instance file failed.
    #[error("I/O failure on `{path}`: {source}")]
    Io {
        /// File that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A graph file did not contain valid graph6 text.
    #[error("invalid graph6 data in `{path}`: {source}")]
    Graph6 {
        /// File that failed to decode.
        path: PathBuf,
        /// Decoder diagnostic.
        #[source]
        source: Graph6Error,
    },
    /// A vector file did not contain a valid literal, or a value could not be rendered.
    #[error("invalid literal in `{path}`: {source}")]
    Literal {
        /// File being read or written.
        path: PathBuf,
        /// Parser or renderer diagnostic.
        #[source]
        source: LiteralError,
    },
    /// A literal parsed but had the wrong shape for the requested value.
    #[error("expected {expected} in `{path}`, found {found}")]
    UnexpectedLiteral {
        /// File being read.
        path: PathBuf,
        /// Shape required by the caller.
        expected: &'static str,
        /// Shape actually present.
        found: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`InstanceError`] variants.
    enum InstanceErrorCode for InstanceError {
        /// Reading or writing an instance file failed.
        Io => Io { .. } => "INSTANCE_IO",
        /// A graph file did not contain valid graph6 text.
        Graph6 => Graph6 { .. } => "INSTANCE_GRAPH6",
        /// A vector file did not contain a valid literal.
        Literal => Literal { .. } => "INSTANCE_LITERAL",
        /// A literal had the wrong shape for the requested value.
        UnexpectedLiteral => UnexpectedLiteral { .. } => "INSTANCE_UNEXPECTED_LITERAL",
    }
}

/// Convenient alias for results returned by the generators.
pub type Result<T> = core::result::Result<T, GeneratorError>;
