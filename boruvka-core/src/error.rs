//! Error types for graph construction and partition seeding.
//!
//! The Borůvka engine itself is infallible over a validated [`crate::Graph`];
//! every malformed input is rejected while the graph is being built. The only
//! run-time check is that a seeded partition matches the graph's size.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
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
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while adding edges to a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge referenced a vertex id that is not present in the graph.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    VertexOutOfRange {
        /// The invalid vertex id referenced by the edge.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge connected a vertex to itself.
    #[error("edge ({vertex}, {vertex}) is a self-loop")]
    SelfLoop {
        /// The vertex used for both endpoints.
        vertex: usize,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// The first endpoint id (as provided).
        left: usize,
        /// The second endpoint id (as provided).
        right: usize,
    },
    /// A caller-supplied partition tracked a different number of vertices.
    #[error("partition tracks {len} vertices, but vertex_count is {vertex_count}")]
    ComponentsMismatch {
        /// Vertices tracked by the partition.
        len: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge referenced a vertex id that is not present in the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// An edge connected a vertex to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
        /// A caller-supplied partition did not match the graph.
        ComponentsMismatch => ComponentsMismatch { .. } => "GRAPH_COMPONENTS_MISMATCH",
    }
}

/// Convenient alias for results returned by the graph construction API.
pub type Result<T> = core::result::Result<T, GraphError>;
