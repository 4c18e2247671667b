//! Error types produced while solving linear systems or editing trusses.

use petgraph::graph::{EdgeIndex, NodeIndex};
use thiserror::Error;

/// Error returned when a linear system cannot be solved.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum SolveError {
    /// Returned when the matrix is not square or the vector length does not match it.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(#[from] ShapeError),
    /// Returned when no usable pivot remains in a column after row exchanges.
    #[error("matrix is singular: largest pivot in column {column} is {pivot:e}")]
    SingularMatrix {
        /// Column in which elimination stalled.
        column: usize,
        /// Largest absolute value found for the pivot.
        pivot: f64,
    },
    /// Returned when elimination or back-substitution leaves the range of `f64`.
    #[error("arithmetic overflow while solving for column {column}")]
    Overflow {
        /// Column being eliminated, or unknown being solved, when the overflow occurred.
        column: usize,
    },
    /// Returned when a coefficient is NaN or infinite.
    ///
    /// A `column` equal to the system size refers to the right-hand side vector.
    #[error("coefficient at row {row}, column {column} is not finite")]
    NonFiniteCoefficient {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        column: usize,
    },
}

/// Describes how the shape of a linear system is inconsistent.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    /// Returned when a matrix row does not have one entry per row of the matrix.
    #[error("row {row} has {found} entries but the matrix has {expected} rows")]
    NonSquareRow {
        /// Index of the offending row.
        row: usize,
        /// Number of rows in the matrix.
        expected: usize,
        /// Number of entries in the row.
        found: usize,
    },
    /// Returned when the right-hand side does not have one entry per row.
    #[error("vector has {found} entries but the matrix has {expected} rows")]
    VectorLength {
        /// Number of rows in the matrix.
        expected: usize,
        /// Number of entries in the vector.
        found: usize,
    },
    /// Returned when a candidate solution does not have one entry per unknown.
    #[error("solution has {found} entries but the matrix has {expected} columns")]
    SolutionLength {
        /// Number of unknowns in the system.
        expected: usize,
        /// Number of entries in the solution.
        found: usize,
    },
}

/// Error returned when a solver configuration is rejected.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Returned when the pivot tolerance is negative, NaN or infinite.
    #[error("pivot tolerance must be finite and non-negative (received {0})")]
    InvalidPivotTolerance(f64),
}

/// Error returned when editing a [`Truss`](crate::Truss) with invalid input.
///
/// # Examples
///
/// ```
/// use petgraph::graph::NodeIndex;
/// use trusseq::{Force, Truss, TrussEditError};
///
/// let mut truss = Truss::new();
/// let missing = NodeIndex::new(7);
/// let error = truss
///     .apply_force(missing, Force::new(10.0, 90.0))
///     .expect_err("unknown joint is rejected");
/// assert_eq!(error, TrussEditError::UnknownJoint(missing));
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum TrussEditError {
    /// Returned when a joint cannot be found in the truss.
    #[error("joint {0:?} does not exist in this truss")]
    UnknownJoint(NodeIndex),
    /// Returned when a member cannot be found in the truss.
    #[error("member {0:?} does not exist in this truss")]
    UnknownMember(EdgeIndex),
    /// Returned when a member would connect two joints at the same position.
    #[error("joints {start:?} and {end:?} coincide; a member needs a non-zero length")]
    CoincidentJoints {
        /// First joint of the rejected member.
        start: NodeIndex,
        /// Second joint of the rejected member.
        end: NodeIndex,
    },
    /// Returned when solved member forces do not line up with the members.
    #[error("expected {expected} member forces but received {found}")]
    ForceCountMismatch {
        /// Number of members in the truss.
        expected: usize,
        /// Number of forces supplied.
        found: usize,
    },
}
