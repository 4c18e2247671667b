#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod components;
pub mod errors;
pub mod geometry;
pub mod solver;
pub mod truss;

pub use components::{Force, Joint, Member, Support, SupportKind};
pub use errors::{ConfigError, ShapeError, SolveError, TrussEditError};
pub use geometry::{point, Point};
pub use solver::{
    max_residual, solve, GaussianSolver, LinearSystem, SolverConfig, DEFAULT_PIVOT_TOLERANCE,
};
pub use truss::Truss;
