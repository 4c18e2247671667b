//! Dense linear system solver based on Gaussian elimination.
//!
//! Systems are solved by forming the augmented matrix `[A | b]`, reducing it to upper
//! triangular form with partial pivoting and back-substituting for the unknowns. See
//! <https://en.wikipedia.org/wiki/Gaussian_elimination> for background.
//!
//! Caller data is never modified: every solve works on its own augmented copy, so a
//! single [`GaussianSolver`] can be shared freely between threads.

use log::{debug, trace, warn};
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{ConfigError, ShapeError, SolveError};

/// Pivot magnitude below which a system is reported as singular.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1.0e-12;

/// Tunable parameters for [`GaussianSolver`].
///
/// # Examples
/// ```
/// use trusseq::{SolverConfig, DEFAULT_PIVOT_TOLERANCE};
///
/// let config: SolverConfig = serde_json::from_str(r#"{"pivot_tolerance": 1e-9}"#).unwrap();
/// assert_eq!(config.pivot_tolerance(), 1e-9);
/// assert_eq!(SolverConfig::default().pivot_tolerance(), DEFAULT_PIVOT_TOLERANCE);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SolverConfig {
    /// Smallest absolute pivot accepted during elimination.
    pivot_tolerance: f64,
}

impl SolverConfig {
    /// Create a configuration with a custom pivot tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPivotTolerance`] when `pivot_tolerance` is negative,
    /// NaN or infinite.
    pub fn with_pivot_tolerance(pivot_tolerance: f64) -> Result<Self, ConfigError> {
        if !pivot_tolerance.is_finite() || pivot_tolerance < 0.0 {
            return Err(ConfigError::InvalidPivotTolerance(pivot_tolerance));
        }
        Ok(Self { pivot_tolerance })
    }

    /// Return the smallest absolute pivot accepted during elimination.
    #[must_use]
    pub const fn pivot_tolerance(&self) -> f64 {
        self.pivot_tolerance
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
        }
    }
}

/// Unvalidated form of [`SolverConfig`] as it appears in configuration files.
#[derive(Deserialize)]
struct RawSolverConfig {
    /// Requested pivot tolerance.
    #[serde(default = "default_pivot_tolerance")]
    pivot_tolerance: f64,
}

/// Default used when a configuration file omits the tolerance.
fn default_pivot_tolerance() -> f64 {
    DEFAULT_PIVOT_TOLERANCE
}

impl<'de> Deserialize<'de> for SolverConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSolverConfig::deserialize(deserializer)?;
        Self::with_pivot_tolerance(raw.pivot_tolerance).map_err(serde::de::Error::custom)
    }
}

/// Gaussian elimination solver with partial pivoting.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GaussianSolver {
    /// Parameters applied to every solve.
    config: SolverConfig,
}

impl GaussianSolver {
    /// Create a solver with the supplied configuration.
    #[must_use]
    pub const fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Return the configuration used by this solver.
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve `matrix · x = vector` for `x`.
    ///
    /// An empty system (no rows and an empty vector) has the empty solution.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::DimensionMismatch`] when the matrix is not square or the
    /// vector length differs from the number of rows,
    /// [`SolveError::NonFiniteCoefficient`] when an entry is NaN or infinite,
    /// [`SolveError::SingularMatrix`] when no pivot larger than the configured
    /// tolerance can be found and [`SolveError::Overflow`] when an intermediate value
    /// leaves the range of `f64`.
    ///
    /// # Examples
    /// ```
    /// use trusseq::GaussianSolver;
    ///
    /// let solver = GaussianSolver::default();
    /// let x = solver.solve(&[[2.0, 0.0], [0.0, 4.0]], &[2.0, 8.0]).unwrap();
    /// assert_eq!(x, vec![1.0, 2.0]);
    /// ```
    pub fn solve<R: AsRef<[f64]>>(
        &self,
        matrix: &[R],
        vector: &[f64],
    ) -> Result<Vec<f64>, SolveError> {
        let n = matrix.len();
        check_shape(matrix, vector.len())?;
        let augmented = DMatrix::from_fn(n, n + 1, |row, col| {
            if col < n {
                matrix[row].as_ref()[col]
            } else {
                vector[row]
            }
        });
        let solution = self.eliminate(augmented)?;
        if log::log_enabled!(log::Level::Debug) {
            debug!(
                "solved {n}x{n} system, max residual {:e}",
                max_residual(matrix, vector, &solution)?
            );
        }
        Ok(solution)
    }

    /// Solve a system expressed with nalgebra types.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`GaussianSolver::solve`].
    ///
    /// # Examples
    /// ```
    /// use nalgebra::{dmatrix, dvector};
    /// use trusseq::GaussianSolver;
    ///
    /// let x = GaussianSolver::default()
    ///     .solve_dense(&dmatrix![3.0, -1.0; 1.0, 2.0], &dvector![1.0, 12.0])
    ///     .unwrap();
    /// assert!((x[0] - 2.0).abs() < 1e-12);
    /// assert!((x[1] - 5.0).abs() < 1e-12);
    /// ```
    pub fn solve_dense(
        &self,
        matrix: &DMatrix<f64>,
        vector: &DVector<f64>,
    ) -> Result<DVector<f64>, SolveError> {
        let n = matrix.nrows();
        if matrix.ncols() != n {
            return Err(ShapeError::NonSquareRow {
                row: 0,
                expected: n,
                found: matrix.ncols(),
            }
            .into());
        }
        if vector.len() != n {
            return Err(ShapeError::VectorLength {
                expected: n,
                found: vector.len(),
            }
            .into());
        }
        let augmented = DMatrix::from_fn(n, n + 1, |row, col| {
            if col < n {
                matrix[(row, col)]
            } else {
                vector[row]
            }
        });
        let solution = DVector::from_vec(self.eliminate(augmented)?);
        if log::log_enabled!(log::Level::Debug) {
            debug!(
                "solved dense {n}x{n} system, max residual {:e}",
                (matrix * &solution - vector).amax()
            );
        }
        Ok(solution)
    }

    /// Reduce an owned augmented matrix and back-substitute for the unknowns.
    fn eliminate(&self, mut augmented: DMatrix<f64>) -> Result<Vec<f64>, SolveError> {
        let n = augmented.nrows();
        check_finite(&augmented)?;

        for k in 0..n {
            // The first maximum wins, so ties keep the lowest row index.
            let (pivot_row, pivot) = (k..n)
                .map(|row| (row, augmented[(row, k)].abs()))
                .fold((k, -1.0), |best, candidate| {
                    if candidate.1 > best.1 {
                        candidate
                    } else {
                        best
                    }
                });

            if pivot == 0.0 || pivot < self.config.pivot_tolerance {
                warn!(
                    "pivot {pivot:e} in column {k} is below tolerance {:e}",
                    self.config.pivot_tolerance
                );
                return Err(SolveError::SingularMatrix { column: k, pivot });
            }

            if pivot_row != k {
                trace!("swapping rows {k} and {pivot_row}");
                augmented.swap_rows(k, pivot_row);
            }

            let diagonal = augmented[(k, k)];
            for row in (k + 1)..n {
                let factor = augmented[(row, k)] / diagonal;
                if factor == 0.0 {
                    continue;
                }
                augmented[(row, k)] = 0.0;
                for col in (k + 1)..=n {
                    augmented[(row, col)] -= factor * augmented[(k, col)];
                }
                if ((k + 1)..=n).any(|col| !augmented[(row, col)].is_finite()) {
                    warn!("row {row} overflowed while eliminating column {k}");
                    return Err(SolveError::Overflow { column: k });
                }
            }
        }

        let mut solution = vec![0.0; n];
        for row in (0..n).rev() {
            let known: f64 = ((row + 1)..n)
                .map(|col| augmented[(row, col)] * solution[col])
                .sum();
            solution[row] = (augmented[(row, n)] - known) / augmented[(row, row)];
            if !solution[row].is_finite() {
                warn!("unknown {row} overflowed during back-substitution");
                return Err(SolveError::Overflow { column: row });
            }
        }
        Ok(solution)
    }
}

/// Solve `matrix · x = vector` with the default configuration.
///
/// # Errors
///
/// Fails under the same conditions as [`GaussianSolver::solve`].
///
/// # Examples
/// ```
/// let x = trusseq::solve(&[vec![2.0]], &[10.0]).unwrap();
/// assert_eq!(x, vec![5.0]);
/// ```
pub fn solve<R: AsRef<[f64]>>(matrix: &[R], vector: &[f64]) -> Result<Vec<f64>, SolveError> {
    GaussianSolver::default().solve(matrix, vector)
}

/// Largest absolute difference between `matrix · solution` and `vector`.
///
/// # Errors
///
/// Returns [`SolveError::DimensionMismatch`] when the three inputs do not describe the
/// same square system.
pub fn max_residual<R: AsRef<[f64]>>(
    matrix: &[R],
    vector: &[f64],
    solution: &[f64],
) -> Result<f64, SolveError> {
    let n = matrix.len();
    check_shape(matrix, vector.len())?;
    if solution.len() != n {
        return Err(ShapeError::SolutionLength {
            expected: n,
            found: solution.len(),
        }
        .into());
    }
    Ok(matrix
        .iter()
        .zip(vector)
        .map(|(row, rhs)| {
            let lhs: f64 = row.as_ref().iter().zip(solution).map(|(a, x)| a * x).sum();
            (lhs - rhs).abs()
        })
        .fold(0.0, f64::max))
}

/// Verify that `matrix` is square and matches a vector of length `vector_len`.
fn check_shape<R: AsRef<[f64]>>(matrix: &[R], vector_len: usize) -> Result<(), ShapeError> {
    let n = matrix.len();
    if let Some((row, found)) = matrix
        .iter()
        .map(|row| row.as_ref().len())
        .enumerate()
        .find(|&(_, len)| len != n)
    {
        return Err(ShapeError::NonSquareRow {
            row,
            expected: n,
            found,
        });
    }
    if vector_len != n {
        return Err(ShapeError::VectorLength {
            expected: n,
            found: vector_len,
        });
    }
    Ok(())
}

/// Reject augmented matrices holding NaN or infinite entries.
fn check_finite(augmented: &DMatrix<f64>) -> Result<(), SolveError> {
    for row in 0..augmented.nrows() {
        for column in 0..augmented.ncols() {
            if !augmented[(row, column)].is_finite() {
                return Err(SolveError::NonFiniteCoefficient { row, column });
            }
        }
    }
    Ok(())
}

/// Owned linear system, convenient for loading from configuration files.
///
/// # Examples
/// ```
/// use trusseq::LinearSystem;
///
/// let system = LinearSystem::new(vec![vec![3.0, -1.0], vec![1.0, 2.0]], vec![1.0, 12.0]);
/// let x = system.solve().unwrap();
/// assert!(system.max_residual(&x).unwrap() < 1e-9);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearSystem {
    /// Coefficient rows.
    pub matrix: Vec<Vec<f64>>,
    /// Right-hand side values.
    pub vector: Vec<f64>,
}

impl LinearSystem {
    /// Bundle a matrix and its right-hand side.
    #[must_use]
    pub fn new(matrix: Vec<Vec<f64>>, vector: Vec<f64>) -> Self {
        Self { matrix, vector }
    }

    /// Number of unknowns implied by the matrix.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.matrix.len()
    }

    /// Solve the system with the default configuration.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`GaussianSolver::solve`].
    pub fn solve(&self) -> Result<Vec<f64>, SolveError> {
        self.solve_with(&GaussianSolver::default())
    }

    /// Solve the system with a specific solver.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`GaussianSolver::solve`].
    pub fn solve_with(&self, solver: &GaussianSolver) -> Result<Vec<f64>, SolveError> {
        solver.solve(&self.matrix, &self.vector)
    }

    /// Largest residual of `solution` against this system.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`max_residual`].
    pub fn max_residual(&self, solution: &[f64]) -> Result<f64, SolveError> {
        max_residual(&self.matrix, &self.vector, solution)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    /// Diagonally dominant test system whose entries follow a fixed pattern.
    fn dominant_system(n: usize) -> (Vec<Vec<f64>>, Vec<f64>) {
        let matrix = (0..n)
            .map(|row| {
                (0..n)
                    .map(|col| {
                        if row == col {
                            2.0 * n as f64 + 1.0
                        } else {
                            ((row * 7 + col * 3) % 5) as f64 - 2.0
                        }
                    })
                    .collect()
            })
            .collect();
        let vector = (0..n).map(|row| row as f64 - 1.5).collect();
        (matrix, vector)
    }

    #[test]
    fn solves_two_by_two_system() {
        let x = solve(&[[3.0, -1.0], [1.0, 2.0]], &[1.0, 12.0]).expect("system solves");
        assert_eq!(x.len(), 2);
        assert_relative_eq!(x[0], 2.0, epsilon = 1.0e-12);
        assert_relative_eq!(x[1], 5.0, epsilon = 1.0e-12);
    }

    #[test]
    fn solves_single_equation() {
        let x = solve(&[[2.0]], &[10.0]).expect("system solves");
        assert_eq!(x, vec![5.0]);
    }

    #[test]
    fn identity_returns_right_hand_side() {
        let n = 6;
        let identity: Vec<Vec<f64>> = (0..n)
            .map(|row| (0..n).map(|col| f64::from(u8::from(row == col))).collect())
            .collect();
        let vector = vec![1.5, -2.25, 0.0, 1.0e6, -3.0e-7, 42.0];
        let x = solve(&identity, &vector).expect("identity solves");
        assert_eq!(x, vector);
    }

    #[test]
    fn singular_matrix_is_rejected() {
        let error = solve(&[[1.0, 2.0], [2.0, 4.0]], &[1.0, 2.0]).expect_err("singular");
        assert!(matches!(error, SolveError::SingularMatrix { column: 1, .. }));
    }

    #[test]
    fn zero_column_is_rejected_in_first_column() {
        let error = solve(&[[0.0, 1.0], [0.0, 3.0]], &[1.0, 2.0]).expect_err("singular");
        assert_eq!(
            error,
            SolveError::SingularMatrix {
                column: 0,
                pivot: 0.0
            }
        );
    }

    #[test]
    fn vector_length_mismatch_is_rejected() {
        let error = solve(&[[1.0, 0.0], [0.0, 1.0]], &[1.0, 2.0, 3.0]).expect_err("mismatch");
        assert_eq!(
            error,
            SolveError::DimensionMismatch(ShapeError::VectorLength {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn ragged_matrix_is_rejected() {
        let matrix = vec![vec![1.0, 0.0], vec![0.0]];
        let error = solve(&matrix, &[1.0, 2.0]).expect_err("ragged");
        assert_eq!(
            error,
            SolveError::DimensionMismatch(ShapeError::NonSquareRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn rectangular_matrix_is_rejected() {
        let error = solve(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]], &[1.0, 2.0])
            .expect_err("not square");
        assert!(matches!(
            error,
            SolveError::DimensionMismatch(ShapeError::NonSquareRow { row: 0, .. })
        ));
    }

    #[test]
    fn empty_system_has_empty_solution() {
        let matrix: Vec<Vec<f64>> = Vec::new();
        let x = solve(&matrix, &[]).expect("empty system solves");
        assert!(x.is_empty());

        let error = solve(&matrix, &[1.0]).expect_err("vector without rows");
        assert!(matches!(error, SolveError::DimensionMismatch(_)));
    }

    #[test]
    fn non_finite_entries_are_rejected() {
        let error = solve(&[[1.0, f64::NAN], [0.0, 1.0]], &[1.0, 2.0]).expect_err("nan");
        assert_eq!(error, SolveError::NonFiniteCoefficient { row: 0, column: 1 });

        let error = solve(&[[1.0, 0.0], [0.0, 1.0]], &[1.0, f64::INFINITY]).expect_err("inf");
        assert_eq!(error, SolveError::NonFiniteCoefficient { row: 1, column: 2 });
    }

    #[test]
    fn zero_leading_pivot_is_handled_by_row_exchange() {
        let x = solve(&[[0.0, 1.0], [1.0, 0.0]], &[3.0, 4.0]).expect("permutation solves");
        assert_eq!(x, vec![4.0, 3.0]);
    }

    #[test]
    fn tiny_leading_pivot_stays_accurate() {
        let x = solve(&[[1.0e-20, 1.0], [1.0, 1.0]], &[1.0, 2.0]).expect("system solves");
        assert_relative_eq!(x[0], 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(x[1], 1.0, epsilon = 1.0e-12);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let (matrix, vector) = dominant_system(5);
        let (matrix_before, vector_before) = (matrix.clone(), vector.clone());
        solve(&matrix, &vector).expect("system solves");
        assert_eq!(matrix, matrix_before);
        assert_eq!(vector, vector_before);
    }

    #[test]
    fn residual_is_small_for_generated_systems() {
        for n in 1..=12 {
            let (matrix, vector) = dominant_system(n);
            let x = solve(&matrix, &vector).expect("dominant system solves");
            let residual = max_residual(&matrix, &vector, &x).expect("shapes agree");
            assert!(residual < 1.0e-9, "n = {n}: residual {residual:e}");
        }
    }

    #[test]
    fn agrees_with_nalgebra_lu() {
        let (matrix, vector) = dominant_system(8);
        let dense = DMatrix::from_fn(8, 8, |row, col| matrix[row][col]);
        let rhs = DVector::from_vec(vector.clone());
        let expected = dense.clone().lu().solve(&rhs).expect("lu solves");

        let x = solve(&matrix, &vector).expect("system solves");
        let dense_x = GaussianSolver::default()
            .solve_dense(&dense, &rhs)
            .expect("dense system solves");
        for i in 0..8 {
            assert_relative_eq!(x[i], expected[i], epsilon = 1.0e-10);
            assert_relative_eq!(dense_x[i], expected[i], epsilon = 1.0e-10);
        }
    }

    #[test]
    fn dense_shape_errors_are_reported() {
        let solver = GaussianSolver::default();
        let error = solver
            .solve_dense(&DMatrix::zeros(2, 3), &DVector::zeros(2))
            .expect_err("not square");
        assert!(matches!(
            error,
            SolveError::DimensionMismatch(ShapeError::NonSquareRow { found: 3, .. })
        ));
        let error = solver
            .solve_dense(&DMatrix::identity(2, 2), &DVector::zeros(3))
            .expect_err("vector length");
        assert!(matches!(
            error,
            SolveError::DimensionMismatch(ShapeError::VectorLength { found: 3, .. })
        ));
    }

    #[test]
    fn pivot_tolerance_is_tunable() {
        let matrix = [[1.0e-8, 0.0], [0.0, 1.0]];
        let vector = [1.0e-8, 1.0];

        let x = solve(&matrix, &vector).expect("default tolerance accepts the pivot");
        assert_relative_eq!(x[0], 1.0, epsilon = 1.0e-12);

        let strict = GaussianSolver::new(
            SolverConfig::with_pivot_tolerance(1.0e-6).expect("valid tolerance"),
        );
        let error = strict.solve(&matrix, &vector).expect_err("pivot too small");
        assert_eq!(
            error,
            SolveError::SingularMatrix {
                column: 0,
                pivot: 1.0e-8
            }
        );
    }

    #[test]
    fn zero_tolerance_still_rejects_zero_pivots() {
        let solver =
            GaussianSolver::new(SolverConfig::with_pivot_tolerance(0.0).expect("valid tolerance"));
        let error = solver
            .solve(&[[1.0, 2.0], [2.0, 4.0]], &[1.0, 2.0])
            .expect_err("singular");
        assert!(matches!(error, SolveError::SingularMatrix { .. }));
    }

    #[test]
    fn invalid_tolerances_are_rejected() {
        for tolerance in [-1.0, f64::INFINITY] {
            assert_eq!(
                SolverConfig::with_pivot_tolerance(tolerance),
                Err(ConfigError::InvalidPivotTolerance(tolerance))
            );
        }
        assert!(SolverConfig::with_pivot_tolerance(f64::NAN).is_err());
    }

    #[test]
    fn config_deserializes_with_defaults_and_validation() {
        let config: SolverConfig = serde_json::from_str("{}").expect("empty config");
        assert_eq!(config, SolverConfig::default());

        let config: SolverConfig =
            serde_json::from_str(r#"{"pivot_tolerance": 1e-6}"#).expect("custom config");
        assert_eq!(config.pivot_tolerance(), 1.0e-6);

        let error = serde_json::from_str::<SolverConfig>(r#"{"pivot_tolerance": -1.0}"#);
        assert!(error.is_err());
    }

    #[test]
    fn residual_rejects_wrong_solution_length() {
        let error = max_residual(&[[1.0]], &[1.0], &[1.0, 2.0]).expect_err("too long");
        assert_eq!(
            error,
            SolveError::DimensionMismatch(ShapeError::SolutionLength {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn overflow_during_elimination_is_rejected() {
        let error = solve(&[[1.0, 1.0e308], [-1.0, 1.0e308]], &[1.0, 1.0])
            .expect_err("eliminated row exceeds f64 range");
        assert_eq!(error, SolveError::Overflow { column: 0 });

        let error = solve(
            &[[1.0, 1.0e308, 0.0], [-1.0, 1.0e308, 0.0], [0.0, 0.0, 1.0]],
            &[1.0, 1.0, 1.0],
        )
        .expect_err("eliminated row exceeds f64 range");
        assert_eq!(error, SolveError::Overflow { column: 0 });

        let dense = GaussianSolver::default()
            .solve_dense(
                &DMatrix::from_row_slice(2, 2, &[1.0, 1.0e308, -1.0, 1.0e308]),
                &DVector::from_vec(vec![1.0, 1.0]),
            )
            .expect_err("eliminated row exceeds f64 range");
        assert_eq!(dense, SolveError::Overflow { column: 0 });
    }

    #[test]
    fn overflow_during_back_substitution_is_rejected() {
        let error = solve(&[[1.0e-10]], &[1.0e300]).expect_err("unknown exceeds f64 range");
        assert_eq!(error, SolveError::Overflow { column: 0 });
    }

    fn assert_send_sync_copy<T: Send + Sync + Copy>() {}

    #[test]
    fn solver_types_are_thread_safe_values() {
        assert_send_sync_copy::<GaussianSolver>();
        assert_send_sync_copy::<SolverConfig>();
        assert_send_sync_copy::<SolveError>();
    }

    #[test]
    fn shared_solver_matches_sequential_results() {
        let solver = GaussianSolver::default();
        let systems: Vec<_> = (1..=8).map(dominant_system).collect();
        let expected: Vec<_> = systems
            .iter()
            .map(|(matrix, vector)| solver.solve(matrix, vector).expect("system solves"))
            .collect();

        let concurrent: Vec<_> = std::thread::scope(|scope| {
            let workers: Vec<_> = systems
                .iter()
                .map(|(matrix, vector)| scope.spawn(move || solver.solve(matrix, vector)))
                .collect();
            workers
                .into_iter()
                .map(|worker| {
                    worker
                        .join()
                        .expect("worker does not panic")
                        .expect("system solves")
                })
                .collect()
        });
        assert_eq!(concurrent, expected);
    }

    #[test]
    fn linear_system_roundtrips_through_json() {
        let json = r#"{"matrix": [[3.0, -1.0], [1.0, 2.0]], "vector": [1.0, 12.0]}"#;
        let system: LinearSystem = serde_json::from_str(json).expect("valid system");
        assert_eq!(system.dimension(), 2);
        let x = system.solve().expect("system solves");
        assert!(system.max_residual(&x).expect("shapes agree") < 1.0e-9);
    }
}
