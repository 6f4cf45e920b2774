//! Solver configuration types.

/// Configuration for the bisection value search.
///
/// The convergence threshold is a per-call argument; the configuration only
/// bounds how long a search may run.
///
/// # Example
///
/// ```
/// use interp_core::math::solvers::SolverConfig;
///
/// // Use default configuration
/// let config = SolverConfig::default();
/// assert_eq!(config.max_iterations, 500);
///
/// // Custom configuration
/// let custom = SolverConfig { max_iterations: 64 };
/// assert_eq!(custom.max_iterations, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Maximum number of midpoint evaluations before giving up.
    ///
    /// If the search doesn't converge within this limit,
    /// it returns `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    /// Default values:
    /// - `max_iterations`: 500
    fn default() -> Self {
        Self {
            max_iterations: 500,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with the given iteration cap.
    ///
    /// # Panics
    ///
    /// Panics if `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(200);
    /// assert_eq!(config.max_iterations, 200);
    /// ```
    pub fn new(max_iterations: usize) -> Self {
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self { max_iterations }
    }

    /// Create a configuration for quick, coarse searches.
    ///
    /// 64 halvings exhaust the resolution of an `f64` bracket of unit width.
    pub fn fast() -> Self {
        Self { max_iterations: 64 }
    }

    /// Create a configuration for searches over very wide brackets.
    pub fn high_precision() -> Self {
        Self {
            max_iterations: 2_000,
        }
    }

    /// Create a configuration without a practical iteration cap.
    ///
    /// The search then stops only on convergence or when the bracket can no
    /// longer be halved.
    pub fn unbounded() -> Self {
        Self {
            max_iterations: usize::MAX,
        }
    }
}
