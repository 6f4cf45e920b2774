//! Bilinear 2D interpolation for grids.

use super::linear::{lerp, linear};
use crate::math::search::search_nearest_id;
use crate::types::{InterpolationError, Scalar};

/// Bilinear interpolation over one grid cell.
///
/// Corner values are named after the anchors they sit on: `val_x1_y2` is
/// the value at `(x1, y2)`.
///
/// Degenerate axes collapse the computation, checked in this order:
/// 1. `x1 == x2` and `y1 == y2`: returns `val_x1_y1`
/// 2. `x1 == x2`: linear along y between `val_x1_y1` and `val_x1_y2`
/// 3. `y1 == y2`: linear along x between `val_x1_y1` and `val_x2_y1`
///
/// Otherwise interpolates along y at `x1` and at `x2`, then along x between
/// the two intermediate values. Intermediates stay in `f64`; the result is
/// narrowed once.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::bilinear;
///
/// // z = x + 10 y on the unit square
/// let z: f64 = bilinear(0.5, 0.0, 1.0, 0.5, 0.0, 1.0, 0.0, 10.0, 1.0, 11.0);
/// assert!((z - 5.5).abs() < 1e-12);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn bilinear<T: Scalar>(
    target_x: T,
    x1: T,
    x2: T,
    target_y: T,
    y1: T,
    y2: T,
    val_x1_y1: T,
    val_x1_y2: T,
    val_x2_y1: T,
    val_x2_y2: T,
) -> T {
    if x1 == x2 {
        if y1 == y2 {
            return val_x1_y1;
        }
        return linear(target_y, y1, y2, val_x1_y1, val_x1_y2);
    }
    if y1 == y2 {
        return linear(target_x, x1, x2, val_x1_y1, val_x2_y1);
    }

    let (ty, wy1, wy2) = (target_y.widen(), y1.widen(), y2.widen());
    let at_x1 = lerp(ty, wy1, wy2, val_x1_y1.widen(), val_x1_y2.widen());
    let at_x2 = lerp(ty, wy1, wy2, val_x2_y1.widen(), val_x2_y2.widen());

    T::narrow(lerp(target_x.widen(), x1.widen(), x2.widen(), at_x1, at_x2))
}

/// Table-driven bilinear interpolation.
///
/// `grid[i][j]` holds the value at `(xs[i], ys[j])`. Rows may be any
/// slice-like type (`Vec<T>`, `&[T]`, `[T; N]`).
///
/// Validation happens in this order:
/// 1. outer grid length must equal `xs.len()`
/// 2. `target_x` must be covered by `xs`
/// 3. the two bracketing rows must have `ys.len()` entries
/// 4. `target_y` must be covered by `ys`
///
/// # Returns
///
/// * `Ok(z)` - The interpolated value
/// * `Err(InterpolationError::SizeMismatch)` - Grid shape disagrees with the axes
/// * `Err(InterpolationError::OutOfRange)` - A target lies outside its axis
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::bilinear_table;
///
/// let xs = [0.0, 1.0, 2.0];
/// let ys = [0.0, 1.0];
/// let grid = vec![vec![0.0, 1.0], vec![2.0, 3.0], vec![4.0, 5.0]];
///
/// let z: f64 = bilinear_table(1.5, 0.5, &xs, &ys, &grid).unwrap();
/// assert!((z - 3.5).abs() < 1e-12);
/// ```
pub fn bilinear_table<T, R>(
    target_x: T,
    target_y: T,
    xs: &[T],
    ys: &[T],
    grid: &[R],
) -> Result<T, InterpolationError>
where
    T: Scalar,
    R: AsRef<[T]>,
{
    if grid.len() != xs.len() {
        return Err(InterpolationError::SizeMismatch {
            expected: xs.len(),
            got: grid.len(),
        });
    }

    let (lower_x, higher_x) = search_nearest_id(target_x, xs)?;
    let lower_row = grid[lower_x].as_ref();
    let higher_row = grid[higher_x].as_ref();
    for row in [higher_row, lower_row] {
        if row.len() != ys.len() {
            return Err(InterpolationError::SizeMismatch {
                expected: ys.len(),
                got: row.len(),
            });
        }
    }

    cell(
        target_x, target_y, xs, ys, lower_x, higher_x, lower_row, higher_row,
    )
}

/// Resolve the y bracket and evaluate the cell selected by the x bracket.
#[allow(clippy::too_many_arguments)]
#[inline]
fn cell<T: Scalar>(
    target_x: T,
    target_y: T,
    xs: &[T],
    ys: &[T],
    lower_x: usize,
    higher_x: usize,
    lower_row: &[T],
    higher_row: &[T],
) -> Result<T, InterpolationError> {
    let (lower_y, higher_y) = search_nearest_id(target_y, ys)?;
    Ok(bilinear(
        target_x,
        xs[lower_x],
        xs[higher_x],
        target_y,
        ys[lower_y],
        ys[higher_y],
        lower_row[lower_y],
        lower_row[higher_y],
        higher_row[lower_y],
        higher_row[higher_y],
    ))
}

/// Borrowed 2-D lookup table.
///
/// Holds references to both axes and the value grid, with every row length
/// validated once on construction.
///
/// # Grid Layout
///
/// `grid[i][j] = z(xs[i], ys[j])` where
/// - `xs` defines the x-axis coordinates (rows)
/// - `ys` defines the y-axis coordinates (columns)
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::BilinearTable;
///
/// let xs = [0, 10];
/// let ys = [0, 10];
/// let grid = [[0, 100], [100, 200]];
///
/// let table = BilinearTable::new(&xs, &ys, &grid).unwrap();
/// assert_eq!(table.interpolate(5, 5).unwrap(), 100);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BilinearTable<'a, T, R> {
    /// X-axis samples
    xs: &'a [T],
    /// Y-axis samples
    ys: &'a [T],
    /// Grid rows: grid[i][j] = z(xs[i], ys[j])
    grid: &'a [R],
}

impl<'a, T, R> BilinearTable<'a, T, R>
where
    T: Scalar,
    R: AsRef<[T]>,
{
    /// Construct a table over `xs`, `ys` and `grid`.
    ///
    /// # Returns
    ///
    /// * `Ok(BilinearTable)` - Successfully constructed table
    /// * `Err(InterpolationError::InsufficientData)` - An axis is empty
    /// * `Err(InterpolationError::SizeMismatch)` - Grid dimensions don't match axis lengths
    pub fn new(xs: &'a [T], ys: &'a [T], grid: &'a [R]) -> Result<Self, InterpolationError> {
        if xs.is_empty() || ys.is_empty() {
            return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
        }
        if grid.len() != xs.len() {
            return Err(InterpolationError::SizeMismatch {
                expected: xs.len(),
                got: grid.len(),
            });
        }
        if let Some(row) = grid.iter().find(|row| row.as_ref().len() != ys.len()) {
            return Err(InterpolationError::SizeMismatch {
                expected: ys.len(),
                got: row.as_ref().len(),
            });
        }
        Ok(Self { xs, ys, grid })
    }

    /// Interpolate the value at `(x, y)`.
    ///
    /// # Returns
    ///
    /// * `Ok(z)` - The interpolated value
    /// * `Err(InterpolationError::OutOfRange)` - `(x, y)` is outside the grid
    pub fn interpolate(&self, x: T, y: T) -> Result<T, InterpolationError> {
        let (lower_x, higher_x) = search_nearest_id(x, self.xs)?;
        cell(
            x,
            y,
            self.xs,
            self.ys,
            lower_x,
            higher_x,
            self.grid[lower_x].as_ref(),
            self.grid[higher_x].as_ref(),
        )
    }

    /// Return the covered x domain.
    #[inline]
    pub fn domain_x(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Return the covered y domain.
    #[inline]
    pub fn domain_y(&self) -> (T, T) {
        (self.ys[0], self.ys[self.ys.len() - 1])
    }

    /// Returns the x-axis samples.
    #[inline]
    pub fn xs(&self) -> &'a [T] {
        self.xs
    }

    /// Returns the y-axis samples.
    #[inline]
    pub fn ys(&self) -> &'a [T] {
        self.ys
    }

    /// Returns the grid rows.
    #[inline]
    pub fn grid(&self) -> &'a [R] {
        self.grid
    }
}
