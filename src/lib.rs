//! # cartgrid
//!
//! Construction of Cartesian tensor-product grids for finite-volume solvers.
//!
//! A grid is built in one shot: exact-count allocation, closed-form topology
//! fill (cells, faces, nodes and their incidence, boundary faces marked with
//! absent neighbors), then geometry fill (centroids, volumes, areas and
//! area-magnitude normals). Supported variants:
//!
//! - uniform spacing per axis ([`create_uniform_grid_2d`], [`create_uniform_grid_3d`])
//! - explicit per-axis coordinate arrays ([`create_tensor_grid_2d`], [`create_tensor_grid_3d`])
//! - layered 3D grids whose node depths are perturbed per column by a shared
//!   table, with derived geometry from the general post-processor
//!   ([`compute::compute_geometry`])
//!
//! Construction is deterministic and purely a function of its inputs; the
//! resulting [`Grid`] is never mutated afterwards. Malformed coordinate
//! values (non-monotonic, zero spacing) are accepted and yield degenerate but
//! structurally well-formed grids; only resource exhaustion and mis-sized
//! input slices are errors.

pub mod alloc;
pub mod compute;
pub mod geometry;
pub mod mesh;
pub mod topology;

pub use mesh::{FaceTag, Grid, GridError};

fn check_len(name: &'static str, got: usize, expected: usize) -> Result<(), GridError> {
    if got == expected {
        Ok(())
    } else {
        Err(GridError::CoordinateLength {
            name,
            expected,
            got,
        })
    }
}

fn uniform_coords(n: usize, d: f64) -> Vec<f64> {
    (0..=n).map(|i| i as f64 * d).collect()
}

/// Create an nx-by-ny 2D grid with unit spacing.
pub fn create_cart_grid_2d(nx: usize, ny: usize) -> Result<Grid, GridError> {
    create_uniform_grid_2d(nx, ny, 1.0, 1.0)
}

/// Create an nx-by-ny-by-nz 3D grid with unit spacing.
pub fn create_cart_grid_3d(nx: usize, ny: usize, nz: usize) -> Result<Grid, GridError> {
    create_uniform_grid_3d(nx, ny, nz, 1.0, 1.0, 1.0)
}

/// Create a 2D grid with uniform spacing `dx`, `dy` per axis.
pub fn create_uniform_grid_2d(nx: usize, ny: usize, dx: f64, dy: f64) -> Result<Grid, GridError> {
    let x = uniform_coords(nx, dx);
    let y = uniform_coords(ny, dy);
    create_tensor_grid_2d(nx, ny, &x, &y)
}

/// Create a 3D grid with uniform spacing `dx`, `dy`, `dz` per axis.
pub fn create_uniform_grid_3d(
    nx: usize,
    ny: usize,
    nz: usize,
    dx: f64,
    dy: f64,
    dz: f64,
) -> Result<Grid, GridError> {
    let x = uniform_coords(nx, dx);
    let y = uniform_coords(ny, dy);
    let z = uniform_coords(nz, dz);
    create_tensor_grid_3d(nx, ny, nz, &x, &y, &z, None)
}

/// Create a 2D grid from explicit per-axis coordinate arrays of length
/// `nx + 1` and `ny + 1`.
pub fn create_tensor_grid_2d(
    nx: usize,
    ny: usize,
    x: &[f64],
    y: &[f64],
) -> Result<Grid, GridError> {
    check_len("x", x.len(), nx + 1)?;
    check_len("y", y.len(), ny + 1)?;

    let mut g = alloc::allocate_cart_grid_2d(nx, ny)?;
    topology::fill_cart_topology_2d(&mut g);
    geometry::fill_cart_geometry_2d(&mut g, x, y);
    Ok(g)
}

/// Create a 3D grid from explicit per-axis coordinate arrays of length
/// `nx + 1`, `ny + 1` and `nz + 1`.
///
/// When `depthz` is given it must hold `(nx + 1) * (ny + 1)` per-node-column
/// depth offsets; the grid is then built as a layered grid with derived
/// geometry computed from actual node positions.
pub fn create_tensor_grid_3d(
    nx: usize,
    ny: usize,
    nz: usize,
    x: &[f64],
    y: &[f64],
    z: &[f64],
    depthz: Option<&[f64]>,
) -> Result<Grid, GridError> {
    check_len("x", x.len(), nx + 1)?;
    check_len("y", y.len(), ny + 1)?;
    check_len("z", z.len(), nz + 1)?;
    if let Some(d) = depthz {
        check_len("depthz", d.len(), (nx + 1) * (ny + 1))?;
    }

    let mut g = alloc::allocate_cart_grid_3d(nx, ny, nz)?;
    topology::fill_cart_topology_3d(&mut g);
    match depthz {
        None => geometry::fill_cart_geometry_3d(&mut g, x, y, z),
        Some(d) => geometry::fill_layered_geometry_3d(&mut g, x, y, z, d),
    }
    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_coordinate_length_is_rejected() {
        let x = [0.0, 1.0, 2.0];
        let y = [0.0, 1.0];
        let err = create_tensor_grid_2d(3, 1, &x, &y).unwrap_err();
        assert!(matches!(
            err,
            GridError::CoordinateLength {
                name: "x",
                expected: 4,
                got: 3
            }
        ));
    }

    #[test]
    fn wrong_depthz_length_is_rejected() {
        let x = [0.0, 1.0];
        let d = [0.0; 3];
        let err = create_tensor_grid_3d(1, 1, 1, &x, &x, &x, Some(&d)).unwrap_err();
        assert!(matches!(err, GridError::CoordinateLength { name: "depthz", .. }));
    }
}
