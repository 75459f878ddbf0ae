//! Exact-count allocation of zero-initialized grid containers.

use crate::mesh::{FaceTag, Grid, GridError};

/// Allocate a vector of exactly `len` copies of `value`, surfacing
/// out-of-memory as an error instead of aborting.
fn filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>, GridError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len).map_err(|_| GridError::Allocation)?;
    v.resize(len, value);
    Ok(v)
}

/// Allocate a zero-initialized grid container for the given entity counts.
///
/// The incidence array lengths are derived from the counts: every face has
/// `2 * (dimensions - 1)` nodes and every cell `2 * dimensions` faces, which
/// holds for all quadrilateral/hexahedral Cartesian grids. If any allocation
/// fails the partially built container is dropped whole and an error is
/// returned, so no partially valid grid is ever observable.
pub fn allocate_cart_grid(
    dimensions: usize,
    ncells: usize,
    nfaces: usize,
    nnodes: usize,
) -> Result<Grid, GridError> {
    let nfacenodes = nfaces * (2 * (dimensions - 1));
    let ncellfaces = ncells * (2 * dimensions);

    Ok(Grid {
        dimensions,
        cartdims: [0; 3],
        number_of_cells: ncells,
        number_of_faces: nfaces,
        number_of_nodes: nnodes,
        cell_facepos: filled(ncells + 1, 0)?,
        cell_faces: filled(ncellfaces, 0)?,
        cell_facetag: filled(ncellfaces, FaceTag::default())?,
        face_nodepos: filled(nfaces + 1, 0)?,
        face_nodes: filled(nfacenodes, 0)?,
        face_cells: filled(nfaces, [None, None])?,
        global_cell: filled(ncells, 0)?,
        node_coordinates: filled(dimensions * nnodes, 0.0)?,
        cell_centroids: filled(dimensions * ncells, 0.0)?,
        cell_volumes: filled(ncells, 0.0)?,
        face_centroids: filled(dimensions * nfaces, 0.0)?,
        face_areas: filled(nfaces, 0.0)?,
        face_normals: filled(dimensions * nfaces, 0.0)?,
    })
}

/// Allocate an nx-by-ny 2D grid with `cartdims` set and all arrays zeroed.
pub fn allocate_cart_grid_2d(nx: usize, ny: usize) -> Result<Grid, GridError> {
    let nxf = (nx + 1) * ny;
    let nyf = nx * (ny + 1);

    let ncells = nx * ny;
    let nfaces = nxf + nyf;
    let nnodes = (nx + 1) * (ny + 1);

    let mut g = allocate_cart_grid(2, ncells, nfaces, nnodes)?;
    g.cartdims = [nx, ny, 1];
    Ok(g)
}

/// Allocate an nx-by-ny-by-nz 3D grid with `cartdims` set and all arrays zeroed.
pub fn allocate_cart_grid_3d(nx: usize, ny: usize, nz: usize) -> Result<Grid, GridError> {
    let nxf = (nx + 1) * ny * nz;
    let nyf = nx * (ny + 1) * nz;
    let nzf = nx * ny * (nz + 1);

    let ncells = nx * ny * nz;
    let nfaces = nxf + nyf + nzf;
    let nnodes = (nx + 1) * (ny + 1) * (nz + 1);

    let mut g = allocate_cart_grid(3, ncells, nfaces, nnodes)?;
    g.cartdims = [nx, ny, nz];
    Ok(g)
}
