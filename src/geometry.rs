//! Geometry fill for axis-aligned tensor-product grids.
//!
//! Centroids, volumes, areas and normals of axis-aligned cells and faces have
//! exact closed forms in the per-axis coordinate arrays, so they are filled
//! directly instead of being derived from node positions. Normals carry the
//! face area as magnitude and point along the face's normal axis, from the
//! low cell towards the high cell.
//!
//! The layered variant places nodes only (layers are vertically sheared, so
//! the closed forms no longer apply) and defers derived quantities to the
//! general post-processor in [`crate::compute`].

use crate::compute::compute_geometry;
use crate::mesh::Grid;

/// Fill node coordinates and derived geometry of a 3D grid from per-axis
/// coordinate arrays of length `cartdims[d] + 1`.
pub fn fill_cart_geometry_3d(g: &mut Grid, x: &[f64], y: &[f64], z: &[f64]) {
    let [nx, ny, nz] = g.cartdims;
    let mx = nx + 1;
    let my = ny + 1;

    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                let c = i + nx * (j + ny * k);
                g.cell_centroids[3 * c] = (x[i] + x[i + 1]) / 2.0;
                g.cell_centroids[3 * c + 1] = (y[j] + y[j + 1]) / 2.0;
                g.cell_centroids[3 * c + 2] = (z[k] + z[k + 1]) / 2.0;

                let dx = x[i + 1] - x[i];
                let dy = y[j + 1] - y[j];
                let dz = z[k + 1] - z[k];
                g.cell_volumes[c] = dx * dy * dz;
            }
        }
    }

    let nxf = mx * ny * nz;
    let nyf = nx * my * nz;

    // Faces with x-normal.
    for k in 0..nz {
        for j in 0..ny {
            for i in 0..=nx {
                let f = i + mx * (j + ny * k);
                let dy = y[j + 1] - y[j];
                let dz = z[k + 1] - z[k];

                g.face_normals[3 * f] = dy * dz;
                g.face_normals[3 * f + 1] = 0.0;
                g.face_normals[3 * f + 2] = 0.0;

                g.face_centroids[3 * f] = x[i];
                g.face_centroids[3 * f + 1] = (y[j] + y[j + 1]) / 2.0;
                g.face_centroids[3 * f + 2] = (z[k] + z[k + 1]) / 2.0;

                g.face_areas[f] = dy * dz;
            }
        }
    }
    // Faces with y-normal.
    for k in 0..nz {
        for j in 0..=ny {
            for i in 0..nx {
                let f = nxf + i + nx * (j + my * k);
                let dx = x[i + 1] - x[i];
                let dz = z[k + 1] - z[k];

                g.face_normals[3 * f] = 0.0;
                g.face_normals[3 * f + 1] = dx * dz;
                g.face_normals[3 * f + 2] = 0.0;

                g.face_centroids[3 * f] = (x[i] + x[i + 1]) / 2.0;
                g.face_centroids[3 * f + 1] = y[j];
                g.face_centroids[3 * f + 2] = (z[k] + z[k + 1]) / 2.0;

                g.face_areas[f] = dx * dz;
            }
        }
    }
    // Faces with z-normal.
    for k in 0..=nz {
        for j in 0..ny {
            for i in 0..nx {
                let f = nxf + nyf + i + nx * (j + ny * k);
                let dx = x[i + 1] - x[i];
                let dy = y[j + 1] - y[j];

                g.face_normals[3 * f] = 0.0;
                g.face_normals[3 * f + 1] = 0.0;
                g.face_normals[3 * f + 2] = dx * dy;

                g.face_centroids[3 * f] = (x[i] + x[i + 1]) / 2.0;
                g.face_centroids[3 * f + 1] = (y[j] + y[j + 1]) / 2.0;
                g.face_centroids[3 * f + 2] = z[k];

                g.face_areas[f] = dx * dy;
            }
        }
    }

    // Node coordinates are the tensor product of the axis arrays, in
    // lexicographic node order (x fastest).
    for k in 0..=nz {
        for j in 0..=ny {
            for i in 0..=nx {
                let n = i + mx * (j + my * k);
                g.node_coordinates[3 * n] = x[i];
                g.node_coordinates[3 * n + 1] = y[j];
                g.node_coordinates[3 * n + 2] = z[k];
            }
        }
    }
}

/// Fill node coordinates and derived geometry of a 2D grid from per-axis
/// coordinate arrays of length `cartdims[d] + 1`. Cell "volumes" are areas
/// and face "areas" are edge lengths.
pub fn fill_cart_geometry_2d(g: &mut Grid, x: &[f64], y: &[f64]) {
    let [nx, ny, _] = g.cartdims;
    let mx = nx + 1;

    for j in 0..ny {
        for i in 0..nx {
            let c = i + nx * j;
            g.cell_centroids[2 * c] = (x[i] + x[i + 1]) / 2.0;
            g.cell_centroids[2 * c + 1] = (y[j] + y[j + 1]) / 2.0;

            let dx = x[i + 1] - x[i];
            let dy = y[j + 1] - y[j];
            g.cell_volumes[c] = dx * dy;
        }
    }

    let nxf = mx * ny;

    // Faces with x-normal.
    for j in 0..ny {
        for i in 0..=nx {
            let f = i + mx * j;
            let dy = y[j + 1] - y[j];

            g.face_normals[2 * f] = dy;
            g.face_normals[2 * f + 1] = 0.0;

            g.face_centroids[2 * f] = x[i];
            g.face_centroids[2 * f + 1] = (y[j] + y[j + 1]) / 2.0;

            g.face_areas[f] = dy;
        }
    }
    // Faces with y-normal.
    for j in 0..=ny {
        for i in 0..nx {
            let f = nxf + i + nx * j;
            let dx = x[i + 1] - x[i];

            g.face_normals[2 * f] = 0.0;
            g.face_normals[2 * f + 1] = dx;

            g.face_centroids[2 * f] = (x[i] + x[i + 1]) / 2.0;
            g.face_centroids[2 * f + 1] = y[j];

            g.face_areas[f] = dx;
        }
    }

    for j in 0..=ny {
        for i in 0..=nx {
            let n = i + mx * j;
            g.node_coordinates[2 * n] = x[i];
            g.node_coordinates[2 * n + 1] = y[j];
        }
    }
}

/// Fill geometry of a layered 3D grid.
///
/// Each node depth is `z[k] + depthz[i + (nx + 1) * j]`: one perturbation
/// table of shape (nx+1, ny+1) is reused for every layer, producing layers
/// that are vertically sheared copies of one another. Node placement is then
/// no longer an axis-aligned product, so all derived quantities come from the
/// general post-processor instead of the closed forms.
pub fn fill_layered_geometry_3d(g: &mut Grid, x: &[f64], y: &[f64], z: &[f64], depthz: &[f64]) {
    let [nx, ny, nz] = g.cartdims;
    let mx = nx + 1;
    let my = ny + 1;

    for k in 0..=nz {
        for j in 0..=ny {
            for i in 0..=nx {
                let n = i + mx * (j + my * k);
                g.node_coordinates[3 * n] = x[i];
                g.node_coordinates[3 * n + 1] = y[j];
                g.node_coordinates[3 * n + 2] = z[k] + depthz[i + mx * j];
            }
        }
    }

    compute_geometry(g);
}
