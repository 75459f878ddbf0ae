//! Topology fill for lexicographically ordered Cartesian grids.
//!
//! Every adjacency is a closed-form function of (i, j, k) and the grid
//! dimensions, so construction is O(cells + faces) with no search and a
//! reproducible numbering independent of geometry. Faces are numbered in
//! families, one per normal axis: all x-normal faces first, then y, then z.

use crate::mesh::{FaceTag, Grid};

/// Global-cell indices of a Cartesian grid: cells are already in
/// lexicographic order with no holes, so the numbering is the identity.
fn fill_cart_indices(g: &mut Grid) {
    for (c, gc) in g.global_cell.iter_mut().enumerate() {
        *gc = c;
    }
}

const TAGS_3D: [FaceTag; 6] = [
    FaceTag::XLow,
    FaceTag::XHigh,
    FaceTag::YLow,
    FaceTag::YHigh,
    FaceTag::ZLow,
    FaceTag::ZHigh,
];

// 2D cells emit faces in (x-low, y-low, x-high, y-high) order.
const TAGS_2D: [FaceTag; 4] = [FaceTag::XLow, FaceTag::YLow, FaceTag::XHigh, FaceTag::YHigh];

/// Fill cell-face, face-node and face-cell connectivity of a 3D grid whose
/// `cartdims` are already set.
pub fn fill_cart_topology_3d(g: &mut Grid) {
    let [nx, ny, nz] = g.cartdims;
    let mx = nx + 1;
    let my = ny + 1;

    // Face family sizes: x-normal faces come first, then y, then z.
    let nxf = mx * ny * nz;
    let nyf = nx * my * nz;

    for p in 0..=g.number_of_cells {
        g.cell_facepos[p] = 6 * p;
    }
    for p in 0..=g.number_of_faces {
        g.face_nodepos[p] = 4 * p;
    }

    let cell = |i: usize, j: usize, k: usize| i + nx * (j + ny * k);
    let node = |i: usize, j: usize, k: usize| i + mx * (j + my * k);

    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                let c = cell(i, j, k);
                g.cell_faces[6 * c..6 * c + 6].copy_from_slice(&[
                    i + mx * (j + ny * k),
                    i + 1 + mx * (j + ny * k),
                    nxf + i + nx * (j + my * k),
                    nxf + i + nx * (j + 1 + my * k),
                    nxf + nyf + i + nx * (j + ny * k),
                    nxf + nyf + i + nx * (j + ny * (k + 1)),
                ]);
                g.cell_facetag[6 * c..6 * c + 6].copy_from_slice(&TAGS_3D);
            }
        }
    }

    // Faces with x-normal.
    for k in 0..nz {
        for j in 0..ny {
            for i in 0..=nx {
                let f = i + mx * (j + ny * k);
                g.face_nodes[4 * f..4 * f + 4].copy_from_slice(&[
                    node(i, j, k),
                    node(i, j + 1, k),
                    node(i, j + 1, k + 1),
                    node(i, j, k + 1),
                ]);
                let low = (i > 0).then(|| cell(i - 1, j, k));
                let high = (i < nx).then(|| cell(i, j, k));
                g.face_cells[f] = [low, high];
            }
        }
    }
    // Faces with y-normal.
    for k in 0..nz {
        for j in 0..=ny {
            for i in 0..nx {
                let f = nxf + i + nx * (j + my * k);
                g.face_nodes[4 * f..4 * f + 4].copy_from_slice(&[
                    node(i, j, k),
                    node(i, j, k + 1),
                    node(i + 1, j, k + 1),
                    node(i + 1, j, k),
                ]);
                let low = (j > 0).then(|| cell(i, j - 1, k));
                let high = (j < ny).then(|| cell(i, j, k));
                g.face_cells[f] = [low, high];
            }
        }
    }
    // Faces with z-normal.
    for k in 0..=nz {
        for j in 0..ny {
            for i in 0..nx {
                let f = nxf + nyf + i + nx * (j + ny * k);
                g.face_nodes[4 * f..4 * f + 4].copy_from_slice(&[
                    node(i, j, k),
                    node(i + 1, j, k),
                    node(i + 1, j + 1, k),
                    node(i, j + 1, k),
                ]);
                let low = (k > 0).then(|| cell(i, j, k - 1));
                let high = (k < nz).then(|| cell(i, j, k));
                g.face_cells[f] = [low, high];
            }
        }
    }

    fill_cart_indices(g);
}

/// Fill cell-face, face-node and face-cell connectivity of a 2D grid whose
/// `cartdims` are already set. Faces are edges with two nodes each.
pub fn fill_cart_topology_2d(g: &mut Grid) {
    let [nx, ny, _] = g.cartdims;
    let mx = nx + 1;
    let nxf = mx * ny;

    for p in 0..=g.number_of_cells {
        g.cell_facepos[p] = 4 * p;
    }
    for p in 0..=g.number_of_faces {
        g.face_nodepos[p] = 2 * p;
    }

    let cell = |i: usize, j: usize| i + nx * j;
    let node = |i: usize, j: usize| i + mx * j;

    for j in 0..ny {
        for i in 0..nx {
            let c = cell(i, j);
            g.cell_faces[4 * c..4 * c + 4].copy_from_slice(&[
                i + mx * j,
                nxf + i + nx * j,
                i + 1 + mx * j,
                nxf + i + nx * (j + 1),
            ]);
            g.cell_facetag[4 * c..4 * c + 4].copy_from_slice(&TAGS_2D);
        }
    }

    // Faces with x-normal.
    for j in 0..ny {
        for i in 0..=nx {
            let f = i + mx * j;
            g.face_nodes[2 * f..2 * f + 2].copy_from_slice(&[node(i, j), node(i, j + 1)]);
            let low = (i > 0).then(|| cell(i - 1, j));
            let high = (i < nx).then(|| cell(i, j));
            g.face_cells[f] = [low, high];
        }
    }
    // Faces with y-normal.
    for j in 0..=ny {
        for i in 0..nx {
            let f = nxf + i + nx * j;
            g.face_nodes[2 * f..2 * f + 2].copy_from_slice(&[node(i + 1, j), node(i, j)]);
            let low = (j > 0).then(|| cell(i, j - 1));
            let high = (j < ny).then(|| cell(i, j));
            g.face_cells[f] = [low, high];
        }
    }

    fill_cart_indices(g);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::{allocate_cart_grid_2d, allocate_cart_grid_3d};

    #[test]
    fn single_cell_3d_has_six_boundary_faces() {
        let mut g = allocate_cart_grid_3d(1, 1, 1).unwrap();
        fill_cart_topology_3d(&mut g);

        assert_eq!(g.cell_faces(0), &[0, 1, 2, 3, 4, 5]);
        for f in 0..g.number_of_faces {
            assert!(g.is_boundary_face(f));
            let [a, b] = g.face_cells(f);
            assert_eq!(a.or(b), Some(0));
        }
    }

    #[test]
    fn interior_face_joins_lexicographic_neighbors() {
        let mut g = allocate_cart_grid_3d(2, 2, 2).unwrap();
        fill_cart_topology_3d(&mut g);

        // x-face between cells (0,0,0) and (1,0,0).
        let f = g.cell_faces(0)[1];
        assert_eq!(g.face_cells(f), [Some(0), Some(1)]);
        // z-face between cells (0,0,0) and (0,0,1).
        let f = g.cell_faces(0)[5];
        assert_eq!(g.face_cells(f), [Some(0), Some(4)]);
    }

    #[test]
    fn facetag_pattern_2d() {
        let mut g = allocate_cart_grid_2d(3, 2).unwrap();
        fill_cart_topology_2d(&mut g);

        for c in 0..g.number_of_cells {
            assert_eq!(g.cell_facetags(c), &TAGS_2D);
        }
    }
}
