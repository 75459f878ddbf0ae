use proptest::prelude::*;

use cartgrid::{create_cart_grid_3d, create_tensor_grid_3d, create_uniform_grid_2d, FaceTag, Grid};

/// Reference face numbering of a 2x2 2D grid: x-normal faces 0..6, y-normal
/// faces 6..12, cells in row-major order.
#[test]
fn facenumbers() {
    let faces = [
        0, 6, 1, 8, //
        1, 7, 2, 9, //
        3, 8, 4, 10, //
        4, 9, 5, 11,
    ];
    let g = create_uniform_grid_2d(2, 2, 1.0, 1.0).unwrap();
    for c in 0..g.number_of_cells {
        for k in g.cell_facepos[c]..g.cell_facepos[c + 1] {
            assert_eq!(g.cell_faces[k], faces[k]);
        }
    }
}

// Each global index should be hit exactly once.
#[test]
fn globalindex() {
    let (nx, ny, nz) = (2, 2, 2);
    let g = create_cart_grid_3d(nx, ny, nz).unwrap();
    let mut hits = vec![0; nx * ny * nz];
    for c in 0..g.number_of_cells {
        hits[g.global_cell[c]] += 1;
    }
    assert!(hits.iter().all(|&h| h == 1));
}

#[test]
fn facetag_order_3d() {
    use FaceTag::*;
    let g = create_cart_grid_3d(3, 2, 2).unwrap();
    for c in 0..g.number_of_cells {
        assert_eq!(g.cell_facetags(c), &[XLow, XHigh, YLow, YHigh, ZLow, ZHigh]);
    }
}

#[test]
fn facetag_order_2d() {
    use FaceTag::*;
    let g = create_uniform_grid_2d(3, 4, 1.0, 1.0).unwrap();
    for c in 0..g.number_of_cells {
        assert_eq!(g.cell_facetags(c), &[XLow, YLow, XHigh, YHigh]);
    }
}

fn check_neighbor_slots(g: &Grid) {
    let mut boundary = 0;
    for f in 0..g.number_of_faces {
        let [a, b] = g.face_cells(f);
        assert!(a.is_some() || b.is_some(), "face {f} has no neighbors");
        if a.is_none() || b.is_none() {
            boundary += 1;
        }
        for c in [a, b].into_iter().flatten() {
            assert!(c < g.number_of_cells);
            assert!(g.cell_faces(c).contains(&f));
        }
    }
    let [nx, ny, nz] = g.cartdims;
    let expected = if g.dimensions == 2 {
        2 * (nx + ny)
    } else {
        2 * (nx * ny + ny * nz + nx * nz)
    };
    assert_eq!(boundary, expected);
}

#[test]
fn neighbor_slots_3d() {
    let g = create_cart_grid_3d(3, 2, 4).unwrap();
    check_neighbor_slots(&g);
}

#[test]
fn neighbor_slots_2d() {
    let g = create_uniform_grid_2d(4, 3, 1.0, 1.0).unwrap();
    check_neighbor_slots(&g);
}

#[test]
fn offset_tables_increase_by_fixed_strides() {
    let g = create_cart_grid_3d(2, 3, 2).unwrap();
    for c in 0..g.number_of_cells {
        assert_eq!(g.cell_facepos[c + 1] - g.cell_facepos[c], 6);
    }
    for f in 0..g.number_of_faces {
        assert_eq!(g.face_nodepos[f + 1] - g.face_nodepos[f], 4);
    }

    let g = create_uniform_grid_2d(3, 3, 1.0, 1.0).unwrap();
    for c in 0..g.number_of_cells {
        assert_eq!(g.cell_facepos[c + 1] - g.cell_facepos[c], 4);
    }
    for f in 0..g.number_of_faces {
        assert_eq!(g.face_nodepos[f + 1] - g.face_nodepos[f], 2);
    }
}

#[test]
fn face_nodes_are_distinct_and_in_range() {
    let g = create_cart_grid_3d(2, 2, 3).unwrap();
    for f in 0..g.number_of_faces {
        let nodes = g.face_nodes(f);
        assert_eq!(nodes.len(), 4);
        for (a, &n) in nodes.iter().enumerate() {
            assert!(n < g.number_of_nodes);
            assert!(!nodes[..a].contains(&n), "face {f} repeats node {n}");
        }
    }
}

/// A zero-extent axis yields an empty but self-consistent grid, not an error.
#[test]
fn degenerate_axis_yields_empty_grid() {
    let x = [0.0];
    let y = [0.0, 1.0, 2.0];
    let z = [0.0, 1.0, 2.0];
    let g = create_tensor_grid_3d(0, 2, 2, &x, &y, &z, None).unwrap();
    assert_eq!(g.number_of_cells, 0);
    assert_eq!(g.number_of_faces, 1 * 2 * 2);
    assert_eq!(g.number_of_nodes, 1 * 3 * 3);
    assert_eq!(g.cell_facepos, vec![0]);
    assert_eq!(g.face_nodepos.len(), g.number_of_faces + 1);
}

proptest! {
    #[test]
    fn global_cell_is_identity(nx in 1usize..5, ny in 1usize..5, nz in 1usize..5) {
        let g = create_cart_grid_3d(nx, ny, nz).unwrap();
        prop_assert_eq!(g.number_of_cells, nx * ny * nz);
        for c in 0..g.number_of_cells {
            prop_assert_eq!(g.global_cell[c], c);
        }
    }

    #[test]
    fn neighbor_slots_hold_for_all_sizes(nx in 1usize..5, ny in 1usize..5, nz in 1usize..5) {
        let g = create_cart_grid_3d(nx, ny, nz).unwrap();
        check_neighbor_slots(&g);
    }
}
