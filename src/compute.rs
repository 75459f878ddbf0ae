//! General-purpose geometry post-processor.
//!
//! Recomputes face centroids/areas/normals and cell centroids/volumes from
//! topology and actual node positions, with no axis-alignment assumption.
//! Faces are fan-triangulated about their corner average; cells are summed
//! from signed tetrahedra (triangles in 2D) spanned between face triangles
//! and the cell's face-centroid average. Face normals keep the construction
//! convention: area magnitude, pointing from neighbor slot 0 to slot 1.

use glam::{DVec2, DVec3};

use crate::mesh::Grid;

/// Fill all derived geometric quantities of `g` from its node coordinates.
///
/// Requires complete topology and node positions; everything else is
/// overwritten. Only 2D and 3D grids exist in this crate.
pub fn compute_geometry(g: &mut Grid) {
    if g.dimensions == 2 {
        compute_face_geometry_2d(g);
        compute_cell_geometry_2d(g);
    } else {
        compute_face_geometry_3d(g);
        compute_cell_geometry_3d(g);
    }
}

fn node2(g: &Grid, n: usize) -> DVec2 {
    DVec2::new(g.node_coordinates[2 * n], g.node_coordinates[2 * n + 1])
}

fn node3(g: &Grid, n: usize) -> DVec3 {
    DVec3::new(
        g.node_coordinates[3 * n],
        g.node_coordinates[3 * n + 1],
        g.node_coordinates[3 * n + 2],
    )
}

fn compute_face_geometry_2d(g: &mut Grid) {
    for f in 0..g.number_of_faces {
        let nodes = g.face_nodes(f);
        let a = node2(g, nodes[0]);
        let b = node2(g, nodes[1]);

        let edge = b - a;
        let mid = (a + b) / 2.0;
        // Edge vector rotated a quarter turn clockwise; with the stored
        // winding this points from neighbor slot 0 towards slot 1.
        let normal = DVec2::new(edge.y, -edge.x);

        g.face_areas[f] = edge.length();
        g.face_centroids[2 * f] = mid.x;
        g.face_centroids[2 * f + 1] = mid.y;
        g.face_normals[2 * f] = normal.x;
        g.face_normals[2 * f + 1] = normal.y;
    }
}

fn compute_face_geometry_3d(g: &mut Grid) {
    for f in 0..g.number_of_faces {
        let nodes = g.face_nodes(f);
        let mut center = DVec3::ZERO;
        for &n in nodes {
            center += node3(g, n);
        }
        center /= nodes.len() as f64;

        let mut normal = DVec3::ZERO;
        let mut area = 0.0;
        let mut centroid = DVec3::ZERO;
        for e in 0..nodes.len() {
            let u = node3(g, nodes[e]);
            let v = node3(g, nodes[(e + 1) % nodes.len()]);
            let w = (u - center).cross(v - center) / 2.0;
            let tri_area = w.length();

            normal += w;
            area += tri_area;
            centroid += tri_area * (center + u + v) / 3.0;
        }
        let centroid = if area > 0.0 { centroid / area } else { center };

        g.face_areas[f] = area;
        g.face_centroids[3 * f..3 * f + 3].copy_from_slice(&centroid.to_array());
        g.face_normals[3 * f..3 * f + 3].copy_from_slice(&normal.to_array());
    }
}

/// Sign of face `f` as seen from cell `c`: +1 when the stored winding (and
/// normal) points out of the cell, -1 when it points in.
fn orientation(g: &Grid, f: usize, c: usize) -> f64 {
    if g.face_cells[f][0] == Some(c) {
        1.0
    } else {
        -1.0
    }
}

fn compute_cell_geometry_2d(g: &mut Grid) {
    for c in 0..g.number_of_cells {
        let faces = &g.cell_faces[g.cell_facepos[c]..g.cell_facepos[c + 1]];

        let mut center = DVec2::ZERO;
        for &f in faces {
            center += DVec2::new(g.face_centroids[2 * f], g.face_centroids[2 * f + 1]);
        }
        center /= faces.len() as f64;

        let mut volume = 0.0;
        let mut centroid = DVec2::ZERO;
        for &f in faces {
            let sgn = orientation(g, f, c);
            let nodes = g.face_nodes(f);
            let a = node2(g, nodes[0]);
            let b = node2(g, nodes[1]);

            let tri = sgn * (a - center).perp_dot(b - center) / 2.0;
            volume += tri;
            centroid += tri * (center + a + b) / 3.0;
        }
        let centroid = if volume != 0.0 { centroid / volume } else { center };

        g.cell_volumes[c] = volume;
        g.cell_centroids[2 * c] = centroid.x;
        g.cell_centroids[2 * c + 1] = centroid.y;
    }
}

fn compute_cell_geometry_3d(g: &mut Grid) {
    for c in 0..g.number_of_cells {
        let faces = &g.cell_faces[g.cell_facepos[c]..g.cell_facepos[c + 1]];

        let mut center = DVec3::ZERO;
        for &f in faces {
            center += DVec3::new(
                g.face_centroids[3 * f],
                g.face_centroids[3 * f + 1],
                g.face_centroids[3 * f + 2],
            );
        }
        center /= faces.len() as f64;

        let mut volume = 0.0;
        let mut centroid = DVec3::ZERO;
        for &f in faces {
            let sgn = orientation(g, f, c);
            let fc = DVec3::new(
                g.face_centroids[3 * f],
                g.face_centroids[3 * f + 1],
                g.face_centroids[3 * f + 2],
            );
            let nodes = &g.face_nodes[g.face_nodepos[f]..g.face_nodepos[f + 1]];
            for e in 0..nodes.len() {
                let u = node3(g, nodes[e]);
                let v = node3(g, nodes[(e + 1) % nodes.len()]);

                // Signed tetrahedron (cell center, face centroid, u, v).
                let tet = sgn * (u - center).cross(v - center).dot(fc - center) / 6.0;
                volume += tet;
                centroid += tet * (center + fc + u + v) / 4.0;
            }
        }
        let centroid = if volume != 0.0 { centroid / volume } else { center };

        g.cell_volumes[c] = volume;
        g.cell_centroids[3 * c..3 * c + 3].copy_from_slice(&centroid.to_array());
    }
}
