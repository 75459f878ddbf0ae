use thiserror::Error;

/// Errors that can occur while constructing a grid.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid allocation failed")]
    Allocation,
    #[error("{name} array has length {got}, expected {expected}")]
    CoordinateLength {
        name: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Canonical local face identifier within a cell.
///
/// The numeric value is the face tag stored per cell-face incidence; solvers
/// use it to recover which side of a cell a face lies on without recomputing
/// geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceTag {
    XLow = 0,
    XHigh = 1,
    YLow = 2,
    YHigh = 3,
    ZLow = 4,
    ZHigh = 5,
}

impl Default for FaceTag {
    fn default() -> Self {
        FaceTag::XLow
    }
}

/// The complete computational grid.
///
/// Connectivity is stored in flat arrays with prefix-sum offset tables:
/// the faces of cell `c` are `cell_faces[cell_facepos[c]..cell_facepos[c + 1]]`,
/// and likewise for `face_nodes`/`face_nodepos`. Vector-valued geometry
/// (coordinates, centroids, normals) is stored flat with stride `dimensions`.
#[derive(Clone, Debug)]
pub struct Grid {
    /// Spatial dimension, 2 or 3.
    pub dimensions: usize,
    /// Per-axis cell counts (nx, ny, nz); nz = 1 for 2D grids.
    pub cartdims: [usize; 3],

    pub number_of_cells: usize,
    pub number_of_faces: usize,
    pub number_of_nodes: usize,

    /// Offset table into `cell_faces`, length `number_of_cells + 1`.
    pub cell_facepos: Vec<usize>,
    /// Face indices bounding each cell, in canonical per-cell order.
    pub cell_faces: Vec<usize>,
    /// Face tag per cell-face incidence, parallel to `cell_faces`.
    pub cell_facetag: Vec<FaceTag>,

    /// Offset table into `face_nodes`, length `number_of_faces + 1`.
    pub face_nodepos: Vec<usize>,
    /// Node indices bounding each face, in fixed winding order.
    pub face_nodes: Vec<usize>,
    /// The two cells adjacent to each face. `None` means the face lies on
    /// the exterior boundary on that side; at most one side is `None`.
    /// The face normal points from slot 0 towards slot 1.
    pub face_cells: Vec<[Option<usize>; 2]>,

    /// Map from local cell ordinal to global ordinal. Identity for fully
    /// populated Cartesian grids; present so grids with holes can share the
    /// same container.
    pub global_cell: Vec<usize>,

    /// Node positions, `dimensions` entries per node.
    pub node_coordinates: Vec<f64>,

    pub cell_centroids: Vec<f64>,
    pub cell_volumes: Vec<f64>,

    pub face_centroids: Vec<f64>,
    pub face_areas: Vec<f64>,
    /// Face normals scaled by area (not unit length). For axis-aligned faces
    /// the magnitude equals the face area by construction.
    pub face_normals: Vec<f64>,
}

impl Grid {
    /// Faces bounding cell `c`, in canonical order.
    pub fn cell_faces(&self, c: usize) -> &[usize] {
        &self.cell_faces[self.cell_facepos[c]..self.cell_facepos[c + 1]]
    }

    /// Face tags of cell `c`, parallel to [`Grid::cell_faces`].
    pub fn cell_facetags(&self, c: usize) -> &[FaceTag] {
        &self.cell_facetag[self.cell_facepos[c]..self.cell_facepos[c + 1]]
    }

    /// Nodes bounding face `f`, in winding order.
    pub fn face_nodes(&self, f: usize) -> &[usize] {
        &self.face_nodes[self.face_nodepos[f]..self.face_nodepos[f + 1]]
    }

    /// The two neighbor slots of face `f`.
    pub fn face_cells(&self, f: usize) -> [Option<usize>; 2] {
        self.face_cells[f]
    }

    pub fn is_boundary_face(&self, f: usize) -> bool {
        let [a, b] = self.face_cells[f];
        a.is_none() || b.is_none()
    }

    pub fn node_position(&self, n: usize) -> &[f64] {
        let d = self.dimensions;
        &self.node_coordinates[d * n..d * (n + 1)]
    }

    pub fn cell_centroid(&self, c: usize) -> &[f64] {
        let d = self.dimensions;
        &self.cell_centroids[d * c..d * (c + 1)]
    }

    pub fn cell_volume(&self, c: usize) -> f64 {
        self.cell_volumes[c]
    }

    pub fn face_centroid(&self, f: usize) -> &[f64] {
        let d = self.dimensions;
        &self.face_centroids[d * f..d * (f + 1)]
    }

    pub fn face_area(&self, f: usize) -> f64 {
        self.face_areas[f]
    }

    pub fn face_normal(&self, f: usize) -> &[f64] {
        let d = self.dimensions;
        &self.face_normals[d * f..d * (f + 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_tags_match_stored_values() {
        assert_eq!(FaceTag::XLow as usize, 0);
        assert_eq!(FaceTag::XHigh as usize, 1);
        assert_eq!(FaceTag::YLow as usize, 2);
        assert_eq!(FaceTag::YHigh as usize, 3);
        assert_eq!(FaceTag::ZLow as usize, 4);
        assert_eq!(FaceTag::ZHigh as usize, 5);
    }
}
