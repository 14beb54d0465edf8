//! The core data types for sparse chunked lattices:
//! - `PointN`: an N-dimensional integer point, most importantly `Point2i` and `Point3i`
//! - `LatticeScalar`: the family of integer scalars usable for lattice coordinates

pub mod point;

pub use point::{LatticeScalar, Point2, Point2i, Point3, Point3i, PointN};

pub use num;

pub mod prelude {
    pub use super::{LatticeScalar, Point2, Point2i, Point3, Point3i, PointN};
}
