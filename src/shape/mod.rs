//! Simplices supported by simplex3d.

pub use self::segment::Segment;
pub use self::simplex::Simplex;
pub use self::tetrahedron::Tetrahedron;
pub use self::topology::Topology;
pub use self::triangle::Triangle;

pub mod reference_simplex;
mod segment;
mod simplex;
mod tetrahedron;
mod topology;
mod triangle;
