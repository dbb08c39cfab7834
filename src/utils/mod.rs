//! Various unsorted geometrical and logical operators.

pub use self::plucker::Plucker;

mod plucker;
