#[macro_use]
extern crate approx;
extern crate nalgebra as na;

mod helpers;
mod invariants;
mod segment_tetrahedron;
mod segment_triangle;
mod triangle_triangle;
