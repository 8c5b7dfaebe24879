//! Colour spaces: readings, reference whites, matrices and transfer curves.

pub mod matrix;
pub mod transfer;
pub mod white;
pub mod xyz;
