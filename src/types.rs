pub type OrbitalIndex = usize;

pub mod determinant;
pub mod orbital_space;

pub use determinant::{Determinant, DeterminantErr};
pub use orbital_space::OrbitalSpace;

/// Number of bits a determinant can hold.
pub const CAPACITY: usize = 256;
/// Largest `nmo` that fits two spin halves into `CAPACITY` bits.
pub const MAX_ORBITALS: usize = CAPACITY / 2;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Spin {
    Alpha,
    Beta,
}

impl Spin {
    pub const BOTH: [Spin; 2] = [Spin::Alpha, Spin::Beta];
}
