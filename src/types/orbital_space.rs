use bit_vec::BitVec;
use log::error;

use super::{Determinant, DeterminantErr, MAX_ORBITALS};

/// The number of active orbitals (`nmo`) shared by a set of determinants.
///
/// Every determinant is built through a space and keeps its `nmo`, so
/// determinants from one space can be compared, hashed and printed without
/// any global state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct OrbitalSpace {
    nmo: usize,
}

impl OrbitalSpace {
    pub fn new(nmo: usize) -> Result<Self, DeterminantErr> {
        if nmo > MAX_ORBITALS {
            error!("Too many orbitals: {} (max {})", nmo, MAX_ORBITALS);
            return Err(DeterminantErr::TooManyOrbitals);
        }
        Ok(Self { nmo })
    }

    pub(super) fn with_nmo(nmo: usize) -> Self {
        Self { nmo }
    }

    pub fn nmo(&self) -> usize {
        self.nmo
    }

    pub fn num_spin_orbitals(&self) -> usize {
        2 * self.nmo
    }

    /// The determinant with no occupied orbitals.
    pub fn vacuum(&self) -> Determinant {
        Determinant::zeros(self.nmo)
    }

    /// Builds a determinant from a combined occupation vector `[Ia, Ib]` of
    /// length at least `2 * nmo`. Panics if the vector is shorter.
    pub fn determinant<T: Copy + Into<u8>>(&self, occupation: &[T]) -> Determinant {
        let mut det = self.vacuum();
        for (pos, &occ) in occupation[..self.num_spin_orbitals()].iter().enumerate() {
            det.assign(pos, Into::<u8>::into(occ) != 0);
        }
        det
    }

    /// Builds a determinant from separate alpha and beta strings, each of
    /// length at least `nmo`. Panics if either is shorter.
    pub fn determinant_from_spins<T: Copy + Into<u8>>(
        &self,
        alpha: &[T],
        beta: &[T],
    ) -> Determinant {
        let mut det = self.vacuum();
        for p in 0..self.nmo {
            det.assign(p, Into::<u8>::into(alpha[p]) != 0);
            det.assign(self.nmo + p, Into::<u8>::into(beta[p]) != 0);
        }
        det
    }

    /// Builds a determinant from a raw bit vector laid out as
    /// [`Determinant::bits`]. Bits past `2 * nmo` are ignored, missing bits
    /// read as zero.
    pub fn determinant_from_bits(&self, bits: &BitVec) -> Determinant {
        let mut det = self.vacuum();
        for (pos, bit) in bits.iter().take(self.num_spin_orbitals()).enumerate() {
            det.assign(pos, bit);
        }
        det
    }
}
