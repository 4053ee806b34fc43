use bit_vec::BitVec;
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::BitXor;

use super::{OrbitalIndex, OrbitalSpace, Spin, CAPACITY};

const WORD_BITS: usize = u64::BITS as usize;
const NUM_WORDS: usize = CAPACITY / WORD_BITS;

#[derive(Debug, PartialEq, Eq)]
pub enum DeterminantErr {
    TooManyOrbitals,
    OrbitalOutOfRange,
}

/// A Slater determinant stored as a pair of alpha/beta occupation strings.
///
/// Both strings live in one fixed-width bit vector: bit `p` is the alpha
/// occupation of orbital `p` and bit `nmo + p` is the beta occupation. Bits
/// at or past `2 * nmo` are always zero.
///
/// Determinants are only meaningful relative to other determinants built for
/// the same [`OrbitalSpace`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Determinant {
    words: [u64; NUM_WORDS],
    nmo: usize,
}

impl Hash for Determinant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.words.hash(state);
    }
}

impl Display for Determinant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for p in 0..self.nmo {
            let symbol = match (self.get_bit(Spin::Alpha, p), self.get_bit(Spin::Beta, p)) {
                (true, true) => '2',
                (true, false) => '+',
                (false, true) => '-',
                (false, false) => '0',
            };
            write!(f, "{}", symbol)?;
        }
        write!(f, ">")
    }
}

impl BitXor for Determinant {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        let mut words = self.words;
        for (w, r) in words.iter_mut().zip(rhs.words.iter()) {
            *w ^= r;
        }
        Self {
            words,
            nmo: self.nmo,
        }
    }
}

impl Determinant {
    pub(super) fn zeros(nmo: usize) -> Self {
        Self {
            words: [0; NUM_WORDS],
            nmo,
        }
    }

    /// Builds a determinant from separate alpha and beta occupation strings.
    /// Any nonzero entry counts as occupied. The length of `alpha` sets `nmo`;
    /// `beta` must be at least as long.
    pub fn from_spin_occupations<T: Copy + Into<u8>>(
        alpha: &[T],
        beta: &[T],
    ) -> Result<Self, DeterminantErr> {
        let space = OrbitalSpace::new(alpha.len())?;
        Ok(space.determinant_from_spins(alpha, beta))
    }

    pub fn nmo(&self) -> usize {
        self.nmo
    }

    pub fn space(&self) -> OrbitalSpace {
        OrbitalSpace::with_nmo(self.nmo)
    }

    #[inline]
    fn position(&self, spin: Spin, orbital: OrbitalIndex) -> usize {
        debug_assert!(orbital < self.nmo, "orbital {} out of range", orbital);
        match spin {
            Spin::Alpha => orbital,
            Spin::Beta => self.nmo + orbital,
        }
    }

    #[inline]
    fn bit(&self, pos: usize) -> bool {
        self.words[pos / WORD_BITS] & (1u64 << (pos % WORD_BITS)) != 0
    }

    #[inline]
    pub(super) fn assign(&mut self, pos: usize, value: bool) {
        let mask = 1u64 << (pos % WORD_BITS);
        if value {
            self.words[pos / WORD_BITS] |= mask;
        } else {
            self.words[pos / WORD_BITS] &= !mask;
        }
    }

    /// Reads the occupation of `orbital` in the given spin channel.
    ///
    /// `orbital` must be below `nmo`. This is only checked in debug builds;
    /// see [`Determinant::try_get_bit`] for the checked version.
    #[inline]
    pub fn get_bit(&self, spin: Spin, orbital: OrbitalIndex) -> bool {
        self.bit(self.position(spin, orbital))
    }

    /// Writes the occupation of `orbital` in the given spin channel. Same
    /// precondition as [`Determinant::get_bit`].
    #[inline]
    pub fn set_bit(&mut self, spin: Spin, orbital: OrbitalIndex, value: bool) {
        let pos = self.position(spin, orbital);
        self.assign(pos, value);
    }

    pub fn try_get_bit(&self, spin: Spin, orbital: OrbitalIndex) -> Result<bool, DeterminantErr> {
        if orbital >= self.nmo {
            return Err(DeterminantErr::OrbitalOutOfRange);
        }
        Ok(self.get_bit(spin, orbital))
    }

    pub fn try_set_bit(
        &mut self,
        spin: Spin,
        orbital: OrbitalIndex,
        value: bool,
    ) -> Result<(), DeterminantErr> {
        if orbital >= self.nmo {
            return Err(DeterminantErr::OrbitalOutOfRange);
        }
        self.set_bit(spin, orbital, value);
        Ok(())
    }

    /// Alpha string of `self`, masked to the low `nmo` bits, word by word.
    fn alpha_words(&self, nmo: usize) -> [u64; NUM_WORDS] {
        let mut out = [0; NUM_WORDS];
        for (i, w) in self.words.iter().enumerate() {
            let lo = i * WORD_BITS;
            if lo >= nmo {
                break;
            }
            let n = nmo - lo;
            out[i] = if n >= WORD_BITS { *w } else { *w & ((1u64 << n) - 1) };
        }
        out
    }

    /// Orders two determinants by their alpha strings only, reading orbitals
    /// from `nmo - 1` down to 0.
    ///
    /// This is not a total order on determinants: any two determinants with
    /// the same alpha string compare `Equal`, whatever their beta strings.
    /// For that reason `Determinant` does not implement `Ord`.
    pub fn alpha_cmp(&self, other: &Self) -> Ordering {
        let lhs = self.alpha_words(self.nmo);
        let rhs = other.alpha_words(self.nmo);
        lhs.iter().rev().cmp(rhs.iter().rev())
    }

    pub fn alpha_less_than(&self, other: &Self) -> bool {
        self.alpha_cmp(other) == Ordering::Less
    }

    fn orbitals_where(&self, spin: Spin, occupied: bool) -> Vec<OrbitalIndex> {
        (0..self.nmo)
            .filter(|&p| self.get_bit(spin, p) == occupied)
            .collect()
    }

    /// Occupied orbitals of one spin channel, ascending.
    pub fn occupied_orbitals(&self, spin: Spin) -> Vec<OrbitalIndex> {
        self.orbitals_where(spin, true)
    }

    /// Empty orbitals of one spin channel, ascending.
    pub fn virtual_orbitals(&self, spin: Spin) -> Vec<OrbitalIndex> {
        self.orbitals_where(spin, false)
    }

    pub fn count_electrons(&self, spin: Spin) -> usize {
        (0..self.nmo).filter(|&p| self.get_bit(spin, p)).count()
    }

    fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Number of electrons that must move to turn `self` into `other`.
    /// Assumes both determinants hold the same number of electrons.
    pub fn excitation_level(&self, other: &Self) -> usize {
        (*self ^ *other).count_ones() / 2
    }

    /// The `2 * nmo` meaningful bits, alpha string first.
    pub fn bits(&self) -> BitVec {
        (0..2 * self.nmo).map(|pos| self.bit(pos)).collect()
    }

    pub fn alpha_bits(&self) -> BitVec {
        (0..self.nmo).map(|p| self.get_bit(Spin::Alpha, p)).collect()
    }

    pub fn beta_bits(&self) -> BitVec {
        (0..self.nmo).map(|p| self.get_bit(Spin::Beta, p)).collect()
    }
}
