use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::BuildHasher;
use std::str::FromStr;

use rustc_hash::FxBuildHasher;

use crate::types::Determinant;

/// Hash function backing a [`DeterminantTable`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HasherKind {
    /// std's randomly seeded SipHash
    Std,
    Fx,
}

impl FromStr for HasherKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "std" | "sip" => Ok(HasherKind::Std),
            "fx" => Ok(HasherKind::Fx),
            _ => Err(format!(
                "unknown hasher: {}; valid values are: std, fx",
                s
            )),
        }
    }
}

pub type StdDeterminantTable = DeterminantTable<RandomState>;
pub type FxDeterminantTable = DeterminantTable<FxBuildHasher>;

/// Maps determinants to their position in a determinant space.
pub struct DeterminantTable<S = RandomState> {
    table: HashMap<Determinant, usize, S>,
}

impl<S: BuildHasher + Default> Default for DeterminantTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BuildHasher + Default> DeterminantTable<S> {
    pub fn new() -> Self {
        Self {
            table: HashMap::with_hasher(S::default()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: HashMap::with_capacity_and_hasher(capacity, S::default()),
        }
    }

    /// Inserts or overwrites the value for `det`, returning the old one.
    pub fn put(&mut self, det: Determinant, value: usize) -> Option<usize> {
        self.table.insert(det, value)
    }

    pub fn get(&self, det: &Determinant) -> Option<usize> {
        self.table.get(det).copied()
    }

    pub fn remove(&mut self, det: &Determinant) -> Option<usize> {
        self.table.remove(det)
    }

    /// Moves every entry of `other` into `self`. Keys already present in
    /// `self` keep their current value.
    pub fn merge(&mut self, other: Self) {
        self.table.reserve(other.len());
        for (det, value) in other.table {
            self.table.entry(det).or_insert(value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Determinant, usize)> + '_ {
        self.table.iter().map(|(det, value)| (det, *value))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
