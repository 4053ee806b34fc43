use log::{debug, error, info};

use crate::types::{Determinant, OrbitalSpace};

#[derive(Debug, PartialEq, Eq)]
pub enum GeneratorErr {
    TooManyOrbitals,
    TooManyOccupied,
}

/// Rearranges `seq` into the previous permutation in lexicographic order.
///
/// Returns `false` when `seq` was already the lowest permutation, in which
/// case it is rearranged into the highest one.
pub fn prev_permutation<T: Ord>(seq: &mut [T]) -> bool {
    if seq.len() < 2 {
        return false;
    }

    let mut i = seq.len() - 1;
    while i > 0 && seq[i - 1] <= seq[i] {
        i -= 1;
    }

    if i == 0 {
        seq.reverse();
        return false;
    }

    let mut j = seq.len() - 1;
    while seq[j] >= seq[i - 1] {
        j -= 1;
    }
    seq.swap(i - 1, j);
    seq[i..].reverse();
    true
}

fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    (0..k).try_fold(1usize, |acc, i| Some(acc.checked_mul(n - i)? / (i + 1)))
}

/// Number of determinants [`generate`] produces for the given arguments.
pub fn expected_count(num_orbitals: usize, num_occupied: usize, max_count: usize) -> usize {
    let cap = max_count.saturating_add(1);
    match binomial(num_orbitals, num_occupied).and_then(|n| n.checked_mul(n)) {
        Some(total) => total.min(cap),
        None => cap,
    }
}

/// Enumerates determinants with `num_occupied` electrons in each spin channel.
///
/// Both occupation strings start from the highest arrangement (all electrons
/// in the lowest orbitals) and walk down through their distinct permutations,
/// beta innermost. The count is checked before each determinant is added and
/// enumeration stops once it exceeds `max_count`, so up to `max_count + 1`
/// determinants come out.
pub fn generate(
    num_orbitals: usize,
    num_occupied: usize,
    max_count: usize,
) -> Result<Vec<Determinant>, GeneratorErr> {
    let space = OrbitalSpace::new(num_orbitals).map_err(|_| GeneratorErr::TooManyOrbitals)?;

    if num_occupied > num_orbitals {
        error!(
            "Too many occupied orbitals: {} of {}",
            num_occupied, num_orbitals
        );
        return Err(GeneratorErr::TooManyOccupied);
    }

    let mut alpha: Vec<bool> = (0..num_orbitals).map(|p| p < num_occupied).collect();
    let mut beta = alpha.clone();

    let count = expected_count(num_orbitals, num_occupied, max_count);
    info!(
        "generating {} determinants: {} orbitals, {} electrons per spin",
        count, num_orbitals, num_occupied
    );

    let mut dets = Vec::with_capacity(count);
    'alpha: loop {
        loop {
            if dets.len() > max_count {
                debug!("reached determinant cap of {}", max_count);
                break 'alpha;
            }
            dets.push(space.determinant_from_spins(&alpha, &beta));
            if !prev_permutation(&mut beta) {
                break;
            }
        }
        if !prev_permutation(&mut alpha) {
            break;
        }
    }

    Ok(dets)
}
