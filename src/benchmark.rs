use std::fmt::{self, Display, Formatter};
use std::hash::BuildHasher;
use std::hint::black_box;
use std::time::Duration;

use log::{error, info};

use crate::config::Config;
use crate::profile;
use crate::table::DeterminantTable;
use crate::types::Determinant;

#[derive(Debug, PartialEq, Eq)]
pub enum BenchmarkErr {
    ZeroStride,
    SpaceTooSmall { required: usize, available: usize },
    MissingKey(usize),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PhaseTimings {
    pub build: Duration,
    pub lookup: Duration,
    pub iterate: Duration,
    pub erase: Duration,
    pub reinsert: Duration,
    pub total: Duration,
}

impl PhaseTimings {
    pub fn phases(&self) -> [(&'static str, Duration); 5] {
        [
            ("Building", self.build),
            ("Finding", self.lookup),
            ("Iterating", self.iterate),
            ("Erase", self.erase),
            ("Insert", self.reinsert),
        ]
    }
}

impl Display for PhaseTimings {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Timings for Unordered map")?;
        for (name, duration) in self.phases() {
            writeln!(f, "  {} took: {:.6} s", name, duration.as_secs_f64())?;
        }
        write!(f, "Unordered map took: {:.6} s", self.total.as_secs_f64())
    }
}

pub struct BenchmarkOutcome<S> {
    pub timings: PhaseTimings,
    /// XOR of every value seen while iterating the full table.
    pub checksum: usize,
    pub table: DeterminantTable<S>,
}

fn build<S: BuildHasher + Default>(table: &mut DeterminantTable<S>, dets: &[Determinant]) {
    for (i, det) in dets.iter().enumerate() {
        table.put(*det, i);
    }
}

fn lookup<S: BuildHasher + Default>(
    table: &DeterminantTable<S>,
    dets: &[Determinant],
    stride: usize,
) -> Result<usize, BenchmarkErr> {
    let mut acc = 0;
    for i in (0..dets.len()).step_by(stride) {
        acc ^= table.get(&dets[i]).ok_or(BenchmarkErr::MissingKey(i))?;
    }
    Ok(black_box(acc))
}

fn iterate<S: BuildHasher + Default>(table: &DeterminantTable<S>) -> usize {
    black_box(table.iter().fold(0, |acc, (_, value)| acc ^ value))
}

fn erase<S: BuildHasher + Default>(
    table: &mut DeterminantTable<S>,
    dets: &[Determinant],
    stride: usize,
) {
    for i in (0..dets.len()).step_by(stride) {
        table.remove(&dets[i]);
    }
}

fn strided_table<S: BuildHasher + Default>(dets: &[Determinant], stride: usize) -> DeterminantTable<S> {
    let mut table = DeterminantTable::new();
    for i in (0..dets.len()).step_by(stride) {
        table.put(dets[i], i);
    }
    table
}

fn run_phases<S: BuildHasher + Default>(
    table: &mut DeterminantTable<S>,
    dets: &[Determinant],
    stride: usize,
) -> Result<(PhaseTimings, usize), BenchmarkErr> {
    let mut timings = PhaseTimings::default();

    let (duration, _) = profile!(build(table, dets));
    info!("building took: {:.4}s ({} entries)", duration.as_secs_f64(), table.len());
    timings.build = duration;

    let (duration, found) = profile!(lookup(table, dets, stride));
    found?;
    info!("finding took: {:.4}s", duration.as_secs_f64());
    timings.lookup = duration;

    let (duration, checksum) = profile!(iterate(table));
    info!("iterating took: {:.4}s", duration.as_secs_f64());
    timings.iterate = duration;

    let (duration, _) = profile!(erase(table, dets, stride));
    info!("erase took: {:.4}s ({} entries left)", duration.as_secs_f64(), table.len());
    timings.erase = duration;

    let remainder = strided_table(dets, stride);
    let (duration, _) = profile!(table.merge(remainder));
    info!("insert took: {:.4}s ({} entries)", duration.as_secs_f64(), table.len());
    timings.reinsert = duration;

    Ok((timings, checksum))
}

/// Times build, lookup, iteration, erase and reinsert on a fresh table keyed
/// by the first `config.hash_dim` determinants of `space`.
pub fn run<S: BuildHasher + Default>(
    config: &Config,
    space: &[Determinant],
) -> Result<BenchmarkOutcome<S>, BenchmarkErr> {
    if config.stride == 0 {
        error!("Stride must be positive");
        return Err(BenchmarkErr::ZeroStride);
    }
    if space.len() < config.hash_dim {
        error!(
            "Determinant space too small: {} < {}",
            space.len(),
            config.hash_dim
        );
        return Err(BenchmarkErr::SpaceTooSmall {
            required: config.hash_dim,
            available: space.len(),
        });
    }

    let dets = &space[..config.hash_dim];
    let mut table = DeterminantTable::new();

    info!(
        "starting benchmark over {} determinants with stride {}",
        dets.len(),
        config.stride
    );
    let (total, result) = profile!(run_phases(&mut table, dets, config.stride));
    let (mut timings, checksum) = result?;
    timings.total = total;

    Ok(BenchmarkOutcome {
        timings,
        checksum,
        table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space_generator;
    use crate::table::{FxDeterminantTable, StdDeterminantTable};
    use rustc_hash::FxBuildHasher;
    use std::collections::hash_map::RandomState;

    fn small_config(hash_dim: usize) -> Config {
        Config {
            num_orbitals: 8,
            num_occupied: 4,
            hash_dim,
            ..Config::default()
        }
    }

    fn space(config: &Config) -> Vec<Determinant> {
        space_generator::generate(config.num_orbitals, config.num_occupied, config.hash_dim)
            .unwrap()
    }

    fn assert_round_trip<S: BuildHasher + Default>(
        table: &DeterminantTable<S>,
        dets: &[Determinant],
    ) {
        assert_eq!(table.len(), dets.len());
        for (i, det) in dets.iter().enumerate() {
            assert_eq!(table.get(det), Some(i));
        }
    }

    #[test]
    fn test_run() {
        let config = small_config(1000);
        let dets = space(&config);
        assert_eq!(dets.len(), 1001);

        let outcome = run::<RandomState>(&config, &dets).unwrap();
        assert_round_trip(&outcome.table, &dets[..1000]);
        assert_eq!(outcome.checksum, (0..1000).fold(0, |acc, i| acc ^ i));
        assert!(outcome.timings.total >= outcome.timings.build);
    }

    #[test]
    fn test_run_fx() {
        let config = small_config(4321);
        let dets = space(&config);

        let outcome = run::<FxBuildHasher>(&config, &dets).unwrap();
        assert_round_trip(&outcome.table, &dets[..4321]);
    }

    #[test]
    fn test_run_stride() {
        let config = Config {
            stride: 3,
            ..small_config(500)
        };
        let dets = space(&config);
        let outcome = run::<RandomState>(&config, &dets).unwrap();
        assert_round_trip(&outcome.table, &dets[..500]);
    }

    #[test]
    fn test_erase_then_merge() {
        let dets = space(&small_config(100));
        let dets = &dets[..100];
        let mut table = StdDeterminantTable::new();
        build(&mut table, dets);
        erase(&mut table, dets, 10);
        assert_eq!(table.len(), 90);
        assert_eq!(table.get(&dets[20]), None);
        assert_eq!(table.get(&dets[21]), Some(21));

        table.merge(strided_table(dets, 10));
        assert_round_trip(&table, dets);
    }

    #[test]
    fn test_lookup_missing() {
        let dets = space(&small_config(20));
        let mut table = FxDeterminantTable::new();
        build(&mut table, &dets[..10]);
        assert_eq!(lookup(&table, &dets[..10], 10), Ok(0));
        assert_eq!(
            lookup(&table, &dets[..20], 5),
            Err(BenchmarkErr::MissingKey(10))
        );
    }

    #[test]
    fn test_run_errors() {
        let config = small_config(100);
        let dets = space(&config);

        assert!(matches!(
            run::<RandomState>(&config, &dets[..50]),
            Err(BenchmarkErr::SpaceTooSmall {
                required: 100,
                available: 50
            })
        ));

        let config = Config {
            stride: 0,
            ..config
        };
        assert!(matches!(
            run::<RandomState>(&config, &dets),
            Err(BenchmarkErr::ZeroStride)
        ));
    }

    #[test]
    fn test_timings_display() {
        let timings = PhaseTimings {
            build: Duration::from_millis(1500),
            ..PhaseTimings::default()
        };
        let text = timings.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "  Building took: 1.500000 s");
        assert!(lines[2].starts_with("  Finding took:"));
        assert!(lines[5].starts_with("  Insert took:"));
        assert_eq!(lines[6], "Unordered map took: 0.000000 s");
    }
}
