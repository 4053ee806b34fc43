use env_logger;
use log::info;
use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;
use std::io::{self, Write};
use structopt::StructOpt;

use detbench::benchmark::{self, PhaseTimings};
use detbench::config::Config;
use detbench::options::Options;
use detbench::profile;
use detbench::space_generator;
use detbench::table::HasherKind;
use detbench::types::Determinant;
use rustc_hash::FxBuildHasher;

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> io::Result<()> {
    env_logger::init();

    let options = Options::from_args();
    let config = Config::new(&options);

    info!(
        "orbitals: {} occupied: {} hash dim: {} stride: {} hasher: {:?}",
        config.num_orbitals, config.num_occupied, config.hash_dim, config.stride, config.hasher
    );

    let (duration, space) = profile!(space_generator::generate(
        config.num_orbitals,
        config.num_occupied,
        config.hash_dim,
    ));
    let space = match space {
        Ok(space) => space,
        Err(err) => {
            panic!("Failed to generate determinant space: {:?}", err);
        }
    };
    info!(
        "generated {} determinants in {:.4}s",
        space.len(),
        duration.as_secs_f64()
    );

    let mut stdout = io::stdout().lock();
    show_determinants(&mut stdout, &space, config.show)?;

    let timings = match config.hasher {
        HasherKind::Std => run_benchmark::<RandomState>(&config, &space),
        HasherKind::Fx => run_benchmark::<FxBuildHasher>(&config, &space),
    };
    writeln!(stdout, "{}", timings)?;

    Ok(())
}

fn run_benchmark<S: BuildHasher + Default>(config: &Config, space: &[Determinant]) -> PhaseTimings {
    let outcome = match benchmark::run::<S>(config, space) {
        Ok(outcome) => outcome,
        Err(err) => {
            panic!("Failed to run benchmark: {:?}", err);
        }
    };
    info!(
        "final table size: {} checksum: {}",
        outcome.table.len(),
        outcome.checksum
    );
    outcome.timings
}

fn show_determinants(out: &mut impl Write, space: &[Determinant], count: usize) -> io::Result<()> {
    let Some(reference) = space.first() else {
        return Ok(());
    };
    for (i, det) in space.iter().take(count).enumerate() {
        writeln!(
            out,
            "{:>8} {} excitation: {}",
            i,
            det,
            reference.excitation_level(det)
        )?;
    }
    Ok(())
}
