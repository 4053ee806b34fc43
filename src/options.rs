use structopt::StructOpt;

use crate::table::HasherKind;

#[derive(Debug, StructOpt)]
#[structopt(name = "detbench", about = "Determinant hash table benchmark")]
pub struct Options {
    #[structopt(
        long = "num-orbitals",
        default_value = "20",
        help = "number of orbitals per spin channel (at most 128)"
    )]
    pub num_orbitals: usize,
    #[structopt(
        long = "num-occupied",
        help = "electrons per spin channel. defaults to half of --num-orbitals"
    )]
    pub num_occupied: Option<usize>,
    #[structopt(
        long = "hash-dim",
        default_value = "5000000",
        help = "number of determinants inserted into the table"
    )]
    pub hash_dim: usize,
    #[structopt(
        long = "stride",
        default_value = "10",
        help = "every stride-th determinant is looked up, erased and reinserted"
    )]
    pub stride: usize,
    #[structopt(
        long = "hasher",
        default_value = "std",
        help = "hash function used by the table: std or fx"
    )]
    pub hasher: HasherKind,
    #[structopt(
        long = "show",
        default_value = "0",
        help = "print the first n generated determinants"
    )]
    pub show: usize,
}
