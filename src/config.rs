use crate::options::Options;
use crate::table::HasherKind;

pub struct Config {
    pub num_orbitals: usize,
    pub num_occupied: usize,
    pub hash_dim: usize,
    pub stride: usize,
    pub hasher: HasherKind,
    pub show: usize,
}

impl Config {
    pub fn new(options: &Options) -> Self {
        Self {
            num_orbitals: options.num_orbitals,
            num_occupied: options
                .num_occupied
                .unwrap_or(options.num_orbitals / 2),
            hash_dim: options.hash_dim,
            stride: options.stride,
            hasher: options.hasher,
            show: options.show,
        }
    }
}

// used for testing
impl Default for Config {
    fn default() -> Self {
        Self {
            num_orbitals: 20,
            num_occupied: 10,
            hash_dim: 5_000_000,
            stride: 10,
            hasher: HasherKind::Std,
            show: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use structopt::StructOpt;

    #[test]
    fn test_defaults_match_options() {
        let options = Options::from_iter(["detbench"]);
        let config = Config::new(&options);
        let default = Config::default();
        assert_eq!(config.num_orbitals, default.num_orbitals);
        assert_eq!(config.num_occupied, default.num_occupied);
        assert_eq!(config.hash_dim, default.hash_dim);
        assert_eq!(config.stride, default.stride);
        assert_eq!(config.hasher, default.hasher);
    }

    #[test]
    fn test_num_occupied_follows_orbitals() {
        let options = Options::from_iter(["detbench", "--num-orbitals", "7", "--hasher", "fx"]);
        let config = Config::new(&options);
        assert_eq!(config.num_occupied, 3);
        assert_eq!(config.hasher, HasherKind::Fx);

        let options = Options::from_iter(["detbench", "--num-orbitals", "7", "--num-occupied", "5"]);
        assert_eq!(Config::new(&options).num_occupied, 5);
    }
}
