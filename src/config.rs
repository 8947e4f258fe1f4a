use std::path::PathBuf;

use crate::dataset::Dataset;

/// CLI-level generation parameters. Defaults match the benchmark's standard
/// workload: one round of 256-node batches expanded two hops with fan-out 10.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateConfig {
    pub dataset: Dataset,
    pub dataset_dir: PathBuf,
    /// Direct-file mode: use this edge list as-is and skip the download.
    pub edgelist_file: Option<PathBuf>,
    pub rounds: u64,
    pub base_seed: u64,
    pub batch_size: usize,
    pub num_hops: u32,
    pub fan_out: usize,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            dataset: Dataset::OgbnArxiv,
            dataset_dir: PathBuf::from("../data"),
            edgelist_file: None,
            rounds: 1,
            base_seed: 0,
            batch_size: 256,
            num_hops: 2,
            fan_out: 10,
        }
    }
}

impl GenerateConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut config = GenerateConfig::default();
        let mut iter = args.iter().skip(1).copied();
        while let Some(arg) = iter.next() {
            match arg {
                "--dataset-name" => {
                    config.dataset = Dataset::parse(next_value(&mut iter, arg)?)?;
                }
                "--dataset-dir" => {
                    config.dataset_dir = PathBuf::from(next_value(&mut iter, arg)?);
                }
                "--edgelist-file" => {
                    config.edgelist_file = Some(PathBuf::from(next_value(&mut iter, arg)?));
                }
                "--rounds" => {
                    config.rounds = parse_number(next_value(&mut iter, arg)?, arg)?;
                }
                "--base-seed" => {
                    config.base_seed = parse_number(next_value(&mut iter, arg)?, arg)?;
                }
                "--batch-size" => {
                    config.batch_size = parse_number(next_value(&mut iter, arg)?, arg)?;
                }
                "--num-hops" => {
                    config.num_hops = parse_number(next_value(&mut iter, arg)?, arg)?;
                }
                "--fan-out" => {
                    config.fan_out = parse_number(next_value(&mut iter, arg)?, arg)?;
                }
                other => {
                    return Err(format!("unknown flag {other}"));
                }
            }
        }
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.rounds == 0 {
            return Err("--rounds must be at least 1".to_string());
        }
        if self.batch_size == 0 {
            return Err("--batch-size must be positive".to_string());
        }
        if self.num_hops == 0 {
            return Err("--num-hops must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn help() -> &'static str {
        "Usage: querygen [--dataset-name ogbn-arxiv|ogbn-products] [--dataset-dir DIR]\n\
         \x20               [--edgelist-file FILE] [--rounds N] [--base-seed N]\n\
         \x20               [--batch-size N] [--num-hops N] [--fan-out N]\n\
         \n\
         Generates reproducible neighborhood-sampling query workloads. With\n\
         --edgelist-file the given src,dst CSV is used directly; otherwise the\n\
         dataset archive is downloaded into --dataset-dir and extracted first.\n\
         Output lands under <edge list dir>/queries/run-NNNN/.\n"
    }
}

fn next_value<'a>(iter: &mut impl Iterator<Item = &'a str>, flag: &str) -> Result<&'a str, String> {
    iter.next().ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_number<T: std::str::FromStr>(value: &str, flag: &str) -> Result<T, String> {
    value
        .parse::<T>()
        .map_err(|_| format!("{flag}: invalid value '{value}'"))
}
