//! Launch arguments: seed selection and settings file location.

use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Settings(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Settings(seed) | Self::Generated(seed) => seed,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaunchArgs {
    pub seed: Option<u64>,
    pub config_path: Option<PathBuf>,
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

/// Launch flag names.
const SEED_FLAG: &str = "--seed";
const CONFIG_FLAG: &str = "--config";

/// Reads `--seed` and `--config`, each given as `--flag value` or `--flag=value`.
/// Other arguments are skipped. `args[0]` is the program name.
pub fn parse_launch_args(args: &[String]) -> Result<LaunchArgs, String> {
    let mut launch = LaunchArgs::default();
    let mut rest = args.iter().skip(1).map(String::as_str);

    while let Some(argument) = rest.next() {
        let (flag, inline) = match argument.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (argument, None),
        };
        if flag != SEED_FLAG && flag != CONFIG_FLAG {
            continue;
        }
        let value = inline
            .or_else(|| rest.next())
            .ok_or_else(|| format!("missing value for {flag}"))?;

        match flag {
            SEED_FLAG if launch.seed.is_some() => {
                return Err("seed provided more than once".to_string());
            }
            SEED_FLAG => launch.seed = Some(parse_seed_value(value)?),
            _ if launch.config_path.is_some() => {
                return Err("config provided more than once".to_string());
            }
            _ => launch.config_path = Some(PathBuf::from(value)),
        }
    }

    Ok(launch)
}

/// Command line beats the settings file; otherwise the generated seed is used.
pub fn resolve_seed(cli: Option<u64>, settings: Option<u64>, generated: u64) -> SeedChoice {
    match (cli, settings) {
        (Some(seed), _) => SeedChoice::Cli(seed),
        (None, Some(seed)) => SeedChoice::Settings(seed),
        (None, None) => SeedChoice::Generated(generated),
    }
}

fn parse_seed_value(raw_value: &str) -> Result<u64, String> {
    raw_value.parse::<u64>().map_err(|_| format!("seed value '{raw_value}' must be a number"))
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn no_flags_leave_everything_unset() {
        let launch = parse_launch_args(&as_args(&["maze-runner"])).expect("no flags is valid");
        assert_eq!(launch, LaunchArgs::default());
    }

    #[test]
    fn parses_seed_with_separate_and_inline_values() {
        let separate = parse_launch_args(&as_args(&["maze-runner", "--seed", "4242"]))
            .expect("valid --seed should parse");
        assert_eq!(separate.seed, Some(4_242));

        let inline = parse_launch_args(&as_args(&["maze-runner", "--seed=2026"]))
            .expect("valid --seed should parse");
        assert_eq!(inline.seed, Some(2_026));
    }

    #[test]
    fn parses_config_path() {
        let launch =
            parse_launch_args(&as_args(&["maze-runner", "--config", "maze.toml", "--seed=1"]))
                .expect("valid flags should parse");
        assert_eq!(launch.config_path, Some(PathBuf::from("maze.toml")));
        assert_eq!(launch.seed, Some(1));
    }

    #[test]
    fn errors_when_flag_has_no_value() {
        let err = parse_launch_args(&as_args(&["maze-runner", "--seed"]))
            .expect_err("missing seed value should error");
        assert!(err.contains("missing"), "error should explain missing value: {err}");

        let err = parse_launch_args(&as_args(&["maze-runner", "--config"]))
            .expect_err("missing config value should error");
        assert!(err.contains("--config"), "error should name the flag: {err}");
    }

    #[test]
    fn errors_when_seed_is_not_a_number() {
        let err = parse_launch_args(&as_args(&["maze-runner", "--seed=abc"]))
            .expect_err("non-numeric seed value should error");
        assert!(err.contains("number"), "error should explain numeric requirement: {err}");
    }

    #[test]
    fn errors_when_seed_is_provided_more_than_once() {
        let err = parse_launch_args(&as_args(&["maze-runner", "--seed=1", "--seed", "2"]))
            .expect_err("duplicate seed flags should be rejected");
        assert!(err.contains("more than once"), "error should explain duplicate seed: {err}");
    }

    #[test]
    fn cli_seed_beats_settings_seed() {
        assert_eq!(resolve_seed(Some(1), Some(2), 3), SeedChoice::Cli(1));
        assert_eq!(resolve_seed(None, Some(2), 3), SeedChoice::Settings(2));
        assert_eq!(resolve_seed(None, None, 3), SeedChoice::Generated(3));
        assert_eq!(SeedChoice::Settings(2).value(), 2);
    }

    #[test]
    fn generated_seed_changes_between_calls() {
        let first = generate_runtime_seed();
        let second = generate_runtime_seed();
        assert_ne!(first, second, "runtime seed generation should vary per call");
    }
}
