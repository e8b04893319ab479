use core::fmt::{self, Display, Formatter};
use kernel::kconfig::{FrontEnd, GameConfig};
use kernel::session::AttemptPolicy;
use system::range::RangeError;

pub const USAGE: &str = "\
usage: guess [options]
  --seed N              generator seed (default 42)
  --min N               lowest guessable number (default 1)
  --max N               highest guessable number (default 100)
  --compact             play on 1..10
  --count-every-entry   count non-numeric entries as attempts
  --form                type into a form instead of answering prompts
  --verbose             log diagnostics to stderr
  -h, --help            show this help";

#[derive(Debug, PartialEq)]
pub enum ArgsError {
    UnknownOption(String),
    MissingValue(String),
    InvalidValue { option: String, value: String },
    Range(RangeError),
}

impl Display for ArgsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::UnknownOption(option) => write!(f, "unknown option: {}", option),
            ArgsError::MissingValue(option) => write!(f, "missing value for {}", option),
            ArgsError::InvalidValue { option, value } => {
                write!(f, "invalid value for {}: {}", option, value)
            }
            ArgsError::Range(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<RangeError> for ArgsError {
    fn from(err: RangeError) -> Self {
        ArgsError::Range(err)
    }
}

#[derive(Debug, PartialEq)]
pub struct Options {
    pub config: GameConfig,
    pub verbose: bool,
    pub help: bool,
}

pub fn parse<I, S>(args: I) -> Result<Options, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut config = GameConfig::default();
    let mut min = None;
    let mut max = None;
    let mut verbose = false;
    let mut help = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let arg = arg.as_ref();
        match arg {
            "--seed" => config.seed = value(arg, args.next())?,
            "--min" => min = Some(value(arg, args.next())?),
            "--max" => max = Some(value(arg, args.next())?),
            "--compact" => config.range = GameConfig::compact().range,
            "--count-every-entry" => config.policy = AttemptPolicy::EveryEntry,
            "--form" => config.front_end = FrontEnd::Form,
            "--verbose" => verbose = true,
            "-h" | "--help" => help = true,
            other => return Err(ArgsError::UnknownOption(other.to_string())),
        }
    }

    if min.is_some() || max.is_some() {
        let min = min.unwrap_or(config.range.min());
        let max = max.unwrap_or(config.range.max());
        config = config.with_bounds(min, max)?;
    }

    Ok(Options { config, verbose, help })
}

fn value<T, S>(option: &str, raw: Option<S>) -> Result<T, ArgsError>
where
    T: core::str::FromStr,
    S: AsRef<str>,
{
    let raw = raw.ok_or_else(|| ArgsError::MissingValue(option.to_string()))?;
    raw.as_ref().trim().parse().map_err(|_| ArgsError::InvalidValue {
        option: option.to_string(),
        value: raw.as_ref().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use system::range::GuessRange;

    #[test]
    fn no_args_gives_default_config() {
        let options = parse(Vec::<String>::new()).unwrap();
        assert_eq!(options.config, GameConfig::default());
        assert!(!options.verbose);
        assert!(!options.help);
    }

    #[test]
    fn parses_every_flag() {
        let options = parse([
            "--seed", "7", "--min", "-5", "--max", "5", "--count-every-entry", "--form", "--verbose",
        ])
        .unwrap();
        assert_eq!(options.config.seed, 7);
        assert_eq!(options.config.range, GuessRange::new(-5, 5).unwrap());
        assert_eq!(options.config.policy, AttemptPolicy::EveryEntry);
        assert_eq!(options.config.front_end, FrontEnd::Form);
        assert!(options.verbose);
    }

    #[test]
    fn compact_then_max_overrides_upper_bound() {
        let options = parse(["--compact", "--max", "20"]).unwrap();
        assert_eq!(options.config.range, GuessRange::new(1, 20).unwrap());
    }

    #[test]
    fn help_flag() {
        assert!(parse(["-h"]).unwrap().help);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        assert_eq!(
            parse(["--min", "50", "--max", "10"]),
            Err(ArgsError::Range(RangeError::InvalidRange { min: 50, max: 10 }))
        );
    }

    #[test]
    fn min_above_default_max_is_rejected() {
        assert!(matches!(parse(["--min", "500"]), Err(ArgsError::Range(_))));
    }

    #[test]
    fn missing_value() {
        assert_eq!(
            parse(["--seed"]),
            Err(ArgsError::MissingValue("--seed".to_string()))
        );
    }

    #[test]
    fn invalid_value() {
        assert_eq!(
            parse(["--seed", "-1"]),
            Err(ArgsError::InvalidValue {
                option: "--seed".to_string(),
                value: "-1".to_string(),
            })
        );
    }

    #[test]
    fn unknown_option() {
        assert_eq!(
            parse(["--hard"]),
            Err(ArgsError::UnknownOption("--hard".to_string()))
        );
    }
}
