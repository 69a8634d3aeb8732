use std::{
    env,
    path::{Path, PathBuf},
};

use log::LevelFilter;
use petal_derive::{CliOptions, CliValue, KvDisplay};

use crate::{
    Error, Result,
    petal::{PetalConfig, Reference, SortDirection},
};

pub const DEFAULT_MAX_NODES: usize = 200;
const DEFAULT_INPUT: &str = "bayg29.tsp";

/// Runtime options for one petal run.
#[derive(Clone, Debug, CliOptions, KvDisplay)]
pub struct RunOptions {
    /// City coordinate file.
    #[cli(long = "input")]
    #[kv(fmt = "path")]
    pub input: PathBuf,
    /// Directory receiving `clients.txt`, `matrix.txt` and `route_and_cost.txt`.
    #[cli(long = "output-dir")]
    #[kv(fmt = "path")]
    pub output_dir: PathBuf,
    /// Write the result files at all.
    #[cli(long = "files", flag, negate = "no-files")]
    pub write_files: bool,
    /// 1-based id of the city to swap into the first slot.
    #[cli(long = "start-city")]
    pub start_city: usize,
    /// Upper bound on the number of cities accepted from the input file.
    #[cli(long = "max-nodes")]
    pub max_nodes: usize,
    /// Reference point of the angular sort.
    #[cli(long = "reference", parse_with = "Reference::parse")]
    pub reference: Reference,
    /// Direction of the angular sort.
    #[cli(long = "direction", parse_with = "SortDirection::parse")]
    pub direction: SortDirection,
    /// Optional SVG plot of the petal tour. Empty means no plot.
    #[cli(long = "plot")]
    pub plot: String,
    /// Structured logging level.
    #[cli(long = "log-level", parse_with = "LogLevel::parse")]
    pub log_level: LogLevel,
    /// Logging output format.
    #[cli(long = "log-format", parse_with = "LogFormat::parse")]
    pub log_format: LogFormat,
    /// Include timestamps in log lines.
    #[cli(long = "log-timestamp", flag, negate = "no-log-timestamp")]
    pub log_timestamp: bool,
    /// Optional output file path for logs. Empty means stderr.
    #[cli(long = "log-output")]
    pub log_output: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "log-level")]
pub enum LogLevel {
    Error,
    #[cli(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "log-format")]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            write_files: true,
            start_city: 1,
            max_nodes: DEFAULT_MAX_NODES,
            reference: Reference::FirstCity,
            direction: SortDirection::Ascending,
            plot: String::new(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Compact,
            log_timestamp: false,
            log_output: String::new(),
        }
    }
}

impl RunOptions {
    pub fn from_args() -> Result<Self> {
        let options = Self::parse_from_iter(env::args().skip(1))?;
        options.validate()?;
        Ok(options)
    }

    fn parse_from_iter<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_owned())
            .peekable();

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(Error::invalid_input(Self::usage()));
            }

            let Some(raw_name) = arg.strip_prefix("--") else {
                return Err(Error::invalid_input(format!(
                    "Unexpected argument: {arg}\n\n{}",
                    Self::usage()
                )));
            };

            if raw_name.is_empty() {
                return Err(Error::invalid_input(format!(
                    "Invalid option name: {arg}\n\n{}",
                    Self::usage()
                )));
            }

            let (name, value) = Self::split_arg(raw_name, &mut args);
            if !options.apply_cli_option(&name, value)? {
                return Err(Error::invalid_input(format!(
                    "Unknown option: --{name}\n\n{}",
                    Self::usage()
                )));
            }
        }

        Ok(options)
    }

    /// Checks cross-field constraints the per-option parsers cannot see.
    pub fn validate(&self) -> Result<()> {
        if self.max_nodes == 0 {
            return Err(Error::invalid_input("max_nodes must be > 0"));
        }
        if self.start_city == 0 {
            return Err(Error::invalid_input("start_city is 1-based and must be > 0"));
        }
        if self.start_city > self.max_nodes {
            return Err(Error::invalid_input(format!(
                "start_city={} exceeds max_nodes={}",
                self.start_city, self.max_nodes
            )));
        }
        Ok(())
    }

    pub fn usage() -> &'static str {
        concat!(
            "Usage:\n",
            "  petal-tsp [options] --input <cities.tsp>\n\n",
            "Options:\n",
            "  --input <path>                  (default bayg29.tsp)\n",
            "  --output-dir <path>             (default .)\n",
            "  --files[=<bool>]\n",
            "  --no-files\n",
            "  --start-city <id>               1-based, swapped into the first slot\n",
            "  --max-nodes <usize>             (default 200)\n",
            "  --reference <first-city|centroid>\n",
            "  --direction <ascending|descending>\n",
            "  --plot <path.svg>\n",
            "  --log-level <error|warn|info|debug|trace|off>\n",
            "  --log-format <compact|pretty>\n",
            "  --log-timestamp[=<bool>]\n",
            "  --no-log-timestamp\n",
            "  --log-output <path>\n",
            "  --help\n",
            "\n",
            "Examples:\n",
            "  petal-tsp --input bayg29.tsp\n",
            "  petal-tsp --input bayg29.tsp --start-city 13 --reference centroid\n",
            "  petal-tsp --input bayg29.tsp --direction=descending --plot petal.svg\n",
            "  petal-tsp --input bayg29.tsp --no-files --log-level=info\n",
        )
    }

    pub fn petal_config(&self) -> PetalConfig {
        PetalConfig::new(self.reference, self.direction)
    }

    pub fn plot_path(&self) -> Option<&Path> {
        non_empty_path(&self.plot)
    }

    pub fn log_output_path(&self) -> Option<&Path> {
        non_empty_path(&self.log_output)
    }
}

fn non_empty_path(raw: &str) -> Option<&Path> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "-" {
        None
    } else {
        Some(Path::new(raw))
    }
}
