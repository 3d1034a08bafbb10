use anyhow::bail;
use clap::{Parser, ValueEnum};

/// Upper bound on identifiers printed by a single invocation.
pub const MAX_COUNT: usize = 1_000_000;

/// Command-line configuration for the `siteid` binary.
///
/// Every value can come from a flag, an environment variable, or a `.env`
/// file loaded before parsing.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "siteid",
    version,
    about = "Print unique identifiers for newly created sites"
)]
pub struct CliArgs {
    /// Number of identifiers to print.
    ///
    /// Environment variable: `SITEID_COUNT`
    #[arg(short = 'n', long, env = "SITEID_COUNT", default_value_t = 1)]
    pub count: usize,

    /// Whether to try the OS-backed UUID source first.
    ///
    /// `auto` uses the strong source and falls back on failure; `fallback`
    /// skips it and always prints `site-<fragment>-<timestamp>`.
    ///
    /// Environment variable: `SITEID_STRATEGY`
    #[arg(long, env = "SITEID_STRATEGY", value_enum, default_value_t = Strategy::Auto)]
    pub strategy: Strategy,

    /// Output format, one identifier per line.
    ///
    /// Environment variable: `SITEID_FORMAT`
    #[arg(long, env = "SITEID_FORMAT", value_enum, default_value_t = Format::Plain)]
    pub format: Format,
}

/// Which sources the generator is built with.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Strong source first, fallback on failure.
    Auto,
    /// No strong source.
    Fallback,
}

/// How each identifier is written.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// The bare identifier.
    Plain,
    /// A JSON object with `id` and `kind`.
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub count: usize,
    pub strategy: Strategy,
    pub format: Format,
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.count == 0 {
            bail!("SITEID_COUNT must be greater than 0");
        }

        if args.count > MAX_COUNT {
            bail!(
                "SITEID_COUNT ({}) exceeds the per-invocation limit (max = {})",
                args.count,
                MAX_COUNT
            );
        }

        Ok(Self {
            count: args.count,
            strategy: args.strategy,
            format: args.format,
        })
    }
}
