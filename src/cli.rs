use crate::model::Config;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;

/// Hammer a URL with concurrent HTTP GET requests
///
/// `-h` is the hammer count, so help is only available as `--help`.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    args_override_self = true,
    override_usage = "thor [-h HAMMERS] [-t THROWS] [-v] URL"
)]
pub struct Args {
    /// URL to request
    pub url: String,

    /// Number of hammers to utilize
    #[arg(
        short = 'h',
        value_name = "HAMMERS",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    pub hammers: i64,

    /// Number of throws per hammer
    #[arg(
        short = 't',
        value_name = "THROWS",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    pub throws: i64,

    /// Display the body of every response
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            hammers: args.hammers,
            throws: args.throws,
            verbose: args.verbose,
            url: args.url,
        }
    }
}

/// Parse a full command line, program name first.
pub fn parse_from<I, T>(tokens: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(tokens).map(Config::from)
}

pub fn usage() -> String {
    Args::command().render_help().to_string()
}
