use std::ffi::OsString;
use std::path::PathBuf;

use clap::{App, AppSettings, Arg, ArgMatches, Result as ClapResult};

/// Options given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog to load before the first menu prompt
    pub catalog: Option<PathBuf>,
    /// Whether warnings and errors are colored
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            color: true,
        }
    }
}

impl Config {
    /// Parses the process arguments, exiting with a usage message if they are invalid
    pub fn from_args() -> Self {
        Self::from_matches(&build_cli_parser().get_matches())
    }

    /// Parses the given arguments, the first of which is the program name
    pub fn try_from_args<I, T>(args: I) -> ClapResult<Self>
        where I: IntoIterator<Item = T>,
              T: Into<OsString> + Clone,
    {
        let matches = build_cli_parser().get_matches_from_safe(args)?;
        Ok(Self::from_matches(&matches))
    }

    fn from_matches(matches: &ArgMatches<'_>) -> Self {
        Self {
            catalog: matches.value_of_os("FILE").map(PathBuf::from),
            color: !matches.is_present("NO_COLOR"),
        }
    }
}

fn build_cli_parser<'a, 'b>() -> App<'a, 'b> {
    App::new(env!("CARGO_PKG_NAME"))
        .setting(AppSettings::ColoredHelp)
        .set_term_width(80usize)
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(Arg::with_name("FILE")
            .short("f")
            .long("file")
            .takes_value(true)
            .value_name("FILE")
            .number_of_values(1u64)
            .help("course catalog to load before showing the menu"))
        .arg(Arg::with_name("NO_COLOR")
            .long("no-color")
            .help("disables colored warnings and errors"))
}
