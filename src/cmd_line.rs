//! Command line options for ranking flare exports.

use std::path::PathBuf;

use clap::{crate_version, App, Arg, ArgMatches};

use crate::{
    errors::FlareRankErr,
    query::{FlareQuery, DEFAULT_OBSERVATORY},
    rank::RankPolicy,
    time::parse_time,
};

/// Struct to package up command line arguments.
#[derive(Clone, Debug)]
pub struct CmdLineArgs {
    // HEK json exports to read, "-" for stdin
    inputs: Vec<PathBuf>,
    // Which events to keep
    query: FlareQuery,
    // What to do with unparsable classes
    policy: RankPolicy,
    // Print a table instead of one line per flare
    table: bool,
    // Only print this many flares
    limit: Option<usize>,
}

impl<'a, 'b> CmdLineArgs {
    /// Create the application with all the options.
    pub fn new_app(app_name: &'static str, about: &'static str) -> App<'a, 'b> {
        App::new(app_name)
            .about(about)
            .version(crate_version!())
            .arg(
                Arg::with_name("inputs")
                    .multiple(true)
                    .index(1)
                    .default_value("-")
                    .help("HEK flare event exports (json). Use '-' for stdin."),
            )
            .arg(
                Arg::with_name("start")
                    .short("s")
                    .long("start")
                    .takes_value(true)
                    .help("Start of the time range, e.g. 2024/05/07.")
                    .long_help(concat!(
                        "Start of the time range. Events that end before this are dropped. ",
                        "Accepts YYYY/MM/DD, YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS."
                    )),
            )
            .arg(
                Arg::with_name("end")
                    .short("e")
                    .long("end")
                    .takes_value(true)
                    .help("End of the time range, e.g. 2024/05/15.")
                    .long_help(concat!(
                        "End of the time range. Events that start after this are dropped. ",
                        "Accepts YYYY/MM/DD, YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS."
                    )),
            )
            .arg(
                Arg::with_name("min-class")
                    .short("c")
                    .long("min-class")
                    .takes_value(true)
                    .help("Only flares stronger than this class, e.g. M3.0 or C3.0."),
            )
            .arg(
                Arg::with_name("observatory")
                    .short("o")
                    .long("observatory")
                    .takes_value(true)
                    .default_value(DEFAULT_OBSERVATORY)
                    .help("Only events reported by this observatory."),
            )
            .arg(
                Arg::with_name("all-observatories")
                    .long("all-observatories")
                    .help("Keep events from every observatory, overrides --observatory."),
            )
            .arg(
                Arg::with_name("lenient")
                    .short("l")
                    .long("lenient")
                    .help("List flares with unreadable classes last instead of failing."),
            )
            .arg(
                Arg::with_name("table")
                    .short("t")
                    .long("table")
                    .help("Print a table of times, class, radius and active region."),
            )
            .arg(
                Arg::with_name("limit")
                    .short("n")
                    .long("limit")
                    .takes_value(true)
                    .help("Only print the N most intense flares."),
            )
            .after_help(concat!(
                "Events are listed most intense first. Flares of equal class keep the order ",
                "they had in the input.\n\n",
                "Set RUST_LOG=debug for details on what was read and filtered."
            ))
    }

    /// Process an `App` to get the parsed values out of it and the matches object so an
    /// application can continue with further argument parsing.
    pub fn matches(app: App<'a, 'b>) -> Result<(Self, ArgMatches<'a>), FlareRankErr> {
        let matches = app.get_matches();
        let args = Self::from_matches(&matches)?;
        Ok((args, matches))
    }

    /// Build the arguments from already parsed matches.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, FlareRankErr> {
        let inputs: Vec<PathBuf> = matches
            .values_of("inputs")
            .into_iter()
            .flat_map(|vals| vals.map(PathBuf::from))
            .collect();

        let mut query = FlareQuery::new();

        if let Some(start) = matches.value_of("start") {
            query = query.with_start(parse_time(start)?);
        }

        if let Some(end) = matches.value_of("end") {
            query = query.with_end(parse_time(end)?);
        }

        if let Some(threshold) = matches.value_of("min-class") {
            query = query.with_min_class(threshold)?;
        }

        query = if matches.is_present("all-observatories") {
            query.with_observatory(None)
        } else {
            query.with_observatory(matches.value_of("observatory"))
        };

        query.validate()?;

        let policy = if matches.is_present("lenient") {
            RankPolicy::Lenient
        } else {
            RankPolicy::Strict
        };

        let limit = matches
            .value_of("limit")
            .map(|val| {
                val.parse::<usize>().map_err(|_| {
                    FlareRankErr::InvalidArgument(format!("limit must be a count, not {}", val))
                })
            })
            .transpose()?;

        Ok(CmdLineArgs {
            inputs,
            query,
            policy,
            table: matches.is_present("table"),
            limit,
        })
    }

    /// Get the input files
    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    /// Get the event query
    pub fn query(&self) -> &FlareQuery {
        &self.query
    }

    /// Get the ranking policy
    pub fn policy(&self) -> RankPolicy {
        self.policy
    }

    /// Print a table?
    pub fn table(&self) -> bool {
        self.table
    }

    /// Maximum number of flares to print.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
