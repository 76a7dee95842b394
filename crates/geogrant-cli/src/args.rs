use clap::{ArgAction, Parser, Subcommand};

/// CLI arguments for geogrant
#[derive(Debug, Parser)]
#[command(
    name = "geogrant",
    version,
    about = "Grant and check geographic distribution rights"
)]
pub struct CliArgs {
    /// Path to the reference dataset CSV (default: the bundled cities.csv)
    #[arg(short = 'd', long = "data", global = true)]
    pub data: Option<String>,

    /// Path to the distributor registry JSON file
    #[arg(short = 'r', long = "registry", global = true, default_value = "registry.json")]
    pub registry: String,

    /// Always parse the dataset instead of using the binary cache
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the reference dataset
    Stats,

    /// Split a location into its parts and show its granularity
    Parse {
        /// e.g. Vyara-Gujarat-India
        location: String,
    },

    /// Print the canonical (uppercase, space-free) form of a string
    Normalize { text: String },

    /// Check whether a distributor includes or excludes a location
    Check {
        distributor: String,
        location: String,
        /// Check the exclude list instead of the include list
        #[arg(long)]
        exclude: bool,
    },

    /// Grant a location to a distributor and save the registry
    Grant {
        distributor: String,
        location: String,
        /// Grant an exclusion instead of an inclusion
        #[arg(long)]
        exclude: bool,
        /// Parent distributor the grant is made from (omit for a root grant)
        #[arg(long = "from")]
        from: Option<String>,
    },

    /// List a distributor's grants
    Show { distributor: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_grant_with_parent() {
        let args = CliArgs::try_parse_from([
            "geogrant",
            "grant",
            "DIST2",
            "Gujarat-India",
            "--exclude",
            "--from",
            "DIST1",
        ])
        .unwrap();
        match args.command {
            Commands::Grant {
                distributor,
                location,
                exclude,
                from,
            } => {
                assert_eq!(distributor, "DIST2");
                assert_eq!(location, "Gujarat-India");
                assert!(exclude);
                assert_eq!(from.as_deref(), Some("DIST1"));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(args.registry, "registry.json");
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args =
            CliArgs::try_parse_from(["geogrant", "stats", "-vv", "--data", "x.csv", "--no-cache"])
                .unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.data.as_deref(), Some("x.csv"));
        assert!(args.no_cache);
    }

    #[test]
    fn check_requires_location() {
        assert!(CliArgs::try_parse_from(["geogrant", "check", "DIST1"]).is_err());
    }
}
