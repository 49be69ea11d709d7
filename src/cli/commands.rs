//! CLI command definitions

use crate::domain::Conjunction;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "fntag")]
#[command(about = "Inventory, filter and bulk-tag cloud function resources", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Region to query (overrides config and FNTAG_REGION)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Resource type to query (overrides config and FNTAG_RESOURCE_TYPE)
    #[arg(long, global = true, value_name = "TYPE")]
    pub resource_type: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Show every resource with its tags
    Inventory,

    /// List tag keys across all resources
    Keys {
        /// Sorted, without duplicates
        #[arg(short, long)]
        unique: bool,
    },

    /// List tag values across all resources
    Values {
        /// Sorted, without duplicates
        #[arg(short, long)]
        unique: bool,
    },

    /// List resources matching a two-slot tag filter
    Filter {
        /// First tag key
        #[arg(long)]
        key1: Option<String>,

        /// Value required for the first key
        #[arg(long)]
        value1: Option<String>,

        /// Second tag key
        #[arg(long)]
        key2: Option<String>,

        /// Value required for the second key
        #[arg(long)]
        value2: Option<String>,

        /// How the two conditions combine (and, or)
        #[arg(short, long, default_value = "and", value_parser = Conjunction::from_str)]
        conjunction: Conjunction,
    },

    /// Set tags on one or more resources
    Apply {
        /// Resource ARN to tag (repeatable)
        #[arg(long = "arn", value_name = "ARN", required = true)]
        arns: Vec<String>,

        /// Tag to set as KEY=VALUE (repeatable)
        #[arg(long = "tag", value_name = "KEY=VALUE", required = true)]
        tags: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_filter_with_global_region() {
        let cli = Cli::parse_from([
            "fntag", "filter", "--key1", "env", "--value1", "prod", "-c", "or", "--region",
            "eu-west-1",
        ]);

        assert_eq!(cli.region.as_deref(), Some("eu-west-1"));
        match cli.command {
            Commands::Filter {
                key1,
                value1,
                key2,
                conjunction,
                ..
            } => {
                assert_eq!(key1.as_deref(), Some("env"));
                assert_eq!(value1.as_deref(), Some("prod"));
                assert!(key2.is_none());
                assert_eq!(conjunction, Conjunction::Or);
            }
            other => panic!("Expected filter command, got {:?}", other),
        }
    }

    #[test]
    fn test_filter_conjunction_defaults_to_and() {
        let cli = Cli::parse_from(["fntag", "filter", "--key1", "env"]);

        match cli.command {
            Commands::Filter { conjunction, .. } => assert_eq!(conjunction, Conjunction::And),
            other => panic!("Expected filter command, got {:?}", other),
        }
    }

    #[test]
    fn test_filter_rejects_unknown_conjunction() {
        let err = Cli::try_parse_from(["fntag", "filter", "--key1", "env", "-c", "xor"])
            .unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("Invalid conjunction"));
    }

    #[test]
    fn test_parse_apply_repeated_flags() {
        let cli = Cli::parse_from([
            "fntag", "apply", "--arn", "a", "--arn", "b", "--tag", "env=prod",
        ]);

        match cli.command {
            Commands::Apply { arns, tags } => {
                assert_eq!(arns, vec!["a", "b"]);
                assert_eq!(tags, vec!["env=prod"]);
            }
            other => panic!("Expected apply command, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_requires_arn() {
        assert!(Cli::try_parse_from(["fntag", "apply", "--tag", "env=prod"]).is_err());
    }
}
