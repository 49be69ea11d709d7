use clap::Parser;
use fntag::application::{init::init, ConfigService, ResourceCatalog, TagAggregator, TagMutator};
use fntag::cli::{
    format_apply_report, format_distinct, format_flat_tags, format_inventory, format_matches, Cli,
    Commands, TagField, NO_RESOURCE_FOUND,
};
use fntag::domain::tags::parse_tag_assignment;
use fntag::domain::{FilterOutcome, FilterSpec};
use fntag::error::{FntagError, Result};
use fntag::infrastructure::config::{DEFAULT_REGION, DEFAULT_RESOURCE_TYPE};
use fntag::infrastructure::{FileSystemWorkspace, LocalProvider, WorkspaceRepository};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Logs go to stderr; FNTAG_LOG takes an EnvFilter directive.
fn init_logging(verbose: bool) {
    let default_directive = if verbose { "fntag=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("FNTAG_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_provider(resource_type: Option<&str>, region: Option<&str>) -> Result<LocalProvider> {
    let workspace = FileSystemWorkspace::discover()?;
    let config = workspace.load_config()?;
    let scope = config.provider_config(resource_type, region);
    debug!(root = %workspace.root().display(), %scope, "opened workspace");
    Ok(workspace.provider(scope))
}

fn run(cli: Cli) -> Result<()> {
    let resource_type = cli.resource_type.as_deref();
    let region = cli.region.as_deref();

    match cli.command {
        Commands::Init { path } => {
            let config = init(
                &path,
                resource_type.unwrap_or(DEFAULT_RESOURCE_TYPE),
                region.unwrap_or(DEFAULT_REGION),
            )?;
            println!("Initialized fntag workspace at {}", path.display());
            println!("Scope: {}/{}", config.resource_type, config.region);
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let workspace = FileSystemWorkspace::discover()?;
            let service = ConfigService::new(workspace);

            if list {
                let config = service.list()?;
                println!("resource_type = {}", config.resource_type);
                println!("region = {}", config.region);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: fntag config [--list | <key> [<value>]]");
                println!("Valid keys: resource_type, region, created");
            }
            Ok(())
        }
        Commands::Inventory => {
            let provider = open_provider(resource_type, region)?;
            let aggregator = TagAggregator::new(ResourceCatalog::new(&provider));
            println!("{}", format_inventory(&aggregator.inventory()));
            Ok(())
        }
        Commands::Keys { unique } => {
            let provider = open_provider(resource_type, region)?;
            let aggregator = TagAggregator::new(ResourceCatalog::new(&provider));
            if unique {
                println!("{}", format_distinct(&aggregator.distinct_tag_keys(), TagField::Key));
            } else {
                println!("{}", format_flat_tags(&aggregator.all_tag_keys(), TagField::Key));
            }
            Ok(())
        }
        Commands::Values { unique } => {
            let provider = open_provider(resource_type, region)?;
            let aggregator = TagAggregator::new(ResourceCatalog::new(&provider));
            if unique {
                println!("{}", format_distinct(&aggregator.distinct_tag_values(), TagField::Value));
            } else {
                println!("{}", format_flat_tags(&aggregator.all_tag_values(), TagField::Value));
            }
            Ok(())
        }
        Commands::Filter {
            key1,
            value1,
            key2,
            value2,
            conjunction,
        } => {
            let filter = FilterSpec::new(
                key1.as_deref(),
                value1.as_deref(),
                key2.as_deref(),
                value2.as_deref(),
                conjunction,
            );

            let provider = open_provider(resource_type, region)?;
            let catalog = ResourceCatalog::new(&provider);
            match catalog.filtered_resources(&filter) {
                FilterOutcome::Matches(matches) => println!("{}", format_matches(&matches)),
                FilterOutcome::NoResourceFound => println!("{}", NO_RESOURCE_FOUND),
                FilterOutcome::InvalidSpec(reason) => return Err(FntagError::InvalidFilter(reason)),
            }
            Ok(())
        }
        Commands::Apply { arns, tags } => {
            let tags = tags
                .iter()
                .map(|t| parse_tag_assignment(t))
                .collect::<Result<Vec<(String, String)>>>()?;

            let provider = open_provider(resource_type, region)?;
            let mutator = TagMutator::new(&provider);
            let outcomes = mutator.apply_tags(&arns, &tags);
            println!("{}", format_apply_report(&outcomes));
            Ok(())
        }
    }
}
