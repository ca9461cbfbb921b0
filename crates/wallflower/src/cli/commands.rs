//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a log subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments become typed commands via clap
//! 2. **Context Setup**: resolve directories, load config, open the page
//! 3. **Dispatch**: route each command to one API call
//! 4. **Output Formatting**: templates for text, `serde_json` for `--output json`
//! 5. **Error Handling**: errors bubble up as `anyhow` and `main` exits 1
//!
//! Logs go to stderr. `RUST_LOG` selects what is shown, `--verbose` forces
//! `debug`, and the default is `warn` so a storage failure is still reported.

use super::render::{ConfigData, Renderer};
use super::setup::{
    parse_cli, Cli, Commands, FilterCommands, MiscCommands, OutputMode, SearchCommands,
};
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wallflowerapp::api::{CmdResult, SearchApi};
use wallflowerapp::codec::query::SEARCH_PATH;
use wallflowerapp::config::{WallflowerConfig, CONFIG_FILENAME};
use wallflowerapp::init::{initialize, resolve_paths, WallflowerContext};
use wallflowerapp::model::Amenity;
use wallflowerapp::navigation::Navigator;
use wallflowerapp::store::StorageBackend;

pub fn run() -> Result<()> {
    let cli = parse_cli();
    init_logging(cli.verbose);

    match &cli.command {
        None => handle_search(&cli, cli.location.as_deref()),
        Some(Commands::Search(SearchCommands::Search { location })) => {
            handle_search(&cli, location.as_deref())
        }
        Some(Commands::Search(SearchCommands::Url)) => handle_url(&cli),
        Some(Commands::Filter(edit)) => handle_edit(&cli, edit),
        Some(Commands::Misc(MiscCommands::Amenities)) => handle_amenities(&cli),
        Some(Commands::Misc(MiscCommands::Config { template })) => handle_config(&cli, *template),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// Turns `?starMin=5` or `starMin=5` into `/search?starMin=5`.
fn page_location(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        None | Some("") => SEARCH_PATH.to_string(),
        Some(loc) if loc.starts_with('/') => loc.to_string(),
        Some(loc) => format!("{}?{}", SEARCH_PATH, loc.trim_start_matches('?')),
    }
}

fn open_page(cli: &Cli, location: &str) -> Result<WallflowerContext> {
    let ctx = initialize(location, cli.data.clone()).context("could not open the search page")?;
    debug!(
        location = %location,
        source = ?ctx.api.session().source(),
        storage = %ctx.api.session().store().location(&ctx.config.storage_key).display(),
        "opened search page"
    );
    Ok(ctx)
}

fn handle_search(cli: &Cli, location: Option<&str>) -> Result<()> {
    let ctx = open_page(cli, &page_location(location))?;
    print_result(&ctx.api.results(), cli.output)
}

fn handle_edit(cli: &Cli, edit: &FilterCommands) -> Result<()> {
    let mut ctx = open_page(cli, SEARCH_PATH)?;
    let result = apply_edit(&mut ctx.api, edit);
    print_result(&result, cli.output)
}

fn apply_edit<S: StorageBackend, N: Navigator>(
    api: &mut SearchApi<S, N>,
    edit: &FilterCommands,
) -> CmdResult {
    match edit {
        FilterCommands::Stars { value } => api.set_star_min(value),
        FilterCommands::PriceMin { value } => api.set_price_min(value),
        FilterCommands::PriceMax { value } => api.set_price_max(value),
        FilterCommands::Amenity { name } => api.toggle_amenity(name),
        FilterCommands::Rating { value } => api.set_customer_min(value),
        FilterCommands::Clear => api.clear_all(),
    }
}

#[derive(Serialize)]
struct LocationOutput<'a> {
    location: &'a str,
}

fn handle_url(cli: &Cli) -> Result<()> {
    let ctx = open_page(cli, SEARCH_PATH)?;
    let location = ctx.api.session().location();
    match cli.output {
        OutputMode::Text => println!("{}", location),
        OutputMode::Json => println!(
            "{}",
            serde_json::to_string_pretty(&LocationOutput { location })?
        ),
    }
    Ok(())
}

fn handle_amenities(cli: &Cli) -> Result<()> {
    let names: Vec<&str> = Amenity::ALL.iter().map(|a| a.as_str()).collect();
    match cli.output {
        OutputMode::Text => print!("{}", Renderer::new()?.amenities(&names)?),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&names)?),
    }
    Ok(())
}

fn handle_config(cli: &Cli, template: bool) -> Result<()> {
    if template {
        print!("{}", WallflowerConfig::template());
        return Ok(());
    }

    let paths = resolve_paths(cli.data.clone())?;
    let config = WallflowerConfig::load(&paths.config)?;
    let config_file = paths.config.join(CONFIG_FILENAME);
    let catalogue = match &config.catalogue_path {
        Some(path) => path.display().to_string(),
        None => format!("built-in ({} listings)", config.catalogue()?.len()),
    };
    let data = ConfigData {
        data_dir: paths.data.display().to_string(),
        config_dir: paths.config.display().to_string(),
        config_note: if config_file.exists() {
            String::new()
        } else {
            " (not present, using defaults)".to_string()
        },
        config_file: config_file.display().to_string(),
        storage_key: config.storage_key.clone(),
        catalogue,
    };

    match cli.output {
        OutputMode::Text => print!("{}", Renderer::new()?.config(&data)?),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&data)?),
    }
    Ok(())
}

fn print_result(result: &CmdResult, output: OutputMode) -> Result<()> {
    match output {
        OutputMode::Text => {
            let renderer = Renderer::new()?;
            print!("{}", renderer.messages(&result.messages)?);
            print!("{}", renderer.results(result)?);
        }
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wallflowerapp::catalogue::Catalogue;
    use wallflowerapp::navigation::MemoryHistory;
    use wallflowerapp::session::DEFAULT_STORAGE_KEY;
    use wallflowerapp::store::MemBackend;

    #[test]
    fn test_page_location_accepts_short_forms() {
        assert_eq!(page_location(None), "/search");
        assert_eq!(page_location(Some("  ")), "/search");
        assert_eq!(page_location(Some("/search?starMin=5")), "/search?starMin=5");
        assert_eq!(page_location(Some("?starMin=5")), "/search?starMin=5");
        assert_eq!(page_location(Some("starMin=5")), "/search?starMin=5");
    }

    #[test]
    fn test_apply_edit_dispatch() {
        let mut api = SearchApi::open(
            Catalogue::builtin(),
            MemBackend::new(),
            MemoryHistory::default(),
            DEFAULT_STORAGE_KEY,
        );
        let result = apply_edit(
            &mut api,
            &FilterCommands::Stars {
                value: "4".to_string(),
            },
        );
        assert_eq!(result.filters.star_min, 4);

        let result = apply_edit(
            &mut api,
            &FilterCommands::Amenity {
                name: "wifi".to_string(),
            },
        );
        assert_eq!(result.location, "/search?starMin=4&amenities=WiFi");

        let result = apply_edit(&mut api, &FilterCommands::Clear);
        assert!(result.filters.is_default());
    }
}
