//! stc CLI
//!
//! Drive the currency formatter, pagination and select controllers from the
//! command line and print their results as JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod settings;

use settings::CurrencyArgs;
use stc_cn::prelude::*;
use stc_cn::ComponentsConfig;

#[derive(Parser)]
#[command(name = "stc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "stc component library CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Component configuration file (defaults to ./stc.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format raw input the way a currency field displays it
    Format {
        /// Raw text as typed
        raw: String,

        #[command(flatten)]
        currency: CurrencyArgs,
    },

    /// Parse a formatted currency string back to a number
    Parse {
        /// Formatted text
        formatted: String,

        #[command(flatten)]
        currency: CurrencyArgs,
    },

    /// List the page buttons of a pagination
    Pages {
        /// Total number of items
        #[arg(long)]
        total_items: usize,

        /// Items shown per page
        #[arg(long, default_value = "10")]
        per_page: usize,

        /// Current page (1-based)
        #[arg(long, default_value = "1")]
        current: usize,
    },

    /// Run a select through searches and picks and print its view
    Select {
        /// Option as value=label (repeatable)
        #[arg(short, long = "option", value_parser = parse_option, required = true)]
        options: Vec<SelectOption>,

        /// Allow several values
        #[arg(long)]
        multi: bool,

        /// Show a search field
        #[arg(long)]
        searchable: bool,

        /// Text typed into the search field (closing resyncs it, so pair with --open)
        #[arg(long)]
        search: Option<String>,

        /// Option value to pick (repeatable, applied in order)
        #[arg(long)]
        pick: Vec<String>,

        /// Leave the dropdown open when printing
        #[arg(long)]
        open: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Format { raw, currency } => cmd_format(&config, &raw, &currency),
        Commands::Parse {
            formatted,
            currency,
        } => cmd_parse(&config, &formatted, &currency),
        Commands::Pages {
            total_items,
            per_page,
            current,
        } => cmd_pages(&config, total_items, per_page, current),
        Commands::Select {
            options,
            multi,
            searchable,
            search,
            pick,
            open,
        } => cmd_select(
            &config,
            options,
            SelectFlags {
                multi,
                searchable,
                search,
                pick,
                open,
            },
        ),
        Commands::Config => cmd_config(&config),
    }
}

/// Parse `value=label`; a bare `value` is its own label
fn parse_option(s: &str) -> std::result::Result<SelectOption, String> {
    let (value, label) = s.split_once('=').unwrap_or((s, s));
    if value.is_empty() {
        return Err(format!("option '{}' has an empty value", s));
    }
    Ok(SelectOption::new(value, label))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn cmd_format(config: &ComponentsConfig, raw: &str, args: &CurrencyArgs) -> Result<()> {
    let format = args.resolve(&config.currency)?;
    let mut formatter = CurrencyFormatter::new(format);
    let edit = formatter.handle_edit(raw, CursorWindow::caret(raw.chars().count()));
    debug!(raw, display = %edit.display, "formatted");
    print_json(&edit)
}

fn cmd_parse(config: &ComponentsConfig, formatted: &str, args: &CurrencyArgs) -> Result<()> {
    let format = args.resolve(&config.currency)?;
    let value = format.parse(formatted);
    if value.is_none() {
        info!("'{}' holds no number", formatted);
    }
    print_json(&serde_json::json!({ "value": value }))
}

fn cmd_pages(
    config: &ComponentsConfig,
    total_items: usize,
    per_page: usize,
    current: usize,
) -> Result<()> {
    let scope = StateScope::new();
    let current = scope.use_state(current);
    let pagination = Pagination::new(total_items, per_page, &current)
        .context("Invalid pagination")?
        .texts(config.pagination.clone());

    info!(
        "{} items, {} per page: page {} of {}",
        total_items,
        per_page,
        pagination.current_page(),
        pagination.total_pages()
    );
    print_json(&pagination.view())
}

struct SelectFlags {
    multi: bool,
    searchable: bool,
    search: Option<String>,
    pick: Vec<String>,
    open: bool,
}

fn cmd_select(
    config: &ComponentsConfig,
    options: Vec<SelectOption>,
    flags: SelectFlags,
) -> Result<()> {
    let select = cn::select(options)
        .id("stc-select")
        .multi(flags.multi)
        .searchable(flags.searchable)
        .texts(config.select.clone())
        .build()
        .context("Failed to build select")?;

    select.click_trigger();
    for value in &flags.pick {
        if !select.is_open() {
            select.open();
        }
        if !select.select(value) {
            anyhow::bail!("No option with value '{}'", value);
        }
    }
    if let Some(ref text) = flags.search {
        select.open();
        select.search(text);
    }
    if flags.open {
        select.open();
    } else if select.is_open() {
        select.toggle();
    }

    debug!(selection = ?select.selection(), "select finished");
    print_json(&select.view())
}

fn cmd_config(config: &ComponentsConfig) -> Result<()> {
    let toml = config
        .to_toml_string()
        .context("Failed to serialize configuration")?;
    print!("{}", toml);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_option() {
        assert_eq!(parse_option("1=A").unwrap(), SelectOption::new("1", "A"));
        assert_eq!(parse_option("x").unwrap(), SelectOption::new("x", "x"));
        assert_eq!(
            parse_option("k=a=b").unwrap(),
            SelectOption::new("k", "a=b")
        );
        assert!(parse_option("=A").is_err());
    }

    #[test]
    fn test_cli_parses_select_flags() {
        let cli = Cli::try_parse_from([
            "stc", "select", "-o", "1=A", "-o", "2=B", "--multi", "--pick", "1", "--pick", "2",
        ])
        .unwrap();
        match cli.command {
            Commands::Select {
                options,
                multi,
                pick,
                ..
            } => {
                assert_eq!(options.len(), 2);
                assert!(multi);
                assert_eq!(pick, vec!["1", "2"]);
            }
            _ => panic!("expected select"),
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["stc", "format", "1000", "--verbose", "--decimal-places", "0"])
            .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Format { raw, currency } => {
                assert_eq!(raw, "1000");
                assert_eq!(currency.decimal_places, Some(0));
            }
            _ => panic!("expected format"),
        }
    }

    #[test]
    fn test_clap_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
