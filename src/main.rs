//! Country Field CLI
//!
//! Entry point for the `fieldkit-countries` command-line tool.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use fieldkit_countries::mock::MockSession;
use fieldkit_countries::{CountriesConfig, CountryDropdownField};
use fieldkit_forms::{OptionField, OptionSet};
use fieldkit_i18n::{system_locale, IsoCountries, Locale};

#[derive(Parser)]
#[command(name = "fieldkit-countries")]
#[command(about = "Country selector field toolkit", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the selectable countries under the active configuration
    List {
        /// Path to countries config file (default: countries.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Resolve a candidate value through the default chain
    Resolve {
        /// Candidate country code (may be omitted to exercise the defaults)
        value: Option<String>,

        /// Path to countries config file (default: countries.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Locale to derive defaults from (e.g. en_NZ; default: system locale)
        #[arg(long, short = 'l')]
        locale: Option<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Explain a resolution decision without assigning anything
    Explain {
        /// Candidate country code (may be omitted to exercise the defaults)
        value: Option<String>,

        /// Output in human-readable format instead of JSON
        #[arg(long)]
        human: bool,

        /// Path to countries config file (default: countries.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Locale to derive defaults from (e.g. en_NZ; default: system locale)
        #[arg(long, short = 'l')]
        locale: Option<String>,
    },

    /// Check whether a value is a selectable option
    Validate {
        /// Country code to check
        value: String,

        /// Path to countries config file (default: countries.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { config, json } => {
            run_list(config, json);
        }
        Commands::Resolve {
            value,
            config,
            locale,
            json,
        } => {
            run_resolve(value, config, locale, json);
        }
        Commands::Explain {
            value,
            human,
            config,
            locale,
        } => {
            run_explain(value, human, config, locale);
        }
        Commands::Validate { value, config } => {
            run_validate(&value, config);
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(config_path: Option<PathBuf>) -> Result<CountriesConfig, String> {
    match config_path {
        // An explicit path must exist
        Some(path) => CountriesConfig::load(&path).map_err(|e| e.to_string()),
        None => {
            let path = PathBuf::from("countries.toml");
            if path.exists() {
                CountriesConfig::load(&path).map_err(|e| e.to_string())
            } else {
                Ok(CountriesConfig::default())
            }
        }
    }
}

/// Build a registry-backed field pinned to the given locale, falling back to
/// the system locale
fn build_field(
    config: CountriesConfig,
    locale: Option<Locale>,
) -> CountryDropdownField<IsoCountries, MockSession> {
    let session = match locale {
        Some(locale) => MockSession::new().with_user_locale(locale),
        None => MockSession::new().with_default_locale(system_locale()),
    };

    CountryDropdownField::build(
        "Country",
        None,
        OptionSet::new(),
        "",
        config,
        IsoCountries,
        session,
    )
}

fn parse_locale(locale: Option<String>) -> Option<Locale> {
    locale.map(|raw| match raw.parse() {
        Ok(locale) => locale,
        Err(e) => {
            eprintln!("Invalid locale '{}': {}", raw, e);
            process::exit(1);
        }
    })
}

fn run_list(config_path: Option<PathBuf>, json_output: bool) {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }
    };

    let field = build_field(config, None);

    if json_output {
        match serde_json::to_string_pretty(field.source()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    } else {
        if field.source().is_empty() {
            println!("No selectable countries.");
            return;
        }

        println!("Selectable countries ({} total):\n", field.source().len());
        for entry in field.source().iter() {
            println!("  {}  {}", entry.value, entry.label);
        }
    }
}

fn run_resolve(
    value: Option<String>,
    config_path: Option<PathBuf>,
    locale: Option<String>,
    json_output: bool,
) {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }
    };

    let field = build_field(config, parse_locale(locale));
    let resolution = field.resolve(value.as_deref().unwrap_or(""));

    if json_output {
        match serde_json::to_string_pretty(&resolution) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    } else {
        match &resolution.adopted {
            Some(code) => {
                match field.source().label(code) {
                    Some(label) => println!("Adopted: {} ({})", code, label),
                    None => println!("Adopted: {}", code),
                }
                if let Some(origin) = resolution.origin {
                    println!("Origin: {}", origin.as_str());
                }
            }
            None => {
                println!("No value adopted.");
                if !resolution.skipped.is_empty() {
                    println!("Rules skipped:");
                    for reason in resolution.skip_reason_strings() {
                        println!("  - {}", reason);
                    }
                }
            }
        }
    }

    // Exit with appropriate code
    if resolution.is_adopted() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn run_explain(
    value: Option<String>,
    human: bool,
    config_path: Option<PathBuf>,
    locale: Option<String>,
) {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }
    };

    let field = build_field(config, parse_locale(locale));
    let explanation = field.explain(value.as_deref().unwrap_or(""));

    // Output
    if human {
        println!("{}", explanation.to_human());
    } else {
        match explanation.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    }

    // Exit with appropriate code
    if explanation.adopted {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn run_validate(value: &str, config_path: Option<PathBuf>) {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }
    };

    let field = build_field(config, None);
    let trimmed = value.trim();

    if field.is_valid_value(trimmed) {
        match field.source().label(trimmed) {
            Some(label) => println!("'{}' is a selectable option ({})", trimmed, label),
            None => println!("'{}' is a selectable option", trimmed),
        }
        process::exit(0);
    } else {
        println!("'{}' is not a selectable option", trimmed);
        process::exit(1);
    }
}
