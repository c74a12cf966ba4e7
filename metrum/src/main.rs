//! Metrum command line
//!
//! ```text
//! metrum kinds
//! metrum units Pressure --style fraction-superscript
//! metrum parse Speed "1.5 km/h"
//! metrum convert Length "12,5 mm" "F2 m" --locale sv-SE
//! metrum batch < requests.jsonl
//! ```

mod batch;
mod config;

use std::env;
use std::io::{self, Write};
use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use metrum_core::{format_number, Locale, SymbolFormat, ValueFormat};
use metrum_units::{Conversion, ConverterRegistry};

use crate::batch::{Failure, Outcome, Request, Response};
use crate::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "metrum",
    version,
    about = "Parse, convert and format physical quantities",
    after_help = "Environment: METRUM_LOCALE, METRUM_STYLE, RUST_LOG (a bare level such as debug; default warn)"
)]
struct Args {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the quantity kinds with their SI unit and dimension
    Kinds,

    /// List the units of a kind
    Units {
        kind: String,

        /// Symbol style: default, signed-hat, fraction-hat, signed-superscript, fraction-superscript
        #[arg(long)]
        style: Option<SymbolFormat>,
    },

    /// Parse "<number> <unit>" text
    Parse {
        kind: String,

        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Culture tag for the decimal separator, e.g. sv-SE
        #[arg(long, value_parser = parse_locale)]
        locale: Option<Locale>,
    },

    /// Convert quantity text to a unit ("km") or a quantity format ("F2 km")
    Convert {
        kind: String,

        #[arg(allow_hyphen_values = true)]
        text: String,

        to: String,

        #[arg(long, value_parser = parse_locale)]
        locale: Option<Locale>,
    },

    /// Answer JSON requests read line by line from stdin
    Batch {
        /// Locale for requests that do not name one
        #[arg(long, value_parser = parse_locale)]
        locale: Option<Locale>,
    },
}

fn parse_locale(tag: &str) -> Result<Locale, String> {
    Locale::from_tag(tag).ok_or_else(|| format!("unknown locale '{}'", tag))
}

#[derive(Debug, Serialize)]
struct KindRow {
    kind: &'static str,
    si_symbol: &'static str,
    dimension: String,
    units: usize,
}

#[derive(Debug, Serialize)]
struct UnitRow {
    symbol: String,
    name: &'static str,
    aliases: &'static [&'static str],
    conversion: Conversion,
    is_si: bool,
}

fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();
    let registry = ConverterRegistry::standard();
    let config = Config::from_env();

    let mut stdout = io::stdout().lock();
    execute(&registry, config, &args, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Logs go to stderr so stdout stays machine readable
fn init_logging() {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::WARN),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn execute<W: Write>(registry: &ConverterRegistry, config: Config, args: &Args, out: &mut W) -> Result<()> {
    match &args.command {
        Command::Kinds => {
            let rows: Vec<KindRow> = registry
                .iter()
                .map(|c| KindRow {
                    kind: c.kind(),
                    si_symbol: c.si_symbol(),
                    dimension: c.dimension().to_string(),
                    units: c.units().len(),
                })
                .collect();

            if args.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
            } else {
                for row in &rows {
                    writeln!(out, "{:<22} {:<8} {}", row.kind, row.si_symbol, row.dimension)?;
                }
            }
        }

        Command::Units { kind, style } => {
            let style = config.with_overrides(None, *style).style;
            let converter = registry.get(kind).ok_or_else(|| Failure::unknown_kind(kind))?;
            let rows: Vec<UnitRow> = converter
                .units()
                .into_iter()
                .map(|info| UnitRow {
                    symbol: converter
                        .symbol_in(info.symbol, style)
                        .unwrap_or_else(|_| info.symbol.to_string()),
                    name: info.name,
                    aliases: info.aliases,
                    conversion: info.conversion,
                    is_si: info.is_si,
                })
                .collect();

            if args.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
            } else {
                for row in &rows {
                    let marker = if row.is_si { " (SI)" } else { "" };
                    write!(out, "{:<12} {}{}", row.symbol, row.name, marker)?;
                    if !row.aliases.is_empty() {
                        write!(out, " [{}]", row.aliases.join(", "))?;
                    }
                    writeln!(out)?;
                }
            }
        }

        Command::Parse { kind, text, locale } => {
            let config = config.with_overrides(*locale, None);
            let request = Request {
                kind: kind.clone(),
                text: text.clone(),
                ..Request::default()
            };
            single(registry, &request, config.locale, args.json, out)?;
        }

        Command::Convert { kind, text, to, locale } => {
            let config = config.with_overrides(*locale, None);
            let request = Request {
                kind: kind.clone(),
                text: text.clone(),
                to: Some(to.clone()),
                ..Request::default()
            };
            single(registry, &request, config.locale, args.json, out)?;
        }

        Command::Batch { locale } => {
            let config = config.with_overrides(*locale, None);
            let answered = batch::run(registry, io::stdin().lock(), &mut *out, config.locale)?;
            tracing::info!(answered, "batch finished");
        }
    }

    Ok(())
}

/// Answer one parse or convert request; a failed request is still written in JSON mode
fn single<W: Write>(registry: &ConverterRegistry, request: &Request, locale: Locale, json: bool, out: &mut W) -> Result<()> {
    let result = batch::handle(registry, request, locale);

    if json {
        let response = Response::new(None, result.clone());
        writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
    }

    let outcome = result?;
    if !json {
        writeln!(out, "{}", describe(&outcome, &locale))?;
    }
    Ok(())
}

fn describe(outcome: &Outcome, locale: &Locale) -> String {
    if let Some(converted) = &outcome.converted {
        return converted.text.clone();
    }
    let parsed = &outcome.parsed;
    format!(
        "{} {} = {} {}",
        format_number(parsed.value, ValueFormat::General, locale),
        parsed.unit,
        format_number(parsed.si_value, ValueFormat::General, locale),
        parsed.si_symbol,
    )
}
