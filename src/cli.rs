//! CLI definition and dispatch.

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::config_validation::validate_screen_config;
use crate::domain::error::ScreenError;
use crate::domain::screen::{parse_symbols, run_screen, ScreenConfig};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "dipscreen", about = "Dip-buy / rally-reject stock screener")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the screen and deliver the report
    Screen {
        #[arg(short, long)]
        config: PathBuf,
        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Comma-separated universe override
        #[arg(long)]
        symbols: Option<String>,
        /// Screen as of this date (default: today)
        #[arg(long)]
        as_of: Option<NaiveDate>,
        /// Candidates per side override
        #[arg(long)]
        top: Option<usize>,
        #[arg(long)]
        dry_run: bool,
    },
    /// List symbols visible to the data adapter
    ListSymbols {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show data range for symbol(s)
    Info {
        #[arg(long)]
        symbol: Option<String>,
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Screen {
            config,
            output,
            symbols,
            as_of,
            top,
            dry_run,
        } => run_screen_cmd(
            &config,
            output.as_ref(),
            symbols.as_deref(),
            as_of,
            top,
            dry_run,
        ),
        Command::ListSymbols { config } => run_list_symbols(&config),
        Command::Info { symbol, config } => run_info(symbol.as_deref(), &config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = ScreenError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Assemble a [`ScreenConfig`] from a validated config source.
pub fn build_screen_config(adapter: &dyn ConfigPort) -> ScreenConfig {
    let d = ScreenConfig::default();
    ScreenConfig {
        min_history: adapter.get_int("screen", "min_history", d.min_history as i64) as usize,
        price_ceiling: adapter.get_double("screen", "price_ceiling", d.price_ceiling),
        tolerance: adapter.get_double("screen", "tolerance", d.tolerance),
        rsi_period: adapter.get_int("screen", "rsi_period", d.rsi_period as i64) as usize,
        sma_fast: adapter.get_int("screen", "sma_fast", d.sma_fast as i64) as usize,
        sma_slow: adapter.get_int("screen", "sma_slow", d.sma_slow as i64) as usize,
        top_n: adapter.get_int("screen", "top_n", d.top_n as i64) as usize,
        bull_rsi_min: adapter.get_double("screen", "bull_rsi_min", d.bull_rsi_min),
        bear_rsi_max: adapter.get_double("screen", "bear_rsi_max", d.bear_rsi_max),
        lookback_days: adapter.get_int("data", "lookback_days", d.lookback_days),
    }
}

fn run_screen_cmd(
    config_path: &PathBuf,
    output_override: Option<&PathBuf>,
    symbols_override: Option<&str>,
    as_of: Option<NaiveDate>,
    top_override: Option<usize>,
    dry_run: bool,
) -> ExitCode {
    // Stage 1: Load and validate config
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_screen_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let mut screen_config = build_screen_config(&adapter);
    if let Some(top) = top_override {
        screen_config.top_n = top;
    }

    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());

    if dry_run {
        return run_dry_run(&adapter, &screen_config, symbols_override, as_of);
    }

    // Stage 2: Data adapter and universe
    let data_port = match CsvAdapter::from_config(&adapter) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let symbols = match resolve_symbols(symbols_override, &adapter, &data_port) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if symbols.is_empty() {
        eprintln!("warning: universe is empty");
    }

    // Stage 3: Run the screen
    eprintln!("Screening {} symbols as of {}", symbols.len(), as_of);
    let summary = run_screen(&data_port, &symbols, as_of, &screen_config);

    eprintln!(
        "Screened {} symbols: {} bulls, {} bears, {} skipped",
        summary.scanned,
        summary.result.bulls.len(),
        summary.result.bears.len(),
        summary.skipped.len(),
    );

    // Stage 4: Deliver the report
    let output = output_override
        .cloned()
        .or_else(|| adapter.get_string("report", "output").map(PathBuf::from));

    let report_port = match output {
        Some(path) => {
            eprintln!("Writing report to {}", path.display());
            TextReportAdapter::to_file(path)
        }
        None => TextReportAdapter::stdout(),
    };

    match report_port.deliver(&summary.result, as_of) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: failed to deliver report: {e}");
            (&e).into()
        }
    }
}

fn run_dry_run(
    adapter: &dyn ConfigPort,
    config: &ScreenConfig,
    symbols_override: Option<&str>,
    as_of: NaiveDate,
) -> ExitCode {
    eprintln!("\nScreen parameters:");
    eprintln!("  as_of:         {}", as_of);
    eprintln!("  min_history:   {}", config.min_history);
    eprintln!("  price_ceiling: {}", config.price_ceiling);
    eprintln!("  tolerance:     {}", config.tolerance);
    eprintln!("  rsi_period:    {}", config.rsi_period);
    eprintln!("  sma_fast:      {}", config.sma_fast);
    eprintln!("  sma_slow:      {}", config.sma_slow);
    eprintln!("  top_n:         {}", config.top_n);
    eprintln!("  bull_rsi_min:  {}", config.bull_rsi_min);
    eprintln!("  bear_rsi_max:  {}", config.bear_rsi_max);
    eprintln!("  lookback_days: {}", config.lookback_days);

    let symbols_str = symbols_override
        .map(str::to_string)
        .or_else(|| adapter.get_string("screen", "symbols"));

    match symbols_str {
        Some(s) => match parse_symbols(&s) {
            Ok(symbols) => eprintln!("\nUniverse: {} symbols ({})", symbols.len(), symbols.join(", ")),
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        },
        None => eprintln!("\nUniverse: all symbols in the data directory"),
    }

    eprintln!("\nDry run complete: configuration is valid");
    ExitCode::SUCCESS
}

pub fn resolve_symbols(
    symbols_override: Option<&str>,
    config: &dyn ConfigPort,
    data_port: &dyn DataPort,
) -> Result<Vec<String>, ScreenError> {
    if let Some(s) = symbols_override {
        return parse_symbols(s);
    }

    if let Some(s) = config.get_string("screen", "symbols") {
        return parse_symbols(&s);
    }

    data_port.list_symbols()
}

fn run_list_symbols(config_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let adapter = match CsvAdapter::from_config(&config) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let symbols = match adapter.list_symbols() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if symbols.is_empty() {
        eprintln!("No symbols found");
    } else {
        for symbol in &symbols {
            println!("{}", symbol);
        }
        eprintln!("{} symbols found", symbols.len());
    }
    ExitCode::SUCCESS
}

fn run_info(symbol: Option<&str>, config_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let adapter = match CsvAdapter::from_config(&config) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let symbols = match symbol {
        Some(s) => vec![s.to_uppercase()],
        None => match adapter.list_symbols() {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        },
    };

    for s in &symbols {
        match adapter.data_range(s) {
            Ok(Some((min_date, max_date, count))) => {
                println!("{}: {} bars, {} to {}", s, count, min_date, max_date);
            }
            Ok(None) => {
                eprintln!("{}: no data found", s);
            }
            Err(e) => {
                eprintln!("error querying {}: {}", s, e);
            }
        }
    }
    ExitCode::SUCCESS
}
