mod collectors;
mod config;
mod models;
mod util;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use collectors::runner::SystemRunner;
use models::record::DiskUsageRecord;

#[derive(Parser, Debug)]
#[command(name = "dfjson", about = "report mounted filesystem usage as a JSON array", version = "0.1")]
struct Cli {
    /// Pretty-print the JSON array
    #[arg(short, long)]
    pretty: bool,

    /// Print a human-readable table instead of JSON
    #[arg(long)]
    table: bool,

    /// Fail with an error when df cannot be invoked, instead of printing []
    #[arg(long)]
    strict: bool,

    /// Override the df binary (default from config, usually "df")
    #[arg(long)]
    df_path: Option<String>,

    /// Print config file path and current values, then exit
    #[arg(long)]
    config: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "dfjson", &mut std::io::stdout());
        return Ok(());
    }
    if cli.config {
        return run_print_config();
    }

    let cfg = config::Config::load();
    let df_path = cli.df_path.as_deref().unwrap_or(&cfg.command.df_path);

    let mut records: Vec<DiskUsageRecord> =
        match collectors::df::collect(&SystemRunner, df_path, &cfg.command.extra_args) {
            Ok(r) => r,
            Err(e) if cli.strict => return Err(e),
            Err(e) => {
                // Legacy contract: invocation failure degrades to [] on stdout.
                eprintln!("dfjson: {:#}", e);
                Vec::new()
            }
        };

    records.retain(|r| !cfg.filters.excludes(&r.device, &r.mount));

    if cli.table {
        print!("{}", util::report::render(&records, cfg.report.block_size));
    } else if cli.pretty {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        println!("{}", serde_json::to_string(&records)?);
    }
    Ok(())
}

fn run_print_config() -> Result<()> {
    let cfg = config::Config::load();
    let path = config::Config::config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    println!("Config: {}", path);
    println!();
    println!("[command]");
    println!("  df_path    = {}", cfg.command.df_path);
    println!("  extra_args = {:?}", cfg.command.extra_args);
    println!();
    println!("[filters]");
    println!("  exclude_devices = {:?}", cfg.filters.exclude_devices);
    println!("  exclude_mounts  = {:?}", cfg.filters.exclude_mounts);
    println!();
    println!("[report]");
    println!("  block_size = {}", cfg.report.block_size);
    Ok(())
}
