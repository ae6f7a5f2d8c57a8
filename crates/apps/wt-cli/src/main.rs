use anyhow::Result;
use std::path::Path;

mod cli;
mod commands;
mod context;
mod dispatcher;
mod theme;
mod ui;

use cli::Args;
use context::Context;
use dispatcher::Dispatcher;

fn main() {
    let args = Args::parse(std::env::args().collect());

    // Logging is best effort: a read-only or missing app dir must not stop the clock
    let _logger = wt_core::env::get_base_dir()
        .ok()
        .and_then(|base_dir| init_logger(&base_dir).ok());

    log::info!(
        "wt v{} invoked: command={:?} args={:?}",
        env!("CARGO_PKG_VERSION"),
        args.command,
        args.positional
    );

    // Every failure is reported as text; the exit status stays 0
    if let Err(e) = run(&args) {
        log::error!("{:#}", e);
        println!("Error: {:#}", e);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut ctx = Context::new()?;
    Dispatcher::dispatch(&mut ctx, args)
}

fn init_logger(base_dir: &Path) -> Result<flexi_logger::LoggerHandle> {
    let log_dir = base_dir.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let handle = flexi_logger::Logger::try_with_env_or_str("info")?
        .log_to_file(
            flexi_logger::FileSpec::default()
                .directory(&log_dir)
                .basename("wt")
                .suppress_timestamp()
                .suffix("log"),
        )
        .append()
        .format(flexi_logger::opt_format)
        .start()?;

    Ok(handle)
}
