mod commands;

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::{bounded, Receiver};
use navigation::{
    load_config, BladeOpener, ChannelSink, NavigationHost, Notification, Process,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Headless blade navigation shell")]
struct Args {
    /// TOML config file; `navigation.toml` in the working directory is used when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Read events from this file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,
    #[arg(long)]
    max_stack_depth: Option<usize>,
    #[arg(long)]
    process: Option<Process>,
    /// Print one snapshot per line instead of pretty JSON.
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref()).context("loading navigation config")?;
    if let Some(depth) = args.max_stack_depth {
        config = config.with_max_stack_depth(depth)?;
    }
    if let Some(process) = args.process {
        config.initial_process = process;
    }

    let (tx, rx) = bounded(64);
    let mut host = NavigationHost::new(config, Arc::new(ChannelSink::new(tx)));
    let opener = BladeOpener::default();

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening script {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_snapshot(&mut out, &host, args.compact)?;

    for (number, line) in input.lines().enumerate() {
        let line = line.context("reading input")?;
        let event = match commands::parse_line(&line, &opener, host.controller()) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(err) => {
                tracing::warn!(line = number + 1, "skipping input: {err:#}");
                continue;
            }
        };

        tracing::debug!(line = number + 1, event = event.name(), "dispatching");
        host.send(event)?;
        drain_notifications(&rx);
        print_snapshot(&mut out, &host, args.compact)?;
    }

    host.shutdown();
    Ok(())
}

fn drain_notifications(rx: &Receiver<Notification>) {
    for notification in rx.try_iter() {
        eprintln!("notice: {}", notification.message());
    }
}

fn print_snapshot(out: &mut impl Write, host: &NavigationHost, compact: bool) -> Result<()> {
    let snapshot = host.snapshot();
    if compact {
        serde_json::to_writer(&mut *out, &snapshot)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, &snapshot)?;
    }
    writeln!(out)?;
    Ok(())
}
