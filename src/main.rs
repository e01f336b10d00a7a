//! FocusFlow - Main Entry Point
//!
//! Reads a note-page export (file or stdin), extracts open tasks, and prints
//! them as a priority-ranked focus panel. The actual implementation is in
//! the `focusflow` library.

use anyhow::{Context, Result};
use clap::Parser;
use focusflow::{Prioritizer, TaskSource, TextExtractor, Urgency, format_next, format_panel};
use std::io::Read;

/// FocusFlow - rank open tasks from a note page by urgency
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the page text, or "-" for stdin
    file: String,

    /// Show only tasks in this urgency bucket
    /// (overdue, today, tomorrow, this-week, next-week, future, unscheduled)
    #[arg(long)]
    urgency: Option<Urgency>,

    /// Print only the single highest-priority task
    #[arg(long)]
    next: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let content = if args.file == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read page text from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&args.file)
            .with_context(|| format!("failed to read page text from {}", args.file))?
    };

    let tasks = TextExtractor::new(content).collect()?;
    let pass = Prioritizer::new();

    if args.next {
        println!("{}", format_next(pass.top(&tasks).as_ref(), pass.today()));
    } else if let Some(bucket) = args.urgency {
        let filtered = pass.filter_by_urgency(&tasks, bucket);
        println!("{}", format_panel(&filtered, pass.today()));
    } else {
        let ranked = pass.rank(&tasks);
        println!("{}", format_panel(&ranked, pass.today()));
    }

    Ok(())
}
