//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::cli::Args;
use chatlens::config::{DateOrder, ParserConfig};
use chatlens::filter::{FilterConfig, apply_filters};
use chatlens::parser::ExportParser;
use chatlens::report::{ReportFormat, render, write_report};
use chatlens::stats::ChatReport;
use chatlens::ChatlensError;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let date_order: DateOrder = args.date_order.into();
    let format: ReportFormat = args.format.into();

    // Status goes to stderr so stdout stays the report.
    eprintln!("💬 chatlens v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!("📂 Input:   {}", args.input);
    eprintln!("📅 Dates:   {}", date_order);
    eprintln!("📄 Format:  {}", format);

    // Build filter configuration
    let mut filter_config = FilterConfig::new();

    if let Some(ref after) = args.after {
        filter_config = filter_config.with_date_from(after)?;
        eprintln!("📅 After:   {}", after);
    }

    if let Some(ref before) = args.before {
        filter_config = filter_config.with_date_to(before)?;
        eprintln!("📅 Before:  {}", before);
    }

    if let Some(ref user) = args.user {
        filter_config = filter_config.with_sender(user.clone());
        eprintln!("👤 User:    {}", user);
    }

    eprintln!();

    // Step 1: Parse
    eprintln!("⏳ Parsing export...");
    let parse_start = Instant::now();
    let config = ParserConfig::new(date_order).with_skip_system(args.skip_system);
    let parser = ExportParser::with_config(config);
    let messages = parser.parse(Path::new(&args.input))?;
    let parsed_count = messages.len();
    eprintln!(
        "   Found {} messages ({:.2}s)",
        parsed_count,
        parse_start.elapsed().as_secs_f64()
    );

    // Step 2: Filter
    let messages = if filter_config.is_active() {
        eprintln!("🔍 Filtering messages...");
        let filtered = apply_filters(messages, &filter_config);
        eprintln!("   {} messages after filtering", filtered.len());
        filtered
    } else {
        messages
    };

    // Step 3: Aggregate
    eprintln!("📊 Computing statistics...");
    let report = ChatReport::compute(&messages, args.top);

    // Step 4: Render
    match args.output {
        Some(ref output) => {
            write_report(&report, Path::new(output), format)?;
            eprintln!();
            eprintln!("✅ Done! Report saved to {}", output);
        }
        None => {
            let rendered = render(&report, format)?;
            eprintln!();
            println!("{rendered}");
        }
    }

    let total_time = total_start.elapsed();
    eprintln!();
    eprintln!("⚡ Performance:");
    eprintln!("   Total time:  {:.2}s", total_time.as_secs_f64());
    let msgs_per_sec = parsed_count as f64 / total_time.as_secs_f64();
    eprintln!("   Throughput:  {:.0} messages/sec", msgs_per_sec);

    Ok(())
}
