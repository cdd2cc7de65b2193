use aspgui::prelude::*;
use clap::Parser;
use std::fs;
use std::time::Instant;
use tracing::Level;

/// Inspect the GUI definition embedded in an annotated logic program
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the annotated logic program
    source_path: String,

    /// Print the declared definition tree as JSON instead of the outline
    #[arg(long)]
    json: bool,

    /// Log every object the parser reads
    #[arg(short, long)]
    verbose: bool,

    /// Do not print warnings for unsupported properties
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let start = Instant::now();

    let source = fs::read_to_string(&cli.source_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read logic program '{}': {}",
            &cli.source_path, e
        ))
    });

    let mut diagnostics = Diagnostics::new();
    let definition = parse_source(&source, &mut diagnostics)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let duration = start.elapsed();

    if !cli.quiet {
        for warning in diagnostics.warnings() {
            eprintln!("Warning: {}", warning);
        }
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&definition)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize definition: {}", e)));
        println!("{}", json);
    } else {
        print!("{}", OutlineFormatter::format(&definition));
    }

    tracing::debug!(
        ?duration,
        warnings = diagnostics.len(),
        "parsed '{}'",
        cli.source_path
    );
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
