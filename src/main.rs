use anyhow::Result;
use bazaar_redact::locate;
use bazaar_redact::patch::{self, PatchReport};
use bazaar_redact::THEME_MARKERS;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bazaar-redact")]
#[command(about = "Zero out theme marker strings in the Bazaar executable", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the Bazaar executable (auto-detected if not specified)
    path: Option<PathBuf>,

    /// Scan and report occurrences without modifying the file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Patch even if Bazaar appears to be running
    #[arg(short, long)]
    force: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Refuse to patch a binary that a live process may have mapped.
    if !cli.force && locate::is_running(locate::TARGET_PROCESS) {
        anyhow::bail!(
            "{} is currently running. Close it first, or pass --force.",
            locate::TARGET_PROCESS
        );
    }

    let target = resolve_target(cli.path)?;
    println!("Target: {}", target.display());
    println!();

    let report = if cli.dry_run {
        println!("{}", "[DRY RUN - reporting what would be patched]".cyan());
        patch::scan_file(&target, THEME_MARKERS)?
    } else {
        println!("Patching binary...");
        patch::redact_file(&target, THEME_MARKERS)?
    };

    report_summary(&report, cli.dry_run);
    Ok(())
}

/// Resolve the target path: explicit argument first, then the candidate
/// install locations.
fn resolve_target(cli_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = cli_path {
        if !path.exists() {
            anyhow::bail!("binary not found at: {}", path.display());
        }
        return Ok(path);
    }

    if let Some(path) = locate::find_installed() {
        println!(
            "{}",
            format!("Auto-detected Bazaar binary: {}", path.display()).dimmed()
        );
        return Ok(path);
    }

    anyhow::bail!(
        "{}\n{}\n  {}\n  {}",
        "Could not auto-detect a Bazaar installation.".red(),
        "Try:".bold(),
        "1. Specify the path explicitly: bazaar-redact /path/to/bazaar",
        "2. Run with privileges that can read the install location: sudo bazaar-redact"
    )
}

fn report_summary(report: &PatchReport, dry_run: bool) {
    let verb = if dry_run { "would be patched" } else { "patched" };
    for hit in &report.hits {
        println!(
            "  {} {} occurrence(s) of: {}",
            "✓".green(),
            hit.count,
            hit.marker
        );
    }

    println!();
    println!("{}", "Summary:".bold());
    println!("  {} unique strings found", format!("{}", report.found).green());
    println!(
        "  {} total occurrences {}",
        format!("{}", report.patched).green(),
        verb
    );

    if report.found == 0 {
        println!(
            "{}",
            "Warning: no theme strings found. Binary may already be patched or its layout changed."
                .yellow()
        );
    } else if !dry_run {
        println!();
        println!("Done. Restart Bazaar to see changes.");
    }
}
