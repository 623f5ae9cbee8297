use anyhow::{Context, Result};
use ccpack::cli::Cli;
use ccpack::output::{self, Verbosity};
use ccpack::{BakeContext, MANIFEST_FILE, bake, logging};
use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        output::set_verbosity(Verbosity::Quiet);
    } else if cli.verbose {
        output::set_verbosity(Verbosity::Verbose);
    }
    logging::init_logging(cli.verbose);

    let mut ctx = BakeContext::new(cli.directory.clone())
        .with_context(|| format!("Failed to load configuration in {}", cli.directory.display()))?;
    cli.apply_overrides(&mut ctx.config);

    if cli.dry_run {
        let manifest = bake::build_manifest(&ctx).context("Failed to build manifest")?;
        let json = manifest.to_json()?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(&json)?;
        writeln!(stdout)?;
        return Ok(());
    }

    let report = bake::run(&ctx).context("Failed to bake manifest")?;
    output::success(&format!("{MANIFEST_FILE} created successfully."));
    output::verbose(&format!(
        "{} files written to {}",
        report.files,
        report.manifest_path.display()
    ));
    Ok(())
}
