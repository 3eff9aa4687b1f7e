mod commands;
mod logging;
mod progress;
mod report;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{anyhow, bail, Context, Result};
use clap::{CommandFactory, Parser};
use colored::*;
use commands::{ApplyArgs, Cli, Commands, ConfigArgs, PreviewArgs, ScanArgs};
use dotenv::dotenv;
use progress::CliReporter;
use sample_shifter_core::organize::{self, ApplyOptions, ApplyReport};
use sample_shifter_core::{
    load_category_config, preview, scanner, summarize, AppConfig, CategoryConfig,
    ClassifiedFile, Classifier, PlanResult, ShiftEngine,
};
use tracing::info;

fn main() {
    process::exit(run());
}

/// Everything that must be dropped before exiting (the log guard) lives here.
fn run() -> i32 {
    dotenv().ok();

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() { 1 } else { 0 };
        }
    };

    let settings = match sample_shifter_core::settings::load_configuration() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{} loading settings: {}", "Error".red().bold(), err);
            return 1;
        }
    };

    let _guard = logging::init_logger(&settings);

    let result = match args.command {
        Some(Commands::Scan(args)) => run_scan(&args),
        Some(Commands::Preview(args)) => run_preview(&args, &settings),
        Some(Commands::Apply(args)) => run_apply(&args, &settings),
        Some(Commands::Config(args)) => run_config(&args, &settings),
        None => {
            let _ = Cli::command().print_long_help();
            Ok(())
        }
    };

    match result {
        Ok(()) => 0,
        Err(err) => {
            info!("Command failed: {:#}", err);
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            1
        }
    }
}

fn run_scan(args: &ScanArgs) -> Result<()> {
    ensure_directory(&args.directory)?;

    println!("Scanning directory: {}", args.directory.display());
    println!();

    let samples = scanner::scan_directory(&args.directory, &CliReporter::new())
        .context("Error scanning directory")?;
    report::print_scan_results(&samples);

    Ok(())
}

fn run_preview(args: &PreviewArgs, settings: &AppConfig) -> Result<()> {
    ensure_directory(&args.source)?;
    let target = resolve_target(args.target.as_deref(), settings)?;
    let categories = load_categories(args.config.as_deref(), settings)?;
    let normalize = args.normalize || settings.normalize;

    println!("Scanning: {}", args.source.display());
    println!("Target: {}", target.display());
    println!();

    let engine = ShiftEngine::new(Classifier::new(&categories));
    let plan = engine
        .plan(&args.source, &target, normalize, &CliReporter::new())
        .context("Error scanning directory")?;
    print_timings(&plan);

    if plan.files.is_empty() {
        println!("No audio sample files found.");
        return Ok(());
    }

    println!("Preview: Found {} file(s) to categorize", plan.files.len());
    println!();

    report::print_detailed_file_list(&plan.files);
    report::print_stats(&summarize(&plan.files));

    if let Some(output) = &args.output {
        preview::save_preview(output, &plan.files).context("Error saving preview file")?;
        println!("Preview saved to: {}", output.display());
        println!("Use this file with the 'apply' command to execute the categorization.");
    }

    Ok(())
}

fn run_apply(args: &ApplyArgs, settings: &AppConfig) -> Result<()> {
    let target = resolve_target(args.target.as_deref(), settings)?;

    let files: Vec<ClassifiedFile> = if let Some(preview_file) = &args.preview_file {
        let files = preview::load_preview(preview_file)
            .with_context(|| format!("Error reading preview file {}", preview_file.display()))?;
        println!("Loaded preview from: {}", preview_file.display());
        files
    } else {
        let source = args
            .source
            .as_deref()
            .ok_or_else(|| anyhow!("source directory required when not using --preview-file"))?;
        ensure_directory(source)?;
        let categories = load_categories(args.config.as_deref(), settings)?;
        let normalize = args.normalize || settings.normalize;

        println!("Scanning: {}", source.display());
        let engine = ShiftEngine::new(Classifier::new(&categories));
        let plan = engine
            .plan(source, &target, normalize, &CliReporter::new())
            .context("Error scanning directory")?;
        print_timings(&plan);
        plan.files
    };

    if files.is_empty() {
        println!("No files to process.");
        return Ok(());
    }

    if args.clean {
        if args.dry_run {
            println!();
            println!("[DRY RUN] Would clean target directory: {}", target.display());
        } else {
            confirm_clean(&target)?;
        }
    }

    if args.dry_run {
        println!();
        println!("{}", "=== DRY RUN MODE - No files will be copied ===".yellow());
    }

    println!();
    println!("Processing {} file(s)...", files.len());
    println!();

    let options = ApplyOptions {
        dry_run: args.dry_run,
    };
    let outcome = organize::apply_plan(&files, options, &CliReporter::new());

    println!();
    report::print_stats(&summarize(&files));

    if apply_exit_status(&outcome, args.fail_on_error, settings.fail_on_copy_error) != 0 {
        bail!("{} of {} file(s) failed to copy", outcome.failed(), outcome.total);
    }

    Ok(())
}

/// Copy failures only fail the run when asked to, by flag or setting.
fn apply_exit_status(report: &ApplyReport, fail_on_error: bool, fail_on_copy_error: bool) -> i32 {
    if !report.is_clean() && (fail_on_error || fail_on_copy_error) {
        1
    } else {
        0
    }
}

fn print_timings(plan: &PlanResult) {
    println!(
        "Scan: {}, Classify: {}",
        format!("{:.2}s", plan.scan_duration.as_secs_f64()).green(),
        format!("{:.2}s", plan.classify_duration.as_secs_f64()).green(),
    );
}

fn run_config(args: &ConfigArgs, settings: &AppConfig) -> Result<()> {
    let categories = load_categories(args.config.as_deref(), settings)?;

    match &args.output {
        Some(output) => {
            categories
                .save(output)
                .with_context(|| format!("Error writing {}", output.display()))?;
            println!(
                "Configuration with {} categories written to: {}",
                categories.categories.len(),
                output.display()
            );
        }
        None => println!("{}", categories.to_json()?),
    }

    Ok(())
}

fn ensure_directory(dir: &Path) -> Result<()> {
    if !dir.exists() {
        bail!("Directory '{}' does not exist", dir.display());
    }
    Ok(())
}

fn resolve_target(flag: Option<&Path>, settings: &AppConfig) -> Result<PathBuf> {
    flag.map(Path::to_path_buf)
        .or_else(|| settings.default_target.as_ref().map(PathBuf::from))
        .ok_or_else(|| anyhow!("--target flag is required"))
}

fn load_categories(flag: Option<&Path>, settings: &AppConfig) -> Result<CategoryConfig> {
    let path = flag
        .map(Path::to_path_buf)
        .or_else(|| settings.category_config.as_ref().map(PathBuf::from));
    let categories =
        load_category_config(path.as_deref()).context("Error loading configuration")?;
    info!(
        "Using {} categories with {} keywords",
        categories.categories.len(),
        categories.keyword_count()
    );
    Ok(categories)
}

fn confirm_clean(target: &Path) -> Result<()> {
    if !target.exists() {
        return Ok(());
    }

    println!();
    println!("{}", "WARNING: This will delete all contents in:".red().bold());
    println!("   {}", target.display());
    println!();

    if !prompt_confirm("Are you sure you want to continue? Type 'yes' to confirm:")? {
        bail!("cleaning cancelled by user");
    }

    println!();
    println!("Cleaning target directory: {}", target.display());
    organize::clean_target(target).context("failed to clean directory")?;
    println!("Target directory cleaned successfully.");
    Ok(())
}

fn prompt_confirm(prompt: &str) -> io::Result<bool> {
    print!("{} ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim() == "yes")
}
