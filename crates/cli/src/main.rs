//! CloudOps Generator CLI
//!
//! Command-line interface for resolving SDK class names and generating
//! operation sources from service model documents.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cloudops_generator_common::{KnownClasses, NamingConfig, Service, ServiceDocument};
use cloudops_generator_generator::OperationGenerator;
use cloudops_generator_resolver::{
    build_service, client_class_name, config_class_name, resolve_request_class_name,
    resolve_response_class_name, resolve_service_name, PaginationResolver,
};
use colored::*;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "cloudops-generator")]
#[command(version, about = "Resolve SDK class names and generate CloudOps operations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve and display the names generated for a service
    #[command(after_help = "EXAMPLES:\n  \
        cloudops-generator resolve --model ec2.json --classes ec2-classes.txt")]
    Resolve {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Generate one operation source file per operation
    #[command(after_help = "EXAMPLES:\n  \
        cloudops-generator generate \\\n    \
        --model ec2.json \\\n    \
        --classes ec2-classes.txt \\\n    \
        --output ./CloudOps/Generated")]
    Generate {
        #[command(flatten)]
        input: InputArgs,

        /// Output directory
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,
    },
}

#[derive(clap::Args)]
struct InputArgs {
    /// Path to the service model document (JSON)
    #[arg(short, long)]
    model: PathBuf,

    /// File listing the SDK class names, one per line
    #[arg(short, long)]
    classes: PathBuf,

    /// Naming configuration (YAML)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Everything loaded from the command-line inputs
struct Loaded {
    service: Service,
    classes: KnownClasses,
    config: NamingConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.verbose {
        println!("{} Verbose mode enabled", "→".cyan());
    }

    match cli.command {
        Commands::Resolve { input } => resolve_command(&input),
        Commands::Generate { input, output } => generate_command(&input, &output),
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("cloudops_generator=debug,info")
        } else {
            EnvFilter::new("cloudops_generator=info,warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn load_inputs(input: &InputArgs) -> Result<Loaded> {
    println!(
        "{} Loading service model: {}",
        "→".cyan(),
        input.model.display()
    );

    let config = match &input.config {
        Some(path) => NamingConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => NamingConfig::default(),
    };
    debug!(?config, "naming configuration");

    let document = ServiceDocument::from_file(&input.model)
        .with_context(|| format!("Failed to load service model {}", input.model.display()))?;
    let service = build_service(document, &PaginationResolver::from_config(&config));

    let classes = KnownClasses::from_file(&input.classes)
        .with_context(|| format!("Failed to load class list {}", input.classes.display()))?;

    println!(
        "{} Loaded {} operations, {} shapes, {} known classes",
        "✓".green(),
        service.operations().len(),
        service.shapes.len(),
        classes.len()
    );

    Ok(Loaded {
        service,
        classes,
        config,
    })
}

fn resolve_command(input: &InputArgs) -> Result<()> {
    let Loaded {
        service, classes, ..
    } = load_inputs(input)?;

    println!("\n{}", "Service:".bold());
    println!("  ID: {}", service.service_id().yellow());
    println!("  Name: {}", resolve_service_name(&service).yellow());
    println!("  Client: {}", client_class_name(&service));
    println!("  Config: {}", config_class_name(&service));
    println!("  Paginated operations: {}", service.has_pagination());

    println!("\n{}", "Operations:".bold());
    let mut unresolved = 0;
    for operation in service.operations() {
        let request = resolve_request_class_name(operation, &classes);
        let response = resolve_response_class_name(operation, &classes);

        match (request, response) {
            (Ok(request), Ok(response)) => {
                println!("  • {} ({})", operation.name.cyan(), operation.class_name());
                println!("    Request: {}", request);
                println!("    Response: {}", response);
            }
            (request, response) => {
                unresolved += 1;
                println!("  • {}", operation.name.red());
                for err in [request.err(), response.err()].into_iter().flatten() {
                    println!("    {} {}", "✗".red(), err);
                }
            }
        }

        if let Some(pagination) = &operation.pagination {
            println!("    Result keys: {}", pagination.result_keys.join(", "));
        }
    }

    if unresolved > 0 {
        println!(
            "\n{} {} operation(s) could not be resolved",
            "!".yellow(),
            unresolved
        );
    } else {
        println!("\n{}", "✓ All operations resolved".green().bold());
    }

    Ok(())
}

fn generate_command(input: &InputArgs, output: &Path) -> Result<()> {
    let loaded = load_inputs(input)?;

    println!("{} Generating operation files...", "→".cyan());
    let generator = OperationGenerator::new(&loaded.service, &loaded.classes, &loaded.config)
        .context("Failed to create generator")?;
    let report = generator
        .generate_to_directory(output)
        .context("Failed to generate operations")?;

    println!("\n{}", "✓ Generation complete!".green().bold());
    println!("\n{}", "Generated files:".bold());
    for path in &report.written {
        println!("  📄 {}", path.display());
    }

    if !report.skipped.is_empty() {
        println!("\n{}", "Skipped operations:".bold());
        for skipped in &report.skipped {
            println!("  {} {}: {}", "✗".red(), skipped.operation, skipped.reason);
        }
    }

    Ok(())
}
