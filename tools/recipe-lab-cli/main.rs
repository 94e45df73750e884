use clap::Parser;
use recipe_lab::lab::{self, Model};
use recipe_lab::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const RECIPE_FILE: &str = "test.recipe";
const INLINE_FILE: &str = "my_app.cpp";
const DRIVER_FILE: &str = "my_app_2.cpp";
const HEADER_FILE: &str = "my_header.h";

/// Runs a step recipe and generates its inline and function-based sources
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Recipe text file to load. The built-in example recipe is used when omitted
    recipe_path: Option<PathBuf>,

    /// Directory receiving the stored recipe and the generated sources
    #[arg(short, long, default_value = "tmp")]
    out_dir: PathBuf,

    /// Only store the recipe and generate code, do not interpret it
    #[arg(long)]
    no_run: bool,

    /// Write a JSON report of the interpreted run to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Do not echo the steps' console output
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipe_lab=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut registry = Registry::new();
    lab::register_default_steps(&mut registry);
    if let Err(e) = registry.ensure_valid() {
        exit_with_error(&format!("Step registry is invalid: {}", e));
    }
    info!(steps = registry.len(), "registry ready");

    let recipe = match &cli.recipe_path {
        Some(path) => Recipe::load(&registry, path).unwrap_or_else(|e| {
            exit_with_error(&format!(
                "Failed to load recipe '{}': {}",
                path.display(),
                e
            ))
        }),
        None => lab::example_recipe(&registry)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to assemble recipe: {}", e))),
    };
    info!(recipe = %recipe, "recipe assembled");

    if let Err(e) = fs::create_dir_all(&cli.out_dir) {
        exit_with_error(&format!(
            "Failed to create output directory '{}': {}",
            cli.out_dir.display(),
            e
        ));
    }

    let recipe_path = cli.out_dir.join(RECIPE_FILE);
    if let Err(e) = recipe.save(&recipe_path) {
        exit_with_error(&format!("Failed to store recipe: {}", e));
    }
    info!(path = %recipe_path.display(), "recipe stored");

    if !cli.no_run {
        run_recipe(&recipe, &cli);
    }

    if let Err(e) = InlineGenerator::new().write(&recipe, cli.out_dir.join(INLINE_FILE)) {
        exit_with_error(&format!("Inline code generation failed: {}", e));
    }
    if let Err(e) = FunctionGenerator::new(HEADER_FILE).write(
        &recipe,
        cli.out_dir.join(DRIVER_FILE),
        cli.out_dir.join(HEADER_FILE),
    ) {
        exit_with_error(&format!("Function code generation failed: {}", e));
    }
}

fn run_recipe(recipe: &Recipe<'_, Model>, cli: &Cli) {
    let mut model = if cli.quiet {
        Model::new()
    } else {
        Model::echoing()
    };

    let console = ObserverFns {
        progress: |index: usize, name: &str| {
            println!("\n\x1b[1;32mStep {} :\t\x1b[0m\x1b[1;36m{}\x1b[0m", index, name)
        },
        key: |key: &str, value: f32| println!("\t\t\x1b[1;33mKey: {}, Value: {}\x1b[0m ", key, value),
        time: |elapsed: Duration| {
            println!("\n\t\t\x1b[1;37mTime: {} ns\t\x1b[0m", elapsed.as_nanos())
        },
    };
    let mut observers = (console, RunReport::new());

    let outcome = Interpreter::new().run(recipe, &mut model, &mut observers);
    model.cleanup();

    let (_, mut report) = observers;
    println!(
        "\nRun finished after {} of {} steps in {:?}",
        outcome.executed_steps(),
        recipe.len(),
        report.total_elapsed()
    );
    report.finish(outcome);

    if let Some(path) = &cli.report {
        let json = report
            .to_json()
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize run report: {}", e)));
        if let Err(e) = fs::write(path, json) {
            exit_with_error(&format!(
                "Failed to write run report '{}': {}",
                path.display(),
                e
            ));
        }
        info!(path = %path.display(), "run report written");
    }
}

fn exit_with_error(message: &str) -> ! {
    error!("{}", message);
    std::process::exit(1);
}
