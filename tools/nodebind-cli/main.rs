use clap::{Parser, Subcommand};
use nodebind::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Typed bindings generator and workflow submitter for node-graph hosts
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a Rust bindings module from a host registry
    Generate {
        /// Path to a saved `object_info` JSON document
        #[arg(short, long, conflicts_with = "host", required_unless_present = "host")]
        registry: Option<PathBuf>,
        /// Fetch the registry from a running host instead (e.g. http://127.0.0.1:8188)
        #[arg(long)]
        host: Option<String>,
        /// Output file. Printed to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Path under which the generated code reaches the nodebind crate
        #[arg(long, default_value = "nodebind")]
        crate_path: String,
    },
    /// Submit a serialized prompt document and wait for it to finish
    Submit {
        /// Path to a prompt JSON document (`{"<id>": {"class_type": ...}}`)
        prompt: PathBuf,
        /// Host base URL
        #[arg(long, default_value = nodebind::client::DEFAULT_BASE_URL)]
        host: String,
        /// Total time budget in seconds
        #[arg(long, default_value_t = 60)]
        timeout_secs: u64,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            registry,
            host,
            output,
            crate_path,
        } => run_generate(registry, host, output, crate_path),
        Command::Submit {
            prompt,
            host,
            timeout_secs,
        } => run_submit(prompt, host, timeout_secs),
    }
}

fn run_generate(
    registry_path: Option<PathBuf>,
    host: Option<String>,
    output: Option<PathBuf>,
    crate_path: String,
) {
    let total_start = Instant::now();

    // --- 1. Registry Loading ---
    let load_start = Instant::now();
    let registry = match (registry_path, host) {
        (Some(path), _) => HostRegistry::from_file(&path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load registry '{}': {}", path.display(), e))
        }),
        (None, Some(url)) => {
            let client = BlockingHostClient::new(HostConfig::new(url.as_str()))
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to create client: {}", e)));
            client.object_info().unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to fetch registry from '{}': {}", url, e))
            })
        }
        (None, None) => exit_with_error("Either --registry or --host is required."),
    };
    let load_duration = load_start.elapsed();

    // --- 2. Normalization ---
    let definitions = registry
        .into_definitions()
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid registry: {}", e)));
    eprintln!("Loaded {} node definitions.", definitions.len());

    // --- 3. Generation ---
    let generate_start = Instant::now();
    let source = Generator::builder(definitions)
        .with_crate_path(crate_path)
        .build()
        .generate()
        .unwrap_or_else(|e| exit_with_error(&format!("Generation failed: {}", e)));
    let generate_duration = generate_start.elapsed();

    // --- 4. Output ---
    match output {
        Some(path) => {
            fs::write(&path, &source).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", path.display(), e))
            });
            eprintln!("Wrote {} bytes to '{}'.", source.len(), path.display());
        }
        None => println!("{}", source),
    }

    eprintln!("\n--- Performance Summary ---");
    eprintln!("Registry Loading:     {:?}", load_duration);
    eprintln!("Generation:           {:?}", generate_duration);
    eprintln!("-----------------------------");
    eprintln!("Total Execution:      {:?}", total_start.elapsed());
}

fn run_submit(prompt_path: PathBuf, host: String, timeout_secs: u64) {
    let prompt_json = fs::read_to_string(&prompt_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read prompt file '{}': {}",
            prompt_path.display(),
            e
        ))
    });
    let prompt: Prompt = serde_json::from_str(&prompt_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse prompt JSON: {}", e)));

    let config = HostConfig::new(host).with_timeout(Duration::from_secs(timeout_secs));
    let client = BlockingHostClient::new(config)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to create client: {}", e)));

    println!("Submitting {} nodes to {}...", prompt.len(), client.config().base_url);
    let start = Instant::now();
    let history = client
        .submit(&ExecutionRequest { prompt })
        .unwrap_or_else(|e| exit_with_error(&format!("Submission failed: {}", e)));

    println!("Completed in {:?}", start.elapsed());
    println!(
        "{}",
        serde_json::to_string_pretty(&history).unwrap_or_else(|_| history.to_string())
    );
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
