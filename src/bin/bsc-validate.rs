use bootstrap_components::validator::validate_store;
use bootstrap_components::{ComponentError, ConfigStore};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: bsc-validate <config.yaml>...");
        eprintln!();
        eprintln!("Each file is merged over the bundled defaults before checking.");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  bsc-validate config/bootstrap-components.yaml");
        eprintln!("  RUST_LOG=debug bsc-validate app/components.yaml");
        process::exit(1);
    }

    let mut exit_code = 0;

    for file_path in &args[1..] {
        match validate_file(file_path) {
            Ok(count) => {
                println!("✓ {} is valid ({} components)", file_path, count);
            }
            Err(e) => {
                eprintln!("✗ {} has errors:", file_path);
                print_error(&e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn validate_file(path: &str) -> Result<usize, ComponentError> {
    let mut store = ConfigStore::bundled();
    store.merge_path(path)?;
    validate_store(&store)
}

fn print_error(error: &ComponentError) {
    match error {
        ComponentError::InvalidConfig { path, reason } => {
            eprintln!("  Invalid configuration at '{}':", path);
            eprintln!("    {}", reason);
        }
        ComponentError::UnknownView { view } => {
            eprintln!("  Unknown view '{}'", view);
            eprintln!("    The built-in renderer only knows bootstrap-components.* views");
        }
        ComponentError::Yaml(msg) => {
            eprintln!("  YAML error:");
            eprintln!("    {}", msg);
        }
        ComponentError::Io { path, reason } => {
            eprintln!("  Failed to read '{}':", path);
            eprintln!("    {}", reason);
        }
        e => {
            eprintln!("  {}", e);
        }
    }
}
