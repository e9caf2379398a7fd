use anyhow::{Context, Result};

/// Prints the config JSON schema, or writes it to the path given as the first argument.
fn main() -> Result<()> {
    let schema = sketchpad::Config::json_schema();
    let json = serde_json::to_string_pretty(&schema)?;

    match std::env::args_os().nth(1) {
        Some(path) => std::fs::write(&path, json)
            .with_context(|| format!("Failed to write schema to {}", path.to_string_lossy()))?,
        None => println!("{json}"),
    }
    Ok(())
}
