use anyhow::{Context, Result};
use clap::Parser;
use sketchpad::export::FileSink;
use sketchpad::input::{InputEvent, parse_script};
use sketchpad::{Config, Controller};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(
    version,
    about = "Sticker sketchpad: replay drawing events onto a canvas and export PNGs"
)]
struct Cli {
    /// Event script to replay, one event per line ('-' reads stdin)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Config file to use instead of ~/.config/sketchpad/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory for exported images (overrides [export] save_directory)
    #[arg(long, short = 'o', value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Write the final live canvas, tool preview included, to this PNG file
    #[arg(long, value_name = "FILE")]
    snapshot: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script else {
        print_usage();
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let script = read_script(&script_path)?;
    let events = parse_script(&script)
        .with_context(|| format!("Invalid event script {}", script_path.display()))?;
    log::info!("Replaying {} events", events.len());

    let mut sink = FileSink::from_config(&config.export);
    if let Some(dir) = cli.output_dir {
        sink.save_directory = dir;
    }

    let mut controller = Controller::from_config(&config, Box::new(sink))
        .context("Cannot acquire a drawing surface")?;

    for event in events {
        if event == InputEvent::Export {
            if let Some(path) = controller.export().context("Export failed")? {
                println!("Exported {}", path.display());
            }
        } else {
            controller.handle(event)?;
        }
    }

    let history = controller.session().history();
    println!(
        "{} strokes committed, {} redoable",
        history.committed().len(),
        history.redoable().len()
    );

    if let Some(path) = cli.snapshot {
        let png = controller
            .surface()
            .to_png()
            .context("Failed to encode canvas snapshot")?;
        fs::write(&path, png)
            .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;
        println!("Snapshot written to {}", path.display());
    }

    Ok(())
}

fn read_script(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut script = String::new();
        std::io::stdin()
            .read_to_string(&mut script)
            .context("Failed to read event script from stdin")?;
        return Ok(script);
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read event script {}", path.display()))
}

fn print_usage() {
    println!("sketchpad: Sticker sketchpad engine");
    println!();
    println!("Usage:");
    println!("  sketchpad --script events.txt     Replay an event script");
    println!("  sketchpad --script -              Read the script from stdin");
    println!("  sketchpad --help                  Show all options");
    println!();
    println!("Script commands (one per line, '#' starts a comment):");
    println!("  down X Y | move X Y | up | leave");
    println!("  tool NAME | add-tool NAME GLYPH | color R G B");
    println!("  undo | redo | clear | export");
}
