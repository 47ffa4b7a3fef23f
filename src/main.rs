use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::{warn, Level};

use snaplabel::input::{read_piped_snapshot, read_snapshot_file, ImageInput};
use snaplabel::render::{JsonRenderer, PngChartRenderer, RendererSet, TerminalRenderer};
use snaplabel::{run_batch, ModelConfig, ModelProvider};

#[derive(Parser)]
#[command(name = "snaplabel")]
#[command(about = "Classify images with a pretrained ImageNet model")]
struct Cli {
    /// Path to the rten model file
    #[arg(long, value_name = "FILE", global = true)]
    model: Option<PathBuf>,

    /// Path to the class label file (one label per line)
    #[arg(long, value_name = "FILE", global = true)]
    labels: Option<PathBuf>,

    /// Number of ranked classes to show per image
    #[arg(long, default_value_t = 5, global = true)]
    top_k: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Also write a PNG bar chart per image into this directory
    #[arg(long, value_name = "DIR", global = true)]
    chart_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze uploaded image files (jpg, jpeg, png) in order
    Classify {
        #[arg(value_name = "IMAGE")]
        images: Vec<PathBuf>,

        /// Choose files with a native file dialog
        #[cfg(feature = "picker")]
        #[arg(long)]
        pick: bool,
    },
    /// Analyze a single camera snapshot
    Capture {
        /// Snapshot file; reads from stdin when omitted or "-"
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "picker")]
fn pick_files() -> Vec<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select images to classify")
        .add_filter("Images", &snaplabel::input::ACCEPTED_EXTENSIONS)
        .pick_files()
        .unwrap_or_default()
}

fn collect_inputs(command: Command) -> anyhow::Result<Vec<ImageInput>> {
    match command {
        Command::Classify {
            images,
            #[cfg(feature = "picker")]
            pick,
        } => {
            #[cfg(feature = "picker")]
            let images = if pick {
                let mut images = images;
                images.extend(pick_files());
                images
            } else {
                images
            };

            Ok(images.into_iter().map(ImageInput::file).collect())
        }
        Command::Capture { input } => {
            let snapshot = match input {
                Some(path) if path.as_os_str() != "-" => read_snapshot_file(&path)?,
                _ => {
                    let snapshot = read_piped_snapshot(std::io::stdin().lock(), "camera snapshot")?;
                    if snapshot.is_none() {
                        warn!("No snapshot captured; pipe image bytes to stdin or pass --input FILE");
                    }
                    snapshot
                }
            };
            Ok(snapshot.into_iter().collect())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let mut config = ModelConfig::default().with_top_k(args.top_k);
    if let Some(model) = args.model {
        config = config.with_model_path(model);
    }
    if let Some(labels) = args.labels {
        config = config.with_labels_path(labels);
    }

    let mut renderers = RendererSet::new();
    renderers = match args.format {
        Format::Text => renderers.add(Box::new(TerminalRenderer::new(std::io::stdout()))),
        Format::Json => renderers.add(Box::new(JsonRenderer::new(std::io::stdout()))),
    };
    if let Some(dir) = args.chart_dir {
        renderers = renderers.add(Box::new(PngChartRenderer::new(dir)?));
    }

    let inputs = collect_inputs(args.command)?;
    let provider = ModelProvider::from_config(config);

    let summary = run_batch(inputs, &provider, &mut renderers)?;

    if summary.failed > 0 {
        anyhow::bail!(
            "{} of {} images could not be classified",
            summary.failed,
            summary.total
        );
    }

    Ok(())
}
