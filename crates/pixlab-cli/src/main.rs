use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixlab::color::AdaptiveThresholdOptions;
use pixlab::{ImageProcessor, Operation, TransformOptions};

#[derive(Parser)]
#[command(name = "pixlab")]
#[command(about = "Apply a deterministic transform to an image")]
struct Cli {
    /// Input image (png, jpg, jpeg, gif, tif, bmp, pcx)
    input: PathBuf,

    /// Operation id: global_threshold, adaptive_threshold, negative,
    /// linear_contrast, multiply_by_constant or power_of_2. Other ids
    /// pass the image through
    #[arg(short = 'p', long)]
    op: Option<String>,

    /// Output PNG file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print original and processed images as data URLs
    #[arg(long)]
    data_url: bool,

    /// Factor for multiply_by_constant
    #[arg(short, long, default_value_t = 2.0)]
    factor: f32,

    /// Neighborhood side for adaptive_threshold (odd, >= 3)
    #[arg(short, long, default_value_t = 11)]
    block_size: u32,

    /// Constant subtracted from the local mean in adaptive_threshold
    #[arg(short = 'c', long, default_value_t = 2.0, allow_hyphen_values = true)]
    offset: f32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let options = TransformOptions {
        multiply_factor: cli.factor,
        adaptive: AdaptiveThresholdOptions {
            block_size: cli.block_size,
            c: cli.offset,
            ..Default::default()
        },
    };
    let processor = ImageProcessor::open(&cli.input, options)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;

    let op = Operation::from_id(cli.op.as_deref());
    tracing::info!(
        input = %cli.input.display(),
        op = %op,
        width = processor.original().width(),
        height = processor.original().height(),
        "loaded image"
    );

    let result = processor.apply(op)?;
    if let Some(output) = &cli.output {
        pixlab::io::write_image(&result, output)
            .with_context(|| format!("failed to write {}", output.display()))?;
        tracing::info!(output = %output.display(), "wrote result");
    }

    if cli.data_url || cli.output.is_none() {
        let pair = processor.pair_with(op, &result)?;
        println!("{}", pair.original);
        println!("{}", pair.processed);
    }

    Ok(())
}
