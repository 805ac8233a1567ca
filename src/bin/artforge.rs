use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;

use artforge::{Generator, RenderConfig, render_batch};

#[derive(Parser, Debug)]
#[command(name = "artforge", version, about = "Generate procedural PNG artworks")]
struct Cli {
    /// Composition to run: train, rings, wander or lanes (any case).
    #[arg(default_value_t = Generator::Wander, value_parser = parse_generator)]
    generator: Generator,

    /// Number of images to write.
    #[arg(default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    num_images: u32,

    /// Tag appended to every file name (defaults to `vNA`).
    version_tag: Option<String>,

    /// JSON config file; command-line flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory (defaults to `../images`).
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Registry palette to use for every image.
    #[arg(long)]
    palette: Option<String>,
}

fn parse_generator(s: &str) -> Result<Generator, String> {
    s.parse()
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> anyhow::Result<RenderConfig> {
    let mut config = match &cli.config {
        Some(path) => RenderConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => RenderConfig::default(),
    };
    if let Some(w) = cli.width {
        config.width = w;
    }
    if let Some(h) = cli.height {
        config.height = h;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(dir) = &cli.out_dir {
        config.out_dir = dir.clone();
    }
    if let Some(tag) = &cli.version_tag {
        config.version_tag = tag.clone();
    }
    if let Some(name) = &cli.palette {
        config.palette = Some(name.clone());
    }
    Ok(config)
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = build_config(&cli)?;
    let report = render_batch(cli.generator, cli.num_images, &config)
        .context("render batch")?;

    for path in &report.written {
        println!("{}", path.display());
    }
    if report.all_failed() {
        eprintln!("artforge: no images were written ({} failed)", report.failed);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("artforge: {e:#}");
            ExitCode::FAILURE
        }
    }
}
