use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "blockpyr", version)]
struct Cli {
    /// Log pipeline progress to stderr.
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decompose an image and write filtered layers, reconstruction and gallery PNGs.
    Decompose(DecomposeArgs),
    /// Render one gallery per strength, reusing a single decomposition.
    Sweep(SweepArgs),
}

#[derive(Args, Debug)]
struct SessionArgs {
    /// Input image (square, power-of-two side).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// Session options JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Coarsest blur level (defaults to log2 of the image side).
    #[arg(long)]
    max_level: Option<u32>,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct DecomposeArgs {
    #[command(flatten)]
    session: SessionArgs,

    /// Shrinkage strength (0..=100).
    #[arg(long)]
    strength: Option<u8>,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    #[command(flatten)]
    session: SessionArgs,

    /// Comma-separated strengths (0..=100).
    #[arg(long, value_delimiter = ',', required = true)]
    strengths: Vec<u8>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Decompose(args) => cmd_decompose(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn open_session(
    args: &SessionArgs,
    strength: Option<u8>,
) -> anyhow::Result<blockpyr::DecomposeSession> {
    let mut opts = match &args.config {
        Some(path) => blockpyr::SessionOpts::from_path(path)?,
        None => blockpyr::SessionOpts::default(),
    };
    if args.max_level.is_some() {
        opts.max_level = args.max_level;
    }
    if args.threads.is_some() {
        opts.threads = args.threads;
    }
    if let Some(s) = strength {
        opts.strength = s;
    }

    let source = blockpyr::load_image(&args.in_path)?;
    let sess = blockpyr::DecomposeSession::new(source, opts)
        .with_context(|| format!("decompose '{}'", args.in_path.display()))?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    Ok(sess)
}

fn cmd_decompose(args: DecomposeArgs) -> anyhow::Result<()> {
    let sess = open_session(&args.session, args.strength)?;
    let out_dir = &args.session.out_dir;

    for (i, layer) in sess.frame().layers.iter().enumerate() {
        blockpyr::save_png(layer, out_dir.join(format!("layer_{i:02}.png")))?;
    }
    blockpyr::save_png(
        &sess.frame().reconstruction,
        out_dir.join("reconstruction.png"),
    )?;
    write_gallery(&sess, &out_dir.join("gallery.png"))?;

    eprintln!(
        "wrote {} layers to {}",
        sess.frame().layers.len(),
        out_dir.display()
    );
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let mut sess = open_session(&args.session, None)?;
    let out_dir = &args.session.out_dir;

    for &strength in &args.strengths {
        sess.set_strength(strength)?;
        write_gallery(&sess, &out_dir.join(format!("gallery_s{strength:03}.png")))?;
    }

    eprintln!(
        "wrote {} galleries to {}",
        args.strengths.len(),
        out_dir.display()
    );
    Ok(())
}

fn write_gallery(sess: &blockpyr::DecomposeSession, path: &Path) -> anyhow::Result<()> {
    sess.gallery()?
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))
}
