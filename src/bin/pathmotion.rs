use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pathmotion", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render frames, masks and tracks into a directory.
    Render(RenderArgs),
    /// Export only the coordinate tracks.
    Tracks(TracksArgs),
}

#[derive(Parser, Debug)]
struct InputArgs {
    /// Path snapshot JSON (`{"paths": [...], "canvas_size": {...}}`).
    #[arg(long)]
    paths: PathBuf,

    /// Animation options JSON; absent fields use their defaults.
    #[arg(long)]
    params: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output directory for `frame_NNNN.png`, `mask_NNNN.png` and `tracks.json`.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct TracksArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output JSON file; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Tracks(args) => cmd_tracks(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_text(path: &Path, what: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {what} '{}'", path.display()))
}

fn load_session(input: &InputArgs) -> anyhow::Result<pathmotion::AnimationSession> {
    let params = match &input.params {
        Some(path) => pathmotion::AnimationParams::from_json(&read_text(path, "params")?)
            .with_context(|| format!("parse params JSON '{}'", path.display()))?,
        None => pathmotion::AnimationParams::default(),
    };
    let config = pathmotion::AnimationConfig::resolve(&params);
    let snapshot = pathmotion::PathSnapshot::parse(&read_text(&input.paths, "paths")?);
    Ok(pathmotion::AnimationSession::new(config, &snapshot))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let session = load_session(&args.input)?;

    let mut sink = pathmotion::PngSequenceSink::new(&args.out);
    let stats = session
        .render_into(&mut sink)
        .with_context(|| format!("render into '{}'", args.out.display()))?;

    let tracks_path = args.out.join("tracks.json");
    let json = pathmotion::tracks_to_json(&session.tracks())?;
    std::fs::write(&tracks_path, json)
        .with_context(|| format!("write tracks '{}'", tracks_path.display()))?;

    eprintln!("wrote {} frames to {}", stats.frames, args.out.display());
    Ok(())
}

fn cmd_tracks(args: TracksArgs) -> anyhow::Result<()> {
    let session = load_session(&args.input)?;
    let json = pathmotion::tracks_to_json(&session.tracks())?;

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, json)
                .with_context(|| format!("write tracks '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
