use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use pathtext::{DrawCmd, FrameReport, PathGeometry, PathRenderer, RecordingSurface, SceneConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pathtext", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the animation up to a timestamp and dump the last frame's draw commands as JSON.
    Frame(FrameArgs),
    /// Print per-frame offset, path length and first glyph position.
    Sample(SampleArgs),
    /// Print the configured curve and word spans.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Timestamp of the frame to dump, in milliseconds from start.
    #[arg(long, default_value_t = 0.0)]
    time_ms: f64,

    /// Frame rate used to step the clock up to `time_ms`.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[arg(long, default_value_t = 10)]
    frames: u64,

    #[arg(long, default_value_t = 60.0)]
    fps: f64,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(serde::Serialize)]
struct FrameDump<'a> {
    time_ms: f64,
    report: FrameReport,
    commands: &'a [DrawCmd],
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn load(path: &std::path::Path) -> anyhow::Result<(SceneConfig, PathRenderer)> {
    let scene = SceneConfig::from_path(path)
        .with_context(|| format!("load scene '{}'", path.display()))?;
    let renderer = scene.build_renderer()?;
    Ok((scene, renderer))
}

fn frame_interval_ms(fps: f64) -> anyhow::Result<f64> {
    anyhow::ensure!(fps.is_finite() && fps > 0.0, "--fps must be positive, got {fps}");
    Ok(1000.0 / fps)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.time_ms.is_finite() && args.time_ms >= 0.0,
        "--time-ms must be non-negative, got {}",
        args.time_ms
    );
    let step = frame_interval_ms(args.fps)?;
    let (scene, mut renderer) = load(&args.in_path)?;
    let metrics = scene.metrics();
    let mut surface = RecordingSurface::default();

    renderer.start(0.0);
    let mut t = 0.0;
    let report = loop {
        surface.clear();
        let report = renderer
            .frame(t, &mut surface, &metrics)
            .context("renderer stopped mid-run")?;
        if t >= args.time_ms {
            break report;
        }
        t = (t + step).min(args.time_ms);
    };

    let dump = FrameDump {
        time_ms: t,
        report,
        commands: surface.commands(),
    };
    let json = serde_json::to_string_pretty(&dump).context("serialize frame")?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let step = frame_interval_ms(args.fps)?;
    let (scene, mut renderer) = load(&args.in_path)?;
    let metrics = scene.metrics();
    let mut surface = RecordingSurface::default();

    renderer.start(0.0);
    for i in 0..args.frames {
        let t = i as f64 * step;
        surface.clear();
        let report = renderer
            .frame(t, &mut surface, &metrics)
            .context("renderer stopped mid-run")?;
        let first = surface.commands().iter().find_map(|c| match c {
            DrawCmd::Glyph { transform, .. } => Some((transform[4], transform[5])),
            _ => None,
        });
        let first = match first {
            Some((x, y)) => format!("({x:.2}, {y:.2})"),
            None => "-".to_string(),
        };
        println!(
            "frame={i} t_ms={t:.1} offset={:.3} length={:.3} first={first}",
            report.offset.0, report.total_length
        );
    }
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let (_, renderer) = load(&args.in_path)?;
    let curve = renderer.curve();
    println!("family: {}", curve.kind_name());
    println!("length: {:.3}", curve.total_length());
    println!("closed: {}", curve.is_closed());
    println!("words: {}", renderer.words().len());
    for w in renderer.words() {
        println!(
            "  {:?} chars {}..={}",
            w.text, w.start_char_index, w.end_char_index
        );
    }
    Ok(())
}
