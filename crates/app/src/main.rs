use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use wavesplit_audio::{write_clip, WavFile};
use wavesplit_foundation::AudioError;
use wavesplit_vad::{ScanConfig, Segment, SegmentScanner};

#[derive(Parser, Debug)]
#[command(name = "wavesplit")]
#[command(version)]
#[command(about = "Split a mono WAV file at silences into per-section clips")]
struct Cli {
    /// Path to the input WAV file
    file: PathBuf,

    /// Activation threshold (mean absolute normalized amplitude)
    threshold: f32,

    /// Minimal duration in seconds to accept a break between sections
    duration: f64,

    /// Directory for the extracted clips (defaults to the input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

fn init_logging() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_level).init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let wav = WavFile::open(&cli.file)
        .with_context(|| format!("failed to open {}", cli.file.display()))?;
    let spec = *wav.spec();
    if spec.channels != 1 {
        return Err(AudioError::NotMono {
            channels: spec.channels,
        }
        .into());
    }

    let config = ScanConfig::from_duration_secs(cli.threshold, cli.duration, spec.sample_rate);
    println!("threshold {} duration {}", config.threshold, config.block_frames);

    let segments = SegmentScanner::new(config).scan(wav.data(), &spec)?;
    println!("{}", render_segments(&segments));
    info!("Detected {} active sections", segments.len());

    if let Some(dir) = &cli.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    for (index, segment) in segments.iter().enumerate() {
        let path = clip_path(&cli.file, cli.output_dir.as_deref(), index)?;
        let bytes = wav.read_frames(segment.start, segment.frames());
        write_clip(&path, &spec, bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Wrote {} ({} frames)", path.display(), segment.frames());
    }

    Ok(())
}

fn render_segments(segments: &[Segment]) -> String {
    let rendered: Vec<String> = segments.iter().map(Segment::to_string).collect();
    format!("[{}]", rendered.join(", "))
}

/// Clip paths take the input's stem plus a zero-based section index.
fn clip_path(input: &Path, output_dir: Option<&Path>, index: usize) -> anyhow::Result<PathBuf> {
    let stem = input
        .file_stem()
        .ok_or_else(|| anyhow::anyhow!("input path has no file name"))?;
    let mut name = stem.to_os_string();
    name.push(format!("_{index}.wav"));

    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    Ok(dir.join(name))
}
