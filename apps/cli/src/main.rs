use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use oem_event_core::{EventSink, ManagerConfig, MemorySink, NullSink, OemEventManager};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "PLDM OEM sensor event decoder", long_about = None)]
struct Args {
    /// Hex-encoded sensor event messages (formatVersion, TID, eventClass, event data)
    frames: Vec<String>,

    /// Read hex frames from a file, one per line ('#' starts a comment)
    #[arg(long)]
    file: Option<String>,

    /// TID of the endpoint that raised the events
    #[arg(long, default_value_t = 1)]
    tid: u8,

    /// PLDM event message format version
    #[arg(long, default_value_t = 1)]
    format_version: u8,

    /// Offset of the sensor event data within each frame
    #[arg(long, default_value_t = 3)]
    offset: usize,

    /// Path to a TOML manager configuration
    #[arg(long)]
    config: Option<String>,

    /// Emit records to the journal instead of printing them
    #[arg(long, conflicts_with = "check")]
    journal: bool,

    /// Only validate frames, discard records
    #[arg(long)]
    check: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(if args.verbose {
                    tracing::Level::DEBUG.into()
                } else {
                    tracing::Level::INFO.into()
                })
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    match run(&args) {
        Ok(0) => {}
        Ok(failed) => {
            error!("{} frame(s) rejected", failed);
            std::process::exit(1);
        }
        Err(e) => {
            error!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<usize> {
    let config = match &args.config {
        Some(path) => ManagerConfig::load_from_file(path)
            .with_context(|| format!("loading config {}", path))?,
        None => ManagerConfig::default(),
    };

    let frames = collect_frames(args)?;
    if frames.is_empty() {
        bail!("no frames given");
    }
    info!(count = frames.len(), "Decoding sensor events");

    if args.journal {
        let manager = OemEventManager::new(config);
        Ok(process(&manager, args, &frames, |_| {}))
    } else if args.check {
        let manager = OemEventManager::with_sink(config, Arc::new(NullSink));
        Ok(process(&manager, args, &frames, |_| {}))
    } else {
        let manager = OemEventManager::with_sink(config, Arc::new(MemorySink::new()));
        Ok(process(&manager, args, &frames, |sink: &MemorySink| {
            for entry in sink.entries() {
                println!("  {}", entry);
            }
            sink.clear();
        }))
    }
}

/// Feed every frame through the manager; returns the number rejected.
fn process<S: EventSink>(
    manager: &OemEventManager<S>,
    args: &Args,
    frames: &[Vec<u8>],
    after_frame: impl Fn(&S),
) -> usize {
    let mut failed = 0;
    for (i, frame) in frames.iter().enumerate() {
        let rc = manager.handle_sensor_event(
            frame,
            frame.len(),
            args.format_version,
            args.tid,
            args.offset,
        );
        println!("frame {}: {} bytes, status 0x{:02X}", i, frame.len(), rc);
        after_frame(manager.sink().as_ref());
        if rc != 0 {
            failed += 1;
        }
    }
    failed
}

fn collect_frames(args: &Args) -> Result<Vec<Vec<u8>>> {
    let mut lines: Vec<String> = args.frames.clone();
    if let Some(path) = &args.file {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
        lines.extend(content.lines().map(str::to_string));
    }

    lines
        .iter()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .map(|line| {
            let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
            hex::decode(&compact).with_context(|| format!("invalid hex frame: {}", line))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_frames_skips_comments() {
        let args = Args::parse_from([
            "oem-event",
            "01 01 00 af 00 02 00 00 04 81 93 00 00",
            "# boot overall failure",
            "010100AF000100 # trailing",
        ]);
        let frames = collect_frames(&args).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].len(), 13);
        assert_eq!(frames[1], vec![0x01, 0x01, 0x00, 0xAF, 0x00, 0x01, 0x00]);
    }

    #[test]
    fn test_collect_frames_rejects_bad_hex() {
        let args = Args::parse_from(["oem-event", "zz"]);
        assert!(collect_frames(&args).is_err());
    }

    #[test]
    fn test_process_counts_rejected_frames() {
        let args = Args::parse_from(["oem-event", "--check"]);
        let manager =
            OemEventManager::with_sink(ManagerConfig::default(), Arc::new(MemorySink::new()));
        let frames = vec![
            hex::decode("010100AF000200000481930000").unwrap(),
            vec![0x01, 0x01, 0x00, 0xAF],
        ];

        let failed = process(&manager, &args, &frames, |_| {});
        assert_eq!(failed, 1);
        assert_eq!(manager.sink().len(), 1);
    }
}
