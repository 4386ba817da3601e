use clap::{Parser, Subcommand};
use rust_barscan::search::normalize;
use rust_barscan::tools::{batch_limit_from_env, dataset_iter, load_pixel_buffer, save_pixel_buffer};
use rust_barscan::utils::{invert, red_channel_range, rotate};
use rust_barscan::{Orientation, PixelBuffer, QrDecoder, ScanOutcome, Scanner, config, logger};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "barscan", version, about = "Orientation-agnostic barcode scanner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a single image, trying every rotation plain and inverted
    Scan {
        #[arg(long)]
        image: PathBuf,
        /// Print every decode attempt
        #[arg(long)]
        trace: bool,
    },
    /// Scan every image under a directory and report the hit rate
    Batch {
        #[arg(long)]
        root: PathBuf,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Write the buffer a given attempt would see, for inspection
    Transform {
        #[arg(long)]
        image: PathBuf,
        /// Clockwise rotation: 0, 90, 180 or 270
        #[arg(long, default_value_t = 0)]
        rotate: u16,
        #[arg(long)]
        invert: bool,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> ExitCode {
    logger::init_with_level(config::log_level());
    let cli = Cli::parse();

    match cli.command {
        Command::Scan { image, trace } => scan_cmd(&image, trace),
        Command::Batch { root, limit } => batch_cmd(&root, limit),
        Command::Transform {
            image,
            rotate,
            invert,
            out,
        } => transform_cmd(&image, rotate, invert, &out),
    }
}

fn load_or_report(image: &Path) -> Option<PixelBuffer> {
    match load_pixel_buffer(image) {
        Ok(buffer) => Some(buffer),
        Err(err) => {
            eprintln!("Failed to load image {}: {}", image.display(), err);
            None
        }
    }
}

fn scan_cmd(image: &Path, trace: bool) -> ExitCode {
    let Some(buffer) = load_or_report(image) else {
        return ExitCode::FAILURE;
    };
    println!("Image: {} ({}x{})", image.display(), buffer.width(), buffer.height());

    let scanner = Scanner::new(QrDecoder::new());
    let start = Instant::now();
    let traced = match scanner.scan_traced(&buffer) {
        Ok(traced) => traced,
        Err(fault) => {
            eprintln!("Scan failed: {}", fault);
            return ExitCode::FAILURE;
        }
    };
    let elapsed = start.elapsed();

    if trace {
        for (i, attempt) in traced.attempts.iter().enumerate() {
            println!(
                "  attempt {}: {:>4} inverted={:<5} -> {} symbols",
                i + 1,
                attempt.orientation.to_string(),
                attempt.inverted,
                attempt.symbols
            );
        }
    }

    match traced.outcome {
        ScanOutcome::Decoded(result) => {
            println!("{} ({:.2?})", result, elapsed);
            ExitCode::SUCCESS
        }
        ScanOutcome::NotFound => {
            println!("No barcode found ({:.2?}); try a sharper image", elapsed);
            ExitCode::from(2)
        }
    }
}

fn batch_cmd(root: &Path, limit: Option<usize>) -> ExitCode {
    if !root.exists() {
        eprintln!("Dataset root not found: {}", root.display());
        return ExitCode::FAILURE;
    }

    let images: Vec<PathBuf> = dataset_iter(root, limit.or_else(batch_limit_from_env)).collect();
    if images.is_empty() {
        println!("No images found under {}", root.display());
        return ExitCode::SUCCESS;
    }

    let scanner = Scanner::new(QrDecoder::new());
    let mut total = 0usize;
    let mut hits = 0usize;
    let mut total_elapsed = std::time::Duration::default();

    for path in images {
        let Some(buffer) = load_or_report(&path) else {
            continue;
        };
        total += 1;

        let start = Instant::now();
        let outcome = scanner.scan(&buffer);
        let elapsed = start.elapsed();
        total_elapsed += elapsed;

        let status = match outcome {
            Ok(ScanOutcome::Decoded(result)) => {
                hits += 1;
                format!("hit {}", result)
            }
            Ok(ScanOutcome::NotFound) => "miss".to_string(),
            Err(fault) => format!("error {}", fault),
        };
        println!("  [{}] {} -> {} ({:.2?})", total, path.display(), status, elapsed);
    }

    if total > 0 {
        let rate = hits as f64 / total as f64 * 100.0;
        println!("Reading rate: {}/{} = {:.2}%", hits, total, rate);
    }
    println!("Total time: {:.2?}", total_elapsed);
    ExitCode::SUCCESS
}

fn transform_cmd(image: &Path, degrees: u16, inverted: bool, out: &Path) -> ExitCode {
    let orientation = match Orientation::try_from(degrees) {
        Ok(o) => o,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    let Some(buffer) = load_or_report(image) else {
        return ExitCode::FAILURE;
    };

    let normalized = normalize(&buffer);
    let (lo, hi) = red_channel_range(&normalized);
    println!("Normalized range: {}-{}", lo, hi);

    let mut view = rotate(&normalized, orientation);
    if inverted {
        view = invert(&view);
    }

    match save_pixel_buffer(&view, out) {
        Ok(()) => {
            println!(
                "Wrote {} ({}x{}, {}, inverted={})",
                out.display(),
                view.width(),
                view.height(),
                orientation,
                inverted
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to write {}: {}", out.display(), err);
            ExitCode::FAILURE
        }
    }
}
