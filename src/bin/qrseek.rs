use clap::{Parser, Subcommand};
use qrseek::{ScanOutcome, SourceImage, payload};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrseek", version, about = "Scan images for QR codes with a transform retry cascade")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan an image file and print the decoded payload
    Scan {
        #[arg(long)]
        image: PathBuf,
        /// Print this URL instead when the payload is not a PDF link
        #[arg(long)]
        fallback_url: Option<String>,
    },
    /// Print the default transform schedule in attempt order
    Schedule,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Scan {
            image,
            fallback_url,
        } => scan_cmd(&image, fallback_url.as_deref()),
        Command::Schedule => schedule_cmd(),
    }
}

fn scan_cmd(image: &Path, fallback_url: Option<&str>) -> ExitCode {
    let img = match image::open(image) {
        Ok(img) => img,
        Err(err) => {
            eprintln!("Failed to load image {}: {}", image.display(), err);
            return ExitCode::FAILURE;
        }
    };
    let source = SourceImage::from_image(&img);

    let scanner = qrseek::default_scanner();
    let (outcome, telemetry) = scanner.scan_with_telemetry(&source);
    match outcome {
        ScanOutcome::Succeeded(decoded) => {
            println!("QR code detected after {} attempt(s): {}", telemetry.attempts, decoded);
            if payload::looks_like_pdf(&decoded) {
                println!("PDF link: {decoded}");
            } else if let Some(fallback) = fallback_url {
                println!("Not a PDF link, using fallback: {fallback}");
            } else {
                println!("Not a PDF link");
            }
            ExitCode::SUCCESS
        }
        ScanOutcome::Exhausted => {
            eprintln!(
                "No QR code found in {} after {} attempt(s)",
                image.display(),
                telemetry.attempts
            );
            ExitCode::FAILURE
        }
        ScanOutcome::Cancelled => ExitCode::FAILURE,
    }
}

fn schedule_cmd() -> ExitCode {
    let scanner = qrseek::default_scanner();
    for (i, t) in scanner.schedule().iter().enumerate() {
        println!(
            "  {}: scale={:.2} brightness={:+}% contrast={}%",
            i + 1,
            t.scale,
            t.brightness,
            t.contrast
        );
    }
    ExitCode::SUCCESS
}
