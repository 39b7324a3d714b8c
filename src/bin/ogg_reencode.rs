use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use ogg_reencode::{
    engines::{preflight, ToolchainTranscoder},
    session::{BatchOptions, BatchSession, RunReport},
    ReencodeError,
};

const BANNER_RULE: &str = "==================================================";

#[derive(Parser, Debug)]
#[command(
    about = "Re-encode .ogg files in place with X-Ray engine compatible Vorbis headers (ffmpeg + oggenc)",
    version
)]
struct Args {
    /// Directory to process
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Descend into subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Do not ask for confirmation
    #[arg(short = 'y', long = "yes")]
    yes: bool,

    /// Print the run report as a single JSON line when done
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    println!("{}", BANNER_RULE);
    println!("OGG Re-encoder for X-Ray Engine");
    println!("Uses ffmpeg + oggenc");
    println!("{}", BANNER_RULE);

    if let Err(err) = preflight(&ToolchainTranscoder::tools()) {
        report_error(&err);
        return ExitCode::FAILURE;
    }

    println!();
    println!("Target: {}", absolute(&args.directory).display());
    println!("Recursive: {}", args.recursive);
    println!();

    let options = BatchOptions {
        root: args.directory.clone(),
        recursive: args.recursive,
        assume_yes: args.yes,
        temp_root: None,
    };
    let mut session = BatchSession::new(ToolchainTranscoder::new(), options);

    let report = match session.run(io::stdin().lock(), io::stdout().lock()) {
        Ok(report) => report,
        Err(err) => {
            report_error(&err);
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        if let Err(err) = send_report(&report) {
            log::warn!("Could not write JSON report: {}", err);
        }
    }

    ExitCode::SUCCESS
}

fn absolute(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn report_error(err: &ReencodeError) {
    match err {
        ReencodeError::ToolsMissing(tools) => {
            for tool in tools {
                eprintln!();
                eprintln!("[ERROR] {}!", tool);
                for hint in &tool.install_hints {
                    eprintln!("  {}", hint);
                }
            }
            eprintln!();
            eprintln!("Install the missing tools and make sure they are on your PATH.");
        }
        other => {
            eprintln!("[ERROR] {}", other);
            let mut source = other.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
        }
    }
}

fn send_report(report: &RunReport) -> Result<(), Box<dyn Error>> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, report)?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}
