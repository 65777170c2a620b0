use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pcm::{convert_file, Mode};

#[derive(Parser)]
#[command(name = "pcm")]
#[command(about = "Pack 22050 Hz 8-bit mono WAV audio into 1-bit PCM, or expand it back")]
#[command(version)]
struct Cli {
    /// Expand a packed PCM file back into a WAV
    #[arg(short, long)]
    decompress: bool,

    /// Enable debug output
    #[arg(short, long)]
    verbose: bool,

    /// Input file path
    infile: PathBuf,

    /// Output file path
    outfile: PathBuf,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and succeed; usage errors exit 1
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    init_logging(cli.verbose);

    let mode = Mode::from_decompress_flag(cli.decompress);
    info!(
        "{:?}: {} -> {}",
        mode,
        cli.infile.display(),
        cli.outfile.display()
    );
    convert_file(mode, &cli.infile, &cli.outfile)?;

    Ok(())
}
