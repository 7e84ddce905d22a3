use std::path::{Path, PathBuf};

use anyhow::Context;
use square_pad::{ApplicationError, Color, PaddedImage};
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "square_pad", about = "Pad an icon onto a centered square canvas")]
struct Args {
    /// image to pad
    #[structopt(parse(from_os_str), default_value = "logo-assets/logoonly.png")]
    source: PathBuf,

    /// where to write the square icon, format follows the extension
    #[structopt(parse(from_os_str), default_value = "logo-assets/icon_square.png")]
    destination: PathBuf,

    /// fill color as r,g,b[,a] or #RRGGBB[AA]
    // Parsed in `run` so a bad color is reported like any other failure.
    #[structopt(default_value = "255,255,255,255")]
    fill_color: String,
}

fn run(source: &Path, destination: &Path, fill_color: &str) -> anyhow::Result<PaddedImage> {
    let fill_color: Color = fill_color.parse().context("Reading fill color")?;
    let padded = square_pad::pad_to_square(source, destination, fill_color).with_context(|| {
        format!("Padding {} into {}", source.display(), destination.display())
    })?;
    Ok(padded)
}

/// The one line printed for an outcome.
fn report(result: &anyhow::Result<PaddedImage>, destination: &Path) -> String {
    match result {
        Ok(_) => format!("Created square image at {}", destination.display()),
        Err(e) => match e.downcast_ref::<ApplicationError>() {
            Some(ApplicationError::SourceNotFound(path)) => {
                format!("File not found: {}", path.display())
            }
            _ => format!("Error processing image: {:#}", e),
        },
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::from_args();
    let result = run(&args.source, &args.destination, &args.fill_color);
    match &result {
        Ok(padded) => log::info!("Icon is {}x{} {:?}", padded.side(), padded.side(), padded.format),
        Err(e) => log::debug!("{:?}", e),
    }

    // Every outcome is reported on stdout and the process exits normally.
    println!("{}", report(&result, &args.destination));
}
