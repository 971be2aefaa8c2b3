use clap::Parser;
use std::path::PathBuf;
use std::process;

mod artwork;
mod icon_render;

#[derive(Debug, Parser)]
#[clap(
    name = "default-icon-gen",
    about = "Render the default application icon and write it as a 1024x1024 PNG"
)]
struct Args {
    /// Destination file path for the generated PNG.
    #[clap(value_name = "OUTPUT", default_value = "assets/icons/AppIcon-1024.png")]
    output: PathBuf,
}

fn main() {
    let args = Args::parse();

    if let Err(err) = icon_render::render(&args.output) {
        eprintln!("{err:#}");
        process::exit(1);
    }

    println!("Generated default icon at {}", args.output.display());
}
