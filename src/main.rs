use clap::Parser;
use moregen::imaging::RustBackend;
use moregen::resolve::{Mode, resolve_plan};
use moregen::{config, output, pipeline};
use std::error::Error;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "moregen")]
#[command(about = "Generate iOS and Android image resources and app icons from a single PNG")]
#[command(long_about = "\
Generate iOS and Android image resources and app icons from a single PNG

Source images are treated as Android xxxhdpi (4x) artwork. Each one is fanned
out to every Apple scale and Android density:

  target/
  ├── iOS/
  │   └── logo.imageset/           # Contents.json, logo.png, logo@2x.png, logo@3x.png
  └── Android/
      ├── drawable/logo.png        # mdpi
      ├── drawable-hdpi/logo.png
      ├── drawable-xhdpi/logo.png
      ├── drawable-xxhdpi/logo.png
      └── drawable-xxxhdpi/logo.png

Sources:
  (none)        every *.png in the current directory
  <directory>   every *.png in that directory
  <file>        that file only

With --appicon a single square source (at least 1024x1024) becomes the full
iOS AppIcon.appiconset and Android mipmap launcher icons. Without a file
argument the source directory must contain exactly one PNG.

Output goes to the source directory unless <TARGET> is given.

Run 'moregen --gen-config' to print a documented moregen.toml.")]
#[command(version)]
struct Cli {
    /// Generate app icons instead of resources (legacy spelling: -ai)
    #[arg(long, visible_alias = "ai")]
    appicon: bool,

    /// Config file (default: moregen.toml in the source directory, if present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print a stock moregen.toml with all options documented, then exit
    #[arg(long)]
    gen_config: bool,

    /// Source PNG file or directory of PNGs
    source: Option<PathBuf>,

    /// Target directory
    target: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Accept the single-dash `-ai` spelling of `--appicon`.
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| {
            if arg == "-ai" {
                OsString::from("--appicon")
            } else {
                arg
            }
        })
        .collect()
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if cli.gen_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let cwd = std::env::current_dir()?;
    let mode = if cli.appicon {
        Mode::AppIcon
    } else {
        Mode::Resources
    };
    let plan = resolve_plan(mode, cli.source.as_deref(), cli.target.as_deref(), &cwd)?;
    let config = config::load_config(cli.config.as_deref(), &plan.source_root)?;

    output::print_plan(&plan);
    let summary = pipeline::run(&RustBackend::new(), &plan, &config, &mut |event| {
        output::print_generate_event(&event)
    })?;
    output::print_summary(&summary);

    Ok(())
}
