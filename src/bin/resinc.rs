use clap::Parser;
use moregen::include_list::{RESOURCES_DIR, write_include_list};
use moregen::output;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "resinc")]
#[command(about = "Write the AndroidResource include list of a Xamarin Android project")]
#[command(long_about = "\
Write the AndroidResource include list of a Xamarin Android project

Every file under <PROJECT>/Resources is listed, relative to the project root
with backslash separators, in an <ItemGroup> block written to
<TARGET>/ResourcesIncludeList.txt. Paste it into the .csproj file.")]
#[command(version)]
struct Cli {
    /// Project directory containing Resources/ (default: current directory)
    project: Option<PathBuf>,

    /// Directory to write ResourcesIncludeList.txt into (default: project)
    target: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let project = absolutize(cli.project.as_deref(), &cwd);
    let target = match cli.target.as_deref() {
        Some(t) => absolutize(Some(t), &cwd),
        None => project.clone(),
    };

    let (written, entries) = write_include_list(&project, &target)?;
    output::print_include_list_output(&project.join(RESOURCES_DIR), &written, &entries);
    Ok(())
}

fn absolutize(path: Option<&Path>, cwd: &Path) -> PathBuf {
    match path {
        None => cwd.to_path_buf(),
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => cwd.join(p),
    }
}
