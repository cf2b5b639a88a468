use anyhow::{Context, Result};
use clap::{Parser, error::ErrorKind};
use datafetcher::{
    extract::extract_all,
    fetch::{Source, load_document},
    util::{DEFAULT_OUTPUT_DIR, ensure_dir, write_courses_csv},
};
use log::{info, warn};
use models::catalog::link;
use std::{
    fs,
    path::{Path, PathBuf},
};
use visualizer::graph::{DEFAULT_MAX_RANK, build};

/// Output file name
const OUTPUT_FILE: &str = "prereqs.dot";

/// Shown with `--help` and when no listing is given
const EXAMPLE_LISTING: &str = "An example course listing URL can be seen here:\n    http://www.washington.edu/students/crscat/cse.html";

/// Draws the prerequisite graph of a course catalog listing as Graphviz DOT
#[derive(Debug, Parser)]
#[command(
    name = "reqviz",
    version,
    after_help = EXAMPLE_LISTING
)]
struct Args {
    /// Course listing URL or local HTML file
    #[arg(env = "REQVIZ_LISTING")]
    listing: Source,

    /// Highest course level (leading digit of the number) to include
    #[arg(
        short = 'r',
        long,
        env = "REQVIZ_MAX_RANK",
        default_value_t = DEFAULT_MAX_RANK,
        value_parser = clap::value_parser!(u8).range(1..=8)
    )]
    max_rank: u8,

    /// Where to write the DOT description, `-` for stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the extracted courses to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

/// Where the DOT description goes
#[derive(Debug, PartialEq, Eq)]
enum Destination {
    Stdout,
    File(PathBuf),
}

impl Args {
    fn destination(&self) -> Destination {
        match &self.output {
            Some(path) if path.as_os_str() == "-" => Destination::Stdout,
            Some(path) => Destination::File(path.clone()),
            None => Destination::File(Path::new(DEFAULT_OUTPUT_DIR).join(OUTPUT_FILE)),
        }
    }
}

/// Extra text printed after a command line error
fn usage_hint(error: &clap::Error) -> Option<&'static str> {
    (error.kind() == ErrorKind::MissingRequiredArgument).then_some(EXAMPLE_LISTING)
}

/// Prints a command line error and exits with clap's status code
fn exit_with_usage(error: clap::Error) -> ! {
    let _ = error.print();
    if let Some(hint) = usage_hint(&error) {
        eprintln!("\n{hint}");
    }
    std::process::exit(error.exit_code())
}

/// Writes the rendered graph to a file, creating its directory if needed
fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

/// Fetches a listing, links its courses and writes the graph
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::try_parse().unwrap_or_else(|e| exit_with_usage(e));

    let document = load_document(&args.listing)
        .await
        .with_context(|| format!("failed to load course listing {}", args.listing))?;

    let extraction = extract_all(document.root());
    let skipped = extraction.skipped.len();
    let catalog = link(extraction.courses);
    if catalog.is_empty() {
        warn!("No course entries found in {}", args.listing);
    }
    let graph = build(&catalog, args.max_rank);

    info!(
        "Extracted {} courses ({skipped} skipped) with {} resolved prerequisites",
        catalog.len(),
        catalog.reference_count()
    );
    info!(
        "Drawing {} courses up to level {} with {} edges",
        graph.node_count(),
        args.max_rank,
        graph.edges.len()
    );

    if let Some(path) = &args.csv {
        let rows = write_courses_csv(path, &catalog)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Wrote {rows} courses to {}", path.display());
    }

    match args.destination() {
        Destination::Stdout => print!("{graph}"),
        Destination::File(path) => {
            write_output(&path, &graph.to_string())?;
            info!("Wrote {}", path.display());
        }
    }

    Ok(())
}
