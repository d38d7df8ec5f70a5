//! plan-visualizer CLI entry point.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::LevelFilter;

use plan_visualizer::{build_site, ErrorKind, GenerateConfig};

/// Generate an interactive program sequence page from curriculum workbooks.
#[derive(Parser, Debug)]
#[command(
    name = "plan-visualizer",
    version,
    about = "Curriculum spreadsheets to an interactive program sequence web page"
)]
struct Cli {
    /// Course information workbook
    #[arg(long, default_value = "Courses.xlsx")]
    courses: PathBuf,

    /// Category and colour workbook
    #[arg(long, default_value = "Categories.xlsx")]
    categories: PathBuf,

    /// Plan sequencing workbook, one sheet per plan
    #[arg(long, default_value = "Sequences.xlsx")]
    sequences: PathBuf,

    /// Accreditation unit workbook
    #[arg(long)]
    accreditation: Option<PathBuf>,

    /// Department name (page title, accreditation filter)
    #[arg(short = 'd', long, default_value = "")]
    department: String,

    /// Page template with <!--@name--> anchors
    #[arg(short = 't', long, default_value = "template.html")]
    template: PathBuf,

    /// Existing output directory
    #[arg(short = 'o', long = "output", default_value = "output")]
    output_dir: PathBuf,

    /// Log debug detail (per-plan line counts, dropped requisites)
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

impl From<Cli> for GenerateConfig {
    fn from(cli: Cli) -> Self {
        GenerateConfig {
            courses: cli.courses,
            categories: cli.categories,
            sequences: cli.sequences,
            accreditation: cli.accreditation,
            department: cli.department,
            template: cli.template,
            output_dir: cli.output_dir,
        }
    }
}

fn init_logger(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    let config = GenerateConfig::from(cli);
    match build_site(&config) {
        Ok(_) => log::info!("Done: {}", config.output_dir.join("index.html").display()),
        Err(e) => {
            eprintln!("error: {e}");
            if e.kind() == ErrorKind::InternalAssertion {
                eprintln!("{e:#?}");
            }
            process::exit(1);
        }
    }
}
