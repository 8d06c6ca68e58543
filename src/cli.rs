//! Command-line interface implementation for strata.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for strata.
/// None of these flags affect merge semantics; they only select paths.
#[derive(Parser, Debug)]
#[command(author, version, about = "strata: layered values rendering for Terraform configurations", long_about = None)]
pub struct Args {
    /// Base values file, the lowest-precedence layer
    #[arg(long, value_name = "FILE")]
    pub base: PathBuf,

    /// Override values files, applied in order; later files win
    #[arg(long = "values", value_name = "FILE")]
    pub overrides: Vec<PathBuf>,

    /// Directory of template files to render
    #[arg(long, value_name = "DIR")]
    pub templates: PathBuf,

    /// Directory containing reusable macro definitions
    #[arg(long, value_name = "DIR", default_value = "macros")]
    pub macros: PathBuf,

    /// Path where the merged values document is written
    #[arg(long, value_name = "FILE", default_value = "combined_values.yaml")]
    pub merged_output: PathBuf,

    /// Directory where rendered files are written
    #[arg(long, value_name = "DIR", default_value = "rendered")]
    pub output_dir: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
