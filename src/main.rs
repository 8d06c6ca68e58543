//! strata's main application entry point and orchestration logic.
//! Handles command-line argument parsing and coordinates the merge and
//! render passes.

use strata::{
    cli::{get_args, Args},
    context::{build_context, inject_macros},
    error::{default_error_handler, Result},
    ignore::parse_ignore_file,
    processor::process_templates,
    renderer::MiniJinjaRenderer,
    values::{load_document, load_documents, merge, write_document},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Arguments
/// * `args` - Parsed command line arguments
///
/// # Returns
/// * `Result<()>` - Success or error status of the run
///
/// # Flow
/// 1. Loads the base values file and each override layer
/// 2. Deep-merges the layers into a single document
/// 3. Writes the merged document to the audit path
/// 4. Builds the rendering context and injects macro exports
/// 5. Renders every template file into the output directory
fn run(args: Args) -> Result<()> {
    log::info!("Loading and merging values files");
    let base = load_document(&args.base)?;
    let overrides = load_documents(&args.overrides)?;
    let merged = merge(&base, &overrides);

    write_document(&args.merged_output, &merged)?;
    log::info!("Merged values written to '{}'", args.merged_output.display());

    let engine = Box::new(MiniJinjaRenderer::new(&args.templates, &args.macros));
    let mut context = build_context(&merged)?;
    inject_macros(&*engine, &args.macros, &mut context)?;

    let ignored = parse_ignore_file(&args.templates)?;

    log::info!("Rendering templates from '{}'", args.templates.display());
    process_templates(&*engine, &args.templates, &args.output_dir, &context, &ignored)?;

    println!("Rendering completed successfully in {}.", args.output_dir.display());
    Ok(())
}
