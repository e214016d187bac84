use std::ffi::OsString;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use barcode_creator::{Defaults, DefaultRenderer, RenderPath, Renderer, dispatch, validate};

use super::args::CliArgs;
use super::errors::AppError;
use super::usage;

pub fn run<I, T>(argv: I) -> Result<RenderPath, AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    run_with(argv, &DefaultRenderer)
}

pub fn run_with<I, T>(argv: I, renderer: &dyn Renderer) -> Result<RenderPath, AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = CliArgs::try_parse_from(argv)?;

    if args.verbose {
        // A subscriber may already be installed when embedded or under test.
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    let defaults = match &args.defaults {
        Some(path) => {
            debug!("Loading defaults from {:?}", path);
            Defaults::from_json_file(path).map_err(AppError::Config)?
        }
        None => Defaults::default(),
    };

    let raw = args.into_raw(&defaults);
    let request = validate(&raw).map_err(AppError::Usage)?;
    let path = dispatch(&request, renderer)?;
    info!("Successfully created {:?}", request.output_path);
    Ok(path)
}

/// Print the failure the way the user needs to see it.
pub fn report(program: &str, error: &AppError) {
    match error {
        AppError::Usage(failure) => usage::present(program, Some(failure)),
        AppError::Args(e) if error.is_version() => print!("{}", e.render()),
        AppError::Args(e) => {
            eprintln!("{}", e.render());
            usage::present(program, None);
        }
        AppError::Config(e) | AppError::Render(e) => eprintln!("Error: {}", e),
    }
}
