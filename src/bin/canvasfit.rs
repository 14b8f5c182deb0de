use canvasfit::{args::Cli, cf_err, error::CanvasError, init::init};
use clap::Parser;

fn main() {
    init();
    if let Err(e) = real_main() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), CanvasError> {
    let plan = Cli::parse().into_plan()?;
    // skipped images have already been logged one by one
    let report = plan.execute()?;
    if report.processed.is_empty() {
        return Err(cf_err!("no images were processed successfully"));
    }
    Ok(())
}
