use crate::router::{Resolution, RouteTable};
use anyhow::{Context, Result};
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub path: String,
}

/// Resolve a path against the app routes and print the view.
/// # Errors
/// Returns an error if the path matches no route.
pub fn execute(args: &Args) -> Result<()> {
    let resolution = RouteTable::app()
        .resolve(&args.path)
        .with_context(|| format!("cannot navigate to {}", args.path))?;

    debug!("resolved {} via {:?}", args.path, resolution.redirected_from);

    println!("{}", describe(&resolution));

    Ok(())
}

fn describe(resolution: &Resolution) -> String {
    if resolution.redirected_from.is_empty() {
        format!("{} -> {}", resolution.path, resolution.view)
    } else {
        format!(
            "{} => {} -> {}",
            resolution.redirected_from.join(" => "),
            resolution.path,
            resolution.view
        )
    }
}
