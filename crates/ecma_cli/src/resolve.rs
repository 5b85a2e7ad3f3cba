//! Module specifier resolution command

use anyhow::{bail, Result};
use ecma_path::{HostPathResolver, ModuleResolver};

/// Run the resolve command with the given arguments
pub fn run(args: &[String]) -> Result<()> {
    println!("{}", resolve(args)?);
    Ok(())
}

fn resolve(args: &[String]) -> Result<String> {
    let [specifier, base_dir] = args else {
        bail!("resolve requires a specifier and a base directory: ecma resolve <specifier> <base_dir>");
    };
    Ok(HostPathResolver.resolve(specifier, base_dir))
}
