//! `ecma` - command line front end of the ECMAScript editor bridge
//!
//! Exposes declaration export, module path resolution and the editor
//! helpers outside the editor, for build scripts and debugging.

mod classes;
mod dts;
mod editor;
mod resolve;
mod template;

use anyhow::{bail, Result};
use std::env;

fn main() -> Result<()> {
    // ECMA_LOG configures the log level, default "info"
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env("ECMA_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "dts" => dts::run(rest),
        "resolve" => resolve::run(rest),
        "classes" => classes::run(rest),
        "template" => template::run(rest),
        "editor-args" => editor::run(rest),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => bail!("Unknown command: {}. Run `ecma help` for usage.", other),
    }
}

fn print_usage() {
    println!(
        "\
ecma - ECMAScript editor bridge tools

USAGE:
    ecma <COMMAND> [ARGS]

COMMANDS:
    dts <model.json> [-o FILE] [--module NAME] [--mkdir]
        Write the TypeScript declaration file for a class documentation model
    resolve <specifier> <base_dir>
        Resolve a relative module specifier against a directory
    classes <model.json> [--filter TEXT]
        List the classes a declaration file would contain
    template <ClassName> <BaseClass>
        Print a new script class
    editor-args <script_path> --flags STRING [--line N] [--col N] [--project DIR]
        Print the argument list passed to an external editor, one per line
    help
        Show this message

ENVIRONMENT:
    ECMA_LOG    Log filter, e.g. debug or ecma_weld=trace (default: info)"
    );
}
