use crate::args::Args;
use clap::Parser;
use eyre::WrapErr;
use sprigc::SprigC;
use std::io::stdout;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, trace};
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::format;
use tracing_subscriber::prelude::*;
use tracing_subscriber::Registry;

mod args;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.logging().log_level_filter())?;
    trace!("starting sprigc with args: {args:?}");
    debug!("sprigc version: {}", env!("CARGO_PKG_VERSION"));

    run(&args)
}

/// Compiles the source named by `args`, writing the program to the requested output
fn run(args: &Args) -> eyre::Result<()> {
    let sprigc = SprigC::builder().build()?;

    match &args.output {
        None => {
            let source = std::fs::read_to_string(&args.source)
                .wrap_err_with(|| format!("could not read source file {:?}", args.source))?;
            sprigc.transpile_to(&source, stdout().lock())?;
        }
        Some(output) => {
            let program = sprigc.transpile_file(&args.source)?;
            std::fs::write(output, format!("{program}\n"))
                .wrap_err_with(|| format!("could not write {output:?}"))?;
            info!("wrote {output:?}");
        }
    }

    Ok(())
}

fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format().with_target(false))
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Args {
        Args::try_parse_from(items).expect("could not parse test args")
    }

    #[test]
    fn test_run_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("example");
        let output = dir.path().join("example.js");
        std::fs::write(&source, "def f(x, y) add(x, y) end").unwrap();

        run(&args(&[
            "sprigc",
            source.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]))
        .expect("should compile");

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "const add = (x,y) => x + y;\nconst f = (x,y) => add(x,y);\nconsole.log(f(1, 2));\n"
        );
    }

    #[test]
    fn test_run_syntax_error_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("example");
        let output = dir.path().join("example.js");
        std::fs::write(&source, "def f(x x end").unwrap();

        let err = run(&args(&[
            "sprigc",
            source.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]))
        .expect_err("source is missing a close paren");
        assert!(err.to_string().contains("expected `)`"), "unexpected error: {err}");
        assert!(!output.exists());
    }

    #[test]
    fn test_run_ignores_environment() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("example");
        let output = dir.path().join("example.js");
        std::fs::write(&source, "def zero() 0 end").unwrap();

        std::env::set_var("SPRIGC_PREAMBLE", "// overridden");
        let result = run(&args(&[
            "sprigc",
            source.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]));
        std::env::remove_var("SPRIGC_PREAMBLE");
        result.expect("should compile");

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written.lines().next(), Some(sprigc::DEFAULT_PREAMBLE));
    }

    #[test]
    fn test_run_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("missing");
        let output = dir.path().join("out.js");
        assert!(run(&args(&[
            "sprigc",
            source.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]))
        .is_err());
    }
}
