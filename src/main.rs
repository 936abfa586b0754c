use std::{
    env,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use scanner::{
    errors::errors::{Error, ErrorImpl},
    init_tracing,
    lexer::lexer::ScannerConfig,
    reader::reader::Reader,
    render_diagnostic, scan, Position,
};
use tracing::info;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("usage: scanner <input.kpl> [output]");
        return ExitCode::FAILURE;
    }

    let input = PathBuf::from(&args[1]);
    let output = args.get(2).map(PathBuf::from);

    match run(&input, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", render_diagnostic(&error, &[], &input.to_string_lossy()));
            ExitCode::FAILURE
        }
    }
}

fn run(input: &Path, output: Option<PathBuf>) -> Result<(), Error> {
    let start = Instant::now();
    let config = ScannerConfig::default();

    // The output file is only created once the input is known to be readable.
    let reader = Reader::open(input)?;
    let source = reader.source();

    let diagnostics = match output {
        Some(path) => {
            let file = File::create(&path).map_err(output_error)?;
            let mut sink = BufWriter::new(file);
            let diagnostics = scan(source, &mut sink, config)?;
            sink.flush().map_err(output_error)?;
            diagnostics
        }
        None => {
            let stdout = io::stdout();
            let mut sink = stdout.lock();
            scan(source, &mut sink, config)?
        }
    };

    info!(elapsed = ?start.elapsed(), "scanned {}", input.display());

    let file = input.to_string_lossy();
    for error in diagnostics.errors() {
        eprintln!("{}", render_diagnostic(error, source, &file));
    }

    Ok(())
}

fn output_error(err: io::Error) -> Error {
    Error::new(
        ErrorImpl::OutputFailure {
            reason: err.to_string(),
        },
        Position::default(),
    )
}
