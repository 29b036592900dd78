mod config;

use clap::{CommandFactory, Parser};
use config::{Command, Config};
use sim_decoder::{DecodeError, Decoder};
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Debug)]
enum Error {
    Decode(DecodeError),
    Output(std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Decode(err) => write!(f, "Could not decode instruction! {}", err),
            Error::Output(err) => write!(f, "Could not write output! {}", err),
        }
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::Decode(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Output(err)
    }
}

fn print_listing_line(
    out: &mut impl Write,
    offset: u64,
    bytes: &[u8],
    instruction: &impl Display,
) -> std::io::Result<()> {
    let mut b: String = bytes.iter().map(|b| format!("{:02X} ", b)).collect();
    for _ in bytes.len()..sim_decoder::MAX_INSTRUCTION_LEN {
        b.push_str("   ");
    }

    writeln!(out, "{:04X}  {} {}", offset, b, instruction)
}

/// Write every instruction in the stream as a line of text. Returns the number of instructions
/// written. On error, all the instructions before the bad one are written already.
fn disassemble<R: Read>(
    decoder: &mut Decoder<R>,
    out: &mut impl Write,
    listing: bool,
) -> Result<usize, Error> {
    let mut count = 0;

    while let Some(instruction) = decoder.next_instruction()? {
        if listing {
            print_listing_line(
                out,
                decoder.last_offset(),
                decoder.last_bytes(),
                &instruction,
            )?;
        } else {
            writeln!(out, "{}", instruction)?;
        }
        count += 1;
    }

    Ok(count)
}

fn run_sim8086(path: &Path, listing: bool) -> ExitCode {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            error!("Error opening file: {} ({})", path.display(), err);
            eprintln!("{}", Config::command().render_usage());
            return ExitCode::FAILURE;
        }
    };

    info!("Disassembling {}", path.display());

    let mut decoder = Decoder::new(BufReader::new(file));
    let mut out = BufWriter::new(std::io::stdout().lock());

    let result = disassemble(&mut decoder, &mut out, listing);
    let flushed = out.flush();

    match result.and_then(|count| flushed.map(|_| count).map_err(Error::from)) {
        Ok(count) => {
            info!(
                "Decoded {} instructions from {} bytes",
                count,
                decoder.position()
            );
            ExitCode::SUCCESS
        }
        Err(Error::Decode(err)) if err.is_internal() => {
            error!("Decoder defect, please report this input. {}", err);
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .init();

    match config.command {
        Command::Sim8086 { file, listing } => run_sim8086(&file, listing),
    }
}
