mod args;

use args::{BlockArgs, Cli, Commands};
use clap::Parser;

use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use teap::harness;
use teap::{Cipher, Key};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] std::num::ParseIntError),

    #[error("invalid hex: expected an even number of hex digits, got {len} characters")]
    MalformedHex { len: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Tea(#[from] teap::Error),
}

fn main() -> ExitCode {
    match tea_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn tea_cli() -> Result<(), CliError> {
    let args = Cli::parse();

    match args.command {
        Commands::Encrypt(block_args) => {
            let (cipher, block) = load_block_args(block_args)?;
            let ciphertext = cipher.encrypt_slice(&block)?;
            println!("{}", to_hex(&ciphertext));
            Ok(())
        }
        Commands::Decrypt(block_args) => {
            let (cipher, block) = load_block_args(block_args)?;
            let plaintext = cipher.decrypt_slice(&block)?;
            println!("{}", to_hex(&plaintext));
            Ok(())
        }
        Commands::GenKey(gen_args) => {
            let key = Key::rand_key()?;
            let bytes = key.to_bytes();
            if let Some(path) = gen_args.output {
                fs::write(path, bytes)?;
            }
            println!("{}", to_hex(&bytes));
            Ok(())
        }
        Commands::SelfTest(opts) => {
            let start = Instant::now();

            let report = if opts.parallel {
                harness::run_parallel(&harness::VECTORS)
            } else {
                harness::run_serial(&harness::VECTORS)
            };

            let duration = start.elapsed();

            for mismatch in report.mismatches() {
                eprintln!("FAIL {mismatch}");
            }
            println!(
                "Checked {} vectors ({} checks) in {} ms: {} failed",
                report.vectors(),
                report.checks(),
                duration.as_millis(),
                report.mismatches().len()
            );

            report.into_result()?;
            Ok(())
        }
    }
}

fn load_block_args(args: BlockArgs) -> Result<(Cipher, Vec<u8>), CliError> {
    // clap guarantees exactly one of --key / --key-file
    let key_bytes = match (args.key, args.key_file) {
        (Some(hex), _) => parse_hex(&hex)?,
        (None, Some(path)) => fs::read(path)?,
        (None, None) => Vec::new(),
    };
    let key = Key::try_from_slice(&key_bytes)?;
    let block = parse_hex(&args.block)?;
    Ok((Cipher::new(&key), block))
}

fn parse_hex(s: &str) -> Result<Vec<u8>, CliError> {
    let hex: String = s.chars().filter(|c| !c.is_whitespace()).collect();

    // slicing below is by byte, so anything but ASCII hex digits is rejected first
    if hex.len() % 2 == 1 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CliError::MalformedHex { len: hex.chars().count() });
    }

    Ok((0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
        .collect::<Result<Vec<u8>, _>>()?)
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_accepts_spaced_input() -> Result<(), CliError> {
        assert_eq!(parse_hex("0a3a ea41\t40a9ba94")?, vec![0x0a, 0x3a, 0xea, 0x41, 0x40, 0xa9, 0xba, 0x94]);
        assert_eq!(to_hex(&parse_hex("DEADbeef")?), "deadbeef");
        Ok(())
    }

    #[test]
    fn parse_hex_rejects_malformed_input() {
        assert!(matches!(parse_hex("abc"), Err(CliError::MalformedHex { len: 3 })));
        assert!(matches!(parse_hex("+f"), Err(CliError::MalformedHex { .. })));
        assert!(matches!(parse_hex("éé"), Err(CliError::MalformedHex { len: 2 })));
    }
}
