use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt one 8-byte block
    Encrypt(BlockArgs),

    /// Decrypt one 8-byte block
    Decrypt(BlockArgs),

    /// Generate a random 16-byte key
    GenKey(GenKeyArgs),

    /// Check the cipher against the built-in known-answer vectors
    SelfTest(SelfTestArgs),
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct BlockArgs {
    /// Key as 32 hex digits.
    #[arg(
        short = 'k',
        long = "key",
        value_name = "HEX",
        required_unless_present = "key_file",
        conflicts_with = "key_file"
    )]
    pub key: Option<String>,

    /// Key file path (raw 16 bytes).
    #[arg(long = "key-file", value_name = "PATH")]
    pub key_file: Option<PathBuf>,

    /// Block as 16 hex digits.
    #[arg(short = 'b', long = "block", value_name = "HEX")]
    pub block: String,
}

#[derive(Args, Debug)]
pub struct GenKeyArgs {
    /// Also write the raw key bytes to this path.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SelfTestArgs {
    /// Check vectors on the rayon thread pool.
    #[arg(long = "parallel")]
    pub parallel: bool,
}
