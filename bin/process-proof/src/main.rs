//! Turns a snarkjs `proof.json` into a `starkli invoke` command that submits
//! the proof to the verifier contract.
//!
//! The command is printed, not executed: the caller token defaults to a
//! `<player_address>` placeholder that has to be filled in by hand.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use eyre::WrapErr as _;
use proof_calldata::{
    CALLER_PLACEHOLDER, ContractAddress, DEFAULT_CONTRACT_ADDRESS, Groth16Proof, StarkliInvoke,
};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const USAGE: &str = "Usage: process-proof <proof.json>";

fn main() -> eyre::Result<()> {
    Args::parse().run()
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// The complete `starkli invoke` command line.
    Starkli,
    /// Only the sixteen limb numerals.
    Calldata,
}

#[derive(Debug, Parser)]
#[command(name = "process-proof", version)]
#[command(about = "Prints the starkli command submitting a Groth16 proof")]
struct Args {
    /// Path to the proof written by snarkjs. Paths after the first are ignored.
    #[arg(value_name = "PROOF", num_args = 0..)]
    proof: Vec<PathBuf>,

    /// Address of the verifier contract.
    ///
    /// Validated only once a proof path is given.
    #[arg(long, env = "PROCESS_PROOF_CONTRACT", default_value = DEFAULT_CONTRACT_ADDRESS)]
    contract: String,

    /// Account printed after the entrypoint.
    #[arg(long, value_name = "ADDRESS", default_value = CALLER_PLACEHOLDER)]
    caller: String,

    /// Whether to print the whole command or only its calldata.
    #[arg(long, value_enum, default_value = "starkli")]
    format: Format,

    /// Filter directives for tracing events, which are written to stderr.
    ///
    /// See the tracing-subscriber `EnvFilter` documentation for the syntax.
    #[arg(long, value_name = "DIRECTIVE", default_value = "warn")]
    filter_directives: String,
}

impl Args {
    fn run(self) -> eyre::Result<()> {
        let Self {
            proof,
            contract,
            caller,
            format,
            filter_directives,
        } = self;
        let Some(proof) = proof.into_iter().next() else {
            println!("{USAGE}");
            std::process::exit(1);
        };

        let env_filter = EnvFilter::builder()
            .parse(&filter_directives)
            .wrap_err("failed to parse provided filter directives")?;
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(env_filter)
            .init();

        let contract: ContractAddress = contract
            .parse()
            .wrap_err("failed parsing provided contract address")?;
        let groth16 = Groth16Proof::from_file(&proof)
            .wrap_err_with(|| format!("failed reading proof from `{}`", proof.display()))?;

        debug!(%contract, %caller, ?format, "assembling invoke command");
        let invoke = StarkliInvoke::new(contract, caller, &groth16);
        match format {
            Format::Starkli => println!("{invoke}"),
            Format::Calldata => println!("{}", invoke.calldata_args()),
        }
        Ok(())
    }
}
