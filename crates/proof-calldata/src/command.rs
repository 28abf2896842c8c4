//! Assembling the `starkli invoke` command line.

use std::{fmt, str::FromStr};

use alloy_primitives::U256;

use crate::{error::Error, limb::LimbPair, proof::Groth16Proof};

/// Verifier contract invoked when no other address is given.
pub const DEFAULT_CONTRACT_ADDRESS: &str =
    "0x046141f63d44c8ee3a770f6188c98136bd28cc5c4f87f691f5587363e943ac63";

/// Contract entrypoint receiving the proof.
pub const ENTRYPOINT: &str = "submit_proof";

/// Printed in place of the caller; edited by hand before running the command.
pub const CALLER_PLACEHOLDER: &str = "<player_address>";

/// The Starknet field modulus, `2^251 + 17 * 2^192 + 1`.
const FELT_MODULUS: U256 = U256::from_limbs([1, 0, 0, 0x0800_0000_0000_0011]);

/// A Starknet contract address, kept exactly as the user wrote it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractAddress(String);

impl Default for ContractAddress {
    fn default() -> Self {
        Self(DEFAULT_CONTRACT_ADDRESS.to_owned())
    }
}

impl FromStr for ContractAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidContractAddress(s.to_owned());
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .filter(|digits| !digits.is_empty())
            .ok_or_else(invalid)?;
        let value = U256::from_str_radix(digits, 16).map_err(|_| invalid())?;
        if value >= FELT_MODULUS {
            return Err(invalid());
        }
        Ok(Self(s.to_owned()))
    }
}

impl fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A `starkli invoke <contract> submit_proof <caller> <calldata..>` command.
#[derive(Clone, Debug)]
pub struct StarkliInvoke {
    contract: ContractAddress,
    caller: String,
    calldata: [LimbPair; 8],
}

impl StarkliInvoke {
    pub fn new(contract: ContractAddress, caller: impl Into<String>, proof: &Groth16Proof) -> Self {
        Self {
            contract,
            caller: caller.into(),
            calldata: proof.calldata(),
        }
    }

    /// The sixteen limb numerals, space separated.
    pub fn calldata_args(&self) -> String {
        self.calldata
            .iter()
            .map(LimbPair::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for StarkliInvoke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "starkli invoke {} {ENTRYPOINT} {} {}",
            self.contract,
            self.caller,
            self.calldata_args()
        )
    }
}
