//! Conversion of Groth16 proofs into calldata for a Starknet verifier.
//!
//! Each of the eight proof coordinates is a 256-bit field element that is
//! passed to the contract as a pair of 128-bit limbs.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod command;
pub mod error;
pub mod limb;
pub mod proof;

pub use command::{CALLER_PLACEHOLDER, ContractAddress, DEFAULT_CONTRACT_ADDRESS, StarkliInvoke};
pub use error::{Error, Result};
pub use limb::LimbPair;
pub use proof::{Groth16Proof, Numeral, ProofFile};
