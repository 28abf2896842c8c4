//! Reading Groth16 proofs in the JSON layout written by snarkjs.
//!
//! ```json
//! {
//!   "pi_a": ["<x>", "<y>", "1"],
//!   "pi_b": [["<x0>", "<x1>"], ["<y0>", "<y1>"], ["1", "0"]],
//!   "pi_c": ["<x>", "<y>", "1"],
//!   "protocol": "groth16",
//!   "curve": "bn128"
//! }
//! ```
//!
//! Only the first two entries of `pi_a`, `pi_c` and of the first two `pi_b`
//! rows are read. The projective `1`/`0` coordinates and any other keys are
//! ignored.

use std::{fmt, path::Path};

use alloy_primitives::U256;
use serde::{Deserialize, Deserializer, de::Error as _};
use tracing::debug;

use crate::{
    error::{Error, Result},
    limb::LimbPair,
};

/// Entries consumed from each proof array.
const PAIR_LEN: usize = 2;

/// A proof coordinate exactly as written in the file.
///
/// snarkjs writes coordinates as strings, but bare JSON numbers are accepted
/// too. Their digits are kept verbatim, so values wider than 64 bits survive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Numeral(String);

impl Numeral {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the numeral as a base-10 integer in `[0, 2^256)`.
    ///
    /// Surrounding whitespace and a single leading `+` are accepted.
    ///
    /// `location` names the coordinate in errors, e.g. `pi_b[1][0]`.
    pub fn to_field_element(&self, location: &str) -> Result<U256> {
        let invalid = |reason: String| Error::InvalidFieldElement {
            location: location.to_owned(),
            numeral: self.0.clone(),
            reason,
        };

        let trimmed = self.0.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(invalid("no digits".to_owned()));
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(invalid(format!("unexpected character `{bad}`")));
        }
        U256::from_str_radix(digits, 10).map_err(|err| invalid(err.to_string()))
    }
}

impl From<&str> for Numeral {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Numeral {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(text) => Ok(Self(text)),
            serde_json::Value::Number(number) => Ok(Self(number.to_string())),
            other => Err(D::Error::custom(format!(
                "expected a decimal numeral as string or number, found `{other}`"
            ))),
        }
    }
}

/// A proof file as read from disk, before any coordinate is interpreted.
#[derive(Clone, Debug, Deserialize)]
pub struct ProofFile {
    pub pi_a: Vec<Numeral>,
    pub pi_b: Vec<Vec<Numeral>>,
    pub pi_c: Vec<Numeral>,
}

impl ProofFile {
    /// Parses [`ProofFile`] from a json formatted file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading proof file");
        let file_contents = std::fs::read_to_string(path)?;
        Self::from_json(&file_contents)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let this = serde_json::from_str(json)?;
        Ok(this)
    }
}

/// The affine coordinates of a Groth16 proof.
///
/// `b` is a G2 point: two rows of two base field coordinates each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Groth16Proof {
    pub a: [U256; 2],
    pub b: [[U256; 2]; 2],
    pub c: [U256; 2],
}

impl Groth16Proof {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        ProofFile::from_file(path)?.try_into()
    }

    /// All eight coordinates split into limbs, in the order
    /// `a[0], a[1], b[0][0], b[0][1], b[1][0], b[1][1], c[0], c[1]`.
    pub fn calldata(&self) -> [LimbPair; 8] {
        let [a0, a1] = self.a;
        let [[b00, b01], [b10, b11]] = self.b;
        let [c0, c1] = self.c;
        [a0, a1, b00, b01, b10, b11, c0, c1].map(LimbPair::split)
    }
}

impl TryFrom<ProofFile> for Groth16Proof {
    type Error = Error;

    fn try_from(file: ProofFile) -> Result<Self> {
        let a = coordinates("pi_a", &file.pi_a)?;
        let [row0, row1] = leading_pair("pi_b", &file.pi_b)?;
        let b = [coordinates("pi_b[0]", row0)?, coordinates("pi_b[1]", row1)?];
        let c = coordinates("pi_c", &file.pi_c)?;
        Ok(Self { a, b, c })
    }
}

fn coordinates(field: &str, entries: &[Numeral]) -> Result<[U256; 2]> {
    let [first, second] = leading_pair(field, entries)?;
    Ok([
        first.to_field_element(&format!("{field}[0]"))?,
        second.to_field_element(&format!("{field}[1]"))?,
    ])
}

fn leading_pair<'a, T>(field: &str, entries: &'a [T]) -> Result<[&'a T; PAIR_LEN]> {
    match entries {
        [first, second, rest @ ..] => {
            if !rest.is_empty() {
                debug!(field, ignored = rest.len(), "ignoring trailing proof entries");
            }
            Ok([first, second])
        }
        _ => Err(Error::TooFewEntries {
            field: field.to_owned(),
            expected: PAIR_LEN,
            found: entries.len(),
        }),
    }
}
