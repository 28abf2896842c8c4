pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open proof file for reading")]
    OpenFile(#[from] std::io::Error),

    #[error("failed parsing proof file contents")]
    Parse(#[from] serde_json::Error),

    #[error("`{field}` holds {found} entries, expected at least {expected}")]
    TooFewEntries {
        field: String,
        expected: usize,
        found: usize,
    },

    #[error("`{location}` is not a decimal integer below 2^256 (`{numeral}`): {reason}")]
    InvalidFieldElement {
        location: String,
        numeral: String,
        reason: String,
    },

    #[error("contract address must be a 0x-prefixed hex felt: `{0}`")]
    InvalidContractAddress(String),
}
