#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashError {
    InvalidHex,
    InvalidLength,
}

impl std::fmt::Display for HashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for HashError {}
