use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArgonMdError {
    // Configuration errors
    #[error("Supercell count must be at least 1, got {nc}")]
    InvalidSupercellCount { nc: u32 },

    #[error("Lattice scale must be positive and finite, got {scale}")]
    InvalidLatticeScale { scale: f64 },

    #[error("Temperature must be positive and finite, got {kelvin} K")]
    InvalidTemperature { kelvin: f64 },
}

pub type Result<T> = std::result::Result<T, ArgonMdError>;
