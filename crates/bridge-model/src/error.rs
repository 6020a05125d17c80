use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("length bin size must be a positive finite number of metres, got {0}")]
    InvalidBinWidth(f64),
}

pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_bin_width_names_the_value() {
        assert_eq!(
            ModelError::InvalidBinWidth(-2.5).to_string(),
            "length bin size must be a positive finite number of metres, got -2.5"
        );
    }
}
