pub type AquarelaResult<T> = Result<T, AquarelaError>;

#[derive(thiserror::Error, Debug)]
pub enum AquarelaError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("raster error: {0}")]
    Raster(String),

    #[error("noise error: {0}")]
    Noise(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AquarelaError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    pub fn noise(msg: impl Into<String>) -> Self {
        Self::Noise(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            AquarelaError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(AquarelaError::raster("x").to_string().contains("raster error:"));
        assert!(AquarelaError::noise("x").to_string().contains("noise error:"));
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = AquarelaError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
