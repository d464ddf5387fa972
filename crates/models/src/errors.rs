use thiserror::Error;

/// Field-level failures raised by entity validators.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
}

impl ModelError {
    pub fn required(field: &str) -> Self { Self::Validation(format!("{field} required")) }

    pub fn too_long(field: &str, max: usize) -> Self { Self::Validation(format!("{field} too long (<={max})")) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_messages() {
        assert_eq!(ModelError::required("title").to_string(), "validation error: title required");
        assert_eq!(ModelError::too_long("firstName", 128).to_string(), "validation error: firstName too long (<=128)");
    }
}
