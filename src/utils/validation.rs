use crate::utils::error::{GenError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.to_string_lossy();

    if display.is_empty() {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if display.contains('\0') {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.replace('\0', "\\0"),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
