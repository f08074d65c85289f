use crate::{
    config::DesignsConfig,
    error::{AppError, Result},
};

pub const MAX_PRODUCT_ID_LENGTH: usize = 255;

/// Returns the trimmed product id.
pub fn validate_product_id(product_id: Option<&str>) -> Result<String> {
    let trimmed = product_id.map(str::trim).unwrap_or_default();

    if trimmed.is_empty() {
        return Err(AppError::InvalidParams(
            "productId and svg are required".into(),
        ));
    }

    if trimmed.chars().count() > MAX_PRODUCT_ID_LENGTH {
        return Err(AppError::InvalidParams(format!(
            "productId cannot exceed {MAX_PRODUCT_ID_LENGTH} characters"
        )));
    }

    Ok(trimmed.to_string())
}

pub fn validate_svg(config: &DesignsConfig, svg: Option<&str>) -> Result<()> {
    let svg = svg.unwrap_or_default();

    if svg.is_empty() {
        return Err(AppError::InvalidParams(
            "productId and svg are required".into(),
        ));
    }

    if svg.len() > config.max_svg_bytes {
        return Err(AppError::PayloadTooLarge("SVG too large".into()));
    }

    Ok(())
}
