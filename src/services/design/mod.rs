use sea_orm::ConnectionTrait;
use serde_json::Value;

use crate::{
    AppState,
    error::{AppError, Result},
    infrastructure::db::{
        entities::design,
        repositories::{DesignRepository, NewDesign},
    },
};

pub mod code;
pub mod render;
pub mod types;
pub mod validation;

pub use code::CodeGenerator;
pub use types::DesignInfo;

/// Validates and stores a design, returning its newly assigned code.
pub async fn save_design(
    state: &AppState,
    product_id: Option<&str>,
    svg: Option<String>,
    design_state: Option<Value>,
) -> Result<String> {
    let config = &state.config.designs;

    let product_id = validation::validate_product_id(product_id)?;
    validation::validate_svg(config, svg.as_deref())?;

    let new_design = NewDesign {
        product_id,
        svg: svg.unwrap_or_default(),
        state_json: design_state
            .map(|value| serde_json::to_string(&value))
            .transpose()?,
    };

    let created = insert_with_unique_code(
        state.db.get_connection(),
        &new_design,
        config.max_code_attempts,
        || state.codes.generate(),
    )
    .await?;

    tracing::info!(
        code = %created.code,
        product_id = %created.product_id,
        "Design saved"
    );

    Ok(created.code)
}

/// Inserts `new_design` under the first candidate from `next_code` that is not
/// already taken, trying at most `max_attempts` candidates.
pub async fn insert_with_unique_code<C, F>(
    db_connection: &C,
    new_design: &NewDesign,
    max_attempts: u32,
    mut next_code: F,
) -> Result<design::Model>
where
    C: ConnectionTrait,
    F: FnMut() -> String,
{
    for attempt in 1..=max_attempts {
        let code = next_code();

        if let Some(created) =
            DesignRepository::try_insert_design(db_connection, &code, new_design).await?
        {
            return Ok(created);
        }

        tracing::warn!(code = %code, attempt, "Design code collision, regenerating");
    }

    Err(AppError::CodeSpaceExhausted {
        attempts: max_attempts,
    })
}

pub async fn fetch_design(state: &AppState, raw_code: &str) -> Result<DesignInfo> {
    let code = state
        .codes
        .normalize(raw_code)
        .ok_or(AppError::DesignNotFound)?;

    if let Some(cached) = state.cache.local.get_design(&code).await {
        return DesignInfo::try_from(cached.as_ref());
    }

    let design = DesignRepository::find_design_by_code(state.db.get_connection(), &code)
        .await?
        .ok_or(AppError::DesignNotFound)?;

    let design = state.cache.local.set_design(design).await;

    DesignInfo::try_from(design.as_ref())
}
