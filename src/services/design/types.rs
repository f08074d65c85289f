use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{error::AppError, infrastructure::db::entities::design};

#[derive(Debug, Clone, PartialEq)]
pub struct DesignInfo {
    pub code: String,
    pub product_id: String,
    pub svg: String,
    pub state: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<&design::Model> for DesignInfo {
    type Error = AppError;

    fn try_from(design: &design::Model) -> Result<Self, Self::Error> {
        let state = design
            .state_json
            .as_deref()
            .map(serde_json::from_str::<Value>)
            .transpose()?;

        Ok(Self {
            code: design.code.clone(),
            product_id: design.product_id.clone(),
            svg: design.svg.clone(),
            state,
            created_at: design.created_at,
        })
    }
}
