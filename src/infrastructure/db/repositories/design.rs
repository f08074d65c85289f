use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, SqlErr,
};

use crate::{
    error::{AppError, Result},
    infrastructure::db::entities::{Design, design},
};

/// Validated payload of a design that has not been assigned a code yet.
#[derive(Debug, Clone)]
pub struct NewDesign {
    pub product_id: String,
    pub svg: String,
    pub state_json: Option<String>,
}

pub struct DesignRepository;

impl DesignRepository {
    pub async fn find_design_by_code<C: ConnectionTrait>(
        db_connection: &C,
        code: &str,
    ) -> Result<Option<design::Model>> {
        Design::find()
            .filter(design::Column::Code.eq(code))
            .one(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }

    /// Inserts `new_design` under `code`.
    ///
    /// Returns `Ok(None)` when the code is already taken so the caller can retry
    /// with a fresh candidate. Every other failure is surfaced as an error.
    pub async fn try_insert_design<C: ConnectionTrait>(
        db_connection: &C,
        code: &str,
        new_design: &NewDesign,
    ) -> Result<Option<design::Model>> {
        let design = design::ActiveModel {
            code: Set(code.to_string()),
            product_id: Set(new_design.product_id.clone()),
            svg: Set(new_design.svg.clone()),
            state_json: Set(new_design.state_json.clone()),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        match design.insert(db_connection).await {
            Ok(created) => Ok(Some(created)),
            Err(err) if is_unique_violation(&err) => Ok(None),
            Err(err) => Err(AppError::DatabaseError(err)),
        }
    }

    pub async fn count_designs<C: ConnectionTrait>(db_connection: &C) -> Result<u64> {
        Design::find()
            .count(db_connection)
            .await
            .map_err(AppError::DatabaseError)
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
