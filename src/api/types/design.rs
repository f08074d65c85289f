use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDesignParams {
    #[serde(default)]
    pub product_id: Option<String>,

    #[serde(default)]
    pub svg: Option<String>,

    /// Opaque client state, stored and returned untouched.
    #[serde(default)]
    pub state: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct SaveDesignResponse {
    pub code: String,
}
