use serde::{Deserialize, Serialize};

/// One rejected cell of a bulk consumption upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadErrorDetail {
    #[serde(rename = "fila", default)]
    pub row: Option<i32>,
    #[serde(rename = "columna", default)]
    pub column: Option<String>,
    #[serde(rename = "error", default)]
    pub errors: Option<Vec<String>>,
    #[serde(rename = "valor_erroneo", default)]
    pub bad_value: Option<String>,
}

/// Reply to `consumos/carga-masiva`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<Vec<UploadErrorDetail>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl UploadResponse {
    pub fn is_error(&self) -> bool {
        self.error.is_some() || self.details.as_ref().is_some_and(|d| !d.is_empty())
    }
}
