//! Payloads of the analytics service: cost projections and the strategic
//! analysis built on top of them.

use crate::domain::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResponse {
    pub status: String,
    #[serde(rename = "metodo")]
    pub method: String,
    #[serde(rename = "resumen_proyeccion")]
    pub summary: ProjectionSummary,
    /// Historical and projected points, in chart order.
    #[serde(rename = "datos_para_grafica")]
    pub chart: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    #[serde(rename = "horizonte_meses")]
    pub horizon_months: i32,
    #[serde(rename = "tendencia_detectada")]
    pub trend: String,
    #[serde(rename = "suma_total_costo_proyectada")]
    pub projected_total_cost: f64,
    #[serde(rename = "rango_precios_estimado")]
    pub estimated_range: PriceRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(rename = "minimo")]
    pub min: f64,
    #[serde(rename = "maximo")]
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    Actual,
    Predicted,
}

impl PointKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PointKind::Actual => "real",
            PointKind::Predicted => "prediccion",
        }
    }
}

impl FromStr for PointKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "real" => Ok(PointKind::Actual),
            "prediccion" => Ok(PointKind::Predicted),
            other => {
                warn!(value = %other, "Unknown chart point kind");
                Err(ModelError::UnknownPointKind(other.to_string()))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    #[serde(rename = "anio")]
    pub year: i32,
    #[serde(rename = "mes")]
    pub month: i32,
    pub total_kwh: f64,
    #[serde(rename = "total_costo")]
    pub total_cost: f64,
    /// Kept raw; see [`ChartPoint::kind`].
    #[serde(rename = "tipo")]
    pub kind: String,
    // Only predictions carry a range.
    #[serde(rename = "rango_costo_min", default)]
    pub range_min: Option<f64>,
    #[serde(rename = "rango_costo_max", default)]
    pub range_max: Option<f64>,
}

impl ChartPoint {
    /// Axis label such as `"Feb 26"`. Out-of-range months leave the month part empty.
    pub fn date_label(&self) -> String {
        let month = usize::try_from(self.month)
            .ok()
            .and_then(|m| m.checked_sub(1))
            .and_then(|i| MONTH_ABBREVIATIONS.get(i))
            .copied()
            .unwrap_or("");
        let year = self.year.to_string();
        let short_year = &year[year.len().saturating_sub(2)..];
        format!("{} {}", month, short_year)
    }

    pub fn kind(&self) -> Result<PointKind, ModelError> {
        self.kind.parse()
    }

    pub fn has_range(&self) -> bool {
        self.kind == PointKind::Predicted.as_str()
            && self.range_min.is_some()
            && self.range_max.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicAnalysisResponse {
    pub status: String,
    #[serde(rename = "analisis_ia")]
    pub analysis: StrategicAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicAnalysis {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "resumen_ejecutivo")]
    pub executive_summary: String,
    /// Kept raw; see [`StrategicAnalysis::risk`].
    #[serde(rename = "nivel_riesgo_presupuestal")]
    pub risk_level: String,
    #[serde(rename = "acciones_estrategicas")]
    pub actions: Vec<StrategicAction>,
}

impl StrategicAnalysis {
    pub fn risk(&self) -> Result<RiskLevel, ModelError> {
        self.risk_level.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicAction {
    #[serde(rename = "accion")]
    pub action: String,
    #[serde(rename = "plazo_implementacion")]
    pub timeframe: String,
    #[serde(rename = "descripcion")]
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl FromStr for RiskLevel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BAJO" => Ok(RiskLevel::Low),
            "MEDIO" => Ok(RiskLevel::Medium),
            "ALTO" => Ok(RiskLevel::High),
            other => {
                warn!(value = %other, "Unknown risk level");
                Err(ModelError::UnknownRiskLevel(other.to_string()))
            }
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RiskLevel::Low => "BAJO",
            RiskLevel::Medium => "MEDIO",
            RiskLevel::High => "ALTO",
        })
    }
}

/// Query string of both analytics routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionQuery {
    #[serde(rename = "meses")]
    pub months: i32,
    #[serde(rename = "ver_todo_historial")]
    pub full_history: bool,
    #[serde(rename = "dependencia_id", skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i32>,
}
