use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub status: String,
    #[serde(rename = "periodo")]
    pub period: Period,
    pub kpis: Kpis,
    #[serde(rename = "data_evolucion")]
    pub evolution: Vec<EvolutionItem>,
    #[serde(rename = "data_inmuebles")]
    pub buildings: Vec<BuildingConsumption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Period {
    #[serde(rename = "mes")]
    pub month: i32,
    #[serde(rename = "año")]
    pub year: i32,
    #[serde(rename = "trimestre")]
    pub quarter: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    #[serde(rename = "consumo_mes_kwh")]
    pub monthly_consumption_kwh: f64,
    #[serde(rename = "costo_mes")]
    pub monthly_cost: f64,
    #[serde(rename = "presupuesto_trimestre")]
    pub quarter_budget: f64,
    #[serde(rename = "porcentaje_ejecucion", default)]
    pub execution_percentage: Option<f64>,
}

/// One month of the consumption history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionItem {
    #[serde(rename = "año")]
    pub year: i32,
    #[serde(rename = "mes")]
    pub month: i32,
    #[serde(rename = "total_consumo")]
    pub total_consumption: f64,
    #[serde(rename = "total_costo")]
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingConsumption {
    #[serde(rename = "nombre_edificio")]
    pub building_name: String,
    /// kWh
    #[serde(rename = "consumo")]
    pub consumption: f64,
}

/// Query string of the dashboard route. Unset filters are left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardQuery {
    #[serde(rename = "dependencia_id", skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i32>,
    #[serde(rename = "mes", skip_serializing_if = "Option::is_none")]
    pub month: Option<i32>,
    #[serde(rename = "año", skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}
