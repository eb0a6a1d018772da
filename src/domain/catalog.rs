//! Public catalogs and comparison charts served without authentication.

use crate::domain::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentItem {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    pub sector_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "dependencia_id")]
    pub department_id: i32,
}

macro_rules! display_name {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.name)
            }
        })*
    };
}

display_name!(Sector, DepartmentItem, Building);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingItem {
    #[serde(rename = "nombre")]
    pub name: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    #[serde(rename = "titulo")]
    pub title: String,
    /// Month or entity labels.
    #[serde(rename = "eje_x")]
    pub x_axis: Vec<String>,
    pub series: Vec<ChartSeries>,
    #[serde(rename = "dependencias_involucradas")]
    pub departments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "datos")]
    pub data: Vec<f64>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Level at which comparison ids are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterKind {
    #[default]
    #[serde(rename = "sector")]
    Sector,
    #[serde(rename = "dependencia")]
    Department,
    #[serde(rename = "edificio")]
    Building,
}

impl FilterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::Sector => "sector",
            FilterKind::Department => "dependencia",
            FilterKind::Building => "edificio",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sector" => Ok(FilterKind::Sector),
            "dependencia" => Ok(FilterKind::Department),
            "edificio" => Ok(FilterKind::Building),
            other => {
                warn!(value = %other, "Unknown filter kind");
                Err(ModelError::UnknownFilterKind(other.to_string()))
            }
        }
    }
}

/// Query string shared by every public comparison route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonQuery {
    #[serde(rename = "anio")]
    pub year: i32,
    /// Comma-separated ids, e.g. `"1,2"`.
    pub ids: String,
    #[serde(rename = "tipo_filtro")]
    pub filter: FilterKind,
}

impl ComparisonQuery {
    pub fn new(year: i32, ids: &[i32], filter: FilterKind) -> Self {
        let ids = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        Self { year, ids, filter }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_query_joins_ids() {
        let query = ComparisonQuery::new(2025, &[1, 2, 10], FilterKind::Building);
        assert_eq!(query.ids, "1,2,10");

        let empty = ComparisonQuery::new(2025, &[], FilterKind::Sector);
        assert_eq!(empty.ids, "");
    }

    #[test]
    fn test_filter_kind_parse() {
        assert_eq!("dependencia".parse::<FilterKind>(), Ok(FilterKind::Department));
        assert_eq!(FilterKind::Building.to_string(), "edificio");
        assert_eq!(
            "region".parse::<FilterKind>(),
            Err(ModelError::UnknownFilterKind("region".to_string()))
        );
    }

    #[test]
    fn test_catalog_display() {
        let sector = Sector {
            id: 1,
            name: "Salud".to_string(),
        };
        assert_eq!(sector.to_string(), "Salud");
    }
}
