//! Routes the mobile client calls, described as data. Performing the calls is
//! left to whichever HTTP client embeds these types.

use crate::infrastructure::config::ApiConfig;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// REST backend: auth, departments, budgets, dashboard, uploads.
    Backend,
    /// Analytics service: public catalogs, comparisons, projections.
    Analytics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    CurrentUser,
    Departments,
    Budgets { department_id: i32 },
    CreateBudget { department_id: i32 },
    Dashboard,
    ConsumptionUpload,
    Sectors,
    SectorDepartments { sector_id: i32 },
    DepartmentBuildings { department_id: i32 },
    ConsumptionComparison,
    CostComparison,
    Ranking,
    BudgetVsExpense,
    Projection,
    StrategicAnalysis,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Login | Endpoint::CreateBudget { .. } | Endpoint::ConsumptionUpload => {
                Method::Post
            }
            _ => Method::Get,
        }
    }

    pub fn service(&self) -> Service {
        match self {
            Endpoint::Login
            | Endpoint::CurrentUser
            | Endpoint::Departments
            | Endpoint::Budgets { .. }
            | Endpoint::CreateBudget { .. }
            | Endpoint::Dashboard
            | Endpoint::ConsumptionUpload => Service::Backend,
            _ => Service::Analytics,
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Endpoint::Login
                | Endpoint::Sectors
                | Endpoint::SectorDepartments { .. }
                | Endpoint::DepartmentBuildings { .. }
                | Endpoint::ConsumptionComparison
                | Endpoint::CostComparison
                | Endpoint::Ranking
                | Endpoint::BudgetVsExpense
        )
    }

    /// Path relative to the service base URL. A leading `/` means the path
    /// is rooted at the host instead.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "login".to_string(),
            Endpoint::CurrentUser => "auth/me".to_string(),
            Endpoint::Departments => "dependencias".to_string(),
            Endpoint::Budgets { department_id } | Endpoint::CreateBudget { department_id } => {
                format!("/api/dependencias/{}/presupuestos", department_id)
            }
            Endpoint::Dashboard => "dashboard".to_string(),
            Endpoint::ConsumptionUpload => "consumos/carga-masiva".to_string(),
            Endpoint::Sectors => "/catalogos/sectores".to_string(),
            Endpoint::SectorDepartments { sector_id } => {
                format!("/catalogos/dependencias/{}", sector_id)
            }
            Endpoint::DepartmentBuildings { department_id } => {
                format!("/catalogos/edificios/{}", department_id)
            }
            Endpoint::ConsumptionComparison => {
                "/analisis/publico/comparativa-consumo".to_string()
            }
            Endpoint::CostComparison => "/analisis/publico/comparativa-costos".to_string(),
            Endpoint::Ranking => "/analisis/publico/ranking".to_string(),
            Endpoint::BudgetVsExpense => "/analisis/publico/presupuesto-vs-gasto".to_string(),
            Endpoint::Projection => "prediccion/proyeccion-matematica".to_string(),
            Endpoint::StrategicAnalysis => "prediccion/ia-analisis-estrategico".to_string(),
        }
    }

    pub fn url(&self, config: &ApiConfig) -> String {
        let base = match self.service() {
            Service::Backend => &config.backend_url,
            Service::Analytics => &config.analytics_url,
        };
        resolve(base, &self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

fn resolve(base: &str, path: &str) -> String {
    match path.strip_prefix('/') {
        Some(rooted) => format!("{}/{}", origin(base), rooted),
        None => format!("{}/{}", base.trim_end_matches('/'), path),
    }
}

/// `scheme://authority` part of an absolute URL.
fn origin(base: &str) -> &str {
    let after_scheme = base.find("://").map(|i| i + 3).unwrap_or(0);
    match base[after_scheme..].find('/') {
        Some(i) => &base[..after_scheme + i],
        None => base,
    }
}
