use serde::{Deserialize, Serialize};
use std::fmt;

/// Label shown for every department; the backend has no category field.
pub const DEFAULT_CATEGORY: &str = "General";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(rename = "id_dependencia")]
    pub id: i32,
    #[serde(rename = "nombre_dependencia")]
    pub name: String,
    #[serde(rename = "edificios_count")]
    pub building_count: i32,
    #[serde(default)]
    pub sector_id: Option<i32>,
}

impl Department {
    pub fn category(&self) -> &'static str {
        DEFAULT_CATEGORY
    }
}

/// Short department record used when picking a budget owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentRef {
    #[serde(rename = "id_dependencia")]
    pub id: i32,
    #[serde(rename = "nombre_dependencia")]
    pub name: String,
}

impl fmt::Display for DepartmentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&Department> for DepartmentRef {
    fn from(department: &Department) -> Self {
        Self {
            id: department.id,
            name: department.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_ref_display_and_conversion() {
        let department = Department {
            id: 3,
            name: "Hospital General".to_string(),
            building_count: 4,
            sector_id: Some(1),
        };
        assert_eq!(department.category(), "General");

        let short = DepartmentRef::from(&department);
        assert_eq!(short.id, 3);
        assert_eq!(short.to_string(), "Hospital General");
    }
}
