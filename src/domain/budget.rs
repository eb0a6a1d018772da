use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Timestamp layout Laravel uses when a model is not cast to ISO 8601.
const PLAIN_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Quarterly budget assigned to a department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: i32,
    #[serde(rename = "dependencia_id")]
    pub department_id: i32,
    #[serde(rename = "año")]
    pub year: i32,
    #[serde(rename = "trimestre")]
    pub quarter: i32,
    #[serde(rename = "monto_asignado")]
    pub amount: f64,
    /// Kept raw; see [`Budget::created_time`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Budget {
    /// Creation time, read as RFC 3339 or as a plain UTC `Y-m-d H:i:s`.
    /// `None` when absent or in any other layout.
    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.as_deref()?;
        if let Ok(time) = DateTime::parse_from_rfc3339(raw) {
            return Some(time.with_timezone(&Utc));
        }
        match NaiveDateTime::parse_from_str(raw, PLAIN_TIMESTAMP) {
            Ok(time) => Some(time.and_utc()),
            Err(e) => {
                warn!(budget_id = self.id, value = %raw, error = %e, "Unreadable budget timestamp");
                None
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBudgetRequest {
    #[serde(rename = "año")]
    pub year: i32,
    #[serde(rename = "trimestre")]
    pub quarter: i32,
    #[serde(rename = "monto_asignado")]
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn budget(created_at: Option<&str>) -> Budget {
        Budget {
            id: 1,
            department_id: 2,
            year: 2025,
            quarter: 2,
            amount: 1000.0,
            created_at: created_at.map(str::to_string),
        }
    }

    #[test]
    fn test_created_time_layouts() {
        let expected = Utc.with_ymd_and_hms(2025, 4, 1, 12, 30, 0).unwrap();
        assert_eq!(budget(Some("2025-04-01T12:30:00.000000Z")).created_time(), Some(expected));
        assert_eq!(budget(Some("2025-04-01 12:30:00")).created_time(), Some(expected));
        assert_eq!(budget(Some("01/04/2025")).created_time(), None);
        assert_eq!(budget(None).created_time(), None);
    }
}
