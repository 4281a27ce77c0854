use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "nrp": "5025201000",
        "nama": "John Doe",
        "timestamp": "2026-01-05T08:30:00"
    })
)]
pub struct Absensi {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "5025201000")]
    pub nrp: String,

    #[schema(example = "John Doe")]
    pub nama: String,

    /// Assigned by the database on insert; never set by clients.
    #[schema(
        example = "2026-01-05T08:30:00",
        value_type = String,
        format = "date-time"
    )]
    pub timestamp: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn serializes_all_four_fields() {
        let record = Absensi {
            id: 1,
            nrp: "5025201000".to_string(),
            nama: "John Doe".to_string(),
            timestamp: NaiveDate::from_ymd_opt(2026, 1, 5)
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "nrp": "5025201000",
                "nama": "John Doe",
                "timestamp": "2026-01-05T08:30:00"
            })
        );
    }
}
