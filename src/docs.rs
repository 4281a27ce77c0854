use crate::api::absensi::{CreateAbsensi, UpdateAbsensi};
use crate::model::absensi::Absensi;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Absensi API",
        version = "1.0.0",
        description = r#"
## Absensi (Attendance Record) Service

This API manages **attendance records** for a single organization.

### 🔹 Operations
- **Create** — register a new attendance record with an `nrp` and `nama`
- **List** — fetch every record in insertion order
- **Update** — change the `nrp` and/or `nama` of an existing record
- **Delete** — remove a record by its ID

### 📦 Response Format
- JSON-based RESTful responses
- `id` and `timestamp` are assigned by the database and never set by clients

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::absensi::create_absensi,
        crate::api::absensi::list_absensi,
        crate::api::absensi::update_absensi,
        crate::api::absensi::delete_absensi,
    ),
    components(
        schemas(
            Absensi,
            CreateAbsensi,
            UpdateAbsensi
        )
    ),
    tags(
        (name = "Absensi", description = "Attendance record management APIs"),
    )
)]
pub struct ApiDoc;
