use sqlx::MySqlPool;

/// ===============================
/// SQL update container
/// ===============================
#[derive(Debug)]
pub struct SqlUpdate {
    pub sql: String,
    pub values: Vec<String>,
    pub id: u64,
}

/// ===============================
/// Build dynamic UPDATE SQL
/// ===============================
///
/// Only the supplied columns appear in the SET clause; everything else
/// (including the row's timestamp) is left untouched by the statement.
pub fn build_update_sql(
    table: &str,
    fields: &[(&str, String)],
    id_column: &str,
    id_value: u64,
) -> SqlUpdate {
    let set_clause = fields
        .iter()
        .map(|(column, _)| format!("{} = ?", column))
        .collect::<Vec<_>>()
        .join(", ");

    let sql = format!(
        "UPDATE {} SET {} WHERE {} = ?",
        table, set_clause, id_column
    );

    SqlUpdate {
        sql,
        values: fields.iter().map(|(_, value)| value.clone()).collect(),
        id: id_value,
    }
}

/// ===============================
/// Execute the update
/// ===============================
pub async fn execute_update(
    pool: &MySqlPool,
    update: SqlUpdate,
) -> Result<u64, sqlx::Error> {
    let mut query = sqlx::query(&update.sql);

    for value in &update.values {
        query = query.bind(value);
    }
    query = query.bind(update.id);

    let result = query.execute(pool).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_single_column_update() {
        let update = build_update_sql("absensi", &[("nama", "Jane Doe".to_string())], "id", 7);

        assert_eq!(update.sql, "UPDATE absensi SET nama = ? WHERE id = ?");
        assert_eq!(update.values, vec!["Jane Doe".to_string()]);
        assert_eq!(update.id, 7);
    }

    #[test]
    fn builds_multi_column_update_in_field_order() {
        let update = build_update_sql(
            "absensi",
            &[
                ("nrp", "5025201001".to_string()),
                ("nama", "Jane Doe".to_string()),
            ],
            "id",
            42,
        );

        assert_eq!(
            update.sql,
            "UPDATE absensi SET nrp = ?, nama = ? WHERE id = ?"
        );
        assert_eq!(
            update.values,
            vec!["5025201001".to_string(), "Jane Doe".to_string()]
        );
        assert_eq!(update.id, 42);
    }
}
