use coleta_core::model::{ActivityRecord, ClassGroup};
use sqlx::Row;

use crate::repository::PersistenceError;

fn ser<E: core::fmt::Display>(e: E) -> PersistenceError {
    PersistenceError::Serialization(e.to_string())
}

pub(crate) fn map_record_row(
    row: &sqlx::sqlite::SqliteRow,
) -> Result<ActivityRecord, PersistenceError> {
    let collection_date: chrono::NaiveDate = row.try_get("collection_date").map_err(ser)?;
    let subject: String = row.try_get("subject").map_err(ser)?;
    let source_type: String = row.try_get("source_type").map_err(ser)?;
    let status: String = row.try_get("status").map_err(ser)?;

    Ok(ActivityRecord {
        collection_date,
        subject: subject.parse().map_err(ser)?,
        source_type: source_type.parse().map_err(ser)?,
        pages: row.try_get("pages").map_err(ser)?,
        student_name: row.try_get("aluno").map_err(ser)?,
        class_group: ClassGroup::new(row.try_get::<String, _>("turma").map_err(ser)?),
        status: status.parse().map_err(ser)?,
    })
}
