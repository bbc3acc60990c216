//! Clinical monograph queries.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult, NAME_POOL_LIMIT};
use crate::models::{CandidatePool, HabitForming, Medicine};

impl Database {
    /// Append a monograph row. No upsert: the name is not a unique key, so
    /// duplicates land as additional rows.
    pub fn insert_medicine(&self, medicine: &Medicine) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO medicines (
                drug_name, substitutes, side_effects, uses, chemical_class,
                habit_forming, therapeutic_class, action_class, dosage, contraindications
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
            params![
                medicine.drug_name,
                medicine.substitutes,
                medicine.side_effects,
                medicine.uses,
                medicine.chemical_class,
                medicine.habit_forming.as_label(),
                medicine.therapeutic_class,
                medicine.action_class,
                medicine.dosage,
                medicine.contraindications,
            ],
        )?;
        Ok(())
    }

    /// Case-insensitive exact lookup. Duplicate names resolve to the first
    /// row in insertion order.
    pub fn find_medicine(&self, drug_name: &str) -> DbResult<Option<Medicine>> {
        let result = self
            .conn
            .query_row(
                r#"
                SELECT drug_name, substitutes, side_effects, uses, chemical_class,
                       habit_forming, therapeutic_class, action_class, dosage, contraindications
                FROM medicines
                WHERE drug_name = ?1 COLLATE NOCASE
                ORDER BY id
                LIMIT 1
                "#,
                [drug_name],
                medicine_from_row,
            )
            .optional()?;
        Ok(result)
    }

    /// Materialize the clinical candidate-name snapshot, size-boxed by
    /// [`NAME_POOL_LIMIT`].
    pub fn medicine_name_pool(&self) -> DbResult<CandidatePool> {
        let mut stmt = self
            .conn
            .prepare("SELECT drug_name FROM medicines ORDER BY id LIMIT ?1")?;
        let rows = stmt.query_map([(NAME_POOL_LIMIT + 1) as i64], |row| row.get(0))?;

        let mut names = Vec::new();
        for row in rows {
            names.push(row?);
        }
        Ok(CandidatePool::collect(names, NAME_POOL_LIMIT))
    }
}

fn medicine_from_row(row: &Row<'_>) -> rusqlite::Result<Medicine> {
    Ok(Medicine {
        drug_name: row.get(0)?,
        substitutes: row.get(1)?,
        side_effects: row.get(2)?,
        uses: row.get(3)?,
        chemical_class: row.get(4)?,
        habit_forming: HabitForming::from_label(row.get::<_, Option<String>>(5)?.as_deref()),
        therapeutic_class: row.get(6)?,
        action_class: row.get(7)?,
        dosage: row.get(8)?,
        contraindications: row.get(9)?,
    })
}
