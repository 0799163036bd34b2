//! Internal Diesel row structs.
//!
//! Row types never leave the persistence layer; repositories convert them
//! into domain types before returning.

use diesel::prelude::*;

use crate::domain::GenomeRecord;

use super::schema::genomes;

/// Row read from the `genomes` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = genomes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct GenomeRow {
    pub id: i64,
    pub name: String,
}

impl From<GenomeRow> for GenomeRecord {
    fn from(row: GenomeRow) -> Self {
        Self::new(row.id, row.name)
    }
}
