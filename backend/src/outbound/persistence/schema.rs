//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations`; regenerate with `diesel print-schema`
//! when a migration changes the table.

diesel::table! {
    /// Genome catalogue.
    genomes (id) {
        /// Primary key.
        id -> Int8,
        /// Display name of the genome.
        name -> Text,
    }
}
