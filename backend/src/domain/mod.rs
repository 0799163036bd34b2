//! Domain primitives, ports and services.
//!
//! Purpose: define the genome catalogue types and the use-case that serves
//! them, independent of HTTP and persistence.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `GenomeRecord`: one catalogue row.
//! - `GenomeQueryService`: pass-through implementation of `ports::GenomeQuery`.
//! - `TraceId`: request correlation identifier.

pub mod error;
pub mod genome;
pub mod genome_query_service;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::genome::GenomeRecord;
pub use self::genome_query_service::GenomeQueryService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
