//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see domain ports, so
//! they can be tested without a database.

use std::sync::Arc;

use crate::domain::ports::GenomeQuery;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use luckygenome::domain::GenomeQueryService;
/// use luckygenome::domain::ports::FixtureGenomeRepository;
/// use luckygenome::inbound::http::state::HttpState;
///
/// let service = GenomeQueryService::new(Arc::new(FixtureGenomeRepository));
/// let _state = HttpState::new(Arc::new(service));
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub genomes: Arc<dyn GenomeQuery>,
}

impl HttpState {
    /// Bundle the genome query port for handlers.
    pub fn new(genomes: Arc<dyn GenomeQuery>) -> Self {
        Self { genomes }
    }
}
