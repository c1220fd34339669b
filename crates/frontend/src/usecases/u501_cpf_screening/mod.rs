//! CPF blocklist screening.
//!
//! A lookup is a single GET with no retry and no timeout. Every lookup takes
//! a ticket from a [`RequestSequence`] so that callers can tell whether a
//! response still belongs to the latest lookup.

pub mod api;

use contracts::usecases::u501_cpf_screening::ScreeningOutcome;
use std::cell::Cell;
use std::rc::Rc;

pub type ScreeningCallback = Box<dyn FnOnce(Result<ScreeningOutcome, String>)>;

/// Asynchronous blocklist lookup; `done` runs once the lookup settles
pub trait CpfScreening {
    fn screen(&self, cpf: &str, done: ScreeningCallback);
}

/// Lookup against the Orquestra datasource over HTTP
#[derive(Debug, Clone)]
pub struct DatasourceScreening {
    url: String,
}

impl DatasourceScreening {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

impl CpfScreening for DatasourceScreening {
    fn screen(&self, cpf: &str, done: ScreeningCallback) {
        let url = self.url.clone();
        let cpf = cpf.to_string();
        log::debug!("Screening CPF against {}", url);
        wasm_bindgen_futures::spawn_local(async move {
            done(api::fetch_outcome(&url, &cpf).await);
        });
    }
}

/// Monotonic ticket counter shared by the lookups of one field
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Rc<Cell<u64>>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket for a new lookup; makes every earlier ticket stale
    pub fn next(&self) -> u64 {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        ticket
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}
