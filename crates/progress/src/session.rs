//! Session facade owning one plan and one progress store.

use burndown_core::{Observation, ProjectPlan, SessionId, Summary, ValidationError};
use chrono::NaiveDate;
use tracing::debug;

use crate::ideal::IdealLine;
use crate::reporter::SummaryReporter;
use crate::store::ProgressStore;

/// One user session: a plan plus its progress store.
///
/// Sessions are isolated; nothing is shared across them and the data is
/// dropped with the session. Every accessor recomputes its view from the
/// current store contents.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    plan: ProjectPlan,
    store: ProgressStore,
}

impl Session {
    /// Start a session for a plan.
    pub fn new(plan: ProjectPlan) -> Self {
        let id = SessionId::new();
        debug!(%id, project = %plan.name, "session started");
        Self {
            id,
            store: ProgressStore::for_plan(&plan),
            plan,
        }
    }

    /// Session identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The plan this session tracks.
    pub fn plan(&self) -> &ProjectPlan {
        &self.plan
    }

    /// Record an observation.
    pub fn append(
        &mut self,
        date: NaiveDate,
        remaining: f64,
        note: Option<String>,
    ) -> Result<(), ValidationError> {
        self.store.append(date, remaining, note)
    }

    /// Sorted observations, duplicate dates resolved last-write-wins.
    pub fn observations(&self) -> Vec<Observation> {
        self.store.observations()
    }

    /// The session's progress store.
    pub fn store(&self) -> &ProgressStore {
        &self.store
    }

    /// Ideal line for the session's plan.
    pub fn ideal(&self) -> Result<IdealLine, ValidationError> {
        IdealLine::new(&self.plan)
    }

    /// Progress summary as of a date.
    pub fn summary(&self, as_of: NaiveDate) -> Summary {
        SummaryReporter::report(&self.plan, &self.store, as_of)
    }
}
