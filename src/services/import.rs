//! Import batch committer
//!
//! Persists the non-duplicate candidates of an import session one at a
//! time, in order. Each item's write is durable before the next begins,
//! so a crash mid-batch leaves a prefix of the batch saved rather than a
//! torn file. One bad item never aborts the rest; its failure is recorded
//! per index and the loop moves on.

use crate::error::{UpiqError, UpiqResult};
use crate::models::date::local_now;
use crate::models::{StatementCandidate, TransactionId};
use crate::storage::Storage;

/// Result of one candidate within a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Persisted under this id
    Saved(TransactionId),
    /// Flagged duplicate, skipped without touching storage
    Duplicate,
    /// Attempted and failed; the reason is also listed in `failures`
    Failed(String),
}

/// One failed item of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    pub index: usize,
    pub error: String,
}

/// Summary of a committed batch
///
/// `outcomes` is index-aligned with the input candidates.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub outcomes: Vec<ItemOutcome>,
    pub saved: usize,
    pub duplicates: usize,
    pub failures: Vec<BatchFailure>,
}

impl BatchSummary {
    /// Whether any item failed
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Total number of candidates in the batch
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}

/// Service for committing import batches
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Persist a marked candidate batch
    ///
    /// Duplicates are skipped; a batch with nothing left to save returns
    /// a zero summary without any storage call. Candidates missing a date
    /// get local now. Per-item persistence failures never abort the batch;
    /// they are captured in the summary and every remaining candidate is
    /// still attempted.
    pub fn commit(&self, candidates: Vec<StatementCandidate>) -> UpiqResult<BatchSummary> {
        let mut summary = BatchSummary::default();

        for (index, candidate) in candidates.into_iter().enumerate() {
            if candidate.is_duplicate {
                summary.outcomes.push(ItemOutcome::Duplicate);
                summary.duplicates += 1;
                continue;
            }

            match self.save_candidate(candidate) {
                Ok(id) => {
                    summary.outcomes.push(ItemOutcome::Saved(id));
                    summary.saved += 1;
                }
                Err(e) => {
                    let error = e.to_string();
                    summary.outcomes.push(ItemOutcome::Failed(error.clone()));
                    summary.failures.push(BatchFailure { index, error });
                }
            }
        }

        Ok(summary)
    }

    /// Persist one candidate durably
    fn save_candidate(&self, candidate: StatementCandidate) -> Result<TransactionId, UpiqError> {
        let transaction = candidate.into_transaction(local_now());
        transaction.validate()?;

        let id = transaction.id;
        self.storage.transactions.upsert(transaction)?;

        if let Err(e) = self.storage.transactions.save() {
            // Keep memory consistent with disk before reporting the failure
            let _ = self.storage.transactions.delete(id);
            return Err(e);
        }

        Ok(id)
    }
}
