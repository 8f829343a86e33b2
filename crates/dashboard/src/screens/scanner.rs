//! Ticket scanner screen.
//!
//! A scan is a tokio task that waits for the configured delay and then looks
//! the code up. The screen keeps a [`ScanHandle`] for the pending task; the
//! caller awaits the matching [`PendingScan`] without holding the dashboard.
//! Dropping the handle (leaving the screen, reset) cancels the task, and a
//! result whose handle is gone is never applied. The task also leaves its
//! outcome on the handle, so a scan whose waiter went away is still applied
//! the next time the screen is touched.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use eventgate_catalog::{ReferenceData, ScanError, ScannedTicket, TicketStatus, lookup_ticket};

use crate::Notification;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScanTaskError {
    #[error("Veuillez saisir un code QR")]
    EmptyCode,

    #[error("un scan est déjà en cours")]
    InProgress,

    #[error("scan annulé")]
    Cancelled,
}

pub type LookupResult = Result<ScannedTicket, ScanError>;

pub type ScanOutcome = Result<LookupResult, ScanTaskError>;

/// Cancels its scan task when dropped.
#[derive(Debug)]
struct ScanHandle {
    id: u64,
    cancel: Option<oneshot::Sender<()>>,
    done: watch::Receiver<Option<ScanOutcome>>,
}

impl ScanHandle {
    fn outcome(&self) -> Option<ScanOutcome> {
        self.done.borrow().clone()
    }
}

impl Drop for ScanHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            // The task may already be done; nothing to do then.
            let _ = cancel.send(());
        }
    }
}

/// The awaitable side of a started scan.
#[derive(Debug)]
pub struct PendingScan {
    id: u64,
    join: JoinHandle<ScanOutcome>,
}

impl PendingScan {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub async fn wait(self) -> ScanOutcome {
        match self.join.await {
            Ok(outcome) => outcome,
            Err(_) => Err(ScanTaskError::Cancelled),
        }
    }
}

/// Completed scan as shown on the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub code: String,
    pub result: LookupResult,
}

impl ScanReport {
    pub fn notification(&self) -> Notification {
        match &self.result {
            Ok(_) => Notification::info("Billet valide", "L'accès est autorisé"),
            Err(err @ ScanError::TicketInvalidStatus(_)) => {
                Notification::destructive("Billet invalide", err.to_string())
            }
            Err(err @ ScanError::TicketNotFound) => {
                Notification::destructive("Code QR invalide", err.to_string())
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct ScannerState {
    input: String,
    pending: Option<ScanHandle>,
    result: Option<ScanReport>,
    reported: Option<u64>,
    next_id: u64,
}

impl ScannerState {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn result(&self) -> Option<&ScanReport> {
        self.result.as_ref()
    }

    /// True while a started scan has not produced its outcome yet.
    pub fn is_scanning(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| handle.outcome().is_none())
    }

    /// Apply the outcome of a scan that finished without anyone waiting on it.
    pub fn settle(&mut self) {
        let Some(handle) = &self.pending else {
            return;
        };
        let id = handle.id;
        if let Some(outcome) = handle.outcome() {
            debug!(scan_id = id, "settling unattended scan");
            // The handle is cleared whatever the outcome.
            let _ = self.finish(id, outcome);
        }
    }

    /// Spawn a scan of `code`. Must be called from within a tokio runtime.
    pub fn start(
        &mut self,
        code: &str,
        reference: Arc<dyn ReferenceData>,
        delay: Duration,
    ) -> Result<PendingScan, ScanTaskError> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(ScanTaskError::EmptyCode);
        }
        self.settle();
        if self.pending.is_some() {
            return Err(ScanTaskError::InProgress);
        }

        self.input = code.to_string();
        self.result = None;
        self.reported = None;
        let id = self.next_id;
        self.next_id += 1;

        let (cancel, cancelled) = oneshot::channel::<()>();
        let (done_tx, done) = watch::channel(None);
        let code = trimmed.to_string();
        let join = tokio::spawn(async move {
            let outcome = tokio::select! {
                biased;
                _ = cancelled => Err(ScanTaskError::Cancelled),
                _ = tokio::time::sleep(delay) => Ok(lookup_ticket(&*reference, &code)),
            };
            done_tx.send_replace(Some(outcome.clone()));
            outcome
        });

        debug!(scan_id = id, "scan started");
        self.pending = Some(ScanHandle {
            id,
            cancel: Some(cancel),
            done,
        });
        Ok(PendingScan { id, join })
    }

    /// Apply the outcome of scan `id` if it is still the pending one.
    ///
    /// A scan already applied by [`ScannerState::settle`] returns its report.
    pub fn finish(&mut self, id: u64, outcome: ScanOutcome) -> Result<ScanReport, ScanTaskError> {
        match (&self.pending, &self.result) {
            (Some(handle), _) if handle.id == id => {}
            (_, Some(report)) if self.reported == Some(id) => return Ok(report.clone()),
            _ => {
                debug!(scan_id = id, "stale scan result discarded");
                return Err(ScanTaskError::Cancelled);
            }
        }
        self.pending = None;

        let result = outcome?;
        let report = ScanReport {
            code: self.input.trim().to_string(),
            result,
        };
        match &report.result {
            Ok(scanned) => info!(ticket_id = %scanned.ticket.id, "ticket accepted"),
            Err(err) => info!(code = %report.code, reason = %err, "ticket rejected"),
        }
        self.result = Some(report.clone());
        self.reported = Some(id);
        Ok(report)
    }

    /// Clear input and result; a pending scan is cancelled.
    pub fn reset(&mut self) {
        self.pending = None;
        self.result = None;
        self.reported = None;
        self.input.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResultView {
    pub code: String,
    pub valid: bool,
    pub scanned: Option<ScannedTicket>,
    pub notification: Notification,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCode {
    pub code: String,
    pub event_name: Option<String>,
    pub status: TicketStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScannerView {
    pub input: String,
    pub scanning: bool,
    pub result: Option<ScanResultView>,
    pub test_codes: Vec<TestCode>,
}

impl ScannerView {
    pub fn new(state: &ScannerState, reference: &dyn ReferenceData) -> Self {
        let result = state.result().map(|report| {
            let scanned = match &report.result {
                Ok(scanned) => Some(scanned.clone()),
                Err(ScanError::TicketInvalidStatus(scanned)) => Some(scanned.as_ref().clone()),
                Err(ScanError::TicketNotFound) => None,
            };
            ScanResultView {
                code: report.code.clone(),
                valid: report.result.is_ok(),
                scanned,
                notification: report.notification(),
            }
        });

        let test_codes = reference
            .tickets()
            .iter()
            .map(|t| TestCode {
                code: t.qr_code.clone(),
                event_name: reference.event(t.event_id).map(|e| e.name.clone()),
                status: t.status,
            })
            .collect();

        Self {
            input: state.input().to_string(),
            scanning: state.is_scanning(),
            result,
            test_codes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventgate_catalog::InMemoryCatalog;
    use eventgate_catalog::seed::{USED_JAZZ_CODE, VALID_CONCERT_CODE};

    const DELAY: Duration = Duration::from_millis(1500);

    fn catalog() -> Arc<dyn ReferenceData> {
        Arc::new(InMemoryCatalog::seeded())
    }

    #[tokio::test(start_paused = true)]
    async fn valid_code_completes_after_the_delay() {
        let mut state = ScannerState::default();
        let pending = state.start(VALID_CONCERT_CODE, catalog(), DELAY).unwrap();
        assert!(state.is_scanning());

        let id = pending.id();
        let outcome = pending.wait().await;
        let report = state.finish(id, outcome).unwrap();

        assert!(report.result.is_ok());
        assert_eq!(report.notification().title, "Billet valide");
        assert!(!state.is_scanning());
        assert_eq!(state.result(), Some(&report));
    }

    #[tokio::test(start_paused = true)]
    async fn code_is_trimmed_before_lookup() {
        let mut state = ScannerState::default();
        let pending = state
            .start(&format!("  {VALID_CONCERT_CODE}\n"), catalog(), DELAY)
            .unwrap();
        let id = pending.id();
        let report = state.finish(id, pending.wait().await).unwrap();
        assert!(report.result.is_ok());
        assert_eq!(report.code, VALID_CONCERT_CODE);
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_codes_are_reported() {
        let mut state = ScannerState::default();

        let pending = state.start("QR-UNKNOWN-000", catalog(), DELAY).unwrap();
        let id = pending.id();
        let report = state.finish(id, pending.wait().await).unwrap();
        assert_eq!(report.result, Err(ScanError::TicketNotFound));
        assert_eq!(report.notification().title, "Code QR invalide");

        let pending = state.start(USED_JAZZ_CODE, catalog(), DELAY).unwrap();
        let id = pending.id();
        let report = state.finish(id, pending.wait().await).unwrap();
        assert_eq!(report.notification().description, "Statut: utilise");
    }

    #[tokio::test(start_paused = true)]
    async fn blank_code_and_second_scan_are_refused() {
        let mut state = ScannerState::default();
        assert_eq!(
            state.start("   ", catalog(), DELAY).unwrap_err(),
            ScanTaskError::EmptyCode
        );

        let _pending = state.start(VALID_CONCERT_CODE, catalog(), DELAY).unwrap();
        assert_eq!(
            state.start(VALID_CONCERT_CODE, catalog(), DELAY).unwrap_err(),
            ScanTaskError::InProgress
        );
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_state_cancels_the_task() {
        let mut state = ScannerState::default();
        let pending = state.start(VALID_CONCERT_CODE, catalog(), DELAY).unwrap();
        drop(state);
        assert_eq!(pending.wait().await, Err(ScanTaskError::Cancelled));
    }

    #[tokio::test(start_paused = true)]
    async fn reset_discards_the_pending_result() {
        let mut state = ScannerState::default();
        let pending = state.start(VALID_CONCERT_CODE, catalog(), DELAY).unwrap();
        let id = pending.id();
        state.reset();

        let outcome = pending.wait().await;
        assert_eq!(outcome, Err(ScanTaskError::Cancelled));
        assert_eq!(state.finish(id, outcome), Err(ScanTaskError::Cancelled));
        assert!(state.result().is_none());
        assert_eq!(state.input(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn unattended_scan_is_applied_on_the_next_start() {
        let mut state = ScannerState::default();
        let pending = state.start(VALID_CONCERT_CODE, catalog(), DELAY).unwrap();
        let first = pending.id();
        drop(pending);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert!(!state.is_scanning());

        let pending = state.start(USED_JAZZ_CODE, catalog(), DELAY).unwrap();
        assert_ne!(pending.id(), first);
        assert!(state.is_scanning());
    }

    #[tokio::test(start_paused = true)]
    async fn settled_scan_still_reports_to_its_waiter() {
        let mut state = ScannerState::default();
        let pending = state.start(VALID_CONCERT_CODE, catalog(), DELAY).unwrap();
        let id = pending.id();
        let outcome = pending.wait().await;

        state.settle();
        assert!(state.result().is_some_and(|r| r.result.is_ok()));

        let report = state.finish(id, outcome).unwrap();
        assert_eq!(state.result(), Some(&report));
    }

    #[test]
    fn view_lists_seeded_test_codes() {
        let reference = InMemoryCatalog::seeded();
        let view = ScannerView::new(&ScannerState::default(), &reference);
        assert_eq!(view.test_codes.len(), 4);
        assert!(view.test_codes.iter().all(|c| c.event_name.is_some()));
        assert!(view.result.is_none());
    }
}
