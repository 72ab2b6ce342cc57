//! Workspace store: the report bank, active selection, chat
//! transcript and free-question counter.
//!
//! The transcript and counter are a single session-wide pair, not
//! partitioned per report; switching reports mid-session keeps both.
//! All mutators are total: a missing report id is a silent no-op,
//! never an error.

use std::sync::RwLock;

use chrono::NaiveDate;

use crate::app_state::StateError;
use crate::models::enums::{MessageSender, ReportStatus};
use crate::models::{ChatMessage, Report};

/// Free questions granted per session before chat billing starts.
pub const INITIAL_FREE_QUESTIONS: u32 = 2;

// ═══════════════════════════════════════════════════════════
// Report changes
// ═══════════════════════════════════════════════════════════

/// Partial update for `update_report`. `None` fields are left
/// untouched; the review and interpretation flows use this to attach
/// their generated content.
#[derive(Debug, Clone, Default)]
pub struct ReportChanges {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub status: Option<ReportStatus>,
    pub latex_table: Option<String>,
    pub interpretation: Option<String>,
}

// ═══════════════════════════════════════════════════════════
// WorkspaceStore
// ═══════════════════════════════════════════════════════════

pub struct WorkspaceStore {
    /// Report bank, insertion order = display order.
    reports: RwLock<Vec<Report>>,
    /// Active selection, `None` outside a review/interpretation flow.
    current_report: RwLock<Option<Report>>,
    /// Session chat transcript, append-only.
    messages: RwLock<Vec<ChatMessage>>,
    /// Remaining unbilled chat questions.
    free_questions: RwLock<u32>,
}

impl WorkspaceStore {
    /// Create an empty store with a fresh free-question counter.
    pub fn new() -> Self {
        Self {
            reports: RwLock::new(Vec::new()),
            current_report: RwLock::new(None),
            messages: RwLock::new(Vec::new()),
            free_questions: RwLock::new(INITIAL_FREE_QUESTIONS),
        }
    }

    /// Store seeded the way the demo boots: two completed reports.
    pub fn demo() -> Self {
        let store = Self::new();
        if let Ok(mut reports) = store.reports.write() {
            reports.push(Report::new(
                "1",
                "Complete Blood Count (CBC)",
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
                ReportStatus::Completed,
            ));
            reports.push(Report::new(
                "2",
                "Lipid Panel",
                NaiveDate::from_ymd_opt(2024, 1, 10).unwrap_or_default(),
                ReportStatus::Completed,
            ));
        }
        store
    }

    // ── Read path ───────────────────────────────────────────

    /// Snapshot of the report bank in display order.
    pub fn reports(&self) -> Result<Vec<Report>, StateError> {
        let guard = self.reports.read().map_err(|_| StateError::LockPoisoned)?;
        Ok(guard.clone())
    }

    /// Look up one report by id.
    pub fn report(&self, id: &str) -> Result<Option<Report>, StateError> {
        let guard = self.reports.read().map_err(|_| StateError::LockPoisoned)?;
        Ok(guard.iter().find(|report| report.id == id).cloned())
    }

    /// The active selection, if any.
    pub fn current_report(&self) -> Result<Option<Report>, StateError> {
        let guard = self
            .current_report
            .read()
            .map_err(|_| StateError::LockPoisoned)?;
        Ok(guard.clone())
    }

    /// Snapshot of the chat transcript in append order.
    pub fn messages(&self) -> Result<Vec<ChatMessage>, StateError> {
        let guard = self.messages.read().map_err(|_| StateError::LockPoisoned)?;
        Ok(guard.clone())
    }

    /// Remaining unbilled questions.
    pub fn free_questions(&self) -> Result<u32, StateError> {
        let guard = self
            .free_questions
            .read()
            .map_err(|_| StateError::LockPoisoned)?;
        Ok(*guard)
    }

    // ── Mutation (write path) ───────────────────────────────

    /// Append a report. Id uniqueness is the caller's responsibility;
    /// the store does not enforce it.
    pub fn add_report(&self, report: Report) -> Result<(), StateError> {
        let mut guard = self.reports.write().map_err(|_| StateError::LockPoisoned)?;
        tracing::info!(id = %report.id, title = %report.title, "Report added");
        guard.push(report);
        Ok(())
    }

    /// Merge `changes` into the report with the given id. Silent
    /// no-op when the id is not found.
    pub fn update_report(&self, id: &str, changes: ReportChanges) -> Result<(), StateError> {
        let mut guard = self.reports.write().map_err(|_| StateError::LockPoisoned)?;
        if let Some(report) = guard.iter_mut().find(|report| report.id == id) {
            if let Some(title) = changes.title {
                report.title = title;
            }
            if let Some(date) = changes.date {
                report.date = date;
            }
            if let Some(status) = changes.status {
                report.status = status;
            }
            if let Some(latex_table) = changes.latex_table {
                report.latex_table = Some(latex_table);
            }
            if let Some(interpretation) = changes.interpretation {
                report.interpretation = Some(interpretation);
            }
            tracing::debug!(id, "Report updated");
        }
        Ok(())
    }

    /// Remove the report with the given id. Silent no-op when the id
    /// is not found.
    pub fn delete_report(&self, id: &str) -> Result<(), StateError> {
        let mut guard = self.reports.write().map_err(|_| StateError::LockPoisoned)?;
        let before = guard.len();
        guard.retain(|report| report.id != id);
        if guard.len() < before {
            tracing::info!(id, "Report deleted");
        }
        Ok(())
    }

    /// Set or clear the active selection.
    pub fn set_current_report(&self, report: Option<Report>) -> Result<(), StateError> {
        let mut guard = self
            .current_report
            .write()
            .map_err(|_| StateError::LockPoisoned)?;
        *guard = report;
        Ok(())
    }

    /// Append a timestamped entry to the transcript and return it.
    pub fn add_chat_message(
        &self,
        text: &str,
        sender: MessageSender,
    ) -> Result<ChatMessage, StateError> {
        let message = ChatMessage::new(sender, text);
        let mut guard = self.messages.write().map_err(|_| StateError::LockPoisoned)?;
        guard.push(message.clone());
        tracing::debug!(sender = message.sender.as_str(), "Chat message appended");
        Ok(message)
    }

    /// Decrement the free-question counter, flooring at zero.
    /// Returns the remaining count.
    pub fn decrement_free_questions(&self) -> Result<u32, StateError> {
        let mut guard = self
            .free_questions
            .write()
            .map_err(|_| StateError::LockPoisoned)?;
        *guard = guard.saturating_sub(1);
        tracing::debug!(remaining = *guard, "Free question consumed");
        Ok(*guard)
    }
}

impl Default for WorkspaceStore {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════
// Derived views over a reports snapshot
// ═══════════════════════════════════════════════════════════

/// Filter reports the way the bank's search box does: case-insensitive
/// substring match on the title, or raw substring match on the ISO
/// date string.
pub fn search_reports<'a>(reports: &'a [Report], term: &str) -> Vec<&'a Report> {
    let needle = term.to_lowercase();
    reports
        .iter()
        .filter(|report| {
            report.title.to_lowercase().contains(&needle) || report.date_str().contains(term)
        })
        .collect()
}

/// Number of completed reports in the snapshot.
pub fn completed_count(reports: &[Report]) -> usize {
    reports
        .iter()
        .filter(|report| report.status == ReportStatus::Completed)
        .count()
}

/// Number of reports still processing in the snapshot.
pub fn processing_count(reports: &[Report]) -> usize {
    reports
        .iter()
        .filter(|report| report.status == ReportStatus::Processing)
        .count()
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_report(id: &str) -> Report {
        Report::new(
            id,
            "Thyroid Panel",
            date(2024, 2, 1),
            ReportStatus::Completed,
        )
    }

    // --- Store lifecycle ---

    #[test]
    fn new_store_is_empty() {
        let store = WorkspaceStore::new();
        assert!(store.reports().unwrap().is_empty());
        assert!(store.current_report().unwrap().is_none());
        assert!(store.messages().unwrap().is_empty());
        assert_eq!(store.free_questions().unwrap(), INITIAL_FREE_QUESTIONS);
    }

    #[test]
    fn demo_store_seeds_two_completed_reports() {
        let store = WorkspaceStore::demo();
        let reports = store.reports().unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].id, "1");
        assert_eq!(reports[0].title, "Complete Blood Count (CBC)");
        assert_eq!(reports[0].date_str(), "2024-01-15");
        assert_eq!(reports[1].id, "2");
        assert_eq!(reports[1].title, "Lipid Panel");
        assert!(reports.iter().all(|r| r.status == ReportStatus::Completed));
    }

    // --- Report CRUD ---

    #[test]
    fn add_then_delete_restores_the_collection() {
        let store = WorkspaceStore::demo();
        let before: Vec<String> = store
            .reports()
            .unwrap()
            .iter()
            .map(|r| r.id.clone())
            .collect();

        store.add_report(sample_report("99")).unwrap();
        assert_eq!(store.reports().unwrap().len(), 3);

        store.delete_report("99").unwrap();
        let after: Vec<String> = store
            .reports()
            .unwrap()
            .iter()
            .map(|r| r.id.clone())
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn add_report_appends_in_display_order() {
        let store = WorkspaceStore::new();
        store.add_report(sample_report("a")).unwrap();
        store.add_report(sample_report("b")).unwrap();
        let reports = store.reports().unwrap();
        assert_eq!(reports[0].id, "a");
        assert_eq!(reports[1].id, "b");
    }

    #[test]
    fn update_report_merges_only_provided_fields() {
        let store = WorkspaceStore::demo();
        store
            .update_report(
                "1",
                ReportChanges {
                    status: Some(ReportStatus::Failed),
                    latex_table: Some("\\begin{table}".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        let report = store.report("1").unwrap().unwrap();
        assert_eq!(report.status, ReportStatus::Failed);
        assert_eq!(report.latex_table.as_deref(), Some("\\begin{table}"));
        // Untouched fields survive the merge
        assert_eq!(report.title, "Complete Blood Count (CBC)");
        assert_eq!(report.date_str(), "2024-01-15");
        assert!(report.interpretation.is_none());
    }

    #[test]
    fn update_report_with_missing_id_is_a_noop() {
        let store = WorkspaceStore::demo();
        store
            .update_report(
                "nope",
                ReportChanges {
                    title: Some("Ghost".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(store.reports().unwrap().len(), 2);
        assert!(store.report("nope").unwrap().is_none());
    }

    #[test]
    fn delete_report_with_missing_id_is_a_noop() {
        let store = WorkspaceStore::demo();
        store.delete_report("nope").unwrap();
        assert_eq!(store.reports().unwrap().len(), 2);
    }

    #[test]
    fn current_report_selection_round_trip() {
        let store = WorkspaceStore::demo();
        let report = store.report("2").unwrap().unwrap();
        store.set_current_report(Some(report)).unwrap();
        assert_eq!(store.current_report().unwrap().unwrap().id, "2");

        store.set_current_report(None).unwrap();
        assert!(store.current_report().unwrap().is_none());
    }

    // --- Transcript and counter ---

    #[test]
    fn chat_messages_append_in_order() {
        let store = WorkspaceStore::new();
        store
            .add_chat_message("What does my hemoglobin level mean?", MessageSender::User)
            .unwrap();
        store
            .add_chat_message("Your hemoglobin level is normal!", MessageSender::Assistant)
            .unwrap();

        let messages = store.messages().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, MessageSender::User);
        assert_eq!(messages[0].content, "What does my hemoglobin level mean?");
        assert_eq!(messages[1].sender, MessageSender::Assistant);
    }

    #[test]
    fn transcript_is_shared_across_report_switches() {
        let store = WorkspaceStore::demo();
        store
            .add_chat_message("first question", MessageSender::User)
            .unwrap();

        let lipid = store.report("2").unwrap();
        store.set_current_report(lipid).unwrap();
        assert_eq!(store.messages().unwrap().len(), 1);
    }

    #[test]
    fn decrement_floors_at_zero() {
        let store = WorkspaceStore::new();
        for _ in 0..5 {
            store.decrement_free_questions().unwrap();
        }
        assert_eq!(store.free_questions().unwrap(), 0);
    }

    #[test]
    fn decrement_returns_the_remaining_count() {
        let store = WorkspaceStore::new();
        assert_eq!(store.decrement_free_questions().unwrap(), 1);
        assert_eq!(store.decrement_free_questions().unwrap(), 0);
        assert_eq!(store.decrement_free_questions().unwrap(), 0);
    }

    // --- Derived views ---

    #[test]
    fn search_matches_title_case_insensitively() {
        let store = WorkspaceStore::demo();
        let reports = store.reports().unwrap();

        let hits = search_reports(&reports, "cbc");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");

        let hits = search_reports(&reports, "LIPID");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
    }

    #[test]
    fn search_matches_the_iso_date_string() {
        let store = WorkspaceStore::demo();
        let reports = store.reports().unwrap();

        let hits = search_reports(&reports, "2024-01");
        assert_eq!(hits.len(), 2);

        let hits = search_reports(&reports, "01-10");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
    }

    #[test]
    fn empty_search_term_matches_everything() {
        let store = WorkspaceStore::demo();
        let reports = store.reports().unwrap();
        assert_eq!(search_reports(&reports, "").len(), 2);
    }

    #[test]
    fn status_counts_over_a_snapshot() {
        let store = WorkspaceStore::demo();
        store
            .add_report(Report::new(
                "3",
                "Metabolic Panel",
                date(2024, 2, 5),
                ReportStatus::Processing,
            ))
            .unwrap();

        let reports = store.reports().unwrap();
        assert_eq!(completed_count(&reports), 2);
        assert_eq!(processing_count(&reports), 1);
    }
}
