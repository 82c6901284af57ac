//! Keeps the local view of the engine's rule set consistent with user edits,
//! server acknowledgements, and full reloads.
//!
//! `RuleTable` is a synchronous state machine: every network suspension point
//! is split into an explicit begin/finish pair so interleavings can be tested
//! without a transport. `Reconciler` drives it against a live `RuleClient`.

use ruledeck_client::{ClientError, RuleClient};
use ruledeck_common::Rule;

/// The single edit slot. Modeling it as one optional session makes
/// "at most one row editable at a time" structural.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing {
        rule_id: String,
        draft_condition: String,
        draft_action: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Condition,
    Action,
}

/// Issued by `begin_load`; carries the mutation clock at request time so a
/// reload that raced with a confirmed write can be recognized as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadGeneration(u64);

#[derive(Debug, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
    session: EditState,
    pending_delete: Option<String>,
    loading: bool,
    /// Bumped on every server-confirmed local mutation (commit, delete).
    epoch: u64,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical entries, in the order the server returned them.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn session(&self) -> &EditState {
        &self.session
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn begin_load(&mut self) -> LoadGeneration {
        self.loading = true;
        LoadGeneration(self.epoch)
    }

    /// Replaces the whole collection with the fetched snapshot. Returns false
    /// (and keeps the current collection) when a local mutation was confirmed
    /// after the snapshot was requested: last request wins, a stale response
    /// must not overwrite newer acknowledged state.
    pub fn finish_load(&mut self, generation: LoadGeneration, fetched: Vec<Rule>) -> bool {
        self.loading = false;
        if generation.0 != self.epoch {
            return false;
        }
        self.rules = fetched;
        true
    }

    /// Best-effort display: a failed fetch leaves the previous collection.
    pub fn fail_load(&mut self) {
        self.loading = false;
    }

    /// Opens an edit session seeded from the canonical entry. An already-open
    /// session for another row is silently replaced (last writer wins on
    /// focus). Returns false for an unknown id.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        let Some(rule) = self.rules.iter().find(|r| r.id == id) else {
            return false;
        };
        self.session = EditState::Editing {
            rule_id: rule.id.clone(),
            draft_condition: rule.condition.clone(),
            draft_action: rule.action.clone(),
        };
        true
    }

    /// Draft-only mutation; no-op when no session is open.
    pub fn update_draft(&mut self, field: DraftField, value: &str) {
        if let EditState::Editing {
            draft_condition,
            draft_action,
            ..
        } = &mut self.session
        {
            match field {
                DraftField::Condition => *draft_condition = value.to_string(),
                DraftField::Action => *draft_action = value.to_string(),
            }
        }
    }

    /// Discards the session. The canonical entry was never touched.
    pub fn cancel_edit(&mut self) {
        self.session = EditState::Idle;
    }

    /// What an update call should carry, or None when idle.
    pub fn commit_payload(&self) -> Option<Rule> {
        match &self.session {
            EditState::Idle => None,
            EditState::Editing {
                rule_id,
                draft_condition,
                draft_action,
            } => Some(Rule {
                id: rule_id.clone(),
                condition: draft_condition.clone(),
                action: draft_action.clone(),
            }),
        }
    }

    /// Server acknowledged the update: fold the drafts into exactly the
    /// matching entry, close the session, advance the mutation clock.
    pub fn finish_commit(&mut self) {
        if let Some(updated) = self.commit_payload() {
            if let Some(entry) = self.rules.iter_mut().find(|r| r.id == updated.id) {
                *entry = updated;
            }
            self.session = EditState::Idle;
            self.epoch += 1;
        }
    }

    /// Update failed: collection untouched, session stays open with the
    /// drafts intact so the operator can retry or cancel.
    pub fn fail_commit(&mut self) {}

    /// First half of the delete gate. Returns false for an unknown id.
    pub fn request_remove(&mut self, id: &str) -> bool {
        if !self.rules.iter().any(|r| r.id == id) {
            return false;
        }
        self.pending_delete = Some(id.to_string());
        true
    }

    /// Operator said yes: hands back the id to delete. None when nothing is
    /// pending, so the delete endpoint can never be reached unconfirmed.
    pub fn confirm_remove(&self) -> Option<String> {
        self.pending_delete.clone()
    }

    pub fn cancel_remove(&mut self) {
        self.pending_delete = None;
    }

    pub fn finish_remove(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            self.rules.retain(|r| r.id != id);
            self.epoch += 1;
        }
    }

    /// Delete failed: collection untouched, pending marker cleared.
    pub fn fail_remove(&mut self) {
        self.pending_delete = None;
    }
}

/// Async driver owning the table and its API client. Read-path failures
/// degrade to the previous view with a diagnostic; mutating failures are
/// returned so the shell can block the operator with a visible notice.
pub struct Reconciler {
    table: RuleTable,
    client: RuleClient,
}

impl Reconciler {
    pub fn new(client: RuleClient) -> Self {
        Self {
            table: RuleTable::new(),
            client,
        }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut RuleTable {
        &mut self.table
    }

    pub async fn load(&mut self) {
        let generation = self.table.begin_load();
        match self.client.list().await {
            Ok(rules) => {
                if !self.table.finish_load(generation, rules) {
                    tracing::debug!("discarded stale rule snapshot");
                }
            }
            Err(e) => {
                self.table.fail_load();
                tracing::warn!(error = %e, "rule list fetch failed, keeping previous view");
            }
        }
    }

    /// The caller refreshes its own view after a create; the reload happens
    /// here so the table reflects the server's ordering.
    pub async fn create(&mut self, rule: &Rule) -> Result<(), ClientError> {
        self.client.create(rule).await?;
        self.load().await;
        Ok(())
    }

    /// Returns Ok(false) when no session is open.
    pub async fn commit_edit(&mut self) -> Result<bool, ClientError> {
        let Some(payload) = self.table.commit_payload() else {
            return Ok(false);
        };
        match self.client.update(&payload).await {
            Ok(()) => {
                self.table.finish_commit();
                Ok(true)
            }
            Err(e) => {
                self.table.fail_commit();
                Err(e)
            }
        }
    }

    /// Returns Ok(false) when no delete is pending.
    pub async fn remove_confirmed(&mut self) -> Result<bool, ClientError> {
        let Some(id) = self.table.confirm_remove() else {
            return Ok(false);
        };
        match self.client.delete(&id).await {
            Ok(()) => {
                self.table.finish_remove();
                Ok(true)
            }
            Err(e) => {
                self.table.fail_remove();
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(id: &str, condition: &str, action: &str) -> Rule {
        Rule {
            id: id.into(),
            condition: condition.into(),
            action: action.into(),
        }
    }

    fn loaded_table(rules: Vec<Rule>) -> RuleTable {
        let mut table = RuleTable::new();
        let generation = table.begin_load();
        assert!(table.finish_load(generation, rules));
        table
    }

    #[test]
    fn load_replaces_collection_in_server_order() {
        let table = loaded_table(vec![
            rule("r2", "b > 1", "noop()"),
            rule("r1", "a > 1", "noop()"),
        ]);
        let ids: Vec<_> = table.rules().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["r2", "r1"]);
        assert!(!table.is_loading());
    }

    #[test]
    fn failed_load_keeps_previous_view() {
        let mut table = loaded_table(vec![rule("r1", "temp > 40", "alert('hi')")]);
        table.begin_load();
        assert!(table.is_loading());
        table.fail_load();
        assert!(!table.is_loading());
        assert_eq!(table.rules().len(), 1);
    }

    #[test]
    fn begin_then_cancel_leaves_entry_untouched() {
        let original = rule("r1", "temp > 40", "alert('hi')");
        let mut table = loaded_table(vec![original.clone()]);

        assert!(table.begin_edit("r1"));
        table.update_draft(DraftField::Condition, "temp > 99");
        table.update_draft(DraftField::Action, "shutdown()");
        table.cancel_edit();

        assert_eq!(table.session(), &EditState::Idle);
        assert_eq!(table.rules()[0], original);
    }

    #[test]
    fn session_seeded_from_canonical_values() {
        let mut table = loaded_table(vec![rule("r1", "temp > 40", "alert('hi')")]);
        table.begin_edit("r1");
        assert_eq!(
            table.commit_payload(),
            Some(rule("r1", "temp > 40", "alert('hi')"))
        );
    }

    #[test]
    fn begin_edit_unknown_id_is_refused() {
        let mut table = loaded_table(vec![rule("r1", "c", "a")]);
        assert!(!table.begin_edit("ghost"));
        assert_eq!(table.session(), &EditState::Idle);
    }

    #[test]
    fn second_begin_edit_replaces_open_session() {
        let mut table = loaded_table(vec![rule("r1", "c1", "a1"), rule("r2", "c2", "a2")]);
        table.begin_edit("r1");
        table.update_draft(DraftField::Condition, "changed");
        table.begin_edit("r2");
        assert_eq!(table.commit_payload(), Some(rule("r2", "c2", "a2")));
    }

    #[test]
    fn update_draft_without_session_is_a_noop() {
        let mut table = loaded_table(vec![rule("r1", "c", "a")]);
        table.update_draft(DraftField::Condition, "changed");
        assert_eq!(table.session(), &EditState::Idle);
        assert_eq!(table.rules()[0].condition, "c");
    }

    #[test]
    fn commit_updates_exactly_the_matching_entry() {
        let mut table = loaded_table(vec![rule("r1", "c1", "a1"), rule("r2", "c2", "a2")]);
        table.begin_edit("r1");
        table.update_draft(DraftField::Condition, "temp > 99");
        table.finish_commit();

        assert_eq!(table.rules()[0], rule("r1", "temp > 99", "a1"));
        assert_eq!(table.rules()[1], rule("r2", "c2", "a2"));
        assert_eq!(table.session(), &EditState::Idle);
    }

    #[test]
    fn failed_commit_keeps_session_and_collection() {
        let mut table = loaded_table(vec![rule("r1", "c1", "a1")]);
        table.begin_edit("r1");
        table.update_draft(DraftField::Action, "retry_me()");
        table.fail_commit();

        assert_eq!(table.rules()[0], rule("r1", "c1", "a1"));
        assert_eq!(
            table.commit_payload(),
            Some(rule("r1", "c1", "retry_me()"))
        );
    }

    #[test]
    fn stale_reload_does_not_clobber_committed_value() {
        let mut table = loaded_table(vec![rule("r1", "old", "a1")]);

        // Reload requested, then an edit commits before the response lands.
        let generation = table.begin_load();
        table.begin_edit("r1");
        table.update_draft(DraftField::Condition, "new");
        table.finish_commit();

        // The response carries the pre-commit server state.
        let applied = table.finish_load(generation, vec![rule("r1", "old", "a1")]);
        assert!(!applied);
        assert_eq!(table.rules()[0].condition, "new");
    }

    #[test]
    fn reload_issued_after_commit_applies() {
        let mut table = loaded_table(vec![rule("r1", "old", "a1")]);
        table.begin_edit("r1");
        table.update_draft(DraftField::Condition, "new");
        table.finish_commit();

        let generation = table.begin_load();
        assert!(table.finish_load(generation, vec![rule("r1", "new", "a1")]));
    }

    #[test]
    fn unconfirmed_remove_yields_no_delete_target() {
        let mut table = loaded_table(vec![rule("r1", "c", "a")]);
        assert_eq!(table.confirm_remove(), None);
        assert!(table.request_remove("r1"));
        table.cancel_remove();
        assert_eq!(table.confirm_remove(), None);
        assert_eq!(table.rules().len(), 1);
    }

    #[test]
    fn confirmed_remove_drops_exactly_one_entry() {
        let mut table = loaded_table(vec![rule("r1", "c1", "a1"), rule("r2", "c2", "a2")]);
        assert!(table.request_remove("r1"));
        assert_eq!(table.confirm_remove().as_deref(), Some("r1"));
        table.finish_remove();

        assert_eq!(table.rules(), &[rule("r2", "c2", "a2")]);
        assert_eq!(table.pending_delete(), None);
    }

    #[test]
    fn failed_remove_keeps_collection() {
        let mut table = loaded_table(vec![rule("r1", "c", "a")]);
        table.request_remove("r1");
        table.fail_remove();
        assert_eq!(table.rules().len(), 1);
        assert_eq!(table.pending_delete(), None);
    }

    #[test]
    fn remove_unknown_id_is_refused() {
        let mut table = loaded_table(vec![rule("r1", "c", "a")]);
        assert!(!table.request_remove("ghost"));
    }

    #[test]
    fn remove_advances_mutation_clock() {
        let mut table = loaded_table(vec![rule("r1", "c", "a"), rule("r2", "c", "a")]);

        let generation = table.begin_load();
        table.request_remove("r1");
        table.finish_remove();

        // Snapshot from before the delete still lists r1; discard it.
        let applied = table.finish_load(
            generation,
            vec![rule("r1", "c", "a"), rule("r2", "c", "a")],
        );
        assert!(!applied);
        assert_eq!(table.rules().len(), 1);
    }
}
