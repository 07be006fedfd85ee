use std::sync::Arc;

use coleta_core::model::{ActivityRecord, ActivityStatus, SessionInfo, SourceType, Subject};
use coleta_core::time::fixed_today;
use storage::repository::{ActivityLogRepository, InMemoryActivityLog, PersistenceError};

use super::test_harness::{drive_dom, setup_wizard_harness, setup_wizard_harness_with_log};
use crate::vm::WizardIntent;

fn sample_info() -> SessionInfo {
    SessionInfo::new(Subject::Math, SourceType::Notebook, "p.10-12", fixed_today())
}

#[tokio::test(flavor = "current_thread")]
async fn wizard_smoke_starts_on_the_setup_form() {
    let mut harness = setup_wizard_harness();
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Configure the activity"), "missing step-1 heading in {html}");
    assert!(html.contains("Math"), "missing subject option in {html}");
    assert!(html.contains("Continue to roll call"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn wizard_smoke_submit_shows_roster_defaulted_to_done() {
    let mut harness = setup_wizard_harness();
    harness.rebuild();

    harness.handles.dispatch().call(WizardIntent::Submit(sample_info()));
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("Roll call: 6A"), "missing step-2 heading in {html}");
    assert!(html.contains("Ana Clara"), "missing first student in {html}");
    assert!(html.contains("Enzo Gabriel"), "missing last student in {html}");
    assert!(html.contains("Save"), "missing save action in {html}");

    let vm = harness.handles.vm();
    let snapshot = vm.read().clone();
    assert_eq!(snapshot.rows().len(), 5);
    assert!(snapshot.rows().iter().all(|r| r.status == ActivityStatus::Done));
}

#[tokio::test(flavor = "current_thread")]
async fn wizard_smoke_save_appends_and_offers_new_collection() {
    let log = Arc::new(InMemoryActivityLog::new());
    let mut harness = setup_wizard_harness_with_log(log.clone());
    harness.rebuild();

    let dispatch = harness.handles.dispatch();
    dispatch.call(WizardIntent::Submit(sample_info()));
    drive_dom(&mut harness.dom);
    dispatch.call(WizardIntent::SetStatus {
        index: 1,
        status: ActivityStatus::Absent,
    });
    drive_dom(&mut harness.dom);
    dispatch.call(WizardIntent::Save);
    drive_dom(&mut harness.dom);
    harness.drive_async().await;
    drive_dom(&mut harness.dom);

    let history = log.load_history().await.expect("history");
    assert_eq!(history.len(), 5);
    assert_eq!(history[0].student_name, "Ana Clara");
    assert_eq!(history[0].status, ActivityStatus::Done);
    assert_eq!(history[1].student_name, "Bernardo Silva");
    assert_eq!(history[1].status, ActivityStatus::Absent);

    let html = harness.render();
    assert!(html.contains("Collection saved."), "missing confirmation in {html}");
    assert!(html.contains("New Collection"), "missing reset action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn wizard_smoke_back_returns_to_setup_with_stored_values() {
    let mut harness = setup_wizard_harness();
    harness.rebuild();

    let dispatch = harness.handles.dispatch();
    dispatch.call(WizardIntent::Submit(sample_info()));
    drive_dom(&mut harness.dom);
    dispatch.call(WizardIntent::Back);
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("Configure the activity"), "missing step-1 heading in {html}");
    assert!(html.contains("p.10-12"), "missing preserved pages in {html}");
}

struct FailingActivityLog;

#[async_trait::async_trait]
impl ActivityLogRepository for FailingActivityLog {
    async fn load_history(&self) -> Result<Vec<ActivityRecord>, PersistenceError> {
        Err(PersistenceError::Connection("fail".to_string()))
    }

    async fn append(&self, _rows: &[ActivityRecord]) -> Result<(), PersistenceError> {
        Err(PersistenceError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn wizard_smoke_failed_save_keeps_table_and_allows_retry() {
    let mut harness = setup_wizard_harness_with_log(Arc::new(FailingActivityLog));
    harness.rebuild();

    let dispatch = harness.handles.dispatch();
    dispatch.call(WizardIntent::Submit(sample_info()));
    drive_dom(&mut harness.dom);
    dispatch.call(WizardIntent::Save);
    drive_dom(&mut harness.dom);
    harness.drive_async().await;
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("Save failed"), "missing error in {html}");
    assert!(html.contains("Ana Clara"), "table should stay intact in {html}");
    assert!(html.contains("collect-save"), "missing retry action in {html}");
    assert!(!html.contains("Saving..."), "save still pending in {html}");
    assert!(!html.contains("New Collection"), "reset offered after failure in {html}");
}
