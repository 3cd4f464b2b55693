use std::sync::atomic::Ordering;

use dioxus::prelude::Key;
use storage::repository::KeyValueRepository;
use tracker_core::checklist::{CHECKLIST_STORAGE_KEY, CODING_CHECKLIST};
use tracker_core::model::{RepoId, TaskId};

use super::dashboard::DashboardIntent;
use super::test_harness::{
    FakeApi, mount_dashboard, sample_summary, setup_dashboard, summary_after_t2, summary_of,
};
use crate::views::{LoadState, ViewError};
use crate::vm::PanelId;
use crate::vm::test_fixtures::{repo_with_tasks, stage, task};

fn t(id: &str) -> TaskId {
    TaskId::new(id)
}

fn r(id: &str) -> RepoId {
    RepoId::new(id)
}

#[tokio::test(flavor = "current_thread")]
async fn shows_loading_until_the_first_fetch_lands() {
    let api = FakeApi::serving(sample_summary());
    api.hold_fetch.store(true, Ordering::SeqCst);
    let harness = mount_dashboard(api);

    let html = harness.render();
    assert!(html.contains("Loading checklist…"), "missing loading text in {html}");
    assert!(html.contains("Select a repository"), "missing placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn renders_hierarchy_with_default_selection() {
    let harness = setup_dashboard(FakeApi::serving(sample_summary())).await;
    let html = harness.render();

    assert!(html.contains("Foundations"), "missing stage in {html}");
    assert!(html.contains("Advanced"), "missing second stage in {html}");
    assert!(html.contains("25.0%"), "missing overall progress in {html}");
    assert!(html.contains("class=\"repo-entry active\""), "missing active repo in {html}");
    assert!(html.contains("class=\"repo-entry disabled\""), "missing locked repo in {html}");
    assert!(html.contains("1/2"), "missing repo counts in {html}");

    assert!(html.contains("Task t1"), "missing task in {html}");
    assert!(html.contains("View submitted link"), "missing link in {html}");
    assert!(html.contains("href=\"https://example.com/t1\""), "missing href in {html}");
    assert!(html.contains("Completed"), "missing completed label in {html}");
    assert!(html.contains("Mark complete"), "missing action label in {html}");

    assert!(html.contains("1 / 3 tasks complete"), "missing stage card in {html}");
    assert!(html.contains("1 / 2 tasks complete"), "missing repo card in {html}");
    assert_eq!(harness.api.fetch_count(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn failed_load_shows_error_in_stage_list() {
    let api = FakeApi::serving(sample_summary());
    api.fail_fetch.store(true, Ordering::SeqCst);
    let harness = setup_dashboard(api).await;

    let html = harness.render();
    assert!(html.contains("Unable to load data."), "missing error in {html}");
    assert!(
        html.contains("Select a repository to view its metrics."),
        "missing placeholder in {html}"
    );
    assert_eq!(
        harness.inspect(|state| *state.load_state.peek()),
        LoadState::Failed(ViewError::LoadFailed)
    );
}

#[tokio::test(flavor = "current_thread")]
async fn server_strings_render_as_text() {
    let mut hostile = task("x1", true, true, Some("javascript:alert(1)"));
    hostile.title = "<script>alert('x')</script>".into();
    let summary = summary_of(vec![stage(
        "s1",
        "<b>Bold</b>",
        vec![repo_with_tasks("r1", "s1", vec![hostile])],
    )]);
    let harness = setup_dashboard(FakeApi::serving(summary)).await;

    let html = harness.render();
    assert!(!html.contains("<script>"), "script injected in {html}");
    assert!(!html.contains("<b>Bold</b>"), "markup injected in {html}");
    assert!(html.contains("&lt;script&gt;"), "title not escaped in {html}");
    assert!(!html.contains("href=\"javascript:"), "unsafe href in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn links_panel_placeholder_without_links() {
    let summary = summary_of(vec![stage(
        "s1",
        "Foundations",
        vec![repo_with_tasks("r1", "s1", vec![task("t1", false, true, None)])],
    )]);
    let harness = setup_dashboard(FakeApi::serving(summary)).await;
    let html = harness.render();
    assert!(html.contains("No links submitted yet."), "missing placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn links_panel_merges_stages_sharing_a_title() {
    let summary = summary_of(vec![
        stage(
            "s1",
            "Foundations",
            vec![repo_with_tasks(
                "r1",
                "s1",
                vec![task("t1", true, true, Some("https://example.com/a"))],
            )],
        ),
        stage(
            "s2",
            "Foundations",
            vec![repo_with_tasks(
                "r2",
                "s2",
                vec![task("t2", true, true, Some("https://example.com/b"))],
            )],
        ),
    ]);
    let harness = setup_dashboard(FakeApi::serving(summary)).await;
    let html = harness.render();

    assert_eq!(html.matches("class=\"links-stage\"").count(), 1, "{html}");
    assert_eq!(html.matches("class=\"link-entry\"").count(), 2, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn locked_repository_cannot_be_selected() {
    let mut harness = setup_dashboard(FakeApi::serving(sample_summary())).await;

    harness.dispatch(DashboardIntent::SelectRepo(r("r2")));
    assert_eq!(
        harness.inspect(|state| state.selected_repo.peek().clone()),
        Some(r("r1"))
    );
}

#[tokio::test(flavor = "current_thread")]
async fn repository_behind_incomplete_stage_does_not_resolve() {
    let mut harness = setup_dashboard(FakeApi::serving(sample_summary())).await;

    harness.dispatch(DashboardIntent::SelectRepo(r("r3")));
    let html = harness.render();
    assert!(
        html.contains("Choose a repository from the left panel to see its checklist."),
        "missing details placeholder in {html}"
    );
    assert!(
        html.contains("Select a repository to view its stage."),
        "missing stage placeholder in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn blank_link_sends_nothing() {
    let mut harness = setup_dashboard(FakeApi::serving(sample_summary())).await;

    harness.dispatch(DashboardIntent::ToggleTaskForm(t("t2")));
    harness.dispatch(DashboardIntent::EditLink(t("t2"), "   ".into()));
    harness.dispatch(DashboardIntent::SubmitLink {
        repo_id: r("r1"),
        task_id: t("t2"),
    });
    harness.settle().await;

    assert!(harness.api.post_log().is_empty());
    assert_eq!(harness.api.fetch_count(), 1);
    let form = harness.inspect(|state| state.task_forms.peek().get(&t("t2")).cloned());
    let form = form.expect("form state");
    assert!(form.expanded);
    assert!(!form.submitting);
    assert!(harness.render().contains("Paste link to your work"));
}

#[tokio::test(flavor = "current_thread")]
async fn successful_submit_refetches_and_resets_forms() {
    let api = FakeApi::serving(sample_summary()).then_serving(summary_after_t2());
    let mut harness = setup_dashboard(api).await;

    harness.dispatch(DashboardIntent::ToggleTaskForm(t("t2")));
    harness.dispatch(DashboardIntent::EditLink(t("t2"), "  https://example.com/t2 ".into()));
    harness.dispatch(DashboardIntent::SubmitLink {
        repo_id: r("r1"),
        task_id: t("t2"),
    });
    harness.settle().await;

    assert_eq!(
        harness.api.post_log(),
        vec![(r("r1"), t("t2"), "https://example.com/t2".to_owned())]
    );
    assert_eq!(harness.api.fetch_count(), 2);
    assert!(harness.inspect(|state| state.task_forms.peek().is_empty()));

    let html = harness.render();
    assert!(html.contains("href=\"https://example.com/t2\""), "missing new link in {html}");
    assert!(html.contains("2 / 2 tasks complete"), "missing repo progress in {html}");
    assert!(!html.contains("Paste link to your work"), "form still open in {html}");
    assert!(!html.contains("class=\"repo-entry disabled\""), "r2 still locked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn refresh_keeps_guard_on_rows_still_submitting() {
    let api = FakeApi::serving(sample_summary()).then_serving(summary_after_t2());
    let mut harness = setup_dashboard(api).await;

    // t3's request is still running when t2's refresh lands.
    let started = harness.inspect(|state| {
        state.update_form(&t("t3"), |form| {
            form.toggle();
            form.edit("https://example.com/t3".into());
            form.begin_submit().is_ok()
        })
    });
    assert!(started);

    harness.dispatch(DashboardIntent::ToggleTaskForm(t("t2")));
    harness.dispatch(DashboardIntent::EditLink(t("t2"), "https://example.com/t2".into()));
    harness.dispatch(DashboardIntent::SubmitLink {
        repo_id: r("r1"),
        task_id: t("t2"),
    });
    harness.settle().await;
    assert_eq!(harness.api.fetch_count(), 2);

    let forms = harness.inspect(|state| state.task_forms.peek().clone());
    assert!(!forms.contains_key(&t("t2")));
    let t3 = forms.get(&t("t3")).expect("t3 form kept");
    assert!(t3.submitting);
    assert_eq!(t3.draft, "https://example.com/t3");

    harness.dispatch(DashboardIntent::SubmitLink {
        repo_id: r("r2"),
        task_id: t("t3"),
    });
    harness.settle().await;
    assert_eq!(harness.api.post_log().len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn rejected_submit_shows_notice_and_keeps_draft() {
    let api = FakeApi::serving(sample_summary());
    api.fail_post.store(true, Ordering::SeqCst);
    let mut harness = setup_dashboard(api).await;

    harness.dispatch(DashboardIntent::ToggleTaskForm(t("t2")));
    harness.dispatch(DashboardIntent::EditLink(t("t2"), "https://example.com/t2".into()));
    harness.dispatch(DashboardIntent::SubmitLink {
        repo_id: r("r1"),
        task_id: t("t2"),
    });
    harness.settle().await;

    assert_eq!(harness.api.post_log().len(), 1);
    assert_eq!(harness.api.fetch_count(), 1);
    let html = harness.render();
    assert!(
        html.contains("Could not update task. Ensure prerequisites are met."),
        "missing notice in {html}"
    );

    let form = harness
        .inspect(|state| state.task_forms.peek().get(&t("t2")).cloned())
        .expect("form state");
    assert!(form.expanded);
    assert!(!form.submitting);
    assert_eq!(form.draft, "https://example.com/t2");

    harness.dispatch(DashboardIntent::DismissNotice);
    assert!(!harness.render().contains("Could not update task."));
}

#[tokio::test(flavor = "current_thread")]
async fn failed_refresh_keeps_previous_snapshot() {
    let api = FakeApi::serving(sample_summary()).then_serving(summary_after_t2());
    let mut harness = setup_dashboard(api).await;
    harness.api.fail_fetch.store(true, Ordering::SeqCst);

    harness.dispatch(DashboardIntent::ToggleTaskForm(t("t2")));
    harness.dispatch(DashboardIntent::EditLink(t("t2"), "https://example.com/t2".into()));
    harness.dispatch(DashboardIntent::SubmitLink {
        repo_id: r("r1"),
        task_id: t("t2"),
    });
    harness.settle().await;

    assert_eq!(harness.api.fetch_count(), 2);
    let html = harness.render();
    assert!(html.contains("Unable to load data."), "missing error in {html}");
    assert!(html.contains("Repo r1"), "details dropped in {html}");
    let stages = harness.inspect(|state| {
        state
            .summary
            .peek()
            .as_ref()
            .map_or(0, |summary| summary.stages.len())
    });
    assert_eq!(stages, 2);
}

#[tokio::test(flavor = "current_thread")]
async fn panels_are_mutually_exclusive() {
    let mut harness = setup_dashboard(FakeApi::serving(sample_summary())).await;
    let active = |harness: &super::test_harness::DashboardHarness| {
        harness.inspect(|state| state.panels.peek().active())
    };

    harness.dispatch(DashboardIntent::TogglePanel(PanelId::Links));
    assert_eq!(active(&harness), Some(PanelId::Links));
    let html = harness.render();
    assert!(html.contains("class=\"panel-overlay visible\""), "overlay hidden in {html}");

    harness.dispatch(DashboardIntent::TogglePanel(PanelId::Checklist));
    assert_eq!(active(&harness), Some(PanelId::Checklist));
    assert_eq!(harness.render().matches("slide-panel open").count(), 1);

    harness.dispatch(DashboardIntent::TogglePanel(PanelId::Checklist));
    assert_eq!(active(&harness), None);

    harness.dispatch(DashboardIntent::TogglePanel(PanelId::Links));
    harness.dispatch(DashboardIntent::ClosePanel);
    harness.dispatch(DashboardIntent::ClosePanel);
    assert_eq!(active(&harness), None);
    assert!(!harness.render().contains("panel-overlay visible"));
}

#[tokio::test(flavor = "current_thread")]
async fn escape_key_closes_the_open_panel() {
    let mut harness = setup_dashboard(FakeApi::serving(sample_summary())).await;
    let active = |harness: &super::test_harness::DashboardHarness| {
        harness.inspect(|state| state.panels.peek().active())
    };
    let html = harness.render();
    assert!(
        html.contains("id=\"dashboard\""),
        "missing focusable root in {html}"
    );

    harness.dispatch(DashboardIntent::TogglePanel(PanelId::Checklist));
    harness.press_key(Key::Enter);
    assert_eq!(active(&harness), Some(PanelId::Checklist));

    harness.press_key(Key::Escape);
    assert_eq!(active(&harness), None);
    assert!(!harness.render().contains("panel-overlay visible"));

    harness.press_key(Key::Escape);
    assert_eq!(active(&harness), None);
}

#[tokio::test(flavor = "current_thread")]
async fn opening_a_form_focuses_its_input_after_render() {
    let mut harness = setup_dashboard(FakeApi::serving(sample_summary())).await;

    harness.dispatch(DashboardIntent::ToggleTaskForm(t("t2")));
    harness.settle().await;

    assert!(harness.render().contains("id=\"task-link-t2\""));
    assert_eq!(harness.inspect(|state| state.focus_task.peek().clone()), None);
}

#[tokio::test(flavor = "current_thread")]
async fn quick_checklist_toggles_are_all_kept() {
    let mut harness = setup_dashboard(FakeApi::serving(sample_summary())).await;
    let first = CODING_CHECKLIST[3].tasks[0];
    let second = CODING_CHECKLIST[4].tasks[2];

    harness.dispatch(DashboardIntent::SetChecklistItem {
        title: first.to_owned(),
        checked: true,
    });
    harness.dispatch(DashboardIntent::SetChecklistItem {
        title: second.to_owned(),
        checked: true,
    });
    harness.settle().await;

    let stored = harness.checklist_service().load().await;
    assert!(stored.is_checked(first));
    assert!(stored.is_checked(second));
    assert!(harness.inspect(|state| {
        let checklist = state.checklist.peek();
        checklist.is_checked(first) && checklist.is_checked(second)
    }));

    harness.dispatch(DashboardIntent::SetChecklistItem {
        title: first.to_owned(),
        checked: false,
    });
    harness.settle().await;
    let stored = harness.checklist_service().load().await;
    assert!(!stored.is_checked(first));
    assert!(stored.is_checked(second));
}

#[tokio::test(flavor = "current_thread")]
async fn checklist_toggle_is_persisted() {
    let mut harness = setup_dashboard(FakeApi::serving(sample_summary())).await;
    let title = CODING_CHECKLIST[1].tasks[2];

    harness.dispatch(DashboardIntent::SetChecklistItem {
        title: title.to_owned(),
        checked: true,
    });
    harness.settle().await;

    let raw = harness
        .storage
        .local
        .get_item(CHECKLIST_STORAGE_KEY)
        .await
        .expect("read")
        .expect("stored");
    assert!(raw.contains(title), "missing entry in {raw}");
    assert!(harness.checklist_service().load().await.is_checked(title));
    assert!(harness.inspect(|state| state.checklist.peek().is_checked(title)));
}

#[tokio::test(flavor = "current_thread")]
async fn submitted_links_open_externally() {
    let mut harness = setup_dashboard(FakeApi::serving(sample_summary())).await;

    harness.dispatch(DashboardIntent::OpenLink("https://example.com/t1".into()));
    assert_eq!(
        *harness.opener.opened.lock().unwrap(),
        vec!["https://example.com/t1".to_owned()]
    );
}
