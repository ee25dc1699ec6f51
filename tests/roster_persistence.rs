//! Integration tests for roster editing against the file store.
//!
//! These tests verify the editor flow end to end:
//! 1. Save, sort and clear commands write the JSON record on disk
//! 2. Unreadable records fall back to an empty roster
//! 3. A draw persists the roster it runs over and clearing cancels it

use std::sync::Arc;

use tempfile::TempDir;

use presenter_picker::adapters::{FileRosterStore, InMemoryEventBus, InMemoryNotifier};
use presenter_picker::application::{
    ClearRosterCommand, ClearRosterHandler, ClearRosterResult, LoadRosterHandler,
    LoadRosterQuery, SaveRosterCommand, SaveRosterHandler, SelectionConfig, SelectionController,
    SortRosterCommand, SortRosterHandler,
};
use presenter_picker::domain::roster::RosterError;
use presenter_picker::domain::selection::SelectionPhase;
use presenter_picker::ports::RosterStore;

const KEY: &str = "iwmi_team_members";

struct Editor {
    dir: TempDir,
    store: Arc<FileRosterStore>,
    notifier: Arc<InMemoryNotifier>,
    bus: Arc<InMemoryEventBus>,
    selection: Arc<SelectionController>,
}

impl Editor {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(FileRosterStore::new(dir.path(), KEY));
        let notifier = Arc::new(InMemoryNotifier::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let selection = Arc::new(SelectionController::with_config(
            store.clone(),
            notifier.clone(),
            bus.clone(),
            SelectionConfig::default().with_seed(21),
        ));
        Self {
            dir,
            store,
            notifier,
            bus,
            selection,
        }
    }

    async fn save(&self, text: &str) {
        SaveRosterHandler::new(self.store.clone(), self.notifier.clone(), self.bus.clone())
            .handle(SaveRosterCommand {
                text: text.to_string(),
            })
            .await
            .unwrap();
    }

    async fn load(&self) -> Vec<String> {
        LoadRosterHandler::new(self.store.clone())
            .handle(LoadRosterQuery)
            .await
            .into_names()
    }

    fn clear_handler(&self) -> ClearRosterHandler {
        ClearRosterHandler::new(
            self.store.clone(),
            self.notifier.clone(),
            self.bus.clone(),
            self.selection.clone(),
        )
    }

    fn record(&self) -> Option<String> {
        std::fs::read_to_string(self.dir.path().join(format!("{}.json", KEY))).ok()
    }
}

#[tokio::test]
async fn saved_roster_survives_a_new_store() {
    let editor = Editor::new();
    editor.save("Alice\n  Bob  \n\nCharlie\n").await;

    let reopened = FileRosterStore::new(editor.dir.path(), KEY);
    let roster = reopened.load().await.unwrap();

    assert_eq!(roster.names(), ["Alice", "Bob", "Charlie"]);
    assert_eq!(editor.record().as_deref(), Some(r#"["Alice","Bob","Charlie"]"#));
}

#[tokio::test]
async fn sort_rewrites_the_record() {
    let editor = Editor::new();
    editor.save("dana\nBob\nalice\nCharlie").await;

    let text = editor.load().await.join("\n");
    SortRosterHandler::new(editor.store.clone(), editor.notifier.clone(), editor.bus.clone())
        .handle(SortRosterCommand { text })
        .await
        .unwrap();

    assert_eq!(editor.load().await, ["alice", "Bob", "Charlie", "dana"]);
    assert_eq!(editor.notifier.messages(), ["Saved", "Sorted A–Z"]);
}

#[tokio::test]
async fn corrupt_record_loads_as_empty() {
    let editor = Editor::new();
    std::fs::write(editor.dir.path().join(format!("{}.json", KEY)), "[1, 2").unwrap();

    assert!(editor.load().await.is_empty());
}

#[tokio::test]
async fn clear_needs_confirmation_then_removes_the_record() {
    let editor = Editor::new();
    editor.save("Alice\nBob").await;
    let handler = editor.clear_handler();

    let refused = handler
        .handle(ClearRosterCommand {
            text: "Alice\nBob".to_string(),
            confirmed: false,
        })
        .await;
    assert!(matches!(refused, Err(RosterError::ConfirmationRequired)));
    assert!(editor.record().is_some());

    let cleared = handler
        .handle(ClearRosterCommand {
            text: "Alice\nBob".to_string(),
            confirmed: true,
        })
        .await
        .unwrap();
    assert!(matches!(cleared, ClearRosterResult::Cleared(_)));
    assert!(editor.record().is_none());
    assert!(editor.load().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn draw_persists_roster_and_clear_cancels_it() {
    let editor = Editor::new();

    editor
        .selection
        .start(["Zoe", "Yann", "Xia", "Walt"])
        .await
        .unwrap();
    assert_eq!(editor.load().await, ["Zoe", "Yann", "Xia", "Walt"]);

    let text = editor.load().await.join("\n");
    editor
        .clear_handler()
        .handle(ClearRosterCommand {
            text,
            confirmed: true,
        })
        .await
        .unwrap();

    assert_eq!(editor.selection.snapshot().phase, SelectionPhase::Idle);
    assert!(editor.record().is_none());
    assert!(editor.bus.has_event("roster.cleared.v1"));
}
