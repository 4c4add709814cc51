use labelforge_designer::history::{History, Snapshot};
use labelforge_designer::model::{Element, ElementKind};
use labelforge_designer::{Action, DocumentStore, Page};

fn snapshot(marker: usize) -> Snapshot {
    let mut pages = Vec::new();
    for _ in 0..marker {
        pages.push(Page::new());
    }
    Snapshot::new(pages, 0)
}

#[test]
fn new_history_has_nothing_to_undo_or_redo() {
    let history = History::new(50);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.undo_depth(), 0);
    assert_eq!(history.redo_depth(), 0);
}

#[test]
fn a_single_snapshot_is_the_baseline() {
    let mut history = History::new(50);
    history.save(snapshot(1));
    // The only entry matches the live state; there is nothing earlier.
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn undo_steps_back_to_the_previous_snapshot() {
    let mut history = History::new(50);
    history.save(snapshot(1));
    history.save(snapshot(2));
    assert!(history.can_undo());

    let restored = history.undo().expect("one step available");
    assert_eq!(restored.pages.len(), 1);
    assert!(!history.can_undo());
    assert!(history.can_redo());
}

#[test]
fn redo_after_undo() {
    let mut history = History::new(50);
    history.save(snapshot(1));
    history.save(snapshot(2));
    history.undo();

    let restored = history.redo().expect("redo available");
    assert_eq!(restored.pages.len(), 2);
    assert!(history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn boundary_calls_are_no_ops() {
    let mut history = History::new(50);
    assert!(history.undo().is_none());
    assert!(history.redo().is_none());

    history.save(snapshot(1));
    assert!(history.undo().is_none());
    assert!(history.redo().is_none());
}

#[test]
fn n_undos_then_n_redos_return_to_the_last_save() {
    let mut history = History::new(50);
    for i in 1..=5 {
        history.save(snapshot(i));
    }

    for _ in 0..5 {
        history.undo();
    }
    assert_eq!(history.undo_depth(), 0);
    assert_eq!(history.redo_depth(), 4);

    let mut last = None;
    for _ in 0..5 {
        if let Some(snap) = history.redo() {
            last = Some(snap.pages.len());
        }
    }
    assert_eq!(last, Some(5));
    assert!(!history.can_redo());
}

#[test]
fn saving_after_undo_prunes_the_redo_branch() {
    let mut history = History::new(50);
    history.save(snapshot(1));
    history.save(snapshot(2));
    history.undo();
    assert_eq!(history.redo_depth(), 1);

    history.save(snapshot(3));
    assert_eq!(history.redo_depth(), 0);
    assert!(!history.can_redo());
    assert_eq!(history.len(), 2);
}

#[test]
fn depth_is_bounded() {
    let mut history = History::new(3);
    for i in 1..=5 {
        history.save(snapshot(i));
    }
    assert_eq!(history.len(), 3);
    // The oldest reachable snapshot is now the third save.
    while history.can_undo() {
        history.undo();
    }
    assert!(history.undo().is_none());
}

#[test]
fn clear_drops_everything() {
    let mut history = History::new(50);
    history.save(snapshot(1));
    history.save(snapshot(2));
    history.clear();
    assert!(history.is_empty());
    assert!(!history.can_undo());
}

#[test]
fn store_undo_redo_round_trip() {
    let mut store = DocumentStore::new();

    store.dispatch(Action::AddElement(Element::new(ElementKind::Text, 0.0, 0.0)));
    store.dispatch(Action::SaveHistory);
    store.dispatch(Action::AddElement(Element::new(ElementKind::Text, 20.0, 0.0)));
    store.dispatch(Action::SaveHistory);

    store.dispatch(Action::Undo);
    assert_eq!(store.state().page().elements.len(), 1);

    store.dispatch(Action::Redo);
    assert_eq!(store.state().page().elements.len(), 2);
}

#[test]
fn store_undo_at_boundary_is_a_no_op() {
    let mut store = DocumentStore::new();
    store.dispatch(Action::AddElement(Element::new(ElementKind::Text, 0.0, 0.0)));
    store.dispatch(Action::SaveHistory);

    store.dispatch(Action::Undo);
    assert_eq!(store.state().page().elements.len(), 1);
}

#[test]
fn store_restore_clears_selection() {
    let mut store = DocumentStore::new();
    store.dispatch(Action::AddElement(Element::new(ElementKind::Text, 0.0, 0.0)));
    store.dispatch(Action::SaveHistory);
    store.dispatch(Action::AddElement(Element::new(ElementKind::Text, 20.0, 0.0)));
    store.dispatch(Action::SaveHistory);
    let id = store.state().page().elements[1].id.clone();
    store.dispatch(Action::SelectElements(vec![id]));

    store.dispatch(Action::Undo);
    assert!(store.state().selection.is_empty());
}

#[test]
fn dispatch_after_undo_then_save_prunes_redo() {
    let mut store = DocumentStore::new();
    store.dispatch(Action::AddElement(Element::new(ElementKind::Text, 0.0, 0.0)));
    store.dispatch(Action::SaveHistory);
    store.dispatch(Action::AddElement(Element::new(ElementKind::Text, 20.0, 0.0)));
    store.dispatch(Action::SaveHistory);

    store.dispatch(Action::Undo);
    store.dispatch(Action::AddElement(Element::new(ElementKind::Text, 40.0, 0.0)));
    store.dispatch(Action::SaveHistory);

    store.dispatch(Action::Redo);
    // The redo branch was discarded; state stays at the new save.
    assert_eq!(store.state().page().elements.len(), 2);
}
