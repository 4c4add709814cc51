use tracing::{debug, warn};

use labelforge_core::constants;

use crate::history::{History, Snapshot};
use crate::model::{group_bounds, Element, ElementContent, ElementKind, GroupElement};
use crate::selection::{align_elements, distribute_elements, AlignMode, Axis};
use crate::templates::apply_template;

use super::actions::{Action, ElementPatch, PageConfig};
use super::page::Page;
use super::state::EditorState;

/// The document state store: owns the editor state and applies actions
/// in dispatch order, each producing one fully-materialized next state.
///
/// The store performs no I/O. Malformed payloads never surface a failure
/// to the caller; the worst outcome of any dispatch is no observable
/// state change.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    state: EditorState,
    history: History,
}

impl DocumentStore {
    /// Creates a store over a fresh single-page document.
    pub fn new() -> Self {
        Self::with_state(EditorState::new())
    }

    /// Creates a store over existing state (e.g. an imported document).
    pub fn with_state(state: EditorState) -> Self {
        Self {
            state,
            history: History::new(constants::HISTORY_DEPTH),
        }
    }

    /// The current state.
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// The undo/redo history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Applies one action.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::AddElement(element) => {
                let element = element.with_fresh_ids();
                self.state.page_mut().elements.push(element);
            }
            Action::UpdateElement { id, patch } => self.update_element(&id, patch),
            Action::DeleteElements(ids) => {
                self.state
                    .page_mut()
                    .elements
                    .retain(|el| !ids.contains(&el.id));
                self.state.selection.retain(|id| !ids.contains(id));
            }
            Action::SelectElements(ids) => self.state.selection = ids,
            Action::SelectAll => self.state.selection = self.state.page().element_ids(),
            Action::ClearSelection => self.state.selection.clear(),
            Action::AddPage(config) => self.add_page(config),
            Action::DeletePage(index) => self.delete_page(index),
            Action::SetCurrentPage(index) => {
                if index < self.state.pages.len() {
                    self.state.current_page = index;
                    self.state.selection.clear();
                }
            }
            Action::ReorderPages(order) => self.reorder_pages(&order),
            Action::SetPageBackground(color) => self.state.page_mut().background = color,
            Action::SetPageSize(size) => self.state.page_mut().size = size,
            Action::SetZoom(zoom) => {
                self.state.zoom = zoom.clamp(constants::ZOOM_MIN, constants::ZOOM_MAX);
            }
            Action::SetPanOffset(x, y) => self.state.pan = (x, y),
            Action::TogglePreview => {
                self.state.preview = !self.state.preview;
                self.state.selection.clear();
            }
            Action::ToggleGrid => {
                let grid = &mut self.state.page_mut().grid;
                grid.visible = !grid.visible;
            }
            Action::ToggleSnap => {
                let grid = &mut self.state.page_mut().grid;
                grid.snap = !grid.snap;
            }
            Action::SetGridSize(size) => {
                if size > 0.0 {
                    self.state.page_mut().grid.size = size;
                }
            }
            Action::CopyElements(ids) => self.copy_elements(&ids),
            Action::PasteElements => self.paste_clipboard(),
            Action::GroupElements(ids) => self.group_elements(&ids),
            Action::UngroupElements(ids) => self.ungroup_elements(&ids),
            Action::AlignSelection(mode) => self.align_selection(mode),
            Action::DistributeSelection(axis) => self.distribute_selection(axis),
            Action::BringToFront(ids) => self.reorder_z(&ids, true),
            Action::SendToBack(ids) => self.reorder_z(&ids, false),
            Action::BringForward(id) => {
                let page = self.state.page_mut();
                if let Some(i) = page.index_of(&id) {
                    if i + 1 < page.elements.len() {
                        page.elements.swap(i, i + 1);
                    }
                }
            }
            Action::SendBackward(id) => {
                let page = self.state.page_mut();
                if let Some(i) = page.index_of(&id) {
                    if i > 0 {
                        page.elements.swap(i, i - 1);
                    }
                }
            }
            Action::ApplyTemplate(template) => {
                *self.state.page_mut() = apply_template(&template, self.state.page());
                self.state.selection.clear();
            }
            Action::RegisterTemplate(template) => {
                if let Err(err) = self.state.templates.add(template) {
                    warn!("template not registered: {err}");
                }
            }
            Action::RemoveTemplate(id) => {
                self.state.templates.remove(&id);
            }
            Action::RegisterImage(asset) => self.state.images.push(asset),
            Action::RemoveImage(id) => self.state.images.retain(|img| img.id != id),
            Action::SetSampleData(data) => self.state.sample_data = data,
            Action::SetLabelGrid(grid) => self.state.label_grid = grid,
            Action::SaveHistory => {
                self.history
                    .save(Snapshot::new(self.state.pages.clone(), self.state.current_page));
            }
            Action::Undo => {
                if let Some(snapshot) = self.history.undo().cloned() {
                    self.restore(snapshot);
                }
            }
            Action::Redo => {
                if let Some(snapshot) = self.history.redo().cloned() {
                    self.restore(snapshot);
                }
            }
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.state.pages = snapshot.pages;
        self.state.current_page = snapshot.current_page;
        // Restored pages may no longer hold the selected ids.
        self.state.selection.clear();
    }

    fn update_element(&mut self, id: &str, patch: ElementPatch) {
        let Some(el) = self.state.page_mut().element_mut(id) else {
            debug!(id, "update for unknown element ignored");
            return;
        };

        let (min_w, min_h) = el.min_size();
        if patch.width.is_some() || patch.height.is_some() {
            let width = patch.width.unwrap_or(el.width);
            let height = patch.height.unwrap_or(el.height);
            if width >= min_w && height >= min_h {
                el.width = width;
                el.height = height;
            } else {
                debug!(id, width, height, "resize below variant minimum rejected");
            }
        }

        if let Some(x) = patch.x {
            el.x = x;
        }
        if let Some(y) = patch.y {
            el.y = y;
        }
        if let Some(rotation) = patch.rotation {
            el.rotation = rotation;
        }
        if let Some(opacity) = patch.opacity {
            el.opacity = opacity.clamp(0.0, 1.0);
        }
        if let Some(visible) = patch.visible {
            el.visible = visible;
        }
        if let Some(locked) = patch.locked {
            el.locked = locked;
        }

        if let Some(content) = patch.content {
            if content.kind() != el.kind() {
                warn!(
                    id,
                    "patch payload variant {:?} does not match element {:?}; ignored",
                    content.kind(),
                    el.kind()
                );
                return;
            }
            if let ElementContent::Qrcode(qr) = &content {
                if qr.size < constants::MIN_QRCODE_SIZE {
                    debug!(id, size = qr.size, "qr size below minimum rejected");
                    return;
                }
                // The square frame tracks the code size.
                el.width = qr.size;
                el.height = qr.size;
            }
            el.content = content;
        }
    }

    fn add_page(&mut self, config: PageConfig) {
        let mut page = match config.size {
            Some(size) => Page::with_size(size),
            None => Page::new(),
        };
        if let Some(background) = config.background {
            page.background = background;
        }
        self.state.pages.push(page);
    }

    fn delete_page(&mut self, index: usize) {
        if self.state.pages.len() <= 1 || index >= self.state.pages.len() {
            return;
        }
        let current_id = self.state.page().id.clone();
        self.state.pages.remove(index);
        self.state.current_page = self.state.current_page.min(self.state.pages.len() - 1);
        if self.state.page().id != current_id {
            self.state.selection.clear();
        }
    }

    fn reorder_pages(&mut self, order: &[usize]) {
        let count = self.state.pages.len();
        let mut sorted: Vec<usize> = order.to_vec();
        sorted.sort_unstable();
        if sorted != (0..count).collect::<Vec<_>>() {
            warn!(?order, "page order is not a permutation; ignored");
            return;
        }
        let mut old: Vec<Option<Page>> = self.state.pages.drain(..).map(Some).collect();
        self.state.pages = order
            .iter()
            .map(|&i| old[i].take().expect("permutation visits each index once"))
            .collect();
        self.state.current_page = order
            .iter()
            .position(|&i| i == self.state.current_page)
            .unwrap_or(0);
    }

    fn copy_elements(&mut self, ids: &[String]) {
        let copies: Vec<Element> = self
            .state
            .page()
            .elements
            .iter()
            .filter(|el| ids.contains(&el.id))
            .cloned()
            .collect();
        if !copies.is_empty() {
            self.state.clipboard = copies;
        }
    }

    fn paste_clipboard(&mut self) {
        if self.state.clipboard.is_empty() {
            return;
        }
        let mut pasted_ids = Vec::new();
        let pasted: Vec<Element> = self
            .state
            .clipboard
            .iter()
            .map(|el| {
                let mut copy = el.with_fresh_ids();
                copy.translate(constants::PASTE_OFFSET, constants::PASTE_OFFSET);
                pasted_ids.push(copy.id.clone());
                copy
            })
            .collect();
        self.state.page_mut().elements.extend(pasted);
        self.state.selection = pasted_ids;
    }

    fn group_elements(&mut self, ids: &[String]) {
        let page = self.state.page_mut();
        let indices: Vec<usize> = page
            .elements
            .iter()
            .enumerate()
            .filter(|(_, el)| ids.contains(&el.id))
            .map(|(i, _)| i)
            .collect();
        if indices.len() < 2 {
            return;
        }

        let insert_at = indices[0];
        let mut members = Vec::with_capacity(indices.len());
        for &i in indices.iter().rev() {
            members.push(page.elements.remove(i));
        }
        members.reverse();

        let bounds = group_bounds(&members);
        for member in &mut members {
            member.translate(-bounds.x, -bounds.y);
        }

        let mut group = Element::new(ElementKind::Group, bounds.x, bounds.y);
        group.width = bounds.width;
        group.height = bounds.height;
        group.content = ElementContent::Group(GroupElement { children: members });
        let group_id = group.id.clone();
        page.elements.insert(insert_at, group);

        self.state.selection = vec![group_id];
    }

    fn ungroup_elements(&mut self, ids: &[String]) {
        let mut released = Vec::new();
        let page = self.state.page_mut();
        for id in ids {
            let Some(index) = page.index_of(id) else {
                continue;
            };
            if !matches!(page.elements[index].content, ElementContent::Group(_)) {
                continue;
            }
            let shell = page.elements.remove(index);
            let ElementContent::Group(group) = shell.content else {
                unreachable!()
            };
            let mut at = index;
            for mut child in group.children {
                child.translate(shell.x, shell.y);
                released.push(child.id.clone());
                page.elements.insert(at, child);
                at += 1;
            }
        }
        if !released.is_empty() {
            self.state.selection = released;
        }
    }

    fn align_selection(&mut self, mode: AlignMode) {
        let selected: Vec<Element> = self
            .state
            .selected_elements()
            .into_iter()
            .cloned()
            .collect();
        self.write_positions(align_elements(&selected, mode));
    }

    fn distribute_selection(&mut self, axis: Axis) {
        let selected: Vec<Element> = self
            .state
            .selected_elements()
            .into_iter()
            .cloned()
            .collect();
        self.write_positions(distribute_elements(&selected, axis));
    }

    fn write_positions(&mut self, updated: Vec<Element>) {
        let page = self.state.page_mut();
        for element in updated {
            if let Some(el) = page.element_mut(&element.id) {
                el.x = element.x;
                el.y = element.y;
            }
        }
    }

    fn reorder_z(&mut self, ids: &[String], to_front: bool) {
        let page = self.state.page_mut();
        let (moved, kept): (Vec<Element>, Vec<Element>) = page
            .elements
            .drain(..)
            .partition(|el| ids.contains(&el.id));
        if to_front {
            page.elements = kept;
            page.elements.extend(moved);
        } else {
            page.elements = moved;
            page.elements.extend(kept);
        }
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}
