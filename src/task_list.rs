//! Editable ordered list of short text items (tasks, blockers).
//!
//! Rows carry a per-list id so the view can key them and target
//! edits without relying on positions.

pub type RowId = u32;

#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: RowId,
    pub text: String,
    pub editing: bool,
    /// Text to restore on cancel. `None` means the row was never committed.
    saved: Option<String>,
}

impl TaskRow {
    pub fn is_new(&self) -> bool {
        self.saved.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    rows: Vec<TaskRow>,
    next_id: RowId,
}

impl TaskList {
    pub fn rows(&self) -> &[TaskRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the empty-state placeholder should be shown.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn alloc_id(&mut self) -> RowId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    fn row_mut(&mut self, id: RowId) -> Option<&mut TaskRow> {
        self.rows.iter_mut().find(|r| r.id == id)
    }

    fn position(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    /// Appends an empty row in editing mode and returns its id.
    pub fn add(&mut self) -> RowId {
        let id = self.alloc_id();
        self.rows.push(TaskRow {
            id,
            text: String::new(),
            editing: true,
            saved: None,
        });
        id
    }

    /// Appends an already committed item.
    pub fn push(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let id = self.alloc_id();
        self.rows.push(TaskRow {
            id,
            text: text.to_string(),
            editing: false,
            saved: Some(text.to_string()),
        });
    }

    pub fn set_text(&mut self, id: RowId, text: String) {
        if let Some(row) = self.row_mut(id) {
            if row.editing {
                row.text = text;
            }
        }
    }

    pub fn begin_edit(&mut self, id: RowId) {
        if let Some(row) = self.row_mut(id) {
            row.editing = true;
        }
    }

    /// Read-only rows become editable; editable rows are committed.
    pub fn toggle_edit(&mut self, id: RowId) {
        match self.rows.iter().find(|r| r.id == id).map(|r| r.editing) {
            Some(true) => self.commit(id),
            Some(false) => self.begin_edit(id),
            None => {}
        }
    }

    pub fn commit(&mut self, id: RowId) {
        let Some(idx) = self.position(id) else { return };
        let trimmed = self.rows[idx].text.trim().to_string();
        if trimmed.is_empty() {
            self.rows.remove(idx);
            return;
        }
        let row = &mut self.rows[idx];
        row.text = trimmed.clone();
        row.saved = Some(trimmed);
        row.editing = false;
    }

    pub fn cancel(&mut self, id: RowId) {
        let Some(idx) = self.position(id) else { return };
        match self.rows[idx].saved.clone() {
            None => {
                self.rows.remove(idx);
            }
            Some(prev) => {
                let row = &mut self.rows[idx];
                row.text = prev;
                row.editing = false;
            }
        }
    }

    /// Maps the confirm/cancel keys of an inline input. Returns true if handled.
    pub fn key(&mut self, id: RowId, key: &str) -> bool {
        match key {
            "Enter" => {
                self.commit(id);
                true
            }
            "Escape" => {
                self.cancel(id);
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: RowId) {
        if let Some(idx) = self.position(id) {
            self.rows.remove(idx);
        }
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Drops every row and rebuilds the list from `items`.
    ///
    /// Items are normalised the same way `items()` serializes them: text is
    /// trimmed and blank items are dropped, so a padded entry from the
    /// backend comes back trimmed on the next save.
    pub fn replace_all(&mut self, items: &[String]) {
        self.rows.clear();
        for item in items {
            self.push(item);
        }
    }

    /// Non-blank trimmed texts in display order, including rows still being edited.
    pub fn items(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| r.text.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}
