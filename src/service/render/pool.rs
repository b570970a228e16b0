use std::collections::HashMap;

/// A row widget. Content is overwritten each time the cell is handed out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableCell {
    pub reuse_identifier: String,
    pub text_label: String,
    pub detail_text_label: String,
}

impl TableCell {
    pub fn new(reuse_identifier: &str) -> Self {
        Self {
            reuse_identifier: reuse_identifier.to_string(),
            ..Self::default()
        }
    }

    pub fn prepare_for_reuse(&mut self) {
        self.text_label.clear();
        self.detail_text_label.clear();
    }
}

/// Off-screen cells waiting to be handed out again, grouped by reuse identifier.
#[derive(Debug, Default)]
pub struct CellPool {
    idle: HashMap<String, Vec<TableCell>>,
    constructed: usize,
    reused: usize,
}

impl CellPool {
    /// Take an idle cell for `identifier`, or build a fresh one.
    pub fn dequeue(&mut self, identifier: &str) -> TableCell {
        match self.idle.get_mut(identifier).and_then(Vec::pop) {
            Some(mut cell) => {
                cell.prepare_for_reuse();
                self.reused += 1;
                cell
            }
            None => {
                self.constructed += 1;
                TableCell::new(identifier)
            }
        }
    }

    pub fn recycle(&mut self, cell: TableCell) {
        self.idle
            .entry(cell.reuse_identifier.clone())
            .or_default()
            .push(cell);
    }

    pub fn idle(&self, identifier: &str) -> usize {
        self.idle.get(identifier).map_or(0, Vec::len)
    }

    pub fn constructed(&self) -> usize {
        self.constructed
    }

    pub fn reused(&self) -> usize {
        self.reused
    }
}
