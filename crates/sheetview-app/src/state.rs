// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::columns::ColumnKey;
use crate::model::Row;

pub const DISCARDED_EDIT_STATUS: &str = "edit discarded (not saved)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub row: usize,
    pub column: ColumnKey,
}

impl CellCoord {
    pub const fn new(row: usize, column: ColumnKey) -> Self {
        Self { row, column }
    }
}

/// Which cell, if any, the user is working with. Editing carries its own
/// coordinate, so an editing cell is always the selected one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Idle,
    Selected(CellCoord),
    Editing {
        cell: CellCoord,
        buffer: String,
    },
}

impl CellState {
    pub fn selected(&self) -> Option<CellCoord> {
        match self {
            Self::Idle => None,
            Self::Selected(cell) | Self::Editing { cell, .. } => Some(*cell),
        }
    }

    pub fn editing(&self) -> Option<(CellCoord, &str)> {
        match self {
            Self::Editing { cell, buffer } => Some((*cell, buffer.as_str())),
            Self::Idle | Self::Selected(_) => None,
        }
    }

    pub fn is_selected(&self, cell: CellCoord) -> bool {
        self.selected() == Some(cell)
    }

    pub fn is_editing(&self, cell: CellCoord) -> bool {
        self.editing().is_some_and(|(editing, _)| editing == cell)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    Commit,
    Cancel,
    Blur,
}

impl DiscardReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Commit => "commit",
            Self::Cancel => "cancel",
            Self::Blur => "blur",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetCommand {
    Click(CellCoord),
    DoubleClick(CellCoord),
    /// Move the selection by (rows, columns).
    Move(isize, isize),
    /// Start editing the selected cell, as a double click on it would.
    EditSelected,
    ClearSelection,
    Input(char),
    Backspace,
    Commit,
    Cancel,
    Blur,
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetEvent {
    SelectionChanged(CellCoord),
    SelectionCleared,
    EditStarted {
        cell: CellCoord,
        seed: String,
    },
    BufferChanged(String),
    EditDiscarded {
        cell: CellCoord,
        buffer: String,
        reason: DiscardReason,
        changed: bool,
    },
    StatusUpdated(String),
    StatusCleared,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SheetState {
    rows: Vec<Row>,
    pub cell: CellState,
    pub status_line: Option<String>,
}

impl SheetState {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Swaps the record set and forgets any selection into the old one.
    pub fn replace_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.cell = CellState::Idle;
    }

    pub fn value_at(&self, cell: CellCoord) -> Option<&str> {
        self.rows.get(cell.row).map(|row| row.value(cell.column))
    }

    pub fn contains(&self, cell: CellCoord) -> bool {
        cell.row < self.rows.len()
    }

    pub fn dispatch(&mut self, command: SheetCommand) -> Vec<SheetEvent> {
        match command {
            SheetCommand::Click(cell) => self.click(cell),
            SheetCommand::DoubleClick(cell) => self.double_click(cell),
            SheetCommand::Move(rows, columns) => self.move_selection(rows, columns),
            SheetCommand::EditSelected => match self.cell {
                CellState::Selected(cell) => self.double_click(cell),
                CellState::Idle | CellState::Editing { .. } => Vec::new(),
            },
            SheetCommand::ClearSelection => match self.cell {
                CellState::Selected(_) => {
                    self.cell = CellState::Idle;
                    vec![SheetEvent::SelectionCleared]
                }
                CellState::Idle | CellState::Editing { .. } => Vec::new(),
            },
            SheetCommand::Input(ch) => match &mut self.cell {
                CellState::Editing { buffer, .. } => {
                    buffer.push(ch);
                    vec![SheetEvent::BufferChanged(buffer.clone())]
                }
                CellState::Idle | CellState::Selected(_) => Vec::new(),
            },
            SheetCommand::Backspace => match &mut self.cell {
                CellState::Editing { buffer, .. } => {
                    if buffer.pop().is_none() {
                        return Vec::new();
                    }
                    vec![SheetEvent::BufferChanged(buffer.clone())]
                }
                CellState::Idle | CellState::Selected(_) => Vec::new(),
            },
            SheetCommand::Commit => self.end_edit(DiscardReason::Commit),
            SheetCommand::Cancel => self.end_edit(DiscardReason::Cancel),
            SheetCommand::Blur => self.end_edit(DiscardReason::Blur),
            SheetCommand::ClearStatus => {
                self.status_line = None;
                vec![SheetEvent::StatusCleared]
            }
        }
    }

    fn click(&mut self, cell: CellCoord) -> Vec<SheetEvent> {
        if !self.contains(cell) {
            return Vec::new();
        }
        // Pressing inside the active input keeps it focused.
        if self.cell.is_editing(cell) {
            return Vec::new();
        }

        let mut events = self.end_edit(DiscardReason::Blur);
        if self.cell == CellState::Selected(cell) {
            return events;
        }
        self.cell = CellState::Selected(cell);
        events.push(SheetEvent::SelectionChanged(cell));
        events
    }

    fn double_click(&mut self, cell: CellCoord) -> Vec<SheetEvent> {
        let Some(seed) = self.value_at(cell).map(str::to_owned) else {
            return Vec::new();
        };
        if self.cell.is_editing(cell) {
            return Vec::new();
        }

        let mut events = self.end_edit(DiscardReason::Blur);
        self.cell = CellState::Editing {
            cell,
            buffer: seed.clone(),
        };
        events.push(SheetEvent::EditStarted { cell, seed });
        events
    }

    fn move_selection(&mut self, rows: isize, columns: isize) -> Vec<SheetEvent> {
        if self.rows.is_empty() {
            return Vec::new();
        }
        let next = match self.cell {
            CellState::Idle => CellCoord::new(0, ColumnKey::ALL[0]),
            CellState::Selected(current) => {
                let row = offset_clamped(current.row, rows, self.rows.len());
                let column = offset_clamped(current.column.index(), columns, ColumnKey::ALL.len());
                CellCoord::new(row, ColumnKey::ALL[column])
            }
            CellState::Editing { .. } => return Vec::new(),
        };
        if self.cell == CellState::Selected(next) {
            return Vec::new();
        }
        self.cell = CellState::Selected(next);
        vec![SheetEvent::SelectionChanged(next)]
    }

    /// Leaves edit mode without touching the stored row. Enter, Escape and
    /// blur all land here.
    fn end_edit(&mut self, reason: DiscardReason) -> Vec<SheetEvent> {
        let (cell, buffer) = match std::mem::take(&mut self.cell) {
            CellState::Editing { cell, buffer } => (cell, buffer),
            other => {
                self.cell = other;
                return Vec::new();
            }
        };
        self.cell = CellState::Selected(cell);

        let changed = self.value_at(cell) != Some(buffer.as_str());
        let mut events = vec![SheetEvent::EditDiscarded {
            cell,
            buffer,
            reason,
            changed,
        }];
        if changed {
            events.push(self.set_status(DISCARDED_EDIT_STATUS));
        }
        events
    }

    fn set_status(&mut self, message: &str) -> SheetEvent {
        self.status_line = Some(message.to_owned());
        SheetEvent::StatusUpdated(message.to_owned())
    }
}

fn offset_clamped(current: usize, delta: isize, len: usize) -> usize {
    let next = if delta.is_negative() {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        current.saturating_add(delta as usize)
    };
    next.min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::{
        CellCoord, CellState, DISCARDED_EDIT_STATUS, DiscardReason, SheetCommand, SheetEvent,
        SheetState,
    };
    use crate::columns::ColumnKey;
    use crate::sample::sample_rows;

    fn sheet() -> SheetState {
        SheetState::new(sample_rows())
    }

    #[test]
    fn click_selects_exactly_one_cell() {
        let mut state = sheet();
        let first = CellCoord::new(0, ColumnKey::JobRequest);
        let second = CellCoord::new(3, ColumnKey::Priority);

        let events = state.dispatch(SheetCommand::Click(first));
        assert_eq!(events, vec![SheetEvent::SelectionChanged(first)]);

        state.dispatch(SheetCommand::Click(second));
        assert!(state.cell.is_selected(second));
        assert!(!state.cell.is_selected(first));
    }

    #[test]
    fn click_on_selected_cell_is_quiet() {
        let mut state = sheet();
        let cell = CellCoord::new(1, ColumnKey::Url);
        state.dispatch(SheetCommand::Click(cell));
        assert!(state.dispatch(SheetCommand::Click(cell)).is_empty());
    }

    #[test]
    fn click_outside_data_rows_is_ignored() {
        let mut state = sheet();
        let events = state.dispatch(SheetCommand::Click(CellCoord::new(9, ColumnKey::Status)));
        assert!(events.is_empty());
        assert_eq!(state.cell, CellState::Idle);
    }

    #[test]
    fn double_click_seeds_buffer_with_display_value() {
        let mut state = sheet();
        let cell = CellCoord::new(0, ColumnKey::Status);

        let events = state.dispatch(SheetCommand::DoubleClick(cell));
        assert_eq!(
            events,
            vec![SheetEvent::EditStarted {
                cell,
                seed: "In-progress".to_owned(),
            }]
        );
        assert_eq!(state.cell.editing(), Some((cell, "In-progress")));
        assert!(state.cell.is_selected(cell));
    }

    #[test]
    fn typing_changes_buffer_but_not_row() {
        let mut state = sheet();
        let cell = CellCoord::new(0, ColumnKey::EstValue);
        state.dispatch(SheetCommand::DoubleClick(cell));

        state.dispatch(SheetCommand::Input('x'));
        let events = state.dispatch(SheetCommand::Input('!'));
        assert_eq!(
            events,
            vec![SheetEvent::BufferChanged("6,200,000x!".to_owned())]
        );
        assert_eq!(state.value_at(cell), Some("6,200,000"));

        state.dispatch(SheetCommand::Backspace);
        assert_eq!(state.cell.editing(), Some((cell, "6,200,000x")));
    }

    #[test]
    fn backspace_on_empty_buffer_is_quiet() {
        let mut state = sheet();
        let cell = CellCoord::new(2, ColumnKey::Priority);
        state.dispatch(SheetCommand::DoubleClick(cell));
        for _ in 0.."Medium".len() {
            state.dispatch(SheetCommand::Backspace);
        }
        assert_eq!(state.cell.editing(), Some((cell, "")));
        assert!(state.dispatch(SheetCommand::Backspace).is_empty());
    }

    #[test]
    fn commit_cancel_and_blur_all_discard_the_buffer() {
        for (command, reason) in [
            (SheetCommand::Commit, DiscardReason::Commit),
            (SheetCommand::Cancel, DiscardReason::Cancel),
            (SheetCommand::Blur, DiscardReason::Blur),
        ] {
            let mut state = sheet();
            let cell = CellCoord::new(4, ColumnKey::Submitter);
            state.dispatch(SheetCommand::DoubleClick(cell));
            state.dispatch(SheetCommand::Input('Z'));

            let events = state.dispatch(command);
            assert_eq!(
                events,
                vec![
                    SheetEvent::EditDiscarded {
                        cell,
                        buffer: "Jessica BrownZ".to_owned(),
                        reason,
                        changed: true,
                    },
                    SheetEvent::StatusUpdated(DISCARDED_EDIT_STATUS.to_owned()),
                ]
            );
            assert_eq!(state.cell, CellState::Selected(cell));
            assert_eq!(state.value_at(cell), Some("Jessica Brown"));
        }
    }

    #[test]
    fn unchanged_edit_leaves_status_alone() {
        let mut state = sheet();
        let cell = CellCoord::new(0, ColumnKey::Url);
        state.dispatch(SheetCommand::DoubleClick(cell));

        let events = state.dispatch(SheetCommand::Commit);
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            SheetEvent::EditDiscarded { changed: false, .. }
        ));
        assert_eq!(state.status_line, None);
    }

    #[test]
    fn escape_after_typing_keeps_assignee() {
        let mut state = sheet();
        let cell = CellCoord::new(1, ColumnKey::Assigned);

        state.dispatch(SheetCommand::Click(cell));
        state.dispatch(SheetCommand::DoubleClick(cell));
        state.dispatch(SheetCommand::Input('X'));
        state.dispatch(SheetCommand::Cancel);

        assert_eq!(state.rows()[1].assigned, "Tejas Pandey");
        assert_eq!(state.cell.editing(), None);
        assert!(state.cell.is_selected(cell));
    }

    #[test]
    fn editing_a_second_cell_ends_the_first() {
        let mut state = sheet();
        let first = CellCoord::new(0, ColumnKey::JobRequest);
        let second = CellCoord::new(2, ColumnKey::DueDate);

        state.dispatch(SheetCommand::DoubleClick(first));
        let events = state.dispatch(SheetCommand::DoubleClick(second));

        assert!(matches!(
            events.first(),
            Some(SheetEvent::EditDiscarded {
                cell,
                reason: DiscardReason::Blur,
                ..
            }) if *cell == first
        ));
        assert!(!state.cell.is_editing(first));
        assert_eq!(state.cell.editing(), Some((second, "10-12-2024")));
    }

    #[test]
    fn click_elsewhere_blurs_active_edit() {
        let mut state = sheet();
        let editing = CellCoord::new(0, ColumnKey::Submitted);
        let other = CellCoord::new(1, ColumnKey::Submitted);
        state.dispatch(SheetCommand::DoubleClick(editing));

        let events = state.dispatch(SheetCommand::Click(other));
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], SheetEvent::SelectionChanged(other));
        assert_eq!(state.cell, CellState::Selected(other));
    }

    #[test]
    fn click_inside_active_edit_keeps_editing() {
        let mut state = sheet();
        let cell = CellCoord::new(3, ColumnKey::Assigned);
        state.dispatch(SheetCommand::DoubleClick(cell));
        state.dispatch(SheetCommand::Input('?'));

        assert!(state.dispatch(SheetCommand::Click(cell)).is_empty());
        assert!(state.dispatch(SheetCommand::DoubleClick(cell)).is_empty());
        assert_eq!(state.cell.editing(), Some((cell, "Tom Wright?")));
    }

    #[test]
    fn keystrokes_outside_edit_mode_do_nothing() {
        let mut state = sheet();
        assert!(state.dispatch(SheetCommand::Input('a')).is_empty());
        assert!(state.dispatch(SheetCommand::Commit).is_empty());
        state.dispatch(SheetCommand::Click(CellCoord::new(0, ColumnKey::Url)));
        assert!(state.dispatch(SheetCommand::Cancel).is_empty());
        assert!(state.dispatch(SheetCommand::Backspace).is_empty());
    }

    #[test]
    fn move_from_idle_selects_first_cell_then_clamps() {
        let mut state = sheet();
        let events = state.dispatch(SheetCommand::Move(1, 0));
        assert_eq!(
            events,
            vec![SheetEvent::SelectionChanged(CellCoord::new(
                0,
                ColumnKey::JobRequest
            ))]
        );

        state.dispatch(SheetCommand::Move(-3, -3));
        assert_eq!(state.cell.selected(), Some(CellCoord::new(0, ColumnKey::JobRequest)));

        state.dispatch(SheetCommand::Move(20, 20));
        assert_eq!(state.cell.selected(), Some(CellCoord::new(4, ColumnKey::EstValue)));
        assert!(state.dispatch(SheetCommand::Move(1, 1)).is_empty());
    }

    #[test]
    fn move_is_ignored_while_editing() {
        let mut state = sheet();
        let cell = CellCoord::new(2, ColumnKey::Status);
        state.dispatch(SheetCommand::DoubleClick(cell));
        assert!(state.dispatch(SheetCommand::Move(1, 0)).is_empty());
        assert!(state.cell.is_editing(cell));
    }

    #[test]
    fn edit_selected_behaves_like_double_click() {
        let mut state = sheet();
        assert!(state.dispatch(SheetCommand::EditSelected).is_empty());

        let cell = CellCoord::new(1, ColumnKey::Priority);
        state.dispatch(SheetCommand::Click(cell));
        state.dispatch(SheetCommand::EditSelected);
        assert_eq!(state.cell.editing(), Some((cell, "High")));
    }

    #[test]
    fn clear_selection_returns_to_idle() {
        let mut state = sheet();
        state.dispatch(SheetCommand::Click(CellCoord::new(0, ColumnKey::Url)));
        assert_eq!(
            state.dispatch(SheetCommand::ClearSelection),
            vec![SheetEvent::SelectionCleared]
        );
        assert_eq!(state.cell, CellState::Idle);
    }

    #[test]
    fn replace_rows_resets_cell_state() {
        let mut state = sheet();
        state.dispatch(SheetCommand::DoubleClick(CellCoord::new(4, ColumnKey::Url)));
        state.replace_rows(sample_rows().into_iter().take(2).collect());
        assert_eq!(state.cell, CellState::Idle);
        assert_eq!(state.rows().len(), 2);
    }

    #[test]
    fn clear_status_drops_message() {
        let mut state = sheet();
        let cell = CellCoord::new(0, ColumnKey::Assigned);
        state.dispatch(SheetCommand::DoubleClick(cell));
        state.dispatch(SheetCommand::Input('!'));
        state.dispatch(SheetCommand::Commit);
        assert_eq!(state.status_line.as_deref(), Some(DISCARDED_EDIT_STATUS));

        assert_eq!(
            state.dispatch(SheetCommand::ClearStatus),
            vec![SheetEvent::StatusCleared]
        );
        assert_eq!(state.status_line, None);
    }
}
