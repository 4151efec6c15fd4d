// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use sheetview_app::{
    CellCoord, CellState, ColumnKey, SheetCommand, SheetEvent, SheetState, StatusBadge,
    ViewportMetrics, sample_rows,
};

fn sheet() -> SheetState {
    SheetState::new(sample_rows())
}

#[test]
fn escape_discards_typed_assignee() {
    let mut state = sheet();
    let cell = CellCoord::new(1, ColumnKey::Assigned);

    state.dispatch(SheetCommand::Click(cell));
    state.dispatch(SheetCommand::DoubleClick(cell));
    state.dispatch(SheetCommand::Input('X'));
    assert_eq!(state.cell.editing(), Some((cell, "Tejas PandeyX")));

    state.dispatch(SheetCommand::Cancel);
    assert_eq!(state.value_at(cell), Some("Tejas Pandey"));
    assert_eq!(state.cell, CellState::Selected(cell));
}

#[test]
fn enter_does_not_write_back() {
    let mut state = sheet();
    let cell = CellCoord::new(0, ColumnKey::EstValue);

    state.dispatch(SheetCommand::DoubleClick(cell));
    for ch in "abc".chars() {
        state.dispatch(SheetCommand::Input(ch));
    }
    let events = state.dispatch(SheetCommand::Commit);

    assert!(events.iter().any(|event| matches!(
        event,
        SheetEvent::EditDiscarded { buffer, .. } if buffer == "6,200,000abc"
    )));
    assert_eq!(state.rows()[0].est_value, "6,200,000");
}

#[test]
fn only_one_cell_edits_at_a_time() {
    let mut state = sheet();
    let cells = ColumnKey::ALL
        .iter()
        .enumerate()
        .map(|(index, column)| CellCoord::new(index % 5, *column))
        .collect::<Vec<_>>();

    for cell in &cells {
        state.dispatch(SheetCommand::DoubleClick(*cell));
        let editing = cells
            .iter()
            .filter(|candidate| state.cell.is_editing(**candidate))
            .count();
        assert_eq!(editing, 1);
        assert!(state.cell.is_editing(*cell));
    }
}

#[test]
fn every_sample_status_renders_a_known_badge() {
    for row in sample_rows() {
        let badge = StatusBadge::for_value(row.value(ColumnKey::Status));
        assert_ne!(badge, StatusBadge::Unknown, "row {}", row.id);
    }
    assert_eq!(StatusBadge::for_value("Archived").label(), "Unknown");
}

#[test]
fn filler_rows_fill_the_rest_of_the_viewport() {
    let len = sample_rows().len();
    for height in [0_i64, 149, 150, 349, 350, 768, 1024] {
        let expected = ((height - 150).div_euclid(40)).max(len as i64) - len as i64;
        assert_eq!(
            ViewportMetrics::PIXELS.filler_rows(height, len) as i64,
            expected,
            "height {height}"
        );
    }
}
