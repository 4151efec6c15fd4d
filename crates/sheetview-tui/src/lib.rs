// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use sheetview_app::{
    ADD_COLUMN_WIDTH, Align, Asset, CellCoord, CellState, ColumnKey, GROUP_BANDS, GroupBand,
    HEADER_TINT, IconSet, PresentationKind, ROW_NUMBER_WIDTH, Rgb, Row as SheetRow, SheetCommand,
    SheetEvent, SheetState, StatusBadge, ViewportMetrics, priority_tone,
};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(120);
const STATUS_TTL: Duration = Duration::from_secs(4);
const COLUMN_SPACING: u16 = 1;
const CARET: &str = "▏";
pub const DEFAULT_DOUBLE_CLICK: Duration = Duration::from_millis(400);

const GRAY_900: Color = Color::Rgb(0x11, 0x18, 0x27);
const GRAY_700: Color = Color::Rgb(0x37, 0x41, 0x51);
const GRAY_500: Color = Color::Rgb(0x6B, 0x72, 0x80);
const GRAY_400: Color = Color::Rgb(0x9C, 0xA3, 0xAF);
const GRAY_50: Color = Color::Rgb(0xF9, 0xFA, 0xFB);
const BLUE_600: Color = Color::Rgb(0x25, 0x63, 0xEB);
const BLUE_500: Color = Color::Rgb(0x3B, 0x82, 0xF6);
const BLUE_50: Color = Color::Rgb(0xEF, 0xF6, 0xFF);
const GREEN_500: Color = Color::Rgb(0x22, 0xC5, 0x5E);
const NEW_ACTION_BG: Color = Color::Rgb(0x4B, 0x6A, 0x4F);

/// Supplies the records the sheet shows.
pub trait SheetRuntime {
    fn load_rows(&mut self) -> Result<Vec<SheetRow>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub mouse: bool,
    pub icons: IconSet,
    pub double_click: Duration,
    pub metrics: ViewportMetrics,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            mouse: true,
            icons: IconSet::unicode(),
            double_click: DEFAULT_DOUBLE_CLICK,
            metrics: ViewportMetrics::TERMINAL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClickKind {
    Single,
    Double,
}

/// Turns two presses on the same cell inside `window` into a double click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClickTracker {
    window: Duration,
    last: Option<(CellCoord, Instant)>,
}

impl ClickTracker {
    fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    fn register(&mut self, cell: CellCoord, at: Instant) -> ClickKind {
        match self.last {
            Some((previous, when))
                if previous == cell && at.saturating_duration_since(when) <= self.window =>
            {
                self.last = None;
                ClickKind::Double
            }
            _ => {
                self.last = Some((cell, at));
                ClickKind::Single
            }
        }
    }

    fn reset(&mut self) {
        self.last = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotKind {
    RowNumber,
    Column(ColumnKey),
    AddColumn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GridSlot {
    kind: SlotKind,
    x: u16,
    width: u16,
}

/// Screen geometry of the grid from the last frame. Slots that do not fit
/// the area are dropped, so the visible ones are a left-to-right prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
struct GridLayout {
    band_y: u16,
    header_y: u16,
    body_y: u16,
    body_height: u16,
    slots: Vec<GridSlot>,
}

impl GridLayout {
    fn new(area: Rect) -> Self {
        let right = area.x.saturating_add(area.width);
        let wanted = std::iter::once((SlotKind::RowNumber, ROW_NUMBER_WIDTH))
            .chain(
                ColumnKey::ALL
                    .iter()
                    .map(|column| (SlotKind::Column(*column), column.width())),
            )
            .chain(std::iter::once((SlotKind::AddColumn, ADD_COLUMN_WIDTH)));

        let mut slots = Vec::new();
        let mut cursor = area.x;
        for (kind, width) in wanted {
            if cursor >= right {
                break;
            }
            let width = width.min(right - cursor);
            slots.push(GridSlot {
                kind,
                x: cursor,
                width,
            });
            cursor = cursor.saturating_add(width).saturating_add(COLUMN_SPACING);
        }

        Self {
            band_y: area.y,
            header_y: area.y.saturating_add(1),
            body_y: area.y.saturating_add(2),
            body_height: area.height.saturating_sub(2),
            slots,
        }
    }

    fn widths(&self) -> Vec<Constraint> {
        self.slots
            .iter()
            .map(|slot| Constraint::Length(slot.width))
            .collect()
    }

    fn column_slots(&self) -> impl Iterator<Item = (ColumnKey, &GridSlot)> {
        self.slots.iter().filter_map(|slot| match slot.kind {
            SlotKind::Column(column) => Some((column, slot)),
            SlotKind::RowNumber | SlotKind::AddColumn => None,
        })
    }

    fn cell_at(&self, x: u16, y: u16, row_count: usize) -> Option<CellCoord> {
        if y < self.body_y || y >= self.body_y.saturating_add(self.body_height) {
            return None;
        }
        let row = usize::from(y - self.body_y);
        if row >= row_count {
            return None;
        }
        self.column_slots()
            .find(|(_, slot)| x >= slot.x && x < slot.x.saturating_add(slot.width))
            .map(|(column, _)| CellCoord::new(row, column))
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ViewData {
    icons: IconSet,
    filler_rows: usize,
    clicks: ClickTracker,
    grid: Option<GridLayout>,
    status_token: u64,
}

impl ViewData {
    fn new(options: &UiOptions) -> Self {
        Self {
            icons: options.icons,
            filler_rows: 0,
            clicks: ClickTracker::new(options.double_click),
            grid: None,
            status_token: 0,
        }
    }
}

pub fn run_app<R: SheetRuntime>(
    state: &mut SheetState,
    runtime: &mut R,
    options: UiOptions,
) -> Result<()> {
    state.replace_rows(runtime.load_rows().context("load sheet rows")?);

    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, EnableFocusChange)
        .context("enter alternate screen")?;
    if options.mouse {
        execute!(stdout, EnableMouseCapture).context("enable mouse capture")?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::new(&options);
    // Sized once at mount; later resizes keep the same filler count.
    let size = terminal.size().context("read terminal size")?;
    view_data.filler_rows = options
        .metrics
        .filler_rows(i64::from(size.height), state.rows().len());
    tracing::info!(
        rows = state.rows().len(),
        filler_rows = view_data.filler_rows,
        height = size.height,
        "sheet mounted"
    );

    let (internal_tx, internal_rx) = mpsc::channel();
    let mut result = Ok(());
    loop {
        process_internal_events(state, &view_data, &internal_rx);

        let mut grid = None;
        if let Err(error) = terminal.draw(|frame| grid = Some(render(frame, state, &view_data))) {
            result = Err(error).context("draw frame");
            break;
        }
        view_data.grid = grid;

        let has_event = match event::poll(POLL_INTERVAL).context("poll event") {
            Ok(has_event) => has_event,
            Err(error) => {
                result = Err(error);
                break;
            }
        };
        if !has_event {
            continue;
        }
        match event::read().context("read event") {
            Ok(Event::Key(key)) => {
                if handle_key_event(state, &mut view_data, &internal_tx, key) {
                    break;
                }
            }
            Ok(Event::Mouse(mouse)) => {
                handle_mouse_event(state, &mut view_data, &internal_tx, mouse, Instant::now());
            }
            Ok(Event::FocusLost) => {
                apply_command(state, &mut view_data, &internal_tx, SheetCommand::Blur);
            }
            Ok(_) => {}
            Err(error) => {
                result = Err(error);
                break;
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(
        io::stdout(),
        DisableMouseCapture,
        DisableFocusChange,
        terminal::LeaveAlternateScreen
    )
    .context("leave alternate screen")?;
    tracing::info!("sheet closed");
    result
}

fn process_internal_events(
    state: &mut SheetState,
    view_data: &ViewData,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(SheetCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(STATUS_TTL);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn apply_command(
    state: &mut SheetState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    command: SheetCommand,
) -> Vec<SheetEvent> {
    let events = state.dispatch(command);
    for event in &events {
        log_event(event);
        if matches!(event, SheetEvent::StatusUpdated(_)) {
            view_data.status_token = view_data.status_token.saturating_add(1);
            schedule_status_clear(internal_tx, view_data.status_token);
        }
    }
    events
}

fn log_event(event: &SheetEvent) {
    match event {
        SheetEvent::EditDiscarded {
            cell,
            buffer,
            reason,
            changed: true,
        } => {
            tracing::warn!(
                row = cell.row,
                column = cell.column.label(),
                reason = reason.as_str(),
                buffer = buffer.as_str(),
                "edit buffer discarded without write-back"
            );
        }
        SheetEvent::StatusUpdated(_) | SheetEvent::StatusCleared => {}
        other => tracing::debug!(event = ?other, "cell state changed"),
    }
}

fn handle_key_event(
    state: &mut SheetState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    let command = if state.cell.editing().is_some() {
        edit_command_for_key(key)
    } else {
        if key.code == KeyCode::Char('q') && key.modifiers == KeyModifiers::NONE {
            return true;
        }
        nav_command_for_key(key)
    };
    if let Some(command) = command {
        apply_command(state, view_data, internal_tx, command);
    }
    false
}

fn edit_command_for_key(key: KeyEvent) -> Option<SheetCommand> {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => Some(SheetCommand::Commit),
        (KeyCode::Esc, _) => Some(SheetCommand::Cancel),
        (KeyCode::Backspace, _) => Some(SheetCommand::Backspace),
        (KeyCode::Char(ch), modifiers)
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(SheetCommand::Input(ch))
        }
        _ => None,
    }
}

fn nav_command_for_key(key: KeyEvent) -> Option<SheetCommand> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Some(SheetCommand::Move(1, 0)),
        KeyCode::Char('k') | KeyCode::Up => Some(SheetCommand::Move(-1, 0)),
        KeyCode::Char('h') | KeyCode::Left => Some(SheetCommand::Move(0, -1)),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => Some(SheetCommand::Move(0, 1)),
        KeyCode::BackTab => Some(SheetCommand::Move(0, -1)),
        KeyCode::Char('i') | KeyCode::F(2) => Some(SheetCommand::EditSelected),
        KeyCode::Esc => Some(SheetCommand::ClearSelection),
        _ => None,
    }
}

fn handle_mouse_event(
    state: &mut SheetState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    mouse: MouseEvent,
    now: Instant,
) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let hit = view_data
        .grid
        .as_ref()
        .and_then(|grid| grid.cell_at(mouse.column, mouse.row, state.rows().len()));
    let Some(cell) = hit else {
        // Anywhere outside a data cell takes focus away from the input.
        view_data.clicks.reset();
        apply_command(state, view_data, internal_tx, SheetCommand::Blur);
        return;
    };

    apply_command(state, view_data, internal_tx, SheetCommand::Click(cell));
    if view_data.clicks.register(cell, now) == ClickKind::Double {
        apply_command(state, view_data, internal_tx, SheetCommand::DoubleClick(cell));
    }
}

fn render(frame: &mut ratatui::Frame<'_>, state: &SheetState, view_data: &ViewData) -> GridLayout {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_top_bar(frame, layout[0], view_data.icons);
    render_toolbar(frame, layout[1], view_data.icons);
    let grid = GridLayout::new(layout[2]);
    render_grid(frame, layout[2], &grid, state, view_data);
    render_sheet_tabs(frame, layout[3], view_data.icons);

    let status = Paragraph::new(status_text(state)).style(Style::default().fg(GRAY_700));
    frame.render_widget(status, layout[4]);
    grid
}

fn render_top_bar(frame: &mut ratatui::Frame<'_>, area: Rect, icons: IconSet) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(GRAY_400));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let muted = Style::default().fg(GRAY_400).add_modifier(Modifier::BOLD);
    let breadcrumb = Line::from(vec![
        Span::raw(format!("{} ", icons.glyph(Asset::Panel))),
        Span::styled("Workspace", muted),
        Span::styled(format!(" {} ", icons.glyph(Asset::Chevron)), muted),
        Span::styled("Folder 2", muted),
        Span::styled(format!(" {} ", icons.glyph(Asset::Chevron)), muted),
        Span::styled(
            "Spreadsheet 3",
            Style::default().fg(GRAY_900).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {}", icons.glyph(Asset::More))),
    ]);
    let account = Line::from(vec![
        Span::styled(
            format!("[{} Search within sheet ]", icons.glyph(Asset::Search)),
            Style::default().fg(GRAY_400),
        ),
        Span::raw(format!("  {}  ", icons.glyph(Asset::Bell))),
        Span::raw(format!("{} ", icons.glyph(Asset::Avatar))),
        Span::styled("John Doe", Style::default().fg(GRAY_900)),
        Span::styled(" john.doe...", Style::default().fg(GRAY_400)),
    ])
    .alignment(Alignment::Right);

    frame.render_widget(Paragraph::new(breadcrumb), inner);
    frame.render_widget(Paragraph::new(account), inner);
}

fn render_toolbar(frame: &mut ratatui::Frame<'_>, area: Rect, icons: IconSet) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(GRAY_400));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = Style::default().fg(GRAY_900);
    let mut left = vec![
        Span::styled("Tool bar ", Style::default().fg(GRAY_700)),
        Span::styled(icons.glyph(Asset::ChevronDouble), Style::default().fg(GRAY_700)),
        Span::styled(" │", Style::default().fg(GRAY_400)),
    ];
    for (asset, label) in [
        (Asset::EyeOff, "Hide fields"),
        (Asset::ArrowUpDown, "Sort"),
        (Asset::Filter, "Filter"),
        (Asset::ArrowAutofit, "Cell view"),
    ] {
        left.push(Span::styled(
            format!("  {} {label}", icons.glyph(asset)),
            text,
        ));
    }

    let mut right = Vec::new();
    for (asset, label) in [
        (Asset::Import, "Import"),
        (Asset::Export, "Export"),
        (Asset::Share, "Share"),
    ] {
        right.push(Span::styled(
            format!("[{} {label}]", icons.glyph(asset)),
            Style::default().fg(GRAY_700),
        ));
        right.push(Span::raw(" "));
    }
    right.push(Span::styled(
        format!(" {} New Action ", icons.glyph(Asset::ArrowSplit)),
        Style::default()
            .fg(Color::White)
            .bg(NEW_ACTION_BG)
            .add_modifier(Modifier::BOLD),
    ));

    frame.render_widget(Paragraph::new(Line::from(left)), inner);
    frame.render_widget(
        Paragraph::new(Line::from(right).alignment(Alignment::Right)),
        inner,
    );
}

fn render_sheet_tabs(frame: &mut ratatui::Frame<'_>, area: Rect, icons: IconSet) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(GRAY_400));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let tabs = Line::from(vec![
        Span::styled(icons.glyph(Asset::Dot), Style::default().fg(GREEN_500)),
        Span::styled(" All Orders", Style::default().fg(GRAY_700)),
        Span::styled(" | ", Style::default().fg(GRAY_400)),
        Span::styled("Pending  Reviewed  Arrived", Style::default().fg(GRAY_500)),
    ]);
    let add = Line::from(icons.glyph(Asset::Plus)).alignment(Alignment::Right);
    frame.render_widget(Paragraph::new(tabs), inner);
    frame.render_widget(Paragraph::new(add), inner);
}

fn render_grid(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    grid: &GridLayout,
    state: &SheetState,
    view_data: &ViewData,
) {
    if area.height == 0 {
        return;
    }
    let band_area = Rect {
        y: grid.band_y,
        height: 1,
        ..area
    };
    frame.render_widget(Paragraph::new(band_line(grid, view_data.icons)), band_area);

    let table_area = Rect {
        y: grid.header_y,
        height: area.height.saturating_sub(1),
        ..area
    };
    let header = Row::new(
        grid.slots
            .iter()
            .map(|slot| header_cell(slot.kind, view_data.icons)),
    );

    let data_rows = state
        .rows()
        .iter()
        .enumerate()
        .map(|(row_index, row)| data_row(grid, state, view_data.icons, row_index, row));
    let first_filler = state.rows().len() + 1;
    let filler_rows =
        (first_filler..first_filler + view_data.filler_rows).map(|number| filler_row(grid, number));

    let table = Table::new(data_rows.chain(filler_rows), grid.widths())
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .flex(Flex::Start);
    frame.render_widget(table, table_area);
}

fn band_line(grid: &GridLayout, icons: IconSet) -> Line<'static> {
    let mut spans = Vec::new();
    for slot in &grid.slots {
        match slot.kind {
            SlotKind::RowNumber => {
                spans.push(padded(
                    icons.glyph(Asset::BlankCell).to_owned(),
                    slot.width,
                    Style::default().bg(Color::White).fg(GRAY_400),
                ));
                spans.push(Span::raw(" "));
            }
            SlotKind::Column(column) => {
                let Some(band) = GROUP_BANDS.iter().find(|band| band.first == column) else {
                    continue;
                };
                let width = band_width(grid, band);
                spans.push(padded(band_label(band, icons), width, band_style(band)));
                spans.push(Span::raw(" "));
            }
            SlotKind::AddColumn => {
                spans.push(centered(
                    icons.glyph(Asset::Plus).to_owned(),
                    slot.width,
                    Style::default()
                        .bg(rgb(HEADER_TINT))
                        .fg(GRAY_900)
                        .add_modifier(Modifier::BOLD),
                ));
            }
        }
    }
    Line::from(spans)
}

fn band_width(grid: &GridLayout, band: &GroupBand) -> u16 {
    let first = band.first.index();
    let spanned = grid
        .column_slots()
        .filter(|(column, _)| (first..first + band.span).contains(&column.index()))
        .map(|(_, slot)| slot.width)
        .collect::<Vec<_>>();
    let gaps = u16::try_from(spanned.len().saturating_sub(1)).unwrap_or(0) * COLUMN_SPACING;
    spanned.iter().sum::<u16>() + gaps
}

fn band_label(band: &GroupBand, icons: IconSet) -> String {
    let Some(label) = band.label else {
        return String::new();
    };
    let mut text = String::from(" ");
    if let Some(asset) = band.leading {
        text.push_str(icons.glyph(asset));
        text.push(' ');
    }
    text.push_str(label);
    if band.trailing_more {
        text.push(' ');
        text.push_str(icons.glyph(Asset::More));
    }
    text
}

fn band_style(band: &GroupBand) -> Style {
    Style::default()
        .bg(rgb(band.tint))
        .fg(GRAY_900)
        .add_modifier(Modifier::BOLD)
}

fn header_cell(kind: SlotKind, icons: IconSet) -> Cell<'static> {
    match kind {
        SlotKind::RowNumber => {
            Cell::from("#").style(Style::default().fg(GRAY_500).bg(rgb(HEADER_TINT)))
        }
        SlotKind::Column(column) => {
            let mut label = String::new();
            if let Some(asset) = column.header_icon() {
                label.push_str(icons.glyph(asset));
                label.push(' ');
            }
            label.push_str(column.label());
            if column.has_menu() {
                label.push(' ');
                label.push_str(icons.glyph(Asset::ChevronDown));
            }
            Cell::from(label).style(
                Style::default()
                    .fg(Color::Black)
                    .bg(rgb(column.header_tint()))
                    .add_modifier(Modifier::BOLD),
            )
        }
        SlotKind::AddColumn => Cell::from("").style(Style::default().bg(GRAY_50)),
    }
}

fn data_row(
    grid: &GridLayout,
    state: &SheetState,
    icons: IconSet,
    row_index: usize,
    row: &SheetRow,
) -> Row<'static> {
    let cells = grid.slots.iter().map(|slot| match slot.kind {
        SlotKind::RowNumber => row_number_cell(row.id.to_string()),
        SlotKind::Column(column) => {
            let cell = CellCoord::new(row_index, column);
            value_cell(&state.cell, cell, row.value(column), slot.width, icons)
        }
        SlotKind::AddColumn => Cell::from(""),
    });
    Row::new(cells.collect::<Vec<_>>())
}

fn filler_row(grid: &GridLayout, number: usize) -> Row<'static> {
    let cells = grid.slots.iter().map(|slot| match slot.kind {
        SlotKind::RowNumber => row_number_cell(number.to_string()),
        SlotKind::Column(_) | SlotKind::AddColumn => Cell::from(""),
    });
    Row::new(cells.collect::<Vec<_>>())
}

fn row_number_cell(label: String) -> Cell<'static> {
    Cell::from(label).style(Style::default().fg(GRAY_500).bg(GRAY_50))
}

fn value_cell(
    cell_state: &CellState,
    cell: CellCoord,
    value: &str,
    width: u16,
    icons: IconSet,
) -> Cell<'static> {
    if let Some((editing, buffer)) = cell_state.editing()
        && editing == cell
    {
        return Cell::from(editing_line(buffer, width)).style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::UNDERLINED),
        );
    }

    let line = presented_line(cell.column, value, width, icons);
    let mut style = Style::default();
    if cell_state.is_selected(cell) {
        style = style.bg(BLUE_50).add_modifier(Modifier::BOLD);
    }
    Cell::from(line).style(style)
}

/// Keeps the tail of the buffer visible so the caret stays on screen.
fn editing_line(buffer: &str, width: u16) -> Line<'static> {
    let room = usize::from(width).saturating_sub(1);
    let count = buffer.chars().count();
    let visible = buffer
        .chars()
        .skip(count.saturating_sub(room))
        .collect::<String>();
    Line::from(vec![
        Span::raw(visible),
        Span::styled(CARET, Style::default().fg(BLUE_500)),
    ])
}

fn presented_line(column: ColumnKey, value: &str, width: u16, icons: IconSet) -> Line<'static> {
    let max_chars = usize::from(width);
    let line = match column.kind() {
        PresentationKind::Text => Line::from(Span::styled(
            truncate_label(value, max_chars),
            Style::default().fg(GRAY_900),
        )),
        PresentationKind::Status => Line::from(status_span(value, max_chars, icons)),
        PresentationKind::Priority => {
            let style = priority_tone(value)
                .map(|tone| {
                    Style::default()
                        .fg(rgb(tone.fg))
                        .bg(rgb(tone.bg))
                        .add_modifier(Modifier::BOLD)
                })
                .unwrap_or_default();
            Line::from(Span::styled(
                format!(" {} ", truncate_label(value, max_chars.saturating_sub(2))),
                style,
            ))
        }
        PresentationKind::Url => Line::from(Span::styled(
            truncate_label(value, max_chars),
            Style::default()
                .fg(BLUE_600)
                .add_modifier(Modifier::UNDERLINED),
        )),
        PresentationKind::Currency => {
            let glyph = icons.glyph(Asset::Currency);
            let room = max_chars.saturating_sub(glyph.chars().count() + 1);
            Line::from(vec![
                Span::styled(truncate_label(value, room), Style::default().fg(GRAY_900)),
                Span::raw(" "),
                Span::styled(glyph.to_owned(), Style::default().fg(GRAY_700)),
            ])
        }
    };
    line.alignment(alignment(column.align()))
}

fn status_span(value: &str, max_chars: usize, icons: IconSet) -> Span<'static> {
    match StatusBadge::for_value(value) {
        StatusBadge::Known {
            label,
            icon,
            fg,
            bg,
        } => Span::styled(
            truncate_label(&format!(" {} {label} ", icons.glyph(icon)), max_chars),
            Style::default().fg(rgb(fg)).bg(rgb(bg)),
        ),
        StatusBadge::Unknown => {
            Span::styled(StatusBadge::Unknown.label(), Style::default().fg(GRAY_500))
        }
    }
}

fn status_text(state: &SheetState) -> String {
    let (mode, cell) = match &state.cell {
        CellState::Idle => ("IDLE", None),
        CellState::Selected(cell) => ("SELECT", Some(*cell)),
        CellState::Editing { cell, .. } => ("EDIT", Some(*cell)),
    };
    let hints = if state.cell.editing().is_some() {
        "type to edit | enter/esc done | ctrl+q quit"
    } else {
        "click select | double-click/i edit | arrows/hjkl move | esc clear | q quit"
    };

    let mut parts = vec![mode.to_owned()];
    if let Some(cell) = cell {
        parts.push(cell_label(state, cell));
    }
    if let Some(status) = &state.status_line {
        parts.push(status.clone());
    }
    parts.push(hints.to_owned());
    parts.join(" | ")
}

fn cell_label(state: &SheetState, cell: CellCoord) -> String {
    match state.rows().get(cell.row) {
        Some(row) => format!("#{} {}", row.id, cell.column.label()),
        None => cell.column.label().to_owned(),
    }
}

fn truncate_label(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_owned();
    }
    if max_chars == 0 {
        return String::new();
    }
    let truncated: String = value.chars().take(max_chars - 1).collect();
    format!("{truncated}…")
}

fn padded(text: String, width: u16, style: Style) -> Span<'static> {
    let width = usize::from(width);
    let mut text = truncate_label(&text, width);
    let used = Span::raw(text.as_str()).width();
    text.push_str(&" ".repeat(width.saturating_sub(used)));
    Span::styled(text, style)
}

fn centered(text: String, width: u16, style: Style) -> Span<'static> {
    let width = usize::from(width);
    let used = Span::raw(text.as_str()).width();
    let left = width.saturating_sub(used) / 2;
    let right = width.saturating_sub(used + left);
    Span::styled(
        format!("{}{text}{}", " ".repeat(left), " ".repeat(right)),
        style,
    )
}

const fn alignment(align: Align) -> Alignment {
    match align {
        Align::Left => Alignment::Left,
        Align::Center => Alignment::Center,
        Align::Right => Alignment::Right,
    }
}

const fn rgb(value: Rgb) -> Color {
    Color::Rgb(value.0, value.1, value.2)
}
