//! Board screen: filter bar, mission cards, and the status picker.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Padding, Paragraph};

use crate::board::Board;
use crate::model::{Filter, Mission, MissionStatus};
use crate::tui::app::BoardAction;

/// View state for the board: which card is selected and where the
/// status picker sits on that card.
///
/// The mission data itself lives in [`Board`]; this holds only indices
/// into the derived visible list.
pub struct BoardScreen {
    selected: usize,
    picker: usize,
}

impl BoardScreen {
    pub fn new() -> Self {
        Self {
            selected: 0,
            picker: 0,
        }
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.picker = 0;
        }
    }

    pub fn move_down(&mut self, visible_len: usize) {
        if self.selected + 1 < visible_len {
            self.selected += 1;
            self.picker = 0;
        }
    }

    pub fn picker_left(&mut self) {
        self.picker = self.picker.saturating_sub(1);
    }

    pub fn picker_right(&mut self) {
        if self.picker + 1 < MissionStatus::ALL.len() {
            self.picker += 1;
        }
    }

    /// Activates the picked status on the selected card.
    ///
    /// The entry matching the card's current status is disabled:
    /// activating it reports nothing, as does an empty view.
    pub fn activate(&self, visible: &[&Mission]) -> Option<BoardAction> {
        let mission = visible.get(self.selected)?;
        let status = MissionStatus::ALL[self.picker];
        if status == mission.status {
            return None;
        }
        Some(BoardAction::SetStatus {
            id: mission.id,
            status,
        })
    }

    /// Pulls the selection back into range after the visible list changes.
    ///
    /// The picker always resets: even when the index stays in range, it
    /// may now point at a different mission, same as after a move.
    pub fn sync(&mut self, visible_len: usize) {
        if visible_len == 0 {
            self.selected = 0;
        } else if self.selected >= visible_len {
            self.selected = visible_len - 1;
        }
        self.picker = 0;
    }

    pub fn render(&self, frame: &mut Frame, board: &Board) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(3), // title
            Constraint::Length(2), // filter bar
            Constraint::Min(0),    // cards
            Constraint::Length(1), // help
        ])
        .split(area);

        let muted = Style::default().fg(Color::DarkGray);

        // Title.
        let title = Paragraph::new(Line::from(vec![Span::styled(
            "Flightdeck",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )]))
        .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
        frame.render_widget(title, chunks[0]);

        render_filter_bar(frame, chunks[1], board.filter());

        let visible = board.visible();
        if visible.is_empty() {
            render_empty_state(frame, chunks[2], board.filter());
        } else {
            self.render_cards(frame, chunks[2], &visible);
        }

        // Help line.
        let help = Paragraph::new(Line::from(vec![Span::styled(
            " ↑↓ mission  ←→ status  ⏎ apply  1-4/⇥ filter  q quit",
            muted,
        )]));
        frame.render_widget(help, chunks[3]);
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect, visible: &[&Mission]) {
        let items: Vec<ListItem> = visible
            .iter()
            .enumerate()
            .map(|(i, mission)| self.card(mission, i == self.selected))
            .collect();

        let list = List::new(items).block(Block::default().padding(Padding::new(2, 2, 0, 0)));

        // ListState carries only the scroll offset; selection styling is ours.
        let mut state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    /// One mission card: name heading, status and crew lines, status row.
    fn card(&self, mission: &Mission, is_selected: bool) -> ListItem<'static> {
        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let name_style = if is_selected { highlight } else { normal };
        let pointer = if is_selected { "› " } else { "  " };

        let mut status_row = vec![Span::styled("  Set  ", muted)];
        for (i, status) in MissionStatus::ALL.into_iter().enumerate() {
            let disabled = status == mission.status;
            let mut style = if disabled { muted } else { normal };
            if is_selected && i == self.picker {
                if !disabled {
                    style = highlight;
                }
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            status_row.push(Span::styled(format!(" {status} "), style));
            status_row.push(Span::raw(" "));
        }

        ListItem::new(vec![
            Line::from(vec![
                Span::styled(pointer.to_string(), name_style),
                Span::styled(mission.name.clone(), name_style),
            ]),
            Line::from(vec![
                Span::styled("  Status  ", muted),
                Span::styled(mission.status.to_string(), normal),
            ]),
            Line::from(vec![
                Span::styled("  Crew  ", muted),
                Span::styled(mission.crew_line(), normal),
            ]),
            Line::from(status_row),
            Line::from(""),
        ])
    }
}

/// One label per filter, the active one drawn with inverted fill.
/// Every label stays selectable, the active one included.
fn render_filter_bar(frame: &mut Frame, area: Rect, active: Filter) {
    let muted = Style::default().fg(Color::DarkGray);
    let normal = Style::default().fg(Color::Gray);
    let active_style = Style::default().fg(Color::Black).bg(Color::Gray);

    let mut spans = vec![Span::styled("Filter  ", muted)];
    for filter in Filter::ALL {
        let style = if filter == active { active_style } else { normal };
        spans.push(Span::styled(format!(" {filter} "), style));
        spans.push(Span::raw(" "));
    }

    let bar =
        Paragraph::new(Line::from(spans)).block(Block::default().padding(Padding::new(2, 2, 0, 0)));
    frame.render_widget(bar, area);
}

fn render_empty_state(frame: &mut Frame, area: Rect, filter: Filter) {
    let message = Paragraph::new(Line::from(vec![Span::styled(
        empty_message(filter),
        Style::default().fg(Color::DarkGray),
    )]))
    .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
    frame.render_widget(message, area);
}

/// The notice shown instead of cards when nothing passes the filter.
/// Names the filter value so the user knows what came up empty.
fn empty_message(filter: Filter) -> String {
    format!("No missions found with status \"{filter}\".")
}

impl Default for BoardScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// The filter assigned to a number-key slot, reported unconditionally —
/// re-selecting the active filter included.
pub fn select_filter(slot: usize) -> Option<BoardAction> {
    Filter::ALL.get(slot).copied().map(BoardAction::SetFilter)
}

/// The filter after the current one in bar order, wrapping at the end.
pub fn next_filter(current: Filter) -> Filter {
    let pos = Filter::ALL.iter().position(|f| *f == current).unwrap_or(0);
    Filter::ALL[(pos + 1) % Filter::ALL.len()]
}
