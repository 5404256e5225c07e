use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Student list screen:
/// - Filter bar: top, 3 rows
/// - Student table: remaining rows
/// - Status bar: bottom row
pub struct ListLayout {
    pub filter_area: Rect,
    pub table_area: Rect,
    pub status_area: Rect,
}

impl ListLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self { filter_area: chunks[0], table_area: chunks[1], status_area: chunks[2] }
    }
}

/// Student detail screen:
/// - Header with student identity: 4 rows
/// - Tab bar: 1 row
/// - Tab content, optionally split with the AI summary panel (40% right)
/// - Status bar: bottom row
pub struct DetailLayout {
    pub header_area: Rect,
    pub tabs_area: Rect,
    pub content_area: Rect,
    pub summary_area: Option<Rect>,
    pub status_area: Rect,
}

impl DetailLayout {
    pub fn new(area: Rect, summary_open: bool) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        let (content_area, summary_area) = if summary_open {
            let split = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(chunks[2]);
            (split[0], Some(split[1]))
        } else {
            (chunks[2], None)
        };

        Self {
            header_area: chunks[0],
            tabs_area: chunks[1],
            content_area,
            summary_area,
            status_area: chunks[3],
        }
    }
}

/// Create/edit student form: centered column of fields over a status bar.
pub struct FormLayout {
    pub form_area: Rect,
    pub status_area: Rect,
}

impl FormLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        Self { form_area: chunks[0], status_area: chunks[1] }
    }
}
