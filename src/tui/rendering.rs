use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::app::{DetailView, MessageType, StatusMessage, TaskField};
use super::forms::{FormField, StudentForm};
use super::layout::{DetailLayout, FormLayout, ListLayout};
use super::timestamps::format_optional;
use crate::api::types::StudentDetail;
use crate::filters::StudentFilter;
use crate::models::{AiSummary, Student};
use crate::tabs::TabKind;

const ACCENT: Color = Color::Rgb(16, 185, 129);
const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ERROR: Color = Color::Rgb(239, 68, 68);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

pub fn render_list_screen(
    frame: &mut Frame,
    students: &[Student],
    selected: usize,
    total: usize,
    filter: &StudentFilter,
    loading: bool,
    error: Option<&str>,
    status: Option<&StatusMessage>,
) {
    let layout = ListLayout::new(frame.area());

    render_filter_bar(frame, layout.filter_area, filter);
    render_student_table(frame, layout.table_area, students, selected, loading, error);

    let hints = format!(
        " {}/{} students | Enter: open | Ctrl+W: new | Ctrl+E: edit | \
         Ctrl+S/G/O: status/grade/country | F1-F3: quick | Ctrl+C: quit ",
        students.len(),
        total
    );
    render_status_bar(frame, layout.status_area, &hints, status);
}

fn render_filter_bar(frame: &mut Frame, area: Rect, filter: &StudentFilter) {
    let mut spans = vec![
        Span::styled("Search: ", Style::default().fg(MUTED)),
        Span::styled(filter.search.clone(), Style::default().fg(BRIGHT)),
        Span::styled("│", Style::default().fg(MUTED)),
    ];

    let mut criterion = |label: &str, value: Option<String>| {
        spans.push(Span::styled(format!("  {}: ", label), Style::default().fg(MUTED)));
        match value {
            Some(v) => spans.push(Span::styled(v, Style::default().fg(ACCENT))),
            None => spans.push(Span::styled("any".to_string(), Style::default().fg(MUTED))),
        }
    };
    criterion("status", filter.status.map(|s| s.label().to_string()));
    criterion("grade", filter.grade.map(|g| g.as_number().to_string()));
    criterion("country", filter.country.clone());
    criterion("quick", filter.quick.map(|q| q.label().to_string()));

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" Filters "),
    );
    frame.render_widget(paragraph, area);
}

fn render_student_table(
    frame: &mut Frame,
    area: Rect,
    students: &[Student],
    selected: usize,
    loading: bool,
    error: Option<&str>,
) {
    let mut items: Vec<ListItem> = students
        .iter()
        .enumerate()
        .map(|(idx, student)| {
            let status = student
                .application_status
                .map(|s| s.label())
                .unwrap_or("-");
            let grade = student
                .grade
                .map(|g| g.as_number().to_string())
                .unwrap_or_else(|| "-".to_string());
            let country = student.country.as_deref().unwrap_or("-");
            let email = student.email.as_deref().unwrap_or("-");

            let mut flags = String::new();
            if student.not_contacted_7days {
                flags.push_str(" ⏰");
            }
            if student.high_intent {
                flags.push_str(" ★");
            }
            if student.needs_essay_help {
                flags.push_str(" ✎");
            }

            let content = format!(
                "{:<24} {:<26} {:<12} {:>2}  {:<8}{}",
                truncate(&student.name, 24),
                truncate(email, 26),
                status,
                grade,
                truncate(country, 8),
                flags
            );

            let style = if idx == selected {
                Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };
            ListItem::new(content).style(style)
        })
        .collect();

    // A failed load stays visible above whatever is still cached.
    if let Some(error) = error {
        items.insert(
            0,
            ListItem::new(format!("✗ {} (Ctrl+R to retry)", error))
                .style(Style::default().fg(ERROR)),
        );
    }

    let title = if loading { " Students (loading…) " } else { " Students " };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(title),
    );
    frame.render_widget(list, area);
}

pub fn render_detail_screen(
    frame: &mut Frame,
    view: &DetailView,
    detail: Option<&StudentDetail>,
    detail_loading: bool,
    detail_error: Option<&str>,
    summary: Option<&AiSummary>,
    summary_loading: bool,
    summary_error: Option<&str>,
    status: Option<&StatusMessage>,
) {
    let layout = DetailLayout::new(frame.area(), view.summary_open);

    render_detail_header(frame, layout.header_area, detail, detail_loading, detail_error);
    render_tab_bar(frame, layout.tabs_area, view.active);

    match view.active {
        TabKind::Notes => render_notes_tab(frame, layout.content_area, view, detail),
        TabKind::Tasks => render_tasks_tab(frame, layout.content_area, view, detail),
        TabKind::Communications => render_comms_tab(frame, layout.content_area, view, detail),
        TabKind::Interactions => render_interactions_tab(frame, layout.content_area, view, detail),
    }

    if let Some(area) = layout.summary_area {
        render_summary_panel(frame, area, summary, summary_loading, summary_error);
    }

    let hints = " Tab: tabs | Ctrl+A: AI summary | Ctrl+E: edit | Ctrl+D: delete | \
                 Ctrl+K: complete | Ctrl+R: refresh | Esc: back ";
    render_status_bar(frame, layout.status_area, hints, status);
}

fn render_detail_header(
    frame: &mut Frame,
    area: Rect,
    detail: Option<&StudentDetail>,
    loading: bool,
    error: Option<&str>,
) {
    let content = match (detail, error) {
        (Some(detail), _) => {
            let s = &detail.student;
            let status = s.application_status.map(|v| v.label()).unwrap_or("-");
            let grade = s.grade.map(|g| g.as_number().to_string()).unwrap_or_else(|| "-".into());

            let mut flags: Vec<&str> = Vec::new();
            if s.not_contacted_7days {
                flags.push("not contacted 7d");
            }
            if s.high_intent {
                flags.push("high intent");
            }
            if s.needs_essay_help {
                flags.push("needs essay help");
            }

            Text::from(vec![
                Line::from(Span::styled(
                    s.name.clone(),
                    Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled(s.email.clone().unwrap_or_else(|| "-".into()), Style::default().fg(MUTED)),
                    Span::raw("  "),
                    Span::styled(s.phone.clone().unwrap_or_else(|| "-".into()), Style::default().fg(MUTED)),
                    Span::raw("  "),
                    Span::styled(s.country.clone().unwrap_or_else(|| "-".into()), Style::default().fg(MUTED)),
                ]),
                Line::from(vec![
                    Span::styled(format!("{}  grade {}  ", status, grade), Style::default().fg(ACCENT)),
                    Span::styled(flags.join(" · "), Style::default().fg(MUTED)),
                ]),
            ])
        }
        (None, Some(error)) => Text::from(Span::styled(
            format!("✗ Failed to load student: {} (Ctrl+R to retry)", error),
            Style::default().fg(ERROR),
        )),
        (None, None) if loading => Text::from("Loading…"),
        (None, None) => Text::from("Student not loaded"),
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED)),
    );
    frame.render_widget(paragraph, area);
}

fn render_tab_bar(frame: &mut Frame, area: Rect, active: TabKind) {
    let spans: Vec<Span> = TabKind::ALL
        .iter()
        .flat_map(|tab| {
            let style = if *tab == active {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };
            [Span::styled(format!(" {} ", tab.label()), style), Span::styled("│", Style::default().fg(MUTED))]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_notes_tab(
    frame: &mut Frame,
    area: Rect,
    view: &DetailView,
    detail: Option<&StudentDetail>,
) {
    let mut lines: Vec<Line> = Vec::new();

    let notes = detail.map(|d| d.notes.as_slice()).unwrap_or(&[]);
    for (idx, note) in notes.iter().enumerate() {
        let marker = selection_marker(
            idx == view.notes.selected,
            view.notes.pending_delete.as_deref() == note.id.as_deref()
                && note.id.is_some(),
        );

        let edit_state = view
            .notes
            .edit
            .as_ref()
            .filter(|(id, _)| Some(id.as_str()) == note.id.as_deref());

        if let Some((_, state)) = edit_state {
            let draft = state.draft().map(|d| d.text.as_str()).unwrap_or("");
            let suffix = if state.is_saving() { " (saving…)" } else { " (editing)" };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(ACCENT)),
                Span::styled(format!("{}{}", draft, suffix), Style::default().fg(BRIGHT)),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(ACCENT)),
                Span::styled(
                    format!("{} · {}: ", note.author, format_optional(note.timestamp.as_ref())),
                    Style::default().fg(MUTED),
                ),
                Span::raw(note.text.clone()),
            ]));
        }
    }
    if notes.is_empty() {
        lines.push(Line::from(Span::styled("No notes yet", Style::default().fg(MUTED))));
    }

    lines.push(Line::from(""));
    let add_suffix = if view.notes.add_in_flight { " (saving…)" } else { "" };
    lines.push(Line::from(vec![
        Span::styled("New note> ", Style::default().fg(ACCENT)),
        Span::raw(format!("{}{}", view.notes.input, add_suffix)),
    ]));
    push_error_line(&mut lines, view.notes.error.as_deref());
    push_confirm_line(&mut lines, view.notes.pending_delete.is_some(), "note");

    render_tab_block(frame, area, " Notes ", lines);
}

fn render_tasks_tab(
    frame: &mut Frame,
    area: Rect,
    view: &DetailView,
    detail: Option<&StudentDetail>,
) {
    let mut lines: Vec<Line> = Vec::new();

    let tasks = detail.map(|d| d.tasks.as_slice()).unwrap_or(&[]);
    for (idx, task) in tasks.iter().enumerate() {
        let marker = selection_marker(
            idx == view.tasks.selected,
            view.tasks.pending_delete.as_deref() == task.id.as_deref() && task.id.is_some(),
        );
        let check = if task.is_completed() { "[x]" } else { "[ ]" };
        let due = task.due_at.as_deref().unwrap_or("-");
        let assignee = task.assigned_to.as_deref().unwrap_or("everyone");

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT)),
            Span::raw(format!("{} {} ", check, task.title)),
            Span::styled(
                format!("due {} · {} · {} · {}", due, task.priority, task.status, assignee),
                Style::default().fg(MUTED),
            ),
        ]));
    }
    if tasks.is_empty() {
        lines.push(Line::from(Span::styled("No tasks yet", Style::default().fg(MUTED))));
    }

    lines.push(Line::from(""));

    // Either the inline edit draft or the create form, whichever is active.
    if let Some((_, state)) = &view.tasks.edit {
        let header = if state.is_saving() { "Edit task (saving…)" } else { "Edit task" };
        lines.push(Line::from(Span::styled(header, Style::default().fg(ACCENT))));
        if let Some(draft) = state.draft() {
            push_task_fields(&mut lines, draft, view.task_field, true);
        }
    } else {
        let header = if view.tasks.create_in_flight { "New task (saving…)" } else { "New task" };
        lines.push(Line::from(Span::styled(header, Style::default().fg(ACCENT))));
        push_task_fields(&mut lines, &view.tasks.form, view.task_field, false);
    }
    push_error_line(&mut lines, view.tasks.error.as_deref());
    push_confirm_line(&mut lines, view.tasks.pending_delete.is_some(), "task");

    render_tab_block(frame, area, " Tasks ", lines);
}

fn push_task_fields(
    lines: &mut Vec<Line<'static>>,
    draft: &crate::tabs::TaskDraft,
    focused: TaskField,
    editing: bool,
) {
    let mut field = |name: TaskField, value: String| {
        let style = if name == focused {
            Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", name.label()), style),
            Span::raw(value),
        ]));
    };
    field(TaskField::Title, draft.title.clone());
    field(TaskField::Due, draft.due_at.clone());
    field(TaskField::Notes, draft.notes.clone());
    field(TaskField::Assignee, draft.assignee_label().to_string());
    field(TaskField::Priority, draft.priority.to_string());
    if editing {
        lines.push(Line::from(Span::styled(
            format!("  Status: {}", draft.status),
            Style::default().fg(MUTED),
        )));
    }
}

fn render_comms_tab(
    frame: &mut Frame,
    area: Rect,
    view: &DetailView,
    detail: Option<&StudentDetail>,
) {
    let mut lines: Vec<Line> = Vec::new();

    let comms = detail.map(|d| d.communications.as_slice()).unwrap_or(&[]);
    for (idx, comm) in comms.iter().enumerate() {
        let marker = selection_marker(idx == view.comms.selected, false);
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT)),
            Span::styled(
                format!(
                    "{} · {} · {}: ",
                    comm.channel.label(),
                    comm.logged_by.as_deref().unwrap_or("-"),
                    format_optional(comm.timestamp.as_ref())
                ),
                Style::default().fg(MUTED),
            ),
            Span::raw(comm.body.clone()),
        ]));
    }
    if comms.is_empty() {
        lines.push(Line::from(Span::styled("No communications yet", Style::default().fg(MUTED))));
    }

    lines.push(Line::from(""));
    if view.comms.email_open {
        let header = if view.comms.email_in_flight { "Email (sending…)" } else { "Email (mock)" };
        lines.push(Line::from(Span::styled(header, Style::default().fg(ACCENT))));
        let focus = |focused: bool| {
            if focused {
                Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            }
        };
        lines.push(Line::from(vec![
            Span::styled("  Subject: ", focus(!view.email_body_focused)),
            Span::raw(view.comms.email_subject.clone()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  Body: ", focus(view.email_body_focused)),
            Span::raw(view.comms.email_body.clone()),
        ]));
    } else {
        let suffix = if view.comms.log_in_flight { " (saving…)" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(
                format!("Log [{}]> ", view.comms.channel.label()),
                Style::default().fg(ACCENT),
            ),
            Span::raw(format!("{}{}", view.comms.body, suffix)),
        ]));
        lines.push(Line::from(Span::styled(
            "  Ctrl+T: channel · Ctrl+E: compose email",
            Style::default().fg(MUTED),
        )));
    }
    push_error_line(&mut lines, view.comms.error.as_deref());

    render_tab_block(frame, area, " Communications ", lines);
}

fn render_interactions_tab(
    frame: &mut Frame,
    area: Rect,
    view: &DetailView,
    detail: Option<&StudentDetail>,
) {
    let mut lines: Vec<Line> = Vec::new();

    let interactions = detail.map(|d| d.interactions.as_slice()).unwrap_or(&[]);
    let ordered = view.interactions.sorted(interactions);
    for (idx, event) in ordered.iter().enumerate() {
        let marker = selection_marker(idx == view.interactions.selected, false);
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT)),
            Span::raw(format!("{} {} ", event.kind.marker(), event.kind.label())),
            Span::styled(
                format!(
                    "{} · {}",
                    format_optional(event.timestamp.as_ref()),
                    event.details.as_deref().unwrap_or("")
                ),
                Style::default().fg(MUTED),
            ),
        ]));
    }
    if ordered.is_empty() {
        lines.push(Line::from(Span::styled("No interactions recorded", Style::default().fg(MUTED))));
    }

    render_tab_block(frame, area, " Interactions ", lines);
}

fn render_summary_panel(
    frame: &mut Frame,
    area: Rect,
    summary: Option<&AiSummary>,
    loading: bool,
    error: Option<&str>,
) {
    let content = match (summary, error) {
        (Some(summary), _) => {
            let dots = summary.priority_dots() as usize;
            let priority = format!("{}{}", "●".repeat(dots), "○".repeat(5 - dots));

            let mut lines = vec![
                Line::from(vec![
                    Span::styled("Priority ", Style::default().fg(MUTED)),
                    Span::styled(priority, Style::default().fg(ACCENT)),
                    Span::styled(
                        format!("  {}", summary.engagement_level),
                        Style::default().fg(BRIGHT),
                    ),
                ]),
                Line::from(""),
            ];
            for line in summary.summary.lines() {
                lines.push(Line::from(line.to_string()));
            }
            if !summary.recommendations.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Recommendations",
                    Style::default().fg(MUTED),
                )));
                for rec in &summary.recommendations {
                    lines.push(Line::from(format!("• {}", rec)));
                }
            }
            let m = summary.key_metrics;
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(
                    "{} interactions · {} recent · {} comms · {} open tasks · {} AI questions",
                    m.total_interactions,
                    m.recent_activity,
                    m.communications,
                    m.open_tasks,
                    m.ai_questions_asked
                ),
                Style::default().fg(MUTED),
            )));
            lines.push(Line::from(Span::styled(
                format!("generated {}", format_optional(summary.generated_at.as_ref())),
                Style::default().fg(MUTED),
            )));
            Text::from(lines)
        }
        (None, Some(error)) => Text::from(Span::styled(
            format!("✗ {} (Ctrl+R to retry)", error),
            Style::default().fg(ERROR),
        )),
        (None, None) if loading => Text::from("Generating summary…"),
        (None, None) => Text::from(Span::styled(
            "No summary loaded (Ctrl+R to refresh)",
            Style::default().fg(MUTED),
        )),
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" AI Summary "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

pub fn render_form_screen(
    frame: &mut Frame,
    title: &str,
    form: &StudentForm,
    status: Option<&StatusMessage>,
) {
    let layout = FormLayout::new(frame.area());

    let mut lines: Vec<Line> = Vec::new();
    for field in FormField::ALL {
        let focused = field == form.focused();
        let style = if focused {
            Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        let cursor = if focused && field.is_text() { "_" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<24} ", field.label()), style),
            Span::raw(format!("{}{}", form.value(field), cursor)),
        ]));
    }
    if form.in_flight {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Saving…", Style::default().fg(ACCENT))));
    }
    push_error_line(&mut lines, form.error.as_deref());

    let paragraph = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(format!(" {} ", title)),
    );
    frame.render_widget(paragraph, layout.form_area);

    let hints = " Up/Down: field | Space: toggle | Enter: save | Esc: cancel ";
    render_status_bar(frame, layout.status_area, hints, status);
}

fn render_tab_block(frame: &mut Frame, area: Rect, title: &'static str, lines: Vec<Line>) {
    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(title),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, hints: &str, status: Option<&StatusMessage>) {
    let (text, style) = match status {
        Some(msg) => {
            let fg = match msg.message_type {
                MessageType::Success => ACCENT,
                MessageType::Error => ERROR,
            };
            (format!(" {} ", msg.text), Style::default().fg(fg).bg(BAR_BG))
        }
        None => (hints.to_string(), Style::default().fg(BRIGHT).bg(BAR_BG)),
    };
    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn selection_marker(selected: bool, delete_armed: bool) -> String {
    match (selected, delete_armed) {
        (_, true) => "✗ ".to_string(),
        (true, _) => "> ".to_string(),
        _ => "  ".to_string(),
    }
}

fn push_error_line(lines: &mut Vec<Line<'static>>, error: Option<&str>) {
    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            format!("✗ {}", error),
            Style::default().fg(ERROR),
        )));
    }
}

fn push_confirm_line(lines: &mut Vec<Line<'static>>, armed: bool, noun: &str) {
    if armed {
        lines.push(Line::from(Span::styled(
            format!("Delete this {}? Ctrl+D to confirm, Esc to cancel", noun),
            Style::default().fg(ERROR),
        )));
    }
}

fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::tabs::{ItemState, NoteDraft};

    fn buffer_text(backend: &TestBackend) -> String {
        backend.buffer().content().iter().map(|c| c.symbol()).collect()
    }

    fn student_json(id: &str, name: &str) -> Student {
        serde_json::from_str(&format!(
            r#"{{"id":"{}","name":"{}","email":"{}@example.com",
                "application_status":"Applying","grade":12,"country":"BR",
                "high_intent":true}}"#,
            id, name, id
        ))
        .unwrap()
    }

    fn sample_detail() -> StudentDetail {
        serde_json::from_str(
            r#"{
                "student": {"id":"s1","name":"Ana","email":"ana@example.com"},
                "notes": [{"id":"n1","author":"Admin","text":"Strong draft"}],
                "tasks": [{"id":"t1","title":"Call","priority":"high"}],
                "communications": [{"channel":"email","body":"Sent brochure"}],
                "interactions": [{"type":"login","ts":"2025-03-01T10:00:00Z"}]
            }"#,
        )
        .unwrap()
    }

    fn sample_summary() -> AiSummary {
        serde_json::from_str(
            r#"{
                "summary": "Engaged and responsive.",
                "priority_score": 4,
                "engagement_level": "High",
                "recommendations": ["Schedule a call"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_render_list_screen() {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();

        let students = vec![student_json("a", "Ana"), student_json("b", "Bruno")];
        terminal
            .draw(|f| {
                render_list_screen(
                    f,
                    &students,
                    0,
                    2,
                    &StudentFilter::default(),
                    false,
                    None,
                    None,
                );
            })
            .unwrap();
    }

    #[test]
    fn test_render_list_screen_empty_loading() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                render_list_screen(f, &[], 0, 0, &StudentFilter::default(), true, None, None);
            })
            .unwrap();
    }

    #[test]
    fn test_render_detail_all_tabs() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let detail = sample_detail();

        for tab in TabKind::ALL {
            let mut view = DetailView::new("s1", "Admin");
            view.active = tab;
            terminal
                .draw(|f| {
                    render_detail_screen(
                        f, &view, Some(&detail), false, None, None, false, None, None,
                    );
                })
                .unwrap();
        }
    }

    #[test]
    fn test_render_detail_with_summary_panel() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let detail = sample_detail();
        let summary = sample_summary();

        let mut view = DetailView::new("s1", "Admin");
        view.summary_open = true;
        terminal
            .draw(|f| {
                render_detail_screen(
                    f, &view, Some(&detail), false, None, Some(&summary), false, None, None,
                );
            })
            .unwrap();
    }

    #[test]
    fn test_render_detail_summary_loading() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut view = DetailView::new("s1", "Admin");
        view.summary_open = true;
        terminal
            .draw(|f| {
                render_detail_screen(f, &view, None, true, None, None, true, None, None);
            })
            .unwrap();
    }

    #[test]
    fn test_render_list_load_failure() {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                render_list_screen(
                    f,
                    &[],
                    0,
                    0,
                    &StudentFilter::default(),
                    false,
                    Some("network error"),
                    None,
                );
            })
            .unwrap();

        let content = buffer_text(terminal.backend());
        assert!(content.contains("network error"));
        assert!(content.contains("Ctrl+R to retry"));
    }

    #[test]
    fn test_render_detail_load_failure() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut view = DetailView::new("s1", "Admin");
        view.summary_open = true;
        terminal
            .draw(|f| {
                render_detail_screen(
                    f,
                    &view,
                    None,
                    false,
                    Some("server error (503)"),
                    None,
                    false,
                    Some("network error"),
                    None,
                );
            })
            .unwrap();

        let content = buffer_text(terminal.backend());
        assert!(content.contains("Failed to load student: server error (503)"));
        assert!(content.contains("network error (Ctrl+R to retry)"));
        assert!(!content.contains("Generating summary"));
        assert!(!content.contains("No summary loaded"));
    }

    #[test]
    fn test_render_detail_with_note_edit_and_confirm() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let detail = sample_detail();

        let mut view = DetailView::new("s1", "Admin");
        view.notes.edit = Some((
            "n1".to_string(),
            ItemState::Editing { draft: NoteDraft { text: "revised".to_string() } },
        ));
        view.notes.pending_delete = Some("n1".to_string());
        terminal
            .draw(|f| {
                render_detail_screen(
                    f, &view, Some(&detail), false, None, None, false, None, None,
                );
            })
            .unwrap();
    }

    #[test]
    fn test_render_email_composer() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let detail = sample_detail();

        let mut view = DetailView::new("s1", "Admin");
        view.active = TabKind::Communications;
        view.comms.open_email();
        view.comms.email_subject = "Next steps".to_string();
        terminal
            .draw(|f| {
                render_detail_screen(
                    f, &view, Some(&detail), false, None, None, false, None, None,
                );
            })
            .unwrap();
    }

    #[test]
    fn test_render_form_screen() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut form = StudentForm::new();
        form.name = "Ana".to_string();
        form.error = Some("boom".to_string());
        terminal
            .draw(|f| {
                render_form_screen(f, "New student", &form, None);
            })
            .unwrap();
    }

    #[test]
    fn test_render_status_bar_with_message() {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        let msg = StatusMessage {
            text: "Note added".to_string(),
            message_type: MessageType::Success,
            expires_at: std::time::Instant::now(),
        };
        terminal
            .draw(|f| {
                render_status_bar(f, f.area(), " hints ", Some(&msg));
            })
            .unwrap();
    }

    #[test]
    fn test_truncate_multibyte_safe() {
        assert_eq!(truncate("ábcdé", 3), "ábc");
        assert_eq!(truncate("ab", 5), "ab");
    }
}
