//! Dashboard application state and event loop.
//!
//! The `App` owns the read cache, the background request dispatcher, and
//! the active screen. Each tick it drains finished API calls, issues any
//! fetches the current screen needs, redraws when state changed, and maps
//! one keyboard action onto the active screen. Responses carry the request
//! id they answered; a response whose id is no longer the latest one
//! recorded for its cache key is dropped, so the last issued fetch wins.

use std::collections::HashMap;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::forms::StudentForm;
use super::rendering;
use crate::api::{
    ApiEvent, ApiOutcome, ApiRequest, Dispatcher, MutationAction, RequestId,
};
use crate::cache::{CacheKey, QueryCache};
use crate::filters::{QuickFilter, StudentFilter, apply_filter};
use crate::models::Student;
use crate::tabs::{CommunicationsTab, InteractionsTab, NotesTab, TabKind, TasksTab};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Which task-form field takes typed input. Assignee and priority are
/// option fields cycled with space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Title,
    Due,
    Notes,
    Assignee,
    Priority,
}

impl TaskField {
    pub const ALL: [TaskField; 5] = [
        TaskField::Title,
        TaskField::Due,
        TaskField::Notes,
        TaskField::Assignee,
        TaskField::Priority,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TaskField::Title => "Title",
            TaskField::Due => "Due",
            TaskField::Notes => "Notes",
            TaskField::Assignee => "Assignee",
            TaskField::Priority => "Priority",
        }
    }

    fn next(self) -> TaskField {
        let pos = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    fn prev(self) -> TaskField {
        let pos = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// State of the per-student detail screen: one instance per visit, tabs
/// scoped to a single student id.
pub struct DetailView {
    pub student_id: String,
    pub active: TabKind,
    pub notes: NotesTab,
    pub tasks: TasksTab,
    pub comms: CommunicationsTab,
    pub interactions: InteractionsTab,
    pub summary_open: bool,
    pub task_field: TaskField,
    /// When the email composer is open: false = subject, true = body.
    pub email_body_focused: bool,
}

impl DetailView {
    pub fn new(student_id: impl Into<String>, operator: &str) -> Self {
        let student_id = student_id.into();
        Self {
            notes: NotesTab::new(student_id.clone(), operator),
            tasks: TasksTab::new(student_id.clone()),
            comms: CommunicationsTab::new(student_id.clone(), operator),
            interactions: InteractionsTab::new(student_id.clone()),
            student_id,
            active: TabKind::Notes,
            summary_open: false,
            task_field: TaskField::Title,
            email_body_focused: false,
        }
    }
}

pub enum Screen {
    List,
    Detail(Box<DetailView>),
    CreateStudent(StudentForm),
    EditStudent { student_id: String, form: StudentForm },
}

pub struct App {
    dispatcher: Dispatcher,
    rx: Receiver<ApiEvent>,
    cache: QueryCache,
    /// Latest request id issued per cache key; responses for older ids are
    /// dropped.
    pending: HashMap<CacheKey, RequestId>,
    pub screen: Screen,
    pub filter: StudentFilter,
    pub selected: usize,
    operator: String,
    status_message: Option<StatusMessage>,
    should_quit: bool,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(dispatcher: Dispatcher, rx: Receiver<ApiEvent>, operator: impl Into<String>) -> Self {
        Self {
            dispatcher,
            rx,
            cache: QueryCache::new(),
            pending: HashMap::new(),
            screen: Screen::List,
            filter: StudentFilter::default(),
            selected: 0,
            operator: operator.into(),
            status_message: None,
            should_quit: false,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.drain_api_events();
            self.issue_needed_fetches();
            self.expire_status();

            // Draw when dirty or every 100ms (covers terminal resize).
            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100)
            {
                terminal.draw(|f| self.render(f))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }
        Ok(())
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        let status = self.status_message.as_ref();
        match &self.screen {
            Screen::List => {
                let students = self.filtered_students();
                let total = self.cache.students().map_or(0, |s| s.len());
                let loading = self.cache.is_inflight(&CacheKey::Students);
                let error = self.cache.fetch_error(&CacheKey::Students);
                rendering::render_list_screen(
                    frame,
                    &students,
                    self.selected,
                    total,
                    &self.filter,
                    loading,
                    error,
                    status,
                );
            }
            Screen::Detail(view) => {
                let detail_key = CacheKey::Student(view.student_id.clone());
                let summary_key = CacheKey::Summary(view.student_id.clone());
                let detail = self.cache.detail(&view.student_id);
                let summary = self.cache.summary(&view.student_id);
                let detail_loading = self.cache.is_inflight(&detail_key);
                let summary_loading = self.cache.is_inflight(&summary_key);
                let detail_error = self.cache.fetch_error(&detail_key);
                let summary_error = self.cache.fetch_error(&summary_key);
                rendering::render_detail_screen(
                    frame,
                    view,
                    detail,
                    detail_loading,
                    detail_error,
                    summary,
                    summary_loading,
                    summary_error,
                    status,
                );
            }
            Screen::CreateStudent(form) => {
                rendering::render_form_screen(frame, "New student", form, status);
            }
            Screen::EditStudent { form, .. } => {
                rendering::render_form_screen(frame, "Edit student", form, status);
            }
        }
    }

    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn expire_status(&mut self) {
        let expired = self
            .status_message
            .as_ref()
            .is_some_and(|msg| Instant::now() >= msg.expires_at);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    /// Students matching the active filter, in list order.
    pub fn filtered_students(&self) -> Vec<Student> {
        match self.cache.students() {
            Some(students) => apply_filter(students, &self.filter),
            None => Vec::new(),
        }
    }

    /// Distinct countries present in the loaded list, sorted. Drives the
    /// country criterion cycle.
    pub fn country_options(&self) -> Vec<String> {
        let mut countries: Vec<String> = self
            .cache
            .students()
            .unwrap_or(&[])
            .iter()
            .filter_map(|s| s.country.clone())
            .collect();
        countries.sort();
        countries.dedup();
        countries
    }

    // --- background requests ---

    fn drain_api_events(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.apply_event(event);
            self.needs_redraw = true;
        }
    }

    /// Issue fetches the current screen needs and the cache cannot serve
    /// fresh.
    fn issue_needed_fetches(&mut self) {
        self.fetch_if_needed(CacheKey::Students);
        if let Screen::Detail(view) = &self.screen {
            let id = view.student_id.clone();
            let summary_open = view.summary_open;
            self.fetch_if_needed(CacheKey::Student(id.clone()));
            // Summary loads lazily, only while its panel is open.
            if summary_open {
                self.fetch_if_needed(CacheKey::Summary(id));
            }
        }
    }

    fn fetch_if_needed(&mut self, key: CacheKey) {
        if !self.cache.needs_fetch(&key) {
            return;
        }
        let request = match &key {
            CacheKey::Students => ApiRequest::FetchStudents,
            CacheKey::Student(id) => ApiRequest::FetchDetail(id.clone()),
            CacheKey::Summary(id) => ApiRequest::FetchSummary(id.clone()),
        };
        self.cache.mark_inflight(key.clone());
        let request_id = self.dispatcher.dispatch(request);
        self.pending.insert(key, request_id);
    }

    fn dispatch_mutation(&mut self, request: ApiRequest) {
        self.dispatcher.dispatch(request);
    }

    /// True when this response answers the latest request for its key.
    fn settle_fetch(&mut self, key: &CacheKey, request_id: RequestId) -> bool {
        if self.pending.get(key) == Some(&request_id) {
            self.pending.remove(key);
            self.cache.clear_inflight(key);
            true
        } else {
            false
        }
    }

    fn apply_event(&mut self, event: ApiEvent) {
        match event.outcome {
            ApiOutcome::Students(result) => {
                if !self.settle_fetch(&CacheKey::Students, event.request_id) {
                    return;
                }
                match result {
                    Ok(students) => self.cache.put_students(students),
                    Err(e) => {
                        self.cache.record_failure(CacheKey::Students, e.brief());
                        self.set_status(
                            format!("Failed to load students: {}", e.brief()),
                            MessageType::Error,
                            STATUS_ERROR_DURATION_MS,
                        );
                    }
                }
            }
            ApiOutcome::Detail { student_id, result } => {
                if !self.settle_fetch(&CacheKey::Student(student_id.clone()), event.request_id) {
                    return;
                }
                match result {
                    Ok(detail) => self.cache.put_detail(student_id, detail),
                    Err(e) => {
                        self.cache.record_failure(CacheKey::Student(student_id), e.brief());
                        self.set_status(
                            format!("Failed to load student: {}", e.brief()),
                            MessageType::Error,
                            STATUS_ERROR_DURATION_MS,
                        );
                    }
                }
            }
            ApiOutcome::Summary { student_id, result } => {
                if !self.settle_fetch(&CacheKey::Summary(student_id.clone()), event.request_id) {
                    return;
                }
                match result {
                    Ok(summary) => self.cache.put_summary(student_id, summary),
                    Err(e) => {
                        self.cache.record_failure(CacheKey::Summary(student_id), e.brief());
                        self.set_status(
                            format!("Failed to load AI summary: {}", e.brief()),
                            MessageType::Error,
                            STATUS_ERROR_DURATION_MS,
                        );
                    }
                }
            }
            ApiOutcome::Mutation { student_id, action, result } => {
                self.apply_mutation_outcome(student_id, action, result);
            }
        }
    }

    fn apply_mutation_outcome(
        &mut self,
        student_id: Option<String>,
        action: MutationAction,
        result: Result<(), crate::api::ApiError>,
    ) {
        match action {
            MutationAction::CreateStudent => match &result {
                Ok(()) => {
                    self.cache.invalidate_list();
                    if matches!(self.screen, Screen::CreateStudent(_)) {
                        self.screen = Screen::List;
                        self.set_status(
                            "Student created",
                            MessageType::Success,
                            STATUS_SUCCESS_DURATION_MS,
                        );
                    }
                }
                Err(e) => {
                    if let Screen::CreateStudent(form) = &mut self.screen {
                        form.in_flight = false;
                        form.error = Some(e.brief());
                    }
                }
            },
            MutationAction::UpdateStudent => match &result {
                Ok(()) => {
                    let editing = match &self.screen {
                        Screen::EditStudent { student_id, .. } => Some(student_id.clone()),
                        _ => None,
                    };
                    if let Some(id) = editing {
                        self.cache.invalidate_student(&id);
                        let view = DetailView::new(id, &self.operator);
                        self.screen = Screen::Detail(Box::new(view));
                        self.set_status(
                            "Student updated",
                            MessageType::Success,
                            STATUS_SUCCESS_DURATION_MS,
                        );
                    } else if let Some(id) = &student_id {
                        self.cache.invalidate_student(id);
                    }
                }
                Err(e) => {
                    if let Screen::EditStudent { form, .. } = &mut self.screen {
                        form.in_flight = false;
                        form.error = Some(e.brief());
                    }
                }
            },
            _ => {
                // Sub-resource mutation: let the owning tab settle its form
                // state, then invalidate that student's reads on success.
                if let Screen::Detail(view) = &mut self.screen
                    && student_id.as_deref() == Some(view.student_id.as_str())
                {
                    view.notes.resolve_mutation(action, &result);
                    view.tasks.resolve_mutation(action, &result);
                    view.comms.resolve_mutation(action, &result);
                }
                match &result {
                    Ok(()) => {
                        if let Some(id) = &student_id {
                            self.cache.invalidate_student(id);
                        }
                        self.set_status(
                            mutation_success_text(action),
                            MessageType::Success,
                            STATUS_SUCCESS_DURATION_MS,
                        );
                    }
                    Err(e) => {
                        self.set_status(
                            format!("{}: {}", mutation_failure_text(action), e.brief()),
                            MessageType::Error,
                            STATUS_ERROR_DURATION_MS,
                        );
                    }
                }
            }
        }
    }

    // --- input handling ---

    fn handle_action(&mut self, action: Action) {
        if action == Action::None {
            return;
        }
        self.needs_redraw = true;
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }
        match &self.screen {
            Screen::List => self.handle_list_action(action),
            Screen::Detail(_) => self.handle_detail_action(action),
            Screen::CreateStudent(_) | Screen::EditStudent { .. } => {
                self.handle_form_action(action)
            }
        }
    }

    fn handle_list_action(&mut self, action: Action) {
        match action {
            Action::Input(c) => {
                self.filter.search.push(c);
                self.selected = 0;
            }
            Action::DeleteChar => {
                self.filter.search.pop();
                self.selected = 0;
            }
            Action::Escape => {
                if self.filter.is_empty() {
                    self.should_quit = true;
                } else {
                    self.filter = StudentFilter::default();
                    self.selected = 0;
                }
            }
            Action::MoveUp => self.move_list_selection(-1),
            Action::MoveDown => self.move_list_selection(1),
            Action::PageUp => self.move_list_selection(-10),
            Action::PageDown => self.move_list_selection(10),
            Action::Submit => {
                if let Some(student) = self.filtered_students().get(self.selected) {
                    let id = student.id.clone();
                    // Entering the screen is a fresh attempt at loading it.
                    self.cache.clear_failure(&CacheKey::Student(id.clone()));
                    self.cache.clear_failure(&CacheKey::Summary(id.clone()));
                    self.screen = Screen::Detail(Box::new(DetailView::new(id, &self.operator)));
                }
            }
            Action::New => {
                self.screen = Screen::CreateStudent(StudentForm::new());
            }
            Action::Edit => {
                if let Some(student) = self.filtered_students().get(self.selected) {
                    self.screen = Screen::EditStudent {
                        student_id: student.id.clone(),
                        form: StudentForm::from_student(student),
                    };
                }
            }
            Action::CycleStatus => {
                self.filter.cycle_status();
                self.selected = 0;
            }
            Action::CycleGrade => {
                self.filter.cycle_grade();
                self.selected = 0;
            }
            Action::CycleCountry => {
                let options = self.country_options();
                self.filter.cycle_country(&options);
                self.selected = 0;
            }
            Action::Quick(n) => {
                let quick = match n {
                    1 => QuickFilter::NotContacted7Days,
                    2 => QuickFilter::HighIntent,
                    _ => QuickFilter::NeedsEssayHelp,
                };
                self.filter.toggle_quick(quick);
                self.selected = 0;
            }
            Action::Refresh => self.cache.invalidate_list(),
            _ => {}
        }
    }

    fn move_list_selection(&mut self, delta: isize) {
        let len = self.filtered_students().len();
        self.selected = step_selection(self.selected, delta, len);
    }

    fn handle_detail_action(&mut self, action: Action) {
        // Take the view out so tab methods and dispatching do not fight
        // over borrows of self.
        let Screen::Detail(mut view) = std::mem::replace(&mut self.screen, Screen::List) else {
            return;
        };
        let mut requests: Vec<ApiRequest> = Vec::new();
        let mut back_to_list = false;

        match action {
            Action::Escape => {
                // Esc acts on the visible tab only; state armed on another
                // tab is left as it is.
                if view.active == TabKind::Communications && view.comms.email_open {
                    view.comms.close_email();
                } else if view.active == TabKind::Notes && view.notes.pending_delete.is_some() {
                    view.notes.cancel_delete();
                } else if view.active == TabKind::Tasks && view.tasks.pending_delete.is_some() {
                    view.tasks.cancel_delete();
                } else if view.active == TabKind::Notes && view.notes.edit.is_some() {
                    view.notes.cancel_edit();
                } else if view.active == TabKind::Tasks && view.tasks.edit.is_some() {
                    view.tasks.cancel_edit();
                } else {
                    back_to_list = true;
                }
            }
            Action::NextTab => {
                if view.comms.email_open && view.active == TabKind::Communications {
                    view.email_body_focused = !view.email_body_focused;
                } else {
                    view.active = view.active.next();
                }
            }
            Action::PrevTab => view.active = view.active.prev(),
            Action::ToggleSummary => {
                view.summary_open = !view.summary_open;
                // Reopening the panel retries a failed summary load.
                if view.summary_open {
                    self.cache.clear_failure(&CacheKey::Summary(view.student_id.clone()));
                }
            }
            Action::Refresh => {
                self.cache.invalidate_student(&view.student_id);
                if view.summary_open {
                    self.cache.invalidate_summary(&view.student_id);
                }
            }
            Action::MoveUp | Action::MoveDown | Action::PageUp | Action::PageDown => {
                let delta = match action {
                    Action::MoveUp => -1,
                    Action::MoveDown => 1,
                    Action::PageUp => -10,
                    _ => 10,
                };
                self.move_tab_selection(&mut view, delta);
            }
            Action::MoveLeft => {
                if view.active == TabKind::Tasks {
                    view.task_field = view.task_field.prev();
                }
            }
            Action::MoveRight => {
                if view.active == TabKind::Tasks {
                    view.task_field = view.task_field.next();
                }
            }
            Action::Input(c) => self.type_into_tab(&mut view, c),
            Action::DeleteChar => self.delete_in_tab(&mut view),
            Action::Submit => {
                let request = match view.active {
                    TabKind::Notes => {
                        if view.notes.edit.is_some() {
                            view.notes.submit_edit()
                        } else {
                            view.notes.submit_new()
                        }
                    }
                    TabKind::Tasks => {
                        if view.tasks.edit.is_some() {
                            view.tasks.submit_edit()
                        } else {
                            view.tasks.submit_new()
                        }
                    }
                    TabKind::Communications => {
                        if view.comms.email_open {
                            view.comms.submit_email()
                        } else {
                            view.comms.submit_log()
                        }
                    }
                    TabKind::Interactions => None,
                };
                requests.extend(request);
            }
            Action::Edit => match view.active {
                TabKind::Notes => {
                    if let Some(note) = self.selected_note(&view) {
                        view.notes.start_edit(&note);
                    }
                }
                TabKind::Tasks => {
                    if let Some(task) = self.selected_task(&view) {
                        if view.tasks.start_edit(&task) {
                            view.task_field = TaskField::Title;
                        }
                    }
                }
                TabKind::Communications => view.comms.open_email(),
                TabKind::Interactions => {}
            },
            Action::Delete => match view.active {
                TabKind::Notes => {
                    if view.notes.pending_delete.is_some() {
                        requests.extend(view.notes.confirm_delete());
                    } else if let Some(note) = self.selected_note(&view) {
                        view.notes.request_delete(&note);
                    }
                }
                TabKind::Tasks => {
                    if view.tasks.pending_delete.is_some() {
                        requests.extend(view.tasks.confirm_delete());
                    } else if let Some(task) = self.selected_task(&view) {
                        view.tasks.request_delete(&task);
                    }
                }
                _ => {}
            },
            Action::Complete => {
                if view.active == TabKind::Tasks
                    && let Some(task) = self.selected_task(&view)
                {
                    requests.extend(view.tasks.mark_complete(&task));
                }
            }
            Action::CycleOption => {
                if view.active == TabKind::Communications {
                    view.comms.cycle_channel();
                }
            }
            _ => {}
        }

        if !back_to_list {
            self.screen = Screen::Detail(view);
        }
        for request in requests {
            self.dispatch_mutation(request);
        }
    }

    fn selected_note(&self, view: &DetailView) -> Option<crate::models::Note> {
        self.cache
            .detail(&view.student_id)
            .and_then(|d| d.notes.get(view.notes.selected))
            .cloned()
    }

    fn selected_task(&self, view: &DetailView) -> Option<crate::models::Task> {
        self.cache
            .detail(&view.student_id)
            .and_then(|d| d.tasks.get(view.tasks.selected))
            .cloned()
    }

    fn move_tab_selection(&self, view: &mut DetailView, delta: isize) {
        let Some(detail) = self.cache.detail(&view.student_id) else {
            return;
        };
        match view.active {
            TabKind::Notes => {
                view.notes.selected = step_selection(view.notes.selected, delta, detail.notes.len());
            }
            TabKind::Tasks => {
                view.tasks.selected = step_selection(view.tasks.selected, delta, detail.tasks.len());
            }
            TabKind::Communications => {
                view.comms.selected =
                    step_selection(view.comms.selected, delta, detail.communications.len());
            }
            TabKind::Interactions => {
                view.interactions.selected =
                    step_selection(view.interactions.selected, delta, detail.interactions.len());
            }
        }
    }

    fn type_into_tab(&mut self, view: &mut DetailView, c: char) {
        match view.active {
            TabKind::Notes => {
                if let Some(draft) = view.notes.edit_draft_mut() {
                    draft.text.push(c);
                } else {
                    view.notes.input.push(c);
                }
            }
            TabKind::Tasks => {
                let field = view.task_field;
                if let Some(draft) = view.tasks.edit_draft_mut() {
                    type_into_task_field(draft, field, c);
                } else {
                    type_into_task_field(&mut view.tasks.form, field, c);
                }
            }
            TabKind::Communications => {
                if view.comms.email_open {
                    if view.email_body_focused {
                        view.comms.email_body.push(c);
                    } else {
                        view.comms.email_subject.push(c);
                    }
                } else {
                    view.comms.body.push(c);
                }
            }
            TabKind::Interactions => {}
        }
    }

    fn delete_in_tab(&mut self, view: &mut DetailView) {
        match view.active {
            TabKind::Notes => {
                if let Some(draft) = view.notes.edit_draft_mut() {
                    draft.text.pop();
                } else {
                    view.notes.input.pop();
                }
            }
            TabKind::Tasks => {
                let field = view.task_field;
                if let Some(draft) = view.tasks.edit_draft_mut() {
                    delete_in_task_field(draft, field);
                } else {
                    delete_in_task_field(&mut view.tasks.form, field);
                }
            }
            TabKind::Communications => {
                if view.comms.email_open {
                    if view.email_body_focused {
                        view.comms.email_body.pop();
                    } else {
                        view.comms.email_subject.pop();
                    }
                } else {
                    view.comms.body.pop();
                }
            }
            TabKind::Interactions => {}
        }
    }

    fn handle_form_action(&mut self, action: Action) {
        // Escape is an explicit cancel and the only way typed input is
        // discarded; a failed submit keeps the form intact. Cancelling is
        // blocked while the submit is in flight.
        if matches!(action, Action::Escape) {
            let in_flight = match &self.screen {
                Screen::CreateStudent(form) | Screen::EditStudent { form, .. } => form.in_flight,
                _ => false,
            };
            if !in_flight {
                self.screen = Screen::List;
            }
            return;
        }

        let mut payload = None;
        match &mut self.screen {
            Screen::CreateStudent(form) | Screen::EditStudent { form, .. } => match action {
                Action::Input(c) => form.input(c),
                Action::DeleteChar => form.delete_char(),
                Action::MoveDown | Action::NextTab => form.focus_next(),
                Action::MoveUp | Action::PrevTab => form.focus_prev(),
                Action::Submit => {
                    if !form.in_flight {
                        match form.payload() {
                            Some(p) => {
                                form.in_flight = true;
                                form.error = None;
                                payload = Some(p);
                            }
                            None => {
                                form.error = Some("Name and email are required".to_string());
                            }
                        }
                    }
                }
                _ => {}
            },
            _ => return,
        }

        if let Some(payload) = payload {
            let request = match &self.screen {
                Screen::CreateStudent(_) => ApiRequest::CreateStudent(payload),
                Screen::EditStudent { student_id, .. } => {
                    ApiRequest::UpdateStudent { student_id: student_id.clone(), payload }
                }
                _ => return,
            };
            self.dispatch_mutation(request);
        }
    }
}

fn type_into_task_field(draft: &mut crate::tabs::TaskDraft, field: TaskField, c: char) {
    match field {
        TaskField::Title => draft.title.push(c),
        TaskField::Due => draft.due_at.push(c),
        TaskField::Notes => draft.notes.push(c),
        TaskField::Assignee if c == ' ' => draft.cycle_assignee(),
        TaskField::Priority if c == ' ' => draft.cycle_priority(),
        _ => {}
    }
}

fn delete_in_task_field(draft: &mut crate::tabs::TaskDraft, field: TaskField) {
    match field {
        TaskField::Title => {
            draft.title.pop();
        }
        TaskField::Due => {
            draft.due_at.pop();
        }
        TaskField::Notes => {
            draft.notes.pop();
        }
        _ => {}
    }
}

fn step_selection(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = current as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}

fn mutation_success_text(action: MutationAction) -> &'static str {
    match action {
        MutationAction::AddNote => "Note added",
        MutationAction::UpdateNote => "Note updated",
        MutationAction::DeleteNote => "Note deleted",
        MutationAction::AddTask => "Task created",
        MutationAction::UpdateTask => "Task updated",
        MutationAction::DeleteTask => "Task deleted",
        MutationAction::LogCommunication => "Communication logged",
        MutationAction::TriggerEmail => "Email queued",
        MutationAction::CreateStudent => "Student created",
        MutationAction::UpdateStudent => "Student updated",
    }
}

fn mutation_failure_text(action: MutationAction) -> &'static str {
    match action {
        MutationAction::AddNote => "Failed to add note",
        MutationAction::UpdateNote => "Failed to update note",
        MutationAction::DeleteNote => "Failed to delete note",
        MutationAction::AddTask => "Failed to create task",
        MutationAction::UpdateTask => "Failed to update task",
        MutationAction::DeleteTask => "Failed to delete task",
        MutationAction::LogCommunication => "Failed to log communication",
        MutationAction::TriggerEmail => "Failed to queue email",
        MutationAction::CreateStudent => "Failed to create student",
        MutationAction::UpdateStudent => "Failed to update student",
    }
}
