//! View-state for the whole page and the single update function that
//! drives it.
//!
//! Nothing in here touches the DOM or the network: UI events and async
//! results come in as [`Intent`]s, and everything the page must do in
//! response goes out as [`Effect`]s for the component to run.

use crate::config::AppConfig;
use crate::error::{ClientError, FormError};
use crate::model::{parse_date, LogEntry, ReportRequest, SaveAck};
use crate::report::{ReportOutput, ReportState};
use crate::task_list::{RowId, TaskList};

pub const MSG_CREATED: &str = "Log saved successfully!";
pub const MSG_UPDATED: &str = "Log updated successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Completed,
    Planned,
    Blockers,
}

impl ListKind {
    pub const ALL: [ListKind; 3] = [ListKind::Completed, ListKind::Planned, ListKind::Blockers];

    pub fn key(self) -> &'static str {
        match self {
            ListKind::Completed => "completed",
            ListKind::Planned => "planned",
            ListKind::Blockers => "blockers",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ListKind::Completed => "Tasks Completed Today",
            ListKind::Planned => "Tasks Planned for Tomorrow",
            ListKind::Blockers => "Blockers",
        }
    }

    pub fn empty_text(self) -> &'static str {
        match self {
            ListKind::Completed => "No tasks completed yet.",
            ListKind::Planned => "Nothing planned yet.",
            ListKind::Blockers => "No blockers.",
        }
    }
}

/// DOM id of a task row's input, used for focusing.
pub fn row_dom_id(kind: ListKind, id: RowId) -> String {
    format!("{}-row-{}", kind.key(), id)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub date: String, // YYYY-MM-DD
    pub project: String,
    pub completed: TaskList,
    pub planned: TaskList,
    pub blockers: TaskList,
    pub reflection_well: String,
    pub reflection_improve: String,
    /// The backend already had an entry for `date` when it was selected.
    pub existing: bool,
    pub date_highlight: bool,
    /// The fetch for the selected date has not answered yet.
    pub loading: bool,
    pub saving: bool,
}

impl FormState {
    pub fn list(&self, kind: ListKind) -> &TaskList {
        match kind {
            ListKind::Completed => &self.completed,
            ListKind::Planned => &self.planned,
            ListKind::Blockers => &self.blockers,
        }
    }

    pub fn list_mut(&mut self, kind: ListKind) -> &mut TaskList {
        match kind {
            ListKind::Completed => &mut self.completed,
            ListKind::Planned => &mut self.planned,
            ListKind::Blockers => &mut self.blockers,
        }
    }

    /// Resets every field, lists included, to empty.
    pub fn clear(&mut self) {
        self.date.clear();
        self.project.clear();
        self.reflection_well.clear();
        self.reflection_improve.clear();
        for kind in ListKind::ALL {
            self.list_mut(kind).clear();
        }
        self.existing = false;
        self.date_highlight = false;
        self.loading = false;
    }

    pub fn populate(&mut self, entry: &LogEntry) {
        self.date = entry.log_date.clone();
        self.project = entry.project.clone();
        self.completed.replace_all(&entry.tasks_completed);
        self.planned.replace_all(&entry.tasks_planned);
        self.blockers.replace_all(&entry.blockers);
        self.reflection_well = entry.reflection_well.clone();
        self.reflection_improve = entry.reflection_improve.clone();
    }

    /// Assembles the entry to send. Fails if the date is missing or not a real day.
    pub fn to_entry(&self, author: &str) -> Result<LogEntry, FormError> {
        let date = self.date.trim();
        if date.is_empty() {
            return Err(FormError::MissingDate);
        }
        if parse_date(date).is_none() {
            return Err(FormError::InvalidDate(date.to_string()));
        }
        Ok(LogEntry {
            log_date: date.to_string(),
            name: author.to_string(),
            project: self.project.trim().to_string(),
            tasks_completed: self.completed.items(),
            tasks_planned: self.planned.items(),
            blockers: self.blockers.items(),
            reflection_well: self.reflection_well.trim().to_string(),
            reflection_improve: self.reflection_improve.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskEdit {
    Add,
    Input(RowId, String),
    Toggle(RowId),
    Commit(RowId),
    Cancel(RowId),
    Remove(RowId),
    Key(RowId, String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    DateSelected(String),
    ProjectInput(String),
    ReflectionWellInput(String),
    ReflectionImproveInput(String),
    Task(ListKind, TaskEdit),
    LogLoaded {
        date: String,
        after_save: bool,
        result: Result<Option<LogEntry>, ClientError>,
    },
    Submit,
    Saved {
        date: String,
        existed: bool,
        result: Result<SaveAck, ClientError>,
    },
    NewLog,
    ClearHighlight,
    ReportStartInput(String),
    ReportEndInput(String),
    GenerateReport,
    ReportLoaded {
        request: ReportRequest,
        result: Result<String, ClientError>,
    },
    DownloadReport,
    SettingsApiUrlInput(String),
    SettingsAuthorInput(String),
    SaveSettings,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchLog { date: String, after_save: bool },
    Upsert { entry: LogEntry, existed: bool },
    GenerateReport(ReportRequest),
    Alert(String),
    ClearHighlightLater,
    Focus(String),
    Download { filename: String, text: String },
    PersistConfig(AppConfig),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub form: FormState,
    pub report: ReportState,
    pub config: AppConfig,
    pub settings_draft: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            form: FormState::default(),
            report: ReportState::default(),
            settings_draft: config.clone(),
            config,
        }
    }

    pub fn apply(&mut self, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::DateSelected(raw) => self.select_date(raw),
            Intent::ProjectInput(v) => {
                self.form.project = v;
                vec![]
            }
            Intent::ReflectionWellInput(v) => {
                self.form.reflection_well = v;
                vec![]
            }
            Intent::ReflectionImproveInput(v) => {
                self.form.reflection_improve = v;
                vec![]
            }
            Intent::Task(kind, edit) => self.edit_task(kind, edit),
            Intent::LogLoaded {
                date,
                after_save,
                result,
            } => self.log_loaded(date, after_save, result),
            Intent::Submit => self.submit(),
            Intent::Saved {
                date,
                existed,
                result,
            } => self.saved(date, existed, result),
            Intent::NewLog => {
                self.form.clear();
                vec![]
            }
            Intent::ClearHighlight => {
                self.form.date_highlight = false;
                vec![]
            }
            Intent::ReportStartInput(v) => {
                self.report.start_date = v;
                vec![]
            }
            Intent::ReportEndInput(v) => {
                self.report.end_date = v;
                vec![]
            }
            Intent::GenerateReport => self.generate_report(),
            Intent::ReportLoaded { request, result } => {
                self.report.output = match result {
                    Ok(text) => ReportOutput::Ready {
                        start: request.start_date,
                        end: request.end_date,
                        text,
                    },
                    Err(e) => ReportOutput::Failed(e.to_string()),
                };
                vec![]
            }
            Intent::DownloadReport => match self.report.download() {
                Some((filename, text)) => vec![Effect::Download { filename, text }],
                None => vec![Effect::Alert("Generate a report first.".into())],
            },
            Intent::SettingsApiUrlInput(v) => {
                self.settings_draft.api_base_url = v;
                vec![]
            }
            Intent::SettingsAuthorInput(v) => {
                self.settings_draft.author_name = v;
                vec![]
            }
            Intent::SaveSettings => match self.settings_draft.validated() {
                Ok(cfg) => {
                    self.config = cfg.clone();
                    self.settings_draft = cfg.clone();
                    vec![Effect::PersistConfig(cfg), Effect::Alert("Settings saved.".into())]
                }
                Err(e) => vec![Effect::Alert(e.to_string())],
            },
        }
    }

    fn select_date(&mut self, raw: String) -> Vec<Effect> {
        // A cleared picker clears the date too, so a later submit is rejected.
        let date = raw.trim().to_string();
        self.form.date = date.clone();
        self.form.existing = false;
        self.form.date_highlight = false;
        self.form.loading = false;
        if parse_date(&date).is_none() {
            return vec![];
        }
        self.form.loading = true;
        vec![Effect::FetchLog {
            date,
            after_save: false,
        }]
    }

    fn log_loaded(
        &mut self,
        date: String,
        after_save: bool,
        result: Result<Option<LogEntry>, ClientError>,
    ) -> Vec<Effect> {
        if date != self.form.date {
            return vec![];
        }
        if after_save {
            // Only confirms the write. The form may already hold newer edits.
            if matches!(result, Ok(Some(_))) {
                self.form.existing = true;
            }
            return vec![];
        }
        self.form.loading = false;
        match result {
            Ok(Some(entry)) => {
                self.form.populate(&entry);
                self.form.existing = true;
                self.form.date_highlight = true;
                vec![Effect::ClearHighlightLater]
            }
            _ => {
                self.form.clear();
                self.form.date = date;
                vec![]
            }
        }
    }

    fn edit_task(&mut self, kind: ListKind, edit: TaskEdit) -> Vec<Effect> {
        let list = self.form.list_mut(kind);
        match edit {
            TaskEdit::Add => {
                let id = list.add();
                return vec![Effect::Focus(row_dom_id(kind, id))];
            }
            TaskEdit::Input(id, text) => list.set_text(id, text),
            TaskEdit::Toggle(id) => {
                list.toggle_edit(id);
                if list.rows().iter().any(|r| r.id == id && r.editing) {
                    return vec![Effect::Focus(row_dom_id(kind, id))];
                }
            }
            TaskEdit::Commit(id) => list.commit(id),
            TaskEdit::Cancel(id) => list.cancel(id),
            TaskEdit::Remove(id) => list.remove(id),
            TaskEdit::Key(id, key) => {
                list.key(id, &key);
            }
        }
        vec![]
    }

    fn submit(&mut self) -> Vec<Effect> {
        if self.form.saving {
            return vec![];
        }
        if self.form.loading {
            let date = self.form.date.clone();
            return vec![Effect::Alert(FormError::StillLoading(date).to_string())];
        }
        match self.form.to_entry(&self.config.author_name) {
            Ok(entry) => {
                self.form.saving = true;
                vec![Effect::Upsert {
                    entry,
                    existed: self.form.existing,
                }]
            }
            Err(e) => vec![Effect::Alert(e.to_string())],
        }
    }

    fn saved(
        &mut self,
        date: String,
        existed: bool,
        result: Result<SaveAck, ClientError>,
    ) -> Vec<Effect> {
        self.form.saving = false;
        match result {
            Ok(_) => {
                let msg = if existed { MSG_UPDATED } else { MSG_CREATED };
                let mut effects = vec![Effect::Alert(msg.to_string())];
                if date == self.form.date {
                    self.form.existing = true;
                    effects.push(Effect::FetchLog {
                        date,
                        after_save: true,
                    });
                }
                effects
            }
            Err(e) => vec![Effect::Alert(format!(
                "Failed to save log: {e}. Is the backend server running?"
            ))],
        }
    }

    fn generate_report(&mut self) -> Vec<Effect> {
        if self.report.is_generating() {
            return vec![];
        }
        match self.report.request() {
            Ok(req) => {
                self.report.output = ReportOutput::Generating;
                vec![Effect::GenerateReport(req)]
            }
            Err(e) => vec![Effect::Alert(e.to_string())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::GENERATING_TEXT;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn type_task(s: &mut AppState, kind: ListKind, text: &str) {
        let effects = s.apply(Intent::Task(kind, TaskEdit::Add));
        let id = s.form.list(kind).rows().last().unwrap().id;
        assert_eq!(effects, vec![Effect::Focus(row_dom_id(kind, id))]);
        s.apply(Intent::Task(kind, TaskEdit::Input(id, text.into())));
        s.apply(Intent::Task(kind, TaskEdit::Key(id, "Enter".into())));
    }

    fn sample_entry() -> LogEntry {
        LogEntry {
            log_date: "2024-01-16".into(),
            name: AppConfig::default().author_name,
            project: "Billing revamp".into(),
            tasks_completed: vec!["Ship invoices".into()],
            tasks_planned: vec!["Retro".into(), "Plan sprint".into()],
            blockers: vec!["Waiting on API keys".into()],
            reflection_well: "Good pairing".into(),
            reflection_improve: "Start earlier".into(),
        }
    }

    #[test]
    fn absent_log_clears_form_and_posts_typed_tasks() {
        let mut s = state();
        s.form.project = "stale".into();
        s.form.completed.push("old task");

        let effects = s.apply(Intent::DateSelected("2024-01-15".into()));
        assert_eq!(
            effects,
            vec![Effect::FetchLog {
                date: "2024-01-15".into(),
                after_save: false
            }]
        );
        s.apply(Intent::LogLoaded {
            date: "2024-01-15".into(),
            after_save: false,
            result: Ok(None),
        });
        assert_eq!(s.form.date, "2024-01-15");
        assert_eq!(s.form.project, "");
        assert!(s.form.completed.is_empty());

        type_task(&mut s, ListKind::Completed, "Fix bug");
        type_task(&mut s, ListKind::Completed, "Write tests");

        let effects = s.apply(Intent::Submit);
        let [Effect::Upsert { entry, existed }] = effects.as_slice() else {
            panic!("expected a single upsert, got {effects:?}");
        };
        assert!(!existed);
        let body = serde_json::to_value(entry).unwrap();
        assert_eq!(
            body["tasks_completed"],
            serde_json::json!(["Fix bug", "Write tests"])
        );
        assert_eq!(body["log_date"], "2024-01-15");
    }

    #[test]
    fn loaded_entry_round_trips_through_the_form() {
        let mut s = state();
        let entry = sample_entry();
        s.apply(Intent::DateSelected(entry.log_date.clone()));
        let effects = s.apply(Intent::LogLoaded {
            date: entry.log_date.clone(),
            after_save: false,
            result: Ok(Some(entry.clone())),
        });
        assert_eq!(effects, vec![Effect::ClearHighlightLater]);
        assert!(s.form.existing);
        assert!(s.form.date_highlight);
        assert_eq!(s.form.to_entry(&entry.name).unwrap(), entry);

        s.apply(Intent::ClearHighlight);
        assert!(!s.form.date_highlight);
    }

    #[test]
    fn fetch_error_is_treated_as_absence() {
        let mut s = state();
        s.form.reflection_well = "leftover".into();
        s.apply(Intent::DateSelected("2024-03-01".into()));
        s.apply(Intent::LogLoaded {
            date: "2024-03-01".into(),
            after_save: false,
            result: Err(ClientError::Network("connection refused".into())),
        });
        assert_eq!(s.form.date, "2024-03-01");
        assert_eq!(s.form.reflection_well, "");
        assert!(!s.form.existing);
    }

    #[test]
    fn stale_load_results_are_dropped() {
        let mut s = state();
        s.apply(Intent::DateSelected("2024-01-15".into()));
        s.apply(Intent::DateSelected("2024-01-16".into()));
        s.form.project = "typing".into();
        let effects = s.apply(Intent::LogLoaded {
            date: "2024-01-15".into(),
            after_save: false,
            result: Ok(None),
        });
        assert!(effects.is_empty());
        assert_eq!(s.form.date, "2024-01-16");
        assert_eq!(s.form.project, "typing");
    }

    #[test]
    fn empty_or_invalid_date_selection_does_not_fetch() {
        let mut s = state();
        assert!(s.apply(Intent::DateSelected("   ".into())).is_empty());
        assert_eq!(s.form.date, "");
        assert!(s.apply(Intent::DateSelected("2024-02-31".into())).is_empty());
        assert_eq!(s.form.date, "2024-02-31");
        assert!(!s.form.loading);
    }

    #[test]
    fn submit_rejects_bad_dates_before_any_request() {
        let mut s = state();
        type_task(&mut s, ListKind::Planned, "something");
        let effects = s.apply(Intent::Submit);
        assert_eq!(effects, vec![Effect::Alert(FormError::MissingDate.to_string())]);

        s.form.date = "2024-13-40".into();
        let effects = s.apply(Intent::Submit);
        assert_eq!(
            effects,
            vec![Effect::Alert(
                FormError::InvalidDate("2024-13-40".into()).to_string()
            )]
        );
        assert!(!s.form.saving);
    }

    #[test]
    fn cleared_date_is_rejected_on_submit() {
        let mut s = state();
        s.apply(Intent::DateSelected("2024-01-15".into()));
        s.apply(Intent::LogLoaded {
            date: "2024-01-15".into(),
            after_save: false,
            result: Ok(None),
        });
        type_task(&mut s, ListKind::Completed, "Fix bug");

        assert!(s.apply(Intent::DateSelected("".into())).is_empty());
        assert_eq!(s.form.date, "");
        assert!(!s.form.existing);
        assert_eq!(
            s.apply(Intent::Submit),
            vec![Effect::Alert(FormError::MissingDate.to_string())]
        );
        assert!(!s.form.saving);
        assert_eq!(s.form.completed.items(), vec!["Fix bug"]);
    }

    #[test]
    fn submit_waits_for_the_date_load() {
        let mut s = state();
        s.apply(Intent::DateSelected("2024-01-16".into()));
        assert!(s.form.loading);
        assert_eq!(
            s.apply(Intent::Submit),
            vec![Effect::Alert(
                FormError::StillLoading("2024-01-16".into()).to_string()
            )]
        );
        assert!(!s.form.saving);

        s.apply(Intent::LogLoaded {
            date: "2024-01-16".into(),
            after_save: false,
            result: Ok(Some(sample_entry())),
        });
        assert!(!s.form.loading);
        let effects = s.apply(Intent::Submit);
        assert!(matches!(effects.as_slice(), [Effect::Upsert { existed: true, .. }]));
    }

    #[test]
    fn new_log_drops_pending_load() {
        let mut s = state();
        s.apply(Intent::DateSelected("2024-01-16".into()));
        s.apply(Intent::NewLog);
        assert!(!s.form.loading);
        let effects = s.apply(Intent::LogLoaded {
            date: "2024-01-16".into(),
            after_save: false,
            result: Ok(Some(sample_entry())),
        });
        assert!(effects.is_empty());
        assert_eq!(s.form.project, "");
    }

    #[test]
    fn edits_made_during_save_survive_the_refresh() {
        let mut s = state();
        s.apply(Intent::DateSelected("2024-01-15".into()));
        s.apply(Intent::LogLoaded {
            date: "2024-01-15".into(),
            after_save: false,
            result: Ok(None),
        });
        type_task(&mut s, ListKind::Completed, "Fix bug");
        let effects = s.apply(Intent::Submit);
        let [Effect::Upsert { entry, .. }] = effects.as_slice() else {
            panic!("expected a single upsert, got {effects:?}");
        };
        let submitted = entry.clone();

        let effects = s.apply(Intent::Task(ListKind::Completed, TaskEdit::Add));
        assert_eq!(effects.len(), 1);
        let id = s.form.completed.rows().last().unwrap().id;
        s.apply(Intent::Task(
            ListKind::Completed,
            TaskEdit::Input(id, "typed during save".into()),
        ));
        s.apply(Intent::ProjectInput("renamed".into()));

        s.apply(Intent::Saved {
            date: "2024-01-15".into(),
            existed: false,
            result: Ok(SaveAck::default()),
        });
        let effects = s.apply(Intent::LogLoaded {
            date: "2024-01-15".into(),
            after_save: true,
            result: Ok(Some(submitted)),
        });
        assert!(effects.is_empty());
        assert_eq!(
            s.form.completed.items(),
            vec!["Fix bug", "typed during save"]
        );
        assert!(s.form.completed.rows()[1].editing);
        assert_eq!(s.form.project, "renamed");
        assert!(s.form.existing);
        assert!(!s.form.date_highlight);
    }

    #[test]
    fn new_entry_reports_created_then_refreshes() {
        let mut s = state();
        s.apply(Intent::DateSelected("2024-01-15".into()));
        s.apply(Intent::LogLoaded {
            date: "2024-01-15".into(),
            after_save: false,
            result: Ok(None),
        });
        s.apply(Intent::Submit);
        assert!(s.form.saving);
        assert!(s.apply(Intent::Submit).is_empty());

        let effects = s.apply(Intent::Saved {
            date: "2024-01-15".into(),
            existed: false,
            result: Ok(SaveAck::default()),
        });
        assert_eq!(
            effects,
            vec![
                Effect::Alert(MSG_CREATED.into()),
                Effect::FetchLog {
                    date: "2024-01-15".into(),
                    after_save: true
                }
            ]
        );
        assert!(!s.form.saving);
        assert!(s.form.existing);

        // A second save of the same day is an update.
        let effects = s.apply(Intent::Submit);
        assert!(matches!(effects.as_slice(), [Effect::Upsert { existed: true, .. }]));
    }

    #[test]
    fn refresh_after_save_does_not_clear_on_miss() {
        let mut s = state();
        s.form.date = "2024-01-15".into();
        s.form.project = "kept".into();
        let effects = s.apply(Intent::LogLoaded {
            date: "2024-01-15".into(),
            after_save: true,
            result: Ok(None),
        });
        assert!(effects.is_empty());
        assert_eq!(s.form.project, "kept");
        assert!(!s.form.date_highlight);
    }

    #[test]
    fn failed_save_alerts_without_refetch() {
        let mut s = state();
        s.form.date = "2024-01-15".into();
        s.apply(Intent::Submit);
        let effects = s.apply(Intent::Saved {
            date: "2024-01-15".into(),
            existed: false,
            result: Err(ClientError::Application {
                status: 500,
                detail: "disk full".into(),
            }),
        });
        assert_eq!(effects.len(), 1);
        assert!(matches!(&effects[0], Effect::Alert(m) if m.contains("disk full")));
        assert!(!s.form.saving);
        assert!(!s.form.existing);
    }

    #[test]
    fn new_log_clears_everything() {
        let mut s = state();
        s.form.populate(&sample_entry());
        s.form.existing = true;
        s.apply(Intent::NewLog);
        assert_eq!(s.form.date, "");
        assert_eq!(s.form.project, "");
        assert_eq!(s.form.reflection_well, "");
        assert_eq!(s.form.reflection_improve, "");
        for kind in ListKind::ALL {
            assert!(s.form.list(kind).is_empty());
        }
        assert!(!s.form.existing);
    }

    #[test]
    fn task_edits_route_to_their_own_list() {
        let mut s = state();
        type_task(&mut s, ListKind::Blockers, "VPN flaky");
        type_task(&mut s, ListKind::Planned, "Demo");
        let id = s.form.blockers.rows()[0].id;

        let effects = s.apply(Intent::Task(ListKind::Blockers, TaskEdit::Toggle(id)));
        assert_eq!(effects, vec![Effect::Focus(row_dom_id(ListKind::Blockers, id))]);
        s.apply(Intent::Task(
            ListKind::Blockers,
            TaskEdit::Input(id, "VPN down".into()),
        ));
        s.apply(Intent::Task(ListKind::Blockers, TaskEdit::Commit(id)));
        assert_eq!(s.form.blockers.items(), vec!["VPN down"]);

        s.apply(Intent::Task(ListKind::Blockers, TaskEdit::Remove(id)));
        assert!(s.form.blockers.is_empty());
        assert_eq!(s.form.planned.items(), vec!["Demo"]);
        assert!(s.form.completed.is_empty());
    }

    #[test]
    fn report_flow() {
        let mut s = state();
        assert_eq!(
            s.apply(Intent::GenerateReport),
            vec![Effect::Alert(FormError::MissingRange.to_string())]
        );

        s.apply(Intent::ReportStartInput("2024-01-01".into()));
        s.apply(Intent::ReportEndInput("2024-01-31".into()));
        let effects = s.apply(Intent::GenerateReport);
        let request = ReportRequest {
            start_date: "2024-01-01".into(),
            end_date: "2024-01-31".into(),
        };
        assert_eq!(effects, vec![Effect::GenerateReport(request.clone())]);
        assert_eq!(s.report.display_text(), GENERATING_TEXT);
        assert!(s.apply(Intent::GenerateReport).is_empty());

        s.apply(Intent::ReportLoaded {
            request: request.clone(),
            result: Ok("## STAR Story Seeds".into()),
        });
        assert_eq!(s.report.display_text(), "## STAR Story Seeds");
        assert_eq!(
            s.apply(Intent::DownloadReport),
            vec![Effect::Download {
                filename: "daily-report-2024-01-01-to-2024-01-31.md".into(),
                text: "## STAR Story Seeds".into()
            }]
        );

        s.apply(Intent::GenerateReport);
        s.apply(Intent::ReportLoaded {
            request,
            result: Err(ClientError::Application {
                status: 404,
                detail: "No logs found in the specified date range.".into(),
            }),
        });
        assert!(s.report.display_text().starts_with("Error: No logs found"));
        assert!(matches!(
            s.apply(Intent::DownloadReport).as_slice(),
            [Effect::Alert(_)]
        ));
    }

    #[test]
    fn settings_apply_to_later_submits() {
        let mut s = state();
        s.apply(Intent::SettingsApiUrlInput("nope".into()));
        let effects = s.apply(Intent::SaveSettings);
        assert!(matches!(effects.as_slice(), [Effect::Alert(_)]));
        assert_eq!(s.config, AppConfig::default());

        s.apply(Intent::SettingsApiUrlInput("http://10.0.0.5:9000/".into()));
        s.apply(Intent::SettingsAuthorInput("Robin".into()));
        let effects = s.apply(Intent::SaveSettings);
        let saved = AppConfig {
            api_base_url: "http://10.0.0.5:9000".into(),
            author_name: "Robin".into(),
        };
        assert_eq!(effects[0], Effect::PersistConfig(saved.clone()));
        assert_eq!(s.config, saved);

        s.form.date = "2024-05-05".into();
        let effects = s.apply(Intent::Submit);
        assert!(matches!(
            effects.as_slice(),
            [Effect::Upsert { entry, .. }] if entry.name == "Robin"
        ));
    }
}
