mod report_panel;
mod settings_panel;
mod task_list_editor;

pub use report_panel::ReportPanel;
pub use settings_panel::SettingsPanel;
pub use task_list_editor::TaskListEditor;
