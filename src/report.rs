use crate::error::FormError;
use crate::model::{parse_date, ReportRequest};

pub const GENERATING_TEXT: &str = "Generating report... Please wait.";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ReportOutput {
    #[default]
    Idle,
    Generating,
    Ready {
        start: String,
        end: String,
        text: String,
    },
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportState {
    pub start_date: String,
    pub end_date: String,
    pub output: ReportOutput,
}

impl ReportState {
    /// Checks both bounds are real dates in order and builds the request.
    pub fn request(&self) -> Result<ReportRequest, FormError> {
        let start_raw = self.start_date.trim();
        let end_raw = self.end_date.trim();
        if start_raw.is_empty() || end_raw.is_empty() {
            return Err(FormError::MissingRange);
        }
        let start = parse_date(start_raw).ok_or_else(|| FormError::InvalidDate(start_raw.into()))?;
        let end = parse_date(end_raw).ok_or_else(|| FormError::InvalidDate(end_raw.into()))?;
        if start > end {
            return Err(FormError::InvalidRange {
                start: start_raw.into(),
                end: end_raw.into(),
            });
        }
        Ok(ReportRequest {
            start_date: start_raw.to_string(),
            end_date: end_raw.to_string(),
        })
    }

    pub fn is_generating(&self) -> bool {
        self.output == ReportOutput::Generating
    }

    /// Text shown in the report panel.
    pub fn display_text(&self) -> String {
        match &self.output {
            ReportOutput::Idle => String::new(),
            ReportOutput::Generating => GENERATING_TEXT.to_string(),
            ReportOutput::Ready { text, .. } => text.clone(),
            ReportOutput::Failed(msg) => format!("Error: {msg}"),
        }
    }

    /// Filename and content for the markdown export, if a report is loaded.
    pub fn download(&self) -> Option<(String, String)> {
        match &self.output {
            ReportOutput::Ready { start, end, text } => {
                Some((format!("daily-report-{start}-to-{end}.md"), text.clone()))
            }
            _ => None,
        }
    }
}
