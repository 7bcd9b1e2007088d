use yew::prelude::*;

use crate::dom::change_value;
use crate::report::ReportState;

#[derive(Properties, PartialEq)]
pub struct ReportPanelProps {
    pub report: ReportState,
    pub on_start: Callback<String>,
    pub on_end: Callback<String>,
    pub on_generate: Callback<()>,
    pub on_download: Callback<()>,
}

#[function_component(ReportPanel)]
pub fn report_panel(props: &ReportPanelProps) -> Html {
    let report = &props.report;
    let busy = report.is_generating();
    let has_report = report.download().is_some();

    html! {
        <div class="panel">
          <h3>{"Generate Report"}</h3>
          <div class="grid">
            <label>
              <small>{"Start date"}</small>
              <input type="date" value={report.start_date.clone()}
                onchange={props.on_start.reform(change_value)} />
            </label>
            <label>
              <small>{"End date"}</small>
              <input type="date" value={report.end_date.clone()}
                onchange={props.on_end.reform(change_value)} />
            </label>
          </div>
          <div class="actions">
            <button class="primary" disabled={busy}
              onclick={props.on_generate.reform(|_: MouseEvent| ())}>{"Generate Report"}</button>
            <button disabled={!has_report}
              onclick={props.on_download.reform(|_: MouseEvent| ())}>{"Download .md"}</button>
          </div>
          <pre class="report-output">{report.display_text()}</pre>
        </div>
    }
}
