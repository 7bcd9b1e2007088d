use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::client::LogClient;
use crate::components::{ReportPanel, SettingsPanel, TaskListEditor};
use crate::config::{load_config, save_config};
use crate::dom::{self, change_value, input_value, textarea_value};
use crate::form::{AppState, Effect, Intent, ListKind, TaskEdit};

const HIGHLIGHT_MS: u32 = 2_000;

/// Root component: owns the view-state, runs the effects `AppState::apply` asks for.
pub struct App {
    state: AppState,
    pending_focus: Option<String>,
    highlight_timer: Option<Timeout>,
}

impl App {
    fn client(&self) -> LogClient {
        LogClient::new(&self.state.config.api_base_url)
    }

    fn run(&mut self, ctx: &Context<Self>, effect: Effect) {
        match effect {
            Effect::FetchLog { date, after_save } => {
                let client = self.client();
                ctx.link().send_future(async move {
                    let result = client.get_by_date(&date).await;
                    match &result {
                        Ok(Some(_)) => gloo::console::log!(format!("loaded existing log for {date}")),
                        Ok(None) => gloo::console::log!(format!("no existing log found for {date}")),
                        Err(e) => gloo::console::warn!(format!("fetching log for {date} failed: {e}")),
                    }
                    Intent::LogLoaded {
                        date,
                        after_save,
                        result,
                    }
                });
            }
            Effect::Upsert { entry, existed } => {
                let client = self.client();
                ctx.link().send_future(async move {
                    let result = client.upsert(&entry).await;
                    match &result {
                        Ok(ack) => gloo::console::log!(format!(
                            "saved log for {}: {}",
                            entry.log_date,
                            ack.message.as_deref().unwrap_or("ok")
                        )),
                        Err(e) => gloo::console::error!(format!(
                            "saving log for {} failed: {e}",
                            entry.log_date
                        )),
                    }
                    Intent::Saved {
                        date: entry.log_date,
                        existed,
                        result,
                    }
                });
            }
            Effect::GenerateReport(request) => {
                let client = self.client();
                ctx.link().send_future(async move {
                    let result = client
                        .generate_report(&request.start_date, &request.end_date)
                        .await;
                    if let Err(e) = &result {
                        gloo::console::error!(format!("report generation failed: {e}"));
                    }
                    Intent::ReportLoaded { request, result }
                });
            }
            Effect::Alert(msg) => dom::alert(&msg),
            Effect::ClearHighlightLater => {
                let link = ctx.link().clone();
                // Replacing the handle cancels any earlier pending clear.
                self.highlight_timer = Some(Timeout::new(HIGHLIGHT_MS, move || {
                    link.send_message(Intent::ClearHighlight)
                }));
            }
            Effect::Focus(id) => self.pending_focus = Some(id),
            Effect::Download { filename, text } => {
                dom::download_text(&filename, "text/markdown", &text)
            }
            Effect::PersistConfig(config) => save_config(&config),
        }
    }
}

impl Component for App {
    type Message = Intent;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: AppState::new(load_config()),
            pending_focus: None,
            highlight_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        for effect in self.state.apply(msg) {
            self.run(ctx, effect);
        }
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(id) = self.pending_focus.take() {
            dom::focus(&id);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let form = &self.state.form;

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Intent::Submit
        });
        let date_class = if form.date_highlight { "highlight" } else { "" };
        let heading = if form.existing { "Edit Entry" } else { "New Entry" };
        let save_label = if form.saving { "Saving…" } else { "Save Log" };

        html! {
            <div class="wrap">
              <div class="hero">
                <div>
                  <h1>{"Daily Log"}</h1>
                  <p class="sub">
                    {"Pick a day to load or start its entry. Entries are stored by the log backend."}
                  </p>
                </div>
              </div>

              <form class="panel" {onsubmit}>
                <h3>{heading}</h3>
                <div class="grid">
                  <label>
                    <small>{"Date"}</small>
                    <input type="date" class={date_class} value={form.date.clone()}
                      onchange={link.callback(|e: Event| Intent::DateSelected(change_value(e)))} />
                  </label>

                  <label>
                    <small>{"Project / Sprint"}</small>
                    <input value={form.project.clone()}
                      oninput={link.callback(|e: InputEvent| Intent::ProjectInput(input_value(e)))}
                      placeholder="Project or sprint name" />
                  </label>
                </div>

                { for ListKind::ALL.iter().map(|&kind| html! {
                    <TaskListEditor
                      key={kind.key()}
                      {kind}
                      list={form.list(kind).clone()}
                      on_edit={link.callback(move |edit: TaskEdit| Intent::Task(kind, edit))} />
                }) }

                <div class="grid">
                  <label style="grid-column: 1 / -1;">
                    <small>{"What went well?"}</small>
                    <textarea value={form.reflection_well.clone()}
                      oninput={link.callback(|e: InputEvent| Intent::ReflectionWellInput(textarea_value(e)))} />
                  </label>
                  <label style="grid-column: 1 / -1;">
                    <small>{"What could be improved?"}</small>
                    <textarea value={form.reflection_improve.clone()}
                      oninput={link.callback(|e: InputEvent| Intent::ReflectionImproveInput(textarea_value(e)))} />
                  </label>
                </div>

                <div class="actions">
                  <button type="submit" class="primary" disabled={form.saving}>
                    {save_label}
                  </button>
                  <button type="button" onclick={link.callback(|_: MouseEvent| Intent::NewLog)}>{"New Log"}</button>
                </div>
              </form>

              <ReportPanel
                report={self.state.report.clone()}
                on_start={link.callback(Intent::ReportStartInput)}
                on_end={link.callback(Intent::ReportEndInput)}
                on_generate={link.callback(|_| Intent::GenerateReport)}
                on_download={link.callback(|_| Intent::DownloadReport)} />

              <SettingsPanel
                draft={self.state.settings_draft.clone()}
                on_api_url={link.callback(Intent::SettingsApiUrlInput)}
                on_author={link.callback(Intent::SettingsAuthorInput)}
                on_save={link.callback(|_| Intent::SaveSettings)} />
            </div>
        }
    }
}
