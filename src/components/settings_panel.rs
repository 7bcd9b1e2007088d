use yew::prelude::*;

use crate::config::AppConfig;
use crate::dom::input_value;

#[derive(Properties, PartialEq)]
pub struct SettingsPanelProps {
    pub draft: AppConfig,
    pub on_api_url: Callback<String>,
    pub on_author: Callback<String>,
    pub on_save: Callback<()>,
}

#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    html! {
        <details class="panel">
          <summary>{"Settings"}</summary>
          <div class="grid">
            <label>
              <small>{"Backend URL"}</small>
              <input value={props.draft.api_base_url.clone()}
                oninput={props.on_api_url.reform(input_value)} placeholder="http://127.0.0.1:8000" />
            </label>
            <label>
              <small>{"Your name"}</small>
              <input value={props.draft.author_name.clone()}
                oninput={props.on_author.reform(input_value)} />
            </label>
          </div>
          <div class="actions">
            <button onclick={props.on_save.reform(|_: MouseEvent| ())}>{"Save Settings"}</button>
          </div>
        </details>
    }
}
