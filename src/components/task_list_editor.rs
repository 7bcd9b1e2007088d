use yew::prelude::*;

use crate::dom::input_value;
use crate::form::{row_dom_id, ListKind, TaskEdit};
use crate::task_list::{TaskList, TaskRow};

#[derive(Properties, PartialEq)]
pub struct TaskListEditorProps {
    pub kind: ListKind,
    pub list: TaskList,
    pub on_edit: Callback<TaskEdit>,
}

#[function_component(TaskListEditor)]
pub fn task_list_editor(props: &TaskListEditorProps) -> Html {
    let kind = props.kind;
    let on_add = props.on_edit.reform(|_: MouseEvent| TaskEdit::Add);

    html! {
        <div class="task-list">
          <div class="task-list-head">
            <h4>{format!("{} ({})", kind.title(), props.list.len())}</h4>
            <button type="button" onclick={on_add}>{"+ Add"}</button>
          </div>
          if props.list.is_empty() {
            <p class="empty">{kind.empty_text()}</p>
          } else {
            <ul>
              { for props.list.rows().iter().map(|row| view_row(kind, row, &props.on_edit)) }
            </ul>
          }
        </div>
    }
}

fn view_row(kind: ListKind, row: &TaskRow, on_edit: &Callback<TaskEdit>) -> Html {
    let id = row.id;
    let save_label = if row.is_new() { "Add" } else { "Save" };

    if !row.editing {
        return html! {
            <li key={id}>
              <span class="task-text">{row.text.clone()}</span>
              <button type="button" onclick={on_edit.reform(move |_: MouseEvent| TaskEdit::Toggle(id))}>{"Edit"}</button>
              <button type="button" onclick={on_edit.reform(move |_: MouseEvent| TaskEdit::Remove(id))}>{"Remove"}</button>
            </li>
        };
    }

    let oninput = on_edit.reform(move |e: InputEvent| TaskEdit::Input(id, input_value(e)));
    let onkeydown = {
        let on_edit = on_edit.clone();
        Callback::from(move |e: KeyboardEvent| {
            let key = e.key();
            // Enter would otherwise submit the surrounding form.
            if key == "Enter" || key == "Escape" {
                e.prevent_default();
                on_edit.emit(TaskEdit::Key(id, key));
            }
        })
    };

    html! {
        <li key={id} class="editing">
          <input id={row_dom_id(kind, id)} value={row.text.clone()} {oninput} {onkeydown}
            placeholder="Describe the item, Enter to save, Esc to cancel" />
          <button type="button" onclick={on_edit.reform(move |_: MouseEvent| TaskEdit::Commit(id))}>{save_label}</button>
          <button type="button" onclick={on_edit.reform(move |_: MouseEvent| TaskEdit::Cancel(id))}>{"Cancel"}</button>
        </li>
    }
}
