//! Item editor: add input, editable list and delete buttons.

use web_sys::HtmlInputElement;
use wheel_core::{WheelCommand, WheelError, WheelEvent};
use yew::prelude::*;

use crate::state::{AppAction, AppStateContext, Outcome};
use crate::util::{alert, focus_input};

/// Inline edit in progress: which item and the text typed so far.
#[derive(Debug, Clone, PartialEq)]
struct EditDraft {
    index: usize,
    text: String,
}

/// Properties for the ItemList component.
#[derive(Properties, PartialEq)]
pub struct ItemListProps {
    /// Incremented by the page to cancel any inline edit (Escape).
    #[prop_or_default]
    pub cancel_edit: u32,
}

/// Editable list of wheel items.
#[function_component(ItemList)]
pub fn item_list(props: &ItemListProps) -> Html {
    let app_state = use_context::<AppStateContext>().expect("AppStateContext not found");
    let config = app_state.config.clone();
    let messages = &config.messages;

    let input_ref = use_node_ref();
    let edit_ref = use_node_ref();
    let input_value = use_state(String::new);
    let editing = use_state(|| None::<EditDraft>);

    // Escape from the page closes the inline editor.
    {
        let editing = editing.clone();
        use_effect_with(props.cancel_edit, move |_| {
            editing.set(None);
        });
    }

    // React to the result of our own commands.
    {
        let input_value = input_value.clone();
        let editing = editing.clone();
        let input_ref = input_ref.clone();
        let edit_ref = edit_ref.clone();
        let config = config.clone();
        use_effect_with(app_state.outcome.clone(), move |outcome| {
            let Some(Outcome { command, result, .. }) = outcome else {
                return;
            };
            match (command, result) {
                (WheelCommand::AddItem(_), Ok(WheelEvent::ItemAdded(_))) => {
                    input_value.set(String::new());
                    focus_input(&input_ref);
                }
                (WheelCommand::AddItem(_), Err(WheelError::EmptyLabel)) => {
                    if config.variant.alerts_on_empty_input() {
                        alert(&config.messages.empty_input);
                    }
                    input_value.set(String::new());
                    focus_input(&input_ref);
                }
                (WheelCommand::EditItem { .. }, Ok(WheelEvent::ItemEdited(_)))
                | (WheelCommand::RemoveItem(_), Ok(WheelEvent::ItemRemoved { .. })) => {
                    editing.set(None);
                }
                (WheelCommand::EditItem { .. }, Err(WheelError::EmptyLabel)) => {
                    if config.variant.alerts_on_empty_input() {
                        alert(&config.messages.empty_input);
                    }
                    focus_input(&edit_ref);
                }
                (WheelCommand::RemoveItem(_), Err(WheelError::TooFewItems { .. })) => {
                    alert(&config.messages.too_few_items);
                }
                _ => {}
            }
        });
    }

    // Focus the inline editor when it opens.
    {
        let edit_ref = edit_ref.clone();
        let open_index = editing.as_ref().map(|draft| draft.index);
        use_effect_with(open_index, move |open_index| {
            if open_index.is_some() {
                focus_input(&edit_ref);
            }
        });
    }

    let on_input = {
        let input_value = input_value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input_value.set(input.value());
        })
    };

    let add = {
        let app_state = app_state.clone();
        let input_value = input_value.clone();
        move || app_state.dispatch(AppAction::AddItem((*input_value).clone()))
    };

    let on_add_click = {
        let add = add.clone();
        Callback::from(move |_: MouseEvent| add())
    };

    let on_add_keypress = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            e.prevent_default();
            add();
        }
    });

    let save = {
        let app_state = app_state.clone();
        let editing = editing.clone();
        move || {
            if let Some(draft) = (*editing).clone() {
                app_state.dispatch(AppAction::EditItem {
                    index: draft.index,
                    text: draft.text,
                });
            }
        }
    };

    let on_edit_input = {
        let editing = editing.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(draft) = (*editing).clone() {
                editing.set(Some(EditDraft {
                    text: input.value(),
                    ..draft
                }));
            }
        })
    };

    let on_edit_keypress = {
        let save = save.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                save();
            }
        })
    };

    let on_save_click = Callback::from(move |_: MouseEvent| save());

    let locked = app_state.wheel.is_spinning();
    let items = app_state.wheel.items();

    let rows = items.iter().enumerate().map(|(index, label)| {
        let swatch = format!("background: {};", config.palette.color_for(index).to_css());
        let on_delete = {
            let app_state = app_state.clone();
            Callback::from(move |_: MouseEvent| app_state.dispatch(AppAction::RemoveItem(index)))
        };

        let body = match editing.as_ref() {
            Some(draft) if draft.index == index => html! {
                <>
                    <input
                        ref={edit_ref.clone()}
                        type="text"
                        class="item-edit-input"
                        value={draft.text.clone()}
                        oninput={on_edit_input.clone()}
                        onkeypress={on_edit_keypress.clone()}
                    />
                    <button
                        class="btn btn-save"
                        onclick={on_save_click.clone()}
                        disabled={locked}
                    >
                        { messages.save.clone() }
                    </button>
                </>
            },
            _ => {
                let on_edit = {
                    let editing = editing.clone();
                    let text = label.to_string();
                    Callback::from(move |_: MouseEvent| {
                        editing.set(Some(EditDraft {
                            index,
                            text: text.clone(),
                        }));
                    })
                };
                html! {
                    <>
                        <span class="item-label">{ label }</span>
                        <button class="btn btn-edit" onclick={on_edit} disabled={locked}>
                            { messages.edit.clone() }
                        </button>
                    </>
                }
            }
        };

        html! {
            <li key={index.to_string()} class="item-row">
                <span class="item-swatch" style={swatch} />
                { body }
                <button class="btn btn-delete" onclick={on_delete} disabled={locked}>
                    { messages.delete.clone() }
                </button>
            </li>
        }
    });

    html! {
        <section class="item-editor">
            <div class="item-input-row">
                <input
                    id="item-input"
                    ref={input_ref}
                    type="text"
                    placeholder={messages.input_placeholder.clone()}
                    value={(*input_value).clone()}
                    oninput={on_input}
                    onkeypress={on_add_keypress}
                    disabled={locked}
                />
                <button
                    id="add-item-button"
                    class="btn"
                    onclick={on_add_click}
                    disabled={locked}
                >
                    { messages.add.clone() }
                </button>
            </div>
            <ul id="item-list">
                { for rows }
            </ul>
        </section>
    }
}
