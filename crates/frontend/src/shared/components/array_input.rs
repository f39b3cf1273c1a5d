//! Row editors for list-valued fields: plain strings, key/value maps,
//! name/value pairs and jsonnet variables.
//!
//! Rows are keyed by position, so an input keeps focus while its own row is
//! edited. Every change hands the whole list to `on_change`.

use crate::shared::icons::icon;
use contracts::domain::a001_application::{JsonnetVar, NameValue};
use leptos::prelude::*;
use std::collections::BTreeMap;
use thaw::*;

/// Map entries as editable rows, in key order
pub fn map_to_rows(map: &BTreeMap<String, String>) -> Vec<NameValue> {
    map.iter().map(|(k, v)| NameValue::new(k, v)).collect()
}

/// Rows back to a map. Later rows win on duplicate keys, rows without a key
/// are dropped.
pub fn rows_to_map(rows: &[NameValue]) -> BTreeMap<String, String> {
    rows.iter()
        .filter(|row| !row.name.is_empty())
        .map(|row| (row.name.clone(), row.value.clone()))
        .collect()
}

fn updated<T: Clone>(items: &[T], index: usize, f: impl FnOnce(&mut T)) -> Vec<T> {
    let mut items = items.to_vec();
    if let Some(item) = items.get_mut(index) {
        f(item);
    }
    items
}

fn without<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    let mut items = items.to_vec();
    if index < items.len() {
        items.remove(index);
    }
    items
}

#[component]
fn RemoveRowButton(on_click: Callback<()>) -> impl IntoView {
    view! {
        <Button
            appearance=ButtonAppearance::Transparent
            size=ButtonSize::Small
            on_click=move |_| on_click.run(())
            attr:title="Remove"
        >
            {icon("x")}
        </Button>
    }
}

#[component]
fn AddRowButton(on_click: Callback<()>) -> impl IntoView {
    view! {
        <Button
            appearance=ButtonAppearance::Secondary
            size=ButtonSize::Small
            on_click=move |_| on_click.run(())
        >
            {icon("plus")}
            " Add"
        </Button>
    }
}

/// List of plain strings (value files, libraries, array parameters)
#[component]
pub fn StringArrayInput(
    #[prop(into)] value: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
) -> impl IntoView {
    let add = Callback::new(move |_: ()| {
        let mut items = value.get_untracked();
        items.push(String::new());
        on_change.run(items);
    });

    view! {
        <div class="array-input">
            <For
                each=move || 0..value.with(Vec::len)
                key=|index| *index
                children=move |index| {
                    view! {
                        <div class="array-input__row">
                            <input
                                class="form__input"
                                type="text"
                                placeholder=move || placeholder.get().unwrap_or_default()
                                prop:value=move || value.with(|v| v.get(index).cloned().unwrap_or_default())
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    on_change.run(value.with_untracked(|v| updated(v, index, |item| *item = text)));
                                }
                            />
                            <RemoveRowButton on_click=Callback::new(move |_: ()| {
                                on_change.run(value.with_untracked(|v| without(v, index)));
                            }) />
                        </div>
                    }
                }
            />
            <AddRowButton on_click=add />
        </div>
    }
}

/// Name/value rows (plugin environment)
#[component]
pub fn NameValueInput(
    #[prop(into)] value: Signal<Vec<NameValue>>,
    on_change: Callback<Vec<NameValue>>,
) -> impl IntoView {
    let add = Callback::new(move |_: ()| {
        let mut items = value.get_untracked();
        items.push(NameValue::default());
        on_change.run(items);
    });

    view! {
        <div class="array-input">
            <For
                each=move || 0..value.with(Vec::len)
                key=|index| *index
                children=move |index| {
                    let field = move |f: fn(&NameValue) -> String| {
                        value.with(|v| v.get(index).map(f).unwrap_or_default())
                    };
                    view! {
                        <div class="array-input__row">
                            <input
                                class="form__input"
                                type="text"
                                placeholder="Name"
                                prop:value=move || field(|row| row.name.clone())
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    on_change.run(value.with_untracked(|v| updated(v, index, |row| row.name = text)));
                                }
                            />
                            <input
                                class="form__input"
                                type="text"
                                placeholder="Value"
                                prop:value=move || field(|row| row.value.clone())
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    on_change.run(value.with_untracked(|v| updated(v, index, |row| row.value = text)));
                                }
                            />
                            <RemoveRowButton on_click=Callback::new(move |_: ()| {
                                on_change.run(value.with_untracked(|v| without(v, index)));
                            }) />
                        </div>
                    }
                }
            />
            <AddRowButton on_click=add />
        </div>
    }
}

/// Key/value map (map-shaped plugin parameters).
///
/// Rows are held locally while the editor is mounted: a map would reorder
/// entries as their keys are typed.
#[component]
pub fn MapInput(
    value: BTreeMap<String, String>,
    on_change: Callback<BTreeMap<String, String>>,
) -> impl IntoView {
    let rows = RwSignal::new(map_to_rows(&value));
    let emit = Callback::new(move |next: Vec<NameValue>| {
        on_change.run(rows_to_map(&next));
        rows.set(next);
    });

    view! { <NameValueInput value=rows on_change=emit /> }
}

/// Jsonnet top-level arguments or external variables.
///
/// `error` is rendered under the rows, e.g. a missing name.
#[component]
pub fn JsonnetVarsInput(
    #[prop(into)] value: Signal<Vec<JsonnetVar>>,
    on_change: Callback<Vec<JsonnetVar>>,
    #[prop(optional, into)] error: MaybeProp<String>,
) -> impl IntoView {
    let add = Callback::new(move |_: ()| {
        let mut items = value.get_untracked();
        items.push(JsonnetVar::default());
        on_change.run(items);
    });

    view! {
        <div class="array-input">
            <For
                each=move || 0..value.with(Vec::len)
                key=|index| *index
                children=move |index| {
                    let var = move || value.with(|v| v.get(index).cloned().unwrap_or_default());
                    view! {
                        <div class="array-input__row">
                            <input
                                class="form__input"
                                type="text"
                                placeholder="Name"
                                prop:value=move || var().name
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    on_change.run(value.with_untracked(|v| updated(v, index, |row| row.name = text)));
                                }
                            />
                            <input
                                class="form__input"
                                type="text"
                                placeholder="Value"
                                prop:value=move || var().value
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    on_change.run(value.with_untracked(|v| updated(v, index, |row| row.value = text)));
                                }
                            />
                            <label class="array-input__flag">
                                <input
                                    type="checkbox"
                                    prop:checked=move || var().code
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        on_change.run(value.with_untracked(|v| updated(v, index, |row| row.code = checked)));
                                    }
                                />
                                " code"
                            </label>
                            <RemoveRowButton on_click=Callback::new(move |_: ()| {
                                on_change.run(value.with_untracked(|v| without(v, index)));
                            }) />
                        </div>
                    }
                }
            />
            <AddRowButton on_click=add />
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_to_map_drops_unnamed_and_keeps_last() {
        let rows = vec![
            NameValue::new("b", "1"),
            NameValue::new("", "orphan"),
            NameValue::new("a", "2"),
            NameValue::new("b", "3"),
        ];
        let map = rows_to_map(&rows);
        assert_eq!(map.len(), 2);
        assert_eq!(map["b"], "3");
        assert_eq!(map_to_rows(&map), vec![NameValue::new("a", "2"), NameValue::new("b", "3")]);
    }

    #[test]
    fn test_row_helpers_ignore_out_of_range() {
        let items = vec!["x".to_string()];
        assert_eq!(without(&items, 3), items);
        assert_eq!(updated(&items, 1, |s| s.push('!')), items);
        assert_eq!(updated(&items, 0, |s| s.push('!')), vec!["x!".to_string()]);
    }
}
