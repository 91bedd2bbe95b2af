use super::state::{AutocompleteState, DEBOUNCE_MS};
use crate::domain::a001_customer::api;
use crate::shared::list_utils::highlight_matches;
use contracts::domain::a001_customer::Customer;
use gloo_timers::callback::Timeout;
use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Customer search box with debounced suggestions.
///
/// Typing searches after a quiet period; ArrowUp/ArrowDown move through the
/// suggestions and Enter picks one. Clearing the input clears `selected`.
#[component]
pub fn CustomerAutocomplete(
    /// Picked customer; setting it from outside updates the input text
    selected: RwSignal<Option<Customer>>,
    /// Show the picked customer's name, address and city under the input
    #[prop(optional)]
    show_info: bool,
    #[prop(optional, into)]
    placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Buscar cliente...".to_string());
    let state = RwSignal::new(AutocompleteState::default());
    let (text, set_text) = signal(String::new());
    // Dropping a pending Timeout cancels it
    let pending = StoredValue::new_local(None::<Timeout>);
    // Set when typing drops the selection, so the text is not wiped
    let cleared_by_typing = StoredValue::new(false);

    Effect::new(move |_| match selected.get() {
        Some(c) => set_text.set(c.full_name()),
        None => {
            if cleared_by_typing.get_value() {
                cleared_by_typing.set_value(false);
            } else {
                set_text.set(String::new());
            }
        }
    });

    let run_search = move |query: String| {
        let Some(token) = state.try_update(|s| s.begin_search()) else {
            return;
        };
        spawn_local(async move {
            match api::search_customers(&query).await {
                Ok(customers) => {
                    let count = customers.len();
                    state.try_update(|s| {
                        if s.apply_results(token, &query, customers) {
                            log::debug!("customer search '{}': {} results", query, count);
                        }
                    });
                }
                Err(e) => log::error!("customer search failed: {}", e),
            }
        });
    };

    let on_input = move |value: String| {
        set_text.set(value.clone());
        let stale = selected.with_untracked(|c| c.as_ref().is_some_and(|c| c.full_name() != value));
        if stale {
            cleared_by_typing.set_value(true);
            selected.set(None);
        }
        let query = state.try_update(|s| s.input(&value)).flatten();
        match query {
            None => {
                pending.set_value(None);
                if selected.with_untracked(Option::is_some) {
                    cleared_by_typing.set_value(true);
                    selected.set(None);
                }
            }
            Some(query) => {
                let timeout = Timeout::new(DEBOUNCE_MS, move || run_search(query));
                pending.set_value(Some(timeout));
            }
        }
    };

    let pick = move |customer: Option<Customer>| {
        if let Some(c) = customer {
            selected.set(Some(c));
        }
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if state.with_untracked(|s| s.suggestions.is_empty()) {
            return;
        }
        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                state.update(|s| s.move_down());
            }
            "ArrowUp" => {
                ev.prevent_default();
                state.update(|s| s.move_up());
            }
            "Enter" => {
                ev.prevent_default();
                pick(state.try_update(|s| s.confirm()).flatten());
            }
            "Escape" => state.update(|s| s.close()),
            _ => {}
        }
    };

    view! {
        <div class="autocomplete">
            <input
                type="text"
                class="input-text"
                autocomplete="off"
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=move |ev| on_input(event_target_value(&ev))
                on:keydown=on_keydown
                on:blur=move |_| state.update(|s| s.close())
            />
            <Show when=move || state.with(|s| !s.suggestions.is_empty())>
                <div class="autocomplete__suggestions">
                    {move || {
                        let (suggestions, query, highlighted) = state.with(|s| {
                            (s.suggestions.clone(), s.results_for.clone(), s.highlighted)
                        });
                        suggestions
                            .into_iter()
                            .enumerate()
                            .map(|(index, c)| {
                                let class = if highlighted == Some(index) {
                                    "autocomplete__item autocomplete__item--active"
                                } else {
                                    "autocomplete__item"
                                };
                                view! {
                                    <div
                                        class=class
                                        on:mousedown=move |ev| {
                                            // keep focus so blur does not close the list first
                                            ev.prevent_default();
                                            pick(state.try_update(|s| s.pick(index)).flatten());
                                        }
                                    >
                                        {highlight_matches(&c.full_name(), &query)}
                                        " - "
                                        {highlight_matches(&c.location(), &query)}
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
            {move || {
                if !show_info {
                    return None;
                }
                selected
                    .get()
                    .map(|c| {
                        view! {
                            <div class="customer-info">
                                <p><strong>"Cliente: "</strong>{c.full_name()}</p>
                                <p><strong>"Dirección: "</strong>{c.address.clone()}</p>
                                <p><strong>"Localidad: "</strong>{c.city.clone()}</p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
