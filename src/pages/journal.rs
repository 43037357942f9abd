//! Journal Page
//!
//! One free-text entry per calendar day. The full collection is fetched on
//! every date change and filtered locally; saving posts the whole entry back.

use leptos::*;

use crate::api;
use crate::api::client::JournalEntry;
use crate::state::notices::Notices;
use crate::state::session::SessionStore;

/// Pick the entry text for a calendar day, if one exists
fn entry_for_date(entries: &[JournalEntry], date: &str) -> Option<String> {
    entries
        .iter()
        .find(|e| e.date == date)
        .map(|e| e.entry.clone())
}

/// Today's date as `YYYY-MM-DD` in local time
fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Submit label. Create vs update reflects whether the server already holds
/// an entry for the selected date, not whatever is typed in the editor.
fn save_button_label(saving: bool, has_entry: bool) -> &'static str {
    if saving {
        "Saving..."
    } else if has_entry {
        "Update entry"
    } else {
        "Create entry"
    }
}

/// Journal page component
#[component]
pub fn Journal() -> impl IntoView {
    let session = use_context::<SessionStore>().expect("SessionStore not found");
    let notices = use_context::<Notices>().expect("Notices not found");

    let selected_date = create_rw_signal(today());
    let entry_text = create_rw_signal(String::new());
    let has_entry = create_rw_signal(false);
    let (saving, set_saving) = create_signal(false);

    // Refetch the collection whenever the selected date changes and show the
    // matching entry, or an empty editor for a day without one.
    create_effect(move |_| {
        let date = selected_date.get();
        let credentials = session.credentials();

        spawn_local(async move {
            match api::fetch_journal(&credentials).await {
                Ok(entries) => {
                    let existing = entry_for_date(&entries, &date);
                    has_entry.set(existing.is_some());
                    entry_text.set(existing.unwrap_or_default());
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch journal: {}", e).into(),
                    );
                }
            }
        });
    });

    let on_save = move |_| {
        let credentials = session.credentials();
        let date = selected_date.get_untracked();
        let text = entry_text.get_untracked();

        set_saving.set(true);

        spawn_local(async move {
            match api::upsert_journal_entry(&credentials, &date, &text).await {
                Ok(_mensaje) => {
                    has_entry.set(true);
                    notices.show_success("Entry saved");
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to save entry: {}", e).into());
                    notices.show_error("Could not save the entry");
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Emotional Journal"</h1>
                <p class="text-gray-400 mt-1">"One entry per day, in your own words"</p>
            </div>

            <div class="bg-gray-800 rounded-xl p-6 space-y-4">
                // Date selector
                <div class="flex items-center space-x-3">
                    <label for="journal-date" class="text-sm text-gray-400">
                        "Date:"
                    </label>
                    <input
                        id="journal-date"
                        type="date"
                        prop:value=move || selected_date.get()
                        on:change=move |ev| selected_date.set(event_target_value(&ev))
                        class="bg-gray-700 rounded px-3 py-2 text-sm
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <textarea
                    placeholder="Write your entry..."
                    rows="8"
                    prop:value=move || entry_text.get()
                    on:input=move |ev| entry_text.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none
                           resize-none"
                />

                <button
                    on:click=on_save
                    disabled=move || saving.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg py-3 font-semibold transition-colors"
                >
                    {move || save_button_label(saving.get(), has_entry.get())}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<JournalEntry> {
        vec![
            JournalEntry {
                date: "2026-08-24".to_string(),
                entry: "Slept badly.".to_string(),
            },
            JournalEntry {
                date: "2026-08-25".to_string(),
                entry: "A much better day.".to_string(),
            },
        ]
    }

    #[test]
    fn test_entry_for_existing_date() {
        let found = entry_for_date(&entries(), "2026-08-25");
        assert_eq!(found.as_deref(), Some("A much better day."));
    }

    #[test]
    fn test_missing_date_yields_empty_editor() {
        assert_eq!(entry_for_date(&entries(), "2026-08-20"), None);
        assert_eq!(entry_for_date(&[], "2026-08-25"), None);
    }

    #[test]
    fn test_button_offers_create_until_server_entry_exists() {
        // A day without a server entry offers "create" even once text is
        // typed; only a fetched or saved entry flips it to "update"
        assert_eq!(entry_for_date(&entries(), "2026-08-20"), None);
        assert_eq!(save_button_label(false, false), "Create entry");
        assert_eq!(save_button_label(false, true), "Update entry");
        assert_eq!(save_button_label(true, false), "Saving...");
        assert_eq!(save_button_label(true, true), "Saving...");
    }

    #[test]
    fn test_today_is_calendar_day_shaped() {
        let date = today();
        assert_eq!(date.len(), 10);
        assert_eq!(&date[4..5], "-");
        assert_eq!(&date[7..8], "-");
    }
}
