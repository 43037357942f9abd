//! Chat Page
//!
//! One conversation thread against the backend chatbot. The view moves
//! through three phases: idle, awaiting the backend response, and revealing
//! the already-complete response one character at a time.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;

use crate::api;
use crate::api::client::ChatTurn;
use crate::state::session::SessionStore;

/// Milliseconds between revealed characters
const REVEAL_TICK_MS: u32 = 20;

/// Where the view is in the send/receive cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ChatPhase {
    Idle,
    AwaitingResponse,
    Revealing,
}

/// Incremental exposure of an already-complete response, one character per
/// step. Steps over `char`s, so multi-byte text is never split.
struct Reveal {
    full: String,
    chars: Vec<char>,
    pos: usize,
}

impl Reveal {
    fn new(full: String) -> Self {
        let chars = full.chars().collect();
        Self {
            full,
            chars,
            pos: 0,
        }
    }

    /// Next character to expose, if any
    fn step(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        Some(c)
    }

    fn is_done(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// The complete original text, untouched by the reveal
    fn full(&self) -> &str {
        &self.full
    }
}

/// Whether an input is worth sending at all
fn is_sendable(input: &str) -> bool {
    !input.trim().is_empty()
}

/// Chat page component
#[component]
pub fn Chat() -> impl IntoView {
    let session = use_context::<SessionStore>().expect("SessionStore not found");

    let messages = create_rw_signal(Vec::<ChatTurn>::new());
    let input = create_rw_signal(String::new());
    let phase = create_rw_signal(ChatPhase::Idle);
    let reveal_buffer = create_rw_signal(String::new());

    // Handle of the running reveal interval. Lives in view scope so leaving
    // the page cancels a reveal in progress instead of letting it tick
    // against an unmounted view.
    let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    {
        let interval_handle = interval_handle.clone();
        on_cleanup(move || {
            interval_handle.borrow_mut().take();
        });
    }

    let textarea_ref = create_node_ref::<html::Textarea>();
    let bottom_ref = create_node_ref::<html::Div>();

    // Load the stored conversation; the server's history replaces local
    // state wholesale.
    create_effect(move |_| {
        let username = session.credentials().username;
        spawn_local(async move {
            match api::fetch_conversation(&username).await {
                Ok(thread) => messages.set(thread),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch conversation: {}", e).into(),
                    );
                }
            }
        });
    });

    // Keep the newest content in view
    create_effect(move |_| {
        messages.track();
        reveal_buffer.track();

        if let Some(bottom) = bottom_ref.get() {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            bottom.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    // Auto-grow the textarea to fit its content
    create_effect(move |_| {
        input.track();

        if let Some(textarea) = textarea_ref.get() {
            let el: &web_sys::HtmlTextAreaElement = &textarea;
            let style = el.style();
            let _ = style.set_property("height", "auto");
            let _ = style.set_property("height", &format!("{}px", el.scroll_height()));
        }
    });

    let send_message = {
        let interval_handle = interval_handle.clone();
        move || {
            let text = input.get_untracked();
            if !is_sendable(&text) {
                return;
            }

            // Optimistic append; on failure the turn is kept but marked
            let index = messages.with_untracked(|m| m.len());
            messages.update(|m| m.push(ChatTurn::user(text)));
            input.set(String::new());
            phase.set(ChatPhase::AwaitingResponse);

            let thread = messages.get_untracked();
            let username = session.credentials().username;
            let interval_handle = interval_handle.clone();

            spawn_local(async move {
                match api::send_chat_turn(&thread, &username).await {
                    Ok(respuesta) => {
                        start_reveal(respuesta, messages, reveal_buffer, phase, interval_handle);
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to send message: {}", e).into(),
                        );
                        messages.update(|m| {
                            if let Some(turn) = m.get_mut(index) {
                                turn.failed = true;
                            }
                        });
                        phase.set(ChatPhase::Idle);
                    }
                }
            });
        }
    };

    let send_for_click = send_message.clone();
    let send_for_key = send_message;

    view! {
        <div class="flex flex-col h-[calc(100vh-8rem)]">
            // Scrollable thread
            <div class="flex-1 overflow-y-auto space-y-4 pr-2">
                {move || {
                    messages
                        .get()
                        .into_iter()
                        .map(|turn| view! { <ChatBubble turn=turn /> })
                        .collect_view()
                }}

                // In-progress assistant turn
                {move || {
                    match phase.get() {
                        ChatPhase::Idle => ().into_view(),
                        ChatPhase::AwaitingResponse => view! {
                            <div class="flex justify-start">
                                <div class="bg-gray-800 rounded-xl px-4 py-3">
                                    <span class="text-sm text-gray-400">"Chatbot"</span>
                                    <TypingDots />
                                </div>
                            </div>
                        }
                        .into_view(),
                        ChatPhase::Revealing => view! {
                            <div class="flex justify-start">
                                <div class="bg-gray-800 rounded-xl px-4 py-3 max-w-[80%]">
                                    <span class="text-sm text-gray-400">"Chatbot"</span>
                                    <p class="whitespace-pre-wrap">{reveal_buffer.get()}</p>
                                    <TypingDots />
                                </div>
                            </div>
                        }
                        .into_view(),
                    }
                }}

                <div node_ref=bottom_ref />
            </div>

            // Fixed input surface
            <div class="mt-4 flex items-end space-x-2 bg-gray-800 rounded-xl p-3">
                <textarea
                    node_ref=textarea_ref
                    placeholder="Ask anything"
                    rows="1"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        // Enter sends, Shift+Enter inserts a newline
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            send_for_key();
                        }
                    }
                    class="flex-1 bg-transparent resize-none focus:outline-none
                           max-h-40 overflow-y-auto"
                />
                <button
                    on:click=move |_| send_for_click()
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                           font-medium transition-colors"
                >
                    "▲"
                </button>
            </div>
        </div>
    }
}

/// One rendered turn of the thread
#[component]
fn ChatBubble(turn: ChatTurn) -> impl IntoView {
    let is_user = turn.role == api::client::Role::User;
    let (align, bubble) = if is_user {
        ("flex justify-end", "bg-primary-700")
    } else {
        ("flex justify-start", "bg-gray-800")
    };
    let author = if is_user { "You" } else { "Chatbot" };

    view! {
        <div class=align>
            <div class=format!("{} rounded-xl px-4 py-3 max-w-[80%]", bubble)>
                <span class="text-sm text-gray-400">{author}</span>
                <p class="whitespace-pre-wrap">{turn.content}</p>
                {turn.failed.then(|| view! {
                    <p class="text-xs text-red-400 mt-1">"Failed to send"</p>
                })}
            </div>
        </div>
    }
}

/// Three-dot typing indicator
#[component]
fn TypingDots() -> impl IntoView {
    view! {
        <div class="flex space-x-1 mt-1 animate-pulse">
            <span class="w-2 h-2 bg-gray-500 rounded-full" />
            <span class="w-2 h-2 bg-gray-500 rounded-full" />
            <span class="w-2 h-2 bg-gray-500 rounded-full" />
        </div>
    }
}

/// Begin revealing a complete response. One character moves from the reveal
/// state into the buffer per tick; on the last one the interval is cancelled
/// and the full original text becomes a permanent assistant turn.
fn start_reveal(
    full: String,
    messages: RwSignal<Vec<ChatTurn>>,
    reveal_buffer: RwSignal<String>,
    phase: RwSignal<ChatPhase>,
    interval_handle: Rc<RefCell<Option<Interval>>>,
) {
    // Nothing to animate for an empty response
    if full.is_empty() {
        messages.update(|m| m.push(ChatTurn::assistant(full)));
        phase.set(ChatPhase::Idle);
        return;
    }

    reveal_buffer.set(String::new());
    phase.set(ChatPhase::Revealing);

    let reveal = Rc::new(RefCell::new(Reveal::new(full)));
    let handle_in_tick = interval_handle.clone();

    let interval = Interval::new(REVEAL_TICK_MS, move || {
        let mut reveal = reveal.borrow_mut();

        if let Some(c) = reveal.step() {
            reveal_buffer.update(|buf| buf.push(c));
        }

        if reveal.is_done() {
            messages.update(|m| m.push(ChatTurn::assistant(reveal.full())));
            reveal_buffer.set(String::new());
            phase.set(ChatPhase::Idle);
            // Cancel the timer the instant the sequence completes
            handle_in_tick.borrow_mut().take();
        }
    });

    *interval_handle.borrow_mut() = Some(interval);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_exposes_one_char_per_step() {
        let mut reveal = Reveal::new("hola".to_string());

        let mut revealed = String::new();
        let mut steps = 0;
        while let Some(c) = reveal.step() {
            revealed.push(c);
            steps += 1;
        }

        // Exactly N steps for N characters, and nothing lost or duplicated
        assert_eq!(steps, 4);
        assert_eq!(revealed, "hola");
        assert_eq!(reveal.full(), "hola");
        assert!(reveal.is_done());
    }

    #[test]
    fn test_reveal_is_multibyte_safe() {
        let text = "¿Qué tal? 😊 Bien";
        let mut reveal = Reveal::new(text.to_string());

        let mut revealed = String::new();
        let mut steps = 0;
        while let Some(c) = reveal.step() {
            revealed.push(c);
            steps += 1;
        }

        assert_eq!(steps, text.chars().count());
        assert_eq!(revealed, text);
    }

    #[test]
    fn test_reveal_of_empty_text_takes_no_steps() {
        let mut reveal = Reveal::new(String::new());
        assert!(reveal.is_done());
        assert_eq!(reveal.step(), None);
    }

    #[test]
    fn test_whitespace_only_input_is_not_sendable() {
        assert!(!is_sendable(""));
        assert!(!is_sendable("   "));
        assert!(!is_sendable("\n\t  \n"));
        assert!(is_sendable("hola"));
        assert!(is_sendable("  hola  "));
    }
}
