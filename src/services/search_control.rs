//! Search control - the search box, its dropdowns and the submit path
//!
//! ```text
//! idle --focus--> focused --input--> typing
//!  ^                 |                  |
//!  +--outside click--+------------------+
//! focused/typing --submit--> submitted (navigates away)
//! ```
//!
//! Every way of searching (form submit, history entry, suggestion) goes
//! through [`SearchControl::perform_search`].

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::search_history::{KeyValueStore, SearchHistory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Idle,
    /// History dropdown visible
    Focused,
    /// Suggestion panel visible
    Typing,
    /// A search was performed; the owner navigates away
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Focus,
    Input(String),
    ClearInput,
    ClearHistory,
    Submit,
    SelectHistory(String),
    SelectSuggestion,
    OutsideClick,
}

/// Where the browser should go next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub location: String,
}

impl Navigation {
    pub fn search(term: &str) -> Self {
        Self {
            location: format!("/search?query={}", urlencoding::encode(term)),
        }
    }
}

/// What the dropdown area should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    None,
    History(Vec<String>),
    Suggestion(String),
}

pub struct SearchControl<S> {
    history: SearchHistory<S>,
    input: String,
    state: ControlState,
}

impl<S: KeyValueStore> SearchControl<S> {
    pub fn new(history: SearchHistory<S>) -> Self {
        Self {
            history,
            input: String::new(),
            state: ControlState::Idle,
        }
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn history(&self) -> &SearchHistory<S> {
        &self.history
    }

    pub fn into_history(self) -> SearchHistory<S> {
        self.history
    }

    /// Apply one UI event; returns a navigation when a search went through
    pub fn handle(&mut self, event: SearchEvent) -> Option<Navigation> {
        if self.state == ControlState::Submitted {
            return None;
        }

        match event {
            SearchEvent::Focus => {
                if self.state == ControlState::Idle {
                    self.state = if self.input.is_empty() {
                        ControlState::Focused
                    } else {
                        ControlState::Typing
                    };
                }
                None
            }
            SearchEvent::Input(text) => {
                self.input = text;
                self.state = if self.input.is_empty() {
                    ControlState::Focused
                } else {
                    ControlState::Typing
                };
                None
            }
            SearchEvent::ClearInput => {
                self.input.clear();
                self.state = ControlState::Focused;
                None
            }
            SearchEvent::ClearHistory => {
                self.history.clear();
                None
            }
            SearchEvent::Submit | SearchEvent::SelectSuggestion => {
                let term = self.input.clone();
                self.perform_search(&term)
            }
            SearchEvent::SelectHistory(term) => self.perform_search(&term),
            SearchEvent::OutsideClick => {
                self.state = ControlState::Idle;
                None
            }
        }
    }

    /// Trim, reject blanks, remember the term and navigate to its results.
    ///
    /// A blank term leaves state, input and history untouched.
    pub fn perform_search(&mut self, term: &str) -> Option<Navigation> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }

        self.history.record(term);
        self.input.clear();
        self.state = ControlState::Submitted;
        Some(Navigation::search(term))
    }

    /// Back to a fresh idle control, keeping the history
    pub fn reset(&mut self) {
        self.input.clear();
        self.state = ControlState::Idle;
    }

    pub fn panel(&self) -> Panel {
        match self.state {
            ControlState::Focused if !self.history.is_empty() => {
                Panel::History(self.history.entries().to_vec())
            }
            ControlState::Typing => Panel::Suggestion(self.input.clone()),
            _ => Panel::None,
        }
    }

    /// Attach to `document` so clicks outside the control's region close it
    pub fn mount(self, document: &Document) -> MountedSearchControl<S> {
        let region = document.allocate_region();
        let (tx, rx) = mpsc::channel();
        let subscription = document.subscribe(region, tx);
        MountedSearchControl {
            control: self,
            region,
            events: rx,
            _subscription: subscription,
        }
    }
}

/// Identifies one visual region of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(u64);

#[derive(Default)]
struct Listeners {
    next_id: u64,
    next_region: u64,
    active: HashMap<u64, (RegionId, Sender<SearchEvent>)>,
}

/// Page-level click source. Listeners are only reachable through a
/// [`ClickSubscription`], and dropping it removes the listener.
#[derive(Clone, Default)]
pub struct Document {
    listeners: Arc<Mutex<Listeners>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Listeners> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn allocate_region(&self) -> RegionId {
        let mut listeners = self.lock();
        listeners.next_region += 1;
        RegionId(listeners.next_region)
    }

    fn subscribe(&self, region: RegionId, sender: Sender<SearchEvent>) -> ClickSubscription {
        let mut listeners = self.lock();
        listeners.next_id += 1;
        let id = listeners.next_id;
        listeners.active.insert(id, (region, sender));
        ClickSubscription {
            id,
            document: self.clone(),
        }
    }

    /// Deliver a click on `target` to every listener whose region it misses
    pub fn click(&self, target: RegionId) {
        let listeners = self.lock();
        for (region, sender) in listeners.active.values() {
            if *region != target {
                let _ = sender.send(SearchEvent::OutsideClick);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.lock().active.len()
    }
}

/// Releases its document listener when dropped
pub struct ClickSubscription {
    id: u64,
    document: Document,
}

impl Drop for ClickSubscription {
    fn drop(&mut self) {
        self.document.lock().active.remove(&self.id);
    }
}

/// A control attached to a document for the lifetime of this value
pub struct MountedSearchControl<S> {
    control: SearchControl<S>,
    region: RegionId,
    events: Receiver<SearchEvent>,
    _subscription: ClickSubscription,
}

impl<S: KeyValueStore> MountedSearchControl<S> {
    pub fn region(&self) -> RegionId {
        self.region
    }

    pub fn control(&mut self) -> &SearchControl<S> {
        self.pump();
        &self.control
    }

    /// Apply pending document events, then `event`
    pub fn handle(&mut self, event: SearchEvent) -> Option<Navigation> {
        self.pump();
        self.control.handle(event)
    }

    /// Detach from the document and hand the control back
    pub fn unmount(mut self) -> SearchControl<S> {
        self.pump();
        self.control
    }

    fn pump(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.control.handle(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::search_history::{MemoryStore, read_entries};

    fn control() -> SearchControl<MemoryStore> {
        SearchControl::new(SearchHistory::load(MemoryStore::default()))
    }

    #[test]
    fn test_focus_then_typing_shows_suggestion() {
        let mut control = control();
        control.history.record("alien");

        control.handle(SearchEvent::Focus);
        assert_eq!(control.state(), ControlState::Focused);
        assert_eq!(control.panel(), Panel::History(vec!["alien".to_string()]));

        control.handle(SearchEvent::Input("bat".to_string()));
        assert_eq!(control.state(), ControlState::Typing);
        assert_eq!(control.panel(), Panel::Suggestion("bat".to_string()));

        control.handle(SearchEvent::Input(String::new()));
        assert_eq!(control.state(), ControlState::Focused);
    }

    #[test]
    fn test_focused_with_empty_history_shows_nothing() {
        let mut control = control();
        control.handle(SearchEvent::Focus);
        assert_eq!(control.panel(), Panel::None);
    }

    #[test]
    fn test_submit_records_and_navigates() {
        let mut control = control();
        control.handle(SearchEvent::Focus);
        control.handle(SearchEvent::Input("  batman ".to_string()));

        let nav = control.handle(SearchEvent::Submit);
        assert_eq!(nav, Some(Navigation::search("batman")));
        assert_eq!(nav.unwrap().location, "/search?query=batman");
        assert_eq!(control.history().entries(), ["batman"]);
        assert_eq!(control.state(), ControlState::Submitted);
        assert_eq!(control.input(), "");
    }

    #[test]
    fn test_whitespace_submit_changes_nothing() {
        let mut control = control();
        control.handle(SearchEvent::Focus);
        control.handle(SearchEvent::Input("   ".to_string()));

        assert_eq!(control.handle(SearchEvent::Submit), None);
        assert_eq!(control.state(), ControlState::Typing);
        assert!(control.history().is_empty());
        assert!(read_entries(control.history().store()).unwrap().is_empty());
    }

    #[test]
    fn test_history_and_suggestion_share_the_search_path() {
        let mut control = control();
        let nav = control.handle(SearchEvent::SelectHistory("star wars".to_string()));
        assert_eq!(nav.unwrap().location, "/search?query=star%20wars");

        control.reset();
        control.handle(SearchEvent::Input("heat".to_string()));
        let nav = control.handle(SearchEvent::SelectSuggestion);
        assert_eq!(nav.unwrap().location, "/search?query=heat");
        assert_eq!(control.history().entries(), ["heat", "star wars"]);
    }

    #[test]
    fn test_clear_history_keeps_dropdown_open() {
        let mut control = control();
        control.history.record("alien");
        control.handle(SearchEvent::Focus);
        control.handle(SearchEvent::ClearHistory);

        assert_eq!(control.state(), ControlState::Focused);
        assert!(control.history().is_empty());
    }

    #[test]
    fn test_outside_click_returns_to_idle() {
        let document = Document::new();
        let elsewhere = document.allocate_region();
        let mut mounted = control().mount(&document);

        mounted.handle(SearchEvent::Focus);
        mounted.handle(SearchEvent::Input("dune".to_string()));

        document.click(mounted.region());
        assert_eq!(mounted.control().state(), ControlState::Typing);

        document.click(elsewhere);
        assert_eq!(mounted.control().state(), ControlState::Idle);
        assert_eq!(mounted.control().input(), "dune");
    }

    #[test]
    fn test_unmount_releases_the_click_listener() {
        let document = Document::new();
        for _ in 0..3 {
            let mounted = control().mount(&document);
            assert_eq!(document.listener_count(), 1);
            drop(mounted);
        }
        assert_eq!(document.listener_count(), 0);

        let mounted = control().mount(&document);
        let control = mounted.unmount();
        assert_eq!(document.listener_count(), 0);
        assert_eq!(control.state(), ControlState::Idle);
    }
}
