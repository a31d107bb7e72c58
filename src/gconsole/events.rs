use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::gconsole::{Matcher, Preferences, ResultEntry};

/// Everything the launcher can tell us about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// All preferences, sent once after startup.
    Preferences {
        #[serde(default)]
        preferences: HashMap<String, Option<String>>,
    },

    /// A single preference was changed by the user.
    PreferencesUpdate {
        id: String,
        #[serde(default)]
        old_value: Option<String>,
        #[serde(default)]
        new_value: Option<String>,
    },

    /// The user typed the keyword followed by an optional argument.
    KeywordQuery {
        #[serde(default)]
        keyword: String,
        #[serde(default)]
        argument: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Preferences,
    PreferencesUpdate,
    KeywordQuery,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Preferences { .. } => EventKind::Preferences,
            Event::PreferencesUpdate { .. } => EventKind::PreferencesUpdate,
            Event::KeywordQuery { .. } => EventKind::KeywordQuery,
        }
    }
}

/// What the launcher should do in response to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    RenderResultList { items: Vec<ResultEntry> },
}

/// The state shared by all listeners of an extension.
pub struct ExtensionState {
    pub preferences: Preferences,
    pub matcher: Box<dyn Matcher>,
}

pub trait EventListener {
    fn on_event(&self, event: &Event, state: &mut ExtensionState) -> Option<Action>;
}

pub struct PreferencesListener;

impl EventListener for PreferencesListener {
    fn on_event(&self, event: &Event, state: &mut ExtensionState) -> Option<Action> {
        let Event::Preferences { preferences } = event else {
            return None;
        };

        state.preferences = Preferences::from_map(preferences);
        None
    }
}

pub struct PreferencesUpdateListener;

impl EventListener for PreferencesUpdateListener {
    fn on_event(&self, event: &Event, state: &mut ExtensionState) -> Option<Action> {
        let Event::PreferencesUpdate { id, new_value, .. } = event else {
            return None;
        };

        state.preferences.update(id, new_value.as_deref());
        None
    }
}

pub struct KeywordQueryListener;

impl EventListener for KeywordQueryListener {
    fn on_event(&self, event: &Event, state: &mut ExtensionState) -> Option<Action> {
        let Event::KeywordQuery { keyword, argument } = event else {
            return None;
        };

        if keyword != state.preferences.keyword() {
            debug!("Query for keyword {:?}, configured is {:?}", keyword, state.preferences.keyword());
        }

        let items = state.matcher.matches(argument.as_deref(), state.preferences.projects());
        Some(Action::RenderResultList { items })
    }
}

/// Routes every event to the listener subscribed for its kind.
pub struct Extension {
    state: ExtensionState,
    listeners: HashMap<EventKind, Box<dyn EventListener>>,
}

impl Extension {
    /// Creates an extension without any listeners.
    pub fn new(matcher: Box<dyn Matcher>) -> Self {
        Self {
            state: ExtensionState {
                preferences: Preferences::default(),
                matcher,
            },
            listeners: HashMap::new(),
        }
    }

    /// Creates an extension that keeps track of the projects preference
    /// and answers keyword queries using the given matcher.
    pub fn with_default_listeners(matcher: Box<dyn Matcher>) -> Self {
        let mut extension = Self::new(matcher);
        extension.subscribe(EventKind::Preferences, PreferencesListener);
        extension.subscribe(EventKind::PreferencesUpdate, PreferencesUpdateListener);
        extension.subscribe(EventKind::KeywordQuery, KeywordQueryListener);
        extension
    }

    /// Registers the listener for the given kind, replacing any previous one.
    pub fn subscribe(&mut self, kind: EventKind, listener: impl EventListener + 'static) {
        self.listeners.insert(kind, Box::new(listener));
    }

    pub fn dispatch(&mut self, event: &Event) -> Option<Action> {
        let Some(listener) = self.listeners.get(&event.kind()) else {
            debug!("No listener for {:?}", event.kind());
            return None;
        };

        debug!("Dispatching {:?}", event.kind());
        listener.on_event(event, &mut self.state)
    }

    #[cfg(test)]
    pub fn preferences(&self) -> &Preferences {
        &self.state.preferences
    }
}
