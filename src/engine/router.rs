use serde::{Deserialize, Serialize};

use super::listeners::{Listeners, Subscription};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    Dashboard,
    Deployments,
    Infrastructure,
    Logs,
    Kanban,
    Settings,
}

impl ViewId {
    pub const ALL: [ViewId; 6] = [
        ViewId::Dashboard,
        ViewId::Deployments,
        ViewId::Infrastructure,
        ViewId::Logs,
        ViewId::Kanban,
        ViewId::Settings,
    ];

    pub fn fragment(self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Deployments => "deployments",
            ViewId::Infrastructure => "infrastructure",
            ViewId::Logs => "logs",
            ViewId::Kanban => "kanban",
            ViewId::Settings => "settings",
        }
    }

    /// Rail label.
    pub fn label(self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard",
            ViewId::Deployments => "Deployments",
            ViewId::Infrastructure => "System Health",
            ViewId::Logs => "Server Logs",
            ViewId::Kanban => "Task Board",
            ViewId::Settings => "Settings",
        }
    }

    fn lookup(fragment: &str) -> Option<ViewId> {
        ViewId::ALL.into_iter().find(|v| v.fragment() == fragment)
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.fragment())
    }
}

/// The resolved meaning of a fragment.
///
/// Unrecognized fragments are kept verbatim so the shell can show what was
/// asked for instead of an empty panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    View(ViewId),
    Unknown(String),
}

impl Route {
    /// Total mapping from fragment text. A leading `#` is ignored and an empty
    /// fragment is the dashboard.
    pub fn from_fragment(raw: &str) -> Route {
        let frag = Fragment::from(raw);
        if frag.as_str().is_empty() {
            return Route::View(ViewId::Dashboard);
        }
        match ViewId::lookup(frag.as_str()) {
            Some(v) => Route::View(v),
            None => Route::Unknown(frag.0),
        }
    }

    pub fn view(&self) -> Option<ViewId> {
        match self {
            Route::View(v) => Some(*v),
            Route::Unknown(_) => None,
        }
    }

    pub fn fragment(&self) -> &str {
        match self {
            Route::View(v) => v.fragment(),
            Route::Unknown(raw) => raw,
        }
    }
}

impl PartialEq<ViewId> for Route {
    fn eq(&self, other: &ViewId) -> bool {
        self.view() == Some(*other)
    }
}

/// Normalized fragment text, without the leading `#`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Fragment {
    fn from(s: &str) -> Self {
        Fragment(s.trim().trim_start_matches('#').to_string())
    }
}

impl From<String> for Fragment {
    fn from(s: String) -> Self {
        Fragment::from(s.as_str())
    }
}

impl From<ViewId> for Fragment {
    fn from(v: ViewId) -> Self {
        Fragment(v.fragment().to_string())
    }
}

impl From<&Route> for Fragment {
    fn from(r: &Route) -> Self {
        Fragment(r.fragment().to_string())
    }
}

/// Where the current fragment lives, including session history.
pub trait Location {
    fn get(&self) -> String;
    /// Writes a new fragment. Returns false if it equals the current one.
    fn set(&mut self, fragment: &str) -> bool;
    fn back(&mut self) -> bool;
    fn forward(&mut self) -> bool;
}

#[derive(Clone, Debug)]
pub struct MemoryLocation {
    entries: Vec<String>,
    index: usize,
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new("")
    }
}

impl MemoryLocation {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![Fragment::from(initial).0],
            index: 0,
        }
    }
}

impl Location for MemoryLocation {
    fn get(&self) -> String {
        self.entries[self.index].clone()
    }

    fn set(&mut self, fragment: &str) -> bool {
        let frag = Fragment::from(fragment).0;
        if self.entries[self.index] == frag {
            return false;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(frag);
        self.index += 1;
        true
    }

    fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }
}

/// Keeps the current [`Route`] in step with a [`Location`].
#[derive(Debug)]
pub struct FragmentRouter<L: Location = MemoryLocation> {
    location: L,
    listeners: Listeners<Route>,
}

impl<L: Location> FragmentRouter<L> {
    pub fn new(location: L) -> Self {
        Self {
            location,
            listeners: Listeners::default(),
        }
    }

    pub fn current_view(&self) -> Route {
        Route::from_fragment(&self.location.get())
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&Route) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, sub: Subscription) -> bool {
        self.listeners.unsubscribe(sub)
    }

    /// Writes the fragment, then announces the new route. Returns the new route
    /// if the fragment actually changed.
    pub fn navigate_to(&mut self, target: impl Into<Fragment>) -> Option<Route> {
        let frag = target.into();
        if !self.location.set(frag.as_str()) {
            return None;
        }
        Some(self.announce())
    }

    pub fn back(&mut self) -> Option<Route> {
        if !self.location.back() {
            return None;
        }
        Some(self.announce())
    }

    pub fn forward(&mut self) -> Option<Route> {
        if !self.location.forward() {
            return None;
        }
        Some(self.announce())
    }

    fn announce(&mut self) -> Route {
        let route = self.current_view();
        tracing::debug!(fragment = route.fragment(), "fragment changed");
        self.listeners.emit(&route);
        route
    }
}

#[cfg(test)]
#[path = "../tests/engine/router_tests.rs"]
mod tests;
