use super::router::ViewId;
use super::shortcuts::{Chord, ShortcutAction, ShortcutId, Shortcuts};

pub const PALETTE_CHORD: Chord = Chord::ctrl('k');

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ChartPie,
    Cloud,
    LightningBolt,
    Terminal,
    ViewBoards,
    Cog,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::ChartPie => "◔",
            Icon::Cloud => "☁",
            Icon::LightningBolt => "ϟ",
            Icon::Terminal => "▣",
            Icon::ViewBoards => "▤",
            Icon::Cog => "⚙",
        }
    }

    pub fn for_view(view: ViewId) -> Icon {
        match view {
            ViewId::Dashboard => Icon::ChartPie,
            ViewId::Deployments => Icon::Cloud,
            ViewId::Infrastructure => Icon::LightningBolt,
            ViewId::Logs => Icon::Terminal,
            ViewId::Kanban => Icon::ViewBoards,
            ViewId::Settings => Icon::Cog,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    pub target: ViewId,
}

impl CommandEntry {
    pub fn href(&self) -> String {
        format!("#{}", self.target.fragment())
    }
}

pub static COMMAND_CATALOG: [CommandEntry; 6] = [
    CommandEntry {
        id: "dashboard",
        label: "Dashboard",
        icon: Icon::ChartPie,
        target: ViewId::Dashboard,
    },
    CommandEntry {
        id: "deployments",
        label: "New Deployment",
        icon: Icon::Cloud,
        target: ViewId::Deployments,
    },
    CommandEntry {
        id: "health",
        label: "System Health",
        icon: Icon::LightningBolt,
        target: ViewId::Infrastructure,
    },
    CommandEntry {
        id: "logs",
        label: "Server Logs",
        icon: Icon::Terminal,
        target: ViewId::Logs,
    },
    CommandEntry {
        id: "tasks",
        label: "Task Board",
        icon: Icon::ViewBoards,
        target: ViewId::Kanban,
    },
    CommandEntry {
        id: "settings",
        label: "Settings",
        icon: Icon::Cog,
        target: ViewId::Settings,
    },
];

/// Case-insensitive substring filter; keeps catalog order.
pub fn filter_commands<'a>(catalog: &'a [CommandEntry], query: &str) -> Vec<&'a CommandEntry> {
    let q = query.to_lowercase();
    catalog
        .iter()
        .filter(|c| c.label.to_lowercase().contains(&q))
        .collect()
}

/// Command palette state: query, visibility, selection cursor, and the global
/// toggle binding it holds while mounted.
#[derive(Debug)]
pub struct CommandFilter {
    catalog: &'static [CommandEntry],
    query: String,
    open: bool,
    selected: usize,
    binding: Option<ShortcutId>,
}

impl Default for CommandFilter {
    fn default() -> Self {
        Self::new(&COMMAND_CATALOG)
    }
}

impl CommandFilter {
    pub fn new(catalog: &'static [CommandEntry]) -> Self {
        Self {
            catalog,
            query: String::new(),
            open: false,
            selected: 0,
            binding: None,
        }
    }

    /// Acquires the toggle shortcut. Mounting twice keeps a single binding.
    pub fn mount(&mut self, shortcuts: &mut Shortcuts) {
        if self.binding.is_some() {
            return;
        }
        self.binding = Some(shortcuts.register(PALETTE_CHORD, ShortcutAction::TogglePalette));
    }

    pub fn unmount(&mut self, shortcuts: &mut Shortcuts) {
        if let Some(id) = self.binding.take() {
            shortcuts.release(id);
        }
        self.query.clear();
        self.open = false;
        self.selected = 0;
    }

    pub fn is_mounted(&self) -> bool {
        self.binding.is_some()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_string();
        self.selected = 0;
    }

    pub fn results(&self) -> Vec<&'static CommandEntry> {
        filter_commands(self.catalog, &self.query)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn open(&mut self) {
        self.open = true;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn move_up(&mut self) {
        let n = self.results().len();
        if n > 0 {
            self.selected = (self.selected + n - 1) % n;
        }
    }

    pub fn move_down(&mut self) {
        let n = self.results().len();
        if n > 0 {
            self.selected = (self.selected + 1) % n;
        }
    }

    pub fn selected_entry(&self) -> Option<&'static CommandEntry> {
        let results = self.results();
        let idx = self.selected.min(results.len().saturating_sub(1));
        results.get(idx).copied()
    }

    /// Clears the query, closes the palette and hands back where to navigate.
    pub fn select(&mut self, entry: &CommandEntry) -> ViewId {
        self.query.clear();
        self.selected = 0;
        self.open = false;
        entry.target
    }
}

#[cfg(test)]
#[path = "../tests/engine/command_filter_tests.rs"]
mod tests;
