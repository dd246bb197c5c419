/// A modifier + key combination, independent of the terminal backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Chord {
    pub ctrl: bool,
    pub key: char,
}

impl Chord {
    pub const fn ctrl(key: char) -> Self {
        Self { ctrl: true, key }
    }

    pub const fn plain(key: char) -> Self {
        Self { ctrl: false, key }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortcutAction {
    TogglePalette,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShortcutId(u64);

/// Process-wide key binding table.
///
/// Every `register` must be paired with a `release` by its owner; nothing here
/// deduplicates, so a leaked binding shows up as a second action per key press.
#[derive(Debug)]
pub struct Shortcuts {
    next_id: u64,
    bindings: Vec<(ShortcutId, Chord, ShortcutAction)>,
}

impl Default for Shortcuts {
    fn default() -> Self {
        Self {
            next_id: 1,
            bindings: Vec::new(),
        }
    }
}

impl Shortcuts {
    pub fn register(&mut self, chord: Chord, action: ShortcutAction) -> ShortcutId {
        let id = ShortcutId(self.next_id);
        self.next_id += 1;
        self.bindings.push((id, chord, action));
        id
    }

    pub fn release(&mut self, id: ShortcutId) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|(b, _, _)| *b != id);
        self.bindings.len() != before
    }

    /// Every action bound to `chord`, in registration order. A non-empty result
    /// means the key press is consumed.
    pub fn dispatch(&self, chord: Chord) -> Vec<ShortcutAction> {
        self.bindings
            .iter()
            .filter(|(_, c, _)| *c == chord)
            .map(|(_, _, a)| *a)
            .collect()
    }

    pub fn bound(&self, chord: Chord) -> usize {
        self.bindings.iter().filter(|(_, c, _)| *c == chord).count()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/engine/shortcuts_tests.rs"]
mod tests;
