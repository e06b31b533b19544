// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named, ordered plugin registry and dispatch.
//!
//! ## Ordering
//!
//! Registration order is dispatch order. The viewport's builder methods
//! insert built-ins at their canonical slot (see
//! [`BUILTIN_ORDER`](crate::BUILTIN_ORDER)) so that
//! gestures run before animations and constraints run last, whatever order
//! the host configures them in. [`PluginManager::add`] appends.
//!
//! ## Dispatch
//!
//! To hand a plugin `&mut Viewport`, dispatch takes it out of its slot for
//! the duration of the call and puts it back afterwards. Entries carry a
//! unique id, so a plugin that was removed or replaced while detached is
//! simply dropped instead of being restored over its successor. A detached
//! slot is invisible to lookups and to nested dispatch.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::Viewport;
use crate::plugin::{Plugin, ViewportPlugin};
use crate::plugins::{Bounce, ClampZoom, Decelerate, Drag, Pinch, Wheel};

#[derive(Debug)]
struct Entry {
    id: u64,
    name: Cow<'static, str>,
    /// Canonical slot for built-ins added by the viewport, `usize::MAX` otherwise.
    rank: usize,
    paused: bool,
    plugin: Option<Plugin>,
}

/// Ordered registry of the plugins attached to a viewport.
#[derive(Debug, Default)]
pub struct PluginManager {
    entries: Vec<Entry>,
    next_id: u64,
}

impl PluginManager {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `plugin` under `name` at the end of the dispatch order.
    ///
    /// A plugin already registered under `name` is replaced and returned.
    pub fn add(&mut self, name: impl Into<Cow<'static, str>>, plugin: Plugin) -> Option<Plugin> {
        let name = name.into();
        let replaced = self.take_entry(&name);
        let index = self.entries.len();
        self.insert(index, name, usize::MAX, plugin);
        replaced
    }

    /// Registers `plugin` under `name` at `index` in the dispatch order.
    ///
    /// `index` is clamped to the number of plugins after any replaced entry
    /// has been removed.
    pub fn add_at(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        plugin: Plugin,
        index: usize,
    ) -> Option<Plugin> {
        let name = name.into();
        let replaced = self.take_entry(&name);
        let index = index.min(self.entries.len());
        self.insert(index, name, usize::MAX, plugin);
        replaced
    }

    /// Registers a built-in plugin under its own name at its canonical slot.
    pub(crate) fn add_builtin(&mut self, plugin: Plugin) -> Option<Plugin> {
        let Some(name) = plugin.builtin_name() else {
            return self.add("custom", plugin);
        };
        let rank = plugin.builtin_rank().unwrap_or(usize::MAX);
        let replaced = self.take_entry(name);
        let index = self
            .entries
            .iter()
            .position(|entry| entry.rank > rank)
            .unwrap_or(self.entries.len());
        self.insert(index, Cow::Borrowed(name), rank, plugin);
        replaced
    }

    fn insert(&mut self, index: usize, name: Cow<'static, str>, rank: usize, plugin: Plugin) {
        let id = self.next_id;
        self.next_id += 1;
        debug!(plugin = %name, index, "plugin added");
        self.entries.insert(
            index,
            Entry {
                id,
                name,
                rank,
                paused: false,
                plugin: Some(plugin),
            },
        );
    }

    fn take_entry(&mut self, name: &str) -> Option<Plugin> {
        let index = self.entries.iter().position(|entry| entry.name == name)?;
        self.entries.remove(index).plugin
    }

    /// Removes the plugin registered under `name` and returns it.
    ///
    /// Prefer [`Viewport::remove_plugin`], which also emits the removal event.
    pub fn remove(&mut self, name: &str) -> Option<Plugin> {
        self.remove_entry(name).flatten()
    }

    /// Removes the entry for `name`. The outer option says whether the entry
    /// existed; the inner one is empty if the plugin was detached for dispatch.
    pub(crate) fn remove_entry(&mut self, name: &str) -> Option<Option<Plugin>> {
        let index = self.entries.iter().position(|entry| entry.name == name)?;
        debug!(plugin = name, "plugin removed");
        Some(self.entries.remove(index).plugin)
    }

    /// Removes every plugin.
    pub fn remove_all(&mut self) {
        debug!(count = self.entries.len(), "all plugins removed");
        self.entries.clear();
    }

    /// The plugin registered under `name`, paused or not.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Plugin> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .and_then(|entry| entry.plugin.as_ref())
    }

    /// The plugin registered under `name`, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Plugin> {
        self.entries
            .iter_mut()
            .find(|entry| entry.name == name)
            .and_then(|entry| entry.plugin.as_mut())
    }

    /// The plugin registered under `name` unless it is paused.
    #[must_use]
    pub fn get_active(&self, name: &str) -> Option<&Plugin> {
        self.entries
            .iter()
            .find(|entry| entry.name == name && !entry.paused)
            .and_then(|entry| entry.plugin.as_ref())
    }

    /// The plugin registered under `name`, mutably, unless it is paused.
    pub fn get_active_mut(&mut self, name: &str) -> Option<&mut Plugin> {
        self.entries
            .iter_mut()
            .find(|entry| entry.name == name && !entry.paused)
            .and_then(|entry| entry.plugin.as_mut())
    }

    /// Pauses the plugin under `name`: it keeps its state but receives no
    /// input or updates. Returns whether the plugin exists.
    pub fn pause(&mut self, name: &str) -> bool {
        self.set_paused(name, true)
    }

    /// Resumes the plugin under `name`. Returns whether the plugin exists.
    pub fn resume(&mut self, name: &str) -> bool {
        self.set_paused(name, false)
    }

    fn set_paused(&mut self, name: &str, paused: bool) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.name == name) else {
            return false;
        };
        if entry.paused != paused {
            entry.paused = paused;
            debug!(plugin = name, paused, "plugin pause toggled");
            if let Some(plugin) = entry.plugin.as_mut() {
                let plugin = plugin.as_dyn_mut();
                if paused {
                    plugin.pause();
                } else {
                    plugin.resume();
                }
            }
        }
        true
    }

    /// Whether the plugin under `name` is paused.
    #[must_use]
    pub fn is_paused(&self, name: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.name == name && entry.paused)
    }

    /// Registered names in dispatch order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.name.as_ref())
    }

    /// Number of registered plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no plugins are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The unpaused drag plugin.
    #[must_use]
    pub fn drag(&self) -> Option<&Drag> {
        self.get_active("drag").and_then(Plugin::as_drag)
    }

    /// The unpaused pinch plugin.
    #[must_use]
    pub fn pinch(&self) -> Option<&Pinch> {
        self.get_active("pinch").and_then(Plugin::as_pinch)
    }

    /// The unpaused wheel plugin.
    #[must_use]
    pub fn wheel(&self) -> Option<&Wheel> {
        self.get_active("wheel").and_then(Plugin::as_wheel)
    }

    /// The unpaused decelerate plugin.
    #[must_use]
    pub fn decelerate(&self) -> Option<&Decelerate> {
        self.get_active("decelerate").and_then(Plugin::as_decelerate)
    }

    /// The unpaused decelerate plugin, mutably.
    pub fn decelerate_mut(&mut self) -> Option<&mut Decelerate> {
        self.get_active_mut("decelerate")
            .and_then(Plugin::as_decelerate_mut)
    }

    /// The unpaused bounce plugin.
    #[must_use]
    pub fn bounce(&self) -> Option<&Bounce> {
        self.get_active("bounce").and_then(Plugin::as_bounce)
    }

    /// The unpaused clamp-zoom plugin.
    #[must_use]
    pub fn clamp_zoom(&self) -> Option<&ClampZoom> {
        self.get_active("clamp-zoom").and_then(Plugin::as_clamp_zoom)
    }

    fn detach(&mut self, id: u64, include_paused: bool) -> Option<Plugin> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id && (include_paused || !entry.paused))
            .and_then(|entry| entry.plugin.take())
    }

    fn reattach(&mut self, id: u64, plugin: Plugin) {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id && entry.plugin.is_none())
        {
            Some(entry) => entry.plugin = Some(plugin),
            None => trace!(id, "dropping plugin removed during dispatch"),
        }
    }

    fn ids(&self, include_paused: bool) -> SmallVec<[u64; 16]> {
        self.entries
            .iter()
            .filter(|entry| include_paused || !entry.paused)
            .map(|entry| entry.id)
            .collect()
    }
}

/// Runs `f` on every plugin in dispatch order, handing each the viewport.
///
/// Paused plugins are skipped unless `include_paused`. Returns whether any
/// call returned `true`; every plugin runs regardless.
pub(crate) fn dispatch(
    viewport: &mut Viewport,
    include_paused: bool,
    mut f: impl FnMut(&mut dyn ViewportPlugin, &mut Viewport) -> bool,
) -> bool {
    let ids = viewport.plugins.ids(include_paused);
    let mut claimed = false;
    for id in ids {
        let Some(mut plugin) = viewport.plugins.detach(id, include_paused) else {
            continue;
        };
        claimed |= f(plugin.as_dyn_mut(), viewport);
        viewport.plugins.reattach(id, plugin);
    }
    claimed
}
