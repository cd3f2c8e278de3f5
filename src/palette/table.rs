use crate::types::{Label, Rgb, BACKGROUND};
use log::{debug, warn};
use serde::Serialize;
use std::collections::HashMap;

/// One registered color → label pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub color: Rgb,
    pub label: Label,
}

/// A registration that hit a key which was already present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteCollision {
    pub color: Rgb,
    pub previous: Label,
    pub replacement: Label,
}

impl PaletteCollision {
    /// True when two different garment parts now share one color.
    pub fn changes_label(&self) -> bool {
        self.previous != self.replacement
    }
}

/// Color remapping applied on top of a base palette.
#[derive(Clone, Copy, Debug)]
pub struct PaletteOverride {
    pub color: Rgb,
    pub label: Label,
    /// Where the color comes from, echoed in collision logs.
    pub note: &'static str,
}

/// Ordered color → label table.
///
/// Entries keep their first insertion position. Registering an existing color
/// replaces its label in place, so the last registration wins while the
/// nearest-neighbour scan order stays stable.
#[derive(Clone, Debug, Default)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    index: HashMap<Rgb, usize>,
    // Registration sequence number at which each entry got its current label.
    assigned: Vec<usize>,
    registrations: usize,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(color, label)` pairs registered in order.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Rgb, Label)>,
    {
        let mut palette = Self::new();
        for (color, label) in entries {
            palette.register(color, label);
        }
        palette
    }

    /// Register `color → label`. Returns the replaced entry if the color was
    /// already present.
    pub fn register(&mut self, color: Rgb, label: Label) -> Option<PaletteCollision> {
        let seq = self.registrations;
        self.registrations += 1;
        match self.index.get(&color) {
            Some(&slot) => {
                let previous = self.entries[slot].label;
                self.entries[slot].label = label;
                if previous != label {
                    self.assigned[slot] = seq;
                }
                Some(PaletteCollision {
                    color,
                    previous,
                    replacement: label,
                })
            }
            None => {
                self.index.insert(color, self.entries.len());
                self.entries.push(PaletteEntry { color, label });
                self.assigned.push(seq);
                None
            }
        }
    }

    /// Apply an override list, logging and returning every collision.
    pub fn apply_overrides(&mut self, overrides: &[PaletteOverride]) -> Vec<PaletteCollision> {
        let mut collisions = Vec::new();
        for o in overrides {
            let Some(collision) = self.register(o.color, o.label) else {
                continue;
            };
            if collision.changes_label() {
                warn!(
                    "palette override {:?} ({}) remaps label {} -> {}",
                    o.color, o.note, collision.previous, collision.replacement
                );
            } else {
                debug!(
                    "palette override {:?} ({}) re-registers label {}",
                    o.color, o.note, collision.replacement
                );
            }
            collisions.push(collision);
        }
        collisions
    }

    /// Exact lookup without fallback.
    #[inline]
    pub fn get(&self, color: Rgb) -> Option<Label> {
        self.index.get(&color).map(|&slot| self.entries[slot].label)
    }

    /// Decode a color: exact hit first, otherwise the nearest entry if its
    /// squared distance is within `tolerance_sq`, otherwise [`BACKGROUND`].
    ///
    /// Ties in the nearest-neighbour scan go to the earliest entry.
    pub fn label_for(&self, color: Rgb, tolerance_sq: u32) -> Label {
        if let Some(label) = self.get(color) {
            return label;
        }
        let mut best: Option<(u32, Label)> = None;
        for entry in &self.entries {
            let d = entry.color.distance_sq(color);
            if best.map_or(true, |(best_d, _)| d < best_d) {
                best = Some((d, entry.label));
            }
        }
        match best {
            Some((d, label)) if d <= tolerance_sq => label,
            _ => BACKGROUND,
        }
    }

    /// Earliest registered color that currently decodes to `label`.
    ///
    /// A color remapped by a later registration counts from the time of the
    /// remap, so canonical colors win over legacy aliases.
    pub fn color_for(&self, label: Label) -> Option<Rgb> {
        self.entries
            .iter()
            .zip(&self.assigned)
            .filter(|(e, _)| e.label == label)
            .min_by_key(|(_, &seq)| seq)
            .map(|(e, _)| e.color)
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
