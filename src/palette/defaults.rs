use super::table::{Palette, PaletteOverride};
use crate::types::{Label, Rgb};
use std::sync::OnceLock;

/// Squared RGB distance accepted by the nearest-neighbour fallback (≈ 31.6).
pub const DEFAULT_TOLERANCE_SQ: u32 = 1000;

/// Canonical garment-part colors: the 3×3×3 grid over {0, 128, 255}, red
/// varying fastest, labelled in order.
pub const BASE_PALETTE: [(Rgb, Label); 27] = [
    (Rgb(0, 0, 0), 0),
    (Rgb(128, 0, 0), 1),
    (Rgb(255, 0, 0), 2),
    (Rgb(0, 128, 0), 3),
    (Rgb(128, 128, 0), 4),
    (Rgb(255, 128, 0), 5),
    (Rgb(0, 255, 0), 6),
    (Rgb(128, 255, 0), 7),
    (Rgb(255, 255, 0), 8),
    (Rgb(0, 0, 128), 9),
    (Rgb(128, 0, 128), 10),
    (Rgb(255, 0, 128), 11),
    (Rgb(0, 128, 128), 12),
    (Rgb(128, 128, 128), 13),
    (Rgb(255, 128, 128), 14),
    (Rgb(0, 255, 128), 15),
    (Rgb(128, 255, 128), 16),
    (Rgb(255, 255, 128), 17),
    (Rgb(0, 0, 255), 18),
    (Rgb(128, 0, 255), 19),
    (Rgb(255, 0, 255), 20),
    (Rgb(0, 128, 255), 21),
    (Rgb(128, 128, 255), 22),
    (Rgb(255, 128, 255), 23),
    (Rgb(0, 255, 255), 24),
    (Rgb(128, 255, 255), 25),
    (Rgb(255, 255, 255), 26),
];

const fn legacy(color: Rgb, label: Label, note: &'static str) -> PaletteOverride {
    PaletteOverride { color, label, note }
}

/// Colors emitted by older annotation exports, folded onto canonical labels.
///
/// Three of these hit base colors: pure green becomes torso label 12 (was 6),
/// pure yellow becomes label 5 (was 8) and `(0,255,128)` re-registers 15.
pub const LEGACY_OVERRIDES: [PaletteOverride; 14] = [
    legacy(Rgb(34, 34, 34), 0, "dark-gray background"),
    legacy(Rgb(0, 255, 0), 12, "legacy green torso"),
    legacy(Rgb(255, 255, 0), 5, "legacy yellow sleeve"),
    legacy(Rgb(0, 255, 128), 15, "legacy mint"),
    legacy(Rgb(85, 85, 255), 13, "legacy periwinkle"),
    legacy(Rgb(255, 170, 0), 5, "legacy light orange sleeve"),
    legacy(Rgb(255, 85, 0), 5, "legacy dark orange sleeve"),
    legacy(Rgb(170, 85, 0), 10, "legacy brown"),
    legacy(Rgb(0, 170, 85), 12, "legacy teal torso"),
    legacy(Rgb(0, 85, 170), 14, "legacy navy"),
    legacy(Rgb(170, 0, 170), 13, "legacy purple"),
    legacy(Rgb(85, 170, 255), 15, "legacy sky blue"),
    legacy(Rgb(170, 255, 85), 16, "legacy lime"),
    legacy(Rgb(204, 0, 102), 9, "legacy magenta"),
];

impl Palette {
    /// Base palette followed by [`LEGACY_OVERRIDES`].
    pub fn build_standard() -> Self {
        let mut palette = Palette::from_entries(BASE_PALETTE);
        palette.apply_overrides(&LEGACY_OVERRIDES);
        palette
    }

    /// Shared standard palette, built on first use.
    pub fn standard() -> &'static Palette {
        static STANDARD: OnceLock<Palette> = OnceLock::new();
        STANDARD.get_or_init(Palette::build_standard)
    }
}

/// Decode one color against the standard palette with the default tolerance.
pub fn label_for(color: impl Into<Rgb>) -> Label {
    Palette::standard().label_for(color.into(), DEFAULT_TOLERANCE_SQ)
}

/// Decode one color against the standard palette with an explicit tolerance.
pub fn label_for_with_tolerance(color: impl Into<Rgb>, tolerance_sq: u32) -> Label {
    Palette::standard().label_for(color.into(), tolerance_sq)
}
