//! Color label decoding.
//!
//! A [`Palette`] maps exact RGB colors to garment-part labels. Decoding is an
//! exact hash lookup with a bounded nearest-neighbour fallback; colors too far
//! from every entry decode to label `0` rather than failing, so a label matrix
//! can always be produced.
//!
//! The standard palette is the 27-color grid in [`BASE_PALETTE`] with
//! [`LEGACY_OVERRIDES`] applied on top. Overrides that hit an existing color
//! replace its label and are logged.

mod defaults;
mod table;

pub use defaults::{
    label_for, label_for_with_tolerance, BASE_PALETTE, DEFAULT_TOLERANCE_SQ, LEGACY_OVERRIDES,
};
pub use table::{Palette, PaletteCollision, PaletteEntry, PaletteOverride};
