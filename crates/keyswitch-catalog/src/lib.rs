//! Keyboard keyswitch library catalog.
//!
//! The catalog is a pure expansion of static tables: every device archetype
//! (plain switch, LED variants, diode) is combined with the switch types it
//! supports, every keycap size, and, for sizes with stabilizers, a mirrored
//! orientation. The result is a [`Document`] ready for a template renderer,
//! plus [`PlacementScripts`] that place every generated package on a
//! schematic and a board.
//!
//! Nothing here performs I/O, and two runs always produce identical output.

pub mod document;
pub mod error;
pub mod expand;
pub mod geometry;
pub mod placement;
pub mod tables;

pub use document::{Connect, DeviceSet, Document, Footprint, Mirror, Package, Symbol};
pub use error::CatalogError;
pub use expand::{Variant, expand};
pub use placement::{Placement, PlacementScripts};
pub use tables::{DeviceArchetype, LedVariant, SwitchSize, SwitchType};

/// The expanded library together with its placement scripts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub document: Document,
    pub scripts: PlacementScripts,
}

impl Catalog {
    pub fn build() -> Result<Self, CatalogError> {
        let document = expand()?;
        let scripts = PlacementScripts::new(&document.packages);
        Ok(Self { document, scripts })
    }
}
