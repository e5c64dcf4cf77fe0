//! Expansion of the tables into footprints, packages and device sets.
//!
//! Archetypes are walked in identifier order, switch types in the order each
//! archetype lists them, and sizes in identifier order. Package insertion
//! order is preserved, since placement scripts group rows by it.

use indexmap::IndexMap;
use indexmap::map::Entry;
use log::debug;

use crate::document::{Connect, DeviceSet, Document, FLIPPED_SUFFIX, Footprint, Mirror, Package};
use crate::error::CatalogError;
use crate::tables::{DeviceArchetype, LIBRARY_DESCRIPTION, SwitchSize, SwitchType, name_labels};

/// One point of the catalog: archetype × switch type × size × orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    pub archetype: DeviceArchetype,
    pub switch_type: SwitchType,
    pub size: &'static SwitchSize,
    pub mirror: Mirror,
}

impl Variant {
    pub fn new(
        archetype: DeviceArchetype,
        switch_type: SwitchType,
        size: &'static SwitchSize,
        mirror: Mirror,
    ) -> Self {
        Self {
            archetype,
            switch_type,
            size,
            mirror,
        }
    }

    fn suffix(&self) -> &'static str {
        self.archetype.addon().map_or("", |addon| addon.suffix())
    }

    fn flipped_suffix(&self) -> &'static str {
        if self.mirror.is_flipped() {
            FLIPPED_SUFFIX
        } else {
            ""
        }
    }

    /// Device name, e.g. `-MX-2U-LED-FLIPPED`.
    pub fn footprint_name(&self) -> String {
        format!(
            "-{}-{}U{}{}",
            self.switch_type,
            self.size.id,
            self.suffix(),
            self.flipped_suffix()
        )
    }

    /// Package name: the device name without its leading dash. A negative size
    /// yields `--`, which is spelled out as `-REVERSED-`.
    pub fn package_name(&self) -> String {
        let base = format!("{}-{}U{}", self.switch_type, self.size.id, self.suffix());
        format!(
            "{}{}",
            base.replace("--", "-REVERSED-"),
            self.flipped_suffix()
        )
    }

    /// Addon connections first, then the switch contacts.
    pub fn connects(&self) -> Vec<Connect> {
        let addon = self.archetype.addon().map(|addon| addon.connects());
        let switch = self.switch_type.connects();

        let mut connects = Vec::with_capacity(addon.map_or(0, <[_]>::len) + switch.len());
        connects.extend_from_slice(addon.unwrap_or_default());
        connects.extend_from_slice(switch);
        connects
    }

    pub fn footprint(&self) -> Footprint {
        Footprint {
            name: self.footprint_name(),
            package: self.package_name(),
            connects: self.connects(),
        }
    }

    /// Switch body, name labels, addon geometry, then stabilizer holes.
    pub fn package(&self) -> Package {
        let addon = self.archetype.addon();
        let mut package = Package::new(
            self.package_name(),
            self.archetype,
            self.switch_type,
            self.size,
            self.mirror,
        );

        package.extend(self.switch_type.fragment());
        package.labels.extend(name_labels(addon));
        for fragment in addon.map(|addon| addon.fragments()).unwrap_or_default() {
            package.extend(fragment);
        }
        if let Some(stabilizer) = &self.size.stabilizer {
            package.holes.extend(stabilizer.holes(self.mirror));
        }

        package
    }
}

/// Every variant in catalog order.
pub fn variants() -> impl Iterator<Item = Variant> {
    let mut variants = Vec::new();
    for archetype in DeviceArchetype::sorted() {
        for &switch_type in archetype.switch_types() {
            for size in SwitchSize::sorted() {
                for &mirror in size.mirrors() {
                    variants.push(Variant::new(archetype, switch_type, size, mirror));
                }
            }
        }
    }
    variants.into_iter()
}

/// Expand the tables into the full library document.
pub fn expand() -> Result<Document, CatalogError> {
    let mut packages: IndexMap<String, Package> = IndexMap::new();
    let mut symbols = Vec::new();
    let mut devicesets: Vec<DeviceSet> = Vec::new();

    for variant in variants() {
        let symbol = variant.archetype.symbol();
        if devicesets.last().map(|set| set.name) != Some(symbol.name) {
            debug!("Expanding {}", symbol.name);
            symbols.push(symbol);
            devicesets.push(DeviceSet::new(symbol));
        }

        let footprint = variant.footprint();
        let package = variant.package();
        check_pads(&footprint, &package)?;
        insert_package(&mut packages, package)?;

        if let Some(set) = devicesets.last_mut() {
            set.devices.push(footprint);
        }
    }

    debug!(
        "Expanded {} packages into {} device sets",
        packages.len(),
        devicesets.len()
    );

    Ok(Document {
        description: LIBRARY_DESCRIPTION,
        packages: packages.into_values().collect(),
        symbols,
        devicesets,
    })
}

/// Record a package by name. Regenerating an identical package is a no-op and
/// keeps its original position; a different package under the same name is
/// rejected.
fn insert_package(
    packages: &mut IndexMap<String, Package>,
    package: Package,
) -> Result<(), CatalogError> {
    match packages.entry(package.name.clone()) {
        Entry::Occupied(existing) if *existing.get() != package => {
            Err(CatalogError::PackageConflict { name: package.name })
        }
        Entry::Occupied(_) => Ok(()),
        Entry::Vacant(slot) => {
            slot.insert(package);
            Ok(())
        }
    }
}

fn check_pads(footprint: &Footprint, package: &Package) -> Result<(), CatalogError> {
    for connect in &footprint.connects {
        if let Some(pad) = connect.pads().find(|pad| !package.has_pad(pad)) {
            return Err(CatalogError::UnknownPad {
                footprint: footprint.name.clone(),
                package: package.name.clone(),
                pad: pad.to_string(),
            });
        }
    }
    Ok(())
}
