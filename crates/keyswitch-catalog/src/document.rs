//! In-memory library document handed to the renderer.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::geometry::{Hole, Label, Pad, Pin, Smd, Wire};
use crate::tables::{DeviceArchetype, Fragment, PACKAGE_DESCRIPTION, SwitchSize, SwitchType};

/// Gate name of the single gate every keyswitch symbol exposes.
pub const GATE: &str = "G$1";

/// Marker appended to names of mirrored footprints and packages.
pub const FLIPPED_SUFFIX: &str = "-FLIPPED";

/// One symbol pin wired to one or more package pads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Connect {
    pub gate: &'static str,
    pub pin: &'static str,
    /// Space-separated pad names.
    pub pad: &'static str,
}

impl Connect {
    pub const fn new(pin: &'static str, pad: &'static str) -> Self {
        Self {
            gate: GATE,
            pin,
            pad,
        }
    }

    pub fn pads(&self) -> std::str::Split<'static, char> {
        self.pad.split(' ')
    }
}

/// Orientation of the stabilizer geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mirror {
    Normal,
    Flipped,
}

impl Mirror {
    pub fn sign(self) -> Decimal {
        match self {
            Mirror::Normal => Decimal::ONE,
            Mirror::Flipped => Decimal::NEGATIVE_ONE,
        }
    }

    pub fn is_flipped(self) -> bool {
        self == Mirror::Flipped
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub name: &'static str,
    pub description: &'static str,
    pub wires: &'static [Wire],
    pub labels: &'static [Label],
    pub pins: &'static [Pin],
}

/// A device variant: a package plus the pin-to-pad mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footprint {
    /// Suffix appended to the device set name, starts with `-`.
    pub name: String,
    pub package: String,
    pub connects: Vec<Connect>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    pub name: String,
    pub description: &'static str,
    pub wires: Vec<Wire>,
    pub holes: Vec<Hole>,
    pub pads: Vec<Pad>,
    pub smds: Vec<Smd>,
    pub labels: Vec<Label>,
    #[serde(skip)]
    pub archetype: DeviceArchetype,
    #[serde(skip)]
    pub switch_type: SwitchType,
    #[serde(skip)]
    pub size: &'static SwitchSize,
    #[serde(skip)]
    pub mirror: Mirror,
}

impl Package {
    pub(crate) fn new(
        name: String,
        archetype: DeviceArchetype,
        switch_type: SwitchType,
        size: &'static SwitchSize,
        mirror: Mirror,
    ) -> Self {
        Self {
            name,
            description: PACKAGE_DESCRIPTION,
            wires: Vec::new(),
            holes: Vec::new(),
            pads: Vec::new(),
            smds: Vec::new(),
            labels: Vec::new(),
            archetype,
            switch_type,
            size,
            mirror,
        }
    }

    pub(crate) fn extend(&mut self, fragment: &Fragment) {
        self.wires.extend_from_slice(fragment.wires);
        self.holes.extend_from_slice(fragment.holes);
        self.pads.extend_from_slice(fragment.pads);
        self.smds.extend_from_slice(fragment.smds);
        self.labels.extend_from_slice(fragment.labels);
    }

    /// Names of all through-hole and surface-mount pads.
    pub fn pad_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pads
            .iter()
            .map(|pad| pad.name)
            .chain(self.smds.iter().map(|smd| smd.name))
    }

    pub fn has_pad(&self, name: &str) -> bool {
        self.pad_names().any(|pad| pad == name)
    }

    /// Symbol of the device set this package belongs to.
    pub fn symbol(&self) -> &'static Symbol {
        self.archetype.symbol()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceSet {
    pub name: &'static str,
    pub symbol: &'static str,
    pub description: &'static str,
    pub devices: Vec<Footprint>,
}

impl DeviceSet {
    pub fn new(symbol: &'static Symbol) -> Self {
        Self {
            name: symbol.name,
            symbol: symbol.name,
            description: symbol.description,
            devices: Vec::new(),
        }
    }
}

/// The complete library: what the template renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub description: &'static str,
    pub packages: Vec<Package>,
    pub symbols: Vec<&'static Symbol>,
    pub devicesets: Vec<DeviceSet>,
}

impl Document {
    pub fn package(&self, name: &str) -> Option<&Package> {
        self.packages.iter().find(|package| package.name == name)
    }

    pub fn footprints(&self) -> impl Iterator<Item = &Footprint> {
        self.devicesets.iter().flat_map(|set| set.devices.iter())
    }
}
