//! Drawing primitives shared by packages and symbols.
//!
//! Every coordinate is an exact [`Decimal`] so that rendered values match the
//! authored constants digit for digit. Decimals serialize as strings, which is
//! what the library template interpolates.

use rust_decimal::Decimal;
use serde::Serialize;

/// A straight line segment on a drawing layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wire {
    #[serde(with = "rust_decimal::serde::str")]
    pub x1: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub y1: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub x2: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub y2: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub width: Decimal,
    pub layer: u8,
}

/// A non-plated mounting hole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hole {
    #[serde(with = "rust_decimal::serde::str")]
    pub x: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub y: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub diameter: Decimal,
}

/// A plated through-hole pad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pad {
    pub name: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub x: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub y: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub drill: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub diameter: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<&'static str>,
}

/// A surface-mount pad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Smd {
    pub name: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub x: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub y: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub dx: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub dy: Decimal,
    pub layer: u8,
}

/// A text item. `value` is emitted verbatim, so markup must already be escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    pub value: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub x: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub y: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub size: Decimal,
    pub layer: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rot: Option<&'static str>,
}

/// A schematic symbol pin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pin {
    pub name: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub x: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub y: Decimal,
    pub visible: &'static str,
    pub length: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rot: Option<&'static str>,
}

pub(crate) const fn wire(
    x1: Decimal,
    y1: Decimal,
    x2: Decimal,
    y2: Decimal,
    width: Decimal,
    layer: u8,
) -> Wire {
    Wire {
        x1,
        y1,
        x2,
        y2,
        width,
        layer,
    }
}

pub(crate) const fn hole(x: Decimal, y: Decimal, diameter: Decimal) -> Hole {
    Hole { x, y, diameter }
}

pub(crate) const fn pad(
    name: &'static str,
    x: Decimal,
    y: Decimal,
    drill: Decimal,
    diameter: Decimal,
) -> Pad {
    Pad {
        name,
        x,
        y,
        drill,
        diameter,
        shape: None,
    }
}

pub(crate) const fn square_pad(
    name: &'static str,
    x: Decimal,
    y: Decimal,
    drill: Decimal,
    diameter: Decimal,
) -> Pad {
    Pad {
        shape: Some("square"),
        ..pad(name, x, y, drill, diameter)
    }
}

pub(crate) const fn smd(
    name: &'static str,
    x: Decimal,
    y: Decimal,
    dx: Decimal,
    dy: Decimal,
    layer: u8,
) -> Smd {
    Smd {
        name,
        x,
        y,
        dx,
        dy,
        layer,
    }
}

pub(crate) const fn pin(
    name: &'static str,
    x: Decimal,
    y: Decimal,
    rot: Option<&'static str>,
) -> Pin {
    Pin {
        name,
        x,
        y,
        visible: "off",
        length: "short",
        rot,
    }
}
