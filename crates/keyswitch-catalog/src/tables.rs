//! Closed-world tables the catalog is expanded from.
//!
//! Everything here is `static` data: key sizes, per-switch geometry, device
//! archetypes and their schematic symbols. Lookups go through enum methods,
//! so a missing key is not representable.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::document::{Connect, Mirror, Symbol};
use crate::geometry::{Hole, Label, Pad, Pin, Smd, Wire, hole, pad, pin, smd, square_pad, wire};

pub const LIBRARY_DESCRIPTION: &str = "Keyboard Keyswitch PCB footprints for MX and Alps switches.";
pub const PACKAGE_DESCRIPTION: &str = "Keyboard switch package!";

/// Text emitted for a part's name placeholder (already entity-escaped).
pub const NAME_PLACEHOLDER: &str = "&gt;NAME";

const OUTLINE_WIDTH: Decimal = dec!(0.127);
const SYMBOL_WIDTH: Decimal = dec!(0.254);
const TEXT_SIZE: Decimal = dec!(1.27);

const LAYER_TOP: u8 = 1;
const LAYER_BOTTOM: u8 = 16;
const LAYER_TPLACE: u8 = 21;
const LAYER_BPLACE: u8 = 22;
const LAYER_MEASURES: u8 = 47;
const LAYER_SYMBOLS: u8 = 94;
const LAYER_NAMES: u8 = 95;

/// Switch outline on the measures layer.
const fn outline(x1: Decimal, y1: Decimal, x2: Decimal, y2: Decimal) -> Wire {
    wire(x1, y1, x2, y2, OUTLINE_WIDTH, LAYER_MEASURES)
}

/// Bottom silkscreen outline.
const fn bottom_outline(x1: Decimal, y1: Decimal, x2: Decimal, y2: Decimal) -> Wire {
    wire(x1, y1, x2, y2, OUTLINE_WIDTH, LAYER_BPLACE)
}

const fn symbol_outline(x1: Decimal, y1: Decimal, x2: Decimal, y2: Decimal) -> Wire {
    wire(x1, y1, x2, y2, SYMBOL_WIDTH, LAYER_SYMBOLS)
}

/// SMD LED pad, 2×1.3 on the top copper.
const fn led_smd(name: &'static str, x: Decimal, y: Decimal) -> Smd {
    smd(name, x, y, dec!(2), dec!(1.3), LAYER_TOP)
}

/// Reverse-mount RGB LED pad, 1×0.75 on the bottom copper.
const fn rgb_smd(name: &'static str, x: Decimal, y: Decimal) -> Smd {
    smd(name, x, y, dec!(1), dec!(0.75), LAYER_BOTTOM)
}

/// Stabilizer mounting hole offsets, in millimeters from the switch center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stabilizer {
    pub left: Decimal,
    pub right: Decimal,
    pub top: Decimal,
    pub bottom: Decimal,
}

impl Stabilizer {
    const fn new(left: Decimal, right: Decimal) -> Self {
        Self {
            left,
            right,
            top: dec!(7),
            bottom: dec!(-8.24),
        }
    }

    /// The four stabilizer holes; Y offsets are multiplied by the mirror sign.
    pub fn holes(&self, mirror: Mirror) -> [Hole; 4] {
        let sign = mirror.sign();
        [
            hole(self.left, self.top * sign, dec!(3.05)),
            hole(self.right, self.top * sign, dec!(3.05)),
            hole(self.left, self.bottom * sign, dec!(4)),
            hole(self.right, self.bottom * sign, dec!(4)),
        ]
    }
}

/// A keycap width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchSize {
    /// Identifier used in part names (`"6.25"` → `6.25U`).
    pub id: &'static str,
    /// Width in key units. Reversed layouts keep their sign.
    pub units: Decimal,
    pub stabilizer: Option<Stabilizer>,
}

pub static SWITCH_SIZES: &[SwitchSize] = &[
    SwitchSize {
        id: "1",
        units: dec!(1),
        stabilizer: None,
    },
    SwitchSize {
        id: "2",
        units: dec!(2),
        stabilizer: Some(Stabilizer::new(dec!(-11.9), dec!(11.9))),
    },
    SwitchSize {
        id: "4",
        units: dec!(4),
        stabilizer: Some(Stabilizer::new(dec!(-28.625), dec!(28.625))),
    },
    SwitchSize {
        id: "6",
        units: dec!(6),
        stabilizer: Some(Stabilizer::new(dec!(-57.15), dec!(38.1))),
    },
    SwitchSize {
        id: "-6",
        units: dec!(-6),
        stabilizer: Some(Stabilizer::new(dec!(-38.1), dec!(57.15))),
    },
    SwitchSize {
        id: "6.25",
        units: dec!(6.25),
        stabilizer: Some(Stabilizer::new(dec!(-50), dec!(50))),
    },
    SwitchSize {
        id: "6.5",
        units: dec!(6.5),
        stabilizer: Some(Stabilizer::new(dec!(-52.5), dec!(52.5))),
    },
    SwitchSize {
        id: "7",
        units: dec!(7),
        stabilizer: Some(Stabilizer::new(dec!(-57.15), dec!(57.15))),
    },
];

impl SwitchSize {
    pub fn get(id: &str) -> Option<&'static SwitchSize> {
        SWITCH_SIZES.iter().find(|size| size.id == id)
    }

    /// All sizes ordered by identifier string, not by width (`-6` sorts first).
    pub fn sorted() -> Vec<&'static SwitchSize> {
        let mut sizes: Vec<_> = SWITCH_SIZES.iter().collect();
        sizes.sort_by_key(|size| size.id);
        sizes
    }

    /// Orientations generated for this size. Without stabilizers a mirrored
    /// copy would be identical, so only the normal one is produced.
    pub fn mirrors(&self) -> &'static [Mirror] {
        const BOTH: &[Mirror] = &[Mirror::Normal, Mirror::Flipped];
        const NORMAL: &[Mirror] = &[Mirror::Normal];
        if self.stabilizer.is_some() {
            BOTH
        } else {
            NORMAL
        }
    }
}

/// Geometry merged into a package: switch bodies and per-variant additions.
#[derive(Debug)]
pub struct Fragment {
    pub wires: &'static [Wire],
    pub holes: &'static [Hole],
    pub pads: &'static [Pad],
    pub smds: &'static [Smd],
    pub labels: &'static [Label],
}

impl Fragment {
    const EMPTY: Fragment = Fragment {
        wires: &[],
        holes: &[],
        pads: &[],
        smds: &[],
        labels: &[],
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwitchType {
    Alps,
    AlpsMx,
    Mx,
}

const MX_HOLES: &[Hole] = &[
    hole(dec!(0), dec!(0), dec!(4)),
    hole(dec!(-5.08), dec!(0), dec!(1.7)),
    hole(dec!(5.08), dec!(0), dec!(1.7)),
];

const MX1: Pad = pad("MX1", dec!(-3.81), dec!(2.54), dec!(1.3), dec!(2.54));
const MX2: Pad = pad("MX2", dec!(2.54), dec!(5.08), dec!(1.3), dec!(2.54));
const ALPS1: Pad = pad("ALPS1", dec!(-2.5), dec!(4), dec!(1.3), dec!(2.54));
const ALPS2: Pad = pad("ALPS2", dec!(2.5), dec!(4.5), dec!(1.3), dec!(2.54));

static ALPS_FRAGMENT: Fragment = Fragment {
    wires: &[
        outline(dec!(7.75), dec!(7), dec!(7.75), dec!(-7)),
        outline(dec!(7.75), dec!(-7), dec!(-7.75), dec!(-7)),
        outline(dec!(-7.75), dec!(-7), dec!(-7.75), dec!(7)),
        outline(dec!(-7.75), dec!(7), dec!(7.75), dec!(7)),
    ],
    pads: &[ALPS1, ALPS2],
    ..Fragment::EMPTY
};

static ALPSMX_FRAGMENT: Fragment = Fragment {
    wires: &[
        outline(dec!(-7), dec!(8), dec!(7), dec!(8)),
        outline(dec!(7.75), dec!(7), dec!(7.75), dec!(-7)),
        outline(dec!(7), dec!(-8), dec!(-7), dec!(-8)),
        outline(dec!(-7.75), dec!(-7), dec!(-7.75), dec!(7)),
        outline(dec!(-7.75), dec!(7), dec!(-7), dec!(7)),
        outline(dec!(-7), dec!(7), dec!(-7), dec!(8)),
        outline(dec!(7), dec!(8), dec!(7), dec!(7)),
        outline(dec!(7), dec!(7), dec!(7.75), dec!(7)),
        outline(dec!(7.75), dec!(-7), dec!(7), dec!(-7)),
        outline(dec!(7), dec!(-7), dec!(7), dec!(-8)),
        outline(dec!(-7), dec!(-8), dec!(-7), dec!(-7)),
        outline(dec!(-7), dec!(-7), dec!(-7.75), dec!(-7)),
    ],
    holes: MX_HOLES,
    pads: &[MX1, MX2, ALPS1, ALPS2],
    ..Fragment::EMPTY
};

static MX_FRAGMENT: Fragment = Fragment {
    wires: &[
        outline(dec!(-7), dec!(7), dec!(7), dec!(7)),
        outline(dec!(7), dec!(7), dec!(7), dec!(-7)),
        outline(dec!(7), dec!(-7), dec!(-7), dec!(-7)),
        outline(dec!(-7), dec!(-7), dec!(-7), dec!(7)),
    ],
    holes: MX_HOLES,
    pads: &[MX1, MX2],
    ..Fragment::EMPTY
};

static ALPS_CONNECTS: &[Connect] = &[Connect::new("P0", "ALPS1"), Connect::new("P1", "ALPS2")];
static ALPSMX_CONNECTS: &[Connect] = &[
    Connect::new("P0", "ALPS1 MX1"),
    Connect::new("P1", "ALPS2 MX2"),
];
static MX_CONNECTS: &[Connect] = &[Connect::new("P0", "MX1"), Connect::new("P1", "MX2")];

impl SwitchType {
    pub fn name(self) -> &'static str {
        match self {
            SwitchType::Alps => "ALPS",
            SwitchType::AlpsMx => "ALPSMX",
            SwitchType::Mx => "MX",
        }
    }

    /// Switch contacts, in symbol pin order.
    pub fn connects(self) -> &'static [Connect] {
        match self {
            SwitchType::Alps => ALPS_CONNECTS,
            SwitchType::AlpsMx => ALPSMX_CONNECTS,
            SwitchType::Mx => MX_CONNECTS,
        }
    }

    pub fn fragment(self) -> &'static Fragment {
        match self {
            SwitchType::Alps => &ALPS_FRAGMENT,
            SwitchType::AlpsMx => &ALPSMX_FRAGMENT,
            SwitchType::Mx => &MX_FRAGMENT,
        }
    }
}

impl std::fmt::Display for SwitchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedVariant {
    /// Two-pin through-hole LED.
    Single,
    /// Two-pin SMD LED.
    SingleSmd,
    /// Two-pin LED, through-hole or SMD footprint.
    SingleThtSmd,
    /// Four-pin through-hole RGB LED.
    Rgb,
    /// Four-pin reverse-mount SMD RGB LED shining through the board.
    RgbSmd,
}

/// The component mounted next to the switch, if any. A diode wins over an LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Addon {
    Diode,
    Led(LedVariant),
}

const fn text(value: &'static str, x: Decimal, y: Decimal, layer: u8) -> Label {
    Label {
        value,
        x,
        y,
        size: TEXT_SIZE,
        layer,
        align: Some("center"),
        rot: None,
    }
}

const fn mirrored_text(value: &'static str, x: Decimal, y: Decimal) -> Label {
    Label {
        rot: Some("MR0"),
        ..text(value, x, y, LAYER_BPLACE)
    }
}

static DIODE_FRAGMENT: Fragment = Fragment {
    pads: &[
        pad("D+", dec!(-3.81), dec!(-5.08), dec!(1), dec!(2)),
        square_pad("D-", dec!(3.81), dec!(-5.08), dec!(1), dec!(2)),
    ],
    labels: &[
        text("+", dec!(-1.905), dec!(-5.08), LAYER_TPLACE),
        mirrored_text("+", dec!(-1.905), dec!(-5.08)),
        text("-", dec!(1.905), dec!(-5.08), LAYER_TPLACE),
        mirrored_text("-", dec!(1.905), dec!(-5.08)),
    ],
    ..Fragment::EMPTY
};

static THT_LED_FRAGMENT: Fragment = Fragment {
    pads: &[
        pad("LED+", dec!(-1.27), dec!(-5.08), dec!(1), dec!(2)),
        square_pad("LED-", dec!(1.27), dec!(-5.08), dec!(1), dec!(2)),
    ],
    labels: &[
        text("+", dec!(-3.175), dec!(-5.08), LAYER_TPLACE),
        mirrored_text("+", dec!(-3.175), dec!(-5.08)),
        text("-", dec!(3.175), dec!(-5.08), LAYER_TPLACE),
        mirrored_text("-", dec!(3.175), dec!(-5.08)),
    ],
    ..Fragment::EMPTY
};

static SMD_LED_FRAGMENT: Fragment = Fragment {
    smds: &[
        led_smd("SMDLED+", dec!(-1.3), dec!(-7.42)),
        led_smd("SMDLED-", dec!(1.3), dec!(-7.42)),
    ],
    labels: &[
        text("+", dec!(-3.175), dec!(-7.42), LAYER_TPLACE),
        text("-", dec!(3.175), dec!(-7.42), LAYER_TPLACE),
    ],
    ..Fragment::EMPTY
};

static RGB_LED_FRAGMENT: Fragment = Fragment {
    pads: &[
        pad("R-", dec!(-3.81), dec!(-5.08), dec!(1), dec!(2)),
        square_pad("LED+", dec!(-1.27), dec!(-5.08), dec!(1), dec!(2)),
        pad("G-", dec!(1.27), dec!(-5.08), dec!(1), dec!(2)),
        pad("B-", dec!(3.81), dec!(-5.08), dec!(1), dec!(2)),
    ],
    labels: &[
        text("R-", dec!(-3.955), dec!(-6.985), LAYER_TPLACE),
        mirrored_text("R-", dec!(-3.955), dec!(-6.985)),
        text("+", dec!(-1.125), dec!(-6.985), LAYER_TPLACE),
        mirrored_text("+", dec!(-1.125), dec!(-6.985)),
        text("G-", dec!(1.125), dec!(-6.985), LAYER_TPLACE),
        mirrored_text("G-", dec!(1.125), dec!(-6.985)),
        text("B-", dec!(3.955), dec!(-6.985), LAYER_TPLACE),
        mirrored_text("B-", dec!(3.955), dec!(-6.985)),
    ],
    ..Fragment::EMPTY
};

static RGB_SMD_LED_FRAGMENT: Fragment = Fragment {
    wires: &[
        bottom_outline(dec!(-1.6), dec!(-5.9), dec!(-1.6), dec!(-3.9)),
        bottom_outline(dec!(-0.8), dec!(-3.1), dec!(-1.6), dec!(-3.9)),
        bottom_outline(dec!(-0.8), dec!(-3.1), dec!(1.6), dec!(-3.1)),
        bottom_outline(dec!(1.6), dec!(-3.1), dec!(1.6), dec!(-5.9)),
        bottom_outline(dec!(1.6), dec!(-5.9), dec!(-1.6), dec!(-5.9)),
    ],
    holes: &[hole(dec!(0), dec!(-4.5), dec!(2.4))],
    smds: &[
        rgb_smd("LED+", dec!(2.1), dec!(-3.775)),
        rgb_smd("R-", dec!(-2.1), dec!(-3.775)),
        rgb_smd("G-", dec!(-2.1), dec!(-5.225)),
        rgb_smd("B-", dec!(2.1), dec!(-5.225)),
    ],
    ..Fragment::EMPTY
};

static DIODE_CONNECTS: &[Connect] = &[Connect::new("D+", "D+"), Connect::new("D-", "D-")];
static LED_CONNECTS: &[Connect] = &[Connect::new("LED+", "LED+"), Connect::new("LED-", "LED-")];
static SMD_LED_CONNECTS: &[Connect] = &[
    Connect::new("LED+", "SMDLED+"),
    Connect::new("LED-", "SMDLED-"),
];
static THT_SMD_LED_CONNECTS: &[Connect] = &[
    Connect::new("LED+", "LED+ SMDLED+"),
    Connect::new("LED-", "LED- SMDLED-"),
];
static RGB_CONNECTS: &[Connect] = &[
    Connect::new("B-", "B-"),
    Connect::new("G-", "G-"),
    Connect::new("LED+", "LED+"),
    Connect::new("R-", "R-"),
];

impl Addon {
    /// Suffix appended to footprint and package names.
    pub fn suffix(self) -> &'static str {
        match self {
            Addon::Diode => "-DIODE",
            Addon::Led(LedVariant::Rgb) => "-RGB",
            Addon::Led(LedVariant::Single) => "-LED",
            Addon::Led(LedVariant::SingleSmd) => "-SMDLED",
            Addon::Led(LedVariant::SingleThtSmd) => "-THTSMDLED",
            Addon::Led(LedVariant::RgbSmd) => "-SMDRGB",
        }
    }

    /// Connections listed ahead of the switch contacts, in final order.
    pub fn connects(self) -> &'static [Connect] {
        match self {
            Addon::Diode => DIODE_CONNECTS,
            Addon::Led(LedVariant::Single) => LED_CONNECTS,
            Addon::Led(LedVariant::SingleSmd) => SMD_LED_CONNECTS,
            Addon::Led(LedVariant::SingleThtSmd) => THT_SMD_LED_CONNECTS,
            Addon::Led(LedVariant::Rgb | LedVariant::RgbSmd) => RGB_CONNECTS,
        }
    }

    /// Geometry added to the package, applied in order.
    pub fn fragments(self) -> &'static [&'static Fragment] {
        static DIODE: [&Fragment; 1] = [&DIODE_FRAGMENT];
        static THT_LED: [&Fragment; 1] = [&THT_LED_FRAGMENT];
        static SMD_LED: [&Fragment; 1] = [&SMD_LED_FRAGMENT];
        static THT_SMD_LED: [&Fragment; 2] = [&THT_LED_FRAGMENT, &SMD_LED_FRAGMENT];
        static RGB_LED: [&Fragment; 1] = [&RGB_LED_FRAGMENT];
        static RGB_SMD_LED: [&Fragment; 1] = [&RGB_SMD_LED_FRAGMENT];

        match self {
            Addon::Diode => &DIODE,
            Addon::Led(LedVariant::Single) => &THT_LED,
            Addon::Led(LedVariant::SingleSmd) => &SMD_LED,
            Addon::Led(LedVariant::SingleThtSmd) => &THT_SMD_LED,
            Addon::Led(LedVariant::Rgb) => &RGB_LED,
            Addon::Led(LedVariant::RgbSmd) => &RGB_SMD_LED,
        }
    }
}

/// Name labels placed on both silkscreen sides. The reverse-mount RGB LED
/// sits where the label usually goes, so it moves further down.
pub fn name_labels(addon: Option<Addon>) -> [Label; 2] {
    let y = match addon {
        Some(Addon::Led(LedVariant::RgbSmd)) => dec!(-7),
        _ => dec!(-3.175),
    };
    [
        text(NAME_PLACEHOLDER, dec!(0), y, LAYER_TPLACE),
        mirrored_text(NAME_PLACEHOLDER, dec!(0), y),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceArchetype {
    Diode,
    Led,
    Plain,
    RgbLed,
    RgbSmdLed,
    SmdLed,
    ThtSmdLed,
}

const SYMBOL_OUTLINE: &[Wire] = &[
    symbol_outline(dec!(-5), dec!(5), dec!(5), dec!(5)),
    symbol_outline(dec!(5), dec!(5), dec!(5), dec!(-5)),
    symbol_outline(dec!(5), dec!(-5), dec!(-5), dec!(-5)),
    symbol_outline(dec!(-5), dec!(-5), dec!(-5), dec!(5)),
];

const SYMBOL_LABELS: &[Label] = &[Label {
    value: NAME_PLACEHOLDER,
    x: dec!(-4.27),
    y: dec!(2.778),
    size: TEXT_SIZE,
    layer: LAYER_NAMES,
    align: None,
    rot: None,
}];

const P0: Pin = pin("P0", dec!(-7.62), dec!(2.54), None);
const P1: Pin = pin("P1", dec!(-2.54), dec!(7.62), Some("R270"));

const fn symbol(name: &'static str, description: &'static str, pins: &'static [Pin]) -> Symbol {
    Symbol {
        name,
        description,
        wires: SYMBOL_OUTLINE,
        labels: SYMBOL_LABELS,
        pins,
    }
}

const SINGLE_LED_PINS: &[Pin] = &[
    P0,
    P1,
    pin("LED-", dec!(7.62), dec!(-2.54), Some("R180")),
    pin("LED+", dec!(2.54), dec!(-7.62), Some("R90")),
];

const RGB_LED_PINS: &[Pin] = &[
    P0,
    P1,
    pin("LED+", dec!(7.62), dec!(-2.54), Some("R180")),
    pin("R-", dec!(-2.54), dec!(-7.62), Some("R90")),
    pin("G-", dec!(0), dec!(-7.62), Some("R90")),
    pin("B-", dec!(2.54), dec!(-7.62), Some("R90")),
];

static DIODE_SYMBOL: Symbol = symbol(
    "KEYSWITCH-DIODE",
    "A simple keyboard key switch with LED support.",
    &[
        P0,
        P1,
        pin("D-", dec!(7.62), dec!(-2.54), Some("R180")),
        pin("D+", dec!(2.54), dec!(-7.62), Some("R90")),
    ],
);

static LED_SYMBOL: Symbol = symbol(
    "KEYSWITCH-LED",
    "A simple keyboard key switch with LED support.",
    SINGLE_LED_PINS,
);

static PLAIN_SYMBOL: Symbol = symbol(
    "KEYSWITCH-PLAIN",
    "A simple keyboard key switch.",
    &[P0, P1],
);

static RGBLED_SYMBOL: Symbol = symbol(
    "KEYSWITCH-RGBLED",
    "A simple keyboard key switch with LED support.",
    RGB_LED_PINS,
);

static RGBSMDLED_SYMBOL: Symbol = symbol(
    "KEYSWITCH-RGBSMDLED",
    "A simple keyboard key switch with SMD RGB LED support.",
    RGB_LED_PINS,
);

static SMDLED_SYMBOL: Symbol = symbol(
    "KEYSWITCH-SMDLED",
    "A simple keyboard key switch with SMD LED support.",
    SINGLE_LED_PINS,
);

static THTSMDLED_SYMBOL: Symbol = symbol(
    "KEYSWITCH-THTSMDLED",
    "A simple keyboard key switch with THT and SMD LED support.",
    SINGLE_LED_PINS,
);

const LED_SWITCHES: &[SwitchType] = &[SwitchType::AlpsMx, SwitchType::Mx];

impl DeviceArchetype {
    pub const ALL: [DeviceArchetype; 7] = [
        DeviceArchetype::Plain,
        DeviceArchetype::Led,
        DeviceArchetype::RgbLed,
        DeviceArchetype::RgbSmdLed,
        DeviceArchetype::SmdLed,
        DeviceArchetype::ThtSmdLed,
        DeviceArchetype::Diode,
    ];

    pub fn id(self) -> &'static str {
        match self {
            DeviceArchetype::Diode => "DIODE",
            DeviceArchetype::Led => "LED",
            DeviceArchetype::Plain => "PLAIN",
            DeviceArchetype::RgbLed => "RGBLED",
            DeviceArchetype::RgbSmdLed => "RGBSMDLED",
            DeviceArchetype::SmdLed => "SMDLED",
            DeviceArchetype::ThtSmdLed => "THTSMDLED",
        }
    }

    /// Every archetype, ordered by identifier.
    pub fn sorted() -> Vec<DeviceArchetype> {
        let mut archetypes = Self::ALL.to_vec();
        archetypes.sort_by_key(|archetype| archetype.id());
        archetypes
    }

    /// Supported switch types. The order is authored and drives output order.
    pub fn switch_types(self) -> &'static [SwitchType] {
        match self {
            DeviceArchetype::Plain => &[SwitchType::Alps, SwitchType::AlpsMx, SwitchType::Mx],
            DeviceArchetype::Diode => &[SwitchType::Mx],
            _ => LED_SWITCHES,
        }
    }

    pub fn led(self) -> Option<LedVariant> {
        match self {
            DeviceArchetype::Led => Some(LedVariant::Single),
            DeviceArchetype::RgbLed => Some(LedVariant::Rgb),
            DeviceArchetype::RgbSmdLed => Some(LedVariant::RgbSmd),
            DeviceArchetype::SmdLed => Some(LedVariant::SingleSmd),
            DeviceArchetype::ThtSmdLed => Some(LedVariant::SingleThtSmd),
            DeviceArchetype::Diode | DeviceArchetype::Plain => None,
        }
    }

    pub fn has_diode(self) -> bool {
        self == DeviceArchetype::Diode
    }

    pub fn addon(self) -> Option<Addon> {
        if self.has_diode() {
            Some(Addon::Diode)
        } else {
            self.led().map(Addon::Led)
        }
    }

    pub fn symbol(self) -> &'static Symbol {
        match self {
            DeviceArchetype::Diode => &DIODE_SYMBOL,
            DeviceArchetype::Led => &LED_SYMBOL,
            DeviceArchetype::Plain => &PLAIN_SYMBOL,
            DeviceArchetype::RgbLed => &RGBLED_SYMBOL,
            DeviceArchetype::RgbSmdLed => &RGBSMDLED_SYMBOL,
            DeviceArchetype::SmdLed => &SMDLED_SYMBOL,
            DeviceArchetype::ThtSmdLed => &THTSMDLED_SYMBOL,
        }
    }
}

impl std::fmt::Display for DeviceArchetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn sizes_sort_by_identifier() {
        let ids: Vec<_> = SwitchSize::sorted().iter().map(|size| size.id).collect();
        assert_eq!(ids, ["-6", "1", "2", "4", "6", "6.25", "6.5", "7"]);
    }

    #[test]
    fn size_units_match_identifiers() {
        for size in SWITCH_SIZES {
            let units = Decimal::from_str(size.id).unwrap();
            assert_eq!(units, size.units, "{}", size.id);
        }
    }

    #[test]
    fn only_unit_size_lacks_stabilizers() {
        for size in SWITCH_SIZES {
            assert_eq!(size.stabilizer.is_none(), size.id == "1", "{}", size.id);
        }
        assert_eq!(SwitchSize::get("1").unwrap().mirrors(), &[Mirror::Normal]);
        assert_eq!(
            SwitchSize::get("6.25").unwrap().mirrors(),
            &[Mirror::Normal, Mirror::Flipped]
        );
        assert!(SwitchSize::get("3").is_none());
    }

    #[test]
    fn archetypes_sort_by_identifier() {
        let ids: Vec<_> = DeviceArchetype::sorted()
            .into_iter()
            .map(DeviceArchetype::id)
            .collect();
        assert_eq!(
            ids,
            [
                "DIODE",
                "LED",
                "PLAIN",
                "RGBLED",
                "RGBSMDLED",
                "SMDLED",
                "THTSMDLED",
            ]
        );
    }

    #[test]
    fn symbol_names_follow_archetype() {
        for archetype in DeviceArchetype::ALL {
            assert_eq!(archetype.symbol().name, format!("KEYSWITCH-{archetype}"));
        }
    }

    #[test]
    fn addon_connects_have_symbol_pins() {
        for archetype in DeviceArchetype::ALL {
            let pins: Vec<_> = archetype.symbol().pins.iter().map(|p| p.name).collect();
            let addon = archetype.addon().map(Addon::connects).unwrap_or_default();
            for connect in addon.iter().chain(SwitchType::Mx.connects()) {
                assert!(pins.contains(&connect.pin), "{archetype}: {}", connect.pin);
            }
        }
    }

    #[test]
    fn stabilizer_holes_follow_mirror_sign() {
        let stabilizer = SwitchSize::get("2").unwrap().stabilizer.unwrap();
        let normal = stabilizer.holes(Mirror::Normal);
        let flipped = stabilizer.holes(Mirror::Flipped);
        for (a, b) in normal.iter().zip(&flipped) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, -b.y);
        }
        assert_eq!(normal[0].y.to_string(), "7");
        assert_eq!(flipped[2].y.to_string(), "8.24");
    }

    #[test]
    fn reverse_mount_rgb_moves_name_labels() {
        assert_eq!(name_labels(None)[0].y, dec!(-3.175));
        let moved = name_labels(Some(Addon::Led(LedVariant::RgbSmd)));
        assert_eq!(moved[1].y, dec!(-7));
        assert_eq!(name_labels(Some(Addon::Diode))[1].rot, Some("MR0"));
    }
}
