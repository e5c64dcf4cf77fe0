//! Placement scripts that drop every package of the library onto a
//! schematic and a board.
//!
//! Packages are laid out in rows, one row per device set and switch type.
//! Mirrored packages go in a sub-row directly below their normal sibling.
//! Coordinates are accumulated as decimals so repeated additions stay exact;
//! they print with their natural scale (`3.00`, `481.0125`).

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::document::Package;

/// Grid setup commands that precede the board moves.
pub const BOARD_GRID: [&str; 2] = ["grid mm 19.05;", "grid alt mm 4.7625;"];

const SCHEMATIC_ROW_PITCH: Decimal = dec!(1.5);
const SCHEMATIC_COLUMN_STEP: Decimal = dec!(0.75);
const SCHEMATIC_MIRROR_DROP: Decimal = dec!(0.75);

const BOARD_ROW_PITCH: Decimal = dec!(38.1);
/// Width of a 1U key on the board, also the mirrored sub-row offset.
const BOARD_KEY_PITCH: Decimal = dec!(19.05);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: Decimal,
    pub y: Decimal,
}

/// Where one package lands, in schematic units and board millimeters.
/// `y` is a distance downwards and prints negated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement<'a> {
    pub package: &'a Package,
    pub schematic: Point,
    pub board: Point,
}

impl Placement<'_> {
    pub fn schematic_command(&self) -> String {
        let name = &self.package.name;
        format!(
            "ADD *{}-{} {} ({} -{});",
            self.package.symbol().name,
            name,
            name,
            self.schematic.x,
            self.schematic.y
        )
    }

    pub fn board_command(&self) -> String {
        format!(
            "MOVE {} ({} -{});",
            self.package.name, self.board.x, self.board.y
        )
    }
}

#[derive(Debug, Default)]
struct Cursor {
    x: Decimal,
    x_mm: Decimal,
    y: Decimal,
    y_mm: Decimal,
    row: Option<String>,
}

impl Cursor {
    fn place<'a>(&mut self, package: &'a Package) -> Placement<'a> {
        let row = row_key(package);
        if self.row.as_deref() != Some(row.as_str()) {
            debug!("Starting placement row {row}");
            self.x = Decimal::ZERO;
            self.x_mm = Decimal::ZERO;
            self.y += SCHEMATIC_ROW_PITCH;
            self.y_mm += BOARD_ROW_PITCH;
            self.row = Some(row);
        }

        if package.mirror.is_flipped() {
            let placement = Placement {
                package,
                schematic: Point {
                    x: self.x,
                    y: self.y + SCHEMATIC_MIRROR_DROP,
                },
                board: Point {
                    x: self.x_mm,
                    y: self.y_mm + BOARD_KEY_PITCH,
                },
            };
            self.x += SCHEMATIC_COLUMN_STEP;
            return placement;
        }

        self.x += SCHEMATIC_COLUMN_STEP;
        self.x_mm += BOARD_KEY_PITCH * package.size.units.abs();
        Placement {
            package,
            schematic: Point {
                x: self.x,
                y: self.y,
            },
            board: Point {
                x: self.x_mm,
                y: self.y_mm,
            },
        }
    }
}

/// Packages share a row when they belong to the same symbol and switch type.
fn row_key(package: &Package) -> String {
    let name = package.name.as_str();
    let switch = name.split_once('-').map_or(name, |(head, _)| head);
    format!("{}-{}", package.symbol().name, switch)
}

/// Place packages in order, one placement per package.
pub fn place<'a>(packages: impl IntoIterator<Item = &'a Package>) -> Vec<Placement<'a>> {
    let mut cursor = Cursor::default();
    packages
        .into_iter()
        .map(|package| cursor.place(package))
        .collect()
}

/// The two replayable command scripts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementScripts {
    pub schematic: Vec<String>,
    pub board: Vec<String>,
}

impl PlacementScripts {
    pub fn new<'a>(packages: impl IntoIterator<Item = &'a Package>) -> Self {
        let placements = place(packages);
        let schematic = placements
            .iter()
            .map(Placement::schematic_command)
            .collect();
        let board = BOARD_GRID
            .iter()
            .map(|line| line.to_string())
            .chain(placements.iter().map(Placement::board_command))
            .collect();
        Self { schematic, board }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Mirror;
    use crate::expand::Variant;
    use crate::tables::DeviceArchetype::{Led, Plain, RgbLed};
    use crate::tables::{DeviceArchetype, SwitchSize, SwitchType};

    fn package(
        archetype: DeviceArchetype,
        switch_type: SwitchType,
        size: &str,
        mirror: Mirror,
    ) -> Package {
        let size = SwitchSize::get(size).unwrap();
        Variant::new(archetype, switch_type, size, mirror).package()
    }

    #[test]
    fn mirrored_package_sits_below_its_sibling() {
        let packages = [
            package(Plain, SwitchType::Mx, "2", Mirror::Normal),
            package(Plain, SwitchType::Mx, "2", Mirror::Flipped),
            package(Plain, SwitchType::Mx, "1", Mirror::Normal),
        ];
        let scripts = PlacementScripts::new(&packages);

        insta::assert_snapshot!(scripts.schematic.join("\n"), @r"
        ADD *KEYSWITCH-PLAIN-MX-2U MX-2U (0.75 -1.5);
        ADD *KEYSWITCH-PLAIN-MX-2U-FLIPPED MX-2U-FLIPPED (0.75 -2.25);
        ADD *KEYSWITCH-PLAIN-MX-1U MX-1U (2.25 -1.5);
        ");
        insta::assert_snapshot!(scripts.board.join("\n"), @r"
        grid mm 19.05;
        grid alt mm 4.7625;
        MOVE MX-2U (38.10 -38.1);
        MOVE MX-2U-FLIPPED (38.10 -57.15);
        MOVE MX-1U (57.15 -38.1);
        ");
    }

    #[test]
    fn new_row_resets_column() {
        let packages = [
            package(Plain, SwitchType::AlpsMx, "6.25", Mirror::Normal),
            package(Plain, SwitchType::Mx, "1", Mirror::Normal),
        ];
        let placements = place(&packages);

        assert_eq!(placements[0].board.x, dec!(119.0625));
        assert_eq!(placements[1].schematic.x, dec!(0.75));
        assert_eq!(placements[1].schematic.y, dec!(3.0));
        assert_eq!(placements[1].board.x, dec!(19.05));
        assert_eq!(placements[1].board.y, dec!(76.2));
    }

    #[test]
    fn reversed_size_advances_by_magnitude() {
        let packages = [package(Plain, SwitchType::Mx, "-6", Mirror::Normal)];
        let placements = place(&packages);
        assert_eq!(
            placements[0].board_command(),
            "MOVE MX-REVERSED-6U (114.30 -38.1);"
        );
    }

    #[test]
    fn rows_group_by_symbol_and_switch() {
        let led = package(Led, SwitchType::AlpsMx, "2", Mirror::Flipped);
        let rgb = package(RgbLed, SwitchType::AlpsMx, "2", Mirror::Normal);
        let reversed = package(RgbLed, SwitchType::AlpsMx, "-6", Mirror::Normal);
        assert_eq!(row_key(&led), "KEYSWITCH-LED-ALPSMX");
        assert_eq!(row_key(&rgb), "KEYSWITCH-RGBLED-ALPSMX");
        assert_eq!(row_key(&reversed), row_key(&rgb));
    }
}
