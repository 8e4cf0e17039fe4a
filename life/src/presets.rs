// presets.rs - Named starting patterns, given as (x, y) grid coordinates

use crate::error::{LifeError, Result};

pub struct Preset {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "diehard",
        cells: &[(35, 15), (36, 15), (36, 16), (40, 16), (41, 16), (42, 16), (41, 14)],
    },
    Preset {
        name: "bar",
        cells: &[
            (25, 15), (25, 16), (25, 17), (25, 18), (25, 19),
            (25, 20), (25, 21), (25, 22), (25, 23), (25, 24),
        ],
    },
    Preset {
        name: "glider",
        cells: &[(20, 19), (21, 19), (22, 19), (21, 17), (22, 18)],
    },
    Preset {
        name: "cgg",
        cells: &[
            (20, 18), (21, 18), (20, 19), (21, 19),
            (28, 19), (28, 20), (29, 18), (29, 20), (30, 18), (30, 19),
            (36, 20), (36, 21), (36, 22), (37, 20), (38, 21),
            (42, 17), (42, 18), (43, 16), (43, 18), (44, 16), (44, 17),
            (44, 28), (44, 29), (45, 28), (45, 30), (46, 28),
            (54, 16), (54, 17), (55, 16), (55, 17),
            (55, 23), (55, 24), (55, 25), (56, 23), (57, 24),
        ],
    },
];

pub fn find(name: &str) -> Result<&'static Preset> {
    PRESETS.iter()
        .find(|preset| preset.name == name)
        .ok_or_else(|| LifeError::UnknownPreset(name.to_string()))
}

pub fn names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|preset| preset.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Grid};

    #[test]
    fn lookup_by_name() {
        assert_eq!(find("glider").unwrap().cells.len(), 5);
        assert_eq!(find("diehard").unwrap().cells.len(), 7);
        assert_eq!(find("bar").unwrap().cells.len(), 10);
        assert_eq!(find("cgg").unwrap().cells.len(), 35);
        assert_eq!(names().collect::<Vec<_>>(), vec!["diehard", "bar", "glider", "cgg"]);
    }

    #[test]
    fn unknown_name_fails() {
        assert!(matches!(find("nonexistent"), Err(LifeError::UnknownPreset(name)) if name == "nonexistent"));
        assert!(find("Glider").is_err());
    }

    #[test]
    fn presets_fit_default_grid() {
        let grid = Grid::new(DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap();
        for preset in PRESETS {
            for &(x, y) in preset.cells {
                assert!(grid.contains(x, y), "{} cell ({}, {}) outside grid", preset.name, x, y);
            }
        }
    }
}
