use super::parse_rle;
use crate::{Error, Grid};
use std::str::FromStr;

/// Well-known Life patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Block,
    Blinker,
    Toad,
    Beacon,
    Glider,
    Pulsar,
    RPentomino,
    GosperGliderGun,
}

impl Preset {
    pub const ALL: [Preset; 8] = [
        Preset::Block,
        Preset::Blinker,
        Preset::Toad,
        Preset::Beacon,
        Preset::Glider,
        Preset::Pulsar,
        Preset::RPentomino,
        Preset::GosperGliderGun,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Block => "block",
            Preset::Blinker => "blinker",
            Preset::Toad => "toad",
            Preset::Beacon => "beacon",
            Preset::Glider => "glider",
            Preset::Pulsar => "pulsar",
            Preset::RPentomino => "r-pentomino",
            Preset::GosperGliderGun => "gosper-glider-gun",
        }
    }

    pub fn rle(self) -> &'static str {
        match self {
            Preset::Block => "x = 2, y = 2\n2o$2o!",
            Preset::Blinker => "x = 3, y = 1\n3o!",
            Preset::Toad => "x = 4, y = 2\nb3o$3o!",
            Preset::Beacon => "x = 4, y = 4\n2o$2o$2b2o$2b2o!",
            Preset::Glider => "x = 3, y = 3\nbo$2bo$3o!",
            Preset::Pulsar => concat!(
                "x = 13, y = 13\n",
                "2b3o3b3o2$o4bobo4bo$o4bobo4bo$o4bobo4bo$2b3o3b3o2$",
                "2b3o3b3o$o4bobo4bo$o4bobo4bo$o4bobo4bo2$2b3o3b3o!",
            ),
            Preset::RPentomino => "x = 3, y = 3\nb2o$2o$bo!",
            Preset::GosperGliderGun => concat!(
                "x = 36, y = 9, rule = B3/S23\n",
                "24bo$22bobo$12b2o6b2o12b2o$11bo3bo4b2o12b2o$2o8bo5bo3b2o$",
                "2o8bo3bob2o4bobo$10bo5bo7bo$11bo3bo$12b2o!",
            ),
        }
    }

    /// The pattern's cells in its own bounding box.
    pub fn grid(self) -> Grid {
        parse_rle(self.rle().as_bytes())
            .expect("A bug in embedded presets")
            .cells
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let name = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| Error::InvalidPattern(format!("unknown preset {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_parse() {
        let expected = [
            (Preset::Block, (2, 2), 4),
            (Preset::Blinker, (3, 1), 3),
            (Preset::Toad, (4, 2), 6),
            (Preset::Beacon, (4, 4), 8),
            (Preset::Glider, (3, 3), 5),
            (Preset::Pulsar, (13, 13), 48),
            (Preset::RPentomino, (3, 3), 5),
            (Preset::GosperGliderGun, (36, 9), 36),
        ];
        for (preset, size, population) in expected {
            let grid = preset.grid();
            assert_eq!(grid.size(), size, "{}", preset.name());
            assert_eq!(grid.population(), population, "{}", preset.name());
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Glider".parse::<Preset>().unwrap(), Preset::Glider);
        assert_eq!(
            "gosper_glider_gun".parse::<Preset>().unwrap(),
            Preset::GosperGliderGun
        );
        for p in Preset::ALL {
            assert_eq!(p.name().parse::<Preset>().unwrap(), p);
        }
        assert!("spaceship".parse::<Preset>().is_err());
    }
}
