/// What occupies a map cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTerrain"))]
pub enum Terrain {
    /// Plain ground, cost 1.
    #[default]
    Floor,
    /// Shallow water, cost 2.
    Water,
    /// Rough ground, cost 3.
    Mountain,
    /// Explicit entry cost, 1 to 9. Build it with [`Terrain::weighted`];
    /// [`GridMap::set_terrain`](crate::GridMap::set_terrain) clamps other
    /// values into range.
    Weighted(u8),
    /// Impassable.
    Wall,
}

impl Terrain {
    /// Weighted terrain, or `None` if `cost` is not in 1 to 9.
    pub const fn weighted(cost: u8) -> Option<Self> {
        match cost {
            1..=9 => Some(Self::Weighted(cost)),
            _ => None,
        }
    }

    /// The same terrain with any weight clamped to 1 to 9.
    pub fn clamped(self) -> Self {
        match self {
            Self::Weighted(n) => Self::Weighted(n.clamp(1, 9)),
            t => t,
        }
    }

    /// Map a map rune to terrain. Start, goal and route markers count as
    /// floor; the caller records start and goal positions separately.
    pub fn from_rune(ch: char) -> Option<Self> {
        match ch {
            '.' | 'F' | 'T' | '●' | '*' => Some(Self::Floor),
            '~' => Some(Self::Water),
            '^' => Some(Self::Mountain),
            'X' | '#' => Some(Self::Wall),
            '1'..='9' => ch.to_digit(10).and_then(|d| Self::weighted(d as u8)),
            _ => None,
        }
    }

    /// The rune this terrain is drawn with.
    pub fn rune(self) -> char {
        match self {
            Self::Floor => '.',
            Self::Water => '~',
            Self::Mountain => '^',
            Self::Weighted(n) => char::from_digit(u32::from(n), 10).unwrap_or('?'),
            Self::Wall => 'X',
        }
    }

    /// Cost of stepping onto this terrain, or `None` if it cannot be entered.
    pub fn cost(self) -> Option<f64> {
        match self {
            Self::Floor => Some(1.0),
            Self::Water => Some(2.0),
            Self::Mountain => Some(3.0),
            Self::Weighted(n) => Some(f64::from(n)),
            Self::Wall => None,
        }
    }

    #[inline]
    pub fn is_passable(self) -> bool {
        self.cost().is_some()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
enum RawTerrain {
    Floor,
    Water,
    Mountain,
    Weighted(u8),
    Wall,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTerrain> for Terrain {
    type Error = String;

    fn try_from(raw: RawTerrain) -> Result<Self, Self::Error> {
        Ok(match raw {
            RawTerrain::Floor => Self::Floor,
            RawTerrain::Water => Self::Water,
            RawTerrain::Mountain => Self::Mountain,
            RawTerrain::Weighted(n) => {
                Self::weighted(n).ok_or_else(|| format!("terrain weight {n} is not in 1..=9"))?
            }
            RawTerrain::Wall => Self::Wall,
        })
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn terrain_json_round_trip() {
        for t in [
            Terrain::Floor,
            Terrain::Water,
            Terrain::Mountain,
            Terrain::Weighted(4),
            Terrain::Wall,
        ] {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(serde_json::from_str::<Terrain>(&json).unwrap(), t);
        }
        assert_eq!(
            serde_json::to_string(&Terrain::Weighted(4)).unwrap(),
            r#"{"Weighted":4}"#
        );
    }

    #[test]
    fn out_of_range_weight_is_rejected() {
        assert!(serde_json::from_str::<Terrain>(r#"{"Weighted":12}"#).is_err());
        assert!(serde_json::from_str::<Terrain>(r#"{"Weighted":0}"#).is_err());
        assert_eq!(
            serde_json::from_str::<Terrain>(r#""Water""#).unwrap(),
            Terrain::Water
        );
    }
}
