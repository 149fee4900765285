use crate::{Error, Result, RuleSet, World};

/// Startup configuration of a [`World`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// Rule in `B<digits>/S<digits>` form.
    pub rule: String,
    /// Hundredths of a second between generations while running.
    pub speed: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Self::WORLD_X,
            height: Self::WORLD_Y,
            rule: RuleSet::LIFE.to_string(),
            speed: Self::SPEED,
        }
    }
}

impl Config {
    pub const WORLD_X: usize = 100;
    pub const WORLD_Y: usize = 100;
    pub const SPEED: u32 = 3;

    /// Validates everything before constructing anything.
    pub fn validate(&self) -> Result<RuleSet> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        self.rule.parse()
    }

    /// Builds a blank world from the configuration.
    pub fn build(&self) -> Result<World> {
        let rule = self.validate()?;
        World::new(self.width, self.height, rule, self.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builds() {
        let world = Config::default().build().unwrap();
        assert_eq!(world.grid().size(), (100, 100));
        assert_eq!(world.rule(), &RuleSet::LIFE);
        assert_eq!(world.speed(), 3);
    }

    #[test]
    fn test_fails_fast() {
        let config = Config {
            width: 0,
            rule: "nonsense".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            config.build(),
            Err(Error::InvalidDimension { .. })
        ));

        let config = Config {
            rule: "B3/S29".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.build(), Err(Error::InvalidRule { .. })));
    }

    #[test]
    fn test_huge_dimensions_fail() {
        let config = Config {
            width: usize::MAX,
            height: 2,
            ..Config::default()
        };
        assert!(matches!(
            config.build(),
            Err(Error::InvalidDimension { .. })
        ));
    }
}
