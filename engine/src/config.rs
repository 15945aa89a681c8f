use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Game setup parameters.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Random number generator seed.
    pub seed: u64,
    /// Template key of the player entity.
    pub player: String,
    pub monsters_per_level: usize,
    pub items_per_level: usize,
    /// Template keys monsters are drawn from.
    pub monsters: Vec<String>,
    /// Template keys floor items are drawn from.
    pub items: Vec<String>,
    /// Extra templates, these override built-in ones with the same key.
    pub templates: IndexMap<String, Template>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: 0,
            player: "player".into(),
            monsters_per_level: 15,
            items_per_level: 10,
            monsters: ["fungus", "bat", "newt"].map(String::from).to_vec(),
            items: [
                "apple",
                "melon",
                "rock",
                "dagger",
                "sword",
                "tunic",
                "chainmail",
            ]
            .map(String::from)
            .to_vec(),
            templates: Default::default(),
        }
    }
}

impl Config {
    /// Built-in templates extended with the configured ones.
    pub fn repository(&self) -> Repository {
        let mut ret = Repository::builtin();
        ret.extend(self.templates.clone());
        ret
    }

    /// Template keys the configuration refers to that the repository
    /// doesn't have.
    pub fn missing_templates(&self) -> Vec<String> {
        let repo = self.repository();
        std::iter::once(&self.player)
            .chain(&self.monsters)
            .chain(&self.items)
            .filter(|k| repo.get(k).is_err())
            .cloned()
            .collect()
    }

    /// Check that every template key resolves and that the player template
    /// can act as the player.
    pub fn validate(&self) -> Result<()> {
        if let Some(key) = self.missing_templates().into_iter().next() {
            return Err(Error::UnknownTemplate(key));
        }
        self.repository().get_player(&self.player)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Color;

    #[test]
    fn default_config_is_complete() {
        assert!(Config::default().missing_templates().is_empty());
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn unfit_player() {
        let mut config = Config::default();
        config.player = "bat".into();
        assert_eq!(
            config.validate(),
            Err(Error::UnfitPlayer {
                key: "bat".into(),
                missing: Capability::PlayerActor
            })
        );

        config.player = "drifter".into();
        assert_eq!(
            config.validate(),
            Err(Error::UnknownTemplate("drifter".into()))
        );

        config.templates.insert(
            "drifter".into(),
            Template::new("drifter", Glyph::new('@', Color::White))
                .with(Capability::Movable)
                .with(Capability::WanderActor)
                .with(Capability::Destructible)
                .with(Capability::MessageRecipient),
        );
        assert_eq!(
            config.validate(),
            Err(Error::UnfitPlayer {
                key: "drifter".into(),
                missing: Capability::PlayerActor
            })
        );
    }

    #[test]
    fn custom_templates() {
        let mut config = Config::default();
        config.monsters.push("slime".into());
        assert_eq!(config.missing_templates(), vec!["slime".to_string()]);

        config.templates.insert(
            "slime".into(),
            Template::new("slime", Glyph::new('j', Color::Green))
                .with(Capability::Destructible),
        );
        assert!(config.missing_templates().is_empty());
        assert!(config
            .repository()
            .get("slime")
            .unwrap()
            .has(Capability::Destructible));
    }
}
