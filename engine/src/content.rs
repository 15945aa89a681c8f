//! Built-in bestiary and item set.

use crate::{prelude::*, Color, Stats};

use Capability::*;

impl Repository {
    /// Repository with every standard template.
    pub fn builtin() -> Repository {
        let mut ret = Repository::default();

        ret.insert(
            "player",
            Template::new("player", Glyph::new('@', Color::White))
                .with_stats(Stats {
                    max_hp: Some(40),
                    attack_value: Some(10),
                    sight_radius: Some(6),
                    inventory_slots: Some(22),
                    ..Default::default()
                })
                .with(Movable)
                .with(PlayerActor)
                .with(Attacker)
                .with(Destructible)
                .with(MessageRecipient)
                .with(Sight)
                .with(InventoryHolder)
                .with(FoodConsumer)
                .with(Equipper),
        );

        // Monsters.

        ret.insert(
            "fungus",
            Template::new("fungus", Glyph::new('F', Color::Green))
                .with_stats(Stats {
                    max_hp: Some(10),
                    growths: Some(5),
                    ..Default::default()
                })
                .with(FungusActor)
                .with(Destructible),
        );

        ret.insert(
            "bat",
            Template::new("bat", Glyph::new('B', Color::White))
                .with_stats(Stats {
                    max_hp: Some(5),
                    attack_value: Some(4),
                    speed: Some(200),
                    ..Default::default()
                })
                .with(Movable)
                .with(WanderActor)
                .with(Attacker)
                .with(Destructible),
        );

        ret.insert(
            "newt",
            Template::new("newt", Glyph::new(':', Color::Yellow))
                .with_stats(Stats {
                    max_hp: Some(3),
                    attack_value: Some(2),
                    ..Default::default()
                })
                .with(Movable)
                .with(WanderActor)
                .with(Attacker)
                .with(Destructible),
        );

        // Items.

        ret.insert(
            "apple",
            Template::new("apple", Glyph::new('%', Color::Red))
                .with_stats(Stats {
                    food_value: Some(50),
                    ..Default::default()
                })
                .with(Edible),
        );

        ret.insert(
            "melon",
            Template::new("melon", Glyph::new('%', Color::LightGreen))
                .with_stats(Stats {
                    food_value: Some(35),
                    consumptions: Some(4),
                    ..Default::default()
                })
                .with(Edible),
        );

        ret.insert("rock", Template::new("rock", Glyph::new('*', Color::Gray)));

        ret.insert(
            "dagger",
            Template::new("dagger", Glyph::new(')', Color::Gray))
                .with_stats(Stats {
                    attack_value: Some(5),
                    wieldable: true,
                    ..Default::default()
                })
                .with(Equippable),
        );

        ret.insert(
            "sword",
            Template::new("sword", Glyph::new(')', Color::White))
                .with_stats(Stats {
                    attack_value: Some(10),
                    wieldable: true,
                    ..Default::default()
                })
                .with(Equippable),
        );

        ret.insert(
            "tunic",
            Template::new("tunic", Glyph::new('[', Color::Green))
                .with_stats(Stats {
                    defense_value: Some(2),
                    wearable: true,
                    ..Default::default()
                })
                .with(Equippable),
        );

        ret.insert(
            "chainmail",
            Template::new("chainmail", Glyph::new('[', Color::White))
                .with_stats(Stats {
                    defense_value: Some(4),
                    wearable: true,
                    ..Default::default()
                })
                .with(Equippable),
        );

        ret
    }
}
