use rand::{seq::SliceRandom, SeedableRng};
use util::GameRng;

use crate::{
    ecs::{Ecs, Inventory, Sight},
    prelude::*,
    Engine, Scheduler, FOV_RADIUS,
};

/// Main data container for game engine runtime.
pub struct Runtime {
    pub(crate) ecs: Ecs,
    pub(crate) map: Map,
    pub(crate) scheduler: Scheduler,
    pub(crate) engine: Engine,
    pub(crate) repository: Repository,
    pub(crate) player: Option<Entity>,
    pub(crate) rng: GameRng,
    /// Entities removed from play that get despawned at the end of the
    /// current turn.
    graveyard: Vec<Entity>,
}

impl AsRef<Runtime> for Runtime {
    fn as_ref(&self) -> &Runtime {
        self
    }
}

impl AsMut<Runtime> for Runtime {
    fn as_mut(&mut self) -> &mut Runtime {
        self
    }
}

impl Runtime {
    /// Empty world with the given terrain. The engine starts out locked.
    pub fn new(terrain: Terrain, repository: Repository, seed: u64) -> Self {
        Runtime {
            ecs: Default::default(),
            map: Map::new(terrain),
            scheduler: Default::default(),
            engine: Default::default(),
            repository,
            player: None,
            rng: GameRng::seed_from_u64(seed),
            graveyard: Default::default(),
        }
    }

    /// Fully populated world ready to be started.
    pub fn from_config(terrain: Terrain, config: &Config) -> Result<Self> {
        let mut ret = Runtime::new(terrain, config.repository(), config.seed);
        ret.populate(config)?;
        Ok(ret)
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    /// Spawn a new entity from a template. It's not on the map yet.
    pub fn create_entity(&mut self, key: &str) -> Result<Entity> {
        let mut builder = self.repository.get(key)?.builder(key);
        Ok(Entity(self.ecs.spawn(builder.build())))
    }

    /// Create an entity and make it the player at the given location.
    ///
    /// Fails if the template can't act as the player.
    pub fn spawn_player(&mut self, key: &str, loc: Location) -> Result<Entity> {
        self.repository.get_player(key)?;
        let player = self.create_entity(key)?;
        if let Err(e) = self.add_entity(player, loc) {
            self.despawn(player);
            return Err(e);
        }
        self.player = Some(player);
        self.update_fov();
        Ok(player)
    }

    /// Put an entity on the map and schedule it if it's an actor.
    pub fn add_entity(&mut self, e: Entity, loc: Location) -> Result<()> {
        self.map.insert_entity(e, loc)?;
        if e.has_group(self, Group::Actor) {
            let cost = e.turn_cost(self);
            self.scheduler.add(e, true, cost);
        }
        Ok(())
    }

    pub fn add_entity_at_random_position(
        &mut self,
        e: Entity,
        z: i32,
    ) -> Result<Location> {
        let loc = self.map.random_floor_position(&mut self.rng, z)?;
        self.add_entity(e, loc)?;
        Ok(loc)
    }

    /// Take an entity off the map and out of the turn order.
    ///
    /// Does nothing for an entity that isn't on the map.
    pub fn remove_entity(&mut self, e: Entity) {
        self.map.remove_entity(e);
        self.scheduler.remove(e);
    }

    /// Move an entity that's on the map.
    ///
    /// Fails without changes if the target is occupied or outside the map.
    pub fn update_entity_position(
        &mut self,
        e: Entity,
        loc: Location,
    ) -> Result<()> {
        self.map.move_entity(e, loc)
    }

    /// Put an item on the floor stack at location.
    pub fn add_item(&mut self, item: Entity, loc: Location) -> Result<()> {
        self.map.push_item(loc, item)
    }

    pub fn add_item_at_random_position(
        &mut self,
        item: Entity,
        z: i32,
    ) -> Result<Location> {
        let loc = self.map.random_floor_position(&mut self.rng, z)?;
        self.add_item(item, loc)?;
        Ok(loc)
    }

    pub fn entity_at(&self, loc: Location) -> Option<Entity> {
        self.map.entity_at(loc)
    }

    /// Place the player on the first level and scatter monsters and items
    /// on every level.
    pub fn populate(&mut self, config: &Config) -> Result<()> {
        self.repository.get_player(&config.player)?;
        let player = self.create_entity(&config.player)?;
        let loc = self.add_entity_at_random_position(player, 0)?;
        self.player = Some(player);
        log::info!("Player {player} enters the dungeon at {loc}");

        for z in 0..self.map.depth() {
            for _ in 0..config.monsters_per_level {
                let Some(key) = config.monsters.choose(&mut self.rng) else {
                    break;
                };
                let e = self.create_entity(key)?;
                self.add_entity_at_random_position(e, z)?;
            }

            for _ in 0..config.items_per_level {
                let Some(key) = config.items.choose(&mut self.rng) else {
                    break;
                };
                let e = self.create_entity(key)?;
                self.add_item_at_random_position(e, z)?;
            }
        }

        log::info!(
            "Populated {} levels with {} creatures",
            self.map.depth(),
            self.map.entities().count()
        );
        self.update_fov();
        Ok(())
    }

    /// Recompute what the player sees.
    pub fn update_fov(&mut self) {
        let Some(player) = self.player else { return };
        let Some(loc) = player.loc(self) else { return };
        let radius = player
            .try_get::<Sight>(self)
            .map_or(FOV_RADIUS, |s| s.radius);
        self.map.compute_fov(loc, radius);
    }

    /// Cells the player saw on the last field of view update.
    pub fn visible_cells(&self) -> impl Iterator<Item = Location> + '_ {
        self.map.visible_cells()
    }

    pub fn engine_state(&self) -> EngineState {
        self.engine.state()
    }

    /// Start running turns until the player needs input.
    pub fn start(&mut self) {
        self.unlock();
    }

    pub fn lock(&mut self) {
        self.engine.lock();
    }

    /// Release a lock on the engine, run turns if it becomes free.
    pub fn unlock(&mut self) {
        if self.engine.unlock() {
            self.run();
        }
    }

    fn run(&mut self) {
        while self.engine.state() == EngineState::Running {
            // Nobody to wait on, running would never yield control back.
            let player_waits = self.player.is_some_and(|p| {
                p.is_alive(self)
                    && p.has_capability(self, Capability::PlayerActor)
                    && self.scheduler.contains(p)
            });
            if !player_waits {
                log::info!("No player in turn order, stopping engine");
                self.engine.lock();
                break;
            }

            let Some(actor) = self.scheduler.next() else {
                self.engine.lock();
                break;
            };
            actor.act(self);
            self.gc();
        }
        self.update_fov();
    }

    /// Take an entity out of play, it gets despawned at the end of the
    /// turn.
    pub(crate) fn kill(&mut self, e: Entity) {
        self.remove_entity(e);
        self.graveyard.push(e);
    }

    /// Despawn killed entities. The player entity is kept around so its
    /// state can still be inspected.
    pub(crate) fn gc(&mut self) {
        for e in std::mem::take(&mut self.graveyard) {
            if Some(e) != self.player {
                self.despawn(e);
            }
        }
    }

    fn despawn(&mut self, e: Entity) {
        if let Some(inventory) = e.try_get::<Inventory>(self) {
            for item in inventory.iter().flatten() {
                let _ = self.ecs.despawn(**item);
            }
        }
        let _ = self.ecs.despawn(*e);
    }

    /// Return whether the overall game scenario is still going or if it has
    /// ended in defeat.
    pub fn scenario_status(&self) -> ScenarioStatus {
        match self.player {
            Some(p) if p.is_alive(self) => ScenarioStatus::Ongoing,
            _ => ScenarioStatus::Lost,
        }
    }
}
