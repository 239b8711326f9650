//! Scene: an ECS world plus the systems that drive it.
//!
//! A [`Scene`] owns a `bevy_ecs` [`World`] and four ordered lists of
//! registered systems, one per [`Phase`]:
//!
//! - **Setup** systems run once, in registration order, from
//!   [`Scene::setup`]. Each may have a teardown hook; hooks run in reverse
//!   registration order from [`Scene::teardown`] or when the scene is dropped.
//! - **Event** systems run once per queued [`InputEvent`] at the start of a
//!   frame, receiving the event as `In<InputEvent>`.
//! - **Update** systems run once per frame after the events, reading the
//!   frame delta from [`WorldTime`].
//! - **Render** systems run once per frame after the update phase and push
//!   requests into the [`DrawQueue`], which is then drained into the
//!   [`DrawSurface`].
//!
//! Everything runs on the caller's thread. Each system runs to completion
//! before the next one starts, so systems share the world without locks.
//!
//! # Lifecycle
//!
//! ```text
//! Constructed --setup()--> Initialized --frame()--> Running <--> RoundOver
//!      \______________________\____________________\______teardown()--> TornDown
//! ```
//!
//! Calling an operation from the wrong state is a programming error and
//! panics.
//!
//! # Example
//!
//! ```ignore
//! let mut scene = Scene::new("GAMEPLAY SCENE", 800, 600);
//! let ball = scene.create_entity("ball", 400.0, 300.0);
//! scene.add_component(ball, Speed::new(120, -200));
//! scene.add_component(ball, Size::new(15, 15));
//! scene.add_update_system(movement);
//! scene.setup()?;
//! let outcome = scene.frame(1.0 / 60.0, &[], &mut surface);
//! ```

use std::fmt;

use bevy_ecs::component::Mutable;
use bevy_ecs::name::Name;
use bevy_ecs::prelude::*;
use bevy_ecs::query::QueryData;
use bevy_ecs::system::SystemId;
use log::{debug, error, info};

use crate::components::transform::Transform;
use crate::error::SceneError;
use crate::events::input::InputEvent;
use crate::resources::clock::Clock;
use crate::resources::drawqueue::DrawQueue;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::tilemap::TileMap;
use crate::resources::worldtime::WorldTime;
use crate::surface::DrawSurface;
use crate::systems::time::update_world_time;

/// When and how often a system runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Setup,
    Update,
    Render,
    Event,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Setup => "setup",
            Phase::Update => "update",
            Phase::Render => "render",
            Phase::Event => "event",
        };
        f.write_str(name)
    }
}

/// Result of one [`Scene::frame`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The frame ran every phase.
    Continue,
    /// The round has ended. The frame loop decides whether to stop or call
    /// [`Scene::reset_round`].
    RoundOver,
}

type SetupSystemId = SystemId<(), Result<(), SceneError>>;

struct SetupEntry {
    setup: SetupSystemId,
    teardown: Option<SystemId>,
    completed: bool,
}

pub struct Scene {
    name: String,
    world: World,
    setup_systems: Vec<SetupEntry>,
    update_systems: Vec<SystemId>,
    render_systems: Vec<SystemId>,
    event_systems: Vec<SystemId<In<InputEvent>>>,
}

fn transition(world: &mut World, scene: &str, next: GameStates) {
    let mut state = world.resource_mut::<GameState>();
    let previous = state.get();
    if previous != next {
        info!("Scene '{scene}': {previous:?} -> {next:?}");
        state.set(next);
    }
}

impl Scene {
    /// Create an empty scene for a `screen_width` x `screen_height` playfield.
    ///
    /// Inserts the resources every system in this crate may read: time,
    /// clock, screen size, lifecycle state, draw queue and a headless texture
    /// store. Replace any of them with [`Scene::insert_resource`] before
    /// calling [`Scene::setup`].
    pub fn new(name: impl Into<String>, screen_width: i32, screen_height: i32) -> Self {
        let name = name.into();
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(Clock::manual());
        world.insert_resource(ScreenSize {
            w: screen_width,
            h: screen_height,
        });
        world.insert_resource(GameState::new());
        world.insert_resource(NextGameState::new());
        world.insert_resource(DrawQueue::default());
        world.insert_resource(TextureStore::default());
        debug!("Scene '{name}' created ({screen_width}x{screen_height})");
        Scene {
            name,
            world,
            setup_systems: Vec::new(),
            update_systems: Vec::new(),
            render_systems: Vec::new(),
            event_systems: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> GameStates {
        self.world.resource::<GameState>().get()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    // --------------- Entities and components ---------------

    /// Spawn an entity with a [`Name`] and a [`Transform`] at `(x, y)`.
    pub fn create_entity(&mut self, name: impl Into<String>, x: f32, y: f32) -> Entity {
        let name = name.into();
        let entity = self
            .world
            .spawn((Name::new(name.clone()), Transform::new(x, y)))
            .id();
        debug!("Scene '{}': spawned {name} as {entity:?}", self.name);
        entity
    }

    /// Attach `component` to `entity`, replacing any component of the same
    /// type.
    ///
    /// # Panics
    /// Panics if `entity` does not exist.
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) -> &mut Self {
        self.world.entity_mut(entity).insert(component);
        self
    }

    /// Query over every entity holding all the components in `D`.
    ///
    /// ```ignore
    /// let mut view = scene.view::<(&Transform, &mut Speed)>();
    /// for (transform, mut speed) in view.iter_mut(scene.world_mut()) { /* ... */ }
    /// ```
    pub fn view<D: QueryData>(&mut self) -> QueryState<D> {
        self.world.query::<D>()
    }

    /// # Panics
    /// Panics if `entity` has no `T`.
    pub fn get<T: Component>(&self, entity: Entity) -> &T {
        self.world.get::<T>(entity).unwrap_or_else(|| {
            panic!(
                "entity {entity:?} has no {} component",
                std::any::type_name::<T>()
            )
        })
    }

    /// # Panics
    /// Panics if `entity` has no `T`.
    pub fn get_mut<T: Component<Mutability = Mutable>>(&mut self, entity: Entity) -> Mut<'_, T> {
        self.world.get_mut::<T>(entity).unwrap_or_else(|| {
            panic!(
                "entity {entity:?} has no {} component",
                std::any::type_name::<T>()
            )
        })
    }

    pub fn insert_resource<R: Resource>(&mut self, resource: R) -> &mut Self {
        self.world.insert_resource(resource);
        self
    }

    /// # Panics
    /// Panics if the resource is missing.
    pub fn resource<R: Resource>(&self) -> &R {
        self.world.resource::<R>()
    }

    /// The world tile map.
    ///
    /// # Panics
    /// Panics if no tile-map setup system has run yet. The map is a single
    /// resource, so there can never be more than one.
    pub fn tilemap(&self) -> &TileMap {
        self.world.get_resource::<TileMap>().unwrap_or_else(|| {
            panic!(
                "scene '{}' has no TileMap: register a tile-map setup system and call setup() first",
                self.name
            )
        })
    }

    /// Mutable access to the world tile map.
    ///
    /// # Panics
    /// Same precondition as [`Scene::tilemap`].
    pub fn tilemap_mut(&mut self) -> Mut<'_, TileMap> {
        let name = &self.name;
        self.world.get_resource_mut::<TileMap>().unwrap_or_else(|| {
            panic!(
                "scene '{name}' has no TileMap: register a tile-map setup system and call setup() first"
            )
        })
    }

    // --------------- System registration ---------------

    fn assert_not_initialized(&self) {
        let state = self.state();
        assert_eq!(
            state,
            GameStates::Constructed,
            "scene '{}': setup systems must be registered before setup() (state is {state:?})",
            self.name
        );
    }

    fn assert_alive(&self) {
        let state = self.state();
        assert_ne!(
            state,
            GameStates::TornDown,
            "scene '{}' has been torn down",
            self.name
        );
    }

    /// Register a setup system that runs once from [`Scene::setup`].
    ///
    /// # Panics
    /// Panics if setup has already run.
    pub fn add_setup_system<M>(
        &mut self,
        system: impl IntoSystem<(), Result<(), SceneError>, M> + 'static,
    ) -> &mut Self {
        self.assert_not_initialized();
        let setup = self.world.register_system(system);
        self.setup_systems.push(SetupEntry {
            setup,
            teardown: None,
            completed: false,
        });
        self
    }

    /// Register a setup system together with the hook that undoes it.
    ///
    /// The hook only runs if the setup system completed successfully.
    ///
    /// # Panics
    /// Panics if setup has already run.
    pub fn add_setup_system_with_teardown<M1, M2>(
        &mut self,
        system: impl IntoSystem<(), Result<(), SceneError>, M1> + 'static,
        teardown: impl IntoSystem<(), (), M2> + 'static,
    ) -> &mut Self {
        self.assert_not_initialized();
        let setup = self.world.register_system(system);
        let teardown = self.world.register_system(teardown);
        self.setup_systems.push(SetupEntry {
            setup,
            teardown: Some(teardown),
            completed: false,
        });
        self
    }

    pub fn add_update_system<M>(&mut self, system: impl IntoSystem<(), (), M> + 'static) -> &mut Self {
        self.assert_alive();
        let id = self.world.register_system(system);
        self.update_systems.push(id);
        self
    }

    pub fn add_render_system<M>(&mut self, system: impl IntoSystem<(), (), M> + 'static) -> &mut Self {
        self.assert_alive();
        let id = self.world.register_system(system);
        self.render_systems.push(id);
        self
    }

    pub fn add_event_system<M>(
        &mut self,
        system: impl IntoSystem<In<InputEvent>, (), M> + 'static,
    ) -> &mut Self {
        self.assert_alive();
        let id = self.world.register_system(system);
        self.event_systems.push(id);
        self
    }

    /// Number of systems registered for `phase`.
    pub fn system_count(&self, phase: Phase) -> usize {
        match phase {
            Phase::Setup => self.setup_systems.len(),
            Phase::Update => self.update_systems.len(),
            Phase::Render => self.render_systems.len(),
            Phase::Event => self.event_systems.len(),
        }
    }

    // --------------- Lifecycle ---------------

    /// Run every setup system once, in registration order.
    ///
    /// On the first failure the hooks of the systems that already completed
    /// run in reverse order, the scene moves to [`GameStates::TornDown`] and
    /// the error is returned.
    ///
    /// # Panics
    /// Panics if called more than once.
    pub fn setup(&mut self) -> Result<(), SceneError> {
        let state = self.state();
        assert_eq!(
            state,
            GameStates::Constructed,
            "setup() called on scene '{}' in state {state:?}",
            self.name
        );

        let mut failure = None;
        for (index, entry) in self.setup_systems.iter_mut().enumerate() {
            match self.world.run_system(entry.setup) {
                Ok(Ok(())) => entry.completed = true,
                Ok(Err(err)) => {
                    failure = Some(err);
                    break;
                }
                Err(err) => {
                    failure = Some(SceneError::SystemUnavailable {
                        phase: Phase::Setup,
                        index,
                        reason: err.to_string(),
                    });
                    break;
                }
            }
        }

        if let Some(err) = failure {
            error!("Scene '{}' setup failed: {err}", self.name);
            self.teardown();
            return Err(err);
        }

        transition(&mut self.world, &self.name, GameStates::Initialized);
        Ok(())
    }

    /// Apply a requested state change. Returns true when the round is over.
    fn apply_pending_state(&mut self) -> bool {
        match self.world.resource_mut::<NextGameState>().take() {
            Some(next) => {
                transition(&mut self.world, &self.name, next);
                next == GameStates::RoundOver
            }
            None => false,
        }
    }

    /// Run one frame: events, then update, then render.
    ///
    /// `dt` is the frame delta in seconds. A requested state change is applied
    /// after the event phase and after each update system. If it ends the
    /// round, the rest of the frame is skipped and [`FrameOutcome::RoundOver`] is returned. While
    /// the round is over every call returns `RoundOver` without running
    /// anything.
    ///
    /// # Panics
    /// Panics before [`Scene::setup`] or after [`Scene::teardown`], and when a
    /// registered system cannot run (for example because a resource it
    /// requires is missing).
    pub fn frame(
        &mut self,
        dt: f32,
        events: &[InputEvent],
        surface: &mut dyn DrawSurface,
    ) -> FrameOutcome {
        match self.state() {
            GameStates::Initialized => {
                transition(&mut self.world, &self.name, GameStates::Running)
            }
            GameStates::Running => {}
            GameStates::RoundOver => return FrameOutcome::RoundOver,
            state => panic!("frame() called on scene '{}' in state {state:?}", self.name),
        }

        for event in events {
            for (index, id) in self.event_systems.iter().enumerate() {
                if let Err(err) = self.world.run_system_with(*id, *event) {
                    panic!(
                        "scene '{}': {} system #{index} failed: {err}",
                        self.name,
                        Phase::Event
                    );
                }
            }
        }
        if self.apply_pending_state() {
            return FrameOutcome::RoundOver;
        }

        update_world_time(&mut self.world, dt);
        for index in 0..self.update_systems.len() {
            let id = self.update_systems[index];
            if let Err(err) = self.world.run_system(id) {
                panic!(
                    "scene '{}': {} system #{index} failed: {err}",
                    self.name,
                    Phase::Update
                );
            }
            if self.apply_pending_state() {
                return FrameOutcome::RoundOver;
            }
        }

        for (index, id) in self.render_systems.iter().enumerate() {
            if let Err(err) = self.world.run_system(*id) {
                panic!(
                    "scene '{}': {} system #{index} failed: {err}",
                    self.name,
                    Phase::Render
                );
            }
        }
        let mut queue = self.world.resource_mut::<DrawQueue>();
        for request in queue.drain() {
            surface.draw(&request);
        }

        FrameOutcome::Continue
    }

    /// Leave [`GameStates::RoundOver`] and resume running frames.
    ///
    /// Entity state is left as it is; reposition entities before the next
    /// frame if the round should restart from scratch.
    ///
    /// # Panics
    /// Panics unless the round is over.
    pub fn reset_round(&mut self) {
        let state = self.state();
        assert_eq!(
            state,
            GameStates::RoundOver,
            "reset_round() called on scene '{}' in state {state:?}",
            self.name
        );
        transition(&mut self.world, &self.name, GameStates::Running);
    }

    /// Run the teardown hooks of every completed setup system, newest first.
    ///
    /// Idempotent; also called when the scene is dropped.
    pub fn teardown(&mut self) {
        if self.state() == GameStates::TornDown {
            return;
        }
        for (index, entry) in self.setup_systems.iter_mut().enumerate().rev() {
            if !entry.completed {
                continue;
            }
            entry.completed = false;
            if let Some(id) = entry.teardown {
                if let Err(err) = self.world.run_system(id) {
                    error!(
                        "Scene '{}': teardown of setup system #{index} failed: {err}",
                        self.name
                    );
                }
            }
        }
        transition(&mut self.world, &self.name, GameStates::TornDown);
    }
}

impl Drop for Scene {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        self.teardown();
    }
}
