use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use rand::Rng;
use rand::rngs::SmallRng;

use crate::ecs::clock::SimClock;
use crate::ecs::components::*;
use crate::ecs::resources::{ActorMap, EcsIdGenerator, SimConfig, actor_rng};
use crate::model::{ActorId, ActorKind, EffectInstance, Position, Variant};

/// Everything needed to put an actor into the world.
#[derive(Debug, Clone)]
pub struct ActorSpawn {
    pub kind: ActorKind,
    pub position: Position,
    pub variant: Variant,
    pub tameable: Tameable,
    pub silent: bool,
    pub effects: Vec<EffectInstance>,
    pub reason: SpawnReason,
    /// Carry an existing random stream instead of seeding a new one.
    pub rng: Option<SmallRng>,
}

impl ActorSpawn {
    pub fn new(kind: ActorKind, position: Position) -> Self {
        Self {
            kind,
            position,
            variant: Variant::default(),
            tameable: Tameable::default(),
            silent: false,
            effects: Vec::new(),
            reason: SpawnReason::Natural,
            rng: None,
        }
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn tameable(mut self, tameable: Tameable) -> Self {
        self.tameable = tameable;
        self
    }

    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn effect(mut self, effect: EffectInstance) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn reason(mut self, reason: SpawnReason) -> Self {
        self.reason = reason;
        self
    }

    pub fn rng(mut self, rng: SmallRng) -> Self {
        self.rng = Some(rng);
        self
    }
}

fn register(world: &mut World, id: ActorId, entity: Entity) {
    // Graceful when ActorMap is temporarily removed from the world
    // (e.g. during apply_sim_commands, which extracts it into ApplyCtx).
    // In that case the apply_* caller registers via ctx.actor_map instead.
    if let Some(mut map) = world.get_resource_mut::<ActorMap>() {
        map.insert(id, entity);
    }
}

/// Spawn an actor under a known id.
pub fn spawn_actor(world: &mut World, id: ActorId, spawn: ActorSpawn) -> Entity {
    let origin = world
        .get_resource::<SimClock>()
        .map_or(0, |clock| clock.tick_count);
    let seed = world
        .get_resource::<SimConfig>()
        .map_or_else(|| SimConfig::default().seed, |config| config.seed);
    let rng = spawn.rng.unwrap_or_else(|| actor_rng(seed, id));

    let mut entity = world.spawn((
        SimActor {
            id,
            kind: spawn.kind,
            origin,
            end: None,
        },
        WorldPosition(spawn.position),
        Plumage(spawn.variant),
        spawn.tameable,
        ActiveEffects::from_instances(spawn.effects),
        ActorRng(rng),
        SpawnOrigin(spawn.reason),
    ));
    if spawn.kind.is_convertible() {
        entity.insert((ConversionTimer::default(), SyncedConverting::default()));
    }
    if spawn.silent {
        entity.insert(Silent);
    }
    let entity = entity.id();
    register(world, id, entity);
    entity
}

/// Spawn an actor under a freshly allocated id.
pub fn spawn_new_actor(world: &mut World, spawn: ActorSpawn) -> Entity {
    let id = world.resource_mut::<EcsIdGenerator>().0.next_id();
    spawn_actor(world, id, spawn)
}

/// Kind-specific initialization for an actor that just entered the world.
/// Parrot-shaped kinds roll their default variant here.
pub fn finalize_spawn(kind: ActorKind, reason: SpawnReason, rng: &mut impl Rng) -> Variant {
    let variant = Variant::random(rng);
    tracing::trace!(?kind, ?reason, ?variant, "finalize spawn");
    variant
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::app::build_sim_app;

    #[test]
    fn zombie_parrot_gets_conversion_state() {
        let mut app = build_sim_app();
        let zombie = spawn_new_actor(
            app.world_mut(),
            ActorSpawn::new(ActorKind::ZombieParrot, Position::default()),
        );
        let skeleton = spawn_new_actor(
            app.world_mut(),
            ActorSpawn::new(ActorKind::SkeletonParrot, Position::default()).silent(true),
        );

        let world = app.world();
        assert!(world.get::<ConversionTimer>(zombie).is_some());
        assert!(world.get::<SyncedConverting>(zombie).is_some());
        assert!(world.get::<ConversionTimer>(skeleton).is_none());
        assert!(world.get::<Silent>(skeleton).is_some());
        assert_eq!(world.resource::<ActorMap>().len(), 2);
    }

    #[test]
    fn ids_are_allocated_in_order() {
        let mut app = build_sim_app();
        let a = spawn_new_actor(
            app.world_mut(),
            ActorSpawn::new(ActorKind::Parrot, Position::default()),
        );
        let b = spawn_new_actor(
            app.world_mut(),
            ActorSpawn::new(ActorKind::Parrot, Position::default()),
        );
        let world = app.world();
        assert_eq!(world.get::<SimActor>(a).unwrap().id, ActorId(1));
        assert_eq!(world.get::<SimActor>(b).unwrap().id, ActorId(2));
    }
}
