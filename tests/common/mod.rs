#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use bevy_app::App;
use bevy_ecs::entity::Entity;
use bevy_ecs::schedule::ExecutorKind;

use pet_cemetery::ecs::{
    ActorSnapshot, ActorSpawn, ConversionHook, ConversionHooks, SimConfig, SimPlugin,
    build_sim_app_with_config, interact, spawn_new_actor,
};
use pet_cemetery::model::*;

/// Deterministic app with every domain plugin installed.
pub fn sim_app(config: SimConfig) -> App {
    let mut app = build_sim_app_with_config(config, ExecutorKind::SingleThreaded);
    app.add_plugins(SimPlugin);
    app
}

/// Config whose conversions always take exactly `ticks` ticks to roll.
pub fn fixed_duration(ticks: i32) -> SimConfig {
    SimConfig {
        conversion_min_ticks: ticks,
        conversion_max_ticks: ticks,
        ..SimConfig::default()
    }
}

pub fn spawn_weak_zombie(app: &mut App, position: Position) -> Entity {
    spawn_new_actor(
        app.world_mut(),
        ActorSpawn::new(ActorKind::ZombieParrot, position)
            .effect(EffectInstance::new(EffectKind::Weakness, 100_000, 0)),
    )
}

/// Hand one golden apple to `target` from player 1000.
pub fn cure(app: &mut App, target: Entity) -> InteractionResult {
    let mut apple = ItemStack::new(ItemKind::GoldenApple, 1);
    interact(
        app.world_mut(),
        target,
        Interactor::new(ActorId(1000)),
        &mut apple,
    )
}

pub fn count_events(app: &App, kind: EventKind) -> usize {
    app.world()
        .resource::<pet_cemetery::ecs::EventLog>()
        .of_kind(kind)
        .count()
}

/// Hook with a scripted answer that records every call.
#[derive(Clone, Default)]
pub struct ScriptedHook {
    pub veto: bool,
    pub reschedule: Option<i32>,
    pub asked: Arc<AtomicU32>,
    pub converted: Arc<Mutex<Vec<(ActorSnapshot, ActorSnapshot)>>>,
}

impl ScriptedHook {
    pub fn allowing() -> Self {
        Self::default()
    }

    pub fn vetoing(reschedule: Option<i32>) -> Self {
        Self {
            veto: true,
            reschedule,
            ..Self::default()
        }
    }

    pub fn install(&self, app: &mut App) {
        app.insert_resource(ConversionHooks::new(self.clone()));
    }

    pub fn asked(&self) -> u32 {
        self.asked.load(Ordering::Relaxed)
    }

    pub fn conversions(&self) -> Vec<(ActorSnapshot, ActorSnapshot)> {
        self.converted.lock().unwrap().clone()
    }
}

impl ConversionHook for ScriptedHook {
    fn can_convert(
        &mut self,
        _actor: &ActorSnapshot,
        _into: ActorKind,
        reschedule: &mut dyn FnMut(i32),
    ) -> bool {
        self.asked.fetch_add(1, Ordering::Relaxed);
        if !self.veto {
            return true;
        }
        if let Some(ticks) = self.reschedule {
            reschedule(ticks);
        }
        false
    }

    fn on_converted(&mut self, source: &ActorSnapshot, target: &ActorSnapshot) {
        self.converted
            .lock()
            .unwrap()
            .push((source.clone(), target.clone()));
    }
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
