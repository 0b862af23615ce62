use bevy_ecs::resource::Resource;

use crate::model::{ActorId, Event, EventKind};

/// Accumulates the audit trail of conversion and lifecycle events.
#[derive(Resource, Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<Event>,
    next_id: u64,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event and return its id.
    pub fn record(
        &mut self,
        kind: EventKind,
        tick: u64,
        actor: ActorId,
        description: impl Into<String>,
        data: serde_json::Value,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.events.push(Event {
            id,
            kind,
            tick,
            actor,
            description: description.into(),
            data,
        });
        id
    }

    pub fn of_kind(&self, kind: EventKind) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.kind == kind)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
