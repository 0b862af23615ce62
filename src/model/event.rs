use serde::{Deserialize, Serialize};

use super::actor::ActorId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EventKind {
    ConversionStarted,
    ConversionRescheduled,
    ConversionStalled,
    Converted,
    OffspringBorn,
    Died,
}

string_enum!(EventKind {
    ConversionStarted => "conversion_started",
    ConversionRescheduled => "conversion_rescheduled",
    ConversionStalled => "conversion_stalled",
    Converted => "converted",
    OffspringBorn => "offspring_born",
    Died => "died",
});

/// One entry in the simulation's audit trail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: u64,
    pub kind: EventKind,
    pub tick: u64,
    pub actor: ActorId,
    pub description: String,
    /// Structured details (durations, initiators, offspring ids).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_expected_shape() {
        let event = Event {
            id: 3,
            kind: EventKind::ConversionStarted,
            tick: 120,
            actor: ActorId(9),
            description: "actor#9 begins recovering".to_string(),
            data: serde_json::Value::Null,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["kind"], "conversion_started");
        assert_eq!(json["tick"], 120);
        assert_eq!(json["actor"], 9);
        // Null data is omitted
        assert!(json.get("data").is_none());
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = EventKind::try_from("resurrected".to_string()).unwrap_err();
        assert!(err.contains("EventKind"));
    }

    #[test]
    fn kind_round_trips_through_string() {
        let s: String = EventKind::OffspringBorn.into();
        assert_eq!(s, "offspring_born");
        assert_eq!(EventKind::try_from(s).unwrap(), EventKind::OffspringBorn);
    }
}
