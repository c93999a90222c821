use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Change notifications pushed to subscribed clients whenever a puzzle
/// document is saved or deleted. The WebSocket connection is the
/// subscription; closing it unsubscribes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResourceEvent {
    CrosswordSaved { id: Uuid, tema: String },
    CrosswordDeleted { id: Uuid },
    WordSearchSaved { id: Uuid, tema: String },
    WordSearchDeleted { id: Uuid },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_serialize_with_snake_case_tags() {
        let id = Uuid::nil();
        let event = ResourceEvent::CrosswordSaved {
            id,
            tema: "Astronomía".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"crossword_saved\""));

        let back: ResourceEvent = serde_json::from_str(&json).unwrap();
        match back {
            ResourceEvent::CrosswordSaved { id: got, tema } => {
                assert_eq!(got, id);
                assert_eq!(tema, "Astronomía");
            }
            other => panic!("round trip changed the event: {other:?}"),
        }
    }
}
