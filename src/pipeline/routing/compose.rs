use serde::Serialize;
use serde_json::Value;

use super::types::{Intent, IntentKind};
use crate::models::Facility;
use crate::pipeline::messages::ReplyTemplates;

/// Final, transport-neutral reply for one message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedMessage {
    #[serde(rename = "type")]
    pub kind: IntentKind,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facilities: Option<Vec<Facility>>,
}

pub struct ResponseComposer;

impl ResponseComposer {
    /// Append the facility block when the intent carries facilities.
    pub fn compose(intent: Intent) -> ProcessedMessage {
        let Intent {
            kind,
            mut answer,
            extra,
            facilities,
        } = intent;

        let facilities = if facilities.is_empty() {
            None
        } else {
            answer.push_str(&ReplyTemplates::facility_block(&facilities));
            Some(facilities)
        };

        ProcessedMessage {
            kind,
            answer,
            extra,
            facilities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn no_facilities_leaves_answer_untouched() {
        let reply = ResponseComposer::compose(Intent::new(IntentKind::Thanks, "ok"));
        assert_eq!(reply.answer, "ok");
        assert!(reply.facilities.is_none());
    }

    #[test]
    fn facilities_are_appended_in_order() {
        let facilities = vec![
            Facility::new("A Hospital", "Road 1", "111", "https://a", &["emergency"]),
            Facility::new("B Hospital", "Road 2", "222", "https://b", &[]),
        ];
        let intent = Intent::new(IntentKind::KnowledgeBaseAnswer, "Answer")
            .with_facilities(facilities.clone());
        let reply = ResponseComposer::compose(intent);

        assert!(reply.answer.starts_with("Answer\n\n🏥 *Nearby hospitals in Kochi"));
        let a = reply.answer.find("• A Hospital — Road 1 (☎ 111)").unwrap();
        let b = reply.answer.find("• B Hospital — Road 2 (☎ 222)").unwrap();
        assert!(a < b);
        assert_eq!(reply.facilities, Some(facilities));
    }

    #[test]
    fn serializes_with_wire_names() {
        let intent = Intent::new(IntentKind::Vaccination, "schedule")
            .with_extra(json!({"infant": []}));
        let value = serde_json::to_value(ResponseComposer::compose(intent)).unwrap();
        assert_eq!(
            value,
            json!({"type": "vaccination", "answer": "schedule", "extra": {"infant": []}})
        );

        let intent = Intent::new(IntentKind::KnowledgeBaseAnswer, "x");
        let value = serde_json::to_value(ResponseComposer::compose(intent)).unwrap();
        assert_eq!(value["type"], "db");
        assert!(value.get("facilities").is_none());
    }
}
