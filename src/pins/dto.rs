use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo::Pin;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePinRequest {
    pub user_email: String,
    pub title: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditPinRequest {
    pub pin_id: Uuid,
    pub title: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    pub user_email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePinRequest {
    pub user_email: String,
}

#[derive(Debug, Serialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinListItem {
    pub id: Uuid,
    pub user_email: String,
    pub title: String,
    pub description: String,
    pub location: Location,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl From<Pin> for PinListItem {
    fn from(p: Pin) -> Self {
        Self {
            id: p.id,
            user_email: p.user_email,
            title: p.title,
            description: p.description,
            location: Location {
                lat: p.lat,
                lng: p.lng,
            },
            timestamp: p.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PinCreated {
    pub id: Uuid,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct PinMessage {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_accepts_camel_case() {
        let body: CreatePinRequest = serde_json::from_str(
            r#"{"userEmail":"a@x.com","title":"T1","description":"d","lat":1.0,"lng":2.0}"#,
        )
        .unwrap();
        assert_eq!(body.user_email, "a@x.com");
        assert_eq!(body.lat, 1.0);
        assert_eq!(body.lng, 2.0);
    }

    #[test]
    fn test_create_request_rejects_missing_fields() {
        let result =
            serde_json::from_str::<CreatePinRequest>(r#"{"userEmail":"a@x.com","title":"T1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_edit_request_accepts_camel_case() {
        let body: EditPinRequest = serde_json::from_str(
            r#"{"pinId":"6f61a1c4-6a4c-43f9-9e5b-0d9c7c1d2a3b","title":"T2","description":"d","lat":1.0,"lng":2.0,"userEmail":"a@x.com"}"#,
        )
        .unwrap();
        assert_eq!(
            body.pin_id.to_string(),
            "6f61a1c4-6a4c-43f9-9e5b-0d9c7c1d2a3b"
        );
        assert_eq!(body.user_email, "a@x.com");
    }

    #[test]
    fn test_pin_list_item_wire_shape() {
        let item = PinListItem::from(Pin {
            id: Uuid::new_v4(),
            user_email: "a@x.com".into(),
            title: "T1".into(),
            description: "d".into(),
            lat: 1.0,
            lng: 2.0,
            created_at: time::macros::datetime!(2024-05-01 12:00:00 UTC),
        });

        let json: serde_json::Value = serde_json::to_value(&item).unwrap();
        assert_eq!(json["userEmail"], "a@x.com");
        assert_eq!(json["location"]["lat"], 1.0);
        assert_eq!(json["location"]["lng"], 2.0);
        assert_eq!(json["timestamp"], "2024-05-01T12:00:00Z");
        assert!(json["id"].is_string());
    }
}
