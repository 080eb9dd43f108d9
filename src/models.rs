//! Entities and read-model projections.
//!
//! The site's tables use quoted PascalCase identifiers and the frontend
//! expects PascalCase JSON fields, so both serde and sqlx rename to
//! PascalCase. Envelope keys stay camelCase (see `response`).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Service: natural key is `Name`. Renaming a service is unsupported.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Service {
    pub name: String,
    pub label: String,
    pub target: String,
    #[serde(rename = "Type")]
    #[sqlx(rename = "Type")]
    pub type_: String,
}

/// Topic: natural key is `Name`; update mutates only label and description.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Topic {
    pub name: String,
    pub label: String,
    pub description: String,
}

/// Full staff record. `Password` is stored and compared in clear text,
/// a documented security gap of the original system (see DESIGN.md).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Staff {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub title: String,
    pub photo: String,
    pub is_active: bool,
    pub password: String,
}

/// Staff projection without the password, returned by login.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct StaffView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub title: String,
    pub photo: String,
    pub is_active: bool,
}

/// News row with the left-joined service label. `ServiceLabel` is null
/// when `ServiceName` matches no service.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct NewsView {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub notice: String,
    pub link: Option<String>,
    /// Stored as text and ordered lexicographically; only sorts correctly
    /// while all rows share one fixed-width format.
    pub create_time: String,
    pub update_time: Option<String>,
    pub title_name: String,
    pub service_name: String,
    pub status: String,
    pub img: Option<String>,
    pub service_label: Option<String>,
}

/// One flattened (service, topic) pairing from the inner-join chain.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct ServiceTopicView {
    pub service_name: String,
    pub service_label: String,
    pub target: String,
    #[serde(rename = "Type")]
    #[sqlx(rename = "Type")]
    pub type_: String,
    pub topic_name: String,
    pub topic_label: String,
    pub topic_description: String,
}

/// Profile plus staff display attributes when the 1:1 staff row exists.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct ProfileView {
    pub id: Uuid,
    pub certification: Option<String>,
    pub education: Option<String>,
    pub experience: String,
    pub description: String,
    pub staff_name: Option<String>,
    pub staff_email: Option<String>,
    pub staff_title: Option<String>,
    pub staff_photo: Option<String>,
}

/// Visit counter; holds at most one logical row in practice.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Welcome {
    pub id: i32,
    pub count: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteTopicRequest {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_round_trips_pascal_case() {
        let topic: Topic = serde_json::from_str(
            r#"{"Name":"anxiety","Label":"Anxiety","Description":"..."}"#,
        )
        .unwrap();
        assert_eq!(topic.name, "anxiety");
        let json = serde_json::to_value(&topic).unwrap();
        assert_eq!(json["Name"], "anxiety");
        assert_eq!(json["Label"], "Anxiety");
    }

    #[test]
    fn service_type_field_serializes_as_type() {
        let svc = Service {
            name: "family".into(),
            label: "Family".into(),
            target: "adults".into(),
            type_: "individual".into(),
        };
        let json = serde_json::to_value(&svc).unwrap();
        assert_eq!(json["Type"], "individual");
        assert!(json.get("Type_").is_none());
    }

    #[test]
    fn login_request_uses_pascal_case_keys() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"Email":"a@b.c","Password":"pw"}"#).unwrap();
        assert_eq!(req.email, "a@b.c");
        assert_eq!(req.password, "pw");
    }

    #[test]
    fn news_view_absent_label_serializes_null() {
        let news = NewsView {
            id: Uuid::nil(),
            title: "t".into(),
            content: "c".into(),
            notice: "n".into(),
            link: None,
            create_time: "2024-01-01 00:00:00".into(),
            update_time: None,
            title_name: "t".into(),
            service_name: "gone".into(),
            status: "published".into(),
            img: None,
            service_label: None,
        };
        let json = serde_json::to_value(&news).unwrap();
        assert!(json["ServiceLabel"].is_null());
        assert_eq!(json["CreateTime"], "2024-01-01 00:00:00");
    }

    #[test]
    fn staff_view_has_no_password_field() {
        let view = StaffView {
            id: Uuid::nil(),
            name: "n".into(),
            email: "e".into(),
            title: "counselor".into(),
            photo: "p".into(),
            is_active: true,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("Password").is_none());
        assert_eq!(json["IsActive"], true);
    }
}
