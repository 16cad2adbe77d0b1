use super::*;

// =============================================================================
// Admin wire format
// =============================================================================

#[test]
fn admin_deserializes_mongo_id() {
    let admin: Admin = serde_json::from_str(r#"{"_id": "1", "email": "admin@club.org"}"#).unwrap();
    assert_eq!(admin.id.as_deref(), Some("1"));
    assert_eq!(admin.email, "admin@club.org");
}

#[test]
fn admin_drops_password_hash_from_api_documents() {
    let json = r#"{"_id": "1", "email": "admin@club.org", "password": "$2b$10$abc"}"#;
    let admin: Admin = serde_json::from_str(json).unwrap();
    let back = serde_json::to_string(&admin).unwrap();
    assert!(!back.contains("password"));
}

#[test]
fn admin_without_id_skips_field_on_serialize() {
    let admin = Admin { id: None, email: "admin@club.org".into() };
    let json = serde_json::to_string(&admin).unwrap();
    assert!(!json.contains("_id"));
}

// =============================================================================
// Session
// =============================================================================

#[test]
fn session_round_trips_token_and_admin_together() {
    let session = Session {
        token: "tok123".into(),
        admin: Admin { id: Some("1".into()), email: "admin@club.org".into() },
    };
    let json = serde_json::to_string(&session).unwrap();
    let restored: Session = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, session);
}

// =============================================================================
// Batch
// =============================================================================

#[test]
fn batch_serializes_as_cohort_string() {
    assert_eq!(serde_json::to_string(&Batch::Y2226).unwrap(), r#""22-26""#);
    assert_eq!(serde_json::to_string(&Batch::Y2428).unwrap(), r#""24-28""#);
}

#[test]
fn batch_deserializes_from_cohort_string() {
    let batch: Batch = serde_json::from_str(r#""23-27""#).unwrap();
    assert_eq!(batch, Batch::Y2327);
}

#[test]
fn batch_rejects_unknown_cohort() {
    let result: Result<Batch, _> = serde_json::from_str(r#""21-25""#);
    assert!(result.is_err());
}

// =============================================================================
// User wire format
// =============================================================================

fn sample_user() -> User {
    User {
        id: None,
        user_id: None,
        name: "Asha".into(),
        email: "asha@club.org".into(),
        password: None,
        branch: "CSE".into(),
        batch: Batch::Y2226,
        regno: 22001,
        mobileno: 9_876_543_210,
        is_verified: false,
    }
}

#[test]
fn user_omits_password_when_unset() {
    let json = serde_json::to_string(&sample_user()).unwrap();
    assert!(!json.contains("password"));
}

#[test]
fn user_uses_lowercase_verified_flag_on_the_wire() {
    let json = serde_json::to_string(&sample_user()).unwrap();
    assert!(json.contains(r#""isverified":false"#));
    assert!(!json.contains("is_verified"));
}

#[test]
fn user_deserializes_server_assigned_ids() {
    let json = r#"{
        "_id": "64af", "userId": "U-9", "name": "Asha", "email": "asha@club.org",
        "branch": "CSE", "batch": "22-26", "regno": 22001, "mobileno": 9876543210,
        "isverified": true
    }"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.id.as_deref(), Some("64af"));
    assert_eq!(user.user_id.as_deref(), Some("U-9"));
    assert!(user.is_verified);
}

// =============================================================================
// Event wire format
// =============================================================================

#[test]
fn event_uses_camel_case_flags_on_the_wire() {
    let event = Event {
        id: None,
        event_id: None,
        name: "Hackathon".into(),
        image_link: "https://img.example/h.png".into(),
        date: "2026-03-14".into(),
        pdf_link: "https://img.example/h.pdf".into(),
        is_open: true,
        is_result_announced: false,
        winners: None,
        prize: "5000".into(),
        location: "Main hall".into(),
        description: "Annual 24h hackathon".into(),
        participants_count: None,
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains(r#""isOpen":true"#));
    assert!(json.contains(r#""isResultAnnounced":false"#));
    assert!(json.contains(r#""imagelink""#));
    assert!(!json.contains("winners"));
    assert!(!json.contains("participantsCount"));
}

#[test]
fn event_deserializes_winners_and_count_when_present() {
    let json = r#"{
        "_id": "e1", "name": "Hackathon", "imagelink": "i", "date": "d", "pdflink": "p",
        "isOpen": false, "isResultAnnounced": true, "winners": ["U-1", "U-2"],
        "prize": "5000", "location": "hall", "description": "desc",
        "participantsCount": 42
    }"#;
    let event: Event = serde_json::from_str(json).unwrap();
    assert_eq!(event.winners.as_deref(), Some(["U-1".to_string(), "U-2".to_string()].as_slice()));
    assert_eq!(event.participants_count, Some(42));
}

// =============================================================================
// Report payloads
// =============================================================================

#[test]
fn stats_report_parses_dashboard_payload() {
    let json = r#"{
        "users": {"total": 120, "verified": 100, "unverified": 20},
        "events": {"total": 12, "active": 3, "completed": 9, "withResults": 7},
        "notifications": {"total": 31}
    }"#;
    let stats: StatsReport = serde_json::from_str(json).unwrap();
    assert_eq!(stats.users.unverified, 20);
    assert_eq!(stats.events.with_results, 7);
    assert_eq!(stats.notifications.total, 31);
}

#[test]
fn branch_count_tolerates_missing_group_key() {
    let rows: Vec<BranchCount> =
        serde_json::from_str(r#"[{"branch": "CSE", "count": 80}, {"count": 5}]"#).unwrap();
    assert_eq!(rows[0].branch.as_deref(), Some("CSE"));
    assert_eq!(rows[1].branch, None);
    assert_eq!(rows[1].count, 5);
}

#[test]
fn trend_point_parses_month_series() {
    let points: Vec<TrendPoint> =
        serde_json::from_str(r#"[{"month": 1, "label": "Jan", "count": 4}]"#).unwrap();
    assert_eq!(points[0].label, "Jan");
    assert_eq!(points[0].count, 4);
}
