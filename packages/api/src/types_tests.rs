#![cfg(test)]

use crate::types::{share_path, Recording};
use time::macros::datetime;
use uuid::Uuid;

fn sample() -> Recording {
    Recording {
        id: Uuid::from_u128(0x5eed),
        owner_user_id: Uuid::from_u128(0x1),
        title: "Sprint demo".to_string(),
        created_at: datetime!(2024-01-05 14:03 UTC),
        thumbnail_url: None,
    }
}

#[test]
fn recording_share_path_uses_id() {
    assert_eq!(
        sample().share_path(),
        "/share/00000000-0000-0000-0000-000000005eed"
    );
}

#[test]
fn share_path_for_raw_id() {
    assert_eq!(share_path("abc"), "/share/abc");
}

#[test]
fn recording_survives_json() {
    let json = serde_json::to_string(&sample()).unwrap();
    let back: Recording = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sample());
}
