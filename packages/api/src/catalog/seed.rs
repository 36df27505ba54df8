use super::RecordingCatalog;
use crate::types::Recording;
use anyhow::{Context, Result};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// Owner of the demo recordings created in local mode.
pub const DEMO_USER_ID: Uuid = Uuid::from_u128(0x5c2e_e111_7a00_4d3c_9f00_0000_0000_0001);

/// Fill an empty catalog with recordings spread over every label bucket,
/// so a local run shows "Just now" through an absolute date.
pub async fn seed_catalog(catalog: &dyn RecordingCatalog, now: OffsetDateTime) -> Result<usize> {
    tracing::info!("Starting catalog seeding...");

    let recordings = [
        ("Quick bug repro", Duration::seconds(20)),
        ("Standup notes", Duration::minutes(1)),
        ("Onboarding walkthrough", Duration::minutes(42)),
        ("Design review", Duration::minutes(75)),
        ("Release checklist", Duration::hours(5)),
        ("Customer call recap", Duration::hours(30)),
        ("Sprint demo", Duration::days(4)),
        ("Quarterly planning", Duration::days(40)),
    ];

    for (n, (title, age)) in recordings.iter().enumerate() {
        catalog
            .insert(Recording {
                id: Uuid::new_v4(),
                owner_user_id: DEMO_USER_ID,
                title: title.to_string(),
                created_at: now - *age,
                thumbnail_url: None,
            })
            .await
            .with_context(|| format!("Failed to seed recording {n}"))?;
    }

    tracing::info!("Seeded {} recordings", recordings.len());
    Ok(recordings.len())
}
