//! Seeded resource dataset
//!
//! Built-in mock records the dashboard view loads at startup.

use crate::auth::rbac::Role;
use crate::core::models::{Resource, ResourceMeta, ResourceStatus};
use chrono::{DateTime, TimeZone, Utc};

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    // Literal timestamps, always valid.
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

/// Build the seeded resource collection
pub fn seed_resources() -> Vec<Resource> {
    vec![
        Resource {
            id: "1".to_string(),
            name: "Production Server Config".to_string(),
            description: "Critical settings for the production environment.".to_string(),
            min_role_required: Role::Admin,
            meta: ResourceMeta {
                status: ResourceStatus::Active,
                category: "Infrastructure".to_string(),
                last_updated_at: ts(2026, 2, 10, 12, 0, 0),
            },
        },
        Resource {
            id: "2".to_string(),
            name: "Content Pipeline".to_string(),
            description: "Steps required to publish new content.".to_string(),
            min_role_required: Role::Editor,
            meta: ResourceMeta {
                status: ResourceStatus::Active,
                category: "Workflow".to_string(),
                last_updated_at: ts(2026, 2, 11, 8, 30, 0),
            },
        },
        Resource {
            id: "3".to_string(),
            name: "Public Documentation".to_string(),
            description: "Resources visible to all authenticated users.".to_string(),
            min_role_required: Role::Viewer,
            meta: ResourceMeta {
                status: ResourceStatus::Active,
                category: "Docs".to_string(),
                last_updated_at: ts(2026, 2, 9, 17, 45, 0),
            },
        },
        Resource {
            id: "4".to_string(),
            name: "Legacy Archive".to_string(),
            description: "Archived resources kept for legal reasons.".to_string(),
            min_role_required: Role::Admin,
            meta: ResourceMeta {
                status: ResourceStatus::Archived,
                category: "Archive".to_string(),
                last_updated_at: ts(2025, 12, 31, 23, 59, 59),
            },
        },
    ]
}
