use crate::models::UserRecord;
use chrono::{TimeZone, Utc};

#[allow(clippy::too_many_arguments)]
fn demo_user(
    id: &str,
    display_name: &str,
    bio: &str,
    taught: &[&str],
    wanted: &[&str],
    is_online: bool,
    rating: f64,
    last_active_day: u32,
) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        display_name: display_name.to_string(),
        bio: bio.to_string(),
        taught: taught.iter().collect(),
        wanted: wanted.iter().collect(),
        is_online,
        rating,
        last_active: Utc
            .with_ymd_and_hms(2024, 3, last_active_day, 9, 0, 0)
            .single()
            .unwrap_or_default(),
    }
}

/// Demo directory used by the in-memory store
pub fn demo_users() -> Vec<UserRecord> {
    vec![
        demo_user(
            "1",
            "Martin",
            "Native English speaker with 5 years of teaching experience. Love helping people improve their communication skills!",
            &["English", "Writing", "Communication"],
            &["Guitar", "Music Theory", "Piano"],
            true,
            4.8,
            12,
        ),
        demo_user(
            "2",
            "Maria",
            "Professional music teacher with 10+ years experience. Specializing in beginner to intermediate guitar and piano.",
            &["Guitar", "Piano", "Music Theory"],
            &["English", "Public Speaking", "Writing"],
            true,
            4.9,
            14,
        ),
        demo_user(
            "3",
            "Alex",
            "Full-stack developer passionate about teaching coding. Available evenings and weekends.",
            &["Programming", "React", "JavaScript", "Web Development"],
            &["Design", "Photography", "Video Editing"],
            false,
            4.6,
            2,
        ),
        demo_user(
            "4",
            "Sophie",
            "French native speaker and professional chef. Would love to learn tech skills in exchange for language and cooking lessons!",
            &["French", "Cooking", "Baking"],
            &["Programming", "Web Development", "Data Science"],
            true,
            4.7,
            10,
        ),
        demo_user(
            "5",
            "David",
            "Creative professional with expertise in visual content creation. Looking to expand into digital marketing.",
            &["Photography", "Video Editing", "Photoshop"],
            &["Programming", "Marketing"],
            true,
            4.5,
            11,
        ),
        demo_user(
            "6",
            "Sam",
            "Looking to exchange knowledge and learn new skills!",
            &["JavaScript", "Web Development"],
            &["Guitar", "Spanish"],
            false,
            0.0,
            1,
        ),
    ]
}
