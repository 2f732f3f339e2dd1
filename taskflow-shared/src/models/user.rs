use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile of the signed-in student.
///
/// Owned by the session store on the client; mutated only through
/// profile-update calls to the API, never derived locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name shown in the header and on the profile page.
    pub name: String,

    /// The account's email address.
    pub email: String,

    /// University the student attends, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,

    /// Field of study, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,

    /// Year of study (1-based), if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_of_study: Option<u8>,

    /// Free-form biography, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Aggregate account statistics returned alongside the profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Tasks the account has created in total.
    pub tasks_created: u32,

    /// Tasks the account has completed in total.
    pub tasks_completed: u32,

    /// Total minutes of tracked study time.
    pub study_minutes: u32,

    /// When the account was created.
    pub member_since: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_profile() -> UserProfile {
        UserProfile {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.edu".to_string(),
            university: Some("Analytical U".to_string()),
            major: Some("Mathematics".to_string()),
            year_of_study: Some(2),
            bio: None,
        }
    }

    /// Profile fields serialize under the backend's camelCase names.
    #[test]
    fn profile_uses_camel_case_keys() {
        let json = serde_json::to_string(&sample_profile()).unwrap();
        assert!(json.contains("\"yearOfStudy\":2"));
        assert!(json.contains("\"university\""));
        // Absent optionals are omitted entirely, not sent as null.
        assert!(!json.contains("bio"));
    }

    /// A profile with only the mandatory fields deserializes cleanly.
    #[test]
    fn profile_minimal_body() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"name":"A","email":"a@b.com"}"#).unwrap();
        assert_eq!(profile.name, "A");
        assert_eq!(profile.email, "a@b.com");
        assert_eq!(profile.university, None);
        assert_eq!(profile.year_of_study, None);
    }

    #[test]
    fn profile_roundtrip() {
        let profile = sample_profile();
        let json = serde_json::to_string(&profile).unwrap();
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn stats_deserializes_from_backend_shape() {
        let stats: UserStats = serde_json::from_str(
            r#"{
                "tasksCreated": 42,
                "tasksCompleted": 30,
                "studyMinutes": 1260,
                "memberSince": "2025-09-01T08:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(stats.tasks_created, 42);
        assert_eq!(stats.tasks_completed, 30);
        assert_eq!(stats.member_since, Utc.with_ymd_and_hms(2025, 9, 1, 8, 0, 0).unwrap());
    }
}
