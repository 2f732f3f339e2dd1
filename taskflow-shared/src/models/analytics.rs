use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline numbers for the dashboard, scoped to the requested period.
///
/// The server sends raw counts; percentages and other display-ready values
/// are derived client-side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Tasks existing in the period.
    pub total_tasks: u32,
    /// Tasks completed in the period.
    pub completed_tasks: u32,
    /// Tasks currently in progress.
    pub in_progress_tasks: u32,
    /// Tasks not yet started.
    pub pending_tasks: u32,
    /// Tasks whose deadline has passed without completion.
    pub overdue_tasks: u32,
    /// Minutes of tracked study time in the period.
    pub study_minutes: u32,
    /// Consecutive days with at least one completed task.
    pub streak_days: u32,
}

/// One day of activity in a trend series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// Calendar day the numbers cover.
    pub date: NaiveDate,
    /// Tasks completed that day.
    pub completed: u32,
    /// Tasks created that day.
    pub created: u32,
    /// Minutes studied that day.
    pub study_minutes: u32,
}

/// `GET /analytics/trends?period=` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrendsResponse {
    /// Echo of the requested period (`week`, `month`).
    pub period: String,
    /// Daily points, oldest first.
    pub points: Vec<TrendPoint>,
}

/// Tone of an insight, used to pick its badge styling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Positive,
    Warning,
    Suggestion,
}

/// A short generated observation about the student's recent activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Insight {
    /// Server-assigned identifier.
    pub id: String,
    /// Headline of the observation.
    pub title: String,
    /// One or two sentences of detail.
    pub message: String,
    /// Tone bucket.
    pub kind: InsightKind,
}

/// `GET /analytics/insights` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InsightsResponse {
    /// Insights, most relevant first.
    pub insights: Vec<Insight>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_deserializes_from_backend_shape() {
        let summary: DashboardSummary = serde_json::from_str(
            r#"{
                "totalTasks": 12,
                "completedTasks": 7,
                "inProgressTasks": 2,
                "pendingTasks": 3,
                "overdueTasks": 1,
                "studyMinutes": 340,
                "streakDays": 4
            }"#,
        )
        .unwrap();
        assert_eq!(summary.total_tasks, 12);
        assert_eq!(summary.completed_tasks, 7);
        assert_eq!(summary.streak_days, 4);
    }

    #[test]
    fn trend_point_date_is_plain_calendar_day() {
        let point: TrendPoint = serde_json::from_str(
            r#"{"date":"2026-08-20","completed":3,"created":1,"studyMinutes":95}"#,
        )
        .unwrap();
        assert_eq!(point.date, NaiveDate::from_ymd_opt(2026, 8, 20).unwrap());
        assert_eq!(point.completed, 3);
    }

    #[test]
    fn trends_response_keeps_point_order() {
        let trends: TrendsResponse = serde_json::from_str(
            r#"{
                "period": "week",
                "points": [
                    {"date":"2026-08-18","completed":1,"created":2,"studyMinutes":60},
                    {"date":"2026-08-19","completed":4,"created":0,"studyMinutes":120}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(trends.period, "week");
        assert_eq!(trends.points.len(), 2);
        assert!(trends.points[0].date < trends.points[1].date);
    }

    #[test]
    fn insight_kind_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&InsightKind::Suggestion).unwrap(), r#""suggestion""#);
    }

    #[test]
    fn insights_response_roundtrip() {
        let body = InsightsResponse {
            insights: vec![Insight {
                id: "i1".to_string(),
                title: "Strong week".to_string(),
                message: "You completed more tasks than last week.".to_string(),
                kind: InsightKind::Positive,
            }],
        };
        let json = serde_json::to_string(&body).unwrap();
        let back: InsightsResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, body);
    }
}
