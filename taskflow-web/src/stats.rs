//! Client-side derivations over fetched data.
//!
//! The backend reports raw counts and daily series; everything shown as a
//! percentage, a "due today" badge or a chart bar is computed here so the
//! views stay declarative. All comparisons are date-only in UTC: a task due
//! earlier today is "due today", not overdue.

use chrono::{DateTime, Utc};
use shared::models::{DashboardSummary, Task, TaskStatus, TrendPoint};

/// Deadline pressure derived from the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounts {
    pub due_today: u32,
    pub overdue: u32,
}

/// Count open tasks due today and open tasks already past their date.
pub fn task_counts(tasks: &[Task], now: DateTime<Utc>) -> TaskCounts {
    let today = now.date_naive();
    let mut counts = TaskCounts {
        due_today: 0,
        overdue: 0,
    };
    for task in tasks {
        if task.status == TaskStatus::Completed {
            continue;
        }
        let Some(due) = task.due_date else { continue };
        let due = due.date_naive();
        if due < today {
            counts.overdue += 1;
        } else if due == today {
            counts.due_today += 1;
        }
    }
    counts
}

/// Completed share of `total`, rounded to the nearest whole percent.
pub fn completion_percent(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let scaled = u64::from(completed) * 100 + u64::from(total) / 2;
    (scaled / u64::from(total)) as u32
}

/// Render minutes as "45m", "3h" or "3h 20m".
pub fn minutes_label(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, _) => format!("{rest}m"),
        (_, 0) => format!("{hours}h"),
        _ => format!("{hours}h {rest}m"),
    }
}

/// Open tasks with a due date, soonest first, capped at `limit`.
pub fn upcoming(tasks: &[Task], limit: usize) -> Vec<&Task> {
    let mut open: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.status != TaskStatus::Completed && task.due_date.is_some())
        .collect();
    open.sort_by_key(|task| task.due_date);
    open.truncate(limit);
    open
}

/// A labelled series ready for the chart components.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<u32>,
}

impl ChartSeries {
    /// Largest value, floored at 1 so scaling never divides by zero.
    pub fn scale_max(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0).max(1)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn series(points: &[TrendPoint], value: impl Fn(&TrendPoint) -> u32) -> ChartSeries {
    ChartSeries {
        labels: points
            .iter()
            .map(|point| point.date.format("%b %d").to_string())
            .collect(),
        values: points.iter().map(value).collect(),
    }
}

/// Tasks completed per day.
pub fn completed_series(points: &[TrendPoint]) -> ChartSeries {
    series(points, |point| point.completed)
}

/// Minutes studied per day.
pub fn study_series(points: &[TrendPoint]) -> ChartSeries {
    series(points, |point| point.study_minutes)
}

/// Task status split for the breakdown donut.
pub fn status_breakdown(summary: &DashboardSummary) -> Vec<(&'static str, u32)> {
    vec![
        ("Completed", summary.completed_tasks),
        ("In progress", summary.in_progress_tasks),
        ("Pending", summary.pending_tasks),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::models::{Priority, TaskStatus};

    fn task(id: &str, status: TaskStatus, due: Option<DateTime<Utc>>) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {id}"),
            description: None,
            subject: None,
            status,
            priority: Priority::Medium,
            due_date: due,
            created_at: Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap(),
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn counts_split_overdue_from_due_today() {
        let tasks = vec![
            task("a", TaskStatus::Pending, Some(at(2026, 3, 9, 18))),
            task("b", TaskStatus::InProgress, Some(at(2026, 3, 10, 8))),
            task("c", TaskStatus::Pending, Some(at(2026, 3, 10, 23))),
            task("d", TaskStatus::Pending, Some(at(2026, 3, 12, 9))),
            task("e", TaskStatus::Pending, None),
        ];

        let counts = task_counts(&tasks, noon());
        assert_eq!(counts.overdue, 1);
        assert_eq!(counts.due_today, 2);
    }

    #[test]
    fn completed_tasks_never_count_as_overdue() {
        let tasks = vec![task("a", TaskStatus::Completed, Some(at(2026, 3, 1, 9)))];
        let counts = task_counts(&tasks, noon());
        assert_eq!(counts.overdue, 0);
        assert_eq!(counts.due_today, 0);
    }

    #[test]
    fn a_task_due_earlier_today_is_due_today_not_overdue() {
        let tasks = vec![task("a", TaskStatus::Pending, Some(at(2026, 3, 10, 8)))];
        let counts = task_counts(&tasks, noon());
        assert_eq!(counts.due_today, 1);
        assert_eq!(counts.overdue, 0);
    }

    #[test]
    fn percent_rounds_and_handles_empty() {
        assert_eq!(completion_percent(0, 0), 0);
        assert_eq!(completion_percent(1, 3), 33);
        assert_eq!(completion_percent(2, 3), 67);
        assert_eq!(completion_percent(5, 5), 100);
    }

    #[test]
    fn minutes_render_compactly() {
        assert_eq!(minutes_label(0), "0m");
        assert_eq!(minutes_label(45), "45m");
        assert_eq!(minutes_label(180), "3h");
        assert_eq!(minutes_label(200), "3h 20m");
    }

    #[test]
    fn upcoming_is_sorted_open_and_capped() {
        let tasks = vec![
            task("late", TaskStatus::Pending, Some(at(2026, 3, 20, 9))),
            task("done", TaskStatus::Completed, Some(at(2026, 3, 11, 9))),
            task("soon", TaskStatus::InProgress, Some(at(2026, 3, 11, 9))),
            task("mid", TaskStatus::Pending, Some(at(2026, 3, 15, 9))),
            task("undated", TaskStatus::Pending, None),
        ];

        let upcoming = upcoming(&tasks, 2);
        let ids: Vec<&str> = upcoming.iter().map(|task| task.id.as_str()).collect();
        assert_eq!(ids, vec!["soon", "mid"]);
    }

    #[test]
    fn series_carry_formatted_labels() {
        let points = vec![
            TrendPoint {
                date: chrono::NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
                completed: 2,
                created: 3,
                study_minutes: 60,
            },
            TrendPoint {
                date: chrono::NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
                completed: 4,
                created: 1,
                study_minutes: 30,
            },
        ];

        let completed = completed_series(&points);
        assert_eq!(completed.labels, vec!["Mar 09", "Mar 10"]);
        assert_eq!(completed.values, vec![2, 4]);
        assert_eq!(completed.scale_max(), 4);

        let study = study_series(&points);
        assert_eq!(study.values, vec![60, 30]);
        assert!(!study.is_empty());
    }

    #[test]
    fn empty_series_still_scales() {
        assert_eq!(ChartSeries::default().scale_max(), 1);
        assert!(ChartSeries::default().is_empty());
    }

    #[test]
    fn breakdown_orders_statuses_for_the_donut() {
        let summary = DashboardSummary {
            total_tasks: 10,
            completed_tasks: 5,
            in_progress_tasks: 3,
            pending_tasks: 2,
            overdue_tasks: 1,
            study_minutes: 120,
            streak_days: 4,
        };

        assert_eq!(
            status_breakdown(&summary),
            vec![("Completed", 5), ("In progress", 3), ("Pending", 2)]
        );
    }
}
