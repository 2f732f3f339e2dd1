use crate::{
    api::{ApiClient, ApiError, Period},
    auth_flow,
    components::{FetchError, Loading, StatCard},
    models::{AppState, FetchState},
    stats,
};
use futures::join;
use shared::models::{DashboardSummary, Insight, InsightKind, InsightsResponse, Task};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

/// Everything the dashboard needs before it renders anything.
#[derive(Debug, Clone, PartialEq)]
struct DashboardData {
    summary: DashboardSummary,
    tasks: Vec<Task>,
    insights: Vec<Insight>,
}

/// All-or-nothing merge of the three dashboard calls.
///
/// The first failure wins and becomes the whole view's error; sibling
/// successes are discarded so a partially-populated dashboard can never
/// render.
fn join_dashboard(
    summary: Result<DashboardSummary, ApiError>,
    tasks: Result<Vec<Task>, ApiError>,
    insights: Result<InsightsResponse, ApiError>,
) -> Result<DashboardData, ApiError> {
    Ok(DashboardData {
        summary: summary?,
        tasks: tasks?,
        insights: insights?.insights,
    })
}

/// Landing view: headline stats, upcoming deadlines and generated insights.
///
/// The three backing calls run concurrently and the page renders only once
/// all of them landed; the first failure wins and puts the whole view into
/// its retry state, so a half-populated dashboard is never shown.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let state = use_state(|| FetchState::<DashboardData>::Loading);
    let attempt = use_state(|| 0u32);
    let navigator = use_navigator();
    let (_, dispatch) = use_store::<AppState>();

    {
        let state = state.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        use_effect_with(*attempt, move |_| {
            state.set(FetchState::Loading);
            spawn_local(async move {
                let client = ApiClient::shared();
                let (summary, tasks, insights) =
                    join!(client.dashboard(Period::Week), client.tasks(), client.insights());
                match join_dashboard(summary, tasks, insights) {
                    Ok(data) => state.set(FetchState::Ready(data)),
                    Err(err) if err.is_unauthorized() => {
                        auth_flow::expire_to_login(&dispatch, navigator.as_ref());
                    }
                    Err(err) => state.set(FetchState::Failed(err)),
                }
            });
            || ()
        });
    }

    let on_retry = {
        let attempt = attempt.clone();
        Callback::from(move |()| attempt.set(*attempt + 1))
    };

    match &*state {
        FetchState::Loading => html! { <Loading /> },
        FetchState::Failed(err) => html! {
            <FetchError message={err.to_string()} on_retry={on_retry} />
        },
        FetchState::Ready(data) => render_dashboard(data),
    }
}

fn render_dashboard(data: &DashboardData) -> Html {
    let summary = &data.summary;
    let counts = stats::task_counts(&data.tasks, chrono::Utc::now());
    let percent = stats::completion_percent(summary.completed_tasks, summary.total_tasks);

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{"Dashboard"}</h1>

            <div class="stats shadow w-full">
                <StatCard
                    title="Tasks"
                    value={summary.total_tasks.to_string()}
                    detail={format!("{} completed", summary.completed_tasks)}
                    icon={IconId::HeroiconsOutlineClipboardDocumentList}
                />
                <StatCard
                    title="Completion"
                    value={format!("{percent}%")}
                    detail={format!("{} in progress", summary.in_progress_tasks)}
                    icon={IconId::HeroiconsOutlineCheckCircle}
                    accent="text-success"
                />
                <StatCard
                    title="Due today"
                    value={counts.due_today.to_string()}
                    detail={format!("{} overdue", counts.overdue)}
                    icon={IconId::HeroiconsOutlineClock}
                    accent={if counts.overdue > 0 { "text-error" } else { "text-secondary" }}
                />
                <StatCard
                    title="Study time"
                    value={stats::minutes_label(summary.study_minutes)}
                    detail={format!("{}-day streak", summary.streak_days)}
                    icon={IconId::HeroiconsOutlineAcademicCap}
                    accent="text-info"
                />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                { render_upcoming(&data.tasks) }
                { render_insights(&data.insights) }
            </div>
        </div>
    }
}

fn render_upcoming(tasks: &[Task]) -> Html {
    let upcoming = stats::upcoming(tasks, 5);

    let body = if upcoming.is_empty() {
        html! { <p class="text-sm text-base-content/60">{"No open tasks with a deadline."}</p> }
    } else {
        html! {
            <ul class="space-y-2">
                { for upcoming.iter().map(|task| html! {
                    <li key={task.id.clone()} class="flex items-center gap-2">
                        <span class={classes!("badge", "badge-sm", priority_class(task))}>
                            { task.priority.label() }
                        </span>
                        <span class="flex-grow truncate">{ task.title.clone() }</span>
                        <span class="text-xs text-base-content/60 whitespace-nowrap">
                            {
                                task.due_date
                                    .map(|due| due.format("%b %d").to_string())
                                    .unwrap_or_default()
                            }
                        </span>
                    </li>
                }) }
            </ul>
        }
    };

    html! {
        <div class="card bg-base-200 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">{"Upcoming deadlines"}</h2>
                { body }
            </div>
        </div>
    }
}

fn priority_class(task: &Task) -> &'static str {
    match task.priority {
        shared::models::Priority::High => "badge-error",
        shared::models::Priority::Medium => "badge-warning",
        shared::models::Priority::Low => "badge-ghost",
    }
}

fn render_insights(insights: &[Insight]) -> Html {
    let body = if insights.is_empty() {
        html! { <p class="text-sm text-base-content/60">{"Nothing to report yet. Keep going!"}</p> }
    } else {
        html! {
            <ul class="space-y-3">
                { for insights.iter().map(|insight| html! {
                    <li key={insight.id.clone()}>
                        <div class="flex items-center gap-2">
                            <span class={classes!("badge", "badge-sm", insight_class(insight.kind))}>
                                { insight_label(insight.kind) }
                            </span>
                            <span class="font-medium">{ insight.title.clone() }</span>
                        </div>
                        <p class="text-sm text-base-content/70 mt-1">{ insight.message.clone() }</p>
                    </li>
                }) }
            </ul>
        }
    };

    html! {
        <div class="card bg-base-200 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">{"Insights"}</h2>
                { body }
            </div>
        </div>
    }
}

fn insight_class(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Positive => "badge-success",
        InsightKind::Warning => "badge-warning",
        InsightKind::Suggestion => "badge-info",
    }
}

fn insight_label(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Positive => "Win",
        InsightKind::Warning => "Heads up",
        InsightKind::Suggestion => "Tip",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> DashboardSummary {
        DashboardSummary {
            total_tasks: 8,
            completed_tasks: 5,
            in_progress_tasks: 2,
            pending_tasks: 1,
            overdue_tasks: 0,
            study_minutes: 240,
            streak_days: 3,
        }
    }

    fn insights() -> InsightsResponse {
        InsightsResponse { insights: vec![] }
    }

    fn failure() -> ApiError {
        ApiError::Http {
            status: 500,
            message: "Something broke".to_string(),
        }
    }

    #[test]
    fn all_successes_merge_into_dashboard_data() {
        let data = join_dashboard(Ok(summary()), Ok(vec![]), Ok(insights())).unwrap();
        assert_eq!(data.summary, summary());
        assert!(data.tasks.is_empty());
        assert!(data.insights.is_empty());
    }

    /// One failed call fails the whole load, whichever call it is; the
    /// successful siblings never produce a partial dashboard.
    #[test]
    fn a_failed_summary_fails_the_whole_load() {
        let result = join_dashboard(Err(failure()), Ok(vec![]), Ok(insights()));
        assert_eq!(result.unwrap_err(), failure());
    }

    #[test]
    fn a_failed_task_list_fails_the_whole_load() {
        let result = join_dashboard(Ok(summary()), Err(failure()), Ok(insights()));
        assert_eq!(result.unwrap_err(), failure());
    }

    #[test]
    fn failed_insights_fail_the_whole_load() {
        let result = join_dashboard(Ok(summary()), Ok(vec![]), Err(failure()));
        assert_eq!(result.unwrap_err(), failure());
    }

    /// With several failures the first call's error is the one surfaced.
    #[test]
    fn the_first_failure_wins() {
        let other = ApiError::Network;
        let result = join_dashboard(Err(failure()), Err(other), Ok(insights()));
        assert_eq!(result.unwrap_err(), failure());
    }
}
