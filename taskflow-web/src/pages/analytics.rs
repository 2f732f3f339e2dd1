use crate::{
    api::{ApiClient, ApiError, Period},
    auth_flow,
    components::{BarChart, ChartSet, DonutChart, FetchError, LineChart, Loading},
    models::{AppState, FetchState},
    stats,
};
use futures::join;
use shared::models::{DashboardSummary, TrendPoint, TrendsResponse};
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

#[derive(Debug, Clone, PartialEq)]
struct AnalyticsData {
    summary: DashboardSummary,
    points: Vec<TrendPoint>,
}

/// All-or-nothing merge of the summary and trends calls; the first failure
/// becomes the whole view's error.
fn join_analytics(
    summary: Result<DashboardSummary, ApiError>,
    trends: Result<TrendsResponse, ApiError>,
) -> Result<AnalyticsData, ApiError> {
    Ok(AnalyticsData {
        summary: summary?,
        points: trends?.points,
    })
}

#[derive(Properties, PartialEq)]
pub struct AnalyticsPageProps {
    /// Charts to draw; embedding contexts can trim this down.
    #[prop_or_default]
    pub chart_set: ChartSet,
}

/// The single analytics view, parametrized by period and chart set.
///
/// Summary and trends are fetched together for the selected period and the
/// charts render only when both landed. Switching the period re-runs the
/// whole fetch; nothing is cached between visits.
#[function_component(AnalyticsPage)]
pub fn analytics_page(props: &AnalyticsPageProps) -> Html {
    let period = use_state(Period::default);
    let state = use_state(|| FetchState::<AnalyticsData>::Loading);
    let attempt = use_state(|| 0u32);
    let navigator = use_navigator();
    let (_, dispatch) = use_store::<AppState>();

    {
        let state = state.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        use_effect_with((*period, *attempt), move |&(period, _)| {
            state.set(FetchState::Loading);
            spawn_local(async move {
                let client = ApiClient::shared();
                let (summary, trends) = join!(client.dashboard(period), client.trends(period));
                match join_analytics(summary, trends) {
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

    let on_period_change = {
        let period = period.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let chosen = Period::iter()
                    .find(|candidate| candidate.as_str() == select.value())
                    .unwrap_or_default();
                period.set(chosen);
            }
        })
    };

    let on_retry = {
        let attempt = attempt.clone();
        Callback::from(move |()| attempt.set(*attempt + 1))
    };

    let body = match &*state {
        FetchState::Loading => html! { <Loading /> },
        FetchState::Failed(err) => html! {
            <FetchError message={err.to_string()} on_retry={on_retry} />
        },
        FetchState::Ready(data) => render_charts(props.chart_set, data),
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{"Analytics"}</h1>
                <select class="select select-bordered select-sm" onchange={on_period_change}>
                    { for Period::iter().map(|candidate| html! {
                        <option
                            value={candidate.as_str()}
                            selected={candidate == *period}
                        >
                            { candidate.label() }
                        </option>
                    }) }
                </select>
            </div>
            { body }
        </div>
    }
}

fn render_charts(chart_set: ChartSet, data: &AnalyticsData) -> Html {
    let completions = chart_set.completions.then(|| {
        html! {
            <BarChart title="Tasks completed" series={stats::completed_series(&data.points)} />
        }
    });
    let study_time = chart_set.study_time.then(|| {
        html! {
            <LineChart title="Minutes studied" series={stats::study_series(&data.points)} />
        }
    });
    let status_donut = chart_set.status_donut.then(|| {
        let slices: Vec<(AttrValue, u32)> = stats::status_breakdown(&data.summary)
            .into_iter()
            .map(|(label, value)| (AttrValue::Static(label), value))
            .collect();
        html! {
            <DonutChart title="Task status" slices={slices} />
        }
    });

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            { completions }
            { study_time }
            { status_donut }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> DashboardSummary {
        DashboardSummary {
            total_tasks: 6,
            completed_tasks: 4,
            in_progress_tasks: 1,
            pending_tasks: 1,
            overdue_tasks: 0,
            study_minutes: 180,
            streak_days: 2,
        }
    }

    fn trends() -> TrendsResponse {
        TrendsResponse {
            period: "week".to_string(),
            points: vec![],
        }
    }

    fn failure() -> ApiError {
        ApiError::Http {
            status: 500,
            message: "Something broke".to_string(),
        }
    }

    #[test]
    fn both_successes_merge_into_analytics_data() {
        let data = join_analytics(Ok(summary()), Ok(trends())).unwrap();
        assert_eq!(data.summary, summary());
        assert!(data.points.is_empty());
    }

    /// Either call failing fails the whole view; the sibling success never
    /// renders partial charts.
    #[test]
    fn a_failed_summary_fails_the_whole_load() {
        let result = join_analytics(Err(failure()), Ok(trends()));
        assert_eq!(result.unwrap_err(), failure());
    }

    #[test]
    fn failed_trends_fail_the_whole_load() {
        let result = join_analytics(Ok(summary()), Err(failure()));
        assert_eq!(result.unwrap_err(), failure());
    }
}
