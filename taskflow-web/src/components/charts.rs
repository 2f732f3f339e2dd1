use yew::prelude::*;

use crate::stats::ChartSeries;

/// Which charts the analytics view renders. Defaults to all of them; a
/// trimmed-down set can be passed to embed the view elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSet {
    pub completions: bool,
    pub study_time: bool,
    pub status_donut: bool,
}

impl Default for ChartSet {
    fn default() -> Self {
        Self {
            completions: true,
            study_time: true,
            status_donut: true,
        }
    }
}

const PLOT_TOP: f64 = 112.0;
const SLOT: usize = 36;

#[derive(Properties, PartialEq)]
pub struct SeriesChartProps {
    pub title: AttrValue,
    pub series: ChartSeries,
}

#[function_component(BarChart)]
pub fn bar_chart(props: &SeriesChartProps) -> Html {
    let series = &props.series;
    if series.is_empty() {
        return chart_card(&props.title, empty_note());
    }

    let max = f64::from(series.scale_max());
    let width = series.values.len() * SLOT + 16;
    let bars = series
        .values
        .iter()
        .zip(series.labels.iter())
        .enumerate()
        .map(|(index, (value, label))| {
            let height = (f64::from(*value) / max * 100.0).round();
            let x = index * SLOT + 8;
            let y = PLOT_TOP - height;
            let center = x + 10;
            html! {
                <g key={index.to_string()}>
                    <rect
                        x={x.to_string()}
                        y={y.to_string()}
                        width="20"
                        height={height.to_string()}
                        rx="3"
                        class="fill-primary"
                    />
                    <text
                        x={center.to_string()}
                        y={(y - 5.0).to_string()}
                        text-anchor="middle"
                        class="fill-base-content text-[9px]"
                    >
                        { value.to_string() }
                    </text>
                    <text
                        x={center.to_string()}
                        y="128"
                        text-anchor="middle"
                        class="fill-base-content/60 text-[9px]"
                    >
                        { label.clone() }
                    </text>
                </g>
            }
        });

    chart_card(
        &props.title,
        html! {
            <svg viewBox={format!("0 0 {width} 136")} class="w-full h-52" role="img">
                { for bars }
            </svg>
        },
    )
}

#[function_component(LineChart)]
pub fn line_chart(props: &SeriesChartProps) -> Html {
    let series = &props.series;
    if series.is_empty() {
        return chart_card(&props.title, empty_note());
    }

    let max = f64::from(series.scale_max());
    let width = series.values.len() * SLOT + 16;
    let position = |index: usize, value: u32| -> (f64, f64) {
        let x = (index * SLOT + 18) as f64;
        let y = PLOT_TOP - f64::from(value) / max * 100.0;
        (x, y)
    };

    let points = series
        .values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let (x, y) = position(index, *value);
            format!("{x},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ");

    let markers = series
        .values
        .iter()
        .zip(series.labels.iter())
        .enumerate()
        .map(|(index, (value, label))| {
            let (x, y) = position(index, *value);
            html! {
                <g key={index.to_string()}>
                    <circle cx={x.to_string()} cy={format!("{y:.1}")} r="3" class="fill-secondary" />
                    <text
                        x={x.to_string()}
                        y="128"
                        text-anchor="middle"
                        class="fill-base-content/60 text-[9px]"
                    >
                        { label.clone() }
                    </text>
                </g>
            }
        });

    chart_card(
        &props.title,
        html! {
            <svg viewBox={format!("0 0 {width} 136")} class="w-full h-52" role="img">
                <polyline
                    points={points}
                    fill="none"
                    stroke-width="2"
                    class="stroke-secondary"
                />
                { for markers }
            </svg>
        },
    )
}

const SLICE_STROKES: [&str; 3] = ["stroke-success", "stroke-info", "stroke-warning"];
const SLICE_DOTS: [&str; 3] = ["bg-success", "bg-info", "bg-warning"];

#[derive(Properties, PartialEq)]
pub struct DonutChartProps {
    pub title: AttrValue,
    pub slices: Vec<(AttrValue, u32)>,
}

#[function_component(DonutChart)]
pub fn donut_chart(props: &DonutChartProps) -> Html {
    let total: u32 = props.slices.iter().map(|(_, value)| value).sum();
    if total == 0 {
        return chart_card(&props.title, empty_note());
    }

    let circumference = 2.0 * std::f64::consts::PI * 45.0;
    let mut offset = 0.0;
    let arcs = props
        .slices
        .iter()
        .enumerate()
        .map(|(index, (_, value))| {
            let dash = f64::from(*value) / f64::from(total) * circumference;
            let arc = html! {
                <circle
                    key={index.to_string()}
                    cx="80"
                    cy="80"
                    r="45"
                    fill="none"
                    stroke-width="18"
                    class={SLICE_STROKES[index % SLICE_STROKES.len()]}
                    stroke-dasharray={format!("{dash:.3} {:.3}", circumference - dash)}
                    stroke-dashoffset={format!("{:.3}", -offset)}
                    transform="rotate(-90 80 80)"
                />
            };
            offset += dash;
            arc
        })
        .collect::<Html>();

    let legend = props.slices.iter().enumerate().map(|(index, (label, value))| {
        html! {
            <div key={index.to_string()} class="flex items-center gap-2 text-sm">
                <span class={classes!("w-3", "h-3", "rounded-full", SLICE_DOTS[index % SLICE_DOTS.len()])}></span>
                <span class="flex-grow">{ label.clone() }</span>
                <span class="font-medium">{ value.to_string() }</span>
            </div>
        }
    });

    chart_card(
        &props.title,
        html! {
            <div class="flex items-center gap-6">
                <svg viewBox="0 0 160 160" class="w-40 h-40" role="img">
                    { arcs }
                    <text x="80" y="78" text-anchor="middle" class="fill-base-content text-2xl font-bold">
                        { total.to_string() }
                    </text>
                    <text x="80" y="96" text-anchor="middle" class="fill-base-content/60 text-[10px]">
                        {"tasks"}
                    </text>
                </svg>
                <div class="flex flex-col gap-2 flex-grow">
                    { for legend }
                </div>
            </div>
        },
    )
}

fn chart_card(title: &AttrValue, body: Html) -> Html {
    html! {
        <div class="card bg-base-200 shadow-xl">
            <div class="card-body">
                <h2 class="card-title text-base">{ title.clone() }</h2>
                { body }
            </div>
        </div>
    }
}

fn empty_note() -> Html {
    html! {
        <div class="flex items-center justify-center h-40 text-base-content/60">
            {"Nothing to chart yet"}
        </div>
    }
}
