//! Chart Components
//!
//! Line and bar charts as inline SVG. Both charts share one frame: a
//! fixed viewBox, margins for the axes, five horizontal grid lines and a
//! y-axis that starts at zero.

use leptos::*;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 300.0;

const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

const GRID_LINES: u32 = 5;

const VIEW_BOX: &str = "0 0 800 300";

/// Status colors used by the dashboard
pub const COLOR_COMPLETED: &str = "#16a34a";
pub const COLOR_CANCELLED: &str = "#dc2626";
pub const COLOR_ACTIVE: &str = "#2563eb";
pub const COLOR_BOOKINGS: &str = "#f97316";

/// One named data series
#[derive(Debug, Clone)]
pub struct Series {
    pub label: &'static str,
    pub color: &'static str,
    pub values: Vec<u64>,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    y_max: f64,
    slots: usize,
}

impl Frame {
    fn new(series: &[Series], slots: usize) -> Self {
        let max = series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .max()
            .unwrap_or(0);
        // Round the axis up to a multiple of the grid so labels stay whole
        let step = (max as f64 / GRID_LINES as f64).ceil().max(1.0);
        Self {
            y_max: step * GRID_LINES as f64,
            slots,
        }
    }

    fn chart_width(&self) -> f64 {
        WIDTH - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn chart_height(&self) -> f64 {
        HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn y(&self, value: u64) -> f64 {
        MARGIN_TOP + (1.0 - value as f64 / self.y_max) * self.chart_height()
    }

    fn band(&self) -> f64 {
        self.chart_width() / self.slots.max(1) as f64
    }

    /// Center of category `i` along the x-axis
    fn x(&self, i: usize) -> f64 {
        MARGIN_LEFT + self.band() * (i as f64 + 0.5)
    }
}

fn coord(value: f64) -> String {
    format!("{:.1}", value)
}

/// Grid lines, y-axis values and x-axis labels
#[component]
fn Grid(frame: Frame, labels: Vec<String>) -> impl IntoView {
    let rows = (0..=GRID_LINES)
        .map(|i| {
            let share = i as f64 / GRID_LINES as f64;
            let y = MARGIN_TOP + share * frame.chart_height();
            let value = frame.y_max - share * frame.y_max;
            view! {
                <line
                    x1=coord(MARGIN_LEFT)
                    y1=coord(y)
                    x2=coord(WIDTH - MARGIN_RIGHT)
                    y2=coord(y)
                    stroke="#e5e7eb"
                    stroke-dasharray="3 3"
                />
                <text
                    x=coord(MARGIN_LEFT - 8.0)
                    y=coord(y + 4.0)
                    font-size="12"
                    fill="#6b7280"
                    text-anchor="end"
                >
                    {format!("{:.0}", value)}
                </text>
            }
        })
        .collect_view();

    let ticks = labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            view! {
                <text
                    x=coord(frame.x(i))
                    y=coord(HEIGHT - MARGIN_BOTTOM + 20.0)
                    font-size="12"
                    fill="#6b7280"
                    text-anchor="middle"
                >
                    {label}
                </text>
            }
        })
        .collect_view();

    view! {
        <g class="grid">
            {rows}
            {ticks}
        </g>
    }
}

#[component]
fn Legend(series: Vec<Series>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {series
                .into_iter()
                .map(|s| {
                    view! {
                        <div class="flex items-center space-x-2">
                            <span
                                class="w-3 h-3 rounded-full inline-block"
                                style=format!("background-color: {}", s.color)
                            />
                            <span class="text-sm">{s.label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn NoData() -> impl IntoView {
    view! {
        <svg viewBox=VIEW_BOX class="w-full h-[300px]" role="img">
            <text
                x=coord(WIDTH / 2.0)
                y=coord(HEIGHT / 2.0)
                font-size="16"
                fill="#6b7280"
                text-anchor="middle"
            >
                "Нет данных"
            </text>
        </svg>
    }
}

/// Multi-series line chart over categorical x labels
#[component]
pub fn LineChart(labels: Vec<String>, series: Vec<Series>) -> impl IntoView {
    if labels.is_empty() {
        return view! { <NoData /> }.into_view();
    }

    let frame = Frame::new(&series, labels.len());

    let lines = series
        .iter()
        .map(|s| {
            let points = s
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| format!("{},{}", coord(frame.x(i)), coord(frame.y(*v))))
                .collect::<Vec<_>>()
                .join(" ");
            let dots = s
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    view! { <circle cx=coord(frame.x(i)) cy=coord(frame.y(*v)) r="3" fill=s.color /> }
                })
                .collect_view();

            view! {
                <polyline fill="none" stroke=s.color stroke-width="2" points=points>
                    <title>{s.label}</title>
                </polyline>
                {dots}
            }
        })
        .collect_view();

    view! {
        <svg viewBox=VIEW_BOX class="w-full h-[300px]" role="img" data-chart="line">
            <Grid frame=frame labels=labels />
            {lines}
        </svg>
        <Legend series=series />
    }
    .into_view()
}

/// Single-series bar chart over categorical x labels
#[component]
pub fn BarChart(labels: Vec<String>, series: Series) -> impl IntoView {
    if labels.is_empty() {
        return view! { <NoData /> }.into_view();
    }

    let frame = Frame::new(std::slice::from_ref(&series), labels.len());
    let bar_width = frame.band() * 0.6;

    let bars = series
        .values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let top = frame.y(*v);
            view! {
                <rect
                    x=coord(frame.x(i) - bar_width / 2.0)
                    y=coord(top)
                    width=coord(bar_width)
                    height=coord(HEIGHT - MARGIN_BOTTOM - top)
                    fill=series.color
                >
                    <title>{format!("{}: {}", series.label, v)}</title>
                </rect>
            }
        })
        .collect_view();

    view! {
        <svg viewBox=VIEW_BOX class="w-full h-[300px]" role="img" data-chart="bar">
            <Grid frame=frame labels=labels />
            {bars}
        </svg>
        <Legend series=vec![series] />
    }
    .into_view()
}
