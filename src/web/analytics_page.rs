//! Analytics Page
//!
//! Renders an [`AnalyticsView`](crate::analytics::AnalyticsView) state:
//! spinner while loading, a fixed error message on failure, and the full
//! dashboard once the snapshot is in. No partial dashboard is ever shown.

use std::sync::Arc;

use leptos::*;

use super::chart::{
    BarChart, LineChart, Series, COLOR_ACTIVE, COLOR_BOOKINGS, COLOR_CANCELLED, COLOR_COMPLETED,
};
use super::components::{AnalyticsNav, FullPageMessage, Loading, MetricCard};
use super::render_document;
use crate::analytics::{
    render_stylist_load, render_totals, shape_hourly, shape_timeline, AnalyticsSnapshot,
    DateLocale, StylistLoadRow, ViewState, SERIES_ACTIVE, SERIES_BOOKINGS, SERIES_CANCELLED,
    SERIES_COMPLETED,
};

/// Shown instead of the dashboard when the snapshot could not be loaded
pub const LOAD_ERROR_MESSAGE: &str = "Ошибка загрузки данных";

const TITLE: &str = "Аналитика барбершопа";

/// Render the analytics page for a view state
pub fn render(state: &ViewState, locale: DateLocale) -> String {
    match state {
        ViewState::Idle | ViewState::Loading => render_document(TITLE, "", || view! { <Loading /> }),
        ViewState::Failed(_) => render_document(TITLE, "", || {
            view! { <FullPageMessage message=LOAD_ERROR_MESSAGE /> }
        }),
        ViewState::Loaded(snapshot) => {
            let snapshot = Arc::clone(snapshot);
            render_document(TITLE, "min-h-screen bg-muted/30", move || {
                view! { <Dashboard snapshot=snapshot locale=locale /> }
            })
        }
    }
}

#[component]
fn Dashboard(snapshot: Arc<AnalyticsSnapshot>, locale: DateLocale) -> impl IntoView {
    let totals = render_totals(&snapshot);

    let timeline = shape_timeline(&snapshot, locale);
    let timeline_labels: Vec<String> = timeline.iter().map(|r| r.date.clone()).collect();
    let timeline_series = vec![
        Series {
            label: SERIES_COMPLETED,
            color: COLOR_COMPLETED,
            values: timeline.iter().map(|r| r.completed).collect(),
        },
        Series {
            label: SERIES_CANCELLED,
            color: COLOR_CANCELLED,
            values: timeline.iter().map(|r| r.cancelled).collect(),
        },
        Series {
            label: SERIES_ACTIVE,
            color: COLOR_ACTIVE,
            values: timeline.iter().map(|r| r.active).collect(),
        },
    ];

    let hourly = shape_hourly(&snapshot);
    let hourly_labels: Vec<String> = hourly.iter().map(|r| r.time.clone()).collect();
    let hourly_series = Series {
        label: SERIES_BOOKINGS,
        color: COLOR_BOOKINGS,
        values: hourly.iter().map(|r| r.count).collect(),
    };

    let stylists = render_stylist_load(&snapshot)
        .into_iter()
        .map(|row| view! { <StylistRow row=row /> })
        .collect_view();

    view! {
        <AnalyticsNav />
        <div class="container mx-auto px-4 py-8">
            <div class="grid md:grid-cols-4 gap-6 mb-8">
                <MetricCard title="Всего записей" value=totals.total.to_string() caption="За всё время" />
                <MetricCard
                    title="Завершено"
                    value=totals.completed.to_string()
                    accent="text-green-600"
                    caption=totals.completed_label()
                />
                <MetricCard
                    title="Отменено"
                    value=totals.cancelled.to_string()
                    accent="text-red-600"
                    caption=totals.cancelled_label()
                />
                <MetricCard
                    title="Активные"
                    value=totals.active.to_string()
                    accent="text-blue-600"
                    caption="Ожидают визита"
                />
            </div>
            <div class="grid lg:grid-cols-2 gap-6 mb-6">
                <Card title="Динамика записей">
                    <LineChart labels=timeline_labels series=timeline_series />
                </Card>
                <Card title="Загруженность по времени">
                    <BarChart labels=hourly_labels series=hourly_series />
                </Card>
            </div>
            <Card title="Загруженность мастеров">
                <div class="space-y-4">{stylists}</div>
            </Card>
        </div>
    }
}

#[component]
fn Card(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="rounded-lg border bg-card shadow-sm">
            <div class="p-6">
                <h3 class="text-2xl font-semibold">{title}</h3>
            </div>
            <div class="p-6 pt-0">{children()}</div>
        </div>
    }
}

#[component]
fn StylistRow(row: StylistLoadRow) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between p-4 border rounded-lg" data-stylist-row="true">
            <div class="flex items-center gap-4">
                <div class="w-12 h-12 bg-accent/10 rounded-full flex items-center justify-center text-accent">
                    "👤"
                </div>
                <div>
                    <h3 class="font-semibold">{row.name}</h3>
                    <p class="text-sm text-muted-foreground">{row.completed_label}</p>
                </div>
            </div>
            <div class="text-right">
                <div class="text-2xl font-bold">{row.total_bookings}</div>
                <div class="text-sm text-muted-foreground">"записей"</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{HourlyBucket, StylistLoad, TimelinePoint, Totals};
    use crate::web::testing::{plain, tag_with};
    use chrono::NaiveDate;

    fn snapshot() -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            timeline: vec![
                TimelinePoint {
                    date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                    completed: 4,
                    cancelled: 1,
                    active: 2,
                },
                TimelinePoint {
                    date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
                    completed: 6,
                    cancelled: 0,
                    active: 3,
                },
            ],
            stylist_load: vec![
                StylistLoad {
                    name: "Михаил Сидоров".to_string(),
                    total_bookings: 12,
                    completed: 9,
                },
                StylistLoad {
                    name: "Александр Иванов".to_string(),
                    total_bookings: 7,
                    completed: 5,
                },
            ],
            hourly_distribution: vec![HourlyBucket { hour: 10, count: 3 }],
            totals: Totals {
                total: 100,
                completed: 60,
                cancelled: 15,
                active: 25,
            },
        }
    }

    fn render_plain(state: &ViewState) -> String {
        plain(&render(state, DateLocale::Ru))
    }

    #[test]
    fn test_loaded_dashboard() {
        let html = render_plain(&ViewState::Loaded(Arc::new(snapshot())));

        let completed = tag_with(&html, "text-green-600").unwrap();
        assert!(completed.contains(r#"data-metric="value""#));
        assert!(html.contains(r#"text-green-600" data-metric="value">60</div>"#));
        assert!(html.contains("60% от общего числа"));
        assert!(html.contains(r#"text-red-600" data-metric="value">15</div>"#));
        assert!(html.contains("15% от общего числа"));
        assert!(html.contains("Ожидают визита"));
        assert!(html.contains(r#"data-chart="line""#));
        assert!(html.contains(r#"data-chart="bar""#));
        assert!(html.contains("02.05"));
        assert!(html.contains("10:00"));
        assert!(html.contains("Завершено: 9 из 12"));
        assert!(html.contains(r#"href="/""#));
    }

    #[test]
    fn test_stylists_render_in_upstream_order() {
        let html = render_plain(&ViewState::Loaded(Arc::new(snapshot())));

        let first = html.find("Михаил Сидоров").unwrap();
        let second = html.find("Александр Иванов").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("data-stylist-row").count(), 2);
    }

    #[test]
    fn test_failed_state_shows_only_error() {
        let html = render_plain(&ViewState::Failed("boom".to_string()));

        assert!(html.contains(LOAD_ERROR_MESSAGE));
        assert!(!html.contains("data-chart"));
        assert!(!html.contains("boom"));
    }

    #[test]
    fn test_loading_state_shows_spinner() {
        let html = render_plain(&ViewState::Loading);

        assert!(html.contains("animate-spin"));
        assert!(!html.contains("data-chart"));
    }

    #[test]
    fn test_zero_total_shows_dash() {
        let mut empty = snapshot();
        empty.totals = Totals {
            total: 0,
            completed: 0,
            cancelled: 0,
            active: 0,
        };

        let html = render_plain(&ViewState::Loaded(Arc::new(empty)));

        assert!(html.contains(r#"data-metric="caption">—</div>"#));
        assert!(!html.contains("NaN"));
    }
}
