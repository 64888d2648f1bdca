//! Page Components
//!
//! Small reusable pieces shared by both pages.

use leptos::*;

use crate::booking::{Notification, NotificationKind};

/// Toast notification for a booking outcome
#[component]
pub fn Toast(notification: Notification) -> impl IntoView {
    let (icon, bg_class, kind) = match notification.kind {
        NotificationKind::Success => ("✓", "bg-green-600", "success"),
        NotificationKind::Error => ("✕", "bg-red-600", "error"),
    };

    view! {
        <div
            class=format!(
                "fixed bottom-6 right-4 z-50 flex items-center space-x-3 {} text-white \
                 px-4 py-3 rounded-lg shadow-lg",
                bg_class
            )
            role="status"
            data-toast=kind
        >
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{notification.message}</span>
        </div>
    }
}

/// Summary card with a title, a big figure and a caption line
#[component]
pub fn MetricCard(
    #[prop(into)]
    title: String,
    #[prop(into)]
    value: String,
    /// Extra classes for the figure, e.g. a status color
    #[prop(default = "")]
    accent: &'static str,
    #[prop(into)]
    caption: String,
) -> impl IntoView {
    view! {
        <div class="rounded-lg border bg-card shadow-sm">
            <div class="p-6 pb-2">
                <h3 class="text-sm font-medium text-muted-foreground">{title}</h3>
            </div>
            <div class="p-6 pt-0">
                <div class=format!("text-3xl font-bold {}", accent) data-metric="value">{value}</div>
                <div class="text-sm text-muted-foreground mt-2" data-metric="caption">{caption}</div>
            </div>
        </div>
    }
}

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div
                class="animate-spin rounded-full h-12 w-12 border-4 border-muted border-t-accent"
                aria-label="Загрузка"
            />
        </div>
    }
}

/// Full-page static message
#[component]
pub fn FullPageMessage(message: &'static str) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <p>{message}</p>
        </div>
    }
}

/// Section anchors of the landing page
const NAV_SECTIONS: [(&str, &str); 4] = [
    ("#home", "Главная"),
    ("#services", "Услуги"),
    ("#masters", "Мастера"),
    ("#contact", "Контакты"),
];

/// Fixed header of the landing page
#[component]
pub fn SiteNav() -> impl IntoView {
    view! {
        <nav class="fixed top-0 left-0 right-0 z-40 bg-background/95 backdrop-blur-sm border-b border-border">
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                // Brand
                <div class="text-2xl font-bold tracking-tight flex items-center gap-2">
                    <span class="text-accent">"✂"</span>
                    <span>"БАРБЕРШОП"</span>
                </div>

                <div class="hidden md:flex gap-8 items-center">
                    {NAV_SECTIONS
                        .iter()
                        .map(|&(href, label)| view! { <NavLink href=href label=label /> })
                        .collect_view()}
                    <a
                        href="/analytics"
                        class="text-sm font-medium transition-colors hover:text-accent flex items-center gap-1"
                    >
                        "📊 Аналитика"
                    </a>
                </div>

                <a
                    href="/?book=1"
                    class="bg-accent hover:bg-accent/90 text-white font-medium px-4 py-2 rounded-md"
                >
                    "Записаться"
                </a>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a href=href class="text-sm font-medium transition-colors hover:text-accent">
            {label}
        </a>
    }
}

/// Header of the analytics page with the link back to the site
#[component]
pub fn AnalyticsNav() -> impl IntoView {
    view! {
        <nav class="bg-primary text-primary-foreground py-4 border-b">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold flex items-center gap-2">"📊 Аналитика барбершопа"</h1>
                    <a href="/" class="text-sm hover:underline">"← Вернуться на сайт"</a>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::testing::{plain, tag_with};

    fn render<F, N>(f: F) -> String
    where
        F: FnOnce() -> N + 'static,
        N: IntoView,
    {
        plain(&leptos::ssr::render_to_string(f))
    }

    #[test]
    fn test_toast_variants() {
        let ok = render(|| view! { <Toast notification=Notification::success("Готово") /> });
        assert!(ok.contains("bg-green-600"));
        assert!(ok.contains(r#"data-toast="success""#));
        assert!(ok.contains("Готово"));

        let err = render(|| {
            view! { <Toast notification=Notification::error("<b>Ошибка</b>") /> }
        });
        assert!(err.contains("bg-red-600"));
        assert!(err.contains("&lt;b&gt;Ошибка&lt;/b&gt;"));
    }

    #[test]
    fn test_metric_card() {
        let html = render(|| {
            view! {
                <MetricCard
                    title="Завершено"
                    value="60"
                    accent="text-green-600"
                    caption="60% от общего числа"
                />
            }
        });

        let figure = tag_with(&html, r#"data-metric="value""#).unwrap();
        assert!(figure.contains("text-green-600"));
        assert!(html.contains(">60</div>"));
        assert!(html.contains("60% от общего числа"));
    }

    #[test]
    fn test_navs_link_between_pages() {
        let site = render(|| view! { <SiteNav /> });
        assert!(site.contains(r#"href="/analytics""#));
        assert!(site.contains(r##"href="#services""##));
        assert!(site.contains("БАРБЕРШОП"));

        let analytics = render(|| view! { <AnalyticsNav /> });
        assert!(analytics.contains(r#"href="/""#));
        assert!(analytics.contains("Вернуться на сайт"));
    }

    #[test]
    fn test_loading_spinner() {
        assert!(render(|| view! { <Loading /> }).contains("animate-spin"));
    }
}
