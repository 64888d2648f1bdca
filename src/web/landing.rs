//! Landing Page
//!
//! Hero, services, stylists, contacts and the online-booking dialog.
//!
//! The "book" buttons are links that open the dialog with a preselected
//! service or stylist (`/?book=1&service=...`). The dialog posts to
//! `/booking`; closing it is a plain link back to `/`.

use chrono::NaiveDate;
use leptos::*;

use super::components::{SiteNav, Toast};
use super::render_document;
use crate::booking::{BookingDialog, BookingSelection, Notification};
use crate::catalog::{Catalog, Service, Stylist};

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1585747860715-2ba37e788b70?w=800&h=800&fit=crop";

/// Everything needed to render the landing page
pub struct LandingPage<'a> {
    pub catalog: &'a Catalog,
    pub dialog: &'a BookingDialog,
    pub notification: Option<&'a Notification>,
    /// Earliest selectable date for the date picker
    pub today: NaiveDate,
}

impl LandingPage<'_> {
    pub fn render(&self) -> String {
        let catalog = self.catalog.clone();
        let selection = self.dialog.selection().cloned();
        let notification = self.notification.cloned();
        let today = self.today;

        render_document("Барбершоп", "min-h-screen bg-background", move || {
            let dialog = selection.map(|selection| {
                view! { <BookingForm catalog=catalog.clone() selection=selection today=today /> }
            });

            view! {
                <SiteNav />
                <Hero />
                <ServicesSection services=catalog.services.clone() />
                <StylistsSection stylists=catalog.stylists.clone() />
                <ContactSection />
                <Footer />
                {dialog}
                {notification.map(|notification| view! { <Toast notification=notification /> })}
            }
        })
    }
}

/// Link that opens the booking dialog with an optional preselection
pub fn booking_link(service: Option<&str>, stylist: Option<&str>) -> String {
    let mut href = String::from("/?book=1");
    if let Some(name) = service {
        href.push_str("&service=");
        href.push_str(&urlencoding::encode(name));
    }
    if let Some(name) = stylist {
        href.push_str("&stylist=");
        href.push_str(&urlencoding::encode(name));
    }
    href
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="pt-24 pb-16 md:pt-32 md:pb-24">
            <div class="container mx-auto px-4">
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="space-y-6">
                        <h1 class="text-5xl md:text-7xl font-bold tracking-tight leading-tight">
                            "Мужской стиль "
                            <br/>
                            <span class="text-accent">"нового уровня"</span>
                        </h1>
                        <p class="text-lg text-muted-foreground">
                            "Премиальный барбершоп в центре города. Профессиональные мастера, \
                             современные техники стрижек и атмосфера для настоящих мужчин."
                        </p>
                        <div class="flex gap-4">
                            <a
                                href=booking_link(None, None)
                                class="bg-accent hover:bg-accent/90 text-white font-medium px-8 py-3 rounded-md"
                            >
                                "Записаться онлайн"
                            </a>
                            <a href="/#services" class="border px-8 py-3 rounded-md">
                                "Наши услуги"
                            </a>
                        </div>
                    </div>
                    <div class="relative h-[500px] rounded-2xl overflow-hidden shadow-2xl">
                        <img src=HERO_IMAGE alt="Барбершоп" class="w-full h-full object-cover"/>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-4xl md:text-5xl font-bold mb-4">{title}</h2>
            <p class="text-muted-foreground text-lg">{subtitle}</p>
        </div>
    }
}

#[component]
fn ServicesSection(services: Vec<Service>) -> impl IntoView {
    view! {
        <section id="services" class="py-16 md:py-24 bg-muted/30">
            <div class="container mx-auto px-4">
                <SectionHeading title="Наши услуги" subtitle="Полный спектр барберских услуг" />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {services
                        .into_iter()
                        .map(|service| view! { <ServiceCard service=service /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    let book = booking_link(Some(&service.name), None);

    view! {
        <div
            class="rounded-lg border-2 bg-card hover:border-accent hover:shadow-xl transition-all duration-300"
            data-service-id=service.id.to_string()
        >
            <div class="p-6 space-y-4">
                <div class="flex items-start justify-between">
                    <div class="p-3 bg-accent/10 rounded-lg text-accent" data-icon=service.icon />
                    <span class="text-2xl font-bold text-accent">{service.price}</span>
                </div>
                <h3 class="text-xl font-semibold">{service.name}</h3>
                <p class="text-muted-foreground flex items-center gap-2">"🕒 " {service.duration}</p>
                <a
                    href=book
                    class="block text-center w-full bg-accent hover:bg-accent/90 text-white py-2 rounded-md"
                >
                    "Записаться"
                </a>
            </div>
        </div>
    }
}

#[component]
fn StylistsSection(stylists: Vec<Stylist>) -> impl IntoView {
    view! {
        <section id="masters" class="py-16 md:py-24">
            <div class="container mx-auto px-4">
                <SectionHeading title="Наши мастера" subtitle="Профессионалы своего дела" />
                <div class="grid md:grid-cols-3 gap-8">
                    {stylists
                        .into_iter()
                        .map(|stylist| view! { <StylistCard stylist=stylist /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StylistCard(stylist: Stylist) -> impl IntoView {
    let book = booking_link(None, Some(&stylist.name));
    let alt = stylist.name.clone();

    view! {
        <div
            class="rounded-lg border bg-card overflow-hidden hover:shadow-xl transition-all duration-300"
            data-stylist-id=stylist.id.to_string()
        >
            <div class="relative h-80 overflow-hidden">
                <img src=stylist.image_url alt=alt class="w-full h-full object-cover"/>
            </div>
            <div class="p-6 space-y-2">
                <h3 class="text-xl font-semibold">{stylist.name}</h3>
                <p class="text-muted-foreground">"🏅 Опыт: " {stylist.experience}</p>
                <p class="text-sm text-muted-foreground">{stylist.specialty}</p>
                <a
                    href=book
                    class="block text-center w-full mt-4 bg-accent hover:bg-accent/90 text-white py-2 rounded-md"
                >
                    "Записаться к мастеру"
                </a>
            </div>
        </div>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    let contacts = [
        ("Адрес", "г. Москва, ул. Примерная, д. 123"),
        ("Телефон", "+7 (495) 123-45-67"),
        ("Режим работы", "Ежедневно с 10:00 до 22:00"),
    ];

    view! {
        <section id="contact" class="py-16 md:py-24 bg-primary text-primary-foreground">
            <div class="container mx-auto px-4">
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="space-y-6">
                        <h2 class="text-4xl md:text-5xl font-bold">"Контакты"</h2>
                        <div class="space-y-4">
                            {contacts
                                .into_iter()
                                .map(|(label, value)| {
                                    view! {
                                        <div>
                                            <p class="font-medium">{label}</p>
                                            <p class="text-primary-foreground/80">{value}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="rounded-lg bg-card p-6">
                        <h3 class="text-2xl font-semibold mb-6 text-foreground">"Записаться прямо сейчас"</h3>
                        <a
                            href=booking_link(None, None)
                            class="block text-center w-full bg-accent hover:bg-accent/90 text-white font-medium py-6 text-lg rounded-md"
                        >
                            "Онлайн-запись"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-border">
            <div class="container mx-auto px-4 text-center text-muted-foreground">
                <p>"© 2024 Барбершоп. Все права защищены."</p>
            </div>
        </footer>
    }
}

/// The booking dialog with the current selection filled in
#[component]
fn BookingForm(catalog: Catalog, selection: BookingSelection, today: NaiveDate) -> impl IntoView {
    let chosen_service = selection.service.clone().unwrap_or_default();
    let chosen_stylist = selection.stylist.clone().unwrap_or_default();
    let chosen_time = selection.time.clone().unwrap_or_default();
    let date_value = selection
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    let service_options = catalog
        .services
        .iter()
        .map(|s| {
            view! {
                <option value=s.name.clone() selected={s.name == chosen_service}>
                    {format!("{} - {}", s.name, s.price)}
                </option>
            }
        })
        .collect_view();

    let stylist_options = catalog
        .stylists
        .iter()
        .map(|m| {
            view! {
                <option value=m.name.clone() selected={m.name == chosen_stylist}>
                    {format!("{} - {}", m.name, m.specialty)}
                </option>
            }
        })
        .collect_view();

    let slots = catalog
        .time_slots
        .iter()
        .map(|slot| {
            view! {
                <label class="cursor-pointer">
                    <input
                        type="radio"
                        name="time"
                        value=slot.clone()
                        class="peer sr-only"
                        checked={*slot == chosen_time}
                    />
                    <span class="block text-center border rounded-md py-2 peer-checked:bg-accent peer-checked:text-white">
                        {slot.clone()}
                    </span>
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="fixed inset-0 z-40 bg-black/80"></div>
        <dialog
            open=true
            id="booking"
            class="fixed z-50 top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 max-w-2xl w-full max-h-[90vh] overflow-y-auto rounded-lg bg-background p-6 shadow-lg"
        >
            <div class="flex justify-between items-center">
                <h2 class="text-2xl font-semibold">"Онлайн-запись"</h2>
                <a href="/" class="text-muted-foreground" aria-label="Закрыть">"✕"</a>
            </div>
            <form method="post" action="/booking" class="space-y-6 py-4">
                <label class="block space-y-2">
                    <span class="text-sm font-medium">"Выберите услугу"</span>
                    <select name="service" class="w-full border rounded-md p-2">
                        <option value="">"Выберите услугу"</option>
                        {service_options}
                    </select>
                </label>
                <label class="block space-y-2">
                    <span class="text-sm font-medium">"Выберите мастера"</span>
                    <select name="stylist" class="w-full border rounded-md p-2">
                        <option value="">"Выберите мастера"</option>
                        {stylist_options}
                    </select>
                </label>
                <label class="block space-y-2">
                    <span class="text-sm font-medium">"Выберите дату"</span>
                    <input
                        type="date"
                        name="date"
                        min=today.format("%Y-%m-%d").to_string()
                        value=date_value
                        class="rounded-md border p-2"
                    />
                </label>
                <div class="space-y-2">
                    <span class="text-sm font-medium">"Выберите время"</span>
                    <div class="grid grid-cols-5 gap-2">{slots}</div>
                </div>
                <button
                    type="submit"
                    class="w-full bg-accent hover:bg-accent/90 text-white font-medium py-6 text-lg rounded-md"
                >
                    "Записаться"
                </button>
            </form>
        </dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::testing::{has_flag, plain, tag_with};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    fn render(dialog: &BookingDialog, notification: Option<&Notification>) -> String {
        let catalog = Catalog::default();
        plain(
            &LandingPage {
                catalog: &catalog,
                dialog,
                notification,
                today: today(),
            }
            .render(),
        )
    }

    #[test]
    fn test_closed_page_has_no_dialog() {
        let html = render(&BookingDialog::Closed, None);

        assert!(!html.contains("<dialog"));
        assert!(html.contains("Классическая стрижка"));
        assert!(html.contains("1500₽"));
        assert!(html.contains("Михаил Сидоров"));
        assert!(html.contains(r#"href="/analytics""#));
        assert_eq!(html.matches("data-service-id").count(), 6);
        assert_eq!(html.matches("data-stylist-id").count(), 3);
    }

    #[test]
    fn test_open_dialog_reflects_selection() {
        let dialog = BookingDialog::Closed
            .select_service("Королевское бритьё")
            .select_time("19:00");
        let html = render(&dialog, None);

        assert!(html.contains(r#"id="booking""#));

        let option = tag_with(&html, r#"<option value="Королевское бритьё""#).unwrap();
        assert!(has_flag(option, "selected"));
        let other = tag_with(&html, r#"<option value="Детская стрижка""#).unwrap();
        assert!(!has_flag(other, "selected"));

        let slot = tag_with(&html, r#"value="19:00""#).unwrap();
        assert!(has_flag(slot, "checked"));

        assert!(html.contains(r#"min="2024-05-20""#));
        assert!(!html.contains(r#"value="13:00""#));
        assert_eq!(html.matches(r#"name="time""#).count(), 10);
    }

    #[test]
    fn test_toast_is_rendered() {
        let notification = Notification::success("Запись успешно создана!");
        let html = render(&BookingDialog::Closed, Some(&notification));

        assert!(html.contains("Запись успешно создана!"));
        assert!(html.contains(r#"data-toast="success""#));
    }

    #[test]
    fn test_catalog_text_is_escaped() {
        let mut catalog = Catalog::default();
        catalog.services[0].name = "<b>Стрижка</b>".to_string();
        let dialog = BookingDialog::Closed;

        let html = LandingPage {
            catalog: &catalog,
            dialog: &dialog,
            notification: None,
            today: today(),
        }
        .render();

        assert!(!html.contains("<b>Стрижка</b>"));
        assert!(html.contains("&lt;b&gt;Стрижка&lt;/b&gt;"));
    }

    #[test]
    fn test_booking_link_encodes_names() {
        assert_eq!(booking_link(None, None), "/?book=1");
        assert_eq!(
            booking_link(Some("Стрижка + Борода"), None),
            format!("/?book=1&service={}", urlencoding::encode("Стрижка + Борода"))
        );
        assert!(booking_link(None, Some("Дмитрий Петров")).starts_with("/?book=1&stylist=%D0"));
    }
}
