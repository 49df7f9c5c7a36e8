//! Static page content.
//!
//! Everything the landing page shows besides the contact form lives here as
//! plain data so the components stay purely declarative.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const OWNER_NAME: &str = "Юрий Ульянов";
pub const TAGLINE: &str = "Эксперт по элитному паркету и отделке помещений";

pub const HERO_TITLE: &str = "Элитный Паркет";
pub const HERO_SUBTITLE: &str =
    "Эксперт по отделке помещений и укладке премиального паркета с 15-летним опытом";
pub const HERO_IMAGE: &str = "https://cdn.poehali.dev/projects/e98e68e4-5781-4e29-97fa-eb006529b073/files/79ba5c98-e92b-4178-b616-48b506eec831.jpg";

pub const PHONE_DISPLAY: &str = "+7 (900) 123-45-67";
pub const EMAIL: &str = "info@ulyanov-parket.ru";
pub const LOCATION: &str = "Москва, работаю по всей России";

/// Page section anchor and its navigation label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_SECTIONS: &[Section] = &[
    Section { id: "home", label: "Главная" },
    Section { id: "services", label: "Услуги" },
    Section { id: "about", label: "Обо мне" },
    Section { id: "contacts", label: "Контакты" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Укладка элитного паркета",
        description: "Профессиональная укладка паркета любой сложности: елочка, французская елка, шашка, художественный паркет",
    },
    Service {
        title: "Отделка помещений",
        description: "Комплексная отделка: декоративная штукатурка, молдинги, лепнина, покраска стен и потолков",
    },
    Service {
        title: "Реставрация паркета",
        description: "Восстановление старого паркета: циклевка, шлифовка, тонирование, покрытие лаком или маслом",
    },
    Service {
        title: "Защитное покрытие",
        description: "Нанесение премиальных масел и лаков для долговечности и красоты паркета",
    },
    Service {
        title: "Дизайн-проект",
        description: "Разработка индивидуальных решений и схем укладки с учетом интерьера",
    },
    Service {
        title: "Гарантия качества",
        description: "Предоставляю гарантию на все виды работ до 3 лет, использую только премиальные материалы",
    },
];

pub const PORTFOLIO_IMAGES: &[&str] = &[
    "https://cdn.poehali.dev/projects/e98e68e4-5781-4e29-97fa-eb006529b073/files/8acccd57-17f9-4702-8e89-2f6bc0e23ffb.jpg",
    "https://cdn.poehali.dev/projects/e98e68e4-5781-4e29-97fa-eb006529b073/files/9f6aa220-58e8-489d-a178-8b94a4b03f5f.jpg",
    "https://cdn.poehali.dev/projects/e98e68e4-5781-4e29-97fa-eb006529b073/files/79ba5c98-e92b-4178-b616-48b506eec831.jpg",
];

pub const HIGHLIGHTS: &[&str] = &[
    "15+ лет опыта работы с элитным паркетом",
    "Более 200 реализованных проектов",
    "Работа только с премиальными материалами",
    "Индивидуальный подход к каждому клиенту",
    "Гарантия качества до 3 лет",
    "Соблюдение сроков и чистота на объекте",
];

pub const SOCIAL_LINKS: &[&str] = &["Instagram", "Facebook", "WhatsApp"];

/// Alt text for the `index`-th (zero-based) portfolio image.
#[must_use]
pub fn portfolio_alt(index: usize) -> String {
    format!("Проект {}", index + 1)
}

/// Build a `tel:` href from a human-formatted phone number.
///
/// Keeps a leading `+` and the digits; spaces, dashes and parentheses are dropped.
#[must_use]
pub fn tel_href(display: &str) -> String {
    let trimmed = display.trim();
    let mut number = String::with_capacity(trimmed.len());
    if trimmed.starts_with('+') {
        number.push('+');
    }
    number.extend(trimmed.chars().filter(char::is_ascii_digit));
    format!("tel:{number}")
}

#[must_use]
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

/// Fragment link for a section id (`#contacts`).
#[must_use]
pub fn section_href(id: &str) -> String {
    format!("#{id}")
}
