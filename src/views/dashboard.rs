// ============================================================================
// DASHBOARDS - Administrador y usuario
// ============================================================================
// Contenido de demostración; los datos reales vendrán del backend.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::models::UserRecord;
use crate::state::BrowserAppState;
use crate::views::shared::render_header;

const ADMIN_STATS: [(&str, &str); 4] = [
    ("Usuários ativos", "1.234"),
    ("Novos cadastros", "56"),
    ("Sessões hoje", "892"),
    ("Alertas", "3"),
];

const ADMIN_USERS: [(&str, &str, &str); 3] = [
    ("Maria Silva", "maria@email.com", "Ativo"),
    ("João Santos", "joao@email.com", "Ativo"),
    ("Ana Costa", "ana@email.com", "Inativo"),
];

const USER_ACTIVITIES: [(&str, &str); 4] = [
    ("Login realizado", "Há 2 minutos"),
    ("Perfil atualizado", "Há 1 hora"),
    ("Senha alterada", "Há 2 dias"),
    ("Email verificado", "Há 5 dias"),
];

const USER_NOTIFICATIONS: [(&str, &str); 2] = [
    ("Bem-vindo!", "Sua conta foi criada com sucesso"),
    ("Atualização", "Novas funcionalidades disponíveis"),
];

fn card(title: &str) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("dashboard-card").build();
    let header = ElementBuilder::new("div")?
        .class("card-header")
        .child(ElementBuilder::new("h3")?.text(title).build())?
        .build();
    append_child(&card, &header)?;
    Ok(card)
}

fn shell(state: &BrowserAppState, user: &UserRecord, class: &str) -> Result<(Element, Element), JsValue> {
    let page = ElementBuilder::new("div")?.class(class).build();
    append_child(&page, &render_header(state, user)?)?;
    let main = ElementBuilder::new("main")?.class("dashboard-main").build();
    append_child(&page, &main)?;
    Ok((page, main))
}

/// Panel de administración
pub fn render_admin_dashboard(state: &BrowserAppState, user: &UserRecord) -> Result<Element, JsValue> {
    let (page, main) = shell(state, user, "admin-dashboard")?;

    let stats = ElementBuilder::new("div")?.class("stats-grid").build();
    for (label, value) in ADMIN_STATS {
        let stat = ElementBuilder::new("div")?
            .class("stat-card")
            .child(ElementBuilder::new("span")?.class("stat-value").text(value).build())?
            .child(ElementBuilder::new("span")?.class("stat-label").text(label).build())?
            .build();
        append_child(&stats, &stat)?;
    }
    append_child(&main, &stats)?;

    let users = card("Usuários recentes")?;
    let table = ElementBuilder::new("table")?.class("users-table").build();
    let head = ElementBuilder::new("tr")?.build();
    for column in ["Nome", "Email", "Status"] {
        append_child(&head, &ElementBuilder::new("th")?.text(column).build())?;
    }
    append_child(&table, &head)?;
    for (name, email, status) in ADMIN_USERS {
        let row = ElementBuilder::new("tr")?
            .child(ElementBuilder::new("td")?.text(name).build())?
            .child(ElementBuilder::new("td")?.text(email).build())?
            .child(
                ElementBuilder::new("td")?
                    .class(if status == "Ativo" { "status active" } else { "status inactive" })
                    .text(status)
                    .build(),
            )?
            .build();
        append_child(&table, &row)?;
    }
    append_child(&users, &table)?;
    append_child(&main, &users)?;

    Ok(page)
}

/// Panel personal del usuario
pub fn render_user_dashboard(state: &BrowserAppState, user: &UserRecord) -> Result<Element, JsValue> {
    let (page, main) = shell(state, user, "user-dashboard")?;

    let profile = card("Informações do Perfil")?;
    let id = if user.id.is_empty() { "N/A" } else { user.id.as_str() };
    for (label, value) in [("Nome", user.name.as_str()), ("Email", user.email.as_str()), ("ID do Usuário", id)] {
        let item = ElementBuilder::new("div")?
            .class("info-item")
            .child(ElementBuilder::new("label")?.text(label).build())?
            .child(ElementBuilder::new("p")?.text(value).build())?
            .build();
        append_child(&profile, &item)?;
    }
    append_child(&main, &profile)?;

    let activities = card("Atividades Recentes")?;
    for (action, time) in USER_ACTIVITIES {
        let item = ElementBuilder::new("div")?
            .class("activity-item")
            .child(ElementBuilder::new("p")?.class("activity-action").text(action).build())?
            .child(ElementBuilder::new("span")?.class("activity-time").text(time).build())?
            .build();
        append_child(&activities, &item)?;
    }
    append_child(&main, &activities)?;

    let notifications = card("Notificações")?;
    for (title, message) in USER_NOTIFICATIONS {
        let item = ElementBuilder::new("div")?
            .class("notification-item")
            .child(ElementBuilder::new("h4")?.text(title).build())?
            .child(ElementBuilder::new("p")?.text(message).build())?
            .build();
        append_child(&notifications, &item)?;
    }
    append_child(&main, &notifications)?;

    Ok(page)
}
