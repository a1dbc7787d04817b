//! Built-in dashboard layout
//!
//! The vaccination-system dashboard: four nav links, one page per link, the
//! two chart canvases on the dashboard page and the WhatsApp conversation
//! list with its header.

use super::tree::{Element, ViewTree};

/// Nav links as (id, label), each targeting a page with the same id
const PAGES: [(&str, &str); 4] = [
    ("dashboard", "Dashboard"),
    ("calendar", "Agenda"),
    ("users", "Usuários"),
    ("whatsapp", "WhatsApp"),
];

/// Mock conversations as (name, time, last message)
const CONVERSATIONS: [(&str, &str, &str); 3] = [
    ("Maria Silva", "14:30", "Preciso de atendimento humano..."),
    ("João Santos", "15:45", "Erro ao agendar..."),
    ("Ana Costa", "16:20", "Tenho uma dúvida sobre..."),
];

/// Build the default layout. The first page and first conversation start
/// active, and the header shows that conversation's name.
pub fn default_layout() -> ViewTree {
    let nav = Element::new("nav").class("sidebar").children(
        PAGES.iter().enumerate().map(|(i, (id, label))| {
            let link = Element::new("a")
                .class("nav-link")
                .attr("href", "#")
                .attr("data-page", *id)
                .text(*label);
            if i == 0 { link.class("active") } else { link }
        }),
    );

    let conversations = Element::new("div").class("conversation-list").children(
        CONVERSATIONS.iter().enumerate().map(|(i, (name, time, last))| {
            let item = Element::new("div")
                .class("conversation-item")
                .child(Element::new("strong").text(*name))
                .child(Element::new("span").class("time").text(*time))
                .child(Element::new("p").text(*last));
            if i == 0 { item.class("active") } else { item }
        }),
    );

    let chat = Element::new("div").class("chat-window").child(
        Element::new("div")
            .class("chat-header")
            .child(Element::new("h3").text(CONVERSATIONS[0].0)),
    );

    let pages = PAGES.iter().enumerate().map(|(i, (id, label))| {
        let mut page = Element::new("section")
            .id(*id)
            .class("page")
            .child(Element::new("h2").text(*label));
        match *id {
            "dashboard" => {
                page = page
                    .child(Element::new("canvas").id("stockChart"))
                    .child(Element::new("canvas").id("chatbotChart"));
            }
            "whatsapp" => {
                page = page.child(conversations.clone()).child(chat.clone());
            }
            _ => {}
        }
        if i == 0 { page.class("active") } else { page }
    });

    ViewTree::new(
        Element::new("body")
            .child(nav)
            .child(Element::new("main").children(pages)),
    )
}
