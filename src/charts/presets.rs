//! Dashboard chart presets
//!
//! The two charts on the vaccination dashboard, with their sample data.

use super::types::{ChartKind, ChartSpec, Rgba, Series, SeriesStyle};

const BLUE: Rgba = Rgba::rgb(59, 130, 246);
const RED: Rgba = Rgba::rgb(239, 68, 68);
const PURPLE: Rgba = Rgba::rgb(139, 92, 246);
const GREEN: Rgba = Rgba::rgb(16, 185, 129);
const AMBER: Rgba = Rgba::rgb(245, 158, 11);

pub const STOCK_CANVAS: &str = "stockChart";
pub const CHATBOT_CANVAS: &str = "chatbotChart";

/// Vaccine stock: current vs minimum, one bar pair per vaccine
pub fn stock_chart() -> ChartSpec {
    ChartSpec::new("stock", STOCK_CANVAS, ChartKind::Bar)
        .labels(["COVID-19", "Influenza", "Hepatite B", "Tétano", "Febre Amarela"])
        .series(Series::new(
            "Estoque Atual",
            vec![150.0, 200.0, 80.0, 120.0, 90.0],
            SeriesStyle::bar(BLUE.alpha(0.8), BLUE),
        ))
        .series(Series::new(
            "Estoque Mínimo",
            vec![50.0, 80.0, 40.0, 60.0, 45.0],
            SeriesStyle::bar(RED.alpha(0.8), RED),
        ))
}

/// Chatbot activity over the week
pub fn chatbot_chart() -> ChartSpec {
    ChartSpec::new("chatbot", CHATBOT_CANVAS, ChartKind::Line)
        .labels(["Seg", "Ter", "Qua", "Qui", "Sex", "Sáb", "Dom"])
        .series(Series::new(
            "Agendamentos",
            vec![45.0, 52.0, 38.0, 61.0, 49.0, 28.0, 15.0],
            SeriesStyle::filled_line(PURPLE, 0.1, 0.4),
        ))
        .series(Series::new(
            "Consultas",
            vec![38.0, 48.0, 35.0, 55.0, 44.0, 25.0, 13.0],
            SeriesStyle::filled_line(GREEN, 0.1, 0.4),
        ))
        .series(Series::new(
            "Atendimento Humano",
            vec![7.0, 4.0, 3.0, 6.0, 5.0, 3.0, 2.0],
            SeriesStyle::filled_line(AMBER, 0.1, 0.4),
        ))
}
