use leptos::*;

use crate::domain::{errors::AppError, logging::LogComponent, market_data::SeriesPoint};
use crate::log_error;
use crate::presentation::ChartComponent;

const COMPONENT: LogComponent = LogComponent::Presentation("Dashboard");

const MARKET_OVERVIEW: [(&str, f64); 10] = [
    ("2018-12-22", 32.51),
    ("2018-12-23", 31.11),
    ("2018-12-24", 27.02),
    ("2018-12-25", 27.32),
    ("2018-12-26", 25.17),
    ("2018-12-27", 28.89),
    ("2018-12-28", 25.46),
    ("2018-12-29", 23.92),
    ("2018-12-30", 22.68),
    ("2018-12-31", 22.67),
];

/// Daily sample shown on the market overview card
pub fn market_overview_series() -> Result<Vec<SeriesPoint>, AppError> {
    MARKET_OVERVIEW.iter().map(|&(day, value)| SeriesPoint::on_day(day, value)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorChange {
    pub name: &'static str,
    pub change_percent: f64,
}

pub const SECTORS: [SectorChange; 3] = [
    SectorChange { name: "Healthcare", change_percent: 0.88 },
    SectorChange { name: "Financial", change_percent: 0.65 },
    SectorChange { name: "Technology", change_percent: -1.02 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarningsEvent {
    pub company: &'static str,
    pub when: &'static str,
}

pub const UPCOMING_EARNINGS: [EarningsEvent; 2] = [
    EarningsEvent { company: "NVIDIA", when: "Feb 27, 5:00 AM" },
    EarningsEvent { company: "Salesforce", when: "Feb 27, 5:00 AM" },
];

pub const NEWS: [&str; 2] = [
    "Spain’s Argentina unit sold for $1.245B.",
    "Regeneron’s experimental gene therapy improved hearing in children.",
];

/// Signed percentage with a typographic minus, e.g. `+0.88%` / `−1.02%`
pub fn format_change(percent: f64) -> String {
    let sign = if percent < 0.0 { '\u{2212}' } else { '+' };
    format!("{sign}{:.2}%", percent.abs())
}

/// 🦀 Market dashboard page
#[component]
pub fn Dashboard() -> impl IntoView {
    let series = market_overview_series().unwrap_or_else(|err| {
        log_error!(COMPONENT, "❌ invalid sample series: {}", err);
        Vec::new()
    });

    view! {
        <style>
            {r#"
            body {
                margin: 0;
                background: #0a0a0a;
            }

            .dashboard {
                display: flex;
                justify-content: center;
                align-items: center;
                min-height: 100vh;
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
            }

            .dashboard-grid {
                display: grid;
                grid-template-columns: 2fr 1fr;
                gap: 32px;
                width: 80%;
                max-width: 80rem;
                padding: 32px;
            }

            .column {
                display: flex;
                flex-direction: column;
                gap: 24px;
            }

            .card {
                background: #171717;
                border-radius: 16px;
                padding: 24px;
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
                color: #d1d5db;
            }

            .card-title {
                color: #f3f4f6;
                font-size: 18px;
                font-weight: 500;
                margin: 0 0 8px;
            }

            .row {
                display: flex;
                justify-content: space-between;
                margin-bottom: 12px;
            }

            .rows {
                list-style: none;
                margin: 0;
                padding: 0;
            }

            .up { color: #4ade80; }
            .down { color: #f87171; }

            .chart-container {
                width: 100%;
                height: 16rem;
                border-radius: 12px;
                overflow: hidden;
            }
            "#}
        </style>
        <div class="dashboard">
            <div class="dashboard-grid">
                <div class="column">
                    <div class="card">
                        <h2 class="card-title">"The markets are neutral"</h2>
                        <ChartComponent data=series/>
                    </div>
                    <SectorsCard/>
                </div>
                <div class="column">
                    <EarningsCard/>
                    {NEWS.iter().map(|text| view! { <div class="card">{*text}</div> }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn SectorsCard() -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card-title">"Sectors"</h3>
            {SECTORS
                .iter()
                .map(|sector| {
                    let class = if sector.change_percent < 0.0 { "down" } else { "up" };
                    view! {
                        <div class="row">
                            <span>{sector.name}</span>
                            <span class=class>{format_change(sector.change_percent)}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn EarningsCard() -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card-title">"Upcoming Earnings"</h3>
            <ul class="rows">
                {UPCOMING_EARNINGS
                    .iter()
                    .map(|event| view! {
                        <li class="row">
                            <span>{event.company}</span>
                            <span>{event.when}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
