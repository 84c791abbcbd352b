//! Plain-text rendering of a session view.

use chrono::NaiveDate;
use weather_core::{
    DisplayUnit, View,
    dashboard::{Dashboard, WELCOME_SUBTITLE, WELCOME_TITLE},
};

pub fn render(view: &View, unit: DisplayUnit, today: NaiveDate) -> String {
    match view {
        View::Idle => format!("{WELCOME_TITLE}\n{WELCOME_SUBTITLE}\n"),
        View::Loading => "Loading...\n".to_string(),
        View::Error(message) => format!("Error: {message}\n"),
        View::Populated(_) => match view.dashboard(unit, today) {
            Some(dash) => render_dashboard(&dash),
            None => String::new(),
        },
    }
}

fn render_dashboard(dash: &Dashboard) -> String {
    let c = &dash.current;
    let mut out = if c.country.is_empty() {
        format!("{}\n", c.city)
    } else {
        format!("{}, {}\n", c.city, c.country)
    };

    out.push_str(&format!("{}\n", c.date));
    out.push_str(&format!(
        "{}°{}  {} ({})\n",
        c.temperature, c.unit, c.condition, c.description
    ));
    out.push_str(&format!("icon: {}\n", c.icon_url));

    if !dash.forecast.is_empty() {
        out.push_str("\nForecast\n");
        for day in &dash.forecast {
            out.push_str(&format!(
                "  {:<8} {:<12} {:>4}° / {:>4}°\n",
                day.date, day.condition, day.high, day.low
            ));
        }
    }

    out.push_str("\nToday's Highlights\n");
    for h in &dash.highlights {
        out.push_str(&format!(
            "  {:<22} {:<14} {}\n",
            h.title, h.value, h.subtitle
        ));
    }

    out
}
