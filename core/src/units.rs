//! Unit conversion and display formatting.
//!
//! Volumes are always stored in liters and converted only for display.
//! Distances are never converted: the odometer unit is whatever the user
//! enters, and only the label follows `is_metric`.

/// US gallons per liter.
pub const GALLONS_PER_LITER: f64 = 0.264172;

/// Liters per US gallon. Agrees with `1 / GALLONS_PER_LITER` to 5
/// significant figures.
pub const LITERS_PER_GALLON: f64 = 3.78541;

pub fn liters_to_gallons(liters: f64) -> f64 {
    liters * GALLONS_PER_LITER
}

pub fn gallons_to_liters(gallons: f64) -> f64 {
    gallons / GALLONS_PER_LITER
}

pub fn format_volume(liters: f64, is_metric: bool) -> String {
    if is_metric {
        format!("{:.2} L", liters)
    } else {
        format!("{:.2} gal", liters_to_gallons(liters))
    }
}

pub fn format_distance(distance: f64, is_metric: bool) -> String {
    if is_metric {
        format!("{:.1} km", distance)
    } else {
        format!("{:.1} miles", distance)
    }
}

pub fn format_consumption(consumption: f64, is_metric: bool) -> String {
    if is_metric {
        format!("{:.2} L/100km", consumption)
    } else {
        format!("{:.2} MPG", consumption)
    }
}

/// Symbol for a currency code. Unknown codes render as `$`.
pub fn currency_symbol(code: &str) -> &'static str {
    match code {
        "EUR" => "€",
        "GBP" => "£",
        "RUB" => "₽",
        _ => "$",
    }
}

pub fn format_currency(value: f64, code: &str) -> String {
    format!("{}{:.2}", currency_symbol(code), value)
}
