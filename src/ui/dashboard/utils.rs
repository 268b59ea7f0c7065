//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Resource;
use crate::view_state::StatusClass;
use chrono::{DateTime, Local};
use ratatui::prelude::Color;

/// Get a ratatui color for the resource an event is about
pub fn get_resource_color(resource: &Resource) -> Color {
    match resource {
        Resource::Health => Color::Cyan,
        Resource::Models => Color::Yellow,
    }
}

pub fn status_class_color(class: StatusClass) -> Color {
    match class {
        StatusClass::Healthy => Color::LightGreen,
        StatusClass::Unhealthy => Color::LightRed,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// Render a model's `created` field (unix seconds) as local date and time.
pub fn format_created(created: i64) -> String {
    match DateTime::from_timestamp(created, 0) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "Unknown".to_string(),
    }
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    // Replace verbose transport errors with shorter messages
    if msg.contains("timed out") {
        return "Request timed out".to_string();
    }
    if msg.contains("error sending request") {
        return "Proxy unreachable".to_string();
    }
    msg.to_string()
}
