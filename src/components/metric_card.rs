//! Metric Card Component
//!
//! Displays a single occupancy stat with its day-over-day trend.

use leptos::*;

use crate::data::{OccupancyStat, Trend};

/// Occupancy stat card component
#[component]
pub fn MetricCard(stat: OccupancyStat) -> impl IntoView {
    let (arrow, color) = match stat.trend {
        Trend::Up => ("↑", "text-green-600"),
        Trend::Down => ("↓", "text-red-600"),
    };

    view! {
        <div class="bg-white rounded-xl p-5 border border-gray-200 shadow-sm">
            <h3 class="text-gray-500 text-sm">{stat.title}</h3>

            // Headline value
            <div class="text-3xl font-bold text-gray-800 mt-2">{stat.value}</div>

            // Trend indicator
            <div class=format!("flex items-center space-x-1 mt-2 text-sm {}", color)>
                <span>{arrow}</span>
                <span>{stat.change}</span>
            </div>
        </div>
    }
}
