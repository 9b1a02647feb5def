//! Overview Page
//!
//! Occupancy summary cards plus the occupancy and demographics charts.

use leptos::*;

use crate::components::{DonutChart, LineChart, MetricCard};
use crate::data;
use crate::state::global::GlobalState;

/// Overview page component
#[component]
pub fn Overview() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="space-y-8">
            // Page header with date selector
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold text-gray-800">"Overview"</h1>
                <div class="flex items-center space-x-2 text-gray-600 bg-white border border-gray-200 rounded-lg px-4 py-2">
                    <span>"📅"</span>
                    <span>{move || state.selected_date.get()}</span>
                    <span class="text-gray-400 text-sm">
                        {chrono::Local::now().format("%b %e, %Y").to_string()}
                    </span>
                </div>
            </div>

            // Occupancy summary cards
            <section>
                <h2 class="text-xl font-semibold text-gray-700 mb-4">"Occupancy"</h2>
                <div class="grid md:grid-cols-3 gap-4">
                    {data::occupancy_stats().into_iter().map(|stat| view! {
                        <MetricCard stat=stat />
                    }).collect_view()}
                </div>
            </section>

            // Overall occupancy chart
            <section class="bg-white rounded-xl p-6 border border-gray-200">
                <h2 class="text-xl font-semibold text-gray-700 mb-4">"Overall Occupancy"</h2>
                <LineChart
                    labels=&data::HOURLY_LABELS
                    series=vec![data::occupancy_series()]
                />
            </section>

            // Demographics
            <section>
                <h2 class="text-xl font-semibold text-gray-700 mb-4">"Demographics"</h2>
                <div class="grid lg:grid-cols-2 gap-6">
                    <div class="bg-white rounded-xl p-6 border border-gray-200">
                        <h3 class="font-semibold text-gray-700 mb-4">"Chart of Demographics"</h3>
                        <DonutChart segments=data::demographics_split() />
                    </div>

                    <div class="bg-white rounded-xl p-6 border border-gray-200">
                        <h3 class="font-semibold text-gray-700 mb-4">"Demographics Analysis"</h3>
                        <LineChart
                            labels=&data::HOURLY_LABELS
                            series=data::demographics_series()
                        />
                    </div>
                </div>
            </section>
        </div>
    }
}
