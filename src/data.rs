//! Mock Data Provider
//!
//! Hard-coded fixture data backing every view. In a real deployment these
//! would come from an analytics API; here the dashboard is fully self
//! contained and the arrays below are the single source of truth.

/// Rows shown per page in the crowd-entries table
pub const ENTRIES_PER_PAGE: usize = 10;

/// X-axis labels shared by the hourly charts
pub const HOURLY_LABELS: [&str; 11] = [
    "8:00", "9:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00",
    "18:00",
];

/// Recorded sex of a tracked visitor
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

/// One observed visit: entry/exit timestamps are display strings, `--` when
/// the visitor is still inside.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CrowdEntry {
    pub id: u32,
    pub name: String,
    pub sex: Sex,
    pub entry: String,
    pub exit: String,
    pub dwell_time: String,
    pub avatar: String,
}

/// The full crowd-entries record set, in display order (most recent first).
/// Order is stable across calls; ids are unique.
pub fn crowd_entries() -> Vec<CrowdEntry> {
    use Sex::{Female, Male};

    let rows = [
        (1, "Alice Johnson", Female, "11:05 AM", "--", "--", "👩🏼"),
        (2, "Brian Smith", Male, "11:03 AM", "--", "--", "👨🏻"),
        (3, "Catherine Lee", Female, "11:00 AM", "--", "--", "👩🏻"),
        (4, "David Brown", Male, "10:50 AM", "11:10 AM", "00:20", "👨🏽"),
        (5, "Eva White", Female, "11:20 AM", "11:30 AM", "00:10", "👩🏼"),
        (6, "Frank Green", Male, "11:50 AM", "12:10 AM", "00:20", "👨🏻"),
        (7, "Grace Taylor", Female, "10:50 AM", "11:10 AM", "00:20", "👩🏻"),
        (8, "Henry Wilson", Male, "10:50 AM", "11:10 AM", "00:20", "👨🏼"),
        (9, "Isabella Martinez", Female, "10:50 AM", "11:10 AM", "00:20", "👩🏽"),
        (10, "Jack Thompson", Male, "10:50 AM", "11:10 AM", "00:20", "👨🏻"),
        (11, "Katherine Anderson", Female, "10:50 AM", "11:10 AM", "00:20", "👩🏼"),
        (12, "Liam Garcia", Male, "10:45 AM", "11:05 AM", "00:20", "👨🏽"),
        (13, "Mia Rodriguez", Female, "10:40 AM", "11:00 AM", "00:20", "👩🏻"),
        (14, "Noah Martinez", Male, "10:35 AM", "10:55 AM", "00:20", "👨🏻"),
        (15, "Olivia Davis", Female, "10:30 AM", "10:50 AM", "00:20", "👩🏼"),
        (16, "Peter Wilson", Male, "10:25 AM", "10:45 AM", "00:20", "👨🏼"),
        (17, "Quinn Brown", Female, "10:20 AM", "10:40 AM", "00:20", "👩🏻"),
        (18, "Robert Taylor", Male, "10:15 AM", "10:35 AM", "00:20", "👨🏽"),
        (19, "Sophia Lee", Female, "10:10 AM", "10:30 AM", "00:20", "👩🏽"),
        (20, "Thomas White", Male, "10:05 AM", "10:25 AM", "00:20", "👨🏻"),
        (21, "Uma Patel", Female, "10:00 AM", "10:20 AM", "00:20", "👩🏽"),
        (22, "Victor Chen", Male, "09:55 AM", "10:15 AM", "00:20", "👨🏻"),
        (23, "Wendy Kim", Female, "09:50 AM", "10:10 AM", "00:20", "👩🏻"),
        (24, "Xavier Johnson", Male, "09:45 AM", "10:05 AM", "00:20", "👨🏼"),
        (25, "Yara Ahmed", Female, "09:40 AM", "10:00 AM", "00:20", "👩🏽"),
        (26, "Zachary Miller", Male, "09:35 AM", "09:55 AM", "00:20", "👨🏻"),
        (27, "Aria Cooper", Female, "09:30 AM", "09:50 AM", "00:20", "👩🏼"),
        (28, "Benjamin Hall", Male, "09:25 AM", "09:45 AM", "00:20", "👨🏽"),
        (29, "Chloe Turner", Female, "09:20 AM", "09:40 AM", "00:20", "👩🏻"),
        (30, "Daniel Scott", Male, "09:15 AM", "09:35 AM", "00:20", "👨🏼"),
    ];

    rows.into_iter()
        .map(|(id, name, sex, entry, exit, dwell_time, avatar)| CrowdEntry {
            id,
            name: name.to_string(),
            sex,
            entry: entry.to_string(),
            exit: exit.to_string(),
            dwell_time: dwell_time.to_string(),
            avatar: avatar.to_string(),
        })
        .collect()
}

/// A named data series for the line charts
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Hourly overall-occupancy counts, aligned with [`HOURLY_LABELS`]
pub fn occupancy_series() -> Series {
    Series {
        name: "Occupancy",
        color: "#5c9c9a",
        values: (0..HOURLY_LABELS.len())
            .map(|i| 150.0 + 5.0 * i as f64)
            .collect(),
    }
}

/// Hourly male/female counts, aligned with [`HOURLY_LABELS`]
pub fn demographics_series() -> Vec<Series> {
    let hours = HOURLY_LABELS.len();
    vec![
        Series {
            name: "Male",
            color: "#5c9c9a",
            values: (0..hours).map(|i| 180.0 + 5.0 * i as f64).collect(),
        },
        Series {
            name: "Female",
            color: "#a8d5d3",
            values: (0..hours).map(|i| 150.0 + 5.0 * i as f64).collect(),
        },
    ]
}

/// One segment of the demographics donut chart
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitSegment {
    pub label: &'static str,
    pub percent: f64,
    pub color: &'static str,
}

/// Male/female share of the tracked crowd; percentages sum to 100
pub fn demographics_split() -> Vec<SplitSegment> {
    vec![
        SplitSegment {
            label: "Males",
            percent: 55.0,
            color: "#5c9c9a",
        },
        SplitSegment {
            label: "Females",
            percent: 45.0,
            color: "#a8d5d3",
        },
    ]
}

/// Direction of a day-over-day change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// Headline occupancy stat with its day-over-day comparison text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OccupancyStat {
    pub title: &'static str,
    pub value: &'static str,
    pub trend: Trend,
    pub change: &'static str,
}

/// The three summary cards on the overview page
pub fn occupancy_stats() -> Vec<OccupancyStat> {
    vec![
        OccupancyStat {
            title: "Live Occupancy",
            value: "734",
            trend: Trend::Up,
            change: "10% More than yesterday",
        },
        OccupancyStat {
            title: "Today's Footfall",
            value: "2,436",
            trend: Trend::Down,
            change: "10% Less than yesterday",
        },
        OccupancyStat {
            title: "Avg Dwell Time",
            value: "08min 30sec",
            trend: Trend::Up,
            change: "6% More than yesterday",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_crowd_entries_shape() {
        let entries = crowd_entries();
        assert_eq!(entries.len(), 30);

        let ids: HashSet<u32> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), entries.len(), "ids must be unique");
    }

    #[test]
    fn test_crowd_entries_order_is_stable() {
        assert_eq!(crowd_entries(), crowd_entries());
    }

    #[test]
    fn test_open_visits_have_no_dwell_time() {
        for entry in crowd_entries() {
            if entry.exit == "--" {
                assert_eq!(entry.dwell_time, "--", "entry {}", entry.id);
            }
        }
    }

    #[test]
    fn test_series_align_with_hourly_labels() {
        assert_eq!(occupancy_series().values.len(), HOURLY_LABELS.len());
        for series in demographics_series() {
            assert_eq!(series.values.len(), HOURLY_LABELS.len(), "{}", series.name);
        }
    }

    #[test]
    fn test_demographics_split_sums_to_hundred() {
        let total: f64 = demographics_split().iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < f64::EPSILON);
    }
}
