//! Sample city-wide statistics for the transparency dashboard.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryShare {
    pub name: &'static str,
    pub value: u32,
    pub percentage: u8,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthlyTrend {
    pub month: &'static str,
    pub reported: u32,
    pub resolved: u32,
    pub in_progress: u32,
    pub avg_response_days: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DepartmentPerformance {
    pub department: &'static str,
    pub resolved_pct: u8,
    pub avg_days: f32,
    pub satisfaction: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Headline {
    pub label: &'static str,
    pub value: String,
    /// Percentage change against the previous period.
    pub change: f32,
    /// Whether a negative change is good news (response time).
    pub lower_is_better: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::OneMonth,
        TimeRange::ThreeMonths,
        TimeRange::SixMonths,
        TimeRange::OneYear,
    ];

    pub fn id(self) -> &'static str {
        match self {
            TimeRange::OneMonth => "1month",
            TimeRange::ThreeMonths => "3months",
            TimeRange::SixMonths => "6months",
            TimeRange::OneYear => "1year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::OneMonth => "Last month",
            TimeRange::ThreeMonths => "Last 3 months",
            TimeRange::SixMonths => "Last 6 months",
            TimeRange::OneYear => "Last year",
        }
    }

    pub fn months(self) -> usize {
        match self {
            TimeRange::OneMonth => 1,
            TimeRange::ThreeMonths => 3,
            TimeRange::SixMonths => 6,
            TimeRange::OneYear => 12,
        }
    }

    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|r| r.id() == id)
            .unwrap_or(TimeRange::SixMonths)
    }
}

pub fn categories() -> Vec<CategoryShare> {
    let share = |name, value, percentage, color| CategoryShare {
        name,
        value,
        percentage,
        color,
    };
    vec![
        share("Roads & Infrastructure", 145, 35, "#3B82F6"),
        share("Street Lighting", 89, 22, "#F59E0B"),
        share("Sanitation", 67, 16, "#10B981"),
        share("Parks & Recreation", 54, 13, "#8B5CF6"),
        share("Traffic & Parking", 45, 11, "#EF4444"),
        share("Other", 15, 3, "#6B7280"),
    ]
}

pub fn monthly_trends() -> Vec<MonthlyTrend> {
    let m = |month, reported, resolved, in_progress, avg_response_days| MonthlyTrend {
        month,
        reported,
        resolved,
        in_progress,
        avg_response_days,
    };
    vec![
        m("Jun", 45, 38, 7, 4.2),
        m("Jul", 52, 41, 11, 3.8),
        m("Aug", 48, 45, 3, 3.5),
        m("Sep", 61, 48, 13, 4.1),
        m("Oct", 58, 52, 6, 3.2),
        m("Nov", 43, 39, 4, 2.9),
        m("Dec", 38, 28, 10, 3.1),
    ]
}

pub fn departments() -> Vec<DepartmentPerformance> {
    let d = |department, resolved_pct, avg_days, satisfaction| DepartmentPerformance {
        department,
        resolved_pct,
        avg_days,
        satisfaction,
    };
    vec![
        d("Public Works", 85, 2.8, 4.2),
        d("Parks & Recreation", 78, 3.5, 4.0),
        d("Transportation", 72, 4.1, 3.8),
        d("Sanitation", 91, 1.9, 4.5),
        d("Utilities", 68, 5.2, 3.6),
    ]
}

pub fn headlines() -> Vec<Headline> {
    let h = |label, value: &str, change, lower_is_better| Headline {
        label,
        value: value.to_string(),
        change,
        lower_is_better,
    };
    vec![
        h("Total Reports", "2,847", 12.0, false),
        h("Resolved This Month", "156", 8.0, false),
        h("Avg Response Time", "3.1 days", -15.0, true),
        h("Satisfaction Score", "4.2/5", 0.3, false),
        h("Active Users", "1,243", 18.0, false),
    ]
}

/// The trailing `range` months of `trends`.
pub fn window(trends: &[MonthlyTrend], range: TimeRange) -> &[MonthlyTrend] {
    let keep = range.months().min(trends.len());
    &trends[trends.len() - keep..]
}

/// Share of reported issues resolved, in whole percent.
pub fn resolution_rate(trend: &MonthlyTrend) -> u8 {
    if trend.reported == 0 {
        return 0;
    }
    (u64::from(trend.resolved) * 100 / u64::from(trend.reported)).min(100) as u8
}

/// Bar length as a percentage of the largest value in the chart.
pub fn bar_percent(value: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    (u64::from(value.min(max)) * 100 / u64::from(max)) as u8
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

pub fn change_direction(change: f32) -> Trend {
    if change > 0.0 {
        Trend::Up
    } else {
        Trend::Down
    }
}

/// Whether a headline change is an improvement.
pub fn is_improvement(headline: &Headline) -> bool {
    (headline.change > 0.0) != headline.lower_is_better
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_takes_trailing_months() {
        let trends = monthly_trends();
        let last3 = window(&trends, TimeRange::ThreeMonths);
        assert_eq!(last3.iter().map(|t| t.month).collect::<Vec<_>>(), ["Oct", "Nov", "Dec"]);
        assert_eq!(window(&trends, TimeRange::OneYear).len(), trends.len());
    }

    #[test]
    fn rates_and_bars() {
        let trends = monthly_trends();
        assert_eq!(resolution_rate(&trends[2]), 93);
        assert_eq!(bar_percent(45, 145), 31);
        assert_eq!(bar_percent(200, 145), 100);
        assert_eq!(bar_percent(3, 0), 0);
    }

    #[test]
    fn faster_response_counts_as_improvement() {
        let heads = headlines();
        let response = heads.iter().find(|h| h.lower_is_better).unwrap();
        assert_eq!(change_direction(response.change), Trend::Down);
        assert!(is_improvement(response));
        assert!(heads.iter().all(is_improvement));
    }

    #[test]
    fn unknown_range_defaults_to_six_months() {
        assert_eq!(TimeRange::from_id("decade"), TimeRange::SixMonths);
        assert_eq!(TimeRange::from_id("1month"), TimeRange::OneMonth);
    }

    #[test]
    fn category_percentages_sum_to_100() {
        assert_eq!(categories().iter().map(|c| u32::from(c.percentage)).sum::<u32>(), 100);
    }
}
