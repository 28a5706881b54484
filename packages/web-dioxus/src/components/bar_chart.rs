//! Proportional bar chart for label counts

use dioxus::prelude::*;
use std::collections::HashMap;

#[derive(Props, Clone, PartialEq)]
pub struct BarChartProps {
    pub data: HashMap<String, u64>,
    /// CSS color for the filled bars.
    pub color: &'static str,
}

/// Horizontal bars scaled against the largest count.
#[component]
pub fn BarChart(props: BarChartProps) -> Element {
    let rows = sorted_counts(&props.data);
    if rows.is_empty() {
        return rsx! {
            div { class: "muted", "No data" }
        };
    }

    let max = rows.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let color = props.color;
    let bars: Vec<(String, u64, f64)> = rows
        .into_iter()
        .map(|(label, count)| {
            let percent = bar_percent(count, max);
            (label, count, percent)
        })
        .collect();

    rsx! {
        div { class: "bar-chart",
            for (label, count, percent) in bars {
                div { class: "bar-row", key: "{label}",
                    span { class: "bar-label", "{label}" }
                    div { class: "bar-track",
                        div {
                            class: "bar-fill",
                            style: "width: {percent}%; background: {color};",
                        }
                    }
                    span { class: "bar-value", "{count}" }
                }
            }
        }
    }
}

/// Counts ordered highest first, ties broken by label, so renders are
/// stable from one fetch to the next.
pub fn sorted_counts(data: &HashMap<String, u64>) -> Vec<(String, u64)> {
    let mut rows: Vec<(String, u64)> = data
        .iter()
        .map(|(label, count)| (label.clone(), *count))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

/// Bar width as a percentage of the widest bar. An all-zero chart draws
/// empty tracks instead of dividing by zero.
pub fn bar_percent(count: u64, max: u64) -> f64 {
    if max == 0 {
        0.0
    } else {
        (count as f64 / max as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sort_by_count_then_label() {
        let mut data = HashMap::new();
        data.insert("noise".to_string(), 2);
        data.insert("food".to_string(), 2);
        data.insert("wifi".to_string(), 5);

        let rows = sorted_counts(&data);
        assert_eq!(
            rows,
            vec![
                ("wifi".to_string(), 5),
                ("food".to_string(), 2),
                ("noise".to_string(), 2),
            ]
        );
    }

    #[test]
    fn widest_bar_fills_its_track() {
        assert_eq!(bar_percent(5, 5), 100.0);
    }

    #[test]
    fn bars_scale_linearly() {
        assert_eq!(bar_percent(1, 4), 25.0);
    }

    #[test]
    fn all_zero_counts_draw_nothing() {
        assert_eq!(bar_percent(0, 0), 0.0);
    }
}
