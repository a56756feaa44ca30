//! Grouped bar chart for monthly income and expenses, drawn as inline SVG.

use dioxus::prelude::*;
use store::dashboard::MonthlyFlow;
use store::Theme;

pub const INCOME_COLOR: &str = "#10B981";
pub const EXPENSES_COLOR: &str = "#EF4444";

const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 8.0;
const MARGIN_TOP: f64 = 8.0;
const MARGIN_BOTTOM: f64 = 24.0;
const TICK_COUNT: u64 = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthBars {
    pub month: &'static str,
    /// Horizontal centre of the month's band, for its label.
    pub center: f64,
    pub income: Bar,
    pub expenses: Bar,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub y: f64,
    pub value: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    /// Value at the top of the y axis.
    pub max: u64,
    pub months: Vec<MonthBars>,
    pub ticks: Vec<Tick>,
}

/// Smallest of 1, 2, 2.5, 5 or 10 times a power of ten that is at least `value`.
pub fn nice_ceiling(value: u64) -> u64 {
    if value == 0 {
        return 1;
    }
    let mut magnitude: u64 = 1;
    while magnitude.saturating_mul(10) <= value {
        magnitude *= 10;
    }
    for step in [10, 20, 25, 50] {
        let candidate = magnitude * step / 10;
        if candidate >= value {
            return candidate;
        }
    }
    magnitude.saturating_mul(10)
}

/// Place two bars per month inside a `width` x `height` box.
pub fn layout_bars(flows: &[MonthlyFlow], width: f64, height: f64) -> ChartLayout {
    let peak = flows
        .iter()
        .map(|flow| u64::from(flow.income.max(flow.expenses)))
        .max()
        .unwrap_or(0);
    let max = nice_ceiling(peak);

    let plot_width = (width - MARGIN_LEFT - MARGIN_RIGHT).max(0.0);
    let plot_height = (height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0);
    let baseline = MARGIN_TOP + plot_height;

    let bar = |x: f64, bar_width: f64, value: u32| {
        let bar_height = plot_height * value as f64 / max as f64;
        Bar { x, y: baseline - bar_height, width: bar_width, height: bar_height, value }
    };

    let band = if flows.is_empty() { 0.0 } else { plot_width / flows.len() as f64 };
    let bar_width = band * 0.35;
    let gap = band * 0.04;

    let months = flows
        .iter()
        .enumerate()
        .map(|(index, flow)| {
            let start = MARGIN_LEFT + band * index as f64;
            let center = start + band / 2.0;
            MonthBars {
                month: flow.month,
                center,
                income: bar(center - gap / 2.0 - bar_width, bar_width, flow.income),
                expenses: bar(center + gap / 2.0, bar_width, flow.expenses),
            }
        })
        .collect();

    let ticks = (0..=TICK_COUNT)
        .map(|step| {
            let value = max * step / TICK_COUNT;
            Tick { y: baseline - plot_height * step as f64 / TICK_COUNT as f64, value }
        })
        .collect();

    ChartLayout { width, height, max, months, ticks }
}

#[component]
pub fn BarChart(
    flows: Vec<MonthlyFlow>,
    theme: Theme,
    income_label: String,
    expenses_label: String,
    #[props(default = 560.0)] width: f64,
    #[props(default = 300.0)] height: f64,
) -> Element {
    let layout = layout_bars(&flows, width, height);
    let axis_color = if theme.is_dark() { "#9CA3AF" } else { "#4B5563" };
    let grid_color = if theme.is_dark() { "#374151" } else { "#E5E7EB" };
    let right = layout.width - MARGIN_RIGHT;
    let label_y = layout.height - 6.0;
    let tick_label_x = MARGIN_LEFT - 6.0;

    rsx! {
        figure { class: "chart",
            svg {
                view_box: "0 0 {layout.width} {layout.height}",
                role: "img",
                "aria-label": "{income_label} / {expenses_label}",
                for tick in layout.ticks.iter() {
                    g { key: "{tick.value}",
                        line {
                            x1: "{MARGIN_LEFT}",
                            x2: "{right}",
                            y1: "{tick.y}",
                            y2: "{tick.y}",
                            stroke: grid_color,
                            stroke_dasharray: "3 3",
                        }
                        text {
                            x: "{tick_label_x}",
                            y: "{tick.y}",
                            dy: "4",
                            text_anchor: "end",
                            font_size: "11",
                            fill: axis_color,
                            "{tick.value}"
                        }
                    }
                }
                for month in layout.months.iter() {
                    g { key: "{month.month}",
                        rect {
                            x: "{month.income.x}",
                            y: "{month.income.y}",
                            width: "{month.income.width}",
                            height: "{month.income.height}",
                            fill: INCOME_COLOR,
                            title { "{income_label}: {month.income.value}" }
                        }
                        rect {
                            x: "{month.expenses.x}",
                            y: "{month.expenses.y}",
                            width: "{month.expenses.width}",
                            height: "{month.expenses.height}",
                            fill: EXPENSES_COLOR,
                            title { "{expenses_label}: {month.expenses.value}" }
                        }
                        text {
                            x: "{month.center}",
                            y: "{label_y}",
                            text_anchor: "middle",
                            font_size: "11",
                            fill: axis_color,
                            "{month.month}"
                        }
                    }
                }
            }
            figcaption { class: "chart-legend",
                span { class: "legend-item",
                    span { class: "legend-swatch", style: "background: {INCOME_COLOR}" }
                    "{income_label}"
                }
                span { class: "legend-item",
                    span { class: "legend-swatch", style: "background: {EXPENSES_COLOR}" }
                    "{expenses_label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dioxus::dioxus_core::{AttributeValue, Mutation, VirtualDom};

    use super::*;

    fn flow(month: &'static str, income: u32, expenses: u32) -> MonthlyFlow {
        MonthlyFlow { month, income, expenses }
    }

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(0), 1);
        assert_eq!(nice_ceiling(1), 1);
        assert_eq!(nice_ceiling(250), 250);
        assert_eq!(nice_ceiling(4000), 5000);
        assert_eq!(nice_ceiling(9800), 10000);
        assert_eq!(nice_ceiling(10000), 10000);
    }

    #[test]
    fn test_tallest_bar_reaches_top_at_round_max() {
        let layout = layout_bars(&[flow("Jan", 10000, 2500)], 200.0, 132.0);
        assert_eq!(layout.max, 10000);
        let month = &layout.months[0];
        assert_eq!(month.income.y, MARGIN_TOP);
        assert_eq!(month.income.height, 100.0);
        assert_eq!(month.expenses.height, 25.0);
    }

    #[test]
    fn test_bars_stay_inside_their_band() {
        let flows = vec![flow("Jan", 2400, 4000), flow("Feb", 1398, 3000), flow("Mar", 9800, 2000)];
        let layout = layout_bars(&flows, 356.0, 300.0);
        let band = (356.0 - MARGIN_LEFT - MARGIN_RIGHT) / 3.0;
        for (index, month) in layout.months.iter().enumerate() {
            let start = MARGIN_LEFT + band * index as f64;
            assert!(month.income.x >= start);
            assert!(month.expenses.x + month.expenses.width <= start + band);
            assert!(month.income.x + month.income.width <= month.expenses.x);
        }
    }

    #[test]
    fn test_ticks_span_zero_to_max() {
        let layout = layout_bars(&[flow("Jan", 9800, 4000)], 300.0, 200.0);
        let values: Vec<_> = layout.ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0, 2500, 5000, 7500, 10000]);
        assert_eq!(layout.ticks[0].y, 200.0 - MARGIN_BOTTOM);
        assert_eq!(layout.ticks[4].y, MARGIN_TOP);
    }

    #[test]
    fn test_chart_carries_accessible_label() {
        fn chart() -> Element {
            rsx! {
                BarChart {
                    flows: vec![flow("Jan", 2400, 4000)],
                    theme: Theme::Light,
                    income_label: "Income".to_string(),
                    expenses_label: "Expenses".to_string(),
                }
            }
        }

        let mut dom = VirtualDom::new(chart);
        let mutations = dom.rebuild_to_vec();
        assert!(mutations.edits.iter().any(|edit| matches!(
            edit,
            Mutation::SetAttribute { name: "aria-label", value: AttributeValue::Text(label), .. }
                if label == "Income / Expenses"
        )));
    }

    #[test]
    fn test_empty_chart_has_no_bars() {
        let layout = layout_bars(&[], 300.0, 200.0);
        assert!(layout.months.is_empty());
        assert_eq!(layout.max, 1);
    }
}
