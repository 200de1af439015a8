//! Chart generation and rendering for spending by category.
//!
//! Charts are generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::bar::Bar,
};
use maud::{Markup, PreEscaped, html};

use crate::{
    amount::CURRENCY_CODE,
    html::{ECHARTS_SCRIPT_URL, HeadElement},
    spending::CategoryTotal,
};

/// A chart with its HTML container ID and ECharts configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: String,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

impl SpendingChart {
    /// Create a bar chart of `totals` with one bar per category.
    pub fn new(id: impl Into<String>, title: &str, totals: &[CategoryTotal]) -> Self {
        Self {
            id: id.into(),
            options: category_spending_chart(title, totals).to_string(),
        }
    }
}

/// Renders the HTML containers for charts.
pub fn charts_view(charts: &[SpendingChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded dark:bg-gray-100"
                    {}
                }
            }
        }
    )
}

/// The script elements that load ECharts and initialize `charts`.
///
/// Each chart is set up with dark mode support and responsive resizing.
/// No script is loaded when there are no charts.
pub fn charts_head_elements(charts: &[SpendingChart]) -> Vec<HeadElement> {
    if charts.is_empty() {
        return vec![];
    }

    vec![
        HeadElement::ScriptLink(ECHARTS_SCRIPT_URL.to_owned()),
        charts_script(charts),
    ]
}

fn charts_script(charts: &[SpendingChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

fn category_spending_chart(title: &str, totals: &[CategoryTotal]) -> Chart {
    let labels: Vec<String> = totals.iter().map(|total| total.category.clone()).collect();
    let values: Vec<f64> = totals.iter().map(|total| total.total.to_f64()).collect();

    Chart::new()
        .title(Title::new().text(title).subtext("Spending by category"))
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Bar::new().name("Total").data(values))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        &format!(
            "const currencyFormatter = new Intl.NumberFormat('da-DK', {{
              style: 'currency',
              currency: '{CURRENCY_CODE}'
            }});
            return (number) ? currencyFormatter.format(number) : \"-\";"
        ),
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{
        amount::Amount,
        chart::{SpendingChart, charts_head_elements, charts_view},
        html::HeadElement,
        spending::CategoryTotal,
    };

    fn test_totals() -> Vec<CategoryTotal> {
        vec![
            CategoryTotal {
                category: "Dagligvarer".to_owned(),
                total: Amount::from(150),
            },
            CategoryTotal {
                category: "Transport".to_owned(),
                total: Amount::from(30),
            },
        ]
    }

    #[test]
    fn options_contain_labels_and_values() {
        let chart = SpendingChart::new("account-1-chart", "Opsparing", &test_totals());

        assert!(chart.options.contains("Dagligvarer"), "{}", chart.options);
        assert!(chart.options.contains("Transport"), "{}", chart.options);
        assert!(chart.options.contains("150"), "{}", chart.options);
        assert!(chart.options.contains("Opsparing"), "{}", chart.options);
    }

    #[test]
    fn view_has_container_per_chart() {
        let charts = vec![
            SpendingChart::new("account-1-chart", "Opsparing", &test_totals()),
            SpendingChart::new("account-2-chart", "Budget", &[]),
        ];

        let html = Html::parse_fragment(&charts_view(&charts).into_string());

        for id in ["account-1-chart", "account-2-chart"] {
            let selector = Selector::parse(&format!("div#{id}")).unwrap();
            assert!(
                html.select(&selector).next().is_some(),
                "Could not find chart container with id {id}"
            );
        }
    }

    #[test]
    fn script_initializes_every_chart() {
        let charts = vec![
            SpendingChart::new("account-1-chart", "Opsparing", &test_totals()),
            SpendingChart::new("account-2-chart", "Budget", &[]),
        ];

        let head_elements = charts_head_elements(&charts);

        assert_eq!(head_elements.len(), 2);
        assert!(matches!(head_elements[0], HeadElement::ScriptLink(_)));
        let HeadElement::ScriptSource(ref script) = head_elements[1] else {
            panic!("want script source as second head element");
        };
        assert!(script.0.contains("document.getElementById(\"account-1-chart\")"));
        assert!(script.0.contains("document.getElementById(\"account-2-chart\")"));
    }

    #[test]
    fn no_scripts_without_charts() {
        assert!(charts_head_elements(&[]).is_empty());
    }
}
