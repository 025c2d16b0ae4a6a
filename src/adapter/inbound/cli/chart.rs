//! Text rendering of the comparison bar chart.

use crate::domain::ChartData;

use super::output;

/// Width of the longest bar in characters.
pub const BAR_WIDTH: usize = 40;

const FULL_BLOCK: char = '█';

/// Render the chart as one line per bar, scaled from zero.
#[must_use]
pub fn render(chart: &ChartData, width: usize) -> String {
    let max = chart.max_value();
    let label_width = chart
        .bars
        .iter()
        .map(|bar| bar.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut rendered = String::new();
    for bar in &chart.bars {
        let length = if max > 0.0 {
            ((bar.value / max) * width as f64).round() as usize
        } else {
            0
        };
        let blocks: String = std::iter::repeat(FULL_BLOCK).take(length).collect();
        rendered.push_str(&format!(
            "{:<label_width$}  {:<width$}  {}\n",
            bar.label,
            blocks,
            output::amount(bar.value),
        ));
    }
    rendered
}

/// Print the chart with its title.
pub fn print(chart: &ChartData) {
    output::section(chart.title);
    output::lines(&render(chart, BAR_WIDTH));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bar, CHART_TITLE};

    fn chart(with: f64, without: f64) -> ChartData {
        ChartData {
            title: CHART_TITLE,
            bars: [
                Bar {
                    label: "Mit Versicherung",
                    value: with,
                },
                Bar {
                    label: "Ohne Versicherung",
                    value: without,
                },
            ],
        }
    }

    #[test]
    fn larger_bar_fills_width() {
        let rendered = render(&chart(50.0, 100.0), 10);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches(FULL_BLOCK).count(), 5);
        assert_eq!(lines[1].matches(FULL_BLOCK).count(), 10);
    }

    #[test]
    fn labels_and_amounts_are_aligned() {
        let rendered = render(&chart(29_980.0, 29_990.63), 10);
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].starts_with("Mit Versicherung   "));
        assert!(lines[0].ends_with("29,980.00"));
        assert!(lines[1].starts_with("Ohne Versicherung  "));
        assert!(lines[1].ends_with("29,990.63"));
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
    }
}
