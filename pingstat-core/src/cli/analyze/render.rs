use crate::analysis::{PercentileOutcome, SourceAnalysis, TimeoutSpan, WindowOutcome};
use crate::cli::analyze::types::SourceReport;
use owo_colors::OwoColorize;

/// Console report for every source, in order.
pub fn render_reports(reports: &[SourceReport], pretty: bool) -> String {
    let style = Style { pretty };
    let mut out = String::new();

    for report in reports {
        let name = report.source.display().to_string();
        out.push_str(&style.banner(&name));

        match &report.result {
            Ok(analysis) => render_analysis(&mut out, analysis, style),
            Err(err) => out.push_str(&style.error_line(&format!("Error: {err}"))),
        }
        out.push('\n');
    }

    out
}

#[derive(Clone, Copy)]
struct Style {
    pretty: bool,
}

impl Style {
    fn banner(&self, name: &str) -> String {
        let rule = "-".repeat(name.len().max(16) + 2);
        if self.pretty {
            format!("{}\n {} \n{}\n", rule.dimmed(), name.bold(), rule.dimmed())
        } else {
            format!("{rule}\n {name} \n{rule}\n")
        }
    }

    fn heading(&self, title: &str) -> String {
        let title = format!("// {title} //");
        if self.pretty {
            format!("\n {}\n", title.cyan().bold())
        } else {
            format!("\n {title}\n")
        }
    }

    fn error_line(&self, message: &str) -> String {
        let message = format!("[ {message} ]");
        if self.pretty {
            format!(" {}\n", message.red())
        } else {
            format!(" {message}\n")
        }
    }

    fn note_line(&self, message: &str) -> String {
        let message = format!("[ {message} ]");
        if self.pretty {
            format!(" {}\n", message.yellow())
        } else {
            format!(" {message}\n")
        }
    }
}

fn render_analysis(out: &mut String, analysis: &SourceAnalysis, style: Style) {
    let summary = &analysis.summary;

    out.push_str(&style.heading("Packet Counts"));
    out.push_str(&format!(" Transmitted   {:6} packets\n", summary.transmitted));
    out.push_str(&format!(" Received      {:6} packets\n", summary.received));
    out.push_str(&format!(" Lost          {:6} packets\n", summary.lost));
    out.push_str(&format!(
        " Packet Loss Rate is {:5.2}%\n",
        summary.loss_rate_pct
    ));

    out.push_str(&style.heading("Round-Trip Time"));
    let rtt = &summary.rtt;
    out.push_str(&format!(" Round-trip min    = {:9.3} ms\n", rtt.min));
    out.push_str(&format!(" Round-trip max    = {:9.3} ms\n", rtt.max));
    out.push_str(&format!(" Round-trip avg    = {:9.3} ms\n", rtt.mean));
    match rtt.stddev {
        Some(stddev) => out.push_str(&format!(" Round-trip stddev = {:9.3} ms\n", stddev)),
        None => out.push_str(" Round-trip stddev = unavailable\n"),
    }

    if !analysis.percentiles.is_empty() {
        out.push_str(&style.heading("Percentiles"));
        render_percentiles(out, &analysis.percentiles, style);
    }

    if let Some(timeouts) = &analysis.timeouts {
        out.push_str(&style.heading("Consecutive Timeouts"));
        match timeouts {
            Ok(spans) if spans.is_empty() => out.push_str(&style.note_line("No Match")),
            Ok(spans) => {
                for span in spans {
                    out.push_str(&format!(" {}\n", timeout_line(span)));
                }
            }
            Err(err) => {
                out.push_str(&style.error_line(&format!("Error on Timeout Value: {err}")));
            }
        }
    }

    if !analysis.windows.is_empty() {
        out.push_str(&style.heading("Lost-Packet Counts during a Time-Period"));
        render_windows(out, &analysis.windows, style);
    }
}

fn render_percentiles(out: &mut String, outcomes: &[PercentileOutcome], style: Style) {
    for outcome in outcomes {
        match &outcome.value {
            Ok(value) => out.push_str(&format!(
                " {:3}th Percentile is {:9.3} ms\n",
                outcome.rank, value
            )),
            Err(err) => out.push_str(&style.error_line(&format!("Error on Percentiles: {err}"))),
        }
    }
}

fn render_windows(out: &mut String, outcomes: &[WindowOutcome], style: Style) {
    for outcome in outcomes {
        let series = match &outcome.series {
            Ok(series) => series,
            Err(err) => {
                out.push_str(&style.error_line(&format!("Error on Lost-Packet Count: {err}")));
                continue;
            }
        };

        let summary = series.summary();
        out.push_str(&format!(
            " Per {} packets -- {} incidents (max {} packets lost)\n",
            series.window_size, summary.incident_count, summary.max_lost
        ));
        for window in series.incidents() {
            out.push_str(&format!(
                "   Seq {} to {} lost {} packets\n",
                window.start, window.end, window.lost
            ));
        }
    }
}

pub(crate) fn timeout_line(span: &TimeoutSpan) -> String {
    format!(
        "Seq {} to {} : {} packets lost",
        span.before, span.after, span.implied_lost
    )
}
