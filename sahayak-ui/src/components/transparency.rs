use leptos::*;
use sahayak_core::stats::{
    self, bar_percent, change_direction, is_improvement, resolution_rate, window, TimeRange, Trend,
};

#[component]
pub fn Transparency() -> impl IntoView {
    let range = create_rw_signal(TimeRange::SixMonths);
    let trends = store_value(stats::monthly_trends());

    let trend_rows = move || {
        let range = range.get();
        trends.with_value(|all| {
            let shown = window(all, range);
            let max = shown.iter().map(|t| t.reported).max().unwrap_or(0);
            shown
                .iter()
                .map(|t| view! {
                  <div class="chart-row">
                    <span class="chart-label">{t.month}</span>
                    <div class="chart-bars">
                      <div class="bar reported" style=format!("width: {}%", bar_percent(t.reported, max))>{t.reported}</div>
                      <div class="bar resolved" style=format!("width: {}%", bar_percent(t.resolved, max))>{t.resolved}</div>
                    </div>
                    <span class="meta">{format!("{}% resolved · {:.1} days", resolution_rate(t), t.avg_response_days)}</span>
                  </div>
                })
                .collect_view()
        })
    };

    view! {
      <div class="page transparency">
        <section class="row spread">
          <h2>"City Transparency Dashboard"</h2>
          <select on:change=move |ev| range.set(TimeRange::from_id(&event_target_value(&ev)))>
            {TimeRange::ALL
                .into_iter()
                .map(|r| view! { <option value=r.id() selected=move || range.get() == r>{r.label()}</option> })
                .collect_view()}
          </select>
        </section>

        <section class="grid five">
          {stats::headlines()
              .into_iter()
              .map(|h| {
                  let arrow = match change_direction(h.change) {
                      Trend::Up => "▲",
                      Trend::Down => "▼",
                  };
                  let class = if is_improvement(&h) { "change good" } else { "change bad" };
                  view! {
                    <div class="card stat">
                      <div class="meta">{h.label}</div>
                      <div class="stat-value">{h.value}</div>
                      <div class=class>{format!("{arrow} {:.1}%", h.change.abs())}</div>
                    </div>
                  }
              })
              .collect_view()}
        </section>

        <section class="card">
          <h3>"Monthly Trends"</h3>
          <div class="legend row">
            <span class="swatch reported"></span>"Reported"
            <span class="swatch resolved"></span>"Resolved"
          </div>
          {trend_rows}
        </section>

        <section class="grid two">
          <div class="card">
            <h3>"Issues by Category"</h3>
            {stats::categories()
                .into_iter()
                .map(|c| view! {
                  <div class="chart-row">
                    <span class="chart-label">{c.name}</span>
                    <div class="chart-bars">
                      <div class="bar" style=format!("width: {}%; background: {}", c.percentage, c.color)></div>
                    </div>
                    <span class="meta">{format!("{} ({}%)", c.value, c.percentage)}</span>
                  </div>
                })
                .collect_view()}
          </div>
          <div class="card">
            <h3>"Department Performance"</h3>
            <table>
              <thead>
                <tr><th>"Department"</th><th>"Resolved"</th><th>"Avg days"</th><th>"Rating"</th></tr>
              </thead>
              <tbody>
                {stats::departments()
                    .into_iter()
                    .map(|d| view! {
                      <tr>
                        <td>{d.department}</td>
                        <td>{format!("{}%", d.resolved_pct)}</td>
                        <td>{format!("{:.1}", d.avg_days)}</td>
                        <td>{format!("{:.1} ★", d.satisfaction)}</td>
                      </tr>
                    })
                    .collect_view()}
              </tbody>
            </table>
          </div>
        </section>
      </div>
    }
}
