use crate::app::{app_config, status_class, urgency_class};
use leptos::*;
use sahayak_core::map::{TileView, MAX_ZOOM, TILE_SIZE};
use sahayak_core::sample;

const RADIUS: u32 = 1;

/// Raster-tile map centred on the configured city, with issue markers.
#[component]
pub fn MapView() -> impl IntoView {
    let config = app_config().map;
    let (lat, lng) = (config.center_lat, config.center_lng);
    let view_state = create_rw_signal(TileView::new(&config, RADIUS));
    let issues = store_value(sample::map_issues());
    let selected = create_rw_signal(None::<u32>);

    let tiles = move || {
        view_state.with(|v| {
            v.tiles()
                .into_iter()
                .map(|tile| {
                    let style = format!(
                        "left: {}px; top: {}px; width: {TILE_SIZE}px; height: {TILE_SIZE}px",
                        f64::from(tile.col) * TILE_SIZE,
                        f64::from(tile.row) * TILE_SIZE,
                    );
                    view! { <img class="tile" src=tile.url style=style alt=""/> }
                })
                .collect_view()
        })
    };

    let markers = move || {
        view_state.with(|v| {
            issues.with_value(|all| {
                all.iter()
                    .filter_map(|issue| {
                        let (x, y) = v.marker_offset(issue.lat, issue.lng)?;
                        let id = issue.id;
                        Some(view! {
                          <button
                            class=format!("marker {}", urgency_class(issue.urgency))
                            style=format!("left: {x}px; top: {y}px")
                            title=issue.title.clone()
                            on:click=move |_| selected.set(Some(id))
                          >
                            "📍"
                          </button>
                        })
                    })
                    .collect_view()
            })
        })
    };

    let details = move || -> Option<View> {
        let id = selected.get()?;
        issues.with_value(|all| {
            all.iter().find(|i| i.id == id).map(|issue| view! {
              <div class="card map-popup">
                <strong>{issue.title.clone()}</strong>
                <div class="row">
                  <span class=status_class(issue.status)>{issue.status.label()}</span>
                  <span class=urgency_class(issue.urgency)>{issue.urgency.label()}</span>
                </div>
                <button class="link" on:click=move |_| selected.set(None)>"Close"</button>
              </div>
            }.into_view())
        })
    };

    view! {
      <div class="page map">
        <div class="row spread">
          <span class="meta">{move || format!("Zoom {}", view_state.with(|v| v.zoom))}</span>
          <div class="row">
            <button
              class="ghost"
              disabled=move || view_state.with(|v| v.zoom >= MAX_ZOOM)
              on:click=move |_| view_state.update(|v| *v = v.zoom_in(lat, lng))
            >
              "+"
            </button>
            <button
              class="ghost"
              disabled=move || view_state.with(|v| v.zoom == 0)
              on:click=move |_| view_state.update(|v| *v = v.zoom_out(lat, lng))
            >
              "−"
            </button>
          </div>
        </div>
        <div
          class="map-canvas"
          style=move || {
              let size = view_state.with(TileView::size_px);
              format!("width: {size}px; height: {size}px")
          }
        >
          {tiles}
          {markers}
        </div>
        {details}
        <p class="attribution meta">{config.attribution.clone()}</p>

        <section class="card">
          <h3>"Issues on the map"</h3>
          <ul class="list">
            {issues
                .get_value()
                .into_iter()
                .map(|issue| {
                    let id = issue.id;
                    view! {
                      <li class="row spread" on:click=move |_| selected.set(Some(id))>
                        <span>{issue.title}</span>
                        <span class=status_class(issue.status)>{issue.status.label()}</span>
                      </li>
                    }
                })
                .collect_view()}
          </ul>
        </section>
      </div>
    }
}
