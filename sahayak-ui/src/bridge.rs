//! Browser-side plumbing: connectivity events, file picking and timers.

use js_sys::Uint8Array;
use leptos::{
    ev, on_cleanup, set_interval_with_handle, set_timeout_with_handle, store_value,
    leptos_dom::helpers::{IntervalHandle, TimeoutHandle},
    window_event_listener, StoredValue,
};
use sahayak_core::model::Attachment;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

pub fn is_online() -> bool {
    web_sys::window()
        .map(|w| w.navigator().on_line())
        .unwrap_or(true)
}

/// Call `on_change(online)` on every `online`/`offline` window event until
/// the owning component unmounts.
pub fn watch_connectivity<F>(on_change: F)
where
    F: Fn(bool) + Clone + 'static,
{
    let up = on_change.clone();
    let online = window_event_listener(ev::online, move |_| up(true));
    let offline = window_event_listener(ev::offline, move |_| on_change(false));
    on_cleanup(move || {
        online.remove();
        offline.remove();
    });
}

/// Files currently selected in the `<input type="file">` that fired `event`.
pub fn picked_files(event: &web_sys::Event) -> Vec<web_sys::File> {
    let Some(input) = event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let Some(list) = input.files() else {
        return Vec::new();
    };
    let files = (0..list.length()).filter_map(|i| list.get(i)).collect();
    // Let the same file be picked again.
    input.set_value("");
    files
}

/// Read a picked file fully into memory. Nothing is uploaded.
pub async fn read_file(file: web_sys::File) -> Result<Attachment, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("failed to read {}: {e:?}", file.name()))?;
    Ok(Attachment {
        name: file.name(),
        mime: file.type_(),
        bytes: Uint8Array::new(&buffer).to_vec(),
    })
}

pub async fn read_files(files: Vec<web_sys::File>) -> Vec<Attachment> {
    let mut out = Vec::with_capacity(files.len());
    for file in files {
        match read_file(file).await {
            Ok(attachment) => out.push(attachment),
            Err(error) => tracing::warn!(%error, "skipping attachment"),
        }
    }
    out
}

/// A repeating timer owned by the component that created it. Cleared when
/// stopped, restarted, or when the component unmounts.
#[derive(Clone, Copy)]
pub struct Ticker(StoredValue<Option<IntervalHandle>>);

impl Ticker {
    pub fn new() -> Self {
        let slot = store_value(None::<IntervalHandle>);
        on_cleanup(move || {
            if let Some(handle) = slot.try_get_value().flatten() {
                handle.clear();
            }
        });
        Self(slot)
    }

    pub fn start<F>(&self, every: Duration, tick: F)
    where
        F: Fn() + 'static,
    {
        self.stop();
        match set_interval_with_handle(tick, every) {
            Ok(handle) => self.0.set_value(Some(handle)),
            Err(e) => tracing::warn!("failed to start interval: {e:?}"),
        }
    }

    pub fn stop(&self) {
        if let Some(handle) = self.0.try_get_value().flatten() {
            handle.clear();
        }
        self.0.set_value(None);
    }
}

/// A one-shot timer with the same ownership rules as [`Ticker`].
#[derive(Clone, Copy)]
pub struct Delay(StoredValue<Option<TimeoutHandle>>);

impl Delay {
    pub fn new() -> Self {
        let slot = store_value(None::<TimeoutHandle>);
        on_cleanup(move || {
            if let Some(handle) = slot.try_get_value().flatten() {
                handle.clear();
            }
        });
        Self(slot)
    }

    pub fn schedule<F>(&self, after: Duration, run: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        match set_timeout_with_handle(run, after) {
            Ok(handle) => self.0.set_value(Some(handle)),
            Err(e) => tracing::warn!("failed to schedule timeout: {e:?}"),
        }
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.0.try_get_value().flatten() {
            handle.clear();
        }
        self.0.set_value(None);
    }
}

/// Any number of one-shot timers that may overlap. All still pending are
/// cleared when the owning component unmounts.
#[derive(Clone, Copy)]
pub struct Timeouts(StoredValue<Vec<TimeoutHandle>>);

impl Timeouts {
    pub fn new() -> Self {
        let slot = store_value(Vec::<TimeoutHandle>::new());
        on_cleanup(move || {
            if let Some(handles) = slot.try_get_value() {
                handles.iter().for_each(TimeoutHandle::clear);
            }
        });
        Self(slot)
    }

    pub fn schedule<F>(&self, after: Duration, run: F)
    where
        F: FnOnce() + 'static,
    {
        match set_timeout_with_handle(run, after) {
            Ok(handle) => self.0.update_value(|handles| handles.push(handle)),
            Err(e) => tracing::warn!("failed to schedule timeout: {e:?}"),
        }
    }
}

pub fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
