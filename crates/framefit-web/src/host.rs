#![forbid(unsafe_code)]

//! Host-page binding: a page-lifetime `message` subscription that
//! resizes dashboard iframes to the heights they report.

use framefit_core::{
    FrameSnapshot, HeightListener, HeightPolicy, ListenerConfig, OriginPolicy,
};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlIFrameElement, MessageEvent};

use crate::apply::{css_height_px, log_dispatch};

/// Host-side height listener, exported to JS.
///
/// ```js
/// new FrameFitHost().install();
/// ```
///
/// `install()` consumes the host: the subscription lives for the rest of
/// the page and is never detached.
#[wasm_bindgen]
pub struct FrameFitHost {
    listener: HeightListener,
}

impl Default for FrameFitHost {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl FrameFitHost {
    /// Host with the default policy: exact reported heights, any origin.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self {
            listener: HeightListener::default(),
        }
    }

    /// Host that adds the fixed bottom margin to every applied height.
    /// Use only when the embedded pages measure without their margin.
    #[wasm_bindgen(js_name = withPaddedPolicy)]
    #[must_use]
    pub fn with_padded_policy() -> Self {
        Self {
            listener: HeightListener::new(ListenerConfig {
                policy: HeightPolicy::Padded,
                origins: OriginPolicy::Any,
            }),
        }
    }

    /// Restrict accepted reports to the given sender origins.
    #[wasm_bindgen(js_name = allowOrigins)]
    #[must_use]
    pub fn allow_origins(self, origins: Vec<String>) -> Self {
        let mut config = self.listener.config().clone();
        config.origins = OriginPolicy::Allowlist(origins);
        Self {
            listener: HeightListener::new(config),
        }
    }

    /// Attach the message listener to `window` for the page lifetime.
    pub fn install(self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let listener = self.listener;
        let closure = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            handle_message(&listener, &event);
        });
        window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())?;
        // Page-lifetime singleton subscription; intentionally leaked.
        closure.forget();
        Ok(())
    }
}

fn handle_message(listener: &HeightListener, event: &MessageEvent) {
    let Ok(payload) = js_sys::JSON::stringify(&event.data()) else {
        return;
    };
    let payload = String::from(payload);
    let origin = event.origin();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let frames = document_iframes(&document);
    let snapshot: Vec<FrameSnapshot> = frames
        .iter()
        .map(|frame| FrameSnapshot::new(frame.src()))
        .collect();

    let dispatch = listener.dispatch(&payload, &origin, &snapshot);
    log_dispatch(&dispatch);

    for mutation in &dispatch.mutations {
        let Some(frame) = frames.get(mutation.frame_index) else {
            continue;
        };
        let value = css_height_px(mutation.height_px);
        if let Err(err) = frame.style().set_property("height", &value) {
            warn!(?err, src = frame.src(), "failed to set iframe height");
        }
    }
}

/// Fresh snapshot of every iframe currently in the document. The
/// registry is rebuilt per message; nothing persists across events.
fn document_iframes(document: &Document) -> Vec<HtmlIFrameElement> {
    let Ok(nodes) = document.query_selector_all("iframe") else {
        return Vec::new();
    };
    let mut frames = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(frame) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlIFrameElement>().ok())
        {
            frames.push(frame);
        }
    }
    frames
}
