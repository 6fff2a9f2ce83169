use std::cell::RefCell;
use std::rc::Rc;

use blackjack_shared::{ReportKind, RequestId};
use wasm_bindgen_futures::spawn_local;

use crate::requests::{await_report, ReportHub};
use crate::store::ReportFetch;

/// Drive one report request to completion in the background.
///
/// Marks the fetch slot `Loading`, then spawns a task that waits for the
/// matching response and writes `Loaded` or `Failed` back into the slot.
/// The caller is responsible for sending the request message with the
/// returned id.
pub fn fetch_report_effect(
    hub: &ReportHub,
    kind: ReportKind,
    fetch: Rc<RefCell<ReportFetch>>,
) -> RequestId {
    let id = hub.begin();
    *fetch.borrow_mut() = ReportFetch::Loading;

    let hub = hub.clone();
    spawn_local(async move {
        let result = await_report(hub, kind, id).await;
        *fetch.borrow_mut() = match result {
            Ok(data) => ReportFetch::Loaded(data),
            Err(e) => {
                tracing::warn!(?kind, "report fetch failed: {e}");
                ReportFetch::Failed(e.to_string())
            }
        };
    });
    id
}
