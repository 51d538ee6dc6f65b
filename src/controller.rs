//! Dashboard operations that span the API, view state and the map.
//!
//! Each operation goes through a [`DashboardStore`], so the UI can run them
//! against Dioxus signals while tests use plain cells.

use tracing::{debug, info};

use crate::domain::{DashboardState, NewShipment, Shipment};
use crate::infra::api::ShipmentApi;
use crate::map::{MapPresenter, MapWidget};

/// Access to the dashboard's mutable state.
///
/// Closures must not await; every borrow ends before the next network call.
pub trait DashboardStore {
    type Widget: MapWidget;

    fn with_state<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R;
    fn with_map<R>(&self, f: impl FnOnce(&mut MapPresenter<Self::Widget>) -> R) -> R;
}

/// Fetches the shipment list, replaces local state and, once the map reports
/// ready, rebuilds the markers.
pub async fn load<A, S>(api: &A, store: &S)
where
    A: ShipmentApi + ?Sized,
    S: DashboardStore,
{
    let ticket = store.with_state(|state| state.begin_load());
    let result = api.list_shipments().await;
    if !store.with_state(|state| state.apply_load(ticket, result)) {
        return;
    }

    let readiness = store.with_map(|map| map.readiness());
    readiness.wait().await;

    let shipments = store.with_state(|state| state.shipments.clone());
    store.with_map(|map| map.sync_markers(&shipments));
}

/// Reserves the single create slot; see [`DashboardState::claim_create`].
pub fn claim_create<S: DashboardStore>(store: &S) -> bool {
    store.with_state(|state| state.claim_create())
}

/// Posts the current draft as a new shipment and reloads on success.
pub async fn create<A, S>(api: &A, store: &S)
where
    A: ShipmentApi + ?Sized,
    S: DashboardStore,
{
    let draft = store.with_state(|state| state.draft.clone());
    let order = NewShipment::from_draft(&draft, &mut rand::thread_rng());
    let result = api.create_shipment(&order).await;
    if store.with_state(|state| state.apply_create(result)) {
        info!(id = %order.id, "shipment created");
        load(api, store).await;
    }
}

pub fn select<S: DashboardStore>(store: &S, shipment: Shipment) {
    store.with_map(|map| map.draw_route(&shipment));
    store.with_state(|state| state.selected = Some(shipment));
}

/// Selects the shipment behind a clicked marker.
pub fn select_by_id<S: DashboardStore>(store: &S, id: &str) {
    match store.with_state(|state| state.find(id).cloned()) {
        Some(shipment) => select(store, shipment),
        None => debug!(id, "marker clicked for unknown shipment"),
    }
}

pub fn clear_selection<S: DashboardStore>(store: &S) {
    store.with_state(|state| state.selected = None);
    store.with_map(|map| map.reset());
}

pub fn toggle_create_modal<S: DashboardStore>(store: &S) {
    store.with_state(|state| state.toggle_create_modal());
}
