use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use futures_util::StreamExt;
use tokio::sync::mpsc;
use tracing::{error, warn};

use crate::{
    controller::{self, DashboardStore},
    domain::DashboardState,
    infra::{
        api::{ShipmentApi, ShipmentClient},
        config::load_config,
    },
    map::{
        leaflet::{run_bridge, LeafletWidget, MapCommand},
        MapPresenter, MAP_CONTAINER_ID,
    },
    ui::pages::DashboardPage,
    util::assets,
};

/// Signals shared through context; every component mutates dashboard state
/// through these.
#[derive(Clone, Copy)]
pub struct DashboardSignals {
    pub state: Signal<DashboardState>,
    pub map: Signal<MapPresenter<LeafletWidget>>,
}

impl DashboardStore for DashboardSignals {
    type Widget = LeafletWidget;

    fn with_state<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        let mut state = self.state;
        state.with_mut(f)
    }

    fn with_map<R>(&self, f: impl FnOnce(&mut MapPresenter<LeafletWidget>) -> R) -> R {
        let mut map = self.map;
        map.with_mut(f)
    }
}

/// Message sent by the create-order form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitOrder;

/// Runs order creation on the calling component's scope, so the follow-up
/// reload keeps going after the modal unmounts.
pub fn use_order_queue<A>(api: Option<A>, store: DashboardSignals) -> Coroutine<SubmitOrder>
where
    A: ShipmentApi + Clone + 'static,
{
    use_coroutine(move |mut requests: UnboundedReceiver<SubmitOrder>| {
        let api = api.clone();
        async move {
            while requests.next().await.is_some() {
                match &api {
                    Some(api) => controller::create(api, &store).await,
                    None => {
                        store.with_state(|state| {
                            state.apply_create(Err::<(), _>("no shipments client configured"))
                        });
                    }
                }
            }
        }
    })
}

/// Queues the current draft unless a create is already in flight.
pub fn submit_order(store: &DashboardSignals, orders: &Coroutine<SubmitOrder>) {
    if controller::claim_create(store) {
        orders.send(SubmitOrder);
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);
    let api = use_hook(|| match ShipmentClient::new(&config.api_base_url) {
        Ok(client) => Some(client),
        Err(err) => {
            error!("Failed to initialise shipments client: {err}");
            None
        }
    });

    // Receiving half of the map command channel, handed to the bridge task.
    let bridge_commands =
        use_hook(|| Rc::new(RefCell::new(None::<mpsc::UnboundedReceiver<MapCommand>>)));

    let state = use_signal(DashboardState::default);
    let map = use_signal({
        let bridge_commands = bridge_commands.clone();
        let tile_url = config.tile_url.clone();
        move || {
            let (commands, receiver) = mpsc::unbounded_channel();
            bridge_commands.borrow_mut().replace(receiver);
            let mut presenter = MapPresenter::new(LeafletWidget::new(commands));
            presenter.initialize(MAP_CONTAINER_ID, &tile_url);
            presenter
        }
    });

    let store = use_context_provider(|| DashboardSignals { state, map });
    let orders = use_order_queue(api.clone(), store);
    use_context_provider(|| orders);

    let _bridge = use_future(move || {
        let commands = bridge_commands.borrow_mut().take();
        let readiness = map.peek().readiness();
        async move {
            let Some(commands) = commands else {
                return;
            };
            run_bridge(commands, readiness, move |id| {
                controller::select_by_id(&store, &id)
            })
            .await;
        }
    });

    let _initial_load = use_future(move || {
        let api = api.clone();
        async move {
            match api {
                Some(api) => controller::load(&api, &store).await,
                None => warn!("No shipments client configured; skipping initial load."),
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: assets::LEAFLET_CSS_URL }
        document::Script { src: assets::LEAFLET_JS_URL }
        document::Style { "{assets::main_css()}" }
        DashboardPage {}
    }
}
