use std::fmt::Display;

use tracing::{debug, error, info};

use super::entities::{NewOrderDraft, Shipment, ShipmentStatus};

/// Aggregate counters shown in the header cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShipmentStats {
    pub total: usize,
    pub transit: usize,
    pub alert: usize,
    pub done: usize,
}

/// Ticket handed out when a load starts; responses carrying an older ticket
/// than the last applied one are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub shipments: Vec<Shipment>,
    pub selected: Option<Shipment>,
    pub search_term: String,
    pub show_create_modal: bool,
    pub draft: NewOrderDraft,
    create_in_flight: bool,
    issued_loads: u64,
    applied_load: Option<LoadTicket>,
}

impl DashboardState {
    pub fn filtered_shipments(&self) -> Vec<&Shipment> {
        if self.search_term.trim().is_empty() {
            return self.shipments.iter().collect();
        }
        let needle = self.search_term.to_lowercase();
        self.shipments
            .iter()
            .filter(|shipment| shipment.id.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn stats(&self) -> ShipmentStats {
        let mut stats = ShipmentStats {
            total: self.shipments.len(),
            ..ShipmentStats::default()
        };
        for shipment in &self.shipments {
            match shipment.status {
                ShipmentStatus::InTransit => stats.transit += 1,
                ShipmentStatus::Delayed => stats.alert += 1,
                ShipmentStatus::Delivered => stats.done += 1,
                ShipmentStatus::Other(_) => {}
            }
        }
        stats
    }

    pub fn find(&self, id: &str) -> Option<&Shipment> {
        self.shipments.iter().find(|shipment| shipment.id == id)
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued_loads += 1;
        LoadTicket(self.issued_loads)
    }

    /// Applies the outcome of a load. Returns `true` when the shipment list was
    /// replaced.
    pub fn apply_load<E: Display>(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Shipment>, E>,
    ) -> bool {
        if self.applied_load.is_some_and(|applied| applied > ticket) {
            debug!(?ticket, "discarding response from superseded shipment load");
            return false;
        }
        match result {
            Ok(shipments) => {
                info!(count = shipments.len(), "loaded shipments");
                self.shipments = shipments;
                self.applied_load = Some(ticket);
                true
            }
            Err(err) => {
                error!("Failed to reach shipments backend: {err}");
                false
            }
        }
    }

    /// Marks a create request as pending. Returns `false` while another one
    /// has not finished yet.
    pub fn claim_create(&mut self) -> bool {
        if self.create_in_flight {
            debug!("create already in flight; ignoring submit");
            return false;
        }
        self.create_in_flight = true;
        true
    }

    pub fn is_creating(&self) -> bool {
        self.create_in_flight
    }

    /// Applies the outcome of a create request. Returns `true` on success,
    /// after closing the modal and clearing the draft.
    pub fn apply_create<E: Display>(&mut self, result: Result<(), E>) -> bool {
        self.create_in_flight = false;
        match result {
            Ok(()) => {
                self.show_create_modal = false;
                self.draft = NewOrderDraft::default();
                true
            }
            Err(err) => {
                error!("Failed to create shipment: {err}");
                false
            }
        }
    }

    pub fn toggle_create_modal(&mut self) {
        self.show_create_modal = !self.show_create_modal;
        if !self.show_create_modal {
            self.draft = NewOrderDraft::default();
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::shipment;
    use super::*;
    use crate::domain::entities::TransportType;

    fn state_with(ids: &[(&str, ShipmentStatus)]) -> DashboardState {
        DashboardState {
            shipments: ids
                .iter()
                .map(|(id, status)| shipment(id, status.clone()))
                .collect(),
            ..DashboardState::default()
        }
    }

    fn ids(list: Vec<&Shipment>) -> Vec<&str> {
        list.into_iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn blank_search_returns_everything() {
        let mut state = state_with(&[
            ("PED-1001", ShipmentStatus::InTransit),
            ("PED-2002", ShipmentStatus::Delayed),
        ]);
        assert_eq!(ids(state.filtered_shipments()), vec!["PED-1001", "PED-2002"]);

        state.search_term = "   ".to_string();
        assert_eq!(state.filtered_shipments().len(), 2);
    }

    #[test]
    fn search_matches_id_case_insensitively() {
        let mut state = state_with(&[
            ("PED-1001", ShipmentStatus::InTransit),
            ("ped-2002", ShipmentStatus::Delayed),
            ("BOX-1003", ShipmentStatus::Delivered),
        ]);
        state.search_term = "pEd".to_string();
        assert_eq!(ids(state.filtered_shipments()), vec!["PED-1001", "ped-2002"]);

        state.search_term = "100".to_string();
        assert_eq!(ids(state.filtered_shipments()), vec!["PED-1001", "BOX-1003"]);

        state.search_term = "zzz".to_string();
        assert!(state.filtered_shipments().is_empty());
    }

    #[test]
    fn search_ignores_origin_and_destination() {
        let mut state = state_with(&[("PED-1001", ShipmentStatus::InTransit)]);
        state.search_term = "lima".to_string();
        assert!(state.filtered_shipments().is_empty());
    }

    #[test]
    fn stats_count_known_statuses_only_in_buckets() {
        let state = state_with(&[
            ("A", ShipmentStatus::InTransit),
            ("B", ShipmentStatus::InTransit),
            ("C", ShipmentStatus::Delayed),
            ("D", ShipmentStatus::Delivered),
            ("E", ShipmentStatus::from_label("CANCELADO")),
        ]);
        let stats = state.stats();
        assert_eq!(
            stats,
            ShipmentStats {
                total: 5,
                transit: 2,
                alert: 1,
                done: 1,
            }
        );
        assert!(stats.transit + stats.alert + stats.done <= stats.total);
    }

    #[test]
    fn failed_load_keeps_previous_list() {
        let mut empty = DashboardState::default();
        let ticket = empty.begin_load();
        assert!(!empty.apply_load(ticket, Err::<Vec<Shipment>, _>("connection refused")));
        assert!(empty.shipments.is_empty());

        let mut populated = state_with(&[("PED-1001", ShipmentStatus::InTransit)]);
        let ticket = populated.begin_load();
        assert!(!populated.apply_load(ticket, Err::<Vec<Shipment>, _>("timeout")));
        assert_eq!(populated.shipments.len(), 1);
    }

    #[test]
    fn successful_load_replaces_list_wholesale() {
        let mut state = state_with(&[("OLD-1", ShipmentStatus::InTransit)]);
        let ticket = state.begin_load();
        let fresh = vec![shipment("NEW-1", ShipmentStatus::Delivered)];
        assert!(state.apply_load(ticket, Ok::<_, String>(fresh)));
        assert_eq!(ids(state.filtered_shipments()), vec!["NEW-1"]);
    }

    #[test]
    fn stale_load_response_is_discarded() {
        let mut state = DashboardState::default();
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(state.apply_load(second, Ok::<_, String>(vec![shipment("NEW", ShipmentStatus::InTransit)])));
        assert!(!state.apply_load(first, Ok::<_, String>(vec![shipment("OLD", ShipmentStatus::InTransit)])));
        assert_eq!(state.shipments[0].id, "NEW");
    }

    #[test]
    fn create_success_closes_modal_and_resets_draft() {
        let mut state = DashboardState::default();
        state.toggle_create_modal();
        state.draft = NewOrderDraft {
            origin: "Lima".to_string(),
            destination: "Madrid".to_string(),
            transport: TransportType::Air,
        };

        assert!(state.apply_create(Ok::<(), String>(())));
        assert!(!state.show_create_modal);
        assert_eq!(state.draft, NewOrderDraft::default());
        assert_eq!(state.draft.transport, TransportType::Land);
    }

    #[test]
    fn create_failure_keeps_modal_and_draft() {
        let mut state = DashboardState::default();
        state.toggle_create_modal();
        state.draft.origin = "Lima".to_string();

        assert!(!state.apply_create(Err::<(), _>("500 Internal Server Error")));
        assert!(state.show_create_modal);
        assert_eq!(state.draft.origin, "Lima");
    }

    #[test]
    fn closing_modal_discards_draft() {
        let mut state = DashboardState::default();
        state.toggle_create_modal();
        assert!(state.show_create_modal);
        state.draft.destination = "Madrid".to_string();

        state.toggle_create_modal();
        assert!(!state.show_create_modal);
        assert!(state.draft.destination.is_empty());
    }

    #[test]
    fn only_one_create_in_flight() {
        let mut state = DashboardState::default();
        assert!(state.claim_create());
        assert!(state.is_creating());
        assert!(!state.claim_create());

        state.apply_create(Err::<(), _>("timeout"));
        assert!(!state.is_creating());
        assert!(state.claim_create());

        state.apply_create(Ok::<(), String>(()));
        assert!(!state.is_creating());
    }
}
