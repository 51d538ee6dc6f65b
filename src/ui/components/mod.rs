pub mod clock;
pub mod create_order_modal;
pub mod kpi_card;
pub mod map_canvas;
pub mod shipment_details;
pub mod shipment_list;
pub mod status_badge;
