#[path = "1_map_events.rs"]
mod map_events;

#[path = "2_store_totals.rs"]
mod store_totals;

#[path = "2_store_entity_keys.rs"]
mod store_entity_keys;

#[path = "3_graph_out.rs"]
mod graph_out;
