#[path = "1_map_events.rs"]
mod map_events;

#[path = "2_store_staked_amounts.rs"]
mod store_staked_amounts;

#[path = "2_store_entity_keys.rs"]
mod store_entity_keys;

#[path = "3_store_buyback_amounts.rs"]
mod store_buyback_amounts;

#[path = "4_graph_out.rs"]
mod graph_out;
