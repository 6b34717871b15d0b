use std::collections::HashSet;

use substreams::scalar::BigInt;
use substreams_entity_change::{
    pb::entity::EntityChanges,
    tables::{Row, Tables},
};

use crate::{
    pb::tokenlon::common::v1::EventMeta,
    store::{entity_key, FirstSeen},
};

/// Collects the entity changes of one block.
///
/// graph-node merges an update into the stored entity, but a newly created entity needs
/// every non-nullable field. The writer tells callers when a write is the creation so they
/// can fill in defaults, using the first occurrence store to know whether an entity already
/// existed before this block.
pub struct EntityWriter<'a, K: FirstSeen> {
    tables: Tables,
    keys: &'a K,
    block_number: u64,
    touched: HashSet<String>,
}

impl<'a, K: FirstSeen> EntityWriter<'a, K> {
    pub fn new(keys: &'a K, block_number: u64) -> Self {
        EntityWriter { tables: Tables::new(), keys, block_number, touched: HashSet::new() }
    }

    /// Row of an entity written in full on every event.
    pub fn create(&mut self, entity: &str, id: &str) -> &mut Row {
        self.touched
            .insert(entity_key(entity, id));
        self.tables.create_row(entity, id)
    }

    /// Get-or-create. The flag is true when this write creates the entity.
    pub fn upsert(&mut self, entity: &str, id: &str) -> (&mut Row, bool) {
        let key = entity_key(entity, id);
        if !self.touched.insert(key.clone()) {
            return (self.tables.update_row(entity, id), false);
        }

        if self.keys.born_in_block(&key, self.block_number) {
            (self.tables.create_row(entity, id), true)
        } else {
            (self.tables.update_row(entity, id), false)
        }
    }

    /// Whether the entity exists by the time the log at `meta` is handled.
    pub fn exists(&self, entity: &str, id: &str, meta: &EventMeta) -> bool {
        let key = entity_key(entity, id);
        self.touched.contains(&key) ||
            self.keys
                .seen_at_or_before(&key, meta.block_number, meta.ordinal)
    }

    /// Whether this block already wrote the entity.
    pub fn written(&self, entity: &str, id: &str) -> bool {
        self.touched
            .contains(&entity_key(entity, id))
    }

    pub fn keys(&self) -> &K {
        self.keys
    }

    pub fn into_entity_changes(self) -> EntityChanges {
        self.tables.to_entity_changes()
    }
}

/// Transaction fields shared by every entity recorded per transaction.
pub fn write_tx_fields<'r>(row: &'r mut Row, meta: &EventMeta) -> &'r mut Row {
    row.set("from", &meta.tx_from)
        .set("to", &meta.tx_to)
        .set("transactionHash", meta.tx_id())
        .set("blockNumber", BigInt::from(meta.block_number))
        .set("logIndex", BigInt::from(meta.log_index as u64))
        .set("eventAddr", &meta.address)
        .set("gasPrice", meta.gas_price())
        .set("timestamp", meta.timestamp_i32())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        store::Occurrence,
        testing::{event_meta, field, operation, MemoryKeys},
    };
    use substreams_entity_change::pb::entity::{entity_change::Operation, value::Typed};

    #[test]
    fn test_upsert_creates_once_per_block() {
        let keys = MemoryKeys::default();
        let mut writer = EntityWriter::new(&keys, 10);

        let (row, created) = writer.upsert("FeeToken", "0x01");
        row.set("enabled", false);
        assert!(created);

        let (row, created) = writer.upsert("FeeToken", "0x01");
        row.set("enabled", true);
        assert!(!created);

        let changes = writer.into_entity_changes();
        assert_eq!(operation(&changes, "FeeToken", "0x01"), Some(Operation::Create));
        assert_eq!(field(&changes, "FeeToken", "0x01", "enabled"), Some(Typed::Bool(true)));
    }

    #[test]
    fn test_upsert_updates_entities_from_earlier_blocks() {
        let mut keys = MemoryKeys::default();
        keys.apply(vec![Occurrence { ord: 1, key: "FeeToken:0x01".into(), marker: "9:1".into() }]);
        let mut writer = EntityWriter::new(&keys, 10);

        let (_, created) = writer.upsert("FeeToken", "0x01");
        assert!(!created);
        assert_eq!(
            operation(&writer.into_entity_changes(), "FeeToken", "0x01"),
            Some(Operation::Update)
        );
    }

    #[test]
    fn test_exists() {
        let mut keys = MemoryKeys::default();
        keys.apply(vec![Occurrence { ord: 8, key: "Order:0x01".into(), marker: "10:8".into() }]);
        let mut writer = EntityWriter::new(&keys, 10);

        assert!(!writer.exists("Order", "0x01", &event_meta(10, 4)));
        assert!(writer.exists("Order", "0x01", &event_meta(10, 9)));

        writer.create("Swapped", "0xaa");
        assert!(writer.exists("Swapped", "0xaa", &event_meta(10, 1)));
        assert!(writer.written("Swapped", "0xaa"));
        assert!(!writer.written("Order", "0x01"));
    }

    #[test]
    fn test_write_tx_fields() {
        let keys = MemoryKeys::default();
        let mut writer = EntityWriter::new(&keys, 10);
        let meta = EventMeta { gas_price: "42".into(), log_index: 3, ..event_meta(10, 1) };

        write_tx_fields(writer.create("MintLon", &meta.tx_id()), &meta);

        let changes = writer.into_entity_changes();
        let id = meta.tx_id();
        assert_eq!(field(&changes, "MintLon", &id, "gasPrice"), Some(Typed::Bigint("42".into())));
        assert_eq!(field(&changes, "MintLon", &id, "logIndex"), Some(Typed::Bigint("3".into())));
        assert_eq!(field(&changes, "MintLon", &id, "blockNumber"), Some(Typed::Bigint("10".into())));
        assert_eq!(field(&changes, "MintLon", &id, "transactionHash"), Some(Typed::String(id.clone())));
        assert_eq!(
            field(&changes, "MintLon", &id, "timestamp"),
            Some(Typed::Int32(meta.timestamp as i32))
        );
    }
}
