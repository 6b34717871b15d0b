mod abi;
mod chain;
mod constants;
mod keys;
mod modules;
mod params;
mod pb;

use pb::tokenlon::staking::v1::{staking_event::Event, StakingEvents};
use tokenlon_substreams::prelude::EventMeta;

impl StakingEvents {
    /// Events in ordinal order. Events missing their metadata or payload are skipped.
    pub fn iter(&self) -> impl Iterator<Item = (&EventMeta, &Event)> {
        self.events
            .iter()
            .filter_map(|event| Some((event.meta.as_ref()?, event.event.as_ref()?)))
    }
}
