use substreams::{
    log::info,
    scalar::{BigDecimal, BigInt},
    store::{StoreGet, StoreGetBigInt, StoreGetString},
};
use substreams_entity_change::{pb::entity::EntityChanges, tables::Row};
use tokenlon_substreams::prelude::*;

use crate::{
    constants::{StakeType, BUYBACK_TOTAL_ID, STAKED_TOTAL_ID, START_TIMESTAMP},
    keys::{
        self, BUYBACK_DAY_DATA, BUYBACK_TOTAL, DAILY_LON_STAKING_AMOUNT, DAILY_MINTED_AMOUNT,
        DAILY_STAKED_AMOUNT, DAILY_TREASURY_AMOUNT, FEE_TOKEN, PENALTY, STAKED_DAY_DATA,
        STAKED_TOTAL, TOTAL_LON_STAKING_AMOUNT, TOTAL_MINTED_AMOUNT, TOTAL_STAKED_AMOUNT,
        TOTAL_TREASURY_AMOUNT, TX_COUNT,
    },
    params::Params,
    pb::tokenlon::staking::v1::{
        staking_event::{
            BuyBack, Cooldown, DistributeLon, EnableFeeToken, Event, MintLon, Redeem,
            SetFeeToken, Staked,
        },
        StakingEvents,
    },
};

const STAKED_CHANGE: &str = "StakedChange";
const STAKING_RECORD: &str = "StakingRecord";

#[substreams::handlers::map]
pub fn graph_out(
    params: String,
    events: StakingEvents,
    staked_amounts: StoreGetBigInt,
    buyback_amounts: StoreGetBigInt,
    entity_keys: StoreGetString,
) -> Result<EntityChanges, substreams::errors::Error> {
    let params = Params::parse_from_query(&params)?;
    Ok(entity_changes(&params, &events, &staked_amounts, &buyback_amounts, &entity_keys))
}

pub(crate) fn entity_changes<K, S, B>(
    params: &Params,
    events: &StakingEvents,
    staked_amounts: &S,
    buyback_amounts: &B,
    entity_keys: &K,
) -> EntityChanges
where
    K: FirstSeen,
    S: RunningTotals,
    B: RunningTotals,
{
    let Some(block_number) = events
        .iter()
        .next()
        .map(|(meta, _)| meta.block_number)
    else {
        return EntityChanges::default();
    };

    let mut graph = StakingGraph {
        writer: EntityWriter::new(entity_keys, block_number),
        staked_amounts,
        buyback_amounts,
        lon: &params.lon,
    };
    for (meta, event) in events.iter() {
        match event {
            Event::Staked(ev) => graph.staked(meta, ev),
            Event::Redeem(ev) => graph.redeem(meta, ev),
            Event::Cooldown(ev) => graph.cooldown(meta, ev),
            Event::BuyBack(ev) => graph.buy_back(meta, ev),
            Event::DistributeLon(ev) => graph.distribute_lon(meta, ev),
            Event::MintLon(ev) => graph.mint_lon(meta, ev),
            Event::EnableFeeToken(ev) => graph.enable_fee_token(meta, ev),
            Event::SetFeeToken(ev) => graph.set_fee_token(meta, ev),
        }
    }
    graph.writer.into_entity_changes()
}

struct StakingGraph<'a, K: FirstSeen, S, B> {
    writer: EntityWriter<'a, K>,
    staked_amounts: &'a S,
    buyback_amounts: &'a B,
    lon: &'a [u8],
}

impl<K: FirstSeen, S: RunningTotals, B: RunningTotals> StakingGraph<'_, K, S, B> {
    fn staked(&mut self, meta: &EventMeta, ev: &Staked) {
        let tx = meta.tx_id();
        let amount = parse_bigint(&ev.amount);
        let share = parse_bigint(&ev.share);
        self.record_staked_change(meta, amount.clone(), true, BigInt::zero());

        let (row, _) = self.writer.upsert("Staked", &tx);
        write_tx_fields(row, meta)
            .set("user", &ev.user)
            .set("amount", amount.clone())
            .set("share", share.clone())
            .set("date", meta.day_start() as i32);
        info!("Staked transaction hash: {}", tx);

        let record = self.staking_record(meta, StakeType::Staked, &ev.user);
        record
            .set("amount", amount)
            .set("share", share);

        self.apply_staked_data(meta, parse_bigdecimal(&ev.scale_index));
    }

    fn redeem(&mut self, meta: &EventMeta, ev: &Redeem) {
        let tx = meta.tx_id();
        let amount = parse_bigint(&ev.redeem_amount);
        let share = parse_bigint(&ev.share);
        let penalty = parse_bigint(&ev.penalty_amount);
        self.record_staked_change(meta, amount.clone(), false, penalty.clone());

        let (row, _) = self.writer.upsert("Redeem", &tx);
        write_tx_fields(row, meta)
            .set("user", &ev.user)
            .set("amount", amount.clone())
            .set("share", share.clone())
            .set("penalty", penalty.clone())
            .set("date", meta.day_start() as i32);
        info!("Redeem transaction hash: {}", tx);

        let record = self.staking_record(meta, StakeType::Redeem, &ev.user);
        record
            .set("amount", amount)
            .set("share", share)
            .set("penalty", penalty)
            .set("redeem", true);

        self.apply_staked_data(meta, parse_bigdecimal(&ev.scale_index));
    }

    fn cooldown(&mut self, meta: &EventMeta, ev: &Cooldown) {
        let tx = meta.tx_id();
        let cooldown_seconds = parse_bigint(&ev.cooldown_seconds);

        let (row, _) = self.writer.upsert("Cooldown", &tx);
        write_tx_fields(row, meta)
            .set("user", &ev.user)
            .set("cooldownSeconds", cooldown_seconds.clone())
            .set("date", meta.day_start() as i32);
        info!("Cooldown transaction hash: {}", tx);

        let record = self.staking_record(meta, StakeType::Cooldown, &ev.user);
        record
            .set("cooldownSeconds", cooldown_seconds)
            .set("cooldownDate", meta.day_start() as i32);
    }

    /// `StakedChange` of the transaction, unless an earlier event of it already recorded one.
    fn record_staked_change(&mut self, meta: &EventMeta, amount: BigInt, added: bool, penalty: BigInt) {
        let tx = meta.tx_id();
        if self.writer.written(STAKED_CHANGE, &tx) {
            return;
        }
        self.writer
            .create(STAKED_CHANGE, &tx)
            .set("stakedAmount", amount)
            .set("added", added)
            .set("penalty", penalty)
            .set("timestamp", 0);
    }

    /// Writes the staking record of the transaction, counting it in `StakedTotal.txCount`.
    fn staking_record(&mut self, meta: &EventMeta, stake_type: StakeType, user: &[u8]) -> &mut Row {
        let tx_number = self
            .staked_amounts
            .total_at(meta.ordinal, &keys::staked_total(TX_COUNT));
        self.write_staked_total(meta, None);

        let (row, created) = self.writer.upsert(STAKING_RECORD, &meta.tx_id());
        if created {
            row.set("amount", BigInt::zero())
                .set("penalty", BigInt::zero())
                .set("share", BigInt::zero())
                .set("redeem", false)
                .set("cooldownSeconds", BigInt::zero())
                .set("cooldownDate", 0);
        }
        write_tx_fields(row, meta)
            .set("user", user.to_vec())
            .set("date", meta.day_start() as i32)
            .set("stakeType", i32::from(stake_type))
            .set("txNumber", tx_number)
    }

    fn write_staked_total(&mut self, meta: &EventMeta, scale_index: Option<BigDecimal>) {
        let total_staked = self
            .staked_amounts
            .total_at(meta.ordinal, &keys::staked_total(TOTAL_STAKED_AMOUNT));
        let tx_count = self
            .staked_amounts
            .total_at(meta.ordinal, &keys::staked_total(TX_COUNT));

        let (row, created) = self.writer.upsert(STAKED_TOTAL, STAKED_TOTAL_ID);
        if created {
            row.set("scaleIndex", BigDecimal::zero());
        }
        row.set("totalStakedAmount", total_staked)
            .set("txCount", tx_count);
        if let Some(scale_index) = scale_index {
            row.set("scaleIndex", scale_index);
        }
    }

    fn apply_staked_data(&mut self, meta: &EventMeta, scale_index: BigDecimal) {
        let tx = meta.tx_id();
        if !self.writer.written(STAKED_CHANGE, &tx) {
            info!("should log staked change first {}", tx);
            return;
        }

        let day = meta.day_id();
        let daily_staked = self
            .staked_amounts
            .total_at(meta.ordinal, &keys::staked_day(day, DAILY_STAKED_AMOUNT));
        let penalty = self
            .staked_amounts
            .total_at(meta.ordinal, &keys::staked_day(day, PENALTY));
        let (row, _) = self
            .writer
            .upsert(STAKED_DAY_DATA, &day.to_string());
        row.set("date", meta.day_start() as i32)
            .set("dailyStakedAmount", daily_staked)
            .set("penalty", penalty);

        self.write_staked_total(meta, Some(scale_index));

        self.writer
            .upsert(STAKED_CHANGE, &tx)
            .0
            .set("timestamp", meta.timestamp_i32());
    }

    fn buy_back(&mut self, meta: &EventMeta, ev: &BuyBack) {
        let tx = meta.tx_id();
        let (row, _) = self.writer.upsert("BuyBack", &tx);
        write_tx_fields(row, meta)
            .set("feeToken", &ev.fee_token)
            .set("feeTokenAmount", parse_bigint(&ev.fee_token_amount))
            .set("swappedLonAmount", parse_bigint(&ev.swapped_lon_amount))
            .set("LFactor", parse_bigint(&ev.l_factor))
            .set("RFactor", parse_bigint(&ev.r_factor))
            .set("minBuy", parse_bigint(&ev.min_buy))
            .set("maxBuy", parse_bigint(&ev.max_buy));
        info!("BuyBack transaction hash: {}", tx);
    }

    fn distribute_lon(&mut self, meta: &EventMeta, ev: &DistributeLon) {
        let tx = meta.tx_id();
        let treasury = parse_bigint(&ev.treasury_amount);
        let lon_staking = parse_bigint(&ev.lon_staking_amount);
        let scale_index = parse_bigdecimal(&ev.scale_index);

        self.write_buyback_total(meta, Some(&scale_index));
        self.write_buyback_day(meta, Some(&scale_index));

        if ev.self_buyback {
            let config = ev.lon_fee_token.clone().unwrap_or_default();
            let (row, _) = self.writer.upsert("BuyBack", &tx);
            write_tx_fields(row, meta)
                .set("feeToken", self.lon.to_vec())
                .set("feeTokenAmount", treasury.clone() + lon_staking.clone())
                .set("swappedLonAmount", BigInt::zero())
                .set("LFactor", parse_bigint(&config.l_factor))
                .set("RFactor", parse_bigint(&config.r_factor))
                .set("minBuy", parse_bigint(&config.min_buy))
                .set("maxBuy", parse_bigint(&config.max_buy));
        }

        let (row, _) = self.writer.upsert("DistributeLon", &tx);
        write_tx_fields(row, meta)
            .set("treasuryAmount", treasury)
            .set("lonStakingAmount", lon_staking.clone())
            .set("scaleIndex", scale_index.clone());

        self.record_staked_change(meta, lon_staking, true, BigInt::zero());
        self.apply_staked_data(meta, scale_index);

        info!("DistributeLon transaction hash: {}", tx);
    }

    fn mint_lon(&mut self, meta: &EventMeta, ev: &MintLon) {
        let tx = meta.tx_id();
        let (row, _) = self.writer.upsert("MintLon", &tx);
        write_tx_fields(row, meta).set("mintedAmount", parse_bigint(&ev.minted_amount));

        if !self.writer.written("DistributeLon", &tx) {
            info!("no DistributeLon before MintLon in transaction {}", tx);
        }

        if self
            .writer
            .exists(BUYBACK_DAY_DATA, &meta.day_id().to_string(), meta)
        {
            self.write_buyback_day(meta, None);
        } else {
            info!("couldn't load the buyback day data in transaction: {}", tx);
        }
        self.write_buyback_total(meta, None);

        info!("MintLon transaction hash: {}", tx);
    }

    fn write_buyback_total(&mut self, meta: &EventMeta, scale_index: Option<&BigDecimal>) {
        let total = |field| {
            self.buyback_amounts
                .total_at(meta.ordinal, &keys::buyback_total(field))
        };
        let treasury = total(TOTAL_TREASURY_AMOUNT);
        let lon_staking = total(TOTAL_LON_STAKING_AMOUNT);
        let minted = total(TOTAL_MINTED_AMOUNT);
        let tx_count = total(TX_COUNT);

        let (row, created) = self.writer.upsert(BUYBACK_TOTAL, BUYBACK_TOTAL_ID);
        if created {
            row.set("scaleIndex", BigDecimal::zero())
                .set("lastUpdatedAt", START_TIMESTAMP);
        }
        row.set("totalTreasuryAmount", treasury)
            .set("totalLonStakingAmount", lon_staking)
            .set("totalMintedAmount", minted)
            .set("txCount", tx_count);
        if let Some(scale_index) = scale_index {
            row.set("scaleIndex", scale_index.clone())
                .set("lastUpdatedAt", meta.timestamp_i32());
        }
    }

    fn write_buyback_day(&mut self, meta: &EventMeta, scale_index: Option<&BigDecimal>) {
        let day = meta.day_id();
        let total = |field| {
            self.buyback_amounts
                .total_at(meta.ordinal, &keys::buyback_day(day, field))
        };
        let treasury = total(DAILY_TREASURY_AMOUNT);
        let lon_staking = total(DAILY_LON_STAKING_AMOUNT);
        let minted = total(DAILY_MINTED_AMOUNT);
        let tx_count = total(TX_COUNT);

        let (row, created) = self
            .writer
            .upsert(BUYBACK_DAY_DATA, &day.to_string());
        if created {
            row.set("date", meta.day_start() as i32)
                .set("scaleIndex", BigDecimal::zero())
                .set("lastUpdatedAt", 0);
        }
        row.set("dailyTreasuryAmount", treasury)
            .set("dailyLonStakingAmount", lon_staking)
            .set("dailyMintedAmount", minted)
            .set("txCount", tx_count);
        if let Some(scale_index) = scale_index {
            row.set("scaleIndex", scale_index.clone())
                .set("lastUpdatedAt", meta.timestamp_i32());
        }
    }

    fn enable_fee_token(&mut self, meta: &EventMeta, ev: &EnableFeeToken) {
        let id = meta.tx_log_key();
        let (row, _) = self.writer.upsert("EnableFeeToken", &id);
        write_tx_fields(row, meta)
            .set("feeToken", &ev.fee_token)
            .set("enabled", ev.enable);

        self.fee_token(&ev.fee_token)
            .set("enabled", ev.enable);
        info!("EnableFeeToken transaction hash: {}", meta.tx_id());
    }

    fn set_fee_token(&mut self, meta: &EventMeta, ev: &SetFeeToken) {
        let id = meta.tx_log_key();
        let exchange_index = parse_bigint(&ev.exchange_index);
        let path = ev
            .path
            .iter()
            .map(|hop| to_hex(hop))
            .collect::<Vec<_>>();
        let configure = |row: &mut Row| {
            row.set("exchangeIndex", exchange_index.clone())
                .set("path", path.clone())
                .set("LFactor", parse_bigint(&ev.l_factor))
                .set("RFactor", parse_bigint(&ev.r_factor))
                .set("minBuy", parse_bigint(&ev.min_buy))
                .set("maxBuy", parse_bigint(&ev.max_buy));
        };

        let (row, _) = self.writer.upsert("SetFeeToken", &id);
        write_tx_fields(row, meta).set("feeToken", &ev.fee_token);
        configure(row);

        configure(self.fee_token(&ev.fee_token));
        info!("SetFeeToken transaction hash: {}", meta.tx_id());
    }

    fn fee_token(&mut self, token: &[u8]) -> &mut Row {
        let (row, created) = self
            .writer
            .upsert(FEE_TOKEN, &to_hex(token));
        if created {
            row.set("enabled", false)
                .set("exchangeIndex", BigInt::zero())
                .set("path", Vec::<String>::new())
                .set("LFactor", BigInt::zero())
                .set("RFactor", BigInt::zero())
                .set("minBuy", BigInt::zero())
                .set("maxBuy", BigInt::zero());
        }
        row
    }
}
