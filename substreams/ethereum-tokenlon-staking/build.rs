use anyhow::Result;
use substreams_ethereum::Abigen;

fn main() -> Result<(), anyhow::Error> {
    Abigen::new("LonStaking", "abi/LonStaking.json")?
        .generate()?
        .write_to_file("src/abi/lon_staking.rs")?;
    Abigen::new("RewardDistributor", "abi/RewardDistributor.json")?
        .generate()?
        .write_to_file("src/abi/reward_distributor.rs")?;
    anyhow::Ok(())
}
