use anyhow::Result;
use substreams_ethereum::Abigen;

fn main() -> Result<(), anyhow::Error> {
    Abigen::new("ERC20", "abi/erc20.json")?
        .generate()?
        .write_to_file("src/abi/erc20.rs")?;
    Abigen::new("ERC20Bytes32", "abi/erc20_bytes32.json")?
        .generate()?
        .write_to_file("src/abi/erc20_bytes32.rs")?;
    anyhow::Ok(())
}
