use anyhow::Result;
use substreams_ethereum::Abigen;

fn main() -> Result<(), anyhow::Error> {
    let contracts = [
        ("AMMWrapper", "amm_wrapper"),
        ("AMMWrapperWithPath", "amm_wrapper_with_path"),
        ("PMM", "pmm"),
        ("LimitOrder", "limit_order"),
        ("LimitOrderBackToMaker", "limit_order_back_to_maker"),
    ];
    for (contract, module) in contracts {
        Abigen::new(contract, &format!("abi/{contract}.json"))?
            .generate()?
            .write_to_file(format!("src/abi/{module}.rs"))?;
    }
    anyhow::Ok(())
}
