use rslcomm_driver::PacketKind;
use rslcomm_registers::{Catalog, ShearwaterCatalog};

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("rslcomm {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    let catalog = ShearwaterCatalog::global();
    let hidden = catalog.iter().filter(|descriptor| descriptor.is_hidden()).count();

    println!("name: rslcomm");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "target: {}",
        option_env!("RSLCOMM_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!("git_hash: {}", option_env!("GIT_HASH").unwrap_or("unknown"));
    println!(
        "registers: {} main, {} hidden",
        catalog.registers().len() - hidden,
        hidden
    );
    println!("broadcast_kinds: {}", PacketKind::ALL.len());

    Ok(SUCCESS)
}
