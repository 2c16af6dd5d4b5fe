use tracing::debug;

use crate::cmd::{link, resolve_register, ReadArgs};
use crate::exit::{driver_error, CliResult, SUCCESS};
use crate::output::{print_register, OutputFormat};

pub fn run(args: ReadArgs, format: OutputFormat) -> CliResult<i32> {
    let descriptor = resolve_register(&args.register, args.hidden)?;
    let mut driver = link::open(&args.link)?;

    let register = driver
        .read_register(descriptor)
        .map_err(|err| driver_error("read failed", err))?;
    debug!(stats = ?driver.stats(), "read complete");

    print_register(descriptor, &register, format);
    Ok(SUCCESS)
}
