use rslcomm_registers::Access;

use crate::cmd::{link, resolve_register, CommandArgs};
use crate::exit::{driver_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_written, OutputFormat};

pub fn run(args: CommandArgs, format: OutputFormat) -> CliResult<i32> {
    let descriptor = resolve_register(&args.register, false)?;
    if descriptor.access != Access::WriteOnly {
        return Err(CliError::new(
            USAGE,
            format!("{} is not a command register", descriptor.name),
        ));
    }

    let mut driver = link::open(&args.link)?;
    driver
        .command(descriptor)
        .map_err(|err| driver_error("command failed", err))?;

    print_written(descriptor, "0", format);
    Ok(SUCCESS)
}
