use rslcomm_registers::{DecodeRule, RegisterInput};

use crate::cmd::{link, resolve_register, WriteArgs};
use crate::exit::{driver_error, register_error, CliResult, SUCCESS};
use crate::output::{print_written, OutputFormat};

pub fn run(args: WriteArgs, format: OutputFormat) -> CliResult<i32> {
    let descriptor = resolve_register(&args.register, args.hidden)?;
    let rule = value_rule(&args, descriptor.rule);
    let input = RegisterInput::parse_for(rule, &args.value)
        .and_then(|input| input.to_bytes().map(|_| input))
        .map_err(|err| register_error("invalid value", err))?;

    let mut driver = link::open(&args.link)?;
    driver
        .write_register(descriptor, input)
        .map_err(|err| driver_error("write failed", err))?;

    print_written(descriptor, args.value.trim(), format);
    Ok(SUCCESS)
}

/// The encoding flags override the register's own type.
fn value_rule(args: &WriteArgs, declared: DecodeRule) -> DecodeRule {
    if args.float {
        DecodeRule::Float
    } else if args.int {
        DecodeRule::Int
    } else if args.text {
        DecodeRule::Text
    } else {
        declared
    }
}
