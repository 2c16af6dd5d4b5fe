use rslcomm_registers::{Catalog, RegisterDescriptor, ShearwaterCatalog};

use crate::cmd::RegistersArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_descriptors, OutputFormat};

pub fn run(args: RegistersArgs, format: OutputFormat) -> CliResult<i32> {
    let filter = args.filter.as_deref().map(str::to_ascii_uppercase);
    let listed: Vec<&RegisterDescriptor> = ShearwaterCatalog::global()
        .iter()
        .filter(|descriptor| args.hidden || !descriptor.is_hidden())
        .filter(|descriptor| match &filter {
            Some(text) => descriptor.name.contains(text.as_str()),
            None => true,
        })
        .collect();

    print_descriptors(&listed, format);
    Ok(SUCCESS)
}
