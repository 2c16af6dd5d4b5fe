use clap::{ArgGroup, Args, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use rslcomm_driver::PacketKind;
use rslcomm_registers::{Catalog, RegisterDescriptor, RegisterSpace, ShearwaterCatalog};

use crate::exit::{register_error, CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod broadcast;
pub mod command;
pub mod link;
pub mod read;
pub mod registers;
pub mod version;
pub mod write;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read one register and print its decoded value.
    Read(ReadArgs),
    /// Write a value to one register.
    Write(WriteArgs),
    /// Trigger a command register (e.g. ZERO_GYROS).
    Command(CommandArgs),
    /// Print broadcast packets as the sensor streams them.
    Broadcast(BroadcastArgs),
    /// List the register catalogue.
    Registers(RegistersArgs),
    /// Show version information.
    Version(VersionArgs),
}

impl Command {
    /// The sensor link this command uses, if it talks to one.
    pub fn link(&self) -> Option<&LinkArgs> {
        match self {
            Command::Read(args) => Some(&args.link),
            Command::Write(args) => Some(&args.link),
            Command::Command(args) => Some(&args.link),
            Command::Broadcast(args) => Some(&args.link),
            Command::Registers(_) | Command::Version(_) => None,
        }
    }
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    let _link = command.link().map(|args| link::span(args).entered());
    match command {
        Command::Read(args) => read::run(args, format),
        Command::Write(args) => write::run(args, format),
        Command::Command(args) => command::run(args, format),
        Command::Broadcast(args) => broadcast::run(args, format),
        Command::Registers(args) => registers::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// How to reach the sensor.
#[derive(Args, Debug, Clone)]
pub struct LinkArgs {
    /// Serial device the sensor (or the USB-ISS adapter) is attached to.
    #[arg(long, short = 'p', value_name = "PATH", env = "RSLCOMM_PORT", conflicts_with = "tcp")]
    pub port: Option<PathBuf>,
    /// TCP serial bridge to use instead of a local port.
    #[arg(long, value_name = "HOST:PORT")]
    pub tcp: Option<String>,
    /// UART line rate.
    #[arg(long, default_value_t = 115_200)]
    pub baud: u32,
    /// Talk SPI through a USB-ISS adapter on --port.
    #[arg(long, conflicts_with = "tcp")]
    pub spi: bool,
    /// Reply timeout for reads and writes (e.g. 150ms, 2s).
    #[arg(long, default_value = "150ms")]
    pub timeout: String,
}

#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Register name or address (e.g. DREG_HEALTH, 0x55).
    pub register: String,
    /// Resolve a numeric address in the hidden register space.
    #[arg(long)]
    pub hidden: bool,
    #[command(flatten)]
    pub link: LinkArgs,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("as").args(["float", "int", "text"])))]
pub struct WriteArgs {
    /// Register name or address.
    pub register: String,
    /// Value to write. Parsed per the register's type unless overridden.
    #[arg(allow_hyphen_values = true)]
    pub value: String,
    /// Resolve a numeric address in the hidden register space.
    #[arg(long)]
    pub hidden: bool,
    /// Encode the value as an IEEE-754 float.
    #[arg(long)]
    pub float: bool,
    /// Encode the value as a signed integer.
    #[arg(long)]
    pub int: bool,
    /// Encode the value as up to four ASCII characters.
    #[arg(long)]
    pub text: bool,
    #[command(flatten)]
    pub link: LinkArgs,
}

#[derive(Args, Debug)]
pub struct CommandArgs {
    /// Command register name (e.g. ZERO_GYROS, RESET_TO_FACTORY).
    pub register: String,
    #[command(flatten)]
    pub link: LinkArgs,
}

#[derive(Args, Debug)]
pub struct BroadcastArgs {
    /// Only print packets of this kind (e.g. euler, quaternion, all-raw).
    #[arg(long, short = 'k')]
    pub kind: Option<PacketKind>,
    /// Exit after printing N packets.
    #[arg(long, short = 'n')]
    pub count: Option<usize>,
    /// Give up after this long without a broadcast (e.g. 5s). Waits forever by default.
    #[arg(long, value_name = "DURATION")]
    pub idle_timeout: Option<String>,
    #[command(flatten)]
    pub link: LinkArgs,
}

#[derive(Args, Debug)]
pub struct RegistersArgs {
    /// Include the hidden register space.
    #[arg(long)]
    pub hidden: bool,
    /// Only list registers whose name contains this text.
    #[arg(long, value_name = "TEXT")]
    pub filter: Option<String>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Resolve a register by name or by `0x`-prefixed / decimal address.
pub fn resolve_register(name: &str, hidden: bool) -> CliResult<&'static RegisterDescriptor> {
    let catalog = ShearwaterCatalog::global();
    if let Some(descriptor) = catalog.find_by_name(name) {
        return Ok(descriptor);
    }

    let address = match name.strip_prefix("0x").or_else(|| name.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16).ok(),
        None => name.parse::<u8>().ok(),
    };
    let space = if hidden {
        RegisterSpace::Hidden
    } else {
        RegisterSpace::Main
    };
    match address {
        Some(address) => catalog
            .lookup_address(address, space)
            .map_err(|err| register_error("unknown register", err)),
        None => catalog
            .lookup(name)
            .map_err(|err| register_error("unknown register", err)),
    }
}

pub fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "duration must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "ms")
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid duration value: {input}")))?;

    if value == 0 {
        return Err(CliError::new(USAGE, "duration must be greater than zero"));
    }

    match unit {
        "s" => Ok(Duration::from_secs(value)),
        _ => Ok(Duration::from_millis(value)),
    }
}
