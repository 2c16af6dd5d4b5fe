use std::net::TcpStream;
use std::path::Path;
use std::time::Duration;

use rslcomm_driver::{Driver, DriverConfig};
use rslcomm_transport::{
    SerialConfig, SerialPort, SpiBridgeTransport, StreamTransport, Transport, UsbIssConfig,
    UsbIssSpi,
};
use tracing::{info, info_span, Span};

use crate::cmd::{parse_duration, LinkArgs};
use crate::exit::{io_error, transport_error, CliError, CliResult, USAGE};

/// Boxed so every command runs the same driver type whatever the link.
pub type Link = Driver<Box<dyn Transport>>;

const TCP_POLL: Duration = Duration::from_millis(1);

/// Span carried by every event of a command that talks to the sensor.
pub fn span(args: &LinkArgs) -> Span {
    let bus = if args.spi { "spi" } else { "uart" };
    info_span!("link", endpoint = %endpoint(args), bus, baud = args.baud)
}

fn endpoint(args: &LinkArgs) -> String {
    match (&args.tcp, &args.port) {
        (Some(address), _) => format!("tcp://{address}"),
        (None, Some(path)) => path.display().to_string(),
        (None, None) => "none".to_string(),
    }
}

pub fn open(args: &LinkArgs) -> CliResult<Link> {
    let timeout = parse_duration(&args.timeout)?;
    let config = DriverConfig {
        read_timeout: timeout,
        write_timeout: timeout,
        ..DriverConfig::default()
    };
    open_with_config(args, config)
}

pub fn open_with_config(args: &LinkArgs, config: DriverConfig) -> CliResult<Link> {
    let transport = open_transport(args)?;
    info!(transport = transport.transport_name(), "link open");
    Ok(Driver::with_config(transport, config))
}

fn open_transport(args: &LinkArgs) -> CliResult<Box<dyn Transport>> {
    if let Some(address) = &args.tcp {
        let stream = TcpStream::connect(address)
            .map_err(|err| io_error(&format!("connect to {address} failed"), err))?;
        stream
            .set_read_timeout(Some(TCP_POLL))
            .and_then(|()| stream.set_nodelay(true))
            .map_err(|err| io_error("socket setup failed", err))?;
        return Ok(Box::new(StreamTransport::new(stream)));
    }

    match &args.port {
        Some(path) => open_port(path, args),
        None => Err(CliError::new(
            USAGE,
            "no sensor link: pass --port PATH (or set RSLCOMM_PORT) or --tcp HOST:PORT",
        )),
    }
}

fn open_port(path: &Path, args: &LinkArgs) -> CliResult<Box<dyn Transport>> {
    let config = SerialConfig {
        baud_rate: args.baud,
        ..SerialConfig::default()
    };
    let port = SerialPort::open(path, config).map_err(|err| transport_error("open failed", err))?;
    if !args.spi {
        return Ok(Box::new(port));
    }

    let bus = UsbIssSpi::new(port, UsbIssConfig::default())
        .map_err(|err| transport_error("USB-ISS setup failed", err))?;
    Ok(Box::new(SpiBridgeTransport::new(bus)))
}
