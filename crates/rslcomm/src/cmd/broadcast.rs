use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rslcomm_driver::DriverConfig;
use tracing::{debug, warn};

use crate::cmd::{link, parse_duration, BroadcastArgs};
use crate::exit::{driver_error, CliError, CliResult, SUCCESS, TIMEOUT};
use crate::output::{BroadcastPrinter, OutputFormat};

/// How often an idle stream hands control back, so Ctrl-C is noticed.
const IDLE_POLL: Duration = Duration::from_millis(250);

pub fn run(args: BroadcastArgs, format: OutputFormat) -> CliResult<i32> {
    let give_up_after = args
        .idle_timeout
        .as_deref()
        .map(parse_duration)
        .transpose()?;
    let config = DriverConfig {
        read_timeout: parse_duration(&args.link.timeout)?,
        broadcast_idle_timeout: Some(IDLE_POLL),
        ..DriverConfig::default()
    };
    let mut driver = link::open_with_config(&args.link, config)?;

    let running = Arc::new(AtomicBool::new(true));
    install_ctrlc_handler(running.clone())?;

    let mut printer = BroadcastPrinter::new(format);
    let mut printed = 0usize;
    let mut last_packet = Instant::now();

    let stream = match args.kind {
        Some(kind) => driver.broadcasts_of(kind),
        None => driver.broadcasts(),
    };
    for item in stream {
        if !running.load(Ordering::SeqCst) {
            break;
        }

        let packet = match item {
            Ok(packet) => packet,
            Err(err) if err.is_timeout() => {
                let silent = last_packet.elapsed();
                match give_up_after {
                    Some(limit) if silent >= limit => {
                        return Err(CliError::new(
                            TIMEOUT,
                            format!("no broadcast received within {limit:?}"),
                        ));
                    }
                    _ => continue,
                }
            }
            Err(err) => return Err(driver_error("broadcast failed", err)),
        };

        last_packet = Instant::now();
        printer.print(&packet);
        printed = printed.saturating_add(1);

        if let Some(count) = args.count {
            if printed >= count {
                break;
            }
        }
    }

    let stats = driver.stats();
    if stats.broadcasts_dropped > 0 || stats.checksum_errors > 0 {
        warn!(
            dropped = stats.broadcasts_dropped,
            checksum_errors = stats.checksum_errors,
            "broadcast stream was lossy"
        );
    }
    debug!(printed, stats = ?stats, "broadcast stream stopped");
    Ok(SUCCESS)
}

fn install_ctrlc_handler(running: Arc<AtomicBool>) -> CliResult<()> {
    ctrlc::set_handler(move || {
        running.store(false, Ordering::SeqCst);
    })
    .map_err(|err| {
        CliError::new(
            crate::exit::INTERNAL,
            format!("signal handler setup failed: {err}"),
        )
    })
}
