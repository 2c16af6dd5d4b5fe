mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "rslcomm", version, about = "Redshift Labs sensor register tool")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level for rslcomm's own events (stderr). RSLCOMM_LOG
    /// directives override it.
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rslcomm_driver::PacketKind;

    #[test]
    fn parses_read_subcommand() {
        let cli = Cli::try_parse_from([
            "rslcomm",
            "read",
            "DREG_HEALTH",
            "--port",
            "/dev/ttyUSB0",
            "--baud",
            "921600",
        ])
        .expect("read args should parse");

        match cli.command {
            Command::Read(args) => {
                assert_eq!(args.register, "DREG_HEALTH");
                assert_eq!(args.link.baud, 921_600);
                assert!(!args.link.spi);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn write_accepts_negative_values() {
        let cli = Cli::try_parse_from([
            "rslcomm",
            "write",
            "CREG_MAG_1_BIAS_X",
            "-12.5",
            "--float",
            "--port",
            "/dev/ttyUSB0",
        ])
        .expect("negative value should parse");

        match cli.command {
            Command::Write(args) => {
                assert_eq!(args.value, "-12.5");
                assert!(args.float);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_conflicting_value_encodings() {
        let err = Cli::try_parse_from([
            "rslcomm",
            "write",
            "CREG_COM_SETTINGS",
            "1",
            "--float",
            "--int",
        ])
        .expect_err("conflicting encodings should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn rejects_port_and_tcp_together() {
        let err = Cli::try_parse_from([
            "rslcomm",
            "read",
            "DREG_HEALTH",
            "--port",
            "/dev/ttyUSB0",
            "--tcp",
            "127.0.0.1:2000",
        ])
        .expect_err("two links should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn parses_broadcast_kind() {
        let cli = Cli::try_parse_from([
            "rslcomm",
            "--format",
            "csv",
            "broadcast",
            "--kind",
            "all-raw",
            "--count",
            "5",
            "--tcp",
            "127.0.0.1:2000",
        ])
        .expect("broadcast args should parse");

        assert!(matches!(cli.format, Some(OutputFormat::Csv)));
        match cli.command {
            Command::Broadcast(args) => {
                assert_eq!(args.kind, Some(PacketKind::AllRaw));
                assert_eq!(args.count, Some(5));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_broadcast_kind() {
        let err = Cli::try_parse_from(["rslcomm", "broadcast", "--kind", "sonar"])
            .expect_err("unknown kind should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
