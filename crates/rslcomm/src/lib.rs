//! Register protocol driver for Redshift Labs IMU/AHRS sensors.
//!
//! rslcomm talks to UM7, UM8 and Shearwater-family sensors over UART or SPI:
//! it frames register reads and writes, verifies checksums, matches replies
//! to requests and decodes the broadcast telemetry the sensor streams on its
//! own.
//!
//! # Crate Structure
//!
//! - [`frame`]: `snp` packet codec and byte stream scanner
//! - [`transport`]: Serial port, generic stream and SPI bridge transports
//! - [`registers`]: Shearwater register catalogue and value decoding
//! - [`driver`]: Register transactions and broadcast demultiplexing
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use rslcomm::driver::Driver;
//! use rslcomm::transport::{SerialConfig, SerialPort};
//!
//! let port = SerialPort::open("/dev/ttyUSB0", SerialConfig::default())?;
//! let mut driver = Driver::new(port);
//!
//! let build = driver.read_named("GET_FW_BUILD_ID")?;
//! println!("firmware build {}", build.value);
//!
//! for packet in driver.broadcasts().take(10) {
//!     println!("{:?}", packet?);
//! }
//! # Ok(())
//! # }
//! ```

/// Re-export frame types.
pub mod frame {
    pub use rslcomm_frame::*;
}

/// Re-export transport types.
pub mod transport {
    pub use rslcomm_transport::*;
}

/// Re-export register catalogue types.
pub mod registers {
    pub use rslcomm_registers::*;
}

/// Re-export driver types.
pub mod driver {
    pub use rslcomm_driver::*;
}
