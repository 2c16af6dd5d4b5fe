//! Typed broadcast packets.
//!
//! Each packet is the payload of a batch frame starting at a known data
//! register. All values are big-endian; 16-bit raw samples are followed by
//! two pad bytes so the next value stays register aligned.

use std::fmt;
use std::str::FromStr;

use bytes::Buf;
use serde::Serialize;

/// Quaternion components are transmitted as `i16` multiplied by this.
pub const QUATERNION_SCALE: f32 = 29789.09091;
/// Euler angles and rates are transmitted as `i16` multiplied by this.
pub const EULER_SCALE: f32 = 91.02222;

/// The broadcast packet layouts a Shearwater sensor emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PacketKind {
    Health,
    AllRaw,
    RawGyro1,
    RawGyro2,
    RawAccel1,
    RawMag1,
    RawMag2,
    Temperature,
    AllProc,
    ProcGyro1,
    ProcGyro2,
    ProcAccel1,
    ProcMag1,
    ProcMag2,
    Quaternion,
    Euler,
    Position,
    Velocity,
    Gyro1Bias,
    Gyro2Bias,
}

impl PacketKind {
    pub const ALL: [PacketKind; 20] = [
        PacketKind::Health,
        PacketKind::AllRaw,
        PacketKind::RawGyro1,
        PacketKind::RawGyro2,
        PacketKind::RawAccel1,
        PacketKind::RawMag1,
        PacketKind::RawMag2,
        PacketKind::Temperature,
        PacketKind::AllProc,
        PacketKind::ProcGyro1,
        PacketKind::ProcGyro2,
        PacketKind::ProcAccel1,
        PacketKind::ProcMag1,
        PacketKind::ProcMag2,
        PacketKind::Quaternion,
        PacketKind::Euler,
        PacketKind::Position,
        PacketKind::Velocity,
        PacketKind::Gyro1Bias,
        PacketKind::Gyro2Bias,
    ];

    /// Name of the register the packet's batch starts at.
    pub fn start_register(self) -> &'static str {
        match self {
            PacketKind::Health => "DREG_HEALTH",
            PacketKind::AllRaw | PacketKind::RawGyro1 => "DREG_GYRO_1_RAW_XY",
            PacketKind::RawGyro2 => "DREG_GYRO_2_RAW_XY",
            PacketKind::RawAccel1 => "DREG_ACCEL_1_RAW_XY",
            PacketKind::RawMag1 => "DREG_MAG_1_RAW_X",
            PacketKind::RawMag2 => "DREG_MAG_2_RAW_XY",
            PacketKind::Temperature => "DREG_TEMPERATURE",
            PacketKind::AllProc | PacketKind::ProcGyro1 => "DREG_GYRO_1_PROC_X",
            PacketKind::ProcGyro2 => "DREG_GYRO_2_PROC_X",
            PacketKind::ProcAccel1 => "DREG_ACCEL_1_PROC_X",
            PacketKind::ProcMag1 => "DREG_MAG_1_PROC_X",
            PacketKind::ProcMag2 => "DREG_MAG_2_PROC_X",
            PacketKind::Quaternion => "DREG_QUAT_AB",
            PacketKind::Euler => "DREG_EULER_PHI_THETA",
            PacketKind::Position => "DREG_POSITION_NORTH",
            PacketKind::Velocity => "DREG_VELOCITY_NORTH",
            PacketKind::Gyro1Bias => "DREG_GYRO_1_BIAS_X",
            PacketKind::Gyro2Bias => "DREG_GYRO_2_BIAS_X",
        }
    }

    /// Number of registers carried.
    pub fn register_count(self) -> usize {
        match self {
            PacketKind::Health => 1,
            PacketKind::Temperature => 2,
            PacketKind::RawGyro1
            | PacketKind::RawGyro2
            | PacketKind::RawAccel1
            | PacketKind::RawMag2
            | PacketKind::Quaternion
            | PacketKind::Gyro1Bias
            | PacketKind::Gyro2Bias => 3,
            PacketKind::RawMag1
            | PacketKind::ProcGyro1
            | PacketKind::ProcGyro2
            | PacketKind::ProcAccel1
            | PacketKind::Position
            | PacketKind::Velocity => 4,
            PacketKind::ProcMag1 | PacketKind::ProcMag2 | PacketKind::Euler => 5,
            PacketKind::AllRaw => 18,
            PacketKind::AllProc => 22,
        }
    }

    /// Full wire length of the packet's frame.
    pub fn frame_len(self) -> usize {
        rslcomm_frame::MIN_FRAME_LEN + self.payload_len()
    }

    pub fn payload_len(self) -> usize {
        self.register_count() * rslcomm_frame::VALUE_SIZE
    }

    pub fn name(self) -> &'static str {
        match self {
            PacketKind::Health => "health",
            PacketKind::AllRaw => "all_raw",
            PacketKind::RawGyro1 => "raw_gyro1",
            PacketKind::RawGyro2 => "raw_gyro2",
            PacketKind::RawAccel1 => "raw_accel1",
            PacketKind::RawMag1 => "raw_mag1",
            PacketKind::RawMag2 => "raw_mag2",
            PacketKind::Temperature => "temperature",
            PacketKind::AllProc => "all_proc",
            PacketKind::ProcGyro1 => "proc_gyro1",
            PacketKind::ProcGyro2 => "proc_gyro2",
            PacketKind::ProcAccel1 => "proc_accel1",
            PacketKind::ProcMag1 => "proc_mag1",
            PacketKind::ProcMag2 => "proc_mag2",
            PacketKind::Quaternion => "quaternion",
            PacketKind::Euler => "euler",
            PacketKind::Position => "position",
            PacketKind::Velocity => "velocity",
            PacketKind::Gyro1Bias => "gyro1_bias",
            PacketKind::Gyro2Bias => "gyro2_bias",
        }
    }

    /// Decode a payload of exactly [`PacketKind::payload_len`] bytes.
    pub(crate) fn decode(self, mut payload: &[u8]) -> BroadcastPacket {
        let buf = &mut payload;
        match self {
            PacketKind::Health => BroadcastPacket::Health(Health::from_raw(buf.get_u32())),
            PacketKind::AllRaw => BroadcastPacket::AllRaw(AllRaw {
                gyro_1: RawVector::read_i16(buf),
                gyro_2: RawVector::read_i16(buf),
                accel_1: RawVector::read_i16(buf),
                mag_1: RawVector::read_i32(buf),
                mag_2: RawVector::read_i16(buf),
                temperature: Temperature::read(buf),
            }),
            PacketKind::RawGyro1 => BroadcastPacket::RawGyro1(RawVector::read_i16(buf)),
            PacketKind::RawGyro2 => BroadcastPacket::RawGyro2(RawVector::read_i16(buf)),
            PacketKind::RawAccel1 => BroadcastPacket::RawAccel1(RawVector::read_i16(buf)),
            PacketKind::RawMag1 => BroadcastPacket::RawMag1(RawVector::read_i32(buf)),
            PacketKind::RawMag2 => BroadcastPacket::RawMag2(RawVector::read_i16(buf)),
            PacketKind::Temperature => BroadcastPacket::Temperature(Temperature::read(buf)),
            PacketKind::AllProc => BroadcastPacket::AllProc(AllProc {
                gyro_1: ProcVector::read(buf),
                gyro_2: ProcVector::read(buf),
                accel_1: ProcVector::read(buf),
                mag_1: ProcMag::read(buf),
                mag_2: ProcMag::read(buf),
            }),
            PacketKind::ProcGyro1 => BroadcastPacket::ProcGyro1(ProcVector::read(buf)),
            PacketKind::ProcGyro2 => BroadcastPacket::ProcGyro2(ProcVector::read(buf)),
            PacketKind::ProcAccel1 => BroadcastPacket::ProcAccel1(ProcVector::read(buf)),
            PacketKind::ProcMag1 => BroadcastPacket::ProcMag1(ProcMag::read(buf)),
            PacketKind::ProcMag2 => BroadcastPacket::ProcMag2(ProcMag::read(buf)),
            PacketKind::Quaternion => BroadcastPacket::Quaternion(Quaternion::read(buf)),
            PacketKind::Euler => BroadcastPacket::Euler(Euler::read(buf)),
            PacketKind::Position => BroadcastPacket::Position(NedVector::read(buf)),
            PacketKind::Velocity => BroadcastPacket::Velocity(NedVector::read(buf)),
            PacketKind::Gyro1Bias => BroadcastPacket::Gyro1Bias(GyroBias::read(buf)),
            PacketKind::Gyro2Bias => BroadcastPacket::Gyro2Bias(GyroBias::read(buf)),
        }
    }
}

impl fmt::Display for PacketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PacketKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_").to_ascii_lowercase();
        PacketKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = PacketKind::ALL.iter().map(|k| k.name()).collect();
                format!("unknown packet kind {s:?} (expected one of: {})", names.join(", "))
            })
    }
}

/// Sensor health flags (`DREG_HEALTH`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Health {
    pub raw: u32,
    /// UART transmit buffer overflowed.
    pub overflow: bool,
    pub accel_1_norm: bool,
    pub mag_1_norm: bool,
    pub mag_2_norm: bool,
    pub accel_1_failed: bool,
    pub gyro_1_failed: bool,
    pub gyro_2_failed: bool,
    pub mag_1_failed: bool,
    pub mag_2_failed: bool,
}

impl Health {
    pub fn from_raw(raw: u32) -> Self {
        let bit = |n: u32| (raw >> n) & 1 == 1;
        Self {
            raw,
            overflow: bit(8),
            accel_1_norm: bit(7),
            mag_1_norm: bit(6),
            mag_2_norm: bit(5),
            accel_1_failed: bit(4),
            gyro_1_failed: bit(3),
            gyro_2_failed: bit(2),
            mag_1_failed: bit(1),
            mag_2_failed: bit(0),
        }
    }
}

/// Raw sensor counts with the sample time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RawVector {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub time: f32,
}

impl RawVector {
    fn read_i16(buf: &mut &[u8]) -> Self {
        let x = i32::from(buf.get_i16());
        let y = i32::from(buf.get_i16());
        let z = i32::from(buf.get_i16());
        buf.advance(2);
        Self {
            x,
            y,
            z,
            time: buf.get_f32(),
        }
    }

    fn read_i32(buf: &mut &[u8]) -> Self {
        Self {
            x: buf.get_i32(),
            y: buf.get_i32(),
            z: buf.get_i32(),
            time: buf.get_f32(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Temperature {
    pub celsius: f32,
    pub time: f32,
}

impl Temperature {
    fn read(buf: &mut &[u8]) -> Self {
        Self {
            celsius: buf.get_f32(),
            time: buf.get_f32(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AllRaw {
    pub gyro_1: RawVector,
    pub gyro_2: RawVector,
    pub accel_1: RawVector,
    pub mag_1: RawVector,
    pub mag_2: RawVector,
    pub temperature: Temperature,
}

/// Calibrated sensor output in engineering units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProcVector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub time: f32,
}

impl ProcVector {
    fn read(buf: &mut &[u8]) -> Self {
        Self {
            x: buf.get_f32(),
            y: buf.get_f32(),
            z: buf.get_f32(),
            time: buf.get_f32(),
        }
    }
}

/// Calibrated magnetometer output with the field norm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProcMag {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub norm: f32,
    pub time: f32,
}

impl ProcMag {
    fn read(buf: &mut &[u8]) -> Self {
        Self {
            x: buf.get_f32(),
            y: buf.get_f32(),
            z: buf.get_f32(),
            norm: buf.get_f32(),
            time: buf.get_f32(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AllProc {
    pub gyro_1: ProcVector,
    pub gyro_2: ProcVector,
    pub accel_1: ProcVector,
    pub mag_1: ProcMag,
    pub mag_2: ProcMag,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quaternion {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub time: f32,
}

impl Quaternion {
    fn read(buf: &mut &[u8]) -> Self {
        let mut component = || f32::from(buf.get_i16()) / QUATERNION_SCALE;
        let (w, x, y, z) = (component(), component(), component(), component());
        Self {
            w,
            x,
            y,
            z,
            time: buf.get_f32(),
        }
    }
}

/// Attitude in degrees and angular rates in degrees per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Euler {
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub roll_rate: f32,
    pub pitch_rate: f32,
    pub yaw_rate: f32,
    pub time: f32,
}

impl Euler {
    fn read(buf: &mut &[u8]) -> Self {
        let mut triple = || {
            let a = f32::from(buf.get_i16()) / EULER_SCALE;
            let b = f32::from(buf.get_i16()) / EULER_SCALE;
            let c = f32::from(buf.get_i16()) / EULER_SCALE;
            buf.advance(2);
            (a, b, c)
        };
        let (roll, pitch, yaw) = triple();
        let (roll_rate, pitch_rate, yaw_rate) = triple();
        Self {
            roll,
            pitch,
            yaw,
            roll_rate,
            pitch_rate,
            yaw_rate,
            time: buf.get_f32(),
        }
    }
}

/// North-east-up position (m) or velocity (m/s).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NedVector {
    pub north: f32,
    pub east: f32,
    pub up: f32,
    pub time: f32,
}

impl NedVector {
    fn read(buf: &mut &[u8]) -> Self {
        Self {
            north: buf.get_f32(),
            east: buf.get_f32(),
            up: buf.get_f32(),
            time: buf.get_f32(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GyroBias {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl GyroBias {
    fn read(buf: &mut &[u8]) -> Self {
        Self {
            x: buf.get_f32(),
            y: buf.get_f32(),
            z: buf.get_f32(),
        }
    }
}

/// One decoded broadcast packet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BroadcastPacket {
    Health(Health),
    AllRaw(AllRaw),
    RawGyro1(RawVector),
    RawGyro2(RawVector),
    RawAccel1(RawVector),
    RawMag1(RawVector),
    RawMag2(RawVector),
    Temperature(Temperature),
    AllProc(AllProc),
    ProcGyro1(ProcVector),
    ProcGyro2(ProcVector),
    ProcAccel1(ProcVector),
    ProcMag1(ProcMag),
    ProcMag2(ProcMag),
    Quaternion(Quaternion),
    Euler(Euler),
    Position(NedVector),
    Velocity(NedVector),
    Gyro1Bias(GyroBias),
    Gyro2Bias(GyroBias),
}

impl BroadcastPacket {
    pub fn kind(&self) -> PacketKind {
        match self {
            BroadcastPacket::Health(_) => PacketKind::Health,
            BroadcastPacket::AllRaw(_) => PacketKind::AllRaw,
            BroadcastPacket::RawGyro1(_) => PacketKind::RawGyro1,
            BroadcastPacket::RawGyro2(_) => PacketKind::RawGyro2,
            BroadcastPacket::RawAccel1(_) => PacketKind::RawAccel1,
            BroadcastPacket::RawMag1(_) => PacketKind::RawMag1,
            BroadcastPacket::RawMag2(_) => PacketKind::RawMag2,
            BroadcastPacket::Temperature(_) => PacketKind::Temperature,
            BroadcastPacket::AllProc(_) => PacketKind::AllProc,
            BroadcastPacket::ProcGyro1(_) => PacketKind::ProcGyro1,
            BroadcastPacket::ProcGyro2(_) => PacketKind::ProcGyro2,
            BroadcastPacket::ProcAccel1(_) => PacketKind::ProcAccel1,
            BroadcastPacket::ProcMag1(_) => PacketKind::ProcMag1,
            BroadcastPacket::ProcMag2(_) => PacketKind::ProcMag2,
            BroadcastPacket::Quaternion(_) => PacketKind::Quaternion,
            BroadcastPacket::Euler(_) => PacketKind::Euler,
            BroadcastPacket::Position(_) => PacketKind::Position,
            BroadcastPacket::Velocity(_) => PacketKind::Velocity,
            BroadcastPacket::Gyro1Bias(_) => PacketKind::Gyro1Bias,
            BroadcastPacket::Gyro2Bias(_) => PacketKind::Gyro2Bias,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_lengths_match_layouts() {
        let expected = [
            (PacketKind::Health, 11),
            (PacketKind::AllRaw, 79),
            (PacketKind::RawGyro1, 19),
            (PacketKind::RawMag1, 23),
            (PacketKind::Temperature, 15),
            (PacketKind::AllProc, 95),
            (PacketKind::ProcGyro1, 23),
            (PacketKind::ProcMag1, 27),
            (PacketKind::Quaternion, 19),
            (PacketKind::Euler, 27),
            (PacketKind::Position, 23),
            (PacketKind::Gyro2Bias, 19),
        ];
        for (kind, len) in expected {
            assert_eq!(kind.frame_len(), len, "{kind}");
        }
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in PacketKind::ALL {
            assert_eq!(kind.name().parse::<PacketKind>().unwrap(), kind);
        }
        assert_eq!("Raw-Gyro1".parse::<PacketKind>().unwrap(), PacketKind::RawGyro1);
        assert!("gyro".parse::<PacketKind>().is_err());
    }

    #[test]
    fn serde_tag_matches_name() {
        for kind in PacketKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.name().into()));
        }
    }

    #[test]
    fn quaternion_components_are_scaled() {
        let mut payload = Vec::new();
        for component in [29789i16, 0, -14894, 100] {
            payload.extend_from_slice(&component.to_be_bytes());
        }
        payload.extend_from_slice(&12.5f32.to_be_bytes());

        let BroadcastPacket::Quaternion(q) = PacketKind::Quaternion.decode(&payload) else {
            panic!("wrong variant");
        };
        assert!((q.w - 29789.0 / 29789.09091).abs() < 1e-6);
        assert_eq!(q.x, 0.0);
        assert!((q.y + 0.49998).abs() < 1e-4);
        assert!((q.z - 100.0 / 29789.09091).abs() < 1e-6);
        assert_eq!(q.time, 12.5);
    }

    #[test]
    fn euler_skips_padding_between_triples() {
        let mut payload = Vec::new();
        for raw in [910i16, -455, 16384, 0x7777] {
            payload.extend_from_slice(&raw.to_be_bytes());
        }
        for raw in [91i16, 0, -91, 0x5555] {
            payload.extend_from_slice(&raw.to_be_bytes());
        }
        payload.extend_from_slice(&3.0f32.to_be_bytes());

        let BroadcastPacket::Euler(e) = PacketKind::Euler.decode(&payload) else {
            panic!("wrong variant");
        };
        assert!((e.roll - 9.99756).abs() < 1e-3);
        assert!((e.pitch + 4.99878).abs() < 1e-3);
        assert!((e.yaw - 180.0).abs() < 1e-2);
        assert!((e.roll_rate - 0.99976).abs() < 1e-3);
        assert!((e.yaw_rate + 0.99976).abs() < 1e-3);
        assert_eq!(e.time, 3.0);
    }

    #[test]
    fn all_raw_mixes_widths() {
        let mut payload = Vec::new();
        for base in [1i16, 10, 20] {
            for v in [base, base + 1, base + 2, 0] {
                payload.extend_from_slice(&v.to_be_bytes());
            }
            payload.extend_from_slice(&(base as f32).to_be_bytes());
        }
        for v in [-100_000i32, 200_000, 300_000] {
            payload.extend_from_slice(&v.to_be_bytes());
        }
        payload.extend_from_slice(&4.0f32.to_be_bytes());
        for v in [7i16, 8, 9, 0] {
            payload.extend_from_slice(&v.to_be_bytes());
        }
        payload.extend_from_slice(&5.0f32.to_be_bytes());
        payload.extend_from_slice(&36.6f32.to_be_bytes());
        payload.extend_from_slice(&6.0f32.to_be_bytes());
        assert_eq!(payload.len(), PacketKind::AllRaw.payload_len());

        let BroadcastPacket::AllRaw(raw) = PacketKind::AllRaw.decode(&payload) else {
            panic!("wrong variant");
        };
        assert_eq!((raw.gyro_2.x, raw.gyro_2.z, raw.gyro_2.time), (10, 12, 10.0));
        assert_eq!(raw.mag_1.x, -100_000);
        assert_eq!(raw.mag_1.time, 4.0);
        assert_eq!(raw.mag_2.y, 8);
        assert_eq!(raw.temperature.celsius, 36.6);
        assert_eq!(raw.temperature.time, 6.0);
    }

    #[test]
    fn health_flags_decode() {
        let BroadcastPacket::Health(health) = PacketKind::Health.decode(&0x0109u32.to_be_bytes())
        else {
            panic!("wrong variant");
        };
        assert!(health.overflow && health.gyro_1_failed && health.mag_2_failed);
        assert!(!health.accel_1_norm && !health.mag_1_failed);
    }

    #[test]
    fn packet_serializes_with_kind_tag() {
        let packet = BroadcastPacket::Gyro1Bias(GyroBias {
            x: 1.0,
            y: 2.0,
            z: 3.0,
        });
        let json = serde_json::to_value(&packet).unwrap();
        assert_eq!(json["kind"], "gyro1_bias");
        assert_eq!(json["z"], 3.0);
        assert_eq!(packet.kind(), PacketKind::Gyro1Bias);
    }
}
