//! Shearwater register table.
//!
//! Generated from the Shearwater register description. Do not edit by hand.

use crate::descriptor::{Access, DecodeRule, FieldKind, FieldSpec, RegisterDescriptor, RegisterSpace};

const RW: Access = Access::ReadWrite;
const RO: Access = Access::ReadOnly;
const WO: Access = Access::WriteOnly;

const UINT: DecodeRule = DecodeRule::Uint;
const INT: DecodeRule = DecodeRule::Int;
const FLOAT: DecodeRule = DecodeRule::Float;
const TEXT: DecodeRule = DecodeRule::Text;

macro_rules! reg {
    ($space:ident, $name:expr, $address:expr, $access:expr, $rule:expr $(,)?) => {
        RegisterDescriptor {
            name: $name,
            address: $address,
            space: RegisterSpace::$space,
            access: $access,
            rule: $rule,
        }
    };
}

macro_rules! field {
    ($name:expr, $msb:expr, $lsb:expr, $kind:ident, $scale:expr $(,)?) => {
        FieldSpec {
            name: $name,
            msb: $msb,
            lsb: $lsb,
            kind: FieldKind::$kind,
            scale: $scale,
        }
    };
}

pub(crate) static REGISTERS: &[RegisterDescriptor] = &[
    reg!(Main, "CREG_COM_SETTINGS", 0x00, RW, DecodeRule::Fields(&[field!("BAUD_RATE", 31, 28, Bits, None)])),
    reg!(Main, "CREG_COM_RATES1", 0x01, RW, DecodeRule::Fields(&[
        field!("RAW_ACCEL_1_RATE", 31, 24, Unsigned, None),
        field!("RAW_GYRO_1_RATE", 23, 16, Unsigned, None),
        field!("RAW_GYRO_2_RATE", 15, 8, Unsigned, None),
        field!("RAW_MAG_1_RATE", 7, 0, Unsigned, None),
    ])),
    reg!(Main, "CREG_COM_RATES2", 0x02, RW, DecodeRule::Fields(&[
        field!("TEMP_RATE", 31, 24, Unsigned, None),
        field!("RAW_MAG_2_RATE", 23, 16, Unsigned, None),
        field!("ALL_RAW_RATE", 7, 0, Unsigned, None),
    ])),
    reg!(Main, "CREG_COM_RATES3", 0x03, RW, DecodeRule::Fields(&[
        field!("PROC_ACCEL_1_RATE", 31, 24, Unsigned, None),
        field!("PROC_GYRO_1_RATE", 23, 16, Unsigned, None),
        field!("PROC_GYRO_2_RATE", 15, 8, Unsigned, None),
        field!("PROC_MAG_1_RATE", 7, 0, Unsigned, None),
    ])),
    reg!(Main, "CREG_COM_RATES4", 0x04, RW, DecodeRule::Fields(&[
        field!("PROC_MAG_2_RATE", 31, 24, Unsigned, None),
        field!("ALL_PROC_RATE", 7, 0, Unsigned, None),
    ])),
    reg!(Main, "CREG_COM_RATES5", 0x05, RW, DecodeRule::Fields(&[
        field!("QUAT_RATE", 31, 24, Unsigned, None),
        field!("EULER_RATE", 23, 16, Unsigned, None),
        field!("POSITION_RATE", 15, 8, Unsigned, None),
        field!("VELOCITY_RATE", 7, 0, Unsigned, None),
    ])),
    reg!(Main, "CREG_COM_RATES6", 0x06, RW, DecodeRule::Fields(&[
        field!("POSE_RATE", 31, 24, Unsigned, None),
        field!("HEALTH_RATE", 19, 16, Bits, None),
        field!("GYRO_BIAS_1_RATE", 15, 8, Unsigned, None),
        field!("GYRO_BIAS_2_RATE", 7, 0, Unsigned, None),
    ])),
    reg!(Main, "CREG_COM_RATES7", 0x07, RW, DecodeRule::Fields(&[
        field!("NMEA_HEALTH_RATE", 31, 28, Bits, None),
        field!("NMEA_POSE_RATE", 27, 24, Bits, None),
        field!("NMEA_ATTITUDE_RATE", 23, 20, Bits, None),
        field!("NMEA_SENSOR_RATE", 19, 16, Bits, None),
        field!("NMEA_RATES_RATE", 15, 12, Bits, None),
        field!("NMEA_GPS_POSE_RATE", 11, 8, Bits, None),
        field!("NMEA_QUAT_RATE", 7, 4, Bits, None),
    ])),
    reg!(Main, "CREG_MISC_SETTINGS", 0x08, RW, DecodeRule::Fields(&[
        field!("PPS", 8, 8, Bits, None),
        field!("ZG", 3, 3, Bits, None),
        field!("Q", 2, 2, Bits, None),
        field!("MAG1", 1, 1, Bits, None),
        field!("MAG2", 0, 0, Bits, None),
    ])),
    reg!(Main, "CREG_GYRO_1_MEAS_RANGE", 0x09, RW, DecodeRule::Fields(&[field!("MEAS_GYRO1", 1, 0, Bits, None)])),
    reg!(Main, "CREG_GYRO_1_TRIM_X", 0x0A, RW, FLOAT),
    reg!(Main, "CREG_GYRO_1_TRIM_Y", 0x0B, RW, FLOAT),
    reg!(Main, "CREG_GYRO_1_TRIM_Z", 0x0C, RW, FLOAT),
    reg!(Main, "CREG_GYRO_2_MEAS_RANGE", 0x0D, RW, DecodeRule::Fields(&[field!("MEAS_GYRO2", 1, 0, Bits, None)])),
    reg!(Main, "CREG_GYRO_2_TRIM_X", 0x0E, RW, FLOAT),
    reg!(Main, "CREG_GYRO_2_TRIM_Y", 0x0F, RW, FLOAT),
    reg!(Main, "CREG_GYRO_2_TRIM_Z", 0x10, RW, FLOAT),
    reg!(Main, "CREG_MAG_1_CAL1_1", 0x11, RW, FLOAT),
    reg!(Main, "CREG_MAG_1_CAL1_2", 0x12, RW, FLOAT),
    reg!(Main, "CREG_MAG_1_CAL1_3", 0x13, RW, FLOAT),
    reg!(Main, "CREG_MAG_1_CAL2_1", 0x14, RW, FLOAT),
    reg!(Main, "CREG_MAG_1_CAL2_2", 0x15, RW, FLOAT),
    reg!(Main, "CREG_MAG_1_CAL2_3", 0x16, RW, FLOAT),
    reg!(Main, "CREG_MAG_1_CAL3_1", 0x17, RW, FLOAT),
    reg!(Main, "CREG_MAG_1_CAL3_2", 0x18, RW, FLOAT),
    reg!(Main, "CREG_MAG_1_CAL3_3", 0x19, RW, FLOAT),
    reg!(Main, "CREG_MAG_1_BIAS_X", 0x1A, RW, FLOAT),
    reg!(Main, "CREG_MAG_1_BIAS_Y", 0x1B, RW, FLOAT),
    reg!(Main, "CREG_MAG_1_BIAS_Z", 0x1C, RW, FLOAT),
    reg!(Main, "CREG_MAG_2_CAL1_1", 0x1D, RW, FLOAT),
    reg!(Main, "CREG_MAG_2_CAL1_2", 0x1E, RW, FLOAT),
    reg!(Main, "CREG_MAG_2_CAL1_3", 0x1F, RW, FLOAT),
    reg!(Main, "CREG_MAG_2_CAL2_1", 0x20, RW, FLOAT),
    reg!(Main, "CREG_MAG_2_CAL2_2", 0x21, RW, FLOAT),
    reg!(Main, "CREG_MAG_2_CAL2_3", 0x22, RW, FLOAT),
    reg!(Main, "CREG_MAG_2_CAL3_1", 0x23, RW, FLOAT),
    reg!(Main, "CREG_MAG_2_CAL3_2", 0x24, RW, FLOAT),
    reg!(Main, "CREG_MAG_2_CAL3_3", 0x25, RW, FLOAT),
    reg!(Main, "CREG_MAG_2_BIAS_X", 0x26, RW, FLOAT),
    reg!(Main, "CREG_MAG_2_BIAS_Y", 0x27, RW, FLOAT),
    reg!(Main, "CREG_MAG_2_BIAS_Z", 0x28, RW, FLOAT),
    reg!(Main, "CREG_ACCEL_1_MEAS_RANGE", 0x29, RW, DecodeRule::Fields(&[field!("MEAS_ACC1", 1, 0, Bits, None)])),
    reg!(Main, "CREG_ACCEL_1_CAL1_1", 0x2A, RW, FLOAT),
    reg!(Main, "CREG_ACCEL_1_CAL1_2", 0x2B, RW, FLOAT),
    reg!(Main, "CREG_ACCEL_1_CAL1_3", 0x2C, RW, FLOAT),
    reg!(Main, "CREG_ACCEL_1_CAL2_1", 0x2D, RW, FLOAT),
    reg!(Main, "CREG_ACCEL_1_CAL2_2", 0x2E, RW, FLOAT),
    reg!(Main, "CREG_ACCEL_1_CAL2_3", 0x2F, RW, FLOAT),
    reg!(Main, "CREG_ACCEL_1_CAL3_1", 0x30, RW, FLOAT),
    reg!(Main, "CREG_ACCEL_1_CAL3_2", 0x31, RW, FLOAT),
    reg!(Main, "CREG_ACCEL_1_CAL3_3", 0x32, RW, FLOAT),
    reg!(Main, "CREG_ACCEL_1_BIAS_X", 0x33, RW, FLOAT),
    reg!(Main, "CREG_ACCEL_1_BIAS_Y", 0x34, RW, FLOAT),
    reg!(Main, "CREG_ACCEL_1_BIAS_Z", 0x35, RW, FLOAT),
    reg!(Main, "DREG_HEALTH", 0x55, RO, DecodeRule::Fields(&[
        field!("OVF", 8, 8, Bits, None),
        field!("ACC1_N", 7, 7, Bits, None),
        field!("MAG1_N", 6, 6, Bits, None),
        field!("MAG2_N", 5, 5, Bits, None),
        field!("ACCEL1", 4, 4, Bits, None),
        field!("GYRO1", 3, 3, Bits, None),
        field!("GYRO2", 2, 2, Bits, None),
        field!("MAG1", 1, 1, Bits, None),
        field!("MAG2", 0, 0, Bits, None),
    ])),
    reg!(Main, "DREG_GYRO_1_RAW_XY", 0x56, RO, DecodeRule::Fields(&[
        field!("GYRO_1_RAW_X", 31, 16, Signed, None),
        field!("GYRO_1_RAW_Y", 15, 0, Signed, None),
    ])),
    reg!(Main, "DREG_GYRO_1_RAW_Z", 0x57, RO, DecodeRule::Fields(&[field!("GYRO_1_RAW_Z", 31, 16, Signed, None)])),
    reg!(Main, "DREG_GYRO_1_RAW_TIME", 0x58, RO, FLOAT),
    reg!(Main, "DREG_GYRO_2_RAW_XY", 0x59, RO, DecodeRule::Fields(&[
        field!("GYRO_2_RAW_X", 31, 16, Signed, None),
        field!("GYRO_2_RAW_Y", 15, 0, Signed, None),
    ])),
    reg!(Main, "DREG_GYRO_2_RAW_Z", 0x5A, RO, DecodeRule::Fields(&[field!("GYRO_2_RAW_Z", 31, 16, Signed, None)])),
    reg!(Main, "DREG_GYRO_2_RAW_TIME", 0x5B, RO, FLOAT),
    reg!(Main, "DREG_ACCEL_1_RAW_XY", 0x5C, RO, DecodeRule::Fields(&[
        field!("ACCEL_1_RAW_X", 31, 16, Signed, None),
        field!("ACCEL_1_RAW_Y", 15, 0, Signed, None),
    ])),
    reg!(Main, "DREG_ACCEL_1_RAW_Z", 0x5D, RO, DecodeRule::Fields(&[field!("ACCEL_1_RAW_Z", 31, 16, Signed, None)])),
    reg!(Main, "DREG_ACCEL_1_RAW_TIME", 0x5E, RO, FLOAT),
    reg!(Main, "DREG_MAG_1_RAW_X", 0x5F, RO, INT),
    reg!(Main, "DREG_MAG_1_RAW_Y", 0x60, RO, INT),
    reg!(Main, "DREG_MAG_1_RAW_Z", 0x61, RO, INT),
    reg!(Main, "DREG_MAG_1_RAW_TIME", 0x62, RO, FLOAT),
    reg!(Main, "DREG_MAG_2_RAW_XY", 0x63, RO, DecodeRule::Fields(&[
        field!("MAG_2_RAW_X", 31, 16, Signed, None),
        field!("MAG_2_RAW_Y", 15, 0, Signed, None),
    ])),
    reg!(Main, "DREG_MAG_2_RAW_Z", 0x64, RO, DecodeRule::Fields(&[field!("MAG_2_RAW_Z", 31, 16, Signed, None)])),
    reg!(Main, "DREG_MAG_2_RAW_TIME", 0x65, RO, FLOAT),
    reg!(Main, "DREG_TEMPERATURE", 0x66, RO, FLOAT),
    reg!(Main, "DREG_TEMPERATURE_TIME", 0x67, RO, FLOAT),
    reg!(Main, "DREG_GYRO_1_PROC_X", 0x68, RO, FLOAT),
    reg!(Main, "DREG_GYRO_1_PROC_Y", 0x69, RO, FLOAT),
    reg!(Main, "DREG_GYRO_1_PROC_Z", 0x6A, RO, FLOAT),
    reg!(Main, "DREG_GYRO_1_PROC_TIME", 0x6B, RO, FLOAT),
    reg!(Main, "DREG_GYRO_2_PROC_X", 0x6C, RO, FLOAT),
    reg!(Main, "DREG_GYRO_2_PROC_Y", 0x6D, RO, FLOAT),
    reg!(Main, "DREG_GYRO_2_PROC_Z", 0x6E, RO, FLOAT),
    reg!(Main, "DREG_GYRO_2_PROC_TIME", 0x6F, RO, FLOAT),
    reg!(Main, "DREG_ACCEL_1_PROC_X", 0x70, RO, FLOAT),
    reg!(Main, "DREG_ACCEL_1_PROC_Y", 0x71, RO, FLOAT),
    reg!(Main, "DREG_ACCEL_1_PROC_Z", 0x72, RO, FLOAT),
    reg!(Main, "DREG_ACCEL_1_PROC_TIME", 0x73, RO, FLOAT),
    reg!(Main, "DREG_MAG_1_PROC_X", 0x74, RO, FLOAT),
    reg!(Main, "DREG_MAG_1_PROC_Y", 0x75, RO, FLOAT),
    reg!(Main, "DREG_MAG_1_PROC_Z", 0x76, RO, FLOAT),
    reg!(Main, "DREG_MAG_1_NORM", 0x77, RO, FLOAT),
    reg!(Main, "DREG_MAG_1_PROC_TIME", 0x78, RO, FLOAT),
    reg!(Main, "DREG_MAG_2_PROC_X", 0x79, RO, FLOAT),
    reg!(Main, "DREG_MAG_2_PROC_Y", 0x7A, RO, FLOAT),
    reg!(Main, "DREG_MAG_2_PROC_Z", 0x7B, RO, FLOAT),
    reg!(Main, "DREG_MAG_2_NORM", 0x7C, RO, FLOAT),
    reg!(Main, "DREG_MAG_2_PROC_TIME", 0x7D, RO, FLOAT),
    reg!(Main, "DREG_QUAT_AB", 0x7E, RO, DecodeRule::Fields(&[
        field!("QUAT_A", 31, 16, Signed, Some(29789.09091)),
        field!("QUAT_B", 15, 0, Signed, Some(29789.09091)),
    ])),
    reg!(Main, "DREG_QUAT_CD", 0x7F, RO, DecodeRule::Fields(&[
        field!("QUAT_C", 31, 16, Signed, Some(29789.09091)),
        field!("QUAT_D", 15, 0, Signed, Some(29789.09091)),
    ])),
    reg!(Main, "DREG_QUAT_TIME", 0x80, RO, FLOAT),
    reg!(Main, "DREG_EULER_PHI_THETA", 0x81, RO, DecodeRule::Fields(&[
        field!("PHI", 31, 16, Signed, Some(91.02222)),
        field!("THETA", 15, 0, Signed, Some(91.02222)),
    ])),
    reg!(Main, "DREG_EULER_PSI", 0x82, RO, DecodeRule::Fields(&[field!("PSI", 31, 16, Signed, Some(91.02222))])),
    reg!(Main, "DREG_EULER_PHI_THETA_DOT", 0x83, RO, DecodeRule::Fields(&[
        field!("PHI_DOT", 31, 16, Signed, Some(16.0)),
        field!("THETA_DOT", 15, 0, Signed, Some(16.0)),
    ])),
    reg!(Main, "DREG_EULER_PSI_DOT", 0x84, RO, DecodeRule::Fields(&[field!("PSI_DOT", 31, 16, Signed, Some(16.0))])),
    reg!(Main, "DREG_EULER_TIME", 0x85, RO, FLOAT),
    reg!(Main, "DREG_POSITION_NORTH", 0x86, RO, FLOAT),
    reg!(Main, "DREG_POSITION_EAST", 0x87, RO, FLOAT),
    reg!(Main, "DREG_POSITION_UP", 0x88, RO, FLOAT),
    reg!(Main, "DREG_POSITION_TIME", 0x89, RO, FLOAT),
    reg!(Main, "DREG_VELOCITY_NORTH", 0x8A, RO, FLOAT),
    reg!(Main, "DREG_VELOCITY_EAST", 0x8B, RO, FLOAT),
    reg!(Main, "DREG_VELOCITY_UP", 0x8C, RO, FLOAT),
    reg!(Main, "DREG_VELOCITY_TIME", 0x8D, RO, FLOAT),
    reg!(Main, "DREG_GYRO_1_BIAS_X", 0x8E, RO, FLOAT),
    reg!(Main, "DREG_GYRO_1_BIAS_Y", 0x8F, RO, FLOAT),
    reg!(Main, "DREG_GYRO_1_BIAS_Z", 0x90, RO, FLOAT),
    reg!(Main, "DREG_GYRO_2_BIAS_X", 0x91, RO, FLOAT),
    reg!(Main, "DREG_GYRO_2_BIAS_Y", 0x92, RO, FLOAT),
    reg!(Main, "DREG_GYRO_2_BIAS_Z", 0x93, RO, FLOAT),
    reg!(Main, "GET_FW_BUILD_ID", 0xAA, RO, TEXT),
    reg!(Main, "GET_FW_BUILD_VERSION", 0xAB, RO, DecodeRule::Fields(&[
        field!("VERSION_MAJOR", 31, 24, Unsigned, None),
        field!("VERSION_MINOR", 23, 16, Unsigned, None),
        field!("BUILD_ID", 15, 0, Unsigned, None),
    ])),
    reg!(Main, "FLASH_COMMIT", 0xAC, WO, UINT),
    reg!(Main, "RESET_TO_FACTORY", 0xAD, WO, UINT),
    reg!(Main, "ZERO_GYROS", 0xAE, WO, UINT),
    reg!(Main, "SET_HOME_POSITION", 0xB0, WO, UINT),
    reg!(Main, "SET_MAG_REFERENCE", 0xB1, WO, UINT),
    reg!(Main, "CALIBRATE_ACCELEROMETERS", 0xB2, WO, UINT),
    reg!(Main, "RESET_FUSION", 0xB3, WO, UINT),
    reg!(Main, "ENABLE_ZUPT", 0xB4, WO, UINT),
    reg!(Main, "EULER_MODE", 0xB5, WO, UINT),
    reg!(Main, "QUATERNION_MODE", 0xB6, WO, UINT),
    reg!(Main, "ENABLE_RT_CALIBRATION", 0xB7, WO, UINT),
    reg!(Main, "EN_MAG_ANOMALY_DETECTION", 0xB8, WO, UINT),
    reg!(Main, "RUN_SELF_TESTS", 0xB9, WO, UINT),
    reg!(Main, "ENABLE_EXTERNAL_EVENT", 0xBA, WO, UINT),
    reg!(Main, "ENABLE_GNNS_FUSION", 0xBB, WO, UINT),
    reg!(Main, "ENABLE_USR_EULER_OUTPUT", 0xBC, WO, UINT),
    reg!(Main, "ENABLE_DEAD_RECKONING", 0xBD, WO, UINT),
    reg!(Main, "ENABLE_HEAVE_SWAY_SURGE", 0xBE, WO, UINT),
    reg!(Main, "ENABLE_UKF", 0xBF, WO, UINT),
    reg!(Main, "BOARD_UNIQUE_ID_1", 0xFD, RO, UINT),
    reg!(Main, "BOARD_UNIQUE_ID_2", 0xFE, RO, UINT),
    reg!(Main, "PROTOCOL_VERSION", 0xFF, RO, TEXT),
    reg!(Hidden, "HIDDEN_GYRO_1_VARIANCE", 0x00, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GYRO_2_VARIANCE", 0x01, RW, FLOAT),
    reg!(Hidden, "HIDDEN_ACCEL_1_VARIANCE", 0x02, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_1_VARIANCE", 0x03, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_2_VARIANCE", 0x04, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GPS_COURSE_VARIANCE", 0x05, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GPS_POSITION_VARIANCE", 0x06, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GPS_VELOCITY_VARIANCE", 0x07, RW, FLOAT),
    reg!(Hidden, "HIDDEN_STATIC_PRESS_VARIANCE", 0x08, RW, FLOAT),
    reg!(Hidden, "HIDDEN_DIFF_PRESS_VARIANCE", 0x09, RW, FLOAT),
    reg!(Hidden, "HIDDEN_Q_UVW", 0x0A, RW, FLOAT),
    reg!(Hidden, "HIDDEN_Q_QUATERNION", 0x0B, RW, FLOAT),
    reg!(Hidden, "HIDDEN_Q_GPS_POSITION", 0x0C, RW, FLOAT),
    reg!(Hidden, "HIDDEN_Q_BIAS", 0x0D, RW, FLOAT),
    reg!(Hidden, "HIDDEN_Q_EULER_ANGLES", 0x0E, RW, FLOAT),
    reg!(Hidden, "HIDDEN_LOW_VG_ACCEL_NOISE_FACTOR", 0x0F, RW, FLOAT),
    reg!(Hidden, "HIDDEN_LPF_TAU_GROUNDSPEED", 0x10, RW, FLOAT),
    reg!(Hidden, "HIDDEN_LPF_TAU_GYRO_1", 0x11, RW, FLOAT),
    reg!(Hidden, "HIDDEN_LPF_TAU_GYRO_2", 0x12, RW, FLOAT),
    reg!(Hidden, "HIDDEN_LPF_TAU_ACCEL_1", 0x13, RW, FLOAT),
    reg!(Hidden, "HIDDEN_LPF_TAU_MAG_1", 0x14, RW, FLOAT),
    reg!(Hidden, "HIDDEN_LPF_TAU_MAG_2", 0x15, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_BIAS_X_POW_0", 0x16, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_BIAS_X_POW_1", 0x17, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_BIAS_X_POW_2", 0x18, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_BIAS_X_POW_3", 0x19, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_BIAS_Y_POW_0", 0x1A, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_BIAS_Y_POW_1", 0x1B, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_BIAS_Y_POW_2", 0x1C, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_BIAS_Y_POW_3", 0x1D, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_BIAS_Z_POW_0", 0x1E, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_BIAS_Z_POW_1", 0x1F, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_BIAS_Z_POW_2", 0x20, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_BIAS_Z_POW_3", 0x21, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_SCALE_X_POW_0", 0x22, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_SCALE_X_POW_1", 0x23, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_SCALE_X_POW_2", 0x24, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_SCALE_X_POW_3", 0x25, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_SCALE_Y_POW_0", 0x26, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_SCALE_Y_POW_1", 0x27, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_SCALE_Y_POW_2", 0x28, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_SCALE_Y_POW_3", 0x29, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_SCALE_Z_POW_0", 0x2A, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_SCALE_Z_POW_1", 0x2B, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_SCALE_Z_POW_2", 0x2C, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_1_SCALE_Z_POW_3", 0x2D, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GYRO_1_ALIGNMENT1_1", 0x2E, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GYRO_1_ALIGNMENT1_2", 0x2F, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GYRO_1_ALIGNMENT1_3", 0x30, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GYRO_1_ALIGNMENT2_1", 0x31, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GYRO_1_ALIGNMENT2_2", 0x32, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GYRO_1_ALIGNMENT2_3", 0x33, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GYRO_1_ALIGNMENT3_1", 0x34, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GYRO_1_ALIGNMENT3_2", 0x35, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GYRO_1_ALIGNMENT3_3", 0x36, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_BIAS_X_POW_0", 0x37, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_BIAS_X_POW_1", 0x38, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_BIAS_X_POW_2", 0x39, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_BIAS_X_POW_3", 0x3A, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_BIAS_Y_POW_0", 0x3B, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_BIAS_Y_POW_1", 0x3C, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_BIAS_Y_POW_2", 0x3D, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_BIAS_Y_POW_3", 0x3E, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_BIAS_Z_POW_0", 0x3F, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_BIAS_Z_POW_1", 0x40, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_BIAS_Z_POW_2", 0x41, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_BIAS_Z_POW_3", 0x42, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_SCALE_X_POW_0", 0x43, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_SCALE_X_POW_1", 0x44, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_SCALE_X_POW_2", 0x45, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_SCALE_X_POW_3", 0x46, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_SCALE_Y_POW_0", 0x47, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_SCALE_Y_POW_1", 0x48, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_SCALE_Y_POW_2", 0x49, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_SCALE_Y_POW_3", 0x4A, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_SCALE_Z_POW_0", 0x4B, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_SCALE_Z_POW_1", 0x4C, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_SCALE_Z_POW_2", 0x4D, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_GYRO_2_SCALE_Z_POW_3", 0x4E, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GYRO_2_ALIGNMENT1_1", 0x4F, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GYRO_2_ALIGNMENT1_2", 0x50, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GYRO_2_ALIGNMENT1_3", 0x51, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GYRO_2_ALIGNMENT2_1", 0x52, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GYRO_2_ALIGNMENT2_2", 0x53, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GYRO_2_ALIGNMENT2_3", 0x54, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GYRO_2_ALIGNMENT3_1", 0x55, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GYRO_2_ALIGNMENT3_2", 0x56, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GYRO_2_ALIGNMENT3_3", 0x57, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_BIAS_X_POW_0", 0x58, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_BIAS_X_POW_1", 0x59, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_BIAS_X_POW_2", 0x5A, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_BIAS_X_POW_3", 0x5B, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_BIAS_Y_POW_0", 0x5C, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_BIAS_Y_POW_1", 0x5D, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_BIAS_Y_POW_2", 0x5E, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_BIAS_Y_POW_3", 0x5F, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_BIAS_Z_POW_0", 0x60, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_BIAS_Z_POW_1", 0x61, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_BIAS_Z_POW_2", 0x62, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_BIAS_Z_POW_3", 0x63, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_SCALE_X_POW_0", 0x64, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_SCALE_X_POW_1", 0x65, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_SCALE_X_POW_2", 0x66, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_SCALE_X_POW_3", 0x67, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_SCALE_Y_POW_0", 0x68, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_SCALE_Y_POW_1", 0x69, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_SCALE_Y_POW_2", 0x6A, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_SCALE_Y_POW_3", 0x6B, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_SCALE_Z_POW_0", 0x6C, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_SCALE_Z_POW_1", 0x6D, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_SCALE_Z_POW_2", 0x6E, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_ACCEL_1_SCALE_Z_POW_3", 0x6F, RW, FLOAT),
    reg!(Hidden, "HIDDEN_ACCEL_1_ALIGNMENT1_1", 0x70, RW, FLOAT),
    reg!(Hidden, "HIDDEN_ACCEL_1_ALIGNMENT1_2", 0x71, RW, FLOAT),
    reg!(Hidden, "HIDDEN_ACCEL_1_ALIGNMENT1_3", 0x72, RW, FLOAT),
    reg!(Hidden, "HIDDEN_ACCEL_1_ALIGNMENT2_1", 0x73, RW, FLOAT),
    reg!(Hidden, "HIDDEN_ACCEL_1_ALIGNMENT2_2", 0x74, RW, FLOAT),
    reg!(Hidden, "HIDDEN_ACCEL_1_ALIGNMENT2_3", 0x75, RW, FLOAT),
    reg!(Hidden, "HIDDEN_ACCEL_1_ALIGNMENT3_1", 0x76, RW, FLOAT),
    reg!(Hidden, "HIDDEN_ACCEL_1_ALIGNMENT3_2", 0x77, RW, FLOAT),
    reg!(Hidden, "HIDDEN_ACCEL_1_ALIGNMENT3_3", 0x78, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_BIAS_X_POW_0", 0x79, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_BIAS_X_POW_1", 0x7A, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_BIAS_X_POW_2", 0x7B, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_BIAS_X_POW_3", 0x7C, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_BIAS_Y_POW_0", 0x7D, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_BIAS_Y_POW_1", 0x7E, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_BIAS_Y_POW_2", 0x7F, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_BIAS_Y_POW_3", 0x80, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_BIAS_Z_POW_0", 0x81, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_BIAS_Z_POW_1", 0x82, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_BIAS_Z_POW_2", 0x83, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_BIAS_Z_POW_3", 0x84, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_SCALE_X_POW_0", 0x85, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_SCALE_X_POW_1", 0x86, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_SCALE_X_POW_2", 0x87, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_SCALE_X_POW_3", 0x88, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_SCALE_Y_POW_0", 0x89, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_SCALE_Y_POW_1", 0x8A, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_SCALE_Y_POW_2", 0x8B, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_SCALE_Y_POW_3", 0x8C, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_SCALE_Z_POW_0", 0x8D, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_SCALE_Z_POW_1", 0x8E, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_SCALE_Z_POW_2", 0x8F, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_1_SCALE_Z_POW_3", 0x90, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_1_ALIGNMENT1_1", 0x91, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_1_ALIGNMENT1_2", 0x92, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_1_ALIGNMENT1_3", 0x93, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_1_ALIGNMENT2_1", 0x94, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_1_ALIGNMENT2_2", 0x95, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_1_ALIGNMENT2_3", 0x96, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_1_ALIGNMENT3_1", 0x97, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_1_ALIGNMENT3_2", 0x98, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_1_ALIGNMENT3_3", 0x99, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_1_REFERENCE_X", 0x9A, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_1_REFERENCE_Y", 0x9B, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_1_REFERENCE_Z", 0x9C, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_BIAS_X_POW_0", 0x9D, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_BIAS_X_POW_1", 0x9E, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_BIAS_X_POW_2", 0x9F, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_BIAS_X_POW_3", 0xA0, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_BIAS_Y_POW_0", 0xA1, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_BIAS_Y_POW_1", 0xA2, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_BIAS_Y_POW_2", 0xA3, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_BIAS_Y_POW_3", 0xA4, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_BIAS_Z_POW_0", 0xA5, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_BIAS_Z_POW_1", 0xA6, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_BIAS_Z_POW_2", 0xA7, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_BIAS_Z_POW_3", 0xA8, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_SCALE_X_POW_0", 0xA9, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_SCALE_X_POW_1", 0xAA, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_SCALE_X_POW_2", 0xAB, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_SCALE_X_POW_3", 0xAC, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_SCALE_Y_POW_0", 0xAD, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_SCALE_Y_POW_1", 0xAE, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_SCALE_Y_POW_2", 0xAF, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_SCALE_Y_POW_3", 0xB0, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_SCALE_Z_POW_0", 0xB1, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_SCALE_Z_POW_1", 0xB2, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_SCALE_Z_POW_2", 0xB3, RW, FLOAT),
    reg!(Hidden, "HIDDEN_C_MAG_2_SCALE_Z_POW_3", 0xB4, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_2_ALIGNMENT1_1", 0xB5, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_2_ALIGNMENT1_2", 0xB6, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_2_ALIGNMENT1_3", 0xB7, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_2_ALIGNMENT2_1", 0xB8, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_2_ALIGNMENT2_2", 0xB9, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_2_ALIGNMENT2_3", 0xBA, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_2_ALIGNMENT3_1", 0xBB, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_2_ALIGNMENT3_2", 0xBC, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_2_ALIGNMENT3_3", 0xBD, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_2_REFERENCE_X", 0xBE, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_2_REFERENCE_Y", 0xBF, RW, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_2_REFERENCE_Z", 0xC0, RW, FLOAT),
    reg!(Hidden, "HIDDEN_GYRO_1_CONVERSION", 0xC1, RO, FLOAT),
    reg!(Hidden, "HIDDEN_GYRO_2_CONVERSION", 0xC2, RO, FLOAT),
    reg!(Hidden, "HIDDEN_ACCEL_1_CONVERSION", 0xC3, RO, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_1_CONVERSION", 0xC4, RO, FLOAT),
    reg!(Hidden, "HIDDEN_MAG_2_CONVERSION", 0xC5, RO, FLOAT),
];
