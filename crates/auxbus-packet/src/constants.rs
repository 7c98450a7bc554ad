//! Protocol constants
//!
//! Byte values fixed by the AUX bus hardware protocol: the frame header
//! sentinel, the endpoint address space, and the command codes carried in
//! frames. Command semantics belong to the device drivers above this
//! crate; here they are only opaque comparable tags.

/// Sentinel byte marking the start of every frame on the wire.
pub const AUX_HEADER: u8 = 0x3B;

/// Smallest possible frame: header, length, source, destination, command,
/// checksum.
pub const MIN_FRAME_SIZE: usize = 6;

// ============================================================================
// Endpoint Addresses
// ============================================================================

/// Broadcast / any device.
pub const DEV_ANY: u8 = 0x00;
/// Main mount board.
pub const DEV_MAIN_BOARD: u8 = 0x01;
/// Hand controller.
pub const DEV_HAND_CONTROLLER: u8 = 0x04;
/// NexStar+ hand controller.
pub const DEV_HAND_CONTROLLER_PLUS: u8 = 0x0D;
/// Azimuth (RA) motor controller.
pub const DEV_AZM_MOTOR: u8 = 0x10;
/// Altitude (Dec) motor controller.
pub const DEV_ALT_MOTOR: u8 = 0x11;
/// Focuser controller.
pub const DEV_FOCUSER: u8 = 0x12;
/// The controlling application (this side of the bus).
pub const DEV_APP: u8 = 0x20;
/// NexRemote emulation.
pub const DEV_NEX_REMOTE: u8 = 0x22;
/// GPS unit.
pub const DEV_GPS: u8 = 0xB0;
/// WiFi adapter.
pub const DEV_WIFI: u8 = 0xB5;
/// Battery controller.
pub const DEV_BATTERY: u8 = 0xB6;
/// Charger controller.
pub const DEV_CHARGER: u8 = 0xB7;
/// Mount lighting controller.
pub const DEV_LIGHTS: u8 = 0xBF;

// ============================================================================
// Command Codes
// ============================================================================

/// Read the current motor/focuser position.
pub const CMD_MC_GET_POSITION: u8 = 0x01;
/// Start a fast goto move.
pub const CMD_MC_GOTO_FAST: u8 = 0x02;
/// Overwrite the current position register.
pub const CMD_MC_SET_POSITION: u8 = 0x04;
/// Query the controller model.
pub const CMD_MC_GET_MODEL: u8 = 0x05;
/// Poll whether the current slew has finished.
pub const CMD_MC_SLEW_DONE: u8 = 0x13;
/// Start a slow (approach) goto move.
pub const CMD_MC_GOTO_SLOW: u8 = 0x17;
/// Move at a fixed rate in the positive direction.
pub const CMD_MC_MOVE_POS: u8 = 0x24;
/// Move at a fixed rate in the negative direction.
pub const CMD_MC_MOVE_NEG: u8 = 0x25;
/// Enable/disable focuser calibration.
pub const CMD_FOC_CALIB_ENABLE: u8 = 0x2A;
/// Poll focuser calibration progress.
pub const CMD_FOC_CALIB_DONE: u8 = 0x2B;
/// Read the focuser hard-stop positions.
pub const CMD_FOC_GET_HS_POSITIONS: u8 = 0x2C;
/// Query firmware version.
pub const CMD_GET_VER: u8 = 0xFE;
