//! Bus endpoint addresses.

use crate::constants::*;
use crate::error::FrameError;

/// A fixed address identifying a logical device on the AUX bus.
///
/// The address space is shared and fixed by the hardware protocol.
/// Conversion from a wire byte is checked: bytes outside the known address
/// space are rejected with [`FrameError::UnknownEndpoint`] rather than
/// being carried around as raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Broadcast / any device.
    Any,
    /// Main mount board.
    MainBoard,
    /// Hand controller.
    HandController,
    /// NexStar+ hand controller.
    HandControllerPlus,
    /// Azimuth (RA) motor controller.
    AzmMotor,
    /// Altitude (Dec) motor controller.
    AltMotor,
    /// Focuser controller.
    Focuser,
    /// The controlling application.
    App,
    /// NexRemote emulation.
    NexRemote,
    /// GPS unit.
    Gps,
    /// WiFi adapter.
    Wifi,
    /// Battery controller.
    Battery,
    /// Charger controller.
    Charger,
    /// Mount lighting controller.
    Lights,
}

impl TryFrom<u8> for Endpoint {
    type Error = FrameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            DEV_ANY => Ok(Endpoint::Any),
            DEV_MAIN_BOARD => Ok(Endpoint::MainBoard),
            DEV_HAND_CONTROLLER => Ok(Endpoint::HandController),
            DEV_HAND_CONTROLLER_PLUS => Ok(Endpoint::HandControllerPlus),
            DEV_AZM_MOTOR => Ok(Endpoint::AzmMotor),
            DEV_ALT_MOTOR => Ok(Endpoint::AltMotor),
            DEV_FOCUSER => Ok(Endpoint::Focuser),
            DEV_APP => Ok(Endpoint::App),
            DEV_NEX_REMOTE => Ok(Endpoint::NexRemote),
            DEV_GPS => Ok(Endpoint::Gps),
            DEV_WIFI => Ok(Endpoint::Wifi),
            DEV_BATTERY => Ok(Endpoint::Battery),
            DEV_CHARGER => Ok(Endpoint::Charger),
            DEV_LIGHTS => Ok(Endpoint::Lights),
            other => Err(FrameError::UnknownEndpoint(other)),
        }
    }
}

impl From<Endpoint> for u8 {
    fn from(endpoint: Endpoint) -> Self {
        match endpoint {
            Endpoint::Any => DEV_ANY,
            Endpoint::MainBoard => DEV_MAIN_BOARD,
            Endpoint::HandController => DEV_HAND_CONTROLLER,
            Endpoint::HandControllerPlus => DEV_HAND_CONTROLLER_PLUS,
            Endpoint::AzmMotor => DEV_AZM_MOTOR,
            Endpoint::AltMotor => DEV_ALT_MOTOR,
            Endpoint::Focuser => DEV_FOCUSER,
            Endpoint::App => DEV_APP,
            Endpoint::NexRemote => DEV_NEX_REMOTE,
            Endpoint::Gps => DEV_GPS,
            Endpoint::Wifi => DEV_WIFI,
            Endpoint::Battery => DEV_BATTERY,
            Endpoint::Charger => DEV_CHARGER,
            Endpoint::Lights => DEV_LIGHTS,
        }
    }
}
