//! Frame command codes.

use crate::constants::*;
use crate::error::FrameError;

/// Single-byte operation selector carried in a frame.
///
/// Command semantics are owned by the device drivers above this layer;
/// the codec only needs opcodes to be comparable and to survive the trip
/// through their wire byte. As with [`crate::Endpoint`], conversion from
/// a wire byte is checked and unknown values are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Read the current motor/focuser position.
    McGetPosition,
    /// Start a fast goto move.
    McGotoFast,
    /// Overwrite the current position register.
    McSetPosition,
    /// Query the controller model.
    McGetModel,
    /// Poll whether the current slew has finished.
    McSlewDone,
    /// Start a slow (approach) goto move.
    McGotoSlow,
    /// Move at a fixed rate in the positive direction.
    McMovePos,
    /// Move at a fixed rate in the negative direction.
    McMoveNeg,
    /// Enable/disable focuser calibration.
    FocCalibEnable,
    /// Poll focuser calibration progress.
    FocCalibDone,
    /// Read the focuser hard-stop positions.
    FocGetHsPositions,
    /// Query firmware version.
    GetVersion,
}

impl TryFrom<u8> for Opcode {
    type Error = FrameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            CMD_MC_GET_POSITION => Ok(Opcode::McGetPosition),
            CMD_MC_GOTO_FAST => Ok(Opcode::McGotoFast),
            CMD_MC_SET_POSITION => Ok(Opcode::McSetPosition),
            CMD_MC_GET_MODEL => Ok(Opcode::McGetModel),
            CMD_MC_SLEW_DONE => Ok(Opcode::McSlewDone),
            CMD_MC_GOTO_SLOW => Ok(Opcode::McGotoSlow),
            CMD_MC_MOVE_POS => Ok(Opcode::McMovePos),
            CMD_MC_MOVE_NEG => Ok(Opcode::McMoveNeg),
            CMD_FOC_CALIB_ENABLE => Ok(Opcode::FocCalibEnable),
            CMD_FOC_CALIB_DONE => Ok(Opcode::FocCalibDone),
            CMD_FOC_GET_HS_POSITIONS => Ok(Opcode::FocGetHsPositions),
            CMD_GET_VER => Ok(Opcode::GetVersion),
            other => Err(FrameError::UnknownOpcode(other)),
        }
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> Self {
        match opcode {
            Opcode::McGetPosition => CMD_MC_GET_POSITION,
            Opcode::McGotoFast => CMD_MC_GOTO_FAST,
            Opcode::McSetPosition => CMD_MC_SET_POSITION,
            Opcode::McGetModel => CMD_MC_GET_MODEL,
            Opcode::McSlewDone => CMD_MC_SLEW_DONE,
            Opcode::McGotoSlow => CMD_MC_GOTO_SLOW,
            Opcode::McMovePos => CMD_MC_MOVE_POS,
            Opcode::McMoveNeg => CMD_MC_MOVE_NEG,
            Opcode::FocCalibEnable => CMD_FOC_CALIB_ENABLE,
            Opcode::FocCalibDone => CMD_FOC_CALIB_DONE,
            Opcode::FocGetHsPositions => CMD_FOC_GET_HS_POSITIONS,
            Opcode::GetVersion => CMD_GET_VER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Opcode; 12] = [
        Opcode::McGetPosition,
        Opcode::McGotoFast,
        Opcode::McSetPosition,
        Opcode::McGetModel,
        Opcode::McSlewDone,
        Opcode::McGotoSlow,
        Opcode::McMovePos,
        Opcode::McMoveNeg,
        Opcode::FocCalibEnable,
        Opcode::FocCalibDone,
        Opcode::FocGetHsPositions,
        Opcode::GetVersion,
    ];

    #[test]
    fn test_opcode_byte_roundtrip() {
        for opcode in ALL {
            let byte = u8::from(opcode);
            assert_eq!(Opcode::try_from(byte).unwrap(), opcode);
        }
    }

    #[test]
    fn test_unknown_opcode_rejected() {
        let err = Opcode::try_from(0xEE).unwrap_err();
        assert_eq!(err, FrameError::UnknownOpcode(0xEE));
    }
}
