use serde::{Deserialize, Serialize};

/// State of the embedded arming/failsafe machine.
///
/// `Failsafe` behaves like `Disarmed` for motor-drive purposes, but blocks
/// re-arming until the sticky flag is cleared by an explicit disarm gesture
/// on a healthy link.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArmState {
    #[default]
    Disarmed,
    Armed,
    Failsafe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ArmingBlocker(u8);

bitflags::bitflags! {
    /// This bitflag represents the possible reasons why the vehicle cannot
    /// be armed. The flag is `0x00` when the vehicle is ready to be armed,
    /// which can be checked with the `is_empty()` method.
    impl ArmingBlocker: u8 {

        /// **Bit 0** - The roll angle exceeds the maximum arming angle.
        const HIGH_ROLL = 1 << 0;

        /// **Bit 1** - The pitch angle exceeds the maximum arming angle.
        const HIGH_PITCH = 1 << 1;

        /// **Bit 2** - The failsafe latch is set and has not been cleared.
        const FAILSAFE = 1 << 2;

        /// **Bit 3** - The vehicle is already armed.
        const ALREADY_ARMED = 1 << 3;
    }
}

/// Why the vehicle left the `Armed` state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisarmReason {
    /// The pilot commanded a disarm gesture.
    UserCommand,
    /// The receiver reported signal loss while armed.
    SignalLoss,
}
