/// Errors raised while bringing up a servo.
///
/// Writes never fail; out-of-range pulse widths and angles are clamped instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, derive_more::Display, derive_more::Error)]
pub enum Error {
    /// The system clock cannot be divided down to a 1 µs PWM tick.
    ///
    /// The slice divider has an 8-bit integer part, so `clk_sys` must be roughly
    /// 1 MHz to 255 MHz.
    #[display("clk_sys of {clk_sys_hz} Hz cannot be divided to a 1 µs PWM tick")]
    ClockOutOfRange {
        /// The system clock frequency that was read.
        clk_sys_hz: u32,
    },
}

/// Result type for this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
