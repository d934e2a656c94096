/// Emit a `tracing` event when the `tracing` feature is enabled.
///
/// Expands to nothing otherwise, so call sites stay free of `cfg` noise.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        ::tracing::$level!($($arg)+);
    }};
}

/// Degree of a polynomial over GF(2) packed into the bits of `bits`.
///
/// Bit `i` holds the coefficient of `x^i`, so `0x11D` is
/// `x^8 + x^4 + x^3 + x^2 + 1` and has degree 8. Returns `None` for zero.
pub const fn bit_degree(bits: u16) -> Option<u32> {
    if bits == 0 {
        None
    } else {
        Some(15 - bits.leading_zeros())
    }
}
