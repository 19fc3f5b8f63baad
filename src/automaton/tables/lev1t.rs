//! Parametric tables for the transposition automaton with `n = 1`.
//!
//! Built by subset construction over transposition-aware positions and
//! minimised to 6 states. Do not edit by hand.

/// Number of parametric states.
pub const STATE_COUNT: usize = 6;

/// Number of distinct characteristic vectors, `2^3`.
pub const VECTOR_COUNT: usize = 8;

/// Width of the accept table rows, `2n+1`.
pub const ACCEPT_WIDTH: usize = 3;

/// Next state, laid out `[distance class][vector][state]`; `-1` means no transition.
#[rustfmt::skip]
pub static TRANSITIONS: [i8; 6 * VECTOR_COUNT * STATE_COUNT] = [
    // distance to end 0
    1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1,
    // distance to end 1
    2, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1,
    0, 1, 1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1,
    // distance to end 2
    2, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1,
    3, -1, 1, 1, 1, -1,
    -1, -1, -1, -1, -1, -1,
    0, 1, 1, 2, 1, 1,
    -1, -1, -1, -1, -1, -1,
    0, 1, 2, 2, 2, 1,
    -1, -1, -1, -1, -1, -1,
    // distance to end 3
    2, -1, -1, -1, -1, -1,
    2, -1, -1, 1, 1, 1,
    3, -1, 1, 1, 1, -1,
    3, -1, 1, 2, 2, 1,
    0, 1, 1, 2, 1, 1,
    0, 1, 1, 4, 5, 5,
    0, 1, 2, 2, 2, 1,
    0, 1, 2, 4, 4, 5,
    // distance to end 4
    2, -1, -1, -1, -1, -1,
    2, -1, -1, 1, 1, 1,
    3, -1, 1, 1, 1, -1,
    3, -1, 1, 2, 2, 1,
    0, 1, 1, 2, 1, 1,
    0, 1, 1, 4, 5, 5,
    0, 1, 2, 2, 2, 1,
    0, 1, 2, 4, 4, 5,
    // distance to end >= 5
    2, -1, -1, -1, -1, -1,
    2, -1, -1, 1, 1, 1,
    3, -1, 1, 1, 1, -1,
    3, -1, 1, 2, 2, 1,
    0, 1, 1, 2, 1, 1,
    0, 1, 1, 4, 5, 5,
    0, 1, 2, 2, 2, 1,
    0, 1, 2, 4, 4, 5,
];

/// Offset increment, laid out like [`TRANSITIONS`].
#[rustfmt::skip]
pub static OFFSET_INCREMENTS: [u8; 6 * VECTOR_COUNT * STATE_COUNT] = [
    // distance to end 0
    0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0,
    // distance to end 1
    0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0,
    1, 1, 1, 0, 0, 0,
    0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0,
    // distance to end 2
    0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0,
    0, 0, 2, 2, 2, 0,
    0, 0, 0, 0, 0, 0,
    1, 1, 1, 1, 1, 1,
    0, 0, 0, 0, 0, 0,
    1, 1, 1, 1, 1, 1,
    0, 0, 0, 0, 0, 0,
    // distance to end 3
    0, 0, 0, 0, 0, 0,
    0, 0, 0, 3, 3, 3,
    0, 0, 2, 2, 2, 0,
    0, 0, 2, 2, 2, 3,
    1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1,
    // distance to end 4
    0, 0, 0, 0, 0, 0,
    0, 0, 0, 3, 3, 3,
    0, 0, 2, 2, 2, 0,
    0, 0, 2, 2, 2, 3,
    1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1,
    // distance to end >= 5
    0, 0, 0, 0, 0, 0,
    0, 0, 0, 3, 3, 3,
    0, 0, 2, 2, 2, 0,
    0, 0, 2, 2, 2, 3,
    1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1,
];

/// Acceptance, laid out `[state][distance to end]` for distances `0..=2`.
#[rustfmt::skip]
pub static ACCEPT: [bool; STATE_COUNT * ACCEPT_WIDTH] = [
    true, true, false, // 0
    true, false, false, // 1
    true, true, false, // 2
    true, true, true, // 3
    true, true, true, // 4
    true, false, true, // 5
];
