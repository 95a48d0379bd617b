//! Named colors used by the demo sequence
//!
//! Values were picked by eye on a WS2812 strip, so some of them look off
//! on a monitor.

use super::{Rgb, rgb_from_u32};

/// All channels zero
pub const OFF: Rgb = rgb_from_u32(0x00_00_00);

/// Color of the attention flash that opens every round of the sequence
pub const COMMAND: Rgb = rgb_from_u32(0xFF_FF_FF);

pub const EMBER: Rgb = rgb_from_u32(0xFF_00_00);
pub const FLAME: Rgb = rgb_from_u32(0xFF_45_00);
pub const AMBER: Rgb = rgb_from_u32(0xFF_8C_00);
pub const SPARK: Rgb = rgb_from_u32(0xFF_C8_10);

pub const DEEP_BLUE: Rgb = rgb_from_u32(0x00_00_FF);
pub const STEEL_BLUE: Rgb = rgb_from_u32(0x00_64_FF);
pub const ROYAL_PURPLE: Rgb = rgb_from_u32(0x60_00_FF);
pub const ORCHID: Rgb = rgb_from_u32(0xB4_00_B4);
pub const MAGENTA: Rgb = rgb_from_u32(0xFF_00_80);

/// Warm palette, from the deepest red to the brightest yellow
pub const FIRE_PALETTE: [Rgb; 4] = [EMBER, FLAME, AMBER, SPARK];

/// Cold palette, from blue to purple
pub const BLUE_PURPLE_PALETTE: [Rgb; 5] = [DEEP_BLUE, STEEL_BLUE, ROYAL_PURPLE, ORCHID, MAGENTA];
