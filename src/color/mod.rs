mod palette;
mod utils;

pub use palette::{
    AMBER, BLUE_PURPLE_PALETTE, COMMAND, DEEP_BLUE, EMBER, FIRE_PALETTE, FLAME, MAGENTA, OFF,
    ORCHID, ROYAL_PURPLE, SPARK, STEEL_BLUE,
};
use smart_leds::RGB8;
pub use utils::{rgb_from_u32, wheel};

pub type Rgb = RGB8;
