use crate::color::Rgb;

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Map a wheel position to a color
///
/// The position is inverted and split into three 85-wide bands, each one
/// linearly ramping two channels against each other:
/// - `0..85`: red falls, blue rises
/// - `85..170`: blue falls, green rises
/// - `170..=255`: green falls, red rises
///
/// Going through positions `0..=255` walks red → green → blue → red,
/// and `wheel(255)` meets `wheel(0)` so the mapping wraps without a seam.
pub const fn wheel(position: u8) -> Rgb {
    let position = 255 - position;
    if position < 85 {
        return Rgb {
            r: 255 - position * 3,
            g: 0,
            b: position * 3,
        };
    }
    if position < 170 {
        let position = position - 85;
        return Rgb {
            r: 0,
            g: position * 3,
            b: 255 - position * 3,
        };
    }
    let position = position - 170;
    Rgb {
        r: position * 3,
        g: 255 - position * 3,
        b: 0,
    }
}
