// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>

/// Canonical `0xRRGGBB` value of each xterm 256-color palette code, indexed by code.
/// - 0-15: system colors.
/// - 16-231: 6×6×6 color cube with channel levels 0, 95, 135, 175, 215, 255.
/// - 232-255: grayscale ramp, `8 + 10 * n`.
#[rustfmt::skip]
pub const ANSI_COLOR_PALETTE: [u32; 256] = [
    0x00_00_00, 0x80_00_00, 0x00_80_00, 0x80_80_00, 0x00_00_80, 0x80_00_80,
    0x00_80_80, 0xc0_c0_c0, 0x80_80_80, 0xff_00_00, 0x00_ff_00, 0xff_ff_00,
    0x00_00_ff, 0xff_00_ff, 0x00_ff_ff, 0xff_ff_ff, 0x00_00_00, 0x00_00_5f,
    0x00_00_87, 0x00_00_af, 0x00_00_d7, 0x00_00_ff, 0x00_5f_00, 0x00_5f_5f,
    0x00_5f_87, 0x00_5f_af, 0x00_5f_d7, 0x00_5f_ff, 0x00_87_00, 0x00_87_5f,
    0x00_87_87, 0x00_87_af, 0x00_87_d7, 0x00_87_ff, 0x00_af_00, 0x00_af_5f,
    0x00_af_87, 0x00_af_af, 0x00_af_d7, 0x00_af_ff, 0x00_d7_00, 0x00_d7_5f,
    0x00_d7_87, 0x00_d7_af, 0x00_d7_d7, 0x00_d7_ff, 0x00_ff_00, 0x00_ff_5f,
    0x00_ff_87, 0x00_ff_af, 0x00_ff_d7, 0x00_ff_ff, 0x5f_00_00, 0x5f_00_5f,
    0x5f_00_87, 0x5f_00_af, 0x5f_00_d7, 0x5f_00_ff, 0x5f_5f_00, 0x5f_5f_5f,
    0x5f_5f_87, 0x5f_5f_af, 0x5f_5f_d7, 0x5f_5f_ff, 0x5f_87_00, 0x5f_87_5f,
    0x5f_87_87, 0x5f_87_af, 0x5f_87_d7, 0x5f_87_ff, 0x5f_af_00, 0x5f_af_5f,
    0x5f_af_87, 0x5f_af_af, 0x5f_af_d7, 0x5f_af_ff, 0x5f_d7_00, 0x5f_d7_5f,
    0x5f_d7_87, 0x5f_d7_af, 0x5f_d7_d7, 0x5f_d7_ff, 0x5f_ff_00, 0x5f_ff_5f,
    0x5f_ff_87, 0x5f_ff_af, 0x5f_ff_d7, 0x5f_ff_ff, 0x87_00_00, 0x87_00_5f,
    0x87_00_87, 0x87_00_af, 0x87_00_d7, 0x87_00_ff, 0x87_5f_00, 0x87_5f_5f,
    0x87_5f_87, 0x87_5f_af, 0x87_5f_d7, 0x87_5f_ff, 0x87_87_00, 0x87_87_5f,
    0x87_87_87, 0x87_87_af, 0x87_87_d7, 0x87_87_ff, 0x87_af_00, 0x87_af_5f,
    0x87_af_87, 0x87_af_af, 0x87_af_d7, 0x87_af_ff, 0x87_d7_00, 0x87_d7_5f,
    0x87_d7_87, 0x87_d7_af, 0x87_d7_d7, 0x87_d7_ff, 0x87_ff_00, 0x87_ff_5f,
    0x87_ff_87, 0x87_ff_af, 0x87_ff_d7, 0x87_ff_ff, 0xaf_00_00, 0xaf_00_5f,
    0xaf_00_87, 0xaf_00_af, 0xaf_00_d7, 0xaf_00_ff, 0xaf_5f_00, 0xaf_5f_5f,
    0xaf_5f_87, 0xaf_5f_af, 0xaf_5f_d7, 0xaf_5f_ff, 0xaf_87_00, 0xaf_87_5f,
    0xaf_87_87, 0xaf_87_af, 0xaf_87_d7, 0xaf_87_ff, 0xaf_af_00, 0xaf_af_5f,
    0xaf_af_87, 0xaf_af_af, 0xaf_af_d7, 0xaf_af_ff, 0xaf_d7_00, 0xaf_d7_5f,
    0xaf_d7_87, 0xaf_d7_af, 0xaf_d7_d7, 0xaf_d7_ff, 0xaf_ff_00, 0xaf_ff_5f,
    0xaf_ff_87, 0xaf_ff_af, 0xaf_ff_d7, 0xaf_ff_ff, 0xd7_00_00, 0xd7_00_5f,
    0xd7_00_87, 0xd7_00_af, 0xd7_00_d7, 0xd7_00_ff, 0xd7_5f_00, 0xd7_5f_5f,
    0xd7_5f_87, 0xd7_5f_af, 0xd7_5f_d7, 0xd7_5f_ff, 0xd7_87_00, 0xd7_87_5f,
    0xd7_87_87, 0xd7_87_af, 0xd7_87_d7, 0xd7_87_ff, 0xd7_af_00, 0xd7_af_5f,
    0xd7_af_87, 0xd7_af_af, 0xd7_af_d7, 0xd7_af_ff, 0xd7_d7_00, 0xd7_d7_5f,
    0xd7_d7_87, 0xd7_d7_af, 0xd7_d7_d7, 0xd7_d7_ff, 0xd7_ff_00, 0xd7_ff_5f,
    0xd7_ff_87, 0xd7_ff_af, 0xd7_ff_d7, 0xd7_ff_ff, 0xff_00_00, 0xff_00_5f,
    0xff_00_87, 0xff_00_af, 0xff_00_d7, 0xff_00_ff, 0xff_5f_00, 0xff_5f_5f,
    0xff_5f_87, 0xff_5f_af, 0xff_5f_d7, 0xff_5f_ff, 0xff_87_00, 0xff_87_5f,
    0xff_87_87, 0xff_87_af, 0xff_87_d7, 0xff_87_ff, 0xff_af_00, 0xff_af_5f,
    0xff_af_87, 0xff_af_af, 0xff_af_d7, 0xff_af_ff, 0xff_d7_00, 0xff_d7_5f,
    0xff_d7_87, 0xff_d7_af, 0xff_d7_d7, 0xff_d7_ff, 0xff_ff_00, 0xff_ff_5f,
    0xff_ff_87, 0xff_ff_af, 0xff_ff_d7, 0xff_ff_ff, 0x08_08_08, 0x12_12_12,
    0x1c_1c_1c, 0x26_26_26, 0x30_30_30, 0x3a_3a_3a, 0x44_44_44, 0x4e_4e_4e,
    0x58_58_58, 0x62_62_62, 0x6c_6c_6c, 0x76_76_76, 0x80_80_80, 0x8a_8a_8a,
    0x94_94_94, 0x9e_9e_9e, 0xa8_a8_a8, 0xb2_b2_b2, 0xbc_bc_bc, 0xc6_c6_c6,
    0xd0_d0_d0, 0xda_da_da, 0xe4_e4_e4, 0xee_ee_ee,
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::ANSI_COLOR_PALETTE;

    #[test]
    fn test_color_cube_and_gray_ramp() {
        const LEVELS: [u32; 6] = [0, 95, 135, 175, 215, 255];
        for (offset, expected) in ANSI_COLOR_PALETTE[16..232].iter().enumerate() {
            let red = LEVELS[offset / 36];
            let green = LEVELS[(offset / 6) % 6];
            let blue = LEVELS[offset % 6];
            assert_eq!(*expected, (red << 16) | (green << 8) | blue);
        }
        for (offset, expected) in ANSI_COLOR_PALETTE[232..].iter().enumerate() {
            let gray = 8 + 10 * u32::try_from(offset).unwrap();
            assert_eq!(*expected, (gray << 16) | (gray << 8) | gray);
        }
    }
}
