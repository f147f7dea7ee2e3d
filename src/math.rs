/// Linearly remap `value` from `[in_min, in_max]` to `[out_min, out_max]`
///
/// Uses integer math, the quotient truncates toward zero.
/// Values outside the input domain extrapolate, no clamping is done here.
#[inline]
pub const fn remap(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    if in_max == in_min {
        return out_min;
    }
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Linearly remap a float value, truncating the result toward zero
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
pub fn remap_f32(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> i32 {
    if in_max == in_min {
        return out_min as i32;
    }
    let mapped = (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min;
    libm::truncf(mapped) as i32
}

/// Scale an 8-bit value by a percentage (0-100)
///
/// Percentages above 100 are treated as 100.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale_percent(value: u8, percent: u8) -> u8 {
    let percent = if percent > 100 { 100 } else { percent };
    ((value as u16 * percent as u16) / 100) as u8
}

/// Move `current` one unit toward `target`
#[inline]
pub const fn step_toward(current: u8, target: u8) -> u8 {
    if current < target {
        current + 1
    } else if current > target {
        current - 1
    } else {
        current
    }
}
