// Raw ADC sum -> pin volts -> battery volts -> percent of full charge.
//
// Pure functions so the arithmetic can be checked without hardware.
// Percent is not clamped: a pack above its reference reads over 100.

/// Mean of `count` conversions, in ADC counts.
pub fn average_raw(sum: u32, count: u8) -> f32 {
    if count == 0 {
        return 0.0;
    }
    sum as f32 / count as f32
}

/// Averaged voltage at the ADC pin.
pub fn pin_volts(sum: u32, count: u8, reference_volts: f32, full_scale: u16) -> f32 {
    if full_scale == 0 {
        return 0.0;
    }
    average_raw(sum, count) * reference_volts / full_scale as f32
}

/// Undo the resistive divider.
pub fn battery_volts(pin_volts: f32, divider_ratio: f32) -> f32 {
    pin_volts * divider_ratio
}

pub fn charge_percent(battery_volts: f32, full_charge_volts: f32) -> f32 {
    if full_charge_volts <= 0.0 {
        return 0.0;
    }
    battery_volts / full_charge_volts * 100.0
}
