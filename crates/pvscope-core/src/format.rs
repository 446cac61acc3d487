//! Unit-scaling formatters for estimation values.
//!
//! All helpers render two decimal places after scaling. Rounding works on
//! the exact binary value and sends exact midpoints away from zero, so
//! `0.125` renders as `0.13` and `1.005` (stored just below) as `1.00`.

/// Decimal places used by the unit formatters
pub const DEFAULT_DECIMALS: usize = 2;

/// Fixed-point rendering with the given number of decimals
pub fn format_number(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    // `{:.*}` breaks exact ties to even; the next float up rounds the same tie upward
    let rounded = if is_midpoint(magnitude, decimals) {
        f64::from_bits(magnitude.to_bits() + 1)
    } else {
        magnitude
    };

    let digits = format!("{:.*}", decimals, rounded);
    if value < 0.0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Whether a finite non-negative value lies exactly halfway between two
/// multiples of `10^-decimals`.
///
/// With `value = m * 2^k`, `value * 10^decimals = m * 5^decimals * 2^(k + decimals)`.
/// Since `5^decimals` is odd, the fraction is exactly one half iff `m` has
/// `-(k + decimals) - 1` trailing zero bits.
fn is_midpoint(value: f64, decimals: usize) -> bool {
    let bits = value.to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);

    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased_exponent - 1075)
    };
    if mantissa == 0 {
        return false;
    }

    let scale = exponent.saturating_add(decimals as i64);
    scale < 0 && i64::from(mantissa.trailing_zeros()) == -scale - 1
}

/// Installed capacity: kWp, switching to MWp from 1000 kWp
pub fn format_capacity(kwp: f64) -> String {
    if kwp >= 1000.0 {
        return format!("{} MWp", format_number(kwp / 1000.0, DEFAULT_DECIMALS));
    }
    format!("{} kWp", format_number(kwp, DEFAULT_DECIMALS))
}

/// Energy: kWh, MWh from 1000 kWh, GWh from 1,000,000 kWh
pub fn format_energy(kwh: f64) -> String {
    if kwh >= 1_000_000.0 {
        return format!("{} GWh", format_number(kwh / 1_000_000.0, DEFAULT_DECIMALS));
    }
    if kwh >= 1000.0 {
        return format!("{} MWh", format_number(kwh / 1000.0, DEFAULT_DECIMALS));
    }
    format!("{} kWh", format_number(kwh, DEFAULT_DECIMALS))
}

/// CO2 mass: kg, switching to tonnes from 1000 kg
pub fn format_co2(kg: f64) -> String {
    if kg >= 1000.0 {
        return format!("{} tonnes", format_number(kg / 1000.0, DEFAULT_DECIMALS));
    }
    format!("{} kg", format_number(kg, DEFAULT_DECIMALS))
}

/// Surface area in square meters
pub fn format_area(m2: f64) -> String {
    format!("{} m²", format_number(m2, DEFAULT_DECIMALS))
}
