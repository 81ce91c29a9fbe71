/// Round a value half-up, away from zero on ties, to `precision` decimals.
///
/// Rounding works on the shortest decimal representation of the value, so `1.005` becomes
/// `1.01` even though its binary approximation lies slightly below. Values that already have
/// at most `precision` decimals are returned unchanged, as are infinities and NaN.
#[must_use]
pub fn round_half_up(value: f64, precision: u8) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // f64's Display never switches to exponent notation
    let text = value.abs().to_string();
    let Some((integer, fraction)) = text.split_once('.') else {
        return value;
    };

    let decimals = usize::from(precision);
    let Some(&next_digit) = fraction.as_bytes().get(decimals) else {
        return value;
    };

    let mut digits: Vec<u8> = integer.bytes().chain(fraction.bytes().take(decimals)).collect();
    if next_digit >= b'5' {
        increment(&mut digits);
    }

    let point = digits.len() - decimals;
    let mut rounded = String::with_capacity(digits.len() + 1);
    for (position, &digit) in digits.iter().enumerate() {
        if position == point {
            rounded.push('.');
        }
        rounded.push(char::from(digit));
    }

    rounded
        .parse::<f64>()
        .map_or(value, |magnitude| if value < 0.0 && magnitude != 0.0 { -magnitude } else { magnitude })
}

/// Add one unit in the last place to a string of ASCII digits.
fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }

    digits.insert(0, b'1');
}
