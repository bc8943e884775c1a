use crate::error::{Error, Result};

/// Add two numbers, rejecting NaN and infinite operands.
pub fn add_numbers(a: f64, b: f64) -> Result<f64> {
    check_finite(a)?;
    check_finite(b)?;
    Ok(a + b)
}

fn check_finite(n: f64) -> Result<()> {
    if n.is_nan() {
        return Err(Error::InvalidType {
            expected: "finite number",
            found: "NaN",
        });
    }
    if n.is_infinite() {
        return Err(Error::InvalidType {
            expected: "finite number",
            found: "infinity",
        });
    }
    Ok(())
}
