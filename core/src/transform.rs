//! Reads the translation component of a rendered CSS transform and formats
//! the inline transforms written while dragging.

use crate::axis::Axis;
use crate::css::split_leading_number;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
    #[error("unsupported transform: {0}")]
    Unsupported(String),
    #[error("{function} expects {expected} values, got {found}")]
    Arity {
        function: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("invalid transform value: {0}")]
    Number(String),
}

/// Extracts the translation along `axis` from a transform string.
///
/// `none`, an empty string and a missing transform all mean offset 0.
/// Accepts the computed forms `matrix(..)` and `matrix3d(..)` as well as the
/// inline `translateX(..)`, `translateY(..)` and `translate(..)` forms.
pub fn read_translate(transform: Option<&str>, axis: Axis) -> Result<f64, TransformError> {
    let Some(text) = transform.map(str::trim) else {
        return Ok(0.0);
    };
    if text.is_empty() || text.eq_ignore_ascii_case("none") {
        return Ok(0.0);
    }
    let (name, args) = split_function(text)?;
    let values: Vec<&str> = args.split(',').map(str::trim).collect();
    match name.to_ascii_lowercase().as_str() {
        "matrix" => {
            let values = parse_plain(&values, "matrix", 6)?;
            Ok(axis.pick(values[4], values[5]))
        }
        "matrix3d" => {
            let values = parse_plain(&values, "matrix3d", 16)?;
            Ok(axis.pick(values[12], values[13]))
        }
        "translatex" => {
            let x = parse_length(&values, "translateX", 1)?[0];
            Ok(axis.pick(x, 0.0))
        }
        "translatey" => {
            let y = parse_length(&values, "translateY", 1)?[0];
            Ok(axis.pick(0.0, y))
        }
        "translate" => {
            if values.len() == 1 {
                let x = parse_length(&values, "translate", 1)?[0];
                Ok(axis.pick(x, 0.0))
            } else {
                let xy = parse_length(&values, "translate", 2)?;
                Ok(axis.pick(xy[0], xy[1]))
            }
        }
        _ => Err(TransformError::Unsupported(text.to_string())),
    }
}

/// Inline transform pinning a wrapper at `offset` pixels along `axis`.
pub fn format_translate(axis: Axis, offset: f64) -> String {
    let offset = if offset == 0.0 { 0.0 } else { offset };
    format!("{}({}px)", axis.translate_fn(), offset)
}

fn split_function(text: &str) -> Result<(&str, &str), TransformError> {
    let unsupported = || TransformError::Unsupported(text.to_string());
    let open = text.find('(').ok_or_else(unsupported)?;
    let close = text.rfind(')').ok_or_else(unsupported)?;
    if close < open || !text[close + 1..].trim().is_empty() {
        return Err(unsupported());
    }
    Ok((text[..open].trim(), &text[open + 1..close]))
}

fn parse_plain(
    values: &[&str],
    function: &'static str,
    expected: usize,
) -> Result<Vec<f64>, TransformError> {
    check_arity(values, function, expected)?;
    values
        .iter()
        .map(|value| {
            value
                .parse::<f64>()
                .ok()
                .filter(|number| number.is_finite())
                .ok_or_else(|| TransformError::Number(value.to_string()))
        })
        .collect()
}

fn parse_length(
    values: &[&str],
    function: &'static str,
    expected: usize,
) -> Result<Vec<f64>, TransformError> {
    check_arity(values, function, expected)?;
    values
        .iter()
        .map(|value| match split_leading_number(value) {
            Some((number, unit)) if unit.is_empty() || unit.eq_ignore_ascii_case("px") => {
                Ok(number)
            }
            _ => Err(TransformError::Number(value.to_string())),
        })
        .collect()
}

fn check_arity(
    values: &[&str],
    function: &'static str,
    expected: usize,
) -> Result<(), TransformError> {
    if values.len() != expected {
        return Err(TransformError::Arity {
            function,
            expected,
            found: values.len(),
        });
    }
    Ok(())
}
