//! Parsing of user-typed numeric fields.

use nom::{character::complete::multispace0, number::complete::double, IResult};

use crate::error::{RecordField, ValidationError};
use crate::models::RefuelRecord;

fn decimal(input: &str) -> IResult<&str, f64> {
    let (input, _) = multispace0(input)?;
    let (input, value) = double(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, value))
}

/// Parse a decimal quantity typed into `field`.
///
/// A single comma is accepted as the decimal separator when the text has
/// no dot. Empty text, trailing characters and non-finite values are
/// rejected as non-numeric.
pub fn parse_quantity(field: RecordField, text: &str) -> Result<f64, ValidationError> {
    let non_numeric = ValidationError::NonNumeric { field };

    let normalized;
    let text = if !text.contains('.') && text.matches(',').count() == 1 {
        normalized = text.replace(',', ".");
        normalized.as_str()
    } else {
        text
    };

    match decimal(text) {
        Ok(("", value)) if value.is_finite() => Ok(value),
        _ => Err(non_numeric),
    }
}

/// Assemble a candidate record from form text. The result still has to
/// pass [`crate::validation::validate`] before it is admitted.
pub fn parse_record(
    id: &str,
    date_unix: i64,
    odometer: &str,
    volume: &str,
    unit_price: &str,
) -> Result<RefuelRecord, ValidationError> {
    Ok(RefuelRecord {
        id: id.to_string(),
        date_unix,
        odometer: parse_quantity(RecordField::Odometer, odometer)?,
        volume: parse_quantity(RecordField::Volume, volume)?,
        unit_price: parse_quantity(RecordField::UnitPrice, unit_price)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(RecordField::Volume, "42.5"), Ok(42.5));
        assert_eq!(parse_quantity(RecordField::Volume, "  42.5 "), Ok(42.5));
        assert_eq!(parse_quantity(RecordField::Volume, "42"), Ok(42.0));
        assert_eq!(parse_quantity(RecordField::Volume, "-1"), Ok(-1.0));
        assert_eq!(parse_quantity(RecordField::Volume, "1e3"), Ok(1000.0));
    }

    #[test]
    fn test_parse_quantity_comma_decimal() {
        assert_eq!(parse_quantity(RecordField::UnitPrice, "1,75"), Ok(1.75));
        assert!(parse_quantity(RecordField::UnitPrice, "1,000.5").is_err());
        assert!(parse_quantity(RecordField::UnitPrice, "1,0,0").is_err());
    }

    #[test]
    fn test_parse_quantity_rejects_non_numeric() {
        let expected = Err(ValidationError::NonNumeric {
            field: RecordField::Odometer,
        });
        for text in ["", "   ", "abc", "12km", "1.2.3", "NaN", "inf", "-infinity"] {
            assert_eq!(parse_quantity(RecordField::Odometer, text), expected, "{text:?}");
        }
    }

    #[test]
    fn test_parse_record() {
        let record = parse_record("r1", 1_700_000_000, "15000", "30,5", "1.6").unwrap();
        assert_eq!(record.id, "r1");
        assert_eq!(record.odometer, 15_000.0);
        assert_eq!(record.volume, 30.5);
        assert_eq!(record.unit_price, 1.6);

        let err = parse_record("r1", 0, "15000", "lots", "1.6").unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonNumeric {
                field: RecordField::Volume
            }
        );
    }
}
