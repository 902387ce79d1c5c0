//! Spanish long-form dates ("19 de octubre de 2026").

use chrono::{Datelike as _, NaiveDate};

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Formats `date` as `"DD de <mes> de YYYY"`.
#[must_use]
pub fn spanish_long_date(date: NaiveDate) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{:02} de {month} de {}", date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_spanish_month() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(spanish_long_date(date), "05 de enero de 2026");
    }

    #[test]
    fn formats_last_month() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(spanish_long_date(date), "31 de diciembre de 2025");
    }
}
