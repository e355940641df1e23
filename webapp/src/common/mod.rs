pub mod debounce;
pub mod scroll;
pub mod style;
pub mod toast;

use chrono::NaiveDate;

// release dates arrive as "YYYY-MM-DD" but are blank often enough that the
// grid needs a fallback
pub fn release_year(date: &str) -> String {
    let convert = move || {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")?;

        Result::<String, anyhow::Error>::Ok(date.format("%Y").to_string())
    };

    match convert() {
        Ok(year) => year,
        Err(_) => String::from("Unknown"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_year_extracts_year() {
        assert_eq!(release_year("2010-07-15"), "2010");
    }

    #[test]
    fn release_year_falls_back_on_garbage() {
        assert_eq!(release_year(""), "Unknown");
        assert_eq!(release_year("soon"), "Unknown");
    }
}
