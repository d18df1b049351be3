use chrono::NaiveDate;

/// Get current date in YYYY-MM-DD format
pub fn get_current_date() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Today's local date, used for the age hints next to date-of-birth fields
pub fn today() -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&get_current_date(), "%Y-%m-%d").ok()
}

/// Age hint for a date of birth relative to today, empty if unknown
pub fn age_hint_for(date_of_birth: &str) -> String {
    match today() {
        Some(today) => shared::age_hint(date_of_birth, today),
        None => String::new(),
    }
}
