/// Date formatting for entity timestamps
///
/// The API sends `createdAt` as an ISO date ("YYYY-MM-DD"), sometimes with a time part.

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2025-06-08" or "2025-06-08T14:02:26Z" -> "08.06.2025"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}
