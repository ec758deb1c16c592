use chrono::{DateTime, Local, NaiveDate, Utc};

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_time_hm(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M").to_string()
}

// Label for a closed or still-open attendance record.
pub fn worked_duration_label(
    check_in: &DateTime<Utc>,
    check_out: Option<&DateTime<Utc>>,
) -> String {
    match check_out {
        Some(check_out) => {
            let minutes = check_out.signed_duration_since(*check_in).num_minutes().max(0);
            format!("{}h {:02}m", minutes / 60, minutes % 60)
        }
        None => "in progress".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 13, h, m, 0).unwrap()
    }

    #[test]
    fn format_date_is_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 13).unwrap();
        assert_eq!(format_date(&date), "2024-05-13");
    }

    #[test]
    fn worked_duration_label_formats_hours_and_minutes() {
        assert_eq!(
            worked_duration_label(&ts(9, 0), Some(&ts(16, 5))),
            "7h 05m"
        );
        assert_eq!(worked_duration_label(&ts(9, 0), Some(&ts(9, 0))), "0h 00m");
    }

    #[test]
    fn worked_duration_label_open_record() {
        assert_eq!(worked_duration_label(&ts(9, 0), None), "in progress");
    }

    #[test]
    fn worked_duration_label_clamps_negative_spans() {
        assert_eq!(worked_duration_label(&ts(16, 0), Some(&ts(9, 0))), "0h 00m");
    }
}
