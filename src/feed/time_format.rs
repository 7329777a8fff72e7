use chrono::{DateTime, Datelike, SecondsFormat, TimeZone, Timelike, Utc};

use crate::common::Locale;

const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2_520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Coarse distance between two instants, before localization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Distance {
    LessThanMinutes(i64),
    Minutes(i64),
    AboutHours(i64),
    Days(i64),
    AboutMonths(i64),
    Months(i64),
    AboutYears(i64),
    OverYears(i64),
    AlmostYears(i64),
}

impl Distance {
    fn between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> Self {
        let seconds = (later - earlier).num_seconds();
        let minutes = rounded_div(seconds, 60);

        if minutes == 0 {
            return Distance::LessThanMinutes(1);
        }
        if minutes < 45 {
            return Distance::Minutes(minutes);
        }
        if minutes < 90 {
            return Distance::AboutHours(1);
        }
        if minutes < MINUTES_IN_DAY {
            return Distance::AboutHours(rounded_div(minutes, 60));
        }
        if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
            return Distance::Days(1);
        }
        if minutes < MINUTES_IN_MONTH {
            return Distance::Days(rounded_div(minutes, MINUTES_IN_DAY));
        }
        if minutes < MINUTES_IN_TWO_MONTHS {
            return Distance::AboutMonths(rounded_div(minutes, MINUTES_IN_MONTH));
        }

        let months = full_months_between(earlier, later);
        if months < 12 {
            return Distance::Months(rounded_div(minutes, MINUTES_IN_MONTH));
        }

        let years = months / 12;
        match months % 12 {
            0..3 => Distance::AboutYears(years),
            3..9 => Distance::OverYears(years),
            _ => Distance::AlmostYears(years + 1),
        }
    }

    fn phrase(self, locale: Locale) -> String {
        match locale {
            Locale::EnUs => match self {
                Distance::LessThanMinutes(1) => "less than a minute".to_string(),
                Distance::LessThanMinutes(n) => format!("less than {} minutes", n),
                Distance::Minutes(n) => plural(n, "minute", "minutes"),
                Distance::AboutHours(n) => format!("about {}", plural(n, "hour", "hours")),
                Distance::Days(n) => plural(n, "day", "days"),
                Distance::AboutMonths(n) => format!("about {}", plural(n, "month", "months")),
                Distance::Months(n) => plural(n, "month", "months"),
                Distance::AboutYears(n) => format!("about {}", plural(n, "year", "years")),
                Distance::OverYears(n) => format!("over {}", plural(n, "year", "years")),
                Distance::AlmostYears(n) => format!("almost {}", plural(n, "year", "years")),
            },
            Locale::PtBr => match self {
                Distance::LessThanMinutes(1) => "menos de um minuto".to_string(),
                Distance::LessThanMinutes(n) => format!("menos de {} minutos", n),
                Distance::Minutes(n) => plural(n, "minuto", "minutos"),
                Distance::AboutHours(n) => format!("cerca de {}", plural(n, "hora", "horas")),
                Distance::Days(n) => plural(n, "dia", "dias"),
                Distance::AboutMonths(n) => format!("cerca de {}", plural(n, "mês", "meses")),
                Distance::Months(n) => plural(n, "mês", "meses"),
                Distance::AboutYears(n) => format!("cerca de {}", plural(n, "ano", "anos")),
                Distance::OverYears(n) => format!("mais de {}", plural(n, "ano", "anos")),
                Distance::AlmostYears(n) => format!("quase {}", plural(n, "ano", "anos")),
            },
        }
    }
}

fn plural(count: i64, one: &str, other: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { other })
}

/// Integer division rounding halves up. Both operands are non-negative.
fn rounded_div(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}

/// Whole calendar months from `earlier` to `later`, not counting a final
/// partial month
fn full_months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let calendar_months = (later.year() - earlier.year()) as i64 * 12
        + later.month() as i64
        - earlier.month() as i64;

    let later_in_month = (later.day(), later.num_seconds_from_midnight());
    let earlier_in_month = (earlier.day(), earlier.num_seconds_from_midnight());

    if calendar_months > 0 && later_in_month < earlier_in_month {
        calendar_months - 1
    } else {
        calendar_months
    }
}

/// Render an instant as "D de MONTH às H:MMh" in the instant's own offset.
///
/// The pattern words "de" and "às" are fixed for every locale; only the month
/// name follows `locale`, so en-US renders as "1 de December às 23:59h".
pub fn format_absolute<Tz: TimeZone>(instant: &DateTime<Tz>, locale: Locale) -> String {
    format!(
        "{} de {} às {}:{:02}h",
        instant.day(),
        locale.month_name(instant.month()),
        instant.hour(),
        instant.minute()
    )
}

/// Render how long ago `instant` was relative to `now`, e.g.
/// "about 1 hour ago" or "há cerca de 1 hora". Instants after `now` are
/// phrased as "in ..." / "em ...".
pub fn format_relative(instant: DateTime<Utc>, now: DateTime<Utc>, locale: Locale) -> String {
    let in_future = instant > now;
    let distance = if in_future {
        Distance::between(now, instant)
    } else {
        Distance::between(instant, now)
    };
    let phrase = distance.phrase(locale);

    match (locale, in_future) {
        (Locale::EnUs, false) => format!("{} ago", phrase),
        (Locale::EnUs, true) => format!("in {}", phrase),
        (Locale::PtBr, false) => format!("há {}", phrase),
        (Locale::PtBr, true) => format!("em {}", phrase),
    }
}

/// Machine-readable form used for the `datetime` attribute of a rendered post
pub fn format_iso(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn ago(duration: Duration) -> String {
        format_relative(now() - duration, now(), Locale::EnUs)
    }

    #[test]
    fn test_format_absolute_pt_br() {
        let instant = Utc.with_ymd_and_hms(2026, 5, 3, 20, 0, 0).unwrap();
        assert_eq!(
            format_absolute(&instant, Locale::PtBr),
            "3 de maio às 20:00h"
        );

        let morning = Utc.with_ymd_and_hms(2026, 3, 14, 9, 5, 0).unwrap();
        assert_eq!(
            format_absolute(&morning, Locale::PtBr),
            "14 de março às 9:05h"
        );
    }

    #[test]
    fn test_format_absolute_en_us_keeps_pattern() {
        let instant = Utc.with_ymd_and_hms(2026, 12, 1, 23, 59, 0).unwrap();
        assert_eq!(
            format_absolute(&instant, Locale::EnUs),
            "1 de December às 23:59h"
        );
    }

    #[test]
    fn test_format_absolute_uses_instant_offset() {
        let brasilia = FixedOffset::west_opt(3 * 3600).unwrap();
        let instant = Utc
            .with_ymd_and_hms(2026, 6, 1, 1, 30, 0)
            .unwrap()
            .with_timezone(&brasilia);
        assert_eq!(
            format_absolute(&instant, Locale::PtBr),
            "31 de maio às 22:30h"
        );
    }

    #[test]
    fn test_same_instant_is_less_than_a_minute() {
        assert_eq!(
            format_relative(now(), now(), Locale::EnUs),
            "less than a minute ago"
        );
        assert_eq!(
            format_relative(now(), now(), Locale::PtBr),
            "há menos de um minuto"
        );
    }

    #[test]
    fn test_minutes() {
        assert_eq!(ago(Duration::seconds(29)), "less than a minute ago");
        assert_eq!(ago(Duration::seconds(30)), "1 minute ago");
        assert_eq!(ago(Duration::minutes(5)), "5 minutes ago");
        assert_eq!(ago(Duration::minutes(44)), "44 minutes ago");
    }

    #[test]
    fn test_hours() {
        assert_eq!(ago(Duration::minutes(45)), "about 1 hour ago");
        assert_eq!(ago(Duration::minutes(60)), "about 1 hour ago");
        assert_eq!(ago(Duration::minutes(89)), "about 1 hour ago");
        assert_eq!(ago(Duration::hours(5)), "about 5 hours ago");
        assert_eq!(ago(Duration::hours(23)), "about 23 hours ago");
    }

    #[test]
    fn test_ninety_minutes_is_hour_granularity() {
        let phrase = ago(Duration::minutes(90));
        assert_eq!(phrase, "about 2 hours ago");
        assert!(!phrase.contains("minute"));
    }

    #[test]
    fn test_days() {
        assert_eq!(ago(Duration::hours(24)), "1 day ago");
        assert_eq!(ago(Duration::hours(41)), "1 day ago");
        assert_eq!(ago(Duration::hours(42)), "2 days ago");
        assert_eq!(ago(Duration::days(29)), "29 days ago");
    }

    #[test]
    fn test_months() {
        assert_eq!(ago(Duration::days(30)), "about 1 month ago");
        assert_eq!(ago(Duration::days(50)), "about 2 months ago");
        assert_eq!(ago(Duration::days(100)), "3 months ago");
        assert_eq!(ago(Duration::days(300)), "10 months ago");
    }

    #[test]
    fn test_years() {
        let one_year = Utc.with_ymd_and_hms(2025, 10, 19, 12, 0, 0).unwrap();
        assert_eq!(
            format_relative(one_year, now(), Locale::EnUs),
            "about 1 year ago"
        );

        let over = Utc.with_ymd_and_hms(2025, 4, 1, 12, 0, 0).unwrap();
        assert_eq!(
            format_relative(over, now(), Locale::EnUs),
            "over 1 year ago"
        );

        let almost = Utc.with_ymd_and_hms(2024, 11, 1, 12, 0, 0).unwrap();
        assert_eq!(
            format_relative(almost, now(), Locale::EnUs),
            "almost 2 years ago"
        );
    }

    #[test]
    fn test_pt_br_phrases() {
        let at = |d: Duration| format_relative(now() - d, now(), Locale::PtBr);
        assert_eq!(at(Duration::minutes(1)), "há 1 minuto");
        assert_eq!(at(Duration::minutes(60)), "há cerca de 1 hora");
        assert_eq!(at(Duration::hours(3)), "há cerca de 3 horas");
        assert_eq!(at(Duration::days(3)), "há 3 dias");
        assert_eq!(at(Duration::days(30)), "há cerca de 1 mês");
        assert_eq!(at(Duration::days(100)), "há 3 meses");
    }

    #[test]
    fn test_future_instants() {
        let later = now() + Duration::minutes(5);
        assert_eq!(format_relative(later, now(), Locale::EnUs), "in 5 minutes");
        assert_eq!(format_relative(later, now(), Locale::PtBr), "em 5 minutos");
    }

    #[test]
    fn test_format_iso() {
        let instant = Utc.with_ymd_and_hms(2026, 5, 3, 20, 0, 0).unwrap();
        assert_eq!(format_iso(instant), "2026-05-03T20:00:00.000Z");
    }
}
