use datum::{Date, DateRange, DateTime, Datum, Error, Period, Unit};

fn dt(text: &str) -> DateTime {
    text.parse().unwrap()
}

fn date(text: &str) -> Date {
    text.parse().unwrap()
}

#[test]
fn is_end_of_month_after_end_of_month() {
    let mut datum = Datum::from_iso_long_date("2021-01-31T00:00:00").unwrap();
    datum.end_of_month();
    assert!(datum.is_end_of_month());

    let datum = Datum::from_iso_date_string("2021-01-30").unwrap();
    assert!(!datum.is_end_of_month());
}

#[test]
fn is_end_of_month_compares_time_of_day() {
    let mut datum = Datum::from_iso_long_date("2021-01-31T10:00:00").unwrap();
    assert!(datum.is_end_of_month());
    datum.add_hours(1).unwrap();
    assert!(datum.is_end_of_month());
    datum.truncate(Unit::Day);
    assert!(datum.is_end_of_month());
    datum.subtract_days(1).unwrap();
    assert!(!datum.is_end_of_month());
}

#[test]
fn end_of_month_for_every_month_length() {
    let cases = [
        ("2021-02-10T07:08:09", "2021-02-28T07:08:09"),
        ("2020-02-10T07:08:09", "2020-02-29T07:08:09"),
        ("2021-04-10T07:08:09", "2021-04-30T07:08:09"),
        ("2021-12-10T07:08:09", "2021-12-31T07:08:09"),
        ("1900-02-01T00:00:00", "1900-02-28T00:00:00"),
        ("2000-02-01T00:00:00", "2000-02-29T00:00:00"),
    ];
    for (input, expected) in cases {
        let mut datum = Datum::from_iso_long_date(input).unwrap();
        assert_eq!(datum.end_of_month(), dt(expected), "{}", input);
    }
}

#[test]
fn end_of_month_matches_next_month_minus_one_day() {
    let mut datum = Datum::from_iso_long_date("2021-01-31T12:00:00").unwrap();
    let direct = datum.clone().end_of_month();
    datum.add_months(1).unwrap();
    datum.set_day(1).unwrap();
    datum.subtract_days(1).unwrap();
    assert_eq!(datum.datetime(), direct);
}

#[test]
fn split_forward_by_minute() {
    let range = DateRange::new(dt("2021-01-01T00:00:00"), dt("2021-01-01T00:03:00"));
    let values: Vec<_> = range.split_by(Period::Minute).collect();
    assert_eq!(
        values,
        [
            dt("2021-01-01T00:00:00"),
            dt("2021-01-01T00:01:00"),
            dt("2021-01-01T00:02:00"),
            dt("2021-01-01T00:03:00"),
        ]
    );
}

#[test]
fn split_backward_by_minute() {
    let range = DateRange::new(dt("2021-01-01T00:03:00"), dt("2021-01-01T00:00:00"));
    assert!(!range.is_forward());
    let values: Vec<_> = range.split_by(Period::Minute).collect();
    assert_eq!(
        values,
        [
            dt("2021-01-01T00:03:00"),
            dt("2021-01-01T00:02:00"),
            dt("2021-01-01T00:01:00"),
            dt("2021-01-01T00:00:00"),
        ]
    );
}

#[test]
fn split_by_day_across_a_month() {
    let range = DateRange::new(dt("2021-01-30T06:00:00"), dt("2021-02-02T00:00:00"));
    let days: Vec<_> = range
        .split_by(Period::from_name("day"))
        .map(|value| value.to_string())
        .collect();
    assert_eq!(
        days,
        [
            "2021-01-30T06:00:00",
            "2021-01-31T06:00:00",
            "2021-02-01T06:00:00"
        ]
    );
}

#[test]
fn split_can_be_restarted_from_the_range() {
    let range = DateRange::new(dt("2021-01-01T00:00:00"), dt("2021-01-01T02:00:00"));
    assert_eq!(range.split_by(Period::Hour).count(), 3);
    assert_eq!(range.split_by(Period::Hour).count(), 3);
    assert_eq!(range.start(), dt("2021-01-01T00:00:00"));
    assert_eq!(range.end(), dt("2021-01-01T02:00:00"));
}

#[test]
fn weekday_range_skips_the_weekend() {
    let days: Vec<_> = Datum::day_range_weekday(date("2021-01-01"), date("2021-01-06"))
        .map(|day| day.to_string())
        .collect();
    assert_eq!(days, ["2021-01-01", "2021-01-04", "2021-01-05"]);
}

#[test]
fn weekday_range_reversed_is_empty() {
    assert_eq!(
        Datum::day_range_weekday(date("2021-01-06"), date("2021-01-01")).count(),
        0
    );
}

#[test]
fn parse_entry_points() {
    let datum = Datum::parse("2019-06-16").unwrap();
    assert_eq!(datum.to_datetime_string(), "2019-06-16 00:00:00");
    assert_eq!(datum.day_name(), "Sunday");

    let datum = Datum::parse("1560718800").unwrap();
    assert_eq!(datum.epoch(), Ok(1_560_718_800));
    assert_eq!(datum.epoch_milliseconds(), Ok(1_560_718_800_000));

    assert!(matches!(
        Datum::from_timestamp_date_string("15607188OO"),
        Err(Error::Parse { .. })
    ));
    assert!(matches!(
        Datum::from_iso_long_date("2019-06-16T00:00"),
        Err(Error::Parse { .. })
    ));
    assert!(matches!(
        Datum::from_iso_date_string("16/06/2019"),
        Err(Error::Parse { .. })
    ));
}

#[test]
fn now_is_a_valid_local_time() {
    let datum = Datum::new().unwrap();
    let epoch = datum.epoch().unwrap();
    let roundtrip = Datum::from_timestamp_date_string(&epoch.to_string()).unwrap();
    assert_eq!(roundtrip.datetime(), datum.datetime().truncate(Unit::Second));
}

#[test]
fn iso_string_includes_microseconds() {
    let value = DateTime::builder()
        .year(2021)
        .month(5)
        .day(4)
        .hour(3)
        .minute(2)
        .second(1)
        .microsecond(123_456)
        .build()
        .unwrap();
    let datum = Datum::from_datetime(value);
    assert_eq!(datum.to_iso_string(), "2021-05-04T03:02:01.123456");
    assert_eq!(datum.to_iso_long_string(), "2021-05-04T03:02:01");
    assert_eq!(datum.to_string(), "2021-05-04 03:02:01");
}
