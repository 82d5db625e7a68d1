//! Cross-calendar integration tests.

use chronology_rs::{CalendarDate, CalendarKind, IsoDate, TemporalField, TemporalUnit};

const KINDS: [CalendarKind; 5] = [
    CalendarKind::Julian,
    CalendarKind::BritishCutover,
    CalendarKind::Symmetry454,
    CalendarKind::Symmetry010,
    CalendarKind::InternationalFixed,
];

fn date(kind: CalendarKind, year: i32, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(kind, year, month, day).unwrap()
}

/// Epoch day anchors that exercise each calendar's irregularities.
fn anchors(kind: CalendarKind) -> [i64; 3] {
    match kind {
        // Year 1, the cutover year, and a modern year.
        CalendarKind::Julian | CalendarKind::BritishCutover => [
            date(kind, 1, 1, 1).to_epoch_day(),
            date(kind, 1752, 1, 1).to_epoch_day(),
            date(kind, 2000, 1, 1).to_epoch_day(),
        ],
        // A leap-week year and a cycle boundary.
        CalendarKind::Symmetry454 | CalendarKind::Symmetry010 => [
            date(kind, 1, 1, 1).to_epoch_day(),
            date(kind, 292, 1, 1).to_epoch_day(),
            date(kind, 2004, 1, 1).to_epoch_day(),
        ],
        // A leap year with both intercalary days.
        CalendarKind::InternationalFixed => [
            date(kind, 1, 1, 1).to_epoch_day(),
            date(kind, 2011, 1, 1).to_epoch_day(),
            date(kind, 2012, 1, 1).to_epoch_day(),
        ],
    }
}

#[test]
fn epoch_day_round_trip_windows() {
    for kind in KINDS {
        for anchor in anchors(kind) {
            for offset in 0..800 {
                let epoch_day = anchor + offset;
                let d = CalendarDate::of_epoch_day(kind, epoch_day).unwrap();
                assert_eq!(d.to_epoch_day(), epoch_day);
                let rebuilt = CalendarDate::new(kind, d.year(), d.month(), d.day()).unwrap();
                assert_eq!(rebuilt, d, "kind {kind} epoch day {epoch_day}");
                assert!(d.day() >= 1);
                assert!(d.month() >= 1 && d.month() <= kind.months_in_year());
            }
        }
    }
}

#[test]
fn iso_conversion_is_lossless() {
    for kind in KINDS {
        for anchor in anchors(kind) {
            for offset in [0, 1, 59, 180, 365, 366, 399] {
                let d = CalendarDate::of_epoch_day(kind, anchor + offset).unwrap();
                let iso = d.to_iso().unwrap();
                assert_eq!(iso.to_epoch_day(), d.to_epoch_day());
                let back = CalendarDate::from_iso(kind, iso).unwrap();
                assert_eq!(back, d);
            }
        }
    }
}

#[test]
fn conversions_between_calendars_preserve_the_day() {
    // ISO 2000-01-01 in every calendar.
    let iso = IsoDate::try_new(2000, 1, 1).unwrap();
    let labels = [
        (CalendarKind::Julian, 1999, 12, 19),
        (CalendarKind::Symmetry454, 1999, 12, 27),
        (CalendarKind::Symmetry010, 1999, 12, 29),
        (CalendarKind::InternationalFixed, 2000, 1, 1),
    ];
    for (kind, year, month, day) in labels {
        let d = CalendarDate::from_iso(kind, iso).unwrap();
        assert_eq!(
            (d.year(), d.month(), d.day()),
            (year, month, day),
            "kind {kind}"
        );
    }
    let cutover = CalendarDate::from_iso(CalendarKind::BritishCutover, iso).unwrap();
    assert_eq!((cutover.month(), cutover.day()), (1, 1));
    assert_eq!(cutover.year(), 2000);
}

#[test]
fn cutover_timeline() {
    let kind = CalendarKind::BritishCutover;
    // Walk the whole cutover month day by day.
    let start = date(kind, 1752, 9, 1);
    let labels: Vec<u8> = (0..19)
        .map(|i| start.plus(i, TemporalUnit::Day).unwrap().day())
        .collect();
    assert_eq!(
        labels,
        [1, 2, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30]
    );
    assert_eq!(start.length_of_month(), 19);
    assert_eq!(start.length_of_year(), 355);

    // Before the cutover the calendar tracks Julian, after it Gregorian.
    let julian_aligned = date(kind, 1700, 2, 29);
    assert_eq!(
        julian_aligned.to_epoch_day(),
        date(CalendarKind::Julian, 1700, 2, 29).to_epoch_day()
    );
    let iso = date(kind, 2000, 1, 1).to_iso().unwrap();
    assert_eq!((iso.year(), iso.month(), iso.day()), (2000, 1, 1));
}

#[test]
fn symmetry_calendars_are_week_aligned() {
    for kind in [CalendarKind::Symmetry454, CalendarKind::Symmetry010] {
        for year in [1, 292, 1999, 2004, 2009] {
            let first = date(kind, year, 1, 1);
            assert_eq!(first.day_of_week(), 1, "kind {kind} year {year}");
            let length = i64::from(first.length_of_year());
            assert_eq!(length % 7, 0);
            let last = first.plus(length - 1, TemporalUnit::Day).unwrap();
            assert_eq!(last.day_of_week(), 7);
            assert_eq!(last.year(), year);
            assert_eq!(last.month(), 12);
        }
    }
}

#[test]
fn international_fixed_week_structure() {
    let kind = CalendarKind::InternationalFixed;
    // Every month starts on Monday and ends on Sunday (day 28).
    for month in 1..=13 {
        let first = date(kind, 2012, month, 1);
        assert_eq!(first.day_of_week(), 1, "month {month}");
        assert_eq!(date(kind, 2012, month, 28).day_of_week(), 7);
    }
    // Intercalary days sit outside the week cycle.
    let leap_day = date(kind, 2012, 6, 29);
    let year_day = date(kind, 2012, 13, 29);
    for d in [leap_day, year_day] {
        assert_eq!(d.day_of_week(), 0);
        assert_eq!(d.get(TemporalField::AlignedWeekOfYear), Ok(0));
    }
    assert_eq!(year_day.day_of_year(), 366);
    // The week resumes unbroken after each intercalary day.
    assert_eq!(leap_day.plus(1, TemporalUnit::Day).unwrap().day_of_week(), 1);
    assert_eq!(year_day.plus(1, TemporalUnit::Day).unwrap().day_of_week(), 1);
    assert_eq!(year_day.plus(1, TemporalUnit::Day).unwrap().year(), 2013);
}

#[test]
fn until_round_trips_across_sampled_pairs() {
    let offsets = [0i64, 1, 13, 27, 28, 35, 90, 168, 169, 170, 354, 364, 365, 371, 430];
    for kind in KINDS {
        for anchor in anchors(kind) {
            let dates: Vec<CalendarDate> = offsets
                .iter()
                .map(|o| CalendarDate::of_epoch_day(kind, anchor + o).unwrap())
                .collect();
            for start in &dates {
                for end in &dates {
                    let period = start.until(end).unwrap();
                    let arrived = start.plus_period(&period).unwrap();
                    assert_eq!(
                        arrived, *end,
                        "kind {kind}: {start} -> {end} via {period}"
                    );
                }
            }
        }
    }
}

#[test]
fn until_converts_foreign_calendars() {
    let start = date(CalendarKind::Julian, 1969, 12, 19);
    let end = date(CalendarKind::Symmetry454, 1999, 12, 28);
    let period = start.until(&end).unwrap();
    assert_eq!(period.kind(), CalendarKind::Julian);
    let arrived = start.plus_period(&period).unwrap();
    assert_eq!(arrived.to_epoch_day(), end.to_epoch_day());
    assert_eq!(
        start.until_in(&end, TemporalUnit::Day),
        Ok(end.to_epoch_day())
    );
}

#[test]
fn time_units_and_fields_are_rejected() {
    let d = date(CalendarKind::Symmetry454, 2004, 12, 35);
    assert!(d.plus(1, TemporalUnit::Minute).is_err());
    assert!(d.until_in(&d, TemporalUnit::Nanosecond).is_err());
    assert!(d.get(TemporalField::SecondOfMinute).is_err());
    assert!(d.range(TemporalField::HourOfDay).is_err());
    assert!(d.with(TemporalField::HourOfDay, 0).is_err());
}

#[test]
#[ignore = "sweeps a full 293-year leap cycle"]
fn symmetry_full_cycle_round_trip() {
    for kind in [CalendarKind::Symmetry454, CalendarKind::Symmetry010] {
        let start = date(kind, 1, 1, 1).to_epoch_day();
        for offset in 0..107_016 {
            let epoch_day = start + offset;
            let d = CalendarDate::of_epoch_day(kind, epoch_day).unwrap();
            let rebuilt = CalendarDate::new(kind, d.year(), d.month(), d.day()).unwrap();
            assert_eq!(rebuilt.to_epoch_day(), epoch_day);
        }
    }
}

#[test]
#[ignore = "quadratic sweep over the cutover years"]
fn cutover_until_exhaustive() {
    let kind = CalendarKind::BritishCutover;
    let start = date(kind, 1751, 1, 1).to_epoch_day();
    let end = date(kind, 1754, 1, 1).to_epoch_day();
    let dates: Vec<CalendarDate> = (start..end)
        .map(|e| CalendarDate::of_epoch_day(kind, e).unwrap())
        .collect();
    for a in &dates {
        for b in &dates {
            let period = a.until(b).unwrap();
            assert_eq!(a.plus_period(&period).unwrap(), *b, "{a} -> {b} via {period}");
        }
    }
}
