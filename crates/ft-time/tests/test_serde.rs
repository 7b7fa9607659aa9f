//! Serialization of dates and form fields (requires the `serde` feature).

#![cfg(feature = "serde")]

use ft_time::{holiday_for_date, Date, DateFields, Holiday};

#[test]
fn date_as_three_fields() {
    let d = Date::from_ymd(2024, 3, 4).unwrap();
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(json, r#"{"year":2024,"month":3,"day":4}"#);
    assert_eq!(serde_json::from_str::<Date>(&json).unwrap(), d);
}

#[test]
fn invalid_date_is_rejected() {
    let err = serde_json::from_str::<Date>(r#"{"year":2023,"month":2,"day":29}"#);
    assert!(err.is_err());
}

#[test]
fn form_fields() {
    let f: DateFields = serde_json::from_str(r#"{"day":31,"month":1,"year":2024}"#).unwrap();
    assert_eq!(f.to_date().unwrap(), Date::from_ymd(2024, 1, 31).unwrap());
}

#[test]
fn holiday_definition() {
    let h = holiday_for_date(Date::from_ymd(2024, 10, 3).unwrap()).unwrap();
    assert_eq!(h.holiday, Holiday::GermanUnityDay);
    let json = serde_json::to_string(&h).unwrap();
    assert_eq!(
        json,
        r#"{"holiday":"GermanUnityDay","date":{"year":2024,"month":10,"day":3}}"#
    );
}
