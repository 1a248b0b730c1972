#![cfg(feature = "serde")]

use bigmath::{Integer, Natural};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct Balance {
    account: String,
    amount: Integer,
}

#[test]
fn test_serialize_as_string() {
    let x: Integer = "-123456789012345678901234567890".parse().unwrap();
    assert_eq!(
        serde_json::to_string(&x).unwrap(),
        "\"-123456789012345678901234567890\""
    );
    assert_eq!(serde_json::to_string(&Natural::from(7u32)).unwrap(), "\"7\"");
}

#[test]
fn test_round_trip() {
    let balance = Balance {
        account: "reserve".to_owned(),
        amount: "340282366920938463463374607431768211456".parse().unwrap(),
    };
    let json = serde_json::to_string(&balance).unwrap();
    assert_eq!(
        json,
        r#"{"account":"reserve","amount":"340282366920938463463374607431768211456"}"#
    );
    assert_eq!(serde_json::from_str::<Balance>(&json).unwrap(), balance);
}

#[test]
fn test_deserialize_native() {
    assert_eq!(serde_json::from_str::<Integer>("-42").unwrap(), Integer::from(-42));
    assert_eq!(
        serde_json::from_str::<Integer>("18446744073709551615").unwrap(),
        Integer::from(u64::MAX)
    );
    assert_eq!(serde_json::from_str::<Natural>("42").unwrap(), Natural::from(42u32));
    assert_eq!(serde_json::from_str::<Natural>("\"0\"").unwrap(), Natural::zero());
}

#[test]
fn test_deserialize_invalid() {
    assert!(serde_json::from_str::<Integer>("\"12x\"").is_err());
    assert!(serde_json::from_str::<Integer>("1.5").is_err());
    assert!(serde_json::from_str::<Integer>("true").is_err());
    assert!(serde_json::from_str::<Natural>("-1").is_err());
    assert!(serde_json::from_str::<Natural>("\"-5\"").is_err());
}
