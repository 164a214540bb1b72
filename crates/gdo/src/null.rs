//! Nullable scalar wrappers.
//!
//! [`Null<T>`] pairs a payload with a `valid` flag. It scans SQL `NULL` as
//! invalid, binds invalid values as SQL `NULL`, and serializes invalid values
//! as JSON `null`.
//!
//! Unlike `Option<T>`, a valid `Null` holding a zero payload (`Null::valid(0)`)
//! is *not* a zero value, so it is kept by the fragment generators.

use crate::zero::Zero;
use bytes::BytesMut;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type};

/// A value that may be SQL `NULL`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Null<T> {
    pub value: T,
    pub valid: bool,
}

pub type NullBool = Null<bool>;
pub type NullInt64 = Null<i64>;
pub type NullFloat64 = Null<f64>;
pub type NullString = Null<String>;

impl<T> Null<T> {
    /// A non-NULL value.
    pub fn valid(value: T) -> Self {
        Self { value, valid: true }
    }

    /// SQL `NULL`, carrying the zero payload.
    pub fn null() -> Self
    where
        T: Default,
    {
        Self {
            value: T::default(),
            valid: false,
        }
    }

    pub fn is_null(&self) -> bool {
        !self.valid
    }

    pub fn as_option(&self) -> Option<&T> {
        self.valid.then_some(&self.value)
    }

    pub fn into_option(self) -> Option<T> {
        if self.valid { Some(self.value) } else { None }
    }
}

impl<T: Default> From<Option<T>> for Null<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::valid(v),
            None => Self::null(),
        }
    }
}

impl<T> From<Null<T>> for Option<T> {
    fn from(value: Null<T>) -> Self {
        value.into_option()
    }
}

impl<T: Zero> Zero for Null<T> {
    fn is_zero(&self) -> bool {
        !self.valid && self.value.is_zero()
    }
}

impl<'a, T> FromSql<'a> for Null<T>
where
    T: FromSql<'a> + Default,
{
    fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
        T::from_sql(ty, raw).map(Self::valid)
    }

    fn from_sql_null(_ty: &Type) -> Result<Self, Box<dyn Error + Sync + Send>> {
        Ok(Self::null())
    }

    fn accepts(ty: &Type) -> bool {
        T::accepts(ty)
    }
}

impl<T: ToSql> ToSql for Null<T> {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        if self.valid {
            self.value.to_sql(ty, out)
        } else {
            Ok(IsNull::Yes)
        }
    }

    fn accepts(ty: &Type) -> bool {
        T::accepts(ty)
    }

    tokio_postgres::types::to_sql_checked!();
}

impl<T: Serialize> Serialize for Null<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.valid {
            self.value.serialize(serializer)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de, T> Deserialize<'de> for Null<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Profile {
        nickname: NullString,
        age: NullInt64,
        verified: NullBool,
        rating: NullFloat64,
    }

    #[test]
    fn test_json_null_when_invalid() {
        let profile = Profile {
            nickname: Null::null(),
            age: Null::valid(0),
            verified: Null::valid(true),
            rating: Null::null(),
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(
            json,
            r#"{"nickname":null,"age":0,"verified":true,"rating":null}"#
        );
    }

    #[test]
    fn test_json_roundtrip_validity() {
        let profile: Profile = serde_json::from_str(
            r#"{"nickname":"al","age":null,"verified":false,"rating":4.5}"#,
        )
        .unwrap();
        assert_eq!(profile.nickname, Null::valid("al".to_string()));
        assert!(profile.age.is_null());
        assert_eq!(profile.verified, Null::valid(false));
        assert_eq!(profile.rating.as_option(), Some(&4.5));
    }

    #[test]
    fn test_json_type_error() {
        let err = serde_json::from_str::<NullInt64>(r#""not a number""#);
        assert!(err.is_err());
    }

    #[test]
    fn test_zero_semantics() {
        assert!(NullInt64::null().is_zero());
        assert!(!NullInt64::valid(0).is_zero());
        assert!(!NullString::valid(String::new()).is_zero());
        // Invalid but with a payload still counts as set.
        let odd = Null {
            value: 5_i64,
            valid: false,
        };
        assert!(!odd.is_zero());
    }

    #[test]
    fn test_option_conversions() {
        let n: NullString = Some("x".to_string()).into();
        assert!(n.valid);
        let o: Option<String> = n.into();
        assert_eq!(o.as_deref(), Some("x"));

        let n: NullBool = None.into();
        assert!(n.is_null());
        assert_eq!(n.into_option(), None);
    }

    #[test]
    fn test_to_sql_binds_null_when_invalid() {
        let mut buf = BytesMut::new();
        let is_null = NullInt64::null().to_sql(&Type::INT8, &mut buf).unwrap();
        assert!(matches!(is_null, IsNull::Yes));
        assert!(buf.is_empty());

        let is_null = NullInt64::valid(9).to_sql(&Type::INT8, &mut buf).unwrap();
        assert!(matches!(is_null, IsNull::No));
        assert_eq!(&buf[..], &9_i64.to_be_bytes());
    }

    #[test]
    fn test_from_sql_null_is_invalid() {
        let n = NullString::from_sql_null(&Type::TEXT).unwrap();
        assert!(n.is_null());
        assert_eq!(n.value, "");

        let n = NullInt64::from_sql(&Type::INT8, &42_i64.to_be_bytes()).unwrap();
        assert_eq!(n, Null::valid(42));
    }

    #[test]
    fn test_accepts_follows_payload() {
        assert!(<NullBool as ToSql>::accepts(&Type::BOOL));
        assert!(!<NullBool as ToSql>::accepts(&Type::TEXT));
    }
}
