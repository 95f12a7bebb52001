//! SQL type wrappers for validated models.
//!
//! This module provides the [`ValidatedJson`] and [`ValidatedText`] wrapper types for
//! storing `serde` + `validator` models in SQL columns, as native JSON or as an
//! opaque serialized string.

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sqlx::database::Database;
use sqlx::decode::Decode;
use sqlx::encode::{Encode, IsNull};
use sqlx::error::BoxDynError;
#[cfg(feature = "mysql")]
use sqlx::mysql::MySqlTypeInfo;
#[cfg(feature = "postgres")]
use sqlx::postgres::PgTypeInfo;
#[cfg(feature = "sqlite")]
use sqlx::sqlite::{SqliteArgumentValue, SqliteTypeInfo};
#[cfg(any(feature = "mysql", feature = "postgres"))]
use sqlx::types::Json;
use sqlx::types::Type;
use validator::Validate;

use crate::error::ModelError;

fn validated<T: Validate>(record: T) -> Result<T, ModelError> {
    if let Err(err) = record.validate() {
        tracing::debug!("record failed validation: {err}");
        return Err(err.into());
    }

    Ok(record)
}

/// A wrapper type for models stored as native JSON in SQL databases.
///
/// `ValidatedJson<T>` wraps a value of type `T` and provides automatic
/// serialization/deserialization through `serde_json` when binding to or reading from
/// SQL columns. When a value is read back, it is run through
/// [`Validate`](validator::Validate) before it is handed to the application, so a row
/// that violates the model's constraints surfaces as a column decode error.
///
/// # Database Support
///
/// The column resolves to a backend-native JSON type where one exists:
///
/// - **PostgreSQL** - `JSONB`
/// - **MySQL** - `JSON`
/// - **SQLite** - `TEXT` (no native JSON column type)
///
/// The serialized bytes are the same on every backend, only the column type differs.
/// See [`TypedColumn`](crate::TypedColumn) for the DDL side of this mapping.
///
/// # Example
///
/// ```rust,ignore
/// use kolono::sql_types::ValidatedJson;
///
/// #[derive(Serialize, Deserialize, Validate)]
/// struct UserMeta {
///     #[validate(length(min = 1))]
///     a: String,
///     b: i32,
///     c: Option<bool>,
/// }
///
/// let meta = ValidatedJson::new(UserMeta { a: "test".into(), b: 1, c: None })?;
///
/// sqlx::query("INSERT INTO users_json (meta) VALUES ($1)")
///     .bind(meta)
///     .execute(&pool)
///     .await?;
/// ```
///
/// # Deref
///
/// `ValidatedJson<T>` implements `Deref` and `DerefMut` to `T`, allowing transparent
/// access to the inner value.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ValidatedJson<T: ?Sized>(pub T);

impl<T> From<T> for ValidatedJson<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> AsRef<T> for ValidatedJson<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> AsMut<T> for ValidatedJson<T> {
    fn as_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> ValidatedJson<T> {
    /// Unwraps the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> ValidatedJson<T>
where
    T: Validate,
{
    /// Wraps a record after running its validation rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the record violates its validation constraints.
    pub fn new(record: T) -> Result<Self, ModelError> {
        Ok(Self(validated(record)?))
    }
}

impl<T> ValidatedJson<T>
where
    T: Serialize,
{
    /// Serializes the wrapped record to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be represented as JSON.
    pub fn encode_to(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

impl<T> ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
{
    /// Deserializes and validates a record from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is malformed or the record fails validation.
    pub fn decode_from_str(raw: &str) -> Result<Self, ModelError> {
        let record = serde_json::from_str::<T>(raw)?;

        Ok(Self(validated(record)?))
    }
}

#[cfg(feature = "sqlite")]
impl<T> Type<sqlx::Sqlite> for ValidatedJson<T> {
    fn type_info() -> SqliteTypeInfo {
        <&str as Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <&str as Type<sqlx::Sqlite>>::compatible(ty)
    }
}

#[cfg(feature = "sqlite")]
impl<T> Encode<'_, sqlx::Sqlite> for ValidatedJson<T>
where
    T: Serialize,
{
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Sqlite as Database>::ArgumentBuffer<'_>,
    ) -> Result<IsNull, BoxDynError> {
        buf.push(SqliteArgumentValue::Text(std::borrow::Cow::Owned(
            self.encode_to()?,
        )));

        Ok(IsNull::No)
    }
}

#[cfg(feature = "sqlite")]
impl<'r, T> Decode<'r, sqlx::Sqlite> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
{
    fn decode(value: <sqlx::Sqlite as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
        let raw = <&str as Decode<'r, sqlx::Sqlite>>::decode(value)?;

        Ok(Self::decode_from_str(raw)?)
    }
}

#[cfg(feature = "mysql")]
impl<T> Type<sqlx::MySql> for ValidatedJson<T> {
    fn type_info() -> MySqlTypeInfo {
        <Json<T> as Type<sqlx::MySql>>::type_info()
    }

    fn compatible(ty: &MySqlTypeInfo) -> bool {
        <Json<T> as Type<sqlx::MySql>>::compatible(ty)
    }
}

#[cfg(feature = "mysql")]
impl<'q, T> Encode<'q, sqlx::MySql> for ValidatedJson<T>
where
    T: Serialize,
{
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::MySql as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        <Json<&T> as Encode<'q, sqlx::MySql>>::encode_by_ref(&Json(&self.0), buf)
    }
}

#[cfg(feature = "mysql")]
impl<'r, T> Decode<'r, sqlx::MySql> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'r,
{
    fn decode(value: <sqlx::MySql as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
        let Json(record) = <Json<T> as Decode<'r, sqlx::MySql>>::decode(value)?;

        Ok(Self(validated(record)?))
    }
}

#[cfg(feature = "postgres")]
impl<T> Type<sqlx::Postgres> for ValidatedJson<T> {
    fn type_info() -> PgTypeInfo {
        <Json<T> as Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <Json<T> as Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'q, T> Encode<'q, sqlx::Postgres> for ValidatedJson<T>
where
    T: Serialize,
{
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        <Json<&T> as Encode<'q, sqlx::Postgres>>::encode_by_ref(&Json(&self.0), buf)
    }
}

#[cfg(feature = "postgres")]
impl<'r, T> Decode<'r, sqlx::Postgres> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'r,
{
    fn decode(value: <sqlx::Postgres as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
        let Json(record) = <Json<T> as Decode<'r, sqlx::Postgres>>::decode(value)?;

        Ok(Self(validated(record)?))
    }
}

/// A wrapper type for models stored as an opaque serialized string.
///
/// Same surface as [`ValidatedJson`], but the column resolves to `TEXT` on every
/// backend and the database treats the payload as a plain string. Use it when the
/// model should not be queryable as structured data, or when the backend's JSON type
/// is undesirable.
///
/// Records are validated on decode, exactly like [`ValidatedJson`].
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ValidatedText<T: ?Sized>(pub T);

impl<T> From<T> for ValidatedText<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for ValidatedText<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedText<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> AsRef<T> for ValidatedText<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> AsMut<T> for ValidatedText<T> {
    fn as_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> ValidatedText<T> {
    /// Unwraps the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> ValidatedText<T>
where
    T: Validate,
{
    /// Wraps a record after running its validation rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the record violates its validation constraints.
    pub fn new(record: T) -> Result<Self, ModelError> {
        Ok(Self(validated(record)?))
    }
}

impl<T> ValidatedText<T>
where
    T: Serialize,
{
    /// Serializes the wrapped record to its string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized.
    pub fn encode_to(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

impl<T> ValidatedText<T>
where
    T: DeserializeOwned + Validate,
{
    /// Deserializes and validates a record from its string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is malformed or the record fails validation.
    pub fn decode_from_str(raw: &str) -> Result<Self, ModelError> {
        let record = serde_json::from_str::<T>(raw)?;

        Ok(Self(validated(record)?))
    }
}

impl<T, DB> Type<DB> for ValidatedText<T>
where
    DB: Database,
    String: Type<DB>,
{
    fn type_info() -> DB::TypeInfo {
        <String as Type<DB>>::type_info()
    }

    fn compatible(ty: &DB::TypeInfo) -> bool {
        <String as Type<DB>>::compatible(ty)
    }
}

impl<'q, T, DB> Encode<'q, DB> for ValidatedText<T>
where
    DB: Database,
    T: Serialize,
    String: Encode<'q, DB>,
{
    fn encode_by_ref(
        &self,
        buf: &mut <DB as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        <String as Encode<'q, DB>>::encode(self.encode_to()?, buf)
    }
}

impl<'r, T, DB> Decode<'r, DB> for ValidatedText<T>
where
    DB: Database,
    T: DeserializeOwned + Validate,
    String: Decode<'r, DB>,
{
    fn decode(value: <DB as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
        let raw = <String as Decode<'r, DB>>::decode(value)?;

        Ok(Self::decode_from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize, Validate)]
    struct UserMeta {
        #[validate(length(min = 1))]
        a: String,
        b: i32,
        c: Option<bool>,
    }

    #[test]
    fn json_roundtrip() -> anyhow::Result<()> {
        let meta = ValidatedJson::new(UserMeta {
            a: "test".into(),
            b: 1,
            c: Some(true),
        })?;

        let raw = meta.encode_to()?;
        let decoded = ValidatedJson::<UserMeta>::decode_from_str(&raw)?;

        assert_eq!(decoded, meta);

        Ok(())
    }

    #[test]
    fn text_roundtrip() -> anyhow::Result<()> {
        let meta = ValidatedText::new(UserMeta {
            a: "test".into(),
            b: 1,
            c: None,
        })?;

        let raw = meta.encode_to()?;
        let decoded = ValidatedText::<UserMeta>::decode_from_str(&raw)?;

        assert_eq!(decoded, meta);

        Ok(())
    }

    #[test]
    fn new_rejects_invalid_record() {
        let result = ValidatedJson::new(UserMeta {
            a: "".into(),
            b: 1,
            c: None,
        });

        assert!(matches!(result, Err(ModelError::Validation(_))));
    }

    #[derive(Debug, Serialize)]
    struct BrokenMeta {
        #[serde(serialize_with = "refuse")]
        a: i32,
    }

    fn refuse<S>(_: &i32, _: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(serde::ser::Error::custom("refused"))
    }

    #[test]
    fn encode_propagates_serialization_error() {
        let meta = ValidatedJson(BrokenMeta { a: 1 });

        assert!(matches!(meta.encode_to(), Err(ModelError::SerdeJson(_))));

        let meta = ValidatedText(BrokenMeta { a: 1 });

        assert!(matches!(meta.encode_to(), Err(ModelError::SerdeJson(_))));
    }

    #[cfg(feature = "mysql")]
    #[test]
    fn json_decode_is_usable_for_mysql() {
        let _ = <ValidatedJson<UserMeta> as Decode<sqlx::MySql>>::decode;
    }

    #[cfg(feature = "postgres")]
    #[test]
    fn json_decode_is_usable_for_postgres() {
        let _ = <ValidatedJson<UserMeta> as Decode<sqlx::Postgres>>::decode;
    }

    #[test]
    fn decode_rejects_invalid_payload() {
        let result = ValidatedJson::<UserMeta>::decode_from_str(r#"{"a":"","b":1,"c":null}"#);

        assert!(matches!(result, Err(ModelError::Validation(_))));

        let result = ValidatedJson::<UserMeta>::decode_from_str("not json");

        assert!(matches!(result, Err(ModelError::SerdeJson(_))));
    }
}
