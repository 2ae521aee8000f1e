//! Shared domain primitives

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A UUID persisted as its canonical string form (CHAR(36) columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringUuid(pub Uuid);

impl StringUuid {
    pub fn new_v4() -> Self {
        StringUuid(Uuid::new_v4())
    }

    pub fn nil() -> Self {
        StringUuid(Uuid::nil())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for StringUuid {
    fn from(uuid: Uuid) -> Self {
        StringUuid(uuid)
    }
}

impl From<StringUuid> for Uuid {
    fn from(s: StringUuid) -> Self {
        s.0
    }
}

impl std::ops::Deref for StringUuid {
    type Target = Uuid;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for StringUuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for StringUuid {
    type Err = uuid::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(StringUuid(Uuid::parse_str(s)?))
    }
}

impl sqlx::Type<sqlx::MySql> for StringUuid {
    fn type_info() -> sqlx::mysql::MySqlTypeInfo {
        <String as sqlx::Type<sqlx::MySql>>::type_info()
    }

    fn compatible(ty: &sqlx::mysql::MySqlTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::MySql>>::compatible(ty)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::MySql> for StringUuid {
    fn decode(value: sqlx::mysql::MySqlValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::MySql>>::decode(value)?;
        let uuid = Uuid::parse_str(&s)?;
        Ok(StringUuid(uuid))
    }
}

impl<'q> sqlx::Encode<'q, sqlx::MySql> for StringUuid {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<u8>,
    ) -> Result<sqlx::encode::IsNull, Box<dyn std::error::Error + Send + Sync>> {
        <String as sqlx::Encode<sqlx::MySql>>::encode_by_ref(&self.0.to_string(), buf)
    }
}
