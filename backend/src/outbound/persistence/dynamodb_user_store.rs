//! DynamoDB-backed `UserRecordStore` adapter.
//!
//! Each user is one `PutItem` with a string attribute per present field. No
//! condition expression is sent, so the table's key schema alone decides
//! whether a duplicate overwrites or coexists.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::debug;

use crate::domain::StoredUser;
use crate::domain::ports::{StoreWriteError, UserRecordStore};

/// Writes user records into one named table.
#[derive(Clone)]
pub struct DynamoDbUserRecordStore {
    client: Client,
    table_name: String,
}

impl DynamoDbUserRecordStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        self.table_name.as_str()
    }
}

/// Attribute map written for `user`, keyed by the JSON field names.
fn to_item(user: &StoredUser) -> HashMap<String, AttributeValue> {
    let profile = user.profile();
    let fields = [
        ("firstName", profile.first_name.as_ref()),
        ("lastName", profile.last_name.as_ref()),
        ("email", profile.email.as_ref()),
        ("username", profile.username.as_ref()),
    ];

    let mut item: HashMap<String, AttributeValue> = fields
        .into_iter()
        .filter_map(|(name, value)| {
            value.map(|text| (name.to_owned(), AttributeValue::S(text.clone())))
        })
        .collect();
    item.insert(
        "password".to_owned(),
        AttributeValue::S(user.password_hash().as_str().to_owned()),
    );
    item
}

fn map_put_error<E, R>(err: &SdkError<E, R>) -> StoreWriteError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let message = DisplayErrorContext(err).to_string();
    match err {
        SdkError::ServiceError(_) => StoreWriteError::rejected(message),
        _ => StoreWriteError::unavailable(message),
    }
}

#[async_trait]
impl UserRecordStore for DynamoDbUserRecordStore {
    async fn put(&self, user: &StoredUser) -> Result<(), StoreWriteError> {
        debug!(table = %self.table_name, "putting user item");
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(user)))
            .send()
            .await
            .map_err(|err| map_put_error(&err))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PasswordHash, UserProfile};
    use rstest::rstest;

    fn string_attr<'a>(item: &'a HashMap<String, AttributeValue>, key: &str) -> Option<&'a str> {
        item.get(key)
            .and_then(|value| value.as_s().ok())
            .map(String::as_str)
    }

    #[rstest]
    fn item_carries_every_present_field() {
        let user = StoredUser::new(
            UserProfile {
                first_name: Some("A".into()),
                last_name: Some("B".into()),
                email: Some("a@b.com".into()),
                username: Some("ab1".into()),
            },
            PasswordHash::new("$2b$10$hash"),
        );
        let item = to_item(&user);
        assert_eq!(item.len(), 5);
        assert_eq!(string_attr(&item, "firstName"), Some("A"));
        assert_eq!(string_attr(&item, "username"), Some("ab1"));
        assert_eq!(string_attr(&item, "password"), Some("$2b$10$hash"));
    }

    #[rstest]
    fn absent_fields_are_not_written() {
        let user = StoredUser::new(
            UserProfile {
                email: Some("a@b.com".into()),
                ..UserProfile::default()
            },
            PasswordHash::new("h"),
        );
        let item = to_item(&user);
        assert_eq!(item.len(), 2);
        assert!(!item.contains_key("firstName"));
        assert!(!item.contains_key("username"));
    }
}
