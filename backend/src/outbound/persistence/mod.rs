//! Record store adapters.

mod dynamodb_user_store;

pub use dynamodb_user_store::DynamoDbUserRecordStore;
