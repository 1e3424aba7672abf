mod schema;
mod settings;
mod storage;

pub use schema::SchemaManager;
pub use settings::{Clock, Cors, Database, Logger, Server, Settings, Sunset};
pub use storage::Storage;
