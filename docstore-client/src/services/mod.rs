mod store;

pub use store::{CreatedDocument, DocumentStoreClient};
