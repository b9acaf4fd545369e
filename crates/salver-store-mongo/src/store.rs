//! [`MongoStore`] — the MongoDB implementation of [`ContactStore`].

use futures_util::TryStreamExt as _;
use mongodb::{
  Client, Collection,
  bson::{doc, oid::ObjectId},
  options::ClientOptions,
};
use salver_core::{
  contact::{Contact, NewContact},
  store::ContactStore,
};

use crate::{
  Error, Result,
  document::{COLLECTION, ContactDocument},
};

/// Database used when the connection string names none.
const DEFAULT_DATABASE: &str = "portfolio";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contact store backed by a MongoDB collection.
///
/// Cloning is cheap — clones share the driver's client and its connection
/// pool.
#[derive(Clone)]
pub struct MongoStore {
  client:   Client,
  contacts: Collection<ContactDocument>,
}

impl MongoStore {
  /// Connect to the deployment at `uri` and verify it responds to a ping.
  ///
  /// The database comes from the connection string's path, falling back to
  /// `portfolio` when the path is empty.
  pub async fn connect(uri: &str) -> Result<Self> {
    let options = ClientOptions::parse(uri).await?;
    let client = Client::with_options(options)?;

    let database = client
      .default_database()
      .unwrap_or_else(|| client.database(DEFAULT_DATABASE));
    database.run_command(doc! { "ping": 1 }).await?;

    let contacts = database.collection::<ContactDocument>(COLLECTION);
    Ok(Self { client, contacts })
  }

  /// Name of the database holding the contacts collection.
  pub fn database_name(&self) -> String { self.contacts.namespace().db }

  /// Shut down the driver, closing every pooled connection.
  pub async fn close(self) { self.client.shutdown().await; }
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for MongoStore {
  type Error = Error;

  async fn insert_contact(&self, input: NewContact) -> Result<Contact> {
    let document = ContactDocument::new(input);
    self.contacts.insert_one(&document).await?;
    Ok(document.into_contact())
  }

  async fn list_contacts(&self) -> Result<Vec<Contact>> {
    let documents: Vec<ContactDocument> = self
      .contacts
      .find(doc! {})
      .sort(doc! { "createdAt": -1 })
      .await?
      .try_collect()
      .await?;

    Ok(
      documents
        .into_iter()
        .map(ContactDocument::into_contact)
        .collect(),
    )
  }

  async fn get_contact(&self, id: &str) -> Result<Option<Contact>> {
    let object_id = ObjectId::parse_str(id)?;
    let document = self.contacts.find_one(doc! { "_id": object_id }).await?;
    Ok(document.map(ContactDocument::into_contact))
  }
}
