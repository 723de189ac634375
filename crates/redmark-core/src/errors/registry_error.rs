/// Registry configuration errors. Raised during startup registration.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("document type `{id}` is already registered")]
    DuplicateDocumentType { id: String },
}
