use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq)]
pub struct ObjectReference {
    pub id: String,
    pub location: PathBuf,
}

pub trait DownloadTarget: Send + Sync {
    fn create_object_reference(&self, bytes: &[u8]) -> Result<ObjectReference>;

    fn deliver(&self, reference: &ObjectReference, file_name: &str) -> Result<PathBuf>;

    fn release(&self, reference: ObjectReference);
}
