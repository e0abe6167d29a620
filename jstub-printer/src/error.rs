use jstub_model::DescriptorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed descriptor {desc:?} on {owner}.{name}: {source}")]
    Descriptor {
        owner: String,
        name: String,
        desc: String,
        #[source]
        source: DescriptorError,
    },
}

impl Error {
    pub(crate) fn descriptor(owner: &str, name: &str, desc: &str, source: DescriptorError) -> Self {
        Self::Descriptor {
            owner: owner.to_string(),
            name: name.to_string(),
            desc: desc.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
