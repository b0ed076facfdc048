/// Broad classification of a [`FolderError`]. Callers should match on this
/// rather than on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    InvalidOperation,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::InvalidOperation => "InvalidOperation",
        }
    }
}

/// Failures reported by folder queries and moves. The display text is relied
/// on by existing consumers and must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FolderError {
    #[error("invalid orgID: orgID cannot be nil")]
    NilOrgId,

    #[error("invalid name: folder name cannot be empty")]
    EmptyName,

    #[error("folder '{0}' does not exist in the specified organization")]
    FolderNotFound(String),

    #[error("source folder '{0}' does not exist")]
    SourceNotFound(String),

    #[error("destination folder '{0}' does not exist")]
    DestinationNotFound(String),

    #[error("cannot move a folder to itself")]
    MoveToSelf,

    #[error("cannot move a folder to a different organization")]
    CrossOrganization,

    #[error("cannot move a folder to a child of itself")]
    MoveIntoDescendant,
}

impl FolderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FolderError::NilOrgId | FolderError::EmptyName => ErrorKind::InvalidArgument,
            FolderError::FolderNotFound(_)
            | FolderError::SourceNotFound(_)
            | FolderError::DestinationNotFound(_) => ErrorKind::NotFound,
            FolderError::MoveToSelf
            | FolderError::CrossOrganization
            | FolderError::MoveIntoDescendant => ErrorKind::InvalidOperation,
        }
    }
}

pub type Result<T> = std::result::Result<T, FolderError>;
