use filldcm_types::TypeTag;

#[derive(Debug, thiserror::Error)]
pub enum FillError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("tag {0} is not a valid tag from the DICOM dictionary")]
    UnknownField(String),
    #[error("VR {type_tag} for tag {field} is not managed")]
    UnsupportedType { field: String, type_tag: TypeTag },
    #[error("tag {field} declares VR {code}, which is not a DICOM VR")]
    UnrecognizedType { field: String, code: String },
    #[error(
        "failed to load record (path: {path}): {source}",
        path = path.display()
    )]
    RecordLoad {
        path: std::path::PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error(
        "failed to save record (path: {path}): {source}",
        path = path.display()
    )]
    RecordPersist {
        path: std::path::PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("failed to access record element: {0}")]
    RecordAccess(String),
}

impl FillError {
    /// Whether the batch driver skips the current file and carries on, rather than aborting.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            Self::RecordLoad { .. } | Self::RecordPersist { .. } | Self::RecordAccess(_)
        )
    }
}

pub type FillResult<T> = std::result::Result<T, FillError>;
