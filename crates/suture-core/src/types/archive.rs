//! Archive rail records.

use serde::{Deserialize, Serialize};

/// Fixed technical spec block shown when an archive card unfolds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveSpecs {
    pub weight: String,
    pub origin: String,
    pub composition: String,
}

/// A historical piece shown on the horizontal archive rail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveItem {
    pub id: String,
    pub year: String,
    /// Short unique code such as `SYS-01`
    pub code: String,
    pub name: String,
    pub image: String,
    pub specs: ArchiveSpecs,
}
