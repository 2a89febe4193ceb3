//! Filesystem and archive helpers shared by the packaging phases.

pub mod archive;
pub mod fs;
