//! Native packaging engine seam.
//!
//! The engine turns structured requests into files on disk. [`JavaPackager`]
//! drives the JDK tool; tests substitute their own [`NativeEngine`].

mod javapackager;
mod request;
mod tool_detection;

pub use javapackager::{JavaPackager, createjar_args, deploy_args};
pub use request::{DeploymentRequest, PackagingRequest, Resource};
pub use tool_detection::find_packager;

use crate::bundler::error::Result;
use std::{future::Future, path::PathBuf};

/// Produces executable jars and native bundles.
///
/// Calls are synchronous from the caller's point of view: each future resolves
/// only once the engine has finished writing its outputs.
pub trait NativeEngine {
    /// Writes an executable jar and returns its path.
    fn package_executable(
        &self,
        request: &PackagingRequest,
    ) -> impl Future<Output = Result<PathBuf>> + Send;

    /// Writes web deployment files into `request.output_dir` and native
    /// bundles into its `bundles` subdirectory.
    fn generate_native_bundles(
        &self,
        request: &DeploymentRequest,
    ) -> impl Future<Output = Result<()>> + Send;
}
