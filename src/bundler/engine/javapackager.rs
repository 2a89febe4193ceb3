//! Native engine backed by the JDK packaging tool.

use super::{DeploymentRequest, NativeEngine, PackagingRequest, Resource, tool_detection};
use crate::{
    bail,
    bundler::{
        error::{Error, ErrorExt, Result},
        utils::fs,
    },
};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::Stdio,
    time::Duration,
};

/// Drives `javapackager` / `javafxpackager`.
///
/// Calls block until the tool exits. With no timeout configured a hung tool
/// hangs the caller; [`JavaPackager::with_timeout`] bounds each call and kills
/// the tool when it elapses.
#[derive(Debug, Clone)]
pub struct JavaPackager {
    tool: PathBuf,
    timeout: Option<Duration>,
    quiet: bool,
}

impl JavaPackager {
    /// Uses the tool at `tool`.
    pub fn new(tool: impl Into<PathBuf>) -> Self {
        Self {
            tool: tool.into(),
            timeout: None,
            quiet: false,
        }
    }

    /// Locates the tool under `java_home` or on `PATH`.
    pub fn locate(java_home: Option<&Path>) -> Result<Self> {
        tool_detection::find_packager(java_home).map(Self::new)
    }

    /// Bounds every tool invocation.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Discards the tool's standard output. Its stderr still reaches the user.
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Tool path.
    pub fn tool(&self) -> &Path {
        &self.tool
    }

    async fn run(&self, command: &str, args: Vec<OsString>) -> Result<()> {
        let display = format!("{} {}", self.tool.display(), command);
        log::debug!("Running {} with {} argument(s)", display, args.len());

        let mut cmd = tokio::process::Command::new(&self.tool);
        cmd.args(&args).kill_on_drop(true);
        if self.quiet {
            cmd.stdout(Stdio::null());
        }

        let mut child = cmd
            .spawn()
            .map_err(|error| Error::CommandFailed {
                command: display.clone(),
                error,
            })?;

        let status = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(status) => status,
                Err(_) => {
                    return Err(Error::CommandTimeout {
                        command: display,
                        seconds: limit.as_secs(),
                    });
                }
            },
            None => child.wait().await,
        }
        .map_err(|error| Error::CommandFailed {
            command: display.clone(),
            error,
        })?;

        if !status.success() {
            bail!("{} failed with exit code: {:?}", display, status.code());
        }

        Ok(())
    }
}

impl NativeEngine for JavaPackager {
    async fn package_executable(&self, request: &PackagingRequest) -> Result<PathBuf> {
        fs::create_dir_all(&request.output_dir, false).await?;
        self.run("-createjar", createjar_args(request)).await?;

        let output = request.output_path();
        tokio::fs::metadata(&output)
            .await
            .fs_context("checking packaged jar", &output)?;
        Ok(output)
    }

    async fn generate_native_bundles(&self, request: &DeploymentRequest) -> Result<()> {
        fs::create_dir_all(&request.output_dir, false).await?;
        self.run("-deploy", deploy_args(request)).await
    }
}

fn push(args: &mut Vec<OsString>, flag: &str, value: impl Into<OsString>) {
    args.push(flag.into());
    args.push(value.into());
}

fn push_resources(args: &mut Vec<OsString>, resources: &[Resource]) {
    for resource in resources {
        push(args, "-srcdir", resource.base_dir.as_os_str());
        if !resource.include.is_empty() {
            push(args, "-srcfiles", resource.include.as_str());
        }
    }
}

/// Command line for `-createjar`.
pub fn createjar_args(request: &PackagingRequest) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-createjar".into()];
    if request.verbose {
        args.push("-v".into());
    }
    push(&mut args, "-appclass", request.main_class.as_str());
    if let Some(preloader) = &request.preloader_class {
        push(&mut args, "-preloader", preloader.as_str());
    }
    push(&mut args, "-outdir", request.output_dir.as_os_str());
    push(&mut args, "-outfile", request.output_file.as_str());
    push_resources(&mut args, &request.resources);
    args
}

/// Command line for `-deploy`.
///
/// Unset optional fields produce no argument at all, leaving the engine's own
/// defaults in effect.
pub fn deploy_args(request: &DeploymentRequest) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-deploy".into()];
    if request.verbose {
        args.push("-v".into());
    }
    push(&mut args, "-appclass", request.main_class.as_str());
    if let Some(preloader) = &request.preloader_class {
        push(&mut args, "-preloader", preloader.as_str());
    }
    push(&mut args, "-name", request.name.as_str());
    push(&mut args, "-title", request.title.as_str());
    if let Some(description) = &request.description {
        push(&mut args, "-description", description.as_str());
    }
    if let Some(vendor) = &request.vendor {
        push(&mut args, "-vendor", vendor.as_str());
    }
    if let Some(width) = request.width {
        push(&mut args, "-width", width.to_string());
    }
    if let Some(height) = request.height {
        push(&mut args, "-height", height.to_string());
    }
    if request.all_permissions {
        args.push("-allpermissions".into());
    }
    if let Some(native) = request.bundle_type.native_arg() {
        push(&mut args, "-native", native);
    }
    push(&mut args, "-outdir", request.output_dir.as_os_str());
    push(&mut args, "-outfile", request.output_file.as_str());

    args.push(format!("-BappVersion={}", request.version).into());
    args.push(format!("-Bidentifier={}", request.id).into());
    if let Some(category) = &request.category {
        args.push(format!("-Bcategory={category}").into());
    }
    if let Some(copyright) = &request.copyright {
        args.push(format!("-Bcopyright={copyright}").into());
    }
    for icon in &request.icons {
        let mut arg = OsString::from("-Bicon=");
        arg.push(icon.as_os_str());
        args.push(arg);
    }
    for jvm_arg in &request.jvm_args {
        args.push(format!("-BjvmOptions={jvm_arg}").into());
    }
    for (key, value) in &request.jvm_props {
        args.push(format!("-BjvmProperties={key}={value}").into());
    }

    push_resources(&mut args, &request.resources);
    args
}
