//! Scaffold Service - main application orchestrator.
//!
//! One generation run is a single forward pass:
//! 1. Refuse if the destination exists
//! 2. Load and validate the template
//! 3. Copy the tree to the destination
//! 4. Rewrite `name` in the copied `package.json`
//! 5. Run the package installer
//!
//! A failure at any step returns immediately. Nothing is rolled back: a copy
//! that fails half-way leaves the partial project on disk.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, PackageInstaller, TemplateSource},
    domain::{
        GenerationPlan, GenerationReport, GenerationRequest, MANIFEST_FILE, PackageManifest,
        Stage, TemplateTree, TreeEntry,
    },
    error::{ScaffoldError, ScaffoldResult},
};

/// Main scaffolding service.
pub struct ScaffoldService {
    source: Box<dyn TemplateSource>,
    filesystem: Box<dyn Filesystem>,
    installer: Box<dyn PackageInstaller>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        source: Box<dyn TemplateSource>,
        filesystem: Box<dyn Filesystem>,
        installer: Box<dyn PackageInstaller>,
    ) -> Self {
        Self {
            source,
            filesystem,
            installer,
        }
    }

    /// Generate a project.
    ///
    /// `on_stage` is called right before the copy, the manifest patch and the
    /// install, so the caller can report progress. It is never called when
    /// the destination already exists.
    #[instrument(
        skip_all,
        fields(
            project = %request.name,
            destination = %request.destination().display()
        )
    )]
    pub fn generate(
        &self,
        request: &GenerationRequest,
        mut on_stage: impl FnMut(&Stage),
    ) -> ScaffoldResult<GenerationReport> {
        let destination = request.destination();

        self.ensure_vacant(&destination)?;
        let tree = self.load_template(&destination)?;
        let package_name = request.name.package_name();

        on_stage(&Stage::Copying {
            destination: destination.clone(),
        });
        self.copy_tree(&tree, &destination).inspect_err(|_| {
            warn!(
                path = %destination.display(),
                "Copy failed; partially written project left on disk"
            );
        })?;
        info!(
            files = tree.file_count(),
            directories = tree.directory_count(),
            "Template copied"
        );

        on_stage(&Stage::PatchingManifest {
            package_name: package_name.clone(),
        });
        self.patch_manifest(&destination, &package_name)?;
        info!(package = %package_name, "Manifest updated");

        let install_command = if self.installer.is_skipped() {
            debug!("Dependency installation skipped");
            None
        } else {
            let command = self.installer.command_line();
            on_stage(&Stage::Installing {
                command: command.clone(),
            });
            self.installer.install(&destination)?;
            info!(command = %command, "Dependencies installed");
            Some(command)
        };

        Ok(GenerationReport {
            destination,
            files_written: tree.file_count(),
            directories_created: tree.directory_count(),
            package_name,
            install_command,
            dev_command: self.installer.dev_command(),
        })
    }

    /// Work out what [`Self::generate`] would do, without writing anything.
    #[instrument(skip_all, fields(project = %request.name))]
    pub fn plan(&self, request: &GenerationRequest) -> ScaffoldResult<GenerationPlan> {
        let destination = request.destination();

        self.ensure_vacant(&destination)?;
        let tree = self.load_template(&destination)?;

        Ok(GenerationPlan {
            destination,
            template: self.source.describe(),
            files: tree.file_count(),
            directories: tree.directory_count(),
            package_name: request.name.package_name(),
            install_command: (!self.installer.is_skipped())
                .then(|| self.installer.command_line()),
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn ensure_vacant(&self, destination: &Path) -> ScaffoldResult<()> {
        if self.filesystem.exists(destination) {
            return Err(ScaffoldError::Conflict {
                path: destination.to_path_buf(),
            });
        }
        Ok(())
    }

    /// Load the template and check it before a single byte is written.
    fn load_template(&self, destination: &Path) -> ScaffoldResult<TemplateTree> {
        let tree = self.source.load()?;
        debug!(
            template = %self.source.describe(),
            entries = tree.entries.len(),
            "Template loaded"
        );

        tree.validate()
            .map_err(|e| ScaffoldError::copy(destination, e.to_string()))?;

        if !tree.has_file(MANIFEST_FILE) {
            return Err(ScaffoldError::manifest(
                destination.join(MANIFEST_FILE),
                format!("template has no {MANIFEST_FILE}"),
            ));
        }

        Ok(tree)
    }

    fn copy_tree(&self, tree: &TemplateTree, destination: &Path) -> ScaffoldResult<()> {
        self.create_dir(destination)?;

        for entry in &tree.entries {
            match entry {
                TreeEntry::Directory(dir) => {
                    self.create_dir(&destination.join(dir))?;
                }
                TreeEntry::File(file) => {
                    let path = destination.join(&file.path);

                    if let Some(parent) = path.parent() {
                        self.create_dir(parent)?;
                    }

                    self.filesystem
                        .write_file(&path, &file.contents)
                        .map_err(|e| ScaffoldError::copy(&path, e.to_string()))?;

                    if file.executable {
                        self.filesystem
                            .set_executable(&path)
                            .map_err(|e| ScaffoldError::copy(&path, e.to_string()))?;
                    }
                }
            }
        }

        Ok(())
    }

    fn create_dir(&self, path: &Path) -> ScaffoldResult<()> {
        self.filesystem
            .create_dir_all(path)
            .map_err(|e| ScaffoldError::copy(path, e.to_string()))
    }

    fn patch_manifest(&self, destination: &Path, package_name: &str) -> ScaffoldResult<()> {
        let path: PathBuf = destination.join(MANIFEST_FILE);
        let fail = |reason: String| ScaffoldError::manifest(&path, reason);

        let contents = self
            .filesystem
            .read_to_string(&path)
            .map_err(|e| fail(e.to_string()))?;

        let mut manifest = PackageManifest::parse(&contents)
            .map_err(|e| fail(e.to_string()))?;
        manifest.set_name(package_name);
        let patched = manifest.to_pretty_string().map_err(|e| fail(e.to_string()))?;

        self.filesystem
            .write_file(&path, patched.as_bytes())
            .map_err(|e| fail(e.to_string()))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ports::{MockFilesystem, MockPackageInstaller, MockTemplateSource};
    use crate::domain::{ProjectName, TemplateFile};

    const MANIFEST: &str = "{\n  \"name\": \"backend-template\",\n  \"version\": \"1.0.0\"\n}\n";

    type Written = Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>;

    fn tree() -> TemplateTree {
        TemplateTree::new()
            .with_entry(TreeEntry::File(TemplateFile::new(MANIFEST_FILE, MANIFEST)))
            .with_entry(TreeEntry::Directory("src".into()))
            .with_entry(TreeEntry::File(TemplateFile::new(
                "src/index.js",
                "console.log('hi');\n",
            )))
            .with_entry(TreeEntry::Directory("logs".into()))
    }

    fn source_with(tree: TemplateTree) -> MockTemplateSource {
        let mut source = MockTemplateSource::new();
        source.expect_load().returning(move || Ok(tree.clone()));
        source
            .expect_describe()
            .returning(|| "memory template".to_string());
        source
    }

    /// A filesystem mock backed by a map, so reads see earlier writes.
    fn recording_fs(exists: bool, written: Written) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(exists);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_set_executable().returning(|_| Ok(()));

        let sink = Arc::clone(&written);
        fs.expect_write_file().returning(move |path, contents| {
            sink.lock()
                .unwrap()
                .insert(path.to_path_buf(), contents.to_vec());
            Ok(())
        });

        let source = written;
        fs.expect_read_to_string().returning(move |path| {
            source
                .lock()
                .unwrap()
                .get(path)
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "missing"))
        });
        fs
    }

    fn installer_ok(calls: Arc<Mutex<Vec<PathBuf>>>) -> MockPackageInstaller {
        let mut installer = MockPackageInstaller::new();
        installer.expect_is_skipped().return_const(false);
        installer
            .expect_command_line()
            .returning(|| "npm install".to_string());
        installer
            .expect_dev_command()
            .returning(|| "npm run dev".to_string());
        installer.expect_install().returning(move |dir| {
            calls.lock().unwrap().push(dir.to_path_buf());
            Ok(())
        });
        installer
    }

    fn request(name: &str) -> GenerationRequest {
        GenerationRequest::new(ProjectName::parse(name).unwrap(), "/work")
    }

    #[test]
    fn generates_copies_patches_and_installs() {
        let written = Written::default();
        let calls = Arc::new(Mutex::new(Vec::new()));
        let service = ScaffoldService::new(
            Box::new(source_with(tree())),
            Box::new(recording_fs(false, Arc::clone(&written))),
            Box::new(installer_ok(Arc::clone(&calls))),
        );

        let mut stages = Vec::new();
        let report = service
            .generate(&request("MyApi"), |s| stages.push(s.clone()))
            .unwrap();

        assert_eq!(report.destination, PathBuf::from("/work/MyApi"));
        assert_eq!(report.package_name, "myapi");
        assert_eq!(report.files_written, 2);
        assert_eq!(report.directories_created, 2);
        assert_eq!(report.install_command.as_deref(), Some("npm install"));
        assert_eq!(report.dev_command, "npm run dev");

        let files = written.lock().unwrap();
        let manifest = String::from_utf8(files[&PathBuf::from("/work/MyApi/package.json")].clone())
            .unwrap();
        assert_eq!(manifest, MANIFEST.replace("backend-template", "myapi"));
        assert_eq!(
            files[&PathBuf::from("/work/MyApi/src/index.js")],
            b"console.log('hi');\n"
        );

        assert_eq!(*calls.lock().unwrap(), vec![PathBuf::from("/work/MyApi")]);
        assert!(matches!(stages[0], Stage::Copying { .. }));
        assert!(matches!(stages[1], Stage::PatchingManifest { .. }));
        assert!(matches!(stages[2], Stage::Installing { .. }));
    }

    #[test]
    fn existing_destination_is_a_conflict_and_touches_nothing() {
        let mut source = MockTemplateSource::new();
        source.expect_load().never();

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let mut installer = MockPackageInstaller::new();
        installer.expect_install().never();

        let service = ScaffoldService::new(Box::new(source), Box::new(fs), Box::new(installer));

        let mut stages = 0;
        let err = service
            .generate(&request("MyApi"), |_| stages += 1)
            .unwrap_err();

        assert_eq!(
            err,
            ScaffoldError::Conflict {
                path: PathBuf::from("/work/MyApi")
            }
        );
        assert_eq!(stages, 0);
    }

    #[test]
    fn write_failure_is_a_copy_error_without_rollback() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .returning(|_, _| Err(io::Error::new(io::ErrorKind::StorageFull, "disk full")));

        let mut installer = MockPackageInstaller::new();
        installer.expect_install().never();

        let service = ScaffoldService::new(
            Box::new(source_with(tree())),
            Box::new(fs),
            Box::new(installer),
        );

        let err = service.generate(&request("api"), |_| {}).unwrap_err();
        match err {
            ScaffoldError::Copy { reason, .. } => assert!(reason.contains("disk full")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn template_without_manifest_fails_before_writing() {
        let bare = TemplateTree::new().with_entry(TreeEntry::File(TemplateFile::new("a.txt", "")));

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service = ScaffoldService::new(
            Box::new(source_with(bare)),
            Box::new(fs),
            Box::new(MockPackageInstaller::new()),
        );

        assert!(matches!(
            service.generate(&request("api"), |_| {}),
            Err(ScaffoldError::ManifestPatch { .. })
        ));
    }

    #[test]
    fn malformed_manifest_is_a_manifest_error() {
        let broken = TemplateTree::new()
            .with_entry(TreeEntry::File(TemplateFile::new(MANIFEST_FILE, "[]")));

        let mut installer = MockPackageInstaller::new();
        installer.expect_install().never();

        let service = ScaffoldService::new(
            Box::new(source_with(broken)),
            Box::new(recording_fs(false, Written::default())),
            Box::new(installer),
        );

        match service.generate(&request("api"), |_| {}).unwrap_err() {
            ScaffoldError::ManifestPatch { path, reason } => {
                assert_eq!(path, PathBuf::from("/work/api/package.json"));
                assert!(reason.contains("object"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn installer_failure_propagates() {
        let mut installer = MockPackageInstaller::new();
        installer.expect_is_skipped().return_const(false);
        installer
            .expect_command_line()
            .returning(|| "npm install".to_string());
        installer.expect_install().returning(|_| {
            Err(ScaffoldError::Install {
                command: "npm install".into(),
                reason: "exited with status 1".into(),
                status: Some(1),
            })
        });

        let service = ScaffoldService::new(
            Box::new(source_with(tree())),
            Box::new(recording_fs(false, Written::default())),
            Box::new(installer),
        );

        assert!(matches!(
            service.generate(&request("api"), |_| {}),
            Err(ScaffoldError::Install {
                status: Some(1),
                ..
            })
        ));
    }

    #[test]
    fn skipped_installer_emits_no_install_stage() {
        let mut installer = MockPackageInstaller::new();
        installer.expect_is_skipped().return_const(true);
        installer.expect_install().never();
        installer
            .expect_dev_command()
            .returning(|| "npm run dev".to_string());

        let service = ScaffoldService::new(
            Box::new(source_with(tree())),
            Box::new(recording_fs(false, Written::default())),
            Box::new(installer),
        );

        let mut stages = Vec::new();
        let report = service
            .generate(&request("api"), |s| stages.push(s.clone()))
            .unwrap();

        assert_eq!(report.install_command, None);
        assert!(!stages.iter().any(|s| matches!(s, Stage::Installing { .. })));
    }

    #[test]
    fn plan_writes_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let mut installer = MockPackageInstaller::new();
        installer.expect_is_skipped().return_const(false);
        installer
            .expect_command_line()
            .returning(|| "npm install".to_string());
        installer.expect_install().never();

        let service = ScaffoldService::new(
            Box::new(source_with(tree())),
            Box::new(fs),
            Box::new(installer),
        );

        let plan = service.plan(&request("MyApi")).unwrap();
        assert_eq!(plan.files, 2);
        assert_eq!(plan.package_name, "myapi");
        assert_eq!(plan.template, "memory template");
        assert_eq!(plan.install_command.as_deref(), Some("npm install"));
    }

    #[test]
    fn plan_reports_conflict() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);

        let service = ScaffoldService::new(
            Box::new(MockTemplateSource::new()),
            Box::new(fs),
            Box::new(MockPackageInstaller::new()),
        );

        assert!(matches!(
            service.plan(&request("MyApi")),
            Err(ScaffoldError::Conflict { .. })
        ));
    }
}
