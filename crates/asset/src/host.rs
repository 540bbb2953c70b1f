//! Boundary to the editor that owns the content database.
//!
//! The editor is an external collaborator: it imports source images, resolves
//! logical asset paths, reports the current content-browser selection and
//! accepts texture property changes. Only the batch logic around it lives
//! here; one item failing never stops the rest of the batch.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureCompression {
    EditorIcon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MipGeneration {
    NoMipmaps,
}

/// Presentation metadata applied to textures shown in the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiTextureSettings {
    pub compression: TextureCompression,
    pub srgb: bool,
    pub mip_gen: MipGeneration,
}

impl UiTextureSettings {
    /// Icon compression, sRGB on, no mip chain.
    pub const fn ui_preset() -> Self {
        Self {
            compression: TextureCompression::EditorIcon,
            srgb: true,
            mip_gen: MipGeneration::NoMipmaps,
        }
    }
}

impl Default for UiTextureSettings {
    fn default() -> Self {
        Self::ui_preset()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Texture2D,
    Other(String),
}

/// Handle to an asset living in the host's registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetHandle {
    /// Logical package path, e.g. `/InteractionSystem/Textures/T_InteractionDot`.
    pub path: String,
    pub name: String,
    pub kind: AssetKind,
}

impl AssetHandle {
    #[inline]
    pub fn is_texture_2d(&self) -> bool {
        self.kind == AssetKind::Texture2D
    }
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Import of {} failed: {reason}", file.display())]
    Import { file: PathBuf, reason: String },
    #[error("No usable asset name in {}", file.display())]
    InvalidName { file: PathBuf },
    #[error("Failed to import: {} (nothing registered after import)", file.display())]
    NotFound { file: PathBuf },
    #[error("Imported but not a Texture2D: {asset}")]
    NotTexture { asset: String },
    #[error("Setting properties on {asset} failed: {reason}")]
    Property { asset: String, reason: String },
    #[error("Saving {asset} failed: {reason}")]
    Save { asset: String, reason: String },
}

/// Capabilities the editor exposes to these tools.
pub trait AssetHost {
    /// Run an automated, replace-existing, save-on-completion import of
    /// `file` into `destination` under `name`.
    fn import(&mut self, file: &Path, destination: &str, name: &str) -> Result<(), HostError>;

    /// Resolve a logical asset path. `None` when nothing is registered there.
    fn load(&self, asset_path: &str) -> Option<AssetHandle>;

    /// Assets currently selected in the content browser.
    fn selected(&self) -> Vec<AssetHandle>;

    fn set_ui_presentation(
        &mut self,
        asset: &AssetHandle,
        settings: &UiTextureSettings,
    ) -> Result<(), HostError>;

    fn save(&mut self, asset: &AssetHandle) -> Result<(), HostError>;
}

/// Per-item outcome counts of a batch run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed + self.skipped
    }

    fn log_summary(&self, what: &str) {
        log::info!(
            "{what} completed: {} succeeded, {} failed, {} skipped",
            self.succeeded,
            self.failed,
            self.skipped
        );
    }
}

fn apply_ui_settings(host: &mut dyn AssetHost, asset: &AssetHandle) -> Result<(), HostError> {
    host.set_ui_presentation(asset, &UiTextureSettings::ui_preset())?;
    host.save(asset)
}

/// Import each file into `destination` and apply the UI preset to it.
pub fn import_textures_for_ui<P: AsRef<Path>>(
    host: &mut dyn AssetHost,
    files: &[P],
    destination: &str,
) -> BatchReport {
    let mut report = BatchReport::default();
    for file in files {
        let file = file.as_ref();
        log::info!("Importing: {}", file.display());
        match import_one(host, file, destination) {
            Ok(asset_path) => {
                log::info!("Imported with UI settings: {asset_path}");
                report.succeeded += 1;
            }
            Err(e) => {
                log::error!("{e}");
                report.failed += 1;
            }
        }
    }
    report.log_summary("Import");
    report
}

fn import_one(
    host: &mut dyn AssetHost,
    file: &Path,
    destination: &str,
) -> Result<String, HostError> {
    let name = file
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| HostError::InvalidName {
            file: file.to_path_buf(),
        })?;
    let destination = destination.trim_end_matches('/');
    let asset_path = format!("{destination}/{name}");

    host.import(file, destination, name)?;

    let asset = host.load(&asset_path).ok_or_else(|| HostError::NotFound {
        file: file.to_path_buf(),
    })?;
    if !asset.is_texture_2d() {
        return Err(HostError::NotTexture { asset: asset_path });
    }

    apply_ui_settings(host, &asset)?;
    Ok(asset_path)
}

/// Apply the UI preset to every selected 2D texture; other kinds are skipped.
pub fn apply_ui_settings_to_selected(host: &mut dyn AssetHost) -> BatchReport {
    let selected = host.selected();
    let mut report = BatchReport::default();
    if selected.is_empty() {
        log::warn!("No assets selected. Select textures in the content browser.");
        return report;
    }

    for asset in &selected {
        if !asset.is_texture_2d() {
            log::warn!("Skipping non-texture asset: {}", asset.name);
            report.skipped += 1;
            continue;
        }
        match apply_ui_settings(host, asset) {
            Ok(()) => {
                log::info!("Applied UI settings to: {}", asset.name);
                report.succeeded += 1;
            }
            Err(e) => {
                log::error!("{e}");
                report.failed += 1;
            }
        }
    }
    report.log_summary("UI settings");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// In-memory registry. Import outcome depends on the file name:
    /// `*.png` registers a texture, `*.wav` a sound, `missing*` registers
    /// nothing, `broken*` errors.
    #[derive(Default)]
    struct MemoryHost {
        assets: BTreeMap<String, (AssetKind, Option<UiTextureSettings>)>,
        selection: Vec<String>,
        saved: Vec<String>,
        read_only: Vec<String>,
    }

    impl MemoryHost {
        fn insert(&mut self, path: &str, kind: AssetKind) {
            self.assets.insert(path.to_string(), (kind, None));
        }

        fn settings(&self, path: &str) -> Option<UiTextureSettings> {
            self.assets.get(path).and_then(|(_, s)| *s)
        }
    }

    impl AssetHost for MemoryHost {
        fn import(&mut self, file: &Path, destination: &str, name: &str) -> Result<(), HostError> {
            let file_name = file.file_name().and_then(|s| s.to_str()).unwrap_or("");
            if file_name.starts_with("broken") {
                return Err(HostError::Import {
                    file: file.to_path_buf(),
                    reason: "unreadable".into(),
                });
            }
            if file_name.starts_with("missing") {
                return Ok(());
            }
            let kind = match file.extension().and_then(|e| e.to_str()) {
                Some("png") => AssetKind::Texture2D,
                _ => AssetKind::Other("SoundWave".into()),
            };
            self.insert(&format!("{destination}/{name}"), kind);
            Ok(())
        }

        fn load(&self, asset_path: &str) -> Option<AssetHandle> {
            let (kind, _) = self.assets.get(asset_path)?;
            let name = asset_path.rsplit('/').next().unwrap_or(asset_path);
            Some(AssetHandle {
                path: asset_path.to_string(),
                name: name.to_string(),
                kind: kind.clone(),
            })
        }

        fn selected(&self) -> Vec<AssetHandle> {
            self.selection.iter().filter_map(|p| self.load(p)).collect()
        }

        fn set_ui_presentation(
            &mut self,
            asset: &AssetHandle,
            settings: &UiTextureSettings,
        ) -> Result<(), HostError> {
            let entry = self.assets.get_mut(&asset.path).ok_or_else(|| HostError::Property {
                asset: asset.path.clone(),
                reason: "gone".into(),
            })?;
            entry.1 = Some(*settings);
            Ok(())
        }

        fn save(&mut self, asset: &AssetHandle) -> Result<(), HostError> {
            if self.read_only.contains(&asset.path) {
                return Err(HostError::Save {
                    asset: asset.path.clone(),
                    reason: "read-only".into(),
                });
            }
            self.saved.push(asset.path.clone());
            Ok(())
        }
    }

    const DEST: &str = "/InteractionSystem/Textures";

    #[test]
    fn ui_preset_values() {
        let s = UiTextureSettings::default();
        assert_eq!(s.compression, TextureCompression::EditorIcon);
        assert!(s.srgb);
        assert_eq!(s.mip_gen, MipGeneration::NoMipmaps);
    }

    #[test]
    fn import_applies_ui_settings_and_saves() {
        let mut host = MemoryHost::default();
        let files = [
            PathBuf::from("Textures/T_InteractionDot.png"),
            PathBuf::from("Textures/T_InteractionRing.png"),
        ];

        let report = import_textures_for_ui(&mut host, &files, DEST);

        assert_eq!(
            report,
            BatchReport {
                succeeded: 2,
                failed: 0,
                skipped: 0
            }
        );
        let dot = format!("{DEST}/T_InteractionDot");
        assert_eq!(host.settings(&dot), Some(UiTextureSettings::ui_preset()));
        assert_eq!(
            host.saved,
            vec![dot, format!("{DEST}/T_InteractionRing")]
        );
    }

    #[test]
    fn import_failures_do_not_abort_the_batch() {
        let mut host = MemoryHost::default();
        let files = [
            "broken.png",
            "missing.png",
            "click.wav",
            "T_InteractionRing.png",
        ];

        let report = import_textures_for_ui(&mut host, &files, "/Game/UI/");

        assert_eq!(report.succeeded, 1);
        assert_eq!(report.failed, 3);
        assert_eq!(report.total(), 4);
        assert_eq!(host.saved, vec!["/Game/UI/T_InteractionRing".to_string()]);
        // Non-textures are imported but left untouched.
        assert_eq!(host.settings("/Game/UI/click"), None);
    }

    #[test]
    fn import_errors_name_the_failing_step() {
        let mut host = MemoryHost::default();
        host.read_only.push("/Game/UI/T_Locked".into());

        assert!(matches!(
            import_one(&mut host, Path::new("broken.png"), "/Game/UI"),
            Err(HostError::Import { .. })
        ));
        assert!(matches!(
            import_one(&mut host, Path::new("missing.png"), "/Game/UI"),
            Err(HostError::NotFound { file }) if file == Path::new("missing.png")
        ));
        assert!(matches!(
            import_one(&mut host, Path::new("click.wav"), "/Game/UI"),
            Err(HostError::NotTexture { asset }) if asset == "/Game/UI/click"
        ));
        assert!(matches!(
            import_one(&mut host, Path::new(".."), "/Game/UI"),
            Err(HostError::InvalidName { .. })
        ));
        assert!(matches!(
            import_one(&mut host, Path::new("T_Locked.png"), "/Game/UI"),
            Err(HostError::Save { .. })
        ));
        assert_eq!(
            import_one(&mut host, Path::new("T_Ok.png"), "/Game/UI").unwrap(),
            "/Game/UI/T_Ok"
        );
    }

    #[test]
    fn apply_to_selection_skips_non_textures() {
        let mut host = MemoryHost::default();
        host.insert("/Game/UI/T_A", AssetKind::Texture2D);
        host.insert("/Game/UI/M_B", AssetKind::Other("Material".into()));
        host.insert("/Game/UI/T_C", AssetKind::Texture2D);
        host.read_only.push("/Game/UI/T_C".into());
        host.selection = vec!["/Game/UI/T_A".into(), "/Game/UI/M_B".into(), "/Game/UI/T_C".into()];

        let report = apply_ui_settings_to_selected(&mut host);

        assert_eq!(
            report,
            BatchReport {
                succeeded: 1,
                failed: 1,
                skipped: 1
            }
        );
        assert_eq!(host.settings("/Game/UI/T_A"), Some(UiTextureSettings::ui_preset()));
        assert_eq!(host.settings("/Game/UI/M_B"), None);
        assert_eq!(host.saved, vec!["/Game/UI/T_A".to_string()]);
    }

    #[test]
    fn empty_selection_reports_nothing() {
        let mut host = MemoryHost::default();
        host.insert("/Game/UI/T_A", AssetKind::Texture2D);
        let report = apply_ui_settings_to_selected(&mut host);
        assert_eq!(report, BatchReport::default());
        assert!(host.saved.is_empty());
    }
}
