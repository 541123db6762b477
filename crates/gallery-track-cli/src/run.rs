//! Builds the map scene from the CLI settings and writes it as JSON

use crate::settings::Settings;
use gallery_track_lib::{
    GpxFileConverter, LoadError, LoadOutcome, MapScene, PhotoInfo, TrackConverter, TrackLoader,
    map_markers, utils,
};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid photo list {}: {source}", .path.display())]
    PhotoList {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("File list changed while loading tracks")]
    Superseded,

    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Output document
#[derive(serde::Serialize)]
struct SceneReport<'a> {
    generation: u64,
    total_track_km: f64,
    #[serde(flatten)]
    scene: &'a MapScene,
}

/// Read the photo list, load the tracks and assemble the scene
pub async fn build_scene<C: TrackConverter>(
    settings: &Settings,
    converter: &C,
) -> Result<(MapScene, u64), CliError> {
    let photos = match &settings.photos {
        Some(path) => read_photos(path).await?,
        None => Vec::new(),
    };
    let markers = map_markers(&photos, &settings.marker_config());

    let loader = TrackLoader::new(settings.loader_config());
    loader.set_files(settings.track_files());

    // Nothing else mutates this loader's file list, so Superseded cannot happen here
    let track_set = match loader.load_tracks(converter).await? {
        LoadOutcome::Applied(set) => set,
        LoadOutcome::Superseded => return Err(CliError::Superseded),
    };

    Ok((MapScene::new(markers, &track_set), track_set.generation))
}

async fn read_photos(path: &Path) -> Result<Vec<PhotoInfo>, CliError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| CliError::PhotoList {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize the scene to `out`
#[profiling::function]
pub fn write_scene(
    out: &mut impl Write,
    scene: &MapScene,
    generation: u64,
    pretty: bool,
) -> Result<(), CliError> {
    let report = SceneReport {
        generation,
        total_track_km: scene.tracks.iter().map(|t| utils::path_length_km(t)).sum(),
        scene,
    };
    if pretty {
        serde_json::to_writer_pretty(&mut *out, &report)?;
    } else {
        serde_json::to_writer(&mut *out, &report)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Entry point used by `main`
pub async fn run(settings: Settings) -> Result<(), CliError> {
    tracing::info!(
        "{} {}: {} GPX files, photos: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        settings.gpx_files.len(),
        settings
            .photos
            .as_ref()
            .map_or_else(|| "none".to_string(), |p| p.display().to_string())
    );

    let (scene, generation) = build_scene(&settings, &GpxFileConverter).await?;
    tracing::info!(
        "Scene has {} markers and {} tracks",
        scene.markers.len(),
        scene.tracks.len()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_scene(&mut out, &scene, generation, settings.pretty)
}
