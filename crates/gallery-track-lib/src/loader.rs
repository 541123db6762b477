//! TrackLoader - Generation-guarded loading of track files
//!
//! The host hands the loader an ordered list of track files. A load converts
//! each file in turn, simplifies it into an outline and, if the file list was
//! not replaced in the meantime, publishes all results at once.
//!
//! Every call to [`TrackLoader::set_files`] bumps a generation counter. A load
//! captures the generation when it starts and compares it after each
//! conversion; a mismatch means its results are stale and the load stops
//! without touching the published [`TrackSet`].

use crate::{DataError, GeoPoint, OUTLINE_THRESHOLD_KM, TrackConverter, TrackFile, outline};
use std::sync::{Arc, RwLock};

/// Version of the loader's file list
pub type Generation = u64;

/// Configuration for the track loader
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoaderConfig {
    /// Minimum distance between consecutive outline points, in kilometers.
    /// Default: 0.5
    pub outline_threshold_km: f64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            outline_threshold_km: OUTLINE_THRESHOLD_KM,
        }
    }
}

/// Tracks and outlines produced from one generation of the file list
///
/// `tracks[i]` and `outlines[i]` always describe the same file. Files that
/// converted to no points have no entry.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackSet {
    pub generation: Generation,
    pub tracks: Vec<Vec<GeoPoint>>,
    pub outlines: Vec<Vec<GeoPoint>>,
}

impl TrackSet {
    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Total number of full-resolution points
    pub fn total_points(&self) -> usize {
        self.tracks.iter().map(Vec::len).sum()
    }
}

/// Result of a load that did not fail
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// The load finished and its results are now published
    Applied(Arc<TrackSet>),
    /// The file list was replaced while loading; nothing was published
    Superseded,
}

impl LoadOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Error returned when a load fails
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to convert track file #{index} ({}): {source}", .file.path().display())]
    Conversion {
        index: usize,
        file: TrackFile,
        #[source]
        source: DataError,
    },
}

#[derive(Debug, Default)]
struct LoaderState {
    files: Arc<[TrackFile]>,
    generation: Generation,
    published: Arc<TrackSet>,
}

/// Loads track files and publishes their tracks and outlines
#[derive(Debug)]
pub struct TrackLoader {
    config: LoaderConfig,
    state: RwLock<LoaderState>,
}

impl TrackLoader {
    /// Create a loader with an empty file list
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            state: RwLock::new(LoaderState::default()),
        }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Replace the file list, invalidating any load in flight
    ///
    /// Returns the new generation.
    pub fn set_files(&self, files: impl Into<Arc<[TrackFile]>>) -> Generation {
        let mut state = self.write_state();
        state.files = files.into();
        state.generation += 1;
        tracing::debug!(
            "File list replaced with {} files (generation {})",
            state.files.len(),
            state.generation
        );
        state.generation
    }

    /// Current file list
    pub fn files(&self) -> Arc<[TrackFile]> {
        self.read_state().files.clone()
    }

    /// Current generation of the file list
    pub fn generation(&self) -> Generation {
        self.read_state().generation
    }

    /// Results of the last load that completed without being superseded
    pub fn published(&self) -> Arc<TrackSet> {
        self.read_state().published.clone()
    }

    /// Load the current file list
    ///
    /// Files are converted sequentially, in order. After every conversion the
    /// generation is checked again; if the file list was replaced, the load is
    /// abandoned and [`LoadOutcome::Superseded`] is returned. A conversion
    /// failure aborts the load. In both cases the published set is unchanged.
    pub async fn load_tracks<C: TrackConverter>(
        &self,
        converter: &C,
    ) -> Result<LoadOutcome, LoadError> {
        let (files, generation) = {
            let state = self.read_state();
            (state.files.clone(), state.generation)
        };

        let threshold_km = self.config.outline_threshold_km;
        let mut tracks = Vec::with_capacity(files.len());
        let mut outlines = Vec::with_capacity(files.len());

        for (index, file) in files.iter().enumerate() {
            let result = converter.convert(file).await;

            if self.generation() != generation {
                tracing::debug!(
                    "Abandoning load of generation {} at file #{}: file list changed",
                    generation,
                    index
                );
                return Ok(LoadOutcome::Superseded);
            }

            let track = result.map_err(|source| LoadError::Conversion {
                index,
                file: file.clone(),
                source,
            })?;

            if track.is_empty() {
                tracing::debug!("Skipping {}: no track points", file.path().display());
                continue;
            }

            outlines.push(outline(&track, threshold_km));
            tracks.push(track);
        }

        let set = Arc::new(TrackSet {
            generation,
            tracks,
            outlines,
        });

        // Check and publish under one lock so a concurrent set_files cannot slip in between
        let mut state = self.write_state();
        if state.generation != generation {
            tracing::debug!(
                "Discarding finished load of generation {}: file list changed",
                generation
            );
            return Ok(LoadOutcome::Superseded);
        }
        state.published = set.clone();
        drop(state);

        tracing::info!(
            "Loaded {} tracks ({} points) from {} files",
            set.len(),
            set.total_points(),
            files.len()
        );
        Ok(LoadOutcome::Applied(set))
    }

    // The state is only mutated by plain assignments, so a poisoned lock still holds consistent data
    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, LoaderState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, LoaderState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for TrackLoader {
    fn default() -> Self {
        Self::new(LoaderConfig::default())
    }
}
