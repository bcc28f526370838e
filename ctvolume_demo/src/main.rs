//! # CT Scan Visualizer
//!
//! Turns a directory of CT-scan slice images into a sparse 3-D point
//! cloud and opens a window to fly a free camera through it.
//!
//! Pipeline: enumerate slice files (lexical order) -> decode and ingest
//! every non-black pixel as one point -> run the winit frame loop that
//! feeds input events to the engine's World and draws through the wgpu
//! backend.
//!
//! Exit codes: 0 after a Quit-driven shutdown, -1 on any fatal setup or
//! invariant-violation error.

mod app;
mod options;
mod slices;

use std::fs::File;

use ct_volume_engine::ctvolume::point_cloud::PointCloud;
use ct_volume_engine::ctvolume::volume::{DecodePolicy, IngestOptions, VolumeIngestor};
use ct_volume_engine::log;
use ct_volume_engine::{engine_error, engine_info, CtVolumeError, CtVolumeResult};
use options::{ViewerOptions, USAGE};

const LOG_SOURCE: &str = "ctvolume::demo";

fn main() {
    let options = match ViewerOptions::parse(std::env::args().skip(1)) {
        Ok(Some(options)) => options,
        Ok(None) => {
            println!("{USAGE}");
            return;
        }
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            std::process::exit(-1);
        }
    };

    log::set_min_severity(options.log_level);

    if let Err(error) = run(options) {
        engine_error!(LOG_SOURCE, "{}", error);
        std::process::exit(-1);
    }
}

fn run(options: ViewerOptions) -> CtVolumeResult<()> {
    let paths = slices::enumerate_slices(&options.slice_dir)?;
    if paths.is_empty() {
        return Err(CtVolumeError::ResourceInit(format!(
            "no slice images in '{}'",
            options.slice_dir.display()
        )));
    }
    engine_info!(
        LOG_SOURCE,
        "found {} slices in '{}'",
        paths.len(),
        options.slice_dir.display()
    );

    let sources = slices::FileSliceSource::from_paths(paths);
    let decode_policy = if options.strict_decode {
        DecodePolicy::Fatal
    } else {
        DecodePolicy::Skip
    };
    let ingestor = VolumeIngestor::new(IngestOptions { decode_policy });

    let mut cloud = PointCloud::new();
    ingestor.ingest(&sources, &mut cloud)?;

    if let Some(path) = &options.export_path {
        let mut file = File::create(path).map_err(|e| {
            CtVolumeError::ResourceInit(format!("cannot create export file '{}': {}", path.display(), e))
        })?;
        cloud.export(&mut file).map_err(|e| {
            CtVolumeError::ResourceInit(format!("export to '{}' failed: {}", path.display(), e))
        })?;
        engine_info!(LOG_SOURCE, "exported {} points to '{}'", cloud.len(), path.display());
    }

    app::run(cloud)
}
