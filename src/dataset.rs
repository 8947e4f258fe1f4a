use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::errors::QuerygenError;

const OGB_BASE_URL: &str = "http://snap.stanford.edu/ogb/data/nodeproppred";

/// OGB node-property-prediction datasets the generator knows how to fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dataset {
    OgbnArxiv,
    OgbnProducts,
}

impl Dataset {
    pub fn parse(name: &str) -> Result<Self, String> {
        match name {
            "ogbn-arxiv" => Ok(Dataset::OgbnArxiv),
            "ogbn-products" => Ok(Dataset::OgbnProducts),
            other => Err(format!(
                "unknown dataset '{other}', expected ogbn-arxiv or ogbn-products"
            )),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dataset::OgbnArxiv => "ogbn-arxiv",
            Dataset::OgbnProducts => "ogbn-products",
        }
    }

    /// Top-level directory inside the archive; "ogbn-arxiv" ships as "arxiv.zip".
    pub fn archive_stem(&self) -> &'static str {
        match self {
            Dataset::OgbnArxiv => "arxiv",
            Dataset::OgbnProducts => "products",
        }
    }

    pub fn archive_name(&self) -> String {
        format!("{}.zip", self.archive_stem())
    }
}

#[derive(Clone, Debug)]
pub struct DatasetFiles {
    pub edgelist: PathBuf,
    pub node_features: PathBuf,
}

/// Downloads the dataset archive (skipped when already cached on disk) and
/// decompresses the edge-list and node-feature members next to it.
///
/// These steps are plain collaborators around the sampling core: any failure
/// maps to `ExternalIo` and aborts the invocation, with no retry.
pub fn download_and_extract(
    dataset: Dataset,
    dataset_dir: &Path,
) -> Result<DatasetFiles, QuerygenError> {
    let archive = download_archive(dataset, dataset_dir)?;
    extract_archive(dataset, &archive)
}

fn download_archive(dataset: Dataset, dataset_dir: &Path) -> Result<PathBuf, QuerygenError> {
    let save_dir = dataset_dir.join(dataset.name());
    let save_path = save_dir.join(dataset.archive_name());
    if save_path.exists() {
        println!("'{}' already exists, skipping download", save_path.display());
        return Ok(save_path);
    }
    fs::create_dir_all(&save_dir)
        .map_err(|e| QuerygenError::external_io(format!("{}: {e}", save_dir.display())))?;

    let url = format!("{OGB_BASE_URL}/{}", dataset.archive_name());
    println!(
        "Downloading '{}' from '{url}' to '{}'",
        dataset.name(),
        save_path.display()
    );
    let mut response = reqwest::blocking::get(&url)
        .map_err(|e| QuerygenError::external_io(format!("{url}: {e}")))?;
    if !response.status().is_success() {
        return Err(QuerygenError::external_io(format!(
            "{url}: HTTP {}",
            response.status()
        )));
    }
    let mut file = File::create(&save_path)
        .map_err(|e| QuerygenError::external_io(format!("{}: {e}", save_path.display())))?;
    io::copy(&mut response, &mut file)
        .map_err(|e| QuerygenError::external_io(format!("{}: {e}", save_path.display())))?;
    Ok(save_path)
}

fn extract_archive(dataset: Dataset, archive: &Path) -> Result<DatasetFiles, QuerygenError> {
    let save_dir = archive.parent().unwrap_or_else(|| Path::new("."));
    let file = File::open(archive)
        .map_err(|e| QuerygenError::external_io(format!("{}: {e}", archive.display())))?;
    let mut zip = zip::ZipArchive::new(file)
        .map_err(|e| QuerygenError::external_io(format!("{}: {e}", archive.display())))?;

    let edgelist = extract_member(&mut zip, dataset, "edge.csv", save_dir)?;
    let node_features = extract_member(&mut zip, dataset, "node-feat.csv", save_dir)?;
    Ok(DatasetFiles {
        edgelist,
        node_features,
    })
}

fn extract_member(
    zip: &mut zip::ZipArchive<File>,
    dataset: Dataset,
    file_name: &str,
    save_dir: &Path,
) -> Result<PathBuf, QuerygenError> {
    let member = format!("{}/raw/{file_name}.gz", dataset.archive_stem());
    println!("Extracting '{member}'");
    let entry = zip
        .by_name(&member)
        .map_err(|e| QuerygenError::external_io(format!("{member}: {e}")))?;

    let final_path = save_dir.join(file_name);
    let mut decoder = GzDecoder::new(entry);
    let mut out = File::create(&final_path)
        .map_err(|e| QuerygenError::external_io(format!("{}: {e}", final_path.display())))?;
    io::copy(&mut decoder, &mut out)
        .map_err(|e| QuerygenError::external_io(format!("{member}: {e}")))?;
    Ok(final_path)
}
