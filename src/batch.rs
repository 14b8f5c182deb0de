//! Running the compositor over many images without letting one bad image stop the rest.

use crate::{
    canvas::CanvasSpec,
    cf_err,
    compose::compose,
    decode::check_extension,
    error::{CanvasError, ComposeError},
    image::OutputImage,
    utils::filename::UniqueNames,
};

/// Cap on the combined size of all inputs in one batch: 100 MiB.
pub const DEFAULT_MAX_TOTAL_BYTES: u64 = 100 * 1024 * 1024;

/// One named input image, still encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// File name the image was submitted under; used for the output name and in reports.
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Inputs collected for one run, with their combined size kept under a cap.
#[derive(Debug)]
pub struct Batch {
    jobs: Vec<Job>,
    total_bytes: u64,
    max_total_bytes: u64,
}

impl Batch {
    pub fn new(max_total_bytes: u64) -> Self {
        Self {
            jobs: Vec::new(),
            total_bytes: 0,
            max_total_bytes,
        }
    }

    /// Adds a job, or fails for the whole batch if it pushes the total over the cap.
    pub fn push(&mut self, job: Job) -> Result<(), CanvasError> {
        let total = self.total_bytes + job.bytes.len() as u64;
        ensure_within_limit(total, self.max_total_bytes)?;
        self.total_bytes = total;
        self.jobs.push(job);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Composes every job in order, collecting results and failures.
    pub fn run(self, spec: &CanvasSpec) -> BatchReport {
        let total = self.jobs.len();
        let mut report = BatchReport::default();
        let mut names = UniqueNames::new();

        for (i, job) in self.jobs.into_iter().enumerate() {
            log::info!("Processing file {}/{}: {}", i + 1, total, job.name);
            let result = check_extension(&job.name).and_then(|()| compose(&job.bytes, spec));
            match result {
                Ok(image) => {
                    let file_name = names.claim(&image.file_name(&job.name));
                    log::info!(
                        "Processed: {} -> {} ({edge}x{edge})",
                        job.name,
                        file_name,
                        edge = image.edge_length
                    );
                    report.processed.push(Processed { file_name, image });
                }
                Err(error) => {
                    log::warn!("{}: {} ({error})", job.name, error.reason());
                    report.skipped.push(Skipped {
                        name: job.name,
                        error,
                    });
                }
            }
        }

        log::info!(
            "Processing complete: {} processed, {} skipped",
            report.processed.len(),
            report.skipped.len()
        );
        report
    }
}

/// Fails if `total_bytes` is over `max_total_bytes`.
pub fn ensure_within_limit(total_bytes: u64, max_total_bytes: u64) -> Result<(), CanvasError> {
    if total_bytes > max_total_bytes {
        Err(cf_err!(
            "total input size of {total_bytes} bytes exceeds the limit of {max_total_bytes} bytes"
        ))
    } else {
        Ok(())
    }
}

/// An image that made it onto a canvas, with the name to save it under.
#[derive(Debug, Clone)]
pub struct Processed {
    pub file_name: String,
    pub image: OutputImage,
}

/// An image that was left out, and why.
#[derive(Debug)]
pub struct Skipped {
    pub name: String,
    pub error: ComposeError,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub processed: Vec<Processed>,
    pub skipped: Vec<Skipped>,
}
