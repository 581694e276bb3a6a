//! Parallel rendering of many shapes.
//!
//! Jobs are independent: each owns its point buffer and rendering shares
//! only read-only options and the projection. Results come back in job
//! order, one per job, whether it succeeded or not.

use crate::project::Projection;
use crate::render::{render_shape, RenderError, RenderOptions, RenderedShape, ShapeJob};
use rayon::prelude::*;
use thiserror::Error;

/// Errors that prevent a batch from running at all.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The dedicated worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Outcome of one job in a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct JobResult {
    /// Name of the job.
    pub name: String,
    /// The rendered shape or the reason it was skipped.
    pub result: Result<RenderedShape, RenderError>,
}

/// Results of a batch run, in job order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// One entry per job.
    pub results: Vec<JobResult>,
}

impl BatchReport {
    /// Number of jobs that rendered.
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.result.is_ok()).count()
    }

    /// Number of jobs that failed.
    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }

    /// Iterates over the rendered shapes.
    pub fn rendered(&self) -> impl Iterator<Item = &RenderedShape> {
        self.results.iter().filter_map(|r| r.result.as_ref().ok())
    }

    /// Iterates over failed jobs as `(name, error)` pairs.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &RenderError)> {
        self.results
            .iter()
            .filter_map(|r| r.result.as_ref().err().map(|e| (r.name.as_str(), e)))
    }
}

/// Renders every job, in parallel.
///
/// With `options.parallelism` set, a dedicated pool of that many threads is
/// used; otherwise jobs run on rayon's global pool. A failing job never
/// stops the others.
///
/// # Errors
///
/// Returns [`BatchError::Pool`] if the dedicated pool cannot be created.
pub fn render_batch<P: Projection + ?Sized>(
    jobs: &[ShapeJob],
    options: &RenderOptions,
    projection: &P,
) -> Result<BatchReport, BatchError> {
    let run = || {
        jobs.par_iter()
            .map(|job| {
                let result = render_shape(job, options, projection);
                if let Err(err) = &result {
                    tracing::warn!(name = %job.name, error = %err, "shape failed");
                }
                JobResult {
                    name: job.name.clone(),
                    result,
                }
            })
            .collect::<Vec<_>>()
    };

    let results = match options.parallelism {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?
            .install(run),
        None => run(),
    };

    let report = BatchReport { results };
    tracing::info!(
        jobs = jobs.len(),
        succeeded = report.succeeded(),
        failed = report.failed(),
        "batch finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Point2;
    use crate::project::Identity;

    fn square_job(name: &str, size: f64) -> ShapeJob {
        ShapeJob::new(
            name,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(size, 0.0),
                Point2::new(size, size),
                Point2::new(0.0, size),
            ],
            vec![],
        )
    }

    #[test]
    fn test_batch_keeps_job_order() {
        let jobs: Vec<ShapeJob> = (1..=20)
            .map(|i| square_job(&format!("shape-{i}"), i as f64))
            .collect();
        let report = render_batch(&jobs, &RenderOptions::default(), &Identity).unwrap();

        assert_eq!(report.results.len(), 20);
        for (job, res) in jobs.iter().zip(&report.results) {
            assert_eq!(job.name, res.name);
        }
        assert_eq!(report.succeeded(), 20);
        assert_eq!(report.failed(), 0);
    }

    #[test]
    fn test_batch_collects_failures() {
        let jobs = vec![
            square_job("ok", 2.0),
            ShapeJob::new("empty", vec![], vec![]),
            square_job("also-ok", 3.0),
        ];
        let options = RenderOptions {
            parallelism: Some(2),
            ..RenderOptions::default()
        };
        let report = render_batch(&jobs, &options, &Identity).unwrap();

        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 1);
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, "empty");
        assert_eq!(report.rendered().count(), 2);
    }

    #[test]
    fn test_batch_empty() {
        let report = render_batch(&[], &RenderOptions::default(), &Identity).unwrap();
        assert!(report.results.is_empty());
    }
}
