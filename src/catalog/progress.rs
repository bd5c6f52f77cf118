//! Simulated render-job progress.
//!
//! The backend is simulated, so job status is produced by a deterministic
//! fixed-step machine instead of wall-clock timers: `queued` becomes
//! `processing` at 0%, each step adds 20%, and a full bar completes on the
//! next step. The machine sits behind the [`JobStatusProvider`] trait so a
//! real backend can replace it without touching the polling UI.

use std::collections::HashMap;
use std::time::Duration;

use super::model::VideoStatus;

/// Progress increment applied per processing step.
const STEP_PERCENT: u8 = 20;

/// Status/progress pair for one render job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobProgress {
    pub status: VideoStatus,
    pub progress: u8,
}

/// Read side of the job machine: what the polling UI consumes.
pub trait JobStatusProvider {
    /// Current progress for a job, or `None` when the job is unknown
    /// (deleted or never enqueued). A stale poll on a removed job must not
    /// resurrect state.
    fn status(&self, job_id: &str) -> Option<JobProgress>;
}

/// Polling cadence for a job in the given status: 3 s while processing,
/// 5 s while queued, stop otherwise.
pub fn poll_interval(status: VideoStatus) -> Option<Duration> {
    match status {
        VideoStatus::Processing => Some(Duration::from_secs(3)),
        VideoStatus::Queued => Some(Duration::from_secs(5)),
        VideoStatus::Completed | VideoStatus::Failed => None,
    }
}

/// Human-readable stage message for a progress snapshot.
pub fn progress_message(status: VideoStatus, progress: u8) -> &'static str {
    match status {
        VideoStatus::Queued => "Waiting in queue...",
        VideoStatus::Processing => {
            if progress < 30 {
                "Analyzing prompt and generating script..."
            } else if progress < 60 {
                "Creating visuals and animations..."
            } else if progress < 90 {
                "Rendering frames and adding effects..."
            } else {
                "Finalizing video and encoding..."
            }
        }
        VideoStatus::Completed => "Video generation complete!",
        VideoStatus::Failed => "Generation failed. Please try again.",
    }
}

// =============================================================================
// SIMULATED JOBS
// =============================================================================

/// Deterministic in-memory job machine keyed by video id.
#[derive(Debug, Default)]
pub struct SimulatedJobs {
    jobs: HashMap<String, JobProgress>,
}

impl SimulatedJobs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new job in the queued state.
    pub fn enqueue(&mut self, job_id: impl Into<String>) {
        self.jobs.insert(
            job_id.into(),
            JobProgress {
                status: VideoStatus::Queued,
                progress: 0,
            },
        );
    }

    /// Drops a job (its video was deleted). Subsequent polls see `None`.
    pub fn remove(&mut self, job_id: &str) {
        self.jobs.remove(job_id);
    }

    /// Number of live (non-terminal) jobs.
    pub fn active_count(&self) -> usize {
        self.jobs
            .values()
            .filter(|j| poll_interval(j.status).is_some())
            .count()
    }

    /// Advances every live job one step and returns the ids that reached
    /// `completed` on this tick, so the owner can finalize their records.
    pub fn tick(&mut self) -> Vec<String> {
        let mut completed = Vec::new();
        for (id, job) in self.jobs.iter_mut() {
            match job.status {
                VideoStatus::Queued => {
                    job.status = VideoStatus::Processing;
                    job.progress = 0;
                }
                VideoStatus::Processing => {
                    if job.progress >= 100 {
                        job.status = VideoStatus::Completed;
                        completed.push(id.clone());
                    } else {
                        job.progress = (job.progress + STEP_PERCENT).min(100);
                    }
                }
                VideoStatus::Completed | VideoStatus::Failed => {}
            }
        }
        completed
    }
}

impl JobStatusProvider for SimulatedJobs {
    fn status(&self, job_id: &str) -> Option<JobProgress> {
        self.jobs.get(job_id).copied()
    }
}

// =============================================================================
// TESTS
// =============================================================================
